//! exprvisit demo
//!
//! Builds the sample trees and prints what each visitor makes of them.

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use exprvisit::{samples, CanonVisitor, Dispatch, EvalContext, EvalVisitor, RpnVisitor};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "exprvisit", version)]
struct Cli {
    /// Which visitor to run over the samples.
    #[arg(long, value_enum, default_value_t = VisitorKind::All)]
    visitor: VisitorKind,

    /// Evaluator nesting limit.
    #[arg(long, default_value_t = exprvisit::context::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Emit a trace event for every evaluated node.
    #[arg(long, default_value_t = false)]
    trace: bool,

    /// Stop with an error on the first failed evaluation.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum VisitorKind {
    /// Postfix rendering
    Rpn,
    /// Fully-parenthesized rendering
    Canon,
    /// Evaluation
    Eval,
    /// All of the above
    All,
}

impl VisitorKind {
    fn includes(self, other: VisitorKind) -> bool {
        self == VisitorKind::All || self == other
    }
}

fn init_tracing(trace: bool) {
    let default = if trace { "exprvisit=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let ctx = EvalContext::with_max_depth(cli.max_depth).with_trace(cli.trace);

    for sample in samples::all() {
        println!("{}:", sample.name);

        if cli.visitor.includes(VisitorKind::Rpn) {
            println!("  rpn:   {}", sample.expr.dispatch(&mut RpnVisitor::new()));
        }
        if cli.visitor.includes(VisitorKind::Canon) {
            println!("  canon: {}", sample.expr.dispatch(&mut CanonVisitor::new()));
        }
        if cli.visitor.includes(VisitorKind::Eval) {
            let mut eval = EvalVisitor::with_context(ctx.clone());
            let result = sample.expr.dispatch(&mut eval);
            if cli.strict {
                let value =
                    result.with_context(|| format!("evaluating sample `{}`", sample.name))?;
                println!("  eval:  {}", value);
            } else {
                match result {
                    Ok(value) => println!("  eval:  {}", value),
                    Err(err) => println!("  eval:  error: {}", err),
                }
            }
        }
    }

    Ok(())
}
