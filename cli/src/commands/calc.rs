//! Calc command - one arithmetic operation.

use common::AppResult;
use domain::calculator;

use crate::args::{CalcArgs, CalcOp};

/// Execute the calc command
pub fn execute(args: CalcArgs) -> AppResult<()> {
    let result = evaluate(&args)?;
    println!("{}", result);
    Ok(())
}

fn evaluate(args: &CalcArgs) -> AppResult<f64> {
    let result = match args.op {
        CalcOp::Add => calculator::add(args.a, args.b),
        CalcOp::Subtract => calculator::subtract(args.a, args.b),
        CalcOp::Multiply => calculator::multiply(args.a, args.b),
        CalcOp::Divide => calculator::divide(args.a, args.b)?,
    };
    Ok(result)
}
