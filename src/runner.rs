use crate::ast::SyntaxTree;
use crate::binder::bind;
use crate::error::{CalcError, Fault};
use crate::evaluator::evaluate;

/// Binds and evaluates an already parsed line. Callers must check the
/// tree's diagnostics first; a tree with errors may hold placeholders.
pub fn evaluate_tree(tree: &SyntaxTree) -> Result<i32, Fault> {
    let bound = bind(&tree.root)?;
    let value = evaluate(&bound)?;
    Ok(value)
}

/// Runs the whole pipeline over one line of input.
pub fn evaluate_line(source: &str) -> Result<i32, CalcError> {
    let tree = SyntaxTree::parse(source);
    if tree.has_errors() {
        return Err(CalcError::Diagnostics(tree.diagnostics));
    }

    Ok(evaluate_tree(&tree)?)
}

/// One-shot mode: evaluates `source`, printing the result or reporting
/// what went wrong. Returns whether a value was produced.
pub fn run(source: &str, filename: Option<&str>) -> bool {
    match evaluate_line(source) {
        Ok(value) => {
            println!("{}", value);
            true
        }
        Err(error) => {
            if let Err(io_error) = error.report(source, filename) {
                eprintln!("Error writing report: {}", io_error);
            }
            false
        }
    }
}
