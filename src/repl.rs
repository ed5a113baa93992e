use ariadne::{Color, Fmt};
use std::io::{self, Write};

use crate::ast::SyntaxTree;
use crate::runner::evaluate_tree;

/// Settings taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub show_tree: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { show_tree: true }
    }
}

/// Reads one line at a time until EOF or a blank line. No state is carried
/// from one line to the next.
pub fn start(options: Options) {
    println!("minicalc v0.1.0");
    println!("Enter an empty line or press Ctrl+D to quit");
    println!();

    loop {
        print!("> ");
        if let Err(error) = io::stdout().flush() {
            eprintln!("Error writing prompt: {}", error);
            break;
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {
                if line.trim().is_empty() {
                    break;
                }
                let source = line.trim_end_matches(&['\r', '\n'][..]);
                run_repl_command(source, options);
            }
            Err(error) => {
                eprintln!("Error reading input: {}", error);
                break;
            }
        }
    }
}

fn run_repl_command(source: &str, options: Options) {
    let tree = SyntaxTree::parse(source);

    if options.show_tree {
        print!("{}", tree.to_string().fg(Color::Green));
    }

    if tree.has_errors() {
        for diagnostic in &tree.diagnostics {
            println!("{}", diagnostic.to_string().fg(Color::Red));
            if let Err(error) = diagnostic.report(source, None) {
                eprintln!("Error writing report: {}", error);
            }
        }
        return;
    }

    match evaluate_tree(&tree) {
        Ok(value) => println!("result is {}", value),
        Err(fault) => {
            if let Err(error) = fault.report(source, None) {
                eprintln!("Error writing report: {}", error);
            }
        }
    }
}
