use clap::{Arg, ArgMatches, Command};

use crate::repl::Options;

/// What the binary should do with its command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    OneShot(String),
    Repl(Options),
}

pub fn command() -> Command {
    Command::new("minicalc")
        .about("A line-at-a-time integer calculator")
        .arg(
            Arg::new("expression")
                .help("Evaluate a single expression and exit")
                .value_name("EXPRESSION")
                .index(1)
                // Lines such as `-2*3` start with a hyphen.
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Start in interactive REPL mode")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-tree")
                .long("no-tree")
                .help("Do not print the syntax tree of each line")
                .action(clap::ArgAction::SetTrue),
        )
}

pub fn mode(matches: &ArgMatches) -> Mode {
    let options = Options {
        show_tree: !matches.get_flag("no-tree"),
    };

    match matches.get_one::<String>("expression") {
        Some(expression) if !matches.get_flag("interactive") => Mode::OneShot(expression.clone()),
        _ => Mode::Repl(options),
    }
}
