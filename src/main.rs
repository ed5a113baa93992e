use minicalc::cli::{self, Mode};
use minicalc::{repl, runner};

fn main() {
    let matches = cli::command().get_matches();

    match cli::mode(&matches) {
        Mode::OneShot(expression) => {
            if !runner::run(&expression, Some("<arg>")) {
                std::process::exit(1);
            }
        }
        Mode::Repl(options) => repl::start(options),
    }
}
