use calc::{repl, runner};
use clap::{Arg, Command};
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let matches = Command::new("calc")
        .about("An interactive arithmetic expression evaluator")
        .arg(
            Arg::new("file")
                .help("Evaluate expressions from a file, one per line")
                .value_name("FILE")
                .index(1),
        )
        .arg(
            Arg::new("eval")
                .short('e')
                .long("eval")
                .help("Evaluate a single expression and exit")
                .value_name("EXPR")
                .allow_hyphen_values(true),
        )
        .get_matches();

    if let Some(expression) = matches.get_one::<String>("eval") {
        if !runner::run(expression, None) {
            process::exit(1);
        }
    } else if let Some(file_path) = matches.get_one::<String>("file") {
        run_file(file_path);
    } else {
        repl::start();
    }
}

fn run_file(path: &str) {
    let path = Path::new(path);

    match fs::read_to_string(path) {
        Ok(source) => {
            if !runner::run(&source, path.to_str()) {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}
