use crate::evaluator::eval;
use crate::lexer::{Lexer, TokenKind};
use crate::parser::Parser;
use std::io::{self, BufRead, Write};

/// Interactive read-eval-print loop: one lex/parse/evaluate cycle per input
/// line. All per-cycle state (tokens, tree) is owned locally and released at
/// the end of each iteration, on the error paths included.
pub fn start() {
    println!("calc - a simple command line calculator");
    println!("Type 'exit' to quit");
    println!();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                // EOF (Ctrl+D or piped input ended)
                println!();
                break;
            }
            Ok(_) => {
                // Only the line terminator is stripped. Interior whitespace
                // is significant to the lexer, and 'exit' must match the
                // whole line exactly.
                let line = line.trim_end_matches(['\n', '\r']);
                if line == "exit" {
                    break;
                }

                run_cycle(line);
            }
            Err(error) => {
                eprintln!("Error reading input: {}", error);
                break;
            }
        }
    }
}

fn run_cycle(source: &str) {
    let tokens = Lexer::new(source.to_string()).scan_tokens();

    // An empty line lexes to a lone Eof token: print nothing, diagnose
    // nothing.
    if tokens[0].kind == TokenKind::Eof {
        return;
    }

    let (expr, diagnostics) = Parser::new(tokens).parse();

    if !diagnostics.is_empty() {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for diagnostic in &diagnostics {
            diagnostic.render(source, &mut out).unwrap();
        }
    }

    if expr.valid {
        match eval(&expr) {
            Ok(value) => println!("{}", value),
            Err(error) => println!("error: {}", error),
        }
    }
}
