use crate::evaluator::eval;
use crate::lexer::{Lexer, TokenKind};
use crate::parser::Parser;

/// Non-interactive runner for file and --eval modes: evaluates `source`
/// line by line, printing one result per non-empty line. Diagnostics go
/// through ariadne with the given filename. Returns false if any line
/// failed; remaining lines are still processed.
pub fn run(source: &str, filename: Option<&str>) -> bool {
    let filename = filename.unwrap_or("<eval>");
    let mut ok = true;
    let mut offset = 0;

    for line in source.lines() {
        if !run_line(line, source, filename, offset) {
            ok = false;
        }
        offset += line.len() + 1;
    }

    ok
}

fn run_line(line: &str, source: &str, filename: &str, offset: usize) -> bool {
    let tokens = Lexer::new(line.to_string()).scan_tokens();
    if tokens[0].kind == TokenKind::Eof {
        return true;
    }

    let (expr, diagnostics) = Parser::new(tokens).parse();

    if !expr.valid {
        for diagnostic in &diagnostics {
            diagnostic.report(source, filename, offset);
        }
        return false;
    }

    match eval(&expr) {
        Ok(value) => {
            println!("{}", value);
            true
        }
        Err(error) => {
            eprintln!("error: {}", error);
            false
        }
    }
}
