use std::{env, fs::read_to_string, process::ExitCode};

use kaleidoscope::parser::parser::Parser;

/// Parses each line of a source file as one top-level item and dumps
/// the resulting trees, or the collected diagnostics for lines that do
/// not parse. Operator declarations on earlier lines apply to later
/// ones, the same way an interactive session would see them.
fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: kaleidoscope <file>");
        return ExitCode::FAILURE;
    }

    let contents = match read_to_string(&args[1]) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("failed to read {}: {}", args[1], error);
            return ExitCode::FAILURE;
        }
    };

    let mut parser = Parser::new(Some(args[1].clone()));
    let mut failed = false;

    for line in contents.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parser.parse_item(line) {
            Ok(item) => println!("{}", item),
            Err(error) => {
                eprintln!("{}", error);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
