//! Monkey interpreter CLI

use std::io::{BufWriter, Write};

use monkeyc::commands::{lex_file, parse_file, run_file, run_repl};
use monkeyc::{init_tracing, DriverError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map_or("repl", String::as_str);

    let result = match command {
        "repl" => repl(),
        "run" | "parse" | "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey {command} <file>");
                std::process::exit(1);
            };
            match command {
                "run" => run_file(path),
                "parse" => parse_file(path),
                _ => lex_file(path),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("Monkey {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn repl() -> Result<(), DriverError> {
    let stdin = std::io::stdin();
    let mut stdout = BufWriter::new(std::io::stdout());
    let mut interpreter = monkey_eval::Interpreter::new();
    println!("Monkey {}. Ctrl-D to exit.", env!("CARGO_PKG_VERSION"));
    run_repl(stdin.lock(), &mut stdout, &mut interpreter)?;
    stdout.flush()?;
    Ok(())
}

fn print_usage() {
    println!("Monkey interpreter");
    println!();
    println!("Usage: monkey <command> [options]");
    println!();
    println!("Commands:");
    println!("  repl           Start the interactive prompt (default)");
    println!("  run <file>     Evaluate a file");
    println!("  parse <file>   Print the canonical form of each statement");
    println!("  lex <file>     Print the token stream");
    println!("  help           Show this message");
    println!("  version        Show version");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=monkey_eval=debug) for tracing output.");
}
