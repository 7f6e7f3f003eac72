use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use numex::{eval_source, interpreter::evaluator::Evaluator};

/// numex is a line-oriented interpreter for arithmetic expressions with
/// variables and math functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as a file and evaluate it line by line.
    #[arg(short, long)]
    file: bool,

    /// Expression (or file path with --file) to evaluate; omit it for an
    /// interactive prompt.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut evaluator = Evaluator::new();

    let Some(contents) = args.contents else {
        repl(&mut evaluator);
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    for line in script.lines().filter(|line| !line.trim().is_empty()) {
        match eval_source(line, &mut evaluator) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }
}

fn repl(evaluator: &mut Evaluator) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            return;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {},
        }
        if line.trim().is_empty() {
            continue;
        }

        match eval_source(&line, evaluator) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
