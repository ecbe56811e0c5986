use std::{fs, io};

use clap::Parser;
use falsey::{
    interpreter::{
        evaluator::core::{DEFAULT_MAX_CALL_DEPTH, RunOptions},
        lexer::tokenize,
    },
    run,
};

/// falsey runs programs written in a tiny stack-based language where every
/// operator is a single character.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells falsey to read the program from a file instead of taking it
    /// inline.
    #[arg(short, long)]
    file: bool,

    /// Maximum nesting depth of function calls before the run is aborted.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_depth: usize,

    /// Print the token stream instead of running the program.
    #[arg(long)]
    tokens: bool,

    contents: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if args.tokens {
        match tokenize(&source) {
            Ok(tokens) => tokens.iter()
                                .for_each(|token| println!("{}", token.render(&source))),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let options = RunOptions { max_call_depth: args.max_depth };
    if let Err(e) = run(&source, io::stdin().lock(), io::stdout().lock(), options) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
