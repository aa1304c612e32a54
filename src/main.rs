//! Prints nullability-derived facts, FIRST sets or FOLLOW sets of a grammar.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{info, warn};

use cfg_sets::report;
use cfg_sets::{Derivability, FirstSets, FollowSets, Grammar, Usefulness};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum Task {
    /// Print the grammar and its symbols
    #[value(alias = "0")]
    Grammar,
    /// Whether each non-terminal derives a one-token string
    #[value(alias = "1")]
    OneToken,
    /// FIRST sets of every non-terminal
    #[value(alias = "2")]
    First,
    /// FOLLOW sets of every non-terminal
    #[value(alias = "3")]
    Follow,
}

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// What to compute
    #[arg(value_enum)]
    task: Task,

    /// File containing the grammar (default: standard input)
    file: Option<PathBuf>,

    /// Also list unreachable and unproductive non-terminals
    #[arg(short, long)]
    useless: bool,
}

fn read_input(file: Option<&PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn run(cli: &Cli, grammar: &Grammar) -> String {
    let output = match cli.task {
        Task::Grammar => grammar.to_string(),
        Task::OneToken => report::one_token_report(grammar, &Derivability::new(grammar)),
        Task::First => report::first_report(grammar, &FirstSets::new(grammar)),
        Task::Follow => {
            let first_sets = FirstSets::new(grammar);
            report::follow_report(grammar, &FollowSets::new(grammar, &first_sets))
        }
    };

    let useless = Usefulness::new(grammar).useless_symbols();
    for entry in &useless {
        warn!(
            "non-terminal {} is useless (unreachable: {}, unproductive: {})",
            grammar.symbols().name(entry.sym),
            entry.unreachable,
            entry.unproductive
        );
    }
    if cli.useless {
        output + &report::useless_report(grammar, &useless)
    } else {
        output
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let input = match read_input(cli.file.as_ref()) {
        Ok(input) => input,
        Err(error) => {
            eprintln!("Error: could not read grammar: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let grammar = match Grammar::load(&input) {
        Ok(grammar) => grammar,
        Err(error) => {
            println!("Error: {}", error);
            return ExitCode::FAILURE;
        }
    };
    info!("running {:?} on {} rules", cli.task, grammar.rules().len());

    print!("{}", run(&cli, &grammar));
    ExitCode::SUCCESS
}
