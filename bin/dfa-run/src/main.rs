use std::process::ExitCode;

use dfa_sim::prelude::*;
use owo_colors::OwoColorize;
use thiserror::Error;

use tracing::{debug, error, info, trace};
use tracing_subscriber::{filter, prelude::*};

use clap::{Arg, ArgMatches, Command};

#[derive(Debug, Error)]
enum CliError {
    #[error("could not load {path}: {source}")]
    Load {
        path: String,
        source: FormatError<String, char>,
    },
    #[error("cannot process `{word}`: {source}")]
    Run {
        word: String,
        source: RunError<String, char>,
    },
    #[error(transparent)]
    Definition(#[from] DefinitionError<String, char>),
    #[error(transparent)]
    Malformed(#[from] Malformed),
}

fn cli() -> clap::Command {
    let file = Arg::new("file")
        .required(true)
        .help("automaton in canonical text format");

    Command::new("dfa-run")
        .about("Deterministic finite automata simulation")
        .subcommand_required(true)
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .num_args(0..=1)
                .require_equals(true)
                .value_parser(["info", "debug", "trace"])
                .default_missing_value("info"),
        )
        .subcommand(
            Command::new("demo")
                .about("runs sample words on an automaton accepting words with three consecutive 0s"),
        )
        .subcommand(
            Command::new("run")
                .about("reads an automaton from a file and decides whether it accepts the given words")
                .arg(file.clone())
                .arg(Arg::new("words").num_args(0..).help("words to run, one symbol per character")),
        )
        .subcommand(
            Command::new("check")
                .about("validates an automaton and reports undefined transitions")
                .arg(file.clone()),
        )
        .subcommand(
            Command::new("fmt")
                .about("prints an automaton in canonical form")
                .arg(file),
        )
}

fn setup_logging(matches: &ArgMatches) {
    let level = match matches
        .try_get_one::<String>("verbosity")
        .ok()
        .flatten()
        .map(|m| m.as_str())
    {
        Some("trace") => filter::LevelFilter::TRACE,
        Some("debug") => filter::LevelFilter::DEBUG,
        Some("info") => filter::LevelFilter::INFO,
        _ => filter::LevelFilter::INFO,
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

/// Accepts exactly the words over `{0, 1}` that contain three consecutive zeros.
fn three_zeros() -> Result<Dfa, CliError> {
    let name = |q: &str| q.to_string();
    Ok(Dfa::new(
        ["q1", "q2", "q3", "q4"].map(name),
        ['0', '1'],
        [
            ("q1", '0', "q2"),
            ("q1", '1', "q1"),
            ("q2", '0', "q3"),
            ("q2", '1', "q1"),
            ("q3", '0', "q4"),
            ("q3", '1', "q1"),
            ("q4", '0', "q4"),
            ("q4", '1', "q4"),
        ]
        .map(|(p, a, q)| (name(p), a, name(q))),
        name("q1"),
        [name("q4")],
    )?)
}

fn load(matches: &ArgMatches) -> Result<Dfa, CliError> {
    let path = matches
        .get_one::<String>("file")
        .expect("file is a required argument");
    debug!("loading automaton from {path}");
    Dfa::from_path(path).map_err(|source| CliError::Load {
        path: path.clone(),
        source,
    })
}

fn report<'a>(dfa: &Dfa, words: impl IntoIterator<Item = &'a str>) -> Result<(), CliError> {
    for word in words {
        let start = std::time::Instant::now();
        let accepted = dfa.accepts(word).map_err(|source| CliError::Run {
            word: word.to_string(),
            source,
        })?;
        debug!("deciding `{word}` took {}µs", start.elapsed().as_micros());

        let verdict = if accepted {
            "accepted".green().to_string()
        } else {
            "rejected".red().to_string()
        };
        println!("{:?}\t{verdict}", word);
    }
    Ok(())
}

fn execute(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some(("demo", _)) => {
            let dfa = three_zeros()?;
            println!("{dfa:?}");
            report(&dfa, ["01000", "0101", "", "000"])
        }
        Some(("run", sub_matches)) => {
            let dfa = load(sub_matches)?;
            info!("loaded automaton with {} states", dfa.size());
            let words = sub_matches
                .get_many::<String>("words")
                .unwrap_or_default()
                .map(String::as_str);
            report(&dfa, words)
        }
        Some(("check", sub_matches)) => {
            let dfa = load(sub_matches)?;
            println!("{dfa:?}");
            let missing = dfa.missing_transitions();
            if missing.is_empty() {
                println!("{}", "transition function is total".green());
            } else {
                println!(
                    "{}",
                    format!("{} transitions are undefined:", missing.len()).yellow()
                );
                for (state, symbol) in missing {
                    println!("  ({state}, {symbol})");
                }
            }
            Ok(())
        }
        Some(("fmt", sub_matches)) => {
            print!("{}", load(sub_matches)?.to_text()?);
            Ok(())
        }
        _ => unreachable!(),
    }
}

pub fn main() -> ExitCode {
    let matches = cli().get_matches();

    setup_logging(&matches);

    match execute(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{}", e.red());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn demo_automaton() {
        let dfa = three_zeros().unwrap();
        assert_eq!(dfa.accepts("01000"), Ok(true));
        assert_eq!(dfa.accepts("0101"), Ok(false));
        assert_eq!(dfa.accepts(""), Ok(false));
        assert_eq!(dfa.accepts("000"), Ok(true));
    }

    #[test]
    fn run_subcommand_arguments() {
        let matches = cli()
            .try_get_matches_from(["dfa-run", "-v=debug", "run", "machine.dfa", "0100", "11"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "run");
        assert_eq!(sub.get_one::<String>("file").unwrap(), "machine.dfa");
        assert_eq!(
            sub.get_many::<String>("words")
                .unwrap()
                .map(String::as_str)
                .collect::<Vec<_>>(),
            vec!["0100", "11"]
        );
    }
}
