use crate::config::MergeConfig;
use crate::merge::{inspect_inputs, run_merge};

const USAGE: &str = "usage: cinemerge [merge [catalog] [directors] [output] | inspect [catalog] [directors] | help]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Merge,
    Inspect,
    Help,
}

/// A bare invocation is a merge with the configured paths.
pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        None | Some("merge") => Some(Command::Merge),
        Some("inspect") => Some(Command::Inspect),
        Some("help" | "--help" | "-h") => Some(Command::Help),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Merge) => handle_merge(args),
        Some(Command::Inspect) => handle_inspect(args),
        Some(Command::Help) => {
            println!("{USAGE}");
            0
        }
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

fn config_from_args(args: &[String]) -> MergeConfig {
    MergeConfig::from_env().with_args(args.get(2..).unwrap_or_default())
}

fn handle_merge(args: &[String]) -> i32 {
    let config = config_from_args(args);
    match run_merge(&config) {
        Ok(report) => {
            println!(
                "movies merged: entries={}, output='{}'",
                report.entries,
                config.output_path.display()
            );
            0
        }
        Err(err) => {
            eprintln!("merge failed: {err}");
            1
        }
    }
}

fn handle_inspect(args: &[String]) -> i32 {
    let config = config_from_args(args);
    let report = match inspect_inputs(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("inspect failed: {err}");
            return 1;
        }
    };
    match serde_json::to_string_pretty(&report) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize inspect report: {err}");
            1
        }
    }
}
