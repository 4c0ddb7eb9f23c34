//! SafeInput demo - runs every prompt once over standard input.
//!
//! Exit codes:
//! - 0: Session completed
//! - 1: Input ran out or the terminal failed

use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use safeinput::utils::{Terminal, TerminalResult};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Walks through every validated prompt and echoes the answers.
#[derive(Parser, Debug)]
#[command(name = "safeinput", version, about)]
struct Cli {
    /// Skip the closing banner
    #[arg(long)]
    no_header: bool,

    /// Log rejected and accepted answers to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "safeinput=debug" } else { "safeinput=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let mut terminal = Terminal::stdio();

    match demo(&mut terminal, !cli.no_header) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\nError: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn demo<R: BufRead, W: Write>(t: &mut Terminal<R, W>, header: bool) -> TerminalResult<()> {
    let first_name = t.read_non_empty_line("Enter your first name")?;
    writeln!(t.output_mut(), "First Name: {}", first_name)?;

    let age = t.read_int("Enter your age")?;
    writeln!(t.output_mut(), "Age: {}", age)?;

    let salary = t.read_double("Enter your salary")?;
    writeln!(t.output_mut(), "Salary: {:?}", salary)?;

    let ranged_int = t.read_ranged_int("Enter an integer between 1 and 10", 1, 10)?;
    writeln!(t.output_mut(), "Ranged Int: {}", ranged_int)?;

    let ranged_double = t.read_ranged_double("Enter a double between 0.5 and 5.5", 0.5, 5.5)?;
    writeln!(t.output_mut(), "Ranged Double: {:?}", ranged_double)?;

    let confirm = t.read_yes_no("Do you want to continue?")?;
    writeln!(t.output_mut(), "YN Confirm: {}", if confirm { "Yes" } else { "No" })?;

    let letters = t.read_matching_string(
        "Enter a string that matches the pattern [A-Za-z]+",
        "[A-Za-z]+",
    )?;
    writeln!(t.output_mut(), "RegEx String: {}", letters)?;

    let last_name = t.read_non_empty_line("Enter your last name")?;
    writeln!(t.output_mut(), "\nYour full name is: {} {}", first_name, last_name)?;

    let favorite_int = t.read_int("Enter your favorite integer")?;
    let favorite_double = t.read_double("Enter your favorite double")?;
    writeln!(
        t.output_mut(),
        "Your favorite numbers are: {} (integer) and {:?} (double).",
        favorite_int, favorite_double
    )?;

    let ssn = t.read_matching_string("Enter your SSN (XXX-XX-XXXX)", r"^\d{3}-\d{2}-\d{4}$")?;
    writeln!(t.output_mut(), "SSN: {}", ssn)?;

    let m_number = t.read_matching_string("Enter your UC Student M Number", r"^(M|m)\d{5}$")?;
    writeln!(t.output_mut(), "UC Student M Number: {}", m_number)?;

    let menu_choice = t.read_matching_string(
        "Enter your menu choice (Open, Save, View, Quit)",
        "^[OoSsVvQq]$",
    )?;
    writeln!(t.output_mut(), "Menu Choice: {}", menu_choice)?;

    if header {
        t.print_centered_header("Message Centered Here")?;
    }

    Ok(())
}
