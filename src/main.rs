use std::io::{self, BufRead, Write};

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use ohmtrace::cli;
use ohmtrace::logging::{self, Verbosity};
use ohmtrace::ohms_law;
use ohmtrace::output::{OutputFormatter, Report};
use ohmtrace::{Session, UnknownCount};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let settings = args.settings()?;
    let circuit = args.circuit.trim();
    let session = Session::open_with(circuit, &settings.evaluator())
        .with_context(|| format!("Failed to evaluate circuit: {circuit}"))?;

    let solution = match session.unknowns() {
        UnknownCount::Zero => None,
        _ if args.measured.is_empty() => {
            session.solve_with_retry(prompt_measurements(), settings.max_attempts)?
        }
        _ => session.solve_with_retry(args.measured.iter().copied(), settings.max_attempts)?,
    };

    let electrical = if args.current.is_some() || args.voltage.is_some() {
        let resistance = session.equivalent_resistance(solution.as_ref());
        Some(ohms_law::complete(resistance, args.current, args.voltage)?)
    } else {
        None
    };

    let report = Report::new(&session, solution, electrical);
    let output = OutputFormatter::format(&report, args.format, settings.precision)?;

    match &args.output_file {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("Failed to write output: {}", path.display()))?,
        None => println!("{output}"),
    }

    Ok(())
}

/// Reads measured totals from stdin, one per prompt. Lines that are not a
/// number become NaN so the solver rejects them as a failed attempt.
fn prompt_measurements() -> impl Iterator<Item = f64> {
    let stdin = io::stdin();
    std::iter::from_fn(move || {
        eprint!("Measured total resistance (Req): ");
        // An unflushed prompt still leaves stdin readable.
        let _ = io::stderr().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().replace(',', ".").parse().unwrap_or(f64::NAN)),
        }
    })
}
