//! BAC simulation CLI
//!
//! Usage: bacflow_simulate <session.json> [options]
//!
//! Options:
//!   --model <NAME>   Model to include (repeatable; default: all models valid for the subject)
//!   --limit <BAC>    Driving limit as a BAC fraction (default: 0.0005 = 0.05 %)
//!   --dt <SECS>      Simulation step in seconds (default: 60)
//!   --help, -h       Show help
//!
//! Example: bacflow_simulate data/session.json --model Widmark --model Watson

use bacflow_widmark::constants::{DEFAULT_DRIVING_LIMIT, DEFAULT_STEP_SECS, SOBER_TOLERANCE};
use bacflow_widmark::{
    CoefficientError, Drink, Food, Model, Person, SimulationConfig, SimulationError, aggregate,
    simulate, threshold_times,
};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Session file contents
#[derive(Debug, Deserialize)]
struct Session {
    person: Person,
    drinks: Vec<Drink>,
    #[serde(default)]
    foods: Vec<Food>,
    /// Start of the simulated window (seconds; default: first drink)
    start: Option<f64>,
    /// End of the simulated window (seconds; default: start + 12 h)
    end: Option<f64>,
}

struct Args {
    session_path: PathBuf,
    models: Vec<Model>,
    limit: f64,
    step: f64,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <session.json> [options]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <session.json>   Session file with person, drinks and foods");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --model <NAME>   Model to include (repeatable)");
    eprintln!("  --limit <BAC>    Driving limit as a BAC fraction (default: {})", DEFAULT_DRIVING_LIMIT);
    eprintln!("  --dt <SECS>      Simulation step in seconds (default: {})", DEFAULT_STEP_SECS);
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    let names: Vec<&str> = Model::ALL.iter().map(|m| m.name()).collect();
    eprintln!("Supported models: {:?}", names);
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut session_path: Option<PathBuf> = None;
    let mut models = Vec::new();
    let mut limit = DEFAULT_DRIVING_LIMIT;
    let mut step = DEFAULT_STEP_SECS;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--model" => {
                i += 1;
                let name = args.get(i).ok_or("--model requires a value")?;
                models.push(name.parse::<Model>().map_err(|e| e.to_string())?);
            }
            "--limit" => {
                i += 1;
                let value = args.get(i).ok_or("--limit requires a value")?;
                limit = value
                    .parse()
                    .map_err(|_| format!("Invalid driving limit: {}", value))?;
            }
            "--dt" => {
                i += 1;
                let value = args.get(i).ok_or("--dt requires a value")?;
                step = value
                    .parse()
                    .map_err(|_| format!("Invalid step: {}", value))?;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if session_path.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                session_path = Some(PathBuf::from(arg));
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    let session_path = session_path.ok_or("Missing session file argument")?;

    Ok(Args {
        session_path,
        models,
        limit,
        step,
    })
}

fn format_simulation_error(err: &SimulationError) -> String {
    match err {
        SimulationError::Coefficient(CoefficientError::FormulaUnavailable { model, sex }) => {
            format!(
                "The {} model has no formula for {} subjects.\nDrop it with a different --model selection.",
                model, sex
            )
        }
        SimulationError::InvalidTimeGrid { start, end, step } => format!(
            "Invalid simulation window: start {}, end {}, step {}.\nCheck the session's start/end and the --dt value.",
            start, end, step
        ),
        other => other.to_string(),
    }
}

/// Format seconds from the session origin as `+HH:MM` or `-HH:MM`
fn format_offset(secs: f64) -> String {
    let minutes = (secs / 60.0).round() as i64;
    let sign = if minutes < 0 { '-' } else { '+' };
    let minutes = minutes.unsigned_abs();
    format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
    };

    let contents = match std::fs::read_to_string(&args.session_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!(
                "Error reading session file '{}': {}",
                args.session_path.display(),
                e
            );
            std::process::exit(1);
        }
    };

    let session: Session = match serde_json::from_str(&contents) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error parsing session file: {}", e);
            std::process::exit(1);
        }
    };

    let models = if args.models.is_empty() {
        Model::supported_for(session.person.sex)
    } else {
        args.models
    };

    let mut config = SimulationConfig::for_session(&session.drinks).with_step(args.step);
    if let Some(start) = session.start {
        config.end = start + (config.end - config.start);
        config.start = start;
    }
    if let Some(end) = session.end {
        config.end = end;
    }

    tracing::info!(
        drinks = session.drinks.len(),
        foods = session.foods.len(),
        models = models.len(),
        "starting simulation"
    );

    println!(
        "Simulating {} drink(s) with {} model(s)...",
        session.drinks.len(),
        models.len()
    );
    let start = Instant::now();

    let results = match simulate(
        &session.drinks,
        &session.person,
        &config,
        &models,
        &session.foods,
    ) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", format_simulation_error(&e));
            std::process::exit(1);
        }
    };

    if results.is_empty() {
        println!("No drinks in session. Nothing to simulate.");
        return;
    }

    for series in &results {
        if let Some(peak) = series.peak() {
            let zero = match series.zero_after(peak.time) {
                Some(t) => format_offset(t),
                None => "beyond window".to_string(),
            };
            println!(
                "  {:<8} r = {:.4}  peak {:.4} % at {}  zero at {}",
                series.model.name(),
                series.body_factor,
                peak.bac_percent,
                format_offset(peak.time),
                zero
            );
        }
    }

    let aggregated = match aggregate(&results) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", format_simulation_error(&e));
            std::process::exit(1);
        }
    };

    let peak_mean = aggregated
        .iter()
        .map(|s| s.mean_bac)
        .fold(0.0_f64, f64::max);
    println!("Peak mean BAC: {:.4} %", peak_mean * 100.0);

    let times = threshold_times(&aggregated, args.limit, SOBER_TOLERANCE);
    match times.drive_safe {
        Some(t) => println!(
            "Below driving limit ({:.3} %) from {}",
            args.limit * 100.0,
            format_offset(t)
        ),
        None => println!("Driving limit not reached within the simulated window."),
    }
    match times.sober {
        Some(t) => println!("Sober from {}", format_offset(t)),
        None => println!("Not sober within the simulated window."),
    }

    println!(
        "Simulation completed in {:.3} seconds.",
        start.elapsed().as_secs_f64()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(0.0), "+00:00");
        assert_eq!(format_offset(5400.0), "+01:30");
        assert_eq!(format_offset(12.5 * 3600.0), "+12:30");
    }

    #[test]
    fn test_format_offset_before_origin() {
        assert_eq!(format_offset(-5400.0), "-01:30");
        assert_eq!(format_offset(-600.0), "-00:10");
        assert_eq!(format_offset(-10.0), "+00:00");
    }
}
