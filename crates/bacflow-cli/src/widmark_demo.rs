//! Widmark coefficient demo CLI
//!
//! Usage: widmark_demo [--height <M>] [--weight <KG>] [--adjustment <G>]
//!
//! Prints the coefficient of every model for both sexes.
//! Defaults to height 1.70 m, weight 70 kg, adjustment 18.
//!
//! Example: widmark_demo --height 1.82 --weight 85 --adjustment 40

use bacflow_widmark::constants::{SAMPLE_ADJUSTMENT, SAMPLE_HEIGHT, SAMPLE_WEIGHT};
use bacflow_widmark::{Model, Sex};
use std::env;
use tracing_subscriber::EnvFilter;

struct Args {
    height: f64,
    weight: f64,
    adjustment: f64,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --height <M>       Height in meters (default: {})", SAMPLE_HEIGHT);
    eprintln!("  --weight <KG>      Weight in kilograms (default: {})", SAMPLE_WEIGHT);
    eprintln!(
        "  --adjustment <G>   Adjustment term, e.g. age in years (default: {})",
        SAMPLE_ADJUSTMENT
    );
    eprintln!("  --help, -h         Show this help message");
}

fn parse_value(flag: &str, value: Option<&String>) -> Result<f64, String> {
    let value = value.ok_or_else(|| format!("{} requires a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, value))
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut parsed = Args {
        height: SAMPLE_HEIGHT,
        weight: SAMPLE_WEIGHT,
        adjustment: SAMPLE_ADJUSTMENT,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--height" => {
                i += 1;
                parsed.height = parse_value("--height", args.get(i))?;
            }
            "--weight" => {
                i += 1;
                parsed.weight = parse_value("--weight", args.get(i))?;
            }
            "--adjustment" => {
                i += 1;
                parsed.adjustment = parse_value("--adjustment", args.get(i))?;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(parsed)
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

    tracing::debug!(
        height = args.height,
        weight = args.weight,
        adjustment = args.adjustment,
        "evaluating models"
    );

    println!(
        "Height: {} m, Weight: {} kg, Adjustment: {}",
        args.height, args.weight, args.adjustment
    );

    for model in Model::ALL {
        for sex in [Sex::Female, Sex::Male] {
            match model.call(sex, args.height, args.weight, args.adjustment) {
                Ok(r) => println!("{} ({}): {}", model, sex.tag(), r),
                Err(e) => println!("{} ({}): {}", model, sex.tag(), e),
            }
        }
    }
}
