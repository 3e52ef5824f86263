//! Command-line front end for the NeoWs close-approach feed.
//!
//! Fetches one window of the feed and prints a line per object, or the
//! decoded records as JSON with `--json`. Logs go to stderr; set `RUST_LOG`
//! to `debug` to see the request being made.

mod args;

use std::process::ExitCode;

use clap::Parser;
use neows::{Client, NearEarthObject};

use args::CliArgs;

fn main() -> ExitCode {
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let args = CliArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new()?;
    let mut neos = client.fetch(&args.start_date, &args.end_date, &args.api_key)?;

    if args.hazardous_only {
        neos.retain(|neo| neo.is_potentially_hazardous_asteroid);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&neos)?);
        return Ok(());
    }

    for neo in &neos {
        println!("{}", summary_line(neo));
    }
    tracing::info!(count = neos.len(), "done");
    Ok(())
}

/// One table row: id, name, diameter range, hazard and sentry flags, closest approach.
fn summary_line(neo: &NearEarthObject) -> String {
    let diameter = &neo.estimated_diameter.meters;
    let flags = match (neo.is_potentially_hazardous_asteroid, neo.is_sentry_object) {
        (true, true) => "PHA,sentry",
        (true, false) => "PHA",
        (false, true) => "sentry",
        (false, false) => "-",
    };
    let approach = neo.closest_approach().map_or_else(
        || "no approach data".to_string(),
        |event| {
            format!(
                "{} at {} LD",
                event.close_approach_date_full, event.miss_distance.lunar
            )
        },
    );

    format!(
        "{:<10} {:<24} H={:<6.2} {:>8.1}-{:<8.1} m  {:<10} {approach}",
        neo.id, neo.name, neo.absolute_magnitude_h, diameter.min, diameter.max, flags
    )
}
