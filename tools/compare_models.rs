// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Baseline-vs-on/off model comparison runner.
//!
//! Loads a configuration (`lnln_configuration.toml` by default), assembles
//! both fitted model variants, sweeps the paired-orientation condition
//! grid and prints the interaction-metric curves side by side. Output is
//! numeric only; plotting lives outside this workspace.

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use tracing::{info, warn};

use lnln::prelude::*;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: compare_models [--config <path>] [--filter <tracing filter>]\n\n\
         Defaults:\n\
         - config: discovered lnln_configuration.toml, else built-in reference parameters\n\
         - filter: RUST_LOG, else 'info'\n"
    );
    process::exit(2);
}

fn parse_args() -> (Option<PathBuf>, Option<String>) {
    let mut config_path = None;
    let mut filter = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args.next().unwrap_or_else(|| usage_and_exit());
                config_path = Some(PathBuf::from(value));
            }
            "--filter" => {
                let value = args.next().unwrap_or_else(|| usage_and_exit());
                filter = Some(value);
            }
            "-h" | "--help" => usage_and_exit(),
            other => {
                eprintln!("Unknown argument: {other}");
                usage_and_exit();
            }
        }
    }

    (config_path, filter)
}

fn load_or_default(config_path: Option<PathBuf>) -> Result<LnlnConfig> {
    match config_path {
        Some(path) => lnln::config::load_config(Some(path.clone()))
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => match lnln::config::load_config(None) {
            Ok(config) => Ok(config),
            Err(lnln::config::ConfigError::FileNotFound(_)) => {
                warn!(
                    target: "compare_models",
                    "No configuration file found; using built-in reference parameters"
                );
                Ok(LnlnConfig::default())
            }
            Err(err) => Err(err).context("Failed to load configuration"),
        },
    }
}

fn print_curves(label: &str, responses: &[ConditionResponse]) {
    println!("\n== {} ==", label);
    println!(
        "{:>12} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "mask ori", "mask c", "test", "mask", "plaid", "MI", "plaid F1"
    );
    for response in responses {
        println!(
            "{:>11.1}\u{00b0} {:>10.3} {:>10.4} {:>10.4} {:>10.4} {:>+10.4} {:>10.4}",
            response.condition.orientation.to_degrees(),
            response.condition.contrast.get(),
            response.test_rate,
            response.mask_rate,
            response.plaid_rate,
            response.masking_index,
            response.plaid_f1,
        );
    }
}

fn main() -> Result<()> {
    let (config_path, filter) = parse_args();
    let _guard = init_logging(filter.as_deref(), None)?;

    let config = load_or_default(config_path)?;
    let baseline = neuron_from_config(&config.model.baseline)
        .context("Failed to assemble baseline model")?;
    let on_off = neuron_from_config(&config.model.on_off)
        .context("Failed to assemble on/off model")?;
    let grid = grid_from_config(&config).context("Failed to build condition grid")?;

    info!(
        target: "compare_models",
        "Running comparison: {} baseline subunit(s) vs {} on/off subunit(s)",
        baseline.subunits().len(),
        on_off.subunits().len()
    );

    let comparison = compare_models(&baseline, &on_off, &grid)
        .context("Model comparison failed")?;

    print_curves("baseline (single subunit)", &comparison.baseline);
    print_curves("on/off (separate pathways)", &comparison.on_off);

    println!("\n{:>12} {:>10} {:>12} {:>12} {:>12}", "mask ori", "mask c", "MI base", "MI on/off", "delta");
    for (a, b) in comparison.baseline.iter().zip(comparison.on_off.iter()) {
        println!(
            "{:>11.1}\u{00b0} {:>10.3} {:>+12.4} {:>+12.4} {:>+12.4}",
            a.condition.orientation.to_degrees(),
            a.condition.contrast.get(),
            a.masking_index,
            b.masking_index,
            b.masking_index - a.masking_index,
        );
    }

    Ok(())
}
