//! Demo driver: buy a snack twice, then collect the change.
//!
//! Usage: `vending [config.json] [seed]`
//!
//! Without a configuration file the reference catalog is used. Passing a seed
//! makes the simulated hardware faults reproducible. Set `RUST_LOG=debug` to
//! see every draw and committed sale.

use std::env;
use std::fs;
use tracing::{error, info};
use vending_machine::{MachineConfig, Money};

const SNACK: &str = "Cebolitos";

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}

fn load_config(path: Option<&str>) -> Result<MachineConfig, String> {
    match path {
        Some(path) => {
            info!(path, "Loading machine configuration");
            let json = fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
            MachineConfig::from_json(&json).map_err(|e| e.to_string())
        }
        None => Ok(MachineConfig::reference()),
    }
}

fn main() -> Result<(), String> {
    setup_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let seed = args
        .get(1)
        .map(|raw| raw.parse::<u64>().map_err(|e| format!("invalid seed {raw:?}: {e}")))
        .transpose()?;

    let locale = config.locale;
    let builder = match seed {
        Some(seed) => config.into_builder_seeded(seed),
        None => config.into_builder(),
    }
    .map_err(|e| e.to_string())?;
    let mut machine = builder.build().map_err(|e| e.to_string())?;

    info!(products = machine.catalog().len(), ?seed, "Vending machine ready");

    let attempts = [Money::from_units(8), Money::ZERO];
    for inserted in attempts {
        match machine.purchase(SNACK, inserted) {
            Ok(_) => println!("{}", locale.delivered()),
            Err(e) => {
                println!("{}", e.localized(locale));
                break;
            }
        }
    }

    match machine.collect_change() {
        Ok(change) => println!("{}", locale.change_returned(change)),
        Err(e) => {
            error!(error = %e, "Change collection failed");
            println!("{}", e.localized(locale));
        }
    }

    info!(
        transactions = machine.journal().len(),
        deliveries = machine.journal().deliveries().len(),
        "Session complete"
    );
    Ok(())
}
