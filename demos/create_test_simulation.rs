//! Creates a sample simulation output file and loads it back.
//!
//! The file mimics a box-model run: one group per simulation, each with
//! `Spec` and `Rate` tables whose `head` attribute names the columns. The
//! first stored TIME is a placeholder that `load` rebuilds.

use atmo_toolkit::simulation::{inspect, load};
use ndarray::Array2;
use netcdf::create;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const START: f64 = 1_456_833_600.0; // 2016-03-01T12:00:00Z
const STEP: f64 = 300.0;
const STEPS: usize = 12;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let output_path = Path::new("test_simulation.nc");

    println!("Creating test simulation file: {}", output_path.display());

    if output_path.exists() {
        std::fs::remove_file(output_path)?
    }

    {
        let mut file = create(output_path)?;
        file.add_attribute("date", "2016-03-01 12:00:00")?;
        file.add_attribute("description", "Urban ozone box model, demo run")?;

        for (run, scale) in [("run_base", 1.0), ("run_high_nox", 2.0)] {
            let mut group = file.add_group(run)?;
            group.add_attribute("WALL_time", 3.7 * scale)?;
            group.add_dimension("time", STEPS)?;
            group.add_dimension("spec_cols", 4)?;
            group.add_dimension("rate_cols", 3)?;

            let mut spec = Array2::<f64>::zeros((STEPS, 4));
            let mut rate = Array2::<f64>::zeros((STEPS, 3));
            for i in 0..STEPS {
                let t = START + i as f64 * STEP;
                let hour = i as f64 / STEPS as f64;
                spec[[i, 0]] = t;
                spec[[i, 1]] = 1.0e12 * (1.0 + hour);
                spec[[i, 2]] = 2.5e11 * scale * (1.0 - 0.5 * hour);
                spec[[i, 3]] = 1.0e6 * (std::f64::consts::PI * hour).sin();
                rate[[i, 0]] = t;
                rate[[i, 1]] = 1.8e-12 * scale;
                rate[[i, 2]] = 4.2e-5 * (std::f64::consts::PI * hour).sin();
            }
            // Placeholder first timestamp, as written by the model
            spec[[0, 0]] = 0.0;
            rate[[0, 0]] = 0.0;

            let mut spec_var = group.add_variable::<f64>("Spec", &["time", "spec_cols"])?;
            spec_var.put_attribute("head", "TIME,O3,NO2,OH")?;
            spec_var.put(spec.view(), ..)?;

            let mut rate_var = group.add_variable::<f64>("Rate", &["time", "rate_cols"])?;
            rate_var.put_attribute("head", "TIME,NO2+OH,O3+hv")?;
            rate_var.put(rate.view(), ..)?;
        }
    }

    let raw = inspect(output_path)?;
    println!(
        "Raw species: {:?}, raw rates: {:?}",
        raw.species.shape(),
        raw.rates.shape()
    );

    let (species, rates) = load(output_path)?;
    println!("Species columns: {}", species.columns().join(", "));
    println!("Rates columns: {}", rates.columns().join(", "));
    for i in 0..3 {
        if let Some((time, values)) = species.row(i) {
            println!("  {}  {:?}", time.to_rfc3339(), values.to_vec());
        }
    }

    Ok(())
}
