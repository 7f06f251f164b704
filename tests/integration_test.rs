use atmo_toolkit::errors::{AtmoError, Result};
use atmo_toolkit::simulation::{inspect, load};
use chrono::{TimeZone, Utc};
use ndarray::{array, Array2};
use netcdf::create;
use std::path::Path;
use tempfile::tempdir;

/// Writes a simulation file with a single run holding the given tables.
fn write_simulation(
    path: &Path,
    spec: Option<(&str, Array2<f64>)>,
    rate: Option<(&str, Array2<f64>)>,
) -> Result<()> {
    let mut file = create(path)?;
    file.add_attribute("date", "2016-03-01 12:00:00")?;
    file.add_attribute("description", "Integration test run")?;

    let mut group = file.add_group("run_001")?;
    group.add_attribute("WALL_time", 42.0f64)?;

    if let Some((head, data)) = spec {
        group.add_dimension("spec_time", data.nrows())?;
        group.add_dimension("spec_cols", data.ncols())?;
        let mut var = group.add_variable::<f64>("Spec", &["spec_time", "spec_cols"])?;
        var.put_attribute("head", head)?;
        var.put(data.view(), ..)?;
    }

    if let Some((head, data)) = rate {
        group.add_dimension("rate_time", data.nrows())?;
        group.add_dimension("rate_cols", data.ncols())?;
        let mut var = group.add_variable::<f64>("Rate", &["rate_time", "rate_cols"])?;
        var.put_attribute("head", head)?;
        var.put(data.view(), ..)?;
    }

    Ok(())
}

#[test]
fn test_load_linear_time_series() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("linear.nc");

    write_simulation(
        &file_path,
        Some(("TIME,O3", array![[0.0, 10.0], [60.0, 12.0], [120.0, 14.0]])),
        Some(("TIME,R1", array![[0.0, 0.1], [60.0, 0.2], [120.0, 0.3]])),
    )?;

    let (species, rates) = load(&file_path)?;

    assert_eq!(species.columns(), &["TIME".to_string(), "O3".to_string()]);
    assert_eq!(species.column("TIME").unwrap().to_vec(), vec![0.0, 60.0, 120.0]);
    assert_eq!(species.column("O3").unwrap().to_vec(), vec![10.0, 12.0, 14.0]);

    let expected_index = vec![
        Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(1970, 1, 1, 0, 1, 0).unwrap(),
        Utc.with_ymd_and_hms(1970, 1, 1, 0, 2, 0).unwrap(),
    ];
    assert_eq!(species.time_index(), expected_index.as_slice());
    assert_eq!(rates.time_index(), expected_index.as_slice());
    assert_eq!(rates.column("R1").unwrap().to_vec(), vec![0.1, 0.2, 0.3]);

    Ok(())
}

#[test]
fn test_load_rebuilds_corrupt_first_timestamp() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("corrupt.nc");

    write_simulation(
        &file_path,
        Some(("TIME,O3", array![[999.0, 10.0], [60.0, 12.0], [120.0, 14.0]])),
        Some(("TIME,R1", array![[999.0, 0.1], [60.0, 0.2], [120.0, 0.3]])),
    )?;

    let (species, rates) = load(&file_path)?;

    // 2 * 60 - 120
    assert_eq!(species.column("TIME").unwrap()[0], 0.0);
    assert_eq!(rates.column("TIME").unwrap()[0], 0.0);
    assert_eq!(species.time_index()[0].timestamp(), 0);
    assert_eq!(species.column("O3").unwrap()[0], 10.0);

    Ok(())
}

#[test]
fn test_rates_share_species_clock() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("shared_clock.nc");

    // Rates carry their own, slightly shifted timestamps
    write_simulation(
        &file_path,
        Some(("TIME,O3", array![[5.0, 10.0], [60.0, 12.0], [120.0, 14.0]])),
        Some(("R1,TIME", array![[0.1, 7.0], [0.2, 61.0], [0.3, 121.0]])),
    )?;

    let raw = inspect(&file_path)?;
    let (species, rates) = load(&file_path)?;

    let original = raw.species.column(0);
    let corrected = species.column("TIME").unwrap();
    assert_eq!(corrected[0], 2.0 * original[1] - original[2]);

    assert_eq!(rates.column("TIME").unwrap().to_vec(), corrected.to_vec());
    assert_eq!(rates.time_index(), species.time_index());
    for (row, time) in species.time_index().iter().enumerate() {
        assert_eq!(time.timestamp() as f64, corrected[row]);
    }

    Ok(())
}

#[test]
fn test_load_fails_without_rates() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("no_rates.nc");

    write_simulation(
        &file_path,
        Some(("TIME,O3", array![[0.0, 10.0], [60.0, 12.0], [120.0, 14.0]])),
        None,
    )?;

    match load(&file_path) {
        Err(AtmoError::MissingVariable { group, var }) => {
            assert_eq!(group, "run_001");
            assert_eq!(var, "Rate");
        }
        other => panic!("Expected MissingVariable error, got {:?}", other),
    }

    Ok(())
}

#[test]
fn test_load_fails_without_time_column() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("no_time.nc");

    write_simulation(
        &file_path,
        Some(("T,O3", array![[0.0, 10.0], [60.0, 12.0], [120.0, 14.0]])),
        Some(("TIME,R1", array![[0.0, 0.1], [60.0, 0.2], [120.0, 0.3]])),
    )?;

    match load(&file_path) {
        Err(AtmoError::MissingColumn { var, column }) => {
            assert_eq!(var, "Spec");
            assert_eq!(column, "TIME");
        }
        other => panic!("Expected MissingColumn error, got {:?}", other),
    }

    // inspect does not look at column names
    assert!(inspect(&file_path).is_ok());

    Ok(())
}

#[test]
fn test_load_rejects_mismatched_tables() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");

    let short_path = temp_dir.path().join("short.nc");
    write_simulation(
        &short_path,
        Some(("TIME,O3", array![[0.0, 10.0], [60.0, 12.0]])),
        Some(("TIME,R1", array![[0.0, 0.1], [60.0, 0.2]])),
    )?;
    assert!(matches!(
        load(&short_path),
        Err(AtmoError::InsufficientRows { rows: 2, .. })
    ));

    let uneven_path = temp_dir.path().join("uneven.nc");
    write_simulation(
        &uneven_path,
        Some(("TIME,O3", array![[0.0, 10.0], [60.0, 12.0], [120.0, 14.0]])),
        Some((
            "TIME,R1",
            array![[0.0, 0.1], [60.0, 0.2], [120.0, 0.3], [180.0, 0.4]],
        )),
    )?;
    assert!(matches!(
        load(&uneven_path),
        Err(AtmoError::RowCountMismatch {
            species: 3,
            rates: 4
        })
    ));

    let header_path = temp_dir.path().join("header.nc");
    write_simulation(
        &header_path,
        Some(("TIME,O3,NO2", array![[0.0, 10.0], [60.0, 12.0], [120.0, 14.0]])),
        Some(("TIME,R1", array![[0.0, 0.1], [60.0, 0.2], [120.0, 0.3]])),
    )?;
    assert!(matches!(
        load(&header_path),
        Err(AtmoError::ColumnMismatch {
            columns: 3,
            width: 2,
            ..
        })
    ));

    Ok(())
}

#[test]
fn test_repeated_calls_are_identical() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("repeat.nc");

    write_simulation(
        &file_path,
        Some((
            "TIME,O3,NO2",
            array![[3.0, 1e-9, 2.5e-10], [60.0, 1.1e-9, 2.4e-10], [120.0, 1.2e-9, 2.3e-10]],
        )),
        Some(("TIME,R1", array![[3.0, 0.1], [60.0, 0.2], [120.0, 0.3]])),
    )?;

    let first = inspect(&file_path)?;
    let second = inspect(&file_path)?;
    assert_eq!(first, second);

    let (species_a, rates_a) = load(&file_path)?;
    let (species_b, rates_b) = load(&file_path)?;
    assert_eq!(species_a, species_b);
    assert_eq!(rates_a, rates_b);

    // Only the first TIME value differs from the raw arrays
    let loaded = species_a.data();
    for ((row, col), value) in first.species.indexed_iter() {
        if row == 0 && col == 0 {
            continue;
        }
        assert_eq!(loaded[[row, col]].to_bits(), value.to_bits());
    }

    Ok(())
}
