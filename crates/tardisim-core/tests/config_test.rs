//! Tests for the tardisim configuration system.

use std::sync::Mutex;

use tardisim_core::config::{CliOverrides, ReportFormat, TardisimConfig};
use tardisim_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all TARDISIM_ env vars to prevent cross-test contamination.
/// HOME is pointed at an empty directory so a real user config never leaks in.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "TARDISIM_SAMPLES",
        "TARDISIM_SEED",
        "TARDISIM_HISTOGRAM_BINS",
        "TARDISIM_CHART_WIDTH",
        "TARDISIM_LOG_LEVEL",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
}

#[test]
fn layered_resolution_cli_beats_env_beats_project() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(
        dir.path().join("tardisim.toml"),
        r#"
[sampling]
samples = 200
seed = 7
histogram_bins = 10
"#,
    )
    .unwrap();

    std::env::set_var("TARDISIM_SAMPLES", "500");
    std::env::set_var("TARDISIM_HISTOGRAM_BINS", "25");

    let cli = CliOverrides {
        histogram_bins: Some(30),
        ..Default::default()
    };

    let config = TardisimConfig::load(dir.path(), Some(&cli)).unwrap();

    // CLI overrides env and project for bins
    assert_eq!(config.sampling.histogram_bins, Some(30));
    // Env overrides project for samples
    assert_eq!(config.sampling.samples, Some(500));
    // Project value survives where nothing overrides it
    assert_eq!(config.sampling.seed, Some(7));

    isolate_env(home.path());
}

#[test]
fn missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let config = TardisimConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.inputs.effective_temperature(), 25.0);
    assert_eq!(config.inputs.effective_humidity(), 50.0);
    assert_eq!(config.inputs.effective_radiation(), 10.0);
    assert_eq!(config.sampling.effective_samples(), 1000);
    assert_eq!(config.sampling.effective_histogram_bins(), 20);
    assert!(config.sampling.seed.is_none());
    assert_eq!(config.report.effective_chart_width(), 40);
    assert_eq!(config.report.effective_format(), ReportFormat::Text);
    assert_eq!(config.observability.effective_log_level(), "info");
}

#[test]
fn user_config_is_lowest_file_layer() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let user_dir = home.path().join(".tardisim");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        "[sampling]\nsamples = 50\nseed = 1\n",
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(dir.path().join("tardisim.toml"), "[sampling]\nseed = 2\n").unwrap();

    let config = TardisimConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.sampling.samples, Some(50));
    assert_eq!(config.sampling.seed, Some(2));

    isolate_env(home.path());
}

#[test]
fn unparseable_env_values_are_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("TARDISIM_SEED", "not-a-number");
    let dir = tempdir();
    let config = TardisimConfig::load(dir.path(), None).unwrap();
    assert!(config.sampling.seed.is_none());

    isolate_env(home.path());
}

#[test]
fn load_file_accepts_explicit_path() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[report]\nformat = \"json\"\nchart_width = 60\n").unwrap();

    let config = TardisimConfig::load_file(&path, None).unwrap();
    assert_eq!(config.report.effective_format(), ReportFormat::Json);
    assert_eq!(config.report.effective_chart_width(), 60);

    isolate_env(home.path());
}

#[test]
fn invalid_toml_in_project_config_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("tardisim.toml"), "[sampling\nsamples = ").unwrap();

    let err = TardisimConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));

    isolate_env(home.path());
}

#[test]
fn zero_samples_fails_validation() {
    let config = TardisimConfig::from_toml("[sampling]\nsamples = 0\n").unwrap();
    let err = TardisimConfig::validate(&config).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "sampling.samples"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_bins_fails_validation() {
    let config = TardisimConfig::from_toml("[sampling]\nhistogram_bins = 0\n").unwrap();
    assert!(TardisimConfig::validate(&config).is_err());
}

#[test]
fn out_of_range_input_default_fails_validation() {
    let config = TardisimConfig::from_toml("[inputs]\ntemperature = 200.0\n").unwrap();
    match TardisimConfig::validate(&config).unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "inputs.temperature"),
        other => panic!("unexpected error: {other}"),
    }

    let config = TardisimConfig::from_toml("[inputs]\nhumidity = -1.0\n").unwrap();
    assert!(TardisimConfig::validate(&config).is_err());
}

#[test]
fn unknown_format_and_log_level_are_rejected() {
    let config = TardisimConfig::from_toml("[report]\nformat = \"yaml\"\n").unwrap();
    assert!(matches!(
        TardisimConfig::validate(&config),
        Err(ConfigError::InvalidValue { .. })
    ));

    let config = TardisimConfig::from_toml("[observability]\nlog_level = \"loud\"\n").unwrap();
    assert!(matches!(
        TardisimConfig::validate(&config),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn narrow_chart_width_fails_validation() {
    let config = TardisimConfig::from_toml("[report]\nchart_width = 3\n").unwrap();
    assert!(TardisimConfig::validate(&config).is_err());
}

#[test]
fn unknown_keys_are_ignored() {
    let toml = "[sampling]\nsamples = 10\nfuture_knob = true\n";
    let config = TardisimConfig::from_toml(toml).unwrap();
    assert_eq!(config.sampling.samples, Some(10));
}

#[test]
fn toml_round_trip_preserves_values() {
    let config = TardisimConfig::from_toml(
        "[inputs]\ntemperature = -40.0\n[sampling]\nseed = 99\n[report]\nformat = \"json\"\n",
    )
    .unwrap();
    let text = config.to_toml().unwrap();
    let back = TardisimConfig::from_toml(&text).unwrap();
    assert_eq!(back.inputs.temperature, Some(-40.0));
    assert_eq!(back.sampling.seed, Some(99));
    assert_eq!(back.report.effective_format(), ReportFormat::Json);
}
