// Single source of truth for all default values.

// --- Inputs ---
pub const DEFAULT_TEMPERATURE: f64 = 25.0;
pub const DEFAULT_HUMIDITY: f64 = 50.0;
pub const DEFAULT_RADIATION: f64 = 10.0;

// --- Sampling ---
pub const DEFAULT_SAMPLE_COUNT: usize = 1_000;
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

// --- Report ---
pub const DEFAULT_CHART_WIDTH: usize = 40;
pub const MIN_CHART_WIDTH: usize = 10;
pub const DEFAULT_REPORT_FORMAT: &str = "text";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "tardisim.toml";
pub const USER_CONFIG_DIRNAME: &str = ".tardisim";
