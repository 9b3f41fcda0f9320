//! Command handlers. Each returns the text destined for stdout.

use anyhow::{Context, Result};
use serde_json::json;
use tardisim_analysis::{
    histogram, interpret, sample_distribution, score_breakdown, score_sample, seeded_rng,
};
use tardisim_core::config::{defaults, CliOverrides, ReportFormat};
use tardisim_core::tracing::{init_tracing_with_level, with_bootstrap_tracing};
use tardisim_core::{ConfigError, EnvironmentSample, TardisimConfig};
use tardisim_report::render::charts::histogram_chart;
use tardisim_report::{render_report, ReportOptions, SimulationReport};

use crate::args::{Cli, Commands, ConfigCommand, InputArgs, SamplingArgs};

const EXAMPLE_CONFIG: &str = r#"# tardisim configuration file

[inputs]
# Defaults used when a flag is not given. Must lie inside the bounds.
temperature = 25.0   # -150 to 150 °C
humidity = 50.0      # 0 to 100 %
radiation = 10.0     # 0 to 100 %

[sampling]
samples = 1000
# seed = 42          # fixed seed for reproducible runs
histogram_bins = 20

[report]
chart_width = 40
format = "text"      # "text" or "json"

[observability]
log_level = "info"   # overridden by TARDISIM_LOG
"#;

/// Dispatch a parsed command line.
pub fn execute(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Config(ConfigCommand::Example) => Ok(EXAMPLE_CONFIG.to_string()),
        Commands::Config(ConfigCommand::Validate) => validate_config(cli),
        Commands::Run {
            inputs,
            sampling,
            bins,
            width,
            json,
        } => {
            let overrides = CliOverrides {
                histogram_bins: *bins,
                chart_width: *width,
                ..sampling_overrides(sampling, *json)
            };
            let config = load_config(cli, &overrides)?;
            run(&config, inputs)
        }
        Commands::Score { inputs, json } => {
            let config = load_config(cli, &format_override(*json))?;
            score(&config, inputs)
        }
        Commands::Sample { sampling, json } => {
            let config = load_config(cli, &sampling_overrides(sampling, *json))?;
            sample(&config)
        }
    }
}

/// Example configuration printed by `tardisim config example`.
pub fn example_config() -> &'static str {
    EXAMPLE_CONFIG
}

fn format_override(json: bool) -> CliOverrides {
    CliOverrides {
        format: json.then(|| ReportFormat::Json.as_str().to_string()),
        ..CliOverrides::default()
    }
}

fn sampling_overrides(sampling: &SamplingArgs, json: bool) -> CliOverrides {
    CliOverrides {
        samples: sampling.samples,
        seed: sampling.seed,
        ..format_override(json)
    }
}

/// Resolve the layered config, then start logging at the configured level.
///
/// Loading runs under a bootstrap subscriber at the default (or verbose)
/// level so config warnings are not dropped.
fn load_config(cli: &Cli, overrides: &CliOverrides) -> Result<TardisimConfig> {
    let verbose_level = cli.verbose.then(|| "debug".to_string());
    let overrides = CliOverrides {
        log_level: verbose_level.clone(),
        ..overrides.clone()
    };
    let bootstrap_level = verbose_level.as_deref().unwrap_or(defaults::DEFAULT_LOG_LEVEL);
    let config = with_bootstrap_tracing(bootstrap_level, || {
        TardisimConfig::load_file(&cli.config, Some(&overrides))
    })
    .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    init_tracing_with_level(config.observability.effective_log_level());
    Ok(config)
}

/// Flags win over config defaults; the result is clamped into bounds.
pub fn resolve_inputs(args: &InputArgs, config: &TardisimConfig) -> EnvironmentSample {
    let (sample, adjustments) = EnvironmentSample::clamp_with_report(
        args.temperature
            .unwrap_or_else(|| config.inputs.effective_temperature()),
        args.humidity.unwrap_or_else(|| config.inputs.effective_humidity()),
        args.radiation
            .unwrap_or_else(|| config.inputs.effective_radiation()),
    );
    for adjustment in adjustments {
        tracing::warn!(
            parameter = %adjustment.parameter,
            requested = adjustment.requested,
            applied = adjustment.applied,
            "input clamped into bounds"
        );
    }
    sample
}

fn run(config: &TardisimConfig, inputs: &InputArgs) -> Result<String> {
    let sample = resolve_inputs(inputs, config);
    let options = ReportOptions::from_config(config);
    let mut rng = seeded_rng(config.sampling.seed);

    let report = SimulationReport::build(sample, &options, &mut rng)?;
    Ok(render_report(&report, config.report.effective_format(), options.chart_width)?)
}

fn score(config: &TardisimConfig, inputs: &InputArgs) -> Result<String> {
    let sample = resolve_inputs(inputs, config);
    let result = score_sample(&sample);

    if config.report.effective_format() == ReportFormat::Json {
        let (t, h, r) = (sample.temperature(), sample.humidity(), sample.radiation());
        let breakdown = score_breakdown(t, h, r);
        let interpretations = interpret(t, h, r);
        let value = json!({
            "inputs": sample,
            "score": result,
            "breakdown": breakdown,
            "interpretations": interpretations,
        });
        return Ok(serde_json::to_string_pretty(&value)? + "\n");
    }

    let mut out = format!("Survival probability: {:.2}%\n", result.probability);
    for parameter in tardisim_core::Parameter::ALL {
        out.push_str(&format!(
            "{}: {} ({})\n",
            parameter.label(),
            sample.value(parameter),
            result.note(parameter)
        ));
    }
    Ok(out)
}

fn sample(config: &TardisimConfig) -> Result<String> {
    let mut rng = seeded_rng(config.sampling.seed);
    let summary = sample_distribution(config.sampling.effective_samples(), &mut rng)?;
    let bins = histogram(&summary.samples, config.sampling.effective_histogram_bins())?;

    if config.report.effective_format() == ReportFormat::Json {
        let value = json!({ "distribution": summary, "histogram": bins });
        return Ok(serde_json::to_string_pretty(&value)? + "\n");
    }

    let mut lines = vec![
        format!("Samples: {}", summary.len()),
        format!("Mean: {:.2}%", summary.mean),
        format!("Standard deviation: {:.2}", summary.std_dev),
        format!("Spread: {}", summary.bucket_label),
        format!(
            "Min {:.2}%  p5 {:.2}%  median {:.2}%  p95 {:.2}%  max {:.2}%",
            summary.min, summary.p5, summary.median, summary.p95, summary.max
        ),
        String::new(),
    ];
    lines.extend(histogram_chart(&bins, config.report.effective_chart_width()));
    Ok(lines.join("\n") + "\n")
}

fn validate_config(cli: &Cli) -> Result<String> {
    if !cli.config.exists() {
        return Err(ConfigError::FileNotFound {
            path: cli.config.display().to_string(),
        }
        .into());
    }
    let config = load_config(cli, &CliOverrides::default())?;
    tracing::info!(path = %cli.config.display(), "configuration is valid");

    let seed = config
        .sampling
        .seed
        .map_or_else(|| "random".to_string(), |s| s.to_string());
    let lines = [
        "Configuration is valid".to_string(),
        format!(
            "  Inputs: {} °C, {} %, {} %",
            config.inputs.effective_temperature(),
            config.inputs.effective_humidity(),
            config.inputs.effective_radiation()
        ),
        format!("  Samples: {} (seed: {seed})", config.sampling.effective_samples()),
        format!("  Histogram bins: {}", config.sampling.effective_histogram_bins()),
        format!(
            "  Format: {}, chart width {}",
            config.report.effective_format(),
            config.report.effective_chart_width()
        ),
    ];
    Ok(lines.join("\n") + "\n")
}
