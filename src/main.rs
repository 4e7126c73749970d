//! Choreo Lab - Capture Log Analysis & Choreography Export
//!
//! Analyzes animatronic capture logs and exports choreography CSVs.

use choreo_lab::analysis::{calculate_stats, group_frames_into_intervals};
use choreo_lab::app::cli::{Cli, Commands};
use choreo_lab::app::config::Config;
use choreo_lab::export::{
    build_log_table, create_full_choreography, csv_bytes, csv_file_name, ChoreographyMapping,
    MERGED_CSV_NAME,
};
use choreo_lab::parse::{ParsedLog, STANDARD_CHANNELS};
use choreo_lab::resample::ResamplePolicy;
use choreo_lab::time::frame_to_timestamp;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    match cli.command {
        Commands::Analyze { input } => {
            run_analyze(&input, &config)?;
        }
        Commands::Export {
            input,
            policy,
            rate,
            output,
        } => {
            run_export(&input, policy.map(Into::into), rate, output, &config)?;
        }
        Commands::Merge {
            mapping,
            inputs,
            output,
        } => {
            run_merge(&mapping, &inputs, output)?;
        }
        Commands::Parse { input, output } => {
            run_parse(&input, output)?;
        }
        Commands::Init { force } => {
            run_init(force, &config)?;
        }
    }

    Ok(())
}

/// Load a log file and parse the standard channels.
fn load_log(input: &Path) -> anyhow::Result<ParsedLog> {
    if !input.exists() {
        anyhow::bail!("Log file not found: {:?}", input);
    }
    let text = std::fs::read_to_string(input)?;
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());

    let log = ParsedLog::from_text(file_name, &text);
    info!(
        "Parsed '{}': {} channels, {} frames",
        log.file_name,
        log.channels.len(),
        log.frames.len()
    );
    Ok(log)
}

fn run_analyze(input: &Path, config: &Config) -> anyhow::Result<()> {
    let log = load_log(input)?;

    if log.channels.is_empty() {
        warn!("No recognizable channel sections in {:?}", input);
    }

    for name in STANDARD_CHANNELS {
        let series = match log.channel(name) {
            Some(s) => s,
            None => {
                debug!("Channel '{}' absent, skipping", name);
                continue;
            }
        };
        let limits = match config.limits.for_channel(name) {
            Some(l) => l,
            None => continue,
        };

        let stats = calculate_stats(series, &log.frames, limits);

        println!("\n{}", name);
        println!(
            "  max speed {:.2} at frame {} ({})",
            stats.max_speed,
            stats.max_speed_frame,
            frame_to_timestamp(stats.max_speed_frame)
        );
        println!(
            "  max accel {:.2} at frame {} ({})",
            stats.max_accel,
            stats.max_accel_frame,
            frame_to_timestamp(stats.max_accel_frame)
        );

        for (label, events, limit) in [
            ("speed", &stats.exceeded_speed, limits.speed),
            ("accel", &stats.exceeded_accel, limits.accel),
        ] {
            let intervals = group_frames_into_intervals(events);
            if intervals.is_empty() {
                println!("  {} within limit ({})", label, limit);
                continue;
            }
            println!("  {} over limit ({}) in {} interval(s):", label, limit, intervals.len());
            for iv in &intervals {
                println!(
                    "    frames {}..{} ({}..{}), peak {:.2}",
                    iv.start,
                    iv.end,
                    frame_to_timestamp(iv.start),
                    frame_to_timestamp(iv.end),
                    iv.peak
                );
            }
        }
    }

    Ok(())
}

fn run_export(
    input: &Path,
    policy_kind: Option<choreo_lab::resample::PolicyKind>,
    rate: Option<f64>,
    output: Option<PathBuf>,
    config: &Config,
) -> anyhow::Result<()> {
    let log = load_log(input)?;

    let kind = policy_kind.unwrap_or(config.export.policy);
    let target_rate = rate.unwrap_or(config.export.target_rate);
    if target_rate <= 0.0 {
        anyhow::bail!("Target rate must be positive, got {}", target_rate);
    }
    let policy = ResamplePolicy::from_kind(kind, target_rate);
    debug!("Resampling with {:?}", policy);

    let table = build_log_table(&log, policy);
    let bytes = csv_bytes(&table);

    let out_path = output.unwrap_or_else(|| PathBuf::from(csv_file_name(&log.file_name)));
    std::fs::write(&out_path, &bytes)?;
    info!("Wrote {} rows to {:?}", table.rows.len(), out_path);

    Ok(())
}

fn run_merge(mapping_path: &Path, inputs: &[PathBuf], output: Option<PathBuf>) -> anyhow::Result<()> {
    if !mapping_path.exists() {
        anyhow::bail!("Mapping file not found: {:?}", mapping_path);
    }
    let mapping = ChoreographyMapping::load(mapping_path)?;

    let mut logs = Vec::with_capacity(inputs.len());
    for input in inputs {
        logs.push(load_log(input)?);
    }

    // Entries with no matching log degrade to blank cells; point that
    // out before the export so the user can fix the mapping.
    for entry in &mapping.entries {
        if !logs.iter().any(|l| l.file_name == entry.file) {
            warn!("Mapping references '{}' but no such log was given", entry.file);
        }
    }

    let table = create_full_choreography(&logs, &mapping);
    let bytes = csv_bytes(&table);

    let out_path = output.unwrap_or_else(|| PathBuf::from(MERGED_CSV_NAME));
    std::fs::write(&out_path, &bytes)?;
    info!(
        "Merged {} log(s) into {} rows at {:?}",
        logs.len(),
        table.rows.len(),
        out_path
    );

    Ok(())
}

fn run_parse(input: &Path, output: Option<PathBuf>) -> anyhow::Result<()> {
    let log = load_log(input)?;

    let out_path = output.unwrap_or_else(|| {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "session".to_string());
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        PathBuf::from(format!("{}_{}.json", stem, stamp))
    });

    log.save(&out_path)?;
    info!("Saved session to {:?}", out_path);

    Ok(())
}

fn run_init(force: bool, config: &Config) -> anyhow::Result<()> {
    let config_path = Config::default_path();

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {:?}. Use --force to overwrite.",
            config_path
        );
    }

    config.save(&config_path)?;
    println!("Created config at {:?}", config_path);
    println!("\nConfig content:\n{}", config.to_toml()?);

    Ok(())
}
