use super::models::AppConfig;
use super::tables::ConfigTables;
use crate::gallery::GalleryTuning;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("parsing config tables")?;
    let mut config = AppConfig::from(tables);
    sanitize(&mut config);
    Ok(config)
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("serializing config tables")
}

fn sanitize(config: &mut AppConfig) {
    let defaults = AppConfig::default();

    if !GalleryTuning::is_valid_wrap(config.wrap_low_threshold, config.wrap_high_threshold) {
        warn!(
            low = config.wrap_low_threshold,
            high = config.wrap_high_threshold,
            "Loop thresholds must satisfy 0 < low < 1 < high < 2 and high - low >= 1; using defaults"
        );
        config.wrap_low_threshold = defaults.wrap_low_threshold;
        config.wrap_high_threshold = defaults.wrap_high_threshold;
    }

    config.window_width = clamp_f32(
        "window_width",
        config.window_width,
        320.0,
        7680.0,
        defaults.window_width,
    );
    config.window_height = clamp_f32(
        "window_height",
        config.window_height,
        240.0,
        4320.0,
        defaults.window_height,
    );
    config.parallax_strength_px = clamp_f32(
        "parallax_strength_px",
        config.parallax_strength_px,
        0.0,
        400.0,
        defaults.parallax_strength_px,
    );
    config.slot_height_ratio = clamp_f32(
        "slot_height_ratio",
        config.slot_height_ratio,
        0.1,
        1.0,
        defaults.slot_height_ratio,
    );
    config.slot_gap_ratio =
        clamp_f32("slot_gap_ratio", config.slot_gap_ratio, 0.0, 0.5, defaults.slot_gap_ratio);

    if config.jump_settle_ms > 1000 {
        warn!(value = config.jump_settle_ms, "jump_settle_ms out of range; clamping");
        config.jump_settle_ms = 1000;
    }
    if !(1..=5000).contains(&config.select_duration_ms) {
        warn!(value = config.select_duration_ms, "select_duration_ms out of range; clamping");
        config.select_duration_ms = config.select_duration_ms.clamp(1, 5000);
    }

    config.thumbnail_width = config.thumbnail_width.clamp(64, 4096);
    config.detail_width = config.detail_width.clamp(64, 4096);
    config.image_quality = config.image_quality.clamp(1, 100);

    if config.sanity_project_id.trim().is_empty() {
        warn!("Empty sanity_project_id; using default");
        config.sanity_project_id = defaults.sanity_project_id;
    }
    if config.sanity_dataset.trim().is_empty() {
        warn!("Empty sanity_dataset; using default");
        config.sanity_dataset = defaults.sanity_dataset;
    }
}

fn clamp_f32(name: &str, value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if !value.is_finite() {
        warn!(setting = name, "Non-finite value; using default");
        return fallback;
    }
    if value < min || value > max {
        warn!(setting = name, value, min, max, "Value out of range; clamping");
    }
    value.clamp(min, max)
}
