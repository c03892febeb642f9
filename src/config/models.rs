use crate::gallery::GalleryTuning;
use serde::Deserialize;
use std::time::Duration;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_wrap_low_threshold")]
    pub wrap_low_threshold: f32,
    #[serde(default = "crate::config::defaults::default_wrap_high_threshold")]
    pub wrap_high_threshold: f32,
    #[serde(default = "crate::config::defaults::default_parallax_strength_px")]
    pub parallax_strength_px: f32,
    #[serde(default = "crate::config::defaults::default_jump_settle_ms")]
    pub jump_settle_ms: u64,
    #[serde(default = "crate::config::defaults::default_select_duration_ms")]
    pub select_duration_ms: u64,
    #[serde(default = "crate::config::defaults::default_slot_height_ratio")]
    pub slot_height_ratio: f32,
    #[serde(default = "crate::config::defaults::default_slot_gap_ratio")]
    pub slot_gap_ratio: f32,
    #[serde(default = "crate::config::defaults::default_coalesce_above_slots")]
    pub coalesce_above_slots: usize,
    #[serde(default)]
    pub resume_last_project: bool,
    #[serde(default = "crate::config::defaults::default_sanity_project_id")]
    pub sanity_project_id: String,
    #[serde(default = "crate::config::defaults::default_sanity_dataset")]
    pub sanity_dataset: String,
    #[serde(default = "crate::config::defaults::default_thumbnail_width")]
    pub thumbnail_width: u32,
    #[serde(default = "crate::config::defaults::default_detail_width")]
    pub detail_width: u32,
    #[serde(default = "crate::config::defaults::default_image_quality")]
    pub image_quality: u8,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_next")]
    pub key_next: String,
    #[serde(default = "crate::config::defaults::default_key_prev")]
    pub key_prev: String,
    #[serde(default = "crate::config::defaults::default_key_open")]
    pub key_open: String,
    #[serde(default = "crate::config::defaults::default_key_back")]
    pub key_back: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_theme")]
    pub key_toggle_theme: String,
    #[serde(default = "crate::config::defaults::default_key_safe_quit")]
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::default(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            wrap_low_threshold: crate::config::defaults::default_wrap_low_threshold(),
            wrap_high_threshold: crate::config::defaults::default_wrap_high_threshold(),
            parallax_strength_px: crate::config::defaults::default_parallax_strength_px(),
            jump_settle_ms: crate::config::defaults::default_jump_settle_ms(),
            select_duration_ms: crate::config::defaults::default_select_duration_ms(),
            slot_height_ratio: crate::config::defaults::default_slot_height_ratio(),
            slot_gap_ratio: crate::config::defaults::default_slot_gap_ratio(),
            coalesce_above_slots: crate::config::defaults::default_coalesce_above_slots(),
            resume_last_project: false,
            sanity_project_id: crate::config::defaults::default_sanity_project_id(),
            sanity_dataset: crate::config::defaults::default_sanity_dataset(),
            thumbnail_width: crate::config::defaults::default_thumbnail_width(),
            detail_width: crate::config::defaults::default_detail_width(),
            image_quality: crate::config::defaults::default_image_quality(),
            log_level: crate::config::defaults::default_log_level(),
            key_next: crate::config::defaults::default_key_next(),
            key_prev: crate::config::defaults::default_key_prev(),
            key_open: crate::config::defaults::default_key_open(),
            key_back: crate::config::defaults::default_key_back(),
            key_toggle_theme: crate::config::defaults::default_key_toggle_theme(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
        }
    }
}

impl AppConfig {
    pub fn gallery_tuning(&self) -> GalleryTuning {
        GalleryTuning {
            wrap_low: self.wrap_low_threshold,
            wrap_high: self.wrap_high_threshold,
            parallax_strength_px: self.parallax_strength_px,
            jump_settle: Duration::from_millis(self.jump_settle_ms),
            select_duration: Duration::from_millis(self.select_duration_ms),
            slot_height_ratio: self.slot_height_ratio,
            slot_gap_ratio: self.slot_gap_ratio,
            coalesce_above_slots: self.coalesce_above_slots,
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    #[default]
    Night,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
