use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    gallery: GalleryConfig,
    #[serde(default)]
    images: ImagesConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            window_width: tables.appearance.window_width,
            window_height: tables.appearance.window_height,
            wrap_low_threshold: tables.gallery.wrap_low_threshold,
            wrap_high_threshold: tables.gallery.wrap_high_threshold,
            parallax_strength_px: tables.gallery.parallax_strength_px,
            jump_settle_ms: tables.gallery.jump_settle_ms,
            select_duration_ms: tables.gallery.select_duration_ms,
            slot_height_ratio: tables.gallery.slot_height_ratio,
            slot_gap_ratio: tables.gallery.slot_gap_ratio,
            coalesce_above_slots: tables.gallery.coalesce_above_slots,
            resume_last_project: tables.gallery.resume_last_project,
            sanity_project_id: tables.images.sanity_project_id,
            sanity_dataset: tables.images.sanity_dataset,
            thumbnail_width: tables.images.thumbnail_width,
            detail_width: tables.images.detail_width,
            image_quality: tables.images.image_quality,
            log_level: tables.logging.log_level,
            key_next: tables.keys.key_next,
            key_prev: tables.keys.key_prev,
            key_open: tables.keys.key_open,
            key_back: tables.keys.key_back,
            key_toggle_theme: tables.keys.key_toggle_theme,
            key_safe_quit: tables.keys.key_safe_quit,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
                window_width: config.window_width,
                window_height: config.window_height,
            },
            gallery: GalleryConfig {
                wrap_low_threshold: config.wrap_low_threshold,
                wrap_high_threshold: config.wrap_high_threshold,
                parallax_strength_px: config.parallax_strength_px,
                jump_settle_ms: config.jump_settle_ms,
                select_duration_ms: config.select_duration_ms,
                slot_height_ratio: config.slot_height_ratio,
                slot_gap_ratio: config.slot_gap_ratio,
                coalesce_above_slots: config.coalesce_above_slots,
                resume_last_project: config.resume_last_project,
            },
            images: ImagesConfig {
                sanity_project_id: config.sanity_project_id.clone(),
                sanity_dataset: config.sanity_dataset.clone(),
                thumbnail_width: config.thumbnail_width,
                detail_width: config.detail_width,
                image_quality: config.image_quality,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            keys: KeysConfig {
                key_next: config.key_next.clone(),
                key_prev: config.key_prev.clone(),
                key_open: config.key_open.clone(),
                key_back: config.key_back.clone(),
                key_toggle_theme: config.key_toggle_theme.clone(),
                key_safe_quit: config.key_safe_quit.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct GalleryConfig {
    #[serde(default = "defaults::default_wrap_low_threshold")]
    wrap_low_threshold: f32,
    #[serde(default = "defaults::default_wrap_high_threshold")]
    wrap_high_threshold: f32,
    #[serde(default = "defaults::default_parallax_strength_px")]
    parallax_strength_px: f32,
    #[serde(default = "defaults::default_jump_settle_ms")]
    jump_settle_ms: u64,
    #[serde(default = "defaults::default_select_duration_ms")]
    select_duration_ms: u64,
    #[serde(default = "defaults::default_slot_height_ratio")]
    slot_height_ratio: f32,
    #[serde(default = "defaults::default_slot_gap_ratio")]
    slot_gap_ratio: f32,
    #[serde(default = "defaults::default_coalesce_above_slots")]
    coalesce_above_slots: usize,
    #[serde(default)]
    resume_last_project: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        GalleryConfig {
            wrap_low_threshold: defaults::default_wrap_low_threshold(),
            wrap_high_threshold: defaults::default_wrap_high_threshold(),
            parallax_strength_px: defaults::default_parallax_strength_px(),
            jump_settle_ms: defaults::default_jump_settle_ms(),
            select_duration_ms: defaults::default_select_duration_ms(),
            slot_height_ratio: defaults::default_slot_height_ratio(),
            slot_gap_ratio: defaults::default_slot_gap_ratio(),
            coalesce_above_slots: defaults::default_coalesce_above_slots(),
            resume_last_project: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ImagesConfig {
    #[serde(default = "defaults::default_sanity_project_id")]
    sanity_project_id: String,
    #[serde(default = "defaults::default_sanity_dataset")]
    sanity_dataset: String,
    #[serde(default = "defaults::default_thumbnail_width")]
    thumbnail_width: u32,
    #[serde(default = "defaults::default_detail_width")]
    detail_width: u32,
    #[serde(default = "defaults::default_image_quality")]
    image_quality: u8,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        ImagesConfig {
            sanity_project_id: defaults::default_sanity_project_id(),
            sanity_dataset: defaults::default_sanity_dataset(),
            thumbnail_width: defaults::default_thumbnail_width(),
            detail_width: defaults::default_detail_width(),
            image_quality: defaults::default_image_quality(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_next")]
    key_next: String,
    #[serde(default = "defaults::default_key_prev")]
    key_prev: String,
    #[serde(default = "defaults::default_key_open")]
    key_open: String,
    #[serde(default = "defaults::default_key_back")]
    key_back: String,
    #[serde(default = "defaults::default_key_toggle_theme")]
    key_toggle_theme: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    key_safe_quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            key_next: defaults::default_key_next(),
            key_prev: defaults::default_key_prev(),
            key_open: defaults::default_key_open(),
            key_back: defaults::default_key_back(),
            key_toggle_theme: defaults::default_key_toggle_theme(),
            key_safe_quit: defaults::default_key_safe_quit(),
        }
    }
}
