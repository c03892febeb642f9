pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    900.0
}

pub(crate) fn default_wrap_low_threshold() -> f32 {
    0.4
}

pub(crate) fn default_wrap_high_threshold() -> f32 {
    1.6
}

pub(crate) fn default_parallax_strength_px() -> f32 {
    40.0
}

pub(crate) fn default_jump_settle_ms() -> u64 {
    50
}

pub(crate) fn default_select_duration_ms() -> u64 {
    600
}

pub(crate) fn default_slot_height_ratio() -> f32 {
    0.4
}

pub(crate) fn default_slot_gap_ratio() -> f32 {
    0.04
}

pub(crate) fn default_coalesce_above_slots() -> usize {
    96
}

pub(crate) fn default_sanity_project_id() -> String {
    "oz88eact".to_string()
}

pub(crate) fn default_sanity_dataset() -> String {
    "production".to_string()
}

pub(crate) fn default_thumbnail_width() -> u32 {
    800
}

pub(crate) fn default_detail_width() -> u32 {
    1400
}

pub(crate) fn default_image_quality() -> u8 {
    80
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_next() -> String {
    "j".to_string()
}

pub(crate) fn default_key_prev() -> String {
    "k".to_string()
}

pub(crate) fn default_key_open() -> String {
    "enter".to_string()
}

pub(crate) fn default_key_back() -> String {
    "escape".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "ctrl+t".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
