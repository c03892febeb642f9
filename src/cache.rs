//! Small on-disk caches under `.cache/`.
//!
//! The last active project is remembered per catalogue source in a tiny TOML
//! file under a hash of the source path, next to the appearance settings
//! changed from the UI. Downloaded image bytes are stored
//! under `.cache/images/` keyed by a hash of their URL. All writes are best
//! effort; errors are ignored to keep the UI responsive.

use crate::config::{AppConfig, parse_config, serialize_config};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const CACHE_DIR: &str = ".cache";

/// Load the bookmarked project id for a catalogue source, if present.
pub fn load_bookmark(source_key: &Path) -> Option<String> {
    load_bookmark_in(Path::new(CACHE_DIR), source_key)
}

/// Persist the active project id for a catalogue source.
pub fn save_bookmark(source_key: &Path, project_id: &str) {
    save_bookmark_in(Path::new(CACHE_DIR), source_key, project_id)
}

fn load_bookmark_in(root: &Path, source_key: &Path) -> Option<String> {
    let path = bookmark_path(root, source_key);
    let data = fs::read_to_string(path).ok()?;
    let value: BookmarkEntry = toml::from_str(&data).ok()?;
    Some(value.active_id).filter(|id| !id.is_empty())
}

fn save_bookmark_in(root: &Path, source_key: &Path, project_id: &str) {
    let path = bookmark_path(root, source_key);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let entry = BookmarkEntry {
        active_id: project_id.to_string(),
    };
    if let Ok(contents) = toml::to_string(&entry) {
        if let Ok(mut file) = fs::File::create(path) {
            let _ = file.write_all(contents.as_bytes());
        }
    }
}

/// Settings saved from the UI for a catalogue source.
pub fn load_source_config(source_key: &Path) -> Option<AppConfig> {
    load_source_config_in(Path::new(CACHE_DIR), source_key)
}

pub fn save_source_config(source_key: &Path, config: &AppConfig) {
    save_source_config_in(Path::new(CACHE_DIR), source_key, config)
}

fn load_source_config_in(root: &Path, source_key: &Path) -> Option<AppConfig> {
    let path = hash_dir_in(root, source_key).join("config.toml");
    let data = fs::read_to_string(path).ok()?;
    parse_config(&data).ok()
}

fn save_source_config_in(root: &Path, source_key: &Path, config: &AppConfig) {
    let path = hash_dir_in(root, source_key).join("config.toml");
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(contents) = serialize_config(config) {
        let _ = fs::write(path, contents);
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct BookmarkEntry {
    active_id: String,
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn hash_dir_in(root: &Path, source_key: &Path) -> PathBuf {
    root.join(sha256_hex(
        source_key.as_os_str().to_string_lossy().as_bytes(),
    ))
}

fn bookmark_path(root: &Path, source_key: &Path) -> PathBuf {
    hash_dir_in(root, source_key).join("bookmark.toml")
}

pub fn image_cache_path(url: &str) -> PathBuf {
    Path::new(CACHE_DIR)
        .join("images")
        .join(sha256_hex(url.as_bytes()))
}

pub fn read_cached_image(url: &str) -> Option<Vec<u8>> {
    fs::read(image_cache_path(url))
        .ok()
        .filter(|bytes| !bytes.is_empty())
}

pub fn write_cached_image(url: &str, bytes: &[u8]) {
    let path = image_cache_path(url);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let _ = fs::write(path, bytes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_root(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        std::env::temp_dir().join(format!("loop-gallery-{name}-{}-{nanos}", std::process::id()))
    }

    #[test]
    fn hash_dir_is_stable_and_distinct() {
        let root = Path::new(CACHE_DIR);
        let a = hash_dir_in(root, Path::new("catalog/a.json"));
        let b = hash_dir_in(root, Path::new("catalog/b.json"));
        assert_eq!(a, hash_dir_in(root, Path::new("catalog/a.json")));
        assert_ne!(a, b);
        assert!(a.starts_with(CACHE_DIR));
        let name = a.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        assert_eq!(name.len(), 64);
    }

    #[test]
    fn image_paths_are_keyed_by_url() {
        let path = image_cache_path("https://example.test/a.jpg");
        assert!(path.starts_with(Path::new(CACHE_DIR).join("images")));
        assert_ne!(path, image_cache_path("https://example.test/b.jpg"));
    }

    #[test]
    fn bookmark_round_trips_through_disk() {
        let root = scratch_root("bookmark");
        let key = Path::new("placeholder-catalog");
        assert_eq!(load_bookmark_in(&root, key), None);

        save_bookmark_in(&root, key, "project-7");
        assert_eq!(load_bookmark_in(&root, key).as_deref(), Some("project-7"));

        save_bookmark_in(&root, key, "project-2");
        assert_eq!(load_bookmark_in(&root, key).as_deref(), Some("project-2"));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn source_config_keeps_theme_choice() {
        let root = scratch_root("config");
        let key = Path::new("catalog/site.json");
        assert!(load_source_config_in(&root, key).is_none());

        let config = AppConfig {
            theme: crate::config::ThemeMode::Day,
            ..AppConfig::default()
        };
        save_source_config_in(&root, key, &config);
        let loaded = load_source_config_in(&root, key).expect("saved config loads");
        assert_eq!(loaded.theme, crate::config::ThemeMode::Day);
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn corrupt_bookmark_is_ignored() {
        let root = scratch_root("corrupt");
        let key = Path::new("catalog.json");
        let path = bookmark_path(&root, key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create scratch dir");
        }
        fs::write(&path, "active_id = ").expect("write corrupt bookmark");
        assert_eq!(load_bookmark_in(&root, key), None);
        let _ = fs::remove_dir_all(root);
    }
}
