//! Resolve catalogue image references into fetchable URLs.
//!
//! CMS asset references look like `image-<assetId>-<W>x<H>-<ext>` and map onto
//! the image CDN. Absolute http(s) URLs are used as they are.

use crate::config::AppConfig;
use anyhow::{Result, anyhow, bail};

const CDN_BASE: &str = "https://cdn.sanity.io/images";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
    quality: u8,
}

#[derive(Debug, PartialEq, Eq)]
struct AssetId<'a> {
    id: &'a str,
    width: u32,
    height: u32,
    format: &'a str,
}

impl ImageUrlBuilder {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>, quality: u8) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            quality: quality.clamp(1, 100),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.sanity_project_id.clone(),
            config.sanity_dataset.clone(),
            config.image_quality,
        )
    }

    /// URL for `reference`, resized to `width` pixels when served by the CDN.
    pub fn url(&self, reference: &str, width: u32) -> Result<String> {
        let reference = reference.trim();
        if reference.is_empty() {
            bail!("empty image reference");
        }
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return Ok(reference.to_string());
        }

        let asset = parse_asset_ref(reference)?;
        Ok(format!(
            "{CDN_BASE}/{}/{}/{}-{}x{}.{}?w={}&q={}&auto=format",
            self.project_id,
            self.dataset,
            asset.id,
            asset.width,
            asset.height,
            asset.format,
            width.max(1),
            self.quality,
        ))
    }
}

fn parse_asset_ref(reference: &str) -> Result<AssetId<'_>> {
    let rest = reference
        .strip_prefix("image-")
        .ok_or_else(|| anyhow!("unsupported image reference {reference:?}"))?;
    let mut parts = rest.rsplitn(3, '-');
    let (Some(format), Some(dimensions), Some(id)) = (parts.next(), parts.next(), parts.next())
    else {
        bail!("malformed image reference {reference:?}");
    };
    let (width, height) = dimensions
        .split_once('x')
        .and_then(|(w, h)| Some((w.parse::<u32>().ok()?, h.parse::<u32>().ok()?)))
        .ok_or_else(|| anyhow!("malformed dimensions in image reference {reference:?}"))?;
    if id.is_empty() || format.is_empty() {
        bail!("malformed image reference {reference:?}");
    }
    Ok(AssetId {
        id,
        width,
        height,
        format,
    })
}
