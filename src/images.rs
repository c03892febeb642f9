//! Image download, disk caching and decoding for iced.

use crate::cache;
use crate::cancellation::CancellationToken;
use anyhow::{Context, Result};
use iced::futures::channel::oneshot;
use iced::widget::image::Handle;
use image::imageops::FilterType;
use once_cell::sync::Lazy;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

static HTTP: Lazy<reqwest::blocking::Client> = Lazy::new(|| {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("loop-gallery/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::blocking::Client::new())
});

/// Fetch on a dedicated thread once polled; the blocking client must stay off
/// the async executor.
pub fn fetch_image_task(
    url: String,
    max_width: u32,
    token: CancellationToken,
) -> impl Future<Output = Result<Handle, String>> {
    async move {
        let (tx, rx) = oneshot::channel();
        std::thread::spawn(move || {
            let result = fetch_image(&url, max_width, &token).map_err(|err| {
                warn!(%url, "Image fetch failed: {err:#}");
                format!("{err:#}")
            });
            let _ = tx.send(result);
        });
        rx.await
            .unwrap_or_else(|_| Err("image worker exited without a result".to_string()))
    }
}

pub fn fetch_image(url: &str, max_width: u32, token: &CancellationToken) -> Result<Handle> {
    let started = Instant::now();
    token.check_cancelled("lookup")?;

    if let Some(bytes) = cache::read_cached_image(url) {
        token.check_cancelled("decode")?;
        match decode(&bytes, max_width) {
            Ok(handle) => {
                debug!(%url, elapsed_ms = started.elapsed().as_millis(), "Decoded cached image");
                return Ok(handle);
            }
            Err(err) => warn!(%url, "Discarding unreadable cached image: {err:#}"),
        }
    }

    token.check_cancelled("download")?;
    let bytes = download(url)?;
    cache::write_cached_image(url, &bytes);

    token.check_cancelled("decode")?;
    let handle = decode(&bytes, max_width)?;
    debug!(
        %url,
        bytes = bytes.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "Downloaded image"
    );
    Ok(handle)
}

fn download(url: &str) -> Result<Vec<u8>> {
    let response = HTTP
        .get(url)
        .send()
        .with_context(|| format!("requesting {url}"))?
        .error_for_status()
        .with_context(|| format!("bad status for {url}"))?;
    let bytes = response
        .bytes()
        .with_context(|| format!("reading body of {url}"))?;
    Ok(bytes.to_vec())
}

/// Decode and downscale so the image is at most `max_width` pixels wide.
pub fn decode(bytes: &[u8], max_width: u32) -> Result<Handle> {
    let mut decoded = image::load_from_memory(bytes).context("decoding image bytes")?;
    let max_width = max_width.max(1);
    if decoded.width() > max_width {
        let height = ((decoded.height() as u64 * max_width as u64) / decoded.width() as u64)
            .max(1) as u32;
        decoded = decoded.resize_exact(max_width, height, FilterType::Triangle);
    }
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}
