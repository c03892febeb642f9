mod appearance;
mod core;
mod gallery;
mod navigation;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug)]
pub(super) enum Effect {
    SaveConfig,
    SaveBookmark,
    ScrollGallery(f32),
    ResetDetailScroll,
    FetchImages(Vec<ImageRequest>),
    QuitSafely,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ImageRequest {
    pub(super) url: String,
    pub(super) max_width: u32,
}
