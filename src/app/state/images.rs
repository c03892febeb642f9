use iced::widget::image::Handle;
use std::collections::HashMap;

pub(in crate::app) enum ImageSlot {
    Loading,
    Ready(Handle),
    Failed,
}

/// Decoded images keyed by the URL they were fetched from.
#[derive(Default)]
pub struct ImageState {
    slots: HashMap<String, ImageSlot>,
}

impl ImageState {
    /// Track `url`; false when it is already loading or loaded.
    pub(in crate::app) fn request(&mut self, url: &str) -> bool {
        if self.slots.contains_key(url) {
            return false;
        }
        self.slots.insert(url.to_string(), ImageSlot::Loading);
        true
    }

    /// Store a fetch result; results for untracked URLs are dropped.
    pub(in crate::app) fn complete(&mut self, url: &str, result: Result<Handle, String>) -> bool {
        let Some(slot) = self.slots.get_mut(url) else {
            return false;
        };
        *slot = match result {
            Ok(handle) => ImageSlot::Ready(handle),
            Err(_) => ImageSlot::Failed,
        };
        true
    }

    pub(in crate::app) fn handle(&self, url: &str) -> Option<&Handle> {
        match self.slots.get(url) {
            Some(ImageSlot::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    pub(in crate::app) fn is_failed(&self, url: &str) -> bool {
        matches!(self.slots.get(url), Some(ImageSlot::Failed))
    }
}
