use super::super::state::App;
use super::Effect;
use iced::widget::image::Handle;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        let next = self.config.theme.toggled();
        info!(theme = %next, "Toggled theme");
        self.config.theme = next;
        effects.push(Effect::SaveConfig);
    }

    pub(super) fn handle_image_loaded(&mut self, url: String, result: Result<Handle, String>) {
        if let Err(err) = &result {
            warn!(%url, "Image failed to load: {err}");
        }
        let ok = result.is_ok();
        if self.images.complete(&url, result) {
            debug!(%url, ok, "Image stored");
        } else {
            debug!(%url, "Dropping result for an image nobody asked for");
        }
    }
}
