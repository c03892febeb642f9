use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use std::time::Instant;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::GalleryScrolled {
                offset_y,
                viewport_height,
            } => self.handle_gallery_scrolled(offset_y, viewport_height, &mut effects),
            Message::Frame(now) => self.handle_frame(now, &mut effects),
            Message::CaptionPressed(index) => {
                self.handle_caption_pressed(index, Instant::now(), &mut effects)
            }
            Message::SlotPressed(extended) => {
                self.handle_slot_pressed(extended, Instant::now(), &mut effects)
            }
            Message::SelectNext => self.handle_select_step(1, Instant::now(), &mut effects),
            Message::SelectPrevious => self.handle_select_step(-1, Instant::now(), &mut effects),
            Message::OpenActive => self.handle_open_active(&mut effects),
            Message::NextProject => self.handle_project_step(1, &mut effects),
            Message::PreviousProject => self.handle_project_step(-1, &mut effects),
            Message::BackToGallery => self.handle_back_to_gallery(&mut effects),
            Message::FilterSelected(filter) => self.handle_filter_selected(filter, &mut effects),
            Message::ImageLoaded { url, result } => self.handle_image_loaded(url, result),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects)
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        effects
    }
}
