use crate::catalog::Category;
use iced::keyboard::{Key, Modifiers};
use iced::widget::image::Handle;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    GalleryScrolled {
        offset_y: f32,
        viewport_height: f32,
    },
    Frame(Instant),
    CaptionPressed(usize),
    SlotPressed(usize),
    SelectNext,
    SelectPrevious,
    OpenActive,
    NextProject,
    PreviousProject,
    BackToGallery,
    FilterSelected(Option<Category>),
    ImageLoaded {
        url: String,
        result: Result<Handle, String>,
    },
    ToggleTheme,
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    SafeQuit,
}
