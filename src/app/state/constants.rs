use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Fixed header above the gallery; the scroll viewport is the window minus this.
pub(crate) const HEADER_HEIGHT_PX: f32 = 56.0;
pub(crate) const CAPTION_FONT_SIZE_PX: f32 = 15.0;
pub(crate) const CAPTION_SPACING_PX: f32 = 4.0;
pub(crate) const ACTIVE_SLOT_WIDTH_RATIO: f32 = 0.5;
pub(crate) const INACTIVE_SLOT_WIDTH_RATIO: f32 = 0.3;
pub(crate) const INACTIVE_SLOT_OPACITY: f32 = 0.4;
pub(crate) const SLOT_RIGHT_MARGIN_RATIO: f32 = 0.08;
pub(crate) const DETAIL_IMAGE_HEIGHT_PX: f32 = 640.0;
pub(crate) const EMPTY_CATEGORY_MESSAGE: &str = "Aucun projet dans cette catégorie.";
pub(crate) static GALLERY_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("gallery-scroll"));
pub(crate) static DETAIL_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("detail-scroll"));
