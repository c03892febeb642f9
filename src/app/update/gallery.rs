use super::super::state::{App, Route};
use super::Effect;
use crate::gallery::{GalleryEffect, GalleryItem, LoopingGallery};
use std::time::Instant;
use tracing::{debug, info};

impl App {
    /// Replace the gallery with a fresh one for the visible projects,
    /// optionally centered on `focus`.
    pub(in crate::app) fn rebuild_gallery(&mut self, focus: Option<usize>, effects: &mut Vec<Effect>) {
        self.gallery.unmount();
        let items: Vec<GalleryItem> = self
            .visible
            .iter()
            .filter_map(|idx| self.projects.get(*idx))
            .map(GalleryItem::from)
            .collect();
        info!(
            items = items.len(),
            filter = ?self.filter,
            focus,
            "Building gallery"
        );
        self.gallery = LoopingGallery::new(items, self.config.gallery_tuning());

        let mut gallery_effects = self.gallery.mount(self.gallery_viewport_height());
        if let Some(position) = focus {
            gallery_effects.extend(self.gallery.center_on(position));
        }
        self.apply_gallery_effects(gallery_effects, effects);

        let urls: Vec<String> = self
            .visible
            .iter()
            .filter_map(|idx| self.projects.get(*idx))
            .filter_map(|project| self.thumbnail_url(project))
            .collect();
        if let Some(effect) = self.image_requests(urls, self.config.thumbnail_width) {
            effects.push(effect);
        }
    }

    pub(super) fn apply_gallery_effects(
        &mut self,
        gallery_effects: Vec<GalleryEffect>,
        effects: &mut Vec<Effect>,
    ) {
        let mut scroll_to = None;
        for effect in gallery_effects {
            match effect {
                GalleryEffect::ScrollTo(y) => scroll_to = Some(y),
                GalleryEffect::ActiveChanged(index) => {
                    debug!(
                        index,
                        title = self.gallery.items().get(index).map(|it| it.title.as_str()),
                        "Active project changed"
                    );
                }
                GalleryEffect::Open(index) => self.open_project(index, effects),
            }
        }
        if let Some(y) = scroll_to {
            effects.push(Effect::ScrollGallery(y));
        }
    }

    pub(super) fn handle_gallery_scrolled(
        &mut self,
        offset_y: f32,
        viewport_height: f32,
        effects: &mut Vec<Effect>,
    ) {
        if self.route != Route::Gallery {
            return;
        }
        let gallery_effects = self
            .gallery
            .on_scroll(offset_y, viewport_height, Instant::now());
        self.apply_gallery_effects(gallery_effects, effects);
    }

    pub(super) fn handle_frame(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if self.route != Route::Gallery {
            return;
        }
        let gallery_effects = self.gallery.tick(now);
        self.apply_gallery_effects(gallery_effects, effects);
    }

    pub(super) fn handle_caption_pressed(
        &mut self,
        index: usize,
        now: Instant,
        effects: &mut Vec<Effect>,
    ) {
        let gallery_effects = self.gallery.press_caption(index, now);
        self.apply_gallery_effects(gallery_effects, effects);
    }

    pub(super) fn handle_slot_pressed(
        &mut self,
        extended: usize,
        now: Instant,
        effects: &mut Vec<Effect>,
    ) {
        let gallery_effects = self.gallery.press_slot(extended, now);
        self.apply_gallery_effects(gallery_effects, effects);
    }

    pub(super) fn handle_select_step(&mut self, step: isize, now: Instant, effects: &mut Vec<Effect>) {
        let len = self.gallery.len();
        if len == 0 || self.route != Route::Gallery {
            return;
        }
        let target = (self.gallery.active_index() as isize + step).rem_euclid(len as isize) as usize;
        let gallery_effects = self.gallery.select_item(target, now);
        self.apply_gallery_effects(gallery_effects, effects);
    }

    pub(super) fn handle_window_resized(
        &mut self,
        width: f32,
        height: f32,
        effects: &mut Vec<Effect>,
    ) {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return;
        }
        self.window.width = width;
        self.window.height = height;
        if self.route == Route::Gallery {
            let gallery_effects = self.gallery.resize(self.gallery_viewport_height());
            self.apply_gallery_effects(gallery_effects, effects);
        }
    }
}
