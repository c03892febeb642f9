use super::super::state::{App, Route};
use super::Effect;
use crate::catalog::{Category, visible_indices};
use tracing::{debug, info};

impl App {
    /// Leave the gallery for the project at `position` in the visible list.
    pub(super) fn open_project(&mut self, position: usize, effects: &mut Vec<Effect>) {
        let Some(project) = self.visible_project(position) else {
            debug!(position, "Ignoring open request for unknown project");
            return;
        };
        info!(id = %project.id, title = %project.title, "Opening project");
        let urls = self.detail_urls(project);

        self.gallery.unmount();
        self.route = Route::Project(position);
        if let Some(effect) = self.image_requests(urls, self.config.detail_width) {
            effects.push(effect);
        }
        effects.push(Effect::ResetDetailScroll);
        effects.push(Effect::SaveBookmark);
    }

    pub(super) fn handle_open_active(&mut self, effects: &mut Vec<Effect>) {
        if self.route != Route::Gallery || self.gallery.active_item().is_none() {
            return;
        }
        let position = self.gallery.active_index();
        self.open_project(position, effects);
    }

    pub(super) fn handle_project_step(&mut self, step: isize, effects: &mut Vec<Effect>) {
        let Route::Project(current) = self.route else {
            return;
        };
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        let next = (current as isize + step).rem_euclid(len as isize) as usize;
        if next != current {
            self.open_project(next, effects);
        }
    }

    pub(super) fn handle_back_to_gallery(&mut self, effects: &mut Vec<Effect>) {
        let Route::Project(position) = self.route else {
            return;
        };
        self.route = Route::Gallery;
        self.rebuild_gallery(Some(position), effects);
        effects.push(Effect::SaveBookmark);
    }

    pub(super) fn handle_filter_selected(
        &mut self,
        filter: Option<Category>,
        effects: &mut Vec<Effect>,
    ) {
        if filter == self.filter && self.route == Route::Gallery {
            return;
        }
        info!(
            filter = filter.map(|c| c.slug()).unwrap_or("all"),
            "Filter changed"
        );
        self.filter = filter;
        self.visible = visible_indices(&self.projects, filter);
        self.route = Route::Gallery;
        self.rebuild_gallery(None, effects);
    }
}
