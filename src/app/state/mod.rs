mod constants;
mod images;

use crate::cache::save_bookmark;
use crate::cancellation::CancellationToken;
use crate::catalog::{CatalogSource, Category, Project, visible_indices};
use crate::config::AppConfig;
use crate::gallery::{GalleryTuning, LoopingGallery};
use crate::image_url::ImageUrlBuilder;
use iced::Task;
use tracing::{debug, info, warn};

use super::messages::Message;
use super::update::{Effect, ImageRequest};

pub(crate) use constants::*;
pub(in crate::app) use images::ImageState;

/// Which screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::app) enum Route {
    Gallery,
    /// Position in the visible (filtered) list.
    Project(usize),
}

pub(in crate::app) struct WindowState {
    pub(in crate::app) width: f32,
    pub(in crate::app) height: f32,
}

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) source: CatalogSource,
    pub(super) projects: Vec<Project>,
    pub(super) filter: Option<Category>,
    pub(super) visible: Vec<usize>,
    pub(super) gallery: LoopingGallery,
    pub(super) route: Route,
    pub(super) images: ImageState,
    pub(super) urls: ImageUrlBuilder,
    pub(super) window: WindowState,
    pub(super) cancellation: CancellationToken,
}

impl App {
    pub(super) fn bootstrap(
        projects: Vec<Project>,
        source: CatalogSource,
        config: AppConfig,
        bookmark: Option<String>,
    ) -> (App, Task<Message>) {
        let (mut app, effects) = App::new(projects, source, config, bookmark);
        let task = Task::batch(effects.into_iter().map(|effect| app.run_effect(effect)));
        (app, task)
    }

    pub(super) fn new(
        projects: Vec<Project>,
        source: CatalogSource,
        config: AppConfig,
        bookmark: Option<String>,
    ) -> (App, Vec<Effect>) {
        let visible = visible_indices(&projects, None);
        let mut app = App {
            urls: ImageUrlBuilder::from_config(&config),
            window: WindowState {
                width: config.window_width,
                height: config.window_height,
            },
            gallery: LoopingGallery::new(Vec::new(), GalleryTuning::default()),
            config,
            source,
            projects,
            filter: None,
            visible,
            route: Route::Gallery,
            images: ImageState::default(),
            cancellation: CancellationToken::new(),
        };

        let resume = if app.config.resume_last_project {
            bookmark.as_deref().and_then(|id| app.visible_position_of(id))
        } else {
            None
        };
        if let Some(position) = resume {
            info!(position, "Resuming at bookmarked project");
        } else if app.config.resume_last_project {
            debug!(?bookmark, "No matching bookmark to resume");
        }

        let mut effects = Vec::new();
        app.rebuild_gallery(resume, &mut effects);
        info!(
            source = %app.source,
            projects = app.projects.len(),
            "Gallery ready"
        );
        (app, effects)
    }

    pub(super) fn gallery_viewport_height(&self) -> f32 {
        (self.window.height - HEADER_HEIGHT_PX).max(1.0)
    }

    pub(super) fn visible_project(&self, position: usize) -> Option<&Project> {
        self.visible
            .get(position)
            .and_then(|idx| self.projects.get(*idx))
    }

    pub(super) fn visible_position_of(&self, id: &str) -> Option<usize> {
        self.visible
            .iter()
            .position(|idx| self.projects.get(*idx).is_some_and(|p| p.id == id))
    }

    pub(super) fn thumbnail_url(&self, project: &Project) -> Option<String> {
        let reference = project.thumbnail_ref()?;
        self.resolve_url(project, reference, self.config.thumbnail_width)
    }

    pub(super) fn detail_urls(&self, project: &Project) -> Vec<String> {
        project
            .detail_refs()
            .into_iter()
            .filter_map(|reference| {
                self.resolve_url(project, reference, self.config.detail_width)
            })
            .collect()
    }

    fn resolve_url(&self, project: &Project, reference: &str, width: u32) -> Option<String> {
        match self.urls.url(reference, width) {
            Ok(url) => Some(url),
            Err(err) => {
                warn!(project = %project.id, "Cannot resolve image: {err:#}");
                None
            }
        }
    }

    /// Start tracking the given URLs; only the ones not already known are
    /// returned for fetching.
    pub(super) fn image_requests(&mut self, urls: Vec<String>, max_width: u32) -> Option<Effect> {
        let requests: Vec<ImageRequest> = urls
            .into_iter()
            .filter(|url| self.images.request(url))
            .map(|url| ImageRequest { url, max_width })
            .collect();
        (!requests.is_empty()).then_some(Effect::FetchImages(requests))
    }

    /// Id of the project the user is looking at.
    pub(super) fn current_project_id(&self) -> Option<&str> {
        let position = match self.route {
            Route::Project(position) => position,
            Route::Gallery => self.gallery.active_item().map(|_| self.gallery.active_index())?,
        };
        self.visible_project(position).map(|p| p.id.as_str())
    }

    pub(super) fn persist_bookmark(&self) {
        if let Some(id) = self.current_project_id() {
            save_bookmark(&self.source.cache_key(), id);
            debug!(id, "Saved bookmark");
        }
    }
}
