mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::catalog::{CatalogSource, Project};
use crate::config::AppConfig;
use crate::theme::Theme;
use iced::{Size, window};

/// Launch the gallery window for the given catalogue.
pub fn run_app(
    projects: Vec<Project>,
    source: CatalogSource,
    config: AppConfig,
    bookmark: Option<String>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        min_size: Some(Size::new(480.0, 360.0)),
        ..window::Settings::default()
    };

    iced::application("Loop Gallery", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| Theme::from(app.config.theme).into())
        .run_with(move || App::bootstrap(projects, source, config, bookmark))
}
