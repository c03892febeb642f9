use super::super::super::messages::Message;
use super::super::super::state::{App, DETAIL_SCROLL_ID, GALLERY_SCROLL_ID};
use super::super::Effect;
use crate::cache::save_source_config;
use crate::images::fetch_image_task;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, AbsoluteOffset, RelativeOffset};
use iced::window;
use tracing::{debug, info};

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveConfig => {
                save_source_config(&self.source.cache_key(), &self.config);
                Task::none()
            }
            Effect::SaveBookmark => {
                self.persist_bookmark();
                Task::none()
            }
            Effect::ScrollGallery(y) => {
                scrollable::scroll_to(GALLERY_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y })
            }
            Effect::ResetDetailScroll => {
                scrollable::snap_to(DETAIL_SCROLL_ID.clone(), RelativeOffset::START)
            }
            Effect::FetchImages(requests) => {
                debug!(count = requests.len(), "Dispatching image fetches");
                Task::batch(requests.into_iter().map(|request| {
                    let url = request.url.clone();
                    Task::perform(
                        fetch_image_task(request.url, request.max_width, self.cancellation.clone()),
                        move |result| Message::ImageLoaded {
                            url: url.clone(),
                            result,
                        },
                    )
                }))
            }
            Effect::QuitSafely => {
                info!(
                    phase = ?self.gallery.phase(),
                    offset = self.gallery.state().raw_offset,
                    "Quitting; cancelling outstanding image fetches"
                );
                self.cancellation.cancel();
                self.gallery.unmount();
                self.persist_bookmark();
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(iced::window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
