use super::messages::Message;
use super::state::{
    ACTIVE_SLOT_WIDTH_RATIO, App, CAPTION_FONT_SIZE_PX, CAPTION_SPACING_PX,
    DETAIL_IMAGE_HEIGHT_PX, DETAIL_SCROLL_ID, EMPTY_CATEGORY_MESSAGE, GALLERY_SCROLL_ID,
    HEADER_HEIGHT_PX, INACTIVE_SLOT_OPACITY, INACTIVE_SLOT_WIDTH_RATIO, Route,
    SLOT_RIGHT_MARGIN_RATIO,
};
use crate::catalog::{Category, Project};
use crate::gallery::GalleryItem;
use crate::theme;
use iced::alignment::Vertical;
use iced::widget::{
    Column, Space, button, column, container, horizontal_space, image, mouse_area, row,
    scrollable, text,
};
use iced::{ContentFit, Element, Length, Padding};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let body = match self.route {
            Route::Gallery => self.gallery_view(),
            Route::Project(position) => self.project_view(position),
        };
        column![self.header(), body].height(Length::Fill).into()
    }

    fn header(&self) -> Element<'_, Message> {
        let mut filters = row![
            button(text("Tout"))
                .style(theme::flat_button(self.filter.is_none()))
                .on_press(Message::FilterSelected(None))
        ]
        .spacing(8)
        .align_y(Vertical::Center);
        for category in Category::ALL {
            filters = filters.push(
                button(text(category.label()))
                    .style(theme::flat_button(self.filter == Some(category)))
                    .on_press(Message::FilterSelected(Some(category))),
            );
        }

        let theme_label = if matches!(self.config.theme, crate::config::ThemeMode::Night) {
            "Mode jour"
        } else {
            "Mode nuit"
        };
        let theme_toggle = button(text(theme_label))
            .style(theme::flat_button(false))
            .on_press(Message::ToggleTheme);

        container(
            row![filters, horizontal_space(), theme_toggle]
                .align_y(Vertical::Center)
                .width(Length::Fill),
        )
        .padding([0, 24])
        .center_y(Length::Fixed(HEADER_HEIGHT_PX))
        .into()
    }

    fn gallery_view(&self) -> Element<'_, Message> {
        let Some(layout) = self.gallery.layout().filter(|_| !self.gallery.is_empty()) else {
            return container(text(EMPTY_CATEGORY_MESSAGE).style(theme::muted_text))
                .center(Length::Fill)
                .into();
        };

        let active = self.gallery.active_index();
        let captions = self
            .gallery
            .items()
            .iter()
            .enumerate()
            .fold(Column::new(), |col, (idx, item)| {
                col.push(
                    button(
                        text(format!("{:02}/ {}", idx + 1, item.title.to_uppercase()))
                            .size(CAPTION_FONT_SIZE_PX),
                    )
                    .padding(0)
                    .style(theme::flat_button(idx == active))
                    .on_press(Message::CaptionPressed(idx)),
                )
            })
            .spacing(CAPTION_SPACING_PX);

        let image_height = layout.image_height();
        let half_gap = layout.gap() * 0.5;
        let slots = self
            .gallery
            .sequence()
            .iter()
            .fold(Column::new(), |col, (extended, item)| {
                let is_active = extended % self.gallery.len() == active;
                // Parallax can only move the picture within its own gap.
                let shift = self
                    .gallery
                    .parallax_offset(extended)
                    .clamp(-half_gap, half_gap);
                let top = half_gap + shift;
                let slot = container(self.slot_picture(item, image_height, is_active))
                    .padding(Padding {
                        top,
                        right: 0.0,
                        bottom: layout.gap() - top,
                        left: 0.0,
                    })
                    .height(Length::Fixed(layout.pitch()));
                col.push(mouse_area(slot).on_press(Message::SlotPressed(extended)))
            });

        let gallery = scrollable(slots.width(Length::Fill))
            .id(GALLERY_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::GalleryScrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
            })
            .width(Length::FillPortion(2))
            .height(Length::Fill);

        row![
            container(captions)
                .padding([0, 32])
                .width(Length::FillPortion(1))
                .center_y(Length::Fill),
            gallery,
        ]
        .height(Length::Fill)
        .into()
    }

    fn slot_picture(
        &self,
        item: &GalleryItem,
        image_height: f32,
        is_active: bool,
    ) -> Element<'_, Message> {
        let width_ratio = if is_active {
            ACTIVE_SLOT_WIDTH_RATIO
        } else {
            INACTIVE_SLOT_WIDTH_RATIO
        };
        let url = self
            .urls
            .url(&item.image_ref, self.config.thumbnail_width)
            .ok();
        let picture: Element<'_, Message> =
            match url.as_deref().and_then(|url| self.images.handle(url)) {
                Some(handle) => image(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fixed(image_height))
                    .content_fit(ContentFit::Cover)
                    .opacity(if is_active { 1.0 } else { INACTIVE_SLOT_OPACITY })
                    .into(),
                None => self.image_placeholder(url.as_deref(), image_height),
            };

        let portion = |ratio: f32| Length::FillPortion((ratio * 100.0).round().max(1.0) as u16);
        row![
            Space::with_width(portion(1.0 - width_ratio - SLOT_RIGHT_MARGIN_RATIO)),
            container(picture).width(portion(width_ratio)),
            Space::with_width(portion(SLOT_RIGHT_MARGIN_RATIO)),
        ]
        .height(Length::Fixed(image_height))
        .into()
    }

    /// Flat box while loading; failed images say so instead of retrying.
    fn image_placeholder(&self, url: Option<&str>, height: f32) -> Element<'_, Message> {
        let failed = url.is_none_or(|url| self.images.is_failed(url));
        let label: Element<'_, Message> = if failed {
            text("Image indisponible").style(theme::muted_text).into()
        } else {
            Space::new(Length::Shrink, Length::Shrink).into()
        };
        container(label)
            .style(theme::image_placeholder)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(height))
            .into()
    }

    fn project_view(&self, position: usize) -> Element<'_, Message> {
        let Some(project) = self.visible_project(position) else {
            return container(text(EMPTY_CATEGORY_MESSAGE).style(theme::muted_text))
                .center(Length::Fill)
                .into();
        };

        let navigation = row![
            button(text("← Précédent"))
                .style(theme::flat_button(false))
                .on_press(Message::PreviousProject),
            horizontal_space(),
            button(text("Retour"))
                .style(theme::flat_button(true))
                .on_press(Message::BackToGallery),
            horizontal_space(),
            button(text("Suivant →"))
                .style(theme::flat_button(false))
                .on_press(Message::NextProject),
        ]
        .align_y(Vertical::Center);

        let content = self
            .detail_urls(project)
            .into_iter()
            .fold(project_header(project), |col, url| {
                let picture: Element<'_, Message> = match self.images.handle(&url) {
                    Some(handle) => image(handle.clone())
                        .width(Length::Fill)
                        .height(Length::Fixed(DETAIL_IMAGE_HEIGHT_PX))
                        .content_fit(ContentFit::Contain)
                        .into(),
                    None => self.image_placeholder(Some(&url), DETAIL_IMAGE_HEIGHT_PX),
                };
                col.push(picture)
            })
            .spacing(16)
            .padding([24, 48])
            .width(Length::Fill);

        column![
            scrollable(content)
                .id(DETAIL_SCROLL_ID.clone())
                .height(Length::Fill),
            container(navigation).padding([12, 48]),
        ]
        .height(Length::Fill)
        .into()
    }
}

fn project_header(project: &Project) -> Column<'_, Message> {
    let meta = if project.year.is_empty() {
        project.category.label().to_string()
    } else {
        format!("{} · {}", project.category.label(), project.year)
    };
    let mut col = column![text(&project.title).size(32), text(meta).style(theme::muted_text)];
    if let Some(context) = &project.context {
        col = col.push(text(context));
    }
    if let Some(role) = &project.role {
        col = col.push(text(format!("Rôle : {role}")).style(theme::muted_text));
    }
    if let Some(link) = &project.link {
        col = col.push(text(link).style(theme::muted_text));
    }
    col
}
