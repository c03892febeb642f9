//! Day/night palettes and the flat, borderless styles used by the gallery.

use crate::config::ThemeMode;
use iced::theme::Palette;
use iced::widget::{button, container};
use iced::{Background, Color, Theme as IcedTheme};

/// Alpha applied to captions and filters that are not selected.
const MUTED_ALPHA: f32 = 0.4;
const HOVER_ALPHA: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Night => Theme::Dark,
            ThemeMode::Day => Theme::Light,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => IcedTheme::custom(
                "Gallery Day".to_string(),
                Palette {
                    background: Color::from_rgb8(0xF4, 0xF2, 0xEE),
                    text: Color::from_rgb8(0x11, 0x11, 0x11),
                    primary: Color::from_rgb8(0x11, 0x11, 0x11),
                    success: Color::from_rgb8(0x2E, 0x7D, 0x32),
                    danger: Color::from_rgb8(0xC6, 0x28, 0x28),
                },
            ),
            Theme::Dark => IcedTheme::custom(
                "Gallery Night".to_string(),
                Palette {
                    background: Color::from_rgb8(0x0E, 0x0E, 0x0E),
                    text: Color::from_rgb8(0xEC, 0xEA, 0xE4),
                    primary: Color::from_rgb8(0xEC, 0xEA, 0xE4),
                    success: Color::from_rgb8(0x66, 0xBB, 0x6A),
                    danger: Color::from_rgb8(0xEF, 0x53, 0x50),
                },
            ),
        }
    }
}

fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

/// Text-only button: full strength when `selected`, muted otherwise.
pub fn flat_button(selected: bool) -> impl Fn(&IcedTheme, button::Status) -> button::Style {
    move |theme, status| {
        let text = theme.palette().text;
        let alpha = match status {
            _ if selected => 1.0,
            button::Status::Hovered | button::Status::Pressed => HOVER_ALPHA,
            _ => MUTED_ALPHA,
        };
        button::Style {
            background: None,
            text_color: with_alpha(text, alpha),
            ..button::Style::default()
        }
    }
}

/// Flat backdrop shown while an image is loading or after it failed.
pub fn image_placeholder(theme: &IcedTheme) -> container::Style {
    let text = theme.palette().text;
    container::Style {
        background: Some(Background::Color(with_alpha(text, 0.08))),
        ..container::Style::default()
    }
}

pub fn muted_text(theme: &IcedTheme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(with_alpha(theme.palette().text, 0.6)),
    }
}
