use super::super::super::messages::Message;
use super::super::super::state::{App, Route};
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = Self::pressed_token(&key)?;

        if Self::shortcut_matches(&self.config.key_safe_quit, "q", &pressed, modifiers) {
            return Some(Message::SafeQuit);
        }
        if Self::shortcut_matches(&self.config.key_toggle_theme, "ctrl+t", &pressed, modifiers) {
            return Some(Message::ToggleTheme);
        }

        let next = Self::shortcut_matches(&self.config.key_next, "j", &pressed, modifiers);
        let prev = Self::shortcut_matches(&self.config.key_prev, "k", &pressed, modifiers);
        let open = Self::shortcut_matches(&self.config.key_open, "enter", &pressed, modifiers);
        let back = Self::shortcut_matches(&self.config.key_back, "escape", &pressed, modifiers);

        match self.route {
            Route::Gallery if next => Some(Message::SelectNext),
            Route::Gallery if prev => Some(Message::SelectPrevious),
            Route::Gallery if open => Some(Message::OpenActive),
            Route::Project(_) if next => Some(Message::NextProject),
            Route::Project(_) if prev => Some(Message::PreviousProject),
            Route::Project(_) if back => Some(Message::BackToGallery),
            _ => None,
        }
    }

    pub(super) fn pressed_token(key: &Key) -> Option<String> {
        let token = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Named(key::Named::Enter) => "enter".to_string(),
            Key::Named(key::Named::Escape) => "escape".to_string(),
            Key::Named(key::Named::ArrowUp) => "up".to_string(),
            Key::Named(key::Named::ArrowDown) => "down".to_string(),
            Key::Named(key::Named::ArrowLeft) => "left".to_string(),
            Key::Named(key::Named::ArrowRight) => "right".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };
        Some(token)
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized
                .split('+')
                .map(|token| match token.trim() {
                    "spacebar" => "space",
                    "return" => "enter",
                    "esc" => "escape",
                    other => other,
                })
                .collect::<Vec<_>>()
                .join("+")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::Modifiers;

    #[test]
    fn normalizes_key_aliases() {
        assert_eq!(App::normalize_shortcut_token(" SpaceBar ", "x"), "space");
        assert_eq!(App::normalize_shortcut_token("Return", "x"), "enter");
        assert_eq!(App::normalize_shortcut_token("Esc", "x"), "escape");
        assert_eq!(App::normalize_shortcut_token("escape", "x"), "escape");
        assert_eq!(App::normalize_shortcut_token("  ", "j"), "j");
    }

    #[test]
    fn matches_ctrl_t_shortcut() {
        assert!(App::shortcut_matches("ctrl+t", "x", "t", Modifiers::CTRL));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "ctrl+t",
            "x",
            "t",
            Modifiers::CTRL | Modifiers::SHIFT,
        ));
        assert!(!App::shortcut_matches("j", "x", "j", Modifiers::CTRL));
    }

    #[test]
    fn named_keys_map_to_tokens() {
        assert_eq!(
            App::pressed_token(&Key::Named(key::Named::Enter)).as_deref(),
            Some("enter")
        );
        assert_eq!(
            App::pressed_token(&Key::Character("J".into())).as_deref(),
            Some("j")
        );
        assert_eq!(App::pressed_token(&Key::Named(key::Named::F5)), None);
    }
}
