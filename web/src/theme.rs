use crate::utils::*;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    pub const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    pub const fn toggled(self) -> Self {
        use Theme::*;
        match self {
            Light => Dark,
            Dark => Light,
        }
    }

    /// Theme that follows `current` when the player presses the toggle.
    /// No stored preference counts as light.
    pub const fn next(current: Option<Self>) -> Self {
        match current {
            Some(theme) => theme.toggled(),
            None => Self::Dark,
        }
    }

    pub fn switch_label(current: Option<Self>) -> String {
        format!("Switch to {} theme", Self::next(current).scheme())
    }

    /// A forced theme wins over the saved one and is never written back.
    fn resolve(forced: Option<Self>, saved: impl FnOnce() -> Option<Self>) -> Option<Self> {
        forced.or_else(saved)
    }

    /// Mirrors `theme` into the `data-theme` attribute of `<html>`; without a
    /// theme the stylesheet falls back to `prefers-color-scheme`.
    fn update_html(theme: Option<Self>) {
        let html = gloo::utils::document_element();
        let result = match theme.map(Self::scheme) {
            Some(scheme) => html.set_attribute(Self::ATTR_NAME, scheme),
            None => html.remove_attribute(Self::ATTR_NAME),
        };
        match result {
            Ok(()) => log::debug!("theme-scheme: {:?}", theme.map(Self::scheme)),
            Err(err) => log::error!("failed to update {}: {:?}", Self::ATTR_NAME, err),
        }
    }

    pub(crate) fn init(forced: Option<Self>) -> Option<Self> {
        let theme = Self::resolve(forced, LocalOrDefault::local_or_default);
        Self::update_html(theme);
        theme
    }

    pub(crate) fn apply(theme: Option<Self>) {
        theme.local_save();
        Self::update_html(theme);
    }
}

impl StorageKey for Theme {
    const KEY: &'static str = "tictactoe:theme";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn theme_parses_from_cli_value() {
        assert_eq!(Theme::from_str("dark", true), Ok(Theme::Dark));
        assert_eq!(Theme::Light.scheme(), "light");
    }

    #[test]
    fn toggle_from_no_preference_goes_dark() {
        assert_eq!(Theme::next(None), Theme::Dark);
        assert_eq!(Theme::next(Some(Theme::Dark)), Theme::Light);
        assert_eq!(Theme::switch_label(Some(Theme::Light)), "Switch to dark theme");
    }

    #[test]
    fn forced_theme_skips_saved_preference() {
        let forced = Theme::resolve(Some(Theme::Dark), || panic!("saved preference was read"));

        assert_eq!(forced, Some(Theme::Dark));
        assert_eq!(Theme::resolve(None, || Some(Theme::Light)), Some(Theme::Light));
        assert_eq!(Theme::resolve(None, || None), None);
    }

    #[test]
    fn storage_key_is_namespaced() {
        assert_eq!(<Theme as StorageKey>::KEY, "tictactoe:theme");
    }
}
