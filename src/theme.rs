//! Cosmetic color themes
//!
//! Themes are CSS class toggles on `<body>`; the simulation never sees them.
//! Colors themselves live in the stylesheet as custom properties that the
//! renderer reads back each frame.

use serde::{Deserialize, Serialize};

/// Available palettes. `Teal` is the stylesheet default (no extra class).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Teal,
    Dark,
    Light,
    Sunset,
    Forest,
    Ocean,
    Grape,
    Black,
    Pink,
}

/// Every theme class the stylesheet knows about, for bulk removal
/// (used only in wasm32)
#[allow(dead_code)]
const ALL_THEME_CLASSES: [&str; 8] = [
    "theme-dark",
    "theme-light",
    "theme-sunset",
    "theme-forest",
    "theme-ocean",
    "theme-grape",
    "theme-black",
    "theme-pink",
];

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Teal => "teal",
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Sunset => "sunset",
            Theme::Forest => "forest",
            Theme::Ocean => "ocean",
            Theme::Grape => "grape",
            Theme::Black => "black",
            Theme::Pink => "pink",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "teal" => Some(Theme::Teal),
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            "sunset" => Some(Theme::Sunset),
            "forest" => Some(Theme::Forest),
            "ocean" => Some(Theme::Ocean),
            "grape" => Some(Theme::Grape),
            "black" => Some(Theme::Black),
            "pink" => Some(Theme::Pink),
            _ => None,
        }
    }

    /// Body class for this theme; the base palette has none
    pub fn class_name(&self) -> Option<&'static str> {
        match self {
            Theme::Teal => None,
            Theme::Dark => Some("theme-dark"),
            Theme::Light => Some("theme-light"),
            Theme::Sunset => Some("theme-sunset"),
            Theme::Forest => Some("theme-forest"),
            Theme::Ocean => Some("theme-ocean"),
            Theme::Grape => Some("theme-grape"),
            Theme::Black => Some("theme-black"),
            Theme::Pink => Some("theme-pink"),
        }
    }

    /// Swap the body's theme class (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn apply(&self) {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());

        if let Some(body) = body {
            let classes = body.class_list();
            for class in ALL_THEME_CLASSES {
                let _ = classes.remove_1(class);
            }
            if let Some(class) = self.class_name() {
                let _ = classes.add_1(class);
            }
            log::info!("theme set to {}", self.as_str());
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn apply(&self) {
        log::debug!("theme {} (no DOM to style)", self.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for theme in [
            Theme::Teal,
            Theme::Dark,
            Theme::Light,
            Theme::Sunset,
            Theme::Forest,
            Theme::Ocean,
            Theme::Grape,
            Theme::Black,
            Theme::Pink,
        ] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_str("neon"), None);
    }

    #[test]
    fn test_class_names_are_known() {
        assert_eq!(Theme::Teal.class_name(), None);
        assert_eq!(Theme::Grape.class_name(), Some("theme-grape"));
        for theme in [Theme::Dark, Theme::Sunset, Theme::Pink] {
            let class = theme.class_name().unwrap();
            assert!(ALL_THEME_CLASSES.contains(&class));
        }
    }
}
