//! Dark and light color palettes.
//!
//! The widget's [`DisplayMode`] selects one of two palettes. The initial mode
//! can follow the OS setting, detected with the `dark-light` crate.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::DisplayMode;

/// Colors for every role the widgets draw with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Focus interval, borders and titles
    pub primary: Color,
    /// Long breaks, drop marker, focused input
    pub accent: Color,
    /// Short breaks and the running indicator
    pub success: Color,
    /// Delete affordance
    pub error: Color,
    /// Paused indicator
    pub warning: Color,
    /// Body text
    pub text: Color,
    /// Hints, placeholders and empty tasks
    pub text_muted: Color,
    /// Screen fill
    pub background: Color,
    /// Selected task row
    pub highlight_bg: Color,
    /// Buttons and gauge track
    pub surface: Color,
}

impl Theme {
    /// Creates the palette for a display mode.
    #[must_use]
    pub const fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Dark => Self::dark(),
            DisplayMode::Light => Self::light(),
        }
    }

    /// Dark palette: tomato red on near-black.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(255, 99, 71),
            accent: Color::Rgb(129, 161, 255),
            success: Color::Rgb(110, 200, 140),
            error: Color::Rgb(240, 80, 80),
            warning: Color::Rgb(235, 185, 80),
            text: Color::Rgb(230, 230, 230),
            text_muted: Color::Rgb(120, 120, 130),
            background: Color::Rgb(24, 24, 28),
            highlight_bg: Color::Rgb(52, 52, 62),
            surface: Color::Rgb(36, 36, 42),
        }
    }

    /// Light palette: deep red on off-white.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(200, 50, 35),
            accent: Color::Rgb(40, 80, 200),
            success: Color::Rgb(30, 130, 70),
            error: Color::Rgb(190, 30, 30),
            warning: Color::Rgb(170, 100, 0),
            text: Color::Rgb(30, 30, 35),
            text_muted: Color::Rgb(130, 130, 140),
            background: Color::Rgb(250, 248, 245),
            highlight_bg: Color::Rgb(235, 225, 220),
            surface: Color::Rgb(240, 236, 232),
        }
    }
}

/// Detects the OS display mode, falling back to light when unknown.
#[must_use]
pub fn detect_mode() -> DisplayMode {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => DisplayMode::Dark,
        Ok(dark_light::Mode::Light | dark_light::Mode::Unspecified) | Err(_) => DisplayMode::Light,
    }
}

/// Resolves the configured preference to a starting display mode.
#[must_use]
pub fn initial_mode(preference: ThemeMode) -> DisplayMode {
    match preference {
        ThemeMode::Auto => detect_mode(),
        ThemeMode::Dark => DisplayMode::Dark,
        ThemeMode::Light => DisplayMode::Light,
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(DisplayMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        let dark = Theme::dark();
        let light = Theme::light();
        assert_ne!(dark, light);
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.text, light.text);
    }

    #[test]
    fn test_text_contrasts_with_background() {
        for theme in [Theme::dark(), Theme::light()] {
            assert_ne!(theme.text, theme.background);
            assert_ne!(theme.highlight_bg, theme.background);
        }
    }

    #[test]
    fn test_theme_for_mode() {
        assert_eq!(Theme::for_mode(DisplayMode::Dark), Theme::dark());
        assert_eq!(Theme::for_mode(DisplayMode::Light), Theme::light());
        assert_eq!(Theme::default(), Theme::light());
    }

    #[test]
    fn test_explicit_initial_mode() {
        assert_eq!(initial_mode(ThemeMode::Dark), DisplayMode::Dark);
        assert_eq!(initial_mode(ThemeMode::Light), DisplayMode::Light);
    }

    #[test]
    fn test_detect_does_not_panic() {
        let mode = detect_mode();
        assert!(mode == DisplayMode::Dark || mode == DisplayMode::Light);
    }
}
