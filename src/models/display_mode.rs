//! Dark/light display flag.

use std::fmt;

/// Display mode of the widget. Affects styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Light background, dark text
    #[default]
    Light,
    /// Dark background, light text
    Dark,
}

impl DisplayMode {
    /// Flips between dark and light.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns true for [`DisplayMode::Dark`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let mut mode = DisplayMode::Light;
        mode.toggle();
        assert!(mode.is_dark());
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for original in [DisplayMode::Light, DisplayMode::Dark] {
            let mut mode = original;
            mode.toggle();
            mode.toggle();
            assert_eq!(mode, original);
        }
    }
}
