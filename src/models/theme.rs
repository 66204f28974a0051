//! Theme types: the effective theme and the persisted preference.

/// The effective color theme applied to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme.
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// An explicit user preference, persisted in the preference store.
///
/// Absence of a stored preference means "follow the system theme"; the
/// store is written only on explicit toggles, never when the system
/// preference changes on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    /// Storage token for this preference.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored token; unknown values are treated as no preference.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The theme this preference selects.
    pub fn theme(self) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
        }
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        assert_eq!(
            ThemePreference::from_token("light"),
            Some(ThemePreference::Light)
        );
        assert_eq!(
            ThemePreference::from_token("dark"),
            Some(ThemePreference::Dark)
        );
        assert_eq!(ThemePreference::from_token("solarized"), None);
        assert_eq!(ThemePreference::Dark.as_token(), "dark");
    }

    #[test]
    fn test_flip() {
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Dark.flipped(), Theme::Light);
    }
}
