//! Game modes and their affordances

use std::fmt;

/// How a round sources its hidden word and which affordances it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// One shared word per calendar day; finished rounds count toward the
    /// statistics.
    #[default]
    Daily,
    /// A random target per round, unlimited rounds, no statistics.
    Practice,
    /// Like practice but drawn from the easy pool, with hints available.
    Tutorial,
}

impl GameMode {
    /// Parse a mode from its CLI name.
    ///
    /// Accepts English and Spanish spellings; anything unrecognized falls
    /// back to daily.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "practice" | "practica" | "práctica" => Self::Practice,
            "tutorial" => Self::Tutorial,
            _ => Self::Daily,
        }
    }

    /// Whether finished rounds in this mode are folded into the statistics.
    #[must_use]
    pub const fn records_stats(self) -> bool {
        matches!(self, Self::Daily)
    }

    /// Whether the hidden word may be revealed before the round ends.
    #[must_use]
    pub const fn can_reveal_answer(self) -> bool {
        !matches!(self, Self::Daily)
    }

    /// Whether hints are available during a round.
    #[must_use]
    pub const fn has_hints(self) -> bool {
        matches!(self, Self::Tutorial)
    }

    /// Screen title for the mode, in the game's language.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Daily => "Palabra del día",
            Self::Practice => "Práctica",
            Self::Tutorial => "Tutorial",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Daily => "daily",
            Self::Practice => "practice",
            Self::Tutorial => "tutorial",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_name() {
        assert_eq!(GameMode::from_name("daily"), GameMode::Daily);
        assert_eq!(GameMode::from_name("practice"), GameMode::Practice);
        assert_eq!(GameMode::from_name("práctica"), GameMode::Practice);
        assert_eq!(GameMode::from_name("PRACTICA"), GameMode::Practice);
        assert_eq!(GameMode::from_name("tutorial"), GameMode::Tutorial);
        assert_eq!(GameMode::from_name(" Tutorial "), GameMode::Tutorial);
    }

    #[test]
    fn unknown_name_falls_back_to_daily() {
        assert_eq!(GameMode::from_name("???"), GameMode::Daily);
        assert_eq!(GameMode::from_name(""), GameMode::Daily);
    }

    #[test]
    fn affordances_by_mode() {
        assert!(GameMode::Daily.records_stats());
        assert!(!GameMode::Practice.records_stats());
        assert!(!GameMode::Tutorial.records_stats());

        assert!(!GameMode::Daily.can_reveal_answer());
        assert!(GameMode::Practice.can_reveal_answer());
        assert!(GameMode::Tutorial.can_reveal_answer());

        assert!(!GameMode::Daily.has_hints());
        assert!(!GameMode::Practice.has_hints());
        assert!(GameMode::Tutorial.has_hints());
    }
}
