//! Difficulty levels and their empty-cell targets.

use std::fmt;

/// Difficulty of a generated puzzle, expressed as an empty-cell target.
///
/// Difficulty here is a proxy: more empty cells generally means a harder
/// puzzle. Each level maps to a fixed number of cells to remove from the
/// full grid:
///
/// | Level   | Empty cells |
/// |---------|-------------|
/// | Easy    | 40          |
/// | Medium  | 50          |
/// | Hard    | 55          |
/// | Extreme | 60          |
/// | Insane  | 65          |
///
/// The higher targets are aspirational: a puzzle with a unique solution
/// needs at least 17 givens, so `Insane` (16 givens) always falls short of
/// its target and the generator reports the achieved count instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 40 empty cells.
    #[default]
    Easy,
    /// 50 empty cells.
    Medium,
    /// 55 empty cells.
    Hard,
    /// 60 empty cells.
    Extreme,
    /// 65 empty cells.
    Insane,
}

impl Difficulty {
    /// All difficulty levels, easiest first.
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::Extreme,
        Self::Insane,
    ];

    /// Returns the number of cells to remove for this level.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_generator::Difficulty;
    ///
    /// assert_eq!(Difficulty::Easy.empty_cells(), 40);
    /// assert_eq!(Difficulty::Insane.empty_cells(), 65);
    /// ```
    #[must_use]
    pub const fn empty_cells(self) -> u8 {
        match self {
            Self::Easy => 40,
            Self::Medium => 50,
            Self::Hard => 55,
            Self::Extreme => 60,
            Self::Insane => 65,
        }
    }

    /// Looks up a level by name, case-insensitively.
    ///
    /// Unrecognized names fall back to [`Difficulty::Easy`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_generator::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_name("HARD"), Difficulty::Hard);
    /// assert_eq!(Difficulty::from_name("nightmare"), Difficulty::Easy);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    /// Returns the display name of this level.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Extreme => "Extreme",
            Self::Insane => "Insane",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_targets() {
        let targets = Difficulty::ALL.map(Difficulty::empty_cells);
        assert_eq!(targets, [40, 50, 55, 60, 65]);
    }

    #[test]
    fn from_name_ignores_case() {
        assert_eq!(Difficulty::from_name("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("MEDIUM"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("ExTrEmE"), Difficulty::Extreme);
    }

    #[test]
    fn unknown_name_defaults_to_easy() {
        assert_eq!(Difficulty::from_name(""), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("impossible"), Difficulty::Easy);
    }

    #[test]
    fn display_matches_name() {
        for level in Difficulty::ALL {
            assert_eq!(level.to_string(), level.name());
        }
    }
}
