use derive_more::{Display, Error};

/// An error which can be returned when modifying a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The targeted cell is a given and cannot be changed.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
}
