use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Passage text is empty")]
    EmptyPassage,
    #[error("Puzzle already solved, no new guesses are accepted")]
    AlreadySolved,
}

pub type Result<T> = core::result::Result<T, GameError>;
