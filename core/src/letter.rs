use serde::{Deserialize, Serialize};

/// Per-letter status tracked by the engine.
///
/// `Correct` and `Punctuation` are absorbing: no transition writes over them
/// once set. The five fade levels count down from freshly guessed (`Fade0`)
/// to about to vanish (`Fade4`); one more aging step expires back to
/// `Hidden`. `Space` and `Absent` only appear in renderer-facing views, never
/// on the engine's own board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Clue {
    Hidden,
    Absent,
    Space,
    Punctuation,
    Fade0,
    Fade1,
    Fade2,
    Fade3,
    Fade4,
    Correct,
}

impl Clue {
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Whether this letter can never change again.
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Correct | Self::Punctuation)
    }

    pub const fn is_faded(self) -> bool {
        self.fade_level().is_some()
    }

    /// `Some(0..=4)` for the fade variants, `None` otherwise.
    pub const fn fade_level(self) -> Option<u8> {
        match self {
            Self::Fade0 => Some(0),
            Self::Fade1 => Some(1),
            Self::Fade2 => Some(2),
            Self::Fade3 => Some(3),
            Self::Fade4 => Some(4),
            _ => None,
        }
    }

    /// One aging step. Only fade levels move; every other status is a fixed
    /// point here, which keeps the absorbing states structurally absorbing.
    pub const fn aged(self) -> Self {
        match self {
            Self::Fade0 => Self::Fade1,
            Self::Fade1 => Self::Fade2,
            Self::Fade2 => Self::Fade3,
            Self::Fade3 => Self::Fade4,
            Self::Fade4 => Self::Hidden,
            other => other,
        }
    }
}

impl Default for Clue {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Renderer-facing view of one letter of the passage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CluedLetter {
    pub letter: char,
    pub clue: Clue,
}

impl CluedLetter {
    pub const fn new(letter: char, clue: Clue) -> Self {
        Self { letter, clue }
    }

    /// The glyph to draw, if this status renders at all. Faded letters still
    /// show (at decreasing opacity); `Hidden` and `Absent` do not.
    pub const fn visible_char(self) -> Option<char> {
        match self.clue {
            Clue::Hidden | Clue::Absent => None,
            _ => Some(self.letter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aging_walks_fade_levels_back_to_hidden() {
        let mut clue = Clue::Fade0;
        for expected in [Clue::Fade1, Clue::Fade2, Clue::Fade3, Clue::Fade4] {
            clue = clue.aged();
            assert_eq!(clue, expected);
        }
        assert_eq!(clue.aged(), Clue::Hidden);
    }

    #[test]
    fn locked_statuses_are_aging_fixed_points() {
        assert_eq!(Clue::Correct.aged(), Clue::Correct);
        assert_eq!(Clue::Punctuation.aged(), Clue::Punctuation);
        assert_eq!(Clue::Hidden.aged(), Clue::Hidden);
    }

    #[test]
    fn visible_char_hides_unrevealed_letters() {
        assert_eq!(CluedLetter::new('a', Clue::Hidden).visible_char(), None);
        assert_eq!(CluedLetter::new('z', Clue::Absent).visible_char(), None);
        assert_eq!(
            CluedLetter::new('a', Clue::Fade3).visible_char(),
            Some('a')
        );
        assert_eq!(
            CluedLetter::new('!', Clue::Punctuation).visible_char(),
            Some('!')
        );
    }
}
