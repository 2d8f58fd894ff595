use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// One character of the target text. `folded` is the uppercase accent-folded
/// comparison character, absent for punctuation, which never matches guesses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageLetter {
    glyph: char,
    folded: Option<char>,
}

impl PassageLetter {
    fn from_glyph(glyph: char) -> Self {
        let folded = if is_puzzle_punctuation(glyph) {
            None
        } else {
            fold_char(glyph)
        };
        Self { glyph, folded }
    }

    /// The original character, accents and all. Never rewritten.
    pub const fn glyph(&self) -> char {
        self.glyph
    }

    pub const fn is_punctuation(&self) -> bool {
        self.folded.is_none()
    }

    pub const fn folded(&self) -> Option<char> {
        self.folded
    }
}

/// One space-delimited word of the passage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageWord {
    letters: LetterVec<PassageLetter>,
}

impl PassageWord {
    fn from_text(text: &str) -> Self {
        Self {
            letters: text.chars().map(PassageLetter::from_glyph).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[PassageLetter] {
        &self.letters
    }

    /// Folded comparison characters of the guessable letters, in order.
    pub fn candidate(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().filter_map(PassageLetter::folded)
    }
}

/// The immutable target text, split once at construction (the analog of a
/// fixed board layout). The engine never normalizes: callers are expected to
/// collapse whitespace, fold curly quotes and strip line breaks before
/// building a passage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    words: Vec<PassageWord>,
}

impl Passage {
    /// Splits caller-normalized text on single ASCII spaces. Words keep
    /// embedded punctuation and digits, tagged here and immutable afterwards.
    pub fn from_text(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(GameError::EmptyPassage);
        }

        let words: Vec<PassageWord> = text.split(' ').map(PassageWord::from_text).collect();
        if words.iter().any(PassageWord::is_empty) {
            log::warn!("passage has unnormalized whitespace, empty words complete trivially");
        }

        Ok(Self { words })
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &[PassageWord] {
        &self.words
    }

    pub fn word(&self, index: usize) -> &PassageWord {
        &self.words[index]
    }
}
