use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::BitOr;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Ready,
    Active,
    Solved,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Solved)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Outcome of applying one guess.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GuessOutcome {
    NoChange,
    Marked,
    WordCompleted,
    Solved,
}

impl GuessOutcome {
    /// Whether this outcome could have caused an update to the display.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

impl BitOr for GuessOutcome {
    type Output = GuessOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use GuessOutcome::*;
        match (self, rhs) {
            (Solved, _) | (_, Solved) => Solved,
            (WordCompleted, _) | (_, WordCompleted) => WordCompleted,
            (Marked, _) | (_, Marked) => Marked,
            (NoChange, NoChange) => NoChange,
        }
    }
}

/// The single mutable owner of a game in progress: the fixed passage, a
/// parallel board of per-letter clues, and the accumulated folded guess
/// history. One instance per session; concurrent guessing on the same
/// instance is not supported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleEngine {
    passage: Passage,
    clues: Vec<LetterVec<Clue>>,
    history: String,
    state: EngineState,
}

impl PuzzleEngine {
    pub fn new(passage: Passage) -> Self {
        let clues = passage
            .words()
            .iter()
            .map(|word| {
                word.letters()
                    .iter()
                    .map(|letter| {
                        if letter.is_punctuation() {
                            Clue::Punctuation
                        } else {
                            Clue::Hidden
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            passage,
            clues,
            history: String::new(),
            state: Default::default(),
        }
    }

    pub fn from_text(text: &str) -> Result<Self> {
        Ok(Self::new(Passage::from_text(text)?))
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_finished()
    }

    pub fn passage(&self) -> &Passage {
        &self.passage
    }

    /// Every accepted guess so far, folded, in order.
    pub fn guess_history(&self) -> &str {
        &self.history
    }

    pub fn word_count(&self) -> usize {
        self.passage.word_count()
    }

    pub fn clue_at(&self, word: usize, letter: usize) -> Clue {
        self.clues[word][letter]
    }

    pub fn iter_word(&self, word: usize) -> impl Iterator<Item = CluedLetter> + '_ {
        self.passage
            .word(word)
            .letters()
            .iter()
            .zip(&self.clues[word])
            .map(|(letter, &clue)| CluedLetter::new(letter.glyph(), clue))
    }

    /// Flat renderer view: every word's letters, with a `Space` letter
    /// between consecutive words.
    pub fn iter_letters(&self) -> impl Iterator<Item = CluedLetter> + '_ {
        let words = self.word_count();
        (0..words).flat_map(move |word| {
            let sep = (word + 1 < words).then_some(CluedLetter::new(' ', Clue::Space));
            self.iter_word(word).chain(sep)
        })
    }

    /// Applies one keystroke. The steps run in a fixed order: age existing
    /// fades, lock words satisfiable from the whole history, mark every
    /// occurrence of the newest letter, then lock words whose guessable
    /// letters are all at some fade level (remembering faded letters is the
    /// player skill being rewarded). Aging runs first, so a guess that both
    /// completes a word and would have aged it still completes it.
    ///
    /// Characters that fold to something non-alphabetic are a no-op.
    pub fn guess(&mut self, ch: char) -> Result<GuessOutcome> {
        self.check_not_solved()?;

        let folded = match fold_char(ch) {
            Some(c) if c.is_alphabetic() => c,
            _ => return Ok(GuessOutcome::NoChange),
        };
        self.history.push(folded);
        self.mark_started();

        let mut outcome = self.age_fades();
        for word in 0..self.word_count() {
            outcome = outcome | self.complete_from_history(word);
        }
        outcome = outcome | self.mark_newest(folded);
        for word in 0..self.word_count() {
            outcome = outcome | self.complete_fully_faded(word);
        }

        if self.all_letters_locked() {
            self.state = EngineState::Solved;
            outcome = outcome | GuessOutcome::Solved;
        }

        Ok(outcome)
    }

    /// Letters guessed so far that occur nowhere among the not-yet-correct
    /// letters of the passage, for the keyboard renderer to gray out. Pure
    /// query; sorted, so repeated calls agree.
    pub fn absent_letters(&self) -> Vec<CluedLetter> {
        let mut present: BTreeSet<char> = BTreeSet::new();
        for (word, clues) in self.passage.words().iter().zip(&self.clues) {
            for (letter, clue) in word.letters().iter().zip(clues) {
                if !clue.is_correct() {
                    if let Some(folded) = letter.folded() {
                        present.insert(folded);
                    }
                }
            }
        }

        let guessed: BTreeSet<char> = self.history.chars().collect();
        guessed
            .into_iter()
            .filter(|guess| !present.contains(guess))
            .map(|guess| CluedLetter::new(guess, Clue::Absent))
            .collect()
    }

    fn age_fades(&mut self) -> GuessOutcome {
        let mut outcome = GuessOutcome::NoChange;
        for word in &mut self.clues {
            for clue in word.iter_mut() {
                let aged = clue.aged();
                if aged != *clue {
                    *clue = aged;
                    outcome = GuessOutcome::Marked;
                }
            }
        }
        outcome
    }

    /// Multiset consumption test: counts of the word's folded letters are
    /// decremented walking the guess history newest-first, and the word is
    /// satisfiable once every count reaches zero. Neither order nor
    /// contiguity of the guesses matters, only that each letter occurrence
    /// was used up by some guess.
    fn word_in_history(&self, word: usize) -> bool {
        let mut needed: BTreeMap<char, usize> = BTreeMap::new();
        for ch in self.passage.word(word).candidate() {
            *needed.entry(ch).or_insert(0) += 1;
        }

        let mut remaining: usize = needed.values().sum();
        if remaining == 0 {
            return true;
        }

        for guess in self.history.chars().rev() {
            if let Some(count) = needed.get_mut(&guess) {
                if *count > 0 {
                    *count -= 1;
                    remaining -= 1;
                    if remaining == 0 {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn complete_from_history(&mut self, word: usize) -> GuessOutcome {
        if self.word_in_history(word) {
            self.lock_word(word)
        } else {
            GuessOutcome::NoChange
        }
    }

    fn complete_fully_faded(&mut self, word: usize) -> GuessOutcome {
        let all_faded = self.clues[word]
            .iter()
            .all(|clue| clue.is_faded() || clue.is_locked());
        if all_faded {
            self.lock_word(word)
        } else {
            GuessOutcome::NoChange
        }
    }

    fn mark_newest(&mut self, folded: char) -> GuessOutcome {
        let mut outcome = GuessOutcome::NoChange;
        for (word, clues) in self.passage.words().iter().zip(self.clues.iter_mut()) {
            for (letter, clue) in word.letters().iter().zip(clues.iter_mut()) {
                if clue.is_locked() {
                    continue;
                }
                if letter.folded() == Some(folded) {
                    *clue = Clue::Fade0;
                    outcome = GuessOutcome::Marked;
                }
            }
        }
        outcome
    }

    fn lock_word(&mut self, word: usize) -> GuessOutcome {
        let mut outcome = GuessOutcome::NoChange;
        for clue in self.clues[word].iter_mut() {
            if !clue.is_locked() {
                *clue = Clue::Correct;
                outcome = GuessOutcome::WordCompleted;
            }
        }
        outcome
    }

    fn all_letters_locked(&self) -> bool {
        self.clues.iter().flatten().all(|clue| clue.is_locked())
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = EngineState::Active;
        }
    }

    fn check_not_solved(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadySolved)
        } else {
            Ok(())
        }
    }
}
