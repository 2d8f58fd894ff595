#![no_std]

extern crate alloc;

use smallvec::SmallVec;

pub use engine::*;
pub use error::*;
pub use letter::*;
pub use passage::*;
pub use text::*;

mod engine;
mod error;
mod letter;
mod passage;
mod text;

/// Per-word letter storage; passage words are short so this stays inline.
pub(crate) type LetterVec<T> = SmallVec<[T; 12]>;
