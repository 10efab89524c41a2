//! Grapheme cluster boundary detection following
//! [UAX #29: Unicode Text Segmentation](https://www.unicode.org/reports/tr29/),
//! designed for text that arrives in chunks.
//!
//! The segmentation rules and character data are those of Unicode 10.0.0.
//!
//! There are two ways to use this library:
//!
//! - The driver functions [`next_boundary`], [`next_boundary_in_bytes`],
//!   [`first_grapheme_cluster`] and [`graphemes`] scan a buffer and report
//!   where its first grapheme cluster ends. If the buffer is only a prefix
//!   of a longer stream then the driver can say that it doesn't know yet,
//!   rather than guessing, and the caller can retry once it has received
//!   more text.
//!
//! - [`Segmenter`] is the boundary engine those functions are built on. It
//!   holds a small summary of the characters consumed so far, and can be
//!   asked whether a boundary falls before the next character even when
//!   that character isn't known yet. In that case the answer is
//!   [`ClusterAction::Undetermined`].
//!
//! Most of the rules only need to compare two adjacent characters, but
//! a few of them depend on earlier context:
//!
//! - A carriage return followed by a line feed is a single cluster, so
//!   after a CR the engine must see the next character before deciding.
//! - Hangul syllables can be written as sequences of conjoining jamo.
//! - Regional indicator symbols pair up into flags, counting from the
//!   start of each run. Three in a row are a flag followed by a lone
//!   indicator.
//! - An emoji modifier attaches to a preceding emoji base even across
//!   intervening extending characters, and a zero-width joiner glues
//!   certain emoji onto whatever precedes it.
//!
//! # Chunked input
//!
//! The driver functions deliberately don't keep any state between calls.
//! When [`next_boundary`] returns `None` for a buffer that isn't at the end
//! of the input, the caller is expected to append more text and call again
//! with the whole buffer, and the scan restarts from its beginning. That
//! costs a little repeated work for very long clusters, but it means the
//! caller only needs to keep the text it already has.
//!
//! Callers that would rather not rescan can feed characters to a
//! [`Segmenter`] one at a time instead, using [`Segmenter::next_char`] or
//! one of its siblings, and keep the segmenter alive across refills.
//!
//! # Input validity
//!
//! The engine works with Unicode scalar values. The `str`-based functions
//! therefore can't fail, while [`next_boundary_in_bytes`] reports a
//! [`DecodeError`] if it encounters bytes that aren't valid UTF-8 before it
//! has found a boundary.
#![cfg_attr(not(test), no_std)]

mod error;
mod properties;
mod scan;
mod state;

pub use error::*;
pub use properties::*;
pub use scan::*;

use state::State;
use u8char::u8char;

/// A grapheme cluster segmentation session.
///
/// A `Segmenter` is the boundary engine for one sequence of characters. It
/// answers whether a cluster boundary falls immediately before the next
/// character using [`Self::boundary_before`], and learns about each
/// character as it is consumed through [`Self::advance`]. The two are kept
/// separate so that a caller can ask about a position whose following
/// character isn't available yet, which [`Self::advance`] never needs to
/// know about.
///
/// Callers that always know the next character can use
/// [`Self::next_category`], [`Self::next_char`] or [`Self::next_u8char`],
/// which do both steps at once.
///
/// The boundary at the very start of the text is implied and so never
/// reported: the first character consumed in a session is always treated
/// as a continuation of the (empty) cluster in progress.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    state: State,
}

impl Segmenter {
    /// Constructs a new [`Segmenter`] in an initial "start of input"
    /// state.
    pub fn new() -> Self {
        Segmenter {
            state: State::default(),
        }
    }

    /// Returns `true` if nothing has been consumed since the session began
    /// or since the last call to [`Self::end_of_input`].
    pub fn at_start(&self) -> bool {
        self.state.last.is_none()
    }

    /// Decides whether there is a grapheme cluster boundary between the
    /// characters consumed so far and the position described by `next`.
    ///
    /// This does not change the session. If `next` is
    /// [`Lookahead::Unknown`] then the result is
    /// [`ClusterAction::Undetermined`] whenever the answer would depend on
    /// what that character turns out to be.
    pub fn boundary_before(&self, next: Lookahead) -> ClusterAction {
        self.state.boundary_before(next)
    }

    /// Records that a character of the given category has been consumed.
    ///
    /// Call this only once a decision about the position before the
    /// character has been made, because the decision depends on the state
    /// prior to consuming it.
    pub fn advance(&mut self, consumed: Category) {
        log::trace!("consuming {consumed:?} after {:?}", self.state);
        self.state.advance(consumed);
    }

    /// Decides whether a character of the given category begins a new
    /// grapheme cluster, and then consumes it.
    ///
    /// If the result is [`ClusterAction::Split`] then the character should
    /// be treated as the beginning of a new grapheme cluster. If
    /// [`ClusterAction::Continue`] then it extends the current one. Because
    /// the next character is known, the result is never
    /// [`ClusterAction::Undetermined`].
    pub fn next_category(&mut self, next: Category) -> ClusterAction {
        let action = self.boundary_before(Lookahead::Char(next));
        self.advance(next);
        action
    }

    /// Looks up the [`Category`] for the given character and then passes it
    /// to [`Self::next_category`].
    pub fn next_char(&mut self, c: char) -> ClusterAction {
        self.next_category(Category::for_char(c))
    }

    /// Looks up the [`Category`] for the given character and then passes it
    /// to [`Self::next_category`].
    pub fn next_u8char(&mut self, c: u8char) -> ClusterAction {
        self.next_category(Category::for_u8char(c))
    }

    /// Feeds each character of `s` to [`Self::next_char`] in turn, yielding
    /// each character along with the action to take for it.
    ///
    /// The segmenter is left in the state following the last character
    /// actually yielded, so a partially-consumed iterator can be dropped
    /// and the remaining text fed later.
    pub fn next_chars_from_str<'a>(
        &'a mut self,
        s: &'a str,
    ) -> impl Iterator<Item = (ClusterAction, char)> + use<'a> {
        s.chars().map(move |c| (self.next_char(c), c))
    }

    /// Tells the segmenter that the input has ended.
    ///
    /// Returns the decision for the end of the text, which is
    /// [`ClusterAction::Split`] to close the final cluster unless nothing
    /// was consumed at all. The session then returns to its initial state,
    /// so any subsequently-submitted character begins a new text.
    pub fn end_of_input(&mut self) -> ClusterAction {
        let action = self.boundary_before(Lookahead::EndOfText);
        log::trace!("end of input after {:?}", self.state);
        self.state = State::default();
        action
    }
}

/// The outcome of asking a [`Segmenter`] whether a grapheme cluster
/// boundary falls before a particular position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterAction {
    /// Treat the new character as an extension of the current grapheme
    /// cluster.
    Continue,
    /// Treat the current grapheme cluster as complete and begin a new one
    /// that initially consists only of the new character.
    Split,
    /// The answer depends on a character that isn't available yet.
    Undetermined,
}

impl ClusterAction {
    /// Returns `true` only for [`ClusterAction::Split`].
    ///
    /// An undetermined result never claims a boundary.
    pub const fn is_boundary(self) -> bool {
        matches!(self, ClusterAction::Split)
    }

    /// Returns `false` only for [`ClusterAction::Undetermined`].
    pub const fn is_certain(self) -> bool {
        !matches!(self, ClusterAction::Undetermined)
    }
}

#[cfg(test)]
mod tests;
