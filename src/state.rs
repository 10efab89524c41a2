use crate::Category;
use crate::ClusterAction;
use crate::Lookahead;

/// Everything the boundary rules need to remember about the characters
/// consumed so far in a segmentation session.
///
/// Only the most recent category is kept verbatim. The multi-character
/// rules are summarized into a flag for GB10 and a counter for GB12/GB13,
/// so arbitrarily-long grapheme clusters need only constant storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State {
    /// Category of the most recently consumed character, or `None` at the
    /// start of the text.
    pub last: Option<Category>,

    /// Set after consuming [`Category::EBase`] or [`Category::EBaseGAZ`]
    /// and kept for as long as only [`Category::Extend`] follows, so that a
    /// subsequent [`Category::EModifier`] joins the cluster under GB10.
    pub in_emoji_sequence: bool,

    /// Number of consecutive [`Category::RegionalIndicator`] characters
    /// just consumed. Only its parity matters to GB12 and GB13.
    pub regional_indicators: usize,
}

impl State {
    /// Decides whether there is a grapheme cluster boundary between the
    /// characters consumed so far and a character in the position described
    /// by `next`, without consuming it.
    ///
    /// The rules are tried in order and the first that applies decides.
    /// The boundary at the very start of the text (GB1) is never reported.
    pub fn boundary_before(&self, next: Lookahead) -> ClusterAction {
        use Category::{
            CR, EBaseGAZ, EModifier, Extend, GlueAfterZwj, L, LF, LV, LVT, Prepend,
            RegionalIndicator, SpacingMark, T, V, ZWJ,
        };
        use ClusterAction::{Continue, Split, Undetermined};

        // GB1 is implied: callers scan forward from the start of the text.
        let Some(prev) = self.last else {
            return Continue;
        };
        // GB2: Break at the end of text.
        let next = match next {
            Lookahead::EndOfText => return Split,
            Lookahead::Unknown => None,
            Lookahead::Char(cat) => Some(cat),
        };

        // For a Hangul jamo in `prev`, an unknown `next` leaves the decision
        // open, a matching one continues the syllable, and anything else
        // falls through to the later rules.
        macro_rules! continue_if_next {
            ($pat:pat) => {
                match next {
                    None => return Undetermined,
                    Some($pat) => return Continue,
                    Some(_) => {}
                }
            };
        }

        // GB3: Do not break between a CR and LF...
        if prev == CR {
            return match next {
                None => Undetermined,
                Some(LF) => Continue,
                Some(_) => Split,
            };
        }
        // GB4 and GB5: ...Otherwise, break before and after controls.
        // A control in `prev` decides this without needing to see `next`.
        if prev.is_any_control() || next.is_some_and(Category::is_any_control) {
            return Split;
        }
        // GB6-GB8: Do not break Hangul syllable sequences.
        match prev {
            L => continue_if_next!(L | V | LV | LVT),
            LV | V => continue_if_next!(V | T),
            LVT | T => continue_if_next!(T),
            _ => {}
        }
        let Some(next) = next else {
            return Undetermined;
        };
        // GB9 and GB9a: Do not break before extending characters, ZWJ or
        // SpacingMarks...
        if matches!(next, Extend | ZWJ | SpacingMark) {
            return Continue;
        }
        // GB9b: ...or after Prepend characters.
        if prev == Prepend {
            return Continue;
        }
        // GB10: Do not break within emoji modifier sequences.
        if self.in_emoji_sequence && next == EModifier {
            return Continue;
        }
        // GB11: Do not break within emoji zwj sequences.
        if prev == ZWJ && matches!(next, GlueAfterZwj | EBaseGAZ) {
            return Continue;
        }
        // GB12 and GB13: Do not break within emoji flag sequences, which
        // pair up regional indicators from the start of each run.
        if self.regional_indicators % 2 == 1 && next == RegionalIndicator {
            return Continue;
        }
        // GB999: Otherwise, break everywhere.
        Split
    }

    /// Records that a character of the given category has been consumed.
    pub fn advance(&mut self, consumed: Category) {
        self.last = Some(consumed);
        if consumed == Category::RegionalIndicator {
            self.regional_indicators += 1;
        } else {
            self.regional_indicators = 0;
        }
        if consumed.is_emoji_base() {
            self.in_emoji_sequence = true;
        } else if consumed != Category::Extend {
            self.in_emoji_sequence = false;
        }
    }
}
