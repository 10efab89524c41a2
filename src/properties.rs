use u8char::u8char;

mod table;

use table::GRAPHEME_BREAK_RANGES;

/// Enumeration of **Grapheme_Cluster_Break** property values, from
/// [UAX#29 Section 3.1](https://www.unicode.org/reports/tr29/#Grapheme_Cluster_Break_Property_Values)
/// as of Unicode 10.0.0.
///
/// That release is the last to assign characters to the emoji-specific
/// values [`Category::EBase`], [`Category::EModifier`],
/// [`Category::GlueAfterZwj`] and [`Category::EBaseGAZ`]. Later releases
/// use the Extended_Pictographic property for those rules instead.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Represents that none of the grapheme cluster break property values
    /// apply to a particular character at all. UAX#29 calls this "Other".
    None = 0x00,
    CR = 0x01,
    LF = 0x02,
    Control = 0x03,
    Extend = 0x04,
    ZWJ = 0x05,
    RegionalIndicator = 0x06,
    Prepend = 0x07,
    SpacingMark = 0x08,
    L = 0x09,
    V = 0x0a,
    T = 0x0b,
    LV = 0x0c,
    LVT = 0x0d,
    EBase = 0x0e,
    EModifier = 0x0f,
    GlueAfterZwj = 0x10,
    EBaseGAZ = 0x11,
}

impl Category {
    /// Returns the category of the given code point.
    ///
    /// Values outside of the Unicode code space are [`Category::None`].
    /// Surrogates are [`Category::Control`], as listed in the Unicode data,
    /// even though they can't appear in a `char`.
    pub fn for_code_point(cp: u32) -> Self {
        classify(GRAPHEME_BREAK_RANGES, cp)
    }

    /// Returns the category of the given character.
    pub fn for_char(c: char) -> Self {
        Self::for_code_point(c as u32)
    }

    /// Returns the category of the given character, represented as a
    /// [`u8char`] value.
    pub fn for_u8char(c: u8char) -> Self {
        match c.as_str().chars().next() {
            Some(c) => Self::for_char(c),
            None => Self::None,
        }
    }

    /// Returns `true` for [`Category::Control`], [`Category::CR`] and
    /// [`Category::LF`], which isolate themselves under rules
    /// [GB4](https://www.unicode.org/reports/tr29/#GB4) and
    /// [GB5](https://www.unicode.org/reports/tr29/#GB5).
    pub const fn is_any_control(self) -> bool {
        matches!(self, Category::LF | Category::CR | Category::Control)
    }

    /// Returns `true` for the categories that begin an emoji modifier
    /// sequence under rule GB10.
    pub const fn is_emoji_base(self) -> bool {
        matches!(self, Category::EBase | Category::EBaseGAZ)
    }
}

/// What is known about the character following the current position.
///
/// The boundary rules sometimes need to see one character ahead, and a
/// caller working through a partially-received stream can't always provide
/// it. [`Lookahead::Unknown`] represents that situation, while
/// [`Lookahead::EndOfText`] represents a stream that is known to be
/// complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead {
    /// The next character is available and has the given category.
    Char(Category),
    /// There are no more characters.
    EndOfText,
    /// No further input is available yet, but the stream hasn't ended.
    Unknown,
}

impl Lookahead {
    /// Returns [`Lookahead::EndOfText`] if `at_end_of_input` is set, or
    /// [`Lookahead::Unknown`] otherwise.
    pub const fn after_buffer(at_end_of_input: bool) -> Self {
        if at_end_of_input {
            Lookahead::EndOfText
        } else {
            Lookahead::Unknown
        }
    }

    /// Returns the category of the next character, if there is one.
    pub const fn category(self) -> Option<Category> {
        match self {
            Lookahead::Char(cat) => Some(cat),
            _ => None,
        }
    }
}

impl From<Category> for Lookahead {
    fn from(cat: Category) -> Self {
        Lookahead::Char(cat)
    }
}

/// Finds the category of `cp` in a table of sorted, non-overlapping
/// half-open ranges.
///
/// The first range whose end exceeds `cp` is the only one that could
/// contain it.
fn classify(table: &[(u32, u32, Category)], cp: u32) -> Category {
    let i = table.partition_point(|&(_, end, _)| end <= cp);
    match table.get(i) {
        Some(&(begin, _, cat)) if begin <= cp => cat,
        _ => Category::None,
    }
}

#[cfg(test)]
pub(crate) fn ranges() -> &'static [(u32, u32, Category)] {
    GRAPHEME_BREAK_RANGES
}

#[cfg(test)]
pub(crate) mod test_table;
