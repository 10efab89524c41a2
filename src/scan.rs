use core::iter::FusedIterator;

use u8char::u8char;

use crate::Category;
use crate::DecodeError;
use crate::DecodeErrorKind;
use crate::Lookahead;
use crate::Segmenter;

/// Returns the byte offset of the first grapheme cluster boundary in `text`
/// after its start, or `None` if there isn't enough text to know yet.
///
/// If `at_end_of_input` is set then `text` is the whole remaining input, so
/// the end of the buffer is itself a boundary and the result is only `None`
/// when `text` is empty. Otherwise the buffer is a prefix of a longer
/// stream, and `None` means that the caller should append more text and try
/// again with the extended buffer.
///
/// Each call scans from the start of `text` with a fresh [`Segmenter`], so
/// calling again with a suffix starting at the returned offset finds the
/// following boundary.
pub fn next_boundary(text: &str, at_end_of_input: bool) -> Option<usize> {
    let mut seg = Segmenter::new();
    scan(&mut seg, text).or_else(|| {
        seg.boundary_before(Lookahead::after_buffer(at_end_of_input))
            .is_boundary()
            .then_some(text.len())
    })
}

/// Like [`next_boundary`], but for a buffer of UTF-8 bytes that might not
/// be valid.
///
/// A multi-byte sequence cut off at the end of a buffer that is not at the
/// end of the input is treated like any other character that hasn't
/// arrived yet. Any other decoding problem stops the scan: a boundary that
/// was already certain before the bad bytes is still returned, but
/// otherwise the result is a [`DecodeError`] describing them.
pub fn next_boundary_in_bytes(
    text: &[u8],
    at_end_of_input: bool,
) -> Result<Option<usize>, DecodeError> {
    let err = match core::str::from_utf8(text) {
        Ok(text) => return Ok(next_boundary(text, at_end_of_input)),
        Err(err) => err,
    };
    let valid = text.utf8_chunks().next().map_or("", |chunk| chunk.valid());
    let mut seg = Segmenter::new();
    if let Some(boundary) = scan(&mut seg, valid) {
        return Ok(Some(boundary));
    }
    // Whatever the undecodable bytes turn out to be, there is a character
    // there, so a boundary that doesn't depend on it is still genuine.
    if seg.boundary_before(Lookahead::Unknown).is_boundary() {
        return Ok(Some(valid.len()));
    }
    let kind = match err.error_len() {
        None if !at_end_of_input => return Ok(None),
        None => DecodeErrorKind::Truncated,
        Some(_) => DecodeErrorKind::Invalid,
    };
    let err = DecodeError {
        offset: err.valid_up_to(),
        kind,
    };
    log::debug!("grapheme scan stopped: {err}");
    Err(err)
}

/// Returns the first grapheme cluster in `text`, which is the whole of
/// `text` if it contains only one. Returns an empty string only if `text`
/// is empty.
pub fn first_grapheme_cluster(text: &str) -> &str {
    &text[..next_boundary(text, true).unwrap_or(0)]
}

/// Returns an iterator over the grapheme clusters of `text`, which is
/// assumed to be the entire input.
///
/// Concatenating the items reproduces `text` exactly.
pub fn graphemes(text: &str) -> Graphemes<'_> {
    Graphemes {
        inner: grapheme_indices(text),
    }
}

/// Returns an iterator over the grapheme clusters of `text` along with the
/// byte offset where each begins.
pub fn grapheme_indices(text: &str) -> GraphemeIndices<'_> {
    GraphemeIndices {
        remain: text,
        offset: 0,
    }
}

/// Iterator returned by [`graphemes`].
#[derive(Debug, Clone)]
pub struct Graphemes<'a> {
    inner: GraphemeIndices<'a>,
}

impl<'a> Graphemes<'a> {
    /// Returns the part of the text that hasn't been yielded yet.
    pub fn as_str(&self) -> &'a str {
        self.inner.remain
    }
}

impl<'a> Iterator for Graphemes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, cluster)| cluster)
    }
}

impl FusedIterator for Graphemes<'_> {}

/// Iterator returned by [`grapheme_indices`].
#[derive(Debug, Clone)]
pub struct GraphemeIndices<'a> {
    remain: &'a str,
    offset: usize,
}

impl<'a> Iterator for GraphemeIndices<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let end = next_boundary(self.remain, true)?;
        let (cluster, rest) = self.remain.split_at(end);
        let start = self.offset;
        self.remain = rest;
        self.offset += end;
        Some((start, cluster))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remain.len();
        (usize::from(len != 0), Some(len))
    }
}

impl FusedIterator for GraphemeIndices<'_> {}

/// Feeds characters from the start of `text` into `seg` until one of them
/// begins a new grapheme cluster, returning its offset. The character at
/// that offset is not consumed.
///
/// Returns `None` if every character of `text` was consumed, in which case
/// the caller decides what the end of the buffer means.
fn scan(seg: &mut Segmenter, text: &str) -> Option<usize> {
    let mut remain = text;
    loop {
        let (Some(next), rest) = u8char::from_string_prefix(remain) else {
            return None;
        };
        let cat = Category::for_u8char(next);
        if seg.boundary_before(Lookahead::Char(cat)).is_boundary() {
            return Some(text.len() - remain.len());
        }
        seg.advance(cat);
        remain = rest;
    }
}
