use super::*;

// The tests in this file are only for the public-facing `Segmenter` API.
// The rules themselves are tested under `crate::state::tests`, and the
// buffer-scanning functions under `crate::scan::tests`.

use pretty_assertions::assert_eq;

#[test]
fn basics() {
    use ::u8char::AsU8Chars;

    let mut clusters: Vec<String> = Vec::new();
    let mut current_cluster = String::new();
    let mut seg = Segmenter::new();
    let input = "Hello!\r\nBeep \u{1F9D1}\u{200D}\u{1F33E}";

    for c in input.u8chars() {
        if seg.next_u8char(c) == ClusterAction::Split {
            clusters.push(current_cluster.clone());
            current_cluster.clear();
        }
        current_cluster.push_str(c.as_str());
    }
    if seg.end_of_input() == ClusterAction::Split {
        clusters.push(current_cluster.clone());
    }

    assert_eq!(
        clusters,
        &[
            "H",
            "e",
            "l",
            "l",
            "o",
            "!",
            "\r\n",
            "B",
            "e",
            "e",
            "p",
            " ",
            "\u{1F9D1}\u{200D}\u{1F33E}"
        ]
    );
}

#[test]
fn end_of_input() {
    let mut seg = Segmenter::new();
    assert_eq!(seg.end_of_input(), ClusterAction::Continue);
    for c in "a\u{0301}\r\n\u{1F1E6}".chars() {
        seg.next_char(c);
        assert!(!seg.at_start());
        assert_eq!(seg.end_of_input(), ClusterAction::Split);
        assert!(seg.at_start());
        // The first character after the end of input never joins what came
        // before, because it starts a new text.
        assert_eq!(seg.next_char('\u{0301}'), ClusterAction::Continue);
        seg.end_of_input();
    }
}

#[test]
fn next_chars_from_str() {
    use ClusterAction::*;
    let mut seg = Segmenter::new();
    let input = "Hello!\r\nBeep \u{1F9D1}\u{200D}\u{1F33E}";
    let got: Vec<_> = seg.next_chars_from_str(input).collect();
    assert_eq!(
        got,
        &[
            (Continue, 'H'),
            (Split, 'e'),
            (Split, 'l'),
            (Split, 'l'),
            (Split, 'o'),
            (Split, '!'),
            (Split, '\r'),
            (Continue, '\n'),
            (Split, 'B'),
            (Split, 'e'),
            (Split, 'e'),
            (Split, 'p'),
            (Split, ' '),
            (Split, '\u{1F9D1}'),
            (Continue, '\u{200D}'), // zero-width joiner
            (Continue, '\u{1F33E}'),
        ]
    );
}

#[test]
fn state_survives_between_strings() {
    // Feeding a text in pieces gives the same answers as feeding it whole,
    // because the segmenter remembers the context between calls.
    let input = ["\u{1F1E6}", "\u{1F1E7}\u{1F1E8}", "\r", "\n\u{1F476}", "\u{1F3FB}"];
    let mut whole = Segmenter::new();
    let want: Vec<_> = whole.next_chars_from_str(&input.concat()).collect();
    let mut pieces = Segmenter::new();
    let mut got = Vec::new();
    for piece in input {
        got.extend(pieces.next_chars_from_str(piece));
    }
    assert_eq!(got, want);
}

#[test]
fn query_without_consuming() {
    let mut seg = Segmenter::new();
    seg.advance(Category::CR);
    assert_eq!(
        seg.boundary_before(Lookahead::Unknown),
        ClusterAction::Undetermined
    );
    // Asking doesn't change anything, so the decision is still open.
    assert_eq!(
        seg.boundary_before(Lookahead::Unknown),
        ClusterAction::Undetermined
    );
    assert_eq!(
        seg.boundary_before(Category::LF.into()),
        ClusterAction::Continue
    );
    assert_eq!(
        seg.boundary_before(Category::None.into()),
        ClusterAction::Split
    );
    assert_eq!(
        seg.boundary_before(Lookahead::EndOfText),
        ClusterAction::Split
    );
}

#[test]
fn cluster_action_pairs() {
    use std::assert_eq;
    let pairs: Vec<_> = [
        ClusterAction::Continue,
        ClusterAction::Split,
        ClusterAction::Undetermined,
    ]
    .into_iter()
    .map(|action| (action.is_boundary(), action.is_certain()))
    .collect();
    assert_eq!(pairs, [(false, true), (true, true), (false, false)]);
}

#[test]
fn lookahead() {
    assert_eq!(Lookahead::after_buffer(true), Lookahead::EndOfText);
    assert_eq!(Lookahead::after_buffer(false), Lookahead::Unknown);
    assert_eq!(
        Lookahead::from(Category::ZWJ).category(),
        Some(Category::ZWJ)
    );
    assert_eq!(Lookahead::Unknown.category(), None);
}
