// Segmentation fixtures in the shape of the Unicode 10.0.0
// GraphemeBreakTest.txt cases: an input string and the clusters it should
// split into, which together reproduce the input exactly.

pub(crate) struct GraphemeClusterTest {
    pub desc: &'static str,
    pub input: &'static str,
    pub expected: &'static [&'static str],
}

pub(crate) const UNICODE_GRAPHEME_CLUSTER_TESTS: &[GraphemeClusterTest] = &[
    GraphemeClusterTest {
        desc: "empty input",
        input: "",
        expected: &[],
    },
    GraphemeClusterTest {
        desc: "precomposed letter",
        input: "\u{00E1}",
        expected: &["\u{00E1}"],
    },
    GraphemeClusterTest {
        desc: "base letter with combining acute accent",
        input: "a\u{0301}",
        expected: &["a\u{0301}"],
    },
    GraphemeClusterTest {
        desc: "euro sign and digit",
        input: "\u{20AC}3",
        expected: &["\u{20AC}", "3"],
    },
    GraphemeClusterTest {
        desc: "two spaces (GB999)",
        input: "  ",
        expected: &[" ", " "],
    },
    GraphemeClusterTest {
        desc: "space with diaeresis then space (GB9)",
        input: " \u{0308} ",
        expected: &[" \u{0308}", " "],
    },
    GraphemeClusterTest {
        desc: "CR LF (GB3)",
        input: "\r\n",
        expected: &["\r\n"],
    },
    GraphemeClusterTest {
        desc: "CR CR (GB4)",
        input: "\r\r",
        expected: &["\r", "\r"],
    },
    GraphemeClusterTest {
        desc: "LF CR LF (GB4)",
        input: "\n\r\n",
        expected: &["\n", "\r\n"],
    },
    GraphemeClusterTest {
        desc: "CR then extend (GB4)",
        input: "\r\u{0308}",
        expected: &["\r", "\u{0308}"],
    },
    GraphemeClusterTest {
        desc: "control then extend (GB4)",
        input: "\u{0001}\u{0308}",
        expected: &["\u{0001}", "\u{0308}"],
    },
    GraphemeClusterTest {
        desc: "extend then CR (GB5)",
        input: "\u{0308}\r",
        expected: &["\u{0308}", "\r"],
    },
    GraphemeClusterTest {
        desc: "tab then extend (GB4)",
        input: "\t\u{0308}",
        expected: &["\t", "\u{0308}"],
    },
    GraphemeClusterTest {
        desc: "Hangul L V T (GB6, GB7)",
        input: "\u{1100}\u{1161}\u{11A8}",
        expected: &["\u{1100}\u{1161}\u{11A8}"],
    },
    GraphemeClusterTest {
        desc: "Hangul L LV (GB6)",
        input: "\u{1100}\u{AC00}",
        expected: &["\u{1100}\u{AC00}"],
    },
    GraphemeClusterTest {
        desc: "Hangul LV T (GB7)",
        input: "\u{AC00}\u{11A8}",
        expected: &["\u{AC00}\u{11A8}"],
    },
    GraphemeClusterTest {
        desc: "Hangul V V T (GB7)",
        input: "\u{1161}\u{1161}\u{11A8}",
        expected: &["\u{1161}\u{1161}\u{11A8}"],
    },
    GraphemeClusterTest {
        desc: "Hangul LVT T (GB8)",
        input: "\u{AC01}\u{11A8}",
        expected: &["\u{AC01}\u{11A8}"],
    },
    GraphemeClusterTest {
        desc: "Hangul LVT V",
        input: "\u{AC01}\u{1161}",
        expected: &["\u{AC01}", "\u{1161}"],
    },
    GraphemeClusterTest {
        desc: "Hangul T L",
        input: "\u{11A8}\u{1100}",
        expected: &["\u{11A8}", "\u{1100}"],
    },
    GraphemeClusterTest {
        desc: "Hangul LV with extend (GB9)",
        input: "\u{AC00}\u{0308}",
        expected: &["\u{AC00}\u{0308}"],
    },
    GraphemeClusterTest {
        desc: "Devanagari KA with vowel sign I (GB9a)",
        input: "\u{0915}\u{093F}",
        expected: &["\u{0915}\u{093F}"],
    },
    GraphemeClusterTest {
        desc: "Thai SARA AM spacing mark (GB9a)",
        input: "\u{0E01}\u{0E33}",
        expected: &["\u{0E01}\u{0E33}"],
    },
    GraphemeClusterTest {
        desc: "prepend then space (GB9b)",
        input: "\u{0600} ",
        expected: &["\u{0600} "],
    },
    GraphemeClusterTest {
        desc: "prepend prepend letter (GB9b)",
        input: "\u{0600}\u{0600}a",
        expected: &["\u{0600}\u{0600}a"],
    },
    GraphemeClusterTest {
        desc: "prepend then LF (GB5)",
        input: "\u{0600}\n",
        expected: &["\u{0600}", "\n"],
    },
    GraphemeClusterTest {
        desc: "flag (GB12)",
        input: "\u{1F1FA}\u{1F1F8}",
        expected: &["\u{1F1FA}\u{1F1F8}"],
    },
    GraphemeClusterTest {
        desc: "three regional indicators (GB12, GB999)",
        input: "\u{1F1E6}\u{1F1E7}\u{1F1E8}",
        expected: &["\u{1F1E6}\u{1F1E7}", "\u{1F1E8}"],
    },
    GraphemeClusterTest {
        desc: "four regional indicators (GB12, GB13)",
        input: "\u{1F1E6}\u{1F1E7}\u{1F1E8}\u{1F1E9}",
        expected: &["\u{1F1E6}\u{1F1E7}", "\u{1F1E8}\u{1F1E9}"],
    },
    GraphemeClusterTest {
        desc: "regional indicators after a letter (GB13)",
        input: "a\u{1F1E6}\u{1F1E7}\u{1F1E8}b",
        expected: &["a", "\u{1F1E6}\u{1F1E7}", "\u{1F1E8}", "b"],
    },
    GraphemeClusterTest {
        desc: "extend interrupts a regional indicator pair",
        input: "\u{1F1E6}\u{0308}\u{1F1E7}",
        expected: &["\u{1F1E6}\u{0308}", "\u{1F1E7}"],
    },
    GraphemeClusterTest {
        desc: "flag with ZWJ (GB9)",
        input: "\u{1F1E6}\u{1F1E7}\u{200D}\u{1F1E8}",
        expected: &["\u{1F1E6}\u{1F1E7}\u{200D}", "\u{1F1E8}"],
    },
    GraphemeClusterTest {
        desc: "emoji modifier (GB10)",
        input: "\u{1F476}\u{1F3FF}",
        expected: &["\u{1F476}\u{1F3FF}"],
    },
    GraphemeClusterTest {
        desc: "emoji modifier after extend (GB10)",
        input: "\u{1F476}\u{0308}\u{1F3FF}",
        expected: &["\u{1F476}\u{0308}\u{1F3FF}"],
    },
    GraphemeClusterTest {
        desc: "emoji modifier after E_Base_GAZ (GB10)",
        input: "\u{1F466}\u{1F3FB}",
        expected: &["\u{1F466}\u{1F3FB}"],
    },
    GraphemeClusterTest {
        desc: "modifier sequence then new base",
        input: "\u{1F476}\u{1F3FF}\u{1F476}",
        expected: &["\u{1F476}\u{1F3FF}", "\u{1F476}"],
    },
    GraphemeClusterTest {
        desc: "emoji modifier after a letter",
        input: "a\u{1F3FF}",
        expected: &["a", "\u{1F3FF}"],
    },
    GraphemeClusterTest {
        desc: "emoji modifier after Glue_After_Zwj",
        input: "\u{2764}\u{1F3FB}",
        expected: &["\u{2764}", "\u{1F3FB}"],
    },
    GraphemeClusterTest {
        desc: "regional indicator ends an emoji modifier sequence",
        input: "\u{1F476}\u{1F1E6}\u{1F3FB}",
        expected: &["\u{1F476}", "\u{1F1E6}", "\u{1F3FB}"],
    },
    GraphemeClusterTest {
        desc: "ZWJ then Glue_After_Zwj (GB11)",
        input: "a\u{200D}\u{2764}",
        expected: &["a\u{200D}\u{2764}"],
    },
    GraphemeClusterTest {
        desc: "extend ZWJ Glue_After_Zwj (GB9, GB11)",
        input: "a\u{0308}\u{200D}\u{2764}",
        expected: &["a\u{0308}\u{200D}\u{2764}"],
    },
    GraphemeClusterTest {
        desc: "ZWJ then E_Base",
        input: "\u{200D}\u{1F476}",
        expected: &["\u{200D}", "\u{1F476}"],
    },
    GraphemeClusterTest {
        desc: "family (GB11)",
        input: "\u{1F469}\u{200D}\u{1F469}\u{200D}\u{1F467}",
        expected: &["\u{1F469}\u{200D}\u{1F469}\u{200D}\u{1F467}"],
    },
    GraphemeClusterTest {
        desc: "kiss with variation selector (GB9, GB11)",
        input: "\u{1F468}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F48B}\u{200D}\u{1F468}",
        expected: &["\u{1F468}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F48B}\u{200D}\u{1F468}"],
    },
    GraphemeClusterTest {
        desc: "ZWJ E_Base_GAZ then modifier (GB11, GB10)",
        input: "\u{1F468}\u{200D}\u{1F466}\u{1F3FB}",
        expected: &["\u{1F468}\u{200D}\u{1F466}\u{1F3FB}"],
    },
    GraphemeClusterTest {
        desc: "tag sequence flag (GB9)",
        input: "\u{1F3F4}\u{E0067}\u{E0062}\u{E007F}",
        expected: &["\u{1F3F4}\u{E0067}\u{E0062}\u{E007F}"],
    },
    GraphemeClusterTest {
        desc: "letter, diaeresis, letter (GB9)",
        input: "a\u{0308}b",
        expected: &["a\u{0308}", "b"],
    },
    GraphemeClusterTest {
        desc: "letter, spacing mark, letter (GB9a)",
        input: "a\u{0903}b",
        expected: &["a\u{0903}", "b"],
    },
    GraphemeClusterTest {
        desc: "prepend attaches to the following letter (GB9b)",
        input: "a\u{0600}b",
        expected: &["a", "\u{0600}b"],
    },
    GraphemeClusterTest {
        desc: "Hangul L with diaeresis then L (GB9)",
        input: "\u{1100}\u{0308}\u{1100}",
        expected: &["\u{1100}\u{0308}", "\u{1100}"],
    },
    GraphemeClusterTest {
        desc: "Hangul T with diaeresis (GB9)",
        input: "\u{11A8}\u{0308}",
        expected: &["\u{11A8}\u{0308}"],
    },
    GraphemeClusterTest {
        desc: "Hangul LVT with spacing mark (GB9a)",
        input: "\u{AC01}\u{0903}",
        expected: &["\u{AC01}\u{0903}"],
    },
    GraphemeClusterTest {
        desc: "letter, ZWJ, Arabic letter",
        input: "a\u{200D}\u{0646}",
        expected: &["a\u{200D}", "\u{0646}"],
    },
    GraphemeClusterTest {
        desc: "space, ZWJ, Arabic letter",
        input: "\u{0020}\u{200D}\u{0646}",
        expected: &["\u{0020}\u{200D}", "\u{0646}"],
    },
    GraphemeClusterTest {
        desc: "octagonal sign, ZWJ, octagonal sign",
        input: "\u{1F6D1}\u{200D}\u{1F6D1}",
        expected: &["\u{1F6D1}\u{200D}", "\u{1F6D1}"],
    },
    GraphemeClusterTest {
        desc: "ZWJ then a symbol that is not Glue_After_Zwj",
        input: "\u{2701}\u{200D}\u{2701}",
        expected: &["\u{2701}\u{200D}", "\u{2701}"],
    },
    GraphemeClusterTest {
        desc: "modifier sequence, ZWJ, E_Base (GB10, GB9)",
        input: "\u{1F476}\u{1F3FF}\u{0308}\u{200D}\u{1F476}\u{1F3FF}",
        expected: &["\u{1F476}\u{1F3FF}\u{0308}\u{200D}", "\u{1F476}\u{1F3FF}"],
    },
    GraphemeClusterTest {
        desc: "ZWJ restarts regional indicator pairing",
        input: "\u{1F1E6}\u{200D}\u{1F1E7}\u{1F1E8}",
        expected: &["\u{1F1E6}\u{200D}", "\u{1F1E7}\u{1F1E8}"],
    },
    GraphemeClusterTest {
        desc: "two flags then letter (GB12, GB13)",
        input: "\u{1F1F7}\u{1F1FA}\u{1F1F8}\u{1F1EA}b",
        expected: &["\u{1F1F7}\u{1F1FA}", "\u{1F1F8}\u{1F1EA}", "b"],
    },
    GraphemeClusterTest {
        desc: "CR LF with a following diaeresis (GB4)",
        input: "\r\n\u{0308}",
        expected: &["\r\n", "\u{0308}"],
    },
    GraphemeClusterTest {
        desc: "control after prepend and letter (GB5)",
        input: "\u{0600}a\u{0001}",
        expected: &["\u{0600}a", "\u{0001}"],
    },
    GraphemeClusterTest {
        desc: "E_Modifier alone then E_Modifier",
        input: "\u{1F3FB}\u{1F3FB}",
        expected: &["\u{1F3FB}", "\u{1F3FB}"],
    },
    GraphemeClusterTest {
        desc: "mixed text",
        input: "Hello!\r\nBeep \u{1F9D1}\u{200D}\u{1F33E}",
        expected: &[
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
            "\u{1F9D1}\u{200D}\u{1F33E}",
        ],
    },
];
