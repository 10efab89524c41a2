// Generated from GraphemeBreakProperty.txt of the Unicode Character
// Database, version 10.0.0. DO NOT EDIT.
//
// Each entry is a half-open range `[begin, end)` of code points sharing a
// Grapheme_Cluster_Break property value. Entries are sorted by `begin` and
// never overlap; adjacent ranges with the same value have been merged.
// Code points not covered by any entry have the value `Other`, which is
// represented as `Category::None`.

use super::Category;
use super::Category::*;

pub(super) static GRAPHEME_BREAK_RANGES: &[(u32, u32, Category)] = &[
    (0x0000, 0x000A, Control),
    (0x000A, 0x000B, LF),
    (0x000B, 0x000D, Control),
    (0x000D, 0x000E, CR),
    (0x000E, 0x0020, Control),
    (0x007F, 0x00A0, Control),
    (0x00AD, 0x00AE, Control),
    (0x0300, 0x0370, Extend),
    (0x0483, 0x048A, Extend),
    (0x0591, 0x05BE, Extend),
    (0x05BF, 0x05C0, Extend),
    (0x05C1, 0x05C3, Extend),
    (0x05C4, 0x05C6, Extend),
    (0x05C7, 0x05C8, Extend),
    (0x0600, 0x0606, Prepend),
    (0x0610, 0x061B, Extend),
    (0x061C, 0x061D, Control),
    (0x064B, 0x0660, Extend),
    (0x0670, 0x0671, Extend),
    (0x06D6, 0x06DD, Extend),
    (0x06DD, 0x06DE, Prepend),
    (0x06DF, 0x06E5, Extend),
    (0x06E7, 0x06E9, Extend),
    (0x06EA, 0x06EE, Extend),
    (0x070F, 0x0710, Prepend),
    (0x0711, 0x0712, Extend),
    (0x0730, 0x074B, Extend),
    (0x07A6, 0x07B1, Extend),
    (0x07EB, 0x07F4, Extend),
    (0x0816, 0x081A, Extend),
    (0x081B, 0x0824, Extend),
    (0x0825, 0x0828, Extend),
    (0x0829, 0x082E, Extend),
    (0x0859, 0x085C, Extend),
    (0x08D4, 0x08E2, Extend),
    (0x08E2, 0x08E3, Prepend),
    (0x08E3, 0x0903, Extend),
    (0x0903, 0x0904, SpacingMark),
    (0x093A, 0x093B, Extend),
    (0x093B, 0x093C, SpacingMark),
    (0x093C, 0x093D, Extend),
    (0x093E, 0x0941, SpacingMark),
    (0x0941, 0x0949, Extend),
    (0x0949, 0x094D, SpacingMark),
    (0x094D, 0x094E, Extend),
    (0x094E, 0x0950, SpacingMark),
    (0x0951, 0x0958, Extend),
    (0x0962, 0x0964, Extend),
    (0x0981, 0x0982, Extend),
    (0x0982, 0x0984, SpacingMark),
    (0x09BC, 0x09BD, Extend),
    (0x09BE, 0x09BF, Extend),
    (0x09BF, 0x09C1, SpacingMark),
    (0x09C1, 0x09C5, Extend),
    (0x09C7, 0x09C9, SpacingMark),
    (0x09CB, 0x09CD, SpacingMark),
    (0x09CD, 0x09CE, Extend),
    (0x09D7, 0x09D8, Extend),
    (0x09E2, 0x09E4, Extend),
    (0x0A01, 0x0A03, Extend),
    (0x0A03, 0x0A04, SpacingMark),
    (0x0A3C, 0x0A3D, Extend),
    (0x0A3E, 0x0A41, SpacingMark),
    (0x0A41, 0x0A43, Extend),
    (0x0A47, 0x0A49, Extend),
    (0x0A4B, 0x0A4E, Extend),
    (0x0A51, 0x0A52, Extend),
    (0x0A70, 0x0A72, Extend),
    (0x0A75, 0x0A76, Extend),
    (0x0A81, 0x0A83, Extend),
    (0x0A83, 0x0A84, SpacingMark),
    (0x0ABC, 0x0ABD, Extend),
    (0x0ABE, 0x0AC1, SpacingMark),
    (0x0AC1, 0x0AC6, Extend),
    (0x0AC7, 0x0AC9, Extend),
    (0x0AC9, 0x0ACA, SpacingMark),
    (0x0ACB, 0x0ACD, SpacingMark),
    (0x0ACD, 0x0ACE, Extend),
    (0x0AE2, 0x0AE4, Extend),
    (0x0AFA, 0x0B00, Extend),
    (0x0B01, 0x0B02, Extend),
    (0x0B02, 0x0B04, SpacingMark),
    (0x0B3C, 0x0B3D, Extend),
    (0x0B3E, 0x0B40, Extend),
    (0x0B40, 0x0B41, SpacingMark),
    (0x0B41, 0x0B45, Extend),
    (0x0B47, 0x0B49, SpacingMark),
    (0x0B4B, 0x0B4D, SpacingMark),
    (0x0B4D, 0x0B4E, Extend),
    (0x0B56, 0x0B58, Extend),
    (0x0B62, 0x0B64, Extend),
    (0x0B82, 0x0B83, Extend),
    (0x0BBE, 0x0BBF, Extend),
    (0x0BBF, 0x0BC0, SpacingMark),
    (0x0BC0, 0x0BC1, Extend),
    (0x0BC1, 0x0BC3, SpacingMark),
    (0x0BC6, 0x0BC9, SpacingMark),
    (0x0BCA, 0x0BCD, SpacingMark),
    (0x0BCD, 0x0BCE, Extend),
    (0x0BD7, 0x0BD8, Extend),
    (0x0C00, 0x0C01, Extend),
    (0x0C01, 0x0C04, SpacingMark),
    (0x0C3E, 0x0C41, Extend),
    (0x0C41, 0x0C45, SpacingMark),
    (0x0C46, 0x0C49, Extend),
    (0x0C4A, 0x0C4E, Extend),
    (0x0C55, 0x0C57, Extend),
    (0x0C62, 0x0C64, Extend),
    (0x0C81, 0x0C82, Extend),
    (0x0C82, 0x0C84, SpacingMark),
    (0x0CBC, 0x0CBD, Extend),
    (0x0CBE, 0x0CBF, SpacingMark),
    (0x0CBF, 0x0CC0, Extend),
    (0x0CC0, 0x0CC2, SpacingMark),
    (0x0CC2, 0x0CC3, Extend),
    (0x0CC3, 0x0CC5, SpacingMark),
    (0x0CC6, 0x0CC7, Extend),
    (0x0CC7, 0x0CC9, SpacingMark),
    (0x0CCA, 0x0CCC, SpacingMark),
    (0x0CCC, 0x0CCE, Extend),
    (0x0CD5, 0x0CD7, Extend),
    (0x0CE2, 0x0CE4, Extend),
    (0x0D00, 0x0D02, Extend),
    (0x0D02, 0x0D04, SpacingMark),
    (0x0D3B, 0x0D3D, Extend),
    (0x0D3E, 0x0D3F, Extend),
    (0x0D3F, 0x0D41, SpacingMark),
    (0x0D41, 0x0D45, Extend),
    (0x0D46, 0x0D49, SpacingMark),
    (0x0D4A, 0x0D4D, SpacingMark),
    (0x0D4D, 0x0D4E, Extend),
    (0x0D4E, 0x0D4F, Prepend),
    (0x0D57, 0x0D58, Extend),
    (0x0D62, 0x0D64, Extend),
    (0x0D82, 0x0D84, SpacingMark),
    (0x0DCA, 0x0DCB, Extend),
    (0x0DCF, 0x0DD0, Extend),
    (0x0DD0, 0x0DD2, SpacingMark),
    (0x0DD2, 0x0DD5, Extend),
    (0x0DD6, 0x0DD7, Extend),
    (0x0DD8, 0x0DDF, SpacingMark),
    (0x0DDF, 0x0DE0, Extend),
    (0x0DF2, 0x0DF4, SpacingMark),
    (0x0E31, 0x0E32, Extend),
    (0x0E33, 0x0E34, SpacingMark),
    (0x0E34, 0x0E3B, Extend),
    (0x0E47, 0x0E4F, Extend),
    (0x0EB1, 0x0EB2, Extend),
    (0x0EB3, 0x0EB4, SpacingMark),
    (0x0EB4, 0x0EBA, Extend),
    (0x0EBB, 0x0EBD, Extend),
    (0x0EC8, 0x0ECE, Extend),
    (0x0F18, 0x0F1A, Extend),
    (0x0F35, 0x0F36, Extend),
    (0x0F37, 0x0F38, Extend),
    (0x0F39, 0x0F3A, Extend),
    (0x0F3E, 0x0F40, SpacingMark),
    (0x0F71, 0x0F7F, Extend),
    (0x0F7F, 0x0F80, SpacingMark),
    (0x0F80, 0x0F85, Extend),
    (0x0F86, 0x0F88, Extend),
    (0x0F8D, 0x0F98, Extend),
    (0x0F99, 0x0FBD, Extend),
    (0x0FC6, 0x0FC7, Extend),
    (0x102D, 0x1031, Extend),
    (0x1031, 0x1032, SpacingMark),
    (0x1032, 0x1038, Extend),
    (0x1039, 0x103B, Extend),
    (0x103B, 0x103D, SpacingMark),
    (0x103D, 0x103F, Extend),
    (0x1056, 0x1058, SpacingMark),
    (0x1058, 0x105A, Extend),
    (0x105E, 0x1061, Extend),
    (0x1071, 0x1075, Extend),
    (0x1082, 0x1083, Extend),
    (0x1084, 0x1085, SpacingMark),
    (0x1085, 0x1087, Extend),
    (0x108D, 0x108E, Extend),
    (0x109D, 0x109E, Extend),
    (0x1100, 0x1160, L),
    (0x1160, 0x11A8, V),
    (0x11A8, 0x1200, T),
    (0x135D, 0x1360, Extend),
    (0x1712, 0x1715, Extend),
    (0x1732, 0x1735, Extend),
    (0x1752, 0x1754, Extend),
    (0x1772, 0x1774, Extend),
    (0x17B4, 0x17B6, Extend),
    (0x17B6, 0x17B7, SpacingMark),
    (0x17B7, 0x17BE, Extend),
    (0x17BE, 0x17C6, SpacingMark),
    (0x17C6, 0x17C7, Extend),
    (0x17C7, 0x17C9, SpacingMark),
    (0x17C9, 0x17D4, Extend),
    (0x17DD, 0x17DE, Extend),
    (0x180B, 0x180E, Extend),
    (0x180E, 0x180F, Control),
    (0x1885, 0x1887, Extend),
    (0x18A9, 0x18AA, Extend),
    (0x1920, 0x1923, Extend),
    (0x1923, 0x1927, SpacingMark),
    (0x1927, 0x1929, Extend),
    (0x1929, 0x192C, SpacingMark),
    (0x1930, 0x1932, SpacingMark),
    (0x1932, 0x1933, Extend),
    (0x1933, 0x1939, SpacingMark),
    (0x1939, 0x193C, Extend),
    (0x1A17, 0x1A19, Extend),
    (0x1A19, 0x1A1B, SpacingMark),
    (0x1A1B, 0x1A1C, Extend),
    (0x1A55, 0x1A56, SpacingMark),
    (0x1A56, 0x1A57, Extend),
    (0x1A57, 0x1A58, SpacingMark),
    (0x1A58, 0x1A5F, Extend),
    (0x1A60, 0x1A61, Extend),
    (0x1A62, 0x1A63, Extend),
    (0x1A65, 0x1A6D, Extend),
    (0x1A6D, 0x1A73, SpacingMark),
    (0x1A73, 0x1A7D, Extend),
    (0x1A7F, 0x1A80, Extend),
    (0x1AB0, 0x1ABF, Extend),
    (0x1B00, 0x1B04, Extend),
    (0x1B04, 0x1B05, SpacingMark),
    (0x1B34, 0x1B35, Extend),
    (0x1B35, 0x1B36, SpacingMark),
    (0x1B36, 0x1B3B, Extend),
    (0x1B3B, 0x1B3C, SpacingMark),
    (0x1B3C, 0x1B3D, Extend),
    (0x1B3D, 0x1B42, SpacingMark),
    (0x1B42, 0x1B43, Extend),
    (0x1B43, 0x1B45, SpacingMark),
    (0x1B6B, 0x1B74, Extend),
    (0x1B80, 0x1B82, Extend),
    (0x1B82, 0x1B83, SpacingMark),
    (0x1BA1, 0x1BA2, SpacingMark),
    (0x1BA2, 0x1BA6, Extend),
    (0x1BA6, 0x1BA8, SpacingMark),
    (0x1BA8, 0x1BAA, Extend),
    (0x1BAA, 0x1BAB, SpacingMark),
    (0x1BAB, 0x1BAE, Extend),
    (0x1BE6, 0x1BE7, Extend),
    (0x1BE7, 0x1BE8, SpacingMark),
    (0x1BE8, 0x1BEA, Extend),
    (0x1BEA, 0x1BED, SpacingMark),
    (0x1BED, 0x1BEE, Extend),
    (0x1BEE, 0x1BEF, SpacingMark),
    (0x1BEF, 0x1BF2, Extend),
    (0x1BF2, 0x1BF4, SpacingMark),
    (0x1C24, 0x1C2C, SpacingMark),
    (0x1C2C, 0x1C34, Extend),
    (0x1C34, 0x1C36, SpacingMark),
    (0x1C36, 0x1C38, Extend),
    (0x1CD0, 0x1CD3, Extend),
    (0x1CD4, 0x1CE1, Extend),
    (0x1CE1, 0x1CE2, SpacingMark),
    (0x1CE2, 0x1CE9, Extend),
    (0x1CED, 0x1CEE, Extend),
    (0x1CF2, 0x1CF4, SpacingMark),
    (0x1CF4, 0x1CF5, Extend),
    (0x1CF7, 0x1CF8, SpacingMark),
    (0x1CF8, 0x1CFA, Extend),
    (0x1DC0, 0x1DFA, Extend),
    (0x1DFB, 0x1E00, Extend),
    (0x200B, 0x200C, Control),
    (0x200C, 0x200D, Extend),
    (0x200D, 0x200E, ZWJ),
    (0x200E, 0x2010, Control),
    (0x2028, 0x202F, Control),
    (0x2060, 0x2070, Control),
    (0x20D0, 0x20F1, Extend),
    (0x261D, 0x261E, EBase),
    (0x2640, 0x2641, GlueAfterZwj),
    (0x2642, 0x2643, GlueAfterZwj),
    (0x2695, 0x2697, GlueAfterZwj),
    (0x26F9, 0x26FA, EBase),
    (0x2708, 0x2709, GlueAfterZwj),
    (0x270A, 0x270E, EBase),
    (0x2764, 0x2765, GlueAfterZwj),
    (0x2CEF, 0x2CF2, Extend),
    (0x2D7F, 0x2D80, Extend),
    (0x2DE0, 0x2E00, Extend),
    (0x302A, 0x3030, Extend),
    (0x3099, 0x309B, Extend),
    (0xA66F, 0xA673, Extend),
    (0xA674, 0xA67E, Extend),
    (0xA69E, 0xA6A0, Extend),
    (0xA6F0, 0xA6F2, Extend),
    (0xA802, 0xA803, Extend),
    (0xA806, 0xA807, Extend),
    (0xA80B, 0xA80C, Extend),
    (0xA823, 0xA825, SpacingMark),
    (0xA825, 0xA827, Extend),
    (0xA827, 0xA828, SpacingMark),
    (0xA880, 0xA882, SpacingMark),
    (0xA8B4, 0xA8C4, SpacingMark),
    (0xA8C4, 0xA8C6, Extend),
    (0xA8E0, 0xA8F2, Extend),
    (0xA926, 0xA92E, Extend),
    (0xA947, 0xA952, Extend),
    (0xA952, 0xA954, SpacingMark),
    (0xA960, 0xA97D, L),
    (0xA980, 0xA983, Extend),
    (0xA983, 0xA984, SpacingMark),
    (0xA9B3, 0xA9B4, Extend),
    (0xA9B4, 0xA9B6, SpacingMark),
    (0xA9B6, 0xA9BA, Extend),
    (0xA9BA, 0xA9BC, SpacingMark),
    (0xA9BC, 0xA9BD, Extend),
    (0xA9BD, 0xA9C1, SpacingMark),
    (0xA9E5, 0xA9E6, Extend),
    (0xAA29, 0xAA2F, Extend),
    (0xAA2F, 0xAA31, SpacingMark),
    (0xAA31, 0xAA33, Extend),
    (0xAA33, 0xAA35, SpacingMark),
    (0xAA35, 0xAA37, Extend),
    (0xAA43, 0xAA44, Extend),
    (0xAA4C, 0xAA4D, Extend),
    (0xAA4D, 0xAA4E, SpacingMark),
    (0xAA7C, 0xAA7D, Extend),
    (0xAAB0, 0xAAB1, Extend),
    (0xAAB2, 0xAAB5, Extend),
    (0xAAB7, 0xAAB9, Extend),
    (0xAABE, 0xAAC0, Extend),
    (0xAAC1, 0xAAC2, Extend),
    (0xAAEB, 0xAAEC, SpacingMark),
    (0xAAEC, 0xAAEE, Extend),
    (0xAAEE, 0xAAF0, SpacingMark),
    (0xAAF5, 0xAAF6, SpacingMark),
    (0xAAF6, 0xAAF7, Extend),
    (0xABE3, 0xABE5, SpacingMark),
    (0xABE5, 0xABE6, Extend),
    (0xABE6, 0xABE8, SpacingMark),
    (0xABE8, 0xABE9, Extend),
    (0xABE9, 0xABEB, SpacingMark),
    (0xABEC, 0xABED, SpacingMark),
    (0xABED, 0xABEE, Extend),
    (0xAC00, 0xAC01, LV),
    (0xAC01, 0xAC1C, LVT),
    (0xAC1C, 0xAC1D, LV),
    (0xAC1D, 0xAC38, LVT),
    (0xAC38, 0xAC39, LV),
    (0xAC39, 0xAC54, LVT),
    (0xAC54, 0xAC55, LV),
    (0xAC55, 0xAC70, LVT),
    (0xAC70, 0xAC71, LV),
    (0xAC71, 0xAC8C, LVT),
    (0xAC8C, 0xAC8D, LV),
    (0xAC8D, 0xACA8, LVT),
    (0xACA8, 0xACA9, LV),
    (0xACA9, 0xACC4, LVT),
    (0xACC4, 0xACC5, LV),
    (0xACC5, 0xACE0, LVT),
    (0xACE0, 0xACE1, LV),
    (0xACE1, 0xACFC, LVT),
    (0xACFC, 0xACFD, LV),
    (0xACFD, 0xAD18, LVT),
    (0xAD18, 0xAD19, LV),
    (0xAD19, 0xAD34, LVT),
    (0xAD34, 0xAD35, LV),
    (0xAD35, 0xAD50, LVT),
    (0xAD50, 0xAD51, LV),
    (0xAD51, 0xAD6C, LVT),
    (0xAD6C, 0xAD6D, LV),
    (0xAD6D, 0xAD88, LVT),
    (0xAD88, 0xAD89, LV),
    (0xAD89, 0xADA4, LVT),
    (0xADA4, 0xADA5, LV),
    (0xADA5, 0xADC0, LVT),
    (0xADC0, 0xADC1, LV),
    (0xADC1, 0xADDC, LVT),
    (0xADDC, 0xADDD, LV),
    (0xADDD, 0xADF8, LVT),
    (0xADF8, 0xADF9, LV),
    (0xADF9, 0xAE14, LVT),
    (0xAE14, 0xAE15, LV),
    (0xAE15, 0xAE30, LVT),
    (0xAE30, 0xAE31, LV),
    (0xAE31, 0xAE4C, LVT),
    (0xAE4C, 0xAE4D, LV),
    (0xAE4D, 0xAE68, LVT),
    (0xAE68, 0xAE69, LV),
    (0xAE69, 0xAE84, LVT),
    (0xAE84, 0xAE85, LV),
    (0xAE85, 0xAEA0, LVT),
    (0xAEA0, 0xAEA1, LV),
    (0xAEA1, 0xAEBC, LVT),
    (0xAEBC, 0xAEBD, LV),
    (0xAEBD, 0xAED8, LVT),
    (0xAED8, 0xAED9, LV),
    (0xAED9, 0xAEF4, LVT),
    (0xAEF4, 0xAEF5, LV),
    (0xAEF5, 0xAF10, LVT),
    (0xAF10, 0xAF11, LV),
    (0xAF11, 0xAF2C, LVT),
    (0xAF2C, 0xAF2D, LV),
    (0xAF2D, 0xAF48, LVT),
    (0xAF48, 0xAF49, LV),
    (0xAF49, 0xAF64, LVT),
    (0xAF64, 0xAF65, LV),
    (0xAF65, 0xAF80, LVT),
    (0xAF80, 0xAF81, LV),
    (0xAF81, 0xAF9C, LVT),
    (0xAF9C, 0xAF9D, LV),
    (0xAF9D, 0xAFB8, LVT),
    (0xAFB8, 0xAFB9, LV),
    (0xAFB9, 0xAFD4, LVT),
    (0xAFD4, 0xAFD5, LV),
    (0xAFD5, 0xAFF0, LVT),
    (0xAFF0, 0xAFF1, LV),
    (0xAFF1, 0xB00C, LVT),
    (0xB00C, 0xB00D, LV),
    (0xB00D, 0xB028, LVT),
    (0xB028, 0xB029, LV),
    (0xB029, 0xB044, LVT),
    (0xB044, 0xB045, LV),
    (0xB045, 0xB060, LVT),
    (0xB060, 0xB061, LV),
    (0xB061, 0xB07C, LVT),
    (0xB07C, 0xB07D, LV),
    (0xB07D, 0xB098, LVT),
    (0xB098, 0xB099, LV),
    (0xB099, 0xB0B4, LVT),
    (0xB0B4, 0xB0B5, LV),
    (0xB0B5, 0xB0D0, LVT),
    (0xB0D0, 0xB0D1, LV),
    (0xB0D1, 0xB0EC, LVT),
    (0xB0EC, 0xB0ED, LV),
    (0xB0ED, 0xB108, LVT),
    (0xB108, 0xB109, LV),
    (0xB109, 0xB124, LVT),
    (0xB124, 0xB125, LV),
    (0xB125, 0xB140, LVT),
    (0xB140, 0xB141, LV),
    (0xB141, 0xB15C, LVT),
    (0xB15C, 0xB15D, LV),
    (0xB15D, 0xB178, LVT),
    (0xB178, 0xB179, LV),
    (0xB179, 0xB194, LVT),
    (0xB194, 0xB195, LV),
    (0xB195, 0xB1B0, LVT),
    (0xB1B0, 0xB1B1, LV),
    (0xB1B1, 0xB1CC, LVT),
    (0xB1CC, 0xB1CD, LV),
    (0xB1CD, 0xB1E8, LVT),
    (0xB1E8, 0xB1E9, LV),
    (0xB1E9, 0xB204, LVT),
    (0xB204, 0xB205, LV),
    (0xB205, 0xB220, LVT),
    (0xB220, 0xB221, LV),
    (0xB221, 0xB23C, LVT),
    (0xB23C, 0xB23D, LV),
    (0xB23D, 0xB258, LVT),
    (0xB258, 0xB259, LV),
    (0xB259, 0xB274, LVT),
    (0xB274, 0xB275, LV),
    (0xB275, 0xB290, LVT),
    (0xB290, 0xB291, LV),
    (0xB291, 0xB2AC, LVT),
    (0xB2AC, 0xB2AD, LV),
    (0xB2AD, 0xB2C8, LVT),
    (0xB2C8, 0xB2C9, LV),
    (0xB2C9, 0xB2E4, LVT),
    (0xB2E4, 0xB2E5, LV),
    (0xB2E5, 0xB300, LVT),
    (0xB300, 0xB301, LV),
    (0xB301, 0xB31C, LVT),
    (0xB31C, 0xB31D, LV),
    (0xB31D, 0xB338, LVT),
    (0xB338, 0xB339, LV),
    (0xB339, 0xB354, LVT),
    (0xB354, 0xB355, LV),
    (0xB355, 0xB370, LVT),
    (0xB370, 0xB371, LV),
    (0xB371, 0xB38C, LVT),
    (0xB38C, 0xB38D, LV),
    (0xB38D, 0xB3A8, LVT),
    (0xB3A8, 0xB3A9, LV),
    (0xB3A9, 0xB3C4, LVT),
    (0xB3C4, 0xB3C5, LV),
    (0xB3C5, 0xB3E0, LVT),
    (0xB3E0, 0xB3E1, LV),
    (0xB3E1, 0xB3FC, LVT),
    (0xB3FC, 0xB3FD, LV),
    (0xB3FD, 0xB418, LVT),
    (0xB418, 0xB419, LV),
    (0xB419, 0xB434, LVT),
    (0xB434, 0xB435, LV),
    (0xB435, 0xB450, LVT),
    (0xB450, 0xB451, LV),
    (0xB451, 0xB46C, LVT),
    (0xB46C, 0xB46D, LV),
    (0xB46D, 0xB488, LVT),
    (0xB488, 0xB489, LV),
    (0xB489, 0xB4A4, LVT),
    (0xB4A4, 0xB4A5, LV),
    (0xB4A5, 0xB4C0, LVT),
    (0xB4C0, 0xB4C1, LV),
    (0xB4C1, 0xB4DC, LVT),
    (0xB4DC, 0xB4DD, LV),
    (0xB4DD, 0xB4F8, LVT),
    (0xB4F8, 0xB4F9, LV),
    (0xB4F9, 0xB514, LVT),
    (0xB514, 0xB515, LV),
    (0xB515, 0xB530, LVT),
    (0xB530, 0xB531, LV),
    (0xB531, 0xB54C, LVT),
    (0xB54C, 0xB54D, LV),
    (0xB54D, 0xB568, LVT),
    (0xB568, 0xB569, LV),
    (0xB569, 0xB584, LVT),
    (0xB584, 0xB585, LV),
    (0xB585, 0xB5A0, LVT),
    (0xB5A0, 0xB5A1, LV),
    (0xB5A1, 0xB5BC, LVT),
    (0xB5BC, 0xB5BD, LV),
    (0xB5BD, 0xB5D8, LVT),
    (0xB5D8, 0xB5D9, LV),
    (0xB5D9, 0xB5F4, LVT),
    (0xB5F4, 0xB5F5, LV),
    (0xB5F5, 0xB610, LVT),
    (0xB610, 0xB611, LV),
    (0xB611, 0xB62C, LVT),
    (0xB62C, 0xB62D, LV),
    (0xB62D, 0xB648, LVT),
    (0xB648, 0xB649, LV),
    (0xB649, 0xB664, LVT),
    (0xB664, 0xB665, LV),
    (0xB665, 0xB680, LVT),
    (0xB680, 0xB681, LV),
    (0xB681, 0xB69C, LVT),
    (0xB69C, 0xB69D, LV),
    (0xB69D, 0xB6B8, LVT),
    (0xB6B8, 0xB6B9, LV),
    (0xB6B9, 0xB6D4, LVT),
    (0xB6D4, 0xB6D5, LV),
    (0xB6D5, 0xB6F0, LVT),
    (0xB6F0, 0xB6F1, LV),
    (0xB6F1, 0xB70C, LVT),
    (0xB70C, 0xB70D, LV),
    (0xB70D, 0xB728, LVT),
    (0xB728, 0xB729, LV),
    (0xB729, 0xB744, LVT),
    (0xB744, 0xB745, LV),
    (0xB745, 0xB760, LVT),
    (0xB760, 0xB761, LV),
    (0xB761, 0xB77C, LVT),
    (0xB77C, 0xB77D, LV),
    (0xB77D, 0xB798, LVT),
    (0xB798, 0xB799, LV),
    (0xB799, 0xB7B4, LVT),
    (0xB7B4, 0xB7B5, LV),
    (0xB7B5, 0xB7D0, LVT),
    (0xB7D0, 0xB7D1, LV),
    (0xB7D1, 0xB7EC, LVT),
    (0xB7EC, 0xB7ED, LV),
    (0xB7ED, 0xB808, LVT),
    (0xB808, 0xB809, LV),
    (0xB809, 0xB824, LVT),
    (0xB824, 0xB825, LV),
    (0xB825, 0xB840, LVT),
    (0xB840, 0xB841, LV),
    (0xB841, 0xB85C, LVT),
    (0xB85C, 0xB85D, LV),
    (0xB85D, 0xB878, LVT),
    (0xB878, 0xB879, LV),
    (0xB879, 0xB894, LVT),
    (0xB894, 0xB895, LV),
    (0xB895, 0xB8B0, LVT),
    (0xB8B0, 0xB8B1, LV),
    (0xB8B1, 0xB8CC, LVT),
    (0xB8CC, 0xB8CD, LV),
    (0xB8CD, 0xB8E8, LVT),
    (0xB8E8, 0xB8E9, LV),
    (0xB8E9, 0xB904, LVT),
    (0xB904, 0xB905, LV),
    (0xB905, 0xB920, LVT),
    (0xB920, 0xB921, LV),
    (0xB921, 0xB93C, LVT),
    (0xB93C, 0xB93D, LV),
    (0xB93D, 0xB958, LVT),
    (0xB958, 0xB959, LV),
    (0xB959, 0xB974, LVT),
    (0xB974, 0xB975, LV),
    (0xB975, 0xB990, LVT),
    (0xB990, 0xB991, LV),
    (0xB991, 0xB9AC, LVT),
    (0xB9AC, 0xB9AD, LV),
    (0xB9AD, 0xB9C8, LVT),
    (0xB9C8, 0xB9C9, LV),
    (0xB9C9, 0xB9E4, LVT),
    (0xB9E4, 0xB9E5, LV),
    (0xB9E5, 0xBA00, LVT),
    (0xBA00, 0xBA01, LV),
    (0xBA01, 0xBA1C, LVT),
    (0xBA1C, 0xBA1D, LV),
    (0xBA1D, 0xBA38, LVT),
    (0xBA38, 0xBA39, LV),
    (0xBA39, 0xBA54, LVT),
    (0xBA54, 0xBA55, LV),
    (0xBA55, 0xBA70, LVT),
    (0xBA70, 0xBA71, LV),
    (0xBA71, 0xBA8C, LVT),
    (0xBA8C, 0xBA8D, LV),
    (0xBA8D, 0xBAA8, LVT),
    (0xBAA8, 0xBAA9, LV),
    (0xBAA9, 0xBAC4, LVT),
    (0xBAC4, 0xBAC5, LV),
    (0xBAC5, 0xBAE0, LVT),
    (0xBAE0, 0xBAE1, LV),
    (0xBAE1, 0xBAFC, LVT),
    (0xBAFC, 0xBAFD, LV),
    (0xBAFD, 0xBB18, LVT),
    (0xBB18, 0xBB19, LV),
    (0xBB19, 0xBB34, LVT),
    (0xBB34, 0xBB35, LV),
    (0xBB35, 0xBB50, LVT),
    (0xBB50, 0xBB51, LV),
    (0xBB51, 0xBB6C, LVT),
    (0xBB6C, 0xBB6D, LV),
    (0xBB6D, 0xBB88, LVT),
    (0xBB88, 0xBB89, LV),
    (0xBB89, 0xBBA4, LVT),
    (0xBBA4, 0xBBA5, LV),
    (0xBBA5, 0xBBC0, LVT),
    (0xBBC0, 0xBBC1, LV),
    (0xBBC1, 0xBBDC, LVT),
    (0xBBDC, 0xBBDD, LV),
    (0xBBDD, 0xBBF8, LVT),
    (0xBBF8, 0xBBF9, LV),
    (0xBBF9, 0xBC14, LVT),
    (0xBC14, 0xBC15, LV),
    (0xBC15, 0xBC30, LVT),
    (0xBC30, 0xBC31, LV),
    (0xBC31, 0xBC4C, LVT),
    (0xBC4C, 0xBC4D, LV),
    (0xBC4D, 0xBC68, LVT),
    (0xBC68, 0xBC69, LV),
    (0xBC69, 0xBC84, LVT),
    (0xBC84, 0xBC85, LV),
    (0xBC85, 0xBCA0, LVT),
    (0xBCA0, 0xBCA1, LV),
    (0xBCA1, 0xBCBC, LVT),
    (0xBCBC, 0xBCBD, LV),
    (0xBCBD, 0xBCD8, LVT),
    (0xBCD8, 0xBCD9, LV),
    (0xBCD9, 0xBCF4, LVT),
    (0xBCF4, 0xBCF5, LV),
    (0xBCF5, 0xBD10, LVT),
    (0xBD10, 0xBD11, LV),
    (0xBD11, 0xBD2C, LVT),
    (0xBD2C, 0xBD2D, LV),
    (0xBD2D, 0xBD48, LVT),
    (0xBD48, 0xBD49, LV),
    (0xBD49, 0xBD64, LVT),
    (0xBD64, 0xBD65, LV),
    (0xBD65, 0xBD80, LVT),
    (0xBD80, 0xBD81, LV),
    (0xBD81, 0xBD9C, LVT),
    (0xBD9C, 0xBD9D, LV),
    (0xBD9D, 0xBDB8, LVT),
    (0xBDB8, 0xBDB9, LV),
    (0xBDB9, 0xBDD4, LVT),
    (0xBDD4, 0xBDD5, LV),
    (0xBDD5, 0xBDF0, LVT),
    (0xBDF0, 0xBDF1, LV),
    (0xBDF1, 0xBE0C, LVT),
    (0xBE0C, 0xBE0D, LV),
    (0xBE0D, 0xBE28, LVT),
    (0xBE28, 0xBE29, LV),
    (0xBE29, 0xBE44, LVT),
    (0xBE44, 0xBE45, LV),
    (0xBE45, 0xBE60, LVT),
    (0xBE60, 0xBE61, LV),
    (0xBE61, 0xBE7C, LVT),
    (0xBE7C, 0xBE7D, LV),
    (0xBE7D, 0xBE98, LVT),
    (0xBE98, 0xBE99, LV),
    (0xBE99, 0xBEB4, LVT),
    (0xBEB4, 0xBEB5, LV),
    (0xBEB5, 0xBED0, LVT),
    (0xBED0, 0xBED1, LV),
    (0xBED1, 0xBEEC, LVT),
    (0xBEEC, 0xBEED, LV),
    (0xBEED, 0xBF08, LVT),
    (0xBF08, 0xBF09, LV),
    (0xBF09, 0xBF24, LVT),
    (0xBF24, 0xBF25, LV),
    (0xBF25, 0xBF40, LVT),
    (0xBF40, 0xBF41, LV),
    (0xBF41, 0xBF5C, LVT),
    (0xBF5C, 0xBF5D, LV),
    (0xBF5D, 0xBF78, LVT),
    (0xBF78, 0xBF79, LV),
    (0xBF79, 0xBF94, LVT),
    (0xBF94, 0xBF95, LV),
    (0xBF95, 0xBFB0, LVT),
    (0xBFB0, 0xBFB1, LV),
    (0xBFB1, 0xBFCC, LVT),
    (0xBFCC, 0xBFCD, LV),
    (0xBFCD, 0xBFE8, LVT),
    (0xBFE8, 0xBFE9, LV),
    (0xBFE9, 0xC004, LVT),
    (0xC004, 0xC005, LV),
    (0xC005, 0xC020, LVT),
    (0xC020, 0xC021, LV),
    (0xC021, 0xC03C, LVT),
    (0xC03C, 0xC03D, LV),
    (0xC03D, 0xC058, LVT),
    (0xC058, 0xC059, LV),
    (0xC059, 0xC074, LVT),
    (0xC074, 0xC075, LV),
    (0xC075, 0xC090, LVT),
    (0xC090, 0xC091, LV),
    (0xC091, 0xC0AC, LVT),
    (0xC0AC, 0xC0AD, LV),
    (0xC0AD, 0xC0C8, LVT),
    (0xC0C8, 0xC0C9, LV),
    (0xC0C9, 0xC0E4, LVT),
    (0xC0E4, 0xC0E5, LV),
    (0xC0E5, 0xC100, LVT),
    (0xC100, 0xC101, LV),
    (0xC101, 0xC11C, LVT),
    (0xC11C, 0xC11D, LV),
    (0xC11D, 0xC138, LVT),
    (0xC138, 0xC139, LV),
    (0xC139, 0xC154, LVT),
    (0xC154, 0xC155, LV),
    (0xC155, 0xC170, LVT),
    (0xC170, 0xC171, LV),
    (0xC171, 0xC18C, LVT),
    (0xC18C, 0xC18D, LV),
    (0xC18D, 0xC1A8, LVT),
    (0xC1A8, 0xC1A9, LV),
    (0xC1A9, 0xC1C4, LVT),
    (0xC1C4, 0xC1C5, LV),
    (0xC1C5, 0xC1E0, LVT),
    (0xC1E0, 0xC1E1, LV),
    (0xC1E1, 0xC1FC, LVT),
    (0xC1FC, 0xC1FD, LV),
    (0xC1FD, 0xC218, LVT),
    (0xC218, 0xC219, LV),
    (0xC219, 0xC234, LVT),
    (0xC234, 0xC235, LV),
    (0xC235, 0xC250, LVT),
    (0xC250, 0xC251, LV),
    (0xC251, 0xC26C, LVT),
    (0xC26C, 0xC26D, LV),
    (0xC26D, 0xC288, LVT),
    (0xC288, 0xC289, LV),
    (0xC289, 0xC2A4, LVT),
    (0xC2A4, 0xC2A5, LV),
    (0xC2A5, 0xC2C0, LVT),
    (0xC2C0, 0xC2C1, LV),
    (0xC2C1, 0xC2DC, LVT),
    (0xC2DC, 0xC2DD, LV),
    (0xC2DD, 0xC2F8, LVT),
    (0xC2F8, 0xC2F9, LV),
    (0xC2F9, 0xC314, LVT),
    (0xC314, 0xC315, LV),
    (0xC315, 0xC330, LVT),
    (0xC330, 0xC331, LV),
    (0xC331, 0xC34C, LVT),
    (0xC34C, 0xC34D, LV),
    (0xC34D, 0xC368, LVT),
    (0xC368, 0xC369, LV),
    (0xC369, 0xC384, LVT),
    (0xC384, 0xC385, LV),
    (0xC385, 0xC3A0, LVT),
    (0xC3A0, 0xC3A1, LV),
    (0xC3A1, 0xC3BC, LVT),
    (0xC3BC, 0xC3BD, LV),
    (0xC3BD, 0xC3D8, LVT),
    (0xC3D8, 0xC3D9, LV),
    (0xC3D9, 0xC3F4, LVT),
    (0xC3F4, 0xC3F5, LV),
    (0xC3F5, 0xC410, LVT),
    (0xC410, 0xC411, LV),
    (0xC411, 0xC42C, LVT),
    (0xC42C, 0xC42D, LV),
    (0xC42D, 0xC448, LVT),
    (0xC448, 0xC449, LV),
    (0xC449, 0xC464, LVT),
    (0xC464, 0xC465, LV),
    (0xC465, 0xC480, LVT),
    (0xC480, 0xC481, LV),
    (0xC481, 0xC49C, LVT),
    (0xC49C, 0xC49D, LV),
    (0xC49D, 0xC4B8, LVT),
    (0xC4B8, 0xC4B9, LV),
    (0xC4B9, 0xC4D4, LVT),
    (0xC4D4, 0xC4D5, LV),
    (0xC4D5, 0xC4F0, LVT),
    (0xC4F0, 0xC4F1, LV),
    (0xC4F1, 0xC50C, LVT),
    (0xC50C, 0xC50D, LV),
    (0xC50D, 0xC528, LVT),
    (0xC528, 0xC529, LV),
    (0xC529, 0xC544, LVT),
    (0xC544, 0xC545, LV),
    (0xC545, 0xC560, LVT),
    (0xC560, 0xC561, LV),
    (0xC561, 0xC57C, LVT),
    (0xC57C, 0xC57D, LV),
    (0xC57D, 0xC598, LVT),
    (0xC598, 0xC599, LV),
    (0xC599, 0xC5B4, LVT),
    (0xC5B4, 0xC5B5, LV),
    (0xC5B5, 0xC5D0, LVT),
    (0xC5D0, 0xC5D1, LV),
    (0xC5D1, 0xC5EC, LVT),
    (0xC5EC, 0xC5ED, LV),
    (0xC5ED, 0xC608, LVT),
    (0xC608, 0xC609, LV),
    (0xC609, 0xC624, LVT),
    (0xC624, 0xC625, LV),
    (0xC625, 0xC640, LVT),
    (0xC640, 0xC641, LV),
    (0xC641, 0xC65C, LVT),
    (0xC65C, 0xC65D, LV),
    (0xC65D, 0xC678, LVT),
    (0xC678, 0xC679, LV),
    (0xC679, 0xC694, LVT),
    (0xC694, 0xC695, LV),
    (0xC695, 0xC6B0, LVT),
    (0xC6B0, 0xC6B1, LV),
    (0xC6B1, 0xC6CC, LVT),
    (0xC6CC, 0xC6CD, LV),
    (0xC6CD, 0xC6E8, LVT),
    (0xC6E8, 0xC6E9, LV),
    (0xC6E9, 0xC704, LVT),
    (0xC704, 0xC705, LV),
    (0xC705, 0xC720, LVT),
    (0xC720, 0xC721, LV),
    (0xC721, 0xC73C, LVT),
    (0xC73C, 0xC73D, LV),
    (0xC73D, 0xC758, LVT),
    (0xC758, 0xC759, LV),
    (0xC759, 0xC774, LVT),
    (0xC774, 0xC775, LV),
    (0xC775, 0xC790, LVT),
    (0xC790, 0xC791, LV),
    (0xC791, 0xC7AC, LVT),
    (0xC7AC, 0xC7AD, LV),
    (0xC7AD, 0xC7C8, LVT),
    (0xC7C8, 0xC7C9, LV),
    (0xC7C9, 0xC7E4, LVT),
    (0xC7E4, 0xC7E5, LV),
    (0xC7E5, 0xC800, LVT),
    (0xC800, 0xC801, LV),
    (0xC801, 0xC81C, LVT),
    (0xC81C, 0xC81D, LV),
    (0xC81D, 0xC838, LVT),
    (0xC838, 0xC839, LV),
    (0xC839, 0xC854, LVT),
    (0xC854, 0xC855, LV),
    (0xC855, 0xC870, LVT),
    (0xC870, 0xC871, LV),
    (0xC871, 0xC88C, LVT),
    (0xC88C, 0xC88D, LV),
    (0xC88D, 0xC8A8, LVT),
    (0xC8A8, 0xC8A9, LV),
    (0xC8A9, 0xC8C4, LVT),
    (0xC8C4, 0xC8C5, LV),
    (0xC8C5, 0xC8E0, LVT),
    (0xC8E0, 0xC8E1, LV),
    (0xC8E1, 0xC8FC, LVT),
    (0xC8FC, 0xC8FD, LV),
    (0xC8FD, 0xC918, LVT),
    (0xC918, 0xC919, LV),
    (0xC919, 0xC934, LVT),
    (0xC934, 0xC935, LV),
    (0xC935, 0xC950, LVT),
    (0xC950, 0xC951, LV),
    (0xC951, 0xC96C, LVT),
    (0xC96C, 0xC96D, LV),
    (0xC96D, 0xC988, LVT),
    (0xC988, 0xC989, LV),
    (0xC989, 0xC9A4, LVT),
    (0xC9A4, 0xC9A5, LV),
    (0xC9A5, 0xC9C0, LVT),
    (0xC9C0, 0xC9C1, LV),
    (0xC9C1, 0xC9DC, LVT),
    (0xC9DC, 0xC9DD, LV),
    (0xC9DD, 0xC9F8, LVT),
    (0xC9F8, 0xC9F9, LV),
    (0xC9F9, 0xCA14, LVT),
    (0xCA14, 0xCA15, LV),
    (0xCA15, 0xCA30, LVT),
    (0xCA30, 0xCA31, LV),
    (0xCA31, 0xCA4C, LVT),
    (0xCA4C, 0xCA4D, LV),
    (0xCA4D, 0xCA68, LVT),
    (0xCA68, 0xCA69, LV),
    (0xCA69, 0xCA84, LVT),
    (0xCA84, 0xCA85, LV),
    (0xCA85, 0xCAA0, LVT),
    (0xCAA0, 0xCAA1, LV),
    (0xCAA1, 0xCABC, LVT),
    (0xCABC, 0xCABD, LV),
    (0xCABD, 0xCAD8, LVT),
    (0xCAD8, 0xCAD9, LV),
    (0xCAD9, 0xCAF4, LVT),
    (0xCAF4, 0xCAF5, LV),
    (0xCAF5, 0xCB10, LVT),
    (0xCB10, 0xCB11, LV),
    (0xCB11, 0xCB2C, LVT),
    (0xCB2C, 0xCB2D, LV),
    (0xCB2D, 0xCB48, LVT),
    (0xCB48, 0xCB49, LV),
    (0xCB49, 0xCB64, LVT),
    (0xCB64, 0xCB65, LV),
    (0xCB65, 0xCB80, LVT),
    (0xCB80, 0xCB81, LV),
    (0xCB81, 0xCB9C, LVT),
    (0xCB9C, 0xCB9D, LV),
    (0xCB9D, 0xCBB8, LVT),
    (0xCBB8, 0xCBB9, LV),
    (0xCBB9, 0xCBD4, LVT),
    (0xCBD4, 0xCBD5, LV),
    (0xCBD5, 0xCBF0, LVT),
    (0xCBF0, 0xCBF1, LV),
    (0xCBF1, 0xCC0C, LVT),
    (0xCC0C, 0xCC0D, LV),
    (0xCC0D, 0xCC28, LVT),
    (0xCC28, 0xCC29, LV),
    (0xCC29, 0xCC44, LVT),
    (0xCC44, 0xCC45, LV),
    (0xCC45, 0xCC60, LVT),
    (0xCC60, 0xCC61, LV),
    (0xCC61, 0xCC7C, LVT),
    (0xCC7C, 0xCC7D, LV),
    (0xCC7D, 0xCC98, LVT),
    (0xCC98, 0xCC99, LV),
    (0xCC99, 0xCCB4, LVT),
    (0xCCB4, 0xCCB5, LV),
    (0xCCB5, 0xCCD0, LVT),
    (0xCCD0, 0xCCD1, LV),
    (0xCCD1, 0xCCEC, LVT),
    (0xCCEC, 0xCCED, LV),
    (0xCCED, 0xCD08, LVT),
    (0xCD08, 0xCD09, LV),
    (0xCD09, 0xCD24, LVT),
    (0xCD24, 0xCD25, LV),
    (0xCD25, 0xCD40, LVT),
    (0xCD40, 0xCD41, LV),
    (0xCD41, 0xCD5C, LVT),
    (0xCD5C, 0xCD5D, LV),
    (0xCD5D, 0xCD78, LVT),
    (0xCD78, 0xCD79, LV),
    (0xCD79, 0xCD94, LVT),
    (0xCD94, 0xCD95, LV),
    (0xCD95, 0xCDB0, LVT),
    (0xCDB0, 0xCDB1, LV),
    (0xCDB1, 0xCDCC, LVT),
    (0xCDCC, 0xCDCD, LV),
    (0xCDCD, 0xCDE8, LVT),
    (0xCDE8, 0xCDE9, LV),
    (0xCDE9, 0xCE04, LVT),
    (0xCE04, 0xCE05, LV),
    (0xCE05, 0xCE20, LVT),
    (0xCE20, 0xCE21, LV),
    (0xCE21, 0xCE3C, LVT),
    (0xCE3C, 0xCE3D, LV),
    (0xCE3D, 0xCE58, LVT),
    (0xCE58, 0xCE59, LV),
    (0xCE59, 0xCE74, LVT),
    (0xCE74, 0xCE75, LV),
    (0xCE75, 0xCE90, LVT),
    (0xCE90, 0xCE91, LV),
    (0xCE91, 0xCEAC, LVT),
    (0xCEAC, 0xCEAD, LV),
    (0xCEAD, 0xCEC8, LVT),
    (0xCEC8, 0xCEC9, LV),
    (0xCEC9, 0xCEE4, LVT),
    (0xCEE4, 0xCEE5, LV),
    (0xCEE5, 0xCF00, LVT),
    (0xCF00, 0xCF01, LV),
    (0xCF01, 0xCF1C, LVT),
    (0xCF1C, 0xCF1D, LV),
    (0xCF1D, 0xCF38, LVT),
    (0xCF38, 0xCF39, LV),
    (0xCF39, 0xCF54, LVT),
    (0xCF54, 0xCF55, LV),
    (0xCF55, 0xCF70, LVT),
    (0xCF70, 0xCF71, LV),
    (0xCF71, 0xCF8C, LVT),
    (0xCF8C, 0xCF8D, LV),
    (0xCF8D, 0xCFA8, LVT),
    (0xCFA8, 0xCFA9, LV),
    (0xCFA9, 0xCFC4, LVT),
    (0xCFC4, 0xCFC5, LV),
    (0xCFC5, 0xCFE0, LVT),
    (0xCFE0, 0xCFE1, LV),
    (0xCFE1, 0xCFFC, LVT),
    (0xCFFC, 0xCFFD, LV),
    (0xCFFD, 0xD018, LVT),
    (0xD018, 0xD019, LV),
    (0xD019, 0xD034, LVT),
    (0xD034, 0xD035, LV),
    (0xD035, 0xD050, LVT),
    (0xD050, 0xD051, LV),
    (0xD051, 0xD06C, LVT),
    (0xD06C, 0xD06D, LV),
    (0xD06D, 0xD088, LVT),
    (0xD088, 0xD089, LV),
    (0xD089, 0xD0A4, LVT),
    (0xD0A4, 0xD0A5, LV),
    (0xD0A5, 0xD0C0, LVT),
    (0xD0C0, 0xD0C1, LV),
    (0xD0C1, 0xD0DC, LVT),
    (0xD0DC, 0xD0DD, LV),
    (0xD0DD, 0xD0F8, LVT),
    (0xD0F8, 0xD0F9, LV),
    (0xD0F9, 0xD114, LVT),
    (0xD114, 0xD115, LV),
    (0xD115, 0xD130, LVT),
    (0xD130, 0xD131, LV),
    (0xD131, 0xD14C, LVT),
    (0xD14C, 0xD14D, LV),
    (0xD14D, 0xD168, LVT),
    (0xD168, 0xD169, LV),
    (0xD169, 0xD184, LVT),
    (0xD184, 0xD185, LV),
    (0xD185, 0xD1A0, LVT),
    (0xD1A0, 0xD1A1, LV),
    (0xD1A1, 0xD1BC, LVT),
    (0xD1BC, 0xD1BD, LV),
    (0xD1BD, 0xD1D8, LVT),
    (0xD1D8, 0xD1D9, LV),
    (0xD1D9, 0xD1F4, LVT),
    (0xD1F4, 0xD1F5, LV),
    (0xD1F5, 0xD210, LVT),
    (0xD210, 0xD211, LV),
    (0xD211, 0xD22C, LVT),
    (0xD22C, 0xD22D, LV),
    (0xD22D, 0xD248, LVT),
    (0xD248, 0xD249, LV),
    (0xD249, 0xD264, LVT),
    (0xD264, 0xD265, LV),
    (0xD265, 0xD280, LVT),
    (0xD280, 0xD281, LV),
    (0xD281, 0xD29C, LVT),
    (0xD29C, 0xD29D, LV),
    (0xD29D, 0xD2B8, LVT),
    (0xD2B8, 0xD2B9, LV),
    (0xD2B9, 0xD2D4, LVT),
    (0xD2D4, 0xD2D5, LV),
    (0xD2D5, 0xD2F0, LVT),
    (0xD2F0, 0xD2F1, LV),
    (0xD2F1, 0xD30C, LVT),
    (0xD30C, 0xD30D, LV),
    (0xD30D, 0xD328, LVT),
    (0xD328, 0xD329, LV),
    (0xD329, 0xD344, LVT),
    (0xD344, 0xD345, LV),
    (0xD345, 0xD360, LVT),
    (0xD360, 0xD361, LV),
    (0xD361, 0xD37C, LVT),
    (0xD37C, 0xD37D, LV),
    (0xD37D, 0xD398, LVT),
    (0xD398, 0xD399, LV),
    (0xD399, 0xD3B4, LVT),
    (0xD3B4, 0xD3B5, LV),
    (0xD3B5, 0xD3D0, LVT),
    (0xD3D0, 0xD3D1, LV),
    (0xD3D1, 0xD3EC, LVT),
    (0xD3EC, 0xD3ED, LV),
    (0xD3ED, 0xD408, LVT),
    (0xD408, 0xD409, LV),
    (0xD409, 0xD424, LVT),
    (0xD424, 0xD425, LV),
    (0xD425, 0xD440, LVT),
    (0xD440, 0xD441, LV),
    (0xD441, 0xD45C, LVT),
    (0xD45C, 0xD45D, LV),
    (0xD45D, 0xD478, LVT),
    (0xD478, 0xD479, LV),
    (0xD479, 0xD494, LVT),
    (0xD494, 0xD495, LV),
    (0xD495, 0xD4B0, LVT),
    (0xD4B0, 0xD4B1, LV),
    (0xD4B1, 0xD4CC, LVT),
    (0xD4CC, 0xD4CD, LV),
    (0xD4CD, 0xD4E8, LVT),
    (0xD4E8, 0xD4E9, LV),
    (0xD4E9, 0xD504, LVT),
    (0xD504, 0xD505, LV),
    (0xD505, 0xD520, LVT),
    (0xD520, 0xD521, LV),
    (0xD521, 0xD53C, LVT),
    (0xD53C, 0xD53D, LV),
    (0xD53D, 0xD558, LVT),
    (0xD558, 0xD559, LV),
    (0xD559, 0xD574, LVT),
    (0xD574, 0xD575, LV),
    (0xD575, 0xD590, LVT),
    (0xD590, 0xD591, LV),
    (0xD591, 0xD5AC, LVT),
    (0xD5AC, 0xD5AD, LV),
    (0xD5AD, 0xD5C8, LVT),
    (0xD5C8, 0xD5C9, LV),
    (0xD5C9, 0xD5E4, LVT),
    (0xD5E4, 0xD5E5, LV),
    (0xD5E5, 0xD600, LVT),
    (0xD600, 0xD601, LV),
    (0xD601, 0xD61C, LVT),
    (0xD61C, 0xD61D, LV),
    (0xD61D, 0xD638, LVT),
    (0xD638, 0xD639, LV),
    (0xD639, 0xD654, LVT),
    (0xD654, 0xD655, LV),
    (0xD655, 0xD670, LVT),
    (0xD670, 0xD671, LV),
    (0xD671, 0xD68C, LVT),
    (0xD68C, 0xD68D, LV),
    (0xD68D, 0xD6A8, LVT),
    (0xD6A8, 0xD6A9, LV),
    (0xD6A9, 0xD6C4, LVT),
    (0xD6C4, 0xD6C5, LV),
    (0xD6C5, 0xD6E0, LVT),
    (0xD6E0, 0xD6E1, LV),
    (0xD6E1, 0xD6FC, LVT),
    (0xD6FC, 0xD6FD, LV),
    (0xD6FD, 0xD718, LVT),
    (0xD718, 0xD719, LV),
    (0xD719, 0xD734, LVT),
    (0xD734, 0xD735, LV),
    (0xD735, 0xD750, LVT),
    (0xD750, 0xD751, LV),
    (0xD751, 0xD76C, LVT),
    (0xD76C, 0xD76D, LV),
    (0xD76D, 0xD788, LVT),
    (0xD788, 0xD789, LV),
    (0xD789, 0xD7A4, LVT),
    (0xD7B0, 0xD7C7, V),
    (0xD7CB, 0xD7FC, T),
    (0xD800, 0xE000, Control),
    (0xFB1E, 0xFB1F, Extend),
    (0xFE00, 0xFE10, Extend),
    (0xFE20, 0xFE30, Extend),
    (0xFEFF, 0xFF00, Control),
    (0xFF9E, 0xFFA0, Extend),
    (0xFFF0, 0xFFFC, Control),
    (0x101FD, 0x101FE, Extend),
    (0x102E0, 0x102E1, Extend),
    (0x10376, 0x1037B, Extend),
    (0x10A01, 0x10A04, Extend),
    (0x10A05, 0x10A07, Extend),
    (0x10A0C, 0x10A10, Extend),
    (0x10A38, 0x10A3B, Extend),
    (0x10A3F, 0x10A40, Extend),
    (0x10AE5, 0x10AE7, Extend),
    (0x11000, 0x11001, SpacingMark),
    (0x11001, 0x11002, Extend),
    (0x11002, 0x11003, SpacingMark),
    (0x11038, 0x11047, Extend),
    (0x1107F, 0x11082, Extend),
    (0x11082, 0x11083, SpacingMark),
    (0x110B0, 0x110B3, SpacingMark),
    (0x110B3, 0x110B7, Extend),
    (0x110B7, 0x110B9, SpacingMark),
    (0x110B9, 0x110BB, Extend),
    (0x110BD, 0x110BE, Prepend),
    (0x11100, 0x11103, Extend),
    (0x11127, 0x1112C, Extend),
    (0x1112C, 0x1112D, SpacingMark),
    (0x1112D, 0x11135, Extend),
    (0x11173, 0x11174, Extend),
    (0x11180, 0x11182, Extend),
    (0x11182, 0x11183, SpacingMark),
    (0x111B3, 0x111B6, SpacingMark),
    (0x111B6, 0x111BF, Extend),
    (0x111BF, 0x111C1, SpacingMark),
    (0x111C2, 0x111C4, Prepend),
    (0x111CA, 0x111CD, Extend),
    (0x1122C, 0x1122F, SpacingMark),
    (0x1122F, 0x11232, Extend),
    (0x11232, 0x11234, SpacingMark),
    (0x11234, 0x11235, Extend),
    (0x11235, 0x11236, SpacingMark),
    (0x11236, 0x11238, Extend),
    (0x1123E, 0x1123F, Extend),
    (0x112DF, 0x112E0, Extend),
    (0x112E0, 0x112E3, SpacingMark),
    (0x112E3, 0x112EB, Extend),
    (0x11300, 0x11302, Extend),
    (0x11302, 0x11304, SpacingMark),
    (0x1133C, 0x1133D, Extend),
    (0x1133E, 0x1133F, Extend),
    (0x1133F, 0x11340, SpacingMark),
    (0x11340, 0x11341, Extend),
    (0x11341, 0x11345, SpacingMark),
    (0x11347, 0x11349, SpacingMark),
    (0x1134B, 0x1134E, SpacingMark),
    (0x11357, 0x11358, Extend),
    (0x11362, 0x11364, SpacingMark),
    (0x11366, 0x1136D, Extend),
    (0x11370, 0x11375, Extend),
    (0x11435, 0x11438, SpacingMark),
    (0x11438, 0x11440, Extend),
    (0x11440, 0x11442, SpacingMark),
    (0x11442, 0x11445, Extend),
    (0x11445, 0x11446, SpacingMark),
    (0x11446, 0x11447, Extend),
    (0x114B0, 0x114B1, Extend),
    (0x114B1, 0x114B3, SpacingMark),
    (0x114B3, 0x114B9, Extend),
    (0x114B9, 0x114BA, SpacingMark),
    (0x114BA, 0x114BB, Extend),
    (0x114BB, 0x114BD, SpacingMark),
    (0x114BD, 0x114BE, Extend),
    (0x114BE, 0x114BF, SpacingMark),
    (0x114BF, 0x114C1, Extend),
    (0x114C1, 0x114C2, SpacingMark),
    (0x114C2, 0x114C4, Extend),
    (0x115AF, 0x115B0, Extend),
    (0x115B0, 0x115B2, SpacingMark),
    (0x115B2, 0x115B6, Extend),
    (0x115B8, 0x115BC, SpacingMark),
    (0x115BC, 0x115BE, Extend),
    (0x115BE, 0x115BF, SpacingMark),
    (0x115BF, 0x115C1, Extend),
    (0x115DC, 0x115DE, Extend),
    (0x11630, 0x11633, SpacingMark),
    (0x11633, 0x1163B, Extend),
    (0x1163B, 0x1163D, SpacingMark),
    (0x1163D, 0x1163E, Extend),
    (0x1163E, 0x1163F, SpacingMark),
    (0x1163F, 0x11641, Extend),
    (0x116AB, 0x116AC, Extend),
    (0x116AC, 0x116AD, SpacingMark),
    (0x116AD, 0x116AE, Extend),
    (0x116AE, 0x116B0, SpacingMark),
    (0x116B0, 0x116B6, Extend),
    (0x116B6, 0x116B7, SpacingMark),
    (0x116B7, 0x116B8, Extend),
    (0x1171D, 0x11720, Extend),
    (0x11720, 0x11722, SpacingMark),
    (0x11722, 0x11726, Extend),
    (0x11726, 0x11727, SpacingMark),
    (0x11727, 0x1172C, Extend),
    (0x11A01, 0x11A07, Extend),
    (0x11A07, 0x11A09, SpacingMark),
    (0x11A09, 0x11A0B, Extend),
    (0x11A33, 0x11A39, Extend),
    (0x11A39, 0x11A3A, SpacingMark),
    (0x11A3A, 0x11A3B, Prepend),
    (0x11A3B, 0x11A3F, Extend),
    (0x11A47, 0x11A48, Extend),
    (0x11A51, 0x11A57, Extend),
    (0x11A57, 0x11A59, SpacingMark),
    (0x11A59, 0x11A5C, Extend),
    (0x11A86, 0x11A8A, Prepend),
    (0x11A8A, 0x11A97, Extend),
    (0x11A97, 0x11A98, SpacingMark),
    (0x11A98, 0x11A9A, Extend),
    (0x11C2F, 0x11C30, SpacingMark),
    (0x11C30, 0x11C37, Extend),
    (0x11C38, 0x11C3E, Extend),
    (0x11C3E, 0x11C3F, SpacingMark),
    (0x11C3F, 0x11C40, Extend),
    (0x11C92, 0x11CA8, Extend),
    (0x11CA9, 0x11CAA, SpacingMark),
    (0x11CAA, 0x11CB1, Extend),
    (0x11CB1, 0x11CB2, SpacingMark),
    (0x11CB2, 0x11CB4, Extend),
    (0x11CB4, 0x11CB5, SpacingMark),
    (0x11CB5, 0x11CB7, Extend),
    (0x11D31, 0x11D37, Extend),
    (0x11D3A, 0x11D3B, Extend),
    (0x11D3C, 0x11D3E, Extend),
    (0x11D3F, 0x11D46, Extend),
    (0x11D46, 0x11D47, Prepend),
    (0x11D47, 0x11D48, Extend),
    (0x16AF0, 0x16AF5, Extend),
    (0x16B30, 0x16B37, Extend),
    (0x16F51, 0x16F7F, SpacingMark),
    (0x16F8F, 0x16F93, Extend),
    (0x1BC9D, 0x1BC9F, Extend),
    (0x1BCA0, 0x1BCA4, Control),
    (0x1D165, 0x1D166, Extend),
    (0x1D166, 0x1D167, SpacingMark),
    (0x1D167, 0x1D16A, Extend),
    (0x1D16D, 0x1D16E, SpacingMark),
    (0x1D16E, 0x1D173, Extend),
    (0x1D173, 0x1D17B, Control),
    (0x1D17B, 0x1D183, Extend),
    (0x1D185, 0x1D18C, Extend),
    (0x1D1AA, 0x1D1AE, Extend),
    (0x1D242, 0x1D245, Extend),
    (0x1DA00, 0x1DA37, Extend),
    (0x1DA3B, 0x1DA6D, Extend),
    (0x1DA75, 0x1DA76, Extend),
    (0x1DA84, 0x1DA85, Extend),
    (0x1DA9B, 0x1DAA0, Extend),
    (0x1DAA1, 0x1DAB0, Extend),
    (0x1E000, 0x1E007, Extend),
    (0x1E008, 0x1E019, Extend),
    (0x1E01B, 0x1E022, Extend),
    (0x1E023, 0x1E025, Extend),
    (0x1E026, 0x1E02B, Extend),
    (0x1E8D0, 0x1E8D7, Extend),
    (0x1E944, 0x1E94B, Extend),
    (0x1F1E6, 0x1F200, RegionalIndicator),
    (0x1F308, 0x1F309, GlueAfterZwj),
    (0x1F33E, 0x1F33F, GlueAfterZwj),
    (0x1F373, 0x1F374, GlueAfterZwj),
    (0x1F385, 0x1F386, EBase),
    (0x1F393, 0x1F394, GlueAfterZwj),
    (0x1F3A4, 0x1F3A5, GlueAfterZwj),
    (0x1F3A8, 0x1F3A9, GlueAfterZwj),
    (0x1F3C2, 0x1F3C5, EBase),
    (0x1F3C7, 0x1F3C8, EBase),
    (0x1F3CA, 0x1F3CD, EBase),
    (0x1F3EB, 0x1F3EC, GlueAfterZwj),
    (0x1F3ED, 0x1F3EE, GlueAfterZwj),
    (0x1F3FB, 0x1F400, EModifier),
    (0x1F442, 0x1F444, EBase),
    (0x1F446, 0x1F451, EBase),
    (0x1F466, 0x1F46A, EBaseGAZ),
    (0x1F46E, 0x1F46F, EBase),
    (0x1F470, 0x1F479, EBase),
    (0x1F47C, 0x1F47D, EBase),
    (0x1F481, 0x1F484, EBase),
    (0x1F485, 0x1F488, EBase),
    (0x1F48B, 0x1F48C, GlueAfterZwj),
    (0x1F4AA, 0x1F4AB, EBase),
    (0x1F4BB, 0x1F4BD, GlueAfterZwj),
    (0x1F527, 0x1F528, GlueAfterZwj),
    (0x1F52C, 0x1F52D, GlueAfterZwj),
    (0x1F574, 0x1F576, EBase),
    (0x1F57A, 0x1F57B, EBase),
    (0x1F590, 0x1F591, EBase),
    (0x1F595, 0x1F597, EBase),
    (0x1F5E8, 0x1F5E9, GlueAfterZwj),
    (0x1F645, 0x1F648, EBase),
    (0x1F64B, 0x1F650, EBase),
    (0x1F680, 0x1F681, GlueAfterZwj),
    (0x1F692, 0x1F693, GlueAfterZwj),
    (0x1F6A3, 0x1F6A4, EBase),
    (0x1F6B4, 0x1F6B7, EBase),
    (0x1F6C0, 0x1F6C1, EBase),
    (0x1F6CC, 0x1F6CD, EBase),
    (0x1F918, 0x1F91D, EBase),
    (0x1F91E, 0x1F920, EBase),
    (0x1F926, 0x1F927, EBase),
    (0x1F930, 0x1F93A, EBase),
    (0x1F93D, 0x1F93F, EBase),
    (0x1F9D1, 0x1F9DE, EBase),
    (0xE0000, 0xE0020, Control),
    (0xE0020, 0xE0080, Extend),
    (0xE0080, 0xE0100, Control),
    (0xE0100, 0xE01F0, Extend),
    (0xE01F0, 0xE1000, Control),
];
