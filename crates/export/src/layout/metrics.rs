//! Static font-metric tables for the builtin Helvetica family.
//!
//! Widths are AFM glyph widths in 1/1000 em for ASCII 0x20..=0x7E
//! (index = codepoint - 32). Text reaching the PDF encoder has already been
//! ASCII-sanitized, so the tables cover the real character population; any
//! straggler non-ASCII character falls back to an average width. Oblique
//! shares the regular table (true for Helvetica — slant does not change
//! advance widths).

/// Styles the PDF encoder can request. Capability negotiation happens
/// before metrics are consulted: a downgraded style measures as Regular.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Oblique,
}

/// 1 PostScript point in millimetres.
const PT_TO_MM: f32 = 25.4 / 72.0;

/// Helvetica regular AFM widths, 0x20..=0x7E.
#[rustfmt::skip]
static HELVETICA: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    278, 278, 584, 584, 584, 556, 1015,
    // A    B    C    D    E    F    G    H    I    J    K    L    M
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    278, 278, 278, 469, 556, 333,
    // a    b    c    d    e    f    g    h    i    j    k    l    m
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    // n    o    p    q    r    s    t    u    v    w    x    y    z
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // {    |    }    ~
    334, 260, 334, 584,
];

/// Helvetica-Bold AFM widths, 0x20..=0x7E.
#[rustfmt::skip]
static HELVETICA_BOLD: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    333, 333, 584, 584, 584, 611, 975,
    // A    B    C    D    E    F    G    H    I    J    K    L    M
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    333, 278, 333, 584, 556, 333,
    // a    b    c    d    e    f    g    h    i    j    k    l    m
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    // n    o    p    q    r    s    t    u    v    w    x    y    z
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // {    |    }    ~
    389, 280, 389, 584,
];

/// Fallback width (em/1000) for characters outside the table.
const AVERAGE_WIDTH: u16 = 556;

fn table(style: FontStyle) -> &'static [u16; 95] {
    match style {
        FontStyle::Regular | FontStyle::Oblique => &HELVETICA,
        FontStyle::Bold => &HELVETICA_BOLD,
    }
}

/// Measures `text` in em units (1.0 = the font size).
pub fn measure_em(text: &str, style: FontStyle) -> f32 {
    let widths = table(style);
    text.chars()
        .map(|c| {
            let code = c as usize;
            if (32..=126).contains(&code) {
                widths[code - 32] as f32
            } else {
                AVERAGE_WIDTH as f32
            }
        })
        .sum::<f32>()
        / 1000.0
}

/// Rendered width of `text` in millimetres at `size_pt`.
pub fn text_width_mm(text: &str, style: FontStyle, size_pt: f32) -> f32 {
    measure_em(text, style) * size_pt * PT_TO_MM
}

/// Width of the space glyph in millimetres at `size_pt`.
pub fn space_width_mm(style: FontStyle, size_pt: f32) -> f32 {
    (table(style)[0] as f32 / 1000.0) * size_pt * PT_TO_MM
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
