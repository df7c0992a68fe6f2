//! Advance widths for the builtin PDF fonts and line wrapping on top of them.

use super::Font;
use std::borrow::Cow;

/// Helvetica advance widths (1/1000 em) for ASCII 32..=126, from the AFM.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths (1/1000 em) for ASCII 32..=126.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const COURIER: u16 = 600;
/// Used for characters outside the table
const FALLBACK: u16 = 556;

fn advance(font: Font, c: char) -> u16 {
    let idx = (c as u32).wrapping_sub(32) as usize;
    match font {
        Font::Courier => COURIER,
        Font::Helvetica => HELVETICA.get(idx).copied().unwrap_or(FALLBACK),
        Font::HelveticaBold => HELVETICA_BOLD.get(idx).copied().unwrap_or(FALLBACK),
    }
}

/// Characters placed at 0x80..=0x9F by WinAnsiEncoding.
const WINANSI_EXTRAS: &[char] = &[
    '€', '‚', 'ƒ', '„', '…', '†', '‡', 'ˆ', '‰', 'Š', '‹', 'Œ', 'Ž', '‘', '’', '“', '”', '•', '–',
    '—', '˜', '™', 'š', '›', 'œ', 'ž', 'Ÿ',
];

/// Whether the builtin PDF fonts can show `c`.
pub fn is_winansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{a0}'..='\u{ff}') || WINANSI_EXTRAS.contains(&c)
}

/// Replace every character the builtin fonts cannot encode with `?`.
pub fn to_winansi(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_winansi) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(
            text.chars()
                .map(|c| if is_winansi(c) { c } else { '?' })
                .collect(),
        )
    }
}

/// Rendered width of `text` in points.
pub fn text_width(font: Font, size: f32, text: &str) -> f32 {
    let units: u32 = text.chars().map(|c| advance(font, c) as u32).sum();
    units as f32 * size / 1000.0
}

/// Greedy word wrap into lines no wider than `max_width`.
///
/// Runs of whitespace collapse to a single space. A word wider than the line
/// is broken between characters. Empty input yields one empty line.
pub fn wrap_words(font: Font, size: f32, text: &str, max_width: f32) -> Vec<String> {
    let space = text_width(font, size, " ");
    let mut lines = Vec::new();
    let mut cur = String::new();
    let mut cur_w = 0.0f32;

    for word in text.split_whitespace() {
        let w = text_width(font, size, word);
        if !cur.is_empty() && cur_w + space + w > max_width {
            lines.push(std::mem::take(&mut cur));
            cur_w = 0.0;
        }
        if w > max_width {
            for piece in break_chars(font, size, word, max_width) {
                if !cur.is_empty() {
                    lines.push(std::mem::take(&mut cur));
                }
                cur_w = text_width(font, size, &piece);
                cur = piece;
            }
            continue;
        }
        if !cur.is_empty() {
            cur.push(' ');
            cur_w += space;
        }
        cur.push_str(word);
        cur_w += w;
    }
    if !cur.is_empty() || lines.is_empty() {
        lines.push(cur);
    }
    lines
}

/// Split `text` between characters so each piece fits `max_width`.
///
/// Whitespace is preserved, which keeps indentation in program listings.
/// Every piece holds at least one character.
pub fn break_chars(font: Font, size: f32, text: &str, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut cur = String::new();
    let mut cur_w = 0.0f32;
    for c in text.chars() {
        let w = advance(font, c) as f32 * size / 1000.0;
        if !cur.is_empty() && cur_w + w > max_width {
            pieces.push(std::mem::take(&mut cur));
            cur_w = 0.0;
        }
        cur.push(c);
        cur_w += w;
    }
    if !cur.is_empty() || pieces.is_empty() {
        pieces.push(cur);
    }
    pieces
}
