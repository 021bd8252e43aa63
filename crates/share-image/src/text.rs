//! Text measurement and greedy line breaking.
//!
//! Line breaking is metric-agnostic: callers pass the width function of
//! whatever surface the text will land on.

use ab_glyph::{Font, PxScale, ScaleFont};

/// Measure the pixel advance of a string at the given font and scale.
pub fn measure_text_width(font: &impl Font, scale: PxScale, text: &str) -> f32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev_glyph {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width
}

/// Distance from the top of the em box to the baseline.
pub fn ascent(font: &impl Font, scale: PxScale) -> f32 {
    font.as_scaled(scale).ascent()
}

/// Greedily break `text` into lines no wider than `max_width`.
///
/// Words are split on single spaces and each candidate line is measured as
/// `line + word + " "`, so every emitted line keeps its trailing space. A
/// word that overflows on its own still gets its own line, and the final
/// partial line is always emitted. Blank input yields no lines.
pub fn wrap_lines(text: &str, max_width: f32, mut measure: impl FnMut(&str) -> f32) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();

    for (n, word) in text.split(' ').enumerate() {
        let candidate = format!("{line}{word} ");
        if measure(&candidate) > max_width && n > 0 {
            lines.push(std::mem::take(&mut line));
            line = format!("{word} ");
        } else {
            line = candidate;
        }
    }

    lines.push(line);
    lines
}

/// Cut `text` to its first `max_chars` characters and append `...`.
///
/// The cut is by character count, not word-aware, and the ellipsis is
/// appended even when nothing was removed.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ten pixels per character.
    fn fixed(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn wrap_keeps_every_multi_word_line_within_width() {
        let text = "Balanced proportions with a gently rounded jawline and slightly wider cheekbones";
        let lines = wrap_lines(text, 200.0, fixed);
        assert!(lines.len() > 1);
        for line in &lines {
            if line.trim_end().contains(' ') {
                assert!(fixed(line) <= 200.0, "line too wide: {line:?}");
            }
        }
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        assert_eq!(rejoined, text.split(' ').collect::<Vec<_>>());
    }

    #[test]
    fn wrap_flushes_trailing_partial_line() {
        let lines = wrap_lines("aaaa bbbb cc", 100.0, fixed);
        assert_eq!(lines, vec!["aaaa bbbb ".to_string(), "cc ".to_string()]);
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_lines("Oval face", 500.0, fixed), vec!["Oval face ".to_string()]);
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let lines = wrap_lines("hi extraordinarily ok", 100.0, fixed);
        assert_eq!(
            lines,
            vec!["hi ".to_string(), "extraordinarily ".to_string(), "ok ".to_string()]
        );
    }

    #[test]
    fn overlong_first_word_is_not_preceded_by_empty_line() {
        let lines = wrap_lines("extraordinarily", 50.0, fixed);
        assert_eq!(lines, vec!["extraordinarily ".to_string()]);
    }

    #[test]
    fn blank_text_yields_no_lines() {
        assert!(wrap_lines("", 100.0, fixed).is_empty());
        assert!(wrap_lines("   ", 100.0, fixed).is_empty());
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_with_ellipsis("Über-thin wire", 4), "Über...");
        assert_eq!(truncate_with_ellipsis("short", 50), "short...");
    }
}
