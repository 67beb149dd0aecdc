//! Line classification by chord-symbol density.

use crate::grammar::{chord_coverage, has_bracket_markup};

use super::types::LineKind;

/// Lines whose bare-chord coverage is strictly above this are chord lines.
pub const CHORD_LINE_DENSITY: f64 = 0.6;

/// Lines whose coverage is below this are lyric lines. Coverage between the
/// two thresholds is also read as lyrics.
pub const LYRIC_LINE_DENSITY: f64 = 0.4;

/// Share of the non-whitespace characters of `line` covered by bare chord
/// tokens, in `0.0..=1.0`. Blank lines have density 0.
pub fn chord_density(line: &str) -> f64 {
    let visible = line.chars().filter(|c| !c.is_whitespace()).count();
    if visible == 0 {
        return 0.0;
    }
    chord_coverage(line) as f64 / visible as f64
}

/// Classify one line.
///
/// Bracket markup wins over density; then blank lines; then density.
pub fn classify_line(line: &str) -> LineKind {
    if has_bracket_markup(line) {
        return LineKind::MixedInlineLine;
    }
    if line.trim().is_empty() {
        return LineKind::BlankLine;
    }
    let density = chord_density(line);
    if density > CHORD_LINE_DENSITY {
        LineKind::ChordLine
    } else if density < LYRIC_LINE_DENSITY {
        LineKind::LyricLine
    } else {
        tracing::debug!(line, density, "ambiguous chord density, reading as lyrics");
        LineKind::LyricLine
    }
}
