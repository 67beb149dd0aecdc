use crate::layout::{AlignedLine, LineKind};

/// Render rows back to plain two-line text: a chord line above each lyric
/// line, chords starting at the column of their text.
///
/// Inline markup comes out in the same layout, which makes this a converter
/// from `[C]Hello` markup to chord-over-lyric text.
pub fn render_text(rows: &[AlignedLine]) -> String {
    let mut out = String::new();
    for row in rows {
        let (chords, lyrics) = layout_row(row);
        let chords = chords.trim_end();
        if !chords.is_empty() {
            out.push_str(chords);
            out.push('\n');
        }
        if !lyrics.trim().is_empty() || chords.is_empty() {
            out.push_str(lyrics.trim_end());
            out.push('\n');
        }
    }
    out
}

/// Chord line and lyric line for one row.
fn layout_row(row: &AlignedLine) -> (String, String) {
    let mut chords = String::new();
    let mut lyrics = String::new();
    let mut chord_width = 0;
    let mut lyric_width = 0;
    let separate_words = row.kind == LineKind::ChordLine;

    for (i, pair) in row.pairs.iter().enumerate() {
        if separate_words && i > 0 {
            lyrics.push(' ');
            lyric_width += 1;
        }
        if !pair.chord.is_empty() {
            // Keep one space between consecutive chords.
            let min_column = if chord_width == 0 { 0 } else { chord_width + 1 };
            if lyric_width < min_column {
                pad(&mut lyrics, min_column - lyric_width);
                lyric_width = min_column;
            }
            pad(&mut chords, lyric_width - chord_width);
            chords.push_str(&pair.chord);
            chord_width = lyric_width + pair.chord.chars().count();
        }
        lyrics.push_str(&pair.lyric);
        lyric_width += pair.lyric.chars().count();
    }
    (chords, lyrics)
}

fn pad(out: &mut String, width: usize) {
    out.extend(std::iter::repeat(' ').take(width));
}
