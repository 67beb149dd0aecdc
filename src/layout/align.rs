//! Chord-to-lyric alignment
//!
//! One alignment core for both dialects. Each source line is classified, then:
//!
//! - a chord line directly followed by a lyric line is matched word by word
//!   (greedy, left to right, within [`PROXIMITY_WINDOW`] columns);
//! - a chord line with no lyric line below yields one chord-only pair per chord;
//! - an inline bracket line is split into `[chord]text` segments;
//! - any other text line is a single pair with no chord;
//! - a blank line is an empty row.

use crate::grammar::{find_bare_chords, find_bracket_spans};
use crate::transpose::Transposition;

use super::classify::classify_line;
use super::types::{AlignedLine, AlignedPair, LineKind, LyricWord};

/// A chord may sit this many columns left or right of a word's first
/// character and still attach to it.
pub const PROXIMITY_WINDOW: usize = 3;

/// Placeholder lyric for an inline chord with no text after it.
pub const CHORD_ANCHOR: &str = " ";

/// A chord from a chord line, ready for display.
#[derive(Debug, Clone)]
struct PlacedChord {
    display: String,
    position: usize,
}

/// Align every line of `text`, chords shown as written.
///
/// Returns one inner sequence per output row, in source order. Rows are not
/// indexed 1:1 with source lines: a chord line directly followed by a lyric
/// line yields a single row for both. Every other line, blank lines
/// included, yields one row. Use [`align_lines`] when the source line of each
/// row matters (`source_line`, `line_count`).
///
/// ```rust
/// use cifra::align_chords_and_lyrics;
///
/// let rows = align_chords_and_lyrics("C       G       \nHello   world   ");
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0][0].chord, "C");
/// assert_eq!(rows[0][0].lyric, "Hello");
/// assert_eq!(rows[0][1].chord, "G");
/// assert_eq!(rows[0][1].lyric, "world");
///
/// // Five source lines, four rows.
/// assert_eq!(align_chords_and_lyrics("Intro\nC     G\nHello world\n\nbye").len(), 4);
/// ```
pub fn align_chords_and_lyrics(text: &str) -> Vec<Vec<AlignedPair>> {
    into_pairs(align_lines(text, None))
}

/// Align every line of `text` with every chord transposed.
///
/// Positions are those of the original text, so transposed chords that change
/// width still attach to the same words.
pub fn align_transposed(text: &str, semitones: i32, prefer_flats: bool) -> Vec<Vec<AlignedPair>> {
    into_pairs(align_lines(
        text,
        Some(Transposition::new(semitones, prefer_flats)),
    ))
}

fn into_pairs(lines: Vec<AlignedLine>) -> Vec<Vec<AlignedPair>> {
    lines.into_iter().map(|line| line.pairs).collect()
}

/// The alignment core: classify, pair chord lines with lyric lines, split
/// inline markup. `transposition` of `None` leaves chord text as written.
pub fn align_lines(text: &str, transposition: Option<Transposition>) -> Vec<AlignedLine> {
    if text.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = text.lines().collect();
    let kinds: Vec<LineKind> = lines.iter().map(|line| classify_line(line)).collect();
    let mut rows = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let kind = kinds[i];
        let mut line_count = 1;

        let pairs = match kind {
            LineKind::BlankLine => Vec::new(),
            LineKind::ChordLine => {
                let chords = chord_line_chords(line, transposition);
                if kinds.get(i + 1) == Some(&LineKind::LyricLine) {
                    line_count = 2;
                    align_two_line(chords, lines[i + 1])
                } else {
                    chords
                        .into_iter()
                        .map(|chord| AlignedPair::new(chord.display, "", chord.position))
                        .collect()
                }
            }
            LineKind::MixedInlineLine => align_inline(line, transposition),
            LineKind::LyricLine => vec![AlignedPair::new("", line, 0)],
        };

        rows.push(AlignedLine {
            kind,
            source_line: i,
            line_count,
            pairs,
        });
        i += line_count;
    }

    rows
}

fn chord_line_chords(line: &str, transposition: Option<Transposition>) -> Vec<PlacedChord> {
    find_bare_chords(line)
        .into_iter()
        .map(|m| PlacedChord {
            display: match transposition {
                Some(t) => t.bare(&m),
                None => m.text.clone(),
            },
            position: m.position(),
        })
        .collect()
}

/// Whitespace-delimited words of `line` with their character columns.
pub fn lyric_words(line: &str) -> Vec<LyricWord> {
    let mut words = Vec::new();
    let mut current: Option<LyricWord> = None;

    for (column, c) in line.chars().enumerate() {
        if c.is_whitespace() {
            if let Some(word) = current.take() {
                words.push(word);
            }
        } else {
            current
                .get_or_insert_with(|| LyricWord {
                    text: String::new(),
                    position: column,
                })
                .text
                .push(c);
        }
    }
    if let Some(word) = current {
        words.push(word);
    }
    words
}

/// Greedy single-pass matching of chords to words.
///
/// Each word, left to right, takes every not-yet-used chord within
/// [`PROXIMITY_WINDOW`] columns of its start, in chord order. Chords nobody
/// took are appended to the last pair; with no words they become chord-only
/// pairs.
fn align_two_line(chords: Vec<PlacedChord>, lyric_line: &str) -> Vec<AlignedPair> {
    let words = lyric_words(lyric_line);
    let mut used = vec![false; chords.len()];
    let mut pairs = Vec::with_capacity(words.len());

    for word in words {
        let mut attached: Vec<&str> = Vec::new();
        for (k, chord) in chords.iter().enumerate() {
            if !used[k] && chord.position.abs_diff(word.position) <= PROXIMITY_WINDOW {
                used[k] = true;
                attached.push(&chord.display);
            }
        }
        pairs.push(AlignedPair::new(attached.join(" "), word.text, word.position));
    }

    let leftovers: Vec<&PlacedChord> = chords
        .iter()
        .zip(&used)
        .filter(|&(_, &taken)| !taken)
        .map(|(chord, _)| chord)
        .collect();
    if leftovers.is_empty() {
        return pairs;
    }

    match pairs.last_mut() {
        Some(last) => {
            for chord in leftovers {
                if !last.chord.is_empty() {
                    last.chord.push(' ');
                }
                last.chord.push_str(&chord.display);
            }
        }
        None => {
            pairs.extend(
                leftovers
                    .into_iter()
                    .map(|chord| AlignedPair::new(chord.display.clone(), "", chord.position)),
            );
        }
    }
    pairs
}

/// Split an inline-markup line into `[chord]text` segments.
fn align_inline(line: &str, transposition: Option<Transposition>) -> Vec<AlignedPair> {
    let spans = find_bracket_spans(line);
    let Some(first) = spans.first() else {
        return vec![AlignedPair::new("", line, 0)];
    };

    let mut pairs = Vec::with_capacity(spans.len() + 1);
    let lead = &line[..first.range.start];
    if !lead.is_empty() {
        pairs.push(AlignedPair::new("", lead, 0));
    }

    for (k, span) in spans.iter().enumerate() {
        let text_end = spans.get(k + 1).map_or(line.len(), |next| next.range.start);
        let text = &line[span.range.end..text_end];
        let inner = &line[span.inner.clone()];
        let chord = match transposition {
            Some(t) => t.chord(inner),
            None => inner.to_string(),
        };
        let lyric = if text.trim().is_empty() { CHORD_ANCHOR } else { text };
        let position = line[..span.range.start].chars().count();
        pairs.push(AlignedPair::new(chord, lyric, position));
    }
    pairs
}
