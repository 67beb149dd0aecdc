//! # Transposition Engine
//!
//! Moves every chord of a song by a number of semitones and respells it,
//! leaving every other character alone.
//!
//! - [`transpose_bracket_chord_pro`] handles inline `[chord]` markup only.
//! - [`transpose_any_chord_tokens`] handles documents that mix inline markup
//!   and two-line chord-over-lyric layout, line by line.
//!
//! ## Example
//! ```rust
//! use cifra::{transpose_any_chord_tokens, transpose_bracket_chord_pro};
//!
//! assert_eq!(
//!     transpose_bracket_chord_pro("[C]Hello [G]world", 2, false),
//!     "[D]Hello [A]world"
//! );
//!
//! let song = "C       G\nHello   world\n[Am]Bye";
//! assert_eq!(
//!     transpose_any_chord_tokens(song, 2, false),
//!     "D       A\nHello   world\n[Bm]Bye"
//! );
//! ```
//!
//! Transposing by 0 with a spelling preference still respells black keys
//! (`[A#]` becomes `[Bb]` with flats).

use crate::chord::transpose_chord_token;
use crate::grammar::{find_bare_chords, find_bracket_spans, ChordMatch};
use crate::layout::{classify_line, LineKind};
use crate::note::Spelling;

/// A semitone shift together with the spelling of its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transposition {
    pub semitones: i32,
    pub spelling: Spelling,
}

impl Transposition {
    pub fn new(semitones: i32, prefer_flats: bool) -> Self {
        Self {
            semitones,
            spelling: Spelling::from_prefer_flats(prefer_flats),
        }
    }

    pub fn with_spelling(semitones: i32, spelling: Spelling) -> Self {
        Self { semitones, spelling }
    }

    fn prefer_flats(&self) -> bool {
        self.spelling.prefers_flats()
    }

    /// Transposed text for the contents of one bracket.
    pub fn chord(&self, token: &str) -> String {
        transpose_chord_token(token, self.semitones, self.prefer_flats())
    }

    /// Transposed text for a bare chord token.
    pub fn bare(&self, chord: &ChordMatch) -> String {
        chord.token.transpose(self.semitones).display(self.spelling)
    }

    /// Rewrite the contents of every `[...]` span of `text`.
    pub fn brackets(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 8);
        let mut last = 0;
        for span in find_bracket_spans(text) {
            out.push_str(&text[last..span.inner.start]);
            out.push_str(&self.chord(&text[span.inner.clone()]));
            last = span.inner.end;
        }
        out.push_str(&text[last..]);
        out
    }

    /// Rewrite every bare chord of a chord line, keeping later chords on their
    /// original columns where the surrounding spaces allow it.
    pub fn chord_line(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len() + 8);
        let mut last = 0;
        // Output characters written minus input characters consumed.
        let mut drift: isize = 0;

        for chord in find_bare_chords(line) {
            let gap = &line[last..chord.range.start];
            if last > 0 {
                push_gap(&mut out, gap, &mut drift);
            } else {
                out.push_str(gap);
            }

            let replacement = self.bare(&chord);
            drift += replacement.chars().count() as isize - chord.width() as isize;
            out.push_str(&replacement);
            last = chord.range.end;
        }
        out.push_str(&line[last..]);
        out
    }

    /// Transpose a whole document, line by line.
    pub fn text(&self, text: &str) -> String {
        text.split('\n')
            .map(|line| match classify_line(line) {
                LineKind::MixedInlineLine => self.brackets(line),
                LineKind::ChordLine => self.chord_line(line),
                LineKind::LyricLine | LineKind::BlankLine => line.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Copy the spaces between two chords, absorbing or padding them to cancel
/// `drift`. At least one space always separates two chords, and gaps holding
/// anything but spaces are copied as-is.
fn push_gap(out: &mut String, gap: &str, drift: &mut isize) {
    if gap.is_empty() || !gap.bytes().all(|b| b == b' ') {
        out.push_str(gap);
        return;
    }
    let width = gap.len() as isize;
    let adjusted = if *drift > 0 {
        let absorbed = (*drift).min(width - 1);
        *drift -= absorbed;
        width - absorbed
    } else {
        let padded = width - *drift;
        *drift = 0;
        padded
    };
    out.extend(std::iter::repeat(' ').take(adjusted as usize));
}

/// Transpose every `[chord]` of `text`. Everything outside the brackets, and
/// bracket contents that are not chords, stay byte-for-byte identical.
pub fn transpose_bracket_chord_pro(text: &str, semitones: i32, prefer_flats: bool) -> String {
    Transposition::new(semitones, prefer_flats).brackets(text)
}

/// Transpose both dialects: bracket lines get their brackets rewritten,
/// chord lines get their bare tokens rewritten, all other lines (lyrics,
/// comments, blanks) pass through unchanged.
pub fn transpose_any_chord_tokens(text: &str, semitones: i32, prefer_flats: bool) -> String {
    Transposition::new(semitones, prefer_flats).text(text)
}
