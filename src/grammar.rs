//! # Chord Token Grammar
//!
//! Recognizes chord symbols embedded in free text, in two dialects:
//!
//! - **Bracketed**: `[C#m7/G#]Hello`. Any `[...]` span is a candidate; its
//!   contents are handed to [`crate::chord::parse_chord_token`] as a unit.
//! - **Bare**: `C   G/B   Am7` on a dedicated chord line. A token is a root
//!   (`A`-`G` plus optional `#`/`b`), an optional suffix from
//!   [`CHORD_SUFFIXES`] and an optional `/bass`. The root must not follow a
//!   letter and the token must not be followed by a lowercase letter, so words
//!   such as `Eu`, `Da` or `Abba` are never chords.
//!
//! Every function here matches from the start of the line it is given; there
//! is no scanner state shared between calls.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::chord::ChordToken;
use crate::note::normalize_note;

/// Accepted bare-token suffixes. Order matters: a longer suffix is tried
/// before any suffix it starts with (`maj7` before `maj`, `m7` before `m`).
pub const CHORD_SUFFIXES: &[&str] = &[
    "mmaj7", "maj7", "maj9", "maj", "m7", "m9", "m6", "m", "sus2", "sus4", "dim", "aug", "add9",
    "add11", "add13", "11", "13", "7", "9", "6", "5", "º", "°", "ø",
];

static BRACKET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]").expect("bracket pattern is valid"));

static ROOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-G][#b]?").expect("root pattern is valid"));

/// A `[...]` span in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketSpan {
    /// Byte range of the whole span, brackets included.
    pub range: Range<usize>,
    /// Byte range of the contents.
    pub inner: Range<usize>,
}

/// A bare chord token found in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordMatch {
    /// Byte range in the line.
    pub range: Range<usize>,
    /// Text as written (`"Bbm7/F"`).
    pub text: String,
    /// Parsed chord; `token.position` is the character column.
    pub token: ChordToken,
}

impl ChordMatch {
    /// Character column of the first root letter.
    pub fn position(&self) -> usize {
        self.token.position
    }

    /// Width in characters.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// All bracket spans of `line`, left to right.
pub fn find_bracket_spans(line: &str) -> Vec<BracketSpan> {
    BRACKET
        .captures_iter(line)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(BracketSpan {
                range: whole.range(),
                inner: inner.range(),
            })
        })
        .collect()
}

/// True when `line` carries inline bracket markup.
pub fn has_bracket_markup(line: &str) -> bool {
    line.contains('[') && line.contains(']')
}

/// All bare chord tokens of `line`, left to right, without overlaps.
pub fn find_bare_chords(line: &str) -> Vec<ChordMatch> {
    let mut found = Vec::new();
    let mut consumed = 0;
    for root in ROOT.find_iter(line) {
        if root.start() < consumed {
            continue;
        }
        if preceded_by_letter(line, root.start()) {
            continue;
        }
        if let Some(chord) = match_chord_at(line, root.start()) {
            consumed = chord.range.end;
            found.push(chord);
        }
    }
    found
}

/// Characters of `line` covered by bare chord tokens.
pub fn chord_coverage(line: &str) -> usize {
    find_bare_chords(line).iter().map(ChordMatch::width).sum()
}

fn preceded_by_letter(line: &str, at: usize) -> bool {
    line[..at]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphabetic())
}

fn followed_by_lowercase(line: &str, at: usize) -> bool {
    line[at..].chars().next().is_some_and(|c| c.is_lowercase())
}

/// Try every reading of the token starting at `start`, longest first: root
/// with accidental before the bare letter, listed suffixes before no suffix,
/// bass with accidental before bass without, before no bass. The first reading
/// not followed by a lowercase letter wins.
fn match_chord_at(line: &str, start: usize) -> Option<ChordMatch> {
    let rest = &line[start..];
    let mut root_lens = Vec::with_capacity(2);
    if rest[1..].starts_with(&['#', 'b'][..]) {
        root_lens.push(2);
    }
    root_lens.push(1);

    for root_len in root_lens {
        let after_root = &rest[root_len..];
        let suffixes = CHORD_SUFFIXES
            .iter()
            .copied()
            .filter(|s| after_root.starts_with(*s))
            .chain(std::iter::once(""));

        for suffix in suffixes {
            let after_suffix = &after_root[suffix.len()..];
            for bass_len in bass_lengths(after_suffix) {
                let end = start + root_len + suffix.len() + bass_len;
                if followed_by_lowercase(line, end) {
                    continue;
                }
                let bass = (bass_len > 0).then(|| normalize_note(&after_suffix[1..bass_len]));
                let position = line[..start].chars().count();
                let token = ChordToken::new(normalize_note(&rest[..root_len]), suffix, bass)
                    .at(position);
                return Some(ChordMatch {
                    range: start..end,
                    text: line[start..end].to_string(),
                    token,
                });
            }
        }
    }
    None
}

/// Candidate byte lengths of a `/bass` part at the start of `text`, longest
/// first, always ending with 0 (no bass).
fn bass_lengths(text: &str) -> Vec<usize> {
    let mut lengths = Vec::with_capacity(3);
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'/' && (b'A'..=b'G').contains(&bytes[1]) {
        if bytes.len() >= 3 && (bytes[2] == b'#' || bytes[2] == b'b') {
            lengths.push(3);
        }
        lengths.push(2);
    }
    lengths.push(0);
    lengths
}
