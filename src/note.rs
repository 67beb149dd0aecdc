//! # Note / Pitch Model
//!
//! Pitch classes on the 12-tone chromatic circle.
//!
//! Every note is stored in its canonical sharp form (`C, C#, D, ... B`).
//! Flat spellings, the German `H` and the edge enharmonics (`Cb`, `Fb`, `E#`,
//! `B#`) are folded into that form on the way in; a [`Spelling`] preference is
//! only applied when a note is turned back into text.
//!
//! ## Example
//! ```rust
//! use cifra::{normalize_note, shift_note, Note};
//!
//! assert_eq!(normalize_note("Db"), Note::CSharp);
//! assert_eq!(normalize_note("H"), Note::B);
//! assert_eq!(shift_note("A", 3, false), "C");
//! assert_eq!(shift_note("C", -1, true), "B");
//! assert_eq!(shift_note("D#", 0, true), "Eb");
//! ```

use serde::Serialize;

/// Output spelling for the five black keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    #[default]
    Sharps,
    Flats,
}

impl Spelling {
    pub fn from_prefer_flats(prefer_flats: bool) -> Self {
        if prefer_flats {
            Spelling::Flats
        } else {
            Spelling::Sharps
        }
    }

    pub fn prefers_flats(self) -> bool {
        self == Spelling::Flats
    }

    /// Conventional spelling for music written in `key` (e.g. "Bb", "Dm", "F#m").
    ///
    /// A key written with an explicit accidental keeps that accidental's
    /// spelling; natural keys go through [`Spelling::for_root`].
    /// Unrecognized keys default to sharps.
    pub fn for_key(key: &str) -> Self {
        let Some((root, accidental, quality)) = split_key(key) else {
            return Spelling::Sharps;
        };
        match accidental {
            Some('#') => Spelling::Sharps,
            Some('b') => Spelling::Flats,
            _ => Spelling::for_root(root, is_minor(quality)),
        }
    }

    /// Conventional spelling for a key given by its root: flats for
    /// F, Bb, Eb, Ab, Db, Gb major and D, G, C, F, Bb, Eb minor.
    pub fn for_root(root: Note, minor: bool) -> Self {
        let flat_roots: &[Note] = if minor {
            &[Note::D, Note::G, Note::C, Note::F, Note::ASharp, Note::DSharp]
        } else {
            &[
                Note::F,
                Note::ASharp,
                Note::DSharp,
                Note::GSharp,
                Note::CSharp,
                Note::FSharp,
            ]
        };
        if flat_roots.contains(&root) {
            Spelling::Flats
        } else {
            Spelling::Sharps
        }
    }
}

/// One of the 12 pitch classes, canonically sharp-spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Note {
    #[default]
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

const NOTES: [Note; 12] = [
    Note::C,
    Note::CSharp,
    Note::D,
    Note::DSharp,
    Note::E,
    Note::F,
    Note::FSharp,
    Note::G,
    Note::GSharp,
    Note::A,
    Note::ASharp,
    Note::B,
];

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

impl Note {
    /// Position on the chromatic circle, `C = 0` ... `B = 11`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Note at `index`, reduced modulo 12 (negative indices wrap downwards).
    pub fn from_index(index: i32) -> Note {
        NOTES[index.rem_euclid(12) as usize]
    }

    /// Shift by any number of semitones, up or down.
    pub fn transpose(self, semitones: i32) -> Note {
        Note::from_index(self.index() as i32 + semitones.rem_euclid(12))
    }

    pub fn name(self, spelling: Spelling) -> &'static str {
        match spelling {
            Spelling::Sharps => SHARP_NAMES[self.index()],
            Spelling::Flats => FLAT_NAMES[self.index()],
        }
    }

    /// Strict parse of a note name. Returns `None` for anything that is not a
    /// letter `A`-`H` followed by at most one accidental.
    pub fn parse(raw: &str) -> Option<Note> {
        let mut chars = raw.trim().chars();
        let base = letter_semitone(chars.next()?)?;
        let offset = match chars.next() {
            None => 0,
            Some(c) => accidental_offset(c)?,
        };
        if chars.next().is_some() {
            return None;
        }
        Some(Note::from_index(base + offset))
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name(Spelling::Sharps))
    }
}

/// Semitone offset from C for a note letter; `H` is the German `B`.
fn letter_semitone(letter: char) -> Option<i32> {
    match letter.to_ascii_uppercase() {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' | 'H' => Some(11),
        _ => None,
    }
}

fn accidental_offset(c: char) -> Option<i32> {
    match c {
        '#' | '♯' => Some(1),
        'b' | 'B' | '♭' => Some(-1),
        _ => None,
    }
}

/// Split a key such as `"Bbm"` into its root, the accidental as written
/// (`'#'` or `'b'`) and the remaining quality text.
pub(crate) fn split_key(key: &str) -> Option<(Note, Option<char>, &str)> {
    let key = key.trim();
    let mut chars = key.char_indices();
    let (_, letter) = chars.next()?;
    let base = letter_semitone(letter)?;
    let mut rest_start = letter.len_utf8();
    let mut accidental = None;
    if let Some((i, c)) = chars.next() {
        // An uppercase 'B' after the letter would be ambiguous here, so only
        // the lowercase and Unicode forms count as flats.
        let normalized = match c {
            '#' | '♯' => Some('#'),
            'b' | '♭' => Some('b'),
            _ => None,
        };
        if let Some(acc) = normalized {
            accidental = Some(acc);
            rest_start = i + c.len_utf8();
        }
    }
    let offset = match accidental {
        Some('#') => 1,
        Some(_) => -1,
        None => 0,
    };
    Some((Note::from_index(base + offset), accidental, &key[rest_start..]))
}

/// True when a key quality such as `"m"` or `"min"` names a minor key.
pub(crate) fn is_minor(quality: &str) -> bool {
    quality.starts_with('m') && !quality.starts_with("maj")
}

/// Normalize any note spelling to its canonical sharp [`Note`].
///
/// Unrecognized input never fails: it falls back to `C` so a malformed chord
/// root cannot break rendering.
pub fn normalize_note(input: &str) -> Note {
    Note::parse(input).unwrap_or_else(|| {
        tracing::trace!(input, "unrecognized note, falling back to C");
        Note::C
    })
}

/// Shift a note name by `semitones` and spell the result.
///
/// Total for every integer shift and every input string.
pub fn shift_note(note: &str, semitones: i32, prefer_flats: bool) -> String {
    normalize_note(note)
        .transpose(semitones)
        .name(Spelling::from_prefer_flats(prefer_flats))
        .to_string()
}

/// Upward distance in semitones (`0..12`) from the root of `from` to the root
/// of `to`. Keys may carry a quality (`"Am"`, `"F#m"`); only roots count.
pub fn semitones_between(from: &str, to: &str) -> Option<i32> {
    let (from_root, _, _) = split_key(from)?;
    let (to_root, _, _) = split_key(to)?;
    Some((to_root.index() as i32 - from_root.index() as i32).rem_euclid(12))
}
