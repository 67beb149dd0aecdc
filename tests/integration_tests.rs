//! Integration tests for cifra
//!
//! Whole-pipeline behaviour: song text in, transposed and aligned output out.

use cifra::{
    align_chords_and_lyrics, align_transposed, normalize_note, render_song, shift_note,
    transpose_any_chord_tokens, transpose_bracket_chord_pro, transpose_chord_token, AlignedPair,
    Note, OutputFormat, RenderOptions,
};
use pretty_assertions::assert_eq;

const NOTES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

#[test]
fn test_shift_is_cyclic() {
    for note in NOTES {
        for k in -24..=24 {
            for flats in [false, true] {
                let there = shift_note(note, k, flats);
                let back = shift_note(&there, -k, flats);
                assert_eq!(normalize_note(&back), normalize_note(note), "{} by {}", note, k);
            }
        }
    }
}

#[test]
fn test_shift_mod_12() {
    for note in NOTES {
        for k in -12..=12 {
            assert_eq!(shift_note(note, k, false), shift_note(note, k + 12, false));
            assert_eq!(shift_note(note, k, true), shift_note(note, k - 12, true));
        }
    }
}

#[test]
fn test_spelling_consistency() {
    assert_eq!(shift_note("D#", 0, true), "Eb");
    assert_eq!(shift_note("Eb", 0, false), "D#");
    assert_eq!(shift_note("A", 1, true), "Bb");
    assert_eq!(shift_note("A", 1, false), "A#");
}

#[test]
fn test_enharmonic_normalization() {
    for (a, b) in [("C#", "Db"), ("D#", "Eb"), ("F#", "Gb"), ("G#", "Ab"), ("A#", "Bb")] {
        assert_eq!(normalize_note(a), normalize_note(b));
    }
    assert_eq!(normalize_note("H"), Note::B);
    assert_eq!(normalize_note("nonsense"), Note::C);
}

#[test]
fn test_slash_chord() {
    assert_eq!(transpose_chord_token("F#maj7/A#", 1, false), "Gmaj7/B");
    assert_eq!(transpose_chord_token("Am/G", -2, true), "Gm/F");
}

#[test]
fn test_non_chord_tokens_are_idempotent() {
    for token in ["", "Intro", "x2", "N.C.", "Refrão", "hello world"] {
        for k in [-7, 0, 3, 11] {
            assert_eq!(transpose_chord_token(token, k, true), token);
        }
    }
}

#[test]
fn test_bracket_isolation() {
    let text = "Verse 1:\n  [Am]Tanto [F]mar, [C]tanto [G]mar  \n";
    let out = transpose_bracket_chord_pro(text, 3, false);
    assert_eq!(out, "Verse 1:\n  [Cm]Tanto [G#]mar, [D#]tanto [A#]mar  \n");

    // Stripping the brackets leaves the same text either way.
    let strip = |s: &str| {
        let mut plain = String::new();
        let mut inside = false;
        for c in s.chars() {
            match c {
                '[' => inside = true,
                ']' => inside = false,
                _ if !inside => plain.push(c),
                _ => {}
            }
        }
        plain
    };
    assert_eq!(strip(text), strip(&out));
}

#[test]
fn test_two_line_scenario() {
    let rows = align_chords_and_lyrics("C       G       \nHello   world   ");
    assert_eq!(
        rows,
        vec![vec![
            AlignedPair::new("C", "Hello", 0),
            AlignedPair::new("G", "world", 8),
        ]]
    );
}

#[test]
fn test_blank_line_preservation() {
    let text = "[C]one\n\n[G]two\n\nthree";
    let rows = align_chords_and_lyrics(text);
    assert_eq!(rows.len(), 5);
    assert!(rows[1].is_empty());
    assert!(rows[3].is_empty());
}

#[test]
fn test_malformed_bracket_fallback() {
    let rows = align_chords_and_lyrics("just ] some [ text");
    assert_eq!(rows, vec![vec![AlignedPair::new("", "just ] some [ text", 0)]]);
    assert_eq!(
        transpose_bracket_chord_pro("just ] some [ text", 4, false),
        "just ] some [ text"
    );
}

#[test]
fn test_transpose_mixed_document_round_trip() {
    let song = "Intro\nG   D   Em   C\n\n[G]Quando a [D]gente [Em]ama\nC        D\nÉ claro que a gente cuida";
    let up = transpose_any_chord_tokens(song, 5, true);
    let down = transpose_any_chord_tokens(&up, -5, false);
    assert_eq!(down, song);
}

#[test]
fn test_align_transposed_matches_transpose_then_align() {
    let text = "[G]Quando a [D]gente [Em]ama";
    let direct = align_transposed(text, 2, false);
    let two_step = align_chords_and_lyrics(&transpose_bracket_chord_pro(text, 2, false));
    let chords = |rows: &Vec<Vec<AlignedPair>>| -> Vec<String> {
        rows.iter().flatten().map(|p| p.chord.clone()).collect()
    };
    assert_eq!(chords(&direct), chords(&two_step));
}

#[test]
fn test_render_song_text() {
    let source = "---\ntitle: Asa Branca\nkey: G\n---\nG           C\nQuando olhei a terra ardendo\n";
    let rendered = render_song(
        source,
        &RenderOptions {
            semitones: -2,
            format: OutputFormat::Text,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(rendered.title.as_deref(), Some("Asa Branca"));
    assert_eq!(rendered.key.as_deref(), Some("F"));
    assert_eq!(rendered.output, "F            Bb\nQuando olhei a terra ardendo\n");
}

#[test]
fn test_render_song_ruby() {
    let rendered = render_song(
        "---\nkey: F\n---\n[F]Oi [C7]gente\n\n[Bb]tchau",
        &RenderOptions {
            semitones: 0,
            format: OutputFormat::Ruby,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(
        rendered.output,
        "<div class=\"song\">\n  <div class=\"line\"><ruby>Oi <rt><span class=\"chord\">F</span></rt></ruby><ruby>gente<rt><span class=\"chord\">C7</span></rt></ruby></div>\n  <div class=\"line blank\"></div>\n  <div class=\"line\"><ruby>tchau<rt><span class=\"chord\">Bb</span></rt></ruby></div>\n</div>\n"
    );
}
