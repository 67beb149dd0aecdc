use pretty_assertions::assert_eq;

use super::*;

fn pair(chord: &str, lyric: &str, position: usize) -> AlignedPair {
    AlignedPair::new(chord, lyric, position)
}

#[test]
fn test_two_line_alignment() {
    let rows = align_chords_and_lyrics("C       G       \nHello   world   ");
    assert_eq!(rows, vec![vec![pair("C", "Hello", 0), pair("G", "world", 8)]]);
}

#[test]
fn test_two_line_window_is_three_columns() {
    // G sits 3 columns right of "world": attached. D sits 4 columns right of
    // "ok": not within the window, so it trails onto the last pair.
    let rows = align_chords_and_lyrics("C          G      D\nHello   world ok");
    assert_eq!(
        rows,
        vec![vec![
            pair("C", "Hello", 0),
            pair("G", "world", 8),
            pair("D", "ok", 14),
        ]]
    );

    let rows = align_chords_and_lyrics("C    G\nWonderful");
    assert_eq!(rows, vec![vec![pair("C G", "Wonderful", 0)]]);
}

#[test]
fn test_two_line_leftovers_append_to_last_pair() {
    let rows = align_chords_and_lyrics("       C     G    D\nla la la");
    // "la"@0, "la"@3, "la"@6: C@7 attaches to the third word; G and D are left.
    assert_eq!(
        rows,
        vec![vec![
            pair("", "la", 0),
            pair("", "la", 3),
            pair("C G D", "la", 6),
        ]]
    );
}

#[test]
fn test_two_line_greedy_first_word_wins() {
    // The chord at column 2 is within reach of both words; the earlier word
    // takes it.
    let rows = align_chords_and_lyrics("  Em\nab cd");
    assert_eq!(rows, vec![vec![pair("Em", "ab", 0), pair("", "cd", 3)]]);
}

#[test]
fn test_two_line_several_chords_on_one_word() {
    let rows = align_chords_and_lyrics("C  D    G\nOh   yeah");
    assert_eq!(rows, vec![vec![pair("C D", "Oh", 0), pair("G", "yeah", 5)]]);
}

#[test]
fn test_chord_line_without_lyrics() {
    let rows = align_chords_and_lyrics("Intro\nC  G  Am  F");
    assert_eq!(
        rows,
        vec![
            vec![pair("", "Intro", 0)],
            vec![
                pair("C", "", 0),
                pair("G", "", 3),
                pair("Am", "", 6),
                pair("F", "", 10),
            ],
        ]
    );
}

#[test]
fn test_chord_line_followed_by_chord_line() {
    let rows = align_lines("C  G\nAm  F\nHello there", None);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].kind, LineKind::ChordLine);
    assert_eq!(rows[0].line_count, 1);
    assert_eq!(rows[0].pairs, vec![pair("C", "", 0), pair("G", "", 3)]);
    assert_eq!(rows[1].source_line, 1);
    assert_eq!(rows[1].line_count, 2);
    assert_eq!(rows[1].pairs, vec![pair("Am", "Hello", 0), pair("F", "there", 6)]);
}

#[test]
fn test_inline_alignment() {
    let rows = align_chords_and_lyrics("[C]Hello [G]world");
    assert_eq!(rows, vec![vec![pair("C", "Hello ", 0), pair("G", "world", 9)]]);
}

#[test]
fn test_inline_chord_without_text_gets_anchor() {
    let rows = align_chords_and_lyrics("[C][G]Hello [Am]  [F]");
    assert_eq!(
        rows,
        vec![vec![
            pair("C", " ", 0),
            pair("G", "Hello ", 3),
            pair("Am", " ", 12),
            pair("F", " ", 18),
        ]]
    );
}

#[test]
fn test_inline_leading_text() {
    let rows = align_chords_and_lyrics("Oh [C]yeah");
    assert_eq!(rows, vec![vec![pair("", "Oh ", 0), pair("C", "yeah", 3)]]);
}

#[test]
fn test_inline_without_pattern_is_plain_text() {
    let rows = align_chords_and_lyrics("a ] b [");
    assert_eq!(rows, vec![vec![pair("", "a ] b [", 0)]]);
}

#[test]
fn test_plain_text_line() {
    let rows = align_chords_and_lyrics("Just some words");
    assert_eq!(rows, vec![vec![pair("", "Just some words", 0)]]);
}

#[test]
fn test_blank_lines_are_kept() {
    let text = "[C]Verse one\n\n[G]Verse two";
    let rows = align_chords_and_lyrics(text);
    assert_eq!(rows.len(), text.lines().count());
    assert!(rows[1].is_empty());
    assert_eq!(rows[2], vec![pair("G", "Verse two", 0)]);
}

#[test]
fn test_row_count_matches_lines_without_chord_pairs() {
    let text = "first\n\n  \nsecond\n[D]third";
    assert_eq!(align_chords_and_lyrics(text).len(), 5);
}

#[test]
fn test_chord_lyric_pair_shares_one_row() {
    let text = "Intro\nC     G\nHello world\nbye";
    let rows = align_lines(text, None);
    assert_eq!(text.lines().count(), 4);
    assert_eq!(rows.len(), 3);

    let spans: Vec<(usize, usize)> = rows.iter().map(|r| (r.source_line, r.line_count)).collect();
    assert_eq!(spans, vec![(0, 1), (1, 2), (3, 1)]);
    assert_eq!(rows[1].pairs, vec![pair("C", "Hello", 0), pair("G", "world", 6)]);
}

#[test]
fn test_empty_input() {
    assert!(align_chords_and_lyrics("").is_empty());
    assert!(align_lines("", None).is_empty());
}

#[test]
fn test_crlf_lines() {
    let rows = align_chords_and_lyrics("C   G\r\nHello world\r\n");
    assert_eq!(rows, vec![vec![pair("C", "Hello", 0), pair("G", "world", 6)]]);
}

#[test]
fn test_unicode_columns() {
    // Columns count characters, so accented words line up with their chords.
    let rows = align_chords_and_lyrics("D      A\nCoração  lá");
    assert_eq!(rows, vec![vec![pair("D", "Coração", 0), pair("A", "lá", 9)]]);
}

#[test]
fn test_align_transposed_keeps_positions() {
    let rows = align_transposed("C       G\nHello   world", 1, true);
    assert_eq!(rows, vec![vec![pair("Db", "Hello", 0), pair("Ab", "world", 8)]]);

    let rows = align_transposed("[F#m7/C#]Hi [Zz]there", 2, false);
    assert_eq!(
        rows,
        vec![vec![pair("G#m7/D#", "Hi ", 0), pair("Zz", "there", 12)]]
    );
}

#[test]
fn test_clusters_agree_with_pairs() {
    let rows = align_lines("[C][G]Hello [Am]world", None);
    let clusters = rows[0].clusters();
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].chords, vec!["C", "G"]);
    assert_eq!(clusters[0].lyric, "Hello ");
    assert_eq!(clusters[1].chords, vec!["Am"]);
    assert_eq!(clusters[1].lyric, "world");

    // Every chord in the pair list ends up above the same lyric in the
    // cluster list.
    let from_pairs: Vec<String> = rows[0].pairs.iter().map(|p| p.chord.clone()).collect();
    let from_clusters: Vec<String> = clusters.iter().flat_map(|c| c.chords.clone()).collect();
    assert_eq!(from_pairs, from_clusters);
}

#[test]
fn test_pairs_serialize() {
    let rows = align_chords_and_lyrics("[Em]Hi");
    let json = serde_json::to_string(&rows).unwrap();
    assert_eq!(json, r#"[[{"chord":"Em","lyric":"Hi","position":0}]]"#);
}
