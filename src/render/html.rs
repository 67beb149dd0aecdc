use quick_xml::escape::escape;

use crate::layout::{AlignedLine, AlignedPair, Cluster, LineKind};

/// Non-breaking space, so a chord with no text still has something to sit on.
const ANCHOR_ENTITY: &str = "&#160;";

/// Render rows as ruby markup: each lyric is the ruby base and the chords
/// stacked above it are the annotation.
///
/// ```text
/// <div class="song">
///   <div class="line"><ruby>Hello <rt><span class="chord">C</span></rt></ruby>...</div>
///   <div class="line blank"></div>
/// </div>
/// ```
pub fn render_ruby_html(rows: &[AlignedLine]) -> String {
    render_rows(rows, |row, html| {
        let clusters = row.clusters();
        let last = clusters.len().saturating_sub(1);
        for (i, cluster) in clusters.iter().enumerate() {
            push_cluster(html, cluster);
            if row.kind == LineKind::ChordLine && i < last {
                html.push(' ');
            }
        }
    })
}

/// Render rows with each chord as an inline badge in front of its text.
pub fn render_badges_html(rows: &[AlignedLine]) -> String {
    render_rows(rows, |row, html| {
        let last = row.pairs.len().saturating_sub(1);
        for (i, pair) in row.pairs.iter().enumerate() {
            push_badge(html, pair);
            if row.kind == LineKind::ChordLine && i < last {
                html.push(' ');
            }
        }
    })
}

fn render_rows(rows: &[AlignedLine], mut render_line: impl FnMut(&AlignedLine, &mut String)) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"song\">\n");
    for row in rows {
        if row.pairs.is_empty() {
            html.push_str("  <div class=\"line blank\"></div>\n");
            continue;
        }
        html.push_str("  <div class=\"line\">");
        render_line(row, &mut html);
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
    html
}

fn push_lyric(html: &mut String, lyric: &str) {
    if lyric.trim().is_empty() {
        html.push_str(ANCHOR_ENTITY);
    } else {
        html.push_str(&escape(lyric));
    }
}

fn push_cluster(html: &mut String, cluster: &Cluster) {
    if cluster.chords.is_empty() {
        html.push_str(&escape(&cluster.lyric));
        return;
    }
    html.push_str("<ruby>");
    push_lyric(html, &cluster.lyric);
    html.push_str("<rt>");
    for chord in &cluster.chords {
        html.push_str("<span class=\"chord\">");
        html.push_str(&escape(chord));
        html.push_str("</span>");
    }
    html.push_str("</rt></ruby>");
}

fn push_badge(html: &mut String, pair: &AlignedPair) {
    if !pair.chord.is_empty() {
        html.push_str("<span class=\"chord-badge\">");
        html.push_str(&escape(&pair.chord));
        html.push_str("</span>");
        if pair.lyric.trim().is_empty() {
            return;
        }
    }
    html.push_str(&escape(&pair.lyric));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::align_lines;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ruby_inline_line() {
        let html = render_ruby_html(&align_lines("[C][G]Hello [Am]world", None));
        assert_eq!(
            html,
            "<div class=\"song\">\n  <div class=\"line\"><ruby>Hello <rt><span class=\"chord\">C</span><span class=\"chord\">G</span></rt></ruby><ruby>world<rt><span class=\"chord\">Am</span></rt></ruby></div>\n</div>\n"
        );
    }

    #[test]
    fn test_ruby_two_line_row_and_blank() {
        let html = render_ruby_html(&align_lines("C     G\nHello world\n\nbye", None));
        assert_eq!(
            html,
            "<div class=\"song\">\n  <div class=\"line\"><ruby>Hello<rt><span class=\"chord\">C</span></rt></ruby> <ruby>world<rt><span class=\"chord\">G</span></rt></ruby></div>\n  <div class=\"line blank\"></div>\n  <div class=\"line\">bye</div>\n</div>\n"
        );
    }

    #[test]
    fn test_ruby_trailing_chords_get_anchor() {
        let html = render_ruby_html(&align_lines("[C]", None));
        assert!(html.contains("<ruby>&#160;<rt><span class=\"chord\">C</span></rt></ruby>"));
    }

    #[test]
    fn test_badges() {
        let html = render_badges_html(&align_lines("[C]Hello [G]<world>", None));
        assert!(html.contains(
            "<span class=\"chord-badge\">C</span>Hello <span class=\"chord-badge\">G</span>&lt;world&gt;"
        ));
    }

    #[test]
    fn test_badges_chord_only_pairs() {
        let html = render_badges_html(&align_lines("Am   F", None));
        assert!(html.contains(
            "<div class=\"line\"><span class=\"chord-badge\">Am</span> <span class=\"chord-badge\">F</span></div>"
        ));
    }
}
