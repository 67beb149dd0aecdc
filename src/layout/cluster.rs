//! Grouping of aligned pairs into lyric-anchored clusters, for renderers that
//! stack several chords over one syllable as a single unit.

use super::types::{AlignedLine, AlignedPair, Cluster};

/// Fold chord-only pairs into the next pair that carries text.
///
/// The chord-to-word association is the same as in `pairs`; only the
/// encoding differs.
pub fn cluster_pairs(pairs: &[AlignedPair]) -> Vec<Cluster> {
    let mut clusters = Vec::with_capacity(pairs.len());
    let mut pending: Vec<String> = Vec::new();
    let mut pending_position = None;

    for pair in pairs {
        if pair.is_chord_only() {
            pending_position.get_or_insert(pair.position);
            pending.push(pair.chord.clone());
            continue;
        }

        let mut chords = std::mem::take(&mut pending);
        if !pair.chord.is_empty() {
            chords.push(pair.chord.clone());
        }
        clusters.push(Cluster {
            chords,
            lyric: pair.lyric.clone(),
            position: pending_position.take().unwrap_or(pair.position),
        });
    }

    if !pending.is_empty() {
        clusters.push(Cluster {
            chords: pending,
            lyric: String::new(),
            position: pending_position.unwrap_or_default(),
        });
    }
    clusters
}

impl AlignedLine {
    pub fn clusters(&self) -> Vec<Cluster> {
        cluster_pairs(&self.pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacked_chords_join_following_word() {
        let pairs = vec![
            AlignedPair::new("C", " ", 0),
            AlignedPair::new("G", "Hello ", 3),
            AlignedPair::new("", "there", 12),
        ];
        let clusters = cluster_pairs(&pairs);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].chords, vec!["C", "G"]);
        assert_eq!(clusters[0].lyric, "Hello ");
        assert_eq!(clusters[0].position, 0);
        assert!(clusters[1].chords.is_empty());
        assert_eq!(clusters[1].lyric, "there");
    }

    #[test]
    fn test_trailing_chords_form_own_cluster() {
        let pairs = vec![
            AlignedPair::new("Am", "end", 0),
            AlignedPair::new("F", "", 6),
            AlignedPair::new("G", "", 9),
        ];
        let clusters = cluster_pairs(&pairs);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[1].chords, vec!["F", "G"]);
        assert_eq!(clusters[1].lyric, "");
        assert_eq!(clusters[1].position, 6);
    }

    #[test]
    fn test_empty() {
        assert!(cluster_pairs(&[]).is_empty());
    }
}
