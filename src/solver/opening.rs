//! Opening-guess ranking
//!
//! Scores every corpus word as an opening with the same partition heuristic
//! the in-game selector uses, evaluated against the whole corpus so the
//! comparison is fair. Every reported score is the true, unpruned total.

use super::selector::score_guess;
use crate::core::Word;
use rayon::prelude::*;

/// Rank every corpus word as an opening guess, best first
///
/// Scoring is parallel across guesses; the final order is fixed by
/// (score, word), so it does not depend on scheduling.
#[must_use]
pub fn rank_openings(corpus: &[Word]) -> Vec<(Word, u64)> {
    let mut ranked: Vec<(Word, u64)> = corpus
        .par_iter()
        .map(|guess| (guess.clone(), score_guess(guess, corpus)))
        .collect();

    ranked.sort_by(|(word_a, score_a), (word_b, score_b)| {
        score_a.cmp(score_b).then_with(|| word_a.cmp(word_b))
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::select_best;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn ranking_covers_the_whole_corpus() {
        let corpus = words(&["crane", "crate", "grate", "irate", "slate"]);
        let ranked = rank_openings(&corpus);

        assert_eq!(ranked.len(), corpus.len());
        for word in &corpus {
            assert!(ranked.iter().any(|(ranked_word, _)| ranked_word == word));
        }
    }

    #[test]
    fn ranking_is_ascending_by_score() {
        let corpus = words(&["angle", "amber", "crane", "crate", "grate", "irate", "slate"]);
        let ranked = rank_openings(&corpus);

        for pair in ranked.windows(2) {
            assert!(pair[0].1 <= pair[1].1);
        }
    }

    #[test]
    fn reported_scores_are_true_totals() {
        let corpus = words(&["crane", "crate", "grate", "irate", "slate"]);
        let ranked = rank_openings(&corpus);

        for (word, score) in &ranked {
            assert_eq!(*score, score_guess(word, &corpus));
        }
    }

    #[test]
    fn best_opening_agrees_with_the_selector() {
        // Against the same set, the top-ranked word and the selector's
        // choice share the minimal score.
        let corpus = words(&["angle", "amber", "crane", "crate", "grate", "irate", "slate"]);

        let ranked = rank_openings(&corpus);
        let best = select_best(&corpus).unwrap();

        assert_eq!(ranked[0].1, score_guess(best, &corpus));
    }

    #[test]
    fn ranking_is_deterministic() {
        let corpus = words(&["crane", "crate", "grate", "irate", "slate"]);

        let first = rank_openings(&corpus);
        for _ in 0..3 {
            assert_eq!(rank_openings(&corpus), first);
        }
    }

    #[test]
    fn empty_corpus_ranks_empty() {
        let ranked = rank_openings(&[]);
        assert!(ranked.is_empty());
    }
}
