//! Partition-size guess selection
//!
//! The heuristic scores a guess by summing, over every possible answer in
//! the candidate set, the size of the partition that answer's grade would
//! induce. This equals the sum of squared partition sizes, a proxy for the
//! expected number of remaining candidates under a uniform prior.

use crate::core::{Grade, Word};
use rustc_hash::FxHashMap;

/// Group candidates by the grade they would produce for `guess`
fn partition_sizes(guess: &Word, candidates: &[Word]) -> FxHashMap<Grade, u64> {
    let mut sizes = FxHashMap::default();

    for candidate in candidates {
        *sizes.entry(Grade::of(guess, candidate)).or_insert(0) += 1;
    }

    sizes
}

/// Full heuristic score of a guess against a candidate set
///
/// `score(guess) = sum over answers of |partition(grade(guess, answer))|`,
/// which is the sum of squared partition sizes. Lower is better. No
/// pruning: the returned value is always the true total.
#[must_use]
pub fn score_guess(guess: &Word, candidates: &[Word]) -> u64 {
    partition_sizes(guess, candidates)
        .values()
        .map(|&size| size * size)
        .sum()
}

/// Select the guess with the minimal partition score from the candidate set
///
/// Guesses are drawn from the candidate set itself. Evaluation of a guess
/// is abandoned as soon as its running score exceeds the best found so far;
/// partial scores only grow, so the pruned guess can never win. Ties go to
/// the first minimal guess in iteration order - with the lexicographically
/// sorted candidate sets produced by [`crate::wordlists::Corpus`] that is
/// the smallest such word, independent of how the set was reached.
///
/// Returns `None` for an empty candidate set, which callers must treat as a
/// contract violation (the hidden answer is not in the corpus).
///
/// # Examples
/// ```
/// use wordle_partition::core::Word;
/// use wordle_partition::solver::select_best;
///
/// let candidates = vec![
///     Word::new("crane").unwrap(),
///     Word::new("crate").unwrap(),
///     Word::new("grate").unwrap(),
/// ];
///
/// let best = select_best(&candidates).unwrap();
/// assert!(candidates.contains(best));
/// ```
#[must_use]
pub fn select_best(candidates: &[Word]) -> Option<&Word> {
    let mut best: Option<&Word> = None;
    let mut best_total = u64::MAX;

    for guess in candidates {
        let sizes = partition_sizes(guess, candidates);

        let mut total = 0u64;
        for answer in candidates {
            total += sizes[&Grade::of(guess, answer)];
            if total > best_total {
                break;
            }
        }

        // Strict less-than: the first guess at the minimal score wins ties
        if total < best_total {
            best_total = total;
            best = Some(guess);
        }
    }

    best
}
