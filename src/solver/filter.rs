//! Candidate filtering
//!
//! Narrows a candidate set to the words consistent with an observed
//! (guess, grade) pair.

use crate::core::{Grade, Word};

/// Check whether `candidate` is consistent with an observed grade
///
/// True iff guessing `guess` with `candidate` as the hidden answer would
/// produce exactly `grade`.
#[inline]
#[must_use]
pub fn consistent(guess: &Word, candidate: &Word, grade: Grade) -> bool {
    Grade::of(guess, candidate) == grade
}

/// Retain exactly the candidates consistent with the observed grade
///
/// Pure, O(n) over the input set. The result is never larger than the
/// input and preserves its order.
#[must_use]
pub fn filter_candidates(candidates: &[Word], guess: &Word, grade: Grade) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| consistent(guess, candidate, grade))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn consistent_iff_grades_match_exactly() {
        let guess = Word::new("crane").unwrap();
        let candidate = Word::new("irate").unwrap();

        let grade = Grade::of(&guess, &candidate);
        assert!(consistent(&guess, &candidate, grade));

        // Any other grade is inconsistent, not merely "compatible"
        for other in Grade::all() {
            if other != grade {
                assert!(!consistent(&guess, &candidate, other));
            }
        }
    }

    #[test]
    fn perfect_grade_keeps_only_the_guess_itself() {
        let candidates = words(&["abcde", "abcdf", "zzzzz"]);
        let guess = Word::new("abcde").unwrap();

        let remaining = filter_candidates(&candidates, &guess, Grade::PERFECT);

        assert_eq!(remaining, words(&["abcde"]));
    }

    #[test]
    fn filter_never_grows_the_set() {
        let candidates = words(&["crane", "crate", "grate", "irate", "zonal"]);
        let guess = Word::new("slate").unwrap();

        for answer in &candidates {
            let grade = Grade::of(&guess, answer);
            let remaining = filter_candidates(&candidates, &guess, grade);
            assert!(remaining.len() <= candidates.len());
            // The answer that produced the grade always survives
            assert!(remaining.contains(answer));
        }
    }

    #[test]
    fn filter_on_unreachable_grade_yields_empty() {
        let candidates = words(&["crane", "crate"]);
        let guess = Word::new("zzzzz").unwrap();

        // Claiming all-Correct for zzzzz matches nothing
        let remaining = filter_candidates(&candidates, &guess, Grade::PERFECT);
        assert!(remaining.is_empty());
    }

    #[test]
    fn filter_preserves_input_order() {
        let candidates = words(&["crane", "crate", "grate"]);
        let guess = Word::new("slate").unwrap();
        let answer = Word::new("crate").unwrap();

        let grade = Grade::of(&guess, &answer);
        let remaining = filter_candidates(&candidates, &guess, grade);

        let mut sorted = remaining.clone();
        sorted.sort();
        assert_eq!(remaining, sorted);
    }
}
