//! Batch simulation harness
//!
//! Replays the solver against every word in the corpus, using a precomputed
//! cheat sheet for the second move, and tabulates a try-count histogram.

use super::cheatsheet::CheatSheet;
use super::filter::filter_candidates;
use super::selector::select_best;
use crate::core::{Grade, Word};
use std::fmt;

/// Histogram of corpus words by number of guesses taken
///
/// Buckets grow on demand, so a pathological word that needs more tries
/// than expected is recorded instead of indexing out of bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TryHistogram {
    buckets: Vec<usize>,
}

impl TryHistogram {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one solve that took `tries` guesses
    pub fn record(&mut self, tries: usize) {
        if tries >= self.buckets.len() {
            self.buckets.resize(tries + 1, 0);
        }
        self.buckets[tries] += 1;
    }

    /// Count of words solved in exactly `tries` guesses
    #[must_use]
    pub fn count(&self, tries: usize) -> usize {
        self.buckets.get(tries).copied().unwrap_or(0)
    }

    /// Bucket slice indexed by try count (index 0 is always empty)
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.buckets
    }

    /// Total number of recorded solves
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().sum()
    }

    /// Highest try count with a non-zero bucket
    #[must_use]
    pub fn max_tries(&self) -> usize {
        self.buckets
            .iter()
            .rposition(|&count| count > 0)
            .unwrap_or(0)
    }

    /// Mean tries over all recorded solves
    #[must_use]
    pub fn average(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let weighted: usize = self
            .buckets
            .iter()
            .enumerate()
            .map(|(tries, count)| tries * count)
            .sum();
        weighted as f64 / total as f64
    }
}

/// Simulation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulateError {
    /// The cheat sheet has no entry for a grade the opening produced.
    /// Indicates an incomplete or mismatched sheet; the run must abort.
    MissingCheatEntry(Grade),
    /// Filtering eliminated every candidate, so the hidden answer was not
    /// in the corpus the solver searched.
    AnswerNotInCorpus(Word),
}

impl fmt::Display for SimulateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCheatEntry(grade) => match grade.letters() {
                Ok(letters) => write!(f, "No cheat sheet entry for grade {letters}"),
                Err(_) => write!(f, "No cheat sheet entry for grade {:#05x}", grade.value()),
            },
            Self::AnswerNotInCorpus(word) => {
                write!(f, "No candidates remain while solving for {word}")
            }
        }
    }
}

impl std::error::Error for SimulateError {}

/// Count the guesses the solver takes to reach `answer`
///
/// The first guess is fixed; the second comes from the cheat sheet keyed by
/// the opening's grade; every later guess is selected fresh from the
/// shrinking candidate set. When `answer == first` the result is always 1.
///
/// # Errors
/// `MissingCheatEntry` when the sheet lacks the opening grade (fatal - the
/// sheet does not match this opening/corpus pair), `AnswerNotInCorpus` when
/// filtering empties the candidate set.
pub fn solve_answer(
    first: &Word,
    sheet: &CheatSheet,
    corpus: &[Word],
    answer: &Word,
) -> Result<usize, SimulateError> {
    let mut remaining = corpus.to_vec();
    let mut tries = 1;
    let mut guess = first.clone();

    // Second guess is a sheet lookup instead of a fresh search
    if answer != first {
        let grade = Grade::of(first, answer);
        remaining = filter_candidates(&remaining, first, grade);
        guess = sheet
            .second_for(grade)
            .ok_or(SimulateError::MissingCheatEntry(grade))?
            .clone();
        tries += 1;
    }

    while guess != *answer {
        let grade = Grade::of(&guess, answer);
        remaining = filter_candidates(&remaining, &guess, grade);

        let Some(next) = select_best(&remaining) else {
            return Err(SimulateError::AnswerNotInCorpus(answer.clone()));
        };
        guess = next.clone();
        tries += 1;
    }

    Ok(tries)
}

/// Replay the solver against every corpus word
///
/// # Errors
/// Fails on the first word whose solve fails; see [`solve_answer`].
pub fn simulate(
    first: &Word,
    sheet: &CheatSheet,
    corpus: &[Word],
) -> Result<TryHistogram, SimulateError> {
    let mut histogram = TryHistogram::new();

    for answer in corpus {
        histogram.record(solve_answer(first, sheet, corpus, answer)?);
    }

    Ok(histogram)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn small_corpus() -> Vec<Word> {
        words(&[
            "brief", "crane", "crate", "grate", "irate", "slate", "zonal",
        ])
    }

    #[test]
    fn histogram_grows_past_any_fixed_bound() {
        let mut histogram = TryHistogram::new();
        histogram.record(25);
        histogram.record(2);

        assert_eq!(histogram.count(25), 1);
        assert_eq!(histogram.count(2), 1);
        assert_eq!(histogram.total(), 2);
        assert_eq!(histogram.max_tries(), 25);
    }

    #[test]
    fn histogram_average() {
        let mut histogram = TryHistogram::new();
        histogram.record(2);
        histogram.record(4);

        assert!((histogram.average() - 3.0).abs() < f64::EPSILON);
        assert_eq!(TryHistogram::new().average(), 0.0);
    }

    #[test]
    fn opening_word_solves_in_one_try() {
        let corpus = small_corpus();
        let first = Word::new("crane").unwrap();
        let sheet = CheatSheet::build(&first, &corpus);

        let tries = solve_answer(&first, &sheet, &corpus, &first).unwrap();
        assert_eq!(tries, 1);
    }

    #[test]
    fn every_corpus_word_gets_solved() {
        let corpus = small_corpus();
        let first = Word::new("crane").unwrap();
        let sheet = CheatSheet::build(&first, &corpus);

        let histogram = simulate(&first, &sheet, &corpus).unwrap();

        assert_eq!(histogram.total(), corpus.len());
        assert_eq!(histogram.count(1), 1); // The opening itself
        assert_eq!(histogram.count(0), 0);
    }

    #[test]
    fn missing_cheat_entry_aborts_the_run() {
        let corpus = small_corpus();
        let first = Word::new("crane").unwrap();

        // An empty sheet omits every grade the opening can produce
        let empty = CheatSheet::read_from("".as_bytes()).unwrap();
        let answer = Word::new("slate").unwrap();

        let expected_grade = Grade::of(&first, &answer);
        let result = solve_answer(&first, &empty, &corpus, &answer);
        assert_eq!(result, Err(SimulateError::MissingCheatEntry(expected_grade)));

        // The whole simulation fails rather than skipping the word
        assert!(simulate(&first, &empty, &corpus).is_err());
    }

    #[test]
    fn answer_outside_corpus_is_reported_distinctly() {
        let corpus = small_corpus();
        let first = Word::new("crane").unwrap();
        let sheet = CheatSheet::build(&first, &corpus);

        // "query" shares no useful structure with the corpus; once its
        // grades are applied, no candidate survives.
        let stray = Word::new("query").unwrap();
        let result = solve_answer(&first, &sheet, &corpus, &stray);

        match result {
            Err(SimulateError::MissingCheatEntry(_) | SimulateError::AnswerNotInCorpus(_)) => {}
            other => panic!("expected a data error, got {other:?}"),
        }
    }

    #[test]
    fn simulation_matches_per_word_solves() {
        let corpus = small_corpus();
        let first = Word::new("slate").unwrap();
        let sheet = CheatSheet::build(&first, &corpus);

        let histogram = simulate(&first, &sheet, &corpus).unwrap();

        let mut expected = TryHistogram::new();
        for answer in &corpus {
            expected.record(solve_answer(&first, &sheet, &corpus, answer).unwrap());
        }

        assert_eq!(histogram, expected);
    }
}
