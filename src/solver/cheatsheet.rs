//! Precomputed second-guess lookup
//!
//! For a fixed opening guess, the best second guess is fully determined by
//! the grade the opening receives. Building the table once turns the
//! quadratic selection into a lookup for every solve that shares the
//! opening.
//!
//! Persisted form is plain text, one line per reachable grade:
//! `<grade letters> - <word>` with the grade in columns 0-4 and the word in
//! columns 8-12.

use super::filter::filter_candidates;
use super::selector::select_best;
use crate::core::{Grade, Word};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufRead, BufReader, Write as _};
use std::path::Path;

/// Mapping from opening-guess grade to the best second guess
///
/// Keys are exactly the grades reachable from the opening against some
/// corpus word; grades whose remaining set is empty are never inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheatSheet {
    entries: BTreeMap<Grade, Word>,
}

impl CheatSheet {
    /// Build the sheet for a fixed opening guess
    ///
    /// Enumerates all 243 grades, filters the corpus by each, and selects
    /// the best second guess for every non-empty remainder. Grades are
    /// scored in parallel and merged by key, so the result is independent
    /// of scheduling.
    #[must_use]
    pub fn build(first: &Word, corpus: &[Word]) -> Self {
        let grades: Vec<Grade> = Grade::all().collect();

        let entries = grades
            .into_par_iter()
            .filter_map(|grade| {
                let remaining = filter_candidates(corpus, first, grade);
                let second = select_best(&remaining)?.clone();
                Some((grade, second))
            })
            .collect();

        Self { entries }
    }

    /// Look up the second guess for an opening grade
    #[must_use]
    pub fn second_for(&self, grade: Grade) -> Option<&Word> {
        self.entries.get(&grade)
    }

    /// Number of reachable grades in the sheet
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in grade order
    pub fn iter(&self) -> impl Iterator<Item = (Grade, &Word)> {
        self.entries.iter().map(|(grade, word)| (*grade, word))
    }

    /// Write the sheet in the fixed-column text format
    ///
    /// # Errors
    /// Returns an I/O error on write failure, or `InvalidData` if an entry
    /// holds a corrupt grade (a defect, not expected from [`Self::build`]).
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        for (grade, word) in &self.entries {
            let letters = grade
                .letters()
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(writer, "{letters} - {word}")?;
        }
        Ok(())
    }

    /// Read a sheet from the fixed-column text format
    ///
    /// The grade occupies columns 0-4 and the word columns 8-12; shorter
    /// lines are rejected. Blank lines are skipped.
    ///
    /// # Errors
    /// Returns an I/O error on read failure or `InvalidData` for malformed
    /// lines.
    pub fn read_from<R: io::Read>(reader: R) -> io::Result<Self> {
        let mut entries = BTreeMap::new();

        for line in BufReader::new(reader).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let (Some(grade_part), Some(word_part)) = (line.get(0..5), line.get(8..13)) else {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("cheat sheet line too short: {line:?}"),
                ));
            };

            let grade = Grade::from_letters(grade_part)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            let word = Word::new(word_part)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

            entries.insert(grade, word);
        }

        Ok(Self { entries })
    }

    /// Persist the sheet to a file (conventionally named `<opening>.txt`)
    ///
    /// # Errors
    /// Returns an I/O error on failure.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut file = fs::File::create(path)?;
        self.write_to(&mut file)?;
        file.flush()
    }

    /// Load a sheet from a file
    ///
    /// # Errors
    /// Returns an I/O error on failure or `InvalidData` for malformed lines.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Self::read_from(fs::File::open(path)?)
    }
}
