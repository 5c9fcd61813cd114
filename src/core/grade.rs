//! Wordle feedback grade calculation and encoding
//!
//! A grade encodes the feedback for one guess against one answer as five
//! two-bit codes packed into a `u16`, position 0 in the most significant
//! pair:
//! - 0 = Correct (right letter, right position)
//! - 1 = Present (letter elsewhere in the answer)
//! - 2 = Absent (letter not in the answer)
//!
//! The bit pattern 3 is unused; a packed value containing it is a defect.
//! The letter form is a 5-character string over `{C, w, .}` in the same
//! left-to-right position order, and the two forms are exact inverses.

use super::Word;
use std::fmt;

/// Per-position feedback outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Correct = 0,
    Present = 1,
    Absent = 2,
}

/// Feedback grade for a Wordle guess
///
/// Five 2-bit position codes packed into a `u16`, value range 0..=682
/// with 243 valid values (every pair in {0, 1, 2}).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grade(u16);

/// Error type for malformed grade input or corrupt packed values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeError {
    /// Letter form was not 5 characters over {C, w, .} - recoverable input error
    InvalidFormat(String),
    /// A packed value contained the undefined bit pair 3 - a programming defect
    InvalidGrade(u16),
}

impl fmt::Display for GradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(input) => {
                write!(
                    f,
                    "Grade must be 5 characters over 'C', 'w', '.', got {input:?}"
                )
            }
            Self::InvalidGrade(value) => {
                write!(f, "Packed grade {value:#05x} contains an undefined bit pair")
            }
        }
    }
}

impl std::error::Error for GradeError {}

impl Grade {
    /// All-Correct (solved) grade
    pub const PERFECT: Self = Self(0);

    /// Compute the grade for `guess` against `answer`
    ///
    /// Position-wise check: Correct on an exact match, otherwise Present if
    /// the answer contains the letter anywhere, otherwise Absent.
    ///
    /// The presence check is non-consuming: a guess letter repeated more
    /// times than it occurs in the answer is still marked Present at every
    /// repeat. Kept as-is so grades stay compatible with existing persisted
    /// cheat sheets.
    ///
    /// # Examples
    /// ```
    /// use wordle_partition::core::{Grade, Word};
    ///
    /// let guess = Word::new("abcde").unwrap();
    /// let answer = Word::new("edcba").unwrap();
    /// let grade = Grade::of(&guess, &answer);
    ///
    /// // Only position 2 (c) matches exactly; every other letter is
    /// // somewhere else in the answer.
    /// assert_eq!(grade.letters().unwrap(), "wwCww");
    /// ```
    #[must_use]
    pub fn of(guess: &Word, answer: &Word) -> Self {
        let mut packed = 0u16;

        for i in 0..5 {
            packed <<= 2;
            let mark = if guess.char_at(i) == answer.char_at(i) {
                Mark::Correct
            } else if answer.has_letter(guess.char_at(i)) {
                Mark::Present
            } else {
                Mark::Absent
            };
            packed |= mark as u16;
        }

        Self(packed)
    }

    /// Get the raw packed value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Check if this is a solved grade (all Correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 0
    }

    /// Parse the letter form: 'C' for Correct, 'w' for Present, '.' for Absent
    ///
    /// # Errors
    /// Returns `GradeError::InvalidFormat` when the input is not exactly 5
    /// characters or contains any other character.
    ///
    /// # Examples
    /// ```
    /// use wordle_partition::core::Grade;
    ///
    /// let grade = Grade::from_letters("wwCww").unwrap();
    /// assert_eq!(grade.value(), 325);
    ///
    /// assert!(Grade::from_letters("wwC").is_err());
    /// assert!(Grade::from_letters("wwXww").is_err());
    /// ```
    pub fn from_letters(input: &str) -> Result<Self, GradeError> {
        if input.chars().count() != 5 {
            return Err(GradeError::InvalidFormat(input.to_string()));
        }

        let mut packed = 0u16;
        for ch in input.chars() {
            packed <<= 2;
            packed |= match ch {
                'C' => 0,
                'w' => 1,
                '.' => 2,
                _ => return Err(GradeError::InvalidFormat(input.to_string())),
            };
        }

        Ok(Self(packed))
    }

    /// Render the letter form, most significant position pair first
    ///
    /// # Errors
    /// Returns `GradeError::InvalidGrade` when any bit pair holds the
    /// undefined value 3. Grades produced by [`Grade::of`],
    /// [`Grade::from_letters`] or [`Grade::all`] never fail here.
    pub fn letters(self) -> Result<String, GradeError> {
        let mut out = String::with_capacity(5);

        for shift in [8, 6, 4, 2, 0] {
            out.push(match (self.0 >> shift) & 3 {
                0 => 'C',
                1 => 'w',
                2 => '.',
                _ => return Err(GradeError::InvalidGrade(self.0)),
            });
        }

        Ok(out)
    }

    /// Enumerate all 243 valid grades
    ///
    /// Every combination of the 5 position codes over {0, 1, 2}, packed per
    /// the codec. The undefined code 3 is never constructed.
    pub fn all() -> impl Iterator<Item = Self> {
        (0u16..243).map(|index| {
            let mut rest = index;
            let mut packed = 0u16;
            for shift in [0, 2, 4, 6, 8] {
                packed |= (rest % 3) << shift;
                rest /= 3;
            }
            Self(packed)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_constant() {
        assert_eq!(Grade::PERFECT.value(), 0);
        assert!(Grade::PERFECT.is_perfect());
        assert_eq!(Grade::PERFECT.letters().unwrap(), "CCCCC");
    }

    #[test]
    fn self_grade_is_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Grade::of(&w, &w), Grade::PERFECT);
        }
    }

    #[test]
    fn all_absent_when_no_letters_shared() {
        let guess = Word::new("abcde").unwrap();
        let answer = Word::new("zzzzz").unwrap();

        let grade = Grade::of(&guess, &answer);
        assert_eq!(grade.letters().unwrap(), ".....");
    }

    #[test]
    fn reversed_answer_grades_as_present_around_center() {
        // Concrete codec/grader scenario: position 2 is the only exact
        // match, everything else occurs elsewhere in the answer.
        let guess = Word::new("abcde").unwrap();
        let answer = Word::new("edcba").unwrap();

        let grade = Grade::of(&guess, &answer);
        assert_eq!(grade, Grade::from_letters("wwCww").unwrap());
    }

    #[test]
    fn encode_packs_msb_first() {
        // "wwCww" = 01 01 00 01 01 binary = 325
        let grade = Grade::from_letters("wwCww").unwrap();
        assert_eq!(grade.value(), 325);
    }

    #[test]
    fn decode_matches_encode() {
        assert_eq!(Grade(325).letters().unwrap(), "wwCww");
    }

    #[test]
    fn round_trip_all_valid_letter_strings() {
        for grade in Grade::all() {
            let letters = grade.letters().unwrap();
            assert_eq!(Grade::from_letters(&letters).unwrap(), grade);
        }
    }

    #[test]
    fn all_enumerates_243_distinct_grades() {
        let grades: Vec<Grade> = Grade::all().collect();
        assert_eq!(grades.len(), 243);

        let mut values: Vec<u16> = grades.iter().map(|g| g.value()).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), 243);

        // Every enumerated grade decodes cleanly
        for grade in grades {
            assert!(grade.letters().is_ok());
        }
    }

    #[test]
    fn from_letters_rejects_bad_input() {
        assert!(matches!(
            Grade::from_letters("wwC"),
            Err(GradeError::InvalidFormat(_))
        ));
        assert!(matches!(
            Grade::from_letters("wwCwww"),
            Err(GradeError::InvalidFormat(_))
        ));
        assert!(matches!(
            Grade::from_letters("wwXww"),
            Err(GradeError::InvalidFormat(_))
        ));
        assert!(matches!(
            Grade::from_letters(""),
            Err(GradeError::InvalidFormat(_))
        ));
        // Symbol case matters: 'c' is not 'C'
        assert!(Grade::from_letters("wwcww").is_err());
    }

    #[test]
    fn letters_rejects_undefined_bit_pair() {
        // 0b11 in the least significant pair
        assert!(matches!(
            Grade(3).letters(),
            Err(GradeError::InvalidGrade(3))
        ));
    }

    #[test]
    fn repeated_guess_letter_stays_present() {
        // "speed" against "opera": the answer has one 'e', but both guess
        // 'e's are marked Present by the non-consuming check.
        let guess = Word::new("speed").unwrap();
        let answer = Word::new("opera").unwrap();

        let grade = Grade::of(&guess, &answer);
        // s absent, p Correct, e Correct, e Present, d absent - the second
        // 'e' is not demoted even though the answer's only 'e' is used up
        assert_eq!(grade.letters().unwrap(), ".CCw.");
    }
}
