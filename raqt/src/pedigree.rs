//! Strength-of-knowledge reference tables.
//!
//! A NUSAP element qualifies a number with its Numeral, Unit, Spread,
//! Assessment and Pedigree. The pedigree is a code of scores (4 = strongest,
//! 0 = weakest), one per criterion of a pedigree matrix. These tables are
//! reference material shown next to the survey; answers are never scored
//! against them.

use std::fmt;

/// Scores of the matrix rows, strongest first.
pub const SCORES: [u8; 5] = [4, 3, 2, 1, 0];

/// One column of a pedigree matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    pub name: &'static str,
    /// Level descriptions, ordered like [`SCORES`].
    pub levels: [&'static str; 5],
    /// Marked as particularly important when judging assumptions.
    pub important: bool,
}

impl Criterion {
    const fn new(name: &'static str, levels: [&'static str; 5]) -> Self {
        Self {
            name,
            levels,
            important: false,
        }
    }

    const fn important(mut self) -> Self {
        self.important = true;
        self
    }

    /// The level description for a score.
    pub fn level(&self, score: u8) -> Option<&'static str> {
        let row = SCORES.iter().position(|&s| s == score)?;
        Some(self.levels[row])
    }
}

/// A pedigree matrix: a set of criteria, each graded on the [`SCORES`] scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PedigreeMatrix {
    pub name: &'static str,
    pub source: &'static str,
    pub criteria: &'static [Criterion],
}

/// Error for pedigree codes that do not fit a matrix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PedigreeError {
    #[error("pedigree code has {actual} scores but matrix '{matrix}' has {expected} criteria")]
    LengthMismatch {
        matrix: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("score {score} for criterion '{criterion}' is outside 0..=4")]
    ScoreOutOfRange { criterion: &'static str, score: u8 },
}

impl PedigreeMatrix {
    /// Pair each score of a pedigree code with its criterion and level text.
    pub fn describe(&self, code: &[u8]) -> Result<Vec<(&'static str, &'static str)>, PedigreeError> {
        if code.len() != self.criteria.len() {
            return Err(PedigreeError::LengthMismatch {
                matrix: self.name,
                expected: self.criteria.len(),
                actual: code.len(),
            });
        }

        self.criteria
            .iter()
            .zip(code)
            .map(|(criterion, &score)| {
                criterion
                    .level(score)
                    .map(|level| (criterion.name, level))
                    .ok_or(PedigreeError::ScoreOutOfRange {
                        criterion: criterion.name,
                        score,
                    })
            })
            .collect()
    }
}

/// Pedigree matrix for research knowledge (Funtowicz and Ravetz, 1990).
pub const RESEARCH: PedigreeMatrix = PedigreeMatrix {
    name: "Research",
    source: "Funtowicz and Ravetz, 1990",
    criteria: &[
        Criterion::new(
            "Theoretical Structure",
            [
                "Established theory",
                "Theory-based model",
                "Computational model",
                "Statistical processing",
                "Definitions",
            ],
        ),
        Criterion::new(
            "Data input",
            [
                "Experimental data",
                "Historic /field data",
                "Calculated data",
                "Educated guesses",
                "Uneducated guesses",
            ],
        ),
        Criterion::new("Peer-acceptance", ["Total", "High", "Medium", "Low", "None"]),
        Criterion::new(
            "Colleague consensus",
            [
                "All but cranks",
                "All but rebels",
                "Competing schools",
                "Embryonic Field",
                "No",
            ],
        ),
    ],
};

/// Pedigree matrix for assumptions (Flage 2017, after van der Sluijs et al., 2005).
pub const ASSUMPTIONS: PedigreeMatrix = PedigreeMatrix {
    name: "Assumptions",
    source: "Flage 2017, based on van der Sluijs et al., 2005a, 2005b",
    criteria: &[
        Criterion::new(
            "Influence of situational limitations time, money etc",
            [
                "No such limitations",
                "Hardly influenced",
                "Moderately influenced",
                "Importantly influenced",
                "Completely influenced",
            ],
        )
        .important(),
        Criterion::new(
            "Plausibility",
            [
                "Very plausible",
                "Plausible",
                "Acceptable",
                "Hardly Plausible",
                "Fictive or speculative",
            ],
        ),
        Criterion::new(
            "Choice space",
            [
                "No alternatives available",
                "Very limited number of alternatives",
                "Small number of alternatives",
                "Average number of alternatives",
                "Very ample choice of alternatives",
            ],
        ),
        Criterion::new(
            "Agreement among peers",
            [
                "Complete agreement",
                "High degree of agreement",
                "Competing perspectives",
                "Low degree of agreement",
                "Controversial",
            ],
        ),
        Criterion::new(
            "Agreement among stakeholders",
            [
                "Complete agreement",
                "High degree of agreement",
                "Competing perspectives",
                "Low degree of agreement",
                "Controversial",
            ],
        ),
        Criterion::new(
            "Sensitivity to views of analyst",
            [
                "Not sensitive",
                "Hardly sensitive",
                "Moderately sensitive",
                "Highly sensitive",
                "Extremely sensitive",
            ],
        )
        .important(),
        Criterion::new(
            "Influence on results",
            [
                "Little or no influence",
                "Local impact in the calculations",
                "Important impact in a major step in the calculations",
                "Moderate impact on end result",
                "Important impact on end result",
            ],
        ),
    ],
};

/// Both reference matrices.
pub const MATRICES: [&PedigreeMatrix; 2] = [&RESEARCH, &ASSUMPTIONS];

/// A named example pedigree code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PedigreeExample {
    pub name: &'static str,
    pub matrix: &'static PedigreeMatrix,
    pub code: &'static [u8],
}

pub const EXAMPLES: [PedigreeExample; 4] = [
    PedigreeExample {
        name: "research lower bound",
        matrix: &RESEARCH,
        code: &[3, 2, 1, 2],
    },
    PedigreeExample {
        name: "research (IceRisk 1.0)",
        matrix: &RESEARCH,
        code: &[3, 2, 3, 4],
    },
    PedigreeExample {
        name: "assumptions best practice",
        matrix: &ASSUMPTIONS,
        code: &[4, 4, 3, 2, 3, 2, 1],
    },
    PedigreeExample {
        name: "assumptions speculative",
        matrix: &ASSUMPTIONS,
        code: &[2, 0, 2, 1, 1, 1, 1],
    },
];

/// A number qualified by the five NUSAP elements.
#[derive(Debug, Clone, PartialEq)]
pub struct NusapElement {
    pub numeral: f64,
    pub unit: String,
    pub spread: (f64, f64),
    pub assessment: String,
    pub pedigree: Vec<u8>,
}

impl NusapElement {
    /// The IceRisk 1.0 estimate of ice debris thrown from one turbine.
    ///
    /// The numeral and spread are in tons, so the unit is tons/year (the
    /// published example states kg/year next to tonnage figures).
    pub fn icerisk_example() -> Self {
        Self {
            numeral: 8.8,
            unit: "tons/year".to_string(),
            spread: (7.5, 10.0),
            assessment: "High (> 90 % probability/confidence)".to_string(),
            pedigree: vec![3, 2, 3, 4],
        }
    }
}

impl fmt::Display for NusapElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pedigree = self
            .pedigree
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",");
        write!(
            f,
            "Numeral {}; Unit {}; Spread [{}, {}]; Assessment {}; Pedigree ({})",
            self.numeral, self.unit, self.spread.0, self.spread.1, self.assessment, pedigree
        )
    }
}
