//! HP residue sequences.

use hp_core::alphabet::{self, Polarity};
use hp_core::errors::{ErrorInfo, HpError};
use serde::{Deserialize, Serialize};

/// Shortest sequence the move set is defined for. The crankshaft kernel
/// needs a four-residue window.
pub const MIN_SEQUENCE_LEN: usize = 4;

/// An ordered, immutable list of residue polarities.
///
/// Residue positions are not stored here; they belong to the
/// [`Lattice`](crate::Lattice), which keeps them consistent with its grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    residues: Vec<Polarity>,
}

impl Sequence {
    /// Builds a sequence from one-letter amino-acid codes, reducing each
    /// residue to its HP class. Unknown letters fail with
    /// `invalid-residue`.
    pub fn from_amino_acids(text: &str) -> Result<Self, HpError> {
        let mut residues = Vec::with_capacity(text.len());
        for (index, letter) in text.chars().enumerate() {
            let polarity = alphabet::classify(letter).map_err(|err| {
                HpError::Sequence(
                    err.info()
                        .clone()
                        .with_context("residue_index", index.to_string()),
                )
            })?;
            residues.push(polarity);
        }
        Self::from_polarities(residues)
    }

    /// Builds a sequence from a pre-reduced H/P string.
    pub fn from_hp(text: &str) -> Result<Self, HpError> {
        let mut residues = Vec::with_capacity(text.len());
        for (index, letter) in text.chars().enumerate() {
            let polarity = Polarity::from_hp_letter(letter).map_err(|err| {
                HpError::Sequence(
                    err.info()
                        .clone()
                        .with_context("residue_index", index.to_string()),
                )
            })?;
            residues.push(polarity);
        }
        Self::from_polarities(residues)
    }

    fn from_polarities(residues: Vec<Polarity>) -> Result<Self, HpError> {
        if residues.len() < MIN_SEQUENCE_LEN {
            return Err(HpError::Parameters(
                ErrorInfo::new("sequence-too-short", "the move set needs at least four residues")
                    .with_context("length", residues.len().to_string())
                    .with_context("minimum", MIN_SEQUENCE_LEN.to_string()),
            ));
        }
        Ok(Self { residues })
    }

    /// Number of residues.
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Always false: construction rejects sequences shorter than four.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Polarity of the residue at the given 0-based index.
    pub fn polarity(&self, index: usize) -> Polarity {
        self.residues[index]
    }

    /// True when the residue at the given 0-based index is hydrophobic.
    pub fn is_hydrophobic(&self, index: usize) -> bool {
        self.residues[index] == Polarity::Hydrophobic
    }

    /// Renders the sequence as an H/P string.
    pub fn hp_string(&self) -> String {
        self.residues.iter().map(Polarity::as_char).collect()
    }
}

/// Benchmark sequences from the HP folding literature, with their best
/// known energies. Handy for tests and experiments.
pub mod benchmarks {
    /// 20 residues, best known energy -9.
    pub const SI_1: &str = "HPHPPHHPHPPHPHHPPHPH";
    /// 24 residues, best known energy -9.
    pub const SI_2: &str = "HHPPHPPHPPHPPHPPHPPHPPHH";
    /// 25 residues, best known energy -8.
    pub const SI_3: &str = "PPHPPHHPPPPHHPPPPHHPPPPHH";
    /// 36 residues, best known energy -14.
    pub const SI_4: &str = "PPPHHPPHHPPPPPHHHHHHHPPHHPPPPHHPPHPP";
}
