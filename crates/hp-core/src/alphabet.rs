//! Residue polarity and the amino-acid reduction table.
//!
//! The HP model knows exactly one piece of biology: each of the twenty
//! amino acids is either hydrophobic or polar. Everything downstream works
//! on the reduced alphabet.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, HpError};

/// Residue class in the HP model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Hydrophobic residue; contributes to topological contacts.
    Hydrophobic,
    /// Polar residue; energetically inert.
    Polar,
}

impl Polarity {
    /// One-letter code used in HP strings.
    pub fn as_char(&self) -> char {
        match self {
            Polarity::Hydrophobic => 'H',
            Polarity::Polar => 'P',
        }
    }

    /// Parses a letter of a pre-reduced HP string.
    pub fn from_hp_letter(letter: char) -> Result<Self, HpError> {
        match letter {
            'H' => Ok(Polarity::Hydrophobic),
            'P' => Ok(Polarity::Polar),
            other => Err(HpError::Sequence(
                ErrorInfo::new("invalid-residue", "letter is not part of the HP alphabet")
                    .with_context("letter", other.to_string()),
            )),
        }
    }
}

/// Reduces a one-letter amino-acid code to its HP class.
///
/// A, C, G, I, L, M, F, W and V are hydrophobic; R, N, D, Q, E, H, K, P,
/// S, T and Y are polar. Any other letter is an `invalid-residue` error.
pub fn classify(letter: char) -> Result<Polarity, HpError> {
    match letter {
        'A' | 'C' | 'G' | 'I' | 'L' | 'M' | 'F' | 'W' | 'V' => Ok(Polarity::Hydrophobic),
        'R' | 'N' | 'D' | 'Q' | 'E' | 'H' | 'K' | 'P' | 'S' | 'T' | 'Y' => Ok(Polarity::Polar),
        other => Err(HpError::Sequence(
            ErrorInfo::new("invalid-residue", "letter is not a known amino acid")
                .with_context("letter", other.to_string()),
        )),
    }
}
