//! Per-qubit initial-state preparation.
//!
//! Every circuit starts in |0…0⟩. A qubit that should begin in another
//! single-qubit basis state is prepared by a fixed gate prefix:
//!
//! | Label | Prefix |
//! |-------|--------|
//! | `\|0⟩` | (none) |
//! | `\|1⟩` | X |
//! | `\|+⟩` | H |
//! | `\|-⟩` | X, H, Z |
//! | `\|i⟩` | H, S |
//! | `\|-i⟩` | H, S† |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IrError;
use crate::gate::StandardGate;

/// A single-qubit starting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InitialState {
    /// |0⟩
    #[default]
    Zero,
    /// |1⟩
    One,
    /// |+⟩ = (|0⟩ + |1⟩)/√2
    Plus,
    /// |-⟩, prepared as Z·H·X|0⟩
    Minus,
    /// |i⟩ = (|0⟩ + i|1⟩)/√2
    PlusI,
    /// |-i⟩ = (|0⟩ - i|1⟩)/√2
    MinusI,
}

impl InitialState {
    /// Every supported label, in display order.
    pub const ALL: [InitialState; 6] = [
        InitialState::Zero,
        InitialState::One,
        InitialState::Plus,
        InitialState::Minus,
        InitialState::PlusI,
        InitialState::MinusI,
    ];

    /// Canonical ket label.
    pub fn label(&self) -> &'static str {
        match self {
            InitialState::Zero => "|0⟩",
            InitialState::One => "|1⟩",
            InitialState::Plus => "|+⟩",
            InitialState::Minus => "|-⟩",
            InitialState::PlusI => "|i⟩",
            InitialState::MinusI => "|-i⟩",
        }
    }

    /// Gates that take |0⟩ to this state, in application order.
    pub fn preparation(&self) -> &'static [StandardGate] {
        match self {
            InitialState::Zero => &[],
            InitialState::One => &[StandardGate::X],
            InitialState::Plus => &[StandardGate::H],
            InitialState::Minus => &[StandardGate::X, StandardGate::H, StandardGate::Z],
            InitialState::PlusI => &[StandardGate::H, StandardGate::S],
            InitialState::MinusI => &[StandardGate::H, StandardGate::Sdg],
        }
    }
}

impl fmt::Display for InitialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InitialState {
    type Err = IrError;

    /// Accepts `|0⟩`, `|0>` and bare `0` spellings of each label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('|')
            .map(|rest| {
                rest.strip_suffix('⟩')
                    .or_else(|| rest.strip_suffix('>'))
                    .unwrap_or(rest)
            })
            .unwrap_or(trimmed);

        match inner {
            "0" => Ok(InitialState::Zero),
            "1" => Ok(InitialState::One),
            "+" => Ok(InitialState::Plus),
            "-" => Ok(InitialState::Minus),
            "i" => Ok(InitialState::PlusI),
            "-i" => Ok(InitialState::MinusI),
            _ => Err(IrError::UnknownInitialState(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spellings() {
        assert_eq!("|0⟩".parse::<InitialState>().unwrap(), InitialState::Zero);
        assert_eq!("|1>".parse::<InitialState>().unwrap(), InitialState::One);
        assert_eq!("+".parse::<InitialState>().unwrap(), InitialState::Plus);
        assert_eq!(" |-i⟩ ".parse::<InitialState>().unwrap(), InitialState::MinusI);
        assert_eq!("|i>".parse::<InitialState>().unwrap(), InitialState::PlusI);
    }

    #[test]
    fn test_labels_round_trip() {
        for state in InitialState::ALL {
            assert_eq!(state.label().parse::<InitialState>().unwrap(), state);
        }
    }

    #[test]
    fn test_unknown_label() {
        assert!(matches!(
            "|2⟩".parse::<InitialState>(),
            Err(IrError::UnknownInitialState(label)) if label == "|2⟩"
        ));
        assert!("".parse::<InitialState>().is_err());
    }

    #[test]
    fn test_preparation_prefixes() {
        assert!(InitialState::Zero.preparation().is_empty());
        assert_eq!(
            InitialState::Minus.preparation(),
            &[StandardGate::X, StandardGate::H, StandardGate::Z]
        );
        assert_eq!(
            InitialState::MinusI.preparation(),
            &[StandardGate::H, StandardGate::Sdg]
        );
    }
}
