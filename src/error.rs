//! Error types for engine operations.

extern crate alloc;

use alloc::string::String;
use core::num::ParseFloatError;

use thiserror::Error;

/// A card value could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error converting string {value:?} to a number: {source}")]
pub struct ConversionError {
    /// The string that failed to parse.
    pub value: String,
    /// The underlying parse failure.
    #[source]
    pub source: ParseFloatError,
}

/// Errors that can occur while evaluating a hand.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// An operand is not a valid decimal literal.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// An operand or the operator is empty, or the hand ran out of cards.
    #[error("missing arguments in operation \"{left} {operator} {right}\"")]
    MissingOperand {
        /// Left operand as written on the card.
        left: String,
        /// Operator as written on the card.
        operator: String,
        /// Right operand as written on the card.
        right: String,
    },
    /// The operator symbol is not one of `+ - * / ^`.
    #[error("operator {0:?} not recognized")]
    UnknownOperator(String),
    /// The right operand of a division is zero.
    #[error("operation {left} / {right} is not valid: division by zero")]
    DivisionByZero {
        /// Left operand.
        left: f32,
        /// Right operand.
        right: f32,
    },
}

/// Errors that can occur when storing or loading games.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No game is stored under the id.
    #[error("game {0:?} not found")]
    NotFound(String),
    /// A game with the same id is already stored.
    #[error("game {0:?} already exists")]
    Duplicate(String),
}
