//! Card types for number and operator cards.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::convert::format_number;
use crate::error::EvalError;

/// Kind of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardKind {
    /// A numeric operand.
    Number,
    /// An arithmetic operator.
    Operator,
}

/// Arithmetic operator printed on an operator card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// Addition (`+`).
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Add,
    /// Subtraction (`-`).
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Subtract,
    /// Multiplication (`*`).
    #[cfg_attr(feature = "serde", serde(rename = "*"))]
    Multiply,
    /// Division (`/`).
    #[cfg_attr(feature = "serde", serde(rename = "/"))]
    Divide,
    /// Exponentiation (`^`).
    #[cfg_attr(feature = "serde", serde(rename = "^"))]
    Power,
}

impl Operator {
    /// Every operator that can be dealt, in draw order.
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Returns the symbol printed on the card.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }

    /// Looks up an operator by its symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| EvalError::UnknownOperator(s.to_string()))
    }
}

/// A number or operator card.
///
/// The value is kept as a string, exactly as it travels over the wire. Number
/// cards built with [`Card::number`] hold a fixed-point literal with two
/// fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    kind: CardKind,
    value: String,
}

impl Card {
    /// Creates a card from a raw kind and value.
    ///
    /// Note: This function does not validate the value. Cards received from a
    /// client may carry anything; the engine reports bad values when it
    /// evaluates a hand.
    #[must_use]
    pub fn new(kind: CardKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Creates a number card, rounding the value to two decimal places.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::Card;
    ///
    /// assert_eq!(Card::number(2.5).value(), "2.50");
    /// ```
    #[must_use]
    pub fn number(value: f32) -> Self {
        Self::new(CardKind::Number, format_number(value))
    }

    /// Creates an operator card.
    #[must_use]
    pub fn operator(op: Operator) -> Self {
        Self::new(CardKind::Operator, op.symbol())
    }

    /// Returns the kind of the card.
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        self.kind
    }

    /// Returns the card's value string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether this is a number card.
    #[must_use]
    pub fn is_number(&self) -> bool {
        self.kind == CardKind::Number
    }

    /// Returns whether this is an operator card.
    #[must_use]
    pub fn is_operator(&self) -> bool {
        self.kind == CardKind::Operator
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
            assert_eq!(op.to_string().parse::<Operator>(), Ok(op));
        }
        assert_eq!(
            "_".parse::<Operator>(),
            Err(EvalError::UnknownOperator("_".to_string()))
        );
    }

    #[test]
    fn constructors_set_kind() {
        let number = Card::number(7.0);
        assert!(number.is_number());
        assert_eq!(number.value(), "7.00");

        let op = Card::operator(Operator::Power);
        assert!(op.is_operator());
        assert_eq!(op.value(), "^");
    }
}
