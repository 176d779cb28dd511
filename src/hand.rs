//! Hands and the left-to-right scoring engine.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::{Card, Operator};
use crate::convert::{format_number, parse_number};
use crate::error::EvalError;
use crate::options::{EXPECTED_OPERATORS, GameOptions};

#[cfg(feature = "std")]
fn power(base: f32, exponent: f32) -> f32 {
    f64::from(base).powf(f64::from(exponent)) as f32
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn power(base: f32, exponent: f32) -> f32 {
    libm::pow(f64::from(base), f64::from(exponent)) as f32
}

/// Runs a single `left operator right` operation on raw card values.
fn run_operation(left: &str, operator: &str, right: &str) -> Result<f32, EvalError> {
    if left.is_empty() || operator.is_empty() || right.is_empty() {
        return Err(EvalError::MissingOperand {
            left: left.to_string(),
            operator: operator.to_string(),
            right: right.to_string(),
        });
    }

    let a = parse_number(left)?;
    let b = parse_number(right)?;

    let result = match operator.parse::<Operator>()? {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero { left: a, right: b });
            }
            a / b
        }
        Operator::Power => power(a, b),
    };

    Ok(result)
}

fn value_at(cards: &[Card], index: usize) -> &str {
    cards.get(index).map_or("", Card::value)
}

fn reduce(cards: &[Card], steps: usize) -> Result<Vec<f32>, EvalError> {
    let mut scores = Vec::with_capacity(steps);
    let mut left: String = value_at(cards, 0).to_string();
    let mut rest = cards.get(1..).unwrap_or_default();

    while scores.len() < steps {
        let operator = value_at(rest, 0);
        let right = value_at(rest, 1);
        let score = run_operation(&left, operator, right)?;
        log::debug!("step {}: {left} {operator} {right} = {score}", scores.len() + 1);
        scores.push(score);

        // The result, rounded to card precision, is the next left operand.
        left = format_number(score);
        rest = rest.get(2..).unwrap_or_default();
    }

    Ok(scores)
}

/// Evaluates a sequence of cards with the default number of operations.
///
/// Cards are read as `number, operator, number, operator, ...` and reduced
/// strictly left to right. Each intermediate result is turned back into a
/// number card before the next step, so rounding to two decimal places
/// carries through the whole hand.
///
/// # Errors
///
/// Returns an error as soon as any step fails; no partial scores are
/// returned.
///
/// # Example
///
/// ```
/// use hilo::{Card, CardKind, EvalError, evaluate};
///
/// let cards: Vec<Card> = ["10", "/", "0", "+", "1", "+", "1"]
///     .into_iter()
///     .enumerate()
///     .map(|(i, v)| {
///         let kind = if i % 2 == 0 { CardKind::Number } else { CardKind::Operator };
///         Card::new(kind, v)
///     })
///     .collect();
///
/// assert!(matches!(evaluate(&cards), Err(EvalError::DivisionByZero { .. })));
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Vec<f32>, EvalError> {
    evaluate_steps(cards, EXPECTED_OPERATORS)
}

fn evaluate_steps(cards: &[Card], steps: usize) -> Result<Vec<f32>, EvalError> {
    reduce(cards, steps).inspect_err(|err| log::warn!("hand evaluation failed: {err}"))
}

/// A hand of cards played for scoring.
///
/// By convention a hand alternates number and operator cards, starting and
/// ending with a number. The shape is not checked; a hand that runs out of
/// cards fails with [`EvalError::MissingOperand`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in play order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand from cards in play order.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Scores the hand, producing one score per operator.
    ///
    /// # Errors
    ///
    /// See [`evaluate`].
    pub fn evaluate(&self) -> Result<Vec<f32>, EvalError> {
        evaluate(&self.cards)
    }

    /// Scores the hand using the operator count from `options`.
    ///
    /// # Errors
    ///
    /// See [`evaluate`].
    pub fn evaluate_with(&self, options: &GameOptions) -> Result<Vec<f32>, EvalError> {
        evaluate_steps(&self.cards, options.operator_cards)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
