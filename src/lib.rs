//! A scoring engine for a card-based arithmetic game with optional `no_std` support.
//!
//! A player plays a [`Hand`] of alternating number and operator cards. The
//! engine reduces the hand left to right, with no operator precedence, into a
//! sequence of intermediate scores. A seeded [`Generator`] deals new card
//! pools and wraps them into identified [`Game`] records.
//!
//! # Example
//!
//! ```
//! use hilo::{Card, Hand, Operator};
//!
//! let hand = Hand::new(vec![
//!     Card::number(1.0),
//!     Card::operator(Operator::Add),
//!     Card::number(2.0),
//!     Card::operator(Operator::Subtract),
//!     Card::number(1.0),
//!     Card::operator(Operator::Multiply),
//!     Card::number(2.0),
//! ]);
//!
//! assert_eq!(hand.evaluate(), Ok(vec![3.0, 2.0, 4.0]));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod convert;
pub mod error;
pub mod game;
pub mod generator;
pub mod hand;
pub mod options;
pub mod store;
mod sync;

// Re-export main types
pub use card::{Card, CardKind, Operator};
pub use convert::{format_number, parse_number};
pub use error::{ConversionError, EvalError, StoreError};
pub use game::{Game, Pool};
pub use generator::{
    Generator, generate_number_cards, generate_operator_cards, new_pool, random_number,
    random_operator,
};
pub use hand::{Hand, evaluate};
pub use options::{EXPECTED_NUMBERS, EXPECTED_OPERATORS, GameOptions};
pub use store::{GameStore, MemoryStore};
