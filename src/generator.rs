//! Random card pools for new games.

extern crate alloc;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::card::{Card, Operator};
use crate::game::{Game, Pool};
use crate::options::GameOptions;
use crate::sync::Mutex;

/// Draws from `0..10` and lifts a zero to one, so the result lies in `1..=9`.
fn draw_value<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(0..10_u8).max(1)
}

/// Draws a random operand value in `1..=9`.
pub fn random_number<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    f32::from(draw_value(rng))
}

/// Draws a random operator, each with equal weight.
pub fn random_operator<R: Rng + ?Sized>(rng: &mut R) -> Operator {
    Operator::ALL[rng.random_range(0..Operator::ALL.len())]
}

/// Draws `n` number cards.
///
/// A value that was already drawn in this call is redrawn once. The redraw
/// is not checked again, so duplicates are less likely but still possible.
pub fn generate_number_cards<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Card> {
    draw_numbers(n, || draw_value(rng))
}

fn draw_numbers<F: FnMut() -> u8>(n: usize, mut draw: F) -> Vec<Card> {
    let mut seen = HashSet::with_capacity(n);
    let mut cards = Vec::with_capacity(n);

    for _ in 0..n {
        let mut value = draw();
        if seen.contains(&value) {
            log::trace!("redrawing duplicate number {value}");
            value = draw();
        }
        seen.insert(value);
        cards.push(Card::number(f32::from(value)));
    }

    cards
}

/// Draws `n` operator cards. Duplicates are allowed.
pub fn generate_operator_cards<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Card> {
    (0..n)
        .map(|_| Card::operator(random_operator(rng)))
        .collect()
}

/// Deals a pool: all number cards first, then all operator cards.
pub fn new_pool<R: Rng + ?Sized>(rng: &mut R, options: &GameOptions) -> Pool {
    let mut cards = generate_number_cards(rng, options.number_cards);
    cards.extend(generate_operator_cards(rng, options.operator_cards));
    log::debug!(
        "dealt pool of {} numbers and {} operators",
        options.number_cards,
        options.operator_cards
    );
    Pool::new(cards)
}

/// A seeded dealer of card pools and games.
///
/// The generator owns its random source, so separate generators never share
/// state and a fixed seed always deals the same sequence of pools.
pub struct Generator {
    /// Game options.
    options: GameOptions,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Generator {
    /// Creates a new generator with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::{GameOptions, Generator};
    ///
    /// let generator = Generator::new(GameOptions::default(), 42);
    /// let pool = generator.new_pool();
    /// assert_eq!(pool.len(), 7);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the generator's options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Draws `n` number cards. See [`generate_number_cards`].
    pub fn number_cards(&self, n: usize) -> Vec<Card> {
        generate_number_cards(&mut *self.rng.lock(), n)
    }

    /// Draws `n` operator cards. See [`generate_operator_cards`].
    pub fn operator_cards(&self, n: usize) -> Vec<Card> {
        generate_operator_cards(&mut *self.rng.lock(), n)
    }

    /// Deals a pool sized by the generator's options.
    pub fn new_pool(&self) -> Pool {
        new_pool(&mut *self.rng.lock(), &self.options)
    }

    /// Deals a pool and wraps it into a game stamped with the current time.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn new_game(&self) -> Game {
        self.new_game_at(Utc::now())
    }

    /// Deals a pool and wraps it into a game stamped with `now`.
    pub fn new_game_at(&self, now: DateTime<Utc>) -> Game {
        let mut rng = self.rng.lock();
        let pool = new_pool(&mut *rng, &self.options);
        Game::at(pool, now, &mut *rng)
    }
}
