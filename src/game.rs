//! Dealt pools and identified game records.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::card::Card;

/// The cards dealt for a game.
///
/// A pool is not in play order: number cards come first, then operator
/// cards. Arranging them into a [`Hand`](crate::Hand) is up to the player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pool {
    cards: Vec<Card>,
}

impl Pool {
    /// Creates a pool from the given cards.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns all cards in the pool.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number cards in the pool.
    pub fn number_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|card| card.is_number())
    }

    /// Returns the operator cards in the pool.
    pub fn operator_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|card| card.is_operator())
    }

    /// Returns the number of cards in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Pool {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

/// Builds a game id: the timestamp's sub-second nanoseconds, a hyphen, then a
/// random UUID.
fn new_id<R: Rng + ?Sized>(now: &DateTime<Utc>, rng: &mut R) -> String {
    let token = uuid::Builder::from_random_bytes(rng.random()).into_uuid();
    format!("{}-{token}", now.timestamp_subsec_nanos())
}

/// A dealt game: an id, its creation time, and its pool.
///
/// Ids sort roughly by sub-second creation time and are then random. They
/// are not guaranteed to be unique.
///
/// The random suffix is drawn from the caller's random source. Generators
/// built with the same seed produce the same suffixes, so give each process
/// its own entropy-seeded [`Generator`](crate::Generator) when ids must not
/// collide across processes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    id: String,
    timestamp: DateTime<Utc>,
    pool: Pool,
}

impl Game {
    /// Wraps a pool into a game stamped with the current time.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn new<R: Rng + ?Sized>(pool: Pool, rng: &mut R) -> Self {
        Self::at(pool, Utc::now(), rng)
    }

    /// Wraps a pool into a game stamped with `now`.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::DateTime;
    /// use hilo::{Game, Pool};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let now = DateTime::from_timestamp(1_700_000_000, 250).unwrap();
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let game = Game::at(Pool::default(), now, &mut rng);
    ///
    /// assert!(game.id().starts_with("250-"));
    /// ```
    #[must_use]
    pub fn at<R: Rng + ?Sized>(pool: Pool, now: DateTime<Utc>, rng: &mut R) -> Self {
        let id = new_id(&now, rng);
        log::debug!("new game {id} with {} cards", pool.len());
        Self {
            id,
            timestamp: now,
            pool,
        }
    }

    /// Returns the game id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns when the game was created.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the dealt pool.
    #[must_use]
    pub const fn pool(&self) -> &Pool {
        &self.pool
    }
}
