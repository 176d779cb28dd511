//! Game configuration options.

/// Number cards dealt per game, and operands per hand.
pub const EXPECTED_NUMBERS: usize = 4;

/// Operator cards dealt per game, and scores per hand.
pub const EXPECTED_OPERATORS: usize = 3;

/// Configuration options for dealing and scoring.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hilo::GameOptions;
///
/// let options = GameOptions::default()
///     .with_number_cards(5)
///     .with_operator_cards(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number cards in a dealt pool.
    pub number_cards: usize,
    /// Operator cards in a dealt pool. A hand is scored once per operator.
    pub operator_cards: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            number_cards: EXPECTED_NUMBERS,
            operator_cards: EXPECTED_OPERATORS,
        }
    }
}

impl GameOptions {
    /// Sets the number of number cards.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::GameOptions;
    ///
    /// let options = GameOptions::default().with_number_cards(6);
    /// assert_eq!(options.number_cards, 6);
    /// ```
    #[must_use]
    pub const fn with_number_cards(mut self, count: usize) -> Self {
        self.number_cards = count;
        self
    }

    /// Sets the number of operator cards.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::GameOptions;
    ///
    /// let options = GameOptions::default().with_operator_cards(5);
    /// assert_eq!(options.operator_cards, 5);
    /// ```
    #[must_use]
    pub const fn with_operator_cards(mut self, count: usize) -> Self {
        self.operator_cards = count;
        self
    }

    /// Returns the number of cards in a dealt pool.
    #[must_use]
    pub const fn pool_size(&self) -> usize {
        self.number_cards + self.operator_cards
    }
}
