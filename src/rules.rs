//! Table rule configuration.

/// House rules for a table.
///
/// Use the builder pattern to customize rules:
///
/// ```
/// use twentyone::TableRules;
///
/// let rules = TableRules::default()
///     .with_dealer_stand_min(18)
///     .with_double_down(false);
/// assert_eq!(rules.dealer_stand_min, 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRules {
    /// The dealer draws while their soft-aware total is below this value.
    ///
    /// At the standard 17 the dealer stands on any 17, soft or hard.
    pub dealer_stand_min: u32,
    /// Whether double down is offered.
    pub double_down: bool,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            dealer_stand_min: 17,
            double_down: true,
        }
    }
}

impl TableRules {
    /// Sets the dealer's stand threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableRules;
    ///
    /// let rules = TableRules::default().with_dealer_stand_min(16);
    /// assert_eq!(rules.dealer_stand_min, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stand_min(mut self, min: u32) -> Self {
        self.dealer_stand_min = min;
        self
    }

    /// Sets whether double down is offered.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableRules;
    ///
    /// let rules = TableRules::default().with_double_down(false);
    /// assert!(!rules.double_down);
    /// ```
    #[must_use]
    pub const fn with_double_down(mut self, offered: bool) -> Self {
        self.double_down = offered;
        self
    }
}
