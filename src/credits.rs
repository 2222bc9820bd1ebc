//! Credit balances.
//!
//! A balance is a 16-bit unsigned count of purchasable credits. The
//! full storage range 0..=65535 is valid, so construction cannot fail;
//! the only hazards are underflow on debit and overflow on top-up,
//! and every operation here guards against both. Nothing wraps.
//!
//! ## Usage
//!
//! ```
//! use rfid_card::Credits;
//!
//! let balance = Credits::new(100);
//! let price = Credits::new(35);
//!
//! assert!(balance.covers(price));
//! assert_eq!(balance.checked_debit(price), Some(Credits::new(65)));
//!
//! // Debiting more than the balance never wraps
//! assert_eq!(Credits::new(10).checked_debit(price), None);
//! ```

use serde::{Deserialize, Serialize};

/// A credit balance or price.
///
/// Plain value semantics over `u16`. Arithmetic is only available
/// through the guarded methods; there is no wrapping path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Credits(pub u16);

impl Credits {
    /// An empty balance.
    pub const ZERO: Self = Self(0);

    /// The largest representable balance (65535).
    pub const MAX: Self = Self(u16::MAX);

    /// Create a balance from a raw credit count.
    #[must_use]
    pub const fn new(credits: u16) -> Self {
        Self(credits)
    }

    /// Get the raw credit count.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Check whether this balance is sufficient to pay `price`.
    #[must_use]
    pub const fn covers(self, price: Self) -> bool {
        self.0 >= price.0
    }

    /// Subtract `amount`, or `None` if the balance is insufficient.
    ///
    /// ```
    /// use rfid_card::Credits;
    ///
    /// assert_eq!(Credits::new(5).checked_debit(Credits::new(5)), Some(Credits::ZERO));
    /// assert_eq!(Credits::new(5).checked_debit(Credits::new(6)), None);
    /// ```
    #[must_use]
    pub const fn checked_debit(self, amount: Self) -> Option<Self> {
        match self.0.checked_sub(amount.0) {
            Some(rest) => Some(Self(rest)),
            None => None,
        }
    }

    /// Add `amount`, clamping at [`Credits::MAX`].
    #[must_use]
    pub const fn saturating_credit(self, amount: Self) -> Self {
        Self(self.0.saturating_add(amount.0))
    }
}

impl From<u16> for Credits {
    fn from(credits: u16) -> Self {
        Self(credits)
    }
}

impl std::fmt::Display for Credits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} credits", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_and_raw() {
        let c = Credits::new(100);
        assert_eq!(c.raw(), 100);
        assert_eq!(c.0, 100);
    }

    #[test]
    fn test_max_stores_exactly() {
        // Boundary: MAX is stored and read back without wrap or truncation
        let c = Credits::new(u16::MAX);
        assert_eq!(c.raw(), 65535);
        assert_eq!(c, Credits::MAX);
    }

    #[test]
    fn test_covers_boundary() {
        let price = Credits::new(50);
        assert!(Credits::new(51).covers(price));
        assert!(Credits::new(50).covers(price));
        assert!(!Credits::new(49).covers(price));
    }

    #[test]
    fn test_checked_debit() {
        let balance = Credits::new(100);
        assert_eq!(balance.checked_debit(Credits::new(35)), Some(Credits::new(65)));
        assert_eq!(balance.checked_debit(Credits::new(100)), Some(Credits::ZERO));
        assert_eq!(balance.checked_debit(Credits::new(101)), None);
    }

    #[test]
    fn test_checked_debit_from_zero() {
        assert_eq!(Credits::ZERO.checked_debit(Credits::new(1)), None);
        assert_eq!(Credits::ZERO.checked_debit(Credits::ZERO), Some(Credits::ZERO));
    }

    #[test]
    fn test_saturating_credit_clamps() {
        assert_eq!(Credits::new(100).saturating_credit(Credits::new(50)), Credits::new(150));
        assert_eq!(Credits::MAX.saturating_credit(Credits::new(1)), Credits::MAX);
        assert_eq!(Credits::new(65000).saturating_credit(Credits::new(1000)), Credits::MAX);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Credits::default(), Credits::ZERO);
    }

    #[test]
    fn test_ordering() {
        assert!(Credits::new(10) < Credits::new(20));
        assert!(Credits::MAX > Credits::ZERO);
    }

    proptest! {
        /// Round-trip identity over the full storage range: assigning
        /// any u16 and reading it back returns the same value.
        #[test]
        fn prop_roundtrip_identity(c in any::<u16>()) {
            prop_assert_eq!(Credits::new(c).raw(), c);
        }

        /// Debit then credit of the same amount restores the balance.
        #[test]
        fn prop_debit_credit_inverse(balance in any::<u16>(), amount in any::<u16>()) {
            if let Some(rest) = Credits::new(balance).checked_debit(Credits::new(amount)) {
                prop_assert_eq!(rest.saturating_credit(Credits::new(amount)), Credits::new(balance));
            }
        }

        /// checked_debit succeeds exactly when the balance covers the amount.
        #[test]
        fn prop_debit_iff_covers(balance in any::<u16>(), amount in any::<u16>()) {
            let b = Credits::new(balance);
            let a = Credits::new(amount);
            prop_assert_eq!(b.checked_debit(a).is_some(), b.covers(a));
        }
    }
}
