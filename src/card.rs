//! The card record.
//!
//! `Card` pairs a hardware UID with the credit balance currently
//! associated with it. It is a transient value: a scan routine builds
//! one from a fresh read plus a balance lookup, vend logic inspects
//! and rewrites the balance, and whatever stores balances consumes the
//! updated record. The record itself holds no resources and enforces
//! nothing beyond the integer storage widths.

use serde::{Deserialize, Serialize};

use crate::credits::Credits;
use crate::uid::CardUid;

/// One physical card known to the system.
///
/// Plain copyable data with public fields. Two cards with equal `uid`
/// and equal `credits` are indistinguishable; there is no hidden state.
///
/// ```
/// use rfid_card::{Card, CardUid, Credits};
///
/// let card = Card::new(CardUid::new(0x1A2B_3C4D), Credits::new(100));
/// assert_eq!(card.uid.raw(), 0x1A2B_3C4D);
/// assert_eq!(card.credits.raw(), 100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Hardware-assigned identifier, fixed for the card's lifetime.
    pub uid: CardUid,

    /// Remaining purchasable balance.
    pub credits: Credits,
}

impl Card {
    /// Create a record from a UID and its associated balance.
    #[must_use]
    pub const fn new(uid: CardUid, credits: Credits) -> Self {
        Self { uid, credits }
    }

    /// The record with `price` debited, or `None` if the balance is
    /// insufficient. The UID is unchanged.
    ///
    /// ```
    /// use rfid_card::{Card, CardUid, Credits};
    ///
    /// let card = Card::new(CardUid::new(1), Credits::new(100));
    /// let after = card.debit(Credits::new(35)).unwrap();
    /// assert_eq!(after.uid, card.uid);
    /// assert_eq!(after.credits, Credits::new(65));
    ///
    /// assert_eq!(card.debit(Credits::new(200)), None);
    /// ```
    #[must_use]
    pub const fn debit(self, price: Credits) -> Option<Self> {
        match self.credits.checked_debit(price) {
            Some(credits) => Some(Self { uid: self.uid, credits }),
            None => None,
        }
    }

    /// The record with `amount` added to the balance, clamped at
    /// [`Credits::MAX`]. The UID is unchanged.
    #[must_use]
    pub const fn credit(self, amount: Credits) -> Self {
        Self {
            uid: self.uid,
            credits: self.credits.saturating_credit(amount),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.uid, self.credits)
    }
}
