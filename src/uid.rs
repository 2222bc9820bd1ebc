//! Card identification.
//!
//! Every physical card carries a factory-programmed 32-bit unique
//! identifier, reported by the reader at scan time. The UID is opaque:
//! equality is the only meaningful operation, and a UID never changes
//! for the lifetime of the card.
//!
//! ## Usage
//!
//! ```
//! use rfid_card::CardUid;
//!
//! let scanned = CardUid::new(0x1A2B_3C4D);
//! let looked_up = CardUid::new(0x1A2B_3C4D);
//!
//! assert_eq!(scanned, looked_up);
//! assert_eq!(scanned.raw(), 0x1A2B_3C4D);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier of a physical card.
///
/// Hardware-assigned and immutable: the type offers no mutation beyond
/// whole-value replacement. No arithmetic semantics are implied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardUid(pub u32);

impl CardUid {
    /// Create a UID from the raw value reported by the reader.
    #[must_use]
    pub const fn new(uid: u32) -> Self {
        Self(uid)
    }

    /// Get the raw UID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardUid {
    fn from(uid: u32) -> Self {
        Self(uid)
    }
}

impl std::fmt::Display for CardUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Readers conventionally report UIDs in hex
        write!(f, "Uid(0x{:08X})", self.0)
    }
}
