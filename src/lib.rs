//! # rfid-card
//!
//! The card record shared by the components of an RFID credit system:
//! a hardware-assigned 32-bit UID paired with a 16-bit credit balance.
//!
//! ## Design Principles
//!
//! 1. **Inert data**: the record carries no behavior beyond guarded
//!    balance arithmetic. Scanning, vending, and storage are the
//!    callers' business.
//!
//! 2. **Typed fields**: `CardUid` and `Credits` are distinct newtypes,
//!    so a balance can never be passed where an identifier is expected.
//!
//! 3. **No wrapping**: every arithmetic path on a balance either
//!    refuses (`checked_debit`) or clamps (`saturating_credit`).
//!    The full `u16` range is a valid balance.
//!
//! ## Modules
//!
//! - `uid`: the opaque card identifier
//! - `credits`: the balance and its guarded arithmetic
//! - `card`: the two-field record itself

pub mod card;
pub mod credits;
pub mod uid;

// Re-export commonly used types
pub use crate::card::Card;
pub use crate::credits::Credits;
pub use crate::uid::CardUid;
