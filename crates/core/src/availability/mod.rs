//! # Availability Engine
//!
//! Decides whether candidate appointment slots are free, given blackout
//! periods and existing appointments supplied by the caller.
//!
//! Two entry points compose the same resolvers:
//!
//! - [`validate::check_slot`]: the booking (command) path. One slot,
//!   freshly queried records, rejects with a staff-level reason.
//! - [`validate::classify_slots`]: the calendar/bot (query) path. Many
//!   slots against two aggregate record sets, never fails, tags each slot.
//!
//! Both paths must produce identical verdicts for the same records; the
//! split exists so the read path can stay at two queries per request while
//! the write path keeps per-call fresh reads.

pub mod blackout;
pub mod conflict;
pub mod message;
pub mod normalize;
pub mod overlap;
pub mod validate;

pub use blackout::blackout_affects_slot;
pub use conflict::appointment_blocks_slot;
pub use message::{appointment_reason, blackout_reason};
pub use normalize::{calendar_date, is_valid_time_format, normalize_date, normalize_time};
pub use overlap::ranges_overlap;
pub use validate::{check_slot, classify_slots};
