//! # Agendly Core
//!
//! Domain models, error taxonomy, and the appointment availability engine
//! shared by the booking (command) and calendar/bot (query) paths.
//!
//! The availability engine is a set of pure, synchronous functions over
//! snapshots supplied by callers: it never performs I/O and is safe to call
//! concurrently without locking.

pub mod availability;
pub mod errors;
pub mod models;
