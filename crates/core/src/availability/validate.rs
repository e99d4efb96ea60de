use crate::availability::blackout::blackout_affects_slot;
use crate::availability::conflict::appointment_blocks_slot;
use crate::availability::message::{appointment_reason, blackout_reason};
use crate::errors::{AgendaError, AgendaResult};
use crate::models::{Appointment, BlackoutPeriod, CandidateSlot, DisclosureLevel, SlotAvailability};

/// Validate one candidate slot on the booking path.
///
/// The caller supplies freshly queried blackout periods and appointments for
/// the slot's professional and date. The first blocking record rejects the
/// booking with [`AgendaError::SlotUnavailable`] carrying a staff-level
/// reason; the handler maps it to a client error, not a server fault.
///
/// Validation and insertion are separate steps, so two concurrent bookings
/// can both pass this check. The backing store's overlap exclusion
/// constraint is the final arbiter for that race.
pub fn check_slot(
    slot: &CandidateSlot,
    blackouts: &[BlackoutPeriod],
    appointments: &[Appointment],
) -> AgendaResult<()> {
    match first_blocking_reason(slot, blackouts, appointments, DisclosureLevel::Admin) {
        Some(reason) => Err(AgendaError::SlotUnavailable(reason)),
        None => Ok(()),
    }
}

/// Classify many candidate slots on the read path.
///
/// The caller fetches two aggregate record sets covering the whole date
/// range once, and every slot is resolved against them in memory.
/// Unavailability is data here, never an error; each slot comes back tagged
/// with an optional reason at the requested disclosure level.
///
/// For identical records this agrees with [`check_slot`] on every slot.
pub fn classify_slots(
    slots: Vec<CandidateSlot>,
    blackouts: &[BlackoutPeriod],
    appointments: &[Appointment],
    level: DisclosureLevel,
) -> Vec<SlotAvailability> {
    slots
        .into_iter()
        .map(|slot| {
            let reason = first_blocking_reason(&slot, blackouts, appointments, level);
            SlotAvailability {
                available: reason.is_none(),
                reason,
                slot,
            }
        })
        .collect()
}

/// Shared resolution order for both paths: blackouts first, then
/// appointment conflicts.
fn first_blocking_reason(
    slot: &CandidateSlot,
    blackouts: &[BlackoutPeriod],
    appointments: &[Appointment],
    level: DisclosureLevel,
) -> Option<String> {
    if let Some(blackout) = blackouts.iter().find(|b| blackout_affects_slot(b, slot)) {
        return Some(blackout_reason(blackout, level));
    }

    appointments
        .iter()
        .find(|a| appointment_blocks_slot(a, slot))
        .map(|appointment| appointment_reason(appointment, level))
}
