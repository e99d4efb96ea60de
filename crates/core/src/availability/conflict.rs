use crate::availability::normalize::normalize_date;
use crate::availability::overlap::ranges_overlap;
use crate::models::{Appointment, CandidateSlot};

/// Whether an existing appointment blocks the candidate slot.
///
/// The appointment must belong to the same professional, fall on the same
/// normalized date, hold a blocking status (cancelled and no-show never
/// block), and overlap the slot's time range.
pub fn appointment_blocks_slot(appointment: &Appointment, slot: &CandidateSlot) -> bool {
    if appointment.professional_id != slot.professional_id {
        return false;
    }

    if normalize_date(&appointment.date) != normalize_date(&slot.date) {
        return false;
    }

    if !appointment.status.is_blocking() {
        return false;
    }

    ranges_overlap(
        &slot.time.start,
        &slot.time.end,
        &appointment.start_time,
        &appointment.end_time,
    )
}
