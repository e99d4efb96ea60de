use crate::availability::normalize::{normalize_date, parse_calendar_date};
use crate::availability::overlap::ranges_overlap;
use crate::models::{BlackoutPeriod, CandidateSlot};

/// Whether a blackout period blocks the candidate slot.
///
/// Checks, in order: scope (an organization-wide blackout applies to every
/// professional, a scoped one only to its own), inclusive date containment,
/// then hours. A full-day blackout blocks any slot inside its date range; a
/// partial one blocks only slots whose time range overlaps its hours.
///
/// A record with exactly one hour bound set does not block. Storage rejects
/// new rows shaped like that, so this branch only sees data imported from
/// elsewhere.
pub fn blackout_affects_slot(blackout: &BlackoutPeriod, slot: &CandidateSlot) -> bool {
    if let Some(owner) = blackout.professional_id {
        if owner != slot.professional_id {
            return false;
        }
    }

    let slot_date = match parse_calendar_date(&normalize_date(&slot.date)) {
        Some(date) => date,
        None => return false,
    };
    let range_start = match parse_calendar_date(&normalize_date(&blackout.date_start)) {
        Some(date) => date,
        None => return false,
    };
    let range_end = match parse_calendar_date(&normalize_date(&blackout.date_end)) {
        Some(date) => date,
        None => return false,
    };
    if slot_date < range_start || slot_date > range_end {
        return false;
    }

    match (&blackout.hours_start, &blackout.hours_end) {
        (None, None) => true,
        (Some(hours_start), Some(hours_end)) => ranges_overlap(
            &slot.time.start,
            &slot.time.end,
            hours_start,
            hours_end,
        ),
        _ => false,
    }
}
