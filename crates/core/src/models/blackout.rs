use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A period during which bookings are blocked, managed by staff.
///
/// `professional_id = None` means the blackout is organization-wide and
/// applies to every professional. Both hour fields `None` means the blackout
/// covers the whole day for each date in `[date_start, date_end]`; both set
/// means it covers only that sub-range each day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackoutPeriod {
    pub id: Uuid,
    pub professional_id: Option<Uuid>,
    /// First active date, inclusive, `YYYY-MM-DD`.
    pub date_start: String,
    /// Last active date, inclusive, `YYYY-MM-DD`.
    pub date_end: String,
    pub hours_start: Option<String>,
    pub hours_end: Option<String>,
    pub title: String,
}

impl BlackoutPeriod {
    pub fn is_organizational(&self) -> bool {
        self.professional_id.is_none()
    }

    /// Whether the blackout covers entire days rather than an hour range.
    pub fn is_full_day(&self) -> bool {
        self.hours_start.is_none() && self.hours_end.is_none()
    }
}
