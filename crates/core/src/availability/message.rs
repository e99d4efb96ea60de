//! Human-facing reasons for a blocked slot, tiered by disclosure level.
//! Lower trust levels never see blackout titles, booking codes, or customer
//! names.

use crate::models::{Appointment, BlackoutPeriod, DisclosureLevel};

const FALLBACK_BLACKOUT_TITLE: &str = "Blocked schedule";

pub fn blackout_reason(blackout: &BlackoutPeriod, level: DisclosureLevel) -> String {
    let title = if blackout.title.is_empty() {
        FALLBACK_BLACKOUT_TITLE
    } else {
        blackout.title.as_str()
    };

    match level {
        DisclosureLevel::Basic => "Not available".to_string(),
        DisclosureLevel::Full => title.to_string(),
        DisclosureLevel::Admin => {
            let scope = if blackout.is_organizational() {
                "Organizational"
            } else {
                "Professional's"
            };
            format!("{} block: {}", scope, title)
        }
    }
}

pub fn appointment_reason(appointment: &Appointment, level: DisclosureLevel) -> String {
    match level {
        DisclosureLevel::Basic => "Busy".to_string(),
        DisclosureLevel::Full => "Existing appointment".to_string(),
        DisclosureLevel::Admin => {
            let reference = appointment
                .code
                .as_deref()
                .filter(|code| !code.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| appointment.id.to_string());
            let customer = appointment
                .customer_name
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or("Customer");
            format!("Appointment {} - {}", reference, customer)
        }
    }
}
