use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AgendaError;
use crate::models::slot::CandidateSlot;

/// How much detail a blocking reason may disclose.
///
/// This is an information boundary, not a formatting preference: `Basic` is
/// customer-facing and leaks nothing, `Full` is for assistants/bots and may
/// name a blackout but never a customer, `Admin` is staff-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisclosureLevel {
    #[default]
    Basic,
    Full,
    Admin,
}

impl fmt::Display for DisclosureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DisclosureLevel::Basic => "basic",
            DisclosureLevel::Full => "full",
            DisclosureLevel::Admin => "admin",
        };
        f.write_str(s)
    }
}

impl FromStr for DisclosureLevel {
    type Err = AgendaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "basic" => Ok(DisclosureLevel::Basic),
            "full" => Ok(DisclosureLevel::Full),
            "admin" => Ok(DisclosureLevel::Admin),
            other => Err(AgendaError::Validation(format!(
                "Unknown disclosure level: {}",
                other
            ))),
        }
    }
}

/// Per-slot verdict produced by the batch query path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    pub slot: CandidateSlot,
    pub available: bool,
    /// Blocking reason at the caller-chosen disclosure level; `None` when
    /// the slot is available.
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    pub slots: Vec<CandidateSlot>,
    #[serde(default)]
    pub disclosure_level: DisclosureLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub slots: Vec<SlotAvailability>,
}

/// Response for the single-slot read-path check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotCheckResponse {
    pub available: bool,
    pub reason: Option<String>,
}
