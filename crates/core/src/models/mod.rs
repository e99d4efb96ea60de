pub mod appointment;
pub mod availability;
pub mod blackout;
pub mod slot;

pub use appointment::{
    Appointment, AppointmentResponse, AppointmentStatus, BookAppointmentRequest,
    RescheduleAppointmentRequest,
};
pub use availability::{
    AvailabilityRequest, AvailabilityResponse, DisclosureLevel, SlotAvailability,
    SlotCheckResponse,
};
pub use blackout::BlackoutPeriod;
pub use slot::{CandidateSlot, TimeRange};
