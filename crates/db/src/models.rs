use agendly_core::models::{Appointment, AppointmentStatus, BlackoutPeriod};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProfessional {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBlackoutPeriod {
    pub id: Uuid,
    /// NULL means organization-wide.
    pub professional_id: Option<Uuid>,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub hours_start: Option<NaiveTime>,
    pub hours_end: Option<NaiveTime>,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub code: Option<String>,
    pub customer_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<DbBlackoutPeriod> for BlackoutPeriod {
    fn from(row: DbBlackoutPeriod) -> Self {
        BlackoutPeriod {
            id: row.id,
            professional_id: row.professional_id,
            date_start: row.date_start.format("%Y-%m-%d").to_string(),
            date_end: row.date_end.format("%Y-%m-%d").to_string(),
            hours_start: row.hours_start.map(|t| t.format("%H:%M:%S").to_string()),
            hours_end: row.hours_end.map(|t| t.format("%H:%M:%S").to_string()),
            title: row.title,
        }
    }
}

impl DbAppointment {
    /// Convert a stored row into the domain model. Fails only on a status
    /// value the domain does not know, which indicates corrupt data.
    pub fn into_domain(self) -> Result<Appointment> {
        let status = self
            .status
            .parse::<AppointmentStatus>()
            .map_err(|e| eyre!("appointment {}: {}", self.id, e))?;

        Ok(Appointment {
            id: self.id,
            professional_id: self.professional_id,
            date: self.date.format("%Y-%m-%d").to_string(),
            start_time: self.start_time.format("%H:%M:%S").to_string(),
            end_time: self.end_time.format("%H:%M:%S").to_string(),
            status,
            code: self.code,
            customer_name: self.customer_name,
        })
    }
}
