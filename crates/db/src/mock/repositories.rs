use agendly_core::models::AppointmentStatus;
use chrono::{NaiveDate, NaiveTime};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbAppointment, DbBlackoutPeriod, DbProfessional};

// Mock repositories for testing
mock! {
    pub ProfessionalRepo {
        pub async fn create_professional(
            &self,
            name: &'static str,
        ) -> eyre::Result<DbProfessional>;

        pub async fn get_professional_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbProfessional>>;
    }
}

mock! {
    pub BlackoutRepo {
        pub async fn create_blackout_period(
            &self,
            professional_id: Option<Uuid>,
            date_start: NaiveDate,
            date_end: NaiveDate,
            hours_start: Option<NaiveTime>,
            hours_end: Option<NaiveTime>,
            title: &'static str,
        ) -> eyre::Result<DbBlackoutPeriod>;

        pub async fn get_blackouts_for_professional_on_date(
            &self,
            professional_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbBlackoutPeriod>>;

        pub async fn get_blackouts_in_range(
            &self,
            range_start: NaiveDate,
            range_end: NaiveDate,
        ) -> eyre::Result<Vec<DbBlackoutPeriod>>;

        pub async fn delete_blackout_period(
            &self,
            id: Uuid,
        ) -> eyre::Result<()>;
    }
}

mock! {
    pub AppointmentRepo {
        pub async fn create_appointment(
            &self,
            professional_id: Uuid,
            date: NaiveDate,
            start_time: NaiveTime,
            end_time: NaiveTime,
            status: AppointmentStatus,
            code: Option<&'static str>,
            customer_name: Option<&'static str>,
        ) -> eyre::Result<DbAppointment>;

        pub async fn get_appointment_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbAppointment>>;

        pub async fn get_conflicting_appointments(
            &self,
            professional_id: Uuid,
            date: NaiveDate,
            exclude_id: Option<Uuid>,
        ) -> eyre::Result<Vec<DbAppointment>>;

        pub async fn get_appointments_in_range(
            &self,
            range_start: NaiveDate,
            range_end: NaiveDate,
        ) -> eyre::Result<Vec<DbAppointment>>;

        pub async fn set_appointment_status(
            &self,
            id: Uuid,
            status: AppointmentStatus,
        ) -> eyre::Result<DbAppointment>;

        pub async fn reschedule_appointment(
            &self,
            id: Uuid,
            date: NaiveDate,
            start_time: NaiveTime,
            end_time: NaiveTime,
        ) -> eyre::Result<DbAppointment>;
    }
}
