use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

/// Create the schema if it does not exist.
///
/// The `appointments` table carries a gist EXCLUDE constraint over
/// (professional, date, time range) limited to blocking statuses. Slot
/// validation runs before insertion, so two concurrent bookings can both
/// pass it; the constraint is the final arbiter for that race. The range is
/// half-open, so back-to-back appointments are accepted.
pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // btree_gist lets the EXCLUDE constraint mix equality columns with the
    // range overlap operator. timerange has no built-in type, so declare it.
    sqlx::query(
        r#"
        CREATE EXTENSION IF NOT EXISTS btree_gist;
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        DO $$ BEGIN
            CREATE TYPE timerange AS RANGE (subtype = time);
        EXCEPTION WHEN duplicate_object THEN NULL;
        END $$;
        "#,
    )
    .execute(pool)
    .await?;

    // Create professionals table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS professionals (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create blackout_periods table; NULL professional_id = organization-wide
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blackout_periods (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            professional_id UUID NULL REFERENCES professionals(id),
            date_start DATE NOT NULL,
            date_end DATE NOT NULL,
            hours_start TIME NULL,
            hours_end TIME NULL,
            title VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_date_range CHECK (date_end >= date_start),
            CONSTRAINT paired_hours CHECK ((hours_start IS NULL) = (hours_end IS NULL)),
            CONSTRAINT valid_hour_range CHECK (hours_start IS NULL OR hours_end > hours_start)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            professional_id UUID NOT NULL REFERENCES professionals(id),
            date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'pending',
            code VARCHAR(64) NULL,
            customer_name VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time),
            CONSTRAINT no_double_booking EXCLUDE USING gist (
                professional_id WITH =,
                date WITH =,
                timerange(start_time, end_time) WITH &&
            ) WHERE (status NOT IN ('cancelled', 'no_show'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_appointments_professional_date ON appointments(professional_id, date)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_date ON appointments(date)",
        "CREATE INDEX IF NOT EXISTS idx_blackout_periods_professional_id ON blackout_periods(professional_id)",
        "CREATE INDEX IF NOT EXISTS idx_blackout_periods_dates ON blackout_periods(date_start, date_end)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
