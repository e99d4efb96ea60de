use crate::models::DbProfessional;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_professional(pool: &Pool<Postgres>, name: &str) -> Result<DbProfessional> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating professional: id={}, name={}", id, name);

    let professional = sqlx::query_as::<_, DbProfessional>(
        r#"
        INSERT INTO professionals (id, name, created_at)
        VALUES ($1, $2, $3)
        RETURNING id, name, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(professional)
}

pub async fn get_professional_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbProfessional>> {
    let professional = sqlx::query_as::<_, DbProfessional>(
        r#"
        SELECT id, name, created_at
        FROM professionals
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(professional)
}
