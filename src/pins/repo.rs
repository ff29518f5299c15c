use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Pin {
    pub id: Uuid,
    pub user_email: String,
    pub title: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, thiserror::Error)]
pub enum PinError {
    #[error("pin not found")]
    NotFound,
    #[error("pin belongs to another user")]
    Forbidden,
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

pub async fn insert(
    db: &PgPool,
    user_email: &str,
    title: &str,
    description: &str,
    lat: f64,
    lng: f64,
) -> Result<Pin, PinError> {
    let pin = sqlx::query_as::<_, Pin>(
        r#"
        INSERT INTO pins (user_email, title, description, lat, lng)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_email, title, description, lat, lng, created_at
        "#,
    )
    .bind(user_email)
    .bind(title)
    .bind(description)
    .bind(lat)
    .bind(lng)
    .fetch_one(db)
    .await?;
    Ok(pin)
}

pub async fn list_all(db: &PgPool) -> Result<Vec<Pin>, PinError> {
    let rows = sqlx::query_as::<_, Pin>(
        r#"
        SELECT id, user_email, title, description, lat, lng, created_at
        FROM pins
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Overwrites title/description/coordinates of a pin owned by `user_email`.
/// The ownership check and the write run in one transaction with the row
/// locked, so a concurrent edit or delete cannot interleave between them.
/// `id` and `created_at` are never touched.
pub async fn update_owned(
    db: &PgPool,
    pin_id: Uuid,
    user_email: &str,
    title: &str,
    description: &str,
    lat: f64,
    lng: f64,
) -> Result<(), PinError> {
    let mut tx = db.begin().await?;

    let owner: Option<(String,)> =
        sqlx::query_as(r#"SELECT user_email FROM pins WHERE id = $1 FOR UPDATE"#)
            .bind(pin_id)
            .fetch_optional(&mut *tx)
            .await?;
    let Some((owner,)) = owner else {
        return Err(PinError::NotFound);
    };
    if owner != user_email {
        return Err(PinError::Forbidden);
    }

    sqlx::query(
        r#"
        UPDATE pins
        SET title = $2, description = $3, lat = $4, lng = $5
        WHERE id = $1
        "#,
    )
    .bind(pin_id)
    .bind(title)
    .bind(description)
    .bind(lat)
    .bind(lng)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}

/// Removes a pin owned by `user_email`, with the same locked
/// check-then-write sequence as [`update_owned`].
pub async fn delete_owned(db: &PgPool, pin_id: Uuid, user_email: &str) -> Result<(), PinError> {
    let mut tx = db.begin().await?;

    let owner: Option<(String,)> =
        sqlx::query_as(r#"SELECT user_email FROM pins WHERE id = $1 FOR UPDATE"#)
            .bind(pin_id)
            .fetch_optional(&mut *tx)
            .await?;
    let Some((owner,)) = owner else {
        return Err(PinError::NotFound);
    };
    if owner != user_email {
        return Err(PinError::Forbidden);
    }

    sqlx::query(r#"DELETE FROM pins WHERE id = $1"#)
        .bind(pin_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}
