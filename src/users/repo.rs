use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo_types::User;

/// Fields a user may change on their own profile.
#[derive(Debug)]
pub struct ProfileChanges<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub dob: OffsetDateTime,
    pub phone_number: &'a str,
}

impl User {
    /// Overwrite the profile fields of one user. Returns the number of
    /// rows touched so callers can tell a vanished id apart from success.
    pub async fn update_profile(
        db: &PgPool,
        id: Uuid,
        changes: &ProfileChanges<'_>,
    ) -> anyhow::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, dob = $4, phone_number = $5, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(changes.first_name)
        .bind(changes.last_name)
        .bind(changes.dob)
        .bind(changes.phone_number)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }

    /// Swap the stored password hash for one user.
    pub async fn update_password(db: &PgPool, id: Uuid, password_hash: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $2, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(password_hash)
        .execute(db)
        .await?;
        Ok(())
    }
}
