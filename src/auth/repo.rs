use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::repo_types::{NewUser, User};

impl User {
    /// Find a non-deleted user by exact username.
    pub async fn find_by_username(db: &PgPool, username: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, first_name, last_name, dob, phone_number,
                   created_at, updated_at, is_active, is_deleted
            FROM users
            WHERE username = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Find a user by id.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, first_name, last_name, dob, phone_number,
                   created_at, updated_at, is_active, is_deleted
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert a new user row. Surfaces the raw sqlx error so callers can
    /// map a unique violation on username.
    pub async fn create(db: &PgPool, new: &NewUser<'_>) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, first_name, last_name, dob, phone_number)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, password_hash, first_name, last_name, dob, phone_number,
                      created_at, updated_at, is_active, is_deleted
            "#,
        )
        .bind(new.username)
        .bind(new.password_hash)
        .bind(new.first_name)
        .bind(new.last_name)
        .bind(new.dob)
        .bind(new.phone_number)
        .fetch_one(db)
        .await
    }
}
