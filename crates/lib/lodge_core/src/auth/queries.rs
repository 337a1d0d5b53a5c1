//! Auth-related database queries.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::AuthError;
use crate::models::auth::{NewUser, Role, User, UserWithPassword};

/// Fetch a user with credential by (normalized) email.
pub async fn find_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<UserWithPassword>, AuthError> {
    let row = sqlx::query_as::<_, (String, String, String, String, DateTime<Utc>)>(
        "SELECT id::text, email, password_hash, role, created_at FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    row.map(|(id, email, password_hash, role, created_at)| {
        Ok(UserWithPassword {
            user: User {
                id,
                email,
                role: role.parse::<Role>()?,
                created_at,
            },
            password_hash,
        })
    })
    .transpose()
}

/// Insert a user unless the email is taken. Returns whether a row was written.
///
/// Relies on the UNIQUE constraint on `users.email`, so two concurrent calls
/// for the same email write at most one row.
pub async fn insert_user_if_absent(pool: &PgPool, user: &NewUser) -> Result<bool, AuthError> {
    let result = sqlx::query(
        "INSERT INTO users (id, email, password_hash, role, created_at) \
         VALUES ($1, $2, $3, $4, $5) \
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(user.id)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.role.as_str())
    .bind(user.created_at)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() == 1)
}

/// Count total users.
pub async fn user_count(pool: &PgPool) -> Result<i64, AuthError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
