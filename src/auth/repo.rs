use axum::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::auth::repo_types::{NewUser, User};

/// Insert failures the handlers need to tell apart.
#[derive(Debug, Error)]
pub enum CreateUserError {
    /// The unique index on email rejected the row; concurrent registers
    /// for the same address land here instead of creating duplicates.
    #[error("email already registered")]
    DuplicateEmail,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Storage seam for the `users` table. Object-safe so tests can swap in
/// an in-memory implementation.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn create(&self, user: NewUser<'_>) -> Result<User, CreateUserError>;
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, role
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create(&self, user: NewUser<'_>) -> Result<User, CreateUserError> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password, role
            "#,
        )
        .bind(user.name)
        .bind(user.email)
        .bind(user.password)
        .bind(user.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                CreateUserError::DuplicateEmail
            } else {
                CreateUserError::Other(e.into())
            }
        })?;
        Ok(created)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use axum::async_trait;

    use super::{CreateUserError, UserStore};
    use crate::auth::repo_types::{NewUser, User};

    /// In-memory store with the same duplicate-email behavior as the
    /// Postgres one.
    #[derive(Default)]
    pub struct MemoryUserStore {
        rows: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserStore for MemoryUserStore {
        async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|u| u.email == email).cloned())
        }

        async fn create(&self, user: NewUser<'_>) -> Result<User, CreateUserError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|u| u.email == user.email) {
                return Err(CreateUserError::DuplicateEmail);
            }
            let created = User {
                id: rows.len() as i64 + 1,
                name: user.name.to_string(),
                email: user.email.to_string(),
                password: user.password.to_string(),
                role: user.role.to_string(),
            };
            rows.push(created.clone());
            Ok(created)
        }
    }

    /// Store whose every call fails, for the datastore-error paths.
    pub struct FailingUserStore;

    #[async_trait]
    impl UserStore for FailingUserStore {
        async fn find_by_email(&self, _email: &str) -> anyhow::Result<Option<User>> {
            anyhow::bail!("connection refused")
        }

        async fn create(&self, _user: NewUser<'_>) -> Result<User, CreateUserError> {
            Err(CreateUserError::Other(anyhow::anyhow!("connection refused")))
        }
    }
}
