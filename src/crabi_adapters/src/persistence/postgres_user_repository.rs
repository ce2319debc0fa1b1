use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use crabi_core::{Password, User, UserRepository, UserRepositoryError};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, migrate::MigrateError};

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserRepository { pool }
    }

    /// Apply the embedded schema migrations.
    pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations").run(pool).await
    }

    async fn fetch_row(&self, email: &str) -> Result<Option<UserRow>, UserRepositoryError> {
        sqlx::query_as::<_, UserRow>(
            r#"
                SELECT email, first_name, last_name, password_hash
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserRepositoryError::UnexpectedError(e.to_string()))
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    email: String,
    first_name: String,
    last_name: String,
    password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.first_name, row.last_name, row.email, row.password_hash)
    }
}

#[async_trait::async_trait]
impl UserRepository for PostgresUserRepository {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn save_user(&self, user: User) -> Result<(), UserRepositoryError> {
        let password_hash = compute_password_hash(user.password().clone())
            .await
            .map_err(UserRepositoryError::UnexpectedError)?;

        sqlx::query(
            r#"
                INSERT INTO users (email, first_name, last_name, password_hash)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.email())
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(password_hash.expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserRepositoryError::UserAlreadyExists;
                }
            }
            UserRepositoryError::UnexpectedError(e.to_string())
        })?;

        Ok(())
    }

    /// The returned user carries the stored password hash, not the original password.
    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.fetch_row(email).await?.map(User::from))
    }

    #[tracing::instrument(name = "Validating user credentials in PostgreSQL", skip_all)]
    async fn get_user_by_email_and_password(
        &self,
        email: &str,
        password: &Password,
    ) -> Result<Option<User>, UserRepositoryError> {
        let Some(row) = self.fetch_row(email).await? else {
            return Ok(None);
        };

        let matches = verify_password_hash(Secret::new(row.password_hash.clone()), password.clone())
            .await
            .map_err(UserRepositoryError::UnexpectedError)?;

        Ok(matches.then(|| User::from(row)))
    }
}

fn hasher() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

/// Returns `Ok(false)` on a mismatch; `Err` only when the stored hash is unusable.
#[tracing::instrument(name = "Verify password hash", skip_all)]
async fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Password,
) -> Result<bool, String> {
    let current_span: tracing::Span = tracing::Span::current();
    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(expected_password_hash.expose_secret())
                    .map_err(|e| e.to_string())?;

            match hasher()?.verify_password(
                password_candidate.as_ref().expose_secret().as_bytes(),
                &expected_password_hash,
            ) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(e) => Err(e.to_string()),
            }
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
async fn compute_password_hash(password: Password) -> Result<Secret<String>, String> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            hasher()?
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| Secret::new(h.to_string()))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}
