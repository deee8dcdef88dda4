/**
 * PostgreSQL Credential Store
 *
 * `sqlx` implementation of the store ports. Migrations under `migrations/`
 * are embedded at compile time and run by `PgStore::connect`.
 *
 * The `users` column list used for public records never includes
 * `password_hash`; only `find_credentials_by_email` selects it.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::{validation, CardStore, StoreError, UserStore};
use crate::backend::auth::users::{NewUser, User, UserCredentials, UserUpdate};
use crate::backend::cards::model::{Card, NewCard};

const USER_COLUMNS: &str = "id, name, avatar, email, articles";

const CARD_COLUMNS: &str =
    "id, owner, title, description, image, url, source, published_at, created_at";

/// Credential store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and run the embedded migrations
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        tracing::info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self::new(pool))
    }
}

/// Map a write failure, turning unique violations into `Duplicate`
fn map_write_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::duplicate("email");
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        validation::validate_new_user(&user)?;

        let query = format!(
            r#"
            INSERT INTO users (id, name, avatar, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, User>(&query)
            .bind(Uuid::new_v4())
            .bind(&user.name)
            .bind(&user.avatar)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS}, password_hash FROM users WHERE email = $1");

        let credentials = sqlx::query_as::<_, UserCredentials>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(credentials)
    }

    async fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<Option<User>, StoreError> {
        validation::validate_user_update(&update)?;

        let query = format!(
            r#"
            UPDATE users
            SET name = COALESCE($2, name), avatar = COALESCE($3, avatar)
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        );

        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(update.name)
            .bind(update.avatar)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(user)
    }
}

#[async_trait]
impl CardStore for PgStore {
    async fn insert_card(&self, card: NewCard) -> Result<Card, StoreError> {
        validation::validate_new_card(&card)?;

        let query = format!(
            r#"
            INSERT INTO cards (id, owner, title, description, image, url, source, published_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {CARD_COLUMNS}
            "#
        );

        let card = sqlx::query_as::<_, Card>(&query)
            .bind(Uuid::new_v4())
            .bind(card.owner)
            .bind(&card.title)
            .bind(&card.description)
            .bind(&card.image)
            .bind(&card.url)
            .bind(&card.source)
            .bind(card.published_at)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;

        Ok(card)
    }

    async fn find_card_by_id(&self, id: Uuid) -> Result<Option<Card>, StoreError> {
        let query = format!("SELECT {CARD_COLUMNS} FROM cards WHERE id = $1");

        let card = sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(card)
    }

    async fn list_cards_by_owner(&self, owner: Uuid) -> Result<Vec<Card>, StoreError> {
        let query = format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE owner = $1 ORDER BY created_at ASC, id ASC"
        );

        let cards = sqlx::query_as::<_, Card>(&query)
            .bind(owner)
            .fetch_all(&self.pool)
            .await?;

        Ok(cards)
    }

    async fn delete_card(&self, id: Uuid) -> Result<Option<Card>, StoreError> {
        let query = format!("DELETE FROM cards WHERE id = $1 RETURNING {CARD_COLUMNS}");

        let card = sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(card)
    }
}
