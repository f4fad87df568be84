use crate::core::SkillSet;
use crate::models::UserRecord;
use crate::services::store::{validate_user, ProfileStore, StoreError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;

/// Direction of a stored skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_direction", rename_all = "lowercase")]
pub enum SkillDirection {
    Teach,
    Learn,
}

const SELECT_USERS: &str = r#"
    SELECT
        u.id, u.display_name, u.bio, u.is_online, u.rating, u.last_active,
        COALESCE(array_agg(s.skill) FILTER (WHERE s.direction = 'teach'), '{}') AS taught,
        COALESCE(array_agg(s.skill) FILTER (WHERE s.direction = 'learn'), '{}') AS wanted
    FROM users u
    LEFT JOIN user_skills s ON s.user_id = u.id
    WHERE u.is_active = TRUE
"#;

/// PostgreSQL-backed profile directory
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Connect and run pending migrations
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a client from optional settings, falling back to defaults
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL profile store");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
        )
        .await
    }

    async fn replace_skills(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: &str,
        skills: &SkillSet,
        direction: SkillDirection,
    ) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM user_skills WHERE user_id = $1 AND direction = $2")
            .bind(user_id)
            .bind(direction)
            .execute(&mut **tx)
            .await?;

        if skills.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r#"
            INSERT INTO user_skills (user_id, skill, direction)
            SELECT $1, skill, $3 FROM UNNEST($2::text[]) AS skill
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(skills.to_vec())
        .bind(direction)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}

fn row_to_user(row: &PgRow) -> Result<UserRecord, sqlx::Error> {
    let taught: Vec<String> = row.try_get("taught")?;
    let wanted: Vec<String> = row.try_get("wanted")?;

    Ok(UserRecord {
        id: row.try_get("id")?,
        display_name: row.try_get("display_name")?,
        bio: row.try_get("bio")?,
        taught: taught.into(),
        wanted: wanted.into(),
        is_online: row.try_get("is_online")?,
        rating: row.try_get("rating")?,
        last_active: row.try_get("last_active")?,
    })
}

#[async_trait]
impl ProfileStore for PostgresClient {
    async fn get_user(&self, user_id: &str) -> Result<UserRecord, StoreError> {
        let query = format!("{} AND u.id = $1 GROUP BY u.id", SELECT_USERS);

        let row = sqlx::query(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("user {}", user_id)))?;

        Ok(row_to_user(&row)?)
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        let query = format!("{} GROUP BY u.id", SELECT_USERS);

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        let users = rows
            .iter()
            .map(row_to_user)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} users from PostgreSQL", users.len());

        Ok(users)
    }

    /// Profile row and both skill lists are written in one transaction.
    async fn upsert_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        validate_user(user)?;

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO users (id, display_name, bio, is_online, rating, last_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id)
            DO UPDATE SET
                display_name = EXCLUDED.display_name,
                bio = EXCLUDED.bio,
                is_online = EXCLUDED.is_online,
                rating = EXCLUDED.rating,
                last_active = EXCLUDED.last_active,
                is_active = TRUE,
                updated_at = NOW()
            "#,
        )
        .bind(&user.id)
        .bind(&user.display_name)
        .bind(&user.bio)
        .bind(user.is_online)
        .bind(user.rating)
        .bind(user.last_active)
        .execute(&mut *tx)
        .await?;

        Self::replace_skills(&mut tx, &user.id, &user.taught, SkillDirection::Teach).await?;
        Self::replace_skills(&mut tx, &user.id, &user.wanted, SkillDirection::Learn).await?;

        tx.commit().await?;

        tracing::debug!(
            "Upserted user {} ({} taught, {} wanted)",
            user.id,
            user.taught.len(),
            user.wanted.len()
        );

        Ok(())
    }

    async fn set_online(&self, user_id: &str, is_online: bool) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET is_online = $2, last_active = NOW(), updated_at = NOW()
            WHERE id = $1 AND is_active = TRUE
            "#,
        )
        .bind(user_id)
        .bind(is_online)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("user {}", user_id)));
        }

        Ok(())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
