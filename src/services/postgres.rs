use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::models::{CandidateProfile, MoodEntry, MoodType};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// New mood reading to store
#[derive(Debug, Clone)]
pub struct NewMoodEntry<'a> {
    pub user_id: &'a str,
    pub companion_id: &'a str,
    pub session_id: Option<&'a str>,
    pub mood: MoodType,
    pub intensity: u8,
    pub auto_detected: bool,
}

/// PostgreSQL client for the companion pool and mood history
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        if url.is_empty() {
            return Err(PostgresError::InvalidInput("database url is empty".to_string()));
        }

        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
        )
        .await
    }

    /// Load every active companion profile, oldest first
    ///
    /// Insertion order is kept so that tie-breaking in the matcher is stable
    /// across requests.
    pub async fn list_companions(&self) -> Result<Vec<CandidateProfile>, PostgresError> {
        let query = r#"
            SELECT id, name, age, gender, bio, hobbies, personality_traits,
                   likes, dislikes, image_url, location
            FROM companion_profiles
            WHERE is_active = TRUE
            ORDER BY created_at ASC, id ASC
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let profiles = rows
            .iter()
            .map(companion_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} companion profiles", profiles.len());

        Ok(profiles)
    }

    /// Store a mood reading
    pub async fn record_mood(&self, entry: NewMoodEntry<'_>) -> Result<MoodEntry, PostgresError> {
        if entry.intensity == 0 || entry.intensity > 10 {
            return Err(PostgresError::InvalidInput(format!(
                "intensity must be between 1 and 10, got {}",
                entry.intensity
            )));
        }

        let query = r#"
            INSERT INTO mood_entries
                (id, user_id, companion_id, session_id, mood, intensity, auto_detected, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            RETURNING created_at
        "#;

        let id = uuid::Uuid::new_v4();

        let row = sqlx::query(query)
            .bind(id)
            .bind(entry.user_id)
            .bind(entry.companion_id)
            .bind(entry.session_id)
            .bind(entry.mood)
            .bind(entry.intensity as i16)
            .bind(entry.auto_detected)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(
            "Recorded mood {} ({}) for {} with {} (auto: {})",
            entry.mood,
            entry.intensity,
            entry.user_id,
            entry.companion_id,
            entry.auto_detected
        );

        Ok(MoodEntry {
            id,
            user_id: entry.user_id.to_string(),
            companion_id: entry.companion_id.to_string(),
            session_id: entry.session_id.map(str::to_string),
            mood: entry.mood,
            intensity: entry.intensity,
            auto_detected: entry.auto_detected,
            created_at: row.try_get("created_at")?,
        })
    }

    /// Most recent mood entries for a user/companion pair, newest first
    pub async fn recent_moods(
        &self,
        user_id: &str,
        companion_id: &str,
        limit: usize,
    ) -> Result<Vec<MoodEntry>, PostgresError> {
        let query = r#"
            SELECT id, user_id, companion_id, session_id, mood, intensity, auto_detected, created_at
            FROM mood_entries
            WHERE user_id = $1 AND companion_id = $2
            ORDER BY created_at DESC
            LIMIT $3
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .bind(companion_id)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;

        let entries = rows
            .iter()
            .map(mood_entry_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn companion_from_row(row: &PgRow) -> Result<CandidateProfile, sqlx::Error> {
    let age: i16 = row.try_get("age")?;

    Ok(CandidateProfile {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        age: age.clamp(0, u8::MAX as i16) as u8,
        gender: row.try_get("gender")?,
        bio: row.try_get("bio")?,
        hobbies: row.try_get("hobbies")?,
        personality_traits: row.try_get("personality_traits")?,
        likes: row.try_get("likes")?,
        dislikes: row.try_get("dislikes")?,
        image_url: row.try_get("image_url")?,
        location: row.try_get("location")?,
    })
}

fn mood_entry_from_row(row: &PgRow) -> Result<MoodEntry, sqlx::Error> {
    let intensity: i16 = row.try_get("intensity")?;

    Ok(MoodEntry {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        companion_id: row.try_get("companion_id")?,
        session_id: row.try_get("session_id")?,
        mood: row.try_get("mood")?,
        intensity: intensity.clamp(0, 10) as u8,
        auto_detected: row.try_get("auto_detected")?,
        created_at: row.try_get("created_at")?,
    })
}
