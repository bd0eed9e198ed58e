//! Profile Store
//!
//! SQLite-backed persistence port for profiles and team recommendations.
//! The matching core never touches this directly: commands load snapshots
//! here and hand plain values to the pure functions.
//!
//! - Connection pooling via r2d2 for concurrent access
//! - WAL mode with production pragmas
//! - Profiles stored as JSON documents, unique by handle

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, OptionalExtension, params};

use crate::types::{
    ForgeError, Handle, Profile, ProfileId, Recommendation, Result, ResultExt, log_filter_warn,
};

/// Shared store handle for async contexts.
pub type SharedStore = Arc<ProfileStore>;

const SCHEMA: &str = include_str!("schema.sql");

/// Connection pool configuration
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum number of connections in the pool
    pub max_size: u32,
    /// Timeout for acquiring a connection (seconds)
    pub connection_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_size: 8,
            connection_timeout_secs: 30,
        }
    }
}

/// Thread-safe profile store with connection pooling
pub struct ProfileStore {
    pool: Pool<SqliteConnectionManager>,
}

impl ProfileStore {
    /// Open the store at the specified path and initialize the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, PoolConfig::default())
    }

    /// Open with custom pool configuration.
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: PoolConfig) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let manager =
            SqliteConnectionManager::file(path.as_ref()).with_init(Self::configure_connection);

        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(std::time::Duration::from_secs(
                config.connection_timeout_secs,
            ))
            .build(manager)
            .map_err(|e| ForgeError::Storage(format!("failed to create connection pool: {}", e)))?;

        let store = Self { pool };
        store.initialize()?;
        Ok(store)
    }

    /// In-memory store for tests and temporary use.
    pub fn open_in_memory() -> Result<Self> {
        let manager = SqliteConnectionManager::memory().with_init(|conn| {
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
            Ok(())
        });

        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .map_err(|e| ForgeError::Storage(format!("failed to create in-memory pool: {}", e)))?;

        let store = Self { pool };
        store.initialize()?;
        Ok(store)
    }

    /// Configure a new connection with production-ready settings.
    fn configure_connection(conn: &mut Connection) -> std::result::Result<(), rusqlite::Error> {
        conn.execute_batch(
            r#"
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
            PRAGMA busy_timeout = 5000;
            "#,
        )?;
        Ok(())
    }

    fn conn(&self) -> Result<PooledConnection<SqliteConnectionManager>> {
        self.pool
            .get()
            .map_err(|e| ForgeError::Storage(format!("failed to acquire connection: {}", e)))
    }

    fn initialize(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute_batch(SCHEMA)
            .context("failed to initialize schema")?;
        Ok(())
    }

    // =========================================================================
    // Profiles
    // =========================================================================

    /// Insert or update a profile, keyed by handle.
    ///
    /// Re-saving under an existing handle keeps the original id and
    /// created_at, replacing the document body.
    pub fn save_profile(&self, profile: &Profile) -> Result<()> {
        let conn = self.conn()?;
        let data = serde_json::to_string(profile)?;
        let now = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO profiles (id, handle, data, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)
             ON CONFLICT(handle) DO UPDATE SET data = ?3, updated_at = ?4",
            params![profile.id.as_str(), profile.handle.as_str(), data, now],
        )?;
        Ok(())
    }

    /// Load a profile by handle.
    pub fn load_profile(&self, handle: &Handle) -> Result<Option<Profile>> {
        let conn = self.conn()?;
        let data: Option<String> = conn
            .query_row(
                "SELECT data FROM profiles WHERE handle = ?1",
                params![handle.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        match data {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Load a profile by handle, failing when absent.
    pub fn require_profile(&self, handle: &Handle) -> Result<Profile> {
        self.load_profile(handle)?
            .ok_or_else(|| ForgeError::NotFound(format!("profile '{}'", handle)))
    }

    /// All stored profiles, ordered by handle.
    ///
    /// A corrupt document is skipped with a warning rather than failing the
    /// whole listing.
    pub fn list_profiles(&self) -> Result<Vec<Profile>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT data FROM profiles ORDER BY handle")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut profiles = Vec::new();
        for row in rows {
            let json = row?;
            if let Some(profile) = log_filter_warn(
                serde_json::from_str::<Profile>(&json),
                "skipping corrupt profile document",
            ) {
                profiles.push(profile);
            }
        }
        Ok(profiles)
    }

    /// All profiles except the given one; the candidate pool for matching.
    pub fn candidate_pool(&self, exclude: &ProfileId) -> Result<Vec<Profile>> {
        Ok(self
            .list_profiles()?
            .into_iter()
            .filter(|p| &p.id != exclude)
            .collect())
    }

    // =========================================================================
    // Recommendations
    // =========================================================================

    /// Persist one team-recommendation record.
    pub fn save_recommendation(&self, rec: &Recommendation) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO recommendations
             (id, reference_id, required_skills, selected_ids, reasoning, total_score, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                rec.id,
                rec.reference_id.as_str(),
                serde_json::to_string(&rec.required_skills)?,
                serde_json::to_string(&rec.selected_ids)?,
                rec.reasoning,
                rec.total_score,
                rec.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Most recent recommendations for a reference profile.
    pub fn recommendations_for(
        &self,
        reference: &ProfileId,
        limit: usize,
    ) -> Result<Vec<Recommendation>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, reference_id, required_skills, selected_ids, reasoning, total_score, created_at
             FROM recommendations WHERE reference_id = ?1
             ORDER BY created_at DESC LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![reference.as_str(), limit as i64], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, f64>(5)?,
                row.get::<_, String>(6)?,
            ))
        })?;

        let mut recommendations = Vec::new();
        for row in rows {
            let (id, reference_id, skills, selected, reasoning, total_score, created_at) = row?;
            recommendations.push(Recommendation {
                id,
                reference_id: ProfileId::new(reference_id),
                required_skills: serde_json::from_str(&skills)?,
                selected_ids: serde_json::from_str(&selected)?,
                reasoning,
                total_score,
                created_at: created_at.parse().map_err(|e| {
                    ForgeError::Storage(format!("invalid timestamp in recommendation: {}", e))
                })?,
            });
        }
        Ok(recommendations)
    }
}
