//! `SQLite` implementation of [`GameStore`].

use std::collections::BTreeMap;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use goty_app::ports::GameStore;
use goty_domain::error::GotyError;
use goty_domain::game::Game;
use goty_domain::id::GameId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Game);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Game> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("nombre")?;
        let votes: i64 = row.try_get("votos")?;
        let extra_json: String = row.try_get("extra")?;

        let votes = u64::try_from(votes).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let extra: BTreeMap<String, serde_json::Value> = serde_json::from_str(&extra_json)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Game {
            id: GameId::from(id),
            name,
            votes,
            extra,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO games (id, nombre, votos, extra)
    VALUES (?, ?, ?, ?)
";

const SELECT_ALL: &str = "SELECT * FROM games";
const SELECT_BY_ID: &str = "SELECT * FROM games WHERE id = ?";
const UPDATE_VOTES: &str = "UPDATE games SET votos = ? WHERE id = ?";

/// `SQLite`-backed game store.
pub struct SqliteGameStore {
    pool: SqlitePool,
}

impl SqliteGameStore {
    /// Create a new store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new game entry.
    ///
    /// Not part of the [`GameStore`] port: entries are provisioned outside
    /// the HTTP surface, and this method is that channel.
    ///
    /// # Errors
    ///
    /// Returns [`GotyError::Storage`] when serialization or the insert fails.
    pub async fn insert(&self, game: &Game) -> Result<(), GotyError> {
        let votes = i64::try_from(game.votes).map_err(StorageError::from)?;
        let extra_json = serde_json::to_string(&game.extra).map_err(StorageError::from)?;

        sqlx::query(INSERT)
            .bind(game.id.as_str())
            .bind(&game.name)
            .bind(votes)
            .bind(&extra_json)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}

impl GameStore for SqliteGameStore {
    async fn get_all(&self) -> Result<Vec<Game>, GotyError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn get_by_id(&self, id: &GameId) -> Result<Option<Game>, GotyError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn set_votes(&self, id: &GameId, votes: u64) -> Result<(), GotyError> {
        let votes = i64::try_from(votes).map_err(StorageError::from)?;

        sqlx::query(UPDATE_VOTES)
            .bind(votes)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}
