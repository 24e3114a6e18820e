//! SQLite-backed store: the players, scores and rounds tables.

use crate::models::{PlayerId, Standing};
use crate::store::{StoreError, StoreResult, TournamentStore};
use rusqlite::{Connection, Transaction};
use std::path::Path;

const SCHEMA: &str = "
    PRAGMA foreign_keys = ON;
    CREATE TABLE IF NOT EXISTS players (
        id     INTEGER PRIMARY KEY AUTOINCREMENT,
        name   TEXT    NOT NULL
    );
    CREATE TABLE IF NOT EXISTS scores (
        player_id INTEGER NOT NULL UNIQUE REFERENCES players (id),
        points    INTEGER NOT NULL DEFAULT 0
    );
    CREATE TABLE IF NOT EXISTS rounds (
        player_id INTEGER NOT NULL UNIQUE REFERENCES players (id),
        matches   INTEGER NOT NULL DEFAULT 0
    );
";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a database file and make sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        log::debug!("Opened tournament database at {}", path.as_ref().display());
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    fn transaction(&mut self) -> StoreResult<Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }
}

fn to_count(value: i64, column: &str) -> StoreResult<u32> {
    u32::try_from(value)
        .map_err(|_| StoreError::Corrupt(format!("{} out of range: {}", column, value)))
}

impl TournamentStore for SqliteStore {
    fn insert_player(&mut self, name: &str) -> StoreResult<PlayerId> {
        let tx = self.transaction()?;
        tx.execute("INSERT INTO players (name) VALUES (?1)", [name])?;
        let id = tx.last_insert_rowid();
        tx.execute("INSERT INTO scores (player_id, points) VALUES (?1, 0)", [id])?;
        tx.execute("INSERT INTO rounds (player_id, matches) VALUES (?1, 0)", [id])?;
        tx.commit()?;
        Ok(id)
    }

    fn zero_scores(&mut self) -> StoreResult<()> {
        let tx = self.transaction()?;
        tx.execute("UPDATE scores SET points = 0 WHERE points != 0", [])?;
        tx.execute("UPDATE rounds SET matches = 0 WHERE matches != 0", [])?;
        tx.commit()?;
        Ok(())
    }

    fn delete_players(&mut self) -> StoreResult<()> {
        let tx = self.transaction()?;
        tx.execute("DELETE FROM scores", [])?;
        tx.execute("DELETE FROM rounds", [])?;
        tx.execute("DELETE FROM players", [])?;
        tx.execute("DELETE FROM sqlite_sequence WHERE name = 'players'", [])?;
        tx.commit()?;
        Ok(())
    }

    fn count_players(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok(to_count(count, "player count")? as usize)
    }

    fn contains_player(&self, id: PlayerId) -> StoreResult<bool> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM players WHERE id = ?1)",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn record_match(&mut self, winner: PlayerId, loser: PlayerId) -> StoreResult<bool> {
        let tx = self.transaction()?;
        let scored = tx.execute(
            "UPDATE scores SET points = points + 1 WHERE player_id = ?1",
            [winner],
        )?;
        let played = tx.execute(
            "UPDATE rounds SET matches = matches + 1 WHERE player_id IN (?1, ?2)",
            [winner, loser],
        )?;
        if scored != 1 || played != 2 {
            // Dropping the transaction rolls both updates back.
            return Ok(false);
        }
        tx.commit()?;
        Ok(true)
    }

    fn standings(&self) -> StoreResult<Vec<Standing>> {
        let mut stmt = self.conn.prepare(
            "SELECT players.id, players.name, scores.points, rounds.matches
             FROM players
             JOIN scores ON scores.player_id = players.id
             JOIN rounds ON rounds.player_id = players.id
             ORDER BY scores.points DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, PlayerId>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })?;

        let mut standings = Vec::new();
        for row in rows {
            let (id, name, points, matches) = row?;
            standings.push(Standing {
                id,
                name,
                wins: to_count(points, "points")?,
                matches: to_count(matches, "matches")?,
            });
        }
        Ok(standings)
    }
}
