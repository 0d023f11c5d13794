use std::sync::{Mutex, MutexGuard};

use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};

use crate::model::{
    error::ApiError,
    user::{NewUser, User},
};

pub struct Db {
    connection: Mutex<Connection>,
}

impl Db {
    /// Opens an in-memory store, or a file-backed one when `path` is given.
    pub fn open(path: Option<&str>) -> Result<Db, rusqlite::Error> {
        let connection = match path {
            Some(path) => {
                info!("opening database at {}", path);
                Connection::open(path)?
            }
            None => {
                info!("opening in-memory database");
                Connection::open_in_memory()?
            }
        };

        connection.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL
            )",
            (),
        )?;

        Ok(Db {
            connection: Mutex::new(connection),
        })
    }

    pub fn new() -> Result<Db, rusqlite::Error> {
        Self::open(None)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.connection.lock().map_err(|_| {
            error!("database lock poisoned");
            ApiError::InternalError(String::from("Internal Error"))
        })
    }

    pub fn find_all_users(&self) -> Result<Vec<User>, ApiError> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare("SELECT id, name, email FROM users ORDER BY id")?;
        let users = stmt
            .query_map((), |row| {
                Ok(User::new(
                    row.get::<usize, i64>(0)?,
                    row.get::<usize, String>(1)?,
                    row.get::<usize, String>(2)?,
                ))
            })?
            .collect::<Result<Vec<User>, rusqlite::Error>>()?;

        Ok(users)
    }

    pub fn find_user_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        let conn = self.lock()?;
        Self::find_user_by_id_internal(&conn, id)
    }

    pub fn insert_user(&self, new_user: NewUser) -> Result<User, ApiError> {
        let conn = self.lock()?;

        conn.execute(
            "INSERT INTO users (name, email) VALUES (?1, ?2)",
            params![new_user.name, new_user.email],
        )?;

        Ok(User::new(
            conn.last_insert_rowid(),
            new_user.name,
            new_user.email,
        ))
    }

    /// Returns `None` when no row has the given id.
    pub fn update_user(&self, id: i64, new_user: NewUser) -> Result<Option<User>, ApiError> {
        let conn = self.lock()?;

        let changed = conn.execute(
            "UPDATE users SET name = ?1, email = ?2 WHERE id = ?3",
            params![new_user.name, new_user.email, id],
        )?;
        if changed == 0 {
            return Ok(None);
        }

        Self::find_user_by_id_internal(&conn, id)
    }

    /// Returns whether a row was removed.
    pub fn delete_user(&self, id: i64) -> Result<bool, ApiError> {
        let conn = self.lock()?;
        let changed = conn.execute("DELETE FROM users WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }

    fn find_user_by_id_internal(
        conn: &MutexGuard<'_, Connection>,
        id: i64,
    ) -> Result<Option<User>, ApiError> {
        let user = conn
            .query_row(
                "SELECT id, name, email FROM users WHERE id = ?1",
                params![id],
                |row| {
                    Ok(User::new(
                        row.get::<usize, i64>(0)?,
                        row.get::<usize, String>(1)?,
                        row.get::<usize, String>(2)?,
                    ))
                },
            )
            .optional()?;

        Ok(user)
    }
}
