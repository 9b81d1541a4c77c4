//! Contact persistence against the document store.
//!
//! The store is modeled as the [`ContactStore`] trait so callers only see
//! `insert`/`list`; [`PgContactStore`] is the Postgres-backed
//! implementation the binary uses.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use thiserror::Error;

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connecting to the store or running a query failed.
    #[error("store operation failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// A contact to be inserted; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub number: String,
}

/// A contact as persisted, with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredContact {
    pub id: i64,
    pub name: String,
    pub number: String,
}

/// Persistence interface for contacts.
#[async_trait]
pub trait ContactStore {
    /// Inserts one contact and returns it with its assigned identifier.
    async fn insert(&self, contact: &NewContact) -> Result<StoredContact, StoreError>;

    /// Returns every stored contact in identifier order.
    async fn list(&self) -> Result<Vec<StoredContact>, StoreError>;
}

/// Postgres-backed contact store.
#[derive(Debug)]
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    /// Connects to the store and makes sure the contacts table exists.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new().max_connections(1).connect(url).await?;
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS contacts (
                 id BIGSERIAL PRIMARY KEY,
                 name TEXT NOT NULL,
                 number TEXT NOT NULL
             )",
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }

    /// Closes the connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn insert(&self, contact: &NewContact) -> Result<StoredContact, StoreError> {
        let row =
            sqlx::query("INSERT INTO contacts (name, number) VALUES ($1, $2) RETURNING id")
                .bind(&contact.name)
                .bind(&contact.number)
                .fetch_one(&self.pool)
                .await?;
        Ok(StoredContact {
            id: row.try_get("id")?,
            name: contact.name.clone(),
            number: contact.number.clone(),
        })
    }

    async fn list(&self) -> Result<Vec<StoredContact>, StoreError> {
        let rows = sqlx::query("SELECT id, name, number FROM contacts ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter()
            .map(|row| {
                Ok(StoredContact {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    number: row.try_get("number")?,
                })
            })
            .collect()
    }
}
