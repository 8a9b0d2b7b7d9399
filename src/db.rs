//! PostgreSQL backend for the discount ledger.

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use sqlx::Row;
use tracing::{debug, info};

use crate::discount::{DiscountRecord, Expiry};
use crate::errors::LedgerError;
use crate::event::UserId;
use crate::ledger::{LedgerMap, LedgerStore};

/// Initialize the database schema
pub async fn init_database_schema(pool: &PgPool) -> Result<(), LedgerError> {
    info!("Initializing database schema...");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS discount_codes (
            user_id TEXT PRIMARY KEY,
            code TEXT NOT NULL,
            expiration TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully");
    Ok(())
}

/// Ledger stored in the `discount_codes` table
///
/// `save` rewrites the table inside one transaction, so readers see either
/// the previous or the new mapping.
#[derive(Debug, Clone)]
pub struct PgLedgerStore {
    pool: PgPool,
}

impl PgLedgerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and make sure the schema exists
    pub async fn connect(database_url: &str) -> Result<Self, LedgerError> {
        let pool = PgPool::connect(database_url).await?;
        init_database_schema(&pool).await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl LedgerStore for PgLedgerStore {
    async fn load(&self) -> Result<LedgerMap, LedgerError> {
        let rows = sqlx::query("SELECT user_id, code, expiration FROM discount_codes")
            .fetch_all(&self.pool)
            .await?;

        let mut ledger = LedgerMap::new();
        for row in rows {
            let user_id: String = row.try_get("user_id")?;
            let expiration: String = row.try_get("expiration")?;
            let record = DiscountRecord {
                code: row.try_get("code")?,
                expiration: Expiry::parse(&expiration),
            };
            ledger.insert(UserId::from(user_id), record);
        }

        debug!(records = ledger.len(), "Ledger loaded from database");
        Ok(ledger)
    }

    async fn save(&self, ledger: &LedgerMap) -> Result<(), LedgerError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM discount_codes")
            .execute(&mut *tx)
            .await?;

        for (user_id, record) in ledger {
            sqlx::query(
                "INSERT INTO discount_codes (user_id, code, expiration) VALUES ($1, $2, $3)",
            )
            .bind(user_id.as_str())
            .bind(&record.code)
            .bind(record.expiration.stored())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        debug!(records = ledger.len(), "Ledger written to database");
        Ok(())
    }
}
