//! # Order Ledger
//!
//! Durable, append-only collection of placed orders, persisted as one JSON
//! array on disk.
//!
//! The ledger file is the only shared mutable resource in the service, and
//! its append is a read-modify-write cycle: two unsynchronized writers can
//! both read the same snapshot and the second flush silently drops the
//! first order. A mutex held across the whole cycle serializes writers, so
//! N concurrent successful appends always persist N records.
//!
//! Every flush goes to a sibling temp file first and is renamed over the
//! ledger path, so concurrent readers see either the old collection or the
//! new one, never half-written bytes. Readers take no lock.
//!
//! A missing or blank file is the empty collection (first boot, nothing
//! ordered yet). Content that exists but does not parse is surfaced as
//! [`AppError::CorruptLedger`] instead of being discarded, so a corrupt
//! file can never be overwritten with fresh history.

use std::{io::ErrorKind, path::PathBuf};

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tokio::{fs, sync::Mutex};

use crate::{
    error::AppError,
    models::{Order, id_matches},
};

const LEDGER: &str = "ledger";

pub struct OrderLedger {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl OrderLedger {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Appends a new order and flushes the whole collection.
    ///
    /// The timestamp is taken at the moment of the call; items pass through
    /// verbatim, the ledger does not validate their contents.
    pub async fn append(&self, user_id: Value, items: Vec<Value>) -> Result<Order, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut orders = self.read_all().await?;

        let order = Order {
            user_id,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            items,
        };

        orders.push(order.clone());
        self.write_all(&orders).await?;

        Ok(order)
    }

    /// Returns the user's orders in insertion order. No orders is an empty
    /// Vec, not an error.
    pub async fn query_by_user(&self, user_id: &str) -> Result<Vec<Order>, AppError> {
        let orders = self.read_all().await?;

        Ok(orders
            .into_iter()
            .filter(|order| id_matches(&order.user_id, user_id))
            .collect())
    }

    async fn read_all(&self) -> Result<Vec<Order>, AppError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(AppError::StorageRead {
                    name: LEDGER,
                    source,
                });
            }
        };

        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&data).map_err(|source| AppError::CorruptLedger { source })
    }

    async fn write_all(&self, orders: &[Order]) -> Result<(), AppError> {
        let data = serde_json::to_string_pretty(orders).map_err(|source| AppError::StorageWrite {
            name: LEDGER,
            source: source.into(),
        })?;

        let tmp = self.path.with_extension("json.tmp");

        fs::write(&tmp, data)
            .await
            .map_err(|source| AppError::StorageWrite {
                name: LEDGER,
                source,
            })?;

        fs::rename(&tmp, &self.path).await.map_err(|source| {
            let _ = std::fs::remove_file(&tmp);

            AppError::StorageWrite {
                name: LEDGER,
                source,
            }
        })
    }
}
