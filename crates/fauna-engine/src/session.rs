//! Transactional session over one record store connection
//!
//! A `Session` owns the connection for its lifetime; dropping it releases
//! the connection on every exit path. Work runs through
//! [`Session::transaction`], which commits when the closure succeeds and
//! rolls back before returning its error otherwise. A panic inside the
//! closure drops the open transaction, which rolls back as well.

#![allow(clippy::result_large_err)]

use crate::accessor::EntityAccessor;
use fauna_core::{Animal, AnimalId, Layout, Subtype};
use fauna_store::errors::{from_rusqlite, Result};
use fauna_store::{db, StoreConfig};
use rusqlite::{Connection, Transaction, TransactionBehavior};

pub struct Session {
    conn: Connection,
    accessor: EntityAccessor,
}

impl Session {
    /// Connect, configure and migrate the store described by `config`
    ///
    /// # Errors
    /// Any storage failure while opening or migrating, including a layout
    /// mismatch with an existing database.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let conn = db::connect(config)?;
        tracing::debug!(layout = %config.layout, "session opened");
        Ok(Self {
            conn,
            accessor: EntityAccessor::new(config.layout),
        })
    }

    pub fn layout(&self) -> Layout {
        self.accessor.layout()
    }

    /// Raw connection, for inspection outside a transaction
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Run `work` inside one exclusive transaction
    ///
    /// # Errors
    /// The closure's error, after the transaction has been rolled back, or
    /// a storage failure from begin/commit.
    pub fn transaction<T, F>(&mut self, label: &str, work: F) -> Result<T>
    where
        F: FnOnce(&mut UnitOfWork<'_>) -> Result<T>,
    {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Exclusive)
            .map_err(from_rusqlite)?;
        tracing::debug!(label, "beginning transaction");

        let mut uow = UnitOfWork {
            tx,
            accessor: &self.accessor,
        };

        match work(&mut uow) {
            Ok(value) => {
                uow.tx.commit().map_err(from_rusqlite)?;
                tracing::debug!(label, "transaction committed");
                Ok(value)
            }
            Err(err) => {
                tracing::error!(label, err_code = err.code(), "transaction failed, rolling back");
                if let Err(rollback_err) = uow.tx.rollback() {
                    tracing::error!(label, error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }

    /// Release the connection, reporting any close failure
    ///
    /// # Errors
    /// `Storage` if SQLite refuses to close the connection.
    pub fn close(self) -> Result<()> {
        tracing::debug!(layout = %self.layout(), "closing session");
        self.conn.close().map_err(|(_, e)| from_rusqlite(e))
    }
}

/// Operations available inside one transaction
pub struct UnitOfWork<'s> {
    tx: Transaction<'s>,
    accessor: &'s EntityAccessor,
}

impl UnitOfWork<'_> {
    pub fn save(&mut self, animal: &mut Animal) -> Result<AnimalId> {
        self.accessor.save(&mut self.tx, animal)
    }

    /// Save every animal in order; stops at the first failure
    pub fn save_all(&mut self, animals: &mut [Animal]) -> Result<Vec<AnimalId>> {
        animals.iter_mut().map(|animal| self.save(animal)).collect()
    }

    pub fn query_all(&self) -> Result<Vec<Animal>> {
        self.accessor.query_all(&self.tx)
    }

    pub fn query_by_subtype<T: Subtype>(&self) -> Result<Vec<T>> {
        self.accessor.query_by_subtype::<T>(&self.tx)
    }

    /// Connection bound to this transaction
    pub fn connection(&self) -> &Connection {
        &self.tx
    }
}
