use async_trait::async_trait;
use chrono::Utc;
use sqlx::{sqlite::SqlitePoolOptions, Executor, Pool, Sqlite};
use tokio::sync::OnceCell;

use crate::api::{RideAPI, API};
use crate::entities::{NewRide, Ride};
use crate::error::Error;

type Database = Sqlite;

/// Persistence layer for ride records, backed by a SQLite database.
///
/// The connection pool is created lazily on first use and reused for the
/// lifetime of the store; repeated initialization is a no-op.
pub struct RideStore {
    db_uri: String,
    pool: OnceCell<Pool<Database>>,
}

impl RideStore {
    pub fn new(db_uri: impl Into<String>) -> Self {
        Self {
            db_uri: db_uri.into(),
            pool: OnceCell::new(),
        }
    }

    // An in-memory SQLite database lives and dies with its connection, so
    // the pool is capped at one.
    async fn db(&self) -> Result<&Pool<Database>, Error> {
        self.pool
            .get_or_try_init(|| async {
                let pool = SqlitePoolOptions::new()
                    .max_connections(1)
                    .connect(&self.db_uri)
                    .await?;

                pool.execute(
                    "CREATE TABLE IF NOT EXISTS rides (
                        id INTEGER PRIMARY KEY AUTOINCREMENT,
                        start_lat REAL NOT NULL,
                        start_long REAL NOT NULL,
                        end_lat REAL NOT NULL,
                        end_long REAL NOT NULL,
                        rider_name TEXT NOT NULL,
                        driver_name TEXT NOT NULL,
                        driver_vehicle TEXT NOT NULL,
                        created TEXT NOT NULL
                    )",
                )
                .await?;

                Ok(pool)
            })
            .await
    }
}

#[async_trait]
impl RideAPI for RideStore {
    #[tracing::instrument(skip(self))]
    async fn create_ride(&self, ride: NewRide) -> Result<i64, Error> {
        let pool = self.db().await?;

        let created = Utc::now().naive_utc();

        let result = pool
            .execute(
                sqlx::query(
                    "INSERT INTO rides \
                    (start_lat, start_long, end_lat, end_long, rider_name, driver_name, driver_vehicle, created) \
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
                )
                .bind(ride.start_lat)
                .bind(ride.start_long)
                .bind(ride.end_lat)
                .bind(ride.end_long)
                .bind(&ride.rider_name)
                .bind(&ride.driver_name)
                .bind(&ride.driver_vehicle)
                .bind(created),
            )
            .await?;

        Ok(result.last_insert_rowid())
    }

    #[tracing::instrument(skip(self))]
    async fn find_ride(&self, id: i64) -> Result<Vec<Ride>, Error> {
        let pool = self.db().await?;

        let rows = pool
            .fetch_all(sqlx::query("SELECT * FROM rides WHERE id = $1").bind(id))
            .await?;

        rows.iter()
            .map(|row| Ride::from_row(row).map_err(Error::from))
            .collect()
    }

    #[tracing::instrument(skip(self))]
    async fn list_rides(&self, limit: u32, offset: u64) -> Result<Vec<Ride>, Error> {
        let pool = self.db().await?;

        let rows = pool
            .fetch_all(
                sqlx::query("SELECT * FROM rides ORDER BY id LIMIT $1 OFFSET $2")
                    .bind(limit as i64)
                    .bind(offset as i64),
            )
            .await?;

        rows.iter()
            .map(|row| Ride::from_row(row).map_err(Error::from))
            .collect()
    }
}

impl API for RideStore {}
