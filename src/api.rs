use async_trait::async_trait;

use crate::entities::{NewRide, Ride};
use crate::error::Error;

#[async_trait]
pub trait RideAPI {
    /// Persists a new ride and returns its store-assigned id.
    async fn create_ride(&self, ride: NewRide) -> Result<i64, Error>;

    /// Returns the matching ride as a collection; empty when the id is unknown.
    async fn find_ride(&self, id: i64) -> Result<Vec<Ride>, Error>;

    /// Returns up to `limit` rides starting at `offset`, in insertion order.
    async fn list_rides(&self, limit: u32, offset: u64) -> Result<Vec<Ride>, Error>;
}

pub trait API: RideAPI {}
