use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row};

/// A ride record. Immutable once created; `id` and `created` are assigned
/// by the store at insertion time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    #[serde(rename = "rideId")]
    pub id: i64,
    pub start_lat: f64,
    pub start_long: f64,
    pub end_lat: f64,
    pub end_long: f64,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
    #[serde(with = "created_format")]
    pub created: NaiveDateTime,
}

/// The validated input fields of a ride that has not been persisted yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewRide {
    pub start_lat: f64,
    pub start_long: f64,
    pub end_lat: f64,
    pub end_long: f64,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
}

impl Ride {
    pub fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            start_lat: row.try_get("start_lat")?,
            start_long: row.try_get("start_long")?,
            end_lat: row.try_get("end_lat")?,
            end_long: row.try_get("end_long")?,
            rider_name: row.try_get("rider_name")?,
            driver_name: row.try_get("driver_name")?,
            driver_vehicle: row.try_get("driver_vehicle")?,
            created: row.try_get("created")?,
        })
    }
}

// Clients receive `created` as "YYYY-MM-DD HH:mm:ss".
mod created_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
