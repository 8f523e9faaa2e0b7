use axum::extract::{Extension, Json, Path, Query};
use serde::Deserialize;
use serde_json::Value;

use crate::entities::{NewRide, Ride};
use crate::error::{rides_not_found_error, validation_error, Error};
use crate::server::DynAPI;

const PAGE_SIZE: u32 = 10;

const START_COORDS_MESSAGE: &str =
    "Start latitude and longitude must be between -90 to 90 and -180 to 180 degrees respectively";
const END_COORDS_MESSAGE: &str =
    "End latitude and longitude must be between -90 to 90 and -180 to 180 degrees respectively";
const RIDER_NAME_MESSAGE: &str = "Rider name must be a non empty string";
const DRIVER_NAME_MESSAGE: &str = "Driver name must be a non empty string";
const DRIVER_VEHICLE_MESSAGE: &str = "Driver Vehicle must be a non empty string";

// Fields come in as raw JSON values so that missing or mistyped input falls
// through to validation instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateParams {
    #[serde(default)]
    start_lat: Value,
    #[serde(default)]
    start_long: Value,
    #[serde(default)]
    end_lat: Value,
    #[serde(default)]
    end_long: Value,
    #[serde(default)]
    rider_name: Value,
    #[serde(default)]
    driver_name: Value,
    #[serde(default)]
    driver_vehicle: Value,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    page: Option<String>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Vec<Ride>>, Error> {
    let new_ride = validate(params)?;

    let id = api.create_ride(new_ride).await?;
    let rides = api.find_ride(id).await?;

    Ok(rides.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Ride>>, Error> {
    let rides = api.find_ride(id).await?;

    if rides.is_empty() {
        return Err(rides_not_found_error());
    }

    Ok(rides.into())
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Ride>>, Error> {
    let page = parse_page(params.page.as_deref());
    // Widened so an arbitrarily large page number lands past the end of the
    // data instead of overflowing.
    let offset = (page as u64 - 1) * PAGE_SIZE as u64;

    let rides = api.list_rides(PAGE_SIZE, offset).await?;

    if rides.is_empty() {
        return Err(rides_not_found_error());
    }

    Ok(rides.into())
}

// Checks run in a fixed order and the first failure wins.
fn validate(params: CreateParams) -> Result<NewRide, Error> {
    let (start_lat, start_long) = coordinates(&params.start_lat, &params.start_long)
        .ok_or_else(|| validation_error(START_COORDS_MESSAGE))?;

    let (end_lat, end_long) = coordinates(&params.end_lat, &params.end_long)
        .ok_or_else(|| validation_error(END_COORDS_MESSAGE))?;

    let rider_name =
        non_empty(&params.rider_name).ok_or_else(|| validation_error(RIDER_NAME_MESSAGE))?;

    let driver_name =
        non_empty(&params.driver_name).ok_or_else(|| validation_error(DRIVER_NAME_MESSAGE))?;

    let driver_vehicle =
        non_empty(&params.driver_vehicle).ok_or_else(|| validation_error(DRIVER_VEHICLE_MESSAGE))?;

    Ok(NewRide {
        start_lat,
        start_long,
        end_lat,
        end_long,
        rider_name,
        driver_name,
        driver_vehicle,
    })
}

fn coordinates(lat: &Value, long: &Value) -> Option<(f64, f64)> {
    let lat = lat.as_f64()?;
    let long = long.as_f64()?;

    let in_range = (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&long);
    in_range.then_some((lat, long))
}

fn non_empty(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

// Anything that does not parse as a positive integer means the first page.
fn parse_page(input: Option<&str>) -> u32 {
    input
        .and_then(|raw| raw.parse().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}
