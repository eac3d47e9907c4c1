//! The two indicator calls made at startup.
//!
//! Call A lists every indicator and leaves the payload uninterpreted. Call B
//! fetches the UF series and reads the current value out of `serie[0].valor`.

use serde_json::Value;
use tracing::debug;

use crate::config::Endpoints;
use crate::error::{IndicatorError, PayloadShapeError};
use crate::net::{HttpJsonClient, Transport};

/// Field holding the ordered entries of an indicator series.
pub const SERIES_FIELD: &str = "serie";

/// Numeric field of a series entry.
pub const VALUE_FIELD: &str = "valor";

/// Call A: fetch the "all indicators" endpoint.
pub async fn list_indicators<T: Transport>(
    client: &HttpJsonClient<T>,
    endpoints: &Endpoints,
) -> Result<Value, IndicatorError> {
    Ok(client.fetch_json(&endpoints.all).await?)
}

/// Call B: fetch the UF series and extract its current value.
pub async fn current_uf<T: Transport>(
    client: &HttpJsonClient<T>,
    endpoints: &Endpoints,
) -> Result<f64, IndicatorError> {
    let data = client.fetch_json(&endpoints.uf).await?;
    debug!(payload = %data, "UF payload");
    Ok(extract_first_value(&data)?)
}

/// Read `serie[0].valor` as a number. Entry 0 is the current value.
pub fn extract_first_value(json: &Value) -> Result<f64, PayloadShapeError> {
    let series = json
        .get(SERIES_FIELD)
        .and_then(Value::as_array)
        .ok_or(PayloadShapeError::MissingSeries)?;
    let first = series.first().ok_or(PayloadShapeError::EmptySeries)?;
    let value = first
        .get(VALUE_FIELD)
        .ok_or(PayloadShapeError::MissingValue)?;
    value.as_f64().ok_or(PayloadShapeError::NonNumericValue)
}

/// Line reported after a successful Call B.
pub fn uf_message(value: f64) -> String {
    format!("La UF actual es: {value}")
}
