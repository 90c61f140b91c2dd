//! Shared helpers for the movequote CLI.

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use movequote_lib::prelude::*;
use movequote_lib::MOVING_DATE_FORMAT;
use std::path::Path;
use tracing::info;

/// Builds the estimator from the standard tariff or a tariff file.
pub(crate) fn load_estimator(tariff: Option<&Path>) -> Result<Estimator> {
    let Some(path) = tariff else {
        return Ok(Estimator::global().clone());
    };

    let tariff = Tariff::from_path(path)
        .with_context(|| format!("Failed to load tariff from {}", path.display()))?;
    info!(
        path = %path.display(),
        base_rate_per_km = tariff.base_rate_per_km,
        packing_fee = tariff.packing_fee,
        "loaded tariff"
    );
    Ok(Estimator::new(tariff))
}

/// Parses a moving date as "YYYY-MM-DD HH:MM:SS" or a bare "YYYY-MM-DD" (midnight).
pub(crate) fn parse_moving_date(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(date_time) = NaiveDateTime::parse_from_str(s, MOVING_DATE_FORMAT) {
        return Ok(date_time);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN));
    }
    bail!("Invalid moving date '{s}', expected YYYY-MM-DD or \"YYYY-MM-DD HH:MM:SS\"")
}
