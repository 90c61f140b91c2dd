//! Quote and distance command implementations.

use anyhow::Result;
use movequote_lib::prelude::*;
use serde_json::json;

/// Estimate a move and print the breakdown or JSON.
pub(crate) fn quote(estimator: &Estimator, request: QuoteRequest, as_json: bool) -> Result<()> {
    let quote = estimator.estimate(&request);

    if as_json {
        let output = json!({
            "request": request,
            "quote": quote,
            "currency": estimator.tariff().currency,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("From:      {}", request.origin);
    println!("To:        {}", request.destination);
    println!("Home Size: {}", request.size.label());
    println!(
        "Packing:   {}",
        if request.packing_service { "yes" } else { "no" }
    );
    println!("{}", "-".repeat(40));
    println!("{}", estimator.format_quote(&quote));
    Ok(())
}

/// Print the great-circle distance between two points.
pub(crate) fn distance(estimator: &Estimator, from: &GeoPoint, to: &GeoPoint) -> Result<()> {
    let km = estimator.distance_km(from, to);
    println!("{}", Estimator::format_distance(km));
    Ok(())
}
