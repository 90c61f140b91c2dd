//! Payload command implementation.
//!
//! Validates a moving request the same way the backend does and prints the
//! JSON body that would be posted, with the estimated price filled in.

use anyhow::{Context, Result};
use movequote_lib::prelude::*;
use tracing::warn;

/// Validate the moving details and print the submission payload.
pub(crate) fn payload(estimator: &Estimator, details: &MovingDetails, quiet: bool) -> Result<()> {
    let now = chrono::Local::now().naive_local();
    let submission = estimator
        .price_details(details, now)
        .inspect_err(|err| warn!(%err, "moving details rejected"))
        .context("Cannot submit moving details")?;

    println!("{}", serde_json::to_string_pretty(&submission)?);

    if !quiet {
        eprintln!(
            "Estimated Price: {}",
            estimator.format_price(submission.price)
        );
    }
    Ok(())
}
