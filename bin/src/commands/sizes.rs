//! Size and tariff listing.

use anyhow::Result;
use movequote_lib::prelude::*;

/// List home sizes with the multipliers and per-km rate of the active tariff.
pub(crate) fn list_sizes(estimator: &Estimator) -> Result<()> {
    let tariff = estimator.tariff();

    println!("{:<15} {:<15} {:>10} {:>14}", "SIZE", "VALUE", "FACTOR", "PER KM");
    println!("{}", "-".repeat(57));

    for size in MoveSize::all() {
        let multiplier = tariff.multiplier(*size);
        println!(
            "{:<15} {:<15} {:>10.2} {:>14}",
            size.label(),
            size.as_str(),
            multiplier,
            Estimator::format_amount(tariff.base_rate_per_km * multiplier),
        );
    }

    println!(
        "\nPacking service: {}",
        estimator.format_price(tariff.packing_fee)
    );
    Ok(())
}

/// Print the active tariff as JSON.
pub(crate) fn show_tariff(estimator: &Estimator) -> Result<()> {
    println!("{}", estimator.tariff().to_json_pretty()?);
    Ok(())
}
