//! Quote estimation logic.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use movequote_types::{
    GeoPoint, MoveSize, MoveSubmission, MovingDetails, QuoteRequest, QuoteResult, Result,
    Session,
};
use tracing::{debug, instrument};

use crate::distance::compute_distance_km;
use crate::tariff::Tariff;

/// Static estimator instance using the standard tariff.
static ESTIMATOR: OnceLock<Estimator> = OnceLock::new();

/// Moving price estimator.
///
/// Every call recomputes from its inputs; nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    tariff: Tariff,
}

impl Estimator {
    /// Creates a new estimator with the given tariff.
    #[must_use]
    pub const fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    /// Returns the global estimator instance with the standard tariff.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(|| Self::new(Tariff::standard()))
    }

    /// Returns the tariff in use.
    #[must_use]
    pub const fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Computes the great-circle distance between two points in kilometers.
    #[must_use]
    pub fn distance_km(&self, origin: &GeoPoint, destination: &GeoPoint) -> f64 {
        compute_distance_km(origin, destination)
    }

    /// Computes the price for a distance, home size and packing choice.
    ///
    /// `distance_km * base_rate * multiplier(size) + packing_fee` when packing
    /// is requested. The result is not rounded.
    #[must_use]
    pub fn price(&self, distance_km: f64, size: MoveSize, packing_service: bool) -> f64 {
        self.price_breakdown(distance_km, size, packing_service).amount
    }

    /// Computes the price split into transport and packing parts.
    #[must_use]
    pub fn price_breakdown(
        &self,
        distance_km: f64,
        size: MoveSize,
        packing_service: bool,
    ) -> QuoteResult {
        let transport = distance_km * self.tariff.base_rate_per_km * self.tariff.multiplier(size);
        let packing = if packing_service {
            self.tariff.packing_fee
        } else {
            0.0
        };
        QuoteResult::new(distance_km, transport, packing)
    }

    /// Estimates the price of a move.
    #[must_use]
    #[instrument(level = "debug", skip(self), fields(size = %request.size))]
    pub fn estimate(&self, request: &QuoteRequest) -> QuoteResult {
        let distance_km = self.distance_km(&request.origin, &request.destination);
        let result = self.price_breakdown(distance_km, request.size, request.packing_service);
        debug!(
            distance_km = result.distance_km,
            transport = result.transport,
            packing = result.packing,
            amount = result.amount,
            "estimated quote"
        );
        result
    }

    /// Validates and prices a moving request for submission to the backend.
    ///
    /// `now` carries the customer's time zone: session expiry is checked in
    /// UTC and the moving date against the local wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not an active customer session or
    /// the details fail validation.
    pub fn prepare_submission<Tz: TimeZone>(
        &self,
        session: &Session,
        details: &MovingDetails,
        now: &DateTime<Tz>,
    ) -> Result<MoveSubmission> {
        let user = session.require_customer(now.with_timezone(&Utc))?;
        let submission = self.price_details(details, now.naive_local())?;
        debug!(user_id = user.id, "prepared moving submission");
        Ok(submission)
    }

    /// Validates and prices moving details without a session check.
    ///
    /// `now` is the local wall-clock time the moving date was entered in.
    ///
    /// # Errors
    ///
    /// Returns an error if the details fail validation.
    pub fn price_details(
        &self,
        details: &MovingDetails,
        now: NaiveDateTime,
    ) -> Result<MoveSubmission> {
        details.validate(now)?;

        let quote = self.estimate(&details.quote_request());
        debug!(
            from = %details.from_location,
            to = %details.to_location,
            price = quote.amount,
            "priced moving details"
        );
        Ok(MoveSubmission::new(details, quote.amount))
    }

    /// Formats an amount with the tariff currency, e.g. "Ksh 333,000.00".
    #[must_use]
    pub fn format_price(&self, amount: f64) -> String {
        format!("{} {}", self.tariff.currency, Self::format_amount(amount))
    }

    /// Formats an amount with two decimals and thousands separators.
    #[must_use]
    pub fn format_amount(amount: f64) -> String {
        let fixed = format!("{:.2}", amount.abs());
        let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
        format!("{sign}{grouped}.{frac}")
    }

    /// Formats a distance in kilometers, e.g. "439.92 km".
    #[must_use]
    pub fn format_distance(distance_km: f64) -> String {
        format!("{distance_km:.2} km")
    }

    /// Formats a quote as a human-readable summary.
    #[must_use]
    pub fn format_quote(&self, quote: &QuoteResult) -> String {
        format!(
            "Distance: {}\n\
             Transport: {}\n\
             Packing: {}\n\
             Estimated Price: {}",
            Self::format_distance(quote.distance_km),
            self.format_price(quote.transport),
            self.format_price(quote.packing),
            self.format_price(quote.amount),
        )
    }
}

/// Computes a price with the standard tariff.
#[must_use]
pub fn compute_price(distance_km: f64, size: MoveSize, packing_service: bool) -> f64 {
    Estimator::global().price(distance_km, size, packing_service)
}

/// Estimates a quote with the standard tariff.
#[must_use]
pub fn estimate_quote(request: &QuoteRequest) -> QuoteResult {
    Estimator::global().estimate(request)
}
