//! Moving price estimation library.
//!
//! This is a facade crate that re-exports functionality from the movequote
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use movequote_lib::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let origin: GeoPoint = "-1.2921,36.8219".parse()?;
//!     let destination: GeoPoint = "-4.0435,39.6682".parse()?;
//!     let size: MoveSize = "one bedroom".parse()?;
//!
//!     let estimator = Estimator::global();
//!     let quote = estimator.estimate(&QuoteRequest::new(origin, destination, size, true));
//!     println!("{}", estimator.format_price(quote.amount));
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/movequote/movequote/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use movequote_types::*;

// Re-export estimation
pub use movequote_estimate::{
    BASE_RATE_PER_KM, CURRENCY, EARTH_RADIUS_KM, Estimator, PACKING_FEE, SizeMultipliers, Tariff,
    compute_distance_km, compute_price, estimate_quote,
};

/// Prelude module for convenient imports.
///
/// ```
/// use movequote_lib::prelude::*;
/// ```
pub mod prelude {
    pub use movequote_types::{
        GeoPoint, MoveSize, MoveSubmission, MovingDetails, QuoteError, QuoteRequest, QuoteResult,
        Result, Session, SessionUser, UserType,
    };

    pub use movequote_estimate::{
        Estimator, Tariff, compute_distance_km, compute_price, estimate_quote,
    };
}
