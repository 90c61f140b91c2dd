//! Moving price estimation for movequote.
//!
//! This crate turns an origin, a destination and the move parameters into a
//! price estimate:
//!
//! - [`compute_distance_km`] - Haversine great-circle distance
//! - [`compute_price`] - Tiered linear price for a distance
//! - [`estimate_quote`] - Distance and price for a [`QuoteRequest`]
//! - [`Estimator`] - The same operations over a configurable [`Tariff`]
//!
//! ```
//! use movequote_estimate::{compute_price, estimate_quote};
//! use movequote_types::{GeoPoint, MoveSize, QuoteRequest};
//!
//! assert_eq!(compute_price(10.0, MoveSize::Bedsitter, false), 5000.0);
//!
//! let nairobi = GeoPoint::new(-1.2921, 36.8219).unwrap();
//! let mombasa = GeoPoint::new(-4.0435, 39.6682).unwrap();
//! let quote = estimate_quote(&QuoteRequest::new(nairobi, mombasa, MoveSize::OneBedroom, true));
//! assert!((quote.distance_km - 440.0).abs() < 5.0);
//! ```
//!
//! [`QuoteRequest`]: movequote_types::QuoteRequest

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/movequote/movequote/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod distance;
mod estimator;
mod tariff;

pub use distance::{EARTH_RADIUS_KM, compute_distance_km};
pub use estimator::{Estimator, compute_price, estimate_quote};
pub use tariff::{BASE_RATE_PER_KM, CURRENCY, PACKING_FEE, SizeMultipliers, Tariff};
