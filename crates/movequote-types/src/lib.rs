//! Core types for the movequote moving-price estimator.
//!
//! This crate provides the fundamental data structures used throughout movequote:
//!
//! - [`GeoPoint`] - Validated latitude/longitude pair
//! - [`MoveSize`] - Home size category with its price multiplier
//! - [`QuoteRequest`] / [`QuoteResult`] - Inputs and output of a price estimate
//! - [`MovingDetails`] / [`MoveSubmission`] - Moving request form and backend payload
//! - [`Session`] - Logged-in user session with an explicit lifecycle

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/movequote/movequote/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod geo;
mod moving;
mod quote;
mod session;
mod size;

pub use error::{CoordinateError, MovingDetailsError, QuoteError, Result};
pub use geo::GeoPoint;
pub use moving::{MIN_NOTICE_DAYS, MOVING_DATE_FORMAT, MoveSubmission, MovingDetails};
pub use quote::{QuoteRequest, QuoteResult};
pub use session::{Session, SessionUser, UserType};
pub use size::MoveSize;
