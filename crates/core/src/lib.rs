//! Pure domain logic for the car purchase-price prediction service.
//!
//! No I/O lives here: this crate defines the fixed feature schema sent to
//! the remote model, the numeric coercion applied to submitted form values,
//! and the distinct-value aggregation used to build filter option lists.

pub mod features;
pub mod options;
