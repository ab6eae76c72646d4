//! Public library API for marshalling JSON values into and out of reflected object graphs.

/// Value model, property descriptors, path resolution, and export/apply conversions.
pub mod prop;
