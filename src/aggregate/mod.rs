//! Aggregate reports over parsed records.
//!
//! - [`average_duration_by_resource`] - mean duration per resource, highest first
//! - [`duration_sum_by_hour`] - summed duration per hour bucket, earliest first
//!
//! Both are pure functions of their input and independent of each other.

mod hourly;
mod resource;

pub use hourly::{bucket_for, duration_sum_by_hour, HourlyTotals};
pub use resource::{
    average_duration_by_resource, group_by_resource, rank_by_mean, take_top, ResourceAverages,
    ResourceGroup,
};
