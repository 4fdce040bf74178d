//! aims-storage
//!
//! Persistence for patients and surveys. The [`store::SurveyStore`] trait is
//! the seam the router talks to; S3 and in-memory backends implement it.

pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod store;
