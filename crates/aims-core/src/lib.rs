//! aims-core
//!
//! Pure domain types for the AIMS survey backend: patients, surveys, the
//! AIMS item table, and S3 key conventions. No AWS or HTTP dependency.

pub mod error;
pub mod models;
pub mod s3_keys;
