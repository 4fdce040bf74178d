pub mod patient;
pub mod report;
pub mod survey;
