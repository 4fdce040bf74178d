pub mod health;
pub mod patients;
pub mod predict;
pub mod reports;
pub mod surveys;
