// Service exports
pub mod postgres;

pub use postgres::{NewMoodEntry, PostgresClient, PostgresError};
