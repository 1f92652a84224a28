pub mod deletions;
pub mod transforms;
pub mod uploads;
