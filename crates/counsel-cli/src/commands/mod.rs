pub mod analytics;
pub mod campaign;
pub mod client;
pub mod compliance;
pub mod dashboard;
pub mod dispatch;
pub mod lead;
pub mod open;
pub mod rule;
pub mod shared;
pub mod shell;
