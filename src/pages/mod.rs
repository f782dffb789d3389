pub mod analysis;
pub mod analytics;
pub mod dashboard;
pub mod search;
pub mod settings;
pub mod upload;
