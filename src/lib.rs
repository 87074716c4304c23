pub mod analysis;
pub mod api_connection;
pub mod cli;
pub mod image_intake;
pub mod insights;
pub mod report;
pub mod session;
