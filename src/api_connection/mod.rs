pub mod connection;
pub mod endpoints;
pub mod response_cache;
