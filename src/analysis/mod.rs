pub mod catalog;
pub mod comparison;
pub mod response_parser;
