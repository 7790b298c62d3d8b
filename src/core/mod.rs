pub mod catalog;
pub mod collation;
pub mod posts;
pub mod price_parser;
pub mod sample_data;
