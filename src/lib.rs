pub mod benchmark;
pub mod config;
pub mod options;
pub mod space_generator;
pub mod table;
pub mod types;
pub mod utility;
