pub mod paths;
pub mod types;
