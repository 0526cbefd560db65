pub mod features;
pub mod mapper;
pub mod params;
pub mod types;
