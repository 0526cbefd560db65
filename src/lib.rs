pub mod config;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod policy;
pub mod routes;
pub mod state;
pub mod store;
