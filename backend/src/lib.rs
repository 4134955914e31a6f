pub mod config;
pub mod handlers;
pub mod services;
pub mod startup;

pub use startup::{build_router, Application, HttpService};
