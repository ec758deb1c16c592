mod attendance;
mod auth;
mod client;
mod employees;
mod leaves;
mod types;


pub use client::ApiClient;
pub use types::*;
