mod auth;
pub mod client;
mod dashboard;
mod departments;
mod employees;
mod leaves;
mod salaries;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
