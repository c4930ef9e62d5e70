mod auth;
pub mod availability;
pub mod client;
pub mod envelope;
mod files;
mod requests;
pub mod types;
mod users;
mod venues;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
