pub mod app;
pub mod client;
pub mod error;
pub mod interface;
pub mod model;

#[cfg(feature = "no-wasm")]
pub use reqwest::Client;
#[cfg(feature = "no-wasm")]
pub use tokio;
