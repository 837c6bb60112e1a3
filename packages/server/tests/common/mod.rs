pub mod client;
pub mod harness;

pub use client::{ApiClient, ApiResponse};
pub use harness::TestHarness;
