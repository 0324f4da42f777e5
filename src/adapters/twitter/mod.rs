//! Tweet publishing: real API v2 adapter and a mock for dry runs.

pub mod api;
pub mod mock;

pub use api::TwitterApi;
pub use mock::MockPublisher;
