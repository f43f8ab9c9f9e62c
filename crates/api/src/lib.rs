//! Client side of the CGM REST API: configuration, the HTTP transport and
//! the fetch/update flows the case pages are built on.

pub mod backend;
pub mod config;
pub mod http;
pub mod sync;

pub use backend::CaseBackend;
pub use http::HttpBackend;
