//! Request module - handles HTTP requests for both WASM and no-WASM environments
//!
//! Both implementations speak the same course-management REST contract
//! through the `RequestApi` trait; the platforms differ only in transport
//! (reqwest natively, the browser fetch API via gloo_net on WASM).

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;
