//! HTTP gateway exposing the verification adapter.

pub mod server;
pub mod verify_api;

pub use server::{build_router, start_server, GatewayState};
