// HTTP surface module
pub mod protocol;
pub mod routes;
pub mod server;

pub use protocol::ChatPayload;
pub use server::{build_app, WebServer, WebServerConfig};
