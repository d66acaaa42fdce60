//! groqchat server library
//!
//! Wires the session store, chat service, and completion client behind the
//! HTTP surface. Exposed as a library so integration tests can drive the
//! router without binding a socket.

pub mod cli;
pub mod web;
