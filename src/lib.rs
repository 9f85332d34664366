#![doc = "The `taskvault` library crate."]
#![doc = ""]
#![doc = "This crate contains the configuration, key vault secret retrieval, data"]
#![doc = "access layer, session management, error handling, and HTTP routes for the"]
#![doc = "taskvault backend. The main binary (`main.rs`) wires these together into"]
#![doc = "a running server."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod secrets;
pub mod session;
