// src/lib.rs

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod notify;
pub mod runner;
pub mod server;
pub mod store;
