//! Core SwiftCode library (highlighting, reveal sessions, config, logging).

pub mod config;
pub mod demo;
pub mod highlight;
pub mod logging;
pub mod reveal;
