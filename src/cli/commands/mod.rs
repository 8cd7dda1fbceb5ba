//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod init;
pub mod request;
pub mod scan;
pub mod validate;
