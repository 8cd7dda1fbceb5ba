//! Domain types shared across the DLP engine.
//!
//! # Error Handling
//!
//! Fallible engine operations return [`Result<T, DlpError>`]. Two narrower
//! error types exist for the scanning pipeline:
//!
//! - [`DetectorError`] - a single detector failed; recovered by the scan
//!   service and reported per detector, never propagated
//! - [`FileReadError`] - the input file of a file scan could not be read;
//!   fatal to that call only
//!
//! ```rust
//! use dlp_engine::domain::{DlpError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = dlp_engine::config::load_config_or_default(None)?;
//!     if config.limits.max_input_length == 0 {
//!         return Err(DlpError::Configuration("limit must be positive".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::{DetectorError, DlpError, FileReadError};
pub use result::Result;
