//! # Scholar Configuration
//!
//! Configuration shared by the scholar web frontend and its CLI:
//!
//! - the single agent binding (logical name -> normalized AG-UI URL)
//! - web server settings, optionally loaded from a TOML file

#![warn(missing_docs)]
#![warn(clippy::all)]

mod agent;
mod error;
mod web;

pub use agent::*;
pub use error::{ConfigError, Result};
pub use web::*;
