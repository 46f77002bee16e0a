pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;

pub use crate::core::handler::handle;
pub use crate::core::solver::{solve, FULL_LIST_THRESHOLD, MAX_DISKS};
pub use crate::domain::model::{ApiGatewayEvent, ApiResponse, Solution};
pub use crate::utils::error::{ApiError, Result};
