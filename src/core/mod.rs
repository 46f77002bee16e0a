pub mod handler;
pub mod solver;

pub use crate::domain::model::{ApiGatewayEvent, ApiResponse, Solution, SolveRequest};
pub use crate::utils::error::Result;
