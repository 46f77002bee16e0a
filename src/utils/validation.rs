use crate::core::solver::MAX_DISKS;
use crate::domain::model::SolveRequest;
use crate::utils::error::{ApiError, Result};
use serde_json::Value;

/// Validate a parsed request body field by field and apply rod defaults.
///
/// Checks run in a fixed order so the first violation wins: presence of
/// `disks`, its type and range, then rod names.
pub fn parse_solve_request(body: &Value) -> Result<SolveRequest> {
    let disks = validate_disks(body)?;
    let source = validate_rod(body.get("source"), "A")?;
    let auxiliary = validate_rod(body.get("auxiliary"), "B")?;
    let target = validate_rod(body.get("target"), "C")?;

    Ok(SolveRequest {
        disks,
        source,
        auxiliary,
        target,
    })
}

fn validate_disks(body: &Value) -> Result<u32> {
    let value = body.get("disks").ok_or(ApiError::MissingDisks)?;

    // as_i64 rejects floats, strings and booleans outright
    let disks = value.as_i64().ok_or(ApiError::InvalidDiskCount)?;
    if disks < 1 {
        return Err(ApiError::InvalidDiskCount);
    }
    if disks > i64::from(MAX_DISKS) {
        return Err(ApiError::TooManyDisks);
    }

    Ok(disks as u32)
}

fn validate_rod(value: Option<&Value>, default: &str) -> Result<String> {
    match value {
        None => Ok(default.to_string()),
        Some(Value::String(name)) if !name.is_empty() => Ok(name.clone()),
        Some(_) => Err(ApiError::InvalidRodNames),
    }
}
