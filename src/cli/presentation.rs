//! CLI presentation: text and json formatters per command family.

mod create;
mod verify;

pub use create::{format_create_json, format_create_text};
pub use verify::{format_verify_json, format_verify_text};

use crate::error::HcompareError;
use serde::Serialize;

fn to_json<T: Serialize>(value: &T) -> Result<String, HcompareError> {
    serde_json::to_string_pretty(value).map_err(|e| HcompareError::Render(e.to_string()))
}
