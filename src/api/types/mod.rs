//! API types shared by the HTTP handlers

pub mod error;
pub mod json;
pub mod params;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use params::{Path, Query};
