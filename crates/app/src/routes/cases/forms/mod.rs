//! Modal forms opened from the case detail page. Each form validates its
//! input and hands a partial update to the page; none of them call the API.

pub mod audit;
pub mod documents;
pub mod edit;
pub mod procedure;
pub mod schedule;

use std::collections::HashMap;

use shared_types::AppError;
use validator::Validate;

pub type FieldErrors = HashMap<String, String>;

/// Run the input's validation rules, returning per-field messages on
/// failure.
pub fn check<T: Validate>(input: &T) -> Result<(), FieldErrors> {
    input
        .validate()
        .map_err(|errors| AppError::from(errors).field_errors)
}
