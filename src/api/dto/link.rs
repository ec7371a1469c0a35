//! DTOs for the link endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::{Validate, ValidationError};

use crate::domain::entities::Link;
use crate::utils::base_url::short_url;
use crate::utils::code_generator::is_valid_custom_code;

/// Request body for `POST /api/links` and `PUT /api/links/{id}`.
///
/// An empty `short_name` is the same as an absent one.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct LinkParams {
    #[serde(default)]
    #[validate(url)]
    pub original_url: String,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(custom(function = "validate_short_name"))]
    pub short_name: Option<String>,
}

fn validate_short_name(short_name: &str) -> Result<(), ValidationError> {
    if is_valid_custom_code(short_name) {
        Ok(())
    } else {
        Err(ValidationError::new("short_name"))
    }
}

/// JSON representation of a link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_name: String,
    pub short_url: String,
}

impl LinkResponse {
    pub fn new(link: Link, base_url: &str) -> Self {
        Self {
            short_url: short_url(base_url, &link.short_code),
            id: link.id,
            original_url: link.original_url,
            short_name: link.short_code,
        }
    }
}
