//! Profile DTOs

use serde::Deserialize;
use validator::Validate;

/// Profile update payload
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 255))]
    pub full_name: String,

    #[validate(email)]
    pub email: Option<String>,
}
