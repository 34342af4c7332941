use serde::{Deserialize, Serialize};

/// Common parameters for account registration
#[derive(Debug, Clone, Serialize)]
pub struct RegisterParams {
    pub username: String,
    pub password: String,
    pub role: String,
}

/// Common parameters for login requests
#[derive(Debug, Clone, Serialize)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

/// Full course payload sent on create and on (whole-record) update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseFields {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub duration: u32,
    pub enrollment_limit: u32,
}
