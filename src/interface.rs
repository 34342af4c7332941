#![allow(async_fn_in_trait)] // single-platform consumers, no Send bound wanted

use crate::config::ApiConfig;
use crate::error::Result;
use crate::model::dtos::{CourseFields, LoginParams, RegisterParams};
use serde_json::Value;

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance against the configured backend
    async fn new(config: ApiConfig) -> Result<Self>
    where
        Self: Sized;
}

/// Common interface for all HTTP operations
///
/// One method per backend endpoint. Bodies come back as raw JSON values;
/// the application layer decides which parts it reads typed. Implementations
/// never branch on the HTTP status: error-status bodies still carry the
/// message the page displays.
pub trait RequestApi {
    /// Create an account with a requested role
    async fn register(&self, params: RegisterParams) -> Result<Value>;

    /// Send login credentials
    async fn login(&self, params: LoginParams) -> Result<Value>;

    /// Fetch every course record
    async fn list_courses(&self, token: &str) -> Result<Value>;

    /// Fetch a single course record by id
    async fn get_course(&self, token: &str, course_id: &str) -> Result<Value>;

    /// Create a course record
    async fn create_course(&self, token: &str, fields: &CourseFields) -> Result<Value>;

    /// Replace a course record wholesale
    async fn update_course(&self, token: &str, course_id: &str, fields: &CourseFields)
        -> Result<Value>;

    /// Delete a course record by id
    async fn delete_course(&self, token: &str, course_id: &str) -> Result<Value>;

    /// Ask the backend who the bearer token belongs to
    async fn whoami(&self, token: &str) -> Result<Value>;
}
