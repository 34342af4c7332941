//! Backend endpoint configuration.
//!
//! The browser build talks to the origin that served the page; the native
//! build points at an explicit base URL, taken from the environment when
//! not given on the command line.

use std::env;

/// Development bind address of the course backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Environment variable consulted by `from_env`.
pub const BASE_URL_ENV: &str = "COURSE_API_URL";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Base URL from `COURSE_API_URL`, falling back to the dev bind.
    pub fn from_env() -> Self {
        match env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// Relative paths only; requests go to the origin serving the page.
    pub fn same_origin() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("http://localhost:5000///");
        assert_eq!(config.endpoint("/courses"), "http://localhost:5000/courses");
    }

    #[test]
    fn same_origin_keeps_paths_relative() {
        assert_eq!(ApiConfig::same_origin().endpoint("/login"), "/login");
    }
}
