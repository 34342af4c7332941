//! WASM HTTP client implementation using gloo_net
//!
//! This module provides HTTP functionality for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's fetch API.

use crate::config::ApiConfig;
use crate::error::{ErrorKind, Result};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;
use web_sys::{RequestCredentials, RequestMode};

use crate::interface::{HttpClient, RequestApi};
use crate::model::dtos::{CourseFields, LoginParams, RegisterParams};

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient {
    config: ApiConfig,
}

impl WasmClient {
    /// Build a request with common headers and settings
    fn build_request(method: &str, url: &str) -> RequestBuilder {
        let builder = match method {
            "POST" => Request::post(url),
            "PUT" => Request::put(url),
            "DELETE" => Request::delete(url),
            _ => Request::get(url),
        };

        builder
            .mode(RequestMode::Cors)
            .credentials(RequestCredentials::SameOrigin)
            .header("Accept", "application/json")
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {token}")
    }

    /// Parse a response body as JSON without looking at the HTTP status;
    /// error-status bodies still carry the message the page displays.
    async fn json_body(resp: Response) -> Result<Value> {
        let text = resp.text().await?;

        serde_json::from_str::<Value>(&text).map_err(|_| {
            ErrorKind::ParseError(format!("Invalid JSON response: {text}")).into()
        })
    }
}

impl HttpClient for WasmClient {
    async fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self { config })
    }
}

impl RequestApi for WasmClient {
    async fn register(&self, params: RegisterParams) -> Result<Value> {
        let resp = Self::build_request("POST", &self.config.endpoint("/register"))
            .json(&params)?
            .send()
            .await?;

        Self::json_body(resp).await
    }

    async fn login(&self, params: LoginParams) -> Result<Value> {
        let resp = Self::build_request("POST", &self.config.endpoint("/login"))
            .json(&params)?
            .send()
            .await?;

        Self::json_body(resp).await
    }

    async fn list_courses(&self, token: &str) -> Result<Value> {
        let resp = Self::build_request("GET", &self.config.endpoint("/courses"))
            .header("Authorization", &Self::bearer(token))
            .send()
            .await?;

        Self::json_body(resp).await
    }

    async fn get_course(&self, token: &str, course_id: &str) -> Result<Value> {
        let url = self.config.endpoint(&format!("/courses/{course_id}"));
        let resp = Self::build_request("GET", &url)
            .header("Authorization", &Self::bearer(token))
            .send()
            .await?;

        Self::json_body(resp).await
    }

    async fn create_course(&self, token: &str, fields: &CourseFields) -> Result<Value> {
        let resp = Self::build_request("POST", &self.config.endpoint("/courses"))
            .header("Authorization", &Self::bearer(token))
            .json(fields)?
            .send()
            .await?;

        Self::json_body(resp).await
    }

    async fn update_course(
        &self,
        token: &str,
        course_id: &str,
        fields: &CourseFields,
    ) -> Result<Value> {
        let url = self.config.endpoint(&format!("/courses/{course_id}"));
        let resp = Self::build_request("PUT", &url)
            .header("Authorization", &Self::bearer(token))
            .json(fields)?
            .send()
            .await?;

        Self::json_body(resp).await
    }

    async fn delete_course(&self, token: &str, course_id: &str) -> Result<Value> {
        let url = self.config.endpoint(&format!("/courses/{course_id}"));
        let resp = Self::build_request("DELETE", &url)
            .header("Authorization", &Self::bearer(token))
            .send()
            .await?;

        Self::json_body(resp).await
    }

    async fn whoami(&self, token: &str) -> Result<Value> {
        let resp = Self::build_request("GET", &self.config.endpoint("/protected"))
            .header("Authorization", &Self::bearer(token))
            .send()
            .await?;

        Self::json_body(resp).await
    }
}
