//! No-WASM HTTP client implementation using reqwest
//!
//! This module provides HTTP functionality for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use crate::config::ApiConfig;
use crate::error::{ErrorKind, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use serde_json::Value;

use crate::interface::{HttpClient, RequestApi};
use crate::model::dtos::{CourseFields, LoginParams, RegisterParams};

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    config: ApiConfig,
}

impl NoWasmClient {
    fn bearer_headers(token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ErrorKind::ParseError(e.to_string()))?,
        );
        Ok(headers)
    }
}

impl HttpClient for NoWasmClient {
    async fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { client, config })
    }
}

impl RequestApi for NoWasmClient {
    async fn register(&self, params: RegisterParams) -> Result<Value> {
        let resp = self
            .client
            .post(self.config.endpoint("/register"))
            .json(&params)
            .send()
            .await?;

        Ok(resp.json::<Value>().await?)
    }

    async fn login(&self, params: LoginParams) -> Result<Value> {
        let resp = self
            .client
            .post(self.config.endpoint("/login"))
            .json(&params)
            .send()
            .await?;

        Ok(resp.json::<Value>().await?)
    }

    async fn list_courses(&self, token: &str) -> Result<Value> {
        let resp = self
            .client
            .get(self.config.endpoint("/courses"))
            .headers(Self::bearer_headers(token)?)
            .send()
            .await?;

        Ok(resp.json::<Value>().await?)
    }

    async fn get_course(&self, token: &str, course_id: &str) -> Result<Value> {
        let url = self.config.endpoint(&format!("/courses/{course_id}"));
        let resp = self
            .client
            .get(url)
            .headers(Self::bearer_headers(token)?)
            .send()
            .await?;

        Ok(resp.json::<Value>().await?)
    }

    async fn create_course(&self, token: &str, fields: &CourseFields) -> Result<Value> {
        let resp = self
            .client
            .post(self.config.endpoint("/courses"))
            .headers(Self::bearer_headers(token)?)
            .json(fields)
            .send()
            .await?;

        Ok(resp.json::<Value>().await?)
    }

    async fn update_course(
        &self,
        token: &str,
        course_id: &str,
        fields: &CourseFields,
    ) -> Result<Value> {
        let url = self.config.endpoint(&format!("/courses/{course_id}"));
        let resp = self
            .client
            .put(url)
            .headers(Self::bearer_headers(token)?)
            .json(fields)
            .send()
            .await?;

        Ok(resp.json::<Value>().await?)
    }

    async fn delete_course(&self, token: &str, course_id: &str) -> Result<Value> {
        let url = self.config.endpoint(&format!("/courses/{course_id}"));
        let resp = self
            .client
            .delete(url)
            .headers(Self::bearer_headers(token)?)
            .send()
            .await?;

        Ok(resp.json::<Value>().await?)
    }

    async fn whoami(&self, token: &str) -> Result<Value> {
        let resp = self
            .client
            .get(self.config.endpoint("/protected"))
            .headers(Self::bearer_headers(token)?)
            .send()
            .await?;

        Ok(resp.json::<Value>().await?)
    }
}
