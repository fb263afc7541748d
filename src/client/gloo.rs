//! WASM HTTP client implementation using gloo_net
//!
//! This module provides HTTP functionality for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's fetch API.

use crate::error::{ErrorKind, Result};
use crate::interface::{CatalogApi, HttpClient};
use crate::model::dtos::{CourseDraft, InstanceDraft};
use crate::model::structs::{Course, CourseInstance};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::{RequestCredentials, RequestMode};

const API_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient;

impl HttpClient for WasmClient {
    async fn new() -> Result<Self> {
        Ok(Self)
    }
}

impl WasmClient {
    /// Build a request with common headers and settings
    fn build_request(method: &str, url: &str) -> RequestBuilder {
        let builder = match method {
            "POST" => Request::post(url),
            "DELETE" => Request::delete(url),
            _ => Request::get(url),
        };

        builder
            .mode(RequestMode::Cors)
            .credentials(RequestCredentials::Include)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
    }

    /// Handle JSON response with error checking
    async fn handle_json_response<T: DeserializeOwned>(resp: Response) -> Result<T> {
        let ok = resp.ok();
        let text = resp.text().await?;

        if !ok {
            return Err(ErrorKind::ApiError(format!("Request failed: {text}")).into());
        }

        match serde_json::from_str::<T>(&text) {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ErrorKind::ParseError(format!("Invalid JSON response: {text}")).into()),
        }
    }

    /// Handle responses whose body is unused beyond the status
    async fn handle_status_response(resp: Response) -> Result<()> {
        if resp.ok() {
            Ok(())
        } else {
            let text = resp.text().await.unwrap_or_default();
            Err(ErrorKind::ApiError(format!("Request failed: {text}")).into())
        }
    }
}

impl CatalogApi for WasmClient {
    async fn list_courses(&self) -> Result<Vec<Course>> {
        let url = format!("{API_BASE_URL}/courses");
        let resp = Self::build_request("GET", &url).send().await?;

        log::debug!("list_courses response status: {:?}", resp.status());

        Self::handle_json_response(resp).await
    }

    async fn create_course(&self, draft: &CourseDraft) -> Result<()> {
        let url = format!("{API_BASE_URL}/courses");
        let resp = Self::build_request("POST", &url).json(draft)?.send().await?;

        log::debug!("create_course response status: {:?}", resp.status());

        Self::handle_status_response(resp).await
    }

    async fn delete_course(&self, id: i64) -> Result<()> {
        let url = format!("{API_BASE_URL}/courses/{id}");
        let resp = Self::build_request("DELETE", &url).send().await?;

        Self::handle_status_response(resp).await
    }

    async fn list_instances(&self, year: &str, semester: &str) -> Result<Vec<CourseInstance>> {
        let url = format!("{API_BASE_URL}/instances/{year}/{semester}");
        let resp = Self::build_request("GET", &url).send().await?;

        log::debug!("list_instances response status: {:?}", resp.status());

        Self::handle_json_response(resp).await
    }

    async fn create_instance(&self, draft: &InstanceDraft) -> Result<()> {
        let url = format!("{API_BASE_URL}/instances");
        let resp = Self::build_request("POST", &url).json(draft)?.send().await?;

        log::debug!("create_instance response status: {:?}", resp.status());

        Self::handle_status_response(resp).await
    }

    async fn delete_instance(&self, year: &str, semester: &str, id: i64) -> Result<()> {
        let url = format!("{API_BASE_URL}/instances/{year}/{semester}/{id}");
        let resp = Self::build_request("DELETE", &url).send().await?;

        Self::handle_status_response(resp).await
    }
}

// Convenience functions over the unit client; the app layer calls these.

pub async fn list_courses() -> Result<Vec<Course>> {
    let client = WasmClient;
    client.list_courses().await
}

pub async fn create_course(draft: &CourseDraft) -> Result<()> {
    let client = WasmClient;
    client.create_course(draft).await
}

pub async fn delete_course(id: i64) -> Result<()> {
    let client = WasmClient;
    client.delete_course(id).await
}

pub async fn list_instances(year: &str, semester: &str) -> Result<Vec<CourseInstance>> {
    let client = WasmClient;
    client.list_instances(year, semester).await
}

pub async fn create_instance(draft: &InstanceDraft) -> Result<()> {
    let client = WasmClient;
    client.create_instance(draft).await
}

pub async fn delete_instance(year: &str, semester: &str, id: i64) -> Result<()> {
    let client = WasmClient;
    client.delete_instance(year, semester, id).await
}
