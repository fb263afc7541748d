//! No-WASM HTTP client implementation using reqwest
//!
//! This module provides HTTP functionality for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use crate::error::{ErrorKind, Result};
use crate::interface::{CatalogApi, HttpClient};
use crate::model::dtos::{CourseDraft, InstanceDraft};
use crate::model::structs::{Course, CourseInstance};
use reqwest::{Client, Response};

const API_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NativeClient {
    client: Client,
}

impl HttpClient for NativeClient {
    async fn new() -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { client })
    }
}

impl NativeClient {
    /// Surface a non-success status as an API error carrying the body text
    async fn check_status(resp: Response) -> Result<Response> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ErrorKind::ApiError(format!("{status}: {body}")).into())
        }
    }
}

impl CatalogApi for NativeClient {
    async fn list_courses(&self) -> Result<Vec<Course>> {
        let url = format!("{API_BASE_URL}/courses");
        let resp = self.client.get(&url).send().await?;
        let resp = Self::check_status(resp).await?;

        Ok(resp.json().await?)
    }

    async fn create_course(&self, draft: &CourseDraft) -> Result<()> {
        let url = format!("{API_BASE_URL}/courses");
        let resp = self.client.post(&url).json(draft).send().await?;

        // The created record comes back in the body; the caller re-lists
        // instead of consuming it.
        Self::check_status(resp).await?;
        Ok(())
    }

    async fn delete_course(&self, id: i64) -> Result<()> {
        let url = format!("{API_BASE_URL}/courses/{id}");
        let resp = self.client.delete(&url).send().await?;

        Self::check_status(resp).await?;
        Ok(())
    }

    async fn list_instances(&self, year: &str, semester: &str) -> Result<Vec<CourseInstance>> {
        let url = format!("{API_BASE_URL}/instances/{year}/{semester}");
        let resp = self.client.get(&url).send().await?;
        let resp = Self::check_status(resp).await?;

        Ok(resp.json().await?)
    }

    async fn create_instance(&self, draft: &InstanceDraft) -> Result<()> {
        let url = format!("{API_BASE_URL}/instances");
        let resp = self.client.post(&url).json(draft).send().await?;

        Self::check_status(resp).await?;
        Ok(())
    }

    async fn delete_instance(&self, year: &str, semester: &str, id: i64) -> Result<()> {
        let url = format!("{API_BASE_URL}/instances/{year}/{semester}/{id}");
        let resp = self.client.delete(&url).send().await?;

        Self::check_status(resp).await?;
        Ok(())
    }
}

// Convenience functions over a shared `Client`; the app layer calls these.

pub async fn create_client() -> Result<Client> {
    Client::builder().build().map_err(Into::into)
}

pub async fn list_courses(client: &Client) -> Result<Vec<Course>> {
    let wrapper = NativeClient {
        client: client.clone(),
    };
    wrapper.list_courses().await
}

pub async fn create_course(client: &Client, draft: &CourseDraft) -> Result<()> {
    let wrapper = NativeClient {
        client: client.clone(),
    };
    wrapper.create_course(draft).await
}

pub async fn delete_course(client: &Client, id: i64) -> Result<()> {
    let wrapper = NativeClient {
        client: client.clone(),
    };
    wrapper.delete_course(id).await
}

pub async fn list_instances(
    client: &Client,
    year: &str,
    semester: &str,
) -> Result<Vec<CourseInstance>> {
    let wrapper = NativeClient {
        client: client.clone(),
    };
    wrapper.list_instances(year, semester).await
}

pub async fn create_instance(client: &Client, draft: &InstanceDraft) -> Result<()> {
    let wrapper = NativeClient {
        client: client.clone(),
    };
    wrapper.create_instance(draft).await
}

pub async fn delete_instance(client: &Client, year: &str, semester: &str, id: i64) -> Result<()> {
    let wrapper = NativeClient {
        client: client.clone(),
    };
    wrapper.delete_instance(year, semester, id).await
}
