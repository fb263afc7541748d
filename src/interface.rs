#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::model::dtos::{CourseDraft, InstanceDraft};
use crate::model::structs::{Course, CourseInstance};

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance
    async fn new() -> Result<Self>
    where
        Self: Sized;
}

/// Common interface for all catalog operations
pub trait CatalogApi {
    /// Get every course in the catalog
    async fn list_courses(&self) -> Result<Vec<Course>>;

    /// Create a course from a pending draft
    async fn create_course(&self, draft: &CourseDraft) -> Result<()>;

    /// Delete a course by id
    async fn delete_course(&self, id: i64) -> Result<()>;

    /// Get the instances offered in one year/semester period
    async fn list_instances(&self, year: &str, semester: &str) -> Result<Vec<CourseInstance>>;

    /// Create a course instance from a pending draft
    async fn create_instance(&self, draft: &InstanceDraft) -> Result<()>;

    /// Delete an instance by id within its period
    async fn delete_instance(&self, year: &str, semester: &str, id: i64) -> Result<()>;
}
