use serde::{Deserialize, Serialize};

// Server-owned records. The client never edits these in place; every list
// call replaces the local copies wholesale.

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub code: String,
    pub description: String,
}

/// Course projection embedded in an instance row
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CourseRef {
    pub title: String,
    pub code: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CourseInstance {
    pub id: i64,
    #[serde(rename = "courseId")]
    pub course_id: i64,
    pub year: String,
    pub semester: String,
    pub course: CourseRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_maps_wire_names() {
        let json = r#"{
            "id": 7,
            "courseId": 3,
            "year": "2024",
            "semester": "1",
            "course": { "title": "Algorithms", "code": "CS201" }
        }"#;

        let instance: CourseInstance = serde_json::from_str(json).unwrap();
        assert_eq!(instance.id, 7);
        assert_eq!(instance.course_id, 3);
        assert_eq!(instance.year, "2024");
        assert_eq!(instance.semester, "1");
        assert_eq!(instance.course.title, "Algorithms");
        assert_eq!(instance.course.code, "CS201");
    }
}
