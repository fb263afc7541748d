use serde::{Deserialize, Serialize};

/// Pending input for a new course; posted verbatim as the request body.
/// `Default` is the empty form.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CourseDraft {
    pub title: String,
    pub code: String,
    pub description: String,
}

/// Pending input for a new course instance. The course is unset until the
/// user picks one; an unset course is submitted as-is, the backend decides.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InstanceDraft {
    #[serde(rename = "courseId")]
    pub course_id: Option<i64>,
    pub year: String,
    pub semester: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_draft_serializes_wire_names() {
        let draft = InstanceDraft {
            course_id: Some(3),
            year: "2024".to_string(),
            semester: "1".to_string(),
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["courseId"], 3);
        assert_eq!(value["year"], "2024");
        assert_eq!(value["semester"], "1");
    }

    #[test]
    fn default_drafts_are_empty() {
        let course = CourseDraft::default();
        assert!(course.title.is_empty());
        assert!(course.code.is_empty());
        assert!(course.description.is_empty());

        let instance = InstanceDraft::default();
        assert!(instance.course_id.is_none());
        assert!(instance.year.is_empty());
        assert!(instance.semester.is_empty());
    }
}
