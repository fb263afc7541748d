//! View state for the catalog client
//!
//! One owned store holds everything the front end renders: the two record
//! lists, the two pending drafts and the period filter. The lists are
//! always the last successful server response for their query; nothing is
//! cached or derived besides the row projections below.

use crate::model::dtos::{CourseDraft, InstanceDraft};
use crate::model::structs::{Course, CourseInstance};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub courses: Vec<Course>,
    pub instances: Vec<CourseInstance>,
    pub new_course: CourseDraft,
    pub new_instance: InstanceDraft,
    pub selected_year: String,
    pub selected_semester: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the course draft after a successful submission
    pub fn clear_new_course(&mut self) {
        self.new_course = CourseDraft::default();
    }

    /// Reset the instance draft after a successful submission
    pub fn clear_new_instance(&mut self) {
        self.new_instance = InstanceDraft::default();
    }
}

/// One course table row, keyed by the course id
#[derive(Debug, Clone)]
pub struct CourseRow {
    pub id: i64,
    pub title: String,
    pub code: String,
}

/// One instance table row, keyed by the instance id
#[derive(Debug, Clone)]
pub struct InstanceRow {
    pub id: i64,
    pub title: String,
    pub period: String,
    pub code: String,
}

/// Derive the course table from the current state, in server order
pub fn course_rows(state: &AppState) -> Vec<CourseRow> {
    state
        .courses
        .iter()
        .map(|course| CourseRow {
            id: course.id,
            title: course.title.clone(),
            code: course.code.clone(),
        })
        .collect()
}

/// Derive the instance table from the current state, in server order
pub fn instance_rows(state: &AppState) -> Vec<InstanceRow> {
    state
        .instances
        .iter()
        .map(|instance| InstanceRow {
            id: instance.id,
            title: instance.course.title.clone(),
            period: format!("{}-{}", instance.year, instance.semester),
            code: instance.course.code.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::structs::CourseRef;

    fn sample_state() -> AppState {
        let mut state = AppState::new();
        state.courses = vec![
            Course {
                id: 2,
                title: "Algorithms".to_string(),
                code: "CS201".to_string(),
                description: "Intro".to_string(),
            },
            Course {
                id: 1,
                title: "Databases".to_string(),
                code: "CS305".to_string(),
                description: String::new(),
            },
        ];
        state.instances = vec![CourseInstance {
            id: 9,
            course_id: 2,
            year: "2024".to_string(),
            semester: "1".to_string(),
            course: CourseRef {
                title: "Algorithms".to_string(),
                code: "CS201".to_string(),
            },
        }];
        state
    }

    #[test]
    fn course_rows_keep_server_order() {
        let rows = course_rows(&sample_state());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 2);
        assert_eq!(rows[0].title, "Algorithms");
        assert_eq!(rows[0].code, "CS201");
        assert_eq!(rows[1].id, 1);
    }

    #[test]
    fn instance_rows_format_the_period() {
        let rows = instance_rows(&sample_state());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 9);
        assert_eq!(rows[0].title, "Algorithms");
        assert_eq!(rows[0].period, "2024-1");
        assert_eq!(rows[0].code, "CS201");
    }

    #[test]
    fn clearing_drafts_restores_defaults() {
        let mut state = AppState::new();

        state.new_course.title = "Algorithms".to_string();
        state.new_course.code = "CS201".to_string();
        state.new_course.description = "Intro".to_string();
        state.clear_new_course();
        assert!(state.new_course.title.is_empty());
        assert!(state.new_course.code.is_empty());
        assert!(state.new_course.description.is_empty());

        state.new_instance.course_id = Some(2);
        state.new_instance.year = "2024".to_string();
        state.new_instance.semester = "1".to_string();
        state.clear_new_instance();
        assert!(state.new_instance.course_id.is_none());
        assert!(state.new_instance.year.is_empty());
        assert!(state.new_instance.semester.is_empty());
    }

    #[test]
    fn period_filter_is_independent_of_the_draft() {
        let mut state = AppState::new();

        state.selected_year = "2024".to_string();
        state.selected_semester = "2".to_string();

        assert!(state.new_instance.year.is_empty());
        assert!(state.new_instance.semester.is_empty());
    }
}
