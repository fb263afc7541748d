use course_catalog_core::app::{
    add_course, add_instance, refresh_instances, remove_course, remove_instance, AppState,
};
use course_catalog_core::client::request::create_client;

// Exercises the full create/list/delete flow against a live backend at
// http://127.0.0.1:8000/api. Run with: cargo test -- --ignored
#[tokio::test]
#[ignore]
async fn course_and_instance_lifecycle() {
    let client = create_client().await.expect("Failed to build http client");
    let mut state = AppState::new();

    state.new_course.title = "Algorithms".to_string();
    state.new_course.code = "CS201".to_string();
    state.new_course.description = "Intro".to_string();
    add_course(&client, &mut state).await.expect("Failed to create course");

    // The draft is back to its empty default after a successful submit
    assert!(state.new_course.title.is_empty());
    assert!(state.new_course.code.is_empty());
    assert!(state.new_course.description.is_empty());

    let course = state
        .courses
        .iter()
        .find(|c| c.title == "Algorithms" && c.code == "CS201" && c.description == "Intro")
        .expect("Created course is listed")
        .clone();

    state.new_instance.course_id = Some(course.id);
    state.new_instance.year = "2024".to_string();
    state.new_instance.semester = "1".to_string();
    add_instance(&client, &mut state).await.expect("Failed to create instance");
    assert!(state.new_instance.course_id.is_none());
    assert!(state.new_instance.year.is_empty());

    let instance = state
        .instances
        .iter()
        .find(|i| i.course_id == course.id)
        .expect("Created instance is listed for its period")
        .clone();
    assert_eq!(instance.course.code, "CS201");
    assert_eq!(instance.year, "2024");
    assert_eq!(instance.semester, "1");

    // The period filter is an exact match; another period is unaffected
    refresh_instances(&client, &mut state, "2024", "2")
        .await
        .expect("Failed to list instances");
    assert!(state.instances.iter().all(|i| i.id != instance.id));

    remove_instance(&client, &mut state, "2024", "1", instance.id)
        .await
        .expect("Failed to delete instance");
    assert!(state.instances.iter().all(|i| i.id != instance.id));

    remove_course(&client, &mut state, course.id)
        .await
        .expect("Failed to delete course");
    assert!(state.courses.iter().all(|c| c.id != course.id));
}
