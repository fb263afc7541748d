//! WASM application implementation
//!
//! The same operations as the native module, driven through the browser
//! fetch client. A wasm GUI layer owns the `AppState` and calls these from
//! its event handlers; rendering stays on the GUI side.

use crate::app::state::AppState;
use crate::client::gloo;
use crate::error::Result;

/// Replace the course list with the latest server response
pub async fn refresh_courses(state: &mut AppState) -> Result<()> {
    state.courses = gloo::list_courses().await?;
    Ok(())
}

/// Submit the pending course draft, then re-list
pub async fn add_course(state: &mut AppState) -> Result<()> {
    gloo::create_course(&state.new_course).await?;
    state.clear_new_course();

    refresh_courses(state).await
}

/// Delete a course by id, then re-list
pub async fn remove_course(state: &mut AppState, id: i64) -> Result<()> {
    gloo::delete_course(id).await?;

    refresh_courses(state).await
}

/// Replace the instance list with the offerings of one period
pub async fn refresh_instances(state: &mut AppState, year: &str, semester: &str) -> Result<()> {
    state.instances = gloo::list_instances(year, semester).await?;
    Ok(())
}

/// Submit the pending instance draft, then re-list its period
pub async fn add_instance(state: &mut AppState) -> Result<()> {
    gloo::create_instance(&state.new_instance).await?;

    // The draft names the period to show next; capture it before the reset.
    let year = state.new_instance.year.clone();
    let semester = state.new_instance.semester.clone();
    state.clear_new_instance();

    refresh_instances(state, &year, &semester).await
}

/// Delete an instance within its period, then re-list that period only
pub async fn remove_instance(
    state: &mut AppState,
    year: &str,
    semester: &str,
    id: i64,
) -> Result<()> {
    gloo::delete_instance(year, semester, id).await?;

    refresh_instances(state, year, semester).await
}
