//! No-WASM application implementation
//!
//! Operations that connect the view state to the catalog backend over a
//! shared reqwest client, plus the terminal renderer for the two tables.
//! Every mutation is followed by a full re-list of the affected query so
//! the state always reflects server truth.

use crate::app::state::{course_rows, instance_rows, AppState};
use crate::client::request;
use crate::error::Result;
use reqwest::Client;

/// Replace the course list with the latest server response
pub async fn refresh_courses(client: &Client, state: &mut AppState) -> Result<()> {
    state.courses = request::list_courses(client).await?;
    Ok(())
}

/// Submit the pending course draft, then re-list
pub async fn add_course(client: &Client, state: &mut AppState) -> Result<()> {
    request::create_course(client, &state.new_course).await?;
    state.clear_new_course();

    refresh_courses(client, state).await
}

/// Delete a course by id, then re-list
pub async fn remove_course(client: &Client, state: &mut AppState, id: i64) -> Result<()> {
    request::delete_course(client, id).await?;

    refresh_courses(client, state).await
}

/// Replace the instance list with the offerings of one period
pub async fn refresh_instances(
    client: &Client,
    state: &mut AppState,
    year: &str,
    semester: &str,
) -> Result<()> {
    state.instances = request::list_instances(client, year, semester).await?;
    Ok(())
}

/// Submit the pending instance draft, then re-list its period
pub async fn add_instance(client: &Client, state: &mut AppState) -> Result<()> {
    request::create_instance(client, &state.new_instance).await?;

    // The draft names the period to show next; capture it before the reset.
    let year = state.new_instance.year.clone();
    let semester = state.new_instance.semester.clone();
    state.clear_new_instance();

    refresh_instances(client, state, &year, &semester).await
}

/// Delete an instance within its period, then re-list that period only
pub async fn remove_instance(
    client: &Client,
    state: &mut AppState,
    year: &str,
    semester: &str,
    id: i64,
) -> Result<()> {
    request::delete_instance(client, year, semester, id).await?;

    refresh_instances(client, state, year, semester).await
}

pub fn print_courses(state: &AppState) {
    println!("==================Courses===================");
    for row in course_rows(state) {
        println!("id: {:<8}title: {:<24}code: {:<12}", row.id, row.title, row.code);
    }
    println!("============================================");
}

pub fn print_instances(state: &AppState) {
    println!("=================Instances==================");
    for row in instance_rows(state) {
        println!(
            "id: {:<8}title: {:<24}period: {:<10}code: {:<12}",
            row.id, row.title, row.period, row.code
        );
    }
    println!("============================================");
}
