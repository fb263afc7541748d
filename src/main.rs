use course_catalog_core::app::{
    add_course, add_instance, print_courses, print_instances, refresh_courses,
    refresh_instances, remove_course, remove_instance, AppState,
};
use course_catalog_core::client::request::create_client;
use course_catalog_core::error::{ErrorKind, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let client = create_client().await?;
    let mut state = AppState::new();

    // Initial load, same as the page's on-mount fetch
    refresh_courses(&client, &mut state).await?;
    print_courses(&state);
    print_usage();

    loop {
        print!("> ");
        std::io::Write::flush(&mut std::io::stdout())?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let args: Vec<&str> = line.split_whitespace().collect();

        match args.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["courses"] => {
                refresh_courses(&client, &mut state).await?;
                print_courses(&state);
            }
            ["add-course", title, code, description @ ..] => {
                state.new_course.title = title.to_string();
                state.new_course.code = code.to_string();
                state.new_course.description = description.join(" ");
                add_course(&client, &mut state).await?;
                print_courses(&state);
            }
            ["rm-course", id] => {
                let id = id
                    .parse()
                    .map_err(|e| ErrorKind::ParseError(format!("Invalid course id: {e}")))?;
                remove_course(&client, &mut state, id).await?;
                print_courses(&state);
            }
            ["instances", year, semester] => {
                state.selected_year = year.to_string();
                state.selected_semester = semester.to_string();
                refresh_instances(&client, &mut state, year, semester).await?;
                print_instances(&state);
            }
            ["add-instance", course_id, year, semester] => {
                let course_id = course_id
                    .parse()
                    .map_err(|e| ErrorKind::ParseError(format!("Invalid course id: {e}")))?;
                state.new_instance.course_id = Some(course_id);
                state.new_instance.year = year.to_string();
                state.new_instance.semester = semester.to_string();
                add_instance(&client, &mut state).await?;
                print_instances(&state);
            }
            ["rm-instance", year, semester, id] => {
                let id = id
                    .parse()
                    .map_err(|e| ErrorKind::ParseError(format!("Invalid instance id: {e}")))?;
                remove_instance(&client, &mut state, year, semester, id).await?;
                print_instances(&state);
            }
            _ => print_usage(),
        }
    }

    Ok(())
}

fn print_usage() {
    println!("commands:");
    println!("  courses");
    println!("  add-course <title> <code> <description>");
    println!("  rm-course <id>");
    println!("  instances <year> <semester>");
    println!("  add-instance <course-id> <year> <semester>");
    println!("  rm-instance <year> <semester> <id>");
    println!("  quit");
}
