//! Given steps for student review BDD scenarios.

use super::world::{StudentReviewWorld, run_async};
use eyre::WrapErr;
use reviewdesk::student::services::{CreateStudentRequest, UpdateStudentRequest};
use rstest_bdd_macros::given;

#[given(r#"a student "{name}" enrolled on task "{task}" due "{deadline}""#)]
fn student_enrolled(
    world: &mut StudentReviewWorld,
    name: String,
    task: String,
    deadline: String,
) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .service
            .create(CreateStudentRequest::new(name, task, deadline)),
    )
    .wrap_err("enrol student for review scenario")?;
    world.student = Some(created);
    Ok(())
}

#[given(r#"the student has submitted the GitHub link "{github}""#)]
fn github_submitted(world: &mut StudentReviewWorld, github: String) -> Result<(), eyre::Report> {
    let id = world.enrolled()?.id();
    let updated = run_async(
        world
            .service
            .update(UpdateStudentRequest::new(id).with_github(github)),
    )
    .wrap_err("submit GitHub link in scenario setup")?;
    world.student = Some(updated);
    Ok(())
}

#[given(r#"the student has been moved to "{status}""#)]
fn status_applied(world: &mut StudentReviewWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.enrolled()?.id();
    let updated = run_async(
        world
            .service
            .update(UpdateStudentRequest::new(id).with_status(status)),
    )
    .wrap_err("move student in scenario setup")?;
    world.student = Some(updated);
    Ok(())
}
