//! When steps for student review BDD scenarios.

use super::world::{StudentReviewWorld, run_async};
use reviewdesk::student::services::UpdateStudentRequest;
use rstest_bdd_macros::when;

fn apply_update(
    world: &mut StudentReviewWorld,
    request: UpdateStudentRequest,
) {
    let result = run_async(world.service.update(request));
    if let Ok(ref updated) = result {
        world.student = Some(updated.clone());
    }
    world.last_update_result = Some(result);
}

#[when(r#"the student submits the GitHub link "{github}""#)]
fn submit_github(world: &mut StudentReviewWorld, github: String) -> Result<(), eyre::Report> {
    let id = world.enrolled()?.id();
    apply_update(world, UpdateStudentRequest::new(id).with_github(github));
    Ok(())
}

#[when(r#"the student is moved to "{status}""#)]
fn move_student(world: &mut StudentReviewWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.enrolled()?.id();
    apply_update(world, UpdateStudentRequest::new(id).with_status(status));
    Ok(())
}
