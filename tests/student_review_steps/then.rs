//! Then steps for student review BDD scenarios.

use super::world::{StudentReviewWorld, run_async};
use reviewdesk::student::domain::ReviewStatus;
use rstest_bdd_macros::then;

#[then("the update succeeds")]
fn update_succeeds(world: &StudentReviewWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result"))?;

    if let Err(err) = result {
        return Err(eyre::eyre!("expected the update to succeed, got {err}"));
    }

    Ok(())
}

#[then(r#"the update is rejected with "{code}""#)]
fn update_rejected_with(world: &StudentReviewWorld, code: String) -> Result<(), eyre::Report> {
    let result = world
        .last_update_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result"))?;

    match result {
        Err(err) if err.kind().code() == code => Ok(()),
        other => Err(eyre::eyre!("expected rejection {code}, got {other:?}")),
    }
}

#[then(r#"the student's GitHub link is "{github}""#)]
fn stored_github_is(world: &StudentReviewWorld, github: String) -> Result<(), eyre::Report> {
    let id = world.enrolled()?.id();
    let stored = run_async(world.service.get_by_id(id))?;

    if stored.github() != github {
        return Err(eyre::eyre!(
            "expected GitHub link {github}, found {}",
            stored.github()
        ));
    }

    Ok(())
}

#[then(r#"the student's status is "{status}""#)]
fn stored_status_is(world: &StudentReviewWorld, status: String) -> Result<(), eyre::Report> {
    let expected = ReviewStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let id = world.enrolled()?.id();
    let stored = run_async(world.service.get_by_id(id))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            stored.status().as_str()
        ));
    }

    Ok(())
}
