//! Steps for current-task BDD scenarios.

use super::world::{CurrentTaskWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::{given, then, when};

#[given("no task has been announced")]
fn nothing_announced(world: &CurrentTaskWorld) -> Result<(), eyre::Report> {
    let current = run_async(world.service.current()).wrap_err("read empty announcement")?;
    eyre::ensure!(current.announcement().is_none(), "store was not empty");
    Ok(())
}

#[given(r#"the task "{task}" has been announced"#)]
fn task_announced(world: &CurrentTaskWorld, task: String) -> Result<(), eyre::Report> {
    run_async(world.service.set(task)).wrap_err("announce task in scenario setup")?;
    Ok(())
}

#[when(r#"the task "{task}" is announced"#)]
fn announce(world: &mut CurrentTaskWorld, task: String) {
    world.last_set_result = Some(run_async(world.service.set(task)));
}

#[when("the current task is read")]
fn read_current(world: &mut CurrentTaskWorld) -> Result<(), eyre::Report> {
    world.last_read = Some(run_async(world.service.current()).wrap_err("read current task")?);
    Ok(())
}

#[then(r#"the current task is "{task}""#)]
fn current_task_is(world: &CurrentTaskWorld, task: String) -> Result<(), eyre::Report> {
    let current = world
        .last_read
        .as_ref()
        .ok_or_else(|| eyre::eyre!("current task was not read"))?;
    eyre::ensure!(
        current.text() == task,
        "expected current task {task}, found {}",
        current.text()
    );
    Ok(())
}

#[then("the announcement is rejected")]
fn announcement_rejected(world: &CurrentTaskWorld) -> Result<(), eyre::Report> {
    match world.last_set_result.as_ref() {
        Some(Err(_)) => Ok(()),
        other => Err(eyre::eyre!("expected a rejected announcement, got {other:?}")),
    }
}
