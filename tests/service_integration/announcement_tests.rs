//! Current-task announcement through the service.

use super::helpers::{TestAnnouncementService, announcements};
use eyre::ensure;
use reviewdesk::announcement::domain::NO_TASK_SET;
use reviewdesk::error::ErrorKind;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn announcement_is_set_then_read_back(
    announcements: TestAnnouncementService,
) -> eyre::Result<()> {
    let before = announcements.current().await?;
    ensure!(before.text() == NO_TASK_SET);
    ensure!(before.announcement().is_none());

    let stored = announcements.set("Build a CLI").await?;
    ensure!(stored.current_task() == "Build a CLI");

    let after = announcements.current().await?;
    ensure!(after.text() == "Build a CLI");
    ensure!(after.announcement() == Some(&stored));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_new_announcement_replaces_the_old_one(
    announcements: TestAnnouncementService,
) -> eyre::Result<()> {
    announcements.set("Build a CLI").await?;
    announcements.set("  Write a parser ").await?;

    ensure!(announcements.current().await?.text() == "Write a parser");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_announcement_keeps_the_previous_task(
    announcements: TestAnnouncementService,
) -> eyre::Result<()> {
    announcements.set("Build a CLI").await?;

    let err = match announcements.set(" \n").await {
        Ok(stored) => eyre::bail!("blank task was stored: {stored:?}"),
        Err(err) => err,
    };

    ensure!(err.kind() == ErrorKind::Validation);
    ensure!(announcements.current().await?.text() == "Build a CLI");
    Ok(())
}
