//! Concurrent updates against the in-memory store.

use std::sync::Arc;

use super::helpers::{TestStudentService, enroll_amy, students};
use eyre::ensure;
use reviewdesk::error::ErrorKind;
use reviewdesk::student::{domain::ReviewStatus, services::UpdateStudentRequest};
use rstest::rstest;
use tokio::task::JoinSet;

const WRITERS: usize = 32;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn only_one_concurrent_github_submission_wins(
    students: TestStudentService,
) -> eyre::Result<()> {
    let amy = enroll_amy(&students).await?;
    let service = Arc::new(students);

    let mut writers = JoinSet::new();
    for writer in 0..WRITERS {
        let shared = Arc::clone(&service);
        let id = amy.id();
        writers.spawn(async move {
            shared
                .update(UpdateStudentRequest::new(id).with_github(format!("gh{writer}")))
                .await
        });
    }

    let mut winners = Vec::new();
    let mut rejections = 0_usize;
    while let Some(joined) = writers.join_next().await {
        match joined? {
            Ok(updated) => winners.push(updated),
            Err(err) => {
                ensure!(
                    err.kind() == ErrorKind::GitHubLocked,
                    "unexpected failure {err}"
                );
                rejections += 1;
            }
        }
    }

    ensure!(winners.len() == 1, "expected one winner, got {}", winners.len());
    ensure!(rejections == WRITERS - 1);
    let stored = service.get_by_id(amy.id()).await?;
    ensure!(winners.first() == Some(&stored));
    ensure!(stored.revision() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_review_starts_apply_once(
    students: TestStudentService,
) -> eyre::Result<()> {
    let amy = enroll_amy(&students).await?;
    let service = Arc::new(students);

    let mut writers = JoinSet::new();
    for _ in 0..WRITERS {
        let shared = Arc::clone(&service);
        let id = amy.id();
        writers.spawn(async move {
            shared
                .update(UpdateStudentRequest::new(id).with_status("underReview"))
                .await
        });
    }

    let mut accepted = 0_usize;
    while let Some(joined) = writers.join_next().await {
        match joined? {
            Ok(_) => accepted += 1,
            Err(err) => ensure!(
                err.kind() == ErrorKind::InvalidTransition,
                "unexpected failure {err}"
            ),
        }
    }

    ensure!(accepted == 1, "expected one accepted transition, got {accepted}");
    let stored = service.get_by_id(amy.id()).await?;
    ensure!(stored.status() == ReviewStatus::UnderReview);
    ensure!(stored.revision() == 1);
    Ok(())
}
