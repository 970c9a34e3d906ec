//! End-to-end review workflow through the student service.

use super::helpers::{TestStudentService, enroll_amy, ensure_rejected, students};
use eyre::ensure;
use reviewdesk::error::ErrorKind;
use reviewdesk::student::{domain::ReviewStatus, services::UpdateStudentRequest};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn enrolled_student_is_pending_without_github(
    students: TestStudentService,
) -> eyre::Result<()> {
    let amy = enroll_amy(&students).await?;

    ensure!(amy.status() == ReviewStatus::Pending);
    ensure!(amy.github().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn github_is_written_once(students: TestStudentService) -> eyre::Result<()> {
    let amy = enroll_amy(&students).await?;

    let submitted = students
        .update(UpdateStudentRequest::new(amy.id()).with_github("amy123"))
        .await?;
    ensure!(submitted.github() == "amy123");
    ensure!(submitted.status() == ReviewStatus::Pending);

    let resubmitted = students
        .update(UpdateStudentRequest::new(amy.id()).with_github("amy456"))
        .await;
    ensure_rejected(&resubmitted, ErrorKind::GitHubLocked)?;

    let stored = students.get_by_id(amy.id()).await?;
    ensure!(stored.github() == "amy123");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reviewed_student_is_locked(students: TestStudentService) -> eyre::Result<()> {
    let amy = enroll_amy(&students).await?;
    students
        .update(UpdateStudentRequest::new(amy.id()).with_github("amy123"))
        .await?;

    let under_review = students
        .update(UpdateStudentRequest::new(amy.id()).with_status("underReview"))
        .await?;
    ensure!(under_review.status() == ReviewStatus::UnderReview);
    let reviewed = students
        .update(UpdateStudentRequest::new(amy.id()).with_status("reviewed"))
        .await?;
    ensure!(reviewed.status() == ReviewStatus::Reviewed);

    for status in ["pending", "underReview", "reviewed"] {
        let attempt = students
            .update(UpdateStudentRequest::new(amy.id()).with_status(status))
            .await;
        ensure_rejected(&attempt, ErrorKind::RecordLocked)?;
    }
    let empty = students.update(UpdateStudentRequest::new(amy.id())).await;
    ensure_rejected(&empty, ErrorKind::RecordLocked)?;

    let stored = students.get_by_id(amy.id()).await?;
    ensure!(stored == reviewed, "locked record must not change");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn github_proposal_on_reviewed_record_reports_the_github_lock_first(
    students: TestStudentService,
) -> eyre::Result<()> {
    let amy = enroll_amy(&students).await?;
    students
        .update(UpdateStudentRequest::new(amy.id()).with_github("amy123"))
        .await?;
    students
        .update(UpdateStudentRequest::new(amy.id()).with_status("underReview"))
        .await?;
    students
        .update(UpdateStudentRequest::new(amy.id()).with_status("reviewed"))
        .await?;

    let attempt = students
        .update(UpdateStudentRequest::new(amy.id()).with_github("x"))
        .await;

    ensure_rejected(&attempt, ErrorKind::GitHubLocked)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reviewed_record_without_github_is_locked_for_github_too(
    students: TestStudentService,
) -> eyre::Result<()> {
    let amy = enroll_amy(&students).await?;
    students
        .update(UpdateStudentRequest::new(amy.id()).with_status("underReview"))
        .await?;
    students
        .update(UpdateStudentRequest::new(amy.id()).with_status("reviewed"))
        .await?;

    let attempt = students
        .update(UpdateStudentRequest::new(amy.id()).with_github("x"))
        .await;

    ensure_rejected(&attempt, ErrorKind::RecordLocked)?;
    ensure!(students.get_by_id(amy.id()).await?.github().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn review_cannot_be_skipped(students: TestStudentService) -> eyre::Result<()> {
    let amy = enroll_amy(&students).await?;

    let attempt = students
        .update(UpdateStudentRequest::new(amy.id()).with_status("reviewed"))
        .await;

    ensure_rejected(&attempt, ErrorKind::SkippedReview)?;
    ensure!(students.get_by_id(amy.id()).await?.status() == ReviewStatus::Pending);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn under_review_cannot_revert_to_pending(students: TestStudentService) -> eyre::Result<()> {
    let amy = enroll_amy(&students).await?;
    students
        .update(UpdateStudentRequest::new(amy.id()).with_status("underReview"))
        .await?;

    let attempt = students
        .update(UpdateStudentRequest::new(amy.id()).with_status("pending"))
        .await;

    ensure_rejected(&attempt, ErrorKind::IllegalRevert)?;
    ensure!(students.get_by_id(amy.id()).await?.status() == ReviewStatus::UnderReview);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn github_and_status_can_be_submitted_together(
    students: TestStudentService,
) -> eyre::Result<()> {
    let amy = enroll_amy(&students).await?;

    let updated = students
        .update(
            UpdateStudentRequest::new(amy.id())
                .with_github("amy123")
                .with_status("underReview"),
        )
        .await?;

    ensure!(updated.github() == "amy123");
    ensure!(updated.status() == ReviewStatus::UnderReview);
    ensure!(updated.revision() == amy.revision() + 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_fields_count_as_absent(students: TestStudentService) -> eyre::Result<()> {
    let amy = enroll_amy(&students).await?;

    let attempt = students
        .update(
            UpdateStudentRequest::new(amy.id())
                .with_github("   ")
                .with_status(""),
        )
        .await;

    ensure_rejected(&attempt, ErrorKind::InvalidTransition)
}
