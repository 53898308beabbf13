//! Tests for JobService and the job list view state built from it.

use babysitter_match::{
    client::{
        error::Error,
        routes::job_list::{JobListView, NO_JOBS_MESSAGE},
        router::Route,
        service::{
            job::{LOAD_JOBS_FAILED, LOGIN_REQUIRED_TO_POST, POST_JOB_FAILED},
            JobService,
        },
    },
    model::job::NewJobDto,
};
use babysitter_test_utils::{fixtures::api::job_json, prelude::*};
use serde_json::json;

use crate::setup::{context, signed_in_context};

fn new_job() -> NewJobDto {
    NewJobDto {
        title: "Sitter needed".to_string(),
        description: "Fri 7pm".to_string(),
    }
}

/// Expect an empty list to render the no jobs message with zero items
#[tokio::test]
async fn empty_list_shows_no_jobs() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_jobs_endpoint(&json!([]), 1)
        .build()
        .await?;
    let ctx = context(&test);

    let result = JobService::new(ctx.api()).list_jobs().await;
    let view = JobListView::from_state(Some(&result));

    assert_eq!(view, JobListView::Empty);
    assert!(view.listings().is_empty());
    assert_eq!(NO_JOBS_MESSAGE, "No jobs posted yet.");

    test.assert_mocks().await;

    Ok(())
}

/// Expect one card linking to the application view for the job
#[tokio::test]
async fn one_job_has_apply_link() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_jobs_endpoint(&json!([job_json(1, "Sitter needed", "Fri 7pm")]), 1)
        .build()
        .await?;
    let ctx = context(&test);

    let result = JobService::new(ctx.api()).list_jobs().await;
    let view = JobListView::from_state(Some(&result));

    let listings = view.listings();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].job.title, "Sitter needed");
    assert_eq!(listings[0].job.description, "Fri 7pm");
    assert_eq!(listings[0].apply_to, Route::Apply { job_id: 1 });
    assert_eq!(listings[0].apply_to.to_string(), "/apply/1");

    test.assert_mocks().await;

    Ok(())
}

/// Expect the generic message when listing fails without a detail
#[tokio::test]
async fn list_failure_falls_back() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("GET", "/jobs", 500, &json!(null), 1)
        .build()
        .await?;
    let ctx = context(&test);

    let result = JobService::new(ctx.api()).list_jobs().await;

    assert_eq!(
        JobListView::from_state(Some(&result)),
        JobListView::Failed(LOAD_JOBS_FAILED.to_string())
    );

    test.assert_mocks().await;

    Ok(())
}

/// Expect posting while anonymous to never reach the API
#[tokio::test]
async fn post_job_anonymous_sends_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_unused_endpoint("POST", "/jobs")
        .build()
        .await?;
    let ctx = context(&test);

    let result = JobService::new(ctx.api())
        .post_job(ctx.session(), &new_job())
        .await;

    assert!(matches!(result, Err(Error::Unauthenticated(_))));
    assert_eq!(
        result.unwrap_err().user_message(POST_JOB_FAILED),
        "You must be logged in to post a job."
    );
    assert_eq!(LOGIN_REQUIRED_TO_POST, "You must be logged in to post a job.");

    test.assert_mocks().await;

    Ok(())
}

/// Expect posting while signed in to send the bearer token & job body
#[tokio::test]
async fn post_job_sends_bearer_credential() -> Result<(), TestError> {
    let token = mock_token(1);
    let test = TestBuilder::new()
        .with_post_job_endpoint(&token, &new_job(), 1)
        .build()
        .await?;
    let ctx = signed_in_context(&test, &token);

    let response = JobService::new(ctx.api())
        .post_job(ctx.session(), &new_job())
        .await
        .expect("posting should succeed");

    assert_eq!(response.message, "Job posted");

    test.assert_mocks().await;

    Ok(())
}

/// Expect logout to stop further posts without a request
#[tokio::test]
async fn post_job_after_logout_sends_nothing() -> Result<(), TestError> {
    let token = mock_token(1);
    let test = TestBuilder::new()
        .with_unused_endpoint("POST", "/jobs")
        .build()
        .await?;
    let mut ctx = signed_in_context(&test, &token);
    ctx.logout();

    let result = JobService::new(ctx.api())
        .post_job(ctx.session(), &new_job())
        .await;

    assert!(matches!(result, Err(Error::Unauthenticated(_))));

    test.assert_mocks().await;

    Ok(())
}

/// Expect the server's message when the API rejects the token
#[tokio::test]
async fn post_job_rejected_shows_server_detail() -> Result<(), TestError> {
    let token = mock_token(1);
    let test = TestBuilder::new()
        .with_error_endpoint("POST", "/jobs", 401, &"Token has expired", 1)
        .build()
        .await?;
    let ctx = signed_in_context(&test, &token);

    let err = JobService::new(ctx.api())
        .post_job(ctx.session(), &new_job())
        .await
        .expect_err("posting should fail");

    assert_eq!(err.user_message(POST_JOB_FAILED), "Token has expired");

    test.assert_mocks().await;

    Ok(())
}
