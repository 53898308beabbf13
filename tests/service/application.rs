//! Tests for ApplicationService.

use babysitter_match::{
    client::{
        error::Error,
        service::{
            application::{APPLY_FAILED, LOGIN_REQUIRED_TO_APPLY},
            ApplicationService,
        },
    },
    model::application::ApplicationDto,
};
use babysitter_test_utils::prelude::*;
use serde_json::json;

use crate::setup::{context, signed_in_context};

/// Expect applying while anonymous to never reach the API
#[tokio::test]
async fn apply_anonymous_sends_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_unused_endpoint("POST", "/apply")
        .build()
        .await?;
    let ctx = context(&test);

    let err = ApplicationService::new(ctx.api())
        .apply(
            ctx.session(),
            &ApplicationDto {
                job_id: 1,
                message: String::new(),
            },
        )
        .await
        .expect_err("applying should fail");

    assert!(matches!(err, Error::Unauthenticated(_)));
    assert_eq!(err.user_message(APPLY_FAILED), LOGIN_REQUIRED_TO_APPLY);

    test.assert_mocks().await;

    Ok(())
}

/// Expect an application with an empty message to be sent with the bearer token
#[tokio::test]
async fn apply_sends_job_id_and_message() -> Result<(), TestError> {
    let token = mock_token(4);
    let test = TestBuilder::new()
        .with_apply_endpoint(&token, &json!({ "job_id": 7, "message": "" }), 1)
        .build()
        .await?;
    let ctx = signed_in_context(&test, &token);

    let response = ApplicationService::new(ctx.api())
        .apply(
            ctx.session(),
            &ApplicationDto {
                job_id: 7,
                message: String::new(),
            },
        )
        .await
        .expect("applying should succeed");

    assert_eq!(response.message, "Applied!");

    test.assert_mocks().await;

    Ok(())
}

/// Expect the generic message when the API fails without a detail
#[tokio::test]
async fn apply_failure_falls_back() -> Result<(), TestError> {
    let token = mock_token(4);
    let test = TestBuilder::new()
        .with_error_endpoint("POST", "/apply", 500, &json!(null), 1)
        .build()
        .await?;
    let ctx = signed_in_context(&test, &token);

    let err = ApplicationService::new(ctx.api())
        .apply(
            ctx.session(),
            &ApplicationDto {
                job_id: 7,
                message: "Happy to help".to_string(),
            },
        )
        .await
        .expect_err("applying should fail");

    assert_eq!(err.user_message(APPLY_FAILED), "Failed to apply");

    test.assert_mocks().await;

    Ok(())
}
