//! Tests for AuthService followed by the SessionContext transition a view performs.

use babysitter_match::{
    client::{
        api::{ApiClient, ReqwestTransport},
        guard::{guard, AuthState, Navigation},
        router::Route,
        service::{
            auth::{display_name_from_email, LOGIN_FAILED, REGISTRATION_FAILED},
            AuthService,
        },
        session::storage::{SessionStorage, DISPLAY_NAME_KEY, TOKEN_KEY},
    },
    model::auth::{LoginDto, RegisterDto},
};
use babysitter_test_utils::{
    constant::{TEST_EMAIL, TEST_NAME, TEST_PASSWORD},
    prelude::*,
};
use serde_json::json;

use crate::setup::context;

fn login_dto() -> LoginDto {
    LoginDto {
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

fn register_dto(is_babysitter: bool) -> RegisterDto {
    RegisterDto {
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
        name: TEST_NAME.to_string(),
        is_babysitter,
    }
}

/// Expect login to authenticate with the local part of the email as display name
#[tokio::test]
async fn login_authenticates_with_email_local_part() -> Result<(), TestError> {
    let token = mock_token(1);
    let test = TestBuilder::new()
        .with_login_endpoint(TEST_EMAIL, TEST_PASSWORD, &token, 1)
        .build()
        .await?;
    let mut ctx = context(&test);

    let dto = login_dto();
    let response = AuthService::new(ctx.api())
        .login(&dto)
        .await
        .expect("login should succeed");
    let session = ctx
        .login(response.token, display_name_from_email(&dto.email))
        .expect("token should sign in")
        .clone();

    assert_eq!(ctx.auth_state(), AuthState::Authenticated);
    assert_eq!(session.display_name, "a");
    assert_eq!(session.user_id, Some(1));
    assert_eq!(ctx.storage().get(TOKEN_KEY), Some(token.clone()));
    assert_eq!(ctx.storage().get(DISPLAY_NAME_KEY), Some("a".to_string()));
    assert_eq!(ctx.api().credential(), Some(token.as_str()));

    test.assert_mocks().await;

    Ok(())
}

/// Expect registration to move the guard from Anonymous to Authenticated & persist the token
#[tokio::test]
async fn register_unlocks_protected_routes() -> Result<(), TestError> {
    let token = mock_token(2);
    let dto = register_dto(true);
    let test = TestBuilder::new()
        .with_register_endpoint(&dto, &token, 1)
        .build()
        .await?;
    let mut ctx = context(&test);

    assert_eq!(
        guard(&Route::PostJob {}, ctx.auth_state()),
        Navigation::Redirect(Route::Login {})
    );

    let response = AuthService::new(ctx.api())
        .register(&dto)
        .await
        .expect("registration should succeed");
    let session = ctx
        .register(response.token, dto.name.clone(), dto.is_babysitter)
        .expect("token should sign in")
        .clone();

    assert_eq!(ctx.auth_state(), AuthState::Authenticated);
    assert_eq!(
        guard(&Route::PostJob {}, ctx.auth_state()),
        Navigation::Render
    );
    assert_eq!(session.display_name, TEST_NAME);
    assert!(session.is_babysitter);
    assert_eq!(ctx.storage().get(TOKEN_KEY), Some(token));

    test.assert_mocks().await;

    Ok(())
}

/// Expect the server's message for rejected credentials & no session
#[tokio::test]
async fn login_rejected_shows_server_detail() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("POST", "/login", 401, &"Invalid credentials", 1)
        .build()
        .await?;
    let ctx = context(&test);

    let result = AuthService::new(ctx.api()).login(&login_dto()).await;

    let err = result.expect_err("login should fail");
    assert_eq!(err.user_message(LOGIN_FAILED), "Invalid credentials");
    assert_eq!(ctx.auth_state(), AuthState::Anonymous);
    assert!(ctx.storage().is_empty());

    test.assert_mocks().await;

    Ok(())
}

/// Expect the server's message for a duplicate email
#[tokio::test]
async fn register_duplicate_email_shows_server_detail() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("POST", "/register", 400, &"Email already exists", 1)
        .build()
        .await?;
    let ctx = context(&test);

    let err = AuthService::new(ctx.api())
        .register(&register_dto(false))
        .await
        .expect_err("registration should fail");

    assert_eq!(err.user_message(REGISTRATION_FAILED), "Email already exists");

    test.assert_mocks().await;

    Ok(())
}

/// Expect the first validation message when the API rejects the request body
#[tokio::test]
async fn register_validation_error_shows_first_message() -> Result<(), TestError> {
    let detail = json!([
        { "loc": ["body", "name"], "msg": "field required", "type": "value_error.missing" }
    ]);
    let test = TestBuilder::new()
        .with_error_endpoint("POST", "/register", 422, &detail, 1)
        .build()
        .await?;
    let ctx = context(&test);

    let err = AuthService::new(ctx.api())
        .register(&register_dto(false))
        .await
        .expect_err("registration should fail");

    assert_eq!(err.user_message(REGISTRATION_FAILED), "field required");

    test.assert_mocks().await;

    Ok(())
}

/// Expect the generic message when the API cannot be reached
#[tokio::test]
async fn login_unreachable_api_falls_back() {
    // Nothing listens on the discard port
    let api = ApiClient::new("http://127.0.0.1:9", ReqwestTransport::default());

    let err = AuthService::new(&api)
        .login(&login_dto())
        .await
        .expect_err("login should fail");

    assert_eq!(err.user_message(LOGIN_FAILED), "Login failed");
}

/// Expect an empty token from the API to leave the user logged out with the generic message
#[tokio::test]
async fn login_with_empty_token_stays_anonymous() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(TEST_EMAIL, TEST_PASSWORD, "", 1)
        .build()
        .await?;
    let mut ctx = context(&test);

    let dto = login_dto();
    let response = AuthService::new(ctx.api())
        .login(&dto)
        .await
        .expect("login request should succeed");
    let err = ctx
        .login(response.token, display_name_from_email(&dto.email))
        .expect_err("empty token should not sign in");

    assert_eq!(err.user_message(LOGIN_FAILED), "Login failed");
    assert_eq!(ctx.auth_state(), AuthState::Anonymous);
    assert!(ctx.api().credential().is_none());
    assert!(ctx.storage().is_empty());

    test.assert_mocks().await;

    Ok(())
}
