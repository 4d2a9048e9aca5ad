mod test_utils;

use async_trait::async_trait;
use mockall::{mock, predicate::*};

use auth_forms::{
    entities::{
        auth_outcome::{AuthFailure, AuthOutcome, SocialProvider},
        form::{FormValues, Mode},
        strength::StrengthTier,
    },
    errors::{AppError, GatewayError},
    gateway::AuthGateway,
    use_cases::auth::AuthFormHandler,
};
use test_utils::*;

mock! {
    pub Gateway {}

    #[async_trait]
    impl AuthGateway for Gateway {
        async fn submit(&self, values: &FormValues, mode: Mode) -> Result<AuthOutcome, GatewayError>;
        async fn social_auth(&self, provider: SocialProvider) -> Result<AuthOutcome, GatewayError>;
    }
}

#[tokio::test]
async fn submit_forwards_valid_form() {
    let mut gateway = MockGateway::new();
    gateway.expect_submit()
        .withf(|values, mode| values.email == "a@b.com" && *mode == Mode::SignUp)
        .times(1)
        .returning(|_, mode| Ok(AuthOutcome::Success { mode }));

    let handler = AuthFormHandler::new(gateway);
    let outcome = handler.submit(&valid_sign_up(), Mode::SignUp).await.unwrap();

    assert_eq!(outcome, AuthOutcome::Success { mode: Mode::SignUp });
    assert!(outcome.is_success());
}

#[tokio::test]
async fn submit_never_calls_gateway_when_invalid() {
    let mut gateway = MockGateway::new();
    gateway.expect_submit().never();

    let handler = AuthFormHandler::new(gateway);
    let result = handler.submit(&FormValues::default(), Mode::SignIn).await;

    match result {
        Err(AppError::ValidationError(fields)) => {
            let names: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
            assert_eq!(names, vec!["email", "password"]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn submit_passes_through_typed_failure() {
    let mut gateway = MockGateway::new();
    gateway.expect_submit()
        .returning(|_, _| Ok(AuthOutcome::Failure { failure: AuthFailure::InvalidCredentials }));

    let handler = AuthFormHandler::new(gateway);
    let outcome = handler.submit(&valid_sign_in(), Mode::SignIn).await.unwrap();

    assert!(!outcome.is_success());
    assert_eq!(
        outcome,
        AuthOutcome::Failure { failure: AuthFailure::InvalidCredentials }
    );
}

#[tokio::test]
async fn gateway_outage_maps_to_upstream_error() {
    let mut gateway = MockGateway::new();
    gateway.expect_submit()
        .returning(|_, _| Err(GatewayError::Unavailable("timeout".into())));

    let handler = AuthFormHandler::new(gateway);
    let err = handler.submit(&valid_sign_in(), Mode::SignIn).await.unwrap_err();

    assert!(matches!(err, AppError::Upstream(_)));
    assert!(err.to_string().contains("timeout"));
}

#[tokio::test]
async fn social_auth_delegates_provider() {
    let mut gateway = MockGateway::new();
    gateway.expect_social_auth()
        .with(eq(SocialProvider::Github))
        .times(1)
        .returning(|_| Ok(AuthOutcome::Failure { failure: AuthFailure::ProviderDenied }));

    let handler = AuthFormHandler::new(gateway);
    let outcome = handler.social_auth(SocialProvider::Github).await.unwrap();

    assert_eq!(outcome, AuthOutcome::Failure { failure: AuthFailure::ProviderDenied });
}

#[tokio::test]
async fn social_auth_rejection_is_invalid_input() {
    let mut gateway = MockGateway::new();
    gateway.expect_social_auth()
        .returning(|_| Err(GatewayError::Rejected("unknown client".into())));

    let handler = AuthFormHandler::new(gateway);
    let err = handler.social_auth(SocialProvider::Google).await.unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(msg) if msg == "unknown client"));
}

#[test]
fn strength_only_shown_while_signing_up() {
    let handler = AuthFormHandler::new(MockGateway::new());
    let form = valid_sign_up();

    assert!(handler.strength(&form, Mode::SignIn).is_none());
    let result = handler.strength(&form, Mode::SignUp).unwrap();
    assert_eq!(result.tier, StrengthTier::Medium);
}

#[test]
fn check_matches_free_function() {
    let handler = AuthFormHandler::new(MockGateway::new());
    let form = valid_sign_up();

    assert_eq!(handler.check(&form, Mode::SignUp), auth_forms::validate(&form, Mode::SignUp));
}

#[test]
fn provider_and_failure_render_for_logs() {
    assert_eq!(SocialProvider::Google.to_string(), "google");
    assert_eq!(AuthFailure::Other("locked".into()).to_string(), "locked");
}
