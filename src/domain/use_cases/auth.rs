use crate::domain::{password, validation};
use crate::entities::auth_outcome::{AuthOutcome, SocialProvider};
use crate::entities::form::{FormErrors, FormValues, Mode};
use crate::entities::strength::StrengthResult;
use crate::errors::AppError;
use crate::interfaces::gateway::AuthGateway;

pub struct AuthFormHandler<G>
where
    G: AuthGateway,
{
    pub gateway: G,
}

impl<G> AuthFormHandler<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: G) -> Self {
        AuthFormHandler { gateway }
    }

    /// Runs the field rules without contacting the provider
    pub fn check(&self, values: &FormValues, mode: Mode) -> FormErrors {
        validation::validate(values, mode)
    }

    /// Live indicator for the password field, only shown while signing up
    pub fn strength(&self, values: &FormValues, mode: Mode) -> Option<StrengthResult> {
        mode.is_sign_up().then(|| password::score(&values.password))
    }

    /// Validates, then hands the values to the provider. The provider is never
    /// called while any field fails.
    pub async fn submit(&self, values: &FormValues, mode: Mode) -> Result<AuthOutcome, AppError> {
        let errors = self.check(values, mode);
        if !errors.is_empty() {
            tracing::info!(%mode, failing = errors.len(), "Form submission blocked by validation");
            return Err(errors.into());
        }

        let outcome = self.gateway.submit(values, mode)
            .await
            .map_err(|e| {
                tracing::warn!("Identity provider call failed: {}", e);
                AppError::from(e)
            })?;

        match &outcome {
            AuthOutcome::Success { .. } => tracing::info!(%mode, "Form submitted successfully"),
            AuthOutcome::Failure { failure } => tracing::info!(%mode, %failure, "Form submission refused"),
        }
        Ok(outcome)
    }

    pub async fn social_auth(&self, provider: SocialProvider) -> Result<AuthOutcome, AppError> {
        tracing::info!(%provider, "Authenticating with social provider");
        self.gateway.social_auth(provider)
            .await
            .map_err(AppError::from)
    }
}
