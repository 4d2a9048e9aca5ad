use async_trait::async_trait;

use crate::entities::auth_outcome::{AuthOutcome, SocialProvider};
use crate::entities::form::{FormValues, Mode};
use crate::errors::GatewayError;

/// The identity provider that receives a form once it passes validation.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn submit(&self, values: &FormValues, mode: Mode) -> Result<AuthOutcome, GatewayError>;
    async fn social_auth(&self, provider: SocialProvider) -> Result<AuthOutcome, GatewayError>;
}
