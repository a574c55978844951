//! Federated identity verification via an OIDC userinfo endpoint.

use async_trait::async_trait;
use serde::Deserialize;

use quill_core::ports::{AuthError, FederatedIdentityVerifier, FederatedProfile};

/// Exchanges a provider access token for a verified profile by calling the
/// provider's userinfo endpoint. The provider has already authenticated the
/// user; the returned email/name/picture are trusted as-is.
pub struct OidcUserinfoVerifier {
    client: reqwest::Client,
    userinfo_url: String,
}

#[derive(Debug, Deserialize)]
struct UserinfoResponse {
    email: String,
    #[serde(default)]
    given_name: String,
    #[serde(default)]
    family_name: String,
    #[serde(default)]
    picture: String,
}

impl OidcUserinfoVerifier {
    pub fn new(userinfo_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            userinfo_url,
        }
    }
}

#[async_trait]
impl FederatedIdentityVerifier for OidcUserinfoVerifier {
    async fn verify(&self, provider_token: &str) -> Result<FederatedProfile, AuthError> {
        let response = self
            .client
            .get(&self.userinfo_url)
            .bearer_auth(provider_token)
            .send()
            .await
            .map_err(|e| AuthError::Federation(e.to_string()))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidCredentials);
        }
        let response = response
            .error_for_status()
            .map_err(|e| AuthError::Federation(e.to_string()))?;

        let info: UserinfoResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Federation(e.to_string()))?;

        Ok(FederatedProfile {
            email: info.email,
            first_name: info.given_name,
            last_name: info.family_name,
            picture: info.picture,
        })
    }
}
