//! Admin session store.
//!
//! Holds the bearer token and admin profile in memory, mirrored to the
//! local session database. There is no refresh and no expiry check; a stale
//! token only shows up as a 401 on a later call.

use chrono::Utc;

use crate::api::ApiClient;
use crate::db::SessionRepository;
use crate::errors::ConsoleError;
use crate::models::{Admin, LoginRequest, Session};

pub struct SessionStore {
    current: Option<Session>,
    repo: SessionRepository,
}

impl SessionStore {
    /// Open the store, restoring any persisted session.
    pub async fn restore(repo: SessionRepository) -> Result<Self, ConsoleError> {
        let current = repo.load().await?;
        if let Some(session) = &current {
            tracing::debug!("Restored session for {}", session.admin.email);
        }
        Ok(Self { current, repo })
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Exchange credentials for a token and persist it.
    ///
    /// Nothing is persisted, and any previous session is kept, unless the
    /// backend answers 2xx with a non-empty token.
    pub async fn login(
        &mut self,
        client: &ApiClient,
        email: &str,
        password: &str,
    ) -> Result<&Session, ConsoleError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ConsoleError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = client.login(&request).await?;

        let token = response
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                ConsoleError::Decode(
                    response
                        .message
                        .unwrap_or_else(|| "Login response did not include a token".to_string()),
                )
            })?;

        let session = Session {
            token,
            admin: response.admin.unwrap_or_else(|| Admin::from_email(email)),
            created_at: Utc::now(),
        };

        self.repo.save(&session).await?;
        tracing::info!("Logged in as {}", session.admin.email);

        Ok(self.current.insert(session))
    }

    /// Drop the session locally. No revocation call is made.
    ///
    /// The in-memory session is cleared even if the persisted copy cannot be.
    pub async fn logout(&mut self) -> Result<(), ConsoleError> {
        if let Some(session) = self.current.take() {
            tracing::info!("Logged out {}", session.admin.email);
        }
        self.repo.clear().await
    }
}
