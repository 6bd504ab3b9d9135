use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{ProfileId, ProfileStatus, Role};
use super::store::{DirectoryStore, StoreError};

const ADMIN_EMAIL_SUFFIX: &str = "@admin.local";

/// Admin accounts are identified by their mail domain, as in the original
/// product. Real deployments would provision an admin role instead.
pub fn is_admin_email(email: &str) -> bool {
    email.to_ascii_lowercase().ends_with(ADMIN_EMAIL_SUFFIX)
}

/// Signed-in identity handed back to the caller after a credential check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: ProfileId,
    pub email: String,
    pub role: Role,
    pub name: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin || is_admin_email(&self.email)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("no {role} account for that email", role = .0.label())]
    UnknownAccount(Role),
    #[error("incorrect password")]
    BadCredentials,
    #[error("profile is {status} and cannot sign in", status = .0.label())]
    NotApproved(ProfileStatus),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Credential check and role gate over the injected store.
///
/// Passwords are compared verbatim because the stand-in store holds them
/// verbatim; hashing belongs to the future backend this store stands in for.
pub struct SessionGate<S> {
    store: Arc<S>,
}

impl<S> SessionGate<S>
where
    S: DirectoryStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn sign_in(&self, role: Role, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = match role {
            Role::Consumer => {
                let consumer = self
                    .store
                    .consumer_by_email(email)?
                    .ok_or(AuthError::UnknownAccount(role))?;
                check_password(&consumer.password, password)?;
                Session {
                    user_id: consumer.id,
                    email: consumer.email,
                    role,
                    name: format!("{} {}", consumer.first_name, consumer.surname),
                }
            }
            Role::Agency => {
                let agency = self
                    .store
                    .agency_by_email(email)?
                    .ok_or(AuthError::UnknownAccount(role))?;
                require_approved(agency.status)?;
                check_password(&agency.password, password)?;
                Session {
                    user_id: agency.id,
                    email: agency.email,
                    role,
                    name: agency.name,
                }
            }
            Role::Agent => {
                let agent = self
                    .store
                    .agent_by_email(email)?
                    .ok_or(AuthError::UnknownAccount(role))?;
                require_approved(agent.status)?;
                check_password(&agent.password, password)?;
                Session {
                    user_id: agent.id,
                    email: agent.email,
                    role,
                    name: agent.name,
                }
            }
            Role::Service => {
                let provider = self
                    .store
                    .service_provider_by_email(email)?
                    .ok_or(AuthError::UnknownAccount(role))?;
                require_approved(provider.status)?;
                check_password(&provider.password, password)?;
                Session {
                    user_id: provider.id,
                    email: provider.email,
                    role,
                    name: provider.business_name,
                }
            }
            Role::Tool => {
                let provider = self
                    .store
                    .tool_provider_by_email(email)?
                    .ok_or(AuthError::UnknownAccount(role))?;
                require_approved(provider.status)?;
                check_password(&provider.password, password)?;
                Session {
                    user_id: provider.id,
                    email: provider.email,
                    role,
                    name: provider.business_name,
                }
            }
            // Admin sign-in rides on a consumer account, but only one carrying
            // the admin mail domain.
            Role::Admin => {
                if !is_admin_email(email) {
                    return Err(AuthError::UnknownAccount(role));
                }
                let consumer = self
                    .store
                    .consumer_by_email(email)?
                    .ok_or(AuthError::UnknownAccount(role))?;
                check_password(&consumer.password, password)?;
                Session {
                    user_id: consumer.id,
                    email: consumer.email,
                    role,
                    name: format!("{} {}", consumer.first_name, consumer.surname),
                }
            }
        };

        info!(role = role.label(), email = %session.email, "session opened");
        Ok(session)
    }
}

fn require_approved(status: ProfileStatus) -> Result<(), AuthError> {
    if status.is_visible() {
        Ok(())
    } else {
        Err(AuthError::NotApproved(status))
    }
}

fn check_password(stored: &str, supplied: &str) -> Result<(), AuthError> {
    if stored == supplied {
        Ok(())
    } else {
        Err(AuthError::BadCredentials)
    }
}
