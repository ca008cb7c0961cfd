//! Sign-in submission and the post-auth redirect.

use std::future::Future;

use contracts::system::auth::routing::resolve_destination;
use contracts::system::auth::{AuthError, LoginResponse};

use crate::shared::api_utils::ApiError;
use crate::shared::navigator::Navigator;

/// Result of a sign-in attempt the login form knows how to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Session established; the navigator was sent to this path.
    Redirected(String),
    /// The server refused the credentials. Nothing was navigated.
    Rejected(AuthError),
}

/// Await a sign-in request and act on its result.
///
/// On success the session is handed to `establish` before a single
/// `redirect` to `redirect_to`, or to the role's landing page when the
/// target is absent or a placeholder. Authentication failures become
/// `Rejected`; any other failure is returned as an error.
pub async fn authenticate<N, F>(
    sign_in: F,
    navigator: &N,
    redirect_to: Option<&str>,
    establish: impl FnOnce(LoginResponse),
) -> Result<AuthOutcome, ApiError>
where
    N: Navigator + ?Sized,
    F: Future<Output = Result<LoginResponse, ApiError>>,
{
    let response = match sign_in.await {
        Ok(response) => response,
        Err(ApiError::Auth(error)) => {
            log::info!("Sign-in rejected: {}", error);
            return Ok(AuthOutcome::Rejected(error));
        }
        Err(other) => {
            log::error!("Sign-in failed: {}", other);
            return Err(other);
        }
    };

    let destination = resolve_destination(redirect_to, response.user.role);
    establish(response);
    navigator.redirect(&destination);
    Ok(AuthOutcome::Redirected(destination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::navigator::testing::{NavCall, RecordingNavigator};
    use contracts::system::auth::{Role, UserInfo};
    use futures::executor::block_on;
    use futures::future::ready;
    use std::cell::Cell;

    fn response_for(role: Role) -> LoginResponse {
        LoginResponse {
            access_token: "access".into(),
            refresh_token: "refresh".into(),
            user: UserInfo {
                id: "u1".into(),
                username: "ann".into(),
                full_name: None,
                email: None,
                role,
            },
        }
    }

    fn run(
        result: Result<LoginResponse, ApiError>,
        redirect_to: Option<&str>,
    ) -> (Result<AuthOutcome, ApiError>, Vec<NavCall>, bool) {
        let nav = RecordingNavigator::default();
        let established = Cell::new(false);
        let outcome = block_on(authenticate(ready(result), &nav, redirect_to, |_| {
            established.set(true)
        }));
        (outcome, nav.calls(), established.get())
    }

    #[test]
    fn test_redirect_target_wins_over_role() {
        let (outcome, calls, established) = run(Ok(response_for(Role::Seller)), Some("/admin/orders"));
        assert_eq!(outcome, Ok(AuthOutcome::Redirected("/admin/orders".into())));
        assert_eq!(calls, vec![NavCall::Redirect("/admin/orders".into())]);
        assert!(established);
    }

    #[test]
    fn test_placeholder_target_uses_role_landing() {
        let (_, calls, _) = run(Ok(response_for(Role::Admin)), Some("undefined"));
        assert_eq!(calls, vec![NavCall::Redirect("/admin".into())]);

        let (_, calls, _) = run(Ok(response_for(Role::Seller)), Some("null"));
        assert_eq!(calls, vec![NavCall::Redirect("/dashboard".into())]);

        let (_, calls, _) = run(Ok(response_for(Role::Customer)), None);
        assert_eq!(calls, vec![NavCall::Redirect("/".into())]);

        let (_, calls, _) = run(Ok(response_for(Role::Customer)), Some("/login"));
        assert_eq!(calls, vec![NavCall::Redirect("/".into())]);
    }

    #[test]
    fn test_invalid_credentials_do_not_navigate() {
        let (outcome, calls, established) =
            run(Err(AuthError::InvalidCredentials.into()), Some("/cart"));
        assert_eq!(outcome, Ok(AuthOutcome::Rejected(AuthError::InvalidCredentials)));
        assert!(calls.is_empty());
        assert!(!established);
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid Username or Password"
        );
    }

    #[test]
    fn test_other_auth_failure_is_rejected_with_generic_message() {
        let (outcome, calls, _) = run(Err(AuthError::Unknown.into()), None);
        assert_eq!(outcome, Ok(AuthOutcome::Rejected(AuthError::Unknown)));
        assert!(calls.is_empty());
    }

    #[test]
    fn test_transport_failure_is_an_error() {
        let (outcome, calls, established) =
            run(Err(ApiError::Transport("connection refused".into())), None);
        assert_eq!(outcome, Err(ApiError::Transport("connection refused".into())));
        assert!(calls.is_empty());
        assert!(!established);
    }
}
