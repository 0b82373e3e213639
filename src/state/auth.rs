//! Authentication State
//!
//! Gates the app shell behind a valid session. The only durable client
//! state is the bearer token in local storage; the user object lives in
//! memory and is re-validated on every page load.

use leptos::*;

use crate::api;

/// Authenticated user, as returned by the auth endpoints
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub grade: String,
}

/// Lifecycle of the authentication gate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    /// Stored token is being validated
    Loading,
    Authenticated,
    Unauthenticated,
}

/// What a finished token validation means for the gate
pub fn validation_outcome(result: Result<User, String>) -> (AuthPhase, Option<User>, bool) {
    match result {
        Ok(user) => (AuthPhase::Authenticated, Some(user), false),
        // Invalid or expired token: drop it so the next load skips validation
        Err(_) => (AuthPhase::Unauthenticated, None, true),
    }
}

/// Validate a login form. Mirrors the server rules the UI can check.
pub fn validate_login_form(email: &str, password: &str) -> Result<(), String> {
    if email.is_empty() || password.is_empty() {
        return Err("Preencha todos os campos".to_string());
    }
    Ok(())
}

/// Validate a registration form
pub fn validate_register_form(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    grade: &str,
) -> Result<(), String> {
    if name.is_empty() || email.is_empty() || password.is_empty() || grade.is_empty() {
        return Err("Preencha todos os campos".to_string());
    }
    if password != confirm_password {
        return Err("As senhas não coincidem".to_string());
    }
    if password.len() < 6 {
        return Err("A senha deve ter pelo menos 6 caracteres".to_string());
    }
    Ok(())
}

/// Reactive auth state shared through context
#[derive(Clone, Copy)]
pub struct AuthState {
    pub phase: RwSignal<AuthPhase>,
    pub user: RwSignal<Option<User>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            phase: create_rw_signal(AuthPhase::Loading),
            user: create_rw_signal(None),
        }
    }

    /// Resolve the stored token into an auth phase. Called once on mount.
    pub fn init(&self) {
        if api::get_token().is_none() {
            self.phase.set(AuthPhase::Unauthenticated);
            return;
        }

        let auth = *self;
        spawn_local(async move {
            let (phase, user, clear) = validation_outcome(api::validate_token().await);
            if clear {
                api::clear_token();
            }
            auth.user.set(user);
            auth.phase.set(phase);
        });
    }

    fn accept(&self, response: api::AuthResponse) {
        api::set_token(&response.token);
        self.user.set(Some(response.user));
        self.phase.set(AuthPhase::Authenticated);
    }

    /// Log in; on failure the gate stays down and the message is surfaced
    pub async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        let response = api::login(email, password).await?;
        self.accept(response);
        Ok(())
    }

    /// Register a new account and open the gate
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        grade: &str,
    ) -> Result<(), String> {
        let response = api::register(name, email, password, grade).await?;
        self.accept(response);
        Ok(())
    }

    /// Try the demo account, creating it if it does not exist yet
    pub async fn demo_login(&self) -> Result<(), String> {
        if self.login("demo@curio.com", "demo123").await.is_ok() {
            return Ok(());
        }
        self.register("Estudante Demo", "demo@curio.com", "demo123", "7º Ano")
            .await
            .map_err(|_| "Erro ao criar conta demo".to_string())
    }

    /// Synchronous: clears storage and memory, no backend call
    pub fn logout(&self) {
        api::clear_token();
        self.user.set(None);
        self.phase.set(AuthPhase::Unauthenticated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_token_clears_storage() {
        let (phase, user, clear) = validation_outcome(Err("Token expirado".to_string()));
        assert_eq!(phase, AuthPhase::Unauthenticated);
        assert!(user.is_none());
        assert!(clear);
    }

    #[test]
    fn test_valid_token_authenticates() {
        let user = User {
            id: 1,
            name: "Victor Pires".to_string(),
            email: "victor@curio.com".to_string(),
            grade: "7º Ano".to_string(),
        };
        let (phase, resolved, clear) = validation_outcome(Ok(user.clone()));
        assert_eq!(phase, AuthPhase::Authenticated);
        assert_eq!(resolved, Some(user));
        assert!(!clear);
    }

    #[test]
    fn test_login_form_validation() {
        assert!(validate_login_form("a@b.com", "secret").is_ok());
        assert!(validate_login_form("", "secret").is_err());
        assert!(validate_login_form("a@b.com", "").is_err());
    }

    #[test]
    fn test_register_form_validation() {
        assert!(validate_register_form("Ana", "a@b.com", "secret", "secret", "7º Ano").is_ok());
        assert_eq!(
            validate_register_form("Ana", "a@b.com", "secret", "other", "7º Ano"),
            Err("As senhas não coincidem".to_string())
        );
        assert_eq!(
            validate_register_form("Ana", "a@b.com", "abc", "abc", "7º Ano"),
            Err("A senha deve ter pelo menos 6 caracteres".to_string())
        );
        assert!(validate_register_form("", "a@b.com", "secret", "secret", "7º Ano").is_err());
    }
}
