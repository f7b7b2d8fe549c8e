use chrono::{DateTime, Utc};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: Secret<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginOutcome {
    /// No password was stored yet; the submitted one became the password.
    PasswordCreated,
    LoggedIn,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub outcome: LoginOutcome,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdminClaims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub is_owner: bool,
    pub logged_in: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DashboardOverview {
    pub volunteers: usize,
    pub messages: usize,
    pub ongoing_projects: usize,
    pub completed_projects: usize,
    pub total_projects: usize,
}
