use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Deserialize)]
pub struct LoginReqDto {
    pub full_name: String,
    pub password: String,
}

#[derive(FromRow)]
pub struct PersonSql {
    pub id: u64,
    pub full_name: String,
    pub password: String,
    pub role: String,
    pub email: Option<String>,
}

/// Per-session context carried in the bearer token; every request handler
/// reads identity, role and approver address from here instead of any
/// process-wide state.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub person_id: u64,
    /// Full name; the practical identity key of the directory.
    pub sub: String,
    pub role: String,
    pub email: Option<String>,
    pub exp: usize,
    pub jti: String,
}
