use crate::config::Config;
use crate::model::role::Role;
use crate::models::Claims;
use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorUnauthorized, web::Data};
use futures::future::{Ready, ready};
use jsonwebtoken::{DecodingKey, Validation, decode};

/// The authenticated requester, rebuilt from the bearer token on every
/// request. This is the only session state the service holds.
pub struct AuthUser {
    pub person_id: u64,
    pub full_name: String,
    pub role: Role,
    /// Directory email; managers are matched against requests through the
    /// requester's `approver_email`.
    pub email: Option<String>,
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = match req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
        {
            Some(t) => t,
            None => return ready(Err(ErrorUnauthorized("Missing token"))),
        };

        let config = match req.app_data::<Data<Config>>() {
            Some(c) => c,
            None => {
                return ready(Err(actix_web::error::ErrorInternalServerError(
                    "Config missing",
                )));
            }
        };

        let data = match decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            &Validation::default(),
        ) {
            Ok(d) => d,
            Err(_) => return ready(Err(ErrorUnauthorized("Invalid token"))),
        };

        let role = match data.claims.role.parse::<Role>() {
            Ok(r) => r,
            Err(_) => return ready(Err(ErrorUnauthorized("Invalid role"))),
        };

        ready(Ok(AuthUser {
            person_id: data.claims.person_id,
            full_name: data.claims.sub,
            role,
            email: data.claims.email,
        }))
    }
}

impl AuthUser {
    pub fn require_hr(&self) -> actix_web::Result<()> {
        if self.role == Role::Hr {
            Ok(())
        } else {
            Err(actix_web::error::ErrorForbidden("HR only"))
        }
    }

    pub fn require_manager_or_hr(&self) -> actix_web::Result<()> {
        if matches!(self.role, Role::Manager | Role::Hr) {
            Ok(())
        } else {
            Err(actix_web::error::ErrorForbidden("Manager/HR only"))
        }
    }

    /// Approval authority over a requester: HR always, a manager only when
    /// they are the requester's registered approver. A requester whose
    /// directory row is gone has no approver to match, so HR only.
    pub fn can_decide_for(&self, approver_email: Option<&str>) -> bool {
        match self.role {
            Role::Hr => true,
            Role::Manager => match (approver_email, self.email.as_deref()) {
                (Some(approver), Some(own)) => approver == own,
                _ => false,
            },
            Role::Personnel => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role, email: Option<&str>) -> AuthUser {
        AuthUser {
            person_id: 1,
            full_name: "Mehmet Kaya".into(),
            role,
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn hr_decides_for_anyone() {
        assert!(user(Role::Hr, None).can_decide_for(Some("x@company.com")));
        assert!(user(Role::Hr, None).can_decide_for(None));
    }

    #[test]
    fn manager_must_be_the_registered_approver() {
        let manager = user(Role::Manager, Some("mehmet@company.com"));
        assert!(manager.can_decide_for(Some("mehmet@company.com")));
        assert!(!manager.can_decide_for(Some("other@company.com")));
        assert!(!manager.can_decide_for(None));
    }

    #[test]
    fn personnel_never_decides() {
        let requester = user(Role::Personnel, Some("ayse@company.com"));
        assert!(!requester.can_decide_for(Some("ayse@company.com")));
    }
}
