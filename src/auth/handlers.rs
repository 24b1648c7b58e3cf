use crate::{
    auth::jwt::generate_access_token,
    config::Config,
    model::role::Role,
    models::{LoginReqDto, PersonSql},
};
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;
use tracing::{debug, error, info, instrument};

#[derive(Serialize, Deserialize)]
struct LoginResponse {
    access_token: String,
}

#[instrument(
    name = "auth_login",
    skip(pool, config, user),
    fields(full_name = %user.full_name)
)]
pub async fn login(
    user: web::Json<LoginReqDto>,
    pool: web::Data<MySqlPool>,
    config: web::Data<Config>,
) -> impl Responder {
    info!("Login request received");

    if user.full_name.trim().is_empty() || user.password.is_empty() {
        info!("Validation failed: empty name or password");
        return HttpResponse::BadRequest().body("Name or password required");
    }

    debug!("Fetching person from directory");

    // Full name is the practical identity key; uniqueness is not enforced
    // in storage, the first matching row wins.
    let person = match sqlx::query_as::<_, PersonSql>(
        r#"
        SELECT id, full_name, password, role, email
        FROM personnel
        WHERE full_name = ?
        ORDER BY id
        LIMIT 1
        "#,
    )
    .bind(user.full_name.trim())
    .fetch_optional(pool.get_ref())
    .await
    {
        Ok(Some(person)) => {
            debug!(person_id = person.id, "Person found");
            person
        }
        Ok(None) => {
            info!("Invalid credentials: person not found");
            return HttpResponse::Unauthorized().body("Invalid credentials");
        }
        Err(e) => {
            error!(error = %e, "Database error while fetching person");
            return HttpResponse::InternalServerError().finish();
        }
    };

    // Plaintext comparison, as the directory stores the secret.
    if person.password != user.password {
        info!("Invalid credentials: password mismatch");
        return HttpResponse::Unauthorized().body("Invalid credentials");
    }

    let role = match person.role.parse::<Role>() {
        Ok(r) => r,
        Err(_) => {
            error!(person_id = person.id, role = %person.role, "Unknown role on directory row");
            return HttpResponse::InternalServerError().finish();
        }
    };

    debug!("Generating access token");

    let access_token = generate_access_token(
        person.id,
        person.full_name.clone(),
        role,
        person.email.clone(),
        &config.jwt_secret,
        config.access_token_ttl,
    );

    info!("Login successful");

    HttpResponse::Ok().json(LoginResponse { access_token })
}
