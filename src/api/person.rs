use crate::auth::auth::AuthUser;
use crate::model::person::Person;
use crate::model::role::Role;
use crate::utils::xlsx::parse_personnel_sheet;
use actix_web::{HttpResponse, Responder, error::ErrorInternalServerError, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::MySqlPool;
use tracing::{debug, error};
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreatePerson {
    #[schema(example = "S-1042", nullable = true)]
    pub registration_no: Option<String>,
    #[schema(example = "Ayşe Yılmaz")]
    pub full_name: String,
    #[schema(example = "gizli", write_only = true)]
    pub password: String,
    #[schema(example = "Uzman", nullable = true)]
    pub job_title: Option<String>,
    #[schema(example = "Bordro", nullable = true)]
    pub department: Option<String>,
    #[schema(example = "ayse@company.com", nullable = true)]
    pub email: Option<String>,
    #[schema(example = "mehmet@company.com", nullable = true)]
    pub approver_email: Option<String>,
    #[schema(example = "personnel")]
    pub role: String,
    #[schema(example = "+905551234567", nullable = true)]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PersonQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct PersonListResponse {
    pub data: Vec<Person>,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 20)]
    pub per_page: u32,
    #[schema(example = 10)]
    pub total: i64,
}

/// Create Person
#[utoipa::path(
    post,
    path = "/api/v1/personnel",
    request_body = CreatePerson,
    responses(
        (status = 200, description = "Person created successfully", body = Object, example = json!({
            "message": "Person registered successfully"
        })),
        (status = 400, description = "Unknown role"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Personnel",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_person(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreatePerson>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr()?;

    let role = match payload.role.parse::<Role>() {
        Ok(r) => r,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "message": format!("Unknown role: {}", payload.role)
            })));
        }
    };

    let result = sqlx::query(
        r#"
        INSERT INTO personnel
        (registration_no, full_name, password, job_title, department, email, approver_email, role, phone)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&payload.registration_no)
    .bind(&payload.full_name)
    .bind(&payload.password)
    .bind(&payload.job_title)
    .bind(&payload.department)
    .bind(&payload.email)
    .bind(&payload.approver_email)
    .bind(role.as_str())
    .bind(&payload.phone)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => Ok(HttpResponse::Ok().json(json!({
            "message": "Person registered successfully"
        }))),
        Err(e) => {
            error!(error = %e, "Failed to create person");
            Ok(HttpResponse::InternalServerError().json(json!({
                "message": "Something went wrong, Contact with system admin"
            })))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/personnel",
    params(
        ("page", Query, description = "Page number"),
        ("per_page", Query, description = "Items per page"),
        ("search", Query, description = "Search by name or email")
    ),
    responses(
        (status = 200, description = "Paginated personnel list", body = PersonListResponse),
        (status = 403, description = "Forbidden")
    ),
    tag = "Personnel",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_personnel(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    query: web::Query<PersonQuery>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr()?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
    let offset = (page - 1) * per_page;

    // ---------- build WHERE clause dynamically ----------
    let mut where_clause = String::new();
    let mut like: Option<String> = None;

    if let Some(search) = &query.search {
        where_clause = "WHERE (full_name LIKE ? OR email LIKE ?)".to_string();
        like = Some(format!("%{}%", search));
    }

    // ---------- total count ----------
    let count_sql = format!("SELECT COUNT(*) FROM personnel {}", where_clause);
    debug!(sql = %count_sql, "Counting personnel");

    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    if let Some(like) = &like {
        count_query = count_query.bind(like).bind(like);
    }

    let total = count_query.fetch_one(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, "Failed to count personnel");
        ErrorInternalServerError("Database error")
    })?;

    // ---------- data query ----------
    let data_sql = format!(
        "SELECT * FROM personnel {} ORDER BY id DESC LIMIT ? OFFSET ?",
        where_clause
    );
    debug!(sql = %data_sql, page, per_page, offset, "Fetching personnel");

    let mut data_query = sqlx::query_as::<_, Person>(&data_sql);
    if let Some(like) = &like {
        data_query = data_query.bind(like).bind(like);
    }
    data_query = data_query.bind(per_page as i64).bind(offset as i64);

    let personnel = data_query.fetch_all(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, "Failed to fetch personnel");
        ErrorInternalServerError("Database error")
    })?;

    Ok(HttpResponse::Ok().json(PersonListResponse {
        data: personnel,
        page,
        per_page,
        total,
    }))
}

/// Delete Person
#[utoipa::path(
    delete,
    path = "/api/v1/personnel/{person_id}",
    params(
        ("person_id", Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Successfully deleted"
        })),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Person not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Personnel",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_person(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr()?;

    let person_id = path.into_inner();

    // Requests keep their snapshot columns; they survive this delete.
    let result = sqlx::query("DELETE FROM personnel WHERE id = ?")
        .bind(person_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(res) => {
            if res.rows_affected() == 0 {
                return Ok(HttpResponse::NotFound().json(json!({
                    "message": "Person not found"
                })));
            }

            Ok(HttpResponse::Ok().json(json!({
                "message": "Successfully deleted"
            })))
        }

        Err(e) => {
            error!(error = %e, person_id, "Failed to delete person");

            Ok(HttpResponse::InternalServerError().json(json!({
                "message": "Internal Server Error"
            })))
        }
    }
}

/// Bulk import from a spreadsheet with the fixed header set. The whole
/// sheet is parsed and validated first; one malformed row aborts the batch
/// before anything is committed.
#[utoipa::path(
    post,
    path = "/api/v1/personnel/import",
    request_body(content = Vec<u8>, description = "xlsx workbook", content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "All rows imported", body = Object, example = json!({
            "message": "Personnel imported",
            "imported": 42
        })),
        (status = 400, description = "Missing header or malformed row; nothing imported"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Personnel",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn import_personnel(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    body: web::Bytes,
) -> actix_web::Result<impl Responder> {
    auth.require_hr()?;

    let rows = match parse_personnel_sheet(&body) {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "message": format!("Import aborted: {e}")
            })));
        }
    };

    // Insert-only, all rows in one transaction so a storage failure cannot
    // leave a half-imported batch behind.
    let mut tx = pool.begin().await.map_err(|e| {
        error!(error = %e, "Failed to open import transaction");
        ErrorInternalServerError("Database error")
    })?;

    for row in &rows {
        sqlx::query(
            r#"
            INSERT INTO personnel
            (registration_no, full_name, password, job_title, department, email, approver_email, role, phone)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&row.registration_no)
        .bind(&row.full_name)
        .bind(&row.password)
        .bind(&row.job_title)
        .bind(&row.department)
        .bind(&row.email)
        .bind(&row.approver_email)
        .bind(row.role.as_str())
        .bind(&row.phone)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!(error = %e, full_name = %row.full_name, "Import insert failed");
            ErrorInternalServerError("Database error")
        })?;
    }

    tx.commit().await.map_err(|e| {
        error!(error = %e, "Failed to commit import transaction");
        ErrorInternalServerError("Database error")
    })?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Personnel imported",
        "imported": rows.len()
    })))
}
