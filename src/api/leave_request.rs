use crate::auth::auth::AuthUser;
use crate::model::leave_request::{LeaveRequest, LeaveStatus, LeaveType, approval_note};
use crate::model::person::Person;
use crate::utils::mailer::{Mailer, notify_best_effort};
use crate::validation::validate_range;
use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use sqlx::MySqlPool;
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, ToSchema)]
pub struct CreateLeave {
    #[schema(example = "annual")]
    pub leave_type: LeaveType,
    #[schema(example = "2025-03-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2025-03-05", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "Yıllık izin", nullable = true)]
    pub reason: Option<String>,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct LeaveFilter {
    /// Filter by requester id
    #[schema(example = 7)]
    pub person_id: Option<u64>,
    /// Filter by leave status
    #[schema(example = "pending")]
    pub status: Option<String>,
    /// Pagination page number (start with 1)
    #[schema(example = 1)]
    pub page: Option<u64>,
    /// Pagination per page number
    #[schema(example = 10)]
    pub per_page: Option<u64>,
}

#[derive(Deserialize, ToSchema)]
pub struct BulkDelete {
    #[schema(example = json!([3, 4, 5]))]
    pub ids: Vec<u64>,
}

#[derive(serde::Serialize, ToSchema)]
pub struct LeaveListResponse {
    pub data: Vec<LeaveRequest>,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 10)]
    pub per_page: u32,
    #[schema(example = 1)]
    pub total: i64,
}

// Helper enum for typed SQLx binding
enum FilterValue<'a> {
    U64(u64),
    Str(&'a str),
}

/// Non-deleted date ranges of one requester; the request being edited is
/// excluded from its own overlap check.
async fn existing_ranges(
    pool: &MySqlPool,
    person_id: u64,
    exclude_id: Option<u64>,
) -> Result<Vec<(NaiveDate, NaiveDate)>, sqlx::Error> {
    let mut sql = String::from(
        "SELECT start_date, end_date FROM leave_requests WHERE person_id = ? AND status <> ?",
    );
    if exclude_id.is_some() {
        sql.push_str(" AND id <> ?");
    }

    let mut query = sqlx::query_as::<_, (NaiveDate, NaiveDate)>(&sql)
        .bind(person_id)
        .bind(LeaveStatus::Deleted.as_str());
    if let Some(id) = exclude_id {
        query = query.bind(id);
    }

    query.fetch_all(pool).await
}

async fn fetch_request(pool: &MySqlPool, id: u64) -> Result<Option<LeaveRequest>, sqlx::Error> {
    sqlx::query_as::<_, LeaveRequest>("SELECT * FROM leave_requests WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Registered approver address of a requester, if the directory row still
/// exists and has one.
async fn approver_email_of(pool: &MySqlPool, person_id: u64) -> Result<Option<String>, sqlx::Error> {
    let row = sqlx::query_scalar::<_, Option<String>>(
        "SELECT approver_email FROM personnel WHERE id = ?",
    )
    .bind(person_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.flatten())
}

/* =========================
Create leave request
========================= */
#[utoipa::path(
    post,
    path = "/api/v1/leave",
    request_body(
        content = CreateLeave,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Leave request submitted successfully",
         body = Object,
         example = json!({
            "message": "Leave request submitted",
            "status": "pending"
         })
        ),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    mailer: web::Data<Option<Mailer>>,
    payload: web::Json<CreateLeave>,
) -> actix_web::Result<impl Responder> {
    // Snapshot source: the requester's own directory row.
    let person = sqlx::query_as::<_, Person>("SELECT * FROM personnel WHERE id = ?")
        .bind(auth.person_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, person_id = auth.person_id, "Failed to fetch requester");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?
        .ok_or_else(|| actix_web::error::ErrorForbidden("No directory record"))?;

    let ranges = existing_ranges(pool.get_ref(), auth.person_id, None)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, person_id = auth.person_id, "Failed to load existing requests");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    if let Err(reason) = validate_range(payload.start_date, payload.end_date, &ranges) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": reason.to_string()
        })));
    }

    sqlx::query(
        r#"
        INSERT INTO leave_requests
            (person_id, full_name, department, job_title, leave_type, start_date, end_date, reason, status)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(person.id)
    .bind(&person.full_name)
    .bind(&person.department)
    .bind(&person.job_title)
    .bind(payload.leave_type.as_str())
    .bind(payload.start_date)
    .bind(payload.end_date)
    .bind(&payload.reason)
    .bind(LeaveStatus::Pending.as_str())
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, person_id = auth.person_id, "Failed to create leave request");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    // Best-effort approver notification; never blocks the submission.
    notify_best_effort(
        mailer.get_ref().clone(),
        person.approver_email.clone(),
        "Yeni İzin Talebi".to_string(),
        format!("{} yeni talep oluşturdu.", person.full_name),
    );

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Leave request submitted",
        "status": "pending"
    })))
}

/* =========================
My requests (status tracking)
========================= */
#[utoipa::path(
    get,
    path = "/api/v1/leave/my",
    responses(
        (status = 200, description = "Requester's non-deleted requests, newest first", body = [LeaveRequest]),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
pub async fn my_leaves(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
) -> actix_web::Result<impl Responder> {
    let leaves = sqlx::query_as::<_, LeaveRequest>(
        r#"
        SELECT * FROM leave_requests
        WHERE person_id = ? AND status <> ?
        ORDER BY id DESC
        "#,
    )
    .bind(auth.person_id)
    .bind(LeaveStatus::Deleted.as_str())
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, person_id = auth.person_id, "Failed to fetch own requests");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(leaves))
}

/* =========================
Edit while pending (full overwrite)
========================= */
#[utoipa::path(
    put,
    path = "/api/v1/leave/{leave_id}",
    params(("leave_id" = u64, Path, description = "ID of the leave request to edit")),
    request_body = CreateLeave,
    responses(
        (status = 200, description = "Leave request updated"),
        (status = 400, description = "Validation failed or already processed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Leave request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
pub async fn update_leave(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
    payload: web::Json<CreateLeave>,
) -> actix_web::Result<impl Responder> {
    let leave_id = path.into_inner();

    let leave = fetch_request(pool.get_ref(), leave_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, leave_id, "Failed to fetch leave request");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Leave request not found"))?;

    if leave.person_id != auth.person_id {
        return Err(actix_web::error::ErrorForbidden("Not the owner"));
    }

    if leave.status != LeaveStatus::Pending.as_str() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Only pending requests can be edited"
        })));
    }

    let ranges = existing_ranges(pool.get_ref(), auth.person_id, Some(leave_id))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, leave_id, "Failed to load existing requests");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    if let Err(reason) = validate_range(payload.start_date, payload.end_date, &ranges) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": reason.to_string()
        })));
    }

    let result = sqlx::query(
        r#"
        UPDATE leave_requests
        SET leave_type = ?, start_date = ?, end_date = ?, reason = ?
        WHERE id = ?
        AND person_id = ?
        AND status = ?
        "#,
    )
    .bind(payload.leave_type.as_str())
    .bind(payload.start_date)
    .bind(payload.end_date)
    .bind(&payload.reason)
    .bind(leave_id)
    .bind(auth.person_id)
    .bind(LeaveStatus::Pending.as_str())
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, leave_id, "Failed to update leave request");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Leave request not found or already processed"
        })));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Leave request updated"
    })))
}

/* =========================
Soft delete own pending request
========================= */
#[utoipa::path(
    delete,
    path = "/api/v1/leave/{leave_id}",
    params(("leave_id" = u64, Path, description = "ID of the leave request to delete")),
    responses(
        (status = 200, description = "Leave request deleted"),
        (status = 400, description = "Not found or already processed"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
pub async fn delete_leave(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let leave_id = path.into_inner();

    // Soft delete: the row stays behind for audit reads by id.
    let result = sqlx::query(
        r#"
        UPDATE leave_requests
        SET status = ?
        WHERE id = ?
        AND person_id = ?
        AND status = ?
        "#,
    )
    .bind(LeaveStatus::Deleted.as_str())
    .bind(leave_id)
    .bind(auth.person_id)
    .bind(LeaveStatus::Pending.as_str())
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, leave_id, "Failed to delete leave request");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Leave request not found or already processed"
        })));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Leave request deleted"
    })))
}

/* =========================
Pending approvals (Manager/HR)
========================= */
#[utoipa::path(
    get,
    path = "/api/v1/leave/pending",
    responses(
        (status = 200, description = "Pending requests awaiting the caller's decision", body = [LeaveRequest]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
pub async fn pending_approvals(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
) -> actix_web::Result<impl Responder> {
    auth.require_manager_or_hr()?;

    let leaves = if auth.role == crate::model::role::Role::Hr {
        sqlx::query_as::<_, LeaveRequest>(
            "SELECT * FROM leave_requests WHERE status = ? ORDER BY id DESC",
        )
        .bind(LeaveStatus::Pending.as_str())
        .fetch_all(pool.get_ref())
        .await
    } else {
        // A manager sees the requests of their registered reports only.
        let Some(email) = auth.email.as_deref() else {
            return Ok(HttpResponse::Ok().json(Vec::<LeaveRequest>::new()));
        };
        sqlx::query_as::<_, LeaveRequest>(
            r#"
            SELECT lr.* FROM leave_requests lr
            JOIN personnel p ON p.id = lr.person_id
            WHERE lr.status = ? AND p.approver_email = ?
            ORDER BY lr.id DESC
            "#,
        )
        .bind(LeaveStatus::Pending.as_str())
        .bind(email)
        .fetch_all(pool.get_ref())
        .await
    }
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to fetch pending approvals");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(leaves))
}

/* =========================
Approve leave (Manager/HR)
========================= */
#[utoipa::path(
    put,
    path = "/api/v1/leave/{leave_id}/approve",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to approve")
    ),
    responses(
        (status = 200, description = "Leave approved successfully", body = Object, example = json!({
            "message": "Leave approved"
        })),
        (status = 400, description = "Leave request not found or already processed", body = Object, example = json!({
            "message": "Leave request not found or already processed"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn approve_leave(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_manager_or_hr()?;

    let leave_id = path.into_inner();

    let leave = fetch_request(pool.get_ref(), leave_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, leave_id, "Failed to fetch leave request");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Leave request not found"))?;

    let approver_email = approver_email_of(pool.get_ref(), leave.person_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, leave_id, "Failed to fetch requester's approver");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    if !auth.can_decide_for(approver_email.as_deref()) {
        return Err(actix_web::error::ErrorForbidden("Not the registered approver"));
    }

    let note = approval_note(&auth.full_name, Local::now().date_naive());

    // Terminal states are immutable: the status guard makes a second
    // approve/reject affect zero rows.
    let result = sqlx::query(
        r#"
        UPDATE leave_requests
        SET status = ?, approval_note = ?
        WHERE id = ?
        AND status = ?
        "#,
    )
    .bind(LeaveStatus::Approved.as_str())
    .bind(&note)
    .bind(leave_id)
    .bind(LeaveStatus::Pending.as_str())
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, leave_id, "Approve leave failed");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Leave request not found or already processed"
        })));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Leave approved"
    })))
}

/* =========================
Reject leave (Manager/HR)
========================= */
#[utoipa::path(
    put,
    path = "/api/v1/leave/{leave_id}/reject",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to reject")
    ),
    responses(
        (status = 200, description = "Leave rejected successfully", body = Object, example = json!({
            "message": "Leave rejected"
        })),
        (status = 400, description = "Leave request not found or already processed", body = Object, example = json!({
            "message": "Leave request not found or already processed"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn reject_leave(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_manager_or_hr()?;

    let leave_id = path.into_inner();

    let leave = fetch_request(pool.get_ref(), leave_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, leave_id, "Failed to fetch leave request");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Leave request not found"))?;

    let approver_email = approver_email_of(pool.get_ref(), leave.person_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, leave_id, "Failed to fetch requester's approver");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    if !auth.can_decide_for(approver_email.as_deref()) {
        return Err(actix_web::error::ErrorForbidden("Not the registered approver"));
    }

    let result = sqlx::query(
        r#"
        UPDATE leave_requests
        SET status = ?
        WHERE id = ?
        AND status = ?
        "#,
    )
    .bind(LeaveStatus::Rejected.as_str())
    .bind(leave_id)
    .bind(LeaveStatus::Pending.as_str())
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!(error = %e, leave_id, "Reject leave failed");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Leave request not found or already processed"
        })));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Leave rejected"
    })))
}

/* =========================
Audit read by id
========================= */
#[utoipa::path(
    get,
    path = "/api/v1/leave/{leave_id}",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to fetch")
    ),
    responses(
        (status = 200, description = "Leave request found (any status, deleted included)", body = LeaveRequest),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Leave request not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn get_leave(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let leave_id = path.into_inner();

    let leave = fetch_request(pool.get_ref(), leave_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, leave_id, "Failed to fetch leave request");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Leave request not found"))?;

    if leave.person_id != auth.person_id {
        let approver_email = approver_email_of(pool.get_ref(), leave.person_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, leave_id, "Failed to fetch requester's approver");
                actix_web::error::ErrorInternalServerError("Internal Server Error")
            })?;

        if !auth.can_decide_for(approver_email.as_deref()) {
            return Err(actix_web::error::ErrorForbidden("Forbidden"));
        }
    }

    Ok(HttpResponse::Ok().json(leave))
}

/* =========================
Administrative bulk soft delete (HR)
========================= */
#[utoipa::path(
    put,
    path = "/api/v1/leave/delete",
    request_body = BulkDelete,
    responses(
        (status = 200, description = "Requests soft-deleted"),
        (status = 400, description = "Empty id list"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
pub async fn bulk_delete_leaves(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    payload: web::Json<BulkDelete>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr()?;

    if payload.ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "No ids provided"
        })));
    }

    let placeholders = vec!["?"; payload.ids.len()].join(", ");
    let sql = format!(
        "UPDATE leave_requests SET status = ? WHERE id IN ({})",
        placeholders
    );

    let mut query = sqlx::query(&sql).bind(LeaveStatus::Deleted.as_str());
    for id in &payload.ids {
        query = query.bind(id);
    }

    let result = query.execute(pool.get_ref()).await.map_err(|e| {
        tracing::error!(error = %e, "Bulk delete failed");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Requests deleted",
        "deleted": result.rows_affected()
    })))
}

/* =========================
Company-wide listing (HR)
========================= */
#[utoipa::path(
    get,
    path = "/api/v1/leave",
    params(LeaveFilter),
    responses(
        (status = 200, description = "Paginated leave list", body = LeaveListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn leave_list(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    query: web::Query<LeaveFilter>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr()?;

    // -------------------------
    // Pagination
    // -------------------------
    let per_page = query.per_page.unwrap_or(10).min(100);
    let page = query.page.unwrap_or(1).max(1);
    let offset = (page - 1) * per_page;

    // -------------------------
    // WHERE clause
    // -------------------------
    let mut where_sql = String::from(" WHERE 1=1");
    let mut args: Vec<FilterValue> = Vec::new();

    if let Some(person_id) = query.person_id {
        where_sql.push_str(" AND person_id = ?");
        args.push(FilterValue::U64(person_id));
    }

    if let Some(status) = query.status.as_deref() {
        where_sql.push_str(" AND status = ?");
        args.push(FilterValue::Str(status));
    }

    // -------------------------
    // COUNT query
    // -------------------------
    let count_sql = format!("SELECT COUNT(*) FROM leave_requests{}", where_sql);

    let mut count_q = sqlx::query_scalar::<_, i64>(&count_sql);
    for arg in &args {
        count_q = match arg {
            FilterValue::U64(v) => count_q.bind(*v),
            FilterValue::Str(s) => count_q.bind(*s),
        };
    }

    let total = count_q.fetch_one(pool.get_ref()).await.map_err(|e| {
        tracing::error!(error=%e, "Failed to count leave requests");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    // -------------------------
    // DATA query
    // -------------------------
    let data_sql = format!(
        r#"
        SELECT * FROM leave_requests
        {}
        ORDER BY id DESC
        LIMIT ? OFFSET ?
        "#,
        where_sql
    );

    let mut data_q = sqlx::query_as::<_, LeaveRequest>(&data_sql);
    for arg in args {
        data_q = match arg {
            FilterValue::U64(v) => data_q.bind(v),
            FilterValue::Str(s) => data_q.bind(s),
        };
    }

    let leaves = data_q
        .bind(per_page)
        .bind(offset)
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error=%e, "Failed to fetch leave list");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    // -------------------------
    // Response
    // -------------------------
    let response = LeaveListResponse {
        data: leaves,
        page: page as u32,
        per_page: per_page as u32,
        total,
    };

    Ok(HttpResponse::Ok().json(response))
}
