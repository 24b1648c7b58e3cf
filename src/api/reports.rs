use crate::auth::auth::AuthUser;
use crate::model::leave_request::{LeaveRequest, LeaveStatus, LeaveType};
use crate::model::person::Person;
use crate::utils::pdf::{LeaveFormData, form_filename, render_leave_form};
use crate::utils::xlsx::write_sheet;
use actix_web::http::header::ContentDisposition;
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use sqlx::MySqlPool;
use utoipa::{IntoParams, ToSchema};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const EXPORT_HEADERS: [&str; 11] = [
    "id",
    "person_id",
    "full_name",
    "department",
    "job_title",
    "leave_type",
    "start_date",
    "end_date",
    "reason",
    "status",
    "approval_note",
];

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct ExportFilter {
    /// Filter by leave status; omit for the full table
    #[schema(example = "approved")]
    pub status: Option<String>,
}

/* =========================
Company-wide spreadsheet export (HR)
========================= */
#[utoipa::path(
    get,
    path = "/api/v1/leave/export",
    params(ExportFilter),
    responses(
        (status = 200, description = "xlsx download, one sheet of headers + rows"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Reports"
)]
pub async fn export_leaves(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    query: web::Query<ExportFilter>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr()?;

    let mut sql = String::from("SELECT * FROM leave_requests");
    if query.status.is_some() {
        sql.push_str(" WHERE status = ?");
    }
    sql.push_str(" ORDER BY id");

    let mut data_q = sqlx::query_as::<_, LeaveRequest>(&sql);
    if let Some(status) = query.status.as_deref() {
        data_q = data_q.bind(status);
    }

    let leaves = data_q.fetch_all(pool.get_ref()).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to fetch leave requests for export");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    let rows: Vec<Vec<String>> = leaves
        .iter()
        .map(|lr| {
            vec![
                lr.id.to_string(),
                lr.person_id.to_string(),
                lr.full_name.clone(),
                lr.department.clone().unwrap_or_default(),
                lr.job_title.clone().unwrap_or_default(),
                lr.leave_type.clone(),
                lr.start_date.to_string(),
                lr.end_date.to_string(),
                lr.reason.clone().unwrap_or_default(),
                lr.status.clone(),
                lr.approval_note.clone().unwrap_or_default(),
            ]
        })
        .collect();

    let bytes = write_sheet("Sayfa1", &EXPORT_HEADERS, &rows).map_err(|e| {
        tracing::error!(error = %e, "Failed to build export workbook");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok()
        .content_type(XLSX_MIME)
        .insert_header(ContentDisposition::attachment("tum_talepler.xlsx"))
        .body(bytes))
}

/* =========================
Leave form document (approved requests only)
========================= */
#[utoipa::path(
    get,
    path = "/api/v1/leave/{leave_id}/document",
    params(
        ("leave_id" = u64, Path, description = "ID of the approved leave request")
    ),
    responses(
        (status = 200, description = "PDF download of the leave form"),
        (status = 400, description = "Request is not approved"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Leave request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Reports"
)]
pub async fn leave_document(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let leave_id = path.into_inner();

    let leave = sqlx::query_as::<_, LeaveRequest>("SELECT * FROM leave_requests WHERE id = ?")
        .bind(leave_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, leave_id, "Failed to fetch leave request");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Leave request not found"))?;

    // The requester's directory row, if it still exists; fills the sicil,
    // phone and mail cells of the form.
    let person = sqlx::query_as::<_, Person>("SELECT * FROM personnel WHERE id = ?")
        .bind(leave.person_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, leave_id, "Failed to fetch requester");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    if leave.person_id != auth.person_id
        && !auth.can_decide_for(person.as_ref().and_then(|p| p.approver_email.as_deref()))
    {
        return Err(actix_web::error::ErrorForbidden("Forbidden"));
    }

    if leave.status != LeaveStatus::Approved.as_str() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Only approved requests have a printable form"
        })));
    }

    let type_label = leave
        .leave_type
        .parse::<LeaveType>()
        .map(|t| t.label_tr().to_string())
        .unwrap_or_else(|_| leave.leave_type.clone());

    let data = LeaveFormData {
        full_name: leave.full_name.clone(),
        registration_no: person
            .as_ref()
            .and_then(|p| p.registration_no.clone())
            .unwrap_or_default(),
        department: leave.department.clone().unwrap_or_default(),
        job_title: leave.job_title.clone().unwrap_or_default(),
        phone: person
            .as_ref()
            .and_then(|p| p.phone.clone())
            .unwrap_or_default(),
        email: person
            .as_ref()
            .and_then(|p| p.email.clone())
            .unwrap_or_default(),
        leave_type: type_label.clone(),
        start_date: leave.start_date.to_string(),
        end_date: leave.end_date.to_string(),
        reason: leave.reason.clone().unwrap_or_default(),
        approval_note: leave.approval_note.clone(),
    };

    let bytes = render_leave_form(&data).map_err(|e| {
        tracing::error!(error = %e, leave_id, "Failed to render leave form");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(ContentDisposition::attachment(form_filename(
            &leave.full_name,
            &type_label,
        )))
        .body(bytes))
}
