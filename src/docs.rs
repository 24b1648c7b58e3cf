use crate::api::leave_request::{BulkDelete, CreateLeave, LeaveFilter, LeaveListResponse};
use crate::api::person::{CreatePerson, PersonListResponse, PersonQuery};
use crate::api::reports::ExportFilter;
use crate::model::leave_request::{LeaveRequest, LeaveStatus, LeaveType};
use crate::model::person::Person;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Portal API",
        version = "1.0.0",
        description = r#"
## HR Leave Portal

This API powers the internal leave-request portal: employees submit leave
requests, managers approve or reject them, HR administers the personnel
directory and exports reports.

### 🔹 Key Features
- **Leave Requests**
  - Submit, track, edit and withdraw requests; date-range, one-year-span
    and overlap validation on every submission
- **Approval Workflow**
  - Pending queue scoped to the registered approver; approve/reject with a
    stamped approval note; terminal states are immutable
- **Personnel Directory**
  - Create, list, delete and bulk-import staff records (xlsx)
- **Reports**
  - Company-wide xlsx export and printable PDF leave forms

### 🔐 Security
Endpoints are protected using **JWT Bearer authentication**. Approval and
administration require the **Manager** or **HR** role.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::leave_request::create_leave,
        crate::api::leave_request::my_leaves,
        crate::api::leave_request::update_leave,
        crate::api::leave_request::delete_leave,
        crate::api::leave_request::pending_approvals,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,
        crate::api::leave_request::get_leave,
        crate::api::leave_request::bulk_delete_leaves,
        crate::api::leave_request::leave_list,

        crate::api::person::create_person,
        crate::api::person::list_personnel,
        crate::api::person::delete_person,
        crate::api::person::import_personnel,

        crate::api::reports::export_leaves,
        crate::api::reports::leave_document
    ),
    components(
        schemas(
            LeaveType,
            LeaveStatus,
            LeaveRequest,
            CreateLeave,
            LeaveFilter,
            LeaveListResponse,
            BulkDelete,
            Person,
            CreatePerson,
            PersonQuery,
            PersonListResponse,
            ExportFilter
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Leave", description = "Leave request lifecycle APIs"),
        (name = "Personnel", description = "Personnel directory administration APIs"),
        (name = "Reports", description = "Spreadsheet and PDF export APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
