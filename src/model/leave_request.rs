use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveType {
    Annual,
    Excuse,
    Unpaid,
    Sick,
    Maternity,
    Paternity,
    Marriage,
    Bereavement,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Annual => "annual",
            LeaveType::Excuse => "excuse",
            LeaveType::Unpaid => "unpaid",
            LeaveType::Sick => "sick",
            LeaveType::Maternity => "maternity",
            LeaveType::Paternity => "paternity",
            LeaveType::Marriage => "marriage",
            LeaveType::Bereavement => "bereavement",
        }
    }

    /// Display label used on the printed leave form.
    pub fn label_tr(&self) -> &'static str {
        match self {
            LeaveType::Annual => "Yıllık İzin",
            LeaveType::Excuse => "Mazeret İzni",
            LeaveType::Unpaid => "Ücretsiz İzin",
            LeaveType::Sick => "Raporlu İzin",
            LeaveType::Maternity => "Doğum İzni",
            LeaveType::Paternity => "Babalık İzni",
            LeaveType::Marriage => "Evlenme İzni",
            LeaveType::Bereavement => "Cenaze İzni",
        }
    }
}

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Deleted,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
            LeaveStatus::Deleted => "deleted",
        }
    }
}

/// Approval note stamped onto a request when it is approved. The wording is
/// the fixed template the HR forms expect.
pub fn approval_note(approver: &str, date: NaiveDate) -> String {
    format!("{approver} tarafından {date} tarihinde onaylandı")
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "person_id": 7,
        "full_name": "Ayşe Yılmaz",
        "department": "Bordro",
        "job_title": "Uzman",
        "leave_type": "annual",
        "start_date": "2025-03-01",
        "end_date": "2025-03-05",
        "reason": "Yıllık izin",
        "status": "pending",
        "approval_note": null
    })
)]
pub struct LeaveRequest {
    #[schema(example = 1)]
    pub id: u64,

    /// Requester's directory id. The name/department/title below are a
    /// snapshot taken at submission; the request survives directory deletes.
    #[schema(example = 7)]
    pub person_id: u64,

    #[schema(example = "Ayşe Yılmaz")]
    pub full_name: String,

    #[schema(example = "Bordro", nullable = true)]
    pub department: Option<String>,

    #[schema(example = "Uzman", nullable = true)]
    pub job_title: Option<String>,

    #[schema(example = "annual")]
    pub leave_type: String,

    #[schema(example = "2025-03-01", value_type = String, format = "date")]
    pub start_date: NaiveDate,

    #[schema(example = "2025-03-05", value_type = String, format = "date")]
    pub end_date: NaiveDate,

    #[schema(example = "Yıllık izin", nullable = true)]
    pub reason: Option<String>,

    #[schema(example = "pending")]
    pub status: String,

    #[schema(nullable = true)]
    pub approval_note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_note_has_name_and_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 6).unwrap();
        let note = approval_note("Mehmet Kaya", date);
        assert_eq!(note, "Mehmet Kaya tarafından 2025-03-06 tarihinde onaylandı");
    }

    #[test]
    fn leave_type_round_trips_through_stored_form() {
        assert_eq!("sick".parse::<LeaveType>().unwrap(), LeaveType::Sick);
        assert_eq!(LeaveType::Bereavement.as_str(), "bereavement");
        assert_eq!(LeaveType::Annual.label_tr(), "Yıllık İzin");
    }

    #[test]
    fn status_round_trips_through_stored_form() {
        assert_eq!("deleted".parse::<LeaveStatus>().unwrap(), LeaveStatus::Deleted);
        assert_eq!(LeaveStatus::Approved.as_str(), "approved");
    }
}
