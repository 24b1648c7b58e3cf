use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 7,
        "registration_no": "S-1042",
        "full_name": "Ayşe Yılmaz",
        "job_title": "Uzman",
        "department": "Bordro",
        "email": "ayse.yilmaz@company.com",
        "approver_email": "mehmet.kaya@company.com",
        "role": "personnel",
        "phone": "+905551234567"
    })
)]
pub struct Person {
    #[schema(example = 7)]
    pub id: u64,

    #[schema(example = "S-1042", nullable = true)]
    pub registration_no: Option<String>,

    /// Practical login identity. Uniqueness is not enforced in storage.
    #[schema(example = "Ayşe Yılmaz")]
    pub full_name: String,

    // Plaintext credential secret; never serialized out.
    #[serde(skip_serializing)]
    #[schema(write_only = true)]
    pub password: String,

    #[schema(example = "Uzman", nullable = true)]
    pub job_title: Option<String>,

    #[schema(example = "Bordro", nullable = true)]
    pub department: Option<String>,

    #[schema(example = "ayse.yilmaz@company.com", nullable = true)]
    pub email: Option<String>,

    /// The manager who approves this person's requests.
    #[schema(example = "mehmet.kaya@company.com", nullable = true)]
    pub approver_email: Option<String>,

    #[schema(example = "personnel")]
    pub role: String,

    #[schema(example = "+905551234567", nullable = true)]
    pub phone: Option<String>,
}
