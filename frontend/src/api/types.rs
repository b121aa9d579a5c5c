use leptos::{IntoView, View};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// References the API may send either populated or as a bare `_id`.
pub trait FromId {
    fn from_id(id: String) -> Self;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocOrId<T> {
    Doc(T),
    Id(String),
}

fn populated<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromId,
{
    let value = Option::<DocOrId<T>>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        DocOrId::Doc(doc) => doc,
        DocOrId::Id(id) => T::from_id(id),
    }))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
            Role::Unknown => "unknown",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "employee" => Role::Employee,
            _ => Role::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(rename = "isBlocked", default)]
    pub is_blocked: bool,
    #[serde(
        rename = "profileImage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub token: String,
    pub user: SessionUser,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "oldPassword")]
    pub old_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
    #[serde(rename = "confirmedPassword")]
    pub confirmed_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "dep_name", default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl FromId for Department {
    fn from_id(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentPayload {
    pub dep_name: String,
    pub description: String,
}

/// The login account linked to an employee record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUser {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(
        rename = "profileImage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_image: Option<String>,
}

impl FromId for EmployeeUser {
    fn from_id(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "employeeId", default)]
    pub employee_code: String,
    #[serde(rename = "userID", default, deserialize_with = "populated")]
    pub user: Option<EmployeeUser>,
    #[serde(default, deserialize_with = "populated")]
    pub department: Option<Department>,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub salary: f64,
    #[serde(rename = "dateofbirth", default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(rename = "materialStatus", default)]
    pub marital_status: Option<String>,
    #[serde(rename = "joiningDate", default)]
    pub joining_date: Option<String>,
}

impl Employee {
    pub fn name(&self) -> &str {
        self.user.as_ref().map(|u| u.name.as_str()).unwrap_or("N/A")
    }

    pub fn department_name(&self) -> &str {
        self.department
            .as_ref()
            .map(|d| d.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("N/A")
    }

    pub fn profile_image(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.profile_image.as_deref())
    }
}

/// Fields sent as `multipart/form-data` to `POST /employee/add`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub date_of_birth: String,
    pub gender: String,
    pub marital_status: String,
    pub joining_date: String,
    pub designation: String,
    pub department: String,
    pub salary: String,
    pub role: String,
    pub password: String,
    pub profile_image: Option<ProfileImage>,
}

impl NewEmployee {
    /// Form field names as the API expects them.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("dateofbirth", self.date_of_birth.clone()),
            ("gender", self.gender.clone()),
            ("materialStatus", self.marital_status.clone()),
            ("joiningDate", self.joining_date.clone()),
            ("designation", self.designation.clone()),
            ("department", self.department.clone()),
            ("salary", self.salary.clone()),
            ("role", self.role.clone()),
            ("password", self.password.clone()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: String,
    #[serde(rename = "materialStatus")]
    pub marital_status: String,
    pub designation: String,
    pub salary: f64,
    pub department: String,
    pub role: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    #[default]
    Sick,
    Casual,
    Annual,
    Unpaid,
    #[serde(other)]
    Other,
}

impl LeaveType {
    pub const ALL: [LeaveType; 4] = [
        LeaveType::Sick,
        LeaveType::Casual,
        LeaveType::Annual,
        LeaveType::Unpaid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Sick => "sick",
            LeaveType::Casual => "casual",
            LeaveType::Annual => "annual",
            LeaveType::Unpaid => "unpaid",
            LeaveType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Sick => "Sick Leave",
            LeaveType::Casual => "Casual Leave",
            LeaveType::Annual => "Annual Leave",
            LeaveType::Unpaid => "Unpaid Leave",
            LeaveType::Other => "Other Leave",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "sick" => LeaveType::Sick,
            "casual" => LeaveType::Casual,
            "annual" => LeaveType::Annual,
            "unpaid" => LeaveType::Unpaid,
            _ => LeaveType::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
            LeaveStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Unknown => "Unknown",
        }
    }
}

/// Employee snapshot embedded in a leave record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaveEmployee {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "employeeId", default)]
    pub employee_code: String,
    #[serde(rename = "userID", default, deserialize_with = "populated")]
    pub user: Option<EmployeeUser>,
    #[serde(default, deserialize_with = "populated")]
    pub department: Option<Department>,
    #[serde(default)]
    pub designation: String,
}

impl FromId for LeaveEmployee {
    fn from_id(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leave {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "employeeId", default, deserialize_with = "populated")]
    pub employee: Option<LeaveEmployee>,
    #[serde(rename = "leaveType", default)]
    pub leave_type: LeaveType,
    #[serde(rename = "startDate", default)]
    pub start_date: String,
    #[serde(rename = "endDate", default)]
    pub end_date: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: LeaveStatus,
    #[serde(rename = "appliedAt", alias = "createdAt", default)]
    pub applied_at: Option<String>,
}

impl Leave {
    pub fn employee_code(&self) -> &str {
        self.employee
            .as_ref()
            .map(|e| e.employee_code.as_str())
            .filter(|code| !code.is_empty())
            .unwrap_or("N/A")
    }

    pub fn employee_name(&self) -> &str {
        self.employee
            .as_ref()
            .and_then(|e| e.user.as_ref())
            .map(|u| u.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("N/A")
    }

    pub fn department_name(&self) -> &str {
        self.employee
            .as_ref()
            .and_then(|e| e.department.as_ref())
            .map(|d| d.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("N/A")
    }

    pub fn days(&self) -> i64 {
        crate::utils::time::leave_days(&self.start_date, &self.end_date).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeavePayload {
    #[serde(rename = "leaveType")]
    pub leave_type: LeaveType,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    #[serde(default)]
    pub sick: u32,
    #[serde(default)]
    pub casual: u32,
    #[serde(default)]
    pub annual: u32,
    #[serde(default)]
    pub unpaid: u32,
}

impl Default for LeaveBalance {
    fn default() -> Self {
        Self {
            sick: 10,
            casual: 10,
            annual: 10,
            unpaid: 0,
        }
    }
}

impl LeaveBalance {
    pub fn entries(&self) -> [(LeaveType, u32); 4] {
        [
            (LeaveType::Sick, self.sick),
            (LeaveType::Casual, self.casual),
            (LeaveType::Annual, self.annual),
            (LeaveType::Unpaid, self.unpaid),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryEmployee {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "employeeId", default)]
    pub employee_code: String,
}

impl FromId for SalaryEmployee {
    fn from_id(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "employeeId", default, deserialize_with = "populated")]
    pub employee: Option<SalaryEmployee>,
    #[serde(rename = "basicSalary", default)]
    pub basic: f64,
    #[serde(rename = "Allowance", default)]
    pub allowance: f64,
    #[serde(rename = "Deductation", default)]
    pub deduction: f64,
    #[serde(rename = "netSalary", default)]
    pub net: f64,
    #[serde(default)]
    pub month: String,
    #[serde(rename = "payDate", default)]
    pub pay_date: String,
}

impl Salary {
    pub fn employee_code(&self) -> &str {
        self.employee
            .as_ref()
            .map(|e| e.employee_code.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryPayload {
    #[serde(rename = "employeeId")]
    pub employee_id: String,
    #[serde(rename = "basicSalary")]
    pub basic: f64,
    #[serde(rename = "Allowance")]
    pub allowance: f64,
    #[serde(rename = "Deductation")]
    pub deduction: f64,
    #[serde(rename = "payDate")]
    pub pay_date: String,
    pub month: String,
}

impl SalaryPayload {
    pub fn net(&self) -> f64 {
        self.basic + self.allowance - self.deduction
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaveSummary {
    #[serde(rename = "appliedFor", default)]
    pub applied_for: Vec<Value>,
    #[serde(default)]
    pub approved: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub rejected: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(rename = "totalEmployee", default)]
    pub total_employees: u64,
    #[serde(rename = "totalDepartment", default)]
    pub total_departments: u64,
    #[serde(rename = "totalSalary", default)]
    pub total_salary: f64,
    #[serde(rename = "leaveSummary", default)]
    pub leave_summary: LeaveSummary,
}

impl DashboardSummary {
    pub fn leave_requests(&self) -> usize {
        self.leave_summary.applied_for.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: code.into(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    /// Builds an error from a non-success response body, preferring `error`
    /// over `message`.
    pub fn from_body(status: u16, body: &Value) -> Self {
        let message = crate::api::client::body_message(body)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        let code = if status == 401 {
            "UNAUTHORIZED".to_string()
        } else {
            format!("HTTP_{}", status)
        };
        Self {
            error: message,
            code,
            details: body.get("details").cloned(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }
}
