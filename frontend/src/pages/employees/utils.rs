use crate::{
    api::{ApiError, Employee, EmployeeUpdate, NewEmployee, ProfileImage},
    utils::listing::Searchable,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub const EMPLOYEES_PATH: &str = "/admin-dashboard/employees";
pub const DEFAULT_AVATAR: &str = "/avatar.png";

pub const GENDERS: [(&str, &str); 3] = [("male", "Male"), ("female", "Female"), ("other", "Other")];
pub const MARITAL_STATUSES: [(&str, &str); 2] = [("single", "Single"), ("married", "Married")];
pub const ROLES: [(&str, &str); 2] = [("admin", "Admin"), ("employee", "Employee")];

impl Searchable for Employee {
    type Filter = ();

    fn search_fields(&self) -> Vec<&str> {
        vec![self.employee_code.as_str(), self.name(), self.department_name()]
    }
}

fn required(value: &str, label: &str) -> Result<String, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ApiError::validation(format!("{} is required", label)))
    } else {
        Ok(value.to_string())
    }
}

pub fn parse_salary(raw: &str) -> Result<f64, ApiError> {
    let raw = required(raw, "Salary")?;
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ApiError::validation("Salary must be a positive number")),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployeeForm {
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

impl Default for NewEmployeeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            date_of_birth: String::new(),
            gender: String::new(),
            marital_status: String::new(),
            joining_date: String::new(),
            designation: String::new(),
            department: String::new(),
            salary: String::new(),
            role: "employee".into(),
            password: String::new(),
            profile_image: None,
        }
    }
}

impl NewEmployeeForm {
    pub fn to_new_employee(&self) -> Result<NewEmployee, ApiError> {
        let name = required(&self.name, "Name")?;
        let email = required(&self.email, "Email")?;
        let salary = parse_salary(&self.salary)?;
        if self.password.is_empty() {
            return Err(ApiError::validation("Password is required"));
        }
        Ok(NewEmployee {
            name,
            email,
            date_of_birth: required(&self.date_of_birth, "Date of birth")?,
            gender: required(&self.gender, "Gender")?,
            marital_status: required(&self.marital_status, "Marital status")?,
            joining_date: required(&self.joining_date, "Joining date")?,
            designation: required(&self.designation, "Designation")?,
            department: required(&self.department, "Department")?,
            salary: salary.to_string(),
            role: required(&self.role, "Role")?,
            password: self.password.clone(),
            profile_image: self.profile_image.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeEditForm {
    pub name: String,
    pub marital_status: String,
    pub designation: String,
    pub salary: String,
    pub department: String,
    pub role: String,
}

impl EmployeeEditForm {
    pub fn from_employee(employee: &Employee) -> Self {
        let user = employee.user.clone().unwrap_or_default();
        Self {
            name: user.name,
            marital_status: employee.marital_status.clone().unwrap_or_default(),
            designation: employee.designation.clone(),
            salary: employee.salary.to_string(),
            department: employee
                .department
                .as_ref()
                .map(|d| d.id.clone())
                .unwrap_or_default(),
            role: user.role.as_str().to_string(),
        }
    }

    pub fn to_update(&self) -> Result<EmployeeUpdate, ApiError> {
        Ok(EmployeeUpdate {
            name: required(&self.name, "Name")?,
            marital_status: required(&self.marital_status, "Marital status")?,
            designation: required(&self.designation, "Designation")?,
            salary: parse_salary(&self.salary)?,
            department: required(&self.department, "Department")?,
            role: required(&self.role, "Role")?,
        })
    }
}

/// Display date for the table and profile; "N/A" when absent.
pub fn display_date(raw: Option<&str>) -> String {
    match raw {
        Some(raw) if !raw.trim().is_empty() => crate::utils::time::format_display_date(raw),
        _ => "N/A".into(),
    }
}

/// Reads the chosen profile picture into memory for the multipart upload.
pub async fn read_profile_image(file: web_sys::File) -> Result<ProfileImage, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::validation("Could not read the selected image"))?;
    let bytes = buffer
        .dyn_into::<js_sys::ArrayBuffer>()
        .map(|buffer| js_sys::Uint8Array::new(&buffer).to_vec())
        .map_err(|_| ApiError::validation("Could not read the selected image"))?;
    let mime_type = match file.type_() {
        t if t.is_empty() => "application/octet-stream".to_string(),
        t => t,
    };
    Ok(ProfileImage {
        file_name: file.name(),
        mime_type,
        bytes,
    })
}
