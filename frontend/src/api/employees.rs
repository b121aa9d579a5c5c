use reqwest::{
    multipart::{Form, Part},
    Method,
};

use super::{
    client::{encode_segment, take_field, take_list, ApiClient},
    types::{ApiError, Employee, EmployeeUpdate, NewEmployee},
};

fn employee_form(employee: &NewEmployee) -> Result<Form, ApiError> {
    let mut form = employee
        .text_fields()
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value));

    if let Some(image) = &employee.profile_image {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| ApiError::validation(format!("Unsupported image type: {}", e)))?;
        form = form.part("profileImage", part);
    }
    Ok(form)
}

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let mut body = self.get_json("/employee").await?;
        take_list(&mut body, "employes")
    }

    pub async fn employees_by_department(&self, department_id: &str) -> Result<Vec<Employee>, ApiError> {
        let mut body = self
            .get_json(&format!("/employee/department/{}", encode_segment(department_id)))
            .await?;
        take_list(&mut body, "employee")
    }

    /// `POST /employee/add` as multipart so the profile image travels with the record.
    pub async fn add_employee(&self, employee: &NewEmployee) -> Result<(), ApiError> {
        let form = employee_form(employee)?;
        let builder = self.request(Method::POST, "/employee/add").await.multipart(form);
        self.execute(builder).await.map(|_| ())
    }

    pub async fn get_employee(&self, id: &str) -> Result<Employee, ApiError> {
        let mut body = self
            .get_json(&format!("/employee/{}", encode_segment(id)))
            .await?;
        take_field(&mut body, "employee")
    }

    pub async fn update_employee(&self, id: &str, update: &EmployeeUpdate) -> Result<(), ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/employee/{}", encode_segment(id)),
            update,
        )
        .await
        .map(|_| ())
    }

    pub async fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/employee/{}", encode_segment(id)))
            .await
            .map(|_| ())
    }
}
