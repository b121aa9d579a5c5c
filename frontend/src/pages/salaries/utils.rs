use crate::{
    api::{ApiError, Salary, SalaryPayload},
    utils::{format::parse_amount, listing::Searchable},
};

impl Searchable for Salary {
    type Filter = ();

    fn search_fields(&self) -> Vec<&str> {
        vec![self.employee_code()]
    }
}

/// Admin-side salary history for one employee record.
pub fn history_path(employee_id: &str) -> String {
    format!("/admin-dashboard/employees/salary/{}", employee_id)
}

pub fn record_count_label(count: usize) -> String {
    match count {
        1 => "1 record found".into(),
        n => format!("{} records found", n),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryFormState {
    pub department: String,
    pub employee_id: String,
    pub basic: String,
    pub allowance: String,
    pub deduction: String,
    pub month: String,
    pub pay_date: String,
}

impl SalaryFormState {
    /// Picking a new department invalidates the chosen employee.
    pub fn select_department(&mut self, department: String) {
        self.department = department;
        self.employee_id.clear();
    }

    /// Live `basic + allowance - deduction`; blank fields count as zero.
    pub fn net_preview(&self) -> f64 {
        parse_amount(&self.basic) + parse_amount(&self.allowance) - parse_amount(&self.deduction)
    }

    pub fn to_payload(&self) -> Result<SalaryPayload, ApiError> {
        if self.employee_id.trim().is_empty() {
            return Err(ApiError::validation("Please select an employee"));
        }
        let basic = match self.basic.trim() {
            "" => return Err(ApiError::validation("Basic salary is required")),
            raw => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(|| ApiError::validation("Basic salary must be a positive number"))?,
        };
        if self.month.trim().is_empty() {
            return Err(ApiError::validation("Salary month is required"));
        }
        if self.pay_date.trim().is_empty() {
            return Err(ApiError::validation("Payment date is required"));
        }
        Ok(SalaryPayload {
            employee_id: self.employee_id.clone(),
            basic,
            allowance: parse_amount(&self.allowance),
            deduction: parse_amount(&self.deduction),
            pay_date: self.pay_date.trim().to_string(),
            month: self.month.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SalaryEmployee;
    use crate::utils::listing::Listing;

    fn salary(id: &str, code: &str) -> Salary {
        Salary {
            id: id.into(),
            employee: Some(SalaryEmployee {
                id: format!("e-{}", id),
                employee_code: code.into(),
            }),
            basic: 1000.0,
            net: 1000.0,
            month: "2024-03".into(),
            ..Salary::default()
        }
    }

    fn form() -> SalaryFormState {
        SalaryFormState {
            department: "d1".into(),
            employee_id: "e1".into(),
            basic: "50000".into(),
            allowance: "5000".into(),
            deduction: "2000".into(),
            month: "2024-03".into(),
            pay_date: "2024-03-31".into(),
        }
    }

    #[test]
    fn history_searches_employee_code_only() {
        let mut listing = Listing::new(vec![salary("s1", "EMP001"), salary("s2", "EMP002")]);
        listing.search("emp002");
        assert_eq!(listing.filtered_count(), 1);
        listing.search("2024");
        assert_eq!(listing.filtered_count(), 0);
    }

    #[test]
    fn net_preview_treats_blanks_as_zero() {
        assert_eq!(form().net_preview(), 53000.0);
        let partial = SalaryFormState {
            basic: "1200".into(),
            ..SalaryFormState::default()
        };
        assert_eq!(partial.net_preview(), 1200.0);
    }

    #[test]
    fn payload_requires_employee_basic_and_dates() {
        let payload = form().to_payload().unwrap();
        assert_eq!(payload.net(), 53000.0);
        assert_eq!(payload.month, "2024-03");

        let mut missing_employee = form();
        missing_employee.select_department("d2".into());
        assert_eq!(
            missing_employee.to_payload().unwrap_err().error,
            "Please select an employee"
        );

        let mut bad_basic = form();
        bad_basic.basic = "-5".into();
        assert_eq!(
            bad_basic.to_payload().unwrap_err().error,
            "Basic salary must be a positive number"
        );

        let mut no_month = form();
        no_month.month.clear();
        assert_eq!(no_month.to_payload().unwrap_err().error, "Salary month is required");
    }

    #[test]
    fn labels_pluralise() {
        assert_eq!(record_count_label(1), "1 record found");
        assert_eq!(record_count_label(3), "3 records found");
        assert_eq!(history_path("e1"), "/admin-dashboard/employees/salary/e1");
    }
}
