use crate::{
    api::{ApiError, Department, DepartmentPayload},
    utils::listing::Searchable,
};

impl Searchable for Department {
    type Filter = ();

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentFormState {
    pub name: String,
    pub description: String,
}

impl DepartmentFormState {
    pub fn from_department(department: &Department) -> Self {
        Self {
            name: department.name.clone(),
            description: department.description.clone(),
        }
    }

    pub fn to_payload(&self) -> Result<DepartmentPayload, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("Department name is required"));
        }
        Ok(DepartmentPayload {
            dep_name: name.to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::listing::Listing;

    fn department(id: &str, name: &str, description: &str) -> Department {
        Department {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    #[test]
    fn search_covers_name_and_description() {
        let mut listing = Listing::new(vec![
            department("d1", "IT", "Infrastructure"),
            department("d2", "Finance", "Payroll and budgets"),
            department("d3", "Sales", "Field team"),
        ]);
        listing.search("payroll");
        assert_eq!(listing.filtered_count(), 1);
        assert_eq!(listing.current_items()[0].id, "d2");

        listing.search("it");
        let ids: Vec<_> = listing.current_items().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["d1".to_string()]);
    }

    #[test]
    fn nine_departments_span_two_pages() {
        let items = (1..=9)
            .map(|n| department(&format!("d{}", n), &format!("Dept {}", n), ""))
            .collect();
        let mut listing = Listing::new(items);
        assert_eq!(listing.current_items().len(), 8);
        listing.next();
        assert_eq!(listing.current_items().len(), 1);
    }

    #[test]
    fn form_requires_name_and_trims() {
        let blank = DepartmentFormState {
            name: "  ".into(),
            description: "x".into(),
        };
        assert_eq!(blank.to_payload().unwrap_err().code, "VALIDATION_ERROR");

        let form = DepartmentFormState {
            name: " HR ".into(),
            description: " People ops ".into(),
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.dep_name, "HR");
        assert_eq!(payload.description, "People ops");
    }

    #[test]
    fn form_loads_existing_department() {
        let state = DepartmentFormState::from_department(&department("d1", "IT", "Infra"));
        assert_eq!(state.name, "IT");
        assert_eq!(state.description, "Infra");
    }
}
