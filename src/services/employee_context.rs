use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of the employee whose dashboard is being shown.
///
/// Passed explicitly into every fetch so repositories never rely on ambient
/// session state and can be exercised with several identities side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeContext {
    pub employee_id: Uuid,
    pub company_id: Option<Uuid>,
}

impl EmployeeContext {
    pub fn new(employee_id: Uuid) -> Self {
        Self {
            employee_id,
            company_id: None,
        }
    }

    pub fn with_company(mut self, company_id: Uuid) -> Self {
        self.company_id = Some(company_id);
        self
    }
}
