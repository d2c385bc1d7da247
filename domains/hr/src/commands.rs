use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::HrError;

/// Writable employee columns. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeFields {
    pub name: Option<String>,
    pub company: Option<String>,
    pub employed: Option<bool>,
    pub status: Option<String>,
    pub allowances: Option<i16>,
    #[schema(value_type = Option<String>)]
    pub hourly: Option<Decimal>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub cell: Option<String>,
    pub phone: Option<String>,
    pub phone2: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>)]
    pub comm_rate: Option<Decimal>,
    #[schema(value_type = Option<String>)]
    pub efficiency: Option<Decimal>,
    pub map_link: Option<String>,
    pub photo: Option<String>,
    #[schema(value_type = Option<String>)]
    pub sales_commission_rate: Option<Decimal>,
    pub driver: Option<bool>,
    pub mass_mailer: Option<bool>,
    pub has_personal_prospects: Option<bool>,
    pub sales: Option<bool>,
    pub subcontractor: Option<bool>,
    pub is_1099: Option<bool>,
    pub fed_tax_number: Option<String>,
    pub entity: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateEmployeeCommand {
    pub id: Option<i32>,
    #[serde(flatten)]
    pub fields: EmployeeFields,
}

impl CreateEmployeeCommand {
    /// Returns the employee id once the required fields are present.
    pub fn validate(&self) -> Result<i32, HrError> {
        let id = self
            .id
            .ok_or_else(|| HrError::Validation("id is required".into()))?;
        if self
            .fields
            .name
            .as_deref()
            .is_none_or(|name| name.trim().is_empty())
        {
            return Err(HrError::Validation("name is required".into()));
        }
        Ok(id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateEmployeeCommand {
    #[serde(skip)]
    pub id: i32,
    #[serde(flatten)]
    pub fields: EmployeeFields,
}

impl UpdateEmployeeCommand {
    pub fn validate(&self) -> Result<(), HrError> {
        match self.fields.name.as_deref() {
            Some(name) if name.trim().is_empty() => {
                Err(HrError::Validation("name cannot be blank".into()))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteEmployeeCommand {
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_id_and_name() {
        let mut command = CreateEmployeeCommand::default();
        assert!(matches!(command.validate(), Err(HrError::Validation(_))));

        command.id = Some(42);
        command.fields.name = Some("   ".into());
        assert!(matches!(command.validate(), Err(HrError::Validation(_))));

        command.fields.name = Some("Dana Reyes".into());
        assert_eq!(command.validate().unwrap(), 42);
    }

    #[test]
    fn test_update_fields_are_flat_in_json() {
        let command: UpdateEmployeeCommand = serde_json::from_str(
            r#"{"name": "Dana", "hourly": "18.50", "start_date": "2024-03-01"}"#,
        )
        .unwrap();

        assert_eq!(command.fields.name.as_deref(), Some("Dana"));
        assert_eq!(command.fields.hourly, Some(Decimal::new(1850, 2)));
        assert_eq!(
            command.fields.start_date,
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert!(command.validate().is_ok());
    }

    #[test]
    fn test_update_rejects_blank_name() {
        let command = UpdateEmployeeCommand {
            id: 1,
            fields: EmployeeFields {
                name: Some(String::new()),
                ..EmployeeFields::default()
            },
        };
        assert!(command.validate().is_err());
    }
}
