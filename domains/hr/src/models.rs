use std::borrow::Cow;

use chrono::NaiveDateTime;
use list_cache::{FieldDef, KeyPlan, KeySelector, ListEntity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An employee record. Social security numbers and passwords are never
/// read.
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema,
)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub company: String,
    pub employed: bool,
    pub status: String,
    pub allowances: Option<i16>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub hourly: Option<Decimal>,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub cell: String,
    pub phone: String,
    pub phone2: String,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub comm_rate: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub efficiency: Option<Decimal>,
    pub map_link: String,
    pub photo: String,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub sales_commission_rate: Option<Decimal>,
    pub driver: bool,
    pub mass_mailer: bool,
    pub has_personal_prospects: bool,
    pub sales: bool,
    pub subcontractor: bool,
    pub is_1099: bool,
    pub fed_tax_number: String,
    pub entity: String,
    pub email: String,
}

impl ListEntity for Employee {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::int("id", "ID").alias(&["emp_id"]),
        FieldDef::contains("name", "Name"),
        FieldDef::contains("company", "Company"),
        FieldDef::flag("employed", "employed"),
        FieldDef::iexact("status", "status"),
        FieldDef::float("hourly", "hourly"),
        FieldDef::contains("address1", "Address1"),
        FieldDef::contains("address2", "Address2"),
        FieldDef::contains("city", "City"),
        FieldDef::iexact("state", "State"),
        FieldDef::contains("zip", "Zip"),
        FieldDef::contains("cell", "Cell"),
        FieldDef::contains("phone", "Phone"),
        FieldDef::date("start_date", "startdate"),
        FieldDef::date("end_date", "enddate"),
        FieldDef::flag("driver", "Driver"),
        FieldDef::flag("subcontractor", "SubContractor"),
        FieldDef::flag("is_1099", "Is1099"),
        FieldDef::contains("email", "Email"),
    ];
    const KEYS: Option<KeyPlan> =
        Some(KeyPlan::new("hr_employees", 1, &[KeySelector::field("id")]));
    const PLURAL: &'static str = "employees";
    const SEARCH: &'static [&'static str] =
        &["ID", "Name", "Company", "Email", "City"];

    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.to_string()),
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.company.as_str()),
            Cow::Borrowed(self.email.as_str()),
            Cow::Borrowed(self.city.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeSummary {
    pub id: i32,
    pub name: String,
    pub company: String,
    pub email: String,
}

impl From<Employee> for EmployeeSummary {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            company: employee.company,
            email: employee.email,
        }
    }
}

/// Body returned by the employee write endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeSummary>,
}

impl MutationResponse {
    pub fn with_employee(message: &str, employee: EmployeeSummary) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            employee: Some(employee),
        }
    }

    pub fn message(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            employee: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeePage {
    pub count: usize,
    pub employees: Vec<Employee>,
}
