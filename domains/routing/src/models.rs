use std::borrow::Cow;

use chrono::NaiveDateTime;
use list_cache::{FieldDef, KeyPlan, KeySelector, ListEntity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A recurring service task scheduled against a customer site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoutingTask {
    pub id: i32,
    #[serde(rename = "type")]
    pub task_type: String,
    pub cust_id: String,
    pub master_id: String,
    pub service_date: Option<NaiveDateTime>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub commission: Option<Decimal>,
    pub description: String,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub unit_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub sale_tax: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub grand_total: Option<Decimal>,
    pub next_due: Option<NaiveDateTime>,
    pub adv_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub quantity: Option<i32>,
    pub frequency: Option<i32>,
    pub task_order: Option<i32>,
    pub adv_freq: Option<i32>,
    pub spec_note: bool,
    pub spec_equip: bool,
    pub obros_id: Option<i32>,
    pub selected: bool,
}

impl ListEntity for RoutingTask {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::int("id", "ID"),
        FieldDef::text("cust_id", "CustID"),
        FieldDef::text("master_id", "MasterID"),
        FieldDef::int("frequency", "Frequency"),
        FieldDef::flag("selected", "Selected"),
        FieldDef::flag("spec_equip", "SpecEquip"),
        FieldDef::contains("description", "description"),
        FieldDef::contains("type", "type"),
        FieldDef::date("service_date", "service date"),
        FieldDef::date("next_due", "nextdue"),
        FieldDef::date("end_date", "enddate"),
    ];
    const KEYS: Option<KeyPlan> = Some(KeyPlan::new("routing_tasks", 1, &[
        KeySelector::new("id", "task_id"),
        KeySelector::new("cust_id", "cust"),
    ]));
    const PLURAL: &'static str = "tasks";
    const SEARCH: &'static [&'static str] =
        &["ID", "CustID", "MasterID", "description", "type"];

    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.to_string()),
            Cow::Borrowed(self.cust_id.as_str()),
            Cow::Borrowed(self.master_id.as_str()),
            Cow::Borrowed(self.description.as_str()),
            Cow::Borrowed(self.task_type.as_str()),
        ]
    }
}

/// A delivery route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Route {
    pub id: i32,
    pub route: String,
    pub description: String,
    pub active: bool,
    #[serde(rename = "numberIcon")]
    pub number_icon: Option<String>,
    pub driver: Option<i32>,
    pub icon: Option<i32>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ListEntity for Route {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::int("id", "id"),
        FieldDef::iexact("route", "route"),
        FieldDef::contains("description", "Desription"),
        FieldDef::flag("active", "Active"),
    ];
    const KEYS: Option<KeyPlan> = None;
    const PLURAL: &'static str = "routes";
    const SEARCH: &'static [&'static str] = &["route", "Desription"];

    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.route.as_str()),
            Cow::Borrowed(self.description.as_str()),
        ]
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoutingTaskPage {
    pub count: usize,
    pub tasks: Vec<RoutingTask>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoutePage {
    pub count: usize,
    pub routes: Vec<Route>,
}
