use std::borrow::Cow;

use chrono::NaiveDateTime;
use list_cache::{
    FieldDef, KeyPlan, KeySelector, ListEntity, str_of, text_of,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A canned payroll comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PayrollComment {
    pub comment: String,
}

impl ListEntity for PayrollComment {
    const FIELDS: &'static [FieldDef] =
        &[FieldDef::contains("comment", "comment")];
    const KEYS: Option<KeyPlan> = Some(KeyPlan::new(
        "payroll_comments",
        1,
        &[KeySelector::field("comment")],
    ));
    const PLURAL: &'static str = "comments";
    const SEARCH: &'static [&'static str] = &["comment"];

    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.comment.as_str())]
    }
}

/// A customer site as seen by the payroll screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PayrollSite {
    pub cust_id: String,
    pub company: String,
    pub week_of: Option<NaiveDateTime>,
    pub cod: bool,
    pub mailto: bool,
    pub taxable: bool,
    pub voucher: bool,
    pub other_bill: bool,
    pub adv_bill: bool,
    pub in_monthly: bool,
}

impl ListEntity for PayrollSite {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::text("cust_id", "CustID"),
        FieldDef::contains("company", "Company"),
        FieldDef::flag("in_monthly", "InMonthly"),
    ];
    const KEYS: Option<KeyPlan> = Some(KeyPlan::new("payroll_sites", 1, &[
        KeySelector::new("cust_id", "cust"),
    ]));
    const PLURAL: &'static str = "sites";
    const SEARCH: &'static [&'static str] = &["Company", "CustID"];

    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.company.as_str()),
            Cow::Borrowed(self.cust_id.as_str()),
        ]
    }
}

/// One completed task line awaiting payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PayrollTask {
    pub uid: i32,
    pub id: Option<i32>,
    pub cust_id: String,
    pub week_of: Option<NaiveDateTime>,
    pub company: String,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub charge: Option<Decimal>,
    pub done_by: String,
    pub emp_id: Option<i32>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub cash_paid: Option<Decimal>,
    pub commission: Option<f64>,
    pub route: String,
    pub cod: bool,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub price: Option<Decimal>,
    pub description: String,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub comm: Option<Decimal>,
    pub other_bill: bool,
    #[serde(rename = "type")]
    pub task_type: String,
    pub comment: String,
    pub order: Option<i32>,
    pub task_order: Option<i32>,
    pub spec_equip: bool,
    pub week_done: Option<NaiveDateTime>,
    pub work_order: String,
    pub temp_deposit_date: Option<NaiveDateTime>,
    pub site_comm: bool,
}

impl ListEntity for PayrollTask {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::iexact("cust_id", "CustID"),
        FieldDef::iexact("route", "route"),
        FieldDef::date("week_of", "Weekof"),
        FieldDef::int("emp_id", "EmpID"),
    ];
    const KEYS: Option<KeyPlan> = None;
    const PLURAL: &'static str = "tasks";
    const SEARCH: &'static [&'static str] =
        &["Company", "CustID", "description", "DoneBy"];

    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.company.as_str()),
            Cow::Borrowed(self.cust_id.as_str()),
            Cow::Borrowed(self.description.as_str()),
            Cow::Borrowed(self.done_by.as_str()),
        ]
    }
}

/// A routing task offered in the insert-entry picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskChoice {
    pub id: i32,
    pub cust_id: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub grand_total: Option<Decimal>,
    pub task_order: Option<i32>,
}

impl ListEntity for TaskChoice {
    const FIELDS: &'static [FieldDef] =
        &[FieldDef::iexact("cust_id", "CustID")];
    const KEYS: Option<KeyPlan> = None;
    const PLURAL: &'static str = "tasks";
    const SEARCH: &'static [&'static str] = &["description"];

    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.description.as_str())]
    }
}

/// A payroll selection window. Dates render as `MM/DD/YYYY`, or an empty
/// string when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PSelect {
    pub uid: i32,
    pub emp_id: Option<i32>,
    pub start: String,
    pub end: String,
    pub week_done: String,
    pub old_start: String,
    pub old_end: String,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub mile_rate: Option<Decimal>,
    pub chk_price_paid: bool,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub reim_exp: Option<Decimal>,
    pub otime_percentage: Option<i32>,
    pub spec_equip: bool,
    pub billing_date: String,
    pub invoice_num: Option<f64>,
    pub trav_dir: Option<String>,
}

impl ListEntity for PSelect {
    const FIELDS: &'static [FieldDef] =
        &[FieldDef::int("psid", "UID").alias(&["uid"])];
    const KEYS: Option<KeyPlan> = None;
    const PLURAL: &'static str = "pselect";
    const REQUIRES_FILTER: bool = true;
    const SEARCH: &'static [&'static str] = &[];

    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![text_of(&self.emp_id), str_of(&self.trav_dir)]
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentPage {
    pub count: usize,
    pub comments: Vec<PayrollComment>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PayrollSitePage {
    pub count: usize,
    pub sites: Vec<PayrollSite>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TaskPage {
    pub count: usize,
    pub tasks: Vec<PayrollTask>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TaskChoicePage {
    pub count: usize,
    pub tasks: Vec<TaskChoice>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PSelectPage {
    pub count: usize,
    pub pselect: Vec<PSelect>,
}
