use std::borrow::Cow;

use chrono::NaiveDateTime;
use list_cache::{
    FieldDef, KeyPlan, KeySelector, ListEntity, str_of, text_of,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Deposit {
    pub deposit_id: Option<i32>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub deposit: Option<Decimal>,
    pub deposit_num: Option<i32>,
    pub emp_id: Option<i32>,
    pub deposit_date: Option<NaiveDateTime>,
    pub description: String,
}

impl ListEntity for Deposit {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::int("emp_id", "Empid"),
        FieldDef::int("deposit_id", "ID"),
        FieldDef::contains("description", "Description"),
    ];
    const KEYS: Option<KeyPlan> =
        Some(KeyPlan::new("accounting_deposits", 1, &[
            KeySelector::new("emp_id", "emp"),
            KeySelector::new("deposit_id", "deposit"),
        ]));
    const PLURAL: &'static str = "deposits";
    const SEARCH: &'static [&'static str] =
        &["ID", "DepositNum", "Description", "Empid"];

    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![
            text_of(&self.deposit_id),
            text_of(&self.deposit_num),
            Cow::Borrowed(self.description.as_str()),
            text_of(&self.emp_id),
        ]
    }
}

/// A row of the open monthly invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InvoiceTask {
    pub uid: Option<i32>,
    pub task_id: Option<i32>,
    pub cust_id: Option<String>,
    pub week_of: Option<NaiveDateTime>,
    pub company: String,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub charge: Option<Decimal>,
    pub invoice_number: String,
    pub done_by: String,
    pub emp_id: Option<i32>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub cash_paid: Option<Decimal>,
    pub commission: Option<f64>,
    pub tax: Option<f64>,
    pub route: Option<String>,
    pub cod: bool,
    pub voucher: bool,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub price: Option<Decimal>,
    pub description: String,
    pub taxable: bool,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub comm: Option<Decimal>,
    pub master_id: Option<String>,
    pub other_bill: bool,
    #[serde(rename = "type")]
    pub task_type: String,
    pub comment: String,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub adjust_amount: Option<Decimal>,
    pub mailto: bool,
    pub task_order: Option<i32>,
    pub adv_date: Option<NaiveDateTime>,
    pub adv_bill: bool,
    pub order: Option<i32>,
    pub adv_freq: Option<i32>,
    pub adv_credit: Option<i32>,
    pub spec_note: bool,
    pub frequency: Option<i32>,
    pub spec_equip: bool,
    pub week_done: Option<NaiveDateTime>,
    pub emp_paid: bool,
    pub work_order: String,
    pub status: Option<i32>,
    pub temp_deposit_date: Option<NaiveDateTime>,
    pub selected: bool,
}

impl ListEntity for InvoiceTask {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::int("uid", "UID"),
        FieldDef::int("task_id", "ID"),
        FieldDef::text("master_id", "MasterID"),
        FieldDef::text("cust_id", "CustID"),
        FieldDef::text("invoice_number", "Invoice_Number"),
        FieldDef::int("emp_id", "EmpID"),
        FieldDef::contains("company", "Company"),
        FieldDef::date("week_of", "Weekof"),
        FieldDef::date("week_done", "Weekdone"),
        FieldDef::iexact("route", "route"),
        FieldDef::iexact("done_by", "DoneBy"),
        FieldDef::iexact("work_order", "WorkOrder"),
    ];
    const KEYS: Option<KeyPlan> =
        Some(KeyPlan::new("accounting_invoice_tasks", 1, &[
            KeySelector::field("uid"),
            KeySelector::new("task_id", "task"),
            KeySelector::new("cust_id", "cust"),
            KeySelector::new("master_id", "master"),
            KeySelector::new("invoice_number", "invoice"),
        ]));
    const PLURAL: &'static str = "tasks";
    const SEARCH: &'static [&'static str] = &[
        "UID",
        "ID",
        "CustID",
        "MasterID",
        "Company",
        "description",
        "DoneBy",
        "Invoice_Number",
        "WorkOrder",
    ];

    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![
            text_of(&self.uid),
            text_of(&self.task_id),
            str_of(&self.cust_id),
            str_of(&self.master_id),
            Cow::Borrowed(self.company.as_str()),
            Cow::Borrowed(self.description.as_str()),
            Cow::Borrowed(self.done_by.as_str()),
            Cow::Borrowed(self.invoice_number.as_str()),
            Cow::Borrowed(self.work_order.as_str()),
        ]
    }
}

/// A row of the current invoice history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InvoiceHistoryTask {
    pub uid: Option<i32>,
    pub task_id: Option<i32>,
    pub cust_id: Option<String>,
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
    pub tax: Option<f64>,
    pub route: String,
    pub cod: bool,
    pub voucher: bool,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub price: Option<Decimal>,
    pub description: String,
    pub taxable: bool,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub comm: Option<Decimal>,
    pub master_id: Option<String>,
    pub other_bill: bool,
    pub task_type: String,
    pub comment: String,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[schema(value_type = Option<String>)]
    pub adjust_amount: Option<Decimal>,
    pub mailto: bool,
    pub task_order: Option<i32>,
    pub adv_date: Option<NaiveDateTime>,
    pub adv_bill: bool,
    pub order: Option<i32>,
    pub adv_freq: Option<i32>,
    pub adv_credit: Option<i32>,
    pub spec_note: bool,
    pub frequency: Option<i32>,
    pub spec_equip: bool,
    pub week_done: Option<NaiveDateTime>,
    pub emp_paid: bool,
    pub work_order: String,
    pub invoice_number: String,
}

impl ListEntity for InvoiceHistoryTask {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::int("uid", "UID"),
        FieldDef::int("task_id", "ID"),
        FieldDef::text("invoice_number", "Invoice_Number"),
        FieldDef::int("emp_id", "EmpID"),
        FieldDef::text("cust_id", "CustID"),
        FieldDef::text("master_id", "MasterID"),
        FieldDef::text("company", "Company"),
        FieldDef::date("week_of", "Weekof"),
        FieldDef::date("week_done", "Weekdone"),
        FieldDef::iexact("route", "route"),
        FieldDef::iexact("done_by", "DoneBy"),
        FieldDef::iexact("work_order", "WorkOrder"),
    ];
    const KEYS: Option<KeyPlan> =
        Some(KeyPlan::new("accounting_invoice_history", 1, &[
            KeySelector::field("uid"),
            KeySelector::new("task_id", "task"),
            KeySelector::new("invoice_number", "invoice"),
            KeySelector::new("emp_id", "emp"),
            KeySelector::new("cust_id", "cust"),
            KeySelector::new("master_id", "master"),
            KeySelector::field("company"),
            KeySelector::field("week_of"),
            KeySelector::field("week_done"),
            KeySelector::field("route"),
            KeySelector::field("done_by"),
            KeySelector::field("work_order"),
        ]));
    const PLURAL: &'static str = "tasks";
    const SEARCH: &'static [&'static str] = &[
        "UID",
        "ID",
        "EmpID",
        "Company",
        "CustID",
        "MasterID",
        "DoneBy",
        "Invoice_Number",
        "WorkOrder",
    ];

    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![
            text_of(&self.uid),
            text_of(&self.task_id),
            text_of(&self.emp_id),
            Cow::Borrowed(self.company.as_str()),
            str_of(&self.cust_id),
            str_of(&self.master_id),
            Cow::Borrowed(self.done_by.as_str()),
            Cow::Borrowed(self.invoice_number.as_str()),
            Cow::Borrowed(self.work_order.as_str()),
        ]
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DepositPage {
    pub count: usize,
    pub deposits: Vec<Deposit>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceTaskPage {
    pub count: usize,
    pub tasks: Vec<InvoiceTask>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceHistoryPage {
    pub count: usize,
    pub tasks: Vec<InvoiceHistoryTask>,
}
