use std::borrow::Cow;

use chrono::NaiveDateTime;
use list_cache::{FieldDef, KeyPlan, KeySelector, ListEntity};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A customer site. Nullable legacy flags stay `Option<bool>` here; the
/// customer screens distinguish unset from false.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Site {
    pub cust_id: String,
    pub mkt_co: Option<i32>,
    pub reg_name: String,
    pub company: String,
    pub address: String,
    pub city: String,
    pub county: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub start: Option<NaiveDateTime>,
    pub master_id: Option<String>,
    pub business_type: Option<i32>,
    pub cod: Option<bool>,
    pub voucher: Option<bool>,
    pub taxable: Option<bool>,
    pub other_bill: Option<bool>,
    pub mailto: Option<bool>,
    pub adv_bill: Option<bool>,
    pub adv_credit: Option<bool>,
    pub billing_cycle: Option<i32>,
    pub site_comm: Option<bool>,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
    pub fax: String,
    pub email: String,
    pub cell: String,
    pub work_phone: String,
    pub customer_notes: String,
    pub tax_rate: Option<f64>,
    pub service_client: Option<bool>,
    pub active: Option<bool>,
    pub updated_by: Option<i32>,
    pub updated_date: Option<NaiveDateTime>,
    pub pmt_type: Option<i32>,
    pub inv_type: Option<i32>,
    pub send_receipt: Option<bool>,
    pub e_mail_flag: Option<bool>,
    pub signature_required: Option<bool>,
    pub default_contact: String,
    pub custom1: String,
    pub custom2: String,
    pub prospect_status: Option<i32>,
    pub task_style: Option<i32>,
    pub quick_note: String,
    pub sms_opt_in: Option<bool>,
    pub needs_price_increased: Option<bool>,
    pub price_increase_document: String,
    pub sold_by: Option<i32>,
    pub call_blasted: Option<bool>,
    pub call_blasted_date: Option<NaiveDateTime>,
    pub job_types: String,
    pub job_types_abbrs: String,
    pub pays_own_invoices: Option<bool>,
    pub ct_exception: Option<bool>,
}

impl ListEntity for Site {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::contains("cust_id", "CustID"),
        FieldDef::contains("master_id", "MasterID"),
        FieldDef::contains("reg_name", "RegName"),
        FieldDef::contains("company", "Company"),
        FieldDef::contains("address", "Address"),
        FieldDef::contains("city", "City"),
        FieldDef::contains("county", "County"),
        FieldDef::iexact("state", "State"),
        FieldDef::contains("zip", "Zip").alias(&["zip_code"]),
        FieldDef::contains("phone", "Phone"),
        FieldDef::contains("cell", "Cell"),
        FieldDef::contains("work_phone", "Work Phone"),
        FieldDef::contains("email", "Email"),
        FieldDef::int("billing_cycle", "BillingCycle"),
        FieldDef::int("business_type", "Business_Type"),
        FieldDef::flag("active", "Active"),
        FieldDef::flag("cod", "COD"),
        FieldDef::flag("voucher", "Voucher"),
        FieldDef::flag("taxable", "Taxable"),
        FieldDef::flag("mailto", "Mailto"),
    ];
    const KEYS: Option<KeyPlan> =
        Some(KeyPlan::new("customers_sites", 1, &[
            KeySelector::new("cust_id", "cust"),
            KeySelector::new("master_id", "master"),
        ]));
    const PLURAL: &'static str = "sites";
    const SEARCH: &'static [&'static str] =
        &["CustID", "Company", "RegName", "Address", "City", "Phone"];

    fn search_text(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.cust_id.as_str()),
            Cow::Borrowed(self.company.as_str()),
            Cow::Borrowed(self.reg_name.as_str()),
            Cow::Borrowed(self.address.as_str()),
            Cow::Borrowed(self.city.as_str()),
            Cow::Borrowed(self.phone.as_str()),
        ]
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerSitePage {
    pub count: usize,
    pub sites: Vec<Site>,
}
