use dao_utils::{PgEntity, text};
use tokio_postgres::{Error as PgError, Row};

use crate::models::Site;

impl PgEntity for Site {
    const COLUMNS: &'static [&'static str] = &[
        "CustID",
        "MktCo",
        "RegName",
        "Company",
        "Address",
        "City",
        "County",
        "State",
        "Zip",
        "Phone",
        "Start",
        "MasterID",
        "Business_Type",
        "COD",
        "Voucher",
        "Taxable",
        "OtherBill",
        "Mailto",
        "AdvBill",
        "AdvCredit",
        "BillingCycle",
        "SiteComm",
        "Longitude",
        "Latitude",
        "Fax",
        "Email",
        "Cell",
        "Work Phone",
        "Customer_Notes",
        "Tax_Rate",
        "Service_Client",
        "Active",
        "Updated_By",
        "Updated_Date",
        "Pmt_Type",
        "Inv_Type",
        "Send_Reciept",
        "E-Mail",
        "Signature_required",
        "Default_Contact",
        "CUSTOM1",
        "CUSTOM2",
        "prospect_status",
        "Task_Style",
        "Quick_Note",
        "SMS_Opt_In",
        "Needs_Price_Increased",
        "Price_Increase_Document",
        "SoldBy",
        "CallBlasted",
        "CallBlastedDate",
        "Job_types",
        "Job_types_ABBRs",
        "PaysOwnInvoices",
        "CT_Exception",
    ];
    const ORDER_BY: &'static [&'static str] = &["CustID"];
    const TABLE: &'static str = "Site";

    fn from_row(row: &Row) -> Result<Self, PgError> {
        Ok(Self {
            cust_id: text(row, "CustID")?,
            mkt_co: row.try_get("MktCo")?,
            reg_name: text(row, "RegName")?,
            company: text(row, "Company")?,
            address: text(row, "Address")?,
            city: text(row, "City")?,
            county: text(row, "County")?,
            state: text(row, "State")?,
            zip_code: text(row, "Zip")?,
            phone: text(row, "Phone")?,
            start: row.try_get("Start")?,
            master_id: row.try_get("MasterID")?,
            business_type: row.try_get("Business_Type")?,
            cod: row.try_get("COD")?,
            voucher: row.try_get("Voucher")?,
            taxable: row.try_get("Taxable")?,
            other_bill: row.try_get("OtherBill")?,
            mailto: row.try_get("Mailto")?,
            adv_bill: row.try_get("AdvBill")?,
            adv_credit: row.try_get("AdvCredit")?,
            billing_cycle: row.try_get("BillingCycle")?,
            site_comm: row.try_get("SiteComm")?,
            longitude: row.try_get("Longitude")?,
            latitude: row.try_get("Latitude")?,
            fax: text(row, "Fax")?,
            email: text(row, "Email")?,
            cell: text(row, "Cell")?,
            work_phone: text(row, "Work Phone")?,
            customer_notes: text(row, "Customer_Notes")?,
            tax_rate: row.try_get("Tax_Rate")?,
            service_client: row.try_get("Service_Client")?,
            active: row.try_get("Active")?,
            updated_by: row.try_get("Updated_By")?,
            updated_date: row.try_get("Updated_Date")?,
            pmt_type: row.try_get("Pmt_Type")?,
            inv_type: row.try_get("Inv_Type")?,
            send_receipt: row.try_get("Send_Reciept")?,
            e_mail_flag: row.try_get("E-Mail")?,
            signature_required: row.try_get("Signature_required")?,
            default_contact: text(row, "Default_Contact")?,
            custom1: text(row, "CUSTOM1")?,
            custom2: text(row, "CUSTOM2")?,
            prospect_status: row.try_get("prospect_status")?,
            task_style: row.try_get("Task_Style")?,
            quick_note: text(row, "Quick_Note")?,
            sms_opt_in: row.try_get("SMS_Opt_In")?,
            needs_price_increased: row.try_get("Needs_Price_Increased")?,
            price_increase_document: text(row, "Price_Increase_Document")?,
            sold_by: row.try_get("SoldBy")?,
            call_blasted: row.try_get("CallBlasted")?,
            call_blasted_date: row.try_get("CallBlastedDate")?,
            job_types: text(row, "Job_types")?,
            job_types_abbrs: text(row, "Job_types_ABBRs")?,
            pays_own_invoices: row.try_get("PaysOwnInvoices")?,
            ct_exception: row.try_get("CT_Exception")?,
        })
    }
}
