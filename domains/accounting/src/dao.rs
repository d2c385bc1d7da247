use dao_utils::{PgEntity, flag, text};
use tokio_postgres::{Error as PgError, Row};

use crate::models::{Deposit, InvoiceHistoryTask, InvoiceTask};

impl PgEntity for Deposit {
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Deposit",
        "DepositNum",
        "Empid",
        "DepositDate",
        "Description",
    ];
    const ORDER_BY: &'static [&'static str] = &["ID"];
    const TABLE: &'static str = "Deposit";

    fn from_row(row: &Row) -> Result<Self, PgError> {
        Ok(Self {
            deposit_id: row.try_get("ID")?,
            deposit: row.try_get("Deposit")?,
            deposit_num: row.try_get("DepositNum")?,
            emp_id: row.try_get("Empid")?,
            deposit_date: row.try_get("DepositDate")?,
            description: text(row, "Description")?,
        })
    }
}

impl PgEntity for InvoiceTask {
    const COLUMNS: &'static [&'static str] = &[
        "UID",
        "ID",
        "CustID",
        "Weekof",
        "Company",
        "Charge",
        "Invoice_Number",
        "DoneBy",
        "EmpID",
        "CashPaid",
        "commission",
        "tax",
        "route",
        "COD",
        "Voucher",
        "price",
        "description",
        "Taxable",
        "Comm",
        "MasterID",
        "OtherBill",
        "Type",
        "comment",
        "Adjust_Amount",
        "Mailto",
        "TaskOrder",
        "AdvDate",
        "Advbill",
        "Order",
        "AdvFreq",
        "AdvCredit",
        "SpecNote",
        "Frequency",
        "SpecEquip",
        "Weekdone",
        "Emp_Paid",
        "WorkOrder",
        "Status",
        "TempDepositDate",
        "Selected",
    ];
    const ORDER_BY: &'static [&'static str] = &["UID"];
    const TABLE: &'static str = "MonthlyInvoice";

    fn from_row(row: &Row) -> Result<Self, PgError> {
        Ok(Self {
            uid: row.try_get("UID")?,
            task_id: row.try_get("ID")?,
            cust_id: row.try_get("CustID")?,
            week_of: row.try_get("Weekof")?,
            company: text(row, "Company")?,
            charge: row.try_get("Charge")?,
            invoice_number: text(row, "Invoice_Number")?,
            done_by: text(row, "DoneBy")?,
            emp_id: row.try_get("EmpID")?,
            cash_paid: row.try_get("CashPaid")?,
            commission: row.try_get("commission")?,
            tax: row.try_get("tax")?,
            route: row.try_get("route")?,
            cod: flag(row, "COD")?,
            voucher: flag(row, "Voucher")?,
            price: row.try_get("price")?,
            description: text(row, "description")?,
            taxable: flag(row, "Taxable")?,
            comm: row.try_get("Comm")?,
            master_id: row.try_get("MasterID")?,
            other_bill: flag(row, "OtherBill")?,
            task_type: text(row, "Type")?,
            comment: text(row, "comment")?,
            adjust_amount: row.try_get("Adjust_Amount")?,
            mailto: flag(row, "Mailto")?,
            task_order: row.try_get("TaskOrder")?,
            adv_date: row.try_get("AdvDate")?,
            adv_bill: flag(row, "Advbill")?,
            order: row.try_get("Order")?,
            adv_freq: row.try_get("AdvFreq")?,
            adv_credit: row.try_get("AdvCredit")?,
            spec_note: flag(row, "SpecNote")?,
            frequency: row.try_get("Frequency")?,
            spec_equip: flag(row, "SpecEquip")?,
            week_done: row.try_get("Weekdone")?,
            emp_paid: flag(row, "Emp_Paid")?,
            work_order: text(row, "WorkOrder")?,
            status: row.try_get("Status")?,
            temp_deposit_date: row.try_get("TempDepositDate")?,
            selected: flag(row, "Selected")?,
        })
    }
}

impl PgEntity for InvoiceHistoryTask {
    const COLUMNS: &'static [&'static str] = &[
        "UID",
        "ID",
        "CustID",
        "Weekof",
        "Company",
        "Charge",
        "DoneBy",
        "EmpID",
        "CashPaid",
        "commission",
        "tax",
        "route",
        "COD",
        "Voucher",
        "price",
        "description",
        "Taxable",
        "Comm",
        "MasterID",
        "OtherBill",
        "Type",
        "comment",
        "Adjust_Amount",
        "Mailto",
        "TaskOrder",
        "Advdate",
        "Advbill",
        "Order",
        "AdvFreq",
        "AdvCredit",
        "SpecNote",
        "Frequency",
        "SpecEquip",
        "Weekdone",
        "Emp_Paid",
        "WorkOrder",
        "Invoice_Number",
    ];
    const ORDER_BY: &'static [&'static str] = &["UID"];
    const TABLE: &'static str = "HistofInvc_current";

    fn from_row(row: &Row) -> Result<Self, PgError> {
        Ok(Self {
            uid: row.try_get("UID")?,
            task_id: row.try_get("ID")?,
            cust_id: row.try_get("CustID")?,
            week_of: row.try_get("Weekof")?,
            company: text(row, "Company")?,
            charge: row.try_get("Charge")?,
            done_by: text(row, "DoneBy")?,
            emp_id: row.try_get("EmpID")?,
            cash_paid: row.try_get("CashPaid")?,
            commission: row.try_get("commission")?,
            tax: row.try_get("tax")?,
            route: text(row, "route")?,
            cod: flag(row, "COD")?,
            voucher: flag(row, "Voucher")?,
            price: row.try_get("price")?,
            description: text(row, "description")?,
            taxable: flag(row, "Taxable")?,
            comm: row.try_get("Comm")?,
            master_id: row.try_get("MasterID")?,
            other_bill: flag(row, "OtherBill")?,
            task_type: text(row, "Type")?,
            comment: text(row, "comment")?,
            adjust_amount: row.try_get("Adjust_Amount")?,
            mailto: flag(row, "Mailto")?,
            task_order: row.try_get("TaskOrder")?,
            adv_date: row.try_get("Advdate")?,
            adv_bill: flag(row, "Advbill")?,
            order: row.try_get("Order")?,
            adv_freq: row.try_get("AdvFreq")?,
            adv_credit: row.try_get("AdvCredit")?,
            spec_note: flag(row, "SpecNote")?,
            frequency: row.try_get("Frequency")?,
            spec_equip: flag(row, "SpecEquip")?,
            week_done: row.try_get("Weekdone")?,
            emp_paid: flag(row, "Emp_Paid")?,
            work_order: text(row, "WorkOrder")?,
            invoice_number: text(row, "Invoice_Number")?,
        })
    }
}

