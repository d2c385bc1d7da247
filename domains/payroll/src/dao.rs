use dao_utils::{PgEntity, flag, text, us_date};
use tokio_postgres::{Error as PgError, Row};

use crate::models::{
    PSelect, PayrollComment, PayrollSite, PayrollTask, TaskChoice,
};

impl PgEntity for PayrollComment {
    const COLUMNS: &'static [&'static str] = &["comment"];
    const ORDER_BY: &'static [&'static str] = &["comment"];
    const TABLE: &'static str = "vw_Payroll_Comments";

    fn from_row(row: &Row) -> Result<Self, PgError> {
        Ok(Self {
            comment: text(row, "comment")?,
        })
    }
}

impl PgEntity for PayrollSite {
    const COLUMNS: &'static [&'static str] = &[
        "CustID",
        "Company",
        "Weekof",
        "COD",
        "Mailto",
        "Taxable",
        "Voucher",
        "Otherbill",
        "AdvBill",
        "InMonthly",
    ];
    const ORDER_BY: &'static [&'static str] = &["CustID"];
    const TABLE: &'static str = "vw_Payroll_Sites";

    fn from_row(row: &Row) -> Result<Self, PgError> {
        Ok(Self {
            cust_id: text(row, "CustID")?,
            company: text(row, "Company")?,
            week_of: row.try_get("Weekof")?,
            cod: flag(row, "COD")?,
            mailto: flag(row, "Mailto")?,
            taxable: flag(row, "Taxable")?,
            voucher: flag(row, "Voucher")?,
            other_bill: flag(row, "Otherbill")?,
            adv_bill: flag(row, "AdvBill")?,
            in_monthly: flag(row, "InMonthly")?,
        })
    }
}

impl PgEntity for PayrollTask {
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
        "route",
        "COD",
        "price",
        "description",
        "Comm",
        "OtherBill",
        "Type",
        "comment",
        "Order",
        "TaskOrder",
        "SpecEquip",
        "Weekdone",
        "WorkOrder",
        "TempDepositDate",
        "SiteComm",
    ];
    const ORDER_BY: &'static [&'static str] = &["Weekof", "UID"];
    const TABLE: &'static str = "vw_Payroll_Tasks";

    fn from_row(row: &Row) -> Result<Self, PgError> {
        Ok(Self {
            uid: row.try_get("UID")?,
            id: row.try_get("ID")?,
            cust_id: text(row, "CustID")?,
            week_of: row.try_get("Weekof")?,
            company: text(row, "Company")?,
            charge: row.try_get("Charge")?,
            done_by: text(row, "DoneBy")?,
            emp_id: row.try_get("EmpID")?,
            cash_paid: row.try_get("CashPaid")?,
            commission: row.try_get("commission")?,
            route: text(row, "route")?,
            cod: flag(row, "COD")?,
            price: row.try_get("price")?,
            description: text(row, "description")?,
            comm: row.try_get("Comm")?,
            other_bill: flag(row, "OtherBill")?,
            task_type: text(row, "Type")?,
            comment: text(row, "comment")?,
            order: row.try_get("Order")?,
            task_order: row.try_get("TaskOrder")?,
            spec_equip: flag(row, "SpecEquip")?,
            week_done: row.try_get("Weekdone")?,
            work_order: text(row, "WorkOrder")?,
            temp_deposit_date: row.try_get("TempDepositDate")?,
            site_comm: flag(row, "SiteComm")?,
        })
    }
}

impl PgEntity for TaskChoice {
    const COLUMNS: &'static [&'static str] =
        &["ID", "CustID", "description", "grand total", "TaskOrder"];
    const ORDER_BY: &'static [&'static str] = &["TaskOrder", "ID"];
    const TABLE: &'static str = "tasks";

    fn from_row(row: &Row) -> Result<Self, PgError> {
        Ok(Self {
            id: row.try_get("ID")?,
            cust_id: text(row, "CustID")?,
            description: text(row, "description")?,
            grand_total: row.try_get("grand total")?,
            task_order: row.try_get("TaskOrder")?,
        })
    }
}

impl PgEntity for PSelect {
    const COLUMNS: &'static [&'static str] = &[
        "UID",
        "EmpID",
        "start",
        "End",
        "WeekDone",
        "oldstart",
        "oldend",
        "MileRate",
        "ChkPricePaid",
        "ReimExp",
        "OtimePercentage",
        "SpecEquip",
        "BillingDate",
        "InvoiceNum",
        "TravDir",
    ];
    const ORDER_BY: &'static [&'static str] = &["UID"];
    const TABLE: &'static str = "pselect";

    fn from_row(row: &Row) -> Result<Self, PgError> {
        let date = |column: &str| -> Result<String, PgError> {
            Ok(us_date(row.try_get(column)?).unwrap_or_default())
        };

        Ok(Self {
            uid: row.try_get("UID")?,
            // Stored as text in the legacy table.
            emp_id: text(row, "EmpID")?.trim().parse().ok(),
            start: date("start")?,
            end: date("End")?,
            week_done: date("WeekDone")?,
            old_start: date("oldstart")?,
            old_end: date("oldend")?,
            mile_rate: row.try_get("MileRate")?,
            chk_price_paid: flag(row, "ChkPricePaid")?,
            reim_exp: row.try_get("ReimExp")?,
            otime_percentage: row.try_get("OtimePercentage")?,
            spec_equip: flag(row, "SpecEquip")?,
            billing_date: date("BillingDate")?,
            invoice_num: row.try_get("InvoiceNum")?,
            trav_dir: row.try_get("TravDir")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use database_traits::{Condition, Filter, Scalar, StoreQuery};

    use super::*;

    #[test]
    fn test_payroll_tasks_order_by_week_then_uid() {
        let (sql, _) = PayrollTask::select_builder().build(&StoreQuery::new(3000));

        assert!(sql.starts_with("SELECT \"UID\", \"ID\", \"CustID\""));
        assert!(sql.ends_with(
            "FROM \"vw_Payroll_Tasks\" ORDER BY \"Weekof\", \"UID\" LIMIT 3000"
        ));
    }

    #[test]
    fn test_task_choice_quotes_spaced_column() {
        let query = StoreQuery::new(50).with_filters(vec![Filter::new(
            "cust_id",
            "CustID",
            Condition::IExact("a1".into()),
        )]);
        let (sql, params) = TaskChoice::select_builder().build(&query);

        assert!(sql.contains("\"grand total\""));
        assert!(sql.contains("WHERE LOWER(\"CustID\") = LOWER($1::TEXT)"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_pselect_filters_on_uid() {
        let query = StoreQuery::new(3000).with_filters(vec![Filter::new(
            "psid",
            "UID",
            Condition::Exact(Scalar::Int(12)),
        )]);
        let (sql, _) = PSelect::select_builder().build(&query);

        assert!(sql.contains("FROM \"pselect\" WHERE \"UID\" = $1::BIGINT"));
    }
}
