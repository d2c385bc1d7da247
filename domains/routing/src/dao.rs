use dao_utils::{PgEntity, flag, text};
use tokio_postgres::{Error as PgError, Row};

use crate::models::{Route, RoutingTask};

impl PgEntity for RoutingTask {
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "type",
        "CustID",
        "MasterID",
        "service date",
        "commission",
        "description",
        "unit price",
        "sale tax",
        "grand total",
        "nextdue",
        "AdvDate",
        "enddate",
        "Quantity",
        "Frequency",
        "TaskOrder",
        "AdvFreq",
        "SpecNote",
        "SpecEquip",
        "OBROS_ID",
        "Selected",
    ];
    const ORDER_BY: &'static [&'static str] = &["TaskOrder"];
    const TABLE: &'static str = "tasks";

    fn from_row(row: &Row) -> Result<Self, PgError> {
        Ok(Self {
            id: row.try_get("ID")?,
            task_type: text(row, "type")?,
            cust_id: text(row, "CustID")?,
            master_id: text(row, "MasterID")?,
            service_date: row.try_get("service date")?,
            commission: row.try_get("commission")?,
            description: text(row, "description")?,
            unit_price: row.try_get("unit price")?,
            sale_tax: row.try_get("sale tax")?,
            grand_total: row.try_get("grand total")?,
            next_due: row.try_get("nextdue")?,
            adv_date: row.try_get("AdvDate")?,
            end_date: row.try_get("enddate")?,
            quantity: row.try_get("Quantity")?,
            frequency: row.try_get("Frequency")?,
            task_order: row.try_get("TaskOrder")?,
            adv_freq: row.try_get("AdvFreq")?,
            spec_note: flag(row, "SpecNote")?,
            spec_equip: flag(row, "SpecEquip")?,
            obros_id: row.try_get("OBROS_ID")?,
            selected: flag(row, "Selected")?,
        })
    }
}

impl PgEntity for Route {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "route",
        "Desription",
        "Active",
        "Number_Icon",
        "Driver",
        "Icon",
        "Sort_Order",
        "Latitude",
        "Longitude",
    ];
    const ORDER_BY: &'static [&'static str] = &["Sort_Order", "route"];
    const TABLE: &'static str = "tbl_Route";

    fn from_row(row: &Row) -> Result<Self, PgError> {
        Ok(Self {
            id: row.try_get("id")?,
            route: text(row, "route")?,
            description: text(row, "Desription")?,
            active: flag(row, "Active")?,
            number_icon: row.try_get("Number_Icon")?,
            driver: row.try_get("Driver")?,
            icon: row.try_get("Icon")?,
            sort_order: row.try_get("Sort_Order")?,
            latitude: row.try_get("Latitude")?,
            longitude: row.try_get("Longitude")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use database_traits::{Condition, Filter, Scalar, StoreQuery};

    use super::*;

    #[test]
    fn test_service_date_compares_as_date() {
        let query = StoreQuery::new(3000).with_filters(vec![Filter::new(
            "service_date",
            "service date",
            Condition::Exact(Scalar::Date(
                NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            )),
        )]);
        let (sql, _) = RoutingTask::select_builder().build(&query);

        assert!(sql.contains("WHERE CAST(\"service date\" AS DATE) = $1::DATE"));
        assert!(sql.ends_with("ORDER BY \"TaskOrder\" LIMIT 3000"));
    }

    #[test]
    fn test_routes_order_by_sort_order() {
        let (sql, _) = Route::select_builder().build(&StoreQuery::new(10));

        assert!(sql.ends_with(
            "FROM \"tbl_Route\" ORDER BY \"Sort_Order\", \"route\" LIMIT 10"
        ));
    }
}
