//! Runs against a throwaway Postgres; needs a Docker daemon.

use database_traits::{ListSource, StoreQuery, dao::GenericDao};
use dao_utils::PgListDao;
use hr::{
    CreateEmployeeCommand, Employee, EmployeeDao, EmployeeFields, HrError,
    UpdateEmployeeCommand,
};
use list_cache::{ListEntity, ListParams, QuerySpec};
use rust_decimal::Decimal;
use test_utils::TestPostgresContainer;

const EMPLOYEE_TABLE: &str = r#"
CREATE TABLE "Employee" (
    "ID" INTEGER PRIMARY KEY,
    "Name" TEXT, "Company" TEXT, "employed" BOOLEAN, "status" TEXT,
    "allowances" SMALLINT, "hourly" NUMERIC(10, 2),
    "Address1" TEXT, "Address2" TEXT, "City" TEXT, "State" TEXT, "Zip" TEXT,
    "Cell" TEXT, "Phone" TEXT, "Phone2" TEXT,
    "startdate" TIMESTAMP, "enddate" TIMESTAMP,
    "Commrate" NUMERIC(10, 4), "Effeciency" NUMERIC(10, 4),
    "MapLink" TEXT, "Photo" TEXT, "Sales_Commission_Rate" NUMERIC(10, 4),
    "Driver" BOOLEAN, "MASS_MAILER" BOOLEAN, "HasPersonalProspects" BOOLEAN,
    "Sales" BOOLEAN, "SubContractor" BOOLEAN, "Is1099" BOOLEAN,
    "FedTaxNumber" TEXT, "Entity" TEXT, "Email" TEXT,
    "Social Security" TEXT, "PWD" TEXT
);
INSERT INTO "Employee" ("ID", "Name", "Company", "City", "State", "Social Security", "PWD")
VALUES (42, 'Dana Reyes', 'Springfield Pest', 'Springfield', 'IL', '123-45-6789', 'secret'),
       (7, 'Lee Park', 'Shelbyville Lawn', 'Shelbyville', 'il', NULL, NULL);
"#;

async fn setup() -> (TestPostgresContainer, EmployeeDao) {
    let container = TestPostgresContainer::new().await.unwrap();
    container.execute_sql(EMPLOYEE_TABLE).await.unwrap();
    let dao = EmployeeDao::new(container.db.clone());
    (container, dao)
}

fn store_query(pairs: &[(&str, &str)]) -> StoreQuery {
    let params = ListParams::from_pairs(
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())),
    );
    let spec = QuerySpec::from_params(Employee::FIELDS, &params).unwrap();
    StoreQuery::new(100).with_filters(spec.filters)
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_list_dao_applies_filters_with_nulls_as_defaults() {
    let (container, _) = setup().await;
    let source = PgListDao::<Employee>::new(container.db.clone());

    let rows = source.fetch(&store_query(&[("state", "IL")])).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, 7);
    assert!(!rows[0].employed);
    assert_eq!(rows[0].email, "");

    let rows = source
        .fetch(&store_query(&[("emp_id", "42")]))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Dana Reyes");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_create_update_delete_round() {
    let (_container, dao) = setup().await;

    let created = dao
        .create(CreateEmployeeCommand {
            id: Some(99),
            fields: EmployeeFields {
                name: Some("Sam Ortiz".into()),
                hourly: Some(Decimal::new(1850, 2)),
                driver: Some(true),
                ..EmployeeFields::default()
            },
        })
        .await
        .unwrap();
    assert_eq!(created.hourly, Some(Decimal::new(1850, 2)));
    assert!(created.driver);

    let duplicate = dao
        .create(CreateEmployeeCommand {
            id: Some(99),
            fields: EmployeeFields {
                name: Some("Again".into()),
                ..EmployeeFields::default()
            },
        })
        .await;
    assert!(matches!(duplicate, Err(HrError::Duplicate { id: 99 })));

    let updated = dao
        .update(
            99,
            UpdateEmployeeCommand {
                id: 99,
                fields: EmployeeFields {
                    email: Some("sam@acme.test".into()),
                    ..EmployeeFields::default()
                },
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Sam Ortiz");
    assert_eq!(updated.email, "sam@acme.test");

    dao.delete(99).await.unwrap();
    assert!(matches!(
        dao.find_by_id(99).await,
        Err(HrError::NotFound { id: 99 })
    ));
    assert!(matches!(
        dao.delete(99).await,
        Err(HrError::NotFound { id: 99 })
    ));
}
