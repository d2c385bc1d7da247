use async_trait::async_trait;
use dao_utils::{
    PgEntity, PgParamBox, PgParamVec, create_param_refs, flag, quote_ident,
    text,
};
use database_traits::dao::GenericDao;
use sql_connection::SqlConnect;
use tokio_postgres::{Error as PgError, Row, types::ToSql};
use tracing::instrument;

use crate::{
    commands::{CreateEmployeeCommand, EmployeeFields, UpdateEmployeeCommand},
    error::HrError,
    models::Employee,
};

impl PgEntity for Employee {
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Name",
        "Company",
        "employed",
        "status",
        "allowances",
        "hourly",
        "Address1",
        "Address2",
        "City",
        "State",
        "Zip",
        "Cell",
        "Phone",
        "Phone2",
        "startdate",
        "enddate",
        "Commrate",
        "Effeciency",
        "MapLink",
        "Photo",
        "Sales_Commission_Rate",
        "Driver",
        "MASS_MAILER",
        "HasPersonalProspects",
        "Sales",
        "SubContractor",
        "Is1099",
        "FedTaxNumber",
        "Entity",
        "Email",
    ];
    const ORDER_BY: &'static [&'static str] = &["ID"];
    const TABLE: &'static str = "Employee";

    fn from_row(row: &Row) -> Result<Self, PgError> {
        Ok(Self {
            id: row.try_get("ID")?,
            name: text(row, "Name")?,
            company: text(row, "Company")?,
            employed: flag(row, "employed")?,
            status: text(row, "status")?,
            allowances: row.try_get("allowances")?,
            hourly: row.try_get("hourly")?,
            address1: text(row, "Address1")?,
            address2: text(row, "Address2")?,
            city: text(row, "City")?,
            state: text(row, "State")?,
            zip: text(row, "Zip")?,
            cell: text(row, "Cell")?,
            phone: text(row, "Phone")?,
            phone2: text(row, "Phone2")?,
            start_date: row.try_get("startdate")?,
            end_date: row.try_get("enddate")?,
            comm_rate: row.try_get("Commrate")?,
            efficiency: row.try_get("Effeciency")?,
            map_link: text(row, "MapLink")?,
            photo: text(row, "Photo")?,
            sales_commission_rate: row.try_get("Sales_Commission_Rate")?,
            driver: flag(row, "Driver")?,
            mass_mailer: flag(row, "MASS_MAILER")?,
            has_personal_prospects: flag(row, "HasPersonalProspects")?,
            sales: flag(row, "Sales")?,
            subcontractor: flag(row, "SubContractor")?,
            is_1099: flag(row, "Is1099")?,
            fed_tax_number: text(row, "FedTaxNumber")?,
            entity: text(row, "Entity")?,
            email: text(row, "Email")?,
        })
    }
}

/// One `column = $n::CAST` pair of an insert or update.
struct Assignment {
    column: &'static str,
    cast: &'static str,
    value: PgParamBox,
}

fn push<T>(
    out: &mut Vec<Assignment>, column: &'static str, cast: &'static str,
    value: &Option<T>,
) where
    T: ToSql + Clone + Send + Sync + 'static,
{
    if let Some(value) = value {
        out.push(Assignment {
            column,
            cast,
            value: Box::new(value.clone()),
        });
    }
}

fn assignments(fields: &EmployeeFields) -> Vec<Assignment> {
    let mut out = Vec::new();
    push(&mut out, "Name", "TEXT", &fields.name);
    push(&mut out, "Company", "TEXT", &fields.company);
    push(&mut out, "employed", "BOOLEAN", &fields.employed);
    push(&mut out, "status", "TEXT", &fields.status);
    push(&mut out, "allowances", "SMALLINT", &fields.allowances);
    push(&mut out, "hourly", "NUMERIC", &fields.hourly);
    push(&mut out, "Address1", "TEXT", &fields.address1);
    push(&mut out, "Address2", "TEXT", &fields.address2);
    push(&mut out, "City", "TEXT", &fields.city);
    push(&mut out, "State", "TEXT", &fields.state);
    push(&mut out, "Zip", "TEXT", &fields.zip);
    push(&mut out, "Cell", "TEXT", &fields.cell);
    push(&mut out, "Phone", "TEXT", &fields.phone);
    push(&mut out, "Phone2", "TEXT", &fields.phone2);
    push(&mut out, "startdate", "DATE", &fields.start_date);
    push(&mut out, "enddate", "DATE", &fields.end_date);
    push(&mut out, "Commrate", "NUMERIC", &fields.comm_rate);
    push(&mut out, "Effeciency", "NUMERIC", &fields.efficiency);
    push(&mut out, "MapLink", "TEXT", &fields.map_link);
    push(&mut out, "Photo", "TEXT", &fields.photo);
    push(
        &mut out,
        "Sales_Commission_Rate",
        "NUMERIC",
        &fields.sales_commission_rate,
    );
    push(&mut out, "Driver", "BOOLEAN", &fields.driver);
    push(&mut out, "MASS_MAILER", "BOOLEAN", &fields.mass_mailer);
    push(
        &mut out,
        "HasPersonalProspects",
        "BOOLEAN",
        &fields.has_personal_prospects,
    );
    push(&mut out, "Sales", "BOOLEAN", &fields.sales);
    push(&mut out, "SubContractor", "BOOLEAN", &fields.subcontractor);
    push(&mut out, "Is1099", "BOOLEAN", &fields.is_1099);
    push(&mut out, "FedTaxNumber", "TEXT", &fields.fed_tax_number);
    push(&mut out, "Entity", "TEXT", &fields.entity);
    push(&mut out, "Email", "TEXT", &fields.email);
    out
}

fn returning() -> String {
    Employee::COLUMNS
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ")
}

fn insert_statement(id: i32, fields: &EmployeeFields) -> (String, PgParamVec) {
    let mut columns = vec![quote_ident("ID")];
    let mut placeholders = vec!["$1::INTEGER".to_string()];
    let mut params: PgParamVec = vec![Box::new(id)];

    for assignment in assignments(fields) {
        params.push(assignment.value);
        columns.push(quote_ident(assignment.column));
        placeholders.push(format!("${}::{}", params.len(), assignment.cast));
    }

    let sql = format!(
        "INSERT INTO {table} ({columns}) VALUES ({values}) ON CONFLICT \
         ({id}) DO NOTHING RETURNING {returning}",
        table = quote_ident(Employee::TABLE),
        columns = columns.join(", "),
        values = placeholders.join(", "),
        id = quote_ident("ID"),
        returning = returning(),
    );
    (sql, params)
}

/// `None` when there is nothing to change.
fn update_statement(
    id: i32, fields: &EmployeeFields,
) -> Option<(String, PgParamVec)> {
    let mut sets = Vec::new();
    let mut params: PgParamVec = Vec::new();

    for assignment in assignments(fields) {
        params.push(assignment.value);
        sets.push(format!(
            "{} = ${}::{}",
            quote_ident(assignment.column),
            params.len(),
            assignment.cast
        ));
    }
    if sets.is_empty() {
        return None;
    }

    params.push(Box::new(id));
    let sql = format!(
        "UPDATE {table} SET {sets} WHERE {id} = ${n}::INTEGER RETURNING \
         {returning}",
        table = quote_ident(Employee::TABLE),
        sets = sets.join(", "),
        id = quote_ident("ID"),
        n = params.len(),
        returning = returning(),
    );
    Some((sql, params))
}

/// Employee persistence as seen by the write endpoints.
pub trait EmployeeStore:
    GenericDao<
        Model = Employee,
        CreateRequest = CreateEmployeeCommand,
        UpdateRequest = UpdateEmployeeCommand,
        Error = HrError,
        ID = i32,
    > + Send
    + Sync
{
}

impl<T> EmployeeStore for T where
    T: GenericDao<
            Model = Employee,
            CreateRequest = CreateEmployeeCommand,
            UpdateRequest = UpdateEmployeeCommand,
            Error = HrError,
            ID = i32,
        > + Send
        + Sync
{
}

#[derive(Clone)]
pub struct EmployeeDao {
    db: SqlConnect,
}

impl EmployeeDao {
    pub fn new(db: SqlConnect) -> Self { Self { db } }
}

#[async_trait]
impl GenericDao for EmployeeDao {
    type CreateRequest = CreateEmployeeCommand;
    type Error = HrError;
    type ID = i32;
    type Model = Employee;
    type UpdateRequest = UpdateEmployeeCommand;

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Self::ID) -> Result<Employee, HrError> {
        let client = self.db.get_client().await?;
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = $1::INTEGER",
            returning(),
            quote_ident(Employee::TABLE),
            quote_ident("ID")
        );
        let rows = client.query(&sql, &[&id]).await?;

        match rows.first() {
            Some(row) => Ok(Employee::from_row(row)?),
            None => Err(HrError::NotFound { id }),
        }
    }

    #[instrument(skip_all, fields(id = ?req.id))]
    async fn create(
        &self, req: CreateEmployeeCommand,
    ) -> Result<Employee, HrError> {
        let id = req.validate()?;
        let (sql, params) = insert_statement(id, &req.fields);

        let client = self.db.get_client().await?;
        let rows = client.query(&sql, &create_param_refs(&params)).await?;

        match rows.first() {
            Some(row) => Ok(Employee::from_row(row)?),
            None => Err(HrError::Duplicate { id }),
        }
    }

    #[instrument(skip(self, req))]
    async fn update(
        &self, id: Self::ID, req: UpdateEmployeeCommand,
    ) -> Result<Employee, HrError> {
        let Some((sql, params)) = update_statement(id, &req.fields) else {
            return self.find_by_id(id).await;
        };

        let client = self.db.get_client().await?;
        let rows = client.query(&sql, &create_param_refs(&params)).await?;

        match rows.first() {
            Some(row) => Ok(Employee::from_row(row)?),
            None => Err(HrError::NotFound { id }),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Self::ID) -> Result<(), HrError> {
        let client = self.db.get_client().await?;
        let sql = format!(
            "DELETE FROM {} WHERE {} = $1::INTEGER",
            quote_ident(Employee::TABLE),
            quote_ident("ID")
        );
        let deleted = client.execute(&sql, &[&id]).await?;

        if deleted == 0 {
            return Err(HrError::NotFound { id });
        }
        Ok(())
    }
}
