use database_traits::{Condition, Scalar, Search, StoreQuery};
use tokio_postgres::types::ToSql;

// Type aliases for PostgreSQL parameter types
pub type PgParam = dyn ToSql + Sync;
pub type PgSendParam = dyn ToSql + Sync + Send;
pub type PgParamBox = Box<PgSendParam>;
pub type PgParamVec = Vec<PgParamBox>;

pub fn create_param_refs(params: &[PgParamBox]) -> Vec<&PgParam> {
    params.iter().map(|p| &**p as &PgParam).collect()
}

/// Quotes a legacy column or table name, which may hold spaces or mixed
/// case.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// `%term%` with LIKE metacharacters escaped.
pub fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

/// Renders a `StoreQuery` against one table.
///
/// Every placeholder carries an explicit cast so the parameter type is
/// fixed by the statement rather than inferred from the legacy column.
#[derive(Debug, Clone, Copy)]
pub struct SelectBuilder<'a> {
    table: &'a str,
    columns: &'a [&'a str],
    order_by: &'a [&'a str],
}

impl<'a> SelectBuilder<'a> {
    pub fn new(
        table: &'a str, columns: &'a [&'a str], order_by: &'a [&'a str],
    ) -> Self {
        Self {
            table,
            columns,
            order_by,
        }
    }

    pub fn build(&self, query: &StoreQuery) -> (String, PgParamVec) {
        let select_list = self
            .columns
            .iter()
            .map(|c| quote_ident(c))
            .collect::<Vec<_>>()
            .join(", ");
        let mut sql =
            format!("SELECT {select_list} FROM {}", quote_ident(self.table));

        let mut params: PgParamVec = Vec::new();
        let mut clauses = Vec::new();

        for filter in &query.filters {
            clauses.push(condition_clause(
                filter.column,
                &filter.condition,
                &mut params,
            ));
        }
        if let Some(search) = &query.search {
            if let Some(clause) = search_clause(search, &mut params) {
                clauses.push(clause);
            }
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        if !self.order_by.is_empty() {
            let order = self
                .order_by
                .iter()
                .map(|c| quote_ident(c))
                .collect::<Vec<_>>()
                .join(", ");
            sql.push_str(&format!(" ORDER BY {order}"));
        }
        sql.push_str(&format!(" LIMIT {}", query.limit));

        (sql, params)
    }
}

fn push_param(params: &mut PgParamVec, param: PgParamBox) -> usize {
    params.push(param);
    params.len()
}

fn condition_clause(
    column: &str, condition: &Condition, params: &mut PgParamVec,
) -> String {
    let col = quote_ident(column);
    match condition {
        Condition::Exact(Scalar::Int(v)) => {
            let n = push_param(params, Box::new(*v));
            format!("{col} = ${n}::BIGINT")
        }
        Condition::Exact(Scalar::Float(v)) => {
            let n = push_param(params, Box::new(*v));
            format!("{col} = ${n}::FLOAT8")
        }
        Condition::Exact(Scalar::Text(v)) => {
            let n = push_param(params, Box::new(v.clone()));
            format!("{col} = ${n}::TEXT")
        }
        Condition::Exact(Scalar::Date(v)) => {
            let n = push_param(params, Box::new(*v));
            format!("CAST({col} AS DATE) = ${n}::DATE")
        }
        Condition::IExact(v) => {
            let n = push_param(params, Box::new(v.clone()));
            format!("LOWER({col}) = LOWER(${n}::TEXT)")
        }
        Condition::Contains(v) => {
            let n = push_param(params, Box::new(contains_pattern(v)));
            format!("{col} ILIKE ${n}::TEXT")
        }
        Condition::Flag(v) => {
            let n = push_param(params, Box::new(*v));
            format!("COALESCE({col}, FALSE) = ${n}::BOOLEAN")
        }
    }
}

fn search_clause(search: &Search, params: &mut PgParamVec) -> Option<String> {
    if search.columns.is_empty() {
        return None;
    }
    let n = push_param(params, Box::new(contains_pattern(&search.term)));
    let any = search
        .columns
        .iter()
        .map(|c| format!("CAST({} AS TEXT) ILIKE ${n}::TEXT", quote_ident(c)))
        .collect::<Vec<_>>()
        .join(" OR ");
    Some(format!("({any})"))
}
