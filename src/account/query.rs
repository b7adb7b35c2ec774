//! A declarative query builder for the account table.
//!
//! Column names come from the closed [Column] enumeration and every value is
//! bound as a numbered parameter, so request input never ends up in the SQL text.

use rusqlite::types::Value;

use crate::account::AccountId;

const TABLE: &str = "account";
const SELECT_COLUMNS: &str = "id, name";

/// The columns of the account table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Name,
}

impl Column {
    fn as_sql(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Name => "name",
        }
    }
}

/// The direction of an `ORDER BY` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    fn as_sql(self) -> &'static str {
        match self {
            Direction::Ascending => "ASC",
            Direction::Descending => "DESC",
        }
    }
}

/// A predicate over the columns of the account table.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Equals(Column, Value),
    GreaterThan(Column, Value),
    LessThan(Column, Value),
    /// The column contains the text anywhere, `LIKE '%text%'`.
    ///
    /// LIKE wildcards in the text are matched literally.
    Contains(Column, String),
    /// All of the conditions hold. An empty list is always true.
    All(Vec<Condition>),
    /// At least one of the conditions holds. An empty list is always false.
    Any(Vec<Condition>),
}

impl Condition {
    pub fn equals(column: Column, value: impl Into<Value>) -> Self {
        Condition::Equals(column, value.into())
    }

    pub fn greater_than(column: Column, value: impl Into<Value>) -> Self {
        Condition::GreaterThan(column, value.into())
    }

    pub fn less_than(column: Column, value: impl Into<Value>) -> Self {
        Condition::LessThan(column, value.into())
    }

    pub fn contains(column: Column, text: &str) -> Self {
        Condition::Contains(column, text.to_owned())
    }

    /// Combine with `other` so that both must hold.
    pub fn and(self, other: Condition) -> Self {
        match self {
            Condition::All(mut conditions) => {
                conditions.push(other);
                Condition::All(conditions)
            }
            condition => Condition::All(vec![condition, other]),
        }
    }

    fn write_to(&self, statement: &mut Statement) {
        match self {
            Condition::Equals(column, value) => {
                statement.push_comparison(*column, "=", value.clone());
            }
            Condition::GreaterThan(column, value) => {
                statement.push_comparison(*column, ">", value.clone());
            }
            Condition::LessThan(column, value) => {
                statement.push_comparison(*column, "<", value.clone());
            }
            Condition::Contains(column, text) => {
                let pattern = format!("%{}%", escape_like(text));
                let param = statement.push_param(Value::Text(pattern));
                statement
                    .sql
                    .push_str(&format!("{} LIKE ?{param} ESCAPE '\\'", column.as_sql()));
            }
            Condition::All(conditions) => statement.push_group(conditions, " AND ", "1"),
            Condition::Any(conditions) => statement.push_group(conditions, " OR ", "0"),
        }
    }
}

/// Escape the LIKE wildcards `%` and `_` (and the escape character itself).
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

/// SQL text and the parameters to bind to it, in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Statement {
    fn new(sql: String) -> Self {
        Self {
            sql,
            params: Vec::new(),
        }
    }

    /// Add a parameter and return its 1-based index.
    fn push_param(&mut self, value: Value) -> usize {
        self.params.push(value);
        self.params.len()
    }

    fn push_comparison(&mut self, column: Column, operator: &str, value: Value) {
        let param = self.push_param(value);
        self.sql
            .push_str(&format!("{} {operator} ?{param}", column.as_sql()));
    }

    fn push_group(&mut self, conditions: &[Condition], separator: &str, empty: &str) {
        if conditions.is_empty() {
            self.sql.push_str(empty);
            return;
        }

        self.sql.push('(');
        for (i, condition) in conditions.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(separator);
            }
            condition.write_to(self);
        }
        self.sql.push(')');
    }

    fn push_where(&mut self, condition: Option<&Condition>) {
        if let Some(condition) = condition {
            self.sql.push_str(" WHERE ");
            condition.write_to(self);
        }
    }
}

fn integer(value: u64) -> Value {
    Value::Integer(i64::try_from(value).unwrap_or(i64::MAX))
}

/// A `SELECT` of whole accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    condition: Option<Condition>,
    order_by: Column,
    direction: Direction,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Select {
    /// Select every account in ascending ID order.
    pub fn accounts() -> Self {
        Self {
            condition: None,
            order_by: Column::Id,
            direction: Direction::Ascending,
            limit: None,
            offset: None,
        }
    }

    /// Only select accounts matching `condition`.
    ///
    /// Calling this more than once requires all of the conditions to hold.
    pub fn filter(mut self, condition: Condition) -> Self {
        self.condition = Some(match self.condition {
            Some(existing) => existing.and(condition),
            None => condition,
        });
        self
    }

    pub fn order_by(mut self, column: Column, direction: Direction) -> Self {
        self.order_by = column;
        self.direction = direction;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn build(&self) -> Statement {
        let mut statement = Statement::new(format!("SELECT {SELECT_COLUMNS} FROM {TABLE}"));
        statement.push_where(self.condition.as_ref());

        statement.sql.push_str(&format!(
            " ORDER BY {} {}",
            self.order_by.as_sql(),
            self.direction.as_sql()
        ));
        // Names are not unique, fall back to ID order so pages are stable.
        if self.order_by != Column::Id {
            statement.sql.push_str(", id ASC");
        }

        if self.limit.is_some() || self.offset.is_some() {
            // SQLite needs a LIMIT for OFFSET, a negative limit means no limit.
            let limit = self.limit.map(integer).unwrap_or(Value::Integer(-1));
            let param = statement.push_param(limit);
            statement.sql.push_str(&format!(" LIMIT ?{param}"));

            let param = statement.push_param(integer(self.offset.unwrap_or(0)));
            statement.sql.push_str(&format!(" OFFSET ?{param}"));
        }

        statement
    }
}

/// A `SELECT COUNT(*)` over all accounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Count;

impl Count {
    pub fn build(&self) -> Statement {
        Statement::new(format!("SELECT COUNT(*) FROM {TABLE}"))
    }
}

/// An `INSERT` of a single account that returns the stored row.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    id: Option<AccountId>,
    name: String,
}

impl Insert {
    /// Insert an account, the ID is generated by the database unless given.
    pub fn account(id: Option<AccountId>, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
        }
    }

    pub fn build(&self) -> Statement {
        let mut statement = Statement::default();

        let columns = match self.id {
            Some(id) => {
                statement.push_param(Value::Integer(id));
                statement.push_param(Value::Text(self.name.clone()));
                "(id, name) VALUES (?1, ?2)"
            }
            None => {
                statement.push_param(Value::Text(self.name.clone()));
                "(name) VALUES (?1)"
            }
        };

        statement.sql = format!("INSERT INTO {TABLE} {columns} RETURNING {SELECT_COLUMNS}");
        statement
    }
}

/// An `UPDATE` that sets the name of the matching accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateName {
    name: String,
    condition: Condition,
}

impl UpdateName {
    pub fn matching(condition: Condition, name: &str) -> Self {
        Self {
            name: name.to_owned(),
            condition,
        }
    }

    pub fn build(&self) -> Statement {
        let mut statement = Statement::new(format!("UPDATE {TABLE} SET name = ?1"));
        statement.push_param(Value::Text(self.name.clone()));
        statement.push_where(Some(&self.condition));
        statement
    }
}

/// A `DELETE` of the matching accounts, always restricted by a condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    condition: Condition,
}

impl Delete {
    pub fn matching(condition: Condition) -> Self {
        Self { condition }
    }

    pub fn build(&self) -> Statement {
        let mut statement = Statement::new(format!("DELETE FROM {TABLE}"));
        statement.push_where(Some(&self.condition));
        statement
    }
}
