//! Partial-update `SET` clause builder.
//!
//! [`PartialUpdate`] collects an arbitrary subset of field assignments and
//! renders them as a `SET` clause body with `$n` placeholders plus the bound
//! values in the same order. A logical-name to column translation table covers
//! fields whose API spelling differs from the physical schema.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tokio_postgres::types::ToSql;

use crate::error::{BuildError, BuildResult};
use crate::ident;
use crate::param::{Param, ParamList};

/// A rendered `SET` clause body plus its bound values.
///
/// The two sides are positionally consistent: the Nth placeholder in `sql`
/// corresponds to the Nth entry in `params`. The `SET` keyword itself is left
/// to the caller assembling the full statement.
#[derive(Clone, Debug)]
pub struct SetClause {
    /// Clause body, e.g. `"name"=$1, "num_employees"=$2`.
    pub sql: String,
    /// Bound values in placeholder order.
    pub params: ParamList,
}

impl SetClause {
    /// Get parameters as references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.as_refs()
    }
}

/// Partial update builder.
///
/// Assignments are kept in insertion order; that order determines both the
/// textual order of the `SET` clause and the positional order of the bound
/// values, and the two never diverge.
///
/// # Example
/// ```ignore
/// use jobsql::PartialUpdate;
///
/// let set = PartialUpdate::new()
///     .column("numEmployees", "num_employees")
///     .set("name", "Acme Widgets")
///     .set("numEmployees", 42i64)
///     .build()?;
/// assert_eq!(set.sql, r#""name"=$1, "num_employees"=$2"#);
/// # Ok::<(), jobsql::BuildError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct PartialUpdate {
    /// Assignments in insertion order.
    fields: Vec<(String, Param)>,
    /// Logical field name -> physical column identifier.
    columns: HashMap<String, String>,
}

impl PartialUpdate {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a logical-name to column translation.
    ///
    /// Fields without an entry are emitted under their own name.
    pub fn column(mut self, field: &str, column: &str) -> Self {
        self.columns.insert(field.to_string(), column.to_string());
        self
    }

    /// Append a field assignment.
    ///
    /// Explicit SQL `NULL` is a valid value: pass `None::<T>` and it is bound
    /// as a parameter, not dropped. Fields are not deduplicated; assigning the
    /// same field twice is caller misuse and the clause is emitted as given.
    pub fn set<T: ToSql + Send + Sync + 'static>(mut self, field: &str, value: T) -> Self {
        self.fields.push((field.to_string(), Param::new(value)));
        self
    }

    /// Append an optional field assignment (None => skip).
    pub fn set_opt<T: ToSql + Send + Sync + 'static>(self, field: &str, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.set(field, v)
        } else {
            self
        }
    }

    /// Ingest a decoded JSON object, preserving its key order.
    ///
    /// Scalars bind as concrete SQL types (string, `i64`, `f64`, bool),
    /// `null` binds as SQL `NULL`, and arrays/objects bind as JSONB values.
    pub fn from_json(data: &Map<String, Value>) -> Self {
        let mut update = Self::new();
        for (field, value) in data {
            update = match value {
                Value::Null => update.set(field, None::<String>),
                Value::Bool(b) => update.set(field, *b),
                Value::Number(n) => match n.as_i64() {
                    Some(i) => update.set(field, i),
                    None => update.set(field, n.as_f64().unwrap_or(f64::NAN)),
                },
                Value::String(s) => update.set(field, s.clone()),
                other => update.set(field, other.clone()),
            };
        }
        update
    }

    /// Number of assignments collected so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no assignments have been collected.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build the `SET` clause with placeholders numbered from `$1`.
    pub fn build(&self) -> BuildResult<SetClause> {
        self.build_with_offset(0)
    }

    /// Build with placeholder numbering starting after `offset`.
    ///
    /// For example, `build_with_offset(2)` numbers the first placeholder `$3`.
    ///
    /// Fails with [`BuildError::BadRequest`] when no assignments were
    /// collected: there is nothing to update, and an empty `SET` clause would
    /// be a caller bug rather than a database no-op.
    pub fn build_with_offset(&self, offset: usize) -> BuildResult<SetClause> {
        if self.fields.is_empty() {
            return Err(BuildError::bad_request("no fields to update"));
        }

        let mut sql = String::new();
        let mut params = ParamList::new();

        for (field, value) in &self.fields {
            let column = self.columns.get(field).unwrap_or(field);
            ident::check(column)?;

            if !sql.is_empty() {
                sql.push_str(", ");
            }
            ident::write_quoted(&mut sql, column);
            let idx = params.push_param(value.clone()) + offset;
            sql.push_str(&format!("=${idx}"));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "jobsql.sql",
            sql = %sql,
            param_count = params.len(),
            "built SET clause",
        );

        Ok(SetClause { sql, params })
    }
}
