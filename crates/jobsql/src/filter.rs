//! Dynamic `WHERE` filter for job-listing searches.
//!
//! [`SearchFilter`] is a record of independently optional criteria. Each
//! present criterion contributes one predicate; the predicates are combined
//! conjunctively in a fixed order (title, salary, equity) so the output is
//! deterministic for a given combination.

use serde::Deserialize;
use tokio_postgres::types::ToSql;

use crate::param::ParamList;

/// A rendered `WHERE` fragment plus its bound values.
///
/// `sql` is empty when no criteria were present; otherwise it carries its own
/// leading ` WHERE ` so the caller can append it to a statement verbatim.
/// Same positional-consistency invariant as [`SetClause`](crate::SetClause).
#[derive(Clone, Debug, Default)]
pub struct WhereClause {
    /// Fragment text, e.g. ` WHERE title ILIKE $1 AND equity > 0`.
    pub sql: String,
    /// Bound values in placeholder order.
    pub params: ParamList,
}

impl WhereClause {
    /// Get parameters as references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.as_refs()
    }

    /// Check if the fragment is empty (no filtering).
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

/// Search criteria for the job-listings table.
///
/// Every field is independently optional; absence means "do not filter on
/// this dimension". Deserializes from the external camelCase key spelling,
/// so a decoded query string or JSON body maps directly onto it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchFilter {
    /// Case-insensitive substring match against `title`.
    pub title: Option<String>,
    /// Lower bound on `salary`. Zero is a present value, not an absence
    /// signal.
    #[serde(rename = "minSalary")]
    pub min_salary: Option<i64>,
    /// When `Some(true)`, restrict to rows with nonzero `equity`.
    /// `Some(false)` and `None` both mean "do not filter".
    #[serde(rename = "hasEquity")]
    pub has_equity: Option<bool>,
}

impl SearchFilter {
    /// True when no criterion would produce a predicate.
    pub fn is_empty(&self) -> bool {
        !self.title.as_deref().is_some_and(|t| !t.is_empty())
            && self.min_salary.is_none()
            && self.has_equity != Some(true)
    }

    /// Build the `WHERE` fragment with placeholders numbered from `$1`.
    pub fn where_clause(&self) -> WhereClause {
        self.where_clause_with_offset(0)
    }

    /// Build with placeholder numbering starting after `offset`.
    ///
    /// For example, `where_clause_with_offset(2)` numbers the first
    /// placeholder `$3`. Never fails: absence of all criteria yields the
    /// empty fragment.
    pub fn where_clause_with_offset(&self, offset: usize) -> WhereClause {
        let mut conditions: Vec<String> = Vec::new();
        let mut params = ParamList::new();

        if let Some(title) = self.title.as_deref() {
            if !title.is_empty() {
                let idx = params.push(format!("%{title}%")) + offset;
                conditions.push(format!("title ILIKE ${idx}"));
            }
        }

        if let Some(min_salary) = self.min_salary {
            let idx = params.push(min_salary) + offset;
            conditions.push(format!("salary >= ${idx}"));
        }

        if self.has_equity == Some(true) {
            conditions.push("equity > 0".to_string());
        }

        if conditions.is_empty() {
            return WhereClause::default();
        }

        let sql = format!(" WHERE {}", conditions.join(" AND "));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "jobsql.sql",
            sql = %sql,
            param_count = params.len(),
            "built WHERE clause",
        );

        WhereClause { sql, params }
    }
}

/// Build a `WHERE` fragment from an optional filter.
///
/// `None` means "no filtering" and yields the empty fragment, exactly like a
/// filter with all criteria absent.
pub fn where_clause(filter: Option<&SearchFilter>) -> WhereClause {
    filter.map(SearchFilter::where_clause).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_filter_yields_empty_fragment() {
        let clause = where_clause(None);
        assert_eq!(clause.sql, "");
        assert!(clause.params.is_empty());
    }

    #[test]
    fn all_absent_criteria_yield_empty_fragment() {
        let clause = SearchFilter::default().where_clause();
        assert_eq!(clause.sql, "");
        assert!(clause.params.is_empty());
    }

    #[test]
    fn title_binds_wrapped_pattern() {
        let filter = SearchFilter {
            title: Some("eng".to_string()),
            ..Default::default()
        };
        let clause = filter.where_clause();
        assert_eq!(clause.sql, " WHERE title ILIKE $1");
        assert_eq!(clause.params.len(), 1);
    }

    #[test]
    fn empty_title_is_skipped() {
        let filter = SearchFilter {
            title: Some(String::new()),
            ..Default::default()
        };
        let clause = filter.where_clause();
        assert_eq!(clause.sql, "");
        assert!(clause.params.is_empty());
    }

    #[test]
    fn min_salary_zero_is_present() {
        let filter = SearchFilter {
            min_salary: Some(0),
            ..Default::default()
        };
        let clause = filter.where_clause();
        assert_eq!(clause.sql, " WHERE salary >= $1");
        assert_eq!(clause.params.len(), 1);
    }

    #[test]
    fn has_equity_false_does_not_filter() {
        let filter = SearchFilter {
            has_equity: Some(false),
            ..Default::default()
        };
        let clause = filter.where_clause();
        assert_eq!(clause.sql, "");
        assert!(clause.params.is_empty());
    }

    #[test]
    fn has_equity_true_appends_static_predicate() {
        let filter = SearchFilter {
            has_equity: Some(true),
            ..Default::default()
        };
        let clause = filter.where_clause();
        assert_eq!(clause.sql, " WHERE equity > 0");
        assert!(clause.params.is_empty());
    }

    #[test]
    fn predicates_keep_fixed_order() {
        let filter = SearchFilter {
            title: Some("a".to_string()),
            min_salary: Some(10),
            has_equity: Some(true),
        };
        let clause = filter.where_clause();
        assert_eq!(
            clause.sql,
            " WHERE title ILIKE $1 AND salary >= $2 AND equity > 0"
        );
        assert_eq!(clause.params.len(), 2);
    }

    #[test]
    fn offset_renumbers_placeholders() {
        let filter = SearchFilter {
            title: Some("a".to_string()),
            min_salary: Some(10),
            ..Default::default()
        };
        let clause = filter.where_clause_with_offset(3);
        assert_eq!(clause.sql, " WHERE title ILIKE $4 AND salary >= $5");
        assert_eq!(clause.params.len(), 2);
    }

    #[test]
    fn is_empty_tracks_effective_criteria() {
        assert!(SearchFilter::default().is_empty());
        assert!(
            SearchFilter {
                has_equity: Some(false),
                ..Default::default()
            }
            .is_empty()
        );
        assert!(
            !SearchFilter {
                min_salary: Some(0),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn deserializes_camel_case_keys() {
        let filter: SearchFilter =
            serde_json::from_str(r#"{"title":"eng","minSalary":0,"hasEquity":true}"#).unwrap();
        assert_eq!(
            filter,
            SearchFilter {
                title: Some("eng".to_string()),
                min_salary: Some(0),
                has_equity: Some(true),
            }
        );
    }

    #[test]
    fn deserializes_missing_keys_as_absent() {
        let filter: SearchFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter, SearchFilter::default());
    }
}
