//! # jobsql
//!
//! Parameterized SQL fragment builders for a jobs data layer on PostgreSQL.
//!
//! ## Features
//!
//! - **Partial updates**: turn an arbitrary subset of named fields into a
//!   `SET` clause with `$n` placeholders ([`PartialUpdate`])
//! - **Dynamic filters**: compose `WHERE` predicates from independently
//!   optional search criteria ([`SearchFilter`])
//! - **Positional consistency**: every fragment returns its bound values in
//!   placeholder order, ready for `tokio-postgres`
//! - **Pure and synchronous**: no I/O, no shared state; the data-access layer
//!   owns statement assembly and execution
//!
//! ## Example
//!
//! ```ignore
//! use jobsql::{PartialUpdate, SearchFilter};
//!
//! // UPDATE: SET clause first, then a primary-key param owned by the caller.
//! let set = PartialUpdate::new()
//!     .column("numEmployees", "num_employees")
//!     .set("name", "Acme Widgets")
//!     .set("numEmployees", 42i64)
//!     .build()?;
//! let sql = format!(
//!     "UPDATE companies SET {} WHERE handle = ${} RETURNING handle",
//!     set.sql,
//!     set.params.len() + 1,
//! );
//!
//! // SELECT: the fragment carries its own leading ` WHERE ` (or is empty).
//! let filter = SearchFilter {
//!     title: Some("eng".to_string()),
//!     ..Default::default()
//! };
//! let clause = filter.where_clause();
//! let sql = format!("SELECT id, title, salary, equity FROM jobs{}", clause.sql);
//! # Ok::<(), jobsql::BuildError>(())
//! ```

pub mod error;
pub mod filter;
pub mod ident;
pub mod param;
pub mod update;

pub use error::{BuildError, BuildResult};
pub use filter::{SearchFilter, WhereClause, where_clause};
pub use param::{Param, ParamList};
pub use update::{PartialUpdate, SetClause};
