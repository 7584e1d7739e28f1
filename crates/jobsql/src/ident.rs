//! Quoted SQL identifier rendering.
//!
//! Column names handled here come from a fixed, code-controlled vocabulary
//! (model field names and alias tables), never from untrusted input. They are
//! still always emitted quoted, escaping `"` as `""`, so reserved words and
//! mixed-case names survive verbatim.

use crate::error::{BuildError, BuildResult};

/// Validate a column identifier before quoting.
pub(crate) fn check(name: &str) -> BuildResult<()> {
    if name.is_empty() {
        return Err(BuildError::validation("Empty identifier"));
    }
    if name.contains('\0') {
        return Err(BuildError::validation(
            "Identifier cannot contain NUL character",
        ));
    }
    Ok(())
}

/// Append `name` to `out` as a quoted identifier.
pub(crate) fn write_quoted(out: &mut String, name: &str) {
    out.push('"');
    for ch in name.chars() {
        if ch == '"' {
            out.push('"');
            out.push('"');
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}

/// Render a quoted identifier.
///
/// # Example
/// ```ignore
/// use jobsql::ident::quote;
///
/// assert_eq!(quote("order")?, r#""order""#);
/// # Ok::<(), jobsql::BuildError>(())
/// ```
pub fn quote(name: &str) -> BuildResult<String> {
    check(name)?;
    let mut out = String::with_capacity(name.len() + 2);
    write_quoted(&mut out, name);
    Ok(out)
}
