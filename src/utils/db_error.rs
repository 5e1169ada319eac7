//! Helpers for classifying PostgreSQL unique violations.

/// Returns the name of the unique constraint `e` violated, if any.
pub fn unique_violation_constraint(e: &sqlx::Error) -> Option<String> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    Some(db_err.constraint().unwrap_or_default().to_string())
}
