//! Schema bootstrap

use sqlx::PgPool;
use tracing::info;

/// Initial schema, safe to re-run
const INITIAL_SCHEMA: &str = include_str!("../migrations/0001_initial_schema.sql");

/// Create missing tables and seed the built-in roles
pub async fn apply(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(INITIAL_SCHEMA).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_seeds_builtin_roles() {
        assert!(INITIAL_SCHEMA.contains("'ROLE_ADMIN'"));
        assert!(INITIAL_SCHEMA.contains("'ROLE_USER'"));
        assert!(INITIAL_SCHEMA.contains("ON CONFLICT (name) DO NOTHING"));
    }

    #[test]
    fn test_schema_is_idempotent() {
        let creates = INITIAL_SCHEMA.matches("CREATE TABLE ").count();
        let guarded = INITIAL_SCHEMA.matches("CREATE TABLE IF NOT EXISTS").count();
        assert_eq!(creates, guarded);
    }
}
