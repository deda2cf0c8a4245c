use sea_orm::{DbErr, RuntimeErr};

const UNIQUE_VIOLATION: &str = "23505";

/// True when Postgres rejected a write because of a unique or primary key constraint.
pub fn is_unique_violation(err: &DbErr) -> bool {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))
        | DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db_err))) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
        }
        // The mock backend and wrapped errors only carry the message
        _ => {
            let msg = err.to_string().to_lowercase();
            msg.contains(UNIQUE_VIOLATION) || msg.contains("duplicate key")
        }
    }
}
