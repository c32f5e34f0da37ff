use sea_orm::{DbErr, RuntimeErr};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value as Json;

const UNIQUE_VIOLATION: &str = "23505";

/// True when Postgres rejected the statement because of a unique index.
pub fn is_unique_violation(err: &DbErr) -> bool {
    if let DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))
    | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db_err))) = err
    {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return true;
        }
    }

    // Mocked and wrapped errors only carry the message.
    let message = err.to_string().to_lowercase();
    message.contains(UNIQUE_VIOLATION)
        || message.contains("duplicate key")
        || message.contains("unique constraint")
}

pub fn string_list(values: &[String]) -> Json {
    Json::Array(values.iter().cloned().map(Json::String).collect())
}

pub fn to_json<T: Serialize>(value: &T) -> Result<Json, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

/// JSONB columns written by older rows may be `null`; those decode as the type's default.
pub fn from_json<T: DeserializeOwned + Default>(value: &Json) -> Result<T, String> {
    if value.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(value.clone()).map_err(|e| e.to_string())
}
