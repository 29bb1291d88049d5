// src/db/admin_properties.rs
use crate::db::connection::Database;
use crate::domain::property::{Property, PropertyDraft};
use crate::errors::ServerError;
use rusqlite::params;

/// Normalize a draft and store it ahead of every earlier admin record.
/// Saving an id that already exists replaces it and moves it to the front.
pub fn save_admin_property(
    db: &Database,
    draft: PropertyDraft,
    now_millis: i64,
) -> Result<Property, ServerError> {
    let property = draft.normalize(now_millis);
    let body = serde_json::to_string(&property)
        .map_err(|e| ServerError::DataError(format!("encode admin property failed: {e}")))?;

    db.with_conn(|conn| {
        conn.execute(
            r#"
            insert or replace into admin_properties (property_id, body, created_at)
            values (?, ?, ?)
            "#,
            params![property.id, body, now_millis],
        )
        .map_err(|e| ServerError::DbError(format!("insert admin property failed: {e}")))?;
        Ok(())
    })?;

    tracing::info!(id = %property.id, title = %property.title, "admin property saved");
    Ok(property)
}

/// Stored admin records, newest first. Rows that no longer decode are skipped.
pub fn admin_properties(db: &Database) -> Result<Vec<Property>, ServerError> {
    let rows: Vec<(String, String)> = db.with_conn(|conn| {
        let mut stmt = conn
            .prepare("select property_id, body from admin_properties order by id desc")
            .map_err(|e| ServerError::DbError(format!("Prepare failed: {e}")))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .map_err(|e| ServerError::DbError(format!("Query failed: {e}")))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ServerError::DbError(format!("Row read failed: {e}")))?;
        Ok(rows)
    })?;

    Ok(rows
        .into_iter()
        .filter_map(|(id, body)| match serde_json::from_str::<Property>(&body) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!(%id, error = %e, "skipping unreadable admin property");
                None
            }
        })
        .collect())
}
