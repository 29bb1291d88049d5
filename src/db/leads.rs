// src/db/leads.rs
use crate::domain::lead::Lead;
use crate::errors::ServerError;
use rusqlite::{params, Connection};

/// A stored lead as read back for inspection.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct StoredLead {
    pub kind: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    pub property_id: Option<String>,
    pub created_at: i64,
}

pub fn insert_lead(conn: &Connection, lead: &Lead, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into leads (kind, name, email, phone, message, property_id, created_at)
        values (?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            lead.kind.as_str(),
            lead.name,
            lead.email,
            lead.phone,
            lead.message,
            lead.property_id,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert lead failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

#[cfg(test)]
pub fn recent_leads(conn: &Connection, limit: i64) -> Result<Vec<StoredLead>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select kind, name, email, phone, message, property_id, created_at
            from leads
            order by created_at desc, id desc
            limit ?
            "#,
        )
        .map_err(|e| ServerError::DbError(format!("Prepare failed: {e}")))?;

    let leads = stmt
        .query_map(params![limit], |row| {
            Ok(StoredLead {
                kind: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                phone: row.get(3)?,
                message: row.get(4)?,
                property_id: row.get(5)?,
                created_at: row.get(6)?,
            })
        })
        .map_err(|e| ServerError::DbError(format!("Query failed: {e}")))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(leads)
}
