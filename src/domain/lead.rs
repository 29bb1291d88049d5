// src/domain/lead.rs

use crate::errors::ServerError;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadKind {
    /// "Agendar visita" / general contact.
    Contact,
    /// Free valuation request from an owner.
    Valuation,
}

impl LeadKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LeadKind::Contact => "contact",
            LeadKind::Valuation => "valuation",
        }
    }

    pub fn confirmation(self) -> &'static str {
        match self {
            LeadKind::Contact => "¡Gracias! Tu mensaje fue enviado. Un asesor de AGP te contactará pronto.",
            LeadKind::Valuation => {
                "Solicitud recibida. Te confirmaremos la tasación gratuita en 24 horas."
            }
        }
    }
}

/// Raw form submission, as posted.
#[derive(Debug, Clone, Default)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub property_id: Option<String>,
    /// Honeypot field, hidden from humans.
    pub company: String,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    pub kind: LeadKind,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    pub property_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeadOutcome {
    Accepted(Lead),
    /// Honeypot was filled in. Answer as if accepted, store nothing.
    Discarded,
}

impl LeadForm {
    pub fn from_pairs(params: &HashMap<String, String>) -> Self {
        let get = |k: &str| params.get(k).cloned().unwrap_or_default();
        Self {
            name: get("name"),
            email: get("email"),
            phone: get("phone"),
            message: get("message"),
            property_id: params
                .get("property_id")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            company: get("company"),
        }
    }

    pub fn validate(self, kind: LeadKind) -> Result<LeadOutcome, ServerError> {
        if !self.company.trim().is_empty() {
            return Ok(LeadOutcome::Discarded);
        }

        let name = required(&self.name, "El nombre es obligatorio")?;
        let phone = required(&self.phone, "El teléfono es obligatorio")?;
        let email = normalize_email(&self.email)?;
        let message = Some(self.message.trim().to_string()).filter(|m| !m.is_empty());

        Ok(LeadOutcome::Accepted(Lead {
            kind,
            name,
            email,
            phone,
            message,
            property_id: self.property_id,
        }))
    }
}

fn required(value: &str, message: &str) -> Result<String, ServerError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ServerError::BadRequest(message.to_string()));
    }
    Ok(v.to_string())
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Result<String, ServerError> {
    let e = email.trim().to_lowercase();
    if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return Err(ServerError::BadRequest("El correo no es válido".into()));
    }
    Ok(e)
}
