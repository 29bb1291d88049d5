use crate::db::leads::{insert_lead, recent_leads};
use crate::domain::lead::{LeadForm, LeadKind, LeadOutcome};
use crate::errors::ServerError;
use crate::tests::utils::{init_test_db, query};

fn form(pairs: &[(&str, &str)]) -> LeadForm {
    LeadForm::from_pairs(&query(pairs))
}

#[test]
fn valid_lead_is_trimmed_and_lowercased() {
    let outcome = form(&[
        ("name", " Ana "),
        ("email", " Ana@Example.com "),
        ("phone", "999 111 222"),
        ("message", ""),
        ("property_id", "lm-001"),
    ])
    .validate(LeadKind::Contact)
    .unwrap();

    let LeadOutcome::Accepted(lead) = outcome else {
        panic!("expected accepted lead");
    };
    assert_eq!(lead.name, "Ana");
    assert_eq!(lead.email, "ana@example.com");
    assert_eq!(lead.message, None);
    assert_eq!(lead.property_id.as_deref(), Some("lm-001"));
}

#[test]
fn honeypot_discards_silently() {
    let outcome = form(&[("company", "ACME"), ("name", "bot")])
        .validate(LeadKind::Valuation)
        .unwrap();
    assert_eq!(outcome, LeadOutcome::Discarded);
}

#[test]
fn missing_fields_are_rejected() {
    let err = form(&[("name", "Ana"), ("email", "ana@example.com")])
        .validate(LeadKind::Contact)
        .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(ref m) if m.contains("teléfono")));

    let err = form(&[("name", "Ana"), ("email", "ana@"), ("phone", "1")])
        .validate(LeadKind::Contact)
        .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(ref m) if m.contains("correo")));
}

#[test]
fn stored_leads_read_back_newest_first() {
    let db = init_test_db();
    let lead = |name: &str| match form(&[("name", name), ("email", "x@y.pe"), ("phone", "1")])
        .validate(LeadKind::Valuation)
        .unwrap()
    {
        LeadOutcome::Accepted(l) => l,
        LeadOutcome::Discarded => panic!("unexpected discard"),
    };

    db.with_conn(|conn| {
        insert_lead(conn, &lead("old"), 10)?;
        insert_lead(conn, &lead("new"), 20)?;
        Ok(())
    })
    .unwrap();

    let leads = db.with_conn(|conn| recent_leads(conn, 10)).unwrap();
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].name, "new");
    assert_eq!(leads[0].kind, "valuation");
    assert_eq!(leads[1].created_at, 10);
}
