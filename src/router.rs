use crate::catalog::{self, Catalog};
use crate::db::leads::insert_lead;
use crate::db::Database;
use crate::domain::lead::{LeadForm, LeadKind, LeadOutcome};
use crate::domain::listing::ListingQuery;
use crate::domain::markers;
use crate::domain::property::Property;
use crate::domain::similar::similar_to;
use crate::errors::ServerError;
use crate::responses::{html_partial, html_response, json_response, ResultResp};
use crate::templates::components::{lead_result, FilterOptions};
use crate::templates::pages::{self, DetailVm, HomeVm, ListingsVm, FEATURED_COUNT};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

/// Largest form body we're willing to read.
const MAX_FORM_BYTES: u64 = 16 * 1024;

/// Everything a request handler needs, shared across worker threads.
pub struct AppState {
    pub db: Database,
    pub catalog: Catalog,
    pub page_size: usize,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(state),
        ("GET", "/propiedades") => listings(&req, state, false),
        ("GET", "/propiedades/resultados") => listings(&req, state, true),
        ("GET", "/propiedad") => detail(&req, state),
        ("GET", "/api/markers") => marker_data(&req, state),
        ("POST", "/contacto") => submit_lead(req, state, LeadKind::Contact),
        ("POST", "/tasacion") => submit_lead(req, state, LeadKind::Valuation),
        _ => Err(ServerError::NotFound),
    }
}

fn home(state: &AppState) -> ResultResp {
    let all = state.catalog.all(&state.db)?;
    let vm = HomeVm {
        featured: all.iter().take(FEATURED_COUNT).collect(),
        districts: catalog::districts(&all),
    };
    html_response(pages::home_page(&vm))
}

fn listings(req: &Request, state: &AppState, partial: bool) -> ResultResp {
    let all = state.catalog.all(&state.db)?;
    let query = ListingQuery::from_query(&parse_query(req));
    let vm = listings_vm(query, &all, state.page_size);

    tracing::debug!(
        total = vm.page.total,
        page = vm.page.page,
        partial,
        "listing query"
    );

    if partial {
        html_partial(200, pages::results_block(&vm))
    } else {
        html_response(pages::listings_page(&vm))
    }
}

fn listings_vm(query: ListingQuery, all: &[Property], page_size: usize) -> ListingsVm<'_> {
    // Markers cover every match, not just the visible page.
    let markers = markers::project(&query.matching(all));
    let page = query.run(all, page_size);

    ListingsVm {
        query,
        page,
        markers,
        options: FilterOptions {
            districts: catalog::districts(all),
            types: catalog::types(all),
        },
    }
}

fn detail(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let id = params
        .get("id")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ServerError::BadRequest("Falta el identificador de la propiedad.".into()))?;

    let all = state.catalog.all(&state.db)?;
    let property = catalog::find(&all, id).ok_or_else(|| {
        tracing::debug!(id, "property not found");
        ServerError::NotFound
    })?;

    let vm = DetailVm {
        property,
        similar: similar_to(property, &all),
        usd_rate: state.catalog.usd_rate,
    };
    html_response(pages::detail_page(&vm))
}

fn marker_data(req: &Request, state: &AppState) -> ResultResp {
    let all = state.catalog.all(&state.db)?;
    let query = ListingQuery::from_query(&parse_query(req));
    let matching = query.matching(&all);
    json_response(&markers::project(&matching))
}

fn submit_lead(req: Request, state: &AppState, kind: LeadKind) -> ResultResp {
    let form = LeadForm::from_pairs(&read_form(req)?);

    match form.validate(kind) {
        Ok(LeadOutcome::Accepted(lead)) => {
            let now = chrono::Utc::now().timestamp();
            let id = state.db.with_conn(|conn| insert_lead(conn, &lead, now))?;
            tracing::info!(id, kind = kind.as_str(), property = ?lead.property_id, "lead stored");
            html_partial(200, lead_result(true, kind.confirmation()))
        }
        Ok(LeadOutcome::Discarded) => {
            tracing::info!(kind = kind.as_str(), "honeypot lead discarded");
            html_partial(200, lead_result(true, kind.confirmation()))
        }
        Err(ServerError::BadRequest(msg)) => {
            html_partial(400, lead_result(false, &format!("Revisa los campos requeridos: {msg}")))
        }
        Err(e) => Err(e),
    }
}

pub fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Urlencoded body as a map. Bodies over `MAX_FORM_BYTES` are rejected
/// whole rather than parsed from a truncated prefix.
fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut raw = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("could not read form body: {e}")))?;

    if raw.len() as u64 > MAX_FORM_BYTES {
        tracing::debug!(limit = MAX_FORM_BYTES, "form body too large");
        return Err(ServerError::BadRequest(
            "El formulario es demasiado grande.".into(),
        ));
    }

    Ok(url::form_urlencoded::parse(&raw).into_owned().collect())
}
