use crate::catalog::Catalog;
use crate::db::connection::{init_db, Database};
use crate::domain::property::{Operation, Property, Source};
use crate::router::AppState;
use astra::Response;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static DB_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Fresh SQLite file under the temp dir, initialized with the production schema.
pub fn init_test_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "agp_test_{}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        DB_COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    let db = Database::new(path.to_string_lossy().to_string());
    init_db(&db, "sql/schema.sql").unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

/// App state over the shipped catalog file, three cards per page.
pub fn test_state() -> AppState {
    AppState {
        db: init_test_db(),
        catalog: Catalog::load("data/properties.json").expect("catalog should load"),
        page_size: 3,
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

#[allow(clippy::too_many_arguments)]
pub fn prop(
    id: &str,
    district: &str,
    operation: Operation,
    kind: &str,
    price: i64,
    bedrooms: u32,
    bathrooms: u32,
    area: f64,
) -> Property {
    Property {
        id: id.to_string(),
        title: format!("{kind} {id}"),
        district: district.to_string(),
        operation,
        kind: kind.to_string(),
        price_pen: price,
        bedrooms,
        bathrooms,
        parking: 1,
        area_m2: area,
        maintenance: 0,
        address_approx: format!("Calle {id}"),
        lat: -12.1,
        lng: -77.03,
        description: String::new(),
        features: vec![],
        images: vec![],
        image_labels: vec![],
        source: Source::Catalog,
    }
}

/// Five listings with a price tie between `a` and `e`.
pub fn fixture() -> Vec<Property> {
    vec![
        prop("a", "Miraflores", Operation::Sale, "Departamento", 1_000_000, 3, 2, 120.0),
        prop("b", "Miraflores", Operation::Rent, "Departamento", 4_000, 2, 1, 80.0),
        prop("c", "Surco", Operation::Sale, "Casa", 2_000_000, 4, 3, 300.0),
        prop("d", "San Isidro", Operation::Rent, "Oficina", 9_000, 0, 2, 140.0),
        prop("e", "Barranco", Operation::Sale, "Departamento", 1_000_000, 3, 3, 160.0),
    ]
}

pub fn ids(items: &[&Property]) -> Vec<String> {
    items.iter().map(|p| p.id.clone()).collect()
}

pub fn query(pairs: &[(&str, &str)]) -> std::collections::HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
