use crate::domain::property::{Operation, PropertyDraft, Source, DEFAULT_LAT, FALLBACK_IMAGE};

#[test]
fn empty_draft_gets_every_default() {
    let p = PropertyDraft::default().normalize(1_700_000_000_000);

    assert_eq!(p.id, "adm-1700000000000");
    assert_eq!(p.title, "Departamento sin título");
    assert_eq!(p.district, "Miraflores");
    assert_eq!(p.operation, Operation::Sale);
    assert_eq!(p.kind, "Departamento");
    assert_eq!(p.price_pen, 0);
    assert_eq!(p.address_approx, "Ubicación referencial pendiente");
    assert_eq!(p.lat, DEFAULT_LAT);
    assert_eq!(p.description, "Sin descripción.");
    assert_eq!(p.images, vec![FALLBACK_IMAGE.to_string()]);
    assert_eq!(p.source, Source::Admin);
}

#[test]
fn draft_values_win_over_defaults() {
    let p = PropertyDraft {
        title: Some("  Casa en Lince ".into()),
        operation: Some("Alquiler".into()),
        price_pen: Some(-5),
        lat: Some(0.0),
        images: vec!["".into(), "https://img/1.jpg".into()],
        ..Default::default()
    }
    .normalize(1);

    assert_eq!(p.title, "Casa en Lince");
    assert_eq!(p.operation, Operation::Rent);
    assert_eq!(p.price_pen, 0);
    assert_eq!(p.lat, DEFAULT_LAT);
    assert_eq!(p.images, vec!["https://img/1.jpg".to_string()]);
    assert_eq!(p.cover_image(), "https://img/1.jpg");
}

#[test]
fn href_encodes_the_id() {
    let p = PropertyDraft {
        id: Some("adm 1&x".into()),
        ..Default::default()
    }
    .normalize(1);

    assert_eq!(p.href(), "/propiedad?id=adm+1%26x");
}
