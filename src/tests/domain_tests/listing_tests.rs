use crate::domain::listing::ListingQuery;
use crate::domain::pagination::{page_count, paginate};
use crate::domain::property::Operation;
use crate::domain::sort::SortOrder;
use crate::tests::utils::{fixture, ids, prop, query};

#[test]
fn page_n_is_the_nth_window() {
    let items: Vec<usize> = (0..14).collect();

    let third = paginate(items.clone(), 3, 6);
    assert_eq!(third.items, vec![12, 13]);
    assert_eq!(third.total, 14);
    assert_eq!(third.total_pages, 3);
    assert!(third.has_prev());
    assert!(!third.has_next());

    let second = paginate(items, 2, 6);
    assert_eq!(second.items, (6..12).collect::<Vec<_>>());
    assert!(second.has_next());
}

#[test]
fn page_count_is_the_ceiling() {
    assert_eq!(page_count(0, 6), 0);
    assert_eq!(page_count(6, 6), 1);
    assert_eq!(page_count(7, 6), 2);
    assert_eq!(page_count(12, 6), 2);
}

#[test]
fn out_of_range_pages() {
    let items: Vec<usize> = (0..4).collect();

    let zero = paginate(items.clone(), 0, 3);
    assert_eq!(zero.page, 1);
    assert_eq!(zero.items, vec![0, 1, 2]);

    let past_end = paginate(items, 5, 3);
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total_pages, 2);
}

#[test]
fn price_sorts_are_stable_for_ties() {
    let all = fixture();

    let mut asc = all.iter().collect::<Vec<_>>();
    SortOrder::PriceAsc.apply(&mut asc);
    assert_eq!(ids(&asc), ["b", "d", "a", "e", "c"]);

    let mut desc = all.iter().collect::<Vec<_>>();
    SortOrder::PriceDesc.apply(&mut desc);
    assert_eq!(ids(&desc), ["c", "a", "e", "d", "b"]);
}

#[test]
fn area_sort_is_largest_first_and_stable_for_ties() {
    let all = fixture();
    let mut by_area = all.iter().collect::<Vec<_>>();
    SortOrder::AreaDesc.apply(&mut by_area);
    assert_eq!(ids(&by_area), ["c", "e", "d", "a", "b"]);

    let tied = vec![
        prop("x", "Lince", Operation::Sale, "Casa", 1, 1, 1, 100.0),
        prop("y", "Lince", Operation::Sale, "Casa", 1, 1, 1, 200.0),
        prop("z", "Lince", Operation::Sale, "Casa", 1, 1, 1, 100.0),
        prop("w", "Lince", Operation::Sale, "Casa", 1, 1, 1, 200.0),
    ];
    let mut items = tied.iter().collect::<Vec<_>>();
    SortOrder::AreaDesc.apply(&mut items);
    assert_eq!(ids(&items), ["y", "w", "x", "z"]);
}

#[test]
fn unknown_sort_keeps_catalog_order() {
    assert_eq!(SortOrder::parse("cheapest"), SortOrder::Relevance);
    assert_eq!(SortOrder::parse("area_desc"), SortOrder::AreaDesc);
}

#[test]
fn run_filters_then_sorts_then_paginates() {
    let all = fixture();
    let q = ListingQuery::from_query(&query(&[
        ("operation", "Venta"),
        ("sort", "price_desc"),
        ("page", "2"),
    ]));

    let page = q.run(&all, 2);
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(ids(&page.items), ["e"]);
}

#[test]
fn cleared_filters_show_the_full_first_page() {
    let all: Vec<_> = (0..10)
        .map(|i| prop(&format!("p{i}"), "Lince", Operation::Sale, "Casa", 1000 + i, 1, 1, 50.0))
        .collect();

    let narrowed = ListingQuery::from_query(&query(&[("district", "Surco"), ("page", "2")]));
    assert_eq!(narrowed.run(&all, 6).total, 0);

    let cleared = ListingQuery::from_query(&query(&[]));
    let page = cleared.run(&all, 6);
    assert_eq!(page.page, 1);
    assert_eq!(page.total, 10);
    assert_eq!(ids(&page.items), ["p0", "p1", "p2", "p3", "p4", "p5"]);
}

#[test]
fn page_links_keep_filters_and_sort() {
    let q = ListingQuery::from_query(&query(&[
        ("district", "San Isidro"),
        ("sort", "price_asc"),
        ("page", "1"),
    ]));

    assert_eq!(
        q.href_for_page("/propiedades", 2),
        "/propiedades?district=San+Isidro&sort=price_asc&page=2"
    );
}
