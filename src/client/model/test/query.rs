use crate::client::model::query::{PageQuery, PaginationView};

/// Tests the list query string for page 2 with 50 rows.
///
/// Expected: `skip=50&limit=50`
#[test]
fn second_page_skips_one_page() {
    let mut query = PageQuery::new(50);
    query.set_page(2);

    assert_eq!(query.to_query_string(), "skip=50&limit=50");
}

/// Tests that a search term is appended and encoded.
///
/// Expected: `search` present, URL-encoded
#[test]
fn search_is_appended_when_present() {
    let mut query = PageQuery::new(50);
    query.set_search("abc");
    assert_eq!(query.to_query_string(), "skip=0&limit=50&search=abc");

    query.set_search("a&b c");
    assert_eq!(query.to_query_string(), "skip=0&limit=50&search=a%26b+c");
}

/// Tests that searching and resizing both go back to page 1.
///
/// Expected: page 1 after either change
#[test]
fn search_and_page_size_reset_page() {
    let mut query = PageQuery::new(50);
    query.set_page(4);
    query.set_search("x");
    assert_eq!(query.page(), 1);

    query.set_page(3);
    query.set_page_size(25);
    assert_eq!(query.page(), 1);
    assert_eq!(query.page_size(), 25);
}

/// Tests that page 0 is rejected.
///
/// Expected: `false`, page unchanged
#[test]
fn page_zero_is_ignored() {
    let mut query = PageQuery::new(50);
    query.set_page(3);

    assert!(!query.set_page(0));
    assert_eq!(query.page(), 3);
}

/// Tests the pagination descriptor.
///
/// Expected: "previous" only past page 1
#[test]
fn pagination_view_tracks_page() {
    let mut query = PageQuery::new(10);
    assert!(!PaginationView::from(&query).has_previous);

    query.set_page(2);
    assert_eq!(
        PaginationView::from(&query),
        PaginationView {
            page: 2,
            has_previous: true
        }
    );
}
