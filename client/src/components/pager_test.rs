use super::*;

fn make_page(current_page: u32, total_pages: u32) -> Pagination {
    Pagination { current_page, total_pages, total: 45, limit: 20 }
}

#[test]
fn first_page_has_only_next() {
    let page = make_page(1, 3);
    assert_eq!(previous_page(&page), None);
    assert_eq!(next_page(&page), Some(2));
}

#[test]
fn last_page_has_only_previous() {
    let page = make_page(3, 3);
    assert_eq!(previous_page(&page), Some(2));
    assert_eq!(next_page(&page), None);
}

#[test]
fn empty_listing_has_no_navigation() {
    let page = Pagination::default();
    assert_eq!(previous_page(&page), None);
    assert_eq!(next_page(&page), None);
    assert_eq!(page_label(&page), "Page 1 of 1 (0 total)");
}

#[test]
fn label_reports_position_and_total() {
    assert_eq!(page_label(&make_page(2, 3)), "Page 2 of 3 (45 total)");
}
