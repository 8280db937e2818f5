use super::*;

#[test]
fn url_trims_trailing_slash_from_base() {
    assert_eq!(url("https://api.example.com/", LOGIN), "https://api.example.com/api/auth/login");
    assert_eq!(url("https://api.example.com", LOGIN), "https://api.example.com/api/auth/login");
}

#[test]
fn url_with_empty_base_is_same_origin() {
    assert_eq!(url("", DASHBOARD), "/api/user/dashboard");
}

#[test]
fn assets_includes_paging_and_status() {
    assert_eq!(assets(1, 20, "available"), "/api/user/assets?page=1&limit=20&status=available");
}

#[test]
fn paged_lists_format_query() {
    assert_eq!(transactions(3, 20), "/api/user/transactions?page=3&limit=20");
    assert_eq!(orders(1, DEFAULT_PAGE_SIZE), "/api/user/orders?page=1&limit=20");
    assert_eq!(trending(6, 20), "/api/user/trending?hour=6&limit=20");
}

#[test]
fn order_path_embeds_id() {
    assert_eq!(order("65f0c0ffee"), "/api/user/orders/65f0c0ffee");
}

#[test]
fn token_paths_trim_and_encode_mint() {
    assert_eq!(
        token_overview("  So11111111111111111111111111111111111111112 "),
        "/api/token/overview/So11111111111111111111111111111111111111112"
    );
    assert_eq!(token_price("a/b c"), "/api/price/token?mint=a%2Fb%20c");
}

#[test]
fn path_segments_keep_unreserved_and_escape_reserved() {
    assert_eq!(order("Az09-._~"), "/api/user/orders/Az09-._~");
    assert_eq!(order("?&="), "/api/user/orders/%3F%26%3D");
    assert_eq!(assets(1, 20, "a b"), "/api/user/assets?page=1&limit=20&status=a%20b");
}
