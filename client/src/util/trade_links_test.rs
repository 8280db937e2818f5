use std::collections::HashMap;

use super::*;

fn query(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn simple_link_carries_mint_and_side() {
    assert_eq!(TradePrefill::new("MintA", TradeSide::Sell).href(), "/trading?mint=MintA&type=sell");
}

#[test]
fn trending_link_carries_tip_slippage_and_dex() {
    assert_eq!(
        TradePrefill::trending("MintA", TradeSide::Buy).href(),
        "/trading?mint=MintA&type=buy&dex=jupiter&slippage=10&jitoTip=0.0005"
    );
}

#[test]
fn from_query_reads_every_parameter() {
    let prefill = TradePrefill::from_query(query(&[
        ("mint", " MintA "),
        ("type", "sell"),
        ("dex", "raydium"),
        ("slippage", "5"),
        ("jitoTip", "0.001"),
    ]));
    assert_eq!(prefill.mint, "MintA");
    assert_eq!(prefill.side, TradeSide::Sell);
    assert_eq!(prefill.dex, Dex::Raydium);
    assert_eq!(prefill.slippage, Some(5.0));
    assert_eq!(prefill.jito_tip, Some(0.001));
}

#[test]
fn from_query_falls_back_on_bad_values() {
    let prefill = TradePrefill::from_query(query(&[("type", "hold"), ("dex", "orca"), ("slippage", "-1")]));
    assert_eq!(prefill, TradePrefill::default());
}

#[test]
fn trending_link_round_trips_through_query() {
    let original = TradePrefill::trending("MintA", TradeSide::Sell);
    let href = original.href();
    let params: Vec<(&str, &str)> = href
        .trim_start_matches("/trading?")
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .collect();
    assert_eq!(TradePrefill::from_query(query(&params)), original);
}

#[test]
fn mint_is_percent_encoded_in_links() {
    assert_eq!(TradePrefill::new("a b/c", TradeSide::Buy).href(), "/trading?mint=a%20b%2Fc&type=buy");
}
