use super::*;

fn filled() -> OrderForm {
    OrderForm { mint: "Mint111".to_owned(), amount: "0.5".to_owned(), trigger_price: "1.25".to_owned(), ..OrderForm::default() }
}

#[test]
fn create_form_defaults() {
    let form = OrderForm::default();
    assert_eq!(form.dex, Dex::Jupiter);
    assert_eq!(form.order_type, OrderType::High);
    assert_eq!(form.side, TradeSide::Buy);
    assert_eq!(form.slippage, "10");
    assert_eq!(form.tip, "0.001");
}

#[test]
fn create_request_carries_defaults() {
    let request = filled().to_create_request().unwrap();
    assert_eq!(request.mint, "Mint111");
    assert!((request.amount - 0.5).abs() < f64::EPSILON);
    assert!((request.trigger_price - 1.25).abs() < f64::EPSILON);
    assert!((request.slippage - 10.0).abs() < f64::EPSILON);
    assert!((request.tip - 0.001).abs() < f64::EPSILON);
    assert_eq!(request.dex, Dex::Jupiter);
}

#[test]
fn create_request_rejects_blank_mint_and_bad_numbers() {
    let blank = OrderForm { mint: " ".to_owned(), ..filled() };
    assert_eq!(blank.to_create_request(), Err(("Missing Fields", MISSING_FIELDS)));
    let zero = OrderForm { amount: "0".to_owned(), ..filled() };
    assert_eq!(zero.to_create_request(), Err(INVALID_NUMBERS));
    let negative_tip = OrderForm { tip: "-1".to_owned(), ..filled() };
    assert!(negative_tip.to_create_request().is_err());
}

#[test]
fn edit_form_round_trips_order_terms() {
    let order = LimitOrder { amount: 2.0, trigger_price: 0.75, slippage: 5.0, tip: 0.002, ..LimitOrder::default() };
    let form = EditForm::from_order(&order);
    assert_eq!(form.amount, "2");
    assert_eq!(form.trigger_price, "0.75");
    let request = form.to_update_request().unwrap();
    assert!((request.slippage - 5.0).abs() < f64::EPSILON);
    assert!((request.tip - 0.002).abs() < f64::EPSILON);
}

#[test]
fn edit_form_requires_every_field() {
    let form = EditForm { tip: String::new(), ..EditForm::from_order(&LimitOrder { amount: 1.0, trigger_price: 1.0, ..LimitOrder::default() }) };
    assert_eq!(form.to_update_request(), Err(("Missing Fields", MISSING_FIELDS)));
}

#[test]
fn trigger_summary_reads_direction() {
    let order = LimitOrder {
        side: TradeSide::Sell,
        order_type: OrderType::Low,
        trigger_price: 2.5,
        ..LimitOrder::default()
    };
    assert_eq!(trigger_summary(&order), "Sell when price goes below $2.5000");
}
