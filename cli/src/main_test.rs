use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("keylo").chain(args.iter().copied())).unwrap()
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn amounts_must_be_positive() {
    assert_eq!(positive_amount(" 1.5 "), Ok(1.5));
    assert!(positive_amount("0").is_err());
    assert!(positive_amount("-2").is_err());
    assert!(positive_amount("abc").is_err());
    assert!(positive_amount("NaN").is_err());
    assert_eq!(non_negative_amount("0"), Ok(0.0));
    assert!(non_negative_amount("-0.1").is_err());
}

#[test]
fn trending_accepts_only_offered_windows() {
    assert_eq!(trending_window("6"), Ok(6));
    assert!(trending_window("12").is_err());
}

#[test]
fn transfer_defaults_to_sol() {
    let cli = parse(&["transfer", "--amount", "0.5", "--to", "Dest"]);
    match cli.command {
        Command::Transfer { mint, amount, to } => {
            assert_eq!(mint, WRAPPED_SOL_MINT);
            assert!((amount - 0.5).abs() < f64::EPSILON);
            assert_eq!(to, "Dest");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn trade_parses_side_and_dex() {
    let cli = parse(&["trade", "sell", "--mint", "M", "--amount", "100", "--dex", "raydium", "--slippage", "5"]);
    match cli.command {
        Command::Trade { side, dex, tip, slippage, .. } => {
            assert_eq!(side, TradeSide::Sell);
            assert_eq!(dex, Dex::Raydium);
            assert_eq!(tip, None);
            assert_eq!(slippage, Some(5.0));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn trade_rejects_zero_amount() {
    let result = Cli::try_parse_from(["keylo", "trade", "buy", "--mint", "M", "--amount", "0"]);
    assert!(result.is_err());
}

#[test]
fn order_create_uses_form_defaults() {
    let cli = parse(&["orders", "create", "buy", "--mint", "M", "--amount", "1", "--trigger-price", "2"]);
    let Command::Orders(OrdersCommand { command: OrdersSubcommand::Create { dex, order_type, terms, .. } }) = cli.command
    else {
        panic!("expected orders create");
    };
    assert_eq!(dex, Dex::Jupiter);
    assert_eq!(order_type, OrderType::High);
    assert!((terms.slippage - 10.0).abs() < f64::EPSILON);
    assert!((terms.tip - 0.001).abs() < f64::EPSILON);

    let update = update_request(&terms);
    assert!((update.trigger_price - 2.0).abs() < f64::EPSILON);
}

#[test]
fn backend_url_and_session_file_flags() {
    let cli = parse(&["--backend-url", "http://api:9000", "--session-file", "/tmp/s.json", "whoami"]);
    assert_eq!(cli.backend_url, "http://api:9000");
    assert_eq!(cli.session_file.as_deref(), Some(std::path::Path::new("/tmp/s.json")));
    assert!(matches!(cli.command, Command::Whoami));
}

#[test]
fn rendered_reply_omits_empty_message() {
    let rendered = render_reply(&Reply { message: String::new(), data: json!({ "a": 1 }) }).unwrap();
    let value: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value, json!({ "data": { "a": 1 } }));

    let rendered = render_reply(&Reply { message: "Done".to_owned(), data: Value::Null }).unwrap();
    let value: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["message"], "Done");
}

#[test]
fn logout_message_reports_local_clear_on_failure() {
    assert_eq!(logout_message(&LogoutOutcome::Confirmed), "Logged out");
    assert_eq!(logout_message(&LogoutOutcome::NoSession), "No active session");
    let failed = logout_message(&LogoutOutcome::Failed(ApiError::Network("down".to_owned())));
    assert!(failed.starts_with("Logged out locally"));
}
