use super::*;

fn tx(kind: &str, amount: f64) -> Transaction {
    Transaction { kind: kind.to_owned(), amount, ..Transaction::default() }
}

#[test]
fn swap_wins_over_amount_sign() {
    let flow = tx("swap", -3.0).flow();
    assert_eq!(flow_label(flow), "Swap");
    assert_eq!(flow_class(flow), "tx tx--swap");
}

#[test]
fn untyped_rows_fall_back_to_sign() {
    assert_eq!(flow_label(tx("", -1.0).flow()), "Sent");
    assert_eq!(flow_label(tx("", 1.0).flow()), "Received");
    assert_eq!(flow_class(tx("", 0.0).flow()), "tx");
}

#[test]
fn send_and_receive_types_are_labelled() {
    assert_eq!(flow_class(tx("send", 1.0).flow()), "tx tx--out");
    assert_eq!(flow_class(tx("receive", -1.0).flow()), "tx tx--in");
}
