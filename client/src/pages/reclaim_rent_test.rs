use super::*;

fn account(mint: &str, rent: f64) -> EmptyAccount {
    EmptyAccount {
        mint: mint.to_owned(),
        name: "Bonk".to_owned(),
        symbol: "BONK".to_owned(),
        token_account: format!("{mint}Account"),
        rent,
        ..EmptyAccount::default()
    }
}

#[test]
fn summary_counts_accounts() {
    let none = EmptyAccounts::default();
    assert_eq!(summary_text(&none), "No empty token accounts found.");

    let one = EmptyAccounts { empty_accounts: vec![account("A", 0.00203928)], total_accounts: 1, total_rent_recoverable: 0.00203928 };
    assert_eq!(summary_text(&one), "1 empty account holding 0.002039 SOL");

    let two = EmptyAccounts { total_accounts: 2, total_rent_recoverable: 0.004, ..EmptyAccounts::default() };
    assert_eq!(summary_text(&two), "2 empty accounts holding 0.004 SOL");
}

#[test]
fn receipt_names_the_closed_account() {
    let closed = account("MintA", 0.002);
    let receipt = close_receipt(
        "Account closed".to_owned(),
        CloseReceipt { signature: "sig".to_owned(), mint: "MintA".to_owned(), operation: "close".to_owned() },
        &closed,
    );
    assert_eq!(receipt.signature, "sig");
    assert_eq!(receipt.details[0], ("Token", "Bonk (BONK)".to_owned()));
    assert_eq!(receipt.details[2], ("Rent Recovered", "0.002 SOL".to_owned()));
}
