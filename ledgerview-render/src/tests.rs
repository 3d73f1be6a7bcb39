use indoc::indoc;

use ledgerview_core::{calculate, Amount, Flag, Posting, Transaction, DOCUMENT_KEY};

use crate::{render, Renderer, TableRenderer};

fn posting(account: &str, num: &str, currency: &str) -> Posting {
    Posting::builder()
        .account(account.to_string())
        .units(
            Amount::builder()
                .num(num.parse().unwrap())
                .currency(currency.to_string())
                .build(),
        )
        .build()
}

fn flight() -> Transaction {
    Transaction::builder()
        .id("7b7b3b2e".to_string())
        .datetime("2023-03-01T21:33:05Z".parse().unwrap())
        .payee(Some("Air China".to_string()))
        .narration("flight to Beijing".to_string())
        .is_balanced(true)
        .postings(vec![
            posting("Expenses:Travel:Flights", "2100.00", "CNY"),
            posting("Assets:Visa", "-300.00", "USD"),
        ])
        .build()
}

fn unmatched_import() -> Transaction {
    Transaction::builder()
        .id("9d1de1a0".to_string())
        .datetime("2023-03-02T09:15:00Z".parse().unwrap())
        .flag(Flag::Warning)
        .narration("ATM withdrawal".to_string())
        .is_balanced(false)
        .postings(vec![posting("Assets:Checking", "-200.00", "USD")])
        .build()
}

fn render_line(transaction: &Transaction) -> anyhow::Result<String> {
    let mut rendered = Vec::new();
    TableRenderer::new().render(transaction, &mut rendered)?;
    Ok(String::from_utf8(rendered)?)
}

#[test]
fn renders_a_multi_currency_line() -> anyhow::Result<()> {
    assert_eq!(
        render_line(&flight())?,
        "21:33:05  *  Air China | flight to Beijing  +2100.00 CNY, -300.00 USD"
    );
    Ok(())
}

#[test]
fn renders_review_and_balance_markers() -> anyhow::Result<()> {
    assert_eq!(
        render_line(&unmatched_import())?,
        "09:15:00  !  ATM withdrawal [unbalanced] [review]  -200.00 USD"
    );
    Ok(())
}

#[test]
fn renders_document_indicator_and_zero_net_as_positive() -> anyhow::Result<()> {
    let mut espresso = Transaction::builder()
        .id("c5af2e5a".to_string())
        .datetime("2023-03-01T12:00:00Z".parse().unwrap())
        .payee(Some("Cafe Select".to_string()))
        .narration("double espresso".to_string())
        .is_balanced(true)
        .postings(vec![
            posting("Expenses:Food:Coffee", "4.50", "USD"),
            posting("Assets:Cash", "-4.50", "USD"),
        ])
        .build();
    espresso.postings[0]
        .meta
        .insert(DOCUMENT_KEY.to_string(), "receipts/espresso.jpg".to_string());

    assert_eq!(
        render_line(&espresso)?,
        "12:00:00  *  Cafe Select | double espresso [doc]  +0.00 USD"
    );
    Ok(())
}

#[test]
fn entry_without_postings_renders_no_amount_cell() -> anyhow::Result<()> {
    let note = Transaction::builder()
        .id("0b2e6c3d".to_string())
        .datetime("2023-03-03T08:00:00Z".parse().unwrap())
        .narration("opening note".to_string())
        .is_balanced(true)
        .build();
    assert_eq!(render_line(&note)?, "08:00:00  *  opening note");
    Ok(())
}

#[test]
fn renders_a_journal_page() -> anyhow::Result<()> {
    let mut rendered = Vec::new();
    render(&mut rendered, &[flight(), unmatched_import()])?;
    assert_eq!(
        String::from_utf8(rendered)?,
        indoc! {"
            21:33:05  *  Air China | flight to Beijing  +2100.00 CNY, -300.00 USD
            09:15:00  !  ATM withdrawal [unbalanced] [review]  -200.00 USD
        "}
    );
    Ok(())
}

#[test]
fn summary_cell_follows_first_occurrence_order() -> anyhow::Result<()> {
    let summary = calculate(&flight());
    let mut rendered = Vec::new();
    TableRenderer::new().render(&summary, &mut rendered)?;
    assert_eq!(String::from_utf8(rendered)?, "+2100.00 CNY, -300.00 USD");
    Ok(())
}
