//! Tests for quote totals, numbering, and quote → invoice conversion.

use chrono::NaiveDate;
use slot_engine::billing::{
    calculate_totals, convert_quote, next_document_number, Address, Customer, InvoiceStatus,
    LineItem, Quote, QuoteStatus, DEFAULT_TAX_RATE, INVOICE_PREFIX, QUOTE_PREFIX,
};
use slot_engine::SlotError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn customer() -> Customer {
    Customer {
        id: "cust-1".to_string(),
        name: "Dana Park".to_string(),
        email: "dana@example.com".to_string(),
        address: Address {
            street: "12 Elm St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
        },
    }
}

fn quote(status: QuoteStatus) -> Quote {
    let items = vec![
        LineItem::priced("1", "Raccoon exclusion", 1, 25_000),
        LineItem::priced("2", "One-way door", 2, 4_500),
    ];
    let mut quote = Quote {
        id: "q-42".to_string(),
        quote_number: "QUO-2026-000042".to_string(),
        customer: customer(),
        items: Vec::new(),
        tax_rate: DEFAULT_TAX_RATE,
        totals: calculate_totals(&[], DEFAULT_TAX_RATE),
        status,
        issue_date: date(2026, 3, 1),
        valid_until: date(2026, 3, 31),
        notes: Some("Attic access via garage".to_string()),
        created_by: "admin-7".to_string(),
        service_request_id: Some("sr-3".to_string()),
        invoice_number: None,
    };
    quote.set_items(items);
    quote
}

#[test]
fn totals_apply_tax_to_subtotal() {
    let items = vec![
        LineItem::priced("1", "Inspection", 1, 10_000),
        LineItem::priced("2", "Trap rental", 3, 1_500),
    ];
    let totals = calculate_totals(&items, DEFAULT_TAX_RATE);
    assert_eq!(totals.subtotal_cents, 14_500);
    assert_eq!(totals.tax_cents, 1_160);
    assert_eq!(totals.total_cents, 15_660);
}

#[test]
fn totals_use_stored_line_totals() {
    let mut discounted = LineItem::priced("1", "Inspection", 1, 10_000);
    discounted.total_cents = 8_000;
    let totals = calculate_totals(&[discounted], 0.0);
    assert_eq!(totals.subtotal_cents, 8_000);
    assert_eq!(totals.total_cents, 8_000);
}

#[test]
fn tax_rounds_to_nearest_cent() {
    // 1_006 * 0.08 = 80.48 → 80; 1_019 * 0.08 = 81.52 → 82
    let a = calculate_totals(&[LineItem::priced("1", "a", 1, 1_006)], 0.08);
    let b = calculate_totals(&[LineItem::priced("1", "b", 1, 1_019)], 0.08);
    assert_eq!(a.tax_cents, 80);
    assert_eq!(b.tax_cents, 82);
}

#[test]
fn numbering_counts_same_prefix_and_year() {
    let existing = [
        "INV-2026-000001",
        "INV-2026-000002",
        "INV-2025-000009",
        "QUO-2026-000001",
    ];
    assert_eq!(
        next_document_number(INVOICE_PREFIX, 2026, existing.iter().copied()),
        "INV-2026-000003"
    );
    assert_eq!(
        next_document_number(QUOTE_PREFIX, 2026, existing.iter().copied()),
        "QUO-2026-000002"
    );
    assert_eq!(
        next_document_number(INVOICE_PREFIX, 2027, existing.iter().copied()),
        "INV-2027-000001"
    );
}

#[test]
fn conversion_copies_quote_and_links_back() {
    let mut q = quote(QuoteStatus::Approved);

    let invoice = convert_quote(&mut q, "INV-2026-000005", date(2026, 3, 10)).unwrap();

    assert_eq!(invoice.invoice_number, "INV-2026-000005");
    assert_eq!(invoice.status, InvoiceStatus::Draft);
    assert_eq!(invoice.customer, q.customer);
    assert_eq!(invoice.items, q.items);
    assert_eq!(invoice.totals, q.totals);
    assert_eq!(invoice.totals.subtotal_cents, 34_000);
    assert_eq!(invoice.issue_date, date(2026, 3, 10));
    assert_eq!(invoice.due_date, date(2026, 4, 9));
    assert_eq!(invoice.notes.as_deref(), Some("Attic access via garage"));
    assert_eq!(invoice.quote_id.as_deref(), Some("q-42"));

    assert_eq!(q.status, QuoteStatus::Converted);
    assert_eq!(q.invoice_number.as_deref(), Some("INV-2026-000005"));
}

#[test]
fn converted_or_rejected_quotes_cannot_convert() {
    for status in [QuoteStatus::Converted, QuoteStatus::Rejected] {
        let mut q = quote(status);
        let before = q.clone();

        let err = convert_quote(&mut q, "INV-2026-000006", date(2026, 3, 10)).unwrap_err();

        assert!(matches!(err, SlotError::InvalidTransition { .. }));
        assert_eq!(q, before, "quote must be left untouched");
    }
}
