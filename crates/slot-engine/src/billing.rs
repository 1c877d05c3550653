//! Quote totals, document numbering, and quote → invoice conversion.
//!
//! Amounts are integer cents. Tax is applied to the subtotal and rounded half
//! away from zero to the nearest cent.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

pub const DEFAULT_TAX_RATE: f64 = 0.08;
pub const INVOICE_DUE_DAYS: i64 = 30;
pub const QUOTE_PREFIX: &str = "QUO";
pub const INVOICE_PREFIX: &str = "INV";

/// One billable line on a quote or invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub description: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
    /// Stored rather than derived: an admin may discount a line by hand.
    pub total_cents: i64,
}

impl LineItem {
    /// A line whose total is `quantity * unit_price_cents`.
    pub fn priced(
        id: impl Into<String>,
        description: impl Into<String>,
        quantity: u32,
        unit_price_cents: i64,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            quantity,
            unit_price_cents,
            total_cents: i64::from(quantity) * unit_price_cents,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

/// Sum line totals and apply `tax_rate` (a fraction, e.g. `0.08`).
pub fn calculate_totals(items: &[LineItem], tax_rate: f64) -> Totals {
    let subtotal_cents: i64 = items.iter().map(|i| i.total_cents).sum();
    let tax_cents = (subtotal_cents as f64 * tax_rate).round() as i64;
    Totals {
        subtotal_cents,
        tax_cents,
        total_cents: subtotal_cents + tax_cents,
    }
}

/// Next sequential number of the form `PREFIX-YYYY-NNNNNN`.
///
/// The sequence restarts every year and counts only numbers already issued
/// with the same prefix and year.
pub fn next_document_number<'a, I>(prefix: &str, year: i32, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let scope = format!("{}-{}-", prefix, year);
    let issued = existing.into_iter().filter(|n| n.starts_with(&scope)).count();
    format!("{}{:06}", scope, issued + 1)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// The customer a quote or invoice is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Draft,
    Sent,
    Approved,
    Rejected,
    Converted,
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuoteStatus::Draft => "draft",
            QuoteStatus::Sent => "sent",
            QuoteStatus::Approved => "approved",
            QuoteStatus::Rejected => "rejected",
            QuoteStatus::Converted => "converted",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub quote_number: String,
    pub customer: Customer,
    pub items: Vec<LineItem>,
    pub tax_rate: f64,
    pub totals: Totals,
    pub status: QuoteStatus,
    pub issue_date: NaiveDate,
    pub valid_until: NaiveDate,
    pub notes: Option<String>,
    /// Admin who prepared the quote.
    pub created_by: String,
    pub service_request_id: Option<String>,
    /// Set once the quote has been converted.
    pub invoice_number: Option<String>,
}

impl Quote {
    /// Replace the line items and recompute totals at the quote's tax rate.
    pub fn set_items(&mut self, items: Vec<LineItem>) {
        self.totals = calculate_totals(&items, self.tax_rate);
        self.items = items;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_number: String,
    pub customer: Customer,
    pub items: Vec<LineItem>,
    pub tax_rate: f64,
    pub totals: Totals,
    pub status: InvoiceStatus,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub notes: Option<String>,
    pub created_by: String,
    /// The quote this invoice was created from.
    pub quote_id: Option<String>,
}

/// Turn a quote into a draft invoice due in 30 days, and mark the quote
/// converted with a link to the new invoice number.
///
/// # Errors
/// Returns `SlotError::InvalidTransition` if the quote is already converted
/// or was rejected. The quote is left untouched in that case.
pub fn convert_quote(
    quote: &mut Quote,
    invoice_number: impl Into<String>,
    issue_date: NaiveDate,
) -> Result<Invoice> {
    if matches!(quote.status, QuoteStatus::Converted | QuoteStatus::Rejected) {
        return Err(SlotError::InvalidTransition {
            from: quote.status.to_string(),
            to: QuoteStatus::Converted.to_string(),
        });
    }

    let invoice = Invoice {
        invoice_number: invoice_number.into(),
        customer: quote.customer.clone(),
        items: quote.items.clone(),
        tax_rate: quote.tax_rate,
        totals: quote.totals,
        status: InvoiceStatus::Draft,
        issue_date,
        due_date: issue_date + Duration::days(INVOICE_DUE_DAYS),
        notes: quote.notes.clone(),
        created_by: quote.created_by.clone(),
        quote_id: Some(quote.id.clone()),
    };

    quote.status = QuoteStatus::Converted;
    quote.invoice_number = Some(invoice.invoice_number.clone());

    Ok(invoice)
}
