//! Debtor records as served by the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::iban::Iban;

/// Backend identity of a debtor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DebtorId(pub u64);

impl fmt::Display for DebtorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for DebtorId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A customer with aggregated invoice counts.
///
/// Unknown fields in the payload are ignored; nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debtor {
    pub id: DebtorId,
    pub email: String,
    pub open_invoices_count: u32,
    pub overdue_invoices_count: u32,
    pub paid_invoices_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
}

impl Debtor {
    pub fn new(
        id: impl Into<DebtorId>,
        email: impl Into<String>,
        open_invoices_count: u32,
        overdue_invoices_count: u32,
        paid_invoices_count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            open_invoices_count,
            overdue_invoices_count,
            paid_invoices_count,
            iban: None,
        }
    }

    pub fn with_iban(mut self, iban: impl Into<String>) -> Self {
        self.iban = Some(iban.into());
        self
    }

    /// IBAN in groups of four when it parses, the raw value otherwise.
    pub fn iban_display(&self) -> Option<String> {
        self.iban.as_deref().map(|raw| match Iban::parse(raw) {
            Ok(iban) => iban.grouped(),
            Err(_) => raw.to_owned(),
        })
    }

    pub fn total_invoices(&self) -> u32 {
        self.open_invoices_count
            .saturating_add(self.overdue_invoices_count)
            .saturating_add(self.paid_invoices_count)
    }
}
