//! Static column layout of the debtors table.

use super::model::Debtor;

/// Debtor field backing a data column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebtorField {
    Email,
    OpenInvoicesCount,
    OverdueInvoicesCount,
    PaidInvoicesCount,
}

impl DebtorField {
    /// Backend field name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::OpenInvoicesCount => "open_invoices_count",
            Self::OverdueInvoicesCount => "overdue_invoices_count",
            Self::PaidInvoicesCount => "paid_invoices_count",
        }
    }

    /// Cell text for `debtor`.
    pub fn value(self, debtor: &Debtor) -> String {
        match self {
            Self::Email => debtor.email.clone(),
            Self::OpenInvoicesCount => debtor.open_invoices_count.to_string(),
            Self::OverdueInvoicesCount => debtor.overdue_invoices_count.to_string(),
            Self::PaidInvoicesCount => debtor.paid_invoices_count.to_string(),
        }
    }
}

/// A table column: a label and, for data columns, the field it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub label: &'static str,
    pub field: Option<DebtorField>,
}

impl ColumnDescriptor {
    const fn data(label: &'static str, field: DebtorField) -> Self {
        Self {
            label,
            field: Some(field),
        }
    }

    const fn action(label: &'static str) -> Self {
        Self { label, field: None }
    }

    /// Action slots carry controls, not data.
    pub const fn is_action(&self) -> bool {
        self.field.is_none()
    }
}

/// Four data columns followed by the manage and delete slots.
pub const HEADERS: [ColumnDescriptor; 6] = [
    ColumnDescriptor::data("email", DebtorField::Email),
    ColumnDescriptor::data("open invoices", DebtorField::OpenInvoicesCount),
    ColumnDescriptor::data("overdue invoices", DebtorField::OverdueInvoicesCount),
    ColumnDescriptor::data("paid invoices", DebtorField::PaidInvoicesCount),
    ColumnDescriptor::action("manage"),
    ColumnDescriptor::action(""),
];
