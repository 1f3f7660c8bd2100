//! Business layer for the debtors app: domain types, the backend client and
//! the list view state the UI renders.

mod config;
pub mod debtors;
pub mod http;
pub mod task;

pub use config::BusinessConfig;
pub use debtors::{
    ColumnDescriptor, Debtor, DebtorField, DebtorId, DebtorsBackend, DebtorsError,
    DebtorsListView, DebtorsNotice, DebtorsResult, DebtorsStatus, HEADERS, HttpDebtorsBackend,
    Iban, IbanError,
};
