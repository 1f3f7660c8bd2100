//! Debtors domain module.
//!
//! - `model`: debtor records and ids
//! - `columns`: static table column descriptors
//! - `api`: backend contract and its HTTP implementation
//! - `view`: list state driven by the backend
//! - `iban`: display helper for the optional IBAN field

pub mod api;
pub mod columns;
pub mod error;
pub mod iban;
pub mod model;
pub mod view;

pub use api::{DebtorsBackend, HttpDebtorsBackend};
pub use columns::{ColumnDescriptor, DebtorField, HEADERS};
pub use error::{DebtorsError, DebtorsResult};
pub use iban::{Iban, IbanError};
pub use model::{Debtor, DebtorId};
pub use view::{DebtorsListView, DebtorsNotice, DebtorsStatus};
