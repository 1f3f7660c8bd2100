//! Debtors list widgets.
//!
//! - `panel`: toolbar, notices and table, drives the list view
//! - `manage`: details window for a single debtor
//! - `state`: widget-local state
//! - `table`: table rendering (columns, header, row, cells)

mod manage;
mod panel;
mod state;
pub mod table;

pub use panel::{debtors_panel, delete_failure_message};
pub use state::{DebtorAction, DebtorsPanelState};
