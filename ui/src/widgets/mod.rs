pub mod debtors;
mod env_label;

pub use debtors::{DebtorAction, DebtorsPanelState, debtors_panel};
pub use env_label::{env_label, env_name};
