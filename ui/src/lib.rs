#![warn(clippy::all, rust_2018_idioms)]

//! egui front end for the debtors list.

pub mod app;
pub mod state;
pub mod widgets;

pub use app::DebtorsApp;
