//! Debtors table, split into:
//! - `columns`: widths and layout constants
//! - `header`: header row from the column descriptors
//! - `row`: one debtor row
//! - `cells`: per-column cell rendering

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use debtors_business::{ColumnDescriptor, DebtorsListView};
use egui::{Frame, Margin, ScrollArea, Stroke, Ui};

use super::state::DebtorAction;
use columns::{COLUMN_SPACING, MIN_COLUMN_WIDTH, TABLE_BORDER_COLOR};

/// Renders the header and one row per debtor. Returns the action clicked, if
/// any.
pub fn debtors_table(ui: &mut Ui, view: &DebtorsListView) -> Option<DebtorAction> {
    let headers: &[ColumnDescriptor] = view.headers();
    let mut action = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("debtors_table")
                    .num_columns(headers.len())
                    .striped(true)
                    .spacing([COLUMN_SPACING, 0.0])
                    .min_col_width(MIN_COLUMN_WIDTH)
                    .show(ui, |ui| {
                        header::render_table_header(ui, headers);

                        for debtor in view.debtors() {
                            let removing = view.is_removing(debtor.id);
                            if let Some(clicked) =
                                row::render_debtor_row(ui, headers, debtor, removing)
                            {
                                action = Some(clicked);
                            }
                        }
                    });
            });
        });

    action
}
