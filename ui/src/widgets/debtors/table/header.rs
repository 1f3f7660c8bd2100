//! Header row of the debtors table.

use debtors_business::ColumnDescriptor;
use egui::{Frame, InnerResponse, Margin, Ui};

use super::columns::HEADER_BG_COLOR;

/// Renders one bold cell per column descriptor and ends the grid row.
///
/// The trailing action slot has an empty label and renders as a blank cell.
pub fn render_table_header(ui: &mut Ui, headers: &[ColumnDescriptor]) {
    for column in headers {
        header_cell(ui, |ui| {
            if !column.label.is_empty() {
                ui.strong(column.label);
            }
        });
    }
    ui.end_row();
}

fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}
