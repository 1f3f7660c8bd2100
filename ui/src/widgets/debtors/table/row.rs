//! One row of the debtors table.

use debtors_business::{ColumnDescriptor, Debtor, DebtorField};
use egui::{Frame, InnerResponse, Margin, Ui};

use super::cells::{
    render_count_cell, render_delete_cell, render_email_cell, render_manage_cell,
    render_overdue_cell,
};
use crate::widgets::debtors::state::DebtorAction;

/// Renders `debtor` across every column in `headers` and ends the grid row.
///
/// Data columns come from the descriptor's field, the first action slot holds
/// the Manage button and the second the Delete button.
pub fn render_debtor_row(
    ui: &mut Ui,
    headers: &[ColumnDescriptor],
    debtor: &Debtor,
    removing: bool,
) -> Option<DebtorAction> {
    let mut action = None;
    let mut action_slot = 0;

    for column in headers {
        data_cell(ui, |ui| match column.field {
            Some(DebtorField::Email) => render_email_cell(ui, &debtor.email),
            Some(DebtorField::OverdueInvoicesCount) => {
                render_overdue_cell(ui, debtor.overdue_invoices_count);
            }
            Some(field) => render_count_cell(ui, &field.value(debtor)),
            None => {
                let clicked = if action_slot == 0 {
                    render_manage_cell(ui, debtor.id)
                } else {
                    render_delete_cell(ui, debtor.id, removing)
                };
                action_slot += 1;
                if clicked.is_some() {
                    action = clicked;
                }
            }
        });
    }
    ui.end_row();

    action
}

fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}
