//! Details window for one debtor.

use debtors_business::DebtorsListView;
use egui::{Button, Grid, RichText, Ui, Window};

use super::state::DebtorsPanelState;

/// Shows the debtor selected in `panel`, if any. Closes itself once the
/// debtor is no longer in the list.
pub fn show_manage_window(ui: &mut Ui, view: &mut DebtorsListView, panel: &mut DebtorsPanelState) {
    let Some(id) = panel.managing() else {
        return;
    };
    let Some(debtor) = view.debtor(id).cloned() else {
        panel.close_manage();
        return;
    };
    let removing = view.is_removing(id);

    let mut open = true;
    let mut close_clicked = false;
    let mut delete_clicked = false;

    Window::new("Manage debtor")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            Grid::new("manage_debtor_grid")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Email");
                    ui.label(&debtor.email);
                    ui.end_row();

                    ui.label("Open invoices");
                    ui.label(debtor.open_invoices_count.to_string());
                    ui.end_row();

                    ui.label("Overdue invoices");
                    ui.label(debtor.overdue_invoices_count.to_string());
                    ui.end_row();

                    ui.label("Paid invoices");
                    ui.label(debtor.paid_invoices_count.to_string());
                    ui.end_row();

                    ui.label("Total invoices");
                    ui.label(debtor.total_invoices().to_string());
                    ui.end_row();

                    ui.label("IBAN");
                    match debtor.iban_display() {
                        Some(iban) => ui.label(RichText::new(iban).monospace()),
                        None => ui.weak("none"),
                    };
                    ui.end_row();
                });

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let delete_label = if removing { "Deleting…" } else { "Delete debtor" };
                if ui
                    .add_enabled(!removing, Button::new(delete_label))
                    .clicked()
                {
                    delete_clicked = true;
                }
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });
        });

    if delete_clicked {
        view.remove(id);
    }
    if !open || close_clicked {
        panel.close_manage();
    }
}
