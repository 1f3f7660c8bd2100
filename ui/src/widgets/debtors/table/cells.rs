//! Cell rendering for the debtors table.

use debtors_business::DebtorId;
use egui::{Color32, RichText, Ui};

use super::columns::EMAIL_MIN_WIDTH;
use crate::widgets::debtors::state::DebtorAction;

#[inline]
pub fn render_email_cell(ui: &mut Ui, email: &str) {
    ui.set_min_width(EMAIL_MIN_WIDTH);
    ui.label(email);
}

#[inline]
pub fn render_count_cell(ui: &mut Ui, value: &str) {
    ui.label(RichText::new(value).monospace());
}

/// Overdue counts above zero are shown in red.
#[inline]
pub fn render_overdue_cell(ui: &mut Ui, count: u32) {
    let text = RichText::new(count.to_string()).monospace();
    if count > 0 {
        ui.label(text.color(Color32::RED));
    } else {
        ui.label(text);
    }
}

#[inline]
pub fn render_manage_cell(ui: &mut Ui, id: DebtorId) -> Option<DebtorAction> {
    ui.button("Manage")
        .on_hover_text("Show debtor details")
        .clicked()
        .then_some(DebtorAction::Manage(id))
}

/// Delete button, disabled while the delete for this row is in flight.
#[inline]
pub fn render_delete_cell(ui: &mut Ui, id: DebtorId, removing: bool) -> Option<DebtorAction> {
    let label = if removing { "Deleting…" } else { "Delete" };
    ui.add_enabled(!removing, egui::Button::new(label))
        .on_hover_text("Delete debtor")
        .clicked()
        .then_some(DebtorAction::Delete(id))
}
