//! Debtors panel: toolbar, banners and the table.

use std::time::Duration;

use chrono::Local;
use debtors_business::{DebtorsError, DebtorsListView, DebtorsNotice};
use egui::{Button, Color32, Response, Ui};

use super::manage::show_manage_window;
use super::state::{DebtorAction, DebtorsPanelState};
use super::table::debtors_table;

/// Repaint cadence while backend calls are in flight.
const PENDING_REPAINT: Duration = Duration::from_millis(100);

/// Shown for a delete the backend refused with 403.
pub const UNAUTHORIZED_DELETE_MESSAGE: &str = "You are not allowed to delete this debtor.";

/// User-facing text for a failed delete.
pub fn delete_failure_message(error: &DebtorsError) -> String {
    match error {
        DebtorsError::Unauthorized => UNAUTHORIZED_DELETE_MESSAGE.to_owned(),
        DebtorsError::NotFound => "This debtor no longer exists.".to_owned(),
        other => format!("Failed to delete debtor: {other}"),
    }
}

/// Renders the debtors view and applies any finished backend calls.
///
/// Mounts the view on first render, so the initial fetch starts the first
/// time the panel is shown.
pub fn debtors_panel(
    ui: &mut Ui,
    view: &mut DebtorsListView,
    panel: &mut DebtorsPanelState,
) -> Response {
    view.mount();
    view.poll();
    if view.has_pending_work() {
        ui.ctx().request_repaint_after(PENDING_REPAINT);
    }

    let response = ui.vertical(|ui| {
        render_toolbar(ui, view);
        render_load_error(ui, view);
        render_notice(ui, view);

        ui.add_space(8.0);

        if view.debtors().is_empty() {
            if !view.is_loading() && view.load_error().is_none() {
                ui.label("No debtors.");
            }
            return;
        }

        match debtors_table(ui, view) {
            Some(DebtorAction::Manage(id)) => panel.open_manage(id),
            Some(DebtorAction::Delete(id)) => view.remove(id),
            None => {}
        }
    });

    show_manage_window(ui, view, panel);

    response.response
}

fn render_toolbar(ui: &mut Ui, view: &mut DebtorsListView) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!view.is_loading(), Button::new("Refresh"))
            .clicked()
        {
            view.load();
        }

        if view.is_loading() {
            ui.spinner();
            ui.label("Loading debtors...");
        } else {
            ui.label(format!("{} debtors", view.debtors().len()));
        }

        if let Some(loaded_at) = view.loaded_at() {
            let local = loaded_at.with_timezone(&Local);
            ui.weak(format!("Updated at {}", local.format("%H:%M:%S")));
        }
    });
}

fn render_load_error(ui: &mut Ui, view: &mut DebtorsListView) {
    let Some(error) = view.load_error() else {
        return;
    };
    let message = format!("Failed to load debtors: {error}");

    ui.horizontal(|ui| {
        ui.colored_label(Color32::RED, message);
        if ui.button("Retry").clicked() {
            view.load();
        }
    });
}

fn render_notice(ui: &mut Ui, view: &mut DebtorsListView) {
    let Some(DebtorsNotice::DeleteFailed { error, .. }) = view.notice() else {
        return;
    };
    let (color, message) = if error.is_unauthorized() {
        (Color32::from_rgb(255, 165, 0), delete_failure_message(error))
    } else {
        (Color32::RED, delete_failure_message(error))
    };

    ui.horizontal(|ui| {
        ui.colored_label(color, message);
        if ui.button("Dismiss").clicked() {
            view.dismiss_notice();
        }
    });
}
