use crate::{state::State, widgets};

pub struct DebtorsApp {
    state: State,
}

impl DebtorsApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for DebtorsApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Debtors");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::env_label(&self.state.config, ui);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let State {
                debtors,
                debtors_panel,
                ..
            } = &mut self.state;
            widgets::debtors_panel(ui, debtors, debtors_panel);
        });
    }
}
