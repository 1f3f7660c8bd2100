use std::time::Duration;

use debtors_ui::DebtorsApp;
use debtors_ui::state::State;
use debtors_ui::widgets;
use egui_kittest::Harness;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// How long each settle round waits for background HTTP calls.
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 50;

pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

pub fn debtor_json(id: u64, email: &str, open: u32, overdue: u32, paid: u32) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": email,
        "open_invoices_count": open,
        "overdue_invoices_count": overdue,
        "paid_invoices_count": paid,
    })
}

pub struct TestCtx<'a, T = State> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Runs frames while giving background calls time to finish.
    pub async fn settle(&mut self) {
        for _ in 0..8 {
            self.harness.step();
            yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
        }
        self.harness.step();
    }
}

impl<'a> TestCtx<'a, State> {
    /// Debtors panel alone, backed by `mock_server`.
    #[allow(unused)]
    pub fn panel(mock_server: MockServer) -> Self {
        let state = State::test(mock_server.uri());
        let harness = Harness::new_ui_state(
            |ui, state: &mut State| {
                let State {
                    debtors,
                    debtors_panel,
                    ..
                } = state;
                widgets::debtors_panel(ui, debtors, debtors_panel);
            },
            state,
        );

        Self {
            mock_server,
            harness,
        }
    }
}

impl<'a> TestCtx<'a, DebtorsApp> {
    #[allow(unused)]
    pub fn app(mock_server: MockServer) -> Self {
        let app = DebtorsApp::new(State::test(mock_server.uri()));
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }
}

/// Mock server answering the list endpoint with `debtors`.
#[allow(unused)]
pub async fn server_with_debtors(debtors: serde_json::Value) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/debtors/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(debtors))
        .mount(&mock_server)
        .await;
    mock_server
}

#[allow(unused)]
pub async fn mock_delete(mock_server: &MockServer, id: u64, status: u16) {
    Mock::given(method("DELETE"))
        .and(path(format!("/api/debtors/{id}/")))
        .respond_with(ResponseTemplate::new(status))
        .mount(mock_server)
        .await;
}
