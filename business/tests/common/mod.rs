//! Shared helpers for business integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use debtors_business::{BusinessConfig, DebtorsListView, HttpDebtorsBackend};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock backend plus a view wired to it.
pub struct TestContext {
    pub mock_server: MockServer,
    pub config: BusinessConfig,
}

impl TestContext {
    pub async fn new() -> Self {
        env_logger::builder().is_test(true).try_init().ok();
        let mock_server = MockServer::start().await;
        let config = BusinessConfig::new(mock_server.uri());
        Self {
            mock_server,
            config,
        }
    }

    pub fn backend(&self) -> HttpDebtorsBackend {
        HttpDebtorsBackend::from_config(&self.config)
    }

    pub fn view(&self) -> DebtorsListView {
        DebtorsListView::new(Arc::new(self.backend()))
    }

    pub async fn mock_list(&self, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/api/debtors/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_delete(&self, id: u64, status: u16) {
        Mock::given(method("DELETE"))
            .and(path(format!("/api/debtors/{id}/")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.mock_server)
            .await;
    }
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
