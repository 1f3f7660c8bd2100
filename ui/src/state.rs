use std::sync::Arc;

use debtors_business::{BusinessConfig, DebtorsBackend, DebtorsListView, HttpDebtorsBackend};

use crate::widgets::DebtorsPanelState;

/// The main application state.
pub struct State {
    pub config: BusinessConfig,
    /// Debtor collection and backend calls.
    pub debtors: DebtorsListView,
    /// Widget-local state of the debtors panel.
    pub debtors_panel: DebtorsPanelState,
}

impl Default for State {
    fn default() -> Self {
        Self::from_config(BusinessConfig::from_env())
    }
}

impl State {
    pub fn from_config(config: BusinessConfig) -> Self {
        let backend = Arc::new(HttpDebtorsBackend::from_config(&config));
        Self::with_backend(config, backend)
    }

    /// State backed by an arbitrary client, e.g. a fake in tests.
    pub fn with_backend(config: BusinessConfig, backend: Arc<dyn DebtorsBackend>) -> Self {
        Self {
            config,
            debtors: DebtorsListView::new(backend),
            debtors_panel: DebtorsPanelState::default(),
        }
    }

    /// State pointing at a mock server.
    pub fn test(base_url: String) -> Self {
        Self::from_config(BusinessConfig::new(base_url))
    }
}
