//! Widget-local state for the debtors panel.

use debtors_business::DebtorId;

/// What a click in the table asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebtorAction {
    Manage(DebtorId),
    Delete(DebtorId),
}

#[derive(Debug, Default)]
pub struct DebtorsPanelState {
    /// Debtor shown in the manage window.
    pub(crate) managing: Option<DebtorId>,
}

impl DebtorsPanelState {
    pub fn managing(&self) -> Option<DebtorId> {
        self.managing
    }

    pub fn open_manage(&mut self, id: DebtorId) {
        self.managing = Some(id);
    }

    pub fn close_manage(&mut self) {
        self.managing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manage_open_close() {
        let mut state = DebtorsPanelState::default();
        assert_eq!(state.managing(), None);

        state.open_manage(DebtorId(4));
        assert_eq!(state.managing(), Some(DebtorId(4)));

        state.close_manage();
        assert_eq!(state.managing(), None);
    }
}
