//! State behind the debtors table.
//!
//! [`DebtorsListView`] owns the debtor collection and the static column
//! headers. Backend calls run as background tasks and report back over a
//! channel; [`DebtorsListView::poll`] applies finished calls on the UI thread,
//! one completion at a time. Rows are removed by id when the delete finishes,
//! never by an index captured when it started, so overlapping deletes cannot
//! remove the wrong row.
//!
//! A fetch that was already in flight when a delete finished may still list
//! the deleted row; such ids are filtered out when the fetch is applied.
//!
//! Hosts that are already async can skip the channel and call
//! [`DebtorsListView::load_now`] / [`DebtorsListView::remove_now`].

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use flume::{Receiver, Sender};
use log::{debug, error, info, warn};

use super::api::DebtorsBackend;
use super::columns::{ColumnDescriptor, HEADERS};
use super::error::{DebtorsError, DebtorsResult};
use super::model::{Debtor, DebtorId};
use crate::task;

/// Load lifecycle of the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DebtorsStatus {
    /// Not mounted yet.
    #[default]
    Uninitialized,
    /// A fetch is in flight. Rows from a previous fetch stay visible.
    Loading,
    Loaded,
    /// The last fetch failed; rows from an earlier fetch, if any, are kept.
    LoadFailed(DebtorsError),
}

/// Message for the user about a finished operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebtorsNotice {
    DeleteFailed { id: DebtorId, error: DebtorsError },
}

impl DebtorsNotice {
    pub fn error(&self) -> &DebtorsError {
        match self {
            Self::DeleteFailed { error, .. } => error,
        }
    }
}

/// A finished backend call waiting to be applied.
#[derive(Debug)]
enum DebtorsEvent {
    Loaded {
        generation: u64,
        result: DebtorsResult<Vec<Debtor>>,
    },
    Removed {
        id: DebtorId,
        result: DebtorsResult<()>,
    },
}

pub struct DebtorsListView {
    backend: Arc<dyn DebtorsBackend>,
    headers: &'static [ColumnDescriptor],
    debtors: Vec<Debtor>,
    status: DebtorsStatus,
    mounted: bool,
    pending_removals: BTreeSet<DebtorId>,
    /// Ids deleted since the newest fetch started.
    deleted_since_load: BTreeSet<DebtorId>,
    /// Bumped per fetch; only the newest fetch is applied.
    load_generation: u64,
    notice: Option<DebtorsNotice>,
    loaded_at: Option<DateTime<Utc>>,
    events_tx: Sender<DebtorsEvent>,
    events_rx: Receiver<DebtorsEvent>,
}

impl std::fmt::Debug for DebtorsListView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebtorsListView")
            .field("debtors", &self.debtors)
            .field("status", &self.status)
            .field("pending_removals", &self.pending_removals)
            .field("notice", &self.notice)
            .finish_non_exhaustive()
    }
}

impl DebtorsListView {
    pub fn new(backend: Arc<dyn DebtorsBackend>) -> Self {
        let (events_tx, events_rx) = flume::unbounded();
        Self {
            backend,
            headers: &HEADERS,
            debtors: Vec::new(),
            status: DebtorsStatus::Uninitialized,
            mounted: false,
            pending_removals: BTreeSet::new(),
            deleted_since_load: BTreeSet::new(),
            load_generation: 0,
            notice: None,
            loaded_at: None,
            events_tx,
            events_rx,
        }
    }

    pub fn headers(&self) -> &'static [ColumnDescriptor] {
        self.headers
    }

    pub fn debtors(&self) -> &[Debtor] {
        &self.debtors
    }

    pub fn debtor(&self, id: DebtorId) -> Option<&Debtor> {
        self.debtors.iter().find(|d| d.id == id)
    }

    pub fn status(&self) -> &DebtorsStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, DebtorsStatus::Loading)
    }

    pub fn load_error(&self) -> Option<&DebtorsError> {
        match &self.status {
            DebtorsStatus::LoadFailed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_removing(&self, id: DebtorId) -> bool {
        self.pending_removals.contains(&id)
    }

    pub fn pending_removals(&self) -> impl Iterator<Item = DebtorId> + '_ {
        self.pending_removals.iter().copied()
    }

    /// True while any backend call has not been applied yet.
    pub fn has_pending_work(&self) -> bool {
        self.is_loading() || !self.pending_removals.is_empty()
    }

    pub fn notice(&self) -> Option<&DebtorsNotice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// When the collection was last replaced by a successful fetch.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// First-render hook: starts the initial [`Self::load`] once.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.load();
    }

    /// Fetches the debtor list in the background. Ignored while a fetch is
    /// already in flight.
    pub fn load(&mut self) {
        if self.is_loading() {
            return;
        }
        let generation = self.start_load();

        let backend = Arc::clone(&self.backend);
        let tx = self.events_tx.clone();
        task::spawn(async move {
            let result = backend.fetch_debtors().await;
            if tx.send(DebtorsEvent::Loaded { generation, result }).is_err() {
                debug!("Debtors view dropped before the fetch finished");
            }
        });
    }

    /// Deletes `id` in the background. A second request for an id whose
    /// delete is still in flight is ignored.
    pub fn remove(&mut self, id: DebtorId) {
        if !self.pending_removals.insert(id) {
            return;
        }

        let backend = Arc::clone(&self.backend);
        let tx = self.events_tx.clone();
        task::spawn(async move {
            let result = backend.delete_debtor(id).await;
            if tx.send(DebtorsEvent::Removed { id, result }).is_err() {
                debug!("Debtors view dropped before deleting debtor {id} finished");
            }
        });
    }

    /// Applies every finished backend call. Returns true if state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            changed = true;
            self.apply_event(event);
        }
        changed
    }

    /// Fetches and applies the list in one step. Returns the number of
    /// debtors now held. A background fetch still in flight is superseded and
    /// dropped when it arrives.
    pub async fn load_now(&mut self) -> DebtorsResult<usize> {
        self.start_load();
        let result = self.backend.fetch_debtors().await;
        self.apply_loaded(result)
    }

    /// Deletes and applies in one step. `Ok(None)` means the backend accepted
    /// the delete but no local row carried that id.
    ///
    /// If a background delete for `id` is already in flight, no second
    /// request is sent; this waits for that one and returns its outcome.
    pub async fn remove_now(&mut self, id: DebtorId) -> DebtorsResult<Option<Debtor>> {
        if !self.pending_removals.insert(id) {
            return self.wait_for_removal(id).await;
        }
        let result = self.backend.delete_debtor(id).await;
        self.apply_removed(id, result)
    }

    /// Applies background completions until the delete of `id` arrives.
    async fn wait_for_removal(&mut self, id: DebtorId) -> DebtorsResult<Option<Debtor>> {
        loop {
            let event = self
                .events_rx
                .recv_async()
                .await
                .map_err(|err| DebtorsError::Transport(err.to_string()))?;
            match event {
                DebtorsEvent::Removed { id: done, result } if done == id => {
                    return self.apply_removed(id, result);
                }
                other => self.apply_event(other),
            }
        }
    }

    fn start_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.deleted_since_load.clear();
        self.status = DebtorsStatus::Loading;
        self.load_generation
    }

    /// Outcomes are logged and kept in `status` / `notice`.
    fn apply_event(&mut self, event: DebtorsEvent) {
        match event {
            DebtorsEvent::Loaded { generation, result } => {
                if generation != self.load_generation {
                    debug!("Dropping superseded debtors fetch #{generation}");
                    return;
                }
                if let Err(err) = self.apply_loaded(result) {
                    debug!("Debtors fetch #{generation} failed: {err}");
                }
            }
            DebtorsEvent::Removed { id, result } => {
                if let Err(err) = self.apply_removed(id, result) {
                    debug!("Delete of debtor {id} failed: {err}");
                }
            }
        }
    }

    fn apply_loaded(&mut self, result: DebtorsResult<Vec<Debtor>>) -> DebtorsResult<usize> {
        match result {
            Ok(mut debtors) => {
                if !self.deleted_since_load.is_empty() {
                    debtors.retain(|d| !self.deleted_since_load.contains(&d.id));
                }
                let count = debtors.len();
                info!("Loaded {count} debtors");
                self.debtors = debtors;
                self.status = DebtorsStatus::Loaded;
                self.loaded_at = Some(Utc::now());
                Ok(count)
            }
            Err(err) => {
                error!("Failed to load debtors: {err}");
                self.status = DebtorsStatus::LoadFailed(err.clone());
                Err(err)
            }
        }
    }

    fn apply_removed(
        &mut self,
        id: DebtorId,
        result: DebtorsResult<()>,
    ) -> DebtorsResult<Option<Debtor>> {
        self.pending_removals.remove(&id);

        match result {
            Ok(()) => {
                self.deleted_since_load.insert(id);
                let removed = self.remove_local(id);
                if removed.is_some() {
                    info!("Deleted debtor {id}");
                } else {
                    info!("Deleted debtor {id}, which was not in the list");
                }
                Ok(removed)
            }
            Err(err) => {
                if err.is_unauthorized() {
                    warn!("Not authorized to delete debtor {id}");
                } else {
                    error!("Failed to delete debtor {id}: {err}");
                }
                self.notice = Some(DebtorsNotice::DeleteFailed {
                    id,
                    error: err.clone(),
                });
                Err(err)
            }
        }
    }

    /// Removes the first row carrying `id`, preserving the order of the rest.
    fn remove_local(&mut self, id: DebtorId) -> Option<Debtor> {
        let index = self.debtors.iter().position(|d| d.id == id)?;
        Some(self.debtors.remove(index))
    }
}
