//! Analytics View State
//!
//! One-shot load state of the analytics page:
//! `Idle → Loading → Loaded(snapshot) | Failed(reason)`.
//!
//! A view loads at most once. If it is unmounted while the fetch is in
//! flight, the late result is dropped instead of being applied.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::snapshot::AnalyticsSnapshot;
use super::source::{AnalyticsError, AnalyticsSource};

/// Load state consumed by the page renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Loaded(Arc<AnalyticsSnapshot>),
    /// The reason is for logs only; the page shows a fixed message
    Failed(String),
}

impl ViewState {
    pub fn snapshot(&self) -> Option<&AnalyticsSnapshot> {
        match self {
            ViewState::Loaded(snapshot) => Some(snapshot.as_ref()),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ViewState::Failed(_))
    }
}

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Proof that a load was started on a specific view; consumed by `complete`
#[derive(Debug)]
pub struct LoadTicket {
    view_id: u64,
}

/// Analytics page state for one visit
#[derive(Debug)]
pub struct AnalyticsView {
    id: u64,
    state: ViewState,
    mounted: bool,
}

impl Default for AnalyticsView {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsView {
    pub fn new() -> Self {
        Self {
            id: NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed),
            state: ViewState::Idle,
            mounted: true,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn into_state(self) -> ViewState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Start the single load. Returns `None` if this view already loaded,
    /// is loading, or is no longer displayed.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if !self.mounted || self.state != ViewState::Idle {
            return None;
        }
        self.state = ViewState::Loading;
        Some(LoadTicket { view_id: self.id })
    }

    /// Apply a fetch result. Returns `false` and drops the result when the
    /// ticket belongs to another view, the view is not loading, or it was
    /// unmounted in the meantime.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<AnalyticsSnapshot, AnalyticsError>,
    ) -> bool {
        if ticket.view_id != self.id {
            tracing::warn!(
                ticket_view = ticket.view_id,
                view = self.id,
                "Load ticket belongs to another analytics view, dropping response"
            );
            return false;
        }
        if self.state != ViewState::Loading {
            tracing::debug!("Analytics view is not loading, dropping response");
            return false;
        }
        if !self.mounted {
            tracing::debug!("Analytics view unmounted, dropping late response");
            return false;
        }

        self.state = match result {
            Ok(snapshot) => {
                tracing::debug!(
                    timeline_days = snapshot.timeline.len(),
                    stylists = snapshot.stylist_load.len(),
                    "Analytics snapshot loaded"
                );
                ViewState::Loaded(Arc::new(snapshot))
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading analytics");
                ViewState::Failed(e.to_string())
            }
        };
        true
    }

    /// Mark the view as no longer displayed
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Run the whole load against `source`: begin, fetch once, complete
    pub async fn load(&mut self, source: &dyn AnalyticsSource) -> &ViewState {
        if let Some(ticket) = self.begin_load() {
            let result = source.fetch_snapshot().await;
            self.complete(ticket, result);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::snapshot::Totals;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn snapshot() -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            timeline: vec![],
            stylist_load: vec![],
            hourly_distribution: vec![],
            totals: Totals {
                total: 10,
                completed: 3,
                cancelled: 2,
                active: 5,
            },
        }
    }

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl AnalyticsSource for CountingSource {
        async fn fetch_snapshot(&self) -> Result<AnalyticsSnapshot, AnalyticsError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(AnalyticsError::Unavailable)
            } else {
                Ok(snapshot())
            }
        }
    }

    #[tokio::test]
    async fn test_load_fetches_once() {
        let source = CountingSource {
            calls: AtomicUsize::new(0),
            fail: false,
        };
        let mut view = AnalyticsView::new();

        assert_eq!(view.state(), &ViewState::Idle);
        view.load(&source).await;
        view.load(&source).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(view.state().snapshot(), Some(&snapshot()));
    }

    #[tokio::test]
    async fn test_failed_fetch_ends_in_failed_state() {
        let source = CountingSource {
            calls: AtomicUsize::new(0),
            fail: true,
        };
        let mut view = AnalyticsView::new();

        let state = view.load(&source).await;

        assert!(state.is_failed());
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_begin_load_moves_to_loading() {
        let mut view = AnalyticsView::new();

        let ticket = view.begin_load();
        assert!(ticket.is_some());
        assert_eq!(view.state(), &ViewState::Loading);
        assert!(view.begin_load().is_none());
    }

    #[test]
    fn test_late_result_after_unmount_is_dropped() {
        let mut view = AnalyticsView::new();
        let ticket = view.begin_load().unwrap();

        view.unmount();
        let applied = view.complete(ticket, Ok(snapshot()));

        assert!(!applied);
        assert_eq!(view.state(), &ViewState::Loading);
    }

    #[test]
    fn test_ticket_from_another_view_is_ignored() {
        let mut first = AnalyticsView::new();
        let mut second = AnalyticsView::new();
        let ticket = first.begin_load().unwrap();

        let applied = second.complete(ticket, Ok(snapshot()));

        assert!(!applied);
        assert_eq!(second.state(), &ViewState::Idle);
        assert_eq!(first.state(), &ViewState::Loading);
    }

    #[test]
    fn test_ticket_is_rejected_once_loading_is_over() {
        let mut view = AnalyticsView::new();
        let ticket = view.begin_load().unwrap();
        assert!(view.complete(ticket, Err(AnalyticsError::Timeout)));

        // A stray second ticket for the same view cannot overwrite the result
        let stray = LoadTicket { view_id: view.id };
        assert!(!view.complete(stray, Ok(snapshot())));
        assert!(view.state().is_failed());
    }

    #[test]
    fn test_unmounted_view_never_loads() {
        let mut view = AnalyticsView::new();
        view.unmount();

        assert!(view.begin_load().is_none());
        assert_eq!(view.into_state(), ViewState::Idle);
    }
}
