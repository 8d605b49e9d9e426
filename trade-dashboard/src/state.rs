//! Dashboard state shared between the event handler and its observers.
//!
//! Only the newest selection's views are ever rendered. A views bundle whose
//! sequence number is not newer than the last accepted one is dropped.

use crate::views::DashboardViews;

#[derive(Debug, Default, Clone)]
pub struct DashboardState {
    /// Sequence number of the last accepted views bundle.
    last_accepted: Option<u64>,
    /// Views currently on screen.
    rendered: Option<DashboardViews>,
    /// Most recent user-visible notice, cleared by the next accepted views.
    notice: Option<String>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether views from `seq` would be rejected as stale.
    pub fn is_stale(&self, seq: u64) -> bool {
        self.last_accepted.is_some_and(|last| seq <= last)
    }

    /// Take a computed bundle if it is newer than what is on screen.
    ///
    /// Returns `false` and leaves the state untouched for stale bundles.
    pub fn accept(&mut self, views: DashboardViews) -> bool {
        if self.is_stale(views.seq) {
            log::debug!(
                "[Trade Debug] state: Discarding stale views #{} for '{}' (showing #{})",
                views.seq,
                views.commodity,
                self.last_accepted.unwrap_or_default()
            );
            return false;
        }
        self.last_accepted = Some(views.seq);
        self.notice = None;
        self.rendered = Some(views);
        true
    }

    /// Record a notice without touching the rendered views.
    pub fn set_notice(&mut self, notice: String) {
        self.notice = Some(notice);
    }

    pub fn rendered(&self) -> Option<&DashboardViews> {
        self.rendered.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Commodity of the views on screen.
    pub fn selected(&self) -> Option<&str> {
        self.rendered.as_ref().map(|v| v.commodity.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::SelectionEvent;
    use crate::views::compute_views;
    use trade_core::Dataset;

    fn views(dataset: &Dataset, seq: u64, commodity: &str) -> DashboardViews {
        compute_views(
            dataset,
            &SelectionEvent {
                seq,
                commodity: commodity.to_string(),
            },
        )
    }

    #[test]
    fn newer_views_replace_older() {
        let dataset = Dataset::sample().unwrap();
        let mut state = DashboardState::new();
        assert!(state.accept(views(&dataset, 1, "Tea")));
        assert!(state.accept(views(&dataset, 2, "Rum")));
        assert_eq!(state.selected(), Some("Rum"));
    }

    #[test]
    fn stale_views_are_discarded() {
        let dataset = Dataset::sample().unwrap();
        let mut state = DashboardState::new();
        assert!(state.accept(views(&dataset, 4, "Sugar")));
        assert!(!state.accept(views(&dataset, 3, "Tea")), "Older selection must not render");
        assert!(!state.accept(views(&dataset, 4, "Tea")), "Replayed selection must not render");
        assert_eq!(state.selected(), Some("Sugar"));
    }

    #[test]
    fn notice_keeps_rendered_views() {
        let dataset = Dataset::sample().unwrap();
        let mut state = DashboardState::new();
        state.accept(views(&dataset, 1, "Tea"));
        state.set_notice("'Coffee' is not a known commodity".to_string());
        assert_eq!(state.selected(), Some("Tea"));
        assert_eq!(state.notice(), Some("'Coffee' is not a known commodity"));

        state.accept(views(&dataset, 2, "Rum"));
        assert_eq!(state.notice(), None);
    }
}
