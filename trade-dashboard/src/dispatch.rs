//! Selection handling.
//!
//! A selection change is one event. [`Dashboard::begin`] validates it and
//! stamps it with a sequence number, [`compute_views`] derives the three
//! views (on any thread), and [`Dashboard::complete`] renders them unless a
//! newer selection has already been rendered. Observers hear about every
//! rendered bundle and every rejected selection.

use crate::state::DashboardState;
use crate::views::{compute_views, DashboardViews};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use trade_core::Dataset;
use trade_data::{CommodityIndex, ViewError};

/// A validated "selection changed" event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionEvent {
    pub seq: u64,
    pub commodity: String,
}

/// A selection that was rejected. The previous views stay on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub error: ViewError,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for Notice {}

/// Receives the output of the dashboard.
pub trait ViewObserver {
    /// A new views bundle has been accepted for rendering.
    fn views_changed(&mut self, views: &DashboardViews);

    /// A selection was rejected.
    fn notice(&mut self, _notice: &Notice) {}
}

/// Event handler owning the loaded dataset, its commodity index and the
/// rendered state.
///
/// A `Dashboard` can only be built from a loaded [`Dataset`], so no
/// selection is ever served before loading has finished.
pub struct Dashboard {
    dataset: Arc<Dataset>,
    index: CommodityIndex,
    state: DashboardState,
    next_seq: u64,
    observers: Vec<Box<dyn ViewObserver>>,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let index = CommodityIndex::from_dataset(&dataset);
        Self {
            dataset,
            index,
            state: DashboardState::new(),
            next_seq: 1,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn ViewObserver>) {
        self.observers.push(observer);
    }

    /// Shared handle to the dataset, for computing views off this thread.
    pub fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    pub fn index(&self) -> &CommodityIndex {
        &self.index
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Validate a selection and issue its event.
    ///
    /// Rejected selections leave the rendered views alone and are reported
    /// to observers as a [`Notice`].
    pub fn begin(&mut self, commodity: &str) -> Result<SelectionEvent, Notice> {
        let seq = self.next_seq;
        self.next_seq += 1;

        match self.index.validate(commodity) {
            Ok(commodity) => {
                log::debug!(
                    "[Trade Debug] dispatch: Selection #{} '{}'",
                    seq,
                    commodity
                );
                Ok(SelectionEvent {
                    seq,
                    commodity: commodity.to_string(),
                })
            }
            Err(error) => {
                let notice = Notice { seq, error };
                log::warn!("[Trade Debug] dispatch: Selection #{} rejected: {}", seq, notice);
                self.state.set_notice(notice.to_string());
                for observer in self.observers.iter_mut() {
                    observer.notice(&notice);
                }
                Err(notice)
            }
        }
    }

    /// Render a computed bundle unless a newer one is already on screen.
    pub fn complete(&mut self, views: DashboardViews) -> bool {
        if !self.state.accept(views) {
            return false;
        }
        if let Some(views) = self.state.rendered() {
            for observer in self.observers.iter_mut() {
                observer.views_changed(views);
            }
        }
        true
    }

    /// Handle a selection synchronously: validate, compute, render.
    pub fn select(&mut self, commodity: &str) -> Result<bool, Notice> {
        let event = self.begin(commodity)?;
        let views = compute_views(&self.dataset, &event);
        Ok(self.complete(views))
    }

    /// Select the first commodity of the index.
    pub fn select_default(&mut self) -> Result<bool, Notice> {
        match self.index.default_commodity().map(str::to_string) {
            Some(commodity) => self.select(&commodity),
            None => self.select(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorded {
        rendered: Vec<(u64, String)>,
        notices: Vec<String>,
    }

    struct Recorder(Rc<RefCell<Recorded>>);

    impl ViewObserver for Recorder {
        fn views_changed(&mut self, views: &DashboardViews) {
            self.0
                .borrow_mut()
                .rendered
                .push((views.seq, views.commodity.clone()));
        }

        fn notice(&mut self, notice: &Notice) {
            self.0.borrow_mut().notices.push(notice.to_string());
        }
    }

    fn sample_dashboard() -> (Dashboard, Rc<RefCell<Recorded>>) {
        let mut dashboard = Dashboard::new(Arc::new(Dataset::sample().unwrap()));
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        dashboard.subscribe(Box::new(Recorder(Rc::clone(&recorded))));
        (dashboard, recorded)
    }

    #[test]
    fn default_selection_is_first_commodity() {
        let (mut dashboard, recorded) = sample_dashboard();
        assert_eq!(dashboard.select_default(), Ok(true));
        assert_eq!(recorded.borrow().rendered, vec![(1, "Tea".to_string())]);
    }

    #[test]
    fn each_selection_notifies_observers() {
        let (mut dashboard, recorded) = sample_dashboard();
        dashboard.select("Tea").unwrap();
        dashboard.select("Sugar").unwrap();
        assert_eq!(
            recorded.borrow().rendered,
            vec![(1, "Tea".to_string()), (2, "Sugar".to_string())]
        );
        assert_eq!(dashboard.state().selected(), Some("Sugar"));
    }

    #[test]
    fn invalid_selection_keeps_previous_views() {
        let (mut dashboard, recorded) = sample_dashboard();
        dashboard.select("Rum").unwrap();
        let notice = dashboard.select("Coffee").unwrap_err();
        assert_eq!(notice.error, ViewError::InvalidSelection("Coffee".to_string()));
        assert_eq!(dashboard.state().selected(), Some("Rum"));
        assert_eq!(
            dashboard.state().notice(),
            Some("'Coffee' is not a known commodity")
        );
        assert_eq!(recorded.borrow().rendered.len(), 1);
        assert_eq!(recorded.borrow().notices.len(), 1);
    }

    #[test]
    fn overlapping_selections_render_only_the_latest() {
        let (mut dashboard, recorded) = sample_dashboard();
        let first = dashboard.begin("Tea").unwrap();
        let second = dashboard.begin("Cotton").unwrap();
        let dataset = dashboard.dataset();

        // The later selection finishes first; the earlier one arrives late.
        assert!(dashboard.complete(compute_views(&dataset, &second)));
        assert!(!dashboard.complete(compute_views(&dataset, &first)));

        assert_eq!(dashboard.state().selected(), Some("Cotton"));
        assert_eq!(recorded.borrow().rendered, vec![(2, "Cotton".to_string())]);
    }

    #[test]
    fn empty_dataset_degrades_without_panicking() {
        let mut dashboard = Dashboard::new(Arc::new(Dataset::default()));
        assert!(dashboard.index().is_empty());
        let notice = dashboard.select_default().unwrap_err();
        assert_eq!(notice.error, ViewError::EmptyDataset);
        assert!(dashboard.state().rendered().is_none());
    }
}
