//! Reports screen controller
//!
//! Loads the user's health reports (split by the backend into employee and
//! family subsets) together with the short camp listing.

use super::state::{settle, Carousel, LoadState, StateCell};
use crate::adapters::backend::{HealthRecordsApi, HealthReportsEnvelope};
use crate::adapters::storage::SessionStore;
use crate::domain::{Camp, HealthReport};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Which partition of reports is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportsTab {
    #[default]
    Employee,
    Family,
}

/// The three report collections as returned by the backend
///
/// The client neither merges nor deduplicates them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportCollections {
    pub reports: Vec<HealthReport>,
    pub employee_reports: Vec<HealthReport>,
    pub family_reports: Vec<HealthReport>,
}

impl From<HealthReportsEnvelope> for ReportCollections {
    fn from(envelope: HealthReportsEnvelope) -> Self {
        Self {
            reports: envelope.reports,
            employee_reports: envelope.employee_reports,
            family_reports: envelope.family_reports,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Selection {
    tab: ReportsTab,
    carousel: Carousel,
    family_member: Option<HealthReport>,
}

/// Rendered view of the reports screen
#[derive(Debug, Clone, PartialEq)]
pub struct ReportsSnapshot {
    pub reports: LoadState<ReportCollections>,
    pub camps: LoadState<Vec<Camp>>,
    pub tab: ReportsTab,
    pub carousel: Carousel,
    pub selected_family_member: Option<HealthReport>,
}

impl ReportsSnapshot {
    /// Employee report under the carousel cursor
    pub fn current_employee_report(&self) -> Option<&HealthReport> {
        self.reports
            .data()
            .and_then(|c| c.employee_reports.get(self.carousel.index()))
    }
}

pub struct ReportsController {
    api: Arc<dyn HealthRecordsApi>,
    session: SessionStore,
    camp_listing_limit: u32,
    reports: StateCell<ReportCollections>,
    camps: StateCell<Vec<Camp>>,
    selection: RwLock<Selection>,
}

impl ReportsController {
    pub fn new(
        api: Arc<dyn HealthRecordsApi>,
        session: SessionStore,
        camp_listing_limit: u32,
    ) -> Self {
        Self {
            api,
            session,
            camp_listing_limit,
            reports: StateCell::new(),
            camps: StateCell::new(),
            selection: RwLock::new(Selection::default()),
        }
    }

    /// Fetch reports and the camp listing concurrently
    pub async fn load(&self) {
        let Some(user_id) = self.session.user_id().await else {
            tracing::info!("No stored user id, reports screen stays empty");
            self.reports.set(LoadState::empty()).await;
            self.camps.set(LoadState::empty()).await;
            self.selection.write().await.carousel.reset(0);
            return;
        };

        self.reports.begin().await;
        self.camps.begin().await;

        let (reports, camps) = futures::join!(
            self.api.health_reports(&user_id),
            self.api.camp_listing(self.camp_listing_limit)
        );

        let reports = settle("health_reports", reports, |e| e.success, ReportCollections::from);
        let camps = settle("camp_listing", camps, |e| e.success, |e| e.camps);

        let employee_count = reports.data().map_or(0, |c| c.employee_reports.len());
        tracing::info!(
            user_id = %user_id,
            reports = reports.data().map_or(0, |c| c.reports.len()),
            employee_reports = employee_count,
            family_reports = reports.data().map_or(0, |c| c.family_reports.len()),
            camps = camps.data().map_or(0, Vec::len),
            "Reports screen loaded"
        );

        {
            let mut selection = self.selection.write().await;
            selection.carousel.reset(employee_count);
            selection.family_member = None;
        }
        self.reports.set(reports).await;
        self.camps.set(camps).await;
    }

    pub async fn next_report(&self) -> usize {
        self.selection.write().await.carousel.next()
    }

    pub async fn previous_report(&self) -> usize {
        self.selection.write().await.carousel.previous()
    }

    pub async fn select_tab(&self, tab: ReportsTab) {
        self.selection.write().await.tab = tab;
    }

    /// Select a family report by id; false if it is not in the list
    pub async fn select_family_member(&self, report_id: i64) -> bool {
        let found = self
            .reports
            .snapshot()
            .await
            .data()
            .and_then(|c| c.family_reports.iter().find(|r| r.id == report_id).cloned());

        match found {
            Some(report) => {
                let mut selection = self.selection.write().await;
                selection.tab = ReportsTab::Family;
                selection.family_member = Some(report);
                true
            }
            None => false,
        }
    }

    pub async fn clear_family_member(&self) {
        self.selection.write().await.family_member = None;
    }

    pub async fn snapshot(&self) -> ReportsSnapshot {
        let selection = self.selection.read().await.clone();
        ReportsSnapshot {
            reports: self.reports.snapshot().await,
            camps: self.camps.snapshot().await,
            tab: selection.tab,
            carousel: selection.carousel,
            selected_family_member: selection.family_member,
        }
    }
}
