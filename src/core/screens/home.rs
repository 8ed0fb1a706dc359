//! Home screen controller: upcoming camps and recent reports

use super::state::{settle, Carousel, LoadState, StateCell};
use crate::adapters::backend::HealthRecordsApi;
use crate::adapters::storage::SessionStore;
use crate::domain::{Camp, HealthReport};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Rendered view of the home screen
#[derive(Debug, Clone, PartialEq)]
pub struct HomeSnapshot {
    pub camps: LoadState<Vec<Camp>>,
    pub recent_reports: LoadState<Vec<HealthReport>>,
    pub carousel: Carousel,
}

impl HomeSnapshot {
    /// The camp under the carousel cursor
    pub fn current_camp(&self) -> Option<&Camp> {
        self.camps
            .data()
            .and_then(|camps| camps.get(self.carousel.index()))
    }
}

pub struct HomeController {
    api: Arc<dyn HealthRecordsApi>,
    session: SessionStore,
    recent_reports_limit: u32,
    camps: StateCell<Vec<Camp>>,
    recent_reports: StateCell<Vec<HealthReport>>,
    carousel: RwLock<Carousel>,
}

impl HomeController {
    pub fn new(
        api: Arc<dyn HealthRecordsApi>,
        session: SessionStore,
        recent_reports_limit: u32,
    ) -> Self {
        Self {
            api,
            session,
            recent_reports_limit,
            camps: StateCell::new(),
            recent_reports: StateCell::new(),
            carousel: RwLock::new(Carousel::default()),
        }
    }

    /// Fetch camps and recent reports concurrently
    ///
    /// Without a stored user id both sections settle empty and nothing is
    /// requested.
    pub async fn load(&self) {
        let Some(user_id) = self.session.user_id().await else {
            tracing::info!("No stored user id, home screen stays empty");
            self.camps.set(LoadState::empty()).await;
            self.recent_reports.set(LoadState::empty()).await;
            self.carousel.write().await.reset(0);
            return;
        };

        self.camps.begin().await;
        self.recent_reports.begin().await;

        let (camps, reports) = futures::join!(
            self.api.camps(),
            self.api.recent_reports(&user_id, self.recent_reports_limit)
        );

        let camps = settle("camps", camps, |e| e.success, |e| e.camps);
        let reports = settle("recent_reports", reports, |e| e.success, |e| e.reports);

        tracing::info!(
            user_id = %user_id,
            camps = camps.data().map_or(0, Vec::len),
            recent_reports = reports.data().map_or(0, Vec::len),
            "Home screen loaded"
        );

        self.carousel
            .write()
            .await
            .reset(camps.data().map_or(0, Vec::len));
        self.camps.set(camps).await;
        self.recent_reports.set(reports).await;
    }

    pub async fn next_camp(&self) -> usize {
        self.carousel.write().await.next()
    }

    pub async fn previous_camp(&self) -> usize {
        self.carousel.write().await.previous()
    }

    pub async fn snapshot(&self) -> HomeSnapshot {
        HomeSnapshot {
            camps: self.camps.snapshot().await,
            recent_reports: self.recent_reports.snapshot().await,
            carousel: *self.carousel.read().await,
        }
    }
}
