//! Load state shared by the screen controllers

use crate::domain::Result;
use tokio::sync::RwLock;

/// Data-loading state of one screen section
///
/// `Degraded` carries empty data and renders exactly like an empty
/// `Loaded`; the reason is only logged.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Degraded { data: T, reason: String },
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Loaded or degraded
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadState::Loaded(_) | LoadState::Degraded { .. })
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, LoadState::Degraded { .. })
    }

    /// Data to render, once settled
    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) | LoadState::Degraded { data, .. } => Some(data),
            LoadState::Idle | LoadState::Loading => None,
        }
    }
}

impl<T: Default> LoadState<T> {
    /// Empty data with a logged reason
    pub fn degraded(reason: impl Into<String>) -> Self {
        LoadState::Degraded {
            data: T::default(),
            reason: reason.into(),
        }
    }

    /// Empty data for a screen that has nothing to ask the backend
    pub fn empty() -> Self {
        LoadState::Loaded(T::default())
    }
}

impl<T: Default + Clone> LoadState<T> {
    /// Data to render, empty when not settled
    pub fn data_or_default(&self) -> T {
        self.data().cloned().unwrap_or_default()
    }
}

/// Turn a backend call into a settled state
///
/// `success: false` envelopes and errors both degrade to empty data.
pub(crate) fn settle<E, T: Default>(
    section: &str,
    result: Result<E>,
    succeeded: impl FnOnce(&E) -> bool,
    extract: impl FnOnce(E) -> T,
) -> LoadState<T> {
    match result {
        Ok(envelope) if succeeded(&envelope) => LoadState::Loaded(extract(envelope)),
        Ok(_) => {
            tracing::warn!(section = section, "Backend reported failure, showing empty state");
            LoadState::degraded("backend reported success=false")
        }
        Err(e) => {
            tracing::warn!(section = section, error = %e, "Load failed, showing empty state");
            LoadState::degraded(e.to_string())
        }
    }
}

/// A `LoadState` behind an async lock
///
/// Loads may overlap; whichever finishes last overwrites the state.
#[derive(Debug, Default)]
pub struct StateCell<T> {
    inner: RwLock<LoadState<T>>,
}

impl<T: Clone> StateCell<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(LoadState::Idle),
        }
    }

    pub async fn set(&self, state: LoadState<T>) {
        *self.inner.write().await = state;
    }

    pub async fn begin(&self) {
        self.set(LoadState::Loading).await;
    }

    pub async fn snapshot(&self) -> LoadState<T> {
        self.inner.read().await.clone()
    }
}

/// Index-based navigation over a fetched list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Advance, stopping at the last item
    pub fn next(&mut self) -> usize {
        if self.has_next() {
            self.index += 1;
        }
        self.index
    }

    /// Step back, stopping at the first item
    pub fn previous(&mut self) -> usize {
        if self.has_previous() {
            self.index -= 1;
        }
        self.index
    }

    /// Start over for a freshly fetched list
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChhanvError;

    #[test]
    fn test_degraded_renders_like_empty_loaded() {
        let degraded: LoadState<Vec<u8>> = LoadState::degraded("timeout");
        let empty: LoadState<Vec<u8>> = LoadState::empty();
        assert_eq!(degraded.data(), empty.data());
        assert!(degraded.is_settled());
        assert!(degraded.is_degraded());
        assert!(!empty.is_degraded());
    }

    #[test]
    fn test_unsettled_has_no_data() {
        assert_eq!(LoadState::<Vec<u8>>::Idle.data(), None);
        assert_eq!(LoadState::<Vec<u8>>::Loading.data(), None);
        assert!(LoadState::<Vec<u8>>::Loading.data_or_default().is_empty());
    }

    #[test]
    fn test_settle() {
        let ok = settle("camps", Ok((true, vec![1, 2])), |e| e.0, |e| e.1);
        assert_eq!(ok, LoadState::Loaded(vec![1, 2]));

        let refused = settle("camps", Ok((false, vec![1])), |e| e.0, |e| e.1);
        assert!(refused.is_degraded());
        assert_eq!(refused.data(), Some(&Vec::new()));

        let failed = settle::<(bool, Vec<i32>), _>(
            "camps",
            Err(ChhanvError::Other("offline".to_string())),
            |e| e.0,
            |e| e.1,
        );
        assert!(failed.is_degraded());
    }

    #[tokio::test]
    async fn test_state_cell_last_write_wins() {
        let cell = StateCell::<Vec<u8>>::new();
        cell.begin().await;
        assert!(cell.snapshot().await.is_loading());
        cell.set(LoadState::Loaded(vec![1])).await;
        cell.set(LoadState::Loaded(vec![2])).await;
        assert_eq!(cell.snapshot().await, LoadState::Loaded(vec![2]));
    }

    #[test]
    fn test_carousel_clamps() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.previous(), 0);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 2);
        assert!(!carousel.has_next());
        assert_eq!(carousel.previous(), 1);

        carousel.reset(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.next(), 0);
    }
}
