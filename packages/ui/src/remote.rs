//! Remote-collection lifecycle shared by the admin dashboard and profile views.
//!
//! A view owns one [`RemoteCollection`] per section. Each fetch is started with
//! [`RemoteCollection::begin`], which hands out a [`Ticket`], and finished with
//! [`RemoteCollection::settle`]. A ticket only lands if it is still the newest
//! one for its section and the owning view is still mounted; anything else is
//! dropped without touching state.
//!
//! [`refresh`] drives one section through that cycle against any
//! [`CollectionSlot`]: a `Signal` inside components, an `Arc<Mutex<_>>` in tests.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use api::Creation;
use dioxus::prelude::*;

use crate::timer::with_timeout;

/// The one failure kind the views distinguish.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("collection fetch failed: {reason}")]
pub struct FetchError {
    reason: String,
}

impl FetchError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn timed_out(after: Duration) -> Self {
        Self::new(format!("no response after {}s", after.as_secs()))
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<ServerFnError> for FetchError {
    fn from(err: ServerFnError) -> Self {
        Self::new(err.to_string())
    }
}

/// Liveness flag for a mounted view. Cloned into every fetch it starts.
#[derive(Debug, Clone)]
pub struct Lifetime(Arc<AtomicBool>);

impl Lifetime {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Mark the view as gone. Results arriving afterwards are discarded.
    pub fn end(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for one in-flight fetch.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    lifetime: Lifetime,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_live(&self) -> bool {
        self.lifetime.is_alive()
    }
}

/// What a section should display.
#[derive(Debug, PartialEq)]
pub enum RenderState<'a, T> {
    Loading,
    Error(&'a FetchError),
    Empty,
    Populated(&'a [T]),
}

/// How a fetch ended, from the section's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// Items replaced; carries the new count.
    Loaded(usize),
    /// Items kept; the section now shows an error.
    Failed(FetchError),
    /// Result belonged to a superseded fetch or an unmounted view.
    Discarded,
}

impl Settlement {
    pub fn is_failed(&self) -> bool {
        matches!(self, Settlement::Failed(_))
    }
}

/// Items with a stable identity, used to re-insert reverted items once.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Creation {
    fn key(&self) -> &str {
        &self.id
    }
}

/// One section's items plus its loading and error flags.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCollection<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<FetchError>,
    generation: u64,
}

impl<T> Default for RemoteCollection<T> {
    /// Sections start out loading: the first fetch is issued on mount.
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            generation: 0,
        }
    }
}

impl<T> RemoteCollection<T> {
    /// A section that never fetches, already holding `items`.
    pub fn settled(items: Vec<T>) -> Self {
        Self {
            items,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    /// Start a fetch. Any ticket handed out earlier becomes stale.
    pub fn begin(&mut self, lifetime: &Lifetime) -> Ticket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        Ticket {
            generation: self.generation,
            lifetime: lifetime.clone(),
        }
    }

    /// Apply a fetch result. On failure the previous items stay untouched.
    pub fn settle(&mut self, ticket: &Ticket, result: Result<Vec<T>, FetchError>) -> Settlement {
        if ticket.generation != self.generation || !ticket.is_live() {
            return Settlement::Discarded;
        }

        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                Settlement::Loaded(self.items.len())
            }
            Err(err) => {
                self.error = Some(err.clone());
                Settlement::Failed(err)
            }
        }
    }

    pub fn render_state(&self) -> RenderState<'_, T> {
        if self.loading {
            RenderState::Loading
        } else if let Some(err) = &self.error {
            RenderState::Error(err)
        } else if self.items.is_empty() {
            RenderState::Empty
        } else {
            RenderState::Populated(&self.items)
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }
}

impl<T: Keyed> RemoteCollection<T> {
    pub fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    /// Take the item out of the displayed list, remembering where it was.
    pub fn remove(&mut self, key: &str) -> Option<(usize, T)> {
        let index = self.position(key)?;
        Some((index, self.items.remove(index)))
    }

    /// Put a removed item back near its old position, unless it is already there.
    pub fn restore(&mut self, index: usize, item: T) -> bool {
        if self.position(item.key()).is_some() {
            return false;
        }
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        true
    }
}

/// Somewhere a [`RemoteCollection`] lives.
pub trait CollectionSlot<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut RemoteCollection<T>) -> R) -> R;
}

impl<T: 'static> CollectionSlot<T> for Signal<RemoteCollection<T>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut RemoteCollection<T>) -> R) -> R {
        let mut collection = self.write();
        f(&mut *collection)
    }
}

impl<T> CollectionSlot<T> for Arc<Mutex<RemoteCollection<T>>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut RemoteCollection<T>) -> R) -> R {
        let mut collection = self.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut collection)
    }
}

/// Fetch one section and settle it.
///
/// The slot is never touched once `lifetime` has ended, so a view that
/// unmounts mid-fetch is left alone.
pub async fn refresh<T, S, F, E>(
    mut slot: S,
    lifetime: &Lifetime,
    timeout: Duration,
    fetch: F,
) -> Settlement
where
    S: CollectionSlot<T>,
    F: Future<Output = Result<Vec<T>, E>>,
    E: Into<FetchError>,
{
    if !lifetime.is_alive() {
        return Settlement::Discarded;
    }
    let ticket = slot.update(|collection| collection.begin(lifetime));

    let result = match with_timeout(timeout, fetch).await {
        Some(result) => result.map_err(Into::into),
        None => Err(FetchError::timed_out(timeout)),
    };

    if !ticket.is_live() {
        tracing::debug!(generation = ticket.generation(), "view gone, dropping fetch result");
        return Settlement::Discarded;
    }

    let settlement = slot.update(|collection| collection.settle(&ticket, result));
    match &settlement {
        Settlement::Loaded(count) => tracing::debug!(count, "collection loaded"),
        Settlement::Failed(err) => tracing::error!("{}", err),
        Settlement::Discarded => {
            tracing::debug!(generation = ticket.generation(), "superseded fetch result dropped")
        }
    }
    settlement
}

/// A [`Lifetime`] that ends when the calling component unmounts.
pub fn use_lifetime() -> Lifetime {
    let lifetime = use_hook(Lifetime::new);
    let on_drop = lifetime.clone();
    use_drop(move || on_drop.end());
    lifetime
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::sleep;

    const TIMEOUT: Duration = Duration::from_millis(200);

    fn creation(id: &str) -> Creation {
        Creation {
            id: id.to_string(),
            media_url: format!("m/{id}.png"),
            prompt: format!("prompt {id}"),
            owner_id: "u1".to_string(),
            picked: true,
        }
    }

    fn slot<T>() -> Arc<Mutex<RemoteCollection<T>>> {
        Arc::new(Mutex::new(RemoteCollection::default()))
    }

    #[test]
    fn test_initial_state_is_loading() {
        let collection = RemoteCollection::<Creation>::default();
        assert_eq!(collection.render_state(), RenderState::Loading);
        assert_eq!(collection.count(), 0);

        let placeholder = RemoteCollection::<Creation>::settled(Vec::new());
        assert_eq!(placeholder.render_state(), RenderState::Empty);
    }

    #[tokio::test]
    async fn test_success_populates() {
        let section = slot();
        let lifetime = Lifetime::new();

        let settlement = refresh(section.clone(), &lifetime, TIMEOUT, async {
            Ok::<_, FetchError>(vec![creation("a"), creation("b")])
        })
        .await;

        assert_eq!(settlement, Settlement::Loaded(2));
        let collection = section.lock().unwrap();
        assert!(!collection.is_loading());
        assert_eq!(collection.count(), 2);
        match collection.render_state() {
            RenderState::Populated(items) => assert_eq!(items.len(), collection.count()),
            other => panic!("expected populated, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_result() {
        let section = slot::<Creation>();
        let lifetime = Lifetime::new();

        refresh(section.clone(), &lifetime, TIMEOUT, async {
            Ok::<_, FetchError>(Vec::new())
        })
        .await;

        assert_eq!(section.lock().unwrap().render_state(), RenderState::Empty);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_items() {
        let section = slot();
        let lifetime = Lifetime::new();

        refresh(section.clone(), &lifetime, TIMEOUT, async {
            Ok::<_, FetchError>(vec![creation("a"), creation("b"), creation("c")])
        })
        .await;

        let settlement = refresh(section.clone(), &lifetime, TIMEOUT, async {
            Err::<Vec<Creation>, _>(FetchError::new("503"))
        })
        .await;

        assert!(settlement.is_failed());
        let collection = section.lock().unwrap();
        assert!(!collection.is_loading());
        assert_eq!(collection.count(), 3);
        assert_eq!(collection.items()[0].id, "a");
        assert!(matches!(collection.render_state(), RenderState::Error(err) if err.reason() == "503"));
    }

    #[tokio::test]
    async fn test_timeout_reaches_error() {
        let section = slot::<Creation>();
        let lifetime = Lifetime::new();

        let settlement = refresh(section.clone(), &lifetime, Duration::from_millis(10), async {
            sleep(Duration::from_secs(5)).await;
            Ok::<_, FetchError>(Vec::new())
        })
        .await;

        assert!(settlement.is_failed());
        assert!(matches!(
            section.lock().unwrap().render_state(),
            RenderState::Error(_)
        ));
    }

    #[tokio::test]
    async fn test_superseded_fetch_is_discarded() {
        let section = slot();
        let lifetime = Lifetime::new();

        let slow = refresh(section.clone(), &lifetime, TIMEOUT, async {
            sleep(Duration::from_millis(40)).await;
            Ok::<_, FetchError>(vec![creation("old")])
        });
        let fast = refresh(section.clone(), &lifetime, TIMEOUT, async {
            Ok::<_, FetchError>(vec![creation("new")])
        });
        let (slow, fast) = tokio::join!(slow, fast);

        assert_eq!(slow, Settlement::Discarded);
        assert_eq!(fast, Settlement::Loaded(1));
        assert_eq!(section.lock().unwrap().items()[0].id, "new");
    }

    #[tokio::test]
    async fn test_unmounted_view_is_not_written() {
        let section = slot();
        let lifetime = Lifetime::new();
        let ender = lifetime.clone();

        let fetch = refresh(section.clone(), &lifetime, TIMEOUT, async move {
            ender.end();
            Ok::<_, FetchError>(vec![creation("late")])
        });

        assert_eq!(fetch.await, Settlement::Discarded);
        assert_eq!(section.lock().unwrap().count(), 0);

        // Nothing starts once the view is gone either.
        let again = refresh(section.clone(), &lifetime, TIMEOUT, async {
            Ok::<_, FetchError>(vec![creation("later")])
        })
        .await;
        assert_eq!(again, Settlement::Discarded);
        assert_eq!(section.lock().unwrap().count(), 0);
    }

    #[test]
    fn test_remove_and_restore() {
        let mut collection =
            RemoteCollection::settled(vec![creation("a"), creation("b"), creation("c")]);

        let (index, item) = collection.remove("b").unwrap();
        assert_eq!(index, 1);
        assert_eq!(collection.count(), 2);
        assert!(collection.remove("b").is_none());

        assert!(collection.restore(index, item.clone()));
        let ids: Vec<_> = collection.items().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);

        // Already present: no duplicate.
        assert!(!collection.restore(0, item));
        assert_eq!(collection.count(), 3);

        // Index past the end is clamped.
        let (_, c) = collection.remove("c").unwrap();
        collection.remove("b");
        assert!(collection.restore(5, c));
        assert_eq!(collection.items().last().unwrap().id, "c");
    }
}
