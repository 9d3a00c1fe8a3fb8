//! Un-picking a creation from the editor's picks.
//!
//! The tile disappears as soon as the admin clicks. If the server refuses or
//! does not answer in time, the tile goes back where it was.

use std::future::Future;
use std::time::Duration;

use api::Creation;

use crate::remote::{CollectionSlot, FetchError, Lifetime};
use crate::timer::with_timeout;

#[derive(Debug, Clone, PartialEq)]
pub enum UnpickOutcome {
    Confirmed,
    Rejected(FetchError),
    TimedOut,
}

impl UnpickOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, UnpickOutcome::Confirmed)
    }

    /// Toast text for this outcome.
    pub fn message(&self, id: &str) -> String {
        match self {
            UnpickOutcome::Confirmed => format!("Un-picked {id}"),
            UnpickOutcome::Rejected(_) => format!("Could not un-pick {id}. It has been restored."),
            UnpickOutcome::TimedOut => format!("Un-picking {id} timed out. It has been restored."),
        }
    }
}

/// Remove `id` optimistically, run `mutation`, and revert unless confirmed.
///
/// Returns `None` without polling `mutation` when `id` is not displayed,
/// which is also the case while an earlier un-pick of it is still pending.
pub async fn unpick<S, F, E>(
    mut slot: S,
    lifetime: &Lifetime,
    timeout: Duration,
    id: &str,
    mutation: F,
) -> Option<UnpickOutcome>
where
    S: CollectionSlot<Creation>,
    F: Future<Output = Result<Creation, E>>,
    E: Into<FetchError>,
{
    let (index, creation) = slot.update(|picks| picks.remove(id))?;

    let outcome = match with_timeout(timeout, mutation).await {
        Some(Ok(_)) => UnpickOutcome::Confirmed,
        Some(Err(err)) => UnpickOutcome::Rejected(err.into()),
        None => UnpickOutcome::TimedOut,
    };

    match &outcome {
        UnpickOutcome::Confirmed => tracing::info!(creation_id = %id, "un-pick confirmed"),
        UnpickOutcome::Rejected(err) => tracing::error!(creation_id = %id, "un-pick rejected: {}", err),
        UnpickOutcome::TimedOut => tracing::error!(creation_id = %id, "un-pick timed out"),
    }

    if !outcome.is_confirmed() && lifetime.is_alive() {
        slot.update(|picks| picks.restore(index, creation));
    }
    Some(outcome)
}
