//! Load state for one chart widget.
//!
//! Setting a user id hands out a [`FetchTicket`]. A result is applied only
//! when its ticket is still the current one and the adapter is mounted, so a
//! late response for a previous user can never overwrite the current state.

use crate::errors::DataError;
use crate::models::UserId;
use std::future::Future;
use tracing::{debug, warn};

pub const PLACEHOLDER: &str = "Veuillez patienter...";

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Nothing to show yet. Also where an unknown user stays.
    Pending,
    Loaded(T),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub user_id: UserId,
    generation: u64,
}

#[derive(Debug)]
pub struct ChartAdapter<T> {
    user_id: Option<UserId>,
    generation: u64,
    mounted: bool,
    state: LoadState<T>,
}

impl<T> Default for ChartAdapter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ChartAdapter<T> {
    pub fn new() -> Self {
        Self {
            user_id: None,
            generation: 0,
            mounted: true,
            state: LoadState::Pending,
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Returns a ticket when `user_id` differs from the current one (or on
    /// first mount). The state drops back to pending until it resolves.
    pub fn set_user_id(&mut self, user_id: UserId) -> Option<FetchTicket> {
        if !self.mounted || self.user_id == Some(user_id) {
            return None;
        }
        self.user_id = Some(user_id);
        self.generation += 1;
        self.state = LoadState::Pending;
        Some(FetchTicket {
            user_id,
            generation: self.generation,
        })
    }

    /// Applies a fetch result. Returns whether the state was updated.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<Option<T>, DataError>) -> bool {
        if !self.mounted || ticket.generation != self.generation {
            debug!(user_id = ticket.user_id, "discarding stale fetch result");
            return false;
        }

        match result {
            Ok(Some(record)) => self.state = LoadState::Loaded(record),
            Ok(None) => {
                debug!(user_id = ticket.user_id, "no data for user, keeping placeholder");
                self.state = LoadState::Pending;
            }
            Err(err) => {
                warn!(user_id = ticket.user_id, error = %err, "chart data failed to load");
                self.state = LoadState::Failed(err.to_string());
            }
        }
        true
    }

    /// Stops accepting results. In-flight tickets resolve to nothing.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Sets the user id and, when that needs a fetch, runs `fetch` to completion.
    pub async fn load_with<F, Fut>(&mut self, user_id: UserId, fetch: F)
    where
        F: FnOnce(UserId) -> Fut,
        Fut: Future<Output = Result<Option<T>, DataError>>,
    {
        if let Some(ticket) = self.set_user_id(user_id) {
            let result = fetch(ticket.user_id).await;
            self.resolve(ticket, result);
        }
    }
}
