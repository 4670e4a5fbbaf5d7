//! Presence updater - periodically publishes "In N servers" as the bot status

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::domain::traits::Session;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceState {
    Idle,
    Running,
}

/// Recurring status refresh, independent of command traffic.
///
/// `start` moves Idle -> Running once; there is no way back short of
/// process exit.
pub struct PresenceUpdater {
    prefix: String,
    interval: Duration,
    running: AtomicBool,
}

impl PresenceUpdater {
    pub fn new(prefix: impl Into<String>, interval: Duration) -> Self {
        Self {
            prefix: prefix.into(),
            interval,
            running: AtomicBool::new(false),
        }
    }

    pub fn format_status(community_count: usize, prefix: &str) -> String {
        format!("In {} servers. Prefix {}", community_count, prefix)
    }

    pub fn state(&self) -> PresenceState {
        if self.running.load(Ordering::SeqCst) {
            PresenceState::Running
        } else {
            PresenceState::Idle
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One refresh: read the count, push the status, return what was pushed
    pub fn tick(&self, session: &dyn Session) -> String {
        let status = Self::format_status(session.community_count(), &self.prefix);
        session.set_presence(&status);
        status
    }

    /// Begin ticking on the current runtime. The first tick fires immediately.
    ///
    /// Returns `None` when already running, e.g. when the gateway reports
    /// ready again after a reconnect.
    pub fn start(self: &Arc<Self>, session: Arc<dyn Session>) -> Option<JoinHandle<()>> {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("Presence updater already running");
            return None;
        }

        tracing::info!("Starting presence updater every {:?}", self.interval);
        let updater = Arc::clone(self);
        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(updater.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let status = updater.tick(session.as_ref());
                tracing::trace!("Presence set to {:?}", status);
            }
        }))
    }
}
