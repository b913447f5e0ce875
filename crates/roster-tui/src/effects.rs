//! Executes browser effects on the tokio runtime.
//!
//! Fetches and debounce timers run as spawned tasks and report back as
//! [`Msg`]s on an unbounded channel, so every state change still happens on
//! the task that owns the [`roster_domain::Browser`].

use roster_domain::{CharacterSource, Effect, Msg};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct EffectRunner {
    source: Arc<dyn CharacterSource>,
    tx: mpsc::UnboundedSender<Msg>,
    pending_debounce: Option<JoinHandle<()>>,
}

impl EffectRunner {
    pub fn new(source: Arc<dyn CharacterSource>, tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            source,
            tx,
            pending_debounce: None,
        }
    }

    /// Create a runner together with the receiving end of its channel.
    pub fn channel(source: Arc<dyn CharacterSource>) -> (Self, mpsc::UnboundedReceiver<Msg>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(source, tx), rx)
    }

    pub fn run(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleDebounce { token, delay } => {
                // The browser ignores superseded tokens anyway; aborting just
                // saves the wakeup.
                if let Some(previous) = self.pending_debounce.take() {
                    previous.abort();
                }
                let tx = self.tx.clone();
                self.pending_debounce = Some(tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(Msg::DebounceElapsed(token));
                }));
            }
            Effect::Fetch(request) => {
                let source = Arc::clone(&self.source);
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let outcome = source.list(&request.query).await;
                    if tx.send(Msg::FetchSettled { request, outcome }).is_err() {
                        tracing::debug!("Fetch settled after the UI shut down");
                    }
                });
            }
        }
    }

    pub fn run_all(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.run(effect);
        }
    }
}

impl Drop for EffectRunner {
    fn drop(&mut self) {
        if let Some(handle) = self.pending_debounce.take() {
            handle.abort();
        }
    }
}
