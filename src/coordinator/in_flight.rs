use tokio::task::JoinHandle;

/// A single slot for outstanding work. Starting new work aborts whatever
/// occupied the slot, and only the latest generation is ever accepted.
#[derive(Debug, Default)]
pub struct InFlight {
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersedes any outstanding work and returns the new generation.
    pub fn begin(&mut self) -> u64 {
        self.cancel();
        self.generation
    }

    pub fn attach(&mut self, handle: JoinHandle<()>) {
        if let Some(previous) = self.handle.replace(handle) {
            previous.abort();
        }
    }

    /// Returns whether something was outstanding. Safe to call at any time.
    pub fn cancel(&mut self) -> bool {
        self.generation += 1;

        match self.handle.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Accepts a completion only if it belongs to the outstanding generation.
    pub fn settle(&mut self, generation: u64) -> bool {
        if self.handle.is_some() && generation == self.generation {
            self.handle = None;
            return true;
        }

        false
    }

    pub fn is_outstanding(&self) -> bool {
        self.handle.is_some()
    }
}
