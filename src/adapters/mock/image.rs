//! Scripted image source for testing.
//!
//! Replays a queue of predefined capture outcomes so tests can exercise
//! the analyze flow without a platform picker.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::traits::{CaptureOutcome, ImageSource};

/// Image source that replays scripted outcomes in order.
///
/// When the script runs dry, further picks report cancellation.
///
/// # Example
///
/// ```ignore
/// use moodify::adapters::mock::ScriptedImageSource;
/// use moodify::traits::{CaptureOutcome, ImageSource};
///
/// let source = ScriptedImageSource::new();
/// source.push(CaptureOutcome::Cancelled);
///
/// assert_eq!(source.pick().await, CaptureOutcome::Cancelled);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedImageSource {
    outcomes: Arc<Mutex<VecDeque<CaptureOutcome>>>,
    /// Number of pick() calls made, for assertions.
    pick_count: Arc<Mutex<usize>>,
}

impl ScriptedImageSource {
    /// Create an empty scripted source.
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            pick_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue an outcome for a future pick.
    pub fn push(&self, outcome: CaptureOutcome) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// Number of times the picker was opened.
    pub fn pick_count(&self) -> usize {
        *self.pick_count.lock().unwrap()
    }
}

impl Default for ScriptedImageSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageSource for ScriptedImageSource {
    async fn pick(&self) -> CaptureOutcome {
        *self.pick_count.lock().unwrap() += 1;
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(CaptureOutcome::Cancelled)
    }
}
