//! Selection delivery
//!
//! The engine only pushes `SelectionEvent`s into an unbounded channel, so
//! emission never waits on the consumer. `spawn_selection_handler` runs the
//! consumer's callback on its own task.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::item::Item;

/// A settled index change
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent<T> {
    pub index: usize,
    pub item: Item<T>,
}

impl<T> SelectionEvent<T> {
    pub fn new(index: usize, item: Item<T>) -> Self {
        Self { index, item }
    }
}

/// Create the channel an engine emits on
pub fn selection_channel<T>() -> (
    mpsc::UnboundedSender<SelectionEvent<T>>,
    mpsc::UnboundedReceiver<SelectionEvent<T>>,
) {
    mpsc::unbounded_channel()
}

/// Call `on_selected(item, index)` for every event until the engine is dropped
pub fn spawn_selection_handler<T, F>(
    mut rx: mpsc::UnboundedReceiver<SelectionEvent<T>>,
    mut on_selected: F,
) -> JoinHandle<()>
where
    T: Send + 'static,
    F: FnMut(&Item<T>, usize) + Send + 'static,
{
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            debug!(index = event.index, label = %event.item.label, "Delivering selection");
            on_selected(&event.item, event.index);
        }
        debug!("Selection channel closed");
    })
}
