//! TUI Events
//!
//! Terminal input is forwarded from a background listener task into an
//! unbounded channel that the main loop drains one event at a time.

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Events consumed by the shell's main loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// New terminal size in columns and rows
    Resize(u16, u16),
    /// Terminal input stream ended or failed
    InputClosed,
}

impl TuiEvent {
    fn from_terminal(event: Event) -> Option<Self> {
        match event {
            // Windows reports press and release; act on press only
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(Self::Key(key)),
            Event::Mouse(mouse) => Some(Self::Mouse(mouse)),
            Event::Resize(w, h) => Some(Self::Resize(w, h)),
            _ => None,
        }
    }
}

/// Owns the event channel
pub struct EventHandler {
    tx: mpsc::UnboundedSender<TuiEvent>,
    rx: mpsc::UnboundedReceiver<TuiEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<TuiEvent> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<TuiEvent> {
        self.rx.recv().await
    }

    pub fn try_next(&mut self) -> Option<TuiEvent> {
        self.rx.try_recv().ok()
    }

    /// Register the terminal listener. It stays registered until the
    /// returned guard is dropped.
    #[must_use = "dropping the guard unregisters the listener"]
    pub fn start_terminal_listener(sender: mpsc::UnboundedSender<TuiEvent>) -> ListenerGuard {
        Self::start_listener(crossterm::event::EventStream::new(), sender)
    }

    /// Forward any terminal event stream into `sender`
    pub fn start_listener<S>(stream: S, sender: mpsc::UnboundedSender<TuiEvent>) -> ListenerGuard
    where
        S: Stream<Item = std::io::Result<Event>> + Send + Unpin + 'static,
    {
        tracing::debug!("Registering terminal listener");
        let handle = tokio::spawn(forward(stream, sender));
        ListenerGuard { handle }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

async fn forward<S>(mut stream: S, sender: mpsc::UnboundedSender<TuiEvent>)
where
    S: Stream<Item = std::io::Result<Event>> + Unpin,
{
    while let Some(item) = stream.next().await {
        match item {
            Ok(event) => {
                if let Some(event) = TuiEvent::from_terminal(event)
                    && sender.send(event).is_err()
                {
                    // Main loop is gone
                    return;
                }
            }
            Err(e) => {
                tracing::error!("Terminal event stream error: {}", e);
                break;
            }
        }
    }
    let _ = sender.send(TuiEvent::InputClosed);
}

/// Registration of the terminal listener; dropping it stops the listener
pub struct ListenerGuard {
    handle: JoinHandle<()>,
}

impl ListenerGuard {
    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        tracing::debug!("Unregistering terminal listener");
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use futures::channel::mpsc as fmpsc;

    async fn wait_closed(tx: &fmpsc::UnboundedSender<std::io::Result<Event>>) -> bool {
        for _ in 0..100 {
            if tx.is_closed() {
                return true;
            }
            tokio::task::yield_now().await;
        }
        tx.is_closed()
    }

    #[tokio::test]
    async fn test_listener_forwards_resize() {
        let mut handler = EventHandler::new();
        let (tx, rx) = fmpsc::unbounded();
        let _guard = EventHandler::start_listener(rx, handler.sender());

        tx.unbounded_send(Ok(Event::Resize(100, 40))).unwrap();
        assert_eq!(handler.next().await, Some(TuiEvent::Resize(100, 40)));
    }

    #[tokio::test]
    async fn test_listener_ignores_key_release() {
        let mut handler = EventHandler::new();
        let (tx, rx) = fmpsc::unbounded();
        let _guard = EventHandler::start_listener(rx, handler.sender());

        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        tx.unbounded_send(Ok(Event::Key(release))).unwrap();
        tx.unbounded_send(Ok(Event::FocusGained)).unwrap();
        tx.unbounded_send(Ok(Event::Resize(10, 10))).unwrap();
        assert_eq!(handler.next().await, Some(TuiEvent::Resize(10, 10)));
    }

    #[tokio::test]
    async fn test_stream_end_reports_input_closed() {
        let mut handler = EventHandler::new();
        let (tx, rx) = fmpsc::unbounded();
        let _guard = EventHandler::start_listener(rx, handler.sender());
        drop(tx);
        assert_eq!(handler.next().await, Some(TuiEvent::InputClosed));
    }

    #[tokio::test]
    async fn test_drop_guard_unregisters_listener() {
        let handler = EventHandler::new();
        let (tx, rx) = fmpsc::unbounded();
        let guard = EventHandler::start_listener(rx, handler.sender());
        assert!(guard.is_active());
        assert!(!tx.is_closed());

        drop(guard);
        assert!(wait_closed(&tx).await);
    }

    #[tokio::test]
    async fn test_repeated_mount_unmount_does_not_leak() {
        let mut handler = EventHandler::new();
        for _ in 0..3 {
            let (tx, rx) = fmpsc::unbounded();
            let guard = EventHandler::start_listener(rx, handler.sender());
            tx.unbounded_send(Ok(Event::Resize(90, 30))).unwrap();
            assert_eq!(handler.next().await, Some(TuiEvent::Resize(90, 30)));
            drop(guard);
            assert!(wait_closed(&tx).await);
        }
        assert!(handler.try_next().is_none());
    }
}
