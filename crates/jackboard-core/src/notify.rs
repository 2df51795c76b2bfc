//! Change notification for applied moves.
//!
//! Listeners are channel senders. Delivery happens after a move has fully
//! landed, so a receiver always observes a consistent board, and a receiver
//! cannot re-enter the board from inside the send.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::debug;

use crate::chess_move::Move;

/// Property tag carried by every move event.
pub const SOLUTION_PROPERTY: &str = "solution";

/// A property-change style event: `property` went from `old_value` to `new_value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEvent {
    pub property: &'static str,
    pub old_value: Option<Move>,
    pub new_value: Move,
}

impl BoardEvent {
    /// Event for a move that was just applied.
    pub fn move_applied(mv: Move) -> BoardEvent {
        BoardEvent {
            property: SOLUTION_PROPERTY,
            old_value: None,
            new_value: mv,
        }
    }
}

/// Handle returned on registration, used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Registered listeners, in registration order.
#[derive(Debug, Default)]
pub struct Listeners {
    next_id: u64,
    senders: Vec<(ListenerId, Sender<BoardEvent>)>,
}

impl Listeners {
    pub fn new() -> Listeners {
        Listeners::default()
    }

    /// Register a sender to receive every future event.
    pub fn add_listener(&mut self, sender: Sender<BoardEvent>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.senders.push((id, sender));
        id
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.senders.len();
        self.senders.retain(|(listener, _)| *listener != id);
        self.senders.len() != before
    }

    /// Create a channel, register its sender, and hand back the receiver.
    pub fn subscribe(&mut self) -> (ListenerId, Receiver<BoardEvent>) {
        let (tx, rx) = mpsc::channel();
        (self.add_listener(tx), rx)
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    /// Return `true` if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }

    /// Send `event` to every listener, dropping those whose receiver is gone.
    pub(crate) fn fire(&mut self, event: &BoardEvent) {
        self.senders.retain(|(id, sender)| {
            if sender.send(event.clone()).is_err() {
                debug!(listener = ?id, "listener disconnected, removing");
                return false;
            }
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn sample_move() -> Move {
        Move::step(Position::new(2, 5), Position::new(1, 4))
    }

    #[test]
    fn subscribers_receive_events_in_order() {
        let mut listeners = Listeners::new();
        let (_, rx) = listeners.subscribe();
        listeners.fire(&BoardEvent::move_applied(sample_move()));
        let event = rx.try_recv().unwrap();
        assert_eq!(event.property, SOLUTION_PROPERTY);
        assert_eq!(event.old_value, None);
        assert_eq!(event.new_value, sample_move());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn removed_listener_gets_nothing() {
        let mut listeners = Listeners::new();
        let (id, rx) = listeners.subscribe();
        assert!(listeners.remove_listener(id));
        assert!(!listeners.remove_listener(id));
        listeners.fire(&BoardEvent::move_applied(sample_move()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dropped_receiver_is_pruned() {
        let mut listeners = Listeners::new();
        let (_, rx) = listeners.subscribe();
        let (_, keep) = listeners.subscribe();
        drop(rx);
        assert_eq!(listeners.len(), 2);
        listeners.fire(&BoardEvent::move_applied(sample_move()));
        assert_eq!(listeners.len(), 1);
        assert!(keep.try_recv().is_ok());
    }

    #[test]
    fn empty_until_subscribed() {
        let mut listeners = Listeners::new();
        assert!(listeners.is_empty());
        let (id, _rx) = listeners.subscribe();
        assert!(!listeners.is_empty());
        listeners.remove_listener(id);
        assert!(listeners.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let mut listeners = Listeners::new();
        let (a, _ra) = listeners.subscribe();
        let (b, _rb) = listeners.subscribe();
        assert_ne!(a, b);
    }
}
