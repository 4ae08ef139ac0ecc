// Copyright 2025 the Rampart Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// A generic, FIFO notification channel.
///
/// The bus wraps an unbounded `flume` channel. Publication never blocks, and
/// subscribers observe events in exactly the order they were published,
/// which is the ordering guarantee the window adapter relies on when it
/// drains its message queue.
#[derive(Debug)]
pub struct EventBus<T: Clone + Send + Sync + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> EventBus<T> {
    /// Creates a new bus with an unbounded channel for a specific event type.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self { sender, receiver }
    }

    /// Publishes an event, logging an error if every receiver is gone.
    ///
    /// A disconnected subscriber is not fatal to the publisher; the event is
    /// dropped and the pump keeps running.
    pub fn publish(&self, event: T) {
        if let Err(err) = self.sender.send(event) {
            log::error!("Failed to publish event: {err}. Receiver likely disconnected.");
        }
    }

    /// Returns a clone of the sender end of the channel.
    pub fn sender(&self) -> flume::Sender<T> {
        self.sender.clone()
    }

    /// Returns a reference to the receiver end of the channel.
    ///
    /// Clone it to hand a subscription to another component; all clones see
    /// the same queue.
    pub fn receiver(&self) -> &flume::Receiver<T> {
        &self.receiver
    }
}

impl<T: Clone + Send + Sync + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flume::TryRecvError;

    #[derive(Debug, Clone, PartialEq)]
    enum WindowNotification {
        SizeChanged { width: u32, height: u32 },
        CloseRequested,
    }

    #[test]
    fn publish_preserves_fifo_order() {
        let bus = EventBus::new();
        bus.publish(WindowNotification::SizeChanged {
            width: 640,
            height: 480,
        });
        bus.publish(WindowNotification::SizeChanged {
            width: 800,
            height: 600,
        });
        bus.publish(WindowNotification::CloseRequested);

        let received: Vec<_> = bus.receiver().try_iter().collect();
        assert_eq!(
            received,
            vec![
                WindowNotification::SizeChanged {
                    width: 640,
                    height: 480
                },
                WindowNotification::SizeChanged {
                    width: 800,
                    height: 600
                },
                WindowNotification::CloseRequested,
            ]
        );
    }

    #[test]
    fn empty_bus_reports_empty() {
        let bus = EventBus::<WindowNotification>::new();
        assert_eq!(bus.receiver().try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn publish_after_receiver_drop_does_not_panic() {
        let bus = EventBus::new();
        let sender = bus.sender();
        drop(bus);

        // The bus logs and drops the event; publishing through a detached
        // sender surfaces the error to the caller instead.
        assert!(sender.send(WindowNotification::CloseRequested).is_err());
    }

    #[test]
    fn cloned_receivers_share_one_queue() {
        let bus = EventBus::new();
        let other = bus.receiver().clone();
        bus.publish(WindowNotification::CloseRequested);

        assert_eq!(other.try_recv(), Ok(WindowNotification::CloseRequested));
        assert_eq!(bus.receiver().try_recv(), Err(TryRecvError::Empty));
    }
}
