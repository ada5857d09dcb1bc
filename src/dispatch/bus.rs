//! Pre-dispatch notification bus.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::channel::types::Channel;
use crate::common::types::ParticipantId;

/// Cancellable pre-dispatch notification for one outgoing message.
///
/// Carries the sender, the raw text, the candidate recipient set (observers
/// may mutate it) and the resolved channel. Lives only for the duration of
/// one dispatch call.
#[derive(Debug, Clone)]
pub struct ChatNotification {
    sender: ParticipantId,
    text: String,
    recipients: Vec<ParticipantId>,
    channel: Channel,
    cancelled: bool,
}

impl ChatNotification {
    pub(crate) fn new(
        sender: ParticipantId,
        text: String,
        recipients: Vec<ParticipantId>,
        channel: Channel,
    ) -> Self {
        Self {
            sender,
            text,
            recipients,
            channel,
            cancelled: false,
        }
    }

    pub fn sender(&self) -> &ParticipantId {
        &self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The resolved channel the message will fan out over.
    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn recipients(&self) -> &[ParticipantId] {
        &self.recipients
    }

    /// Candidate recipient set; observers may add or remove entries.
    pub fn recipients_mut(&mut self) -> &mut Vec<ParticipantId> {
        &mut self.recipients
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Mark the message cancelled; a cancelled dispatch delivers nothing.
    pub fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

/// A bus subscriber.
pub trait ChatObserver: Send + Sync {
    /// Observers are invoked in ascending priority order; later observers
    /// have the final say over recipients.
    fn priority(&self) -> i32 {
        0
    }

    fn on_chat(&self, notification: &mut ChatNotification);
}

/// Explicit ordered subscription list.
///
/// Publish invokes observers in ascending priority order (ties keep
/// subscription order) and checks the cancellation flag after each; once
/// the notification is cancelled, later observers are not invoked.
#[derive(Default)]
pub struct NotificationBus {
    observers: RwLock<Vec<Arc<dyn ChatObserver>>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer at its priority position.
    pub fn subscribe(&self, observer: Arc<dyn ChatObserver>) {
        let mut observers = self.observers.write();
        let index = observers
            .iter()
            .position(|existing| existing.priority() > observer.priority())
            .unwrap_or(observers.len());
        observers.insert(index, observer);
    }

    /// Publish a notification to all observers.
    pub fn publish(&self, notification: &mut ChatNotification) {
        let observers: Vec<Arc<dyn ChatObserver>> = self.observers.read().clone();
        for observer in observers {
            observer.on_chat(notification);
            if notification.is_cancelled() {
                break;
            }
        }
    }

    /// Number of subscribed observers.
    pub fn len(&self) -> usize {
        self.observers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn make_notification() -> ChatNotification {
        ChatNotification::new(
            ParticipantId::from("steve"),
            "hello".to_string(),
            vec![ParticipantId::from("steve"), ParticipantId::from("alex")],
            Channel::from_definition("general", None),
        )
    }

    struct Recorder {
        label: &'static str,
        priority: i32,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl ChatObserver for Recorder {
        fn priority(&self) -> i32 {
            self.priority
        }

        fn on_chat(&self, _notification: &mut ChatNotification) {
            self.log.lock().push(self.label);
        }
    }

    struct Canceller {
        priority: i32,
    }

    impl ChatObserver for Canceller {
        fn priority(&self) -> i32 {
            self.priority
        }

        fn on_chat(&self, notification: &mut ChatNotification) {
            notification.set_cancelled(true);
        }
    }

    #[test]
    fn test_observers_run_in_ascending_priority_order() {
        let bus = NotificationBus::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        bus.subscribe(Arc::new(Recorder { label: "late", priority: 10, log: log.clone() }));
        bus.subscribe(Arc::new(Recorder { label: "early", priority: -10, log: log.clone() }));
        bus.subscribe(Arc::new(Recorder { label: "normal", priority: 0, log: log.clone() }));

        bus.publish(&mut make_notification());

        assert_eq!(*log.lock(), vec!["early", "normal", "late"]);
    }

    #[test]
    fn test_equal_priority_keeps_subscription_order() {
        let bus = NotificationBus::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        bus.subscribe(Arc::new(Recorder { label: "first", priority: 0, log: log.clone() }));
        bus.subscribe(Arc::new(Recorder { label: "second", priority: 0, log: log.clone() }));

        bus.publish(&mut make_notification());

        assert_eq!(*log.lock(), vec!["first", "second"]);
    }

    #[test]
    fn test_cancellation_stops_later_observers() {
        let bus = NotificationBus::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        bus.subscribe(Arc::new(Canceller { priority: 0 }));
        bus.subscribe(Arc::new(Recorder { label: "after", priority: 10, log: log.clone() }));

        let mut notification = make_notification();
        bus.publish(&mut notification);

        assert!(notification.is_cancelled());
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_observer_may_mutate_recipients() {
        struct DropFirst;
        impl ChatObserver for DropFirst {
            fn on_chat(&self, notification: &mut ChatNotification) {
                notification.recipients_mut().remove(0);
            }
        }

        let bus = NotificationBus::new();
        bus.subscribe(Arc::new(DropFirst));

        let mut notification = make_notification();
        bus.publish(&mut notification);

        assert_eq!(notification.recipients(), &[ParticipantId::from("alex")]);
    }
}
