use crate::domain::ports::{LineSink, Publisher, Subscriber};
use crate::utils::error::{KioskError, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Ordered subscriber list.
///
/// Mutation takes `&mut self`; callers sharing one across threads must guard
/// attach, detach and notify with a single lock.
#[derive(Default)]
pub struct Notifier {
    subscribers: Vec<Arc<dyn Subscriber>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.subscribers.iter().map(|s| s.label()).collect()
    }
}

// Compares data addresses only; vtable pointers for the same type may differ
// between codegen units.
fn same_subscriber(a: &Arc<dyn Subscriber>, b: &Arc<dyn Subscriber>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

impl Publisher for Notifier {
    fn attach(&mut self, subscriber: Arc<dyn Subscriber>) {
        tracing::debug!(
            "Attaching subscriber '{}' at position {}",
            subscriber.label(),
            self.subscribers.len()
        );
        self.subscribers.push(subscriber);
    }

    fn detach(&mut self, subscriber: &Arc<dyn Subscriber>) -> bool {
        match self
            .subscribers
            .iter()
            .position(|s| same_subscriber(s, subscriber))
        {
            Some(index) => {
                self.subscribers.remove(index);
                tracing::debug!("Detached subscriber '{}'", subscriber.label());
                true
            }
            None => {
                tracing::debug!(
                    "Subscriber '{}' was not attached, nothing to detach",
                    subscriber.label()
                );
                false
            }
        }
    }

    fn notify_all(&self) -> Result<()> {
        tracing::debug!("Notifying {} subscriber(s)", self.subscribers.len());
        for subscriber in &self.subscribers {
            subscriber.on_notify().map_err(|e| {
                tracing::warn!(
                    "Subscriber '{}' failed, aborting remaining notifications: {}",
                    subscriber.label(),
                    e
                );
                match e {
                    KioskError::SubscriberFailed { .. } => e,
                    other => KioskError::SubscriberFailed {
                        subscriber: subscriber.label().to_string(),
                        message: other.to_string(),
                    },
                }
            })?;
        }
        Ok(())
    }
}

/// Publisher side of the kiosk scenario: owns the product catalog revision
/// and broadcasts every change.
pub struct AdminSystem {
    notifier: Notifier,
    sink: Arc<dyn LineSink>,
    revision: u64,
}

impl AdminSystem {
    pub fn new(sink: Arc<dyn LineSink>) -> Self {
        Self {
            notifier: Notifier::new(),
            sink,
            revision: 0,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscriber_count(&self) -> usize {
        self.notifier.len()
    }

    /// Records a product change, then notifies every attached kiosk.
    pub fn update_product_info(&mut self) -> Result<()> {
        self.revision += 1;
        tracing::info!("Product catalog advanced to revision {}", self.revision);
        self.sink.emit("Product information updated.")?;
        self.notify_all()
    }
}

impl Publisher for AdminSystem {
    fn attach(&mut self, subscriber: Arc<dyn Subscriber>) {
        self.notifier.attach(subscriber);
    }

    fn detach(&mut self, subscriber: &Arc<dyn Subscriber>) -> bool {
        self.notifier.detach(subscriber)
    }

    fn notify_all(&self) -> Result<()> {
        self.notifier.notify_all()
    }
}

pub struct Kiosk {
    name: String,
    sink: Arc<dyn LineSink>,
    received: AtomicU64,
}

impl Kiosk {
    pub fn new(name: impl Into<String>, sink: Arc<dyn LineSink>) -> Self {
        Self {
            name: name.into(),
            sink,
            received: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn received(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }
}

impl Subscriber for Kiosk {
    fn label(&self) -> &str {
        &self.name
    }

    fn on_notify(&self) -> Result<()> {
        self.sink.emit(&format!("{} received product update.", self.name))?;
        self.received.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
