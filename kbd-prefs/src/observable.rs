//! Observable values with dirty tracking and scoped subscriptions
//!
//! UI code reads an [`Observable`] once per render pass and either polls
//! [`Observable::read_if_dirty`] on a timer or registers a change callback
//! with [`Observable::subscribe`]. Callbacks run synchronously on the thread
//! that called [`Observable::set`], after the new value is visible to
//! readers, and never while an internal lock is held. A callback that sets
//! the value again supersedes the outer notification: the remaining
//! subscribers only hear about the newer value, so the last value every
//! subscriber sees is the current one.
//!
//! Every subscription is owned by a [`Subscription`] handle. Dropping the
//! handle releases the callback, so a torn-down screen can never be notified.
//! [`SubscriptionSet`] groups the handles of one screen.

use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Subscribers<T> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

struct Inner<T> {
    value: RwLock<T>,
    dirty: AtomicBool,
    /// Bumped under the value lock on every change
    version: AtomicU64,
    subscribers: Mutex<Subscribers<T>>,
}

/// Shared, change-notifying value
///
/// Cloning an `Observable` yields another handle to the same value.
pub struct Observable<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Observable<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(initial),
                dirty: AtomicBool::new(false),
                version: AtomicU64::new(0),
                subscribers: Mutex::new(Subscribers {
                    next_id: 0,
                    entries: Vec::new(),
                }),
            }),
        }
    }

    /// Read the current value
    pub fn get(&self) -> T {
        self.inner.value.read().clone()
    }

    /// Store a new value, mark dirty and notify subscribers
    ///
    /// Returns `false` without notifying anyone when `value` equals the
    /// current value.
    pub fn set(&self, value: T) -> bool {
        match self.replace(value.clone()) {
            Some(version) => {
                self.notify(version, &value);
                true
            }
            None => false,
        }
    }

    /// Store `value` and mark dirty without notifying
    ///
    /// Returns the version to pass to [`Observable::notify`], or `None` when
    /// the value did not change.
    pub(crate) fn replace(&self, value: T) -> Option<u64> {
        let mut current = self.inner.value.write();
        if *current == value {
            return None;
        }
        *current = value;
        let version = self.inner.version.fetch_add(1, Ordering::AcqRel) + 1;
        self.inner.dirty.store(true, Ordering::Release);
        Some(version)
    }

    /// Deliver `value` to every subscriber while it is still current
    ///
    /// Stops as soon as a newer change has been stored; that change
    /// notifies on its own.
    pub(crate) fn notify(&self, version: u64, value: &T) {
        // Snapshot so callbacks may subscribe, unsubscribe or set re-entrantly
        let callbacks: Vec<Callback<T>> = self
            .inner
            .subscribers
            .lock()
            .entries
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for cb in callbacks {
            if self.inner.version.load(Ordering::Acquire) != version {
                break;
            }
            cb(value);
        }
    }

    /// Read value if dirty, clearing dirty flag
    pub fn read_if_dirty(&self) -> Option<T> {
        if self.inner.dirty.swap(false, Ordering::AcqRel) {
            Some(self.get())
        } else {
            None
        }
    }

    /// Check if dirty without consuming
    pub fn is_dirty(&self) -> bool {
        self.inner.dirty.load(Ordering::Acquire)
    }

    /// Register `callback` for every future change
    ///
    /// The callback stays registered until the returned handle is dropped
    /// or released.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = {
            let mut subs = self.inner.subscribers.lock();
            let id = subs.next_id;
            subs.next_id += 1;
            subs.entries.push((id, Arc::new(callback)));
            id
        };

        let weak: Weak<Inner<T>> = Arc::downgrade(&self.inner);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.subscribers.lock().entries.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().entries.len()
    }
}

impl<T> fmt::Debug for Observable<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*self.inner.value.read())
            .field("dirty", &self.inner.dirty.load(Ordering::Relaxed))
            .finish()
    }
}

/// Handle to a registered callback; dropping it unsubscribes
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Unsubscribe now
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_inner();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Owns the subscriptions of one screen
///
/// Clearing or dropping the set releases every handle in it.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Release all held subscriptions
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}
