//! Observable state cells.
//!
//! A [`MutableState`] is a shared, single-threaded value holder that notifies
//! its observers after every committed write. Cloning a `MutableState` clones
//! the handle, not the value: all clones observe and mutate the same cell.
//!
//! Observers are invoked after the new value has been stored and after every
//! internal borrow has been released, so an observer may freely read the cell
//! or write to it again.

use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Decides whether a write is a change worth notifying about.
pub trait MutationPolicy<T> {
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

/// Notifies only when the new value differs from the old one.
#[derive(Clone, Copy, Debug, Default)]
pub struct StructuralEqualityPolicy;

impl<T: PartialEq> MutationPolicy<T> for StructuralEqualityPolicy {
    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Treats every write as a change.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverEqual;

impl<T> MutationPolicy<T> for NeverEqual {
    fn equivalent(&self, _a: &T, _b: &T) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer<T> = Rc<dyn Fn(&T)>;

struct StateInner<T> {
    value: RefCell<Rc<T>>,
    policy: Box<dyn MutationPolicy<T>>,
    observers: RefCell<SmallVec<[(ObserverId, Observer<T>); 4]>>,
    next_observer: Cell<u64>,
}

impl<T> StateInner<T> {
    fn remove_observer(&self, id: ObserverId) {
        self.observers
            .borrow_mut()
            .retain(|(observer_id, _)| *observer_id != id);
    }

    fn notify(&self) {
        // Snapshot the list so observers can (un)subscribe while being notified.
        let observers: SmallVec<[Observer<T>; 4]> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        if observers.is_empty() {
            return;
        }
        let value = Rc::clone(&self.value.borrow());
        for observer in observers {
            observer(&*value);
        }
    }
}

/// Shared observable value holder.
pub struct MutableState<T: 'static> {
    inner: Rc<StateInner<T>>,
}

impl<T: 'static> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: PartialEq + 'static> MutableState<T> {
    /// Creates a cell that notifies only on structural changes.
    pub fn new(value: T) -> Self {
        Self::with_policy(value, StructuralEqualityPolicy)
    }
}

impl<T: 'static> MutableState<T> {
    /// Creates a cell that notifies on every write, even of an equal value.
    pub fn never_equal(value: T) -> Self {
        Self::with_policy(value, NeverEqual)
    }

    pub fn with_policy(value: T, policy: impl MutationPolicy<T> + 'static) -> Self {
        Self {
            inner: Rc::new(StateInner {
                value: RefCell::new(Rc::new(value)),
                policy: Box::new(policy),
                observers: RefCell::new(SmallVec::new()),
                next_observer: Cell::new(0),
            }),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&**self.inner.value.borrow())
    }

    /// Stores `value` and notifies observers if the policy considers it a change.
    ///
    /// Returns whether observers were notified.
    pub fn set(&self, value: T) -> bool {
        let changed = {
            let mut current = self.inner.value.borrow_mut();
            let changed = !self.inner.policy.equivalent(&**current, &value);
            *current = Rc::new(value);
            changed
        };
        if changed {
            self.inner.notify();
        }
        changed
    }

    /// Registers `observer`; it stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        let id = ObserverId(self.inner.next_observer.get());
        self.inner.next_observer.set(id.0 + 1);
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));

        let weak: Weak<StateInner<T>> = Rc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.remove_observer(id);
                }
            })),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    /// Returns true if both handles point at the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn get(&self) -> T {
        (**self.inner.value.borrow()).clone()
    }

    /// Mutates a copy of the current value and writes it back through [`set`].
    ///
    /// [`set`]: MutableState::set
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut next = self.get();
        f(&mut next);
        self.set(next)
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableState")
            .field("value", &**self.inner.value.borrow())
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// Keeps an observer registered for as long as it is alive.
#[must_use = "dropping a Subscription unregisters its observer"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Keeps the observer registered for the lifetime of the state cell.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }

    pub fn is_active(&self) -> bool {
        self.unsubscribe.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
