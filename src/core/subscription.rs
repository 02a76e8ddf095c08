//! Ownership of browser subscriptions
//!
//! Observers, window listeners and timers are each held by a [`DisposeGuard`]
//! owned by the component that created them. The guard releases its resource
//! exactly once: explicitly, when replaced, or when dropped.

/// A subscription that can be torn down
pub trait Release {
    fn release(self);
}

/// An observer that can stop reporting a single target
pub trait Unobserve<T> {
    fn unobserve(&self, target: &T);
}

/// Holds at most one live subscription
#[derive(Debug)]
pub struct DisposeGuard<R: Release> {
    resource: Option<R>,
}

impl<R: Release> DisposeGuard<R> {
    pub fn new(resource: R) -> Self {
        Self {
            resource: Some(resource),
        }
    }

    pub fn empty() -> Self {
        Self { resource: None }
    }

    pub fn is_active(&self) -> bool {
        self.resource.is_some()
    }

    /// Install a subscription for `target` once it exists.
    ///
    /// Returns `Ok(false)` without calling `install` while the target is
    /// detached. A previously held subscription is released first.
    pub fn attach<T, E>(
        &mut self,
        target: Option<T>,
        install: impl FnOnce(T) -> Result<R, E>,
    ) -> Result<bool, E> {
        let Some(target) = target else {
            return Ok(false);
        };

        let resource = install(target)?;
        self.replace(resource);
        Ok(true)
    }

    /// Hold `resource`, releasing the previous one
    pub fn replace(&mut self, resource: R) {
        self.release();
        self.resource = Some(resource);
    }

    /// Release the held subscription; `true` only for the call that released it
    pub fn release(&mut self) -> bool {
        match self.resource.take() {
            Some(resource) => {
                resource.release();
                true
            }
            None => false,
        }
    }
}

impl<R: Release> Default for DisposeGuard<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R: Release> Drop for DisposeGuard<R> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Periodic callback that finishes once `tick` returns `false`
#[derive(Debug)]
pub struct Ticker<F> {
    tick: F,
    done: bool,
}

impl<F: FnMut() -> bool> Ticker<F> {
    pub fn new(tick: F) -> Self {
        Self { tick, done: false }
    }

    /// Run one period. Returns `true` only on the period that finished;
    /// `tick` is never called again after that.
    pub fn fire(&mut self) -> bool {
        if self.done {
            return false;
        }
        if !(self.tick)() {
            self.done = true;
            return true;
        }
        false
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}
