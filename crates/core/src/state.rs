//! Container/item stores and the fit values derived from them.

use crate::config::Config;
use crate::dimension::Dimension;
use crate::fit::{fit_ratio, total_fit, FitRatio};
use crate::store::{Store, SubscriptionId};
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// All current values of a [`FitState`] at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitSnapshot {
    /// Container dimensions.
    pub container: Dimension,
    /// Item dimensions.
    pub item: Dimension,
    /// Repeat flag.
    pub repeat: bool,
    /// Per-axis fit ratio.
    pub fit: FitRatio,
    /// Whole-item total.
    pub total_fit: i64,
}

/// Owns the container, item and repeat stores plus the derived fit stores.
///
/// Every setter recomputes `fit` and then `total_fit` before any subscriber
/// runs, and notifies inputs, then `fit`, then `total_fit`. A subscriber
/// therefore never sees a derived value older than the input that triggered
/// it. Setters notify even when the new value equals the old one.
///
/// ```rust
/// use boxfit_core::{Dimension, FitState};
///
/// let mut state = FitState::new();
/// assert_eq!(state.total_fit(), 6);
///
/// state.set_item(Dimension::new(20.0, 20.0, 20.0));
/// assert_eq!(state.total_fit(), 6 * 3 * 2);
/// ```
#[derive(Debug)]
pub struct FitState {
    config: Config,
    container: Store<Dimension>,
    item: Store<Dimension>,
    repeat: Store<bool>,
    fit: Store<FitRatio>,
    total_fit: Store<i64>,
}

impl FitState {
    /// Creates a state with the default container, item and repeat flag.
    pub fn new() -> Self {
        Self::build(Config::default())
    }

    /// Creates a state from `config`, validating its defaults first.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        let fit = fit_ratio(&config.container, &config.item);
        let total = total_fit(&fit);

        Self {
            container: Store::new(config.container),
            item: Store::new(config.item),
            repeat: Store::new(config.repeat),
            fit: Store::new(fit),
            total_fit: Store::new(total),
            config,
        }
    }

    /// Returns the configuration this state was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the container dimensions.
    pub fn container(&self) -> Dimension {
        *self.container.get()
    }

    /// Returns the item dimensions.
    pub fn item(&self) -> Dimension {
        *self.item.get()
    }

    /// Returns the repeat flag.
    pub fn repeat(&self) -> bool {
        *self.repeat.get()
    }

    /// Returns the per-axis fit ratio.
    pub fn fit(&self) -> FitRatio {
        *self.fit.get()
    }

    /// Returns the number of whole items that fit.
    pub fn total_fit(&self) -> i64 {
        *self.total_fit.get()
    }

    /// Returns every current value.
    pub fn snapshot(&self) -> FitSnapshot {
        FitSnapshot {
            container: self.container(),
            item: self.item(),
            repeat: self.repeat(),
            fit: self.fit(),
            total_fit: self.total_fit(),
        }
    }

    /// Replaces the container dimensions. Any value is accepted.
    pub fn set_container(&mut self, container: Dimension) {
        self.container.replace(container);
        self.recompute();
        self.container.notify();
        self.notify_derived();
    }

    /// Replaces the item dimensions. Any value is accepted.
    pub fn set_item(&mut self, item: Dimension) {
        self.item.replace(item);
        self.recompute();
        self.item.notify();
        self.notify_derived();
    }

    /// Replaces the repeat flag. The fit values do not depend on it.
    pub fn set_repeat(&mut self, repeat: bool) {
        self.repeat.replace(repeat);
        self.repeat.notify();
    }

    /// Sets the container to `f(current)`.
    pub fn update_container<F>(&mut self, f: F)
    where
        F: FnOnce(Dimension) -> Dimension,
    {
        let next = f(self.container());
        self.set_container(next);
    }

    /// Sets the item to `f(current)`.
    pub fn update_item<F>(&mut self, f: F)
    where
        F: FnOnce(Dimension) -> Dimension,
    {
        let next = f(self.item());
        self.set_item(next);
    }

    /// Flips the repeat flag and returns the new value.
    pub fn toggle_repeat(&mut self) -> bool {
        let next = !self.repeat();
        self.set_repeat(next);
        next
    }

    /// Like [`set_container`](Self::set_container), but rejects invalid extents
    /// when the config enables validation. On error nothing changes.
    pub fn try_set_container(&mut self, container: Dimension) -> Result<()> {
        self.check("container", &container)?;
        self.set_container(container);
        Ok(())
    }

    /// Like [`set_item`](Self::set_item), but rejects invalid extents when the
    /// config enables validation. On error nothing changes.
    pub fn try_set_item(&mut self, item: Dimension) -> Result<()> {
        self.check("item", &item)?;
        self.set_item(item);
        Ok(())
    }

    /// Subscribes to container changes. `callback` runs immediately.
    pub fn subscribe_container<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Dimension) + 'static,
    {
        self.container.subscribe(callback)
    }

    /// Subscribes to item changes. `callback` runs immediately.
    pub fn subscribe_item<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Dimension) + 'static,
    {
        self.item.subscribe(callback)
    }

    /// Subscribes to repeat flag changes. `callback` runs immediately.
    pub fn subscribe_repeat<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&bool) + 'static,
    {
        self.repeat.subscribe(callback)
    }

    /// Subscribes to fit ratio changes. `callback` runs immediately.
    pub fn subscribe_fit<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&FitRatio) + 'static,
    {
        self.fit.subscribe(callback)
    }

    /// Subscribes to total fit changes. `callback` runs immediately.
    pub fn subscribe_total_fit<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&i64) + 'static,
    {
        self.total_fit.subscribe(callback)
    }

    /// Removes a subscription from whichever store holds it.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.container.unsubscribe(id)
            || self.item.unsubscribe(id)
            || self.repeat.unsubscribe(id)
            || self.fit.unsubscribe(id)
            || self.total_fit.unsubscribe(id)
    }

    fn check(&self, which: &str, dim: &Dimension) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }
        dim.validate().map_err(|e| {
            log::warn!("Rejected {} {:?}: {}", which, dim, e);
            e
        })
    }

    fn recompute(&mut self) {
        let fit = fit_ratio(self.container.get(), self.item.get());
        let total = total_fit(&fit);

        log::debug!(
            "Recomputed fit: container={:?} item={:?} fit={:?} total={}",
            self.container.get(),
            self.item.get(),
            fit,
            total
        );

        self.fit.replace(fit);
        self.total_fit.replace(total);
    }

    fn notify_derived(&mut self) {
        self.fit.notify();
        self.total_fit.notify();
    }
}

impl Default for FitState {
    fn default() -> Self {
        Self::new()
    }
}
