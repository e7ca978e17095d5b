use std::sync::atomic::{AtomicUsize, Ordering};

/// An atomic counter with a defined minimum and maximum value.
///
/// Incrementing at the maximum wraps the value to the minimum, and
/// decrementing at the minimum wraps it to the maximum. Both bounds are
/// inclusive and part of the cycle.
///
/// Every value handed out by [`fetch_inc`] and [`fetch_dec`] is within
/// `[min, max]`; the wrapped successor is computed before publication, so
/// no out-of-range value is ever observable, even mid-wrap.
///
/// [`fetch_inc`]: CyclicCounter::fetch_inc
/// [`fetch_dec`]: CyclicCounter::fetch_dec
pub struct CyclicCounter {
    value: AtomicUsize,
    min: usize,
    max: usize,
}

impl CyclicCounter {
    /// Creates a counter cycling within `[min, max]`, starting at `min`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn new(min: usize, max: usize) -> Self {
        assert!(min <= max, "cyclic counter bounds inverted: {min} > {max}");
        CyclicCounter {
            value: AtomicUsize::new(min),
            min,
            max,
        }
    }

    /// Returns the current value and advances it by one, wrapping the
    /// maximum to the minimum.
    pub fn fetch_inc(&self) -> usize {
        let mut current = self.value.load(Ordering::Relaxed);
        loop {
            let next = if current >= self.max {
                self.min
            } else {
                current + 1
            };
            match self.value.compare_exchange_weak(
                current,
                next,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(previous) => return previous,
                Err(observed) => current = observed,
            }
        }
    }

    /// Returns the current value and moves it back by one, wrapping the
    /// minimum to the maximum.
    pub fn fetch_dec(&self) -> usize {
        let mut current = self.value.load(Ordering::Relaxed);
        loop {
            let next = if current <= self.min {
                self.max
            } else {
                current - 1
            };
            match self.value.compare_exchange_weak(
                current,
                next,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(previous) => return previous,
                Err(observed) => current = observed,
            }
        }
    }

    /// Returns the current value.
    pub fn load(&self) -> usize {
        self.value.load(Ordering::Acquire)
    }
}
