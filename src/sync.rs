//! Single-writer/single-reader handoff for sensor adapters.
//!
//! The core polls its collaborators from one cooperative context, so no
//! locking happens inside the core itself. Adapters that capture data in
//! another context (interrupt handler, simulator callback) publish into a
//! [`Fresh`] cell and the board implementation drains it from the control
//! cycle.

/// Latest-value cell with a fresh flag.
///
/// `publish` overwrites the stored value and marks it fresh; `take` returns
/// the value only if it has not been taken before, which gives the
/// at-most-once-per-cycle semantics the [`crate::hw_abstraction::Board`]
/// polls require. `peek` reads without consuming freshness.
#[derive(Debug)]
pub struct Fresh<T> {
    value: Option<T>,
    fresh: bool,
}

impl<T> Default for Fresh<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Fresh<T> {
    pub const fn new() -> Self {
        Fresh {
            value: None,
            fresh: false,
        }
    }

    /// Store a new sample and mark it fresh, replacing any previous one.
    pub fn publish(&mut self, value: T) {
        self.value = Some(value);
        self.fresh = true;
    }

    /// Consume the fresh flag, returning the sample if it was fresh.
    pub fn take(&mut self) -> Option<T>
    where
        T: Copy,
    {
        if self.fresh {
            self.fresh = false;
            self.value
        } else {
            None
        }
    }

    /// Latest sample regardless of freshness.
    pub fn peek(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_fresh(&self) -> bool {
        self.fresh
    }
}
