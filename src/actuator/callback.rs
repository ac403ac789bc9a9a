//! Completion handler slot.

/// Notification run once when a move reaches its target.
///
/// Implemented for every `FnMut()`, so plain `fn()` pointers, closures, and
/// (with `alloc`) `Box<dyn FnMut()>` all fit the single handler slot.
pub trait OnFinished {
    /// Called synchronously from `tick`, after the actuator is idle again.
    fn on_finished(&mut self);
}

impl<F: FnMut()> OnFinished for F {
    fn on_finished(&mut self) {
        self()
    }
}

/// Heap-allocated handler for when the closure type cannot be named.
#[cfg(feature = "alloc")]
pub type BoxedHandler = alloc::boxed::Box<dyn FnMut()>;
