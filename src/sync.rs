//! Lock shim shared by deck state and the class-wide value tables.
//!
//! Under `std` this wraps [`std::sync::Mutex`] and ignores poisoning; under
//! `alloc` it is [`spin::Mutex`]. Both expose `const fn new` and an
//! infallible `lock`.

#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
pub type MutexGuard<'a, T> = std::sync::MutexGuard<'a, T>;

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::{Mutex, MutexGuard};
