//! Total-order providers.
//!
//! Every ordering, min/max, and comparer-based containment call takes a
//! `Comparer` explicitly; the natural order of the type is just one provider.

use std::cmp::Ordering;
use std::marker::PhantomData;

pub trait Comparer<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The type's own `Ord`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparer<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders elements by a derived key. The selector runs on every comparison;
/// use `order_by_key` when the key is expensive.
pub struct ByKey<F, K> {
    selector: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    pub fn new(selector: F) -> Self {
        Self {
            selector,
            _key: PhantomData,
        }
    }
}

impl<T, K, F> Comparer<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.selector)(a).cmp(&(self.selector)(b))
    }
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
