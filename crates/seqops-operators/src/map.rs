//! Projection operators: select, select_many, cast, of_type.

use std::any::type_name;
use std::fmt;
use std::iter::{FlatMap, Map};
use std::marker::PhantomData;

use seqops_core::{Error, Result};

use crate::seq::Seq;

/// Converts every element with `TryFrom`; a failed conversion yields
/// `Err(ConversionFailure)` at that position and iteration continues.
pub struct Cast<I, U> {
    iter: I,
    _target: PhantomData<fn() -> U>,
}

impl<I: Clone, U> Clone for Cast<I, U> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            _target: PhantomData,
        }
    }
}

impl<I: fmt::Debug, U> fmt::Debug for Cast<I, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cast")
            .field("iter", &self.iter)
            .field("target", &type_name::<U>())
            .finish()
    }
}

impl<I, U> Iterator for Cast<I, U>
where
    I: Iterator,
    U: TryFrom<I::Item>,
    U::Error: Into<Error>,
{
    type Item = Result<U>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        Some(U::try_from(item).map_err(Into::into))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Keeps only elements that convert to `U`; the rest are skipped silently.
pub struct OfType<I, U> {
    iter: I,
    _target: PhantomData<fn() -> U>,
}

impl<I: Clone, U> Clone for OfType<I, U> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            _target: PhantomData,
        }
    }
}

impl<I: fmt::Debug, U> fmt::Debug for OfType<I, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OfType")
            .field("iter", &self.iter)
            .field("target", &type_name::<U>())
            .finish()
    }
}

impl<I, U> Iterator for OfType<I, U>
where
    I: Iterator,
    U: TryFrom<I::Item>,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.iter.by_ref().find_map(|item| U::try_from(item).ok())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I: Iterator> Seq<I> {
    /// 1:1 projection.
    pub fn select<B, F>(self, projection: F) -> Seq<Map<I, F>>
    where
        F: FnMut(I::Item) -> B,
    {
        self.then(|iter| iter.map(projection))
    }

    /// Flatten one sub-sequence per element, outer then inner order.
    pub fn select_many<J, F>(self, projection: F) -> Seq<FlatMap<I, J, F>>
    where
        J: IntoIterator,
        F: FnMut(I::Item) -> J,
    {
        self.then(|iter| iter.flat_map(projection))
    }

    /// Convert each element to `U`. Collect into `Result<Vec<U>>` to stop at
    /// the first failure.
    pub fn cast<U>(self) -> Seq<Cast<I, U>>
    where
        U: TryFrom<I::Item>,
        U::Error: Into<Error>,
    {
        self.then(|iter| Cast {
            iter,
            _target: PhantomData,
        })
    }

    pub fn of_type<U>(self) -> Seq<OfType<I, U>>
    where
        U: TryFrom<I::Item>,
    {
        self.then(|iter| OfType {
            iter,
            _target: PhantomData,
        })
    }
}
