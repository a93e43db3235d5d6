use std::ops::Range;

use derive_getters::Dissolve;
use derive_more::Constructor;

/// Read-only, indexable sequence of symbols that can be aligned.
pub trait Alignable {
    /// The type of individual symbols being aligned.
    type Symbol;

    /// Returns true if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the length of the sequence.
    fn len(&self) -> usize;

    /// Returns the symbol at the given 0-based position.
    fn at(&self, pos: usize) -> &Self::Symbol;

    /// Returns a right-to-left view of the sequence.
    fn reversed(&self) -> Reversed<'_, Self>
    where
        Self: Sized,
    {
        Reversed::new(self)
    }

    /// Returns a view of the given subrange of the sequence.
    fn window(&self, range: Range<usize>) -> Window<'_, Self>
    where
        Self: Sized,
    {
        debug_assert!(range.start <= range.end && range.end <= self.len());
        Window::new(self, range)
    }
}

impl<T> Alignable for &[T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

/// Reverses the order of an alignable object without copying it.
#[derive(Dissolve, Constructor, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reversed<'a, T: Alignable> {
    base: &'a T,
}

impl<T: Alignable> Alignable for Reversed<'_, T> {
    type Symbol = T::Symbol;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.base.len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        self.base.at(self.base.len() - pos - 1)
    }
}

/// A contiguous subrange of an alignable object.
#[derive(Dissolve, Constructor, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Window<'a, T: Alignable> {
    base: &'a T,
    range: Range<usize>,
}

impl<T: Alignable> Alignable for Window<'_, T> {
    type Symbol = T::Symbol;

    #[inline(always)]
    fn len(&self) -> usize {
        self.range.end - self.range.start
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        debug_assert!(pos < self.len());
        self.base.at(self.range.start + pos)
    }
}
