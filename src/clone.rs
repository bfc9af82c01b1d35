//! Copying with element copies that may fail.
//!
//! `Clone` cannot report failure, so element types whose copy can fail
//! implement [`TryClone`] instead. Every copying operation here builds its
//! result before touching the list; on error the list is exactly as it was
//! and the element's error is returned unchanged.

use std::convert::Infallible;

use crate::{ConstPosition, ForwardList, Position};

/// A copy that can fail.
pub trait TryClone: Sized {
    /// Error reported when a copy fails.
    type Error;

    /// Returns a copy of `self`, or the reason it could not be made.
    fn try_clone(&self) -> Result<Self, Self::Error>;
}

macro_rules! impl_try_clone_infallible {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryClone for $ty {
                type Error = Infallible;

                #[inline]
                fn try_clone(&self) -> Result<Self, Infallible> {
                    Ok(self.clone())
                }
            }
        )*
    };
}

impl_try_clone_infallible!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String,
);

impl<T: TryClone> TryClone for ForwardList<T> {
    type Error = T::Error;

    /// Copies every element into a new list. The partial copy is dropped if
    /// any element fails.
    fn try_clone(&self) -> Result<Self, T::Error> {
        self.iter().map(TryClone::try_clone).collect()
    }
}

impl<T: TryClone> ForwardList<T> {
    /// Replaces the contents with a copy of `source`.
    ///
    /// The copy is built first and swapped in; if any element fails to
    /// copy, `self` is left unchanged.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), T::Error> {
        let mut copy = source.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }

    /// Pushes a copy of `value` to the front. Nothing is linked if the copy
    /// fails.
    pub fn try_push_front_cloned(&mut self, value: &T) -> Result<(), T::Error> {
        let value = value.try_clone()?;
        self.push_front(value);
        Ok(())
    }

    /// Pushes a copy of `value` to the back. Nothing is linked if the copy
    /// fails.
    pub fn try_push_back_cloned(&mut self, value: &T) -> Result<(), T::Error> {
        let value = value.try_clone()?;
        self.push_back(value);
        Ok(())
    }

    /// Inserts a copy of `value` after `pos`. Nothing is linked if the copy
    /// fails.
    ///
    /// # Panics
    ///
    /// Same as [`insert_after`](Self::insert_after).
    pub fn try_insert_after_cloned(
        &mut self,
        pos: impl Into<ConstPosition>,
        value: &T,
    ) -> Result<Position, T::Error> {
        let value = value.try_clone()?;
        Ok(self.insert_after(pos, value))
    }
}
