use std::{fmt, ops::Deref, ops::Range, sync::Arc};

/// Immutable bin contents: a window onto shared storage.
///
/// Cloning and slicing share the allocation; nothing can write through a
/// `Contents`, so sharing is never observable.
pub struct Contents<T> {
    storage: Arc<[T]>,
    offset: usize,
    len: usize,
}

impl<T> Contents<T> {
    /// Sub-window `range` of this window, without copying.
    ///
    /// Callers check `range` against `len()`.
    pub(crate) fn window(&self, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end && range.end <= self.len);
        Self {
            storage: self.storage.clone(),
            offset: self.offset + range.start,
            len: range.end - range.start,
        }
    }

    /// Whether two windows view the same allocation
    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }
}

impl<T> Deref for Contents<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.storage[self.offset..self.offset + self.len]
    }
}

impl<T> Clone for Contents<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            offset: self.offset,
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for Contents<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: fmt::Debug> fmt::Debug for Contents<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> From<Arc<[T]>> for Contents<T> {
    fn from(storage: Arc<[T]>) -> Self {
        let len = storage.len();
        Self {
            storage,
            offset: 0,
            len,
        }
    }
}

impl<T> From<Vec<T>> for Contents<T> {
    fn from(contents: Vec<T>) -> Self {
        Arc::<[T]>::from(contents).into()
    }
}

impl<T> From<Box<[T]>> for Contents<T> {
    fn from(contents: Box<[T]>) -> Self {
        Arc::<[T]>::from(contents).into()
    }
}

impl<T: Clone> From<&[T]> for Contents<T> {
    fn from(contents: &[T]) -> Self {
        Arc::<[T]>::from(contents).into()
    }
}

impl<T> FromIterator<T> for Contents<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Arc<[T]>>().into()
    }
}
