//! Shared row-major element buffer.
//!
//! A [`Storage`] is a window `(offset, len, stride)` into a reference-counted
//! `Vec<T>`. Constructors allocate a fresh buffer; [`Storage::window`] shares
//! the buffer, which is how vector slices and diagonal views alias their
//! origin. `Clone` always copies the window into a new contiguous buffer.
//!
//! Borrows of the inner `RefCell` never outlive a single method call, so two
//! windows over the same buffer can be read and written in any order.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

pub(crate) struct Storage<T> {
    buf: Rc<RefCell<Vec<T>>>,
    offset: usize,
    len: usize,
    stride: usize,
    cap: usize,
    view: bool,
}

impl<T: Copy> Storage<T> {
    /// Take ownership of `data` as a new contiguous buffer.
    pub(crate) fn from_vec(data: Vec<T>) -> Self {
        let len = data.len();
        Self {
            buf: Rc::new(RefCell::new(data)),
            offset: 0,
            len,
            stride: 1,
            cap: len,
            view: false,
        }
    }

    /// Number of elements visible through this window.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Elements reachable from the window start in the underlying buffer.
    ///
    /// Equal to `len` for strided windows.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// Whether another window shares this buffer.
    #[inline]
    pub(crate) fn is_shared(&self) -> bool {
        Rc::strong_count(&self.buf) > 1
    }

    /// Whether this window was cut from another storage.
    #[inline]
    pub(crate) fn is_view(&self) -> bool {
        self.view
    }

    #[inline]
    fn pos(&self, i: usize) -> usize {
        assert!(
            i < self.len,
            "storage index {} out of range for length {}",
            i,
            self.len
        );
        self.offset + i * self.stride
    }

    #[inline]
    pub(crate) fn get(&self, i: usize) -> T {
        let p = self.pos(i);
        self.buf.borrow()[p]
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, value: T) {
        let p = self.pos(i);
        self.buf.borrow_mut()[p] = value;
    }

    /// Overwrite the whole window from `data`.
    pub(crate) fn write_all(&mut self, data: &[T]) {
        assert_eq!(data.len(), self.len, "storage length mismatch");
        let mut buf = self.buf.borrow_mut();
        for (i, &x) in data.iter().enumerate() {
            buf[self.offset + i * self.stride] = x;
        }
    }

    /// Copy the window out in order.
    pub(crate) fn to_vec(&self) -> Vec<T> {
        let buf = self.buf.borrow();
        (0..self.len)
            .map(|i| buf[self.offset + i * self.stride])
            .collect()
    }

    /// A window of `len` elements starting at window index `start`, taking
    /// every `step`-th element. Shares the buffer.
    pub(crate) fn window(&self, start: usize, len: usize, step: usize) -> Self {
        debug_assert!(step > 0);
        debug_assert!(len == 0 || start + (len - 1) * step < self.len);
        let cap = if step == 1 && self.stride == 1 {
            self.cap - start
        } else {
            len
        };
        Self {
            buf: Rc::clone(&self.buf),
            offset: self.offset + start * self.stride,
            len,
            stride: self.stride * step,
            cap,
            view: true,
        }
    }
}

impl<T: Copy> Clone for Storage<T> {
    fn clone(&self) -> Self {
        Self::from_vec(self.to_vec())
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Storage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn get_set() {
        let mut s = Storage::from_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.get(1), 2.0);
        s.set(1, 5.0);
        assert_eq!(s.to_vec(), vec![1.0, 5.0, 3.0]);
    }

    #[test]
    fn window_aliases() {
        let mut s = Storage::from_vec(vec![1, 2, 3, 4, 5]);
        let mut w = s.window(1, 3, 1);
        assert_eq!(w.to_vec(), vec![2, 3, 4]);
        assert_eq!(w.capacity(), 4);
        assert!(s.is_shared());

        s.set(2, 30);
        assert_eq!(w.get(1), 30);
        w.set(0, 20);
        assert_eq!(s.get(1), 20);
    }

    #[test]
    fn strided_window() {
        // 3x3 row-major, diagonal at stride 4
        let s = Storage::from_vec((1..=9).collect::<Vec<i32>>());
        let d = s.window(0, 3, 4);
        assert_eq!(d.to_vec(), vec![1, 5, 9]);
        assert_eq!(d.capacity(), 3);

        // column 1
        let c = s.window(1, 3, 3);
        assert_eq!(c.to_vec(), vec![2, 5, 8]);
        let inner = c.window(1, 2, 1);
        assert_eq!(inner.to_vec(), vec![5, 8]);
    }

    #[test]
    fn clone_is_deep() {
        let s = Storage::from_vec(vec![1, 2, 3]);
        let mut c = s.clone();
        c.set(0, 100);
        assert_eq!(s.get(0), 1);
        assert!(!s.is_shared());

        let w = s.window(1, 0, 1);
        assert!(w.is_view());
        assert!(!w.clone().is_view());
        assert!(!s.is_view());
    }

    #[test]
    fn write_all_strided() {
        let s = Storage::from_vec(vec![0; 6]);
        let mut col = s.window(1, 3, 2);
        col.write_all(&[7, 8, 9]);
        assert_eq!(s.to_vec(), vec![0, 7, 0, 8, 0, 9]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_out_of_range() {
        let s = Storage::from_vec(vec![1, 2]);
        let _ = s.get(2);
    }
}
