//! # LimbStorage
//! A growable array of limbs that keeps small payloads inline and shares large
//! payloads between clones until one of them is written to.
//!
//! The heap buffer is an `Rc<[Limb]>` whose length is the capacity; the
//! logical length lives next to it. Cloning a heap-resident store only bumps
//! the reference count. Every mutable access goes through [`LimbStorage::detach`],
//! which clones the buffer when it is shared.
//!
//! Buffers are always built completely before they replace the current one, so
//! a failed allocation leaves the store exactly as it was.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use log::debug;

use crate::big_num_constants::*;
use crate::big_num_error::BigIntError;

#[derive(Clone)]
enum Buffer {
    Inline([Limb; INLINE_CAPACITY]),
    Heap(Rc<[Limb]>),
}

#[derive(Clone)]
pub struct LimbStorage {
    len: usize,
    buf: Buffer,
}

// 构造
impl LimbStorage {
    pub fn new() -> Self {
        LimbStorage { len: 0, buf: Buffer::Inline([0; INLINE_CAPACITY]) }
    }

    /// An empty store able to take `capacity` limbs without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut storage = LimbStorage::new();
        if capacity > INLINE_CAPACITY {
            storage.reallocate(capacity);
        }
        storage
    }

    /// `count` copies of `fill`; heap buffers are allocated with exactly `count` slots.
    pub fn from_elem(count: usize, fill: Limb) -> Self {
        if count <= INLINE_CAPACITY {
            let mut data = [0; INLINE_CAPACITY];
            data[..count].fill(fill);
            LimbStorage { len: count, buf: Buffer::Inline(data) }
        } else {
            LimbStorage { len: count, buf: Buffer::Heap(Rc::from(vec![fill; count])) }
        }
    }

    pub fn from_slice(limbs: &[Limb]) -> Self {
        if limbs.len() <= INLINE_CAPACITY {
            let mut data = [0; INLINE_CAPACITY];
            data[..limbs.len()].copy_from_slice(limbs);
            LimbStorage { len: limbs.len(), buf: Buffer::Inline(data) }
        } else {
            LimbStorage { len: limbs.len(), buf: Buffer::Heap(Rc::from(limbs)) }
        }
    }
}

impl Default for LimbStorage {
    fn default() -> Self {
        LimbStorage::new()
    }
}

// 查询
impl LimbStorage {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        match &self.buf {
            Buffer::Inline(_) => INLINE_CAPACITY,
            Buffer::Heap(data) => data.len(),
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self.buf, Buffer::Inline(_))
    }

    /// Whether another store currently reads the same heap buffer.
    pub fn is_shared(&self) -> bool {
        match &self.buf {
            Buffer::Inline(_) => false,
            Buffer::Heap(data) => Rc::strong_count(data) > 1,
        }
    }

    pub fn as_slice(&self) -> &[Limb] {
        match &self.buf {
            Buffer::Inline(data) => &data[..self.len],
            Buffer::Heap(data) => &data[..self.len],
        }
    }

    /// Mutable view of the stored limbs. Detaches from any shared buffer first.
    pub fn as_mut_slice(&mut self) -> &mut [Limb] {
        let len = self.len;
        &mut self.buffer_mut()[..len]
    }
}

// 修改
impl LimbStorage {
    /// Gives this store exclusive ownership of its heap buffer, cloning it
    /// (same capacity) if other stores still refer to it.
    pub fn detach(&mut self) {
        if let Buffer::Heap(data) = &mut self.buf {
            if Rc::get_mut(data).is_none() {
                let owned: Rc<[Limb]> = Rc::from(&data[..]);
                *data = owned;
            }
        }
    }

    pub fn push(&mut self, value: Limb) {
        if self.len == self.capacity() {
            // a grown buffer is never shared, so this doubles as the detach
            let grown = self.capacity().saturating_mul(2).max(1);
            self.reallocate(grown);
        } else {
            self.detach();
        }
        let len = self.len;
        self.buffer_mut()[len] = value;
        self.len += 1;
    }

    /// Removes the last limb, moving back into inline storage once the
    /// remaining limbs fit there.
    pub fn pop(&mut self) -> Option<Limb> {
        let last = *self.as_slice().last()?;
        self.len -= 1;
        if !self.is_inline() && self.len <= INLINE_CAPACITY {
            debug!("limb storage shrank to {} limbs, moving back inline", self.len);
            self.reallocate(INLINE_CAPACITY);
        } else {
            self.detach();
        }
        Some(last)
    }

    /// Makes room for at least `additional` more limbs.
    ///
    /// # Panics
    /// Panics if the new capacity cannot be allocated; see [`LimbStorage::try_reserve`].
    pub fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            panic!("cannot reserve {} more limbs: {}", additional, err);
        }
    }

    /// Fallible [`LimbStorage::reserve`]. On error the store is left untouched.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), BigIntError> {
        let needed = self.len.checked_add(additional).ok_or(BigIntError::ResourceExhausted)?;
        if needed > self.capacity() {
            self.buf = self.build(needed)?;
        }
        Ok(())
    }

    pub fn shrink_to_fit(&mut self) {
        if self.is_inline() {
            return;
        }
        if self.len <= INLINE_CAPACITY {
            self.reallocate(INLINE_CAPACITY);
        } else if self.len < self.capacity() {
            self.reallocate(self.len);
        }
    }

    pub fn swap(&mut self, other: &mut LimbStorage) {
        std::mem::swap(self, other);
    }

    fn buffer_mut(&mut self) -> &mut [Limb] {
        self.detach();
        match &mut self.buf {
            Buffer::Inline(data) => &mut data[..],
            Buffer::Heap(data) => match Rc::get_mut(data) {
                Some(data) => data,
                None => unreachable!("heap buffer is uniquely owned after detach"),
            },
        }
    }

    fn reallocate(&mut self, capacity: usize) {
        match self.build(capacity) {
            Ok(buf) => {
                if self.is_inline() && matches!(buf, Buffer::Heap(_)) {
                    debug!("limb storage spilled to the heap with capacity {}", capacity);
                }
                self.buf = buf;
            }
            Err(err) => panic!("cannot grow limb storage to {} limbs: {}", capacity, err),
        }
    }

    /// A new exclusively owned buffer holding the current limbs.
    fn build(&self, capacity: usize) -> Result<Buffer, BigIntError> {
        debug_assert!(capacity >= self.len);
        if capacity <= INLINE_CAPACITY {
            let mut data = [0; INLINE_CAPACITY];
            data[..self.len].copy_from_slice(self.as_slice());
            return Ok(Buffer::Inline(data));
        }
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        data.extend_from_slice(self.as_slice());
        data.resize(capacity, 0);
        Ok(Buffer::Heap(Rc::from(data)))
    }
}

impl Deref for LimbStorage {
    type Target = [Limb];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl DerefMut for LimbStorage {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl PartialEq for LimbStorage {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl Eq for LimbStorage {}

impl Hash for LimbStorage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for LimbStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heap_sized() -> LimbStorage {
        let limbs: Vec<Limb> = (1..=(INLINE_CAPACITY as Limb + 3)).collect();
        LimbStorage::from_slice(&limbs)
    }

    #[test]
    fn small_stays_inline() {
        let mut s = LimbStorage::from_elem(INLINE_CAPACITY, 7);
        assert!(s.is_inline());
        assert_eq!(s.capacity(), INLINE_CAPACITY);
        s[0] = 1;
        assert_eq!(s[0], 1);
        assert_eq!(s[INLINE_CAPACITY - 1], 7);
    }

    #[test]
    fn push_spills_and_doubles() {
        let mut s = LimbStorage::new();
        for i in 0..INLINE_CAPACITY as Limb {
            s.push(i);
        }
        assert!(s.is_inline());
        s.push(100);
        assert!(!s.is_inline());
        assert_eq!(s.capacity(), INLINE_CAPACITY * 2);
        assert_eq!(s.len(), INLINE_CAPACITY + 1);
        assert_eq!(*s.last().unwrap(), 100);
    }

    #[test]
    fn clone_shares_until_write() {
        let a = heap_sized();
        let mut b = a.clone();
        assert!(a.is_shared());
        assert!(b.is_shared());
        b[0] = 42;
        assert!(!a.is_shared());
        assert!(!b.is_shared());
        assert_eq!(a[0], 1);
        assert_eq!(b[0], 42);
        assert_eq!(a.capacity(), b.capacity());
    }

    #[test]
    fn push_on_shared_full_buffer_copies_once() {
        let a = heap_sized();
        let mut b = a.clone();
        b.push(9);
        assert!(!a.is_shared());
        assert_eq!(a.len() + 1, b.len());
        assert_eq!(&b[..a.len()], a.as_slice());
    }

    #[test]
    fn inline_clone_is_independent() {
        let a = LimbStorage::from_slice(&[1, 2]);
        let mut b = a.clone();
        b[1] = 5;
        assert_eq!(a.as_slice(), &[1, 2]);
        assert_eq!(b.as_slice(), &[1, 5]);
    }

    #[test]
    fn pop_moves_back_inline() {
        let mut s = LimbStorage::from_elem(INLINE_CAPACITY + 1, 3);
        assert!(!s.is_inline());
        assert_eq!(s.pop(), Some(3));
        assert!(s.is_inline());
        assert_eq!(s.len(), INLINE_CAPACITY);
        while s.pop().is_some() {}
        assert!(s.is_empty());
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn pop_on_shared_detaches() {
        let a = heap_sized();
        let mut b = a.clone();
        b.pop();
        assert!(!a.is_shared());
        assert_eq!(a.len(), b.len() + 1);
    }

    #[test]
    fn reserve_and_shrink() {
        let mut s = LimbStorage::from_slice(&[1, 2]);
        s.reserve(INLINE_CAPACITY * 4);
        assert!(!s.is_inline());
        assert!(s.capacity() >= INLINE_CAPACITY * 4 + 2);
        assert_eq!(s.as_slice(), &[1, 2]);
        s.shrink_to_fit();
        assert!(s.is_inline());
        assert_eq!(s.as_slice(), &[1, 2]);

        let mut big = heap_sized();
        big.reserve(10);
        big.shrink_to_fit();
        assert_eq!(big.capacity(), big.len());
    }

    #[test]
    fn reserve_and_shrink_on_shared_detach() {
        let a = heap_sized();
        let mut b = a.clone();
        b.reserve(10);
        assert!(!a.is_shared());
        assert!(!b.is_shared());
        assert_eq!(a.capacity(), a.len());
        assert_eq!(a.as_slice(), b.as_slice());

        let mut c = b.clone();
        assert!(b.is_shared());
        c.shrink_to_fit();
        assert!(!b.is_shared());
        assert!(b.capacity() >= b.len() + 10);
        assert_eq!(c.capacity(), c.len());
        assert_eq!(b.as_slice(), a.as_slice());
        assert_eq!(c.as_slice(), a.as_slice());

        // capacity already matches: the buffer stays shared
        let mut d = a.clone();
        d.shrink_to_fit();
        d.reserve(0);
        assert!(a.is_shared());
        assert_eq!(d, a);
    }

    #[test]
    fn failed_reserve_leaves_store_unchanged() {
        let mut s = heap_sized();
        let before = s.clone();
        assert_eq!(s.try_reserve(usize::MAX), Err(BigIntError::ResourceExhausted));
        assert_eq!(s.try_reserve(usize::MAX / 8), Err(BigIntError::ResourceExhausted));
        assert_eq!(s, before);
        assert_eq!(s.capacity(), before.capacity());
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a = LimbStorage::from_slice(&[1]);
        let mut b = heap_sized();
        let b_len = b.len();
        a.swap(&mut b);
        assert_eq!(a.len(), b_len);
        assert_eq!(b.as_slice(), &[1]);
        assert!(b.is_inline());
    }
}
