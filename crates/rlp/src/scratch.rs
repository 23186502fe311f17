//! Scratch buffers for list payloads.
//!
//! A list header can only be written once its payload length is known, so every list level
//! encodes its children into a scratch buffer first. One [`ScratchPool`] serves a whole
//! top-level encode; buffers go back to it when their [`Scratch`] guard drops, which also
//! covers early returns on error.

use crate::Result;
use std::{
    cell::{Cell, RefCell},
    ops::{Deref, DerefMut},
};

/// A pool of reusable scratch buffers.
#[derive(Debug, Default)]
pub struct ScratchPool {
    idle: RefCell<Vec<Vec<u8>>>,
    allocated: Cell<usize>,
    min_capacity: usize,
}

impl ScratchPool {
    /// Creates an empty pool whose buffers reserve at least `min_capacity` bytes.
    pub const fn new(min_capacity: usize) -> Self {
        Self { idle: RefCell::new(Vec::new()), allocated: Cell::new(0), min_capacity }
    }

    /// Takes an empty buffer out of the pool, allocating one if none is idle.
    pub fn acquire(&self) -> Result<Scratch<'_>> {
        let mut buf = match self.idle.borrow_mut().pop() {
            Some(buf) => buf,
            None => {
                self.allocated.set(self.allocated.get() + 1);
                Vec::new()
            }
        };
        buf.clear();
        let reserved = buf.try_reserve(self.min_capacity);
        let scratch = Scratch { pool: self, buf };
        reserved?;
        Ok(scratch)
    }

    /// Returns the number of buffers this pool has created.
    pub fn allocated(&self) -> usize {
        self.allocated.get()
    }

    /// Returns the number of buffers currently waiting in the pool.
    pub fn idle(&self) -> usize {
        self.idle.borrow().len()
    }

    fn release(&self, buf: Vec<u8>) {
        self.idle.borrow_mut().push(buf);
    }
}

/// A buffer borrowed from a [`ScratchPool`], returned to it on drop.
#[derive(Debug)]
pub struct Scratch<'p> {
    pool: &'p ScratchPool,
    buf: Vec<u8>,
}

impl Deref for Scratch<'_> {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl DerefMut for Scratch<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl Drop for Scratch<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buf));
    }
}
