//! Pooled Scratch Buffers
//!
//! Line content is accumulated into a scratch `String` before being frozen
//! into an owned [`WrappedLine`](crate::line::WrappedLine). The pool keeps
//! those allocations alive across wrap calls; a [`Scratch`] guard hands its
//! cleared buffer back on drop, so release happens on every exit path.

use std::sync::Mutex;

/// Retained buffer cap; beyond this, returned buffers are dropped.
const MAX_POOLED: usize = 8;

/// A concurrency-safe pool of reusable `String` buffers.
pub(crate) struct ScratchPool {
    buffers: Mutex<Vec<String>>,
}

impl ScratchPool {
    pub(crate) const fn new() -> Self {
        Self {
            buffers: Mutex::new(Vec::new()),
        }
    }

    /// Borrow a buffer from the pool, allocating a fresh one when empty.
    pub(crate) fn acquire(&self) -> Scratch<'_> {
        let buf = self
            .buffers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop()
            .unwrap_or_default();
        Scratch {
            pool: self,
            buf: Some(buf),
        }
    }
}

/// The pool shared by all wrap invocations.
static LINE_POOL: ScratchPool = ScratchPool::new();

pub(crate) fn line_pool() -> &'static ScratchPool {
    &LINE_POOL
}

/// A scratch buffer on loan from a [`ScratchPool`].
pub(crate) struct Scratch<'a> {
    pool: &'a ScratchPool,
    buf: Option<String>,
}

impl Scratch<'_> {
    fn buf(&mut self) -> &mut String {
        // The Option is only vacated in Drop.
        self.buf.as_mut().expect("scratch buffer in use")
    }

    pub(crate) fn push(&mut self, ch: char) {
        self.buf().push(ch);
    }

    /// Snapshot the accumulated content as a fresh owned `String` and clear
    /// the scratch for the next line.
    pub(crate) fn freeze(&mut self) -> String {
        let buf = self.buf();
        let frozen = buf.clone();
        buf.clear();
        frozen
    }
}

impl Drop for Scratch<'_> {
    fn drop(&mut self) {
        if let Some(mut buf) = self.buf.take() {
            buf.clear();
            let mut buffers = self
                .pool
                .buffers
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if buffers.len() < MAX_POOLED {
                buffers.push(buf);
            }
        }
    }
}
