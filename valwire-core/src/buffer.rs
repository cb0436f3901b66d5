//! Reusable scratch buffers for encoding.
//!
//! The pool hands out one buffer per concurrent caller through a lock-free
//! queue. Buffers come back automatically: [`PooledBuffer`] is an RAII
//! guard that clears and returns its buffer on drop, so release happens on
//! every exit path, success or error.

use crossbeam_queue::ArrayQueue;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Default byte capacity of a pooled scratch buffer.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Pool of reusable scratch buffers.
///
/// Handles are cheap to clone and share the same underlying queue. When
/// the pool runs dry, [`BufferPool::acquire`] allocates a fresh buffer
/// instead of blocking, so a buffer is never handed to two callers at
/// once and acquisition always succeeds.
pub struct BufferPool {
    buffers: Arc<ArrayQueue<Vec<u8>>>,
    capacity: usize,
    buffer_capacity: usize,
}

impl BufferPool {
    /// Creates a pool holding up to `capacity` buffers of
    /// [`DEFAULT_BUFFER_CAPACITY`] bytes each.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_buffer_capacity(capacity, DEFAULT_BUFFER_CAPACITY)
    }

    /// Creates a pool holding up to `capacity` buffers pre-allocated at
    /// `buffer_capacity` bytes each.
    #[must_use]
    pub fn with_buffer_capacity(capacity: usize, buffer_capacity: usize) -> Self {
        let buffers = ArrayQueue::new(capacity);
        for _ in 0..capacity {
            let _ = buffers.push(Vec::with_capacity(buffer_capacity));
        }
        Self {
            buffers: Arc::new(buffers),
            capacity,
            buffer_capacity,
        }
    }

    /// Acquires a scratch buffer, allocating a fresh one if the pool is
    /// empty.
    ///
    /// The returned guard clears and returns the buffer to the pool when
    /// dropped.
    #[must_use]
    pub fn acquire(&self) -> PooledBuffer {
        let buf = self
            .buffers
            .pop()
            .unwrap_or_else(|| Vec::with_capacity(self.buffer_capacity));
        PooledBuffer {
            queue: Arc::clone(&self.buffers),
            buf: Some(buf),
        }
    }

    /// Returns the maximum number of buffers the pool retains.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of buffers currently available in the pool.
    #[must_use]
    pub fn available(&self) -> usize {
        self.buffers.len()
    }
}

impl Clone for BufferPool {
    fn clone(&self) -> Self {
        Self {
            buffers: Arc::clone(&self.buffers),
            capacity: self.capacity,
            buffer_capacity: self.buffer_capacity,
        }
    }
}

impl std::fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferPool")
            .field("capacity", &self.capacity)
            .field("available", &self.buffers.len())
            .finish()
    }
}

/// Scratch buffer on loan from a [`BufferPool`].
///
/// Dereferences to `Vec<u8>`, so it can be passed directly to
/// [`crate::encoder::encode_into`]. On drop the buffer is cleared and
/// pushed back to the pool; if the pool is already full, it is simply
/// freed.
pub struct PooledBuffer {
    queue: Arc<ArrayQueue<Vec<u8>>>,
    buf: Option<Vec<u8>>,
}

impl PooledBuffer {
    /// Takes the buffer out of the guard, keeping it permanently.
    ///
    /// The buffer does not return to the pool.
    #[must_use]
    pub fn detach(mut self) -> Vec<u8> {
        self.buf.take().unwrap_or_default()
    }
}

impl Deref for PooledBuffer {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        self.buf.as_ref().expect("buffer present until drop or detach")
    }
}

impl DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        self.buf.as_mut().expect("buffer present until drop or detach")
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        if let Some(mut buf) = self.buf.take() {
            buf.clear();
            let _ = self.queue.push(buf);
        }
    }
}

impl std::fmt::Debug for PooledBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledBuffer")
            .field("len", &self.buf.as_ref().map_or(0, Vec::len))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_and_release() {
        let pool = BufferPool::new(4);
        assert_eq!(pool.capacity(), 4);
        assert_eq!(pool.available(), 4);

        let buf1 = pool.acquire();
        assert_eq!(pool.available(), 3);

        let buf2 = pool.acquire();
        assert_eq!(pool.available(), 2);

        drop(buf1);
        assert_eq!(pool.available(), 3);

        drop(buf2);
        assert_eq!(pool.available(), 4);
    }

    #[test]
    fn test_empty_pool_still_hands_out_buffers() {
        let pool = BufferPool::new(1);
        let buf1 = pool.acquire();
        assert_eq!(pool.available(), 0);

        // Pool is dry; this one is freshly allocated.
        let buf2 = pool.acquire();
        assert!(buf2.capacity() >= DEFAULT_BUFFER_CAPACITY);

        drop(buf1);
        drop(buf2);
        // Only one slot, the surplus buffer was dropped.
        assert_eq!(pool.available(), 1);
    }

    #[test]
    fn test_released_buffer_is_cleared_but_keeps_capacity() {
        let pool = BufferPool::with_buffer_capacity(1, 16);
        {
            let mut buf = pool.acquire();
            buf.extend_from_slice(&[1, 2, 3, 4]);
        }
        let buf = pool.acquire();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 16);
    }

    #[test]
    fn test_detach_keeps_buffer_out_of_pool() {
        let pool = BufferPool::new(2);
        let mut buf = pool.acquire();
        buf.push(0xAA);
        let owned = buf.detach();
        assert_eq!(owned, vec![0xAA]);
        assert_eq!(pool.available(), 1);
    }

    #[test]
    fn test_cloned_handles_share_buffers() {
        let pool1 = BufferPool::new(2);
        let pool2 = pool1.clone();

        let buf = pool1.acquire();
        assert_eq!(pool1.available(), 1);
        assert_eq!(pool2.available(), 1);

        drop(buf);
        assert_eq!(pool2.available(), 2);
    }

    #[test]
    fn test_failed_encode_does_not_leak_buffer() {
        use crate::encoder::encode_into;
        use crate::value::{MAX_STRING_LEN, Value};

        let pool = BufferPool::new(2);
        {
            let mut buf = pool.acquire();
            let oversize = [Value::String(vec![0u8; MAX_STRING_LEN + 1])];
            assert!(encode_into(&oversize, &mut buf).is_err());
        }
        assert_eq!(pool.available(), 2);
    }

    #[test]
    fn test_debug_output() {
        let pool = BufferPool::new(3);
        let text = format!("{pool:?}");
        assert!(text.contains("BufferPool"));
        assert!(text.contains("3"));
    }
}
