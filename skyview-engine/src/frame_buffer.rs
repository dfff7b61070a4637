//! Fixed-capacity double buffer of packed `f32` frame records.
//!
//! Two equally sized halves alternate roles. The producer fills the back half
//! through [`FrameBuffer::write_slice`], then [`FrameBuffer::commit`] flips a
//! single role flag so the freshly written half becomes readable and the old
//! front half becomes the next write target. Nothing is copied or reallocated
//! after [`FrameBuffer::configure`].
//!
//! # Read-before-next-frame
//!
//! Read views ([`read_span`](FrameBuffer::read_span),
//! [`read_bytes`](FrameBuffer::read_bytes)) borrow the buffer, and `commit`
//! takes `&mut self`, so a view cannot be held across the next commit. A
//! consumer that needs the data for longer must copy it out.
//!
//! ```
//! use skyview_engine::FrameBuffer;
//!
//! let mut buffer = FrameBuffer::new();
//! buffer.configure(4, 2);
//!
//! buffer.write_slice()[..4].copy_from_slice(&[10.0, 20.0, 1.5, 42.0]);
//! buffer.commit(1);
//!
//! assert_eq!(buffer.read_span(), &[10.0, 20.0, 1.5, 42.0]);
//! ```

#[derive(Debug, Default)]
pub struct FrameBuffer {
    halves: [Vec<f32>; 2],
    front: usize,
    stride: usize,
    capacity: usize,
    count: usize,
}

impl FrameBuffer {
    /// An unconfigured buffer with zero capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates both halves with `stride * capacity` floats and resets the
    /// visible count.
    pub fn configure(&mut self, stride: usize, capacity: usize) {
        let len = stride * capacity;
        for half in &mut self.halves {
            half.clear();
            half.resize(len, 0.0);
        }
        self.front = 0;
        self.stride = stride;
        self.capacity = capacity;
        self.count = 0;
        log::debug!(
            "frame buffer configured: stride {}, capacity {} ({} bytes per half)",
            stride,
            capacity,
            len * std::mem::size_of::<f32>()
        );
    }

    /// The back half, not currently exposed to readers.
    pub fn write_slice(&mut self) -> &mut [f32] {
        &mut self.halves[1 - self.front]
    }

    /// Publishes the back half with `count` records and swaps roles.
    ///
    /// `count` is clamped to the capacity; the clamped value is returned.
    pub fn commit(&mut self, count: usize) -> usize {
        self.count = count.min(self.capacity);
        self.front = 1 - self.front;
        self.count
    }

    /// The entire front half, including stale data past [`count`](Self::count).
    pub fn read_slice(&self) -> &[f32] {
        &self.halves[self.front]
    }

    /// The committed records: `count * stride` floats.
    pub fn read_span(&self) -> &[f32] {
        &self.halves[self.front][..self.count * self.stride]
    }

    /// [`read_span`](Self::read_span) reinterpreted as native-endian bytes.
    pub fn read_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.read_span())
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size of the front half in bytes.
    pub fn byte_length(&self) -> usize {
        self.halves[self.front].len() * std::mem::size_of::<f32>()
    }
}
