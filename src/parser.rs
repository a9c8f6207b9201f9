use crate::checksum::{crc16, crc16_with, crc8};
use crate::deserializer::PacketSink;
use crate::error::Error;
use crate::ring::RingBuffer;
use crate::{FRAME_HEADER_SIZE, FRAME_TAIL_SIZE, SOF};

/// Outcome of one attempt to lift a frame off the ring head.
enum FrameStep {
    /// Frame validated, dispatched and consumed.
    Done,
    /// Header or body failed validation; resync by dropping one byte.
    Rejected,
    /// Not enough bytes yet; leave everything buffered.
    Incomplete,
}

/// Streaming frame parser.
///
/// Ingests byte chunks of arbitrary size and alignment — junk, partial
/// frames and back-to-back frames in one chunk included — and writes each
/// validated payload into the sink slot registered for its cmd.
///
/// `RING` is the ring capacity (a power of two; `PacketSet::RING_SIZE` is
/// the intended choice) and `MAX_FRAME` the scratch size and frame
/// plausibility bound (`PacketSet::MAX_FRAME_SIZE`).
///
/// Per scan iteration:
///
/// ```text
/// +------+      +----------+      +------------------------------+
/// | SCAN | ---> | HAVE_SOF | ---> | DONE | REJECTED | INCOMPLETE |
/// +------+      +----------+      +------------------------------+
///   ^  ^                            |         |           |
///   |  +--- frame consumed ---------+    drop 1 byte     exit
///   +------------------------------------------+
/// ```
pub struct Parser<'a, D, const RING: usize, const MAX_FRAME: usize> {
    ring: RingBuffer<RING>,
    scratch: [u8; MAX_FRAME],
    sink: &'a mut D,
}

impl<'a, D: PacketSink, const RING: usize, const MAX_FRAME: usize>
    Parser<'a, D, RING, MAX_FRAME>
{
    pub fn new(sink: &'a mut D) -> Self {
        const {
            assert!(RING.is_power_of_two(), "ring capacity must be a power of two");
            assert!(RING > MAX_FRAME, "ring capacity must exceed the largest frame");
            assert!(MAX_FRAME >= FRAME_HEADER_SIZE + FRAME_TAIL_SIZE);
        }
        Self {
            ring: RingBuffer::new(),
            scratch: [0; MAX_FRAME],
            sink,
        }
    }

    /// Copies a chunk into the ring, then drains every complete frame.
    ///
    /// A chunk that does not fit is rejected atomically: no byte of it is
    /// stored.
    pub fn push_data(&mut self, data: &[u8]) -> Result<(), Error> {
        if !self.ring.write(data) {
            return Err(Error::BufferOverflow {
                needed: data.len(),
                available: self.ring.space(),
            });
        }
        self.try_parse_packets();
        Ok(())
    }

    /// Largest contiguous region a producer (e.g. a DMA transfer) may fill
    /// directly; commit with [`Self::advance_write`].
    pub fn writable_view(&mut self) -> &mut [u8] {
        self.ring.writable_view()
    }

    /// Commits `len` bytes written through [`Self::writable_view`], then
    /// drains every complete frame.
    pub fn advance_write(&mut self, len: usize) -> Result<(), Error> {
        if !self.ring.advance_write(len) {
            return Err(Error::BufferOverflow {
                needed: len,
                available: self.ring.space(),
            });
        }
        self.try_parse_packets();
        Ok(())
    }

    pub fn available_data(&self) -> usize {
        self.ring.available()
    }

    pub fn available_space(&self) -> usize {
        self.ring.space()
    }

    pub fn is_buffer_full(&self) -> bool {
        self.ring.is_full()
    }

    pub fn clear_buffer(&mut self) {
        self.ring.clear();
    }

    /// Drains as many complete frames as the buffered bytes allow.
    ///
    /// Junk ahead of a start byte is discarded silently. A frame that
    /// fails validation costs exactly one byte before the scan resumes, so
    /// a spurious 0xA5 inside corrupted data cannot stall progress. The
    /// bytes of an incomplete frame stay buffered for the next call. No
    /// condition here is an error to the caller.
    pub fn try_parse_packets(&mut self) {
        'scan: while self.ring.available() >= FRAME_HEADER_SIZE {
            let view = self.ring.readable_view();
            match view.iter().position(|&b| b == SOF) {
                // No start byte in this contiguous run: all junk. Any
                // wrapped remainder is scanned on the next pass.
                None => {
                    let junk = view.len();
                    self.ring.discard(junk);
                    continue 'scan;
                }
                // Bring the start byte to the ring head and re-enter.
                Some(junk) if junk > 0 => {
                    self.ring.discard(junk);
                    continue 'scan;
                }
                Some(_) => {}
            }

            match self.parse_frame() {
                FrameStep::Done => {}
                FrameStep::Rejected => {
                    self.ring.discard(1);
                }
                FrameStep::Incomplete => break 'scan,
            }
        }
    }

    /// Tries to lift one frame whose start byte sits at the ring head.
    fn parse_frame(&mut self) -> FrameStep {
        let view = self.ring.readable_view();

        // Header: straight from the view when contiguous, otherwise peeked
        // around the wrap into a stack buffer.
        let mut header_buf = [0u8; FRAME_HEADER_SIZE];
        let header: &[u8] = if view.len() >= FRAME_HEADER_SIZE {
            &view[..FRAME_HEADER_SIZE]
        } else {
            if !self.ring.peek(0, &mut header_buf) {
                return FrameStep::Incomplete;
            }
            &header_buf
        };

        if header[0] != SOF {
            return FrameStep::Rejected;
        }
        if crc8(&header[..6]) != header[6] {
            return FrameStep::Rejected;
        }

        let cmd = u16::from_le_bytes([header[1], header[2]]);
        let data_len = u16::from_le_bytes([header[3], header[4]]) as usize;

        // Longer than any registered frame: implausible.
        if data_len > MAX_FRAME - FRAME_HEADER_SIZE - FRAME_TAIL_SIZE {
            return FrameStep::Rejected;
        }

        let frame_len = FRAME_HEADER_SIZE + data_len + FRAME_TAIL_SIZE;
        if self.ring.available() < frame_len {
            return FrameStep::Incomplete;
        }

        // Whole-frame CRC16 over header + payload. Fast path: one pass
        // over the contiguous view. Slow path: the frame wraps, so finish
        // the checksum over the tail peeked into the scratch buffer.
        let covered = FRAME_HEADER_SIZE + data_len;
        let computed = if view.len() >= covered {
            crc16(&view[..covered])
        } else {
            let seed = crc16(view);
            let wrapped = covered - view.len();
            if !self.ring.peek(view.len(), &mut self.scratch[..wrapped]) {
                return FrameStep::Incomplete;
            }
            crc16_with(seed, &self.scratch[..wrapped])
        };

        let mut tail = [0u8; FRAME_TAIL_SIZE];
        if !self.ring.peek(covered, &mut tail) {
            return FrameStep::Incomplete;
        }
        if u16::from_le_bytes(tail) != computed {
            return FrameStep::Rejected;
        }

        // Frame verified: hand the payload to its slot. An unknown cmd —
        // or a CRC-valid frame whose length does not match the registered
        // slot — is consumed as noise without touching any slot.
        self.ring.discard(FRAME_HEADER_SIZE);
        match self.sink.slot_mut(cmd) {
            Some(slot) if slot.len() == data_len => {
                self.ring.read(slot);
            }
            _ => {
                self.ring.discard(data_len);
            }
        }
        self.ring.discard(FRAME_TAIL_SIZE);
        FrameStep::Done
    }

    #[cfg(test)]
    fn head_byte(&self) -> Option<u8> {
        let mut head = [0u8; 1];
        self.ring.peek(0, &mut head).then_some(head[0])
    }
}
