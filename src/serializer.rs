use core::marker::PhantomData;

use crate::checksum::{crc16, crc8};
use crate::error::Error;
use crate::packet::Payload;
use crate::registry::{Member, PacketSet};
use crate::{FRAME_HEADER_SIZE, FRAME_TAIL_SIZE, SOF};

/// Framing writer for the packet types of set `S`.
///
/// Stateless apart from the rolling sequence byte stamped into every
/// emitted header.
pub struct Serializer<S: PacketSet> {
    sequence: u8,
    _set: PhantomData<S>,
}

impl<S: PacketSet> Serializer<S> {
    pub const fn new() -> Self {
        Self {
            sequence: 0,
            _set: PhantomData,
        }
    }

    /// Frames `packets` back to back into `out` and returns the bytes
    /// written.
    ///
    /// The total size is checked up front; on overflow nothing is written.
    /// Every frame of one call carries the same sequence byte, and the
    /// counter advances once per successful call — grouped emissions share
    /// a seq value on purpose.
    pub fn serialize(&mut self, out: &mut [u8], packets: &[&dyn Payload]) -> Result<usize, Error> {
        let needed: usize = packets
            .iter()
            .map(|p| FRAME_HEADER_SIZE + p.bytes().len() + FRAME_TAIL_SIZE)
            .sum();
        if needed > out.len() {
            return Err(Error::BufferOverflow {
                needed,
                available: out.len(),
            });
        }

        let mut offset = 0;
        for packet in packets {
            debug_assert!(S::LAYOUT.contains(packet.cmd()));
            offset += self.write_frame(&mut out[offset..], packet.cmd(), packet.bytes());
        }

        self.sequence = self.sequence.wrapping_add(1);
        Ok(offset)
    }

    fn write_frame(&self, out: &mut [u8], cmd: u16, payload: &[u8]) -> usize {
        let data_len = payload.len();

        out[0] = SOF;
        out[1..3].copy_from_slice(&cmd.to_le_bytes());
        out[3..5].copy_from_slice(&(data_len as u16).to_le_bytes());
        out[5] = self.sequence;
        out[6] = crc8(&out[..6]);
        out[FRAME_HEADER_SIZE..FRAME_HEADER_SIZE + data_len].copy_from_slice(payload);

        let crc = crc16(&out[..FRAME_HEADER_SIZE + data_len]);
        out[FRAME_HEADER_SIZE + data_len..FRAME_HEADER_SIZE + data_len + FRAME_TAIL_SIZE]
            .copy_from_slice(&crc.to_le_bytes());

        FRAME_HEADER_SIZE + data_len + FRAME_TAIL_SIZE
    }

    /// Whole-frame size of member type `T`.
    pub const fn frame_size<T: Member<S>>() -> usize {
        FRAME_HEADER_SIZE + core::mem::size_of::<T>() + FRAME_TAIL_SIZE
    }

    /// Largest whole-frame size across the set.
    pub const fn max_frame_size() -> usize {
        S::LAYOUT.max_frame_size()
    }

    /// Whole-frame size for `cmd`, or 0 when the cmd is not in the set.
    pub const fn frame_size_by_cmd(cmd: u16) -> usize {
        match S::LAYOUT.slot_of(cmd) {
            Some(slot) => FRAME_HEADER_SIZE + slot.size + FRAME_TAIL_SIZE,
            None => 0,
        }
    }

    pub const fn is_valid_cmd(cmd: u16) -> bool {
        S::LAYOUT.contains(cmd)
    }

    /// Sequence byte the next call will stamp.
    pub const fn sequence(&self) -> u8 {
        self.sequence
    }
}

impl<S: PacketSet> Default for Serializer<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::{Pod, Zeroable};

    use crate::packet::Packet;

    #[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
    #[repr(C, packed)]
    struct Probe {
        value: u8,
    }

    impl Packet for Probe {
        const CMD: u16 = 0x0001;
    }

    #[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
    #[repr(C, packed)]
    struct Pair {
        a: u16,
        b: u16,
    }

    impl Packet for Pair {
        const CMD: u16 = 0x0202;
    }

    crate::packet_set! {
        enum ProbeSet { Probe, Pair }
    }

    type ProbeSerializer = Serializer<ProbeSet>;

    #[test]
    fn emits_the_reference_frame() {
        let mut serializer = ProbeSerializer::new();
        let mut out = [0u8; 16];

        let written = serializer
            .serialize(&mut out, &[&Probe { value: 0x7F }])
            .unwrap();

        assert_eq!(written, 10);
        assert_eq!(
            &out[..10],
            &[0xA5, 0x01, 0x00, 0x01, 0x00, 0x00, 0x87, 0x7F, 0x2E, 0xE0]
        );
    }

    #[test]
    fn grouped_packets_share_one_sequence() {
        let mut serializer = ProbeSerializer::new();
        let mut out = [0u8; 64];

        let written = serializer
            .serialize(&mut out, &[&Probe { value: 1 }, &Pair { a: 2, b: 3 }])
            .unwrap();

        assert_eq!(
            written,
            ProbeSerializer::frame_size::<Probe>() + ProbeSerializer::frame_size::<Pair>()
        );
        // Both headers carry seq 0; the counter advanced once.
        assert_eq!(out[5], 0);
        assert_eq!(out[10 + 5], 0);
        assert_eq!(serializer.sequence(), 1);

        serializer.serialize(&mut out, &[&Probe { value: 1 }]).unwrap();
        assert_eq!(serializer.sequence(), 2);
        assert_eq!(out[5], 1);
    }

    #[test]
    fn sequence_wraps_around() {
        let mut serializer = ProbeSerializer::new();
        let mut out = [0u8; 16];
        for _ in 0..=255 {
            serializer.serialize(&mut out, &[&Probe { value: 0 }]).unwrap();
        }
        assert_eq!(serializer.sequence(), 0);
    }

    #[test]
    fn overflow_writes_nothing() {
        let mut serializer = ProbeSerializer::new();
        let mut out = [0u8; 12];

        let result = serializer.serialize(&mut out, &[&Probe { value: 9 }, &Pair { a: 1, b: 1 }]);
        assert_eq!(
            result,
            Err(Error::BufferOverflow {
                needed: 10 + 13,
                available: 12
            })
        );
        assert_eq!(out, [0; 12]);
        // A failed call does not advance the sequence.
        assert_eq!(serializer.sequence(), 0);
    }

    #[test]
    fn size_helpers_cover_known_and_unknown_cmds() {
        assert_eq!(ProbeSerializer::frame_size::<Probe>(), 10);
        assert_eq!(ProbeSerializer::frame_size::<Pair>(), 13);
        assert_eq!(ProbeSerializer::max_frame_size(), 13);
        assert_eq!(ProbeSerializer::frame_size_by_cmd(0x0001), 10);
        assert_eq!(ProbeSerializer::frame_size_by_cmd(0x0202), 13);
        assert_eq!(ProbeSerializer::frame_size_by_cmd(0x0777), 0);
        assert!(ProbeSerializer::is_valid_cmd(0x0202));
        assert!(!ProbeSerializer::is_valid_cmd(0x0777));
    }

    #[test]
    fn empty_group_still_counts_as_a_call() {
        let mut serializer = ProbeSerializer::new();
        let mut out = [0u8; 4];
        assert_eq!(serializer.serialize(&mut out, &[]), Ok(0));
        assert_eq!(serializer.sequence(), 1);
    }
}
