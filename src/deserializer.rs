use core::marker::PhantomData;

use crate::arena::Arena;
use crate::registry::{Member, PacketSet, Slot};

/// Write path the parser dispatches validated payloads through.
pub trait PacketSink {
    /// Mutable view of the storage slot registered for `cmd`, or `None`
    /// when the cmd is unknown to this sink.
    fn slot_mut(&mut self, cmd: u16) -> Option<&mut [u8]>;
}

/// Typed storage holding the latest payload of every cmd in set `S`.
///
/// `CAP` must equal `S::ARENA_SIZE` (checked at compile time); the
/// ready-made aliases pass it through. Slots start zeroed and are rewritten
/// in place on every successfully parsed frame of their cmd — last write
/// wins.
pub struct Deserializer<S: PacketSet, const CAP: usize> {
    arena: Arena<CAP>,
    _set: PhantomData<S>,
}

impl<S: PacketSet, const CAP: usize> Deserializer<S, CAP> {
    pub fn new() -> Self {
        const {
            assert!(CAP == S::ARENA_SIZE, "arena capacity must equal the set's ARENA_SIZE");
        }
        Self {
            arena: Arena::new(),
            _set: PhantomData,
        }
    }

    // Member<S> implies the cmd is registered; packet_set! upholds this.
    fn slot_for<T: Member<S>>() -> Slot {
        match S::LAYOUT.slot_of(T::CMD) {
            Some(slot) => slot,
            None => unreachable!(),
        }
    }

    /// Reads the latest value of `T`, running its `before_get` hook on the
    /// slot bytes first.
    ///
    /// A slot no frame has written yet reads as the zeroed value.
    pub fn get<T: Member<S>>(&mut self) -> T {
        let slot = Self::slot_for::<T>();
        let bytes = self.arena.slot_mut(slot.offset, slot.size);
        T::before_get(bytes);

        let mut value = T::zeroed();
        bytemuck::bytes_of_mut(&mut value).copy_from_slice(bytes);
        value
    }

    /// Direct reference into `T`'s slot.
    ///
    /// Skips the `before_get` hook. The parser rewrites the slot in place,
    /// so a caller sharing this storage with another execution context
    /// accepts torn reads; the codec itself is single-threaded and gives
    /// no such context a chance to interleave.
    pub fn get_ref<T: Member<S>>(&self) -> &T {
        let slot = Self::slot_for::<T>();
        bytemuck::from_bytes(self.arena.slot(slot.offset, slot.size))
    }
}

impl<S: PacketSet, const CAP: usize> Default for Deserializer<S, CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PacketSet, const CAP: usize> PacketSink for Deserializer<S, CAP> {
    fn slot_mut(&mut self, cmd: u16) -> Option<&mut [u8]> {
        let slot = S::LAYOUT.slot_of(cmd)?;
        Some(self.arena.slot_mut(slot.offset, slot.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::{Pod, Zeroable};

    use crate::packet::Packet;

    #[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
    #[repr(C, packed)]
    struct Pose {
        x: f32,
        y: f32,
    }

    impl Packet for Pose {
        const CMD: u16 = 0x0401;
    }

    #[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
    #[repr(C, packed)]
    struct Beat {
        count: u8,
    }

    impl Packet for Beat {
        const CMD: u16 = 0x0402;

        // Demonstrates the pre-read hook: normalize the high bit away.
        fn before_get(slot: &mut [u8]) {
            slot[0] &= 0x7F;
        }
    }

    crate::packet_set! {
        enum PoseSet { Pose, Beat }
    }

    type PoseStorage = Deserializer<PoseSet, { <PoseSet as PacketSet>::ARENA_SIZE }>;

    #[test]
    fn unwritten_slots_read_zeroed() {
        let mut storage = PoseStorage::new();
        assert_eq!(storage.get::<Pose>(), Pose { x: 0.0, y: 0.0 });
        assert_eq!(*storage.get_ref::<Pose>(), Pose { x: 0.0, y: 0.0 });
    }

    #[test]
    fn sink_writes_are_visible_to_typed_reads() {
        let mut storage = PoseStorage::new();

        let payload = Pose { x: 1.5, y: -2.0 };
        storage
            .slot_mut(Pose::CMD)
            .expect("registered cmd")
            .copy_from_slice(bytemuck::bytes_of(&payload));

        assert_eq!(storage.get::<Pose>(), payload);
        // The sibling slot is untouched.
        assert_eq!(storage.get::<Beat>(), Beat { count: 0 });
    }

    #[test]
    fn unknown_cmd_has_no_slot() {
        let mut storage = PoseStorage::new();
        assert!(storage.slot_mut(0x0403).is_none());
    }

    #[test]
    fn before_get_runs_on_every_typed_read() {
        let mut storage = PoseStorage::new();
        storage.slot_mut(Beat::CMD).expect("registered cmd")[0] = 0x85;

        assert_eq!(storage.get::<Beat>(), Beat { count: 0x05 });
        // get_ref bypasses the hook by design; the hook already rewrote
        // the slot above.
        assert_eq!(storage.get_ref::<Beat>().count, 0x05);
    }
}
