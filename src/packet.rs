use bytemuck::Pod;

/// Contract implemented by every wire packet type.
///
/// A packet's in-memory representation *is* its wire representation:
/// implementors are `#[repr(C, packed)]` [`Pod`] structs of little-endian
/// scalars, so framing and dispatch copy bytes without a transform step.
pub trait Packet: Pod {
    /// Cmd id carried in the frame header. Unique within a packet set.
    const CMD: u16;

    /// Hook run on the raw slot bytes before every `Deserializer::get`
    /// read.
    ///
    /// The default does nothing. Applications needing a pre-read fixup on
    /// a foreign payload (e.g. a byte-order adjustment) override it.
    fn before_get(_slot: &mut [u8]) {}
}

/// Object-safe view of a packet value: its cmd id and raw payload bytes.
///
/// Implemented for every [`Packet`], which lets the serializer frame a
/// heterogeneous group of packets in a single call.
pub trait Payload {
    fn cmd(&self) -> u16;
    fn bytes(&self) -> &[u8];
}

impl<T: Packet> Payload for T {
    fn cmd(&self) -> u16 {
        T::CMD
    }

    fn bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Size and placement facts the layout planner records per packet type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketDesc {
    pub cmd: u16,
    pub size: usize,
    pub align: usize,
}

impl PacketDesc {
    pub const fn of<T: Packet>() -> Self {
        Self {
            cmd: T::CMD,
            size: core::mem::size_of::<T>(),
            align: core::mem::align_of::<T>(),
        }
    }
}
