//! Video-transmission-module channel management packets.

use bytemuck::{Pod, Zeroable};

use super::Command;
use crate::packet::Packet;

/// Set the VTM output channel; the same layout answers as the feedback.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct VtmSetChannel {
    /// Request: channel 1-6. Feedback: 0 ok, 1 starting, 2 error.
    pub channel_id: u8,
}

const _: () = assert!(core::mem::size_of::<VtmSetChannel>() == 1);

impl Packet for VtmSetChannel {
    const CMD: u16 = Command::VtmSetChannel as u16;
}

/// Query the VTM output channel; the same layout answers as the feedback.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct VtmQueryChannel {
    /// Query: 0. Feedback: 0 unset, 1-6 the channel.
    pub query_byte: u8,
}

const _: () = assert!(core::mem::size_of::<VtmQueryChannel>() == 1);

impl Packet for VtmQueryChannel {
    const CMD: u16 = Command::VtmQueryChannel as u16;
}
