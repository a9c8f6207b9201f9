//! Streaming codec for the RoboMaster referee-system serial protocol.
//!
//! A frame on the wire is
//!
//! ```text
//! 0xA5 | cmd: u16 le | data_len: u16 le | seq: u8 | crc8 | payload | crc16 le
//! ```
//!
//! with the CRC8 covering the first five header bytes and the
//! CRC16/CCITT-FALSE covering header plus payload. The [`Parser`] ingests
//! byte chunks of arbitrary size — junk, fragments and concatenated frames
//! included — through a ring buffer, resynchronizes on the 0xA5 sentinel,
//! and writes every validated payload into a fixed arena slot keyed by its
//! cmd. The [`Serializer`] emits the same framing. Both are wired to a
//! packet set declared with [`packet_set!`]; the full referee catalog ships
//! in [`packets`] together with ready-made aliases.
//!
//! # Usage
//!
//! ```
//! use rmproto::packets::{
//!     GameStatus, RefereeDeserializer, RefereeParser, RefereeSerializer,
//! };
//!
//! let status = GameStatus {
//!     game_type_progress: (4 << 4) | 1,
//!     stage_remain_time: 152,
//!     sync_timestamp: 0,
//! };
//!
//! let mut serializer = RefereeSerializer::new();
//! let mut wire = [0u8; 32];
//! let len = serializer.serialize(&mut wire, &[&status]).unwrap();
//!
//! let mut storage = RefereeDeserializer::new();
//! let mut parser = RefereeParser::new(&mut storage);
//! parser.push_data(&wire[..len]).unwrap();
//! drop(parser);
//!
//! let parsed = storage.get::<GameStatus>();
//! let remaining = parsed.stage_remain_time;
//! assert_eq!(remaining, 152);
//! ```
//!
//! The crate is `#![no_std]`, allocation-free, and strictly
//! single-threaded: a parser instance belongs to one execution context,
//! and consumers sharing its storage from elsewhere must synchronize
//! externally.

#![no_std]

mod arena;
mod checksum;
mod deserializer;
mod error;
mod packet;
mod parser;
mod registry;
mod ring;
mod serializer;

pub mod packets;

pub use checksum::{crc16, crc16_with, crc8};
pub use deserializer::{Deserializer, PacketSink};
pub use error::Error;
pub use packet::{Packet, PacketDesc, Payload};
pub use parser::Parser;
pub use registry::{Layout, LayoutView, Member, PacketSet, Slot};
pub use ring::RingBuffer;
pub use serializer::Serializer;

/// Start-of-frame sentinel byte.
pub const SOF: u8 = 0xA5;

/// Frame header size: SOF, cmd, data_len, seq, crc8.
pub const FRAME_HEADER_SIZE: usize = 7;

/// Frame tail size: the little-endian CRC16.
pub const FRAME_TAIL_SIZE: usize = 2;
