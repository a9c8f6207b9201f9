//! The referee packet catalog: every wire payload the link serves, the cmd
//! id table, and the ready-made [`RefereeSet`] wiring.
//!
//! Each packet is a `#[repr(C, packed)]` [`bytemuck::Pod`] struct whose
//! in-memory layout is the wire layout — little-endian scalars, no padding.
//! Bit-coded words stay raw in the struct and unpack through accessor
//! methods.

mod client;
mod game;
mod interaction;
mod robot;
mod vtm;

pub use client::{
    CustomClientData, CustomControllerData, CustomInfo, CustomRobotData, MapCommand, MapData,
    MapRobotData, RemoteControl, RobotCustomData,
};
pub use game::{
    DartInfo, EventData, GameKind, GameResult, GameRobotHp, GameStage, GameStatus, RefereeWarning,
    Winner,
};
pub use interaction::{
    InteractionFigure, InteractionLayerDelete, InteractionString, RadarDecision,
    RobotInteractionData, SentryDecision,
};
pub use robot::{
    Buff, DartClientCmd, GroundRobotPosition, HurtData, HurtReason, PowerHeatData, PowerOutputs,
    ProjectileAllowance, RadarInfo, RadarMarkData, RfidStatus, RfidZones, RobotPos, RobotStatus,
    SentryInfo, ShootData,
};
pub use vtm::{VtmQueryChannel, VtmSetChannel};

use num_enum::TryFromPrimitive;

use crate::{Deserializer, PacketSet, Parser, Serializer};

/// Every top-level cmd id of the referee link.
///
/// The drawing-figure record shares 0x0101 with the event packet and is
/// not listed; see [`InteractionFigure`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Command {
    GameStatus = 0x0001,
    GameResult = 0x0002,
    GameRobotHp = 0x0003,
    InteractionLayerDelete = 0x0100,
    EventData = 0x0101,
    RefereeWarning = 0x0104,
    DartInfo = 0x0105,
    InteractionString = 0x0110,
    SentryDecision = 0x0120,
    RadarDecision = 0x0121,
    RobotStatus = 0x0201,
    PowerHeatData = 0x0202,
    RobotPos = 0x0203,
    Buff = 0x0204,
    HurtData = 0x0206,
    ShootData = 0x0207,
    ProjectileAllowance = 0x0208,
    RfidStatus = 0x0209,
    DartClientCmd = 0x020A,
    GroundRobotPosition = 0x020B,
    RadarMarkData = 0x020C,
    SentryInfo = 0x020D,
    RadarInfo = 0x020E,
    RobotInteraction = 0x0301,
    CustomControllerData = 0x0302,
    MapCommand = 0x0303,
    RemoteControl = 0x0304,
    MapRobotData = 0x0305,
    CustomClientData = 0x0306,
    MapData = 0x0307,
    CustomInfo = 0x0308,
    CustomRobotData = 0x0309,
    RobotCustomData = 0x0310,
    VtmSetChannel = 0x0F01,
    VtmQueryChannel = 0x0F02,
}

crate::packet_set! {
    /// The full referee packet set, one slot per top-level cmd.
    pub enum RefereeSet {
        GameStatus,
        GameResult,
        GameRobotHp,
        InteractionLayerDelete,
        EventData,
        RefereeWarning,
        DartInfo,
        InteractionString,
        SentryDecision,
        RadarDecision,
        RobotStatus,
        PowerHeatData,
        RobotPos,
        Buff,
        HurtData,
        ShootData,
        ProjectileAllowance,
        RfidStatus,
        DartClientCmd,
        GroundRobotPosition,
        RadarMarkData,
        SentryInfo,
        RadarInfo,
        RobotInteractionData,
        CustomControllerData,
        MapCommand,
        RemoteControl,
        MapRobotData,
        CustomClientData,
        MapData,
        CustomInfo,
        CustomRobotData,
        RobotCustomData,
        VtmSetChannel,
        VtmQueryChannel,
    }
}

/// Storage sized for [`RefereeSet`].
pub type RefereeDeserializer = Deserializer<RefereeSet, { RefereeSet::ARENA_SIZE }>;

/// Parser wired for [`RefereeSet`] frames.
pub type RefereeParser<'a> =
    Parser<'a, RefereeDeserializer, { RefereeSet::RING_SIZE }, { RefereeSet::MAX_FRAME_SIZE }>;

/// Serializer for [`RefereeSet`] packets.
pub type RefereeSerializer = Serializer<RefereeSet>;
