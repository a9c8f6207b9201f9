//! Game-level packets: match state, results, HP totals, site events and
//! referee warnings.

use bytemuck::{Pod, Zeroable};
use num_enum::TryFromPrimitive;

use super::Command;
use crate::packet::Packet;

/// Match type carried in [`GameStatus`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GameKind {
    Standard = 1,
    SingleEvent = 2,
    Icra = 3,
    ThreeVsThree = 4,
    InfantryOnly = 5,
}

/// Match phase carried in [`GameStatus`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GameStage {
    NotStarted = 0,
    Preparation = 1,
    SelfCheck = 2,
    Countdown = 3,
    InProgress = 4,
    Settlement = 5,
}

/// Match status, sent at 1 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct GameStatus {
    /// Low nibble: match type; high nibble: match phase.
    pub game_type_progress: u8,
    /// Seconds remaining in the current phase.
    pub stage_remain_time: u16,
    /// UNIX time, valid once the robot has synced with the referee NTP
    /// server.
    pub sync_timestamp: u64,
}

const _: () = assert!(core::mem::size_of::<GameStatus>() == 11);

impl GameStatus {
    pub fn kind(&self) -> Option<GameKind> {
        GameKind::try_from(self.game_type_progress & 0x0F).ok()
    }

    pub fn stage(&self) -> Option<GameStage> {
        GameStage::try_from(self.game_type_progress >> 4).ok()
    }
}

impl Packet for GameStatus {
    const CMD: u16 = Command::GameStatus as u16;
}

/// Match outcome carried in [`GameResult`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Winner {
    Draw = 0,
    Red = 1,
    Blue = 2,
}

/// Match result, sent once when the match ends.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct GameResult {
    /// 0 draw, 1 red side, 2 blue side.
    pub winner: u8,
}

const _: () = assert!(core::mem::size_of::<GameResult>() == 1);

impl GameResult {
    pub fn winner(&self) -> Option<Winner> {
        Winner::try_from(self.winner).ok()
    }
}

impl Packet for GameResult {
    const CMD: u16 = Command::GameResult as u16;
}

/// Robot HP data for the own side, sent at 3 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct GameRobotHp {
    pub ally_1_robot_hp: u16,
    pub ally_2_robot_hp: u16,
    pub ally_3_robot_hp: u16,
    pub ally_4_robot_hp: u16,
    /// Reserved (former slot 5).
    pub ally_5_robot_hp: u16,
    pub ally_7_robot_hp: u16,
    pub ally_outpost_hp: u16,
    pub ally_base_hp: u16,
}

const _: () = assert!(core::mem::size_of::<GameRobotHp>() == 16);

impl Packet for GameRobotHp {
    const CMD: u16 = Command::GameRobotHp as u16;
}

/// Site event bits, sent at 1 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct EventData {
    /// Bit-coded occupation and mechanism states; see the accessors.
    pub events: u32,
}

const _: () = assert!(core::mem::size_of::<EventData>() == 4);

impl EventData {
    /// Supply-station occupation state (bits 0-2).
    pub fn supply_station_occupy(&self) -> u8 {
        (self.events & 0x07) as u8
    }

    /// Small/large energy-mechanism state (bits 3-6).
    pub fn energy_mechanism_status(&self) -> u8 {
        ((self.events >> 3) & 0x0F) as u8
    }

    /// Own central-highland occupation (bits 7-8).
    pub fn center_gain_zone(&self) -> u8 {
        ((self.events >> 7) & 0x03) as u8
    }

    /// Own trapezoid-highland occupation (bits 9-10).
    pub fn trapezoid_gain_zone(&self) -> u8 {
        ((self.events >> 9) & 0x03) as u8
    }

    /// Match time of the opponent's last dart hit, 0-420 s (bits 11-19).
    pub fn dart_hit_time(&self) -> u16 {
        ((self.events >> 11) & 0x1FF) as u16
    }

    /// Target class of the opponent's last dart hit (bits 20-22).
    pub fn dart_hit_target(&self) -> u8 {
        ((self.events >> 20) & 0x07) as u8
    }
}

impl Packet for EventData {
    const CMD: u16 = Command::EventData as u16;
}

/// Referee warning, sent on penalty and afterwards at 1 Hz for the own
/// side's latest offence.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct RefereeWarning {
    /// 1 both-side yellow, 2 yellow, 3 red, 4 forfeit.
    pub level: u8,
    /// Offending robot id (e.g. 1 or 101).
    pub offending_robot_id: u8,
    /// Offence count of that robot at this level.
    pub count: u8,
}

const _: () = assert!(core::mem::size_of::<RefereeWarning>() == 3);

impl Packet for RefereeWarning {
    const CMD: u16 = Command::RefereeWarning as u16;
}

/// Dart launch data, sent at 1 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct DartInfo {
    /// Seconds until the own dart launch closes.
    pub dart_remaining_time: u8,
    /// Bits 0-2 last hit target, 3-5 cumulative hit count, 6-7 selected
    /// target.
    pub dart_state: u16,
}

const _: () = assert!(core::mem::size_of::<DartInfo>() == 3);

impl DartInfo {
    pub fn last_hit_target(&self) -> u8 {
        (self.dart_state & 0x07) as u8
    }

    pub fn target_hit_count(&self) -> u8 {
        ((self.dart_state >> 3) & 0x07) as u8
    }

    pub fn selected_target(&self) -> u8 {
        ((self.dart_state >> 6) & 0x03) as u8
    }
}

impl Packet for DartInfo {
    const CMD: u16 = Command::DartInfo as u16;
}
