//! Per-robot packets: performance data, power and heat, position, buffs,
//! combat feedback and the autonomous-decision feeds.

use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};
use num_enum::TryFromPrimitive;

use super::Command;
use crate::packet::Packet;

bitflags! {
    /// Power-rail outputs reported in [`RobotStatus`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PowerOutputs: u8 {
        const GIMBAL = 1;
        const CHASSIS = 1 << 1;
        const SHOOTER = 1 << 2;
    }
}

/// Robot performance data, sent at 10 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct RobotStatus {
    pub robot_id: u8,
    pub robot_level: u8,
    pub current_hp: u16,
    pub maximum_hp: u16,
    /// Barrel heat cooled off per second.
    pub shooter_barrel_cooling_value: u16,
    pub shooter_barrel_heat_limit: u16,
    pub chassis_power_limit: u16,
    /// Bits 0-2: 24 V output on the gimbal, chassis and shooter rails.
    pub power_management_output: u8,
}

const _: () = assert!(core::mem::size_of::<RobotStatus>() == 13);

impl RobotStatus {
    pub fn power_outputs(&self) -> PowerOutputs {
        PowerOutputs::from_bits_truncate(self.power_management_output)
    }
}

impl Packet for RobotStatus {
    const CMD: u16 = Command::RobotStatus as u16;
}

/// Chassis buffer energy and barrel heat, sent at 10 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct PowerHeatData {
    pub reserved_0: u16,
    pub reserved_1: u16,
    pub reserved_2: f32,
    /// Buffer energy in joules.
    pub buffer_energy: u16,
    pub shooter_17mm_1_barrel_heat: u16,
    pub shooter_42mm_barrel_heat: u16,
}

const _: () = assert!(core::mem::size_of::<PowerHeatData>() == 14);

impl Packet for PowerHeatData {
    const CMD: u16 = Command::PowerHeatData as u16;
}

/// Own position, sent at 1 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct RobotPos {
    /// Meters.
    pub x: f32,
    /// Meters.
    pub y: f32,
    /// Speed-monitor heading in degrees, 0 at due north.
    pub angle: f32,
}

const _: () = assert!(core::mem::size_of::<RobotPos>() == 12);

impl Packet for RobotPos {
    const CMD: u16 = Command::RobotPos as u16;
}

/// Robot buffs and remaining chassis energy, sent at 3 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct Buff {
    /// HP recovery in percent.
    pub recovery_buff: u8,
    /// Barrel cooling rate multiplier.
    pub cooling_buff: u16,
    /// Damage reduction in percent.
    pub defence_buff: u8,
    /// Extra damage taken in percent.
    pub vulnerability_buff: u8,
    /// Damage bonus in percent.
    pub attack_buff: u16,
    /// Remaining-energy thresholds, bit-coded.
    pub remaining_energy: u8,
}

const _: () = assert!(core::mem::size_of::<Buff>() == 8);

impl Packet for Buff {
    const CMD: u16 = Command::Buff as u16;
}

/// Why HP was deducted, from [`HurtData`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum HurtReason {
    Projectile = 0,
    Offline = 1,
    ExceedShootSpeed = 2,
    ExceedBarrelHeat = 3,
    ExceedChassisPower = 4,
    Collision = 5,
}

/// Damage feedback, sent when the robot takes a hit.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct HurtData {
    /// Low nibble: armor id (0-4); high nibble: deduction reason.
    pub bits: u8,
}

const _: () = assert!(core::mem::size_of::<HurtData>() == 1);

impl HurtData {
    pub fn armor_id(&self) -> u8 {
        self.bits & 0x0F
    }

    pub fn reason(&self) -> Option<HurtReason> {
        HurtReason::try_from(self.bits >> 4).ok()
    }
}

impl Packet for HurtData {
    const CMD: u16 = Command::HurtData as u16;
}

/// Shot feedback, sent per projectile fired.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct ShootData {
    /// 1 = 17 mm, 2 = 42 mm.
    pub bullet_type: u8,
    /// Launcher id: 1 first 17 mm, 3 the 42 mm mechanism.
    pub shooter_number: u8,
    /// Rounds per second.
    pub launching_frequency: u8,
    /// Muzzle speed in m/s.
    pub initial_speed: f32,
}

const _: () = assert!(core::mem::size_of::<ShootData>() == 7);

impl Packet for ShootData {
    const CMD: u16 = Command::ShootData as u16;
}

/// Allowed projectile budget and coins, sent at 10 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct ProjectileAllowance {
    pub projectile_allowance_17mm: u16,
    pub projectile_allowance_42mm: u16,
    pub remaining_gold_coin: u16,
    /// Extra 17 mm budget granted by the fortress.
    pub projectile_allowance_fortress: u16,
}

const _: () = assert!(core::mem::size_of::<ProjectileAllowance>() == 8);

impl Packet for ProjectileAllowance {
    const CMD: u16 = Command::ProjectileAllowance as u16;
}

bitflags! {
    /// Gain-zone detections reported in [`RfidStatus`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RfidZones: u32 {
        const BASE = 1;
        const CENTRAL_HIGHLAND = 1 << 1;
        const ENEMY_CENTRAL_HIGHLAND = 1 << 2;
        const TRAPEZOID_HIGHLAND = 1 << 3;
        const ENEMY_TRAPEZOID_HIGHLAND = 1 << 4;
        const FLY_SLOPE_FRONT = 1 << 5;
        const FLY_SLOPE_BACK = 1 << 6;
        const ENEMY_FLY_SLOPE_FRONT = 1 << 7;
        const ENEMY_FLY_SLOPE_BACK = 1 << 8;
        const CENTRAL_GAIN_POINT = 1 << 9;
        const OUTPOST = 1 << 10;
        const RESTORATION = 1 << 11;
        const SENTRY_PATROL = 1 << 12;
        const ENEMY_SENTRY_PATROL = 1 << 13;
        const RESOURCE_ISLAND = 1 << 14;
        const ENEMY_RESOURCE_ISLAND = 1 << 15;
        const EXCHANGE = 1 << 16;
    }
}

/// RFID module detections, sent at 3 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct RfidStatus {
    /// Gain-zone bit mask.
    pub rfid_status: u32,
    /// Bits 0-1: terrain-crossing (tunnel) gain point.
    pub rfid_status_ext: u8,
}

const _: () = assert!(core::mem::size_of::<RfidStatus>() == 5);

impl RfidStatus {
    pub fn zones(&self) -> RfidZones {
        RfidZones::from_bits_truncate(self.rfid_status)
    }
}

impl Packet for RfidStatus {
    const CMD: u16 = Command::RfidStatus as u16;
}

/// Dart operator-station state, sent at 3 Hz to the dart robot.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct DartClientCmd {
    /// 0 open, 1 closed, 2 switching.
    pub dart_launch_opening_status: u8,
    pub reserved: u8,
    /// Match time remaining when the target was last switched, seconds.
    pub target_change_time: u16,
    /// Match time remaining at the latest confirmed launch command.
    pub latest_launch_cmd_time: u16,
}

const _: () = assert!(core::mem::size_of::<DartClientCmd>() == 6);

impl Packet for DartClientCmd {
    const CMD: u16 = Command::DartClientCmd as u16;
}

/// Ground robot positions of the own side, sent at 1 Hz to the sentry.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct GroundRobotPosition {
    pub hero_x: f32,
    pub hero_y: f32,
    pub engineer_x: f32,
    pub engineer_y: f32,
    pub standard_3_x: f32,
    pub standard_3_y: f32,
    pub standard_4_x: f32,
    pub standard_4_y: f32,
    pub reserved_0: f32,
    pub reserved_1: f32,
}

const _: () = assert!(core::mem::size_of::<GroundRobotPosition>() == 40);

impl Packet for GroundRobotPosition {
    const CMD: u16 = Command::GroundRobotPosition as u16;
}

/// Radar marking progress, sent at 1 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct RadarMarkData {
    /// Bits 0-4 opponent vulnerability marks, 5-9 own special marks.
    pub mark_progress: u16,
}

const _: () = assert!(core::mem::size_of::<RadarMarkData>() == 2);

impl Packet for RadarMarkData {
    const CMD: u16 = Command::RadarMarkData as u16;
}

/// Sentry autonomous-decision feedback, sent at 1 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct SentryInfo {
    /// Bits 0-10 exchanged ammo, 11-14 remote ammo exchanges, 15-18 remote
    /// HP exchanges, 19 free revive confirmed, 20 immediate revive
    /// confirmed, 21-30 immediate-revive cost.
    pub exchange_bits: u32,
    /// Bits 12-13 posture, bit 14 energy mechanism activatable.
    pub posture_bits: u16,
}

const _: () = assert!(core::mem::size_of::<SentryInfo>() == 6);

impl SentryInfo {
    pub fn allowed_ammo_exchange(&self) -> u16 {
        (self.exchange_bits & 0x7FF) as u16
    }

    pub fn immediate_revive_cost(&self) -> u16 {
        ((self.exchange_bits >> 21) & 0x3FF) as u16
    }

    pub fn posture(&self) -> u8 {
        ((self.posture_bits >> 12) & 0x03) as u8
    }
}

impl Packet for SentryInfo {
    const CMD: u16 = Command::SentryInfo as u16;
}

/// Radar autonomous-decision feedback, sent at 1 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct RadarInfo {
    /// Bits 0-1 double-damage chances, bit 2 opponent currently doubled,
    /// bits 3-4 encryption level, bit 5 key editable.
    pub bits: u8,
}

const _: () = assert!(core::mem::size_of::<RadarInfo>() == 1);

impl RadarInfo {
    pub fn double_damage_chances(&self) -> u8 {
        self.bits & 0x03
    }

    pub fn opponent_double_damage(&self) -> bool {
        self.bits & 0x04 != 0
    }
}

impl Packet for RadarInfo {
    const CMD: u16 = Command::RadarInfo as u16;
}
