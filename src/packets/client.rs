//! Operator-client and custom-controller packets: minimap exchange,
//! keyboard/mouse control and the free-form custom data channels.

use bytemuck::{Pod, Zeroable};

use super::Command;
use crate::packet::Packet;

/// Custom-controller to robot data, capped at 30 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct CustomControllerData {
    pub data: [u8; 30],
}

const _: () = assert!(core::mem::size_of::<CustomControllerData>() == 30);

impl Packet for CustomControllerData {
    const CMD: u16 = Command::CustomControllerData as u16;
}

/// Minimap click command from the operator client, sent on interaction.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct MapCommand {
    /// Meters.
    pub target_position_x: f32,
    /// Meters.
    pub target_position_y: f32,
    /// Key pressed with the click.
    pub cmd_keyboard: u8,
    /// Opponent robot id the click marks.
    pub target_robot_id: u8,
    /// Information-source id.
    pub cmd_source: u16,
}

const _: () = assert!(core::mem::size_of::<MapCommand>() == 12);

impl Packet for MapCommand {
    const CMD: u16 = Command::MapCommand as u16;
}

/// Keyboard/mouse remote control, sent at 30 Hz through the image link.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct RemoteControl {
    pub mouse_x: i16,
    pub mouse_y: i16,
    pub mouse_z: i16,
    pub left_button_down: u8,
    pub right_button_down: u8,
    /// Bit mask of held keys.
    pub keyboard_value: u16,
    pub reserved: u16,
}

const _: () = assert!(core::mem::size_of::<RemoteControl>() == 12);

impl Packet for RemoteControl {
    const CMD: u16 = Command::RemoteControl as u16;
}

/// Robot positions pushed to the minimap, capped at 5 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct MapRobotData {
    pub hero_position_x: u16,
    pub hero_position_y: u16,
    pub engineer_position_x: u16,
    pub engineer_position_y: u16,
    pub infantry_3_position_x: u16,
    pub infantry_3_position_y: u16,
    pub infantry_4_position_x: u16,
    pub infantry_4_position_y: u16,
    pub infantry_5_position_x: u16,
    pub infantry_5_position_y: u16,
    pub sentry_position_x: u16,
    pub sentry_position_y: u16,
}

const _: () = assert!(core::mem::size_of::<MapRobotData>() == 24);

impl Packet for MapRobotData {
    const CMD: u16 = Command::MapRobotData as u16;
}

/// Simulated keyboard/mouse data from a custom controller, capped at
/// 30 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct CustomClientData {
    pub key_value: u16,
    /// Bits 0-11 mouse x, 12-15 left-button state.
    pub mouse_x_left: u16,
    /// Bits 0-11 mouse y, 12-15 right-button state.
    pub mouse_y_right: u16,
    pub reserved: u16,
}

const _: () = assert!(core::mem::size_of::<CustomClientData>() == 8);

impl CustomClientData {
    pub fn mouse_x(&self) -> u16 {
        self.mouse_x_left & 0x0FFF
    }

    pub fn mouse_left(&self) -> u8 {
        (self.mouse_x_left >> 12) as u8
    }

    pub fn mouse_y(&self) -> u16 {
        self.mouse_y_right & 0x0FFF
    }

    pub fn mouse_right(&self) -> u8 {
        (self.mouse_y_right >> 12) as u8
    }
}

impl Packet for CustomClientData {
    const CMD: u16 = Command::CustomClientData as u16;
}

/// Sentry or semi-autonomous robot path pushed to the minimap, capped at
/// 1 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct MapData {
    /// 1 attack, 2 defend, 3 move.
    pub intention: u8,
    /// Path start, decimeters.
    pub start_position_x: u16,
    pub start_position_y: u16,
    /// Waypoint deltas, decimeters.
    pub delta_x: [i8; 49],
    pub delta_y: [i8; 49],
    pub sender_id: u16,
}

const _: () = assert!(core::mem::size_of::<MapData>() == 105);

impl Packet for MapData {
    const CMD: u16 = Command::MapData as u16;
}

/// Free-form peer data shown on the receiving operator client, capped at
/// 3 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct CustomInfo {
    pub sender_id: u16,
    pub receiver_id: u16,
    /// UTF-16 content.
    pub user_data: [u8; 30],
}

const _: () = assert!(core::mem::size_of::<CustomInfo>() == 34);

impl Packet for CustomInfo {
    const CMD: u16 = Command::CustomInfo as u16;
}

/// Robot data forwarded to the custom controller, capped at 10 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct CustomRobotData {
    pub data: [u8; 30],
}

const _: () = assert!(core::mem::size_of::<CustomRobotData>() == 30);

impl Packet for CustomRobotData {
    const CMD: u16 = Command::CustomRobotData as u16;
}

/// Robot data forwarded to the custom client, capped at 50 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct RobotCustomData {
    pub data: [u8; 150],
}

const _: () = assert!(core::mem::size_of::<RobotCustomData>() == 150);

impl Packet for RobotCustomData {
    const CMD: u16 = Command::RobotCustomData as u16;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_client_bit_splits() {
        let data = CustomClientData {
            key_value: 0x0041,
            mouse_x_left: 640 | (1 << 12),
            mouse_y_right: 480 | (2 << 12),
            reserved: 0,
        };
        assert_eq!(data.mouse_x(), 640);
        assert_eq!(data.mouse_left(), 1);
        assert_eq!(data.mouse_y(), 480);
        assert_eq!(data.mouse_right(), 2);
    }
}
