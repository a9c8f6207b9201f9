//! Robot-to-robot interaction packets and the client drawing sub-protocol
//! records carried inside them.

use bytemuck::{Pod, Zeroable};

use super::Command;
use crate::packet::Packet;

/// Inter-robot data exchange, sender-triggered, capped at 30 Hz.
///
/// `data_cmd_id` selects the sub-protocol record carried in `user_data`
/// (drawing commands, sentry/radar decisions, free-form peer data).
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct RobotInteractionData {
    pub data_cmd_id: u16,
    pub sender_id: u16,
    pub receiver_id: u16,
    /// Sub-protocol content, up to 112 bytes.
    pub user_data: [u8; 112],
}

const _: () = assert!(core::mem::size_of::<RobotInteractionData>() == 118);

impl Packet for RobotInteractionData {
    const CMD: u16 = Command::RobotInteraction as u16;
}

/// Client drawing: delete one layer or everything.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct InteractionLayerDelete {
    /// 0 none, 1 delete layer, 2 delete all.
    pub delete_type: u8,
    /// Layer 0-9.
    pub layer: u8,
}

const _: () = assert!(core::mem::size_of::<InteractionLayerDelete>() == 2);

impl Packet for InteractionLayerDelete {
    const CMD: u16 = Command::InteractionLayerDelete as u16;
}

/// Client drawing: one figure.
///
/// Shares its wire id with [`super::EventData`] in the referee cmd
/// catalog; it is therefore *not* part of [`super::RefereeSet`] and is
/// parsed out of [`RobotInteractionData::user_data`] instead — or out of a
/// custom set registering it in place of the event packet.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct InteractionFigure {
    /// Figure index name.
    pub figure_name: [u8; 3],
    /// Bits 0-2 operation, 3-5 figure type, 6-9 layer, 10-13 color,
    /// 14-22 / 23-31 detail fields.
    pub config_0: u32,
    /// Bits 0-9 width, 10-20 start x, 21-31 start y.
    pub config_1: u32,
    /// Detail fields (radius, end point, numeric payloads).
    pub config_2: u32,
}

const _: () = assert!(core::mem::size_of::<InteractionFigure>() == 15);

impl InteractionFigure {
    /// 0 none, 1 add, 2 modify, 3 delete.
    pub fn operate_type(&self) -> u8 {
        (self.config_0 & 0x07) as u8
    }

    /// 0 line, 1 rectangle, 2 circle, 3 ellipse, 4 arc, 5 float, 6 int,
    /// 7 text.
    pub fn figure_type(&self) -> u8 {
        ((self.config_0 >> 3) & 0x07) as u8
    }

    pub fn layer(&self) -> u8 {
        ((self.config_0 >> 6) & 0x0F) as u8
    }

    pub fn color(&self) -> u8 {
        ((self.config_0 >> 10) & 0x0F) as u8
    }

    pub fn start_x(&self) -> u16 {
        ((self.config_1 >> 10) & 0x7FF) as u16
    }

    pub fn start_y(&self) -> u16 {
        ((self.config_1 >> 21) & 0x7FF) as u16
    }
}

impl Packet for InteractionFigure {
    // Collides with EventData on purpose; see the type docs.
    const CMD: u16 = 0x0101;
}

/// Client drawing: a character figure plus its text content.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct InteractionString {
    /// Figure configuration, same wire layout as [`InteractionFigure`].
    pub graphic_data: [u8; 15],
    /// Text content.
    pub data: [u8; 30],
}

const _: () = assert!(core::mem::size_of::<InteractionString>() == 45);

impl Packet for InteractionString {
    const CMD: u16 = Command::InteractionString as u16;
}

/// Sentry autonomous-decision command.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct SentryDecision {
    /// Bit 0 confirm revive, bit 1 confirm immediate revive, bits 2-12
    /// ammo to exchange, 13-16 remote ammo-exchange count, 17-20 remote
    /// HP-exchange count, 21-22 posture command, bit 23 confirm energy
    /// activation.
    pub bits: u32,
}

const _: () = assert!(core::mem::size_of::<SentryDecision>() == 4);

impl SentryDecision {
    pub fn confirm_revive(&self) -> bool {
        self.bits & 0x01 != 0
    }

    pub fn exchange_ammo(&self) -> u16 {
        ((self.bits >> 2) & 0x7FF) as u16
    }
}

impl Packet for SentryDecision {
    const CMD: u16 = Command::SentryDecision as u16;
}

/// Radar autonomous-decision command.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C, packed)]
pub struct RadarDecision {
    /// Bit 0: confirm triggering double damage.
    pub bits: u8,
    /// Command type selector.
    pub cmd_type: u8,
    /// Key material.
    pub key: [u8; 6],
}

const _: () = assert!(core::mem::size_of::<RadarDecision>() == 8);

impl Packet for RadarDecision {
    const CMD: u16 = Command::RadarDecision as u16;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_fields_unpack() {
        let figure = InteractionFigure {
            figure_name: *b"AB1",
            config_0: 1 | (2 << 3) | (9 << 6) | (3 << 10),
            config_1: 5 | (320 << 10) | (1000 << 21),
            config_2: 0,
        };
        assert_eq!(figure.operate_type(), 1);
        assert_eq!(figure.figure_type(), 2);
        assert_eq!(figure.layer(), 9);
        assert_eq!(figure.color(), 3);
        assert_eq!(figure.start_x(), 320);
        assert_eq!(figure.start_y(), 1000);
    }

    #[test]
    fn interaction_record_embeds_a_figure() {
        let figure = InteractionFigure {
            figure_name: *b"fg0",
            config_0: 1,
            config_1: 0,
            config_2: 0,
        };
        let mut record = RobotInteractionData {
            data_cmd_id: 0x0101,
            sender_id: 3,
            receiver_id: 0x0103,
            user_data: [0; 112],
        };
        record.user_data[..15].copy_from_slice(bytemuck::bytes_of(&figure));

        let embedded: InteractionFigure = bytemuck::pod_read_unaligned(&record.user_data[..15]);
        assert_eq!(embedded, figure);
    }
}
