//! CRC kernels of the referee link: CRC8 over the frame header, CRC16 over
//! the whole frame.

use crc::{Algorithm, Crc, CRC_16_IBM_3740};

/// Referee flavour of the Maxim/Dallas CRC8: the reflected 0x31 polynomial
/// seeded with 0xFF instead of zero.
const CRC_8_REFEREE: Algorithm<u8> = Algorithm {
    width: 8,
    poly: 0x31,
    init: 0xFF,
    refin: true,
    refout: true,
    xorout: 0x00,
    check: 0x0B,
    residue: 0x00,
};

/// Header checksum table.
#[link_section = ".data"]
static CRC8: Crc<u8> = Crc::<u8>::new(&CRC_8_REFEREE);

/// Whole-frame checksum table (CCITT-FALSE).
#[link_section = ".data"]
static CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);

/// CRC8 of `data` under the referee-system algorithm.
pub fn crc8(data: &[u8]) -> u8 {
    CRC8.checksum(data)
}

/// CRC16/CCITT-FALSE of `data`.
pub fn crc16(data: &[u8]) -> u16 {
    CRC16.checksum(data)
}

/// Continues a CRC16 from a previous result.
///
/// CCITT-FALSE applies no output reflection or xor, so feeding the checksum
/// of a prefix back in as `seed` yields the checksum of the concatenation.
/// The parser relies on this when a frame straddles the ring's physical
/// boundary.
pub fn crc16_with(seed: u16, data: &[u8]) -> u16 {
    let mut digest = CRC16.digest_with_initial(seed);
    digest.update(data);
    digest.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc8_reference_vectors() {
        // Check value of the algorithm definition.
        assert_eq!(crc8(b"123456789"), 0x0B);
        // Single bytes against the canonical Dallas table: with init 0xFF
        // a lone byte b indexes entry b ^ 0xFF.
        assert_eq!(crc8(&[0xFF]), 0x00);
        assert_eq!(crc8(&[0xFE]), 0x5E);
        assert_eq!(crc8(&[0xF0]), 0x41);
        assert_eq!(crc8(&[]), 0xFF);
    }

    #[test]
    fn crc16_reference_vector() {
        assert_eq!(crc16(b"123456789"), 0x29B1);
        assert_eq!(crc16(&[]), 0xFFFF);
    }

    #[test]
    fn crc16_continuation_matches_one_shot() {
        let data = b"streaming frames wrap around ring boundaries";
        for split in 0..=data.len() {
            let (head, tail) = data.split_at(split);
            assert_eq!(crc16_with(crc16(head), tail), crc16(data));
        }
    }
}
