use crate::chart::{LayoutAliases, ZoneKey, KEY_CHART};
use std::fmt;
use steno_core::Stroke;

/// Bytes in one Gemini PR packet.
pub const PACKET_LEN: usize = 6;

/// Decode one 6-byte Gemini PR packet into a `Stroke`.
///
/// Byte 0 must have its MSB set (packet start); every other byte must have its MSB clear. Within
/// each byte the remaining 7 bits are scanned from position 1 (mask `0x40`) down to position 7
/// (mask `0x01`), each mapping to one cell of `KEY_CHART`.
pub fn decode(packet: &[u8], aliases: &LayoutAliases) -> Result<Stroke, DecodeError> {
    if packet.len() != PACKET_LEN {
        return Err(DecodeError::WrongLength(packet.len()));
    }
    if packet[0] & 0x80 == 0 {
        return Err(DecodeError::Framing { byte: 0, msb_set: false });
    }
    for (i, &byte) in packet.iter().enumerate().skip(1) {
        if byte & 0x80 != 0 {
            return Err(DecodeError::Framing { byte: i, msb_set: true });
        }
    }

    let mut left = String::new();
    let mut vowel = String::new();
    let mut right = String::new();

    for (row, &byte) in packet.iter().enumerate() {
        for col in 0..7 {
            let mask = 0x40 >> col;
            if byte & mask == 0 {
                continue;
            }
            let name = KEY_CHART[row][col];
            match aliases.resolve(name) {
                Some(ZoneKey::Left(c)) => left.push(c),
                Some(ZoneKey::Vowel(c)) => vowel.push(c),
                Some(ZoneKey::Right(c)) => right.push(c),
                None => log::debug!("dropping reserved key {:?} in packet", name),
            }
        }
    }

    Ok(Stroke::from_zone_chars(&left, &vowel, &right))
}

#[derive(Debug)]
pub enum DecodeError {
    WrongLength(usize),
    Framing { byte: usize, msb_set: bool },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::WrongLength(n) => write!(f, "packet has {} bytes, expected {}", n, PACKET_LEN),
            DecodeError::Framing { byte, msb_set: true } => {
                write!(f, "byte {} has its MSB set but is not the first byte of a packet", byte)
            }
            DecodeError::Framing { byte, msb_set: false } => {
                write!(f, "byte {} is missing the packet-start MSB", byte)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(decode(&[0x80, 0, 0, 0, 0], &LayoutAliases::new()), Err(DecodeError::WrongLength(5))));
    }

    #[test]
    fn rejects_missing_start_bit() {
        let packet = [0x00, 0, 0, 0, 0, 0];
        assert!(matches!(
            decode(&packet, &LayoutAliases::new()),
            Err(DecodeError::Framing { byte: 0, msb_set: false })
        ));
    }

    #[test]
    fn rejects_stray_start_bit() {
        let packet = [0x80, 0x80, 0, 0, 0, 0];
        assert!(matches!(
            decode(&packet, &LayoutAliases::new()),
            Err(DecodeError::Framing { byte: 1, msb_set: true })
        ));
    }

    #[test]
    fn decodes_left_bank_th() {
        // byte 1, mask 0x40 bit (T-) and 0x04 bit (H-): 0b0101_0100 wait compute precisely below.
        // Row1 columns: S1-(0x40) S2-(0x20) T-(0x10) K-(0x08) P-(0x04) W-(0x02) H-(0x01)
        let packet = [0x80, 0b0001_0001, 0, 0, 0, 0];
        let stroke = decode(&packet, &LayoutAliases::new()).unwrap();
        assert_eq!(stroke.to_string(), "TH");
    }

    #[test]
    fn decodes_vowels_and_right_bank() {
        // Row2: R-(0x40) A-(0x20) O-(0x10) *1(0x08) *2(0x04) res1(0x02) res2(0x01)
        // Row4: -P(0x40) -B(0x20) -L(0x10) -G(0x08) -T(0x04) -S(0x02) -D(0x01)
        let packet = [0x80, 0, 0x30, 0, 0x60, 0];
        let stroke = decode(&packet, &LayoutAliases::new()).unwrap();
        assert_eq!(stroke.to_string(), "AOPB");
    }

    #[test]
    fn reserved_keys_never_appear() {
        // Row2: Fn isn't here, but res1/res2 (0x02, 0x01) are reserved and should vanish.
        let bare = decode(&[0x80, 0, 0, 0, 0, 0], &LayoutAliases::new()).unwrap();
        let with_reserved = decode(&[0x80, 0, 0x03, 0, 0, 0], &LayoutAliases::new()).unwrap();
        assert_eq!(bare, with_reserved);
    }
}
