//! The Hamming(7,4) single-error-correcting code.
//!
//! Codewords use the layout `p1 p2 d1 p3 d2 d3 d4`: parity bits sit at the
//! 1-based positions 1, 2 and 4, so the syndrome of a single flipped bit,
//! read as a binary number, is the position of that bit.

use std::fmt;

use nalgebra::{SMatrix, SVector};
use numlab_core::error::{NumError, Result};
use tracing::{debug, warn};

/// Block length.
pub const CODE_LEN: usize = 7;
/// Message length.
pub const DATA_LEN: usize = 4;

/// Codeword indices that carry the message bits.
const DATA_POSITIONS: [usize; DATA_LEN] = [2, 4, 5, 6];

/// Generator matrix `G` (7×4): `c = G·d mod 2`.
pub fn generator() -> SMatrix<u8, CODE_LEN, DATA_LEN> {
    SMatrix::from_row_slice(&[
        1, 1, 0, 1, //
        1, 0, 1, 1, //
        1, 0, 0, 0, //
        0, 1, 1, 1, //
        0, 1, 0, 0, //
        0, 0, 1, 0, //
        0, 0, 0, 1,
    ])
}

/// Parity-check matrix `H` (3×7): `H·c mod 2 = 0` for every codeword.
pub fn parity_check() -> SMatrix<u8, 3, CODE_LEN> {
    SMatrix::from_row_slice(&[
        1, 0, 1, 0, 1, 0, 1, //
        0, 1, 1, 0, 0, 1, 1, //
        0, 0, 0, 1, 1, 1, 1,
    ])
}

/// A 7-bit word as sent over the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codeword {
    bits: [u8; CODE_LEN],
}

impl Codeword {
    /// Wrap raw bits, rejecting anything other than 0 and 1.
    pub fn from_bits(bits: [u8; CODE_LEN]) -> Result<Self> {
        ensure_binary(&bits)?;
        Ok(Self { bits })
    }

    /// The bits, in channel order.
    pub const fn bits(&self) -> [u8; CODE_LEN] {
        self.bits
    }

    /// Flip the bit at 0-based `index`, simulating a transmission error.
    pub fn flip(&mut self, index: usize) -> Result<()> {
        let bit = self.bits.get_mut(index).ok_or_else(|| {
            NumError::invalid_input(format!(
                "bit index {index} is outside a {CODE_LEN}-bit codeword"
            ))
        })?;
        *bit ^= 1;
        Ok(())
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

fn ensure_binary(bits: &[u8]) -> Result<()> {
    match bits.iter().position(|&b| b > 1) {
        Some(i) => Err(NumError::invalid_input(format!(
            "bit {i} is {}, expected 0 or 1",
            bits[i]
        ))),
        None => Ok(()),
    }
}

/// Parse a string of `'0'`/`'1'` characters into bits.
pub fn parse_bits<const N: usize>(text: &str) -> Result<[u8; N]> {
    let mut bits = [0u8; N];
    let chars: Vec<char> = text.trim().chars().collect();
    if chars.len() != N {
        return Err(NumError::dimension_mismatch(
            format!("{N} bits"),
            format!("{} characters", chars.len()),
        ));
    }
    for (slot, ch) in bits.iter_mut().zip(chars) {
        *slot = match ch {
            '0' => 0,
            '1' => 1,
            other => {
                return Err(NumError::invalid_input(format!(
                    "'{other}' is not a bit"
                )))
            }
        };
    }
    Ok(bits)
}

/// Encode four message bits.
pub fn encode(data: [u8; DATA_LEN]) -> Result<Codeword> {
    ensure_binary(&data)?;
    let product = generator() * SVector::<u8, DATA_LEN>::from(data);
    let mut bits = [0u8; CODE_LEN];
    for (slot, value) in bits.iter_mut().zip(product.iter()) {
        *slot = value % 2;
    }
    Ok(Codeword { bits })
}

/// 1-based position of a single-bit error, or 0 when the word checks out.
pub fn syndrome(word: &Codeword) -> usize {
    let checks = parity_check() * SVector::<u8, CODE_LEN>::from(word.bits);
    checks
        .iter()
        .enumerate()
        .map(|(i, &s)| usize::from(s % 2) << i)
        .sum()
}

/// Correct a single-bit error in place, returning the 1-based position
/// that was flipped.
pub fn correct(word: &mut Codeword) -> Option<usize> {
    let position = syndrome(word);
    if position == 0 {
        return None;
    }
    word.bits[position - 1] ^= 1;
    debug!(position, "corrected single-bit error");
    Some(position)
}

/// Result of decoding a received word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// Recovered message bits
    pub data: [u8; DATA_LEN],
    /// 1-based position that was corrected, if any
    pub corrected_position: Option<usize>,
}

/// Correct at most one error and extract the message.
///
/// Two or more errors are miscorrected silently; the code cannot detect them.
pub fn decode(mut word: Codeword) -> DecodeOutcome {
    let corrected_position = correct(&mut word);
    if let Some(position) = corrected_position {
        warn!(position, "received word had a bit error");
    }
    DecodeOutcome {
        data: DATA_POSITIONS.map(|i| word.bits[i]),
        corrected_position,
    }
}
