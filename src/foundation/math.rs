pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

/// Expand a channel of `bits` width to 8 bits by bit replication.
pub(crate) fn expand_bits(v: u32, bits: u32) -> u8 {
    let v = v & ((1 << bits) - 1);
    ((v << (8 - bits)) | (v >> (2 * bits).saturating_sub(8))) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
