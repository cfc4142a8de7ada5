//! Bit scans over little-endian limb slices.
//!
//! Single-word counts come straight from `leading_zeros`/`trailing_zeros`,
//! which lower to the hardware instructions where they exist.

/// Position of the highest set bit plus one; 0 when every limb is zero.
pub(crate) fn bit_len32(limbs: &[u32]) -> usize {
    for (i, &l) in limbs.iter().enumerate().rev() {
        if l != 0 {
            return (i + 1) * 32 - l.leading_zeros() as usize;
        }
    }
    0
}

pub(crate) fn bit_len64(limbs: &[u64]) -> usize {
    for (i, &l) in limbs.iter().enumerate().rev() {
        if l != 0 {
            return (i + 1) * 64 - l.leading_zeros() as usize;
        }
    }
    0
}

/// Index of the lowest set bit; `None` when every limb is zero.
pub(crate) fn trailing_zeros32(limbs: &[u32]) -> Option<usize> {
    for (i, &l) in limbs.iter().enumerate() {
        if l != 0 {
            return Some(i * 32 + l.trailing_zeros() as usize);
        }
    }
    None
}

pub(crate) fn trailing_zeros64(limbs: &[u64]) -> Option<usize> {
    for (i, &l) in limbs.iter().enumerate() {
        if l != 0 {
            return Some(i * 64 + l.trailing_zeros() as usize);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_len_scans_past_zero_top_limbs() {
        assert_eq!(bit_len32(&[0]), 0);
        assert_eq!(bit_len32(&[1]), 1);
        assert_eq!(bit_len32(&[0, 1, 0]), 33);
        assert_eq!(bit_len64(&[0, 0x80]), 72);
    }

    #[test]
    fn trailing_zeros_finds_lowest_set_bit() {
        assert_eq!(trailing_zeros32(&[0, 0]), None);
        assert_eq!(trailing_zeros32(&[0, 2]), Some(33));
        assert_eq!(trailing_zeros64(&[0, 0xff]), Some(64));
    }
}
