//! 1-bit transpose for arbitrary dimensions.
//!
//! Input rows are padded to `ceil(width / 8)` bytes and every output row,
//! one per input column, is padded to `ceil(height / 8)` bytes.

use crate::layout::{get_bit, set_bit};

/// Transpose a `width` x `height` bit matrix with byte-aligned rows.
///
/// Reads past the end of `input` yield zero bits, so an input holding exactly
/// `ceil(width * height / 8)` bytes without padding on its last row is
/// accepted.
pub fn transpose(input: &[u8], width: usize, height: usize) -> Vec<u8> {
    let in_row_bits = width.div_ceil(8) * 8;
    let out_row_bits = height.div_ceil(8) * 8;
    let mut output = vec![0; width * height.div_ceil(8)];

    for x in 0..width {
        let out_row = x * out_row_bits;
        for y in 0..height {
            if get_bit(input, y * in_row_bits + x) {
                set_bit(&mut output, out_row + y);
            }
        }
    }
    output
}
