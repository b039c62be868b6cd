//! 1-bit transpose with tightly packed output.
//!
//! The input is read as byte-aligned rows. The output is written through a
//! single bit cursor, so the transposed rows follow each other without any
//! padding.

use crate::layout::{get_bit, set_bit};

/// Transpose a `width` x `height` bit matrix into `ceil(width * height / 8)`
/// bytes of contiguous bits.
///
/// Reads past the end of `input` yield zero bits.
pub fn transpose(input: &[u8], width: usize, height: usize) -> Vec<u8> {
    let in_row_bits = width.div_ceil(8) * 8;
    let mut output = vec![0; (width * height).div_ceil(8)];

    let mut cursor = 0;
    for x in 0..width {
        for y in 0..height {
            if get_bit(input, y * in_row_bits + x) {
                set_bit(&mut output, cursor);
            }
            cursor += 1;
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::transpose;

    #[test]
    fn test_3x3_identity() {
        // rows 100, 010, 001 padded to one byte each
        let input = [0b1000_0000, 0b0100_0000, 0b0010_0000];
        // 100 010 001 followed by 7 padding bits
        assert_eq!(vec![0b1000_1000, 0b1000_0000], transpose(&input, 3, 3));
    }

    #[test]
    fn test_no_row_padding() {
        // 5x2 all set: output is 10 contiguous bits
        let out = transpose(&[0xf8, 0xf8], 5, 2);
        assert_eq!(vec![0xff, 0b1100_0000], out);
    }

    #[test]
    fn test_missing_trailing_bytes() {
        let out = transpose(&[0xff], 4, 2);
        assert_eq!(vec![0b1010_1010], out);
    }
}
