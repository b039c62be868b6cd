//! Conversion between byte-aligned and packed 1-bit layouts.
//!
//! Transposing does not change how rows are stored, so data has to be
//! repacked explicitly when moving between [`RowLayout::ByteAligned`] and
//! [`RowLayout::Packed`] matrices.
//!
//! [`RowLayout::ByteAligned`]: crate::layout::RowLayout::ByteAligned
//! [`RowLayout::Packed`]: crate::layout::RowLayout::Packed

use crate::layout::{get_bit, set_bit};

/// Convert a `width` x `height` bit matrix with byte-aligned rows into packed
/// layout.
///
/// ```
/// # use bitmap_transpose::repack::pack_rows;
/// // two rows of 3 bits each: 111 and 101
/// let packed = pack_rows(&[0b1110_0000, 0b1010_0000], 3, 2);
/// assert_eq!(vec![0b1111_0100], packed);
/// ```
pub fn pack_rows(aligned: &[u8], width: usize, height: usize) -> Vec<u8> {
    let row_bits = width.div_ceil(8) * 8;
    let mut packed = vec![0; (width * height).div_ceil(8)];
    for y in 0..height {
        for x in 0..width {
            if get_bit(aligned, y * row_bits + x) {
                set_bit(&mut packed, y * width + x);
            }
        }
    }
    packed
}

/// Convert a packed `width` x `height` bit matrix into byte-aligned rows.
///
/// Padding bits at the end of every row are zero.
pub fn unpack_rows(packed: &[u8], width: usize, height: usize) -> Vec<u8> {
    let stride = width.div_ceil(8);
    let mut aligned = vec![0; stride * height];
    for y in 0..height {
        for x in 0..width {
            if get_bit(packed, y * width + x) {
                set_bit(&mut aligned, y * stride * 8 + x);
            }
        }
    }
    aligned
}
