//! Byte-aligned 1-bit transpose for dimensions that are multiples of 8.
//!
//! The matrix is processed as a grid of 8x8 bit squares. Each square fits in
//! a `u64` and is transposed with three masked XOR-swaps, after which it is
//! written to the mirrored position of the output.

/// Transpose a `width` x `height` bit matrix with byte-aligned rows.
///
/// Input rows span `width / 8` bytes, output rows span `height / 8` bytes.
/// Input bytes past the end of `input` read as zero.
///
/// # Panics
/// In debug builds, if `width % 8 != 0` or `height % 8 != 0`.
pub fn transpose(input: &[u8], width: usize, height: usize) -> Vec<u8> {
    debug_assert_eq!(0, width % 8, "width must be a multiple of 8");
    debug_assert_eq!(0, height % 8, "height must be a multiple of 8");
    let in_stride = width / 8;
    let out_stride = height / 8;
    let mut output = vec![0; width * out_stride];

    // i indexes squares along the input rows, j along the input columns
    for i in 0..out_stride {
        for j in 0..in_stride {
            let mut square = [0_u8; 8];
            for (k, row) in square.iter_mut().enumerate() {
                *row = input
                    .get((i * 8 + k) * in_stride + j)
                    .copied()
                    .unwrap_or(0);
            }

            let square = transpose_8x8(square);

            for (k, row) in square.into_iter().enumerate() {
                output[(j * 8 + k) * out_stride + i] = row;
            }
        }
    }
    output
}

/// Transpose an 8x8 bit square stored as eight MSB-first rows.
///
/// With the rows loaded big-endian into a `u64`, the element at row `r` and
/// column `c` sits at bit `63 - 8r - c`. The first swap transposes each 2x2
/// sub-square, the second swaps the off-diagonal 2x2 blocks of every 4x4
/// sub-square and the last swaps the off-diagonal 4x4 blocks.
#[inline]
pub fn transpose_8x8(rows: [u8; 8]) -> [u8; 8] {
    let mut x = u64::from_be_bytes(rows);
    x = delta_swap::<7>(x, 0x00AA_00AA_00AA_00AA);
    x = delta_swap::<14>(x, 0x0000_CCCC_0000_CCCC);
    x = delta_swap::<28>(x, 0x0000_0000_F0F0_F0F0);
    x.to_be_bytes()
}

/// Swap the bits selected by `mask` with the bits `SHIFT` positions above
/// them.
#[inline]
fn delta_swap<const SHIFT: u32>(x: u64, mask: u64) -> u64 {
    let diff = (x ^ (x >> SHIFT)) & mask;
    x ^ diff ^ (diff << SHIFT)
}
