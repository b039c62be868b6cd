//! Transpose row-major matrices into column-major order.
//!
//! Monochrome image sources store pixels row by row, while many OLED and VFD
//! display controllers expect pixels addressed column by column. This crate
//! converts between the two for 1-bit bitmaps, with byte-aligned or packed
//! rows, and for plain 8-bit matrices.
//!
//! ```
//! use bitmap_transpose::{TransposeOptions, transpose};
//!
//! // 8x8 bitmap with a single pixel in row 0, column 2
//! let mut bitmap = [0_u8; 8];
//! bitmap[0] = 0b0010_0000;
//! let columns = transpose(&bitmap, 8, 8, &TransposeOptions::default()).unwrap();
//! // output row 2 now holds that pixel at position 0
//! assert_eq!(0b1000_0000, columns[2]);
//! ```
//!
//! Within a byte the first element is always stored in the most significant
//! bit. See [`layout`] for the addressing helpers.

pub mod layout;
pub mod repack;
#[cfg(any(test, feature = "__testing"))]
pub mod test_utils;
pub mod transpose;

pub use layout::{ElementBits, MatrixDescriptor, RowLayout};
pub use transpose::{Error, TransposeOptions, Variant, output_len, transpose};
