//! Matrix dimensions, row layouts and bit addressing.
//!
//! Bits are addressed MSB-first: element `i` of a bit sequence lives in byte
//! `i / 8` under the mask `0x80 >> (i % 8)`. Column-addressed
//! display controllers read the transposed output in exactly this order, so
//! every 1-bit variant goes through [`get_bit`] and [`set_bit`].
use serde::{Deserialize, Serialize};

use crate::transpose::Error;

/// Mask of the bit holding the first element of a byte.
pub const FIRST_BIT_MASK: u8 = 0b1000_0000;

/// Mask selecting element `index` within its containing byte.
#[inline]
pub const fn bit_mask(index: usize) -> u8 {
    FIRST_BIT_MASK >> (index % 8)
}

/// Read the element at bit `index`.
///
/// Indices past the end of `buf` read as `false`.
#[inline]
pub fn get_bit(buf: &[u8], index: usize) -> bool {
    buf.get(index / 8).is_some_and(|byte| byte & bit_mask(index) != 0)
}

/// Set the element at bit `index`.
///
/// # Panics
/// If `index / 8 >= buf.len()`.
#[inline]
pub fn set_bit(buf: &mut [u8], index: usize) {
    buf[index / 8] |= bit_mask(index);
}

/// Number of bits used to store a single matrix element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementBits {
    One = 1,
    Eight = 8,
}

impl ElementBits {
    pub fn bits(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ElementBits {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            8 => Ok(Self::Eight),
            other => Err(Error::UnsupportedElementWidth(other)),
        }
    }
}

/// How the rows of a 1-bit matrix are laid out in memory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowLayout {
    /// Every row starts on a byte boundary, padding bits at the row end are
    /// zero.
    #[default]
    ByteAligned,
    /// Bits are contiguous across the whole matrix with no per-row padding.
    Packed,
}

/// Dimensions and element width of a row-major matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatrixDescriptor {
    pub width: usize,
    pub height: usize,
    pub element_bits: ElementBits,
}

impl MatrixDescriptor {
    pub fn new(width: usize, height: usize, element_bits: ElementBits) -> Self {
        Self {
            width,
            height,
            element_bits,
        }
    }

    /// Descriptor of the transposed matrix, i.e. width and height swapped.
    pub fn transposed(&self) -> Self {
        Self::new(self.height, self.width, self.element_bits)
    }

    /// Number of bytes spanned by one byte-aligned row.
    pub fn row_stride(&self) -> usize {
        match self.element_bits {
            ElementBits::One => self.width.div_ceil(8),
            ElementBits::Eight => self.width,
        }
    }

    /// Number of bytes needed to store the matrix in `layout`.
    ///
    /// 8-bit matrices have no padding, so both layouts have the same size.
    ///
    /// ```
    /// # use bitmap_transpose::layout::{ElementBits, MatrixDescriptor, RowLayout};
    /// let desc = MatrixDescriptor::new(10, 3, ElementBits::One);
    /// assert_eq!(6, desc.len(RowLayout::ByteAligned));
    /// assert_eq!(4, desc.len(RowLayout::Packed));
    /// ```
    pub fn len(&self, layout: RowLayout) -> usize {
        match (self.element_bits, layout) {
            (ElementBits::One, RowLayout::ByteAligned) => self.row_stride() * self.height,
            (ElementBits::One, RowLayout::Packed) => (self.width * self.height).div_ceil(8),
            (ElementBits::Eight, _) => self.width * self.height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check `input` against this descriptor, stored as byte-aligned rows.
    pub fn check_input(&self, input: &[u8]) -> Result<(), Error> {
        if self.is_empty() {
            return Err(Error::EmptyMatrix {
                width: self.width,
                height: self.height,
            });
        }
        let expected = self.len(RowLayout::ByteAligned);
        if input.len() < expected {
            return Err(Error::InputTooShort {
                expected,
                actual: input.len(),
            });
        }
        Ok(())
    }
}
