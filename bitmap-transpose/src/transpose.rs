//! Transpose row-major matrices into column-major order.
//!
//! [`transpose`] picks one of four [`Variant`]s from the requested element
//! width and the matrix dimensions. Each variant is a pure function from the
//! input bytes to a freshly allocated output buffer and can be run directly
//! via [`transpose_with_variant`].
use serde::{Deserialize, Serialize};
use tracing::{Level, Span, debug, trace};

use crate::layout::{ElementBits, MatrixDescriptor, RowLayout};

pub mod aligned;
pub mod bytes;
pub mod packed;
pub mod strided;

/// Error type returned by [`transpose`].
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported element width: {0} bits (expected 1 or 8)")]
    UnsupportedElementWidth(u8),
    #[error("input too short. expected: {expected} bytes, actual: {actual}")]
    InputTooShort { expected: usize, actual: usize },
    #[error("matrix has no elements. width: {width}, height: {height}")]
    EmptyMatrix { width: usize, height: usize },
}

/// Options controlling how the input is interpreted and how strictly it is
/// checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransposeOptions {
    /// Bits per element, either 1 or 8.
    pub element_bits: u8,
    /// Emit 1-bit output without per-row padding.
    pub packed: bool,
    /// Reject empty matrices and inputs shorter than the descriptor requires
    /// instead of reading missing bytes as zero.
    pub strict: bool,
}

impl Default for TransposeOptions {
    fn default() -> Self {
        Self {
            element_bits: 1,
            packed: false,
            strict: false,
        }
    }
}

impl TransposeOptions {
    /// Options for an 8-bit matrix.
    pub fn bits8() -> Self {
        Self::default().with_element_bits(8)
    }

    pub fn with_element_bits(mut self, element_bits: u8) -> Self {
        self.element_bits = element_bits;
        self
    }

    pub fn with_packed(mut self, packed: bool) -> Self {
        self.packed = packed;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// The transpose algorithm used for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// 1-bit, width and height are multiples of 8.
    ByteAligned,
    /// 1-bit, arbitrary dimensions with byte-aligned output rows.
    Strided,
    /// 1-bit, output bits contiguous without row padding.
    Packed,
    /// 8-bit elements.
    Bytes,
}

impl Variant {
    /// Select the variant for a `width` x `height` matrix.
    ///
    /// Fails with [`Error::UnsupportedElementWidth`] if
    /// `options.element_bits` is neither 1 nor 8.
    pub fn select(
        width: usize,
        height: usize,
        options: &TransposeOptions,
    ) -> Result<Self, Error> {
        let element_bits = ElementBits::try_from(options.element_bits)?;
        let variant = match element_bits {
            ElementBits::One if options.packed => Self::Packed,
            ElementBits::One if width % 8 == 0 && height % 8 == 0 => Self::ByteAligned,
            ElementBits::One => Self::Strided,
            ElementBits::Eight => Self::Bytes,
        };
        trace!(width, height, variant = variant.as_str(), "selected variant");
        Ok(variant)
    }

    pub fn element_bits(self) -> ElementBits {
        match self {
            Self::Bytes => ElementBits::Eight,
            _ => ElementBits::One,
        }
    }

    /// Layout of the rows this variant produces.
    pub fn output_layout(self) -> RowLayout {
        match self {
            Self::Packed => RowLayout::Packed,
            _ => RowLayout::ByteAligned,
        }
    }

    /// Length in bytes of the output for a `width` x `height` input.
    ///
    /// ```
    /// # use bitmap_transpose::Variant;
    /// assert_eq!(10 * 2, Variant::Strided.output_len(10, 9));
    /// assert_eq!(12, Variant::Packed.output_len(10, 9));
    /// assert_eq!(90, Variant::Bytes.output_len(10, 9));
    /// ```
    pub fn output_len(self, width: usize, height: usize) -> usize {
        MatrixDescriptor::new(width, height, self.element_bits())
            .transposed()
            .len(self.output_layout())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ByteAligned => "byte_aligned",
            Self::Strided => "strided",
            Self::Packed => "packed",
            Self::Bytes => "bytes",
        }
    }
}

/// Transpose the row-major `width` x `height` matrix stored in `input`.
///
/// 1-bit input is always read as byte-aligned rows of `ceil(width / 8)`
/// bytes. The output has one row per input column. It is byte-aligned
/// unless `options.packed` is set, in which case all bits are contiguous.
///
/// Missing input bytes read as zero unless `options.strict` is set.
///
/// ```
/// use bitmap_transpose::{TransposeOptions, transpose};
///
/// let out = transpose(&[1, 2, 3, 4, 5, 6], 2, 3, &TransposeOptions::bits8()).unwrap();
/// assert_eq!(vec![1, 3, 5, 2, 4, 6], out);
/// ```
#[tracing::instrument(level = Level::DEBUG, skip_all, fields(width = width, height = height, variant = tracing::field::Empty))]
pub fn transpose(
    input: &[u8],
    width: usize,
    height: usize,
    options: &TransposeOptions,
) -> Result<Vec<u8>, Error> {
    let variant = Variant::select(width, height, options)?;
    Span::current().record("variant", variant.as_str());

    let desc = MatrixDescriptor::new(width, height, variant.element_bits());
    if options.strict {
        desc.check_input(input).inspect_err(|err| {
            debug!(%err, "rejected input");
        })?;
    } else if input.len() < desc.len(RowLayout::ByteAligned) {
        trace!(
            expected = desc.len(RowLayout::ByteAligned),
            actual = input.len(),
            "short input, missing bytes read as zero"
        );
    }

    Ok(transpose_with_variant(input, width, height, variant))
}

/// Transpose with a fixed `variant`, skipping selection and checks.
///
/// [`Variant::ByteAligned`] requires `width` and `height` to be multiples
/// of 8.
pub fn transpose_with_variant(
    input: &[u8],
    width: usize,
    height: usize,
    variant: Variant,
) -> Vec<u8> {
    match variant {
        Variant::ByteAligned => aligned::transpose(input, width, height),
        Variant::Strided => strided::transpose(input, width, height),
        Variant::Packed => packed::transpose(input, width, height),
        Variant::Bytes => bytes::transpose(input, width, height),
    }
}

/// Length in bytes of the output of [`transpose`] for the given arguments.
pub fn output_len(
    width: usize,
    height: usize,
    options: &TransposeOptions,
) -> Result<usize, Error> {
    Ok(Variant::select(width, height, options)?.output_len(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_tracing;

    #[test]
    fn test_select() {
        let bits1 = TransposeOptions::default();
        assert_eq!(Variant::ByteAligned, Variant::select(16, 8, &bits1).unwrap());
        assert_eq!(Variant::Strided, Variant::select(16, 7, &bits1).unwrap());
        assert_eq!(Variant::Strided, Variant::select(3, 8, &bits1).unwrap());
        let packed = bits1.with_packed(true);
        assert_eq!(Variant::Packed, Variant::select(16, 8, &packed).unwrap());
        assert_eq!(Variant::Packed, Variant::select(3, 5, &packed).unwrap());
        // packed only applies to 1-bit elements
        let bits8 = TransposeOptions::bits8().with_packed(true);
        assert_eq!(Variant::Bytes, Variant::select(3, 5, &bits8).unwrap());
    }

    #[test]
    fn test_unsupported_element_width() {
        let _g = init_tracing();
        for bits in [0, 2, 3, 4, 16] {
            let opts = TransposeOptions::default().with_element_bits(bits);
            assert_eq!(
                Err(Error::UnsupportedElementWidth(bits)),
                transpose(&[0; 8], 8, 8, &opts)
            );
            assert!(output_len(8, 8, &opts).is_err());
        }
    }

    #[test]
    fn test_bytes_scenario() {
        let _g = init_tracing();
        let out = transpose(&[1, 2, 3, 4, 5, 6], 2, 3, &TransposeOptions::bits8()).unwrap();
        assert_eq!(vec![1, 3, 5, 2, 4, 6], out);
    }

    #[test]
    fn test_diagonal_is_fixed_point() {
        let _g = init_tracing();
        let diag = [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01];
        let out = transpose(&diag, 8, 8, &TransposeOptions::default()).unwrap();
        assert_eq!(diag.to_vec(), out);
    }

    #[test]
    fn test_strict_mode() {
        let _g = init_tracing();
        let strict = TransposeOptions::default().with_strict(true);
        assert_eq!(
            Err(Error::InputTooShort {
                expected: 6,
                actual: 5
            }),
            transpose(&[0; 5], 10, 3, &strict)
        );
        assert_eq!(
            Err(Error::EmptyMatrix {
                width: 0,
                height: 3
            }),
            transpose(&[], 0, 3, &strict)
        );
        assert!(transpose(&[0; 6], 10, 3, &strict).is_ok());
    }

    #[test]
    fn test_lenient_mode() {
        let _g = init_tracing();
        let lenient = TransposeOptions::default();
        assert_eq!(Ok(vec![]), transpose(&[], 0, 3, &lenient));
        // 8x8 aligned input with the last row missing
        let out = transpose(&[0xff; 7], 8, 8, &lenient).unwrap();
        assert_eq!(vec![0xfe; 8], out);
        let out = transpose(&[1, 2, 3], 2, 2, &TransposeOptions::bits8()).unwrap();
        assert_eq!(vec![1, 3, 2, 0], out);
    }

    #[test]
    fn test_output_len() {
        let opts = TransposeOptions::default();
        assert_eq!(Ok(16), output_len(16, 8, &opts));
        assert_eq!(Ok(10 * 2), output_len(10, 9, &opts));
        assert_eq!(Ok(12), output_len(10, 9, &opts.with_packed(true)));
        assert_eq!(Ok(90), output_len(10, 9, &TransposeOptions::bits8()));
    }

    #[test]
    fn test_options_serde() {
        let opts = TransposeOptions::bits8().with_strict(true);
        let bytes = bincode::serialize(&opts).unwrap();
        let back: TransposeOptions = bincode::deserialize(&bytes).unwrap();
        assert_eq!(opts, back);
    }
}
