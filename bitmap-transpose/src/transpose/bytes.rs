//! 8-bit transpose, one byte per element.

/// Transpose a `width` x `height` byte matrix.
///
/// Input bytes past the end of `input` read as zero.
pub fn transpose(input: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut output = vec![0; width * height];
    if output.is_empty() {
        return output;
    }
    // output row x holds column x of the input
    for (x, out_row) in output.chunks_exact_mut(height).enumerate() {
        for (y, out) in out_row.iter_mut().enumerate() {
            *out = input.get(y * width + x).copied().unwrap_or(0);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::transpose;

    #[test]
    fn test_2x3() {
        assert_eq!(vec![1, 3, 5, 2, 4, 6], transpose(&[1, 2, 3, 4, 5, 6], 2, 3));
    }

    #[test]
    fn test_single_row() {
        assert_eq!(vec![1, 2, 3], transpose(&[1, 2, 3], 3, 1));
        assert_eq!(vec![1, 2, 3], transpose(&[1, 2, 3], 1, 3));
    }

    #[test]
    fn test_twice_is_identity() {
        let input: Vec<u8> = (0..7 * 5).collect();
        assert_eq!(input, transpose(&transpose(&input, 7, 5), 5, 7));
    }

    #[test]
    fn test_empty() {
        assert!(transpose(&[], 0, 4).is_empty());
        assert!(transpose(&[], 4, 0).is_empty());
    }
}
