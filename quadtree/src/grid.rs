use std::fmt::Debug;

use itertools::Itertools;

use crate::{Error, Result};

/// A square grid of 8 bit gray values
///
/// # implementation details
/// stored in row-major format, `pixels[y * dim + x]`
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    dim: usize,
    pixels: Vec<u8>,
}
impl PixelGrid {
    pub fn filled(dim: usize, value: u8) -> Self {
        Self {
            dim,
            pixels: vec![value; dim * dim],
        }
    }
    /// `filled` for sizes that come from untrusted input, out of memory is an error
    pub fn try_filled(dim: usize, value: u8) -> Result<Self> {
        let too_large = || Error::TooLarge { dim };
        let len = dim.checked_mul(dim).ok_or_else(too_large)?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| too_large())?;
        pixels.resize(len, value);
        Ok(Self { dim, pixels })
    }
    /// `f` is called with `(x, y)` for every pixel, row by row
    pub fn from_fn(dim: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let pixels = (0..dim)
            .cartesian_product(0..dim)
            .map(|(y, x)| f(x, y))
            .collect();
        Self { dim, pixels }
    }
    /// takes ownership of a row-major pixel buffer of length `dim * dim`
    pub fn from_raw(dim: usize, pixels: Vec<u8>) -> Result<Self> {
        if pixels.len() != dim * dim {
            return Err(Error::PixelCount {
                expected: dim * dim,
                actual: pixels.len(),
            });
        }
        Ok(Self { dim, pixels })
    }
    /// every row must be as long as there are rows
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let dim = rows.len();
        let mut pixels = Vec::with_capacity(dim * dim);
        for row in rows {
            let row = row.as_ref();
            if row.len() != dim {
                return Err(Error::PixelCount {
                    expected: dim * dim,
                    actual: pixels.len() + row.len(),
                });
            }
            pixels.extend_from_slice(row);
        }
        Self::from_raw(dim, pixels)
    }
    /// reads the raw (headerless) format, inferring the side length from the token count
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn from_tokens(tokens: &[i64]) -> Result<Self> {
        let count = tokens.len();
        let dim = match exact_sqrt(count as u64) {
            Some(dim) => dim as usize,
            None => {
                // nearest square, for the error message
                let dim = (count as f64).sqrt().round() as usize;
                return Err(Error::PixelCount {
                    expected: dim * dim,
                    actual: count,
                });
            }
        };
        if !is_valid_dim(dim) {
            return Err(Error::InvalidDimension(dim));
        }
        let pixels = tokens
            .iter()
            .enumerate()
            .map(|(position, &value)| {
                u8::try_from(value).map_err(|_| Error::OutOfRangeValue { value, position })
            })
            .collect::<Result<Vec<u8>>>()?;
        Self::from_raw(dim, pixels)
    }
    /// writes the raw (headerless) format
    pub fn to_tokens(&self) -> Vec<i64> {
        self.pixels.iter().map(|&p| i64::from(p)).collect()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.dim && y < self.dim, "({x}, {y}) outside {0}x{0}", self.dim);
        self.pixels[y * self.dim + x]
    }
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks(0) panics, an empty grid has no rows either way
        self.pixels.chunks(self.dim.max(1))
    }
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn fill_square(&mut self, x: usize, y: usize, side: usize, value: u8) {
        for row in y..y + side {
            let start = row * self.dim + x;
            self.pixels[start..start + side].fill(value);
        }
    }
}
impl Debug for PixelGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PixelGrid({0}x{0}", self.dim)?;
        for row in self.rows() {
            writeln!(f, "    {}", row.iter().format_with(" ", |p, f| f(&format_args!("{p:3}"))))?;
        }
        write!(f, ")")
    }
}

/// side lengths a quadtree can tile down to single pixels
pub(crate) fn is_valid_dim(dim: usize) -> bool {
    dim >= 2 && dim.is_power_of_two()
}

/// `Some(r)` when `r * r == n`
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub(crate) fn exact_sqrt(n: u64) -> Option<u64> {
    let guess = (n as f64).sqrt() as u64;
    // float rounding is only ever off by one for large n
    (guess.saturating_sub(1)..=guess + 1).find(|r| r.checked_mul(*r) == Some(n))
}

#[cfg(test)]
mod test {
    use super::{exact_sqrt, is_valid_dim};
    use crate::{test_grid, Error, PixelGrid};

    #[test]
    fn sqrt() {
        assert_eq!(exact_sqrt(0), Some(0));
        assert_eq!(exact_sqrt(1), Some(1));
        assert_eq!(exact_sqrt(4), Some(2));
        assert_eq!(exact_sqrt(10), None);
        assert_eq!(exact_sqrt(1 << 40), Some(1 << 20));
        assert_eq!(exact_sqrt((1 << 40) + 1), None);
        assert_eq!(exact_sqrt(u64::MAX), None);
    }

    #[test]
    fn valid_dims() {
        assert!(!is_valid_dim(0));
        assert!(!is_valid_dim(1));
        assert!(is_valid_dim(2));
        assert!(!is_valid_dim(3));
        assert!(is_valid_dim(1024));
    }

    #[test]
    fn row_major() {
        let grid = test_grid! {"
            1 2
            3 4
        "};
        assert_eq!(grid.get(1, 0), 2);
        assert_eq!(grid.get(0, 1), 3);
        assert_eq!(grid.as_raw(), [1, 2, 3, 4]);
        assert_eq!(grid, PixelGrid::from_fn(2, |x, y| (1 + x + 2 * y) as u8));
    }

    #[test]
    fn raw_tokens() {
        let grid = PixelGrid::from_tokens(&[0, 85, 170, 255]).expect("valid raw grid");
        assert_eq!(grid.dim(), 2);
        assert_eq!(grid.to_tokens(), [0, 85, 170, 255]);
    }

    #[test]
    fn raw_tokens_errors() {
        assert_eq!(
            PixelGrid::from_tokens(&[0; 9]),
            Err(Error::InvalidDimension(3))
        );
        assert_eq!(
            PixelGrid::from_tokens(&[0; 5]),
            Err(Error::PixelCount {
                expected: 4,
                actual: 5
            })
        );
        assert_eq!(
            PixelGrid::from_tokens(&[0, 1, 256, 3]),
            Err(Error::OutOfRangeValue {
                value: 256,
                position: 2
            })
        );
        assert_eq!(PixelGrid::from_tokens(&[7]), Err(Error::InvalidDimension(1)));
    }

    #[test]
    fn ragged_rows() {
        let rows: [&[u8]; 2] = [&[1, 2], &[3]];
        assert_eq!(
            PixelGrid::from_rows(&rows),
            Err(Error::PixelCount {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn try_filled() {
        assert_eq!(PixelGrid::try_filled(4, 3), Ok(PixelGrid::filled(4, 3)));
        assert_eq!(
            PixelGrid::try_filled(1 << 31, 0),
            Err(Error::TooLarge { dim: 1 << 31 })
        );
        assert_eq!(
            PixelGrid::try_filled(usize::MAX, 0),
            Err(Error::TooLarge { dim: usize::MAX })
        );
    }

    #[test]
    fn fill() {
        let mut grid = PixelGrid::filled(4, 0);
        grid.fill_square(2, 0, 2, 9);
        assert_eq!(
            grid,
            test_grid! {"
                0 0 9 9
                0 0 9 9
                0 0 0 0
                0 0 0 0
            "}
        );
    }
}
