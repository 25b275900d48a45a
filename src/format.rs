//! Aligned text rendering of matrices.
//!
//! ```text
//! ⎡ 1   2   3   4⎤
//! ⎢ 5   6   7   8⎥
//! ⎣ 9  10  11  12⎦
//! ```
//!
//! Rows are bracketed with `⎡ ⎤`, `⎢ ⎥` and `⎣ ⎦` (a single row uses
//! `[ ]`), columns are right-aligned and separated by two spaces. Large
//! matrices can be shown as an excerpt of their leading and trailing rows and
//! columns. The formatter's precision (`{:.3}`) and left alignment (`{:<}`)
//! are passed through to each element.

use core::fmt::{self, Write};
use core::marker::PhantomData;

use alloc::vec;

use crate::any::AnyMatrix;
use crate::dense::DenseMatrix;
use crate::diagonal::DiagonalMatrix;
use crate::symmetric::SymmetricMatrix;
use crate::traits::{MatrixRef, Scalar};
use crate::triangular::TriangularMatrix;
use crate::vector::Vector;

/// Rendering options for [`Formatted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions<'a> {
    /// Written before every line except the first.
    pub prefix: &'a str,
    /// Show only the first and last `excerpt` rows and columns when the
    /// matrix is larger than twice that in either direction. `0` shows
    /// everything.
    pub excerpt: usize,
    /// Size each column to its own widest element instead of using one
    /// width for the whole matrix.
    pub squeeze: bool,
    /// Character printed in place of zero elements.
    pub zero: Option<char>,
}

impl Default for FormatOptions<'_> {
    fn default() -> Self {
        Self {
            prefix: "",
            excerpt: 0,
            squeeze: false,
            zero: None,
        }
    }
}

/// A matrix paired with [`FormatOptions`], ready for `{}`.
///
/// ```
/// use numat::{formatted, DenseMatrix};
///
/// let m = DenseMatrix::from_fn(3, 4, |i, j| (i * 4 + j + 1) as f64).unwrap();
/// assert_eq!(
///     formatted(&m).to_string(),
///     "⎡ 1   2   3   4⎤\n⎢ 5   6   7   8⎥\n⎣ 9  10  11  12⎦"
/// );
/// ```
pub struct Formatted<'a, T, M: ?Sized> {
    matrix: &'a M,
    options: FormatOptions<'a>,
    _elem: PhantomData<fn() -> T>,
}

/// Wrap `m` for display with default options.
pub fn formatted<T, M>(m: &M) -> Formatted<'_, T, M>
where
    M: MatrixRef<T> + ?Sized,
{
    Formatted {
        matrix: m,
        options: FormatOptions::default(),
        _elem: PhantomData,
    }
}

impl<'a, T, M: ?Sized> Formatted<'a, T, M> {
    /// Replace all options at once.
    pub fn with_options(mut self, options: FormatOptions<'a>) -> Self {
        self.options = options;
        self
    }

    /// Prefix written before every line after the first.
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.options.prefix = prefix;
        self
    }

    /// Show only `n` leading and trailing rows and columns.
    ///
    /// ```
    /// use numat::{formatted, DenseMatrix};
    ///
    /// let big = DenseMatrix::<f64>::eye(100).unwrap();
    /// let s = formatted(&big).excerpt(3).to_string();
    /// assert!(s.starts_with("Dims(100, 100)\n⎡1  0  0  ...  ...  0  0  0⎤"));
    /// ```
    pub fn excerpt(mut self, n: usize) -> Self {
        self.options.excerpt = n;
        self
    }

    /// Per-column widths.
    pub fn squeeze(mut self) -> Self {
        self.options.squeeze = true;
        self
    }

    /// Print zeros as `.`.
    pub fn dot_zeros(mut self) -> Self {
        self.options.zero = Some('.');
        self
    }
}

struct Cell {
    precision: Option<usize>,
    zero: Option<char>,
}

impl Cell {
    fn write<T, W>(&self, w: &mut W, v: T) -> fmt::Result
    where
        T: Scalar + fmt::Display,
        W: Write,
    {
        match (self.zero, self.precision) {
            (Some(c), _) if v == T::zero() => w.write_char(c),
            (_, Some(p)) => write!(w, "{:.*}", p, v),
            _ => write!(w, "{}", v),
        }
    }

    fn width<T: Scalar + fmt::Display>(&self, v: T) -> usize {
        WriteCounting::count(|wc| self.write(wc, v))
    }
}

/// Whether index `k` of `n` is elided when showing `shown` at each end.
#[inline]
fn elided(k: usize, n: usize, shown: usize) -> bool {
    k >= shown && k + shown < n
}

fn pad(f: &mut fmt::Formatter<'_>, n: usize) -> fmt::Result {
    for _ in 0..n {
        f.write_char(' ')?;
    }
    Ok(())
}

impl<T, M> fmt::Display for Formatted<'_, T, M>
where
    T: Scalar + fmt::Display,
    M: MatrixRef<T> + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.matrix;
        let opts = &self.options;
        let (rows, cols) = m.dims();
        if rows == 0 || cols == 0 {
            return f.write_str("[]");
        }

        let shown = if opts.excerpt == 0 {
            rows.max(cols)
        } else {
            opts.excerpt
        };
        let elide_rows = 2 * shown < rows;
        let cell = Cell {
            precision: f.precision(),
            zero: opts.zero,
        };
        let left = matches!(f.align(), Some(fmt::Alignment::Left));

        let mut widths = vec![0usize; cols];
        for i in (0..rows).filter(|&i| !(elide_rows && elided(i, rows, shown))) {
            for j in (0..cols).filter(|&j| !elided(j, cols, shown)) {
                widths[j] = widths[j].max(cell.width(m.get(i, j)));
            }
        }
        if !opts.squeeze {
            let w = widths.iter().copied().max().unwrap_or(0);
            widths.iter_mut().for_each(|x| *x = w);
        }

        let mut first = true;
        if rows > 2 * shown || cols > 2 * shown {
            first = false;
            writeln!(f, "Dims({}, {})", rows, cols)?;
        }

        let mut i = 0;
        while i < rows {
            if !first {
                f.write_str(opts.prefix)?;
            }
            first = false;

            let (open, close) = match i {
                _ if rows == 1 => ("[", "]"),
                0 => ("⎡", "⎤\n"),
                _ if i < rows - 1 => ("⎢", "⎥\n"),
                _ => ("⎣", "⎦"),
            };
            f.write_str(open)?;

            let mut j = 0;
            while j < cols {
                if elided(j, cols, shown) {
                    j = cols - shown;
                    if i == 0 || i == rows - 1 {
                        f.write_str("...  ...  ")?;
                    } else {
                        f.write_str("          ")?;
                    }
                    continue;
                }
                let v = m.get(i, j);
                let gap = widths[j].saturating_sub(cell.width(v));
                if left {
                    cell.write(f, v)?;
                    pad(f, gap)?;
                } else {
                    pad(f, gap)?;
                    cell.write(f, v)?;
                }
                if j < cols - 1 {
                    f.write_str("  ")?;
                }
                j += 1;
            }
            f.write_str(close)?;

            if elide_rows && i + 1 >= shown && i + shown < rows {
                for _ in 0..3 {
                    writeln!(f, "{} .", opts.prefix)?;
                }
                i = rows - shown;
                continue;
            }
            i += 1;
        }
        Ok(())
    }
}

/// Counts bytes written without storing them.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}

macro_rules! impl_display {
    ($($ty:ident),*) => {
        $(
            impl<T: Scalar + fmt::Display> fmt::Display for $ty<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&formatted(self), f)
                }
            }
        )*
    };
}

impl_display!(
    DenseMatrix,
    Vector,
    SymmetricMatrix,
    DiagonalMatrix,
    TriangularMatrix,
    AnyMatrix
);
