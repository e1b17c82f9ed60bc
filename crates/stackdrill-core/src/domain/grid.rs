//! Grid shape for rendered blocks
//!
//! The grid is kept roughly square: `columns = ceil(sqrt(n))`,
//! `rows = ceil(n / columns)`.

/// Rows and columns of the output grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    pub rows: usize,
    pub columns: usize,
}

impl GridShape {
    /// Shape for `block_count` cells (0 cells gives a 0x0 grid)
    pub fn for_block_count(block_count: usize) -> Self {
        if block_count == 0 {
            return Self {
                rows: 0,
                columns: 0,
            };
        }

        let columns = ceil_sqrt(block_count);
        Self {
            rows: block_count.div_ceil(columns),
            columns,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// (row, column) of the cell at `index`, filled row by row
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        if self.columns == 0 || index >= self.cell_count() {
            return None;
        }
        Some((index / self.columns, index % self.columns))
    }
}

/// Smallest `c` with `c * c >= n`
fn ceil_sqrt(n: usize) -> usize {
    let mut c = (n as f64).sqrt() as usize;
    while c * c < n {
        c += 1;
    }
    while c > 0 && (c - 1) * (c - 1) >= n {
        c -= 1;
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape_examples() {
        assert_eq!(
            GridShape::for_block_count(50),
            GridShape {
                rows: 7,
                columns: 8
            }
        );
        assert_eq!(
            GridShape::for_block_count(10),
            GridShape {
                rows: 3,
                columns: 4
            }
        );
        assert_eq!(
            GridShape::for_block_count(2),
            GridShape {
                rows: 1,
                columns: 2
            }
        );
        assert_eq!(
            GridShape::for_block_count(1),
            GridShape {
                rows: 1,
                columns: 1
            }
        );
    }

    #[test]
    fn test_grid_shape_perfect_square() {
        assert_eq!(
            GridShape::for_block_count(25),
            GridShape {
                rows: 5,
                columns: 5
            }
        );
    }

    #[test]
    fn test_grid_shape_empty() {
        let shape = GridShape::for_block_count(0);
        assert_eq!(shape.cell_count(), 0);
        assert_eq!(shape.position(0), None);
    }

    #[test]
    fn test_grid_always_fits_blocks() {
        for n in 1..500 {
            let shape = GridShape::for_block_count(n);
            assert!(shape.cell_count() >= n);
            assert!(shape.cell_count() - n < shape.columns);
        }
    }

    #[test]
    fn test_position_row_major() {
        let shape = GridShape::for_block_count(10);
        assert_eq!(shape.position(0), Some((0, 0)));
        assert_eq!(shape.position(5), Some((1, 1)));
        assert_eq!(shape.position(11), Some((2, 3)));
        assert_eq!(shape.position(12), None);
    }
}
