use crate::dims::{Pos, Size};

/// Row-major 2D buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2D<T> {
    /// Builds an array from already laid out rows.
    ///
    /// Returns `None` when the rows don't all have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }

        let row_count = rows.len();
        Some(Self {
            buf: rows.into_iter().flatten().collect(),
            rows: row_count,
            cols,
        })
    }

    pub fn size(&self) -> Size {
        Size(self.rows, self.cols)
    }

    pub fn pos_to_idx(&self, pos: Pos) -> Option<usize> {
        let Pos(r, c) = pos;
        if r >= self.rows || c >= self.cols {
            return None;
        }

        Some(r * self.cols + c)
    }

    pub fn idx_to_pos(&self, idx: usize) -> Option<Pos> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Pos(idx / self.cols, idx % self.cols))
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.pos_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_pos(i))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks` panics on zero, an empty array has no rows anyway
        self.buf.chunks(self.cols.max(1))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn to_nested(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}
