//! Board position (x, y) coordinate type.

use std::fmt::{self, Display};

/// A position on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions are immutable value types; all derived indices (linear
/// index, box index) are computed on demand.
///
/// # Examples
///
/// ```
/// use sudoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.index(), 7 * 9 + 4);
/// assert_eq!(pos.box_index(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from a row-major linear index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81);
        Self {
            x: index % 9,
            y: index / 9,
        }
    }

    /// Creates a position from a box index (0-8) and a cell index within
    /// that box (0-8), both counted left to right, top to bottom.
    ///
    /// This is the inverse of [`box_index`](Self::box_index) and
    /// [`box_cell_index`](Self::box_cell_index).
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell_index` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_core::Position;
    ///
    /// // Center cell of the center box
    /// assert_eq!(Position::from_box(4, 4), Position::new(4, 4));
    /// // Top-left cell of the bottom-right box
    /// assert_eq!(Position::from_box(8, 0), Position::new(6, 6));
    /// ```
    #[must_use]
    pub const fn from_box(box_index: u8, cell_index: u8) -> Self {
        assert!(box_index < 9 && cell_index < 9);
        Self {
            x: (box_index % 3) * 3 + cell_index % 3,
            y: (box_index / 3) * 3 + cell_index / 3,
        }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major linear index (0-80).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.y * 9 + self.x
    }

    /// Returns the index (0-8) of the 3x3 box containing this position.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the index (0-8) of this position within its 3x3 box.
    #[must_use]
    pub const fn box_cell_index(self) -> u8 {
        (self.y % 3) * 3 + self.x % 3
    }

    /// Returns the position one row up, or `None` at the top edge.
    #[must_use]
    pub const fn up(self) -> Option<Self> {
        if self.y == 0 {
            None
        } else {
            Some(Self {
                x: self.x,
                y: self.y - 1,
            })
        }
    }

    /// Returns the position one row down, or `None` at the bottom edge.
    #[must_use]
    pub const fn down(self) -> Option<Self> {
        if self.y == 8 {
            None
        } else {
            Some(Self {
                x: self.x,
                y: self.y + 1,
            })
        }
    }

    /// Returns the position one column left, or `None` at the left edge.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        if self.x == 0 {
            None
        } else {
            Some(Self {
                x: self.x - 1,
                y: self.y,
            })
        }
    }

    /// Returns the position one column right, or `None` at the right edge.
    #[must_use]
    pub const fn right(self) -> Option<Self> {
        if self.x == 8 {
            None
        } else {
            Some(Self {
                x: self.x + 1,
                y: self.y,
            })
        }
    }

    /// Returns the 20 distinct positions sharing a row, column, or 3x3 box
    /// with this position (excluding the position itself).
    ///
    /// Order: the 8 other cells of the row, the 8 other cells of the column,
    /// then the 4 box cells not already covered.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_core::Position;
    ///
    /// let peers = Position::new(0, 0).house_peers();
    /// assert_eq!(peers.len(), 20);
    /// assert!(peers.contains(&Position::new(8, 0))); // same row
    /// assert!(peers.contains(&Position::new(0, 8))); // same column
    /// assert!(peers.contains(&Position::new(2, 2))); // same box
    /// assert!(!peers.contains(&Position::new(0, 0)));
    /// ```
    #[must_use]
    pub fn house_peers(self) -> [Self; 20] {
        let mut peers = [self; 20];
        let mut n = 0;
        for x in 0..9 {
            if x != self.x {
                peers[n] = Self { x, y: self.y };
                n += 1;
            }
        }
        for y in 0..9 {
            if y != self.y {
                peers[n] = Self { x: self.x, y };
                n += 1;
            }
        }
        for i in 0..9 {
            let pos = Self::from_box(self.box_index(), i);
            if pos.x != self.x && pos.y != self.y {
                peers[n] = pos;
                n += 1;
            }
        }
        debug_assert_eq!(n, 20);
        peers
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
