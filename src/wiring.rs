//! Const-checked descriptions of how a strip snakes across a rectangular panel.
//!
//! [`StripWiring`] lists, for each LED along the data line, the `(col, row)`
//! cell it lights. The play-field's wiring in [`crate::grid`] is built from
//! [`StripWiring::serpentine`] and [`StripWiring::from_far_end`].

/// Which cell each LED of an `N`-LED strip lights on a `W`×`H` panel.
///
/// [`StripWiring::new`] rejects, at compile time when used in a `const`, any
/// list that misses a cell or lights one twice.
///
/// ```rust
/// use reflex_grid::wiring::StripWiring;
///
/// const WIRED: StripWiring<6, 3, 2> = StripWiring::serpentine().from_far_end();
/// assert_eq!(
///     WIRED.cells(),
///     &[(0, 1), (1, 1), (2, 1), (2, 0), (1, 0), (0, 0)]
/// );
/// ```
///
/// ```text
/// serpentine() 3×2:      from_far_end():
///   LED0 LED1 LED2         LED5 LED4 LED3
///   LED5 LED4 LED3         LED0 LED1 LED2
/// ```
///
/// ```compile_fail
/// # use reflex_grid::wiring::StripWiring;
/// // (0,0) twice, (0,1) never
/// const BAD: StripWiring<4, 2, 2> = StripWiring::new([(0, 0), (0, 0), (1, 0), (1, 1)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StripWiring<const N: usize, const W: usize, const H: usize> {
    cells: [(u8, u8); N],
}

impl<const N: usize, const W: usize, const H: usize> StripWiring<N, W, H> {
    /// Checks that `cells` lights every cell of the panel exactly once.
    #[must_use]
    pub const fn new(cells: [(u8, u8); N]) -> Self {
        assert!(W * H == N, "panel must have one cell per LED");
        assert!(N <= 128, "panel too large for the coverage mask");

        let mut covered: u128 = 0;
        let mut led = 0;
        while led < N {
            let (col, row) = cells[led];
            assert!((col as usize) < W && (row as usize) < H, "cell off the panel");
            let bit = 1_u128 << (row as usize * W + col as usize);
            assert!(covered & bit == 0, "cell lit by two LEDs");
            covered |= bit;
            led += 1;
        }
        // N distinct in-range cells on an N-cell panel cover it.
        Self { cells }
    }

    /// `(col, row)` per LED, in data-line order.
    #[must_use]
    pub const fn cells(&self) -> &[(u8, u8); N] {
        &self.cells
    }

    /// The LED that lights `(col, row)`, if that cell is on the panel.
    #[must_use]
    pub const fn led_for(&self, col: u8, row: u8) -> Option<usize> {
        let mut led = 0;
        while led < N {
            let (led_col, led_row) = self.cells[led];
            if led_col == col && led_row == row {
                return Some(led);
            }
            led += 1;
        }
        None
    }

    /// A strip that enters at the top-left and turns back at the end of every row.
    #[must_use]
    pub const fn serpentine() -> Self {
        let mut cells = [(0_u8, 0_u8); N];
        let mut led = 0;
        while led < N {
            let row = led / W;
            let along = led % W;
            let col = if row % 2 == 0 { along } else { W - 1 - along };
            cells[led] = (col as u8, row as u8);
            led += 1;
        }
        Self::new(cells)
    }

    /// The same path with the data line attached at the other end.
    #[must_use]
    pub const fn from_far_end(self) -> Self {
        let mut cells = self.cells;
        let mut led = 0;
        while led < N {
            cells[led] = self.cells[N - 1 - led];
            led += 1;
        }
        Self::new(cells)
    }
}
