//! ## Matrix rain
//!
//! State of the animated character grid painted behind the page: one drop
//! per column, each falling one cell per tick and restarting at the top at
//! random once it has left the viewport.

use rand::Rng;

use crate::config::MatrixOptions;

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Constructs a new [`Viewport`].
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One glyph to paint during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    /// Column index.
    pub column: usize,
    /// Row the drop was on when painted.
    pub row: u32,
    /// Character to draw.
    pub symbol: char,
}

impl Glyph {
    /// Pixel position of the glyph's baseline for the given cell size.
    pub fn position(&self, cell_size: f64) -> (f64, f64) {
        (self.column as f64 * cell_size, f64::from(self.row) * cell_size)
    }
}

/// The falling-glyph grid.
#[derive(Debug, Clone)]
pub struct MatrixRain {
    /// Current row of every column's drop.
    drops: Vec<u32>,
    /// Glyphs to pick from.
    alphabet: Vec<char>,
    /// Edge of one square cell in pixels.
    cell_size: f64,
    /// Chance per tick that a drop below the bottom edge restarts.
    reset_probability: f64,
    /// Current viewport.
    viewport: Viewport,
}

impl MatrixRain {
    /// Row every new drop starts on.
    const FIRST_ROW: u32 = 1;

    /// Constructs a new [`MatrixRain`] filling `viewport`.
    pub fn new(options: &MatrixOptions, viewport: Viewport) -> Self {
        let mut rain = Self {
            drops: Vec::new(),
            alphabet: options.alphabet.chars().collect(),
            cell_size: options.cell_size,
            reset_probability: options.reset_probability,
            viewport,
        };
        rain.drops = vec![Self::FIRST_ROW; rain.column_count(viewport.width)];
        rain
    }

    /// Number of columns needed to cover `width`.
    fn column_count(&self, width: f64) -> usize {
        if width <= 0.0 {
            return 0;
        }
        (width / self.cell_size.max(MatrixOptions::MIN_CELL_SIZE)).ceil() as usize
    }

    /// Returns the drop rows, one per column.
    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    /// Returns the current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns the cell size in pixels.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Adapts the grid to a new viewport.
    ///
    /// Existing columns keep their drop; columns added by a wider viewport
    /// start at the top.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let columns = self.column_count(viewport.width);
        self.drops.resize(columns, Self::FIRST_ROW);
    }

    /// Advances every drop by one cell and returns the glyphs to paint.
    ///
    /// Each glyph is painted at the row its drop occupied before advancing.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Glyph> {
        let mut glyphs = Vec::with_capacity(self.drops.len());
        for (column, row) in self.drops.iter_mut().enumerate() {
            if let Some(symbol) = pick(&self.alphabet, rng) {
                glyphs.push(Glyph {
                    column,
                    row: *row,
                    symbol,
                });
            }
            if f64::from(*row) * self.cell_size > self.viewport.height
                && rng.gen::<f64>() < self.reset_probability
            {
                *row = 0;
            }
            *row = row.saturating_add(1);
        }
        glyphs
    }
}

/// Picks a random glyph.
fn pick<R: Rng + ?Sized>(alphabet: &[char], rng: &mut R) -> Option<char> {
    if alphabet.is_empty() {
        return None;
    }
    Some(alphabet[rng.gen_range(0..alphabet.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn options(reset_probability: f64) -> MatrixOptions {
        MatrixOptions::default()
            .cell_size(10.0)
            .reset_probability(reset_probability)
    }

    #[test]
    fn test_columns_cover_viewport() {
        let rain = MatrixRain::new(&options(0.0), Viewport::new(95.0, 50.0));
        assert_eq!(rain.drops(), &[1; 10]);
        let rain = MatrixRain::new(&options(0.0), Viewport::new(100.0, 50.0));
        assert_eq!(10, rain.drops().len());
        let rain = MatrixRain::new(&options(0.0), Viewport::new(0.0, 50.0));
        assert!(rain.drops().is_empty());
    }

    #[test]
    fn test_degenerate_cell_size_stays_bounded() {
        let rain = MatrixRain::new(&options(0.0).cell_size(0.0), Viewport::new(30.0, 10.0));
        assert_eq!(30, rain.drops().len());
        let rain = MatrixRain::new(&options(0.0).cell_size(f64::NAN), Viewport::new(30.0, 10.0));
        assert_eq!(30, rain.drops().len());
    }

    #[test]
    fn test_tick_paints_every_column_then_advances() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut rain = MatrixRain::new(&options(0.0), Viewport::new(30.0, 100.0));
        let glyphs = rain.tick(&mut rng);
        assert_eq!(3, glyphs.len());
        assert!(glyphs.iter().all(|glyph| glyph.row == 1));
        assert_eq!(vec![0, 1, 2], glyphs.iter().map(|g| g.column).collect::<Vec<_>>());
        assert_eq!(rain.drops(), &[2, 2, 2]);
        assert_eq!((20.0, 10.0), glyphs[2].position(10.0));
    }

    #[test]
    fn test_glyphs_come_from_alphabet() {
        let mut rng = SmallRng::seed_from_u64(1);
        let options = options(0.0).alphabet("<>");
        let mut rain = MatrixRain::new(&options, Viewport::new(200.0, 100.0));
        for _ in 0..20 {
            assert!(rain.tick(&mut rng).iter().all(|g| g.symbol == '<' || g.symbol == '>'));
        }
    }

    #[test]
    fn test_drops_never_reset_inside_viewport() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut rain = MatrixRain::new(&options(1.0), Viewport::new(50.0, 100.0));
        for expected in 2..=10 {
            rain.tick(&mut rng);
            assert!(rain.drops().iter().all(|row| *row == expected));
        }
        // Row 10 is exactly at the bottom edge, row 11 is past it.
        rain.tick(&mut rng);
        assert!(rain.drops().iter().all(|row| *row == 11));
        rain.tick(&mut rng);
        assert!(rain.drops().iter().all(|row| *row == 1));
    }

    #[test]
    fn test_zero_probability_keeps_falling() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut rain = MatrixRain::new(&options(0.0), Viewport::new(10.0, 20.0));
        for _ in 0..100 {
            rain.tick(&mut rng);
        }
        assert_eq!(rain.drops(), &[101]);
    }

    #[test]
    fn test_partial_probability_staggers_restarts() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut rain = MatrixRain::new(&options(0.025), Viewport::new(1000.0, 10.0));
        for _ in 0..40 {
            rain.tick(&mut rng);
        }
        let drops = rain.drops();
        assert!(drops.iter().any(|row| *row < 41));
        assert!(drops.iter().any(|row| *row == 41));
    }

    #[test]
    fn test_resize_follows_viewport() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut rain = MatrixRain::new(&options(0.0), Viewport::new(20.0, 100.0));
        rain.tick(&mut rng);
        rain.resize(Viewport::new(40.0, 100.0));
        assert_eq!(rain.drops(), &[2, 2, 1, 1]);
        assert_eq!(4, rain.tick(&mut rng).len());
        rain.resize(Viewport::new(10.0, 100.0));
        assert_eq!(rain.drops(), &[3]);
        assert_eq!(Viewport::new(10.0, 100.0), rain.viewport());
    }

    #[test]
    fn test_empty_alphabet_paints_nothing() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut rain = MatrixRain::new(&options(0.0).alphabet(""), Viewport::new(30.0, 30.0));
        assert!(rain.tick(&mut rng).is_empty());
        assert_eq!(rain.drops(), &[2, 2, 2]);
    }
}
