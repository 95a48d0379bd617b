//! Buffered LED strip
//!
//! Cell writes only touch the in-memory frame buffer. Nothing reaches the
//! hardware until [`Strip::show`] pushes the whole buffer to the driver.

use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::color::{OFF, Rgb};

/// Frame buffer of `N` cells bound to an output driver
pub struct Strip<D: OutputDriver, const N: usize> {
    driver: D,
    cells: [Rgb; N],
}

impl<D: OutputDriver, const N: usize> Strip<D, N> {
    /// Create a strip with every cell off
    ///
    /// The buffer is not transmitted until the first [`Strip::show`].
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            cells: [OFF; N],
        }
    }

    /// Number of cells on the strip
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Write one cell of the buffer
    ///
    /// Indices past the end of the strip are ignored.
    pub fn set_cell(&mut self, index: usize, color: Rgb) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = color;
        }
    }

    /// Write every cell of the buffer
    pub fn fill(&mut self, color: Rgb) {
        self.cells.fill(color);
    }

    /// Turn every cell of the buffer off
    pub fn clear(&mut self) {
        self.fill(OFF);
    }

    /// Transmit the buffer to the hardware
    pub fn show(&mut self) {
        self.driver.write(&self.cells);
    }

    pub fn cells(&self) -> &[Rgb] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Rgb] {
        &mut self.cells
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }
}

/// [`OutputDriver`] on top of any `smart-leds` writer
///
/// Write errors are dropped: a failed frame is simply replaced by the next one.
pub struct SmartLedsDriver<W> {
    writer: W,
}

impl<W> SmartLedsDriver<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub const fn inner(&self) -> &W {
        &self.writer
    }
}

impl<W> OutputDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) {
        let _ = self.writer.write(colors.iter().copied());
    }
}
