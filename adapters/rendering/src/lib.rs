#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Treasure Hunt adapters.

use anyhow::{Context, Result as AnyResult};
use std::{fmt, io::Write, thread, time::Duration};
use treasure_hunt_core::CellCoord;

/// Escape sequence that clears the terminal before each frame.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Text snapshot of the board handed to a presenter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    grid: String,
    candidates: Vec<CellCoord>,
    found: Option<CellCoord>,
    caption: Option<String>,
}

impl Frame {
    /// Creates a frame around a rendered grid.
    #[must_use]
    pub fn new<T>(grid: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            grid: grid.into(),
            ..Self::default()
        }
    }

    /// Lists the cells that may still hold the treasure.
    #[must_use]
    pub fn with_candidates<I>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = CellCoord>,
    {
        self.candidates = cells.into_iter().collect();
        self.candidates.sort_unstable();
        self.candidates.dedup();
        self
    }

    /// Announces the treasure location once it has been found.
    #[must_use]
    pub fn with_found(mut self, cell: Option<CellCoord>) -> Self {
        self.found = cell;
        self
    }

    /// Appends a free-form line below the board.
    #[must_use]
    pub fn with_caption<T>(mut self, caption: T) -> Self
    where
        T: Into<String>,
    {
        self.caption = Some(caption.into());
        self
    }

    /// Rendered grid rows.
    #[must_use]
    pub fn grid(&self) -> &str {
        &self.grid
    }

    /// Candidate cells in ascending order.
    #[must_use]
    pub fn candidates(&self) -> &[CellCoord] {
        &self.candidates
    }

    /// Treasure location, if announced.
    #[must_use]
    pub const fn found(&self) -> Option<CellCoord> {
        self.found
    }

    /// Caption line, if any.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grid)?;

        if !self.candidates.is_empty() {
            f.write_str("\nPossible treasure location: ")?;
            for cell in &self.candidates {
                write!(f, "{cell},")?;
            }
        }

        if let Some(cell) = self.found {
            write!(f, "\nTreasure found at location: {cell}! Congratulation!")?;
        }

        if let Some(caption) = &self.caption {
            write!(f, "\n{caption}")?;
        }

        Ok(())
    }
}

/// Suspends presentation between frames.
pub trait Pacing {
    /// Waits for the provided duration.
    fn pause(&mut self, duration: Duration);
}

/// Pacing that blocks the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacing;

impl Pacing for ThreadPacing {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Pacing that returns immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacing;

impl Pacing for NoPacing {
    fn pause(&mut self, _duration: Duration) {}
}

/// Output surface capable of showing Treasure Hunt frames.
pub trait Presenter {
    /// Shows a single frame.
    fn present(&mut self, frame: &Frame) -> AnyResult<()>;

    /// Keeps the current frame on screen for an extra `duration`.
    fn hold(&mut self, duration: Duration) -> AnyResult<()>;
}

/// Presenter that redraws frames on an ANSI terminal.
///
/// Each frame clears the screen, prints the frame and then waits for the
/// configured frame delay.
#[derive(Debug)]
pub struct TerminalPresenter<W, P> {
    out: W,
    pacing: P,
    frame_delay: Duration,
}

impl<W: Write, P: Pacing> TerminalPresenter<W, P> {
    /// Creates a presenter writing into `out`.
    #[must_use]
    pub const fn new(out: W, pacing: P, frame_delay: Duration) -> Self {
        Self {
            out,
            pacing,
            frame_delay,
        }
    }

    /// Delay applied after each frame.
    #[must_use]
    pub const fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// Releases the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write, P: Pacing> Presenter for TerminalPresenter<W, P> {
    fn present(&mut self, frame: &Frame) -> AnyResult<()> {
        writeln!(self.out, "{CLEAR_SCREEN}\n{frame}").context("failed to write frame")?;
        self.out.flush().context("failed to flush terminal")?;
        self.pacing.pause(self.frame_delay);
        Ok(())
    }

    fn hold(&mut self, duration: Duration) -> AnyResult<()> {
        self.pacing.pause(duration);
        Ok(())
    }
}
