use std::{
    io::{Stdout, Write},
    sync::mpsc::Receiver,
};

use crossterm::{
    QueueableCommand, cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};
use unicode_truncate::UnicodeTruncateStr;

use crate::maze::{Cell, Grid};

/// One snapshot to draw, with the status line shown under it.
pub struct Frame {
    pub status: String,
    pub grid: Grid,
}

pub struct Renderer {
    /// Standard output handle to write to the terminal
    stdout: Stdout,
    /// Number of frames drawn so far
    frames_drawn: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            stdout: std::io::stdout(),
            frames_drawn: 0,
        }
    }

    /// Check if the terminal can show a grid of the given size, status line included.
    pub fn fits(rows: usize, cols: usize) -> std::io::Result<bool> {
        let (term_width, term_height) = terminal::size()?;
        Ok((cols as u64) * (Cell::CELL_WIDTH as u64) <= term_width as u64
            && (rows as u64) < term_height as u64)
    }

    /// Draw frames until the sending side hangs up. Returns the number of frames drawn.
    pub fn render(mut self, frames: Receiver<Frame>) -> std::io::Result<usize> {
        self.stdout
            .queue(terminal::Clear(ClearType::All))?
            .queue(cursor::Hide)?;

        for frame in frames {
            self.draw(&frame)?;
        }

        queue!(self.stdout, cursor::Show)?;
        self.stdout.flush()?;
        tracing::debug!("[render] frame channel closed after {} frames", self.frames_drawn);
        Ok(self.frames_drawn)
    }

    fn draw(&mut self, frame: &Frame) -> std::io::Result<()> {
        let grid = &frame.grid;
        for row in 0..grid.rows() {
            self.stdout.queue(cursor::MoveTo(0, row as u16))?;
            for col in 0..grid.cols() {
                self.stdout.queue(style::Print(grid[(row, col)]))?;
            }
        }

        // Keep the status line on one terminal row
        let (term_width, _) = terminal::size()?;
        let (status, _) = frame.status.unicode_truncate(term_width as usize);
        queue!(
            self.stdout,
            cursor::MoveTo(0, grid.rows() as u16),
            terminal::Clear(ClearType::CurrentLine),
            style::PrintStyledContent(
                status
                    .to_string()
                    .with(Color::Yellow)
                    .attribute(Attribute::Bold)
            ),
        )?;
        self.stdout.flush()?;
        self.frames_drawn += 1;
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
