use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType},
};

use crate::text::fit_to_width;

/// How a screen line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Normal,
    Bold,
    Dim,
    Reverse,
}

/// One full-width line of the screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Raw-mode alternate screen that redraws only lines that changed.
pub struct Terminal {
    stdout: io::Stdout,
    previous: Vec<Line>,
    size: (u16, u16),
}

impl Terminal {
    /// Enter raw mode and the alternate screen.
    ///
    /// On error the terminal is left in cooked mode.
    pub fn new() -> io::Result<Self> {
        let size = terminal::size()?;
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        let entered = queue!(stdout, terminal::EnterAlternateScreen, cursor::Hide)
            .and_then(|()| stdout.flush());
        if let Err(e) = entered {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }

        Ok(Self {
            stdout,
            previous: Vec::new(),
            size,
        })
    }

    /// Current terminal size as (width, height).
    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    /// Wait up to `timeout` for input, then drain everything pending.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();

        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        for ev in &events {
            if let Event::Resize(width, height) = ev {
                self.size = (*width, *height);
                self.previous.clear();
                queue!(self.stdout, Clear(ClearType::All))?;
            }
        }

        Ok(events)
    }

    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        let (width, height) = self.size;
        let width = width as usize;

        for (y, line) in lines.iter().take(height as usize).enumerate() {
            if self.previous.get(y) == Some(line) {
                continue;
            }

            let attribute = match line.style {
                LineStyle::Normal => Attribute::Reset,
                LineStyle::Bold => Attribute::Bold,
                LineStyle::Dim => Attribute::Dim,
                LineStyle::Reverse => Attribute::Reverse,
            };

            queue!(
                self.stdout,
                cursor::MoveTo(0, y as u16),
                SetAttribute(Attribute::Reset),
                SetAttribute(attribute),
                Print(fit_to_width(&line.text, width)),
                SetAttribute(Attribute::Reset)
            )?;
        }

        // Blank out rows the previous frame used but this one does not
        for y in lines.len()..self.previous.len().min(height as usize) {
            queue!(
                self.stdout,
                cursor::MoveTo(0, y as u16),
                Clear(ClearType::CurrentLine)
            )?;
        }

        self.previous = lines.to_vec();
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = queue!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = self.stdout.flush();
        let _ = terminal::disable_raw_mode();
    }
}
