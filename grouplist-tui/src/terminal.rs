use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, ClearType},
};
use unicode_width::UnicodeWidthChar;

use grouplist::Rect;
use grouplist::render::TextFrame;

/// Raw-mode alternate screen. Restores the terminal when dropped.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Draw `frame` from the top-left corner, reversing the cells covered
    /// by `highlight`.
    pub fn draw(&mut self, frame: &TextFrame, highlight: Option<Rect>) -> io::Result<()> {
        for (y, line) in frame.lines.iter().enumerate() {
            let row = u16::try_from(y).unwrap_or(u16::MAX);
            queue!(self.stdout, cursor::MoveTo(0, row))?;

            match highlight.filter(|rect| rect.y <= row && row < rect.bottom()) {
                Some(rect) => {
                    let (before, rest) = split_at_column(line, rect.x);
                    let (marked, after) = split_at_column(rest, rect.width);
                    queue!(
                        self.stdout,
                        Print(before),
                        SetAttribute(Attribute::Reverse),
                        Print(marked),
                        SetAttribute(Attribute::Reset),
                        Print(after)
                    )?;
                }
                None => queue!(self.stdout, Print(line))?,
            }
            queue!(self.stdout, terminal::Clear(ClearType::UntilNewLine))?;
        }

        queue!(
            self.stdout,
            cursor::MoveTo(0, u16::try_from(frame.height()).unwrap_or(u16::MAX)),
            terminal::Clear(ClearType::FromCursorDown)
        )?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Split `line` at display column `column`. A wide character straddling
/// the column goes to the right half.
fn split_at_column(line: &str, column: u16) -> (&str, &str) {
    let mut width = 0usize;
    for (index, ch) in line.char_indices() {
        let next = width + ch.width().unwrap_or(0);
        if next > column as usize {
            return line.split_at(index);
        }
        width = next;
    }
    (line, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_at_column() {
        assert_eq!(split_at_column("[x] Apple", 4), ("[x] ", "Apple"));
        assert_eq!(split_at_column("abc", 0), ("", "abc"));
        assert_eq!(split_at_column("abc", 10), ("abc", ""));
        assert_eq!(split_at_column("▸ Fruits", 2), ("▸ ", "Fruits"));
    }
}
