use crate::error::AppError;
use crate::television::Television;
use std::io::Write;

/// Something that can show the television's state.
///
/// The controller calls `refresh` after every button press. Implementations
/// must write `television.status()` verbatim into their status area; the
/// other accessors are there for decoration such as highlighting buttons.
pub trait StatusView {
    fn refresh(&mut self, television: &Television) -> Result<(), AppError>;

    /// Marks whatever is on screen as stale, so the next refresh starts from
    /// a blank area. Views that redraw everything anyway can ignore it.
    fn invalidate(&mut self) {}
}

/// Writes one status line per refresh. Used by the non-interactive modes.
pub struct PlainView<W: Write> {
    out: W,
}

impl<W: Write> PlainView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StatusView for PlainView<W> {
    fn refresh(&mut self, television: &Television) -> Result<(), AppError> {
        writeln!(self.out, "{}", television.status())?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_view_writes_status_line() {
        let mut view = PlainView::new(Vec::new());
        let mut tv = Television::new();
        view.refresh(&tv).unwrap();
        tv.power();
        view.refresh(&tv).unwrap();

        let output = String::from_utf8(view.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Power: Off, Muted: No, Channel: 0, Volume: 0",
                "Power: On, Muted: No, Channel: 0, Volume: 0",
            ]
        );
    }
}
