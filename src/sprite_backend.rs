//! Terminal backend that overlays a kitty-graphics sprite after each draw
//!
//! The UI holds at most one sprite at a time, so the overlay is a single
//! shared slot the renderer writes into and the backend flushes out.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock};

use crossterm::{cursor::MoveTo, queue, style::Print};
use ratatui::backend::{Backend, ClearType, CrosstermBackend, WindowSize};
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Size};

#[derive(Default, Debug, Clone)]
pub struct SpriteSlot {
    sprite: Option<(u16, u16, String)>,
}

impl SpriteSlot {
    pub fn set(&mut self, x: u16, y: u16, sequence: String) {
        self.sprite = Some((x, y, sequence));
    }

    pub fn clear(&mut self) {
        self.sprite = None;
    }

    pub fn take_view(&self) -> Option<(u16, u16, String)> {
        self.sprite.clone()
    }
}

static SLOT: OnceLock<Arc<Mutex<SpriteSlot>>> = OnceLock::new();

pub fn sprite_slot() -> Arc<Mutex<SpriteSlot>> {
    SLOT.get_or_init(|| Arc::new(Mutex::new(SpriteSlot::default())))
        .clone()
}

pub fn update_sprite(x: u16, y: u16, sequence: String) {
    let slot = sprite_slot();
    let mut slot = slot.lock().expect("sprite slot lock");
    slot.set(x, y, sequence);
}

pub fn clear_sprite() {
    let slot = sprite_slot();
    let mut slot = slot.lock().expect("sprite slot lock");
    slot.clear();
}

#[derive(Debug)]
pub struct SpriteBackend<W: Write> {
    inner: CrosstermBackend<W>,
    slot: Arc<Mutex<SpriteSlot>>,
    had_sprite: bool,
}

impl<W: Write> SpriteBackend<W> {
    pub fn new(writer: W, slot: Arc<Mutex<SpriteSlot>>) -> Self {
        Self {
            inner: CrosstermBackend::new(writer),
            slot,
            had_sprite: false,
        }
    }
}

impl<W: Write> Backend for SpriteBackend<W> {
    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        self.inner.draw(content)?;
        let sprite = {
            let slot = self.slot.lock().expect("sprite slot lock");
            slot.take_view()
        };
        if self.had_sprite {
            // delete any previously transmitted image
            queue!(self.inner, Print("\x1b_Ga=d,d=a\x1b\\"))?;
        }
        match sprite {
            Some((x, y, sequence)) => {
                queue!(self.inner, MoveTo(x, y), Print(sequence))?;
                self.had_sprite = true;
            }
            None => {
                self.had_sprite = false;
            }
        }
        Ok(())
    }

    fn append_lines(&mut self, n: u16) -> io::Result<()> {
        self.inner.append_lines(n)
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.inner.hide_cursor()
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        self.inner.show_cursor()
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        self.inner.get_cursor_position()
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        self.inner.set_cursor_position(position)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.inner.clear()
    }

    fn clear_region(&mut self, clear_type: ClearType) -> io::Result<()> {
        self.inner.clear_region(clear_type)
    }

    fn size(&self) -> io::Result<Size> {
        self.inner.size()
    }

    fn window_size(&mut self) -> io::Result<WindowSize> {
        self.inner.window_size()
    }

    fn flush(&mut self) -> io::Result<()> {
        Backend::flush(&mut self.inner)
    }
}

impl<W: Write> Write for SpriteBackend<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(&mut self.inner)
    }
}
