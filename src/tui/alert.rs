//! Audible alert.

use crossterm::{QueueableCommand, style::Print};
use std::io::{self, Write};

/// Ring the terminal bell once.
pub fn ring<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(Print('\x07'))?;
    out.flush()
}
