//! ANSI terminal escape sequences.
//!
//! Sequences are written into any [`fmt::Write`], such as a `String`, so
//! that a whole frame can be assembled before it is printed.

use core::fmt::{self, Display, Formatter, Write};

use crate::math::Color3f;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Ansi {
    TerminalReset,
    ClearScreen,

    CursorSave,
    CursorRestore,
    CursorHide,
    CursorShow,

    CursorUp(u16),
    CursorDown(u16),
    CursorFwd(u16),
    CursorBack(u16),

    /// Moves the cursor to the given 1-based row and column.
    CursorPos(u16, u16),

    Graphic(Attrib),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Attrib {
    Reset,
    Foreground(Color),
    Background(Color),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,

    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,

    EightBit(u8),
    TrueColor(u8, u8, u8),
}

impl Display for Ansi {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use Ansi::*;
        match self {
            TerminalReset => write!(f, "\x1Bc"),
            ClearScreen => write!(f, "\x1B[2J"),
            CursorSave => write!(f, "\x1B7"),
            CursorRestore => write!(f, "\x1B8"),
            CursorHide => write!(f, "\x1B[?25l"),
            CursorShow => write!(f, "\x1B[?25h"),
            CursorUp(n) => write!(f, "\x1B[{n}A"),
            CursorDown(n) => write!(f, "\x1B[{n}B"),
            CursorFwd(n) => write!(f, "\x1B[{n}C"),
            CursorBack(n) => write!(f, "\x1B[{n}D"),
            CursorPos(row, col) => write!(f, "\x1B[{row};{col}H"),
            Graphic(attr) => write!(f, "\x1B[{attr}m"),
        }
    }
}

impl Display for Attrib {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Attrib::Reset => write!(f, "0"),
            Attrib::Foreground(col) => write!(f, "38;{col}"),
            Attrib::Background(col) => write!(f, "48;{col}"),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use Color::*;
        match self {
            Black => write!(f, "5;0"),
            Red => write!(f, "5;1"),
            Green => write!(f, "5;2"),
            Yellow => write!(f, "5;3"),
            Blue => write!(f, "5;4"),
            Magenta => write!(f, "5;5"),
            Cyan => write!(f, "5;6"),
            White => write!(f, "5;7"),

            BrightBlack => write!(f, "5;8"),
            BrightRed => write!(f, "5;9"),
            BrightGreen => write!(f, "5;10"),
            BrightYellow => write!(f, "5;11"),
            BrightBlue => write!(f, "5;12"),
            BrightMagenta => write!(f, "5;13"),
            BrightCyan => write!(f, "5;14"),
            BrightWhite => write!(f, "5;15"),

            EightBit(c) => write!(f, "5;{c}"),
            TrueColor(r, g, b) => write!(f, "2;{r};{g};{b}"),
        }
    }
}

impl From<Color3f> for Color {
    /// Returns a 24-bit color with the channels of `c` clamped to 0..=1.
    fn from(c: Color3f) -> Self {
        let [r, g, b] = c.to_color3().0;
        Self::TrueColor(r, g, b)
    }
}

impl Ansi {
    /// Starts a chain of sequences written into `out`.
    pub fn start<W: Write>(out: &mut W) -> Sequence<'_, W> {
        Sequence { out, res: Ok(()) }
    }
}

/// A chain of escape sequences and text written into a [`Write`].
///
/// The first error is remembered and returned by [`finish`][Self::finish];
/// nothing is written after it.
pub struct Sequence<'a, W> {
    out: &'a mut W,
    res: fmt::Result,
}

impl<W: Write> Sequence<'_, W> {
    fn emit(mut self, d: impl Display) -> Self {
        if self.res.is_ok() {
            self.res = write!(self.out, "{d}");
        }
        self
    }

    pub fn clear_screen(self) -> Self {
        self.emit(Ansi::ClearScreen)
    }
    pub fn cursor_save(self) -> Self {
        self.emit(Ansi::CursorSave)
    }
    pub fn cursor_restore(self) -> Self {
        self.emit(Ansi::CursorRestore)
    }
    pub fn cursor_hide(self) -> Self {
        self.emit(Ansi::CursorHide)
    }
    pub fn cursor_show(self) -> Self {
        self.emit(Ansi::CursorShow)
    }
    pub fn cursor_up(self, n: u16) -> Self {
        self.emit(Ansi::CursorUp(n))
    }
    pub fn cursor_down(self, n: u16) -> Self {
        self.emit(Ansi::CursorDown(n))
    }
    pub fn cursor_fwd(self, n: u16) -> Self {
        self.emit(Ansi::CursorFwd(n))
    }
    pub fn cursor_back(self, n: u16) -> Self {
        self.emit(Ansi::CursorBack(n))
    }
    pub fn cursor_pos(self, row: u16, col: u16) -> Self {
        self.emit(Ansi::CursorPos(row, col))
    }
    pub fn fg_color(self, c: impl Into<Color>) -> Self {
        self.emit(Ansi::Graphic(Attrib::Foreground(c.into())))
    }
    pub fn bg_color(self, c: impl Into<Color>) -> Self {
        self.emit(Ansi::Graphic(Attrib::Background(c.into())))
    }
    pub fn write(self, s: &str) -> Self {
        self.emit(s)
    }
    pub fn reset(self) -> Self {
        self.emit(Ansi::Graphic(Attrib::Reset))
    }

    /// Returns the first error encountered, if any.
    pub fn finish(self) -> fmt::Result {
        self.res
    }
}

/// Writes a row-major `width`-pixel-wide image into `out` as colored
/// half-block characters.
///
/// Each character cell shows two vertically adjacent pixels, the upper
/// one as the foreground color of `▀` and the lower one as the background.
/// If the height is odd, the lower half of the last row is black.
pub fn write_half_blocks(
    out: &mut impl Write,
    pixels: &[[f32; 3]],
    width: usize,
) -> fmt::Result {
    let rows: alloc::vec::Vec<_> = pixels.chunks(width.max(1)).collect();
    for pair in rows.chunks(2) {
        let (upper, lower) = (pair[0], pair.get(1).copied());
        let mut seq = Ansi::start(out);
        for (x, &up) in upper.iter().enumerate() {
            let lo = lower.map_or([0.0; 3], |l| l[x]);
            seq = seq
                .fg_color(Color3f(up))
                .bg_color(Color3f(lo))
                .write("▀");
        }
        seq.reset().write("\n").finish()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use crate::math::rgb;

    use super::*;

    #[test]
    fn sequences() {
        assert_eq!(Ansi::CursorPos(3, 10).to_string(), "\x1B[3;10H");
        assert_eq!(Ansi::CursorUp(2).to_string(), "\x1B[2A");
        assert_eq!(Ansi::Graphic(Attrib::Reset).to_string(), "\x1B[0m");
        assert_eq!(
            Ansi::Graphic(Attrib::Foreground(Color::BrightRed)).to_string(),
            "\x1B[38;5;9m"
        );
        assert_eq!(
            Ansi::Graphic(Attrib::Background(Color::TrueColor(1, 2, 3))).to_string(),
            "\x1B[48;2;1;2;3m"
        );
    }

    #[test]
    fn color_from_color3f_clamps() {
        assert_eq!(Color::from(rgb(1.5, 0.0, -1.0)), Color::TrueColor(255, 0, 0));
    }

    #[test]
    fn sequence_chain() {
        let mut s = String::new();
        Ansi::start(&mut s)
            .cursor_pos(1, 1)
            .fg_color(Color::Green)
            .write("ok")
            .reset()
            .finish()
            .unwrap();
        assert_eq!(s, "\x1B[1;1H\x1B[38;5;2mok\x1B[0m");
    }

    #[test]
    fn half_blocks_pair_rows() {
        let mut s = String::new();
        let px = [[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 1.0, 1.0]];
        write_half_blocks(&mut s, &px, 1).unwrap();
        assert_eq!(
            s,
            "\x1B[38;2;255;0;0m\x1B[48;2;0;0;255m▀\x1B[0m\n\
             \x1B[38;2;255;255;255m\x1B[48;2;0;0;0m▀\x1B[0m\n"
        );
    }
}
