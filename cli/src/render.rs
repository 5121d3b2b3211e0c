//! Terminal output of a maze, optionally with a solution drawn over it.

use std::io::{self, Write};

use crossterm::{
    execute,
    style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor},
};
use mazegraph_core::cell::{END, PATH, START, WALL};
use mazegraph_core::{Maze, Point};

fn color_of(ch: char) -> Option<Color> {
    match ch {
        WALL => Some(Color::DarkGrey),
        START => Some(Color::Green),
        END => Some(Color::Red),
        PATH => Some(Color::Yellow),
        _ => None,
    }
}

/// Write `maze` to `out` with `path` overlaid.
///
/// With `color` off the output is exactly [`Maze::render_path`].
pub fn draw<W: Write>(out: &mut W, maze: &Maze, path: &[Point], color: bool) -> io::Result<()> {
    let text = maze.render_path(path);
    if !color {
        out.write_all(text.as_bytes())?;
        return out.flush();
    }

    for ch in text.chars() {
        match color_of(ch) {
            Some(c) => {
                execute!(out, SetForegroundColor(c))?;
                if ch == PATH {
                    execute!(out, SetAttribute(Attribute::Bold))?;
                }
                write!(out, "{ch}")?;
                execute!(out, SetAttribute(Attribute::Reset), ResetColor)?;
            }
            None => write!(out, "{ch}")?,
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_draw_matches_render() {
        let maze = Maze::parse("#####\n#S E#\n#####").unwrap();
        let path = [Point::from_rc(1, 1), Point::from_rc(1, 2), Point::from_rc(1, 3)];
        let mut buf = Vec::new();
        draw(&mut buf, &maze, &path, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "#####\n#S~E#\n#####\n");
    }

    #[test]
    fn colored_draw_keeps_glyphs() {
        let maze = Maze::parse("#S E#").unwrap();
        let mut buf = Vec::new();
        draw(&mut buf, &maze, &[], true).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.contains('S'));
        assert!(s.contains('E'));
        assert!(s.contains('\u{1b}'));
        assert!(s.ends_with('\n'));
    }
}
