// File: crates/pump-chart/src/path.rs
// Summary: Path command list with SVG path-data formatting.

use std::fmt;

use crate::geometry::Point;
use crate::series::format_value;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Points visited by move/line commands, in order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::Close => None,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match c {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", format_value(p.x), format_value(p.y))?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", format_value(p.x), format_value(p.y))?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_svg_path_data() {
        let mut p = PathData::new();
        p.move_to(Point::new(24.0, 324.0)).line_to(Point::new(24.0, 24.0)).close();
        assert_eq!(p.to_string(), "M 24 324 L 24 24 Z");
        assert_eq!(p.vertex_count(), 2);
        assert!(p.is_closed());
    }
}
