use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Path drawing command in plot-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    CubicTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathCommand {
    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => {
                x.is_finite() && y.is_finite()
            }
            PathCommand::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => [x1, y1, x2, y2, x, y].iter().all(|v| v.is_finite()),
            PathCommand::Close => true,
        }
    }
}

/// Serializes commands into SVG path data (`M`, `L`, `C`, `Z`).
#[must_use]
pub fn svg_path_data(commands: &[PathCommand]) -> String {
    let mut data = String::with_capacity(commands.len() * 24);
    for command in commands {
        // Writing into a String cannot fail.
        let _ = match *command {
            PathCommand::MoveTo { x, y } => write!(data, "M{},{}", fmt_coord(x), fmt_coord(y)),
            PathCommand::LineTo { x, y } => write!(data, "L{},{}", fmt_coord(x), fmt_coord(y)),
            PathCommand::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => write!(
                data,
                "C{},{},{},{},{},{}",
                fmt_coord(x1),
                fmt_coord(y1),
                fmt_coord(x2),
                fmt_coord(y2),
                fmt_coord(x),
                fmt_coord(y)
            ),
            PathCommand::Close => write!(data, "Z"),
        };
    }
    data
}

pub(crate) fn fmt_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_owned()
    } else {
        format!("{rounded}")
    }
}

/// Uniform cubic B-spline curve writer.
///
/// Interior control points are approximated rather than interpolated; the
/// first and last points of each line are hit exactly. In area mode the
/// second line continues the first with a `LineTo` and closes the path.
#[derive(Debug)]
pub struct BasisCurve<'a> {
    out: &'a mut Vec<PathCommand>,
    area_line: Option<bool>,
    point: u8,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl<'a> BasisCurve<'a> {
    #[must_use]
    pub fn new(out: &'a mut Vec<PathCommand>) -> Self {
        Self {
            out,
            area_line: None,
            point: 0,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
        }
    }

    pub fn area_start(&mut self) {
        self.area_line = Some(false);
    }

    pub fn area_end(&mut self) {
        self.area_line = None;
    }

    pub fn line_start(&mut self) {
        self.x0 = f64::NAN;
        self.y0 = f64::NAN;
        self.x1 = f64::NAN;
        self.y1 = f64::NAN;
        self.point = 0;
    }

    pub fn line_end(&mut self) {
        match self.point {
            3 => {
                self.emit_segment(self.x1, self.y1);
                self.out.push(PathCommand::LineTo {
                    x: self.x1,
                    y: self.y1,
                });
            }
            2 => self.out.push(PathCommand::LineTo {
                x: self.x1,
                y: self.y1,
            }),
            _ => {}
        }

        match self.area_line {
            Some(true) => self.out.push(PathCommand::Close),
            None if self.point == 1 => self.out.push(PathCommand::Close),
            _ => {}
        }
        self.area_line = self.area_line.map(|line| !line);
    }

    pub fn point(&mut self, x: f64, y: f64) {
        match self.point {
            0 => {
                self.point = 1;
                if self.area_line == Some(true) {
                    self.out.push(PathCommand::LineTo { x, y });
                } else {
                    self.out.push(PathCommand::MoveTo { x, y });
                }
            }
            1 => self.point = 2,
            2 => {
                self.point = 3;
                self.out.push(PathCommand::LineTo {
                    x: (5.0 * self.x0 + self.x1) / 6.0,
                    y: (5.0 * self.y0 + self.y1) / 6.0,
                });
                self.emit_segment(x, y);
            }
            _ => self.emit_segment(x, y),
        }
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
    }

    fn emit_segment(&mut self, x: f64, y: f64) {
        self.out.push(PathCommand::CubicTo {
            x1: (2.0 * self.x0 + self.x1) / 3.0,
            y1: (2.0 * self.y0 + self.y1) / 3.0,
            x2: (self.x0 + 2.0 * self.x1) / 3.0,
            y2: (self.y0 + 2.0 * self.y1) / 3.0,
            x: (self.x0 + 4.0 * self.x1 + x) / 6.0,
            y: (self.y0 + 4.0 * self.y1 + y) / 6.0,
        });
    }
}
