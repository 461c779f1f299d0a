//! Midpoint circle rasterizer.
//!
//! Integer-only outline walk: one octant is stepped and mirrored eight ways.
//! Diagonal and axis points may be emitted more than once.

/// Iterator over the outline points of a circle.
pub struct CircleOutline {
    cx: i32,
    cy: i32,
    radius: i32,
    offset_x: i32,
    offset_y: i32,
    d: i32,
    octants: [(i32, i32); 8],
    next: usize,
}

impl CircleOutline {
    pub fn new(cx: i32, cy: i32, radius: u16) -> Self {
        let radius = i32::from(radius);
        Self {
            cx,
            cy,
            radius,
            offset_x: 0,
            offset_y: radius,
            d: radius - 1,
            octants: [(0, 0); 8],
            next: 8,
        }
    }

    fn step(&mut self) {
        let (ox, oy) = (self.offset_x, self.offset_y);
        if self.d >= 2 * ox {
            self.d -= 2 * ox + 1;
            self.offset_x += 1;
        } else if self.d < 2 * (self.radius - oy) {
            self.d += 2 * oy - 1;
            self.offset_y -= 1;
        } else {
            self.d += 2 * (oy - ox - 1);
            self.offset_y -= 1;
            self.offset_x += 1;
        }
    }
}

impl Iterator for CircleOutline {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.next == self.octants.len() {
            if self.offset_y < self.offset_x {
                return None;
            }
            let (x, y) = (self.cx, self.cy);
            let (ox, oy) = (self.offset_x, self.offset_y);
            self.octants = [
                (x + ox, y + oy),
                (x + oy, y + ox),
                (x - ox, y + oy),
                (x - oy, y + ox),
                (x + ox, y - oy),
                (x + oy, y - ox),
                (x - ox, y - oy),
                (x - oy, y - ox),
            ];
            self.next = 0;
            self.step();
        }

        let point = self.octants[self.next];
        self.next += 1;
        Some(point)
    }
}

/// Plot a circle outline through `set_pixel`.
///
/// Every point is attempted even after a failure; the first error is
/// returned once the outline is complete.
pub fn draw_circle<E>(
    cx: i32,
    cy: i32,
    radius: u16,
    mut set_pixel: impl FnMut(i32, i32) -> Result<(), E>,
) -> Result<(), E> {
    let mut first_error = None;
    for (x, y) in CircleOutline::new(cx, cy, radius) {
        if let Err(e) = set_pixel(x, y) {
            first_error.get_or_insert(e);
        }
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
