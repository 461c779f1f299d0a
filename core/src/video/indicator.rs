//! Console LED overlay: four outlined circles across the top of the window.

use bitflags::bitflags;

use super::circle::draw_circle;
use crate::core::display::{DrawTarget, Rgba};

bitflags! {
    /// Console LED state, supplied by the console once per frame.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct LedMask: u8 {
        const RED = 1 << 0;
        const YELLOW = 1 << 1;
        const BLUE = 1 << 2;
        const GREEN = 1 << 3;
    }
}

pub const INDICATOR_RADIUS: u16 = 20;
pub const INDICATOR_ALPHA: u8 = 128;

/// One LED: which bit drives it, where it sits, and its lit colour.
#[derive(Clone, Copy, Debug)]
pub struct Indicator {
    pub led: LedMask,
    pub center: (i32, i32),
    pub lit: Rgba,
}

impl Indicator {
    /// Draw colour for the given LED state.
    pub fn color(&self, leds: LedMask) -> Rgba {
        if leds.contains(self.led) {
            self.lit.with_alpha(INDICATOR_ALPHA)
        } else {
            Rgba::new(0, 0, 0, INDICATOR_ALPHA)
        }
    }
}

/// Indicators in drawing order.
pub const INDICATORS: [Indicator; 4] = [
    Indicator {
        led: LedMask::RED,
        center: (50, 30),
        lit: Rgba::new(255, 0, 0, 255),
    },
    Indicator {
        led: LedMask::YELLOW,
        center: (110, 30),
        lit: Rgba::new(255, 255, 0, 255),
    },
    Indicator {
        led: LedMask::BLUE,
        center: (170, 30),
        lit: Rgba::new(0, 0, 255, 255),
    },
    Indicator {
        led: LedMask::GREEN,
        center: (230, 30),
        lit: Rgba::new(0, 255, 0, 255),
    },
];

/// Draw all four indicators onto `target`.
///
/// A failed point never stops the rest of the overlay; the first failure
/// is returned after every circle has been attempted.
pub fn render_indicators<T: DrawTarget + ?Sized>(
    target: &mut T,
    leds: LedMask,
) -> Result<(), T::Error> {
    let mut first_error = None;
    for indicator in &INDICATORS {
        target.set_draw_color(indicator.color(leds));
        let (cx, cy) = indicator.center;
        if let Err(e) = draw_circle(cx, cy, INDICATOR_RADIUS, |x, y| target.draw_point(x, y)) {
            first_error.get_or_insert(e);
        }
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
