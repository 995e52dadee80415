use std::ops::{Add, Div, Mul, Sub};

/// English Metric Units per inch, the coordinate space OOXML drawing uses.
pub const EMU_PER_INCH: i64 = 914_400;
/// English Metric Units per typographic point (1/72 inch).
pub const EMU_PER_POINT: i64 = 12_700;

/// A length in English Metric Units.
///
/// All placement math in the OOXML composers happens in whole EMU so that
/// repeated offsets (`base + index * step`) stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Emu(pub i64);

impl Emu {
    pub fn from_inches(inches: f64) -> Self {
        Emu((inches * EMU_PER_INCH as f64).round() as i64)
    }

    pub fn from_points(points: f64) -> Self {
        Emu((points * EMU_PER_POINT as f64).round() as i64)
    }

    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl Add for Emu {
    type Output = Emu;
    fn add(self, rhs: Emu) -> Emu {
        Emu(self.0 + rhs.0)
    }
}

impl Sub for Emu {
    type Output = Emu;
    fn sub(self, rhs: Emu) -> Emu {
        Emu(self.0 - rhs.0)
    }
}

impl Mul<i64> for Emu {
    type Output = Emu;
    fn mul(self, rhs: i64) -> Emu {
        Emu(self.0 * rhs)
    }
}

impl Div<i64> for Emu {
    type Output = Emu;
    fn div(self, rhs: i64) -> Emu {
        Emu(self.0 / rhs)
    }
}

/// An axis-aligned placement rectangle in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: Emu,
    pub y: Emu,
    pub w: Emu,
    pub h: Emu,
}

impl Rect {
    pub const fn new(x: Emu, y: Emu, w: Emu, h: Emu) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> Emu {
        self.x + self.w
    }

    pub fn bottom(&self) -> Emu {
        self.y + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inch_and_point_conversions_agree() {
        assert_eq!(Emu::from_inches(1.0), Emu(EMU_PER_INCH));
        assert_eq!(Emu::from_points(72.0), Emu(EMU_PER_INCH));
    }

    #[test]
    fn arithmetic_is_exact() {
        let base = Emu::from_inches(1.5);
        let step = Emu::from_inches(0.5);
        assert_eq!(base + step * 3, Emu::from_inches(3.0));
        assert_eq!(Emu::from_inches(12.0) / 4, Emu::from_inches(3.0));
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(Emu(10), Emu(20), Emu(30), Emu(40));
        assert_eq!(r.right(), Emu(40));
        assert_eq!(r.bottom(), Emu(60));
    }
}
