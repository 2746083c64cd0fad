/// English Metric Units per inch, the coordinate unit of OOXML drawings.
pub const EMU_PER_INCH: f32 = 914_400.0;

/// Convert a length in inches to whole EMUs.
pub fn emu(inches: f32) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

/// A rectangle positioned on the slide canvas, in inches.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emu_conversion_rounds() {
        assert_eq!(emu(1.0), 914_400);
        assert_eq!(emu(0.5), 457_200);
        assert_eq!(emu(13.333), 12_191_695);
    }
}
