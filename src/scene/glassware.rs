use glam::Vec3;

use crate::types::{BoxData, CylinderData};

pub const GLASS_COLOR: [f32; 3] = [0.72, 0.78, 0.85];
pub const METAL_COLOR: [f32; 3] = [0.42, 0.42, 0.48];
pub const GOLD_COLOR: [f32; 3] = [0.85, 0.70, 0.30];

/// Champagne glass: open bowl, stem, base disk
pub fn glass_cylinders() -> Vec<CylinderData> {
    vec![
        // Bowl, open-ended so bubbles are visible inside
        CylinderData::open_ended(Vec3::new(0.0, -0.5, 0.0), 1.1, 5.0, GLASS_COLOR),
        // Stem
        CylinderData::new(Vec3::new(0.0, -5.0, 0.0), 0.1, 5.0, METAL_COLOR),
        // Base disk
        CylinderData::new(Vec3::new(0.0, -7.5, 0.0), 1.1, 0.1, METAL_COLOR),
    ]
}

/// Table top the glass stands on
pub fn table() -> BoxData {
    BoxData::centered(
        Vec3::new(0.0, -7.6, 0.0),
        Vec3::new(150.0, 0.1, 150.0),
        METAL_COLOR,
    )
}

// Seven-segment layout, in reading order:
// top, top-left, top-right, middle, bottom-left, bottom-right, bottom
fn segments(digit: u32) -> [bool; 7] {
    match digit {
        0 => [true, true, true, false, true, true, true],
        1 => [false, false, true, false, false, true, false],
        2 => [true, false, true, true, true, false, true],
        3 => [true, false, true, true, false, true, true],
        4 => [false, true, true, true, false, true, false],
        5 => [true, true, false, true, false, true, true],
        6 => [true, true, false, true, true, true, true],
        7 => [true, false, true, false, false, true, false],
        8 => [true, true, true, true, true, true, true],
        9 => [true, true, true, true, false, true, true],
        _ => [false; 7],
    }
}

const DIGIT_HALF_W: f32 = 0.09;
const DIGIT_HALF_H: f32 = 0.15;
const SEGMENT_THICKNESS: f32 = 0.04;
const DIGIT_SPACING: f32 = 0.28;
const TEXT_DEPTH: f32 = 0.2;

fn digit_boxes(digit: u32, center: Vec3, color: [f32; 3]) -> Vec<BoxData> {
    let on = segments(digit);
    let bar_w = DIGIT_HALF_W * 2.0;
    let horizontal = Vec3::new(bar_w, SEGMENT_THICKNESS, TEXT_DEPTH);
    let vertical = Vec3::new(SEGMENT_THICKNESS, DIGIT_HALF_H, TEXT_DEPTH);

    let offsets = [
        Vec3::new(0.0, DIGIT_HALF_H, 0.0),                      // top
        Vec3::new(-DIGIT_HALF_W, DIGIT_HALF_H * 0.5, 0.0),      // top-left
        Vec3::new(DIGIT_HALF_W, DIGIT_HALF_H * 0.5, 0.0),       // top-right
        Vec3::new(0.0, 0.0, 0.0),                               // middle
        Vec3::new(-DIGIT_HALF_W, -DIGIT_HALF_H * 0.5, 0.0),     // bottom-left
        Vec3::new(DIGIT_HALF_W, -DIGIT_HALF_H * 0.5, 0.0),      // bottom-right
        Vec3::new(0.0, -DIGIT_HALF_H, 0.0),                     // bottom
    ];

    offsets
        .iter()
        .enumerate()
        .filter(|(i, _)| on[*i])
        .map(|(i, offset)| {
            let size = if i == 0 || i == 3 || i == 6 {
                horizontal
            } else {
                vertical
            };
            BoxData::centered(center + *offset, size, color)
        })
        .collect()
}

/// Festive year text built from box segments, centered at the origin like
/// the bubbles and the glass mouth.
pub fn year_text(year: u32) -> Vec<BoxData> {
    let digits: Vec<u32> = {
        let mut n = year;
        let mut ds = Vec::new();
        loop {
            ds.push(n % 10);
            n /= 10;
            if n == 0 {
                break;
            }
        }
        ds.reverse();
        ds
    };

    let total = digits.len() as f32;
    digits
        .iter()
        .enumerate()
        .flat_map(|(i, &d)| {
            let x = (i as f32 - (total - 1.0) * 0.5) * DIGIT_SPACING;
            digit_boxes(d, Vec3::new(x, 0.0, 0.0), GOLD_COLOR)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glass_has_three_parts() {
        let parts = glass_cylinders();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].flags[0], 1, "bowl must be open-ended");
        assert_eq!(parts[1].flags[0], 0);
    }

    #[test]
    fn test_year_text_is_centered() {
        let boxes = year_text(2023);
        assert!(!boxes.is_empty());

        let min_x = boxes.iter().map(|b| b.min[0]).fold(f32::INFINITY, f32::min);
        let max_x = boxes
            .iter()
            .map(|b| b.max[0])
            .fold(f32::NEG_INFINITY, f32::max);
        assert!((min_x + max_x).abs() < 1e-4, "text should straddle x=0");
    }

    #[test]
    fn test_digit_segment_counts() {
        // 8 lights everything, 1 only the right bars
        assert_eq!(digit_boxes(8, glam::Vec3::ZERO, GOLD_COLOR).len(), 7);
        assert_eq!(digit_boxes(1, glam::Vec3::ZERO, GOLD_COLOR).len(), 2);
    }
}
