//! Root palette: a rainbow spread across the root indices.
//!
//! Each root gets one RGB triple. Channels are Gaussian bumps centered at
//! three points of a fixed 0..40 parameter range, so colors sweep
//! red → green → blue as the root index grows, whatever the root count.

pub type Rgb = [u8; 3];

const SMOOTHING: f64 = -250.0;
const RED_CENTER: f64 = 5.0;
const GREEN_CENTER: f64 = 20.0;
const BLUE_CENTER: f64 = 35.0;

/// Compute the palette for `count` roots. Index-aligned with the root list.
pub fn rainbow_palette(count: usize) -> Vec<Rgb> {
    let step = 40.0 / (count as f64 + 1.0);
    (1..=count)
        .map(|i| {
            let x = step * i as f64;
            [
                channel(x - RED_CENTER),
                channel(x - GREEN_CENTER),
                channel(x - BLUE_CENTER),
            ]
        })
        .collect()
}

fn channel(offset: f64) -> u8 {
    (255.0 * libm::exp(offset * offset / SMOOTHING)).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_triple_per_root() {
        for count in 0..=30 {
            assert_eq!(rainbow_palette(count).len(), count);
        }
    }

    #[test]
    fn empty_for_zero_roots() {
        assert!(rainbow_palette(0).is_empty());
    }

    #[test]
    fn single_root_color_matches_formula() {
        // count = 1: step = 20, so x = 20.
        // R = round(255·e^(-225/250)) = 104, G = round(255·e^0) = 255, B = 104
        assert_eq!(rainbow_palette(1), vec![[104, 255, 104]]);
    }

    #[test]
    fn three_root_palette_is_distinct() {
        let palette = rainbow_palette(3);
        assert_ne!(palette[0], palette[1]);
        assert_ne!(palette[1], palette[2]);
        assert_ne!(palette[0], palette[2]);
    }

    #[test]
    fn low_indices_lean_red_high_indices_lean_blue() {
        let palette = rainbow_palette(5);
        let first = palette[0];
        let last = palette[4];
        assert!(first[0] > first[2], "first root should be redder than blue");
        assert!(last[2] > last[0], "last root should be bluer than red");
    }
}
