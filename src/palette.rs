//! Retro palette quantization.
//!
//! A fixed 16-entry palette plus nearest-color search, used by the retro
//! style for both preprocessing and per-cell color sampling.

/// RGB color type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_tuple(tuple: (u8, u8, u8)) -> Self {
        Self {
            r: tuple.0,
            g: tuple.1,
            b: tuple.2,
        }
    }

    pub fn to_tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// CSS hex form, e.g. `#2B3338`.
    pub fn css(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The 16-color retro palette. Entry order matters: nearest-color ties
/// resolve to the lowest index.
pub const RETRO_PALETTE: [Rgb; 16] = [
    Rgb { r: 0, g: 0, b: 0 },
    Rgb { r: 166, g: 39, b: 33 },
    Rgb { r: 225, g: 147, b: 33 },
    Rgb { r: 173, g: 214, b: 0 },
    Rgb { r: 81, g: 223, b: 0 },
    Rgb { r: 57, g: 195, b: 223 },
    Rgb { r: 11, g: 83, b: 215 },
    Rgb { r: 102, g: 33, b: 247 },
    Rgb { r: 241, g: 91, b: 254 },
    Rgb { r: 254, g: 94, b: 196 },
    Rgb { r: 121, g: 211, b: 0 },
    Rgb { r: 134, g: 67, b: 0 },
    Rgb { r: 0, g: 109, b: 133 },
    Rgb { r: 66, g: 66, b: 66 },
    Rgb { r: 161, g: 161, b: 161 },
    Rgb { r: 255, g: 255, b: 255 },
];

/// Squared Euclidean distance over (R, G, B).
fn distance_sq(a: Rgb, b: Rgb) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Nearest palette entry by squared Euclidean distance.
///
/// The palette is scanned in declared order with a strict comparison, so
/// equidistant candidates resolve to the first-occurring entry.
pub fn nearest(color: Rgb) -> Rgb {
    let mut best = RETRO_PALETTE[0];
    let mut best_dist = u32::MAX;

    for entry in RETRO_PALETTE {
        let dist = distance_sq(color, entry);
        if dist < best_dist {
            best = entry;
            best_dist = dist;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_member_maps_to_itself() {
        for entry in RETRO_PALETTE {
            assert_eq!(nearest(entry), entry);
        }
    }

    #[test]
    fn test_tie_resolves_to_first_index() {
        // (33, 33, 33) is equidistant from black (index 0) and dark gray
        // (index 13); the scan order must pick black.
        let tied = Rgb::new(33, 33, 33);
        assert_eq!(nearest(tied), RETRO_PALETTE[0]);
    }

    #[test]
    fn test_nearest_is_minimal() {
        let probe = Rgb::new(200, 30, 40);
        let chosen = nearest(probe);
        for entry in RETRO_PALETTE {
            assert!(distance_sq(probe, chosen) <= distance_sq(probe, entry));
        }
    }

    #[test]
    fn test_css_formatting() {
        assert_eq!(Rgb::new(43, 51, 56).css(), "#2B3338");
        assert_eq!(Rgb::new(255, 255, 255).css(), "#FFFFFF");
    }
}
