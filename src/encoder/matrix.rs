use crate::encoder::bch;
use crate::models::{BitMatrix, ECLevel, MaskPattern, QrCode, Version};

/// Module grid under construction
///
/// Holds the symbol grid plus a parallel reservation grid. Every module
/// placed by a function pattern, format area, version area, timing track
/// or the dark module is marked reserved; the data zig-zag and the masks
/// only ever touch unreserved cells. The reservation grid is dropped when
/// the builder is consumed.
pub struct MatrixBuilder {
    size: usize,
    version: Version,
    ec_level: ECLevel,
    pub(crate) modules: BitMatrix,
    pub(crate) reserved: BitMatrix,
}

fn get_bit(bits: u32, i: usize) -> bool {
    (bits >> i) & 1 != 0
}

impl MatrixBuilder {
    /// Create an empty builder for a version and error correction level
    pub fn new(version: Version, ec_level: ECLevel) -> Self {
        let size = version.size();
        Self {
            size,
            version,
            ec_level,
            modules: BitMatrix::new(size),
            reserved: BitMatrix::new(size),
        }
    }

    /// Write a function module and mark the cell reserved
    fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        self.modules.set(x, y, dark);
        self.reserved.set(x, y, true);
    }

    /// Stamp every function pattern and reserve the format/version areas
    ///
    /// The format bits are drawn with a placeholder mask so their cells are
    /// reserved before data placement; the real bits overwrite them once
    /// the mask is chosen.
    pub fn draw_function_patterns(&mut self) {
        for i in 0..self.size {
            self.set_function(6, i, i % 2 == 0);
            self.set_function(i, 6, i % 2 == 0);
        }

        self.draw_finder_pattern(3, 3);
        self.draw_finder_pattern(self.size as i32 - 4, 3);
        self.draw_finder_pattern(3, self.size as i32 - 4);

        let positions = alignment_pattern_positions(self.version);
        let count = positions.len();
        for (i, &cx) in positions.iter().enumerate() {
            for (j, &cy) in positions.iter().enumerate() {
                // The three finder corners have no alignment pattern
                let collides = (i == 0 && j == 0)
                    || (i == 0 && j == count - 1)
                    || (i == count - 1 && j == 0);
                if !collides {
                    self.draw_alignment_pattern(cx, cy);
                }
            }
        }

        self.draw_format_bits(MaskPattern::Pattern0);
        self.draw_version_info();
    }

    /// 7x7 finder plus its separator ring, centered at (x, y), clipped
    fn draw_finder_pattern(&mut self, x: i32, y: i32) {
        for dy in -4..=4i32 {
            for dx in -4..=4i32 {
                let distance = dx.abs().max(dy.abs());
                let (fx, fy) = (x + dx, y + dy);
                if 0 <= fx && fx < self.size as i32 && 0 <= fy && fy < self.size as i32 {
                    self.set_function(fx as usize, fy as usize, distance != 2 && distance != 4);
                }
            }
        }
    }

    /// 5x5 alignment pattern centered at (x, y); never clipped
    fn draw_alignment_pattern(&mut self, x: usize, y: usize) {
        for dy in -2..=2i32 {
            for dx in -2..=2i32 {
                let dark = dx.abs().max(dy.abs()) != 1;
                self.set_function((x as i32 + dx) as usize, (y as i32 + dy) as usize, dark);
            }
        }
    }

    /// Write both copies of the 15 format bits for the given mask
    ///
    /// Also sets the dark module, which shares the second copy's corner.
    pub fn draw_format_bits(&mut self, mask: MaskPattern) {
        let bits = bch::format_info_bits(self.ec_level, mask);

        // First copy, wrapped around the top-left finder
        for i in 0..=5 {
            self.set_function(8, i, get_bit(bits, i));
        }
        self.set_function(8, 7, get_bit(bits, 6));
        self.set_function(8, 8, get_bit(bits, 7));
        self.set_function(7, 8, get_bit(bits, 8));
        for i in 9..15 {
            self.set_function(14 - i, 8, get_bit(bits, i));
        }

        // Second copy, split between the top-right and bottom-left finders
        for i in 0..8 {
            self.set_function(self.size - 1 - i, 8, get_bit(bits, i));
        }
        for i in 8..15 {
            self.set_function(8, self.size - 15 + i, get_bit(bits, i));
        }
        self.set_function(8, self.size - 8, true); // Dark module
    }

    /// Write both copies of the 18 version bits (versions 7 and up)
    fn draw_version_info(&mut self) {
        if self.version.number() < 7 {
            return;
        }
        let bits = bch::version_info_bits(self.version);
        for i in 0..18 {
            let bit = get_bit(bits, i);
            let a = self.size - 11 + i % 3;
            let b = i / 3;
            self.set_function(a, b, bit);
            self.set_function(b, a, bit);
        }
    }

    /// Lay the interleaved codewords into the grid in zig-zag order
    ///
    /// Column pairs are walked right to left, skipping the vertical timing
    /// column, alternating upward and downward. Bits go MSB-first within
    /// each codeword; leftover remainder cells stay light.
    pub fn draw_codewords(&mut self, data: &[u8]) {
        assert_eq!(
            data.len(),
            crate::encoder::version::capacity_bits(self.version) / 8,
            "codeword count mismatch"
        );

        let mut i = 0usize;
        let mut right = self.size as i32 - 1;
        while right >= 1 {
            if right == 6 {
                right = 5;
            }
            for vert in 0..self.size {
                for j in 0..2 {
                    let x = (right - j) as usize;
                    let upward = (right + 1) & 2 == 0;
                    let y = if upward { self.size - 1 - vert } else { vert };
                    if !self.reserved.get(x, y) && i < data.len() * 8 {
                        self.modules.set(x, y, (data[i >> 3] >> (7 - (i & 7))) & 1 != 0);
                        i += 1;
                    }
                }
            }
            right -= 2;
        }
        assert_eq!(i, data.len() * 8);
    }

    /// Consume the builder, dropping the reservation grid
    pub fn into_qr(self, mask: MaskPattern) -> QrCode {
        QrCode::from_parts(self.version, self.ec_level, mask, self.modules)
    }

    /// Side length of the grid under construction
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Alignment pattern center coordinates for a given version
///
/// Version 1 has none; otherwise the centers sit at 6 and N-7 with the
/// interior ones evenly spaced on even steps.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let size = version.size();
    let num = v / 7 + 2;
    let step = (v * 8 + num * 3 + 5) / (num * 4 - 4) * 2;

    let mut result = Vec::with_capacity(num);
    let mut position = size - 7;
    for _ in 0..num - 1 {
        result.push(position);
        position -= step;
    }
    result.push(6);
    result.reverse();
    result
}
