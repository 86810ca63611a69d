use super::BitMatrix;
use crate::error::EncodeError;

/// QR Code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol version
    pub const MIN: Version = Version(1);
    /// Largest symbol version
    pub const MAX: Version = Version(40);

    /// Create a version, rejecting numbers outside [1, 40]
    pub fn new(number: u8) -> Result<Self, EncodeError> {
        if (1..=40).contains(&number) {
            Ok(Version(number))
        } else {
            Err(EncodeError::Domain("version out of range"))
        }
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the symbol side length in modules (4 * version + 17)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// Table row index in redundancy order (L=0, M=1, Q=2, H=3)
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Two-bit value stored in the format information
    ///
    /// The standard's mapping (L=01, M=00, Q=11, H=10) is NOT the table
    /// ordering above.
    pub fn format_bits(&self) -> u32 {
        match self {
            ECLevel::L => 1,
            ECLevel::M => 0,
            ECLevel::Q => 3,
            ECLevel::H => 2,
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (j/3 + i/2) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// Get mask pattern from its three-bit index
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(MaskPattern::Pattern0),
            1 => Some(MaskPattern::Pattern1),
            2 => Some(MaskPattern::Pattern2),
            3 => Some(MaskPattern::Pattern3),
            4 => Some(MaskPattern::Pattern4),
            5 => Some(MaskPattern::Pattern5),
            6 => Some(MaskPattern::Pattern6),
            7 => Some(MaskPattern::Pattern7),
            _ => None,
        }
    }

    /// Three-bit index stored in the format information
    pub fn bits(&self) -> u8 {
        *self as u8
    }

    /// Check whether the module at row `i`, column `j` is inverted
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (j / 3 + i / 2) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// Generated QR code symbol
///
/// Immutable once constructed. Renderers read it through `size` and
/// `module`; there is no mutation surface.
#[derive(Debug, Clone)]
pub struct QrCode {
    version: Version,
    error_correction: ECLevel,
    mask_pattern: MaskPattern,
    modules: BitMatrix,
}

impl QrCode {
    pub(crate) fn from_parts(
        version: Version,
        error_correction: ECLevel,
        mask_pattern: MaskPattern,
        modules: BitMatrix,
    ) -> Self {
        debug_assert_eq!(modules.size(), version.size());
        Self {
            version,
            error_correction,
            mask_pattern,
            modules,
        }
    }

    /// Symbol side length in modules
    pub fn size(&self) -> usize {
        self.modules.size()
    }

    /// Symbol version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level actually used (may be boosted above the request)
    pub fn error_correction(&self) -> ECLevel {
        self.error_correction
    }

    /// Mask pattern applied to the data modules
    pub fn mask_pattern(&self) -> MaskPattern {
        self.mask_pattern
    }

    /// Module color at (x, y): true = dark. False outside [0, size)
    pub fn module(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }
}
