use crate::encoder::tables;
use crate::encoder::version::capacity_bits;
use crate::models::{ECLevel, Version};

/// Reed-Solomon error correction for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
pub struct Gf256;

impl Gf256 {
    /// Multiply two field elements modulo 0x11D
    ///
    /// Bit-serial Russian peasant loop; no lookup tables, constant shape
    /// regardless of operand values.
    pub fn mul(a: u8, b: u8) -> u8 {
        let mut product: u32 = 0;
        for i in (0..8).rev() {
            product <<= 1;
            if product & 0x100 != 0 {
                product ^= 0x11D;
            }
            if (b >> i) & 1 != 0 {
                product ^= u32::from(a);
            }
        }
        debug_assert!(product >> 8 == 0);
        product as u8
    }
}

/// Coefficients of the generator polynomial of the given degree
///
/// Builds the product of (x - alpha^i) for i in 0..degree iteratively and
/// returns the `degree` lower-order coefficients; the leading coefficient
/// is 1 by construction and not stored. Degree must be in [1, 255].
pub fn compute_divisor(degree: usize) -> Vec<u8> {
    assert!((1..=255).contains(&degree), "divisor degree out of range");

    let mut result = vec![0u8; degree];
    result[degree - 1] = 1; // Start with the monomial x^0

    // Multiply by (x - root) for each successive root alpha^0, alpha^1, ...
    let mut root: u8 = 1;
    for _ in 0..degree {
        for j in 0..degree {
            result[j] = Gf256::mul(result[j], root);
            if j + 1 < degree {
                result[j] ^= result[j + 1];
            }
        }
        root = Gf256::mul(root, 0x02);
    }
    result
}

/// Remainder of the data polynomial divided by the generator
///
/// Returns `divisor.len()` error correction bytes for one block.
pub fn compute_remainder(data: &[u8], divisor: &[u8]) -> Vec<u8> {
    let mut result = vec![0u8; divisor.len()];
    for &b in data {
        let factor = b ^ result[0];
        result.rotate_left(1);
        if let Some(last) = result.last_mut() {
            *last = 0;
        }
        for (rem, &coef) in result.iter_mut().zip(divisor) {
            *rem ^= Gf256::mul(coef, factor);
        }
    }
    result
}

/// Append error correction to the data codewords and interleave the blocks
///
/// The codewords are split per the (version, level) block table; the first
/// `num_short_blocks` blocks carry one data byte fewer. Short blocks get a
/// zero data pad so all blocks index alike during interleaving, and that
/// pad position is skipped on output. The result spans every codeword the
/// symbol can hold.
pub fn add_ecc_and_interleave(version: Version, ec_level: ECLevel, data: &[u8]) -> Vec<u8> {
    let info = tables::ec_block_info(version, ec_level);
    let num_blocks = info.num_blocks;
    let block_ecc = info.ecc_per_block;
    let raw_codewords = capacity_bits(version) / 8;
    let num_short_blocks = num_blocks - raw_codewords % num_blocks;
    let short_block_len = raw_codewords / num_blocks;
    assert_eq!(
        data.len(),
        raw_codewords - block_ecc * num_blocks,
        "data codeword count mismatch"
    );

    let divisor = compute_divisor(block_ecc);
    let mut blocks: Vec<Vec<u8>> = Vec::with_capacity(num_blocks);
    let mut k = 0;
    for i in 0..num_blocks {
        let dat_len = short_block_len - block_ecc + usize::from(i >= num_short_blocks);
        let mut block = data[k..k + dat_len].to_vec();
        k += dat_len;
        let ecc = compute_remainder(&block, &divisor);
        if i < num_short_blocks {
            block.push(0);
        }
        block.extend_from_slice(&ecc);
        blocks.push(block);
    }

    let mut result = Vec::with_capacity(raw_codewords);
    for i in 0..blocks[0].len() {
        for (j, block) in blocks.iter().enumerate() {
            // Skip the alignment pad byte of the short blocks
            if i != short_block_len - block_ecc || j >= num_short_blocks {
                result.push(block[i]);
            }
        }
    }
    assert_eq!(result.len(), raw_codewords);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gf256_identities() {
        for a in 0..=255u8 {
            assert_eq!(Gf256::mul(a, 1), a);
            assert_eq!(Gf256::mul(a, 0), 0);
            assert_eq!(Gf256::mul(1, a), a);
        }
        // Known product in this field
        assert_eq!(Gf256::mul(0x02, 0x80), 0x1D);
    }

    #[test]
    fn test_gf256_commutative() {
        for a in (0..=255u8).step_by(7) {
            for b in (0..=255u8).step_by(5) {
                assert_eq!(Gf256::mul(a, b), Gf256::mul(b, a));
            }
        }
    }

    #[test]
    fn test_gf256_associative() {
        for a in (1..=255u8).step_by(17) {
            for b in (1..=255u8).step_by(13) {
                for c in (1..=255u8).step_by(11) {
                    assert_eq!(
                        Gf256::mul(Gf256::mul(a, b), c),
                        Gf256::mul(a, Gf256::mul(b, c))
                    );
                }
            }
        }
    }

    #[test]
    fn test_alpha_order() {
        // alpha = 2 generates the multiplicative group: alpha^255 == 1
        let mut x = 1u8;
        for _ in 0..255 {
            x = Gf256::mul(x, 2);
        }
        assert_eq!(x, 1);
    }

    #[test]
    fn test_divisor_degree_one() {
        // (x - alpha^0) = x + 1: the stored low coefficient is 1
        assert_eq!(compute_divisor(1), vec![1]);
    }

    #[test]
    fn test_divisor_known_degree_seven() {
        // Generator polynomial used by version 1-L, from the standard
        assert_eq!(
            compute_divisor(7),
            vec![0x7F, 0x7A, 0x9A, 0xA4, 0x0B, 0x44, 0x75]
        );
    }

    #[test]
    fn test_remainder_of_zero_data() {
        let divisor = compute_divisor(10);
        assert_eq!(compute_remainder(&[0u8; 16], &divisor), vec![0u8; 10]);
    }

    #[test]
    fn test_remainder_roots() {
        // data * x^d - remainder must vanish at every generator root
        // alpha^0 .. alpha^(d-1); equivalently the full codeword evaluates
        // to zero there.
        let data = [0x40u8, 0xD2, 0x75, 0x47, 0x76, 0x17, 0x32, 0x06];
        let degree = 5;
        let divisor = compute_divisor(degree);
        let remainder = compute_remainder(&data, &divisor);

        let mut codeword = data.to_vec();
        codeword.extend_from_slice(&remainder);

        let mut root = 1u8;
        for _ in 0..degree {
            // Horner evaluation at the current root
            let value = codeword.iter().fold(0u8, |acc, &c| Gf256::mul(acc, root) ^ c);
            assert_eq!(value, 0);
            root = Gf256::mul(root, 2);
        }
    }

    #[test]
    fn test_interleave_length_single_block() {
        use crate::encoder::version::capacity_codewords;
        let version = Version::new(1).unwrap();
        let data = vec![0xECu8; capacity_codewords(version, ECLevel::Q)];
        let out = add_ecc_and_interleave(version, ECLevel::Q, &data);
        assert_eq!(out.len(), capacity_bits(version) / 8);
        // Single block: data passes through in order
        assert_eq!(&out[..data.len()], &data[..]);
    }

    #[test]
    fn test_interleave_length_multi_block() {
        use crate::encoder::version::capacity_codewords;
        // Version 5-H has 4 blocks with 2 short ones
        let version = Version::new(5).unwrap();
        let data: Vec<u8> = (0..capacity_codewords(version, ECLevel::H) as u32)
            .map(|i| (i % 251) as u8)
            .collect();
        let out = add_ecc_and_interleave(version, ECLevel::H, &data);
        assert_eq!(out.len(), capacity_bits(version) / 8);
        // First bytes come round-robin from the block starts
        assert_eq!(out[0], data[0]);
        assert_eq!(out[1], data[11]);
    }
}
