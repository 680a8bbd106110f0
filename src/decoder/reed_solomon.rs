//! Reed-Solomon error correction for QR codes.
//! QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
//! and generator roots alpha^0 .. alpha^(n-1).

use crate::error::DecodeError;

const fn build_tables() -> ([u8; 256], [u8; 256]) {
    let mut exp = [0u8; 256];
    let mut log = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= 0x11D;
        }
        i += 1;
    }
    exp[255] = exp[0];
    (exp, log)
}

static TABLES: ([u8; 256], [u8; 256]) = build_tables();

/// GF(256) field operations using log/exp tables
pub struct Gf256;

impl Gf256 {
    /// alpha^n
    pub fn exp(n: usize) -> u8 {
        TABLES.0[n % 255]
    }

    /// Discrete log of a non-zero element
    pub fn log(a: u8) -> usize {
        TABLES.1[a as usize] as usize
    }

    /// Field product
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        Self::exp(Self::log(a) + Self::log(b))
    }

    /// a / b; `b` must be non-zero
    pub fn div(a: u8, b: u8) -> u8 {
        if a == 0 {
            return 0;
        }
        Self::exp(Self::log(a) + 255 - Self::log(b))
    }

    /// alpha^-n
    pub fn inv_exp(n: usize) -> u8 {
        Self::exp(255 - n % 255)
    }
}

/// Evaluate a polynomial stored lowest degree first
fn eval_ascending(poly: &[u8], x: u8) -> u8 {
    poly.iter()
        .rev()
        .fold(0u8, |acc, &coeff| Gf256::mul(acc, x) ^ coeff)
}

/// Reed-Solomon decoder for one block of a QR symbol
pub struct ReedSolomonDecoder {
    num_ecc_codewords: usize,
}

impl ReedSolomonDecoder {
    /// Decoder for blocks carrying `num_ecc_codewords` ECC bytes
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self { num_ecc_codewords }
    }

    /// Correct `block` in place (data then ECC, highest degree first).
    /// Returns the number of corrected codewords.
    pub fn decode(&self, block: &mut [u8]) -> Result<usize, DecodeError> {
        let syndrome = self.syndromes(block);
        if syndrome.iter().all(|&s| s == 0) {
            return Ok(0);
        }

        let sigma = Self::error_locator(&syndrome);
        let positions = Self::error_positions(&sigma, block.len())?;
        let omega = Self::error_evaluator(&sigma, &syndrome);

        for &pos in &positions {
            let power = block.len() - 1 - pos;
            let x_inv = Gf256::inv_exp(power);

            // Formal derivative keeps odd terms: sigma'(x) = sum sigma[i] x^(i-1)
            let mut sigma_prime = 0u8;
            let mut x_pow = 1u8;
            for (i, &coeff) in sigma.iter().enumerate().skip(1) {
                if i % 2 == 1 {
                    sigma_prime ^= Gf256::mul(coeff, x_pow);
                }
                x_pow = Gf256::mul(x_pow, x_inv);
            }
            if sigma_prime == 0 {
                return Err(DecodeError::DataEcc);
            }

            let magnitude = Gf256::mul(
                Gf256::exp(power),
                Gf256::div(eval_ascending(&omega, x_inv), sigma_prime),
            );
            block[pos] ^= magnitude;
        }

        if self.syndromes(block).iter().any(|&s| s != 0) {
            return Err(DecodeError::DataEcc);
        }
        Ok(positions.len())
    }

    fn syndromes(&self, block: &[u8]) -> Vec<u8> {
        (0..self.num_ecc_codewords)
            .map(|i| {
                let root = Gf256::exp(i);
                block
                    .iter()
                    .fold(0u8, |acc, &c| Gf256::mul(acc, root) ^ c)
            })
            .collect()
    }

    /// Berlekamp-Massey; returns sigma lowest degree first, sigma[0] = 1
    fn error_locator(syndrome: &[u8]) -> Vec<u8> {
        let mut sigma = vec![1u8];
        let mut prev = vec![1u8];
        let mut prev_discrepancy = 1u8;
        let mut degree = 0usize;
        let mut shift = 1usize;

        for i in 0..syndrome.len() {
            let mut discrepancy = syndrome[i];
            for j in 1..=degree.min(sigma.len() - 1) {
                discrepancy ^= Gf256::mul(sigma[j], syndrome[i - j]);
            }

            if discrepancy == 0 {
                shift += 1;
                continue;
            }

            let snapshot = sigma.clone();
            let factor = Gf256::div(discrepancy, prev_discrepancy);
            if sigma.len() < prev.len() + shift {
                sigma.resize(prev.len() + shift, 0);
            }
            for (j, &p) in prev.iter().enumerate() {
                sigma[j + shift] ^= Gf256::mul(factor, p);
            }

            if 2 * degree <= i {
                degree = i + 1 - degree;
                prev = snapshot;
                prev_discrepancy = discrepancy;
                shift = 1;
            } else {
                shift += 1;
            }
        }

        sigma.truncate(degree + 1);
        sigma
    }

    /// Chien search over every codeword position
    fn error_positions(sigma: &[u8], n: usize) -> Result<Vec<usize>, DecodeError> {
        let errors = sigma.len() - 1;
        if errors == 0 || errors > n {
            return Err(DecodeError::DataEcc);
        }
        let positions: Vec<usize> = (0..n)
            .filter(|&pos| eval_ascending(sigma, Gf256::inv_exp(n - 1 - pos)) == 0)
            .collect();
        if positions.len() != errors {
            return Err(DecodeError::DataEcc);
        }
        Ok(positions)
    }

    /// omega = syndrome * sigma mod x^(2t)
    fn error_evaluator(sigma: &[u8], syndrome: &[u8]) -> Vec<u8> {
        let mut omega = vec![0u8; syndrome.len()];
        for (i, slot) in omega.iter_mut().enumerate() {
            for j in 0..=i.min(sigma.len() - 1) {
                *slot ^= Gf256::mul(sigma[j], syndrome[i - j]);
            }
        }
        omega
    }
}
