//! Reed–Solomon Error Correction Codewords
//!
//! This example shows how an encoder builds on `FieldPolynomial`:
//! - Building a generator polynomial from consecutive powers of α
//! - Shifting the message up by the number of EC codewords
//! - Taking the remainder, which is the block of EC codewords
//! - Checking that the codeword polynomial vanishes at every root
//!
//! Run with: cargo run --example qr_remainder

use std::sync::Arc;

use gfpoly::{BinaryField, FieldPolynomial, Gf256, PolynomialError};

/// `(x - α^b)(x - α^(b+1))...(x - α^(b+degree-1))` where `b` is the
/// field's generator base.
fn generator(field: &Arc<Gf256>, degree: usize) -> Result<FieldPolynomial<Gf256>, PolynomialError> {
    let base = field.generator_base() as usize;
    let mut g = field.one_polynomial();
    for i in 0..degree {
        let root = field.exp(i + base);
        g = g.multiply(&FieldPolynomial::new(field, vec![1, root])?)?;
    }
    Ok(g)
}

fn main() -> Result<(), PolynomialError> {
    println!("=== Reed–Solomon over GF(256) ===\n");

    let field = Arc::new(Gf256::qr_code());
    println!("field: {:?}\n", field);

    // "HELLO WORLD" as a version 1-M QR symbol: 16 data codewords, 10 EC codewords.
    let data: Vec<u8> = vec![
        32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17,
    ];
    let ec_len = 10;

    let g = generator(&field, ec_len)?;
    println!("generator (degree {}) = {}", g.degree(), g);

    let message = FieldPolynomial::new(&field, data.clone())?;
    let shifted = message.multiply_by_monomial(ec_len, 1);
    let remainder = shifted.remainder(&g)?;

    // Left-pad the remainder to exactly ec_len codewords
    let mut ec = vec![0u8; ec_len - remainder.coefficients().len()];
    ec.extend_from_slice(remainder.coefficients());
    println!("data codewords = {:?}", data);
    println!("EC codewords   = {:?}", ec);

    let mut codeword = data;
    codeword.extend_from_slice(&ec);
    let codeword = FieldPolynomial::new(&field, codeword)?;

    println!("\nSyndromes of the transmitted block:");
    let base = field.generator_base() as usize;
    for i in 0..ec_len {
        let root = field.exp(i + base);
        println!("  c(α^{}) = {}", i + base, codeword.evaluate_at(root));
    }

    // Flip one codeword and the syndromes stop vanishing
    let mut corrupted = codeword.coefficients().to_vec();
    corrupted[3] = field.add(corrupted[3], 0x5A);
    let corrupted = FieldPolynomial::new(&field, corrupted)?;
    let nonzero = (0..ec_len)
        .filter(|&i| corrupted.evaluate_at(field.exp(i + base)) != 0)
        .count();
    println!("\nafter corrupting one codeword, {} of {} syndromes are non-zero", nonzero, ec_len);

    Ok(())
}
