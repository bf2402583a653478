//! Walks through ring construction, reduction and sampling.
//!
//! Run with `RUST_LOG=debug cargo run --example ring_demo` to see the
//! library's tracing output.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use toy_cyclotomic_ring::{
    RingBuilder, RingElement, RingResult, centered_remainder_i64, sample,
    sample_gaussian, sample_ternary,
};
use tracing_subscriber::EnvFilter;

fn main() -> RingResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let ring = RingBuilder::new(8).modulus(17).build()?;
    let interval = ring.residue_interval().map(|i| (i.low(), i.high()));
    println!("ring: degree={}, modulus={:?}", ring.degree(), ring.modulus());
    println!("residue interval: {:?}", interval);

    println!("centered_remainder(10, 7) = {}", centered_remainder_i64(10, 7));
    println!("centered_remainder(11, 7) = {}", centered_remainder_i64(11, 7));

    // 3 + 20x + x^8 + 2x^9 = 2 + 22x, then centered mod 17
    let reduced =
        RingElement::new([3, 20, 0, 0, 0, 0, 0, 0, 1, 2], ring.clone())?;
    println!("reduced:  {:#}", reduced);

    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let uniform = sample(&ring, &mut rng)?;
    let ternary = sample_ternary(&ring, 4, &mut rng)?;
    let gaussian = sample_gaussian(&ring, 3.2, &mut rng)?;
    println!("uniform:  {}", uniform);
    println!("ternary:  {:.4}", ternary);
    println!("gaussian: {:#}", gaussian);

    let integer_ring = RingBuilder::new(8).build()?;
    match sample(&integer_ring, &mut rng) {
        Ok(_) => println!("unexpected sample over Z[X]/(X^8 + 1)"),
        Err(err) => println!("sampling over Z[X]/(X^8 + 1): {err}"),
    }

    Ok(())
}
