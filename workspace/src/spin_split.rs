//! Split a random Hermitian spin-doubled operator into its charge and spin
//! parts.
//!
//! Usage: `spin_split [norb] [seed]`

use nalgebra as na;
use num_complex::Complex64 as C64;
use pauli_decomp::{ block::*, Pauli };
use rand::{ rngs::StdRng, Rng, SeedableRng };
use tracing::info;
use tracing_subscriber::{ fmt, prelude::*, EnvFilter };

fn random_hermitian<R>(n: usize, rng: &mut R) -> na::DMatrix<C64>
where R: Rng + ?Sized
{
    let a: na::DMatrix<C64>
        = na::DMatrix::from_fn(n, n, |_, _| {
            C64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
        });
    (&a + a.adjoint()) * C64::from(0.5)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter
        = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();

    let mut args = std::env::args().skip(1);
    let norb: usize = args.next().map(|s| s.parse::<usize>()).transpose()?.unwrap_or(3);
    let seed: Option<u64> = args.next().map(|s| s.parse::<u64>()).transpose()?;
    let mut rng
        = seed.map(StdRng::seed_from_u64)
        .unwrap_or_else(StdRng::from_entropy);

    let h = random_hermitian(2 * norb, &mut rng);
    info!(norb, "decomposing random Hermitian operator");
    let comps = pauli_block_all(&h)?;
    for p in Pauli::ALL {
        info!(component = %p, norm = comps.get(p).norm(), "block component");
    }

    let rebuilt = pauli_block_compose(&comps)?;
    info!(error = (&rebuilt - &h).norm(), "round trip");

    let signed = pauli_block_sigma_norm(&h)?;
    info!(norm = signed.norm(), "signed spin magnitude\n{}", signed);
    Ok(())
}
