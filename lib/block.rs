//! Block-wise Pauli decomposition of spin-doubled operators.
//!
//! A (2*N*<sub>1</sub>) × (2*N*<sub>2</sub>) matrix is read as a 2 × 2 grid of
//! *N*<sub>1</sub> × *N*<sub>2</sub> blocks,
//! ```text
//! [ upup  updn ]
//! [ dnup  dndn ]
//! ```
//! whose Pauli components are
//! ```text
//! I = (upup + dndn) / 2
//! x = (updn + dnup) / 2
//! y = i (updn - dnup) / 2
//! z = (upup - dndn) / 2
//! ```
//! so that the operator equals *I* ⊗ σ<sub>0</sub> + *x* ⊗ σ<sub>*x*</sub> +
//! *y* ⊗ σ<sub>*y*</sub> + *z* ⊗ σ<sub>*z*</sub> with the spin factor on the
//! outside.

use nalgebra as na;
use num_complex::Complex64 as C64;
use tracing::{ debug, trace };
use crate::{
    decomp::PauliComponents,
    error::{ PauliError, PauliResult },
    pauli::Pauli,
};

// borrowed views of the four spin blocks
struct SpinBlocks<'a> {
    upup: na::DMatrixView<'a, C64>,
    updn: na::DMatrixView<'a, C64>,
    dnup: na::DMatrixView<'a, C64>,
    dndn: na::DMatrixView<'a, C64>,
}

impl<'a> SpinBlocks<'a> {
    fn new(m: &'a na::DMatrix<C64>) -> PauliResult<Self> {
        let (rows, cols) = m.shape();
        if rows == 0 || cols == 0 || rows % 2 != 0 || cols % 2 != 0 {
            debug!(rows, cols, "rejected matrix for spin block split");
            return Err(PauliError::InvalidDimension { rows, cols });
        }
        let (norb1, norb2) = (rows / 2, cols / 2);
        trace!(norb1, norb2, "splitting into spin blocks");
        Ok(Self {
            upup: m.view((0,     0    ), (norb1, norb2)),
            updn: m.view((0,     norb2), (norb1, norb2)),
            dnup: m.view((norb1, 0    ), (norb1, norb2)),
            dndn: m.view((norb1, norb2), (norb1, norb2)),
        })
    }

    // only for the legacy helpers, which require N × N blocks
    fn new_square(m: &'a na::DMatrix<C64>, norb: usize) -> PauliResult<Self> {
        let (rows, cols) = m.shape();
        if rows % 2 != 0 || rows / 2 != norb || cols != rows {
            debug!(rows, cols, norb, "rejected matrix for square spin block split");
            return Err(PauliError::InvalidDimension { rows, cols });
        }
        Self::new(m)
    }

    fn component(&self, p: Pauli) -> na::DMatrix<C64> {
        let half = C64::from(0.5);
        match p {
            Pauli::I => (&self.upup + &self.dndn) * half,
            Pauli::X => (&self.updn + &self.dnup) * half,
            Pauli::Y => (&self.updn - &self.dnup) * C64::new(0.0, 0.5),
            Pauli::Z => (&self.upup - &self.dndn) * half,
        }
    }
}

// place each (block row, block col, block) into a zeroed 2N × 2N matrix
fn embed(norb: usize, blocks: &[(usize, usize, na::DMatrix<C64>)])
    -> na::DMatrix<C64>
{
    let mut ret: na::DMatrix<C64> = na::DMatrix::zeros(2 * norb, 2 * norb);
    for (r, c, block) in blocks.iter() {
        ret.view_mut((r * norb, c * norb), (norb, norb)).copy_from(block);
    }
    ret
}

// numpy-style sign of a complex number: that of the real part, falling back
// to the imaginary part
fn csign(c: C64) -> f64 {
    if c.re != 0.0 {
        c.re.signum()
    } else if c.im != 0.0 {
        c.im.signum()
    } else {
        0.0
    }
}

/// Lift a real matrix to a complex one.
pub fn complexify(m: &na::DMatrix<f64>) -> na::DMatrix<C64> {
    m.map(|r| C64::new(r, 0.0))
}

/// Compute all four Pauli components of a (2*N*<sub>1</sub>) ×
/// (2*N*<sub>2</sub>) matrix, each of shape *N*<sub>1</sub> ×
/// *N*<sub>2</sub>.
///
/// Fails if either dimension of `m` is odd or zero.
pub fn pauli_block_all(m: &na::DMatrix<C64>)
    -> PauliResult<PauliComponents<na::DMatrix<C64>>>
{
    let blocks = SpinBlocks::new(m)?;
    Ok(Pauli::ALL.map(|p| blocks.component(p)).into())
}

/// Compute the `idim`-th Pauli component (0, 1, 2, 3 for *I*, *x*, *y*, *z*)
/// of a (2*N*<sub>1</sub>) × (2*N*<sub>2</sub>) matrix.
///
/// Fails with [`PauliError::NotImplemented`] for `idim` > 3, or if either
/// dimension of `m` is odd or zero.
pub fn pauli_block(m: &na::DMatrix<C64>, idim: usize)
    -> PauliResult<na::DMatrix<C64>>
{
    let p = Pauli::from_index(idim)
        .map_err(|_| PauliError::NotImplemented(idim))?;
    let blocks = SpinBlocks::new(m)?;
    Ok(blocks.component(p))
}

/// Inverse of [`pauli_block_all`]: stack block components back into the
/// spin-doubled layout,
/// ```text
/// [ I + z     x - i y ]
/// [ x + i y   I - z   ]
/// ```
///
/// Fails if the four components are not all the same shape.
pub fn pauli_block_compose(comps: &PauliComponents<na::DMatrix<C64>>)
    -> PauliResult<na::DMatrix<C64>>
{
    let shape = comps.i.shape();
    if Pauli::ALL.iter().any(|p| comps.get(*p).shape() != shape) {
        debug!("rejected Pauli block components with mismatched shapes");
        return Err(PauliError::ShapeMismatch);
    }
    let (norb1, norb2) = shape;
    let iy = &comps.y * C64::i();
    let mut ret: na::DMatrix<C64> = na::DMatrix::zeros(2 * norb1, 2 * norb2);
    ret.view_mut((0,     0    ), (norb1, norb2)).copy_from(&(&comps.i + &comps.z));
    ret.view_mut((0,     norb2), (norb1, norb2)).copy_from(&(&comps.x - &iy));
    ret.view_mut((norb1, 0    ), (norb1, norb2)).copy_from(&(&comps.x + &iy));
    ret.view_mut((norb1, norb2), (norb1, norb2)).copy_from(&(&comps.i - &comps.z));
    Ok(ret)
}

/// *I* component of a 2*N* × 2*N* matrix, embedded as *I* ⊗ σ<sub>0</sub>.
pub fn pauli_block_I(m: &na::DMatrix<C64>, norb: usize)
    -> PauliResult<na::DMatrix<C64>>
{
    let tmp = SpinBlocks::new_square(m, norb)?.component(Pauli::I);
    Ok(embed(norb, &[(0, 0, tmp.clone()), (1, 1, tmp)]))
}

/// *x* component of a 2*N* × 2*N* matrix, embedded as *x* ⊗ σ<sub>*x*</sub>.
pub fn pauli_block_x(m: &na::DMatrix<C64>, norb: usize)
    -> PauliResult<na::DMatrix<C64>>
{
    let tmp = SpinBlocks::new_square(m, norb)?.component(Pauli::X);
    Ok(embed(norb, &[(0, 1, tmp.clone()), (1, 0, tmp)]))
}

/// *y* component of a 2*N* × 2*N* matrix.
///
/// Returns both the bare *N* × *N* component and its embedding as
/// *y* ⊗ σ<sub>*y*</sub>.
pub fn pauli_block_y(m: &na::DMatrix<C64>, norb: usize)
    -> PauliResult<(na::DMatrix<C64>, na::DMatrix<C64>)>
{
    let tmp = SpinBlocks::new_square(m, norb)?.component(Pauli::Y);
    let ret = embed(norb, &[(0, 1, &tmp * -C64::i()), (1, 0, &tmp * C64::i())]);
    Ok((tmp, ret))
}

/// *z* component of a 2*N* × 2*N* matrix.
///
/// Returns both the bare *N* × *N* component and its embedding as
/// *z* ⊗ σ<sub>*z*</sub>.
pub fn pauli_block_z(m: &na::DMatrix<C64>, norb: usize)
    -> PauliResult<(na::DMatrix<C64>, na::DMatrix<C64>)>
{
    let tmp = SpinBlocks::new_square(m, norb)?.component(Pauli::Z);
    let ret = embed(norb, &[(0, 0, tmp.clone()), (1, 1, -&tmp)]);
    Ok((tmp, ret))
}

/// Signed spin magnitude of a spin-doubled matrix, approximated as
/// *z* · sign(tr *z*).
///
/// This assumes the spin axis lies along *z* and orients it along the global
/// trend of the block; it is not the norm of (*x*, *y*, *z*). The trace is
/// taken over the leading diagonal when the blocks are not square.
pub fn pauli_block_sigma_norm(m: &na::DMatrix<C64>)
    -> PauliResult<na::DMatrix<C64>>
{
    let mz = SpinBlocks::new(m)?.component(Pauli::Z);
    let tr: C64 = (0..mz.nrows().min(mz.ncols())).map(|k| mz[(k, k)]).sum();
    Ok(mz * C64::from(csign(tr)))
}

#[cfg(test)]
mod test {
    use rand::{ rngs::StdRng, Rng, SeedableRng };
    use crate::{ decomp::pauli_decompose, pauli::pauli_block_matrix };
    use super::*;

    const EPS: f64 = 1e-10;

    fn random_matrix<R>(nrows: usize, ncols: usize, rng: &mut R)
        -> na::DMatrix<C64>
    where R: Rng + ?Sized
    {
        na::DMatrix::from_fn(nrows, ncols, |_, _| {
            C64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
        })
    }

    fn assert_close(a: &na::DMatrix<C64>, b: &na::DMatrix<C64>) {
        assert_eq!(a.shape(), b.shape());
        assert!((a - b).norm() < EPS, "{} != {}", a, b);
    }

    #[test]
    fn basis_recovery() {
        for n in 1..=4 {
            let ones: na::DMatrix<C64> = na::DMatrix::from_element(n, n, C64::from(1.0));
            let zeros: na::DMatrix<C64> = na::DMatrix::zeros(n, n);
            for p in Pauli::ALL {
                let m = pauli_block_matrix(2 * n, p.index()).unwrap();
                let comps = pauli_block_all(&m).unwrap();
                for q in Pauli::ALL {
                    let expected = if p == q { &ones } else { &zeros };
                    assert_close(comps.get(q), expected);
                }
            }
        }
    }

    #[test]
    fn round_trip_rectangular() {
        let mut rng = StdRng::seed_from_u64(10546);
        for (norb1, norb2) in [(1, 1), (2, 3), (3, 2), (4, 4), (1, 5)] {
            let m = random_matrix(2 * norb1, 2 * norb2, &mut rng);
            let comps = pauli_block_all(&m).unwrap();
            assert_eq!(comps.i.shape(), (norb1, norb2));
            assert_close(&pauli_block_compose(&comps).unwrap(), &m);
        }
    }

    #[test]
    fn single_component_matches_all() {
        let mut rng = StdRng::seed_from_u64(31415);
        let m = random_matrix(6, 4, &mut rng);
        let comps = pauli_block_all(&m).unwrap();
        for p in Pauli::ALL {
            assert_close(&pauli_block(&m, p.index()).unwrap(), comps.get(p));
        }
    }

    #[test]
    fn single_orbital_matches_scalar() {
        let mut rng = StdRng::seed_from_u64(2718);
        let m = random_matrix(2, 2, &mut rng);
        let m2 = na::Matrix2::from_fn(|r, c| m[(r, c)]);
        let scalar = pauli_decompose(&m2);
        let block = pauli_block_all(&m).unwrap();
        for p in Pauli::ALL {
            assert!((block.get(p)[(0, 0)] - *scalar.get(p)).norm() < EPS);
        }
    }

    #[test]
    fn rejects() {
        let m: na::DMatrix<C64> = na::DMatrix::zeros(4, 4);
        assert_eq!(pauli_block(&m, 4), Err(PauliError::NotImplemented(4)));
        let odd: na::DMatrix<C64> = na::DMatrix::zeros(3, 4);
        assert_eq!(
            pauli_block_all(&odd),
            Err(PauliError::InvalidDimension { rows: 3, cols: 4 }),
        );
        assert_eq!(
            pauli_block(&odd, 0),
            Err(PauliError::InvalidDimension { rows: 3, cols: 4 }),
        );
        assert_eq!(
            pauli_block_I(&m, 3),
            Err(PauliError::InvalidDimension { rows: 4, cols: 4 }),
        );
        assert_eq!(
            pauli_block_I(&m, usize::MAX),
            Err(PauliError::InvalidDimension { rows: 4, cols: 4 }),
        );
        assert_eq!(
            pauli_block_z(&m, usize::MAX / 2 + 1).map(|(_, ret)| ret),
            Err(PauliError::InvalidDimension { rows: 4, cols: 4 }),
        );
        let wide: na::DMatrix<C64> = na::DMatrix::zeros(4, 6);
        assert_eq!(
            pauli_block_x(&wide, 2),
            Err(PauliError::InvalidDimension { rows: 4, cols: 6 }),
        );
        let comps = PauliComponents {
            i: na::DMatrix::zeros(2, 2),
            x: na::DMatrix::zeros(2, 2),
            y: na::DMatrix::zeros(2, 3),
            z: na::DMatrix::zeros(2, 2),
        };
        assert_eq!(pauli_block_compose(&comps), Err(PauliError::ShapeMismatch));
    }

    #[test]
    fn legacy_embeddings_sum_to_input() {
        let mut rng = StdRng::seed_from_u64(1618);
        let norb = 3;
        let m = random_matrix(2 * norb, 2 * norb, &mut rng);
        let mi = pauli_block_I(&m, norb).unwrap();
        let mx = pauli_block_x(&m, norb).unwrap();
        let (y, my) = pauli_block_y(&m, norb).unwrap();
        let (z, mz) = pauli_block_z(&m, norb).unwrap();
        assert_close(&(mi + mx + my + mz), &m);

        let comps = pauli_block_all(&m).unwrap();
        assert_close(&y, &comps.y);
        assert_close(&z, &comps.z);
    }

    #[test]
    fn legacy_embedding_layout() {
        let mut rng = StdRng::seed_from_u64(1729);
        let norb = 2;
        let m = random_matrix(2 * norb, 2 * norb, &mut rng);
        let comps = pauli_block_all(&m).unwrap();

        let mi = pauli_block_I(&m, norb).unwrap();
        assert_close(&mi.view((0, 0), (2, 2)).into_owned(), &comps.i);
        assert_close(&mi.view((2, 2), (2, 2)).into_owned(), &comps.i);
        assert!(mi.view((0, 2), (2, 2)).norm() < EPS);

        let mx = pauli_block_x(&m, norb).unwrap();
        assert_close(&mx.view((0, 2), (2, 2)).into_owned(), &comps.x);
        assert_close(&mx.view((2, 0), (2, 2)).into_owned(), &comps.x);
        assert!(mx.view((0, 0), (2, 2)).norm() < EPS);

        let (_, my) = pauli_block_y(&m, norb).unwrap();
        assert_close(&my.view((0, 2), (2, 2)).into_owned(), &(&comps.y * -C64::i()));
        assert_close(&my.view((2, 0), (2, 2)).into_owned(), &(&comps.y * C64::i()));
        assert!(my.view((0, 0), (2, 2)).norm() < EPS);
        assert!(my.view((2, 2), (2, 2)).norm() < EPS);

        let (_, mz) = pauli_block_z(&m, norb).unwrap();
        assert_close(&mz.view((2, 2), (2, 2)).into_owned(), &(-&comps.z));
        assert!(mz.view((2, 0), (2, 2)).norm() < EPS);
    }

    #[test]
    fn sigma_norm_sign() {
        let n = 3;
        let eye: na::DMatrix<C64> = na::DMatrix::identity(n, n);
        let zeros: na::DMatrix<C64> = na::DMatrix::zeros(n, n);
        let spin_down = PauliComponents {
            i: &eye * C64::from(2.0),
            x: zeros.clone(),
            y: zeros.clone(),
            z: &eye * C64::from(-0.5),
        };
        let m = pauli_block_compose(&spin_down).unwrap();
        assert_close(&pauli_block_sigma_norm(&m).unwrap(), &(&eye * C64::from(0.5)));

        let spin_up = PauliComponents { z: &eye * C64::from(0.5), ..spin_down };
        let m = pauli_block_compose(&spin_up).unwrap();
        assert_close(&pauli_block_sigma_norm(&m).unwrap(), &(&eye * C64::from(0.5)));

        // 2 × 3 blocks: only the leading diagonal enters the trace, so the
        // large positive off-diagonal entries do not flip the sign
        let z = na::DMatrix::from_row_slice(2, 3, &[
            C64::from(-1.0), C64::from( 0.0), C64::from(5.0),
            C64::from( 0.0), C64::from(-2.0), C64::from(7.0),
        ]);
        let zeros: na::DMatrix<C64> = na::DMatrix::zeros(2, 3);
        let rect = PauliComponents {
            i: zeros.clone(), x: zeros.clone(), y: zeros, z: z.clone(),
        };
        let m = pauli_block_compose(&rect).unwrap();
        assert_eq!(m.shape(), (4, 6));
        assert_close(&pauli_block_sigma_norm(&m).unwrap(), &(-z));
    }

    #[test]
    fn sigma_norm_degenerate_trace() {
        let mut z: na::DMatrix<C64> = na::DMatrix::zeros(2, 2);
        z[(0, 0)] = C64::from(1.0);
        z[(1, 1)] = C64::from(-1.0);
        let zeros: na::DMatrix<C64> = na::DMatrix::zeros(2, 2);
        let comps = PauliComponents {
            i: zeros.clone(), x: zeros.clone(), y: zeros.clone(), z,
        };
        let m = pauli_block_compose(&comps).unwrap();
        assert_close(&pauli_block_sigma_norm(&m).unwrap(), &zeros);

        // purely imaginary trace falls back to the sign of the imaginary part
        let z = na::DMatrix::from_element(2, 2, C64::new(0.0, -1.0));
        let comps = PauliComponents { z: z.clone(), ..comps };
        let m = pauli_block_compose(&comps).unwrap();
        assert_close(&pauli_block_sigma_norm(&m).unwrap(), &(-z));
    }

    #[test]
    fn complexify_real() {
        let m = na::DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, -1.0]);
        let comps = pauli_block_all(&complexify(&m)).unwrap();
        assert!((comps.x[(0, 0)] - C64::from(2.0)).norm() < EPS);
        assert!((comps.z[(0, 0)] - C64::from(1.0)).norm() < EPS);
        assert!(comps.y[(0, 0)].norm() < EPS);
    }
}
