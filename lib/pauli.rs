//! The single-spin Pauli basis {*I*, σ<sub>*x*</sub>, σ<sub>*y*</sub>,
//! σ<sub>*z*</sub>} and its block expansion over an orbital space.
//!
//! See also: <https://en.wikipedia.org/wiki/Pauli_matrices>

use std::fmt;
use nalgebra as na;
use num_complex::Complex64 as C64;
use once_cell::sync::Lazy;
use tracing::debug;
use crate::error::{ PauliError, PauliResult };

/// A single-spin Pauli operator, including the identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pauli {
    /// Identity
    I,
    /// σ<sub>*x*</sub>
    X,
    /// σ<sub>*y*</sub>
    Y,
    /// σ<sub>*z*</sub>
    Z,
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::I => write!(f, "{}", if f.alternate() { "." } else { "I" }),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl TryFrom<usize> for Pauli {
    type Error = PauliError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl Pauli {
    /// All four basis elements in index order.
    pub const ALL: [Self; 4] = [Self::I, Self::X, Self::Y, Self::Z];

    /// Convert to the conventional index: 0 for *I*, 1–3 for *x*, *y*, *z*.
    pub fn index(self) -> usize {
        match self {
            Self::I => 0,
            Self::X => 1,
            Self::Y => 2,
            Self::Z => 3,
        }
    }

    /// Convert from the conventional index, failing on anything outside
    /// `0..=3`.
    pub fn from_index(index: usize) -> PauliResult<Self> {
        match index {
            0 => Ok(Self::I),
            1 => Ok(Self::X),
            2 => Ok(Self::Y),
            3 => Ok(Self::Z),
            _ => {
                debug!(index, "rejected Pauli index");
                Err(PauliError::InvalidIndex(index))
            },
        }
    }

    /// Return the 2 × 2 matrix representation.
    pub fn matrix(self) -> &'static na::Matrix2<C64> {
        match self {
            Self::I => Lazy::force(&PAULI_I),
            Self::X => Lazy::force(&PAULI_X),
            Self::Y => Lazy::force(&PAULI_Y),
            Self::Z => Lazy::force(&PAULI_Z),
        }
    }

    /// Return the transpose of [`Self::matrix`].
    ///
    /// σ<sub>*y*</sub> is the only element that is not symmetric, so this
    /// differs from the plain matrix only by a sign on `Y`.
    pub fn matrix_t(self) -> &'static na::Matrix2<C64> {
        match self {
            Self::I => Lazy::force(&PAULI_I_T),
            Self::X => Lazy::force(&PAULI_X_T),
            Self::Y => Lazy::force(&PAULI_Y_T),
            Self::Z => Lazy::force(&PAULI_Z_T),
        }
    }
}

/// A single-spin identity matrix.
pub static PAULI_I: Lazy<na::Matrix2<C64>> =
    Lazy::new(|| na::Matrix2::identity());

/// A single-spin Pauli *X* matrix.
pub static PAULI_X: Lazy<na::Matrix2<C64>> =
    Lazy::new(|| {
        let mut x = na::Matrix2::zeros();
        x[(0, 1)] = C64::from(1.0);
        x[(1, 0)] = C64::from(1.0);
        x
    });

/// A single-spin Pauli *Y* matrix.
pub static PAULI_Y: Lazy<na::Matrix2<C64>> =
    Lazy::new(|| {
        let mut y = na::Matrix2::zeros();
        y[(0, 1)] = -C64::i();
        y[(1, 0)] =  C64::i();
        y
    });

/// A single-spin Pauli *Z* matrix.
pub static PAULI_Z: Lazy<na::Matrix2<C64>> =
    Lazy::new(|| {
        let mut z = na::Matrix2::zeros();
        z[(0, 0)] = C64::from( 1.0);
        z[(1, 1)] = C64::from(-1.0);
        z
    });

/// Transpose of [`PAULI_I`].
pub static PAULI_I_T: Lazy<na::Matrix2<C64>> =
    Lazy::new(|| PAULI_I.transpose());

/// Transpose of [`PAULI_X`].
pub static PAULI_X_T: Lazy<na::Matrix2<C64>> =
    Lazy::new(|| PAULI_X.transpose());

/// Transpose of [`PAULI_Y`].
pub static PAULI_Y_T: Lazy<na::Matrix2<C64>> =
    Lazy::new(|| PAULI_Y.transpose());

/// Transpose of [`PAULI_Z`].
pub static PAULI_Z_T: Lazy<na::Matrix2<C64>> =
    Lazy::new(|| PAULI_Z.transpose());

/// Return the 2 × 2 matrix for Pauli index `index` (0, 1, 2, 3 for *I*, *x*,
/// *y*, *z*).
pub fn pauli_matrix(index: usize) -> PauliResult<na::Matrix2<C64>> {
    Pauli::from_index(index).map(|p| *p.matrix())
}

/// Return the `n_basis` × `n_basis` matrix σ ⊗ *J*, where σ is the Pauli
/// matrix for `index` and *J* is the all-ones *N* × *N* matrix with
/// `n_basis` = 2*N*.
///
/// Fails if `n_basis` is odd or zero.
pub fn pauli_block_matrix(n_basis: usize, index: usize)
    -> PauliResult<na::DMatrix<C64>>
{
    if n_basis == 0 || n_basis % 2 != 0 {
        debug!(n_basis, "rejected Pauli block matrix size");
        return Err(
            PauliError::InvalidDimension { rows: n_basis, cols: n_basis });
    }
    let spm = Pauli::from_index(index)?.matrix();
    let n = n_basis / 2;
    Ok(na::DMatrix::from_fn(n_basis, n_basis, |r, c| spm[(r / n, c / n)]))
}
