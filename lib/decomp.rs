//! Projection of a single 2 × 2 operator onto the Pauli basis.
//!
//! Any 2 × 2 complex matrix *M* can be written uniquely as
//! *M* = *m*<sub>0</sub>*I* + *m*<sub>*x*</sub>σ<sub>*x*</sub>
//! + *m*<sub>*y*</sub>σ<sub>*y*</sub> + *m*<sub>*z*</sub>σ<sub>*z*</sub>, with
//! each coefficient given by the trace inner product
//! *m*<sub>*k*</sub> = tr(σ<sub>*k*</sub>*M*) / 2.

use nalgebra as na;
use num_complex::Complex64 as C64;
use crate::pauli::Pauli;

/// Coefficients of an operator along *I*, σ<sub>*x*</sub>, σ<sub>*y*</sub>,
/// σ<sub>*z*</sub>.
///
/// `T` is a scalar for a 2 × 2 operator and an *N* × *N* block for a
/// spin-doubled operator (see [`block`][crate::block]).
#[derive(Clone, Debug, PartialEq)]
pub struct PauliComponents<T> {
    /// Scalar ("charge") part.
    pub i: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> From<(T, T, T, T)> for PauliComponents<T> {
    fn from(comps: (T, T, T, T)) -> Self {
        let (i, x, y, z) = comps;
        Self { i, x, y, z }
    }
}

impl<T> From<[T; 4]> for PauliComponents<T> {
    fn from(comps: [T; 4]) -> Self {
        let [i, x, y, z] = comps;
        Self { i, x, y, z }
    }
}

impl<T> PauliComponents<T> {
    /// Return a reference to the coefficient along `p`.
    pub fn get(&self, p: Pauli) -> &T {
        match p {
            Pauli::I => &self.i,
            Pauli::X => &self.x,
            Pauli::Y => &self.y,
            Pauli::Z => &self.z,
        }
    }

    /// Unpack as `(I, x, y, z)`.
    pub fn into_tuple(self) -> (T, T, T, T) { (self.i, self.x, self.y, self.z) }

    /// Unpack as `[I, x, y, z]`.
    pub fn into_array(self) -> [T; 4] { [self.i, self.x, self.y, self.z] }

    /// Apply `f` to every coefficient.
    pub fn map<U, F>(self, mut f: F) -> PauliComponents<U>
    where F: FnMut(T) -> U
    {
        PauliComponents { i: f(self.i), x: f(self.x), y: f(self.y), z: f(self.z) }
    }
}

impl PauliComponents<C64> {
    /// Return the (*x*, *y*, *z*) ("spin") part.
    pub fn vector(&self) -> na::Vector3<C64> {
        na::Vector3::new(self.x, self.y, self.z)
    }

    /// Euclidean norm of [`Self::vector`].
    pub fn sigma_norm(&self) -> f64 { self.vector().norm() }

    /// Rebuild the operator *I*σ<sub>0</sub> + *x*σ<sub>*x*</sub> +
    /// *y*σ<sub>*y*</sub> + *z*σ<sub>*z*</sub>.
    pub fn compose(&self) -> na::Matrix2<C64> {
        Pauli::ALL.into_iter()
            .fold(na::Matrix2::zeros(), |acc, p| acc + p.matrix() * *self.get(p))
    }
}

/// Lift a real 2 × 2 matrix to a complex one.
pub fn complexify2(m: &na::Matrix2<f64>) -> na::Matrix2<C64> {
    m.map(|r| C64::new(r, 0.0))
}

/// Decompose a 2 × 2 matrix into its (*I*, *x*, *y*, *z*) components via
/// tr(σ<sub>*k*</sub>*M*) / 2.
pub fn pauli_decompose(m: &na::Matrix2<C64>) -> PauliComponents<C64> {
    Pauli::ALL.map(|p| (p.matrix() * m).trace() / 2.0).into()
}

/// Like [`pauli_decompose`], but computing each trace as the element-wise sum
/// Σ *M* ⊙ σ<sub>*k*</sub><sup>T</sup>, skipping the matrix product.
pub fn pauli_decompose_elementwise(m: &na::Matrix2<C64>)
    -> PauliComponents<C64>
{
    Pauli::ALL.map(|p| m.component_mul(p.matrix_t()).sum() / 2.0).into()
}

/// Return the magnitude of the spin part of a 2 × 2 matrix, √(|*x*|² + |*y*|²
/// + |*z*|²), discarding *I*.
pub fn pauli_sigma_norm(m: &na::Matrix2<C64>) -> f64 {
    pauli_decompose_elementwise(m).sigma_norm()
}
