#![allow(non_snake_case)]

//! Decomposition of complex operators into the basis of the identity and the
//! three Pauli matrices, and the inverse construction.
//!
//! Operators are assumed to be written in a "spin-doubled" basis: for a
//! 2*N* × 2*N* matrix, the first *N* rows/columns belong to the spin-up
//! channel and the last *N* to spin-down. Projecting onto
//! {*I*, σ<sub>*x*</sub>, σ<sub>*y*</sub>, σ<sub>*z*</sub>} separates the
//! scalar "charge" part (*I*) from the vector "spin" part (*x*, *y*, *z*).
//!
//! # Example
//! ```
//! use nalgebra as na;
//! use num_complex::Complex64 as C64;
//! use pauli_decomp::{ block::pauli_block_all, pauli::pauli_block_matrix };
//!
//! // σ_y ⊗ J for two orbitals per spin channel
//! let m: na::DMatrix<C64> = pauli_block_matrix(4, 2).unwrap();
//! let comps = pauli_block_all(&m).unwrap();
//! assert!((comps.y - na::DMatrix::from_element(2, 2, C64::from(1.0))).norm() < 1e-12);
//! assert!(comps.x.norm() < 1e-12);
//! ```

pub mod error;
pub mod pauli;
pub mod decomp;
pub mod block;

pub use error::{ PauliError, PauliResult };
pub use pauli::{ Pauli, pauli_matrix, pauli_block_matrix };
pub use decomp::{
    PauliComponents,
    complexify2,
    pauli_decompose,
    pauli_decompose_elementwise,
    pauli_sigma_norm,
};
pub use block::{
    pauli_block,
    pauli_block_all,
    complexify,
    pauli_block_compose,
    pauli_block_sigma_norm,
    pauli_block_I,
    pauli_block_x,
    pauli_block_y,
    pauli_block_z,
};
