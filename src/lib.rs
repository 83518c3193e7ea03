//! Conjugador - Biblioteca de conjugación de verbos españoles
//!
//! Genera las formas del presente de indicativo de verbos -ar, -er e -ir.

pub mod config;
pub mod conjugation;
pub mod error;
pub mod menu;

pub use config::Config;
pub use conjugation::{conjugate, Conjugation, Pronoun, VerbClass};
pub use error::ConjugationError;
