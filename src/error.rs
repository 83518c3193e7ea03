//! Tipos de error del conjugador

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConjugationError {
    /// El verbo tiene menos de dos caracteres y no se puede extraer la raíz
    #[error("verbo demasiado corto: '{verb}' (se necesitan al menos 2 caracteres)")]
    InvalidInput { verb: String },

    /// Opción de menú o clase verbal no reconocida
    #[error("opción no válida: '{0}'")]
    InvalidSelection(String),

    #[error("error de entrada/salida: {0}")]
    Io(#[from] std::io::Error),
}
