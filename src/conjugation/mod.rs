//! Módulo de conjugación verbal para español
//!
//! Genera las formas del presente de indicativo a partir del infinitivo,
//! ya sea por sustitución de terminación (verbos regulares) o mediante la
//! tabla de irregulares.

pub mod irregular;
pub mod regular;

use std::fmt;
use std::str::FromStr;

use log::{debug, trace, warn};

use crate::error::ConjugationError;

/// Clase de verbo según su terminación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbClass {
    Ar,
    Er,
    Ir,
}

impl VerbClass {
    pub const ALL: [VerbClass; 3] = [VerbClass::Ar, VerbClass::Er, VerbClass::Ir];

    /// Determina la clase de verbo a partir del infinitivo
    pub fn from_infinitive(infinitive: &str) -> Option<Self> {
        let lower = infinitive.trim().to_lowercase();
        if lower.ends_with("ar") {
            Some(VerbClass::Ar)
        } else if lower.ends_with("er") {
            Some(VerbClass::Er)
        } else if lower.ends_with("ir") {
            Some(VerbClass::Ir)
        } else {
            None
        }
    }

    /// Obtiene la terminación del infinitivo
    pub fn infinitive_ending(&self) -> &'static str {
        match self {
            VerbClass::Ar => "ar",
            VerbClass::Er => "er",
            VerbClass::Ir => "ir",
        }
    }

    /// Número con el que se elige esta clase en el menú interactivo
    pub fn menu_number(&self) -> u8 {
        match self {
            VerbClass::Ar => 1,
            VerbClass::Er => 2,
            VerbClass::Ir => 3,
        }
    }
}

impl fmt::Display for VerbClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}", self.infinitive_ending())
    }
}

impl FromStr for VerbClass {
    type Err = ConjugationError;

    /// Acepta "ar", "-ar", "AR" y el número de menú ("1", "2", "3")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.trim_start_matches('-') {
            "ar" | "1" => Ok(VerbClass::Ar),
            "er" | "2" => Ok(VerbClass::Er),
            "ir" | "3" => Ok(VerbClass::Ir),
            _ => Err(ConjugationError::InvalidSelection(s.to_string())),
        }
    }
}

/// Pronombre personal. No se incluye "vosotros".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pronoun {
    Yo,
    Tu,
    Usted,
    Ustedes,
    Nosotros,
}

impl Pronoun {
    /// Orden fijo en el que se presentan las formas
    pub const ALL: [Pronoun; 5] = [
        Pronoun::Yo,
        Pronoun::Tu,
        Pronoun::Usted,
        Pronoun::Ustedes,
        Pronoun::Nosotros,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pronoun::Yo => "yo",
            Pronoun::Tu => "tú",
            Pronoun::Usted => "usted",
            Pronoun::Ustedes => "ustedes",
            Pronoun::Nosotros => "nosotros",
        }
    }

    /// Posición en `Pronoun::ALL` y en las tablas de terminaciones
    pub(crate) fn index(&self) -> usize {
        match self {
            Pronoun::Yo => 0,
            Pronoun::Tu => 1,
            Pronoun::Usted => 2,
            Pronoun::Ustedes => 3,
            Pronoun::Nosotros => 4,
        }
    }
}

impl fmt::Display for Pronoun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resultado de conjugar un verbo: cinco pares (pronombre, forma)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjugation {
    infinitive: String,
    class: VerbClass,
    irregular: bool,
    forms: Vec<(Pronoun, String)>,
}

impl Conjugation {
    pub fn infinitive(&self) -> &str {
        &self.infinitive
    }

    pub fn class(&self) -> VerbClass {
        self.class
    }

    /// Indica si las formas provienen de la tabla de irregulares
    pub fn is_irregular(&self) -> bool {
        self.irregular
    }

    pub fn forms(&self) -> &[(Pronoun, String)] {
        &self.forms
    }

    pub fn form(&self, pronoun: Pronoun) -> &str {
        &self.forms[pronoun.index()].1
    }
}

/// Una línea "<pronombre> <forma>" por persona
impl fmt::Display for Conjugation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (pronoun, form)) in self.forms.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {}", pronoun, form)?;
        }
        Ok(())
    }
}

/// Extrae la raíz eliminando los dos últimos caracteres.
///
/// No comprueba que esos caracteres sean "ar", "er" o "ir".
pub fn stem(infinitive: &str) -> Result<&str, ConjugationError> {
    match infinitive.char_indices().rev().nth(1) {
        Some((idx, _)) => Ok(&infinitive[..idx]),
        None => Err(ConjugationError::InvalidInput {
            verb: infinitive.to_string(),
        }),
    }
}

/// Conjuga un verbo en presente de indicativo para la clase indicada
pub fn conjugate(verb: &str, class: VerbClass) -> Result<Conjugation, ConjugationError> {
    if let Some(forms) = irregular::lookup(class, verb) {
        debug!("Usando formas irregulares para '{}' ({})", verb, class);
        return Ok(Conjugation {
            infinitive: verb.to_string(),
            class,
            irregular: true,
            forms: Pronoun::ALL
                .iter()
                .zip(forms.iter())
                .map(|(&pronoun, &form)| (pronoun, form.to_string()))
                .collect(),
        });
    }

    let root = stem(verb).inspect_err(|_| warn!("Verbo demasiado corto: '{}'", verb))?;
    trace!("Raíz de '{}': '{}'", verb, root);

    Ok(Conjugation {
        infinitive: verb.to_string(),
        class,
        irregular: false,
        forms: regular::present_forms(root, class),
    })
}
