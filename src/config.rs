//! Configuración y argumentos CLI

use clap::Parser;

use crate::conjugation::{stem, VerbClass};
use crate::error::ConjugationError;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "conjugador",
    version,
    about = "Conjuga verbos españoles en presente de indicativo",
    after_help = "EJEMPLOS:\n    conjugador\n    conjugador hablar\n    conjugador --clase er comer"
)]
pub struct Config {
    /// Verbo a conjugar; sin él se abre el menú interactivo
    #[arg(value_name = "VERBO")]
    pub verb: Option<String>,

    /// Clase del verbo (ar, er, ir); si se omite se deduce del infinitivo
    #[arg(short = 'c', long = "clase", value_name = "CLASE", allow_hyphen_values = true)]
    pub class: Option<VerbClass>,

    /// Nivel de log (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verb: None,
            class: None,
            log_level: "warn".to_string(),
        }
    }
}

/// Modo de ejecución derivado de los argumentos
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    OneShot { verb: String, class: VerbClass },
}

impl Config {
    pub fn from_args(args: Vec<String>) -> Result<Self, clap::Error> {
        Self::try_parse_from(args)
    }

    pub fn mode(&self) -> Result<Mode, ConjugationError> {
        let Some(ref verb) = self.verb else {
            return Ok(Mode::Interactive);
        };

        let class = match self.class {
            Some(class) => class,
            None => {
                // Un verbo demasiado corto no tiene terminación que deducir
                stem(verb)?;
                VerbClass::from_infinitive(verb)
                    .ok_or_else(|| ConjugationError::InvalidSelection(verb.clone()))?
            }
        };

        Ok(Mode::OneShot {
            verb: verb.clone(),
            class,
        })
    }
}
