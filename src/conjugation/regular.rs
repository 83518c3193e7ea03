//! Tablas de terminaciones para verbos regulares españoles
//!
//! Orden de las personas: yo, tú, usted, ustedes, nosotros.
//! La forma de vosotros no se incluye.

use super::{Pronoun, VerbClass};

/// Terminaciones del presente de indicativo
pub const PRESENTE_AR: [&str; 5] = ["o", "as", "a", "an", "amos"];
pub const PRESENTE_ER: [&str; 5] = ["o", "es", "e", "en", "emos"];
pub const PRESENTE_IR: [&str; 5] = ["o", "es", "e", "en", "imos"];

/// Obtiene la tabla de terminaciones del presente para una clase de verbo
pub fn present_endings(class: VerbClass) -> &'static [&'static str; 5] {
    match class {
        VerbClass::Ar => &PRESENTE_AR,
        VerbClass::Er => &PRESENTE_ER,
        VerbClass::Ir => &PRESENTE_IR,
    }
}

/// Obtiene la terminación del presente para una persona concreta
pub fn present_ending(class: VerbClass, pronoun: Pronoun) -> &'static str {
    present_endings(class)[pronoun.index()]
}

/// Construye las cinco formas regulares a partir de la raíz
pub fn present_forms(stem: &str, class: VerbClass) -> Vec<(Pronoun, String)> {
    Pronoun::ALL
        .iter()
        .map(|&pronoun| {
            let ending = present_ending(class, pronoun);
            let mut form = String::with_capacity(stem.len() + ending.len());
            form.push_str(stem);
            form.push_str(ending);
            (pronoun, form)
        })
        .collect()
}
