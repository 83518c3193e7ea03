//! Formas irregulares del presente
//!
//! Cada entrada asocia un par (clase, infinitivo) con sus cinco formas
//! completas, en el mismo orden que `Pronoun::ALL`. Para añadir un verbo
//! irregular basta con añadir una fila a `IRREGULARES`.

use super::VerbClass;

struct IrregularEntry {
    class: VerbClass,
    infinitive: &'static str,
    forms: [&'static str; 5],
}

const IRREGULARES: &[IrregularEntry] = &[
    // ESTAR
    IrregularEntry {
        class: VerbClass::Ar,
        infinitive: "estar",
        forms: ["estoy", "estás", "está", "están", "estamos"],
    },
    // SER
    IrregularEntry {
        class: VerbClass::Er,
        infinitive: "ser",
        forms: ["soy", "eres", "es", "son", "somos"],
    },
];

/// Busca las formas irregulares de un verbo para la clase indicada.
///
/// La comparación es exacta: "Estar" o "estar " no coinciden.
pub fn lookup(class: VerbClass, infinitive: &str) -> Option<&'static [&'static str; 5]> {
    IRREGULARES
        .iter()
        .find(|entry| entry.class == class && entry.infinitive == infinitive)
        .map(|entry| &entry.forms)
}

pub fn is_irregular(class: VerbClass, infinitive: &str) -> bool {
    lookup(class, infinitive).is_some()
}
