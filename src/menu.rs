//! Menú interactivo
//!
//! Lee una opción por línea, pide el verbo y muestra sus formas hasta que
//! el usuario elige salir o se agota la entrada.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use log::{info, warn};

use crate::conjugation::{conjugate, VerbClass};
use crate::error::ConjugationError;

/// Número de la opción para salir
pub const QUIT_NUMBER: u8 = 4;

pub const INVALID_CHOICE_MESSAGE: &str = "La opción debe ser un número de la lista";

/// Opción elegida en el menú
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Conjugate(VerbClass),
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Result<Self, ConjugationError> {
        let trimmed = input.trim();
        let number: u8 = trimmed
            .parse()
            .map_err(|_| ConjugationError::InvalidSelection(trimmed.to_string()))?;

        if number == QUIT_NUMBER {
            return Ok(MenuChoice::Quit);
        }

        VerbClass::ALL
            .into_iter()
            .find(|class| class.menu_number() == number)
            .map(MenuChoice::Conjugate)
            .ok_or_else(|| ConjugationError::InvalidSelection(trimmed.to_string()))
    }
}

fn write_menu<W: Write>(output: &mut W) -> Result<(), ConjugationError> {
    writeln!(output, "Elige el tipo de verbo que quieres conjugar en presente:")?;
    for class in VerbClass::ALL {
        writeln!(output, "Escribe '{}' para verbos {}", class.menu_number(), class)?;
    }
    writeln!(output, "Escribe '{}' para salir", QUIT_NUMBER)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

/// Lee una línea sin el salto final.
///
/// Los bytes que no son UTF-8 válido se sustituyen por U+FFFD, de modo que
/// una entrada en otra codificación no interrumpe la sesión.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, ConjugationError> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    let line = String::from_utf8_lossy(&buf);
    if let Cow::Owned(_) = line {
        warn!("Entrada con bytes no UTF-8: {:?}", line);
    }
    Ok(Some(line.into_owned()))
}

/// Ejecuta el bucle del menú sobre la entrada y salida indicadas.
///
/// Los errores de selección y de verbo se muestran al usuario y el bucle
/// continúa; solo los errores de E/S terminan la sesión.
pub fn run<R: BufRead, W: Write>(mut input: R, output: &mut W) -> Result<(), ConjugationError> {
    let mut quit = false;

    while !quit {
        write_menu(output)?;

        let Some(line) = read_line(&mut input)? else {
            info!("Fin de la entrada, saliendo del menú");
            break;
        };
        writeln!(output)?;

        match MenuChoice::parse(&line) {
            Ok(MenuChoice::Quit) => quit = true,
            Ok(MenuChoice::Conjugate(class)) => {
                write!(output, "Introduce un verbo en español ({}): ", class)?;
                output.flush()?;

                let Some(verb) = read_line(&mut input)? else {
                    info!("Fin de la entrada, saliendo del menú");
                    break;
                };
                writeln!(output)?;

                match conjugate(verb.trim(), class) {
                    Ok(conjugation) => writeln!(output, "{}\n", conjugation)?,
                    Err(e @ ConjugationError::InvalidInput { .. }) => {
                        writeln!(output, "Error: {}\n", e)?
                    }
                    Err(e) => return Err(e),
                }
            }
            Err(e) => {
                warn!("{}", e);
                writeln!(output, "{}\n", INVALID_CHOICE_MESSAGE)?;
            }
        }
    }

    Ok(())
}

/// Conjuga un único verbo y escribe sus formas, sin menú
pub fn one_shot<W: Write>(
    verb: &str,
    class: VerbClass,
    output: &mut W,
) -> Result<(), ConjugationError> {
    let conjugation = conjugate(verb, class)?;
    writeln!(output, "{}", conjugation)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str) -> String {
        run_bytes(input.as_bytes())
    }

    fn run_bytes(input: &[u8]) -> String {
        let mut output = Vec::new();
        run(Cursor::new(input), &mut output).expect("sesión sin errores de E/S");
        String::from_utf8(output).expect("salida UTF-8")
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("1").ok(), Some(MenuChoice::Conjugate(VerbClass::Ar)));
        assert_eq!(MenuChoice::parse("2").ok(), Some(MenuChoice::Conjugate(VerbClass::Er)));
        assert_eq!(MenuChoice::parse(" 3\r").ok(), Some(MenuChoice::Conjugate(VerbClass::Ir)));
        assert_eq!(MenuChoice::parse("4").ok(), Some(MenuChoice::Quit));
    }

    #[test]
    fn test_parse_out_of_range() {
        for input in ["0", "5", "-1", "ar", ""] {
            assert!(
                matches!(MenuChoice::parse(input), Err(ConjugationError::InvalidSelection(_))),
                "'{}' no debería ser una opción válida",
                input
            );
        }
    }

    #[test]
    fn test_quit_immediately() {
        let out = run_session("4\n");
        assert_eq!(out.matches("Escribe '4' para salir").count(), 1);
        assert!(!out.contains("Introduce un verbo"));
    }

    #[test]
    fn test_conjugates_then_quits() {
        let out = run_session("1\nhablar\n4\n");
        assert!(out.contains("Introduce un verbo en español (-ar): "));
        let hablar = "yo hablo\ntú hablas\nusted habla\nustedes hablan\nnosotros hablamos\n\n";
        assert!(out.contains(hablar));
        assert_eq!(out.matches("Elige el tipo de verbo").count(), 2);
    }

    #[test]
    fn test_invalid_choice_continues() {
        let out = run_session("9\n2\ncomer\n4\n");
        assert!(out.contains(INVALID_CHOICE_MESSAGE));
        assert!(out.contains("nosotros comemos"));
    }

    #[test]
    fn test_short_verb_is_not_fatal() {
        let out = run_session("1\nx\n3\nvivir\n4\n");
        assert!(out.contains("verbo demasiado corto: 'x'"));
        assert!(out.contains("yo vivo"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let out = run_session("2\n");
        assert!(out.contains("Introduce un verbo en español (-er): "));
        assert!(!out.contains("yo "));
    }

    #[test]
    fn test_latin1_verb_does_not_end_session() {
        // "estár" escrito desde un terminal Latin-1
        let out = run_bytes(b"1\nest\xe1r\n3\nvivir\n4\n");
        assert!(out.contains("yo esto\n"), "Salida: {}", out);
        assert!(out.contains("yo vivo"), "La sesión debe continuar: {}", out);
    }

    #[test]
    fn test_latin1_choice_is_invalid_choice() {
        let out = run_bytes(b"\xb9\n4\n");
        assert!(out.contains(INVALID_CHOICE_MESSAGE));
        assert_eq!(out.matches("Elige el tipo de verbo").count(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let out = run_session("2\r\nser\r\n4\r\n");
        assert!(out.contains("yo soy\n"));
    }

    #[test]
    fn test_one_shot_writes_five_lines() {
        let mut output = Vec::new();
        one_shot("comer", VerbClass::Er, &mut output).expect("comer");
        assert_eq!(
            String::from_utf8(output).expect("salida UTF-8"),
            "yo como\ntú comes\nusted come\nustedes comen\nnosotros comemos\n"
        );
    }

    #[test]
    fn test_one_shot_short_verb() {
        let mut output = Vec::new();
        let result = one_shot("x", VerbClass::Ar, &mut output);
        assert!(matches!(result, Err(ConjugationError::InvalidInput { .. })));
        assert!(output.is_empty());
    }
}
