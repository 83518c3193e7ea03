use std::io;
use std::process;

use anyhow::{Context, Result};
use log::debug;

use conjugador::config::Mode;
use conjugador::{menu, Config, ConjugationError};

fn main() -> Result<()> {
    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) => e.exit(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let mode = match config.mode() {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let ConjugationError::InvalidSelection(_) = e {
                eprintln!("Indica la clase del verbo con --clase ar|er|ir");
            }
            process::exit(1);
        }
    };
    debug!("Modo de ejecución: {:?}", mode);

    match mode {
        Mode::Interactive => {
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            menu::run(stdin.lock(), &mut stdout).context("Error en el menú interactivo")?;
        }
        Mode::OneShot { verb, class } => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = menu::one_shot(&verb, class, &mut stdout) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }

    Ok(())
}
