use crate::cli::ColorChoice;
use std::io::IsTerminal;

/// Initialize color mode from the CLI choice and environment
pub fn init(choice: ColorChoice) {
    let enable = match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            // NO_COLOR (https://no-color.org/) wins over terminal detection
            std::env::var("NO_COLOR").is_err() && std::io::stdout().is_terminal()
        }
    };

    colored::control::set_override(enable);
}
