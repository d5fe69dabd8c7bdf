//! Named Collector - prints a named collection of generated items.
//!
//! With no arguments the output is the `test` collector holding
//! `item_0` through `item_4`.

use named_collector::cli;
use std::process;

fn main() {
    match cli::run() {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("Error: {}", e);

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                eprintln!("\nRecovery suggestions:");
                for suggestion in suggestions {
                    eprintln!("  • {}", suggestion);
                }
            }

            process::exit(1);
        }
    }
}
