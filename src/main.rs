//! pieceledger main entrypoint.

use pieceledger::run;
use pieceledger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
