//! Interactive flashcard study tool.
//!
//! Thin terminal front-end over [`deck_core`]: a menu loop that dispatches
//! to deck and quiz operations, records every prompt and response into the
//! session transcript, and reads/writes flat card files.

pub mod console;
pub mod files;
pub mod session;

pub use console::Console;
pub use session::{Options, Session};

use std::io;

use deck_core::Sampler;

/// Run an interactive session on stdin/stdout.
pub fn run(options: Options) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    let mut session = Session::new(console, Sampler::new(), options);
    session.run()
}
