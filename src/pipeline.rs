//! Threaded variant of the lex → format pipeline.
//!
//! The lexer and the line formatter each run on their own thread,
//! connected by bounded channels. A capacity of zero makes every hand-off
//! a rendezvous, so neither stage ever runs ahead of its consumer. The
//! output is identical to the lazy `format_lines(scan(..))` composition.

use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver};

use crate::Error;
use crate::formatter::{Line, format_lines};
use crate::lexer::scan;
use crate::source::Source;
use crate::token::Token;

/// Handle on a running two-stage pipeline. Iterating it yields the
/// formatted lines in source order; the iteration ends when the
/// formatter closes its channel.
#[derive(Debug)]
pub struct StagedPipeline {
    lines: Receiver<Line>,
    workers: Vec<(&'static str, JoinHandle<()>)>,
}

impl StagedPipeline {
    /// Start the lexer and formatter threads for `source`.
    pub fn spawn(source: Source, capacity: usize) -> Result<Self, Error> {
        let (token_tx, token_rx) = channel::bounded::<Token>(capacity);
        let (line_tx, line_rx) = channel::bounded::<Line>(capacity);

        tracing::debug!(name = source.name(), capacity, "starting staged pipeline");

        let lexer = thread::Builder::new()
            .name("goprint-lexer".to_string())
            .spawn(move || {
                for token in scan(&source) {
                    if token_tx.send(token).is_err() {
                        tracing::trace!("formatter stage hung up");
                        return;
                    }
                }
                tracing::trace!(name = source.name(), "lexer stage done");
            })
            .map_err(|source| Error::Spawn {
                stage: "lexer",
                source,
            })?;

        let formatter = thread::Builder::new()
            .name("goprint-formatter".to_string())
            .spawn(move || {
                for line in format_lines(token_rx) {
                    if line_tx.send(line).is_err() {
                        tracing::trace!("line consumer hung up");
                        return;
                    }
                }
                tracing::trace!("formatter stage done");
            })
            .map_err(|source| Error::Spawn {
                stage: "formatter",
                source,
            })?;

        Ok(Self {
            lines: line_rx,
            workers: vec![("lexer", lexer), ("formatter", formatter)],
        })
    }

    /// Stop consuming and wait for both stages to exit.
    ///
    /// Lines not yet received are discarded.
    pub fn join(self) -> Result<(), Error> {
        drop(self.lines);
        for (stage, handle) in self.workers {
            handle.join().map_err(|_| Error::Worker { stage })?;
        }
        Ok(())
    }
}

impl Iterator for StagedPipeline {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        self.lines.recv().ok()
    }
}

/// Run the staged pipeline to completion and collect its lines.
pub fn run_staged(source: Source, capacity: usize) -> Result<Vec<Line>, Error> {
    let mut pipeline = StagedPipeline::spawn(source, capacity)?;
    let lines: Vec<Line> = pipeline.by_ref().collect();
    pipeline.join()?;
    Ok(lines)
}
