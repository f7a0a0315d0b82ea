//! Applier that pipes the document into an external program.

use std::io::{self, ErrorKind, Write};
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::thread;

use tracing::{debug, info};

use super::{Applier, ConsolidatedDocument};
use crate::{SeedError, SeedResult};

/// Runs `program args...`, writes the document to its stdin and waits.
///
/// A non-zero exit becomes [`SeedError::ApplierFailure`] carrying the captured
/// stdout followed by stderr.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandApplier {
    program: String,
    args: Vec<String>,
}

impl CommandApplier {
    /// Create an applier for `program` with no arguments.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append arguments passed to the program.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Program that receives the document.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn io_error(&self, source: std::io::Error) -> Arc<SeedError> {
        Arc::new(SeedError::ApplierIo {
            program: self.program.clone(),
            source,
        })
    }
}

impl Applier for CommandApplier {
    fn apply(&self, document: &ConsolidatedDocument) -> SeedResult<()> {
        debug!(program = %self.program, seed = %document.seed(), "starting applier");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.io_error(e))?;

        // Stdin is written while stdout and stderr are drained.
        let input = document.as_str().as_bytes();
        let stdin = child.stdin.take();
        let (waited, written) = thread::scope(|scope| {
            let writer = stdin.map(|mut pipe| scope.spawn(move || pipe.write_all(input)));
            let waited = child.wait_with_output();
            let written = writer.map_or(Ok(()), |handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")))
            });
            (waited, written)
        });

        let output = waited.map_err(|e| self.io_error(e))?;
        // The program may exit before reading its input; its status decides.
        if let Err(err) = written
            && err.kind() != ErrorKind::BrokenPipe
        {
            return Err(self.io_error(err));
        }
        if output.status.success() {
            info!(program = %self.program, seed = %document.seed(), "applied seed");
            return Ok(());
        }

        let status = output.status.code().unwrap_or(-1);
        let message = format!(
            "{}{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        Err(Arc::new(SeedError::ApplierFailure {
            seed: document.seed().clone(),
            status,
            message,
        }))
    }
}
