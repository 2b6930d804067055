//! The read-eval-print loop.

use std::io::{self, BufRead};

use plisp_eval::{Interpreter, Value};
use plisp_parse::{line_col, parse, ParseError};

use crate::config::ReplConfig;
use crate::print_handler::PrintHandlerImpl;

/// Name used for the input in parse error locations.
const SOURCE_NAME: &str = "<stdin>";

/// Result of one line.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The line evaluated; the value may itself be an `Error`.
    Evaluated(Value),
    /// The line never reached evaluation. The message was already printed.
    Rejected,
}

impl Outcome {
    /// Whether the line failed, either before or during evaluation.
    pub fn is_failure(&self) -> bool {
        match self {
            Outcome::Evaluated(value) => value.is_error(),
            Outcome::Rejected => true,
        }
    }
}

/// An interactive session: one interpreter, one output sink.
pub struct Repl<'out> {
    interpreter: Interpreter,
    config: ReplConfig,
    out: &'out PrintHandlerImpl,
}

impl<'out> Repl<'out> {
    pub fn new(config: ReplConfig, out: &'out PrintHandlerImpl) -> Self {
        Repl {
            interpreter: Interpreter::with_config(config.eval),
            config,
            out,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Print the version banner, unless disabled.
    pub fn banner(&self) {
        if self.config.show_banner {
            self.out
                .println(&format!("plisp Version {}", env!("CARGO_PKG_VERSION")));
            self.out.println("Press Ctrl+C to exit");
            self.out.println("");
        }
    }

    /// Parse, read, evaluate and print one line.
    pub fn eval_line(&mut self, line: &str) -> Outcome {
        let tree = match parse(line) {
            Ok(tree) => tree,
            Err(err) => {
                self.out.println(&render_parse_error(line, &err));
                return Outcome::Rejected;
            }
        };

        if self.config.show_tree {
            self.out.print(&tree.dump());
        }

        match self.interpreter.eval_node(&tree) {
            Ok(value) => {
                self.out.println(&value.to_string());
                Outcome::Evaluated(value)
            }
            Err(err) => {
                tracing::warn!(%err, "read failed");
                self.out.println(&format!("error: {err}"));
                Outcome::Rejected
            }
        }
    }

    /// Prompt for and evaluate lines until `input` is exhausted.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        let mut line = String::new();
        loop {
            self.out.print(&self.config.prompt);
            line.clear();
            if input.read_line(&mut line)? == 0 {
                self.out.println("");
                return Ok(());
            }
            self.eval_line(line.trim_end_matches(['\n', '\r']));
        }
    }
}

/// `<stdin>:<line>:<col>: <message>`
pub fn render_parse_error(source: &str, err: &ParseError) -> String {
    let (line, col) = line_col(source, err.offset());
    format!("{SOURCE_NAME}:{line}:{col}: {err}")
}
