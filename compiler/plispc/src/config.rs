//! Command-line configuration.

use plisp_eval::EvalConfig;

pub const DEFAULT_PROMPT: &str = "plisp> ";

pub const USAGE: &str = "\
Usage: plisp [options]

Options:
  -e <expr>, --eval=<expr>  Evaluate <expr>, print the result and exit
  --max-depth=<n>           Maximum evaluation nesting depth (default: 10000)
  --prompt=<text>           Prompt shown before each line (default: 'plisp> ')
  --quiet                   Do not print the banner
  --tree                    Print the parse tree before each result
  -h, --help                Show this message";

/// Settings for an interactive session or a single `-e` evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    pub show_banner: bool,
    /// Print `ParseNode::dump()` of every line before its result.
    pub show_tree: bool,
    pub eval: EvalConfig,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            show_banner: true,
            show_tree: false,
            eval: EvalConfig::default(),
        }
    }
}

/// What the binary should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Read lines from stdin until end of input.
    Repl,
    /// Evaluate one program and exit.
    Eval(String),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("option '{0}' requires a value")]
    MissingValue(String),
    #[error("invalid value '{value}' for '{option}': expected a positive integer")]
    InvalidDepth { option: String, value: String },
}

/// Parse arguments (without the program name).
///
/// A later `-e` replaces an earlier one; `--help` wins over everything.
pub fn parse_args(args: &[String]) -> Result<(Mode, ReplConfig), ArgError> {
    let mut config = ReplConfig::default();
    let mut mode = Mode::Repl;
    let mut help = false;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "-e" {
            // -e takes the next argument, which may itself start with '-'
            let Some(source) = args.get(i + 1) else {
                return Err(ArgError::MissingValue(arg.to_string()));
            };
            mode = Mode::Eval(source.clone());
            i += 2;
            continue;
        }

        if let Some(source) = arg.strip_prefix("--eval=") {
            mode = Mode::Eval(source.to_string());
        } else if let Some(value) = arg.strip_prefix("--max-depth=") {
            config.eval.max_depth = parse_depth("--max-depth", value)?;
        } else if let Some(prompt) = arg.strip_prefix("--prompt=") {
            config.prompt = prompt.to_string();
        } else {
            match arg {
                "--quiet" | "-q" => config.show_banner = false,
                "--tree" => config.show_tree = true,
                "--help" | "-h" => help = true,
                "--eval" | "--max-depth" | "--prompt" => {
                    return Err(ArgError::MissingValue(arg.to_string()));
                }
                _ => return Err(ArgError::UnknownOption(arg.to_string())),
            }
        }
        i += 1;
    }

    if help {
        mode = Mode::Help;
    }
    Ok((mode, config))
}

fn parse_depth(option: &str, value: &str) -> Result<usize, ArgError> {
    match value.parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(ArgError::InvalidDepth {
            option: option.to_string(),
            value: value.to_string(),
        }),
    }
}
