//! plisp interpreter CLI.

use plispc::{init_tracing, parse_args, Mode, PrintHandlerImpl, Repl, USAGE};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (mode, config) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    let out = PrintHandlerImpl::stdout();
    let mut repl = Repl::new(config, &out);

    match mode {
        Mode::Help => println!("{USAGE}"),
        Mode::Eval(source) => {
            if repl.eval_line(&source).is_failure() {
                std::process::exit(1);
            }
        }
        Mode::Repl => {
            repl.banner();
            if let Err(err) = repl.run(std::io::stdin().lock()) {
                eprintln!("error: failed to read input: {err}");
                std::process::exit(1);
            }
        }
    }
}
