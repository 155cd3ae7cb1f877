//! WhyLang compiler CLI.

use whyc::commands::{explain_error, lex_file, parse_lex_options};

fn main() {
    whyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let options = match parse_lex_options(&args[2..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!("Usage: whyc lex <file.why> [--color=auto|always|never]");
                    std::process::exit(1);
                }
            };
            let Some(path) = options.path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: whyc lex <file.why> [--color=auto|always|never]");
                std::process::exit(1);
            };
            lex_file(&path, options.color);
        }
        "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: whyc explain <code>");
                eprintln!("Example: whyc explain E0001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("whyc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("WhyLang Compiler");
    println!();
    println!("Usage: whyc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>       Print the token stream of a source file");
    println!("  explain <code>   Explain an error code (e.g. E0001)");
    println!("  help             Show this message");
    println!("  version          Show the compiler version");
    println!();
    println!("Options for lex:");
    println!("  --color=<mode>   Diagnostic colors: auto, always, never");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=why_lexer=trace) to enable tracing.");
}
