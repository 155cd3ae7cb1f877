//! The `explain` command: display documentation for an error code.

use why_diagnostic::ErrorCode;

/// Print the explanation for `code_str`, or exit with status 1 if unknown.
pub fn explain_error(code_str: &str) {
    let Some(code) = ErrorCode::parse(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit, e.g. E0001.");
        std::process::exit(1);
    };

    println!("{code}");
    println!();
    println!("{}", code.explanation());
}
