use std::fs;

use clap::Parser;
use logos::Logos;
use radixcalc::{calculate_binary, calculate_decimal};

/// radixcalc evaluates infix expressions over two's-complement binary
/// integers or decimal floating-point numbers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells radixcalc to look at a file instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    /// Evaluates in the binary (bitwise) domain instead of the decimal one.
    #[arg(short, long)]
    binary: bool,

    contents: String,
}

/// The raw lexical tokens of an expression string.
///
/// The lexer only splits the input; the calculator core classifies the
/// resulting token strings itself.
#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    /// Numeric literals of either domain, such as `101`, `3.14` or `2e-3`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,
    /// Word operators, such as `AND` or `NOR`.
    #[regex(r"[A-Z]+")]
    Word,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

/// Splits a raw expression string into the token sequence the core expects.
fn tokenize(source: &str) -> Result<Vec<String>, String> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        if token.is_ok() {
            tokens.push(lexer.slice().to_string());
        } else {
            return Err(format!("Unexpected input '{}'.", lexer.slice()));
        }
    }

    Ok(tokens)
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let tokens = match tokenize(&expression) {
        Ok(tokens) => tokens,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        },
    };

    let result = if args.binary {
        calculate_binary(&tokens)
    } else {
        calculate_decimal(&tokens)
    };

    match result {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}
