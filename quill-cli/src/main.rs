//! Quill CLI
//!
//! Tokenizes a markup file or string and prints the tokens and diagnostics.

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use quill_common::warning::clear_warnings;
use quill_lexer::serialize::to_markup;
use quill_lexer::{LexOutput, Lexer, LexerError, summarize};

/// Quill - single-pass, error-tolerant markup tokenizer
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Tokenize a file
    quill ./index.html

    # Tokenize inline markup
    quill --html '<p>Hello &amp; welcome</p>'

    # Dump tokens and diagnostics as JSON
    quill --json ./index.html

    # Fail (exit 1) if the document has any diagnostics
    quill --deny-errors ./index.html
"#)]
struct Cli {
    /// Path to the markup file to tokenize
    #[arg(value_name = "FILE")]
    path: Option<String>,

    /// Tokenize this string instead of a file
    #[arg(long, value_name = "MARKUP")]
    html: Option<String>,

    /// Print tokens and diagnostics as JSON
    #[arg(long)]
    json: bool,

    /// Print the token stream re-serialized as markup
    #[arg(long, conflicts_with = "json")]
    markup: bool,

    /// Panic on the first malformed construct instead of recovering
    #[arg(long)]
    strict: bool,

    /// Bytes of source context shown on each side of a diagnostic
    #[arg(long, value_name = "N", default_value = "10")]
    context: usize,

    /// Exit with status 1 if any diagnostic was recorded
    #[arg(long)]
    deny_errors: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let source = load_source(&cli)?;

    clear_warnings();
    let mut lexer = Lexer::new(&source).with_context_radius(cli.context);
    if cli.strict {
        lexer = lexer.with_strict_mode();
    }
    let output = lexer.tokenize();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if cli.markup {
        println!("{}", to_markup(&output.tokens));
    } else {
        print_tokens(&output);
        print_diagnostics(&output.errors);
    }

    if cli.deny_errors && output.has_errors() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Read the markup named on the command line
fn load_source(cli: &Cli) -> Result<String> {
    if let Some(ref markup) = cli.html {
        Ok(markup.clone())
    } else if let Some(ref path) = cli.path {
        let bytes = fs::read(path).with_context(|| format!("failed to read {path}"))?;
        let source = Lexer::from_bytes(&bytes)
            .with_context(|| format!("{path} is not UTF-8"))?
            .source()
            .to_string();
        Ok(source)
    } else {
        anyhow::bail!("nothing to tokenize: pass a file path or --html")
    }
}

fn print_tokens(output: &LexOutput) {
    println!("{}", "=== Tokens ===".bold());
    for (i, token) in output.tokens.iter().enumerate() {
        println!("{i:3}: {token}");
    }
}

fn print_diagnostics(errors: &[LexerError]) {
    println!();
    if errors.is_empty() {
        println!("{}", "No diagnostics".green());
        return;
    }

    println!("{}", "=== Diagnostics ===".bold());
    for error in errors {
        println!(
            "{} {}:{}: {}",
            format!("error[{}]", error.kind).red().bold(),
            error.position.line,
            error.position.column,
            error.message
        );
        println!("    {} {}", "|".blue(), error.context.escape_debug());
    }

    let summary: Vec<String> = summarize(errors)
        .into_iter()
        .map(|(kind, count)| format!("{kind} x{count}"))
        .collect();
    println!(
        "\n{} diagnostic(s): {}",
        errors.len().red(),
        summary.join(", ")
    );
}
