use std::fs;
use std::io::{self, Read};

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use verdict::present::format_similarity;
use verdict::{CHECK_ENDPOINT, CheckOutcome, CheckRequest, CheckResponse, LangHint, TermEntry};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("no text provided; pass TEXT, --file PATH, or --file - for stdin")]
    EmptyText,
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model is still loading; try again shortly")]
    NotReady,
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error(transparent)]
    Response(#[from] verdict::ResponseError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "newscheck", about = "Fake-news check client")]
struct Cli {
    #[arg(long, env = "NEWSCHECK_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the server is up.
    Ping,
    /// Classify one article.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Article text.
    #[arg(conflicts_with = "file")]
    text: Option<String>,

    #[arg(long, help = "Input file path, or - for stdin")]
    file: Option<String>,

    #[arg(long, help = "Publishing domain, e.g. bbc.com")]
    source: Option<String>,

    #[arg(long, default_value = "auto", value_parser = parse_lang)]
    lang: LangHint,

    #[arg(long, default_value_t = false, help = "Print the raw JSON response")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let base_url = cli.base_url.trim_end_matches('/').to_owned();

    match cli.command {
        Command::Ping => run_ping(&base_url).await,
        Command::Check(args) => run_check(&base_url, args).await,
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let response = reqwest::get(format!("{base_url}/healthz")).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

async fn run_check(base_url: &str, args: CheckArgs) -> Result<(), CliError> {
    let text = resolve_text(args.text.as_deref(), args.file.as_deref(), io::stdin())?;
    let request = build_request(&text, args.source.as_deref(), args.lang)?;

    let response = reqwest::Client::new()
        .post(format!("{base_url}{CHECK_ENDPOINT}"))
        .json(&request)
        .send()
        .await?;
    let status = response.status().as_u16();
    let body = response.text().await?;

    match verdict::interpret_response(status, &body)? {
        CheckOutcome::NotReady => Err(CliError::NotReady),
        CheckOutcome::Rejected { status, message } => Err(CliError::ServerError { status, message }),
        CheckOutcome::Verdict(result) => {
            if args.json {
                print_json(&serde_json::from_str::<Value>(&body)?)
            } else {
                print!("{}", format_report(&result));
                Ok(())
            }
        }
    }
}

fn parse_lang(raw: &str) -> Result<LangHint, String> {
    LangHint::parse(raw).ok_or_else(|| format!("unknown language `{raw}` (expected auto, ar, or en)"))
}

/// Pick the article text from the positional argument or `--file`.
fn resolve_text(text: Option<&str>, file: Option<&str>, mut stdin: impl Read) -> Result<String, CliError> {
    match (text, file) {
        (Some(text), _) => Ok(text.to_owned()),
        (None, Some("-")) => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            Ok(buf)
        }
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => Err(CliError::EmptyText),
    }
}

fn build_request(text: &str, source: Option<&str>, lang: LangHint) -> Result<CheckRequest, CliError> {
    CheckRequest::from_input(text, source.unwrap_or_default(), lang).ok_or(CliError::EmptyText)
}

/// Plain-text rendering of a result. Evidence titles are printed raw since
/// nothing here is markup.
fn format_report(result: &CheckResponse) -> String {
    let view = verdict::render_result(result);
    let mut out = String::new();
    out.push_str(&format!("{}\n", view.label_text()));
    out.push_str(&format!("confidence:   {}\n", view.confidence));
    out.push_str(&format!("p_fake:       {}\n", view.p_fake));
    out.push_str(&format!("source score: {}\n", view.source_score));

    out.push_str("evidence:\n");
    if result.evidence.is_empty() {
        out.push_str(&format!("  {}\n", verdict::present::NO_EVIDENCE_TEXT));
    }
    for item in &result.evidence {
        out.push_str(&format!("  [{}] {}\n", format_similarity(item.similarity), item.title));
    }

    out.push_str("terms:\n");
    for entry in &view.terms {
        match entry {
            TermEntry::Term { term, weight } => out.push_str(&format!("  {term} ({weight})\n")),
            TermEntry::Placeholder => out.push_str(&format!("  {}\n", verdict::present::NO_TERMS_TEXT)),
        }
    }
    out
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
