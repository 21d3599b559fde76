mod synonyms;
mod tagger;
mod translate;

use anyhow::{Context, anyhow};
use cotejo_engine::{Feedback, compare};
use language_utils::{Language, text_cleanup::normalize_for_grading};
use rand::prelude::IndexedRandom;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use synonyms::FileSynonyms;
use tagger::Tagger;
use translate::Translator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "compare" => {
            if args.len() < 4 {
                eprintln!("Error: 'compare' requires an attempt and a reference");
                eprintln!("Usage: cotejo compare <attempt> <reference>");
                return Err(anyhow!("missing arguments for 'compare'"));
            }
            run_compare(&args[2], &args[3]).await
        }
        "practice" => {
            if args.len() < 3 {
                eprintln!("Error: 'practice' requires a sentence file");
                eprintln!("Usage: cotejo practice <sentences-file>");
                return Err(anyhow!("missing arguments for 'practice'"));
            }
            run_practice(Path::new(&args[2])).await
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            Err(anyhow!("unknown command"))
        }
    }
}

fn print_usage() {
    eprintln!("Usage: cotejo <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  compare <attempt> <reference>   Grade an attempt against a known translation");
    eprintln!("  practice <sentences-file>       Translate a random sentence and get graded");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COTEJO_TAGGER_URL           POS-tagging service endpoint (required)");
    eprintln!("  COTEJO_SYNONYMS_FILE        synonym table (default: data/synonyms.json)");
    eprintln!("  GOOGLE_TRANSLATE_API_KEY    translation key (required for 'practice')");
}

/// Grade one attempt against one reference translation and print feedback.
async fn run_compare(attempt: &str, reference: &str) -> anyhow::Result<()> {
    let tagger = Tagger::from_env(Language::Spanish)?;
    let synonyms = FileSynonyms::load(&synonyms_path());

    let attempt_sentence = tagger.tag(&normalize_for_grading(attempt)).await?;
    let reference_sentence = tagger.tag(&normalize_for_grading(reference)).await?;

    let feedback = compare(&attempt_sentence, &reference_sentence, &synonyms);
    print_feedback(&feedback);
    Ok(())
}

/// Pick a random English sentence, translate it, read the learner's attempt
/// from stdin, and print graded feedback.
async fn run_practice(sentences_file: &Path) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(sentences_file).with_context(|| {
        format!("failed to read sentence file {}", sentences_file.display())
    })?;
    let sentences: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let prompt = sentences
        .choose(&mut rand::rng())
        .context("sentence file is empty")?;

    let translator = Translator::from_env(
        Language::English,
        Language::Spanish,
        PathBuf::from("./.cache/translations"),
    )?;
    let reference = translator.translate(prompt).await?;

    println!("ENGLISH SENTENCE TO TRANSLATE: {prompt}");
    print!("YOUR TRANSLATION: ");
    std::io::stdout().flush()?;
    let mut attempt = String::new();
    std::io::stdin().read_line(&mut attempt)?;
    let attempt = attempt.trim();

    let tagger = Tagger::from_env(Language::Spanish)?;
    let synonyms = FileSynonyms::load(&synonyms_path());
    let attempt_sentence = tagger.tag(&normalize_for_grading(attempt)).await?;
    let reference_sentence = tagger.tag(&normalize_for_grading(&reference)).await?;

    let feedback = compare(&attempt_sentence, &reference_sentence, &synonyms);
    print_feedback(&feedback);

    println!();
    println!("YOUR ATTEMPT: {attempt}");
    println!("THE RIGHT ANSWER: {reference}");
    Ok(())
}

fn synonyms_path() -> PathBuf {
    std::env::var("COTEJO_SYNONYMS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/synonyms.json"))
}

fn print_feedback(feedback: &Feedback) {
    for line in &feedback.hints {
        println!("{line}");
    }
    println!();
    println!("STUMPED? Here are the fixes:");
    for line in &feedback.giveaways {
        println!("{line}");
    }
}
