use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use services::{OpenTriviaClient, SessionService};
use trivia_core::{
    decode_entities, score, AnswerSheet, Difficulty, Question, QuestionKind, ANY_CATEGORY,
};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidAmount { raw: String },
    InvalidDifficulty { raw: String },
    InvalidType { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidAmount { raw } => write!(f, "invalid --amount value: {raw}"),
            ArgsError::InvalidDifficulty { raw } => {
                write!(f, "invalid --difficulty value: {raw} (easy|medium|hard)")
            }
            ArgsError::InvalidType { raw } => {
                write!(f, "invalid --type value: {raw} (multiple|boolean|any)")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    amount: u8,
    category: String,
    difficulty: Difficulty,
    kind: Option<QuestionKind>,
    list_categories: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --amount <1-50>                 Number of questions (default: 10)");
    eprintln!("  --category <name>               Category display name (default: Any Category)");
    eprintln!("  --difficulty <easy|medium|hard> Question difficulty (default: medium)");
    eprintln!("  --type <multiple|boolean|any>   Question type (default: any)");
    eprintln!("  --list-categories               Print the category names and exit");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            amount: 10,
            category: ANY_CATEGORY.to_string(),
            difficulty: Difficulty::Medium,
            kind: None,
            list_categories: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--amount" => {
                    let value = require_value(args, "--amount")?;
                    parsed.amount = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidAmount { raw: value })?;
                }
                "--category" => {
                    parsed.category = require_value(args, "--category")?;
                }
                "--difficulty" => {
                    let value = require_value(args, "--difficulty")?;
                    parsed.difficulty = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidDifficulty { raw: value })?;
                }
                "--type" => {
                    let value = require_value(args, "--type")?;
                    parsed.kind = if value.eq_ignore_ascii_case("any") {
                        None
                    } else {
                        Some(
                            value
                                .parse()
                                .map_err(|_| ArgsError::InvalidType { raw: value })?,
                        )
                    };
                }
                "--list-categories" => parsed.list_categories = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => return Err(ArgsError::UnknownArg(other.to_string())),
            }
        }

        Ok(parsed)
    }
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let mut raw = std::env::args().skip(1);
    let args = match Args::parse(&mut raw) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    if let Err(err) = run(args).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let service = SessionService::new(Arc::new(OpenTriviaClient::new()));

    if let Err(err) = service.load_categories().await {
        log::warn!("continuing with the default category list: {err}");
    }

    if args.list_categories {
        for name in service.snapshot().categories.names() {
            println!("{name}");
        }
        return Ok(());
    }

    service
        .start_session(args.amount, &args.category, args.difficulty, args.kind)
        .await?;

    let questions = service.snapshot().questions;
    if questions.is_empty() {
        println!("The service returned no questions for these filters.");
        return Ok(());
    }

    let sheet = ask_all(&questions)?;
    report(&questions, &sheet);
    Ok(())
}

fn ask_all(questions: &[Question]) -> Result<AnswerSheet, io::Error> {
    let mut sheet = AnswerSheet::new();
    let stdin = io::stdin();

    for (number, question) in questions.iter().enumerate() {
        println!();
        println!("{}. {}", number + 1, decode_entities(&question.prompt));
        for (index, answer) in question.answers().iter().enumerate() {
            println!("   {}. {}", letter(index), decode_entities(answer));
        }

        if let Some(choice) = read_choice(&stdin, question.answers())? {
            sheet.select(question.prompt.clone(), choice);
        }
    }

    Ok(sheet)
}

/// Prompt until the user picks a listed option. An empty line skips the
/// question; end of input stops asking.
fn read_choice(stdin: &io::Stdin, answers: &[String]) -> Result<Option<String>, io::Error> {
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let bytes = trimmed.as_bytes();
        if bytes.len() == 1 && bytes[0].is_ascii_alphabetic() {
            let index = usize::from(bytes[0].to_ascii_uppercase() - b'A');
            if let Some(answer) = answers.get(index) {
                return Ok(Some(answer.clone()));
            }
        }

        eprintln!("pick one of A-{}", letter(answers.len().saturating_sub(1)));
    }
}

fn report(questions: &[Question], sheet: &AnswerSheet) {
    let correct = score(questions, sheet);
    println!();
    println!("Final score: {correct}/{}", questions.len());

    for question in questions {
        let chosen = sheet.chosen(&question.prompt);
        if chosen != Some(question.correct_answer.as_str()) {
            println!();
            println!("  {}", decode_entities(&question.prompt));
            match chosen {
                Some(answer) => println!("    your answer:    {}", decode_entities(answer)),
                None => println!("    your answer:    (none)"),
            }
            println!(
                "    correct answer: {}",
                decode_entities(&question.correct_answer)
            );
        }
    }
}

fn letter(index: usize) -> char {
    char::from(b'A' + u8::try_from(index.min(25)).unwrap_or(25))
}
