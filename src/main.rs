use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use clap::builder::PossibleValuesParser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing_subscriber::EnvFilter;

use verbdrill::config::Config;
use verbdrill::generator::QuestionGenerator;
use verbdrill::generator::deck::{ALL_DECKS, Deck, DeckPool};
use verbdrill::generator::verb_forms::VerbFormGenerator;
use verbdrill::generator::vocabulary::VocabularyGenerator;
use verbdrill::session::quiz::{QuizSession, SessionQuestion};
use verbdrill::store::file_store::FileStore;
use verbdrill::store::{KeyValueStore, StatsStore};

#[derive(Parser)]
#[command(name = "verbdrill", version, about = "Adaptive irregular verb and vocabulary drills")]
struct Cli {
    #[arg(short, long, help = "Deck to drill", value_parser = PossibleValuesParser::new(Deck::keys()))]
    deck: Option<String>,

    #[arg(short, long, help = "Correct answers needed to finish a session")]
    goal: Option<u32>,

    #[arg(long, help = "Directory holding saved stats")]
    data_dir: Option<PathBuf>,

    #[arg(long, help = "Seed for a reproducible question sequence")]
    seed: Option<u64>,

    #[arg(long, help = "Print mastered counts per deck and exit")]
    mastery: bool,

    #[arg(long, help = "Write the effective settings to the config file")]
    save_config: bool,
}

/// What the terminal shows for one question.
struct Rendered {
    prompt: String,
    options: Vec<String>,
    after_correct: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("failed to load config, using defaults: {e:#}");
        Config::default()
    });
    if let Some(deck) = cli.deck {
        config.deck = deck;
    }
    if let Some(goal) = cli.goal {
        config.session_goal = goal;
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir.to_string_lossy().to_string();
    }
    config.validate();
    if cli.save_config {
        config.save()?;
    }

    let store = StatsStore::new(FileStore::with_base_dir(config.data_dir())?);

    if cli.mastery {
        print_mastery(&store);
        return Ok(());
    }

    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let deck = config.deck();

    match deck.load() {
        DeckPool::Verbs(verbs) => {
            let generator = VerbFormGenerator::new(verbs, rng)?;
            let mut session = QuizSession::new(generator, store, config.session_goal);
            run_quiz(&mut session, deck, |q| Rendered {
                prompt: q.target.infinitive.clone(),
                options: q
                    .options
                    .iter()
                    .map(|o| format!("{} / {}", o.past_simple, o.past_participle))
                    .collect(),
                after_correct: Some(q.target.example.clone()).filter(|e| !e.is_empty()),
            })
        }
        DeckPool::Words(words) => {
            let generator = VocabularyGenerator::new(words, rng)?;
            let mut session = QuizSession::new(generator, store, config.session_goal);
            run_quiz(&mut session, deck, |q| Rendered {
                prompt: format!("\"{}\"", q.target.definition),
                options: q.options.iter().map(|o| o.word.clone()).collect(),
                after_correct: None,
            })
        }
    }
}

fn print_mastery(store: &StatsStore<FileStore>) {
    let stats = store.load();
    println!("Stats in {}", store.backend().base_dir().display());
    for &deck in ALL_DECKS {
        let pool = deck.load();
        println!(
            "{:<24} Mastered: {} / {}",
            deck.title(),
            pool.count_mastered(&stats),
            pool.len()
        );
    }
}

fn run_quiz<G, S, F>(session: &mut QuizSession<G, S>, deck: Deck, render: F) -> Result<()>
where
    G: QuestionGenerator,
    S: KeyValueStore,
    F: Fn(&SessionQuestion<G>) -> Rendered,
{
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("{} (goal: {})", deck.title(), session.goal());
    while !session.is_finished() {
        let rendered = render(session.next_question()?);

        println!();
        println!("{}", rendered.prompt);
        println!("{}", deck.instruction());
        for (i, option) in rendered.options.iter().enumerate() {
            println!("  {}) {option}", i + 1);
        }

        let Some(index) = read_choice(&mut input, rendered.options.len())? else {
            println!("Score: {}/{}", session.score, session.goal());
            return Ok(());
        };

        let outcome = session.answer(index)?;
        if outcome.correct {
            println!("Correct! {}/{}", outcome.score, session.goal());
            if let Some(note) = &rendered.after_correct {
                println!("  {note}");
            }
        } else {
            println!("Incorrect. Answer: {}", rendered.options[outcome.correct_index]);
        }
    }

    let (mastered, total) = session.mastery();
    println!();
    println!("Congratulations! You got {} right.", session.goal());
    println!(
        "Accuracy: {:.0}%  Mastered: {mastered} / {total}",
        session.accuracy()
    );
    Ok(())
}

/// Read a 1-based option number. `None` on `q` or end of input.
fn read_choice(input: &mut impl BufRead, count: usize) -> Result<Option<usize>> {
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match line.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("Enter 1-{count}, or q to quit"),
        }
    }
}
