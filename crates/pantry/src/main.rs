//! Terminal front-end for Fridge Friend

use clap::Parser;
use pantry::{view, HttpRecipeClient, Key, Session, View};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "pantry",
    about = "Turn your ingredients into delicious recipes",
    version,
    author
)]
struct Args {
    /// Recipe API base URL
    #[arg(
        short,
        long,
        env = "PANTRY_SERVER_URL",
        default_value = "http://localhost:3000"
    )]
    server: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

const HELP: &str = "\
Type ingredients and press Enter (comma-separated works too).
  :suggest <text>   show suggestions for <text>
  :pick <n>         add suggestion number <n>
  :rm <ingredient>  remove an ingredient
  :clear            remove everything
  :go               generate a recipe
  :help             show this help
  :quit             exit";

enum Command<'a> {
    Add(&'a str),
    Suggest(&'a str),
    Pick(Option<usize>),
    Remove(&'a str),
    Clear,
    Generate,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Add(line);
    };
    let (name, arg) = rest.split_once(' ').unwrap_or((rest, ""));
    let arg = arg.trim();
    match name {
        "suggest" => Command::Suggest(arg),
        "pick" => Command::Pick(arg.parse::<usize>().ok().and_then(|n| n.checked_sub(1))),
        "rm" => Command::Remove(arg),
        "clear" => Command::Clear,
        "go" => Command::Generate,
        "help" => Command::Help,
        "quit" | "q" => Command::Quit,
        other => Command::Unknown(other),
    }
}

fn print_view(view: &View) {
    if !view.suggestions.is_empty() {
        println!("Suggestions:");
        for (i, item) in view.suggestions.iter().enumerate() {
            println!("  {}. {}", i + 1, item.text);
        }
    }
    if let Some(heading) = &view.heading {
        let chips: Vec<&str> = view.chips.iter().map(|c| c.ingredient.as_str()).collect();
        println!("{heading}: {}", chips.join(", "));
    }
    if let Some(error) = &view.error {
        println!("! {error}");
    }
    if let Some(recipe) = &view.recipe {
        println!("\n{}", view::render_recipe(recipe));
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let client = HttpRecipeClient::new(&args.server);
    info!(endpoint = client.endpoint(), "Using recipe API");
    let mut session = Session::new(client);

    println!("{}\n{}\n", view::TITLE, view::TAGLINE);
    println!("{}\n{HELP}\n", view::PROMPT);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end();
        match parse_command(line) {
            Command::Add(text) => {
                session.type_text(text);
                session.press(Key::Enter);
            }
            Command::Suggest(text) => session.type_text(text),
            Command::Pick(Some(index)) => session.choose_suggestion(index),
            Command::Pick(None) => println!("usage: :pick <n>"),
            Command::Remove(ingredient) => {
                if !session.remove_ingredient(ingredient) {
                    println!("{ingredient} is not in your list");
                }
            }
            Command::Clear => session.clear_all(),
            Command::Generate => {
                if !session.ingredients().is_empty() {
                    println!("{}", view::LOADING_MESSAGE);
                }
                session.generate().await;
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
            Command::Unknown(name) => {
                println!("unknown command :{name} (try :help)");
                continue;
            }
        }
        print_view(&session.view());
    }

    Ok(())
}
