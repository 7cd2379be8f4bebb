use clap::Parser;
use log::info;
use prompter::PromptError;
use prompter::utils::{StdTerminal, Terminal, TerminalOptions};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::error::Error;

#[derive(Debug, Parser)]
#[command(about = "A tiny stable game driven by validated console prompts", long_about = None)]
struct Args {
    /// Log filter for diagnostics written to stderr (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Prefix for every prompt and message
    #[arg(long, default_value = " ")]
    indent: String,

    /// Digits shown for decimal limits in error messages
    #[arg(long, default_value_t = 2)]
    decimals: usize,

    /// Seed for the hidden number, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    println!("------------------------------------------------------------");
    println!("                     THE  STABLE  YARD                      ");
    println!("------------------------------------------------------------");

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let mut terminal = Terminal::stdio().with_options(TerminalOptions {
        indent: args.indent,
        decimal_places: args.decimals,
    });

    match play(&mut terminal, &mut rng) {
        Ok(()) => {}
        Err(PromptError::InputExhausted) => {
            println!();
            println!("No more input, see you next time!");
        }
        Err(e) => return Err(e.into()),
    }

    terminal.close()?;
    Ok(())
}

fn play(terminal: &mut StdTerminal, rng: &mut SmallRng) -> Result<(), PromptError> {
    let rider = terminal.request_string("What is your name, rider?")?;
    let horse = terminal.request_choice_name("Choose your horse", &["Blitz", "Luna", "Comet"])?;
    info!("{} picked {}", rider, horse);

    let difficulty = terminal.request_choice("Difficulty", &["Easy", "Hard"])?;
    let max_carrots = if difficulty == 0 { 20 } else { 100 };

    let hidden = rng.random_range(1..=max_carrots);
    info!("{} carrots hidden", hidden);

    let mut attempts = 0;
    loop {
        attempts += 1;
        let guess = terminal.request_int(
            &format!("How many carrots did {} hide? (1-{})", horse, max_carrots),
            1..=max_carrots,
        )?;

        if guess < hidden {
            println!(" More than that!");
        } else if guess > hidden {
            println!(" Fewer than that!");
        } else {
            println!(" Right, {} carrots! You needed {} attempts.", hidden, attempts);
            break;
        }
    }

    let hay = terminal.request_double("How many kg of hay for the evening?", 0.5..=10.0)?;
    println!(" {} gets {:.1} kg of hay.", horse, hay);

    terminal.request_choice("Where do you ride next?", &["Arena"])?;
    terminal.request_user_press_return()?;

    println!(" Well done, {}! {} is happy.", rider, horse);
    Ok(())
}
