//! E-Card command line.
//!
//! Usage:
//!   ecard play [--rounds 12] [--first-emperor 2]
//!   ecard simulate --games 1000 --seed 42 --first random --second cautious [--json]

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ecard::agents::{self, Agent, RandomAgent, SignatureAgent};
use ecard::cards::Card;
use ecard::core::{GameConfig, GameRng, PlayerId, PlayerMap, Status};
use ecard::games::ecard::{ECard, PlayerView};
use ecard::identity::PlayerKey;
use ecard::lobby::{Lobby, LobbyConfig};
use ecard::store::MemoryStore;

#[derive(Parser, Debug)]
#[command(author, version, about = "Emperor, Citizen, Slave: a two-player card duel")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins if set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Two players share one terminal.
    Play(RulesArgs),
    /// Pit two agents against each other.
    Simulate(SimulateArgs),
}

#[derive(Args, Debug, Clone)]
struct RulesArgs {
    /// Decisive rounds per game.
    #[arg(long, default_value_t = ecard::core::MAX_ROUNDS)]
    rounds: u32,

    /// Rounds before the sides swap.
    #[arg(long, default_value_t = ecard::core::ROUNDS_PER_SET)]
    rounds_per_set: u32,

    /// Seat (1 or 2) holding the Emperor side in the first set.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    first_emperor: u8,
}

impl RulesArgs {
    fn game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_max_rounds(self.rounds)
            .with_rounds_per_set(self.rounds_per_set)
            .with_first_emperor(PlayerId::new(self.first_emperor - 1))
    }
}

#[derive(Args, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    rules: RulesArgs,

    #[arg(short, long, default_value_t = 1000)]
    games: u32,

    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    #[arg(long, value_enum, default_value_t = AgentKind::Random)]
    first: AgentKind,

    #[arg(long, value_enum, default_value_t = AgentKind::Random)]
    second: AgentKind,

    /// Signature probability per attempt for `bluff` agents.
    #[arg(long, default_value_t = 0.25)]
    bluff_rate: f64,

    /// Print the tally as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AgentKind {
    Random,
    Cautious,
    Bold,
    Bluff,
}

impl AgentKind {
    fn build(self, bluff_rate: f64) -> Box<dyn Agent> {
        match self {
            AgentKind::Random => Box::new(RandomAgent),
            AgentKind::Cautious => Box::new(SignatureAgent::cautious()),
            AgentKind::Bold => Box::new(SignatureAgent::bold()),
            AgentKind::Bluff => Box::new(SignatureAgent::new(bluff_rate)),
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init()
        .ok();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Play(rules) => play(&rules),
        Command::Simulate(args) => simulate(&args),
    }
}

fn simulate(args: &SimulateArgs) -> Result<()> {
    let engine = ECard::new(args.rules.game_config()).context("invalid rules")?;
    let first = args.first.build(args.bluff_rate);
    let second = args.second.build(args.bluff_rate);
    let agents: PlayerMap<&dyn Agent> = PlayerMap::new(|player| if player == PlayerId::FIRST { &*first } else { &*second });

    info!(games = args.games, seed = args.seed, first = first.name(), second = second.name(), "simulating");
    let tally = agents::simulate(&engine, agents, args.games, &mut GameRng::new(args.seed))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
        return Ok(());
    }

    println!("{} matches, seed {}", tally.matches, args.seed);
    for (player, agent) in agents.iter() {
        println!(
            "  {player} ({:>8}): {:>6} wins ({:5.1}%), {:>8} points",
            agent.name(),
            tally.wins[player],
            tally.win_rate(player) * 100.0,
            tally.points[player],
        );
    }
    println!("  drawn matches: {}, drawn attempts: {}", tally.draws, tally.drawn_attempts);
    Ok(())
}

/// Hot-seat game over an in-memory lobby, one seat after the other.
fn play(rules: &RulesArgs) -> Result<()> {
    let lobby = Lobby::new(MemoryStore::new(), LobbyConfig::new().with_game(rules.game_config()))
        .context("invalid rules")?;
    let keys = PlayerMap::new(|_| PlayerKey::generate());
    let (id, _) = lobby.create(&keys[PlayerId::FIRST])?;
    lobby.join(&id, &keys[PlayerId::SECOND])?;

    let mut input = io::stdin().lock().lines();
    println!("Session {id}. Type E, C or S to play a card, or q to quit.");

    loop {
        for player in PlayerId::all() {
            let view = lobby.view(&id, &keys[player])?.value;
            if !view.can_play() {
                continue;
            }

            println!();
            println!("{player}: {}", view.headline());
            println!("  hand: {}   score: {} to {}", hand_symbols(&view), view.score, view.opponent_score);

            let Some(card) = read_card(&mut input, &view)? else {
                return Ok(());
            };
            let index = view
                .hand
                .iter()
                .position(|&c| c == card)
                .context("card vanished from hand")?;
            lobby.submit(&id, &keys[player], view.turn(), card, index)?;

            // Wipe the terminal so the next seat cannot see the choice.
            print!("\x1B[2J\x1B[1;1H");
            println!("{player} has chosen. Pass to {}.", player.opponent());
        }

        let view = lobby.view(&id, &keys[PlayerId::FIRST])?.value;
        if let Some(summary) = view.last_round_summary() {
            println!("\n{summary}");
        }

        if let Status::Finished(_) = view.status {
            println!("{}", view.headline());
            match prompt(&mut input, "Play again? [y/N] ")? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => lobby.restart(&id, &keys[PlayerId::FIRST])?,
                _ => return Ok(()),
            }
        }
    }
}

fn hand_symbols(view: &PlayerView) -> String {
    view.hand
        .iter()
        .map(|card| card.symbol().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep asking until the player names a card they hold. `None` on quit or EOF.
fn read_card(
    input: &mut impl Iterator<Item = io::Result<String>>,
    view: &PlayerView,
) -> Result<Option<Card>> {
    loop {
        let Some(line) = prompt(input, "  play> ")? else {
            return Ok(None);
        };
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        match line.parse::<Card>() {
            Ok(card) if view.hand.contains(&card) => return Ok(Some(card)),
            Ok(card) => println!("  You have no {card} left."),
            Err(err) => println!("  {err}"),
        }
    }
}

fn prompt(input: &mut impl Iterator<Item = io::Result<String>>, message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    match input.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
