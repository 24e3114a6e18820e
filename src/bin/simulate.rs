//! Simulated tournament: registers a pool of players, plays floor(log2 n) Swiss rounds
//! with random winners and prints the standings after each round.
//! Run with: cargo run --bin simulate
//! Configure with env: TOURNAMENT_PLAYERS (default 16), TOURNAMENT_DB, TOURNAMENT_OUTPUT (table|csv).

use rand::seq::SliceRandom;
use std::error::Error;
use std::process::ExitCode;
use swiss_tournament::{
    clear_matches, clear_players, format_champions, player_standings, recommended_rounds,
    register_player, report_match, swiss_pairings, top_players, write_standings, Config,
    OutputFormat, TournamentStore, CHAMPION_COUNT,
};

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let mut store = match config.open_store() {
        Ok(store) => store,
        Err(e) => {
            log::error!("Could not open tournament store: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&mut store, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Simulation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run<S: TournamentStore>(store: &mut S, config: &Config) -> Result<(), Box<dyn Error>> {
    clear_matches(store)?;
    clear_players(store)?;

    for i in 0..config.players {
        register_player(store, &format!("player{}", i + 1))?;
    }

    println!("Standings before tournament");
    show_standings(&*store, config.output)?;

    let mut rng = rand::thread_rng();
    let rounds = recommended_rounds(config.players);
    log::info!("Playing {} round(s) with {} players", rounds, config.players);
    for round in 1..=rounds {
        for pairing in swiss_pairings(&*store)? {
            let players = [pairing.id1, pairing.id2];
            let winner = *players.choose(&mut rng).unwrap_or(&pairing.id1);
            let loser = if winner == pairing.id1 { pairing.id2 } else { pairing.id1 };
            report_match(store, winner, loser)?;
        }
        println!("Standings after {} round(s)", round);
        show_standings(&*store, config.output)?;
    }

    println!("Champions");
    print!("{}", format_champions(&top_players(&*store, CHAMPION_COUNT)?));
    Ok(())
}

fn show_standings<S: TournamentStore>(store: &S, output: OutputFormat) -> Result<(), Box<dyn Error>> {
    let standings = player_standings(store)?;
    write_standings(&standings, output, std::io::stdout().lock())?;
    Ok(())
}
