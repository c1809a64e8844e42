use std::io::{BufRead, Write};
use rand::thread_rng;
use fake_artist_rs::{CsvVocabulary, FakeArtist, GameError, Players};

// Pass player names as arguments, or get a default three-player game.
fn player_config() -> Players {
    let names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        Players::Count(3)
    } else {
        Players::Named(names)
    }
}

fn run() -> Result<(), GameError> {
    let vocabulary = CsvVocabulary::from_path("data/words.csv")?;
    let mut game = FakeArtist::new(player_config(), vocabulary)?;
    let mut rng = thread_rng();

    game.deal_new_cards(&mut rng)?;

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Cards are dealt. Pass the device around; press enter to advance.");

    // one full pass: announce + reveal for every player
    for _ in 0..game.players().len() * 2 {
        let _ = lines.next();
        println!("{:?}", game.next_cycle_item()?);
        let _ = std::io::stdout().flush();
    }

    println!("\nEveryone has seen their card. Start drawing!");
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
