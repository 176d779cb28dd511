//! CLI example: deal a pool, arrange it into a hand, and score it.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use hilo::{Card, Game, GameOptions, Generator, Hand};

fn main() {
    env_logger::init();

    println!("Hi-lo CLI example (type 'n' for a new game, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let generator = Generator::new(options, seed);

    let mut game = generator.new_game();

    loop {
        print_pool(&game);

        let input = prompt_line("Play order (e.g. 1 5 2 6 3 7 4): ");
        match input.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "n" | "new" => {
                game = generator.new_game();
                continue;
            }
            _ => {}
        }

        let Some(hand) = arrange(&game, &input) else {
            println!("Enter each card number once, separated by spaces.");
            continue;
        };

        println!("Hand ({} cards): {}", hand.len(), format_cards(hand.cards()));
        match hand.evaluate_with(&options) {
            Ok(scores) => {
                let steps: Vec<String> = scores.iter().map(|s| format!("{s}")).collect();
                println!("Scores: {}", steps.join(" -> "));
            }
            Err(err) => println!("Evaluation error: {err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if matches!(io::stdin().read_line(&mut input), Ok(0) | Err(_)) {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

/// Builds a hand from 1-based pool positions.
fn arrange(game: &Game, input: &str) -> Option<Hand> {
    let cards = game.pool().cards();
    let mut used = vec![false; cards.len()];
    let mut hand = Vec::new();

    for token in input.split_whitespace() {
        let index = token.parse::<usize>().ok()?.checked_sub(1)?;
        if *used.get(index)? {
            return None;
        }
        used[index] = true;
        hand.push(cards[index].clone());
    }

    (!hand.is_empty()).then(|| Hand::new(hand))
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::value)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_pool(game: &Game) {
    println!("\nGame {}", game.id());
    for (i, card) in game.pool().cards().iter().enumerate() {
        println!("  {}: {card}", i + 1);
    }
}
