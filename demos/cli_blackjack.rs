//! CLI blackjack shell.
//!
//! Run with `RUST_LOG=blackjack_engine=debug` to see engine events.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_engine::{BetChange, Card, Game, GameOptions, GameState, Outcome, RoundResult, Suit};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Blackjack CLI (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = match Game::new(GameOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Invalid table options: {err}");
            return;
        }
    };

    loop {
        println!(
            "\nBalance: {:.1} | Bet: {:.1} (limits {:.1}-{:.1})",
            game.balance(),
            game.bet(),
            game.min_bet(),
            game.max_bet()
        );
        println!("[p]lay  [+] raise  [-] lower  [b <amount>] set bet  [r]efresh balance  [q]uit");

        let input = prompt_line("> ");
        match input.as_str() {
            "p" | "play" => play_round(&mut game),
            "+" => {
                let change = game.increase_bet();
                report_bet_change(&game, change);
            }
            "-" => {
                let change = game.decrease_bet();
                report_bet_change(&game, change);
            }
            "r" | "refresh" => {
                game.refresh_balance();
            }
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            other => {
                if let Some(amount) = other.strip_prefix('b') {
                    if let Err(err) = game.set_bet_from_input(amount) {
                        println!(
                            "{err}: enter a bet from {:.1} to {:.1}",
                            game.min_bet(),
                            game.max_bet()
                        );
                    }
                } else {
                    println!("Unknown command.");
                }
            }
        }
    }
}

fn report_bet_change(game: &Game, change: BetChange) {
    if let BetChange::LimitReached(limit) = change {
        if limit >= game.max_bet() {
            println!("Max bet = {limit:.1}");
        } else {
            println!("Min bet = {limit:.1}");
        }
    }
}

fn play_round(game: &mut Game) {
    if let Err(err) = game.start() {
        println!("Cannot start: {err}");
        return;
    }

    while game.state() == GameState::PlayerTurn {
        print_table(game);

        let action = prompt_line("[h]it or [s]tand: ");
        match action.as_str() {
            "h" | "hit" => {
                if let Err(err) = game.hit() {
                    println!("Action error: {err}");
                }
            }
            "s" | "stand" => {
                if let Err(err) = game.stand() {
                    println!("Action error: {err}");
                }
            }
            _ => println!("Unknown action."),
        }
    }

    print_table(game);
    if let Ok(result) = game.finish_round() {
        print_result(&result);
    }
}

fn print_result(result: &RoundResult) {
    if result.player_bust {
        println!("Bust with {}. You lose.", result.player_score);
        return;
    }

    match result.outcome {
        Outcome::PlayerWin if result.player_blackjack => println!("Blackjack! You win."),
        Outcome::PlayerWin => println!("You win."),
        Outcome::DealerWin => println!("You lose."),
        Outcome::Push => println!("Push."),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    println!(
        "\nDealer: {} (value {})",
        format_cards(game.dealer_cards()),
        game.dealer_score()
    );
    println!(
        "Player: {} (value {})\n",
        format_cards(game.player_cards()),
        game.player_score()
    );
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }

    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    if !card.is_face_up() {
        return "??".to_string();
    }

    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
