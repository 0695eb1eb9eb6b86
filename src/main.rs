//! Bannerlands -- a territory-control strategy demo.
//!
//! Builds a small westerlands map, pits six bots with mixed strategies
//! against each other, and prints the chosen orders and leaderboard for
//! three rounds. An optional first argument seeds the random strategies.

use std::collections::BTreeMap;
use std::env;

use bannerlands::map::{GameState, Location, LocationType, UnitKind};
use bannerlands::sim::run_round;
use bannerlands::strategy::{Bot, GreedyStrategy, RandomStrategy, Strategy};
use bannerlands::view;

const BOT_IDS: [&str; 6] = [
    "Stark",
    "Lannister",
    "Baratheon",
    "Greyjoy",
    "Tyrell",
    "Martell",
];

/// Builds the five-location demo map with round-robin ownership.
fn setup_demo_game() -> GameState {
    let mut state = GameState::new();

    let locations = [
        ("Banefort", 0.0, 2.0, LocationType::Land),
        ("Riverrun", -1.0, 1.0, LocationType::Land),
        ("Goldentooth", 0.0, 1.0, LocationType::Land),
        ("Lannisport", 1.0, 1.0, LocationType::Land),
        ("Stony Sept", 0.0, 0.0, LocationType::Land),
    ];

    for (i, (name, x, y, location_type)) in locations.into_iter().enumerate() {
        let owner = BOT_IDS[i % BOT_IDS.len()];
        let mut location = Location::new(name, location_type).with_coords(x, y);
        match location_type {
            LocationType::Sea => {
                location.add_units(UnitKind::Boat, 2, Some(owner)).unwrap();
            }
            LocationType::Land => {
                location
                    .add_units(UnitKind::Footman, 2, Some(owner))
                    .unwrap();
                if i % 3 == 0 {
                    location.add_units(UnitKind::Knight, 1, Some(owner)).unwrap();
                }
            }
        }
        state.add_location(location);
    }

    state.connect_locations("Banefort", "Lannisport");
    state.connect_locations("Riverrun", "Stony Sept");
    state.connect_locations("Goldentooth", "Lannisport");
    state.connect_locations("Goldentooth", "Stony Sept");

    state.set_turn_order(BOT_IDS.iter().map(|s| s.to_string()).collect());
    state.active_bots = BOT_IDS.iter().map(|s| s.to_string()).collect();
    for bot_id in BOT_IDS {
        state.init_player_stats(bot_id);
    }
    state
}

fn main() {
    let seed: u64 = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    let mut state = setup_demo_game();
    let mut bots: BTreeMap<String, Bot> = BOT_IDS
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let strategy: Box<dyn Strategy> = if i % 2 == 0 {
                Box::new(RandomStrategy::seeded(seed.wrapping_add(i as u64)))
            } else {
                Box::new(GreedyStrategy)
            };
            (id.to_string(), Bot::new(*id, strategy))
        })
        .collect();

    println!("bannerlands demo (seed {})\n", seed);
    match view::snapshot_json(&state) {
        Ok(json) => println!("initial map snapshot:\n{}\n", json),
        Err(e) => eprintln!("snapshot failed: {}", e),
    }

    for _ in 0..3 {
        println!("=== round {} ===", state.turn);
        run_round(&mut state, &mut bots);

        for bot_id in BOT_IDS {
            let orders = &state.bot_orders[bot_id];
            println!("{} placed {} orders:", bot_id, orders.len());
            for order in orders {
                println!("  {}", order);
            }
        }
        println!();
    }

    println!("leaderboard:");
    for (rank, entry) in state.leaderboard().iter().enumerate() {
        println!(
            "{}. {:12} score {:3} | territories {:2} | units {:2}",
            rank + 1,
            entry.bot_id,
            entry.score,
            entry.territories,
            entry.total_units
        );
    }
}
