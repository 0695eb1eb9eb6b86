//! Legal-order generation.
//!
//! Enumerates every rule-legal order for every location a bot controls,
//! keyed by location name. Exactly one order per location is meant to be
//! chosen downstream; the generator only partitions candidates and never
//! enforces that cardinality.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::map::{GameState, Location, Order};

/// Generates all legal orders for the given bot, keyed by origin location.
///
/// Each controlled location holding at least one unit contributes one list:
/// DEFEND first, then one MARCH or SUPPORT per adjacent location in
/// lexicographic order. Locations without units are excluded entirely, so a
/// bot with nothing to order yields an empty mapping. Generation never
/// fails.
pub fn legal_orders(state: &GameState, bot_id: &str) -> BTreeMap<String, Vec<Order>> {
    let mut by_location = BTreeMap::new();

    for location in state.bot_locations(bot_id) {
        if !location.has_units() {
            continue;
        }
        let orders = orders_for_location(state, bot_id, location);
        if !orders.is_empty() {
            by_location.insert(location.name.clone(), orders);
        }
    }

    by_location
}

/// Enumerates the candidate orders for one controlled location.
///
/// DEFEND is always legal. Each neighbor gets exactly one of MARCH (owner
/// differs from the bot, including unowned ground) or SUPPORT (owner is the
/// bot), never both.
pub fn orders_for_location(state: &GameState, bot_id: &str, location: &Location) -> Vec<Order> {
    let mut orders = Vec::new();

    orders.push(Order::defend(bot_id, &location.name));

    for neighbor in state.adjacent_locations(&location.name) {
        if neighbor.owner.as_deref() == Some(bot_id) {
            orders.push(Order::support(bot_id, &location.name, &neighbor.name));
        } else {
            orders.push(Order::march(bot_id, &location.name, &neighbor.name));
        }
    }

    orders
}

/// Checks whether an order is legal for the bot by recomputing the full
/// legal set and testing membership by structural equality.
pub fn is_legal_order(state: &GameState, bot_id: &str, order: &Order) -> bool {
    let by_location = legal_orders(state, bot_id);
    match by_location.get(&order.location) {
        Some(candidates) => candidates.contains(order),
        None => false,
    }
}

/// Generates legal orders for every active bot in parallel.
///
/// Generation is read-only against the state, so the per-bot fan-out is
/// safe; any mutation stays behind the single-writer turn runner.
pub fn legal_orders_all(state: &GameState) -> BTreeMap<String, BTreeMap<String, Vec<Order>>> {
    state
        .active_bots
        .par_iter()
        .map(|bot_id| (bot_id.clone(), legal_orders(state, bot_id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Location, LocationType, OrderType, UnitKind};

    fn location(name: &str, owner: Option<&str>, footmen: u32) -> Location {
        let mut loc = Location::new(name, LocationType::Land);
        if footmen > 0 {
            loc.add_units(UnitKind::Footman, footmen, owner).unwrap();
        } else if let Some(owner) = owner {
            loc.set_owner(owner).unwrap();
        }
        loc
    }

    /// Riverrun (Stark, 2 units) adjacent to Stony Sept (Lannister),
    /// Winterfell (Stark), and The Twins (unowned).
    fn crossroads_state() -> GameState {
        let mut state = GameState::new();
        state.add_location(location("Riverrun", Some("Stark"), 2));
        state.add_location(location("Stony Sept", Some("Lannister"), 1));
        state.add_location(location("Winterfell", Some("Stark"), 1));
        state.add_location(location("The Twins", None, 0));
        state.connect_locations("Riverrun", "Stony Sept");
        state.connect_locations("Riverrun", "Winterfell");
        state.connect_locations("Riverrun", "The Twins");
        state
    }

    #[test]
    fn defend_always_first() {
        let state = crossroads_state();
        let by_location = legal_orders(&state, "Stark");
        let orders = &by_location["Riverrun"];
        assert_eq!(orders[0], Order::defend("Stark", "Riverrun"));
    }

    #[test]
    fn neighbors_partition_into_march_and_support() {
        let state = crossroads_state();
        let by_location = legal_orders(&state, "Stark");
        let orders = &by_location["Riverrun"];

        // DEFEND + one order per neighbor.
        assert_eq!(orders.len(), 4);
        assert!(orders.contains(&Order::march("Stark", "Riverrun", "Stony Sept")));
        assert!(orders.contains(&Order::support("Stark", "Riverrun", "Winterfell")));
        // Unowned ground is marchable, never supportable.
        assert!(orders.contains(&Order::march("Stark", "Riverrun", "The Twins")));
        assert!(!orders.contains(&Order::support("Stark", "Riverrun", "The Twins")));
    }

    #[test]
    fn exactly_one_order_per_neighbor() {
        let state = crossroads_state();
        let by_location = legal_orders(&state, "Stark");
        let orders = &by_location["Riverrun"];

        for neighbor in ["Stony Sept", "Winterfell", "The Twins"] {
            let count = orders
                .iter()
                .filter(|o| o.target.as_deref() == Some(neighbor))
                .count();
            assert_eq!(count, 1, "expected one order targeting {}", neighbor);
        }
    }

    #[test]
    fn neighbors_enumerated_lexicographically() {
        let state = crossroads_state();
        let by_location = legal_orders(&state, "Stark");
        let targets: Vec<&str> = by_location["Riverrun"]
            .iter()
            .filter_map(|o| o.target.as_deref())
            .collect();
        assert_eq!(targets, vec!["Stony Sept", "The Twins", "Winterfell"]);
    }

    #[test]
    fn empty_location_excluded() {
        let mut state = crossroads_state();
        // Winterfell is Stark's but will be emptied.
        state
            .locations
            .get_mut("Winterfell")
            .unwrap()
            .remove_units(UnitKind::Footman, 1);

        let by_location = legal_orders(&state, "Stark");
        assert!(by_location.contains_key("Riverrun"));
        assert!(!by_location.contains_key("Winterfell"));
    }

    #[test]
    fn bot_with_no_locations_yields_empty_mapping() {
        let state = crossroads_state();
        assert!(legal_orders(&state, "Baratheon").is_empty());
    }

    #[test]
    fn fully_encircled_by_allies_yields_no_march() {
        let mut state = GameState::new();
        state.add_location(location("Winterfell", Some("Stark"), 1));
        state.add_location(location("Karhold", Some("Stark"), 1));
        state.add_location(location("Moat Cailin", Some("Stark"), 1));
        state.connect_locations("Winterfell", "Karhold");
        state.connect_locations("Winterfell", "Moat Cailin");

        let by_location = legal_orders(&state, "Stark");
        let orders = &by_location["Winterfell"];
        assert!(orders
            .iter()
            .all(|o| o.order_type != OrderType::March));
        assert_eq!(
            orders
                .iter()
                .filter(|o| o.order_type == OrderType::Support)
                .count(),
            2
        );
    }

    #[test]
    fn isolated_location_defends_only() {
        let mut state = GameState::new();
        state.add_location(location("Dragonstone", Some("Baratheon"), 1));

        let by_location = legal_orders(&state, "Baratheon");
        assert_eq!(
            by_location["Dragonstone"],
            vec![Order::defend("Baratheon", "Dragonstone")]
        );
    }

    #[test]
    fn is_legal_order_accepts_generated_orders() {
        let state = crossroads_state();
        for orders in legal_orders(&state, "Stark").values() {
            for order in orders {
                assert!(is_legal_order(&state, "Stark", order));
            }
        }
    }

    #[test]
    fn is_legal_order_rejects_foreign_and_fabricated_orders() {
        let state = crossroads_state();

        // Ordering from a location the bot does not control.
        let foreign = Order::defend("Stark", "Stony Sept");
        assert!(!is_legal_order(&state, "Stark", &foreign));

        // Supporting a hostile neighbor.
        let bad_support = Order::support("Stark", "Riverrun", "Stony Sept");
        assert!(!is_legal_order(&state, "Stark", &bad_support));

        // Marching to a non-adjacent location.
        let long_march = Order::march("Stark", "Winterfell", "Stony Sept");
        assert!(!is_legal_order(&state, "Stark", &long_march));
    }

    #[test]
    fn legal_orders_all_covers_active_bots() {
        let mut state = crossroads_state();
        state.active_bots.insert("Stark".to_string());
        state.active_bots.insert("Lannister".to_string());
        state.active_bots.insert("Baratheon".to_string());

        let all = legal_orders_all(&state);
        assert_eq!(all.len(), 3);
        assert_eq!(all["Stark"], legal_orders(&state, "Stark"));
        assert_eq!(all["Lannister"], legal_orders(&state, "Lannister"));
        assert!(all["Baratheon"].is_empty());
    }
}
