//! Property-based tests for the vending machine.
//!
//! These tests use proptest to verify the transition-table properties
//! hold across many randomly generated inputs, including arbitrary
//! event sequences.

use proptest::prelude::*;
use vendo::{Event, Item, VendingError, VendingMachine, VendingState};

const CATALOG_IDS: [u32; 3] = [1, 2, 3];

fn catalog(quantities: [u32; 3]) -> Vec<Item> {
    vec![
        Item::new(1, "coke", quantities[0]),
        Item::new(2, "pepsi", quantities[1]),
        Item::new(3, "fanta", quantities[2]),
    ]
}

prop_compose! {
    fn arbitrary_state()(variant in 0..4u8) -> VendingState {
        match variant {
            0 => VendingState::NoCoin,
            1 => VendingState::HasCoin,
            2 => VendingState::Dispensing,
            _ => VendingState::ItemSoldOut,
        }
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..3u8, id in 1..=3u32) -> Event {
        match variant {
            0 => Event::PressButton,
            1 => Event::InsertCoin,
            _ => Event::SelectItem(id),
        }
    }
}

/// Drive a fresh machine into the requested state using only public events.
///
/// Reaching Dispensing or ItemSoldOut consumes one selection, so the
/// catalog gets an extra driver slot (id 4) stocked with exactly the
/// quantity that forces the wanted dispense-check branch.
fn machine_in_state(state: VendingState, quantities: [u32; 3]) -> VendingMachine {
    let mut items = catalog(quantities);
    let driver_stock = match state {
        VendingState::Dispensing => 1,
        _ => 0,
    };
    items.push(Item::new(4, "water", driver_stock));

    let mut machine = VendingMachine::new(items);
    match state {
        VendingState::NoCoin => {}
        VendingState::HasCoin => {
            machine.insert_coin();
        }
        VendingState::Dispensing | VendingState::ItemSoldOut => {
            machine.insert_coin();
            machine
                .select_item(4)
                .expect("driver item is always in the catalog");
            assert_eq!(machine.state(), &state);
        }
    }
    machine
}

proptest! {
    #[test]
    fn in_stock_selection_decrements_by_exactly_one(
        quantity in 1..50u32,
        from_sold_out in any::<bool>(),
    ) {
        // HasCoin and ItemSoldOut both run the dispense-check.
        let mut machine = if from_sold_out {
            machine_in_state(VendingState::ItemSoldOut, [0, quantity, 5])
        } else {
            machine_in_state(VendingState::HasCoin, [0, quantity, 5])
        };

        let message = machine.select_item(2).unwrap();
        prop_assert_eq!(message, "Item now selected is pepsi");
        prop_assert_eq!(machine.state(), &VendingState::Dispensing);
        prop_assert_eq!(machine.inventory().quantity(2), Some(quantity - 1));
    }

    #[test]
    fn zero_stock_selection_is_idempotent(repeats in 1..10usize) {
        let mut machine = machine_in_state(VendingState::HasCoin, [5, 0, 5]);

        for _ in 0..repeats {
            let message = machine.select_item(2).unwrap();
            prop_assert_eq!(message, "Item now selected is pepsi");
            prop_assert_eq!(machine.state(), &VendingState::ItemSoldOut);
            prop_assert_eq!(machine.inventory().quantity(2), Some(0));
        }
    }

    #[test]
    fn dispensing_button_press_always_returns_to_no_coin(quantities in proptest::array::uniform3(1..20u32)) {
        let mut machine = machine_in_state(VendingState::Dispensing, quantities);

        let message = machine.press_button();
        prop_assert_eq!(message, "ITEM DISPENSED");
        prop_assert_eq!(machine.state(), &VendingState::NoCoin);
    }

    #[test]
    fn coin_insertion_from_no_coin_reaches_has_coin(quantities in proptest::array::uniform3(0..20u32)) {
        let mut machine = VendingMachine::new(catalog(quantities));

        prop_assert_eq!(machine.insert_coin(), "Coin inserted, please select item");
        prop_assert_eq!(machine.state(), &VendingState::HasCoin);

        // A second coin is a self-loop.
        prop_assert_eq!(machine.insert_coin(), "Coin already there");
        prop_assert_eq!(machine.state(), &VendingState::HasCoin);
    }

    #[test]
    fn purchase_round_trip_restores_initial_state(id in 1..=3u32, quantity in 1..20u32) {
        let mut machine = VendingMachine::new(catalog([quantity; 3]));

        machine.insert_coin();
        machine.select_item(id).unwrap();
        prop_assert_eq!(machine.state(), &VendingState::Dispensing);
        machine.press_button();

        prop_assert_eq!(machine.state(), &VendingState::NoCoin);
        prop_assert_eq!(machine.inventory().quantity(id), Some(quantity - 1));
    }

    #[test]
    fn arbitrary_sequences_conserve_stock(
        quantities in proptest::array::uniform3(0..10u32),
        events in prop::collection::vec(arbitrary_event(), 0..60),
    ) {
        let mut machine = VendingMachine::new(catalog(quantities));
        let initial_total: u32 = quantities.iter().sum();

        let mut dispensed = 0u32;
        for event in events {
            let before = *machine.state();
            machine.handle(event).unwrap();
            // A unit leaves stock exactly when a paid selection lands in
            // Dispensing; NoCoin selections are read-only.
            if matches!(event, Event::SelectItem(_))
                && before != VendingState::NoCoin
                && machine.state() == &VendingState::Dispensing
            {
                dispensed += 1;
            }

            // Quantities are unsigned, so "never negative" shows up as
            // conservation: stock only decreases, one unit per dispense.
            let total: u32 = CATALOG_IDS
                .iter()
                .map(|&id| machine.inventory().quantity(id).unwrap())
                .sum();
            prop_assert!(total <= initial_total);
        }

        let final_total: u32 = CATALOG_IDS
            .iter()
            .map(|&id| machine.inventory().quantity(id).unwrap())
            .sum();
        prop_assert_eq!(initial_total - final_total, dispensed);
    }

    // Selecting an id that was never stocked is a typed failure, not a
    // lookup panic, and must leave the machine exactly as it was.
    #[test]
    fn unknown_id_fails_without_side_effects(
        state in arbitrary_state(),
        bogus_id in 100..1000u32,
    ) {
        let mut machine = machine_in_state(state, [3, 3, 3]);
        let state_before = *machine.state();
        let inventory_before = machine.inventory().clone();
        let history_len_before = machine.history().transitions().len();

        let err = machine.select_item(bogus_id).unwrap_err();
        prop_assert_eq!(err, VendingError::UnknownItem { item_id: bogus_id });
        prop_assert_eq!(machine.state(), &state_before);
        prop_assert_eq!(machine.inventory(), &inventory_before);
        prop_assert_eq!(machine.history().transitions().len(), history_len_before);
    }

    #[test]
    fn history_path_tracks_every_event(
        events in prop::collection::vec(arbitrary_event(), 1..30),
    ) {
        let mut machine = VendingMachine::new(catalog([5, 5, 5]));

        for event in &events {
            machine.handle(*event).unwrap();
        }

        let transitions = machine.history().transitions();
        prop_assert_eq!(transitions.len(), events.len());
        prop_assert_eq!(&transitions.last().unwrap().to, machine.state());

        // Consecutive records chain: each `from` is the previous `to`.
        for pair in transitions.windows(2) {
            prop_assert_eq!(&pair[0].to, &pair[1].from);
        }
    }
}
