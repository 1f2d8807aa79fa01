//! Vending Machine
//!
//! Replays a short front-panel session: a button press without a
//! coin, a paid purchase, and a selection attempt after the coin was
//! spent.
//!
//! Run with: cargo run --example vending_machine

use vendo::{Event, Item, VendingMachine};

fn main() {
    let mut machine = VendingMachine::new(vec![
        Item::new(1, "coke", 10),
        Item::new(2, "pepsi", 10),
        Item::new(3, "fanta", 10),
    ]);

    let session = [
        Event::PressButton,
        Event::InsertCoin,
        Event::SelectItem(1),
        Event::PressButton,
        Event::SelectItem(1),
    ];

    println!("=== Vending Machine ===\n");

    for event in session {
        match machine.handle(event) {
            Ok(message) => println!("{message}"),
            Err(err) => println!("error: {err}"),
        }
    }

    println!("\nFinal state: {:?}", machine.state());
    println!(
        "Remaining stock: {}",
        machine
            .inventory()
            .items()
            .map(|item| format!("{}={}", item.name, item.quantity))
            .collect::<Vec<_>>()
            .join(", ")
    );
}
