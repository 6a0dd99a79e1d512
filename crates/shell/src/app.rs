//! The read-eval loop: show the menu, read a choice, run it, repeat.

use std::io::{BufRead, Write};

use chrono::Utc;

use tindahan_cart::render::EMPTY_CART;
use tindahan_core::Quantity;

use crate::console::{Console, INVALID_INPUT};
use crate::menu::MenuChoice;
use crate::session::Session;

const SELECT_PROMPT: &str = "Select an option: ";
const NOT_RECOGNIZED: &str = "Product ID not recognized.";
const ADD_REFUSED: &str = "Cart cannot hold that many units. Nothing was added.";
const CHECKOUT_REFUSED: &str = "Shopping cart is empty. Unable to place order.";
const FAREWELL: &str = "Exiting the shopping menu. Til next time!";

enum Flow {
    Continue,
    Exit,
}

/// Drive `session` until the user exits or input runs out.
pub fn run<R: BufRead, W: Write>(
    mut session: Session,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    tracing::info!("session started");

    loop {
        console.say(&MenuChoice::render_menu())?;
        let selected = console.read_bounded(SELECT_PROMPT, &MenuChoice::range(), INVALID_INPUT)?;
        let Some(number) = selected else {
            tracing::info!("input closed");
            break;
        };
        let Some(choice) = MenuChoice::from_number(number) else {
            continue;
        };

        tracing::debug!(?choice, "menu selection");
        if let Flow::Exit = dispatch(&mut session, console, choice)? {
            break;
        }
    }

    tracing::info!(orders = session.history().len(), "session ended");
    Ok(())
}

fn dispatch<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
    choice: MenuChoice,
) -> anyhow::Result<Flow> {
    match choice {
        MenuChoice::ListProducts => {
            console.say("\nAvailable Products:\n")?;
            console.say(&session.catalog().render())?;
        }
        MenuChoice::AddToCart => return add_to_cart(session, console),
        MenuChoice::RemoveFromCart => return remove_from_cart(session, console),
        MenuChoice::ViewCart => console.say(&session.cart().render(false))?,
        MenuChoice::PlaceOrder => match session.place_order(Utc::now()) {
            Ok(order) => {
                let text = format!("Order confirmed successfully!\n{}", order.render());
                console.say(&text)?;
            }
            Err(err) => {
                tracing::debug!(%err, "checkout refused");
                console.say(&format!("{CHECKOUT_REFUSED}\n"))?;
            }
        },
        MenuChoice::ViewHistory => console.say(&session.history().render_all())?,
        MenuChoice::Exit => {
            console.say(&format!("{FAREWELL}\n"))?;
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

fn read_quantity<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
    prompt: &str,
) -> anyhow::Result<Option<Quantity>> {
    let range = session.config().quantity.clone();
    match console.read_bounded(prompt, &range, INVALID_INPUT)? {
        Some(n) => Ok(Some(Quantity::new(n)?)),
        None => Ok(None),
    }
}

fn add_to_cart<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> anyhow::Result<Flow> {
    let Some(code) = console.read_token("Enter the Product ID to add: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(item) = session.lookup(&code) else {
        tracing::debug!(code = code.as_str(), "unknown product code");
        console.say(&format!("{NOT_RECOGNIZED}\n"))?;
        return Ok(Flow::Continue);
    };
    let Some(quantity) = read_quantity(session, console, "Enter quantity: ")? else {
        return Ok(Flow::Exit);
    };

    let name = item.name().to_owned();
    match session.add_to_cart(item, quantity) {
        Ok(()) => console.say(&format!("{name} added ({quantity} units) to your cart.\n"))?,
        Err(err) => {
            tracing::warn!(%err, "add to cart refused");
            console.say(&format!("{ADD_REFUSED}\n"))?;
        }
    }
    Ok(Flow::Continue)
}

fn remove_from_cart<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> anyhow::Result<Flow> {
    if session.cart().is_empty() {
        console.say(&format!("{EMPTY_CART}\n"))?;
        return Ok(Flow::Continue);
    }

    console.say(&session.cart().render(false))?;
    let Some(code) = console.read_token("Enter the Product ID to remove: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(quantity) = read_quantity(session, console, "Enter quantity to remove: ")? else {
        return Ok(Flow::Exit);
    };

    // Absent codes are ignored; the confirmation is printed either way.
    session.remove_from_cart(&code, quantity);
    console.say("Removal completed.\n")?;
    Ok(Flow::Continue)
}
