//! Parses terminal input lines into storefront events.

use crate::{app::UiEvent, ui::ModalEvent};

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  search <text>      search products by title (blank shows everything)
  add <id>           add one unit of a product to the cart
  remove <id>        remove a product from the cart
  qty <id> <n>       set the quantity of a cart line (0 removes it)
  clear              empty the cart
  cart               open the cart
  close              close the cart
  backdrop [inside]  click the cart backdrop (or inside its content)
  checkout           proceed to checkout
  login              log in
  show <id>          show one product in detail
  categories         list product categories
  category <name>    show only one category (blank shows everything)
  price <min> [max]  show products priced within a range ('-' leaves a bound open)
  help               show this help
  quit               exit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward to the storefront
    Event(UiEvent),
    /// Print [`HELP`]
    Help,
    /// Leave the input loop
    Quit,
}

/// Parses a line of terminal input.
///
/// Returns `Ok(None)` for blank lines. Errors are short messages meant for the user.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    let event = match verb.to_lowercase().as_str() {
        "help" | "?" => return Ok(Some(Command::Help)),
        "quit" | "exit" => return Ok(Some(Command::Quit)),
        "search" => UiEvent::Search(rest.to_string()),
        "add" => UiEvent::AddToCart(parse_id(rest)?),
        "remove" | "rm" => UiEvent::RemoveFromCart(parse_id(rest)?),
        "qty" => {
            let (id, quantity) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: qty <id> <n>".to_string())?;
            let quantity = quantity
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("not a quantity: {}", quantity.trim()))?;
            UiEvent::SetQuantity(parse_id(id)?, quantity)
        }
        "clear" => UiEvent::ClearCart,
        "cart" => UiEvent::Modal(ModalEvent::CartIconClicked),
        "close" => UiEvent::Modal(ModalEvent::CloseClicked),
        "backdrop" => UiEvent::Modal(ModalEvent::BackdropClicked {
            inside_content: rest.eq_ignore_ascii_case("inside"),
        }),
        "checkout" => UiEvent::Checkout,
        "login" => UiEvent::Login,
        "show" => UiEvent::ShowProduct(parse_id(rest)?),
        "categories" => UiEvent::ListCategories,
        "price" => {
            let mut bounds = rest.split_whitespace();
            let min = parse_bound(bounds.next())?;
            let max = parse_bound(bounds.next())?;
            if min.is_none() && max.is_none() {
                return Err("usage: price <min> [max]".to_string());
            }
            UiEvent::BrowsePriceRange { min, max }
        }
        "category" => UiEvent::BrowseCategory(rest.to_string()),
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };
    Ok(Some(Command::Event(event)))
}

fn parse_id(raw: &str) -> Result<i64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("missing product id".to_string());
    }
    raw.parse::<i64>()
        .map_err(|_| format!("not a product id: {raw}"))
}

fn parse_bound(raw: Option<&str>) -> Result<Option<i64>, String> {
    match raw {
        None | Some("-") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| format!("not a price: {value}")),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    fn event(line: &str) -> UiEvent {
        match parse_command(line).unwrap() {
            Some(Command::Event(event)) => event,
            other => panic!("expected an event, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_search_keeps_rest_of_line() {
        assert_eq!(
            event("search  galaxy s24 "),
            UiEvent::Search("galaxy s24".to_string())
        );
        assert_eq!(event("search"), UiEvent::Search(String::new()));
    }

    #[test]
    fn test_cart_commands() {
        assert_eq!(event("ADD 3"), UiEvent::AddToCart(3));
        assert_eq!(event("rm 7"), UiEvent::RemoveFromCart(7));
        assert_eq!(event("qty 2 5"), UiEvent::SetQuantity(2, 5));
        assert_eq!(event("qty 2 0"), UiEvent::SetQuantity(2, 0));
        assert_eq!(event("clear"), UiEvent::ClearCart);
    }

    #[test]
    fn test_modal_commands() {
        assert_eq!(event("cart"), UiEvent::Modal(ModalEvent::CartIconClicked));
        assert_eq!(event("close"), UiEvent::Modal(ModalEvent::CloseClicked));
        assert_eq!(
            event("backdrop"),
            UiEvent::Modal(ModalEvent::BackdropClicked {
                inside_content: false
            })
        );
        assert_eq!(
            event("backdrop inside"),
            UiEvent::Modal(ModalEvent::BackdropClicked {
                inside_content: true
            })
        );
    }

    #[test]
    fn test_product_commands() {
        assert_eq!(event("show 4"), UiEvent::ShowProduct(4));
        assert_eq!(
            event("price 1000 30000"),
            UiEvent::BrowsePriceRange {
                min: Some(1000),
                max: Some(30000)
            }
        );
        assert_eq!(
            event("price - 30000"),
            UiEvent::BrowsePriceRange {
                min: None,
                max: Some(30000)
            }
        );
        assert_eq!(
            event("price 50000"),
            UiEvent::BrowsePriceRange {
                min: Some(50000),
                max: None
            }
        );
    }

    #[test]
    fn test_control_commands() {
        assert_eq!(parse_command("help"), Ok(Some(Command::Help)));
        assert_eq!(parse_command("exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_bad_input_reports_message() {
        assert_eq!(parse_command("add"), Err("missing product id".to_string()));
        assert_eq!(parse_command("add x"), Err("not a product id: x".to_string()));
        assert_eq!(parse_command("qty 3"), Err("usage: qty <id> <n>".to_string()));
        assert!(parse_command("buy 3").unwrap_err().contains("unknown command"));
        assert_eq!(parse_command("price"), Err("usage: price <min> [max]".to_string()));
        assert_eq!(parse_command("price cheap"), Err("not a price: cheap".to_string()));
        assert_eq!(parse_command("show"), Err("missing product id".to_string()));
    }
}
