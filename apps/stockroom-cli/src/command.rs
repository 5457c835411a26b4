//! # Commands and Prompting
//!
//! Turns menu input into a [`Command`].
//!
//! ## Menu Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Prompt Layer                                    │
//! │                                                                         │
//! │  print MENU ──► read option ──► ask option-specific fields             │
//! │                     │                     │                             │
//! │                     │ EOF                 │ bad number / bad option    │
//! │                     ▼                     ▼                             │
//! │                 Ok(None)            Err(recoverable CliError)           │
//! │                                                                         │
//! │  otherwise ──► Ok(Some(Command)) ──► dispatcher                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field text is parsed here with the same rules the codec uses, so a
//! `Command` only ever carries typed values.

use std::io::{BufRead, Write};

use stockroom_core::validation::{parse_integer, parse_quantity};
use stockroom_core::{Money, NewProduct, ProductCode, SortOrder};

use crate::error::{CliError, CliResult};

/// The menu, options 1 through 13.
pub const MENU: &str = "\
--------------------
M E N U
1. Register product
2. List products
3. Sort products by quantity
4. Search product
5. Remove product
6. Show out-of-stock products
7. Filter products with low quantity
8. Update quantity
9. Update price
10. Total stock value
11. Presumed profit
12. General stock report
13. Exit
--------------------";

/// One menu action with its arguments already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 1: register a product; the store assigns the code.
    Create(NewProduct),
    /// 2
    List,
    /// 3
    Sort(SortOrder),
    /// 4: all-digit text searches by code, anything else by description.
    Search(String),
    /// 5
    Remove(ProductCode),
    /// 6
    OutOfStock,
    /// 7: `None` uses the configured threshold.
    FilterBelow(Option<i64>),
    /// 8
    UpdateQuantity { code: ProductCode, quantity: i64 },
    /// 9
    UpdatePrice { code: ProductCode, price: Money },
    /// 10
    TotalValue,
    /// 11
    PresumedProfit,
    /// 12
    GeneralReport,
    /// 13
    Exit,
}

/// Line-oriented prompter over any reader/writer pair.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    /// The writer, for rendering outcomes between prompts.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints `label` and reads one line. `None` at end of input.
    pub fn ask(&mut self, label: &str) -> CliResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Shows the menu and reads the next command. `None` at end of input.
    pub fn read_command(&mut self) -> CliResult<Option<Command>> {
        writeln!(self.output, "{}", MENU)?;
        let Some(choice) = self.ask("Enter the number of the desired option: ")? else {
            return Ok(None);
        };

        let command = match choice.trim() {
            "1" => self.read_create()?,
            "2" => Some(Command::List),
            "3" => self.read_sort()?,
            "4" => self
                .ask("Enter the product description or code: ")?
                .map(|text| Command::Search(text.trim().to_string())),
            "5" => self
                .ask_code("Enter the code of the product to remove: ")?
                .map(Command::Remove),
            "6" => Some(Command::OutOfStock),
            "7" => self.read_filter()?,
            "8" => self.read_update_quantity()?,
            "9" => self.read_update_price()?,
            "10" => Some(Command::TotalValue),
            "11" => Some(Command::PresumedProfit),
            "12" => Some(Command::GeneralReport),
            "13" => Some(Command::Exit),
            other => return Err(CliError::InvalidChoice(other.to_string())),
        };

        Ok(command)
    }

    /// Asks whether to go back to the menu. End of input counts as leaving.
    pub fn ask_continue(&mut self) -> CliResult<bool> {
        loop {
            let Some(answer) = self.ask("Enter 1 to return to the menu or 2 to exit: ")? else {
                return Ok(false);
            };
            match answer.trim() {
                "1" => return Ok(true),
                "2" => return Ok(false),
                other => writeln!(self.output, "Invalid option: '{}'", other)?,
            }
        }
    }

    fn ask_code(&mut self, label: &str) -> CliResult<Option<ProductCode>> {
        match self.ask(label)? {
            Some(text) => Ok(Some(text.parse()?)),
            None => Ok(None),
        }
    }

    fn read_create(&mut self) -> CliResult<Option<Command>> {
        let Some(description) = self.ask("Enter the product description: ")? else {
            return Ok(None);
        };
        let Some(quantity) = self.ask("Enter the quantity: ")? else {
            return Ok(None);
        };
        let Some(unit_cost) = self.ask("Enter the unit cost: ")? else {
            return Ok(None);
        };
        let Some(sale_price) = self.ask("Enter the sale price: ")? else {
            return Ok(None);
        };

        Ok(Some(Command::Create(NewProduct {
            description,
            quantity: parse_quantity(&quantity)?,
            unit_cost: Money::parse_field(&unit_cost, "unit_cost")?,
            sale_price: Money::parse_field(&sale_price, "sale_price")?,
        })))
    }

    fn read_sort(&mut self) -> CliResult<Option<Command>> {
        let label = "Enter 1 for ascending order or 2 for descending order: ";
        let Some(answer) = self.ask(label)? else {
            return Ok(None);
        };
        let order = match answer.trim() {
            "1" => SortOrder::Ascending,
            "2" => SortOrder::Descending,
            other => return Err(CliError::InvalidChoice(other.to_string())),
        };
        Ok(Some(Command::Sort(order)))
    }

    fn read_filter(&mut self) -> CliResult<Option<Command>> {
        let Some(answer) =
            self.ask("Enter 1 to choose the quantity or 2 to use the system default: ")?
        else {
            return Ok(None);
        };
        if answer.trim() != "1" {
            return Ok(Some(Command::FilterBelow(None)));
        }

        let Some(threshold) = self.ask("Enter the quantity to filter by: ")? else {
            return Ok(None);
        };
        Ok(Some(Command::FilterBelow(Some(parse_integer(
            &threshold,
            "threshold",
        )?))))
    }

    fn read_update_quantity(&mut self) -> CliResult<Option<Command>> {
        let Some(code) = self.ask_code("Enter the code of the product to update: ")? else {
            return Ok(None);
        };
        let Some(quantity) = self.ask("Enter the updated quantity: ")? else {
            return Ok(None);
        };
        Ok(Some(Command::UpdateQuantity {
            code,
            quantity: parse_quantity(&quantity)?,
        }))
    }

    fn read_update_price(&mut self) -> CliResult<Option<Command>> {
        let Some(code) = self.ask_code("Enter the code of the product to update: ")? else {
            return Ok(None);
        };
        let Some(price) = self.ask("Enter the updated price: ")? else {
            return Ok(None);
        };
        Ok(Some(Command::UpdatePrice {
            code,
            price: Money::parse_field(&price, "sale_price")?,
        }))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str) -> (CliResult<Option<Command>>, String) {
        let mut output = Vec::new();
        let result = Prompt::new(Cursor::new(input.as_bytes()), &mut output).read_command();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_menu_is_printed() {
        let (result, output) = read("2\n");
        assert_eq!(result.unwrap(), Some(Command::List));
        assert!(output.contains("1. Register product"));
        assert!(output.contains("13. Exit"));
    }

    #[test]
    fn test_simple_options() {
        for (input, expected) in [
            ("2\n", Command::List),
            ("6\n", Command::OutOfStock),
            ("10\n", Command::TotalValue),
            ("11\n", Command::PresumedProfit),
            ("12\n", Command::GeneralReport),
            (" 13 \n", Command::Exit),
        ] {
            assert_eq!(read(input).0.unwrap(), Some(expected));
        }
    }

    #[test]
    fn test_create_prompts_every_field() {
        let (result, output) = read("1\n  Webcam Logitech \n4\n90.00\n150\n");
        assert_eq!(
            result.unwrap(),
            Some(Command::Create(NewProduct {
                description: "  Webcam Logitech ".to_string(),
                quantity: 4,
                unit_cost: Money::from_cents(9000),
                sale_price: Money::from_cents(15000),
            }))
        );
        assert!(output.contains("Enter the sale price: "));
    }

    #[test]
    fn test_create_with_bad_number_is_recoverable() {
        let (result, _) = read("1\nWebcam\nfour\n90.00\n150.00\n");
        let err = result.unwrap_err();
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("quantity"));
    }

    #[test]
    fn test_sort_order() {
        assert_eq!(read("3\n1\n").0.unwrap(), Some(Command::Sort(SortOrder::Ascending)));
        assert_eq!(read("3\n2\n").0.unwrap(), Some(Command::Sort(SortOrder::Descending)));
        assert!(matches!(read("3\n9\n").0, Err(CliError::InvalidChoice(_))));
    }

    #[test]
    fn test_search_and_remove() {
        assert_eq!(
            read("4\n monitor \n").0.unwrap(),
            Some(Command::Search("monitor".to_string()))
        );
        assert_eq!(
            read("5\n203\n").0.unwrap(),
            Some(Command::Remove(ProductCode::new(203)))
        );
        assert!(read("5\nabc\n").0.unwrap_err().is_recoverable());
    }

    #[test]
    fn test_filter_default_or_custom() {
        assert_eq!(read("7\n2\n").0.unwrap(), Some(Command::FilterBelow(None)));
        assert_eq!(read("7\n1\n10\n").0.unwrap(), Some(Command::FilterBelow(Some(10))));
    }

    #[test]
    fn test_updates() {
        assert_eq!(
            read("8\n210\n0\n").0.unwrap(),
            Some(Command::UpdateQuantity {
                code: ProductCode::new(210),
                quantity: 0
            })
        );
        assert_eq!(
            read("9\n209\n300.00\n").0.unwrap(),
            Some(Command::UpdatePrice {
                code: ProductCode::new(209),
                price: Money::from_cents(30000)
            })
        );
    }

    #[test]
    fn test_invalid_option() {
        let (result, _) = read("42\n");
        assert!(matches!(result, Err(CliError::InvalidChoice(choice)) if choice == "42"));
    }

    #[test]
    fn test_end_of_input() {
        assert_eq!(read("").0.unwrap(), None);
        assert_eq!(read("1\nWebcam\n").0.unwrap(), None);
    }

    #[test]
    fn test_ask_continue() {
        let mut output = Vec::new();
        let mut prompt = Prompt::new(Cursor::new("x\n1\n2\n".as_bytes()), &mut output);
        assert!(prompt.ask_continue().unwrap());
        assert!(!prompt.ask_continue().unwrap());
        assert!(!prompt.ask_continue().unwrap());
        drop(prompt);
        assert!(String::from_utf8(output).unwrap().contains("Invalid option: 'x'"));
    }
}
