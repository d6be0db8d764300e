//! # Register Shell
//!
//! Line-oriented front end: one command per line, read from any `BufRead`
//! and answered on any `Write`.
//!
//! ## Line Handling
//! ```text
//! "sell \"Wool Socks\" 2 20.00"
//!        │
//!        ▼  tokenize (double quotes group words)
//! ["sell", "Wool Socks", "2", "20.00"]
//!        │
//!        ▼  clap (ShellLine::try_parse_from)
//! ShellCommand::Sell { item, quantity, cash }
//!        │
//!        ▼  commands::sale::process_sale
//! "Sale complete. Change due: $3.50"      or      "error: <message>"
//! ```
//!
//! Blank lines and lines starting with `#` are skipped, so a shift can be
//! replayed from a script file.

use std::io::{BufRead, Write};

use clap::{ColorChoice, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, warn};

use crate::commands::{inventory, report, sale};
use crate::error::{ApiError, ShellError};
use crate::state::{ConfigState, SessionState};

const HELP: &str = "\
Commands:
  sell <item> <qty> <cash>      Sell units of an item for cash
  items [--json]                List items with price and stock
  add <name> <price> <stock>    Add an item (replaces an existing one)
  price <name> <price>          Change an item's price
  restock <name> <units>        Add units to an item's stock
  report [--json]               Units sold per item
  export [path]                 Save the report as CSV
  till                          Show the till balance
  help                          Show this list
  quit | exit                   Leave the register

Quote names that contain spaces: add \"Wool Socks\" 9.50 12";

// =============================================================================
// Command Grammar
// =============================================================================

#[derive(Debug, Parser)]
#[command(
    name = "till",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    color = ColorChoice::Never
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    Sell {
        item: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
        #[arg(allow_hyphen_values = true)]
        cash: String,
    },
    Items {
        #[arg(long)]
        json: bool,
    },
    Add {
        name: String,
        #[arg(allow_hyphen_values = true)]
        price: String,
        #[arg(allow_hyphen_values = true)]
        stock: String,
    },
    Price {
        name: String,
        #[arg(allow_hyphen_values = true)]
        price: String,
    },
    Restock {
        name: String,
        #[arg(allow_hyphen_values = true)]
        units: String,
    },
    Report {
        #[arg(long)]
        json: bool,
    },
    Export {
        path: Option<String>,
    },
    Till,
    Help,
    #[command(alias = "exit")]
    Quit,
}

/// What the shell does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

// =============================================================================
// Shell
// =============================================================================

/// The register shell.
pub struct Shell {
    session: SessionState,
    config: ConfigState,
}

impl Shell {
    pub fn new(session: SessionState, config: ConfigState) -> Self {
        Shell { session, config }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// The prompt and banner are only written when `interactive` is set.
    /// Operator errors, including lines that are not UTF-8, are printed and
    /// the loop goes on; only a failure to read input or write output ends
    /// it early.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut out: W,
        interactive: bool,
    ) -> std::io::Result<()> {
        if interactive {
            writeln!(out, "{} register. Type 'help' for commands.", self.config.store_name)?;
        }

        let mut buf = Vec::new();
        loop {
            if interactive {
                write!(out, "till> ")?;
                out.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let flow = match std::str::from_utf8(&buf) {
                Ok(line) => self.execute_line(line, &mut out)?,
                Err(e) => {
                    warn!(error = %e, "Skipping input line that is not UTF-8");
                    writeln!(out, "error: Input line is not valid UTF-8 text.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        out.flush()
    }

    /// Runs one line and writes its outcome.
    pub fn execute_line<W: Write>(&self, line: &str, out: &mut W) -> std::io::Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        match self.dispatch(line, out) {
            Ok(flow) => Ok(flow),
            Err(ShellError::Api(e)) => {
                debug!(code = ?e.code, "Command failed");
                writeln!(out, "error: {}", e.message)?;
                Ok(Flow::Continue)
            }
            Err(ShellError::Output(e)) => Err(e),
            Err(ShellError::Json(e)) => Err(e.into()),
        }
    }

    fn dispatch<W: Write>(&self, line: &str, out: &mut W) -> Result<Flow, ShellError> {
        let tokens = tokenize(line)?;
        let parsed = ShellLine::try_parse_from(&tokens).map_err(|e| usage_error(&e))?;

        match parsed.command {
            ShellCommand::Sell {
                item,
                quantity,
                cash,
            } => {
                let response = sale::process_sale(&self.session, &item, &quantity, &cash)?;
                writeln!(
                    out,
                    "Sale complete. Change due: {}",
                    self.money(response.change_cents)
                )?;
            }
            ShellCommand::Items { json: true } => {
                write_json(out, &inventory::list_items(&self.session))?;
            }
            ShellCommand::Items { json: false } => {
                let items = inventory::list_items(&self.session);
                writeln!(out, "{:<24} {:>10} {:>8}", "Item", "Price", "Stock")?;
                for item in items {
                    writeln!(
                        out,
                        "{:<24} {:>10} {:>8}",
                        item.name,
                        self.money(item.price_cents),
                        item.stock
                    )?;
                }
            }
            ShellCommand::Add { name, price, stock } => {
                let item = inventory::add_item(&self.session, &name, &price, &stock)?;
                writeln!(
                    out,
                    "Added {} at {} ({} in stock)",
                    item.name,
                    self.money(item.price_cents),
                    item.stock
                )?;
            }
            ShellCommand::Price { name, price } => {
                let item = inventory::edit_price(&self.session, &name, &price)?;
                writeln!(out, "{} now costs {}", item.name, self.money(item.price_cents))?;
            }
            ShellCommand::Restock { name, units } => {
                let item = inventory::restock(&self.session, &name, &units)?;
                writeln!(out, "{} restocked: {} in stock", item.name, item.stock)?;
            }
            ShellCommand::Report { json: true } => {
                write_json(out, &report::get_report(&self.session))?;
            }
            ShellCommand::Report { json: false } => {
                let rows = report::get_report(&self.session);
                if rows.is_empty() {
                    writeln!(out, "No sales recorded yet.")?;
                } else {
                    writeln!(out, "{:<24} {:>10}", "Item", "Units Sold")?;
                    for row in rows {
                        writeln!(out, "{:<24} {:>10}", row.item, row.units_sold)?;
                    }
                }
            }
            ShellCommand::Export { path } => {
                let response = report::export_report(&self.session, &self.config, path.as_deref())?;
                writeln!(out, "Report saved to {}", response.path)?;
            }
            ShellCommand::Till => {
                let till = sale::get_till(&self.session);
                writeln!(out, "Till: {}", self.money(till.balance_cents))?;
            }
            ShellCommand::Help => writeln!(out, "{}", HELP)?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn money(&self, cents: i64) -> String {
        self.config.format_currency(cents)
    }
}

/// Condenses a clap error to one line, keeping the argument names clap
/// lists under its headline.
fn usage_error(err: &clap::Error) -> ApiError {
    let text = err.to_string();
    let mut lines = text.lines().take_while(|l| !l.trim().is_empty());
    let headline = lines
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .trim_end();
    let details: Vec<&str> = lines.map(str::trim).collect();

    if details.is_empty() {
        ApiError::unknown_command(format!("{} (type 'help' for commands)", headline))
    } else {
        ApiError::unknown_command(format!(
            "{} {} (type 'help' for commands)",
            headline,
            details.join(", ")
        ))
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), ShellError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Splits a line on whitespace, keeping double-quoted runs together.
fn tokenize(line: &str) -> Result<Vec<String>, ApiError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(ApiError::validation("Unterminated quote"));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (Shell, String) {
        let shell = Shell::new(SessionState::default(), ConfigState::default());
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out, false).unwrap();
        (shell, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_tokenize_quotes() {
        assert_eq!(
            tokenize(r#"add "Wool Socks" 9.50 12"#).unwrap(),
            vec!["add", "Wool Socks", "9.50", "12"]
        );
        assert_eq!(tokenize(r#"export """#).unwrap(), vec!["export", ""]);
        assert!(tokenize(r#"sell "Hat 1 2"#).is_err());
    }

    #[test]
    fn test_sell_prints_change() {
        let (_, out) = run_script("sell Shoes 3 20.00\ntill\n");
        assert_eq!(out, "Sale complete. Change due: $3.50\nTill: $516.50\n");
    }

    #[test]
    fn test_errors_do_not_stop_the_shell() {
        let (shell, out) = run_script(
            "sell Hat 5 30.00\nsell Socks 50 1000\nsell Gloves 1 1\nfrobnicate\nsell Hat 1 $7.60\n",
        );
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "error: Total cost is $38.00. Please collect more cash.");
        assert_eq!(lines[1], "error: Only 30 left in stock.");
        assert_eq!(lines[2], "error: Please select a valid item.");
        assert!(lines[3].starts_with("error: "));
        assert!(lines[3].contains("help"));
        assert_eq!(lines[4], "Sale complete. Change due: $0.00");
        assert_eq!(
            shell.session().with_session(|s| s.ledger().units_sold("Hat")),
            1
        );
    }

    #[test]
    fn test_negative_numbers_reach_validation() {
        let (_, out) = run_script("restock Hat -3\n");
        assert!(out.starts_with("error: units"));
    }

    #[test]
    fn test_comments_blank_lines_and_quit() {
        let (shell, out) = run_script("# opening\n\nrestock Hat 10\nquit\nrestock Hat 10\n");
        assert_eq!(out, "Hat restocked: 25 in stock\n");
        assert_eq!(
            shell.session().with_session(|s| s.catalog().get("Hat").unwrap().stock),
            25
        );
    }

    #[test]
    fn test_items_json() {
        let (_, out) = run_script("add \"Wool Socks\" 9.50 12\nitems --json\n");
        let json_start = out.find('[').unwrap();
        let items: serde_json::Value = serde_json::from_str(&out[json_start..]).unwrap();

        assert_eq!(items.as_array().unwrap().len(), 4);
        assert_eq!(items[3]["name"], "Wool Socks");
        assert_eq!(items[3]["priceCents"], 950);
    }

    #[test]
    fn test_report_text() {
        let (_, out) = run_script("report\nsell Socks 2 20\nreport\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "No sales recorded yet.");
        assert!(lines[2].starts_with("Item"));
        assert!(lines[3].starts_with("Socks"));
        assert!(lines[3].trim_end().ends_with('2'));
    }

    #[test]
    fn test_interactive_prompt() {
        let shell = Shell::new(SessionState::default(), ConfigState::default());
        let mut out = Vec::new();
        shell.run("exit\n".as_bytes(), &mut out, true).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("Till POS register."));
        assert!(out.ends_with("till> "));
    }

    #[test]
    fn test_missing_arguments_are_named() {
        let (_, out) = run_script("sell Hat\n");
        assert!(out.starts_with("error: "));
        assert!(out.contains("<QUANTITY>"));
        assert!(out.contains("<CASH>"));
    }

    #[test]
    fn test_invalid_utf8_line_is_reported_and_skipped() {
        let shell = Shell::new(SessionState::default(), ConfigState::default());
        let input: &[u8] = b"till\nadd \xff\xfe 1 1\nrestock Hat 10\ntill\n";
        let mut out = Vec::new();

        shell.run(input, &mut out, false).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Till: $500.00");
        assert!(lines[1].starts_with("error: "));
        assert_eq!(lines[2], "Hat restocked: 25 in stock");
        assert_eq!(lines[3], "Till: $500.00");
        assert_eq!(
            shell.session().with_session(|s| s.catalog().get("Hat").unwrap().stock),
            25
        );
    }
}
