use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::events::{Event, UserInput};

/// Parse one line typed by the player.
///
/// | Command                   | Input          |
/// |---------------------------|----------------|
/// | `toggle <id> on\|off`     | Toggle         |
/// | `category <name>`         | SelectCategory |
/// | `sell`                    | Sell           |
/// | `close` / `esc`           | Close          |
pub fn parse_command(line: &str) -> Option<UserInput> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_ascii_lowercase();

    match command.as_str() {
        "toggle" => {
            let id = words.next()?.to_string();
            let checked = match words.next().map(str::to_ascii_lowercase).as_deref() {
                None | Some("on") | Some("true") => true,
                Some("off") | Some("false") => false,
                Some(_) => return None,
            };
            Some(UserInput::Toggle { id, checked })
        }
        "category" => Some(UserInput::SelectCategory(words.next()?.to_string())),
        "sell" => Some(UserInput::Sell),
        "close" | "esc" | "escape" => Some(UserInput::Close),
        _ => None,
    }
}

/// Spawns a task that reads commands from stdin. Sends Shutdown on EOF.
pub fn spawn(tx: mpsc::Sender<Event>) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match parse_command(&line) {
                        Some(input) => {
                            if tx.send(Event::Input(input)).await.is_err() {
                                return;
                            }
                        }
                        None => warn!("unknown command: {}", line.trim()),
                    }
                }
                Ok(None) => {
                    info!("stdin closed");
                    break;
                }
                Err(e) => {
                    warn!("stdin error: {}", e);
                    break;
                }
            }
        }

        let _ = tx.send(Event::Shutdown).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(
            parse_command("toggle weed on"),
            Some(UserInput::Toggle {
                id: "weed".to_string(),
                checked: true
            })
        );
        assert_eq!(
            parse_command("toggle weed OFF"),
            Some(UserInput::Toggle {
                id: "weed".to_string(),
                checked: false
            })
        );
        // Bare toggle ticks the box
        assert_eq!(
            parse_command("toggle weed"),
            Some(UserInput::Toggle {
                id: "weed".to_string(),
                checked: true
            })
        );
        assert_eq!(parse_command("toggle weed maybe"), None);
        assert_eq!(parse_command("toggle"), None);
    }

    #[test]
    fn test_category() {
        assert_eq!(
            parse_command("category drugs"),
            Some(UserInput::SelectCategory("drugs".to_string()))
        );
        assert_eq!(
            parse_command("  CATEGORY all "),
            Some(UserInput::SelectCategory("all".to_string()))
        );
        assert_eq!(parse_command("category"), None);
    }

    #[test]
    fn test_sell_and_close() {
        assert_eq!(parse_command("sell"), Some(UserInput::Sell));
        assert_eq!(parse_command("close"), Some(UserInput::Close));
        // Escape is the same as close
        assert_eq!(parse_command("esc"), Some(UserInput::Close));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(parse_command("buy weed"), None);
        assert_eq!(parse_command(""), None);
    }
}
