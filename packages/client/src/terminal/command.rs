//! Parsing of the interactive commands.
//!
//! Numbers typed by the user are 1-based; parsed targets are 0-based.

use thiserror::Error;

const SELECT_USAGE: &str = "select <number|activity name>";
const EMAIL_USAGE: &str = "email <address>";
const SIGNUP_USAGE: &str = "signup <number|activity name> <email>";
const REMOVE_USAGE: &str = "remove <card>.<row>  (e.g. remove 2.1)";

pub const HELP_TEXT: &str = "\
Commands:
  list                         reload the activities
  select <number|name>         choose an activity for the signup form
  email <address>              type the email of the signup form
  submit                       submit the signup form
  signup <number|name> <email> select, type and submit in one step
  remove <card>.<row>          click the remove button of a participant
  help                         show this help
  quit                         exit (also Ctrl+C / Ctrl+D)
";

/// Activity picked from the selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityChoice {
    /// 1-based position in the selection control
    Number(usize),
    Name(String),
}

impl ActivityChoice {
    fn parse(text: &str) -> Self {
        match text.parse::<usize>() {
            Ok(number) => ActivityChoice::Number(number),
            Err(_) => ActivityChoice::Name(text.to_string()),
        }
    }

    /// Resolve to an activity name using the current options.
    ///
    /// Names are returned as typed; the board checks them against the options.
    pub fn resolve(&self, options: &[String]) -> Option<String> {
        match self {
            ActivityChoice::Number(number) => number
                .checked_sub(1)
                .and_then(|index| options.get(index))
                .cloned(),
            ActivityChoice::Name(name) => Some(name.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Select(ActivityChoice),
    Email(String),
    Submit,
    Signup {
        activity: ActivityChoice,
        email: String,
    },
    /// Click the removal control of row `row` in card `card` (0-based)
    Remove {
        card: usize,
        row: usize,
    },
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Whether the line ends the session
pub fn is_exit_command(line: &str) -> bool {
    matches!(parse_command(line), Ok(Command::Quit))
}

/// Parse one line typed at the prompt.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "list" | "refresh" => Ok(Command::List),
        "select" => {
            if rest.is_empty() {
                return Err(CommandError::Usage(SELECT_USAGE));
            }
            Ok(Command::Select(ActivityChoice::parse(rest)))
        }
        "email" => {
            if rest.is_empty() {
                return Err(CommandError::Usage(EMAIL_USAGE));
            }
            Ok(Command::Email(rest.to_string()))
        }
        "submit" => Ok(Command::Submit),
        "signup" => {
            // Activity names contain spaces, emails do not.
            let (activity, email) = rest
                .rsplit_once(char::is_whitespace)
                .ok_or(CommandError::Usage(SIGNUP_USAGE))?;
            let activity = activity.trim();
            if activity.is_empty() {
                return Err(CommandError::Usage(SIGNUP_USAGE));
            }
            Ok(Command::Signup {
                activity: ActivityChoice::parse(activity),
                email: email.to_string(),
            })
        }
        "remove" => parse_remove_target(rest),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_remove_target(target: &str) -> Result<Command, CommandError> {
    let usage = CommandError::Usage(REMOVE_USAGE);
    let (card, row) = target.split_once('.').ok_or(usage.clone())?;
    let card: usize = card.trim().parse().map_err(|_| usage.clone())?;
    let row: usize = row.trim().parse().map_err(|_| usage.clone())?;

    match (card.checked_sub(1), row.checked_sub(1)) {
        (Some(card), Some(row)) => Ok(Command::Remove { card, row }),
        _ => Err(usage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_aliases() {
        // テスト項目: list と refresh はどちらも一覧の再取得になる
        // given (前提条件) / when (操作) / then (期待する結果):
        assert_eq!(parse_command("list"), Ok(Command::List));
        assert_eq!(parse_command("  REFRESH "), Ok(Command::List));
    }

    #[test]
    fn test_parse_select_by_number_and_name() {
        // テスト項目: 番号でも名前でもアクティビティを選択できる
        // given (前提条件) / when (操作) / then (期待する結果):
        assert_eq!(
            parse_command("select 2"),
            Ok(Command::Select(ActivityChoice::Number(2)))
        );
        assert_eq!(
            parse_command("select Chess Club"),
            Ok(Command::Select(ActivityChoice::Name("Chess Club".to_string())))
        );
        assert_eq!(
            parse_command("select"),
            Err(CommandError::Usage(SELECT_USAGE))
        );
    }

    #[test]
    fn test_parse_signup_splits_on_last_whitespace() {
        // テスト項目: signup は最後の空白でアクティビティ名とメールに分割される
        // given (前提条件):
        let line = "signup Programming Class emma@mergington.edu";

        // when (操作):
        let result = parse_command(line);

        // then (期待する結果):
        assert_eq!(
            result,
            Ok(Command::Signup {
                activity: ActivityChoice::Name("Programming Class".to_string()),
                email: "emma@mergington.edu".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_signup_requires_activity_and_email() {
        // テスト項目: signup の引数が足りない場合は使い方が返される
        // given (前提条件) / when (操作) / then (期待する結果):
        assert_eq!(
            parse_command("signup a@x.com"),
            Err(CommandError::Usage(SIGNUP_USAGE))
        );
        assert_eq!(
            parse_command("signup"),
            Err(CommandError::Usage(SIGNUP_USAGE))
        );
    }

    #[test]
    fn test_parse_remove_target_is_zero_based() {
        // テスト項目: remove の 1 始まりの番号が 0 始まりに変換される
        // given (前提条件):
        let line = "remove 2.1";

        // when (操作):
        let result = parse_command(line);

        // then (期待する結果):
        assert_eq!(result, Ok(Command::Remove { card: 1, row: 0 }));
    }

    #[test]
    fn test_parse_remove_rejects_invalid_targets() {
        // テスト項目: 不正な削除対象は使い方のエラーになる
        // given (前提条件) / when (操作) / then (期待する結果):
        for line in ["remove", "remove 2", "remove a.b", "remove 0.1", "remove 1.0"] {
            assert_eq!(
                parse_command(line),
                Err(CommandError::Usage(REMOVE_USAGE)),
                "line: {}",
                line
            );
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        // テスト項目: 未知のコマンドはエラーになる
        // given (前提条件) / when (操作) / then (期待する結果):
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn test_is_exit_command() {
        // テスト項目: quit と exit だけが終了コマンドと判定される
        // given (前提条件) / when (操作) / then (期待する結果):
        assert!(is_exit_command("quit"));
        assert!(is_exit_command(" exit "));
        assert!(!is_exit_command("list"));
    }

    #[test]
    fn test_choice_resolve() {
        // テスト項目: 番号は選択肢の位置で、名前はそのまま解決される
        // given (前提条件):
        let options = vec!["Chess Club".to_string(), "Art Club".to_string()];

        // when (操作) / then (期待する結果):
        assert_eq!(
            ActivityChoice::Number(2).resolve(&options),
            Some("Art Club".to_string())
        );
        assert_eq!(ActivityChoice::Number(0).resolve(&options), None);
        assert_eq!(ActivityChoice::Number(3).resolve(&options), None);
        assert_eq!(
            ActivityChoice::Name("Drama Club".to_string()).resolve(&options),
            Some("Drama Club".to_string())
        );
    }
}
