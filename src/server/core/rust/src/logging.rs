/* src/server/core/rust/src/logging.rs */

// Logging shim for the request entry: maps the `--verbose` / `--silent`
// process flags to a tracing filter and installs a fmt subscriber.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Ordered from most to least verbose; `Silent` suppresses everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
  Debug,
  #[default]
  Info,
  Warn,
  Error,
  Silent,
}

impl LogLevel {
  /// Pick a level from command-line flags. The last recognised flag wins.
  pub fn from_args<I, S>(args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    args.into_iter().fold(Self::Info, |level, arg| match arg.as_ref() {
      "--verbose" => Self::Debug,
      "--silent" => Self::Silent,
      _ => level,
    })
  }

  /// Filter directive for `EnvFilter`.
  pub fn filter(self) -> &'static str {
    match self {
      Self::Debug => "debug",
      Self::Info => "info",
      Self::Warn => "warn",
      Self::Error => "error",
      Self::Silent => "off",
    }
  }
}

/// Install the global subscriber. Returns `false` when one is already set.
pub fn init(level: LogLevel) -> bool {
  tracing_subscriber::registry()
    .with(EnvFilter::new(level.filter()))
    .with(tracing_subscriber::fmt::layer().with_target(false))
    .try_init()
    .is_ok()
}

/// Initialise from the current process arguments.
pub fn init_from_env_args() -> bool {
  init(LogLevel::from_args(std::env::args().skip(1)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_to_info() {
    assert_eq!(LogLevel::from_args(Vec::<String>::new()), LogLevel::Info);
    assert_eq!(LogLevel::from_args(["serve", "--port", "8080"]), LogLevel::Info);
  }

  #[test]
  fn flags_select_level() {
    assert_eq!(LogLevel::from_args(["--verbose"]), LogLevel::Debug);
    assert_eq!(LogLevel::from_args(["--silent"]), LogLevel::Silent);
  }

  #[test]
  fn last_flag_wins() {
    assert_eq!(LogLevel::from_args(["--verbose", "--silent"]), LogLevel::Silent);
    assert_eq!(LogLevel::from_args(["--silent", "--verbose"]), LogLevel::Debug);
  }

  #[test]
  fn levels_ordered_by_severity() {
    assert!(LogLevel::Debug < LogLevel::Info);
    assert!(LogLevel::Info < LogLevel::Warn);
    assert!(LogLevel::Warn < LogLevel::Error);
    assert!(LogLevel::Error < LogLevel::Silent);
  }

  #[test]
  fn filter_directives() {
    assert_eq!(LogLevel::Debug.filter(), "debug");
    assert_eq!(LogLevel::Warn.filter(), "warn");
    assert_eq!(LogLevel::Error.filter(), "error");
    assert_eq!(LogLevel::Silent.filter(), "off");
  }

  #[test]
  fn second_init_is_rejected() {
    // the first call may already have happened in another test on this binary
    let _ = init(LogLevel::Silent);
    assert!(!init(LogLevel::Debug));
  }
}
