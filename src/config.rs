//! Runtime settings read from the environment
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `GOMOKU_DEPTH` | plies the smart AI searches | 3 |
//! | `GOMOKU_AI_DELAY_MS` | pause before each automated move | 100 |
//! | `GOMOKU_FIRST` | who moves first, `X` or `O` | X |

use std::time::Duration;

use crate::board::Player;
use crate::error::GameError;

/// Search depth of the smart AI
pub const DEFAULT_SMART_DEPTH: u32 = 3;
/// Pause before every automated move, in milliseconds
pub const DEFAULT_AI_DELAY_MS: u64 = 100;

pub const ENV_DEPTH: &str = "GOMOKU_DEPTH";
pub const ENV_AI_DELAY: &str = "GOMOKU_AI_DELAY_MS";
pub const ENV_FIRST: &str = "GOMOKU_FIRST";

/// Settings shared by both front ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub smart_depth: u32,
    pub ai_delay: Duration,
    pub first_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            smart_depth: DEFAULT_SMART_DEPTH,
            ai_delay: Duration::from_millis(DEFAULT_AI_DELAY_MS),
            first_player: Player::X,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by whatever `GOMOKU_*` variables are set.
    pub fn from_env() -> Result<Self, GameError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`GameConfig::from_env`] but reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GameError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_DEPTH) {
            let depth = parse_number(ENV_DEPTH, &value)?;
            let depth = u32::try_from(depth).map_err(|_| GameError::Config {
                key: ENV_DEPTH,
                value: value.clone(),
                reason: "too large".to_string(),
            })?;
            if depth == 0 {
                return Err(GameError::InvalidDepth(depth));
            }
            config.smart_depth = depth;
        }

        if let Some(value) = lookup(ENV_AI_DELAY) {
            config.ai_delay = Duration::from_millis(parse_number(ENV_AI_DELAY, &value)?);
        }

        if let Some(value) = lookup(ENV_FIRST) {
            config.first_player = match value.trim() {
                "X" | "x" => Player::X,
                "O" | "o" => Player::O,
                _ => {
                    return Err(GameError::Config {
                        key: ENV_FIRST,
                        value,
                        reason: "expected X or O".to_string(),
                    })
                }
            };
        }

        Ok(config)
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<u64, GameError> {
    value.trim().parse::<u64>().map_err(|e| GameError::Config {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
