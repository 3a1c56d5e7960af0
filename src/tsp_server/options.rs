use clap::Parser;
use crate::prelude::*;

#[derive(Clone, Debug, Parser)]
#[command(about = "Plays 2048 over a line-oriented text protocol on stdin and stdout")]
pub struct TSPServerOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    #[arg(short, long, default_value_t = MAX_PIECE)]
    pub max_piece: u32,

    #[arg(long, env = "TWENTY48_SEED")]
    pub seed: Option<u64>,

    #[arg(long)]
    pub four_chance: Option<f64>,

    #[arg(long)]
    pub start_tiles: Option<usize>,

    #[arg(long, default_value_t = false)]
    pub no_spawn: bool,
}

impl TSPServerOptions {
    pub fn session_config(&self) -> SessionConfig {
        let rules = RulesConfig::new()
            .with_size(self.size)
            .with_max_piece(self.max_piece);
        let mut config = SessionConfig::default().with_rules(rules);

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(four_chance) = self.four_chance {
            config = config.with_four_chance(four_chance);
        }
        if let Some(start_tiles) = self.start_tiles {
            config = config.with_start_tiles(start_tiles);
        }
        if self.no_spawn {
            config = config.without_spawning();
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_reach_the_session_config() {
        let options = TSPServerOptions::parse_from([
            "twenty48", "--size", "5", "--max-piece", "512", "--seed", "11", "--four-chance", "0.25", "--no-spawn",
        ]);
        let config = options.session_config();
        assert_eq!(config.rules, RulesConfig { size: 5, max_piece: 512 });
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.four_chance, 0.25);
        assert!(!config.spawn);
        assert_eq!(config.start_tiles, 2);
    }
}
