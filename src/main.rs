use anyhow::Result;
use clap::{Parser, ValueEnum};
use egg_hunt::game::{EggLayout, GameConfig, GrowthPolicy, InputModel, TargetPolicy};
use egg_hunt::modes::HumanMode;

#[derive(Parser)]
#[command(name = "egg_hunt")]
#[command(version, about = "Gather the eggs and bring them home before the predator finds you")]
struct Cli {
    /// Grid width in pixels
    #[arg(long, default_value = "600")]
    width: i32,

    /// Grid height in pixels
    #[arg(long, default_value = "600")]
    height: i32,

    /// Tile edge length; all movement is in whole tiles
    #[arg(long, default_value = "50", value_parser = clap::value_parser!(i32).range(1..))]
    tile_size: i32,

    /// Number of eggs to scatter
    #[arg(long, default_value = "4")]
    eggs: usize,

    /// Snake tick interval in milliseconds
    #[arg(long, default_value = "250")]
    snake_interval: u64,

    /// Predator tick interval in milliseconds
    #[arg(long, default_value = "500")]
    predator_interval: u64,

    /// How directional keys steer the snake
    #[arg(long, value_enum, default_value = "last-key-wins")]
    input: InputArg,

    /// How the predator picks which egg to chase
    #[arg(long, value_enum, default_value = "nearest")]
    target: TargetArg,

    /// Whether the snake grows when it picks up an egg
    #[arg(long, value_enum, default_value = "constant")]
    growth: GrowthArg,

    /// Let the predator consume eggs it reaches
    #[arg(long)]
    predator_collects: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputArg {
    /// Latest directional key wins; reversals are rejected
    LastKeyWins,
    /// Arrow keys act as independent pressed flags
    Additive,
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetArg {
    /// Chase the egg nearest by Manhattan distance
    Nearest,
    /// Chase the oldest remaining egg
    First,
}

#[derive(Clone, Copy, ValueEnum)]
enum GrowthArg {
    /// The snake keeps its length on pickup
    Constant,
    /// The snake grows one segment per egg
    Grow,
}

impl Cli {
    fn into_config(self) -> GameConfig {
        GameConfig {
            eggs: EggLayout::Random { count: self.eggs },
            input_model: match self.input {
                InputArg::LastKeyWins => InputModel::LastKeyWins,
                InputArg::Additive => InputModel::Additive,
            },
            target_policy: match self.target {
                TargetArg::Nearest => TargetPolicy::NearestEgg,
                TargetArg::First => TargetPolicy::FirstEgg,
            },
            growth_policy: match self.growth {
                GrowthArg::Constant => GrowthPolicy::ConstantLength,
                GrowthArg::Grow => GrowthPolicy::GrowOnPickup,
            },
            predator_collects: self.predator_collects,
            snake_interval_ms: self.snake_interval,
            predator_interval_ms: self.predator_interval,
            ..GameConfig::sized(self.width, self.height, self.tile_size)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cli.into_config();
    config.validate()?;

    let mut mode = HumanMode::new(config);
    mode.run().await?;

    Ok(())
}
