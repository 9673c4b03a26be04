/// Seed used when none is given on the command line, so a plain launch always
/// opens on the same board.
pub const DEFAULT_SEED: u64 = 0xBEAD_1234;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Default,
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) => seed,
            Self::Default => DEFAULT_SEED,
        }
    }
}

pub fn resolve_seed_from_args(args: &[String]) -> Result<SeedChoice, String> {
    let mut selected_seed = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();

        if argument == "--seed" {
            let Some(value) = args.get(index + 1) else {
                return Err("missing value for --seed".to_string());
            };
            if selected_seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            selected_seed = Some(parse_seed_value(value)?);
            index += 2;
            continue;
        }

        if let Some(value) = argument.strip_prefix("--seed=") {
            if selected_seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            selected_seed = Some(parse_seed_value(value)?);
        }
        index += 1;
    }

    Ok(match selected_seed {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Default,
    })
}

/// Accepts decimal or `0x`-prefixed hexadecimal.
fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    let parsed = match raw_value.strip_prefix("0x").or_else(|| raw_value.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => raw_value.parse::<u64>(),
    };
    parsed.map_err(|_| format!("seed value '{raw_value}' must be a number"))
}
