use paths_core::DEFAULT_SEED;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u32),
    Default(u32),
}

impl SeedChoice {
    pub fn value(self) -> u32 {
        match self {
            Self::Cli(seed) | Self::Default(seed) => seed,
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
        None => SeedChoice::Default(DEFAULT_SEED),
    })
}

fn parse_seed_value(raw_value: &str) -> Result<u32, String> {
    raw_value
        .parse::<u32>()
        .map_err(|_| format!("seed value '{raw_value}' must be a number between 0 and {}", u32::MAX))
}
