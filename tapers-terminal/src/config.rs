use anyhow::{Context, bail};
use tapers_core::WindowSpec;

pub const USAGE: &str = "usage: tapers-terminal [window] [length] [--symmetric] [--precision N]

  window       hann, kaiser,14, general_gaussian,1.5,7 or a bare kaiser beta like 8.6
  length       number of samples
  --symmetric  symmetric window for filter design. the default is periodic for spectral analysis
  --precision  decimals to print";

#[derive(Debug, PartialEq)]
pub struct Config {
    pub window: WindowSpec,
    pub length: usize,
    /// false for filter design
    pub periodic: bool,
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowSpec::Name("hann".to_string()),
            length: 64,
            periodic: true,
            precision: 8,
        }
    }
}

impl Config {
    /// `args` should not include the program name.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();

        let mut args = args.into_iter();

        let mut positional = 0;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--symmetric" | "-s" => config.periodic = false,
                "--precision" | "-p" => {
                    let value = args.next().context("--precision needs a value")?;

                    config.precision = value
                        .parse()
                        .with_context(|| format!("invalid precision: {value}"))?;
                }
                flag if flag.starts_with("--") => bail!("unknown flag: {flag}\n\n{USAGE}"),
                _ => {
                    match positional {
                        0 => config.window = arg.parse()?,
                        1 => {
                            config.length = arg
                                .parse()
                                .with_context(|| format!("invalid length: {arg}"))?
                        }
                        _ => bail!("unexpected argument: {arg}\n\n{USAGE}"),
                    }

                    positional += 1;
                }
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(x: &[&str]) -> Vec<String> {
        x.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Config::from_args(args(&[])).unwrap(), Config::default());
    }

    #[test]
    fn test_all_args() {
        let config =
            Config::from_args(args(&["kaiser,14", "12", "--symmetric", "--precision", "3"]))
                .unwrap();

        assert_eq!(
            config,
            Config {
                window: WindowSpec::WithParams("kaiser".to_string(), vec![14.0]),
                length: 12,
                periodic: false,
                precision: 3,
            }
        );
    }

    #[test]
    fn test_bare_beta() {
        let config = Config::from_args(args(&["-s", "8.6"])).unwrap();

        assert_eq!(config.window, WindowSpec::KaiserBeta(8.6));
        assert!(!config.periodic);
        assert_eq!(config.length, 64);
    }

    #[test]
    fn test_bad_args() {
        assert!(Config::from_args(args(&["hann", "ten"])).is_err());
        assert!(Config::from_args(args(&["hann", "10", "extra"])).is_err());
        assert!(Config::from_args(args(&["kaiser,beta"])).is_err());
        assert!(Config::from_args(args(&["--precision"])).is_err());
        assert!(Config::from_args(args(&["--periodic"])).is_err());
    }
}
