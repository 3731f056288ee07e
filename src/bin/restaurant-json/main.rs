use anyhow::Context;
use restaurant_bridge::{Escaping, Restaurant, RestaurantJsonEncoder};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

const USAGE: &str = "Usage: restaurant-json [--legacy] [PATH]\n\nReads a restaurant JSON object from PATH (or stdin) and prints its canonical encoding.";

#[derive(Debug, PartialEq)]
enum Action {
    Help,
    Encode {
        escaping: Escaping,
        path: Option<String>,
    },
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Action> {
    let mut escaping = Escaping::Standard;
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Action::Help),
            "--legacy" => escaping = Escaping::Legacy,
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag `{flag}`\n\n{USAGE}"),
            other => {
                if path.is_some() {
                    anyhow::bail!("unexpected argument `{other}`\n\n{USAGE}");
                }
                path = Some(other.to_string());
            }
        }
    }

    Ok(Action::Encode { escaping, path })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the JSON, logs go to stderr
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("fail to setup logging")?;

    let (escaping, path) = match parse_args(std::env::args().skip(1))? {
        Action::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Action::Encode { escaping, path } => (escaping, path),
    };

    let payload = match &path {
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("fail to read {path}"))?,
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("fail to read stdin")?;
            buf
        }
    };

    let restaurant = Restaurant::from_slice(&payload)?;
    let json = RestaurantJsonEncoder::new(escaping).encode(&restaurant);

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(json.as_bytes())
        .await
        .context("fail to write stdout")?;
    stdout.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(
            parse_args(args(&[])).unwrap(),
            Action::Encode {
                escaping: Escaping::Standard,
                path: None
            }
        );
        assert_eq!(
            parse_args(args(&["--legacy", "cafe.json"])).unwrap(),
            Action::Encode {
                escaping: Escaping::Legacy,
                path: Some("cafe.json".to_string())
            }
        );
        assert_eq!(parse_args(args(&["a.json", "--help"])).unwrap(), Action::Help);
        assert!(parse_args(args(&["a.json", "b.json"])).is_err());
        assert!(parse_args(args(&["--pretty"])).is_err());
    }
}
