use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use colored::Colorize;

use crate::args::CommonOptions;
use crate::{emitln, Command};

#[derive(Parser, Debug, Clone)]
pub struct WhoAmI {
    #[arg(long)]
    /// Reveal the configured API token
    show_api_token: bool,
}

#[async_trait]
impl Command for WhoAmI {
    async fn run<
        A: tokio::io::AsyncWrite + Send + Sync + Unpin,
        B: tokio::io::AsyncWrite + Send + Sync + Unpin,
    >(
        &self,
        out: &mut tokio::io::BufWriter<A>,
        _err: &mut tokio::io::BufWriter<B>,
        common_options: &CommonOptions,
    ) -> Result<()> {
        emitln!(
            out,
            "Deel API: {}",
            common_options.base_url().to_string().green()
        );
        let token = if self.show_api_token {
            common_options.api_token.clone()
        } else {
            mask(&common_options.api_token)
        };
        emitln!(out, "API Token: {}", token.yellow());

        Ok(())
    }
}

/// Keeps the last four characters of a secret visible.
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}

#[cfg(test)]
mod tests {
    use super::mask;

    #[test]
    fn masks_all_but_last_four() {
        assert_eq!(mask("tok_abcd1234"), "********1234");
        assert_eq!(mask("abc"), "***");
        assert_eq!(mask(""), "");
    }
}
