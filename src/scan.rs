use std::str::FromStr;
use tracing::info;
use crate::api::models::ScanResult;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::{llm, trends};

/// Record count the simulated prompt asks the model to synthesize.
pub const SIMULATED_TREND_COUNT: usize = 8;

/// How a scan sources its trend keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanStrategy {
    /// Fetch real trending queries, then ask the model for one slogan each.
    LiveTrends,
    /// Ask the model to simulate trend research and slogans in a single call.
    Simulated,
}

impl FromStr for ScanStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "live" => Ok(ScanStrategy::LiveTrends),
            "simulated" => Ok(ScanStrategy::Simulated),
            other => Err(AppError::ConfigError(format!(
                "Unknown scan strategy '{}' (expected 'live' or 'simulated')",
                other
            ))),
        }
    }
}

pub fn build_slogan_prompt(keywords: &[String]) -> String {
    let mut result = String::with_capacity(600 + keywords.iter().map(|k| k.len() + 3).sum::<usize>());
    result.push_str(
        "You are a creative copywriter for a t-shirt company. Given the following list of \
         verified, real-time trending topics from Google Trends, generate one creative, witty, \
         or funny t-shirt slogan for each topic.\n\nTrending Topics:\n",
    );
    for keyword in keywords {
        result.push_str("- ");
        result.push_str(keyword);
        result.push('\n');
    }
    result.push_str(
        "\nFor each slogan, provide the slogan, the original keyword it's related to, a \
         plausible search volume, a competition level ('low', 'medium', or 'high'), and set \
         the source to \"Live Google Trend\". The 'startedTrending' value should be \"Today\".",
    );
    result
}

pub const SIMULATED_PROMPT: &str = "You are a market research analyst for a t-shirt company. \
Simulate three trend analyses: a Google Trends search-spike scan, an Amazon new-release style \
scan, and a viral TikTok sound scan. Synthesize your findings into 8 t-shirt slogan ideas. \
For each idea, provide the slogan, the keyword it's related to, a plausible search volume, a \
competition level ('low', 'medium', or 'high'), a short description of when it started \
trending, and set the source to one of \"Google Trends Spike\", \"Amazon New Release Style\", \
or \"Viral TikTok Sound\".";

/// Runs one scan: resolve the prompt for the configured strategy, then ask the
/// completion endpoint for the slogan records. Strictly sequential, no retries.
pub async fn run_scan(config: &Config) -> Result<ScanResult> {
    let prompt = match config.strategy {
        ScanStrategy::LiveTrends => {
            info!("Fetching real-time data from Google Trends");
            let keywords =
                trends::fetch_trending_queries(&config.trends_base_url, &config.trends_geo).await?;
            if keywords.is_empty() {
                return Err(AppError::UpstreamEmpty);
            }
            info!("Verified trending topics: {:?}", keywords);
            build_slogan_prompt(&keywords)
        }
        ScanStrategy::Simulated => SIMULATED_PROMPT.to_string(),
    };

    info!("Sending prompt to AI for slogan generation");
    llm::generate_trends(&config.gemini_api_key, &config.gemini_base_url, &prompt).await
}
