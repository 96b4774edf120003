use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use std::time::Duration;
use once_cell::sync::Lazy;
use tracing::debug;
use crate::error::{AppError, Result};

/// How many of today's trending queries feed the slogan prompt.
pub const TOP_TREND_COUNT: usize = 5;

// Create a static client to reuse connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

#[derive(Deserialize)]
struct DailyTrendsFeed {
    #[serde(rename = "default")]
    feed: TrendingSearchesDays,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrendingSearchesDays {
    trending_searches_days: Vec<TrendingDay>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrendingDay {
    trending_searches: Vec<TrendingSearch>,
}

#[derive(Deserialize)]
struct TrendingSearch {
    title: TrendTitle,
}

#[derive(Deserialize)]
struct TrendTitle {
    query: String,
}

/// Fetches today's daily trending searches for the given region and returns
/// the top query strings, at most [`TOP_TREND_COUNT`] of them.
pub async fn fetch_trending_queries(base_url: &str, geo: &str) -> Result<Vec<String>> {
    let url = format!("{}/trends/api/dailytrends?hl=en-US&geo={}", base_url, geo);
    debug!("Fetching daily trends from {}", url);

    let response = CLIENT.get(&url).send().await?;
    let raw = response.text().await?;

    parse_daily_trends(&raw)
}

/// Parses the daily-trends feed body. The feed prefixes its JSON with an XSSI
/// guard (`)]}',`), so everything before the first `{` is discarded first.
fn parse_daily_trends(raw: &str) -> Result<Vec<String>> {
    let json_start = raw.find('{').ok_or_else(|| {
        AppError::FetchError("Trends feed contained no JSON payload".to_string())
    })?;

    let feed: DailyTrendsFeed = serde_json::from_str(&raw[json_start..])
        .map_err(|e| AppError::FetchError(format!("Could not parse trends feed: {}", e)))?;

    let queries = feed
        .feed
        .trending_searches_days
        .into_iter()
        .next()
        .map(|day| {
            day.trending_searches
                .into_iter()
                .take(TOP_TREND_COUNT)
                .map(|entry| entry.title.query)
                .collect()
        })
        .unwrap_or_default();

    Ok(queries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn feed_body(queries: &[&str]) -> String {
        let searches: Vec<String> = queries
            .iter()
            .map(|q| format!(r#"{{"title":{{"query":"{}"}}}}"#, q))
            .collect();
        format!(
            r#")]}}',
{{"default":{{"trendingSearchesDays":[{{"trendingSearches":[{}]}}]}}}}"#,
            searches.join(",")
        )
    }

    #[test]
    fn strips_xssi_prefix_and_extracts_queries() {
        let body = feed_body(&["Eclipse", "Playoffs", "Heatwave"]);
        let queries = parse_daily_trends(&body).unwrap();
        assert_eq!(queries, vec!["Eclipse", "Playoffs", "Heatwave"]);
    }

    #[test]
    fn takes_at_most_top_five() {
        let body = feed_body(&["a", "b", "c", "d", "e", "f", "g"]);
        let queries = parse_daily_trends(&body).unwrap();
        assert_eq!(queries.len(), TOP_TREND_COUNT);
        assert_eq!(queries, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn no_trending_days_yields_empty_list() {
        let body = r#")]}}',
{"default":{"trendingSearchesDays":[]}}"#;
        let queries = parse_daily_trends(body).unwrap();
        assert!(queries.is_empty());
    }

    #[test]
    fn non_json_body_is_a_fetch_error() {
        let err = parse_daily_trends("service unavailable").unwrap_err();
        assert!(err.to_string().contains("no JSON payload"));
    }
}
