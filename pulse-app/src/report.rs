//! Console rendering for search results.

use pulse_social::twitter::Tweet;

/// One output line per result record, in provider order.
pub fn tweet_lines(tweets: &[Tweet]) -> Vec<String> {
    tweets.iter().map(|t| format!("Tweet: {}", t.text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweet(id: &str, text: &str) -> Tweet {
        Tweet {
            id: id.into(),
            text: text.into(),
            author_id: None,
            lang: None,
            created_at: None,
            public_metrics: None,
        }
    }

    #[test]
    fn renders_one_line_per_tweet() {
        let tweets = vec![tweet("1", "a"), tweet("2", "b")];
        assert_eq!(tweet_lines(&tweets), vec!["Tweet: a", "Tweet: b"]);
    }

    #[test]
    fn empty_result_set_renders_nothing() {
        assert!(tweet_lines(&[]).is_empty());
    }
}
