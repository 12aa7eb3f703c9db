use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::core::FetchedArticle;
use crate::repo::StoredArticle;

/// Lookup sets built from recently stored articles.
///
/// A candidate survives only if its raw URL, its normalized title, and its
/// title-date composite all miss; any single hit excludes it. The composite
/// catches same-day re-publications that change neither wording nor day,
/// while the title set alone catches the same story syndicated under a
/// different URL.
pub(crate) struct DedupIndex {
    titles: HashSet<String>,
    urls: HashSet<String>,
    title_dates: HashSet<String>,
}

impl DedupIndex {
    pub(crate) fn new(existing: &[StoredArticle]) -> Self {
        let mut titles = HashSet::with_capacity(existing.len());
        let mut urls = HashSet::with_capacity(existing.len());
        let mut title_dates = HashSet::with_capacity(existing.len());

        for article in existing {
            let normalized = normalize_title(&article.title);
            title_dates.insert(composite_key(&normalized, article.date));
            titles.insert(normalized);
            urls.insert(article.url.clone());
        }

        Self {
            titles,
            urls,
            title_dates,
        }
    }

    pub(crate) fn is_new(&self, candidate: &FetchedArticle) -> bool {
        let normalized = normalize_title(&candidate.title);
        !self.urls.contains(&candidate.url)
            && !self.titles.contains(&normalized)
            && !self
                .title_dates
                .contains(&composite_key(&normalized, candidate.published_at))
    }
}

fn normalize_title(title: &str) -> String {
    title.to_lowercase().trim().to_string()
}

/// Date truncated to the calendar day (UTC).
fn composite_key(normalized_title: &str, date: DateTime<Utc>) -> String {
    format!("{normalized_title}-{}", date.date_naive())
}
