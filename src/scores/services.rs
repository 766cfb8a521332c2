use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::scores::{dto::ScoreQuery, repo_types::ScoreRecord};
use crate::state::AppState;

pub const PAGE_SIZE: usize = 20;

/// Store a validated score. `caller` is the handle from the session token.
pub async fn submit(state: &AppState, caller: &str, record: ScoreRecord) -> AppResult<()> {
    if !caller.eq_ignore_ascii_case(&record.user_handle) {
        // Not rejected: any authenticated user may post for any handle.
        warn!(caller = %caller, user_handle = %record.user_handle, "score posted for another handle");
    }
    info!(
        level = %record.level,
        user_handle = %record.user_handle,
        score = %record.score,
        "high score posted"
    );
    state.scores.add(record).await;
    Ok(())
}

/// One page of a level's leaderboard, best score first.
pub async fn query(state: &AppState, q: ScoreQuery) -> AppResult<Vec<ScoreRecord>> {
    let level = q
        .level
        .filter(|l| !l.is_empty())
        .ok_or_else(|| AppError::validation("Level query parameter is required"))?;

    let mut matches = state.scores.by_level(&level).await;
    // Stable: equal scores stay in submission order.
    matches.sort_by(|a, b| b.value().total_cmp(&a.value()));

    Ok(paginate(matches, parse_page(q.page.as_deref())))
}

/// `None` for anything that is not an integer >= 1; a missing page means 1.
fn parse_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        None => Some(1),
        Some(s) => s.trim().parse::<usize>().ok().filter(|p| *p >= 1),
    }
}

fn paginate<T>(items: Vec<T>, page: Option<usize>) -> Vec<T> {
    let Some(page) = page else {
        return Vec::new();
    };
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    items.into_iter().skip(start).take(PAGE_SIZE).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(level: &str, handle: &str, score: u64) -> ScoreRecord {
        ScoreRecord {
            level: level.into(),
            user_handle: handle.into(),
            score: score.into(),
            timestamp: "t".into(),
        }
    }

    fn query_for(level: Option<&str>, page: Option<&str>) -> ScoreQuery {
        ScoreQuery {
            level: level.map(Into::into),
            page: page.map(Into::into),
        }
    }

    #[test]
    fn parse_page_defaults_and_rejects_garbage() {
        assert_eq!(parse_page(None), Some(1));
        assert_eq!(parse_page(Some("3")), Some(3));
        assert_eq!(parse_page(Some("0")), None);
        assert_eq!(parse_page(Some("-1")), None);
        assert_eq!(parse_page(Some("abc")), None);
    }

    #[test]
    fn paginate_slices_twenty_per_page() {
        let items: Vec<usize> = (0..45).collect();
        assert_eq!(paginate(items.clone(), Some(1)), (0..20).collect::<Vec<_>>());
        assert_eq!(paginate(items.clone(), Some(2)), (20..40).collect::<Vec<_>>());
        assert_eq!(paginate(items.clone(), Some(3)), (40..45).collect::<Vec<_>>());
        assert!(paginate(items.clone(), Some(4)).is_empty());
        assert!(paginate(items.clone(), Some(usize::MAX)).is_empty());
        assert!(paginate(items, None).is_empty());
    }

    #[tokio::test]
    async fn query_requires_level() {
        let state = AppState::fake();
        for q in [query_for(None, None), query_for(Some(""), Some("1"))] {
            let err = query(&state, q).await.unwrap_err();
            assert_eq!(err.to_string(), "Level query parameter is required");
        }
    }

    #[tokio::test]
    async fn query_filters_and_sorts_descending_with_stable_ties() {
        let state = AppState::fake();
        for (level, handle, score) in [
            ("1", "low", 5),
            ("2", "other", 999),
            ("1", "tie-first", 50),
            ("1", "top", 80),
            ("1", "tie-second", 50),
        ] {
            submit(&state, handle, record(level, handle, score)).await.unwrap();
        }

        let page = query(&state, query_for(Some("1"), None)).await.unwrap();
        let handles: Vec<_> = page.iter().map(|r| r.user_handle.as_str()).collect();
        assert_eq!(handles, ["top", "tie-first", "tie-second", "low"]);
        assert!(page.iter().all(|r| r.level == "1"));
    }

    #[tokio::test]
    async fn query_second_page_returns_ranks_twenty_to_forty() {
        let state = AppState::fake();
        for score in 1..=45u64 {
            submit(&state, "alice1", record("1", "alice1", score)).await.unwrap();
        }

        let second = query(&state, query_for(Some("1"), Some("2"))).await.unwrap();
        let scores: Vec<u64> = second.iter().filter_map(|r| r.score.as_u64()).collect();
        assert_eq!(scores, (6..=25).rev().collect::<Vec<_>>());

        let beyond = query(&state, query_for(Some("1"), Some("9"))).await.unwrap();
        assert!(beyond.is_empty());
    }

    #[tokio::test]
    async fn submit_accepts_foreign_handle() {
        let state = AppState::fake();
        submit(&state, "alice1", record("1", "mallory", 10)).await.unwrap();
        assert_eq!(state.scores.len().await, 1);
    }
}
