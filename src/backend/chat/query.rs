/**
 * Message Query Engine
 *
 * Filters and paginates a snapshot of the message log.
 *
 * # Filtering
 *
 * - `user` matches when the message's user contains the filter,
 *   case-insensitively
 * - `message` matches the same way against the message body
 * - An absent or empty filter matches everything; active filters are ANDed
 *
 * # Pagination
 *
 * Pages are 1-based. The page at `page` is the slice of the filtered matches
 * starting at `(page - 1) * limit`, at most `limit` long. Matches keep the
 * log's append order.
 */
use serde::Serialize;

use crate::shared::{Message, SharedError};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Substring filters applied to a query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub user: Option<String>,
    pub body: Option<String>,
}

impl FilterCriteria {
    pub fn new(user: Option<String>, body: Option<String>) -> Self {
        Self { user, body }
    }

    /// Whether `message` passes every active filter
    pub fn matches(&self, message: &Message) -> bool {
        contains_folded(&message.user, self.user.as_deref())
            && contains_folded(&message.body, self.body.as_deref())
    }
}

fn contains_folded(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None | Some("") => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

/// Requested page and page size, not yet validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: i64,
    pub limit: i64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PaginationParams {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// Parse raw query-string values
    ///
    /// Absent or empty values fall back to the defaults. Anything that is
    /// not an integer is rejected the same way as an out-of-range value.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Result<Self, SharedError> {
        let page = parse_or_default(page, DEFAULT_PAGE, "page")?;
        let limit = parse_or_default(limit, DEFAULT_LIMIT, "limit")?;
        Ok(Self { page, limit })
    }

    fn validate(&self) -> Result<(), SharedError> {
        if self.page < 1 || self.limit < 1 {
            return Err(SharedError::invalid_pagination(format!(
                "page={}, limit={}",
                self.page, self.limit
            )));
        }
        Ok(())
    }
}

fn parse_or_default(raw: Option<&str>, default: i64, name: &str) -> Result<i64, SharedError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<i64>()
            .map_err(|_| SharedError::invalid_pagination(format!("{name}={value:?} is not an integer"))),
    }
}

/// Pagination metadata returned alongside a page
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Number of messages in this page
    pub count: usize,
    /// Number of filtered matches
    pub total: usize,
    pub page: i64,
    pub limit: i64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QueryPage {
    pub data: Vec<Message>,
    pub pagination: Pagination,
}

/// Filter and paginate `messages`
///
/// # Errors
///
/// `SharedError::InvalidPagination` if `page` or `limit` is below 1. No
/// filtering is done in that case.
pub fn query(
    messages: &[Message],
    filter: &FilterCriteria,
    params: PaginationParams,
) -> Result<QueryPage, SharedError> {
    params.validate()?;

    let matches: Vec<&Message> = messages.iter().filter(|m| filter.matches(m)).collect();
    let total = matches.len();

    // Both are >= 1 after validation.
    let page = params.page as u64;
    let limit = params.limit as u64;
    let total_pages = (total as u64).div_ceil(limit);

    let offset = (page - 1)
        .checked_mul(limit)
        .and_then(|o| usize::try_from(o).ok())
        .unwrap_or(usize::MAX);
    let take = usize::try_from(limit).unwrap_or(usize::MAX);

    let data: Vec<Message> = matches
        .into_iter()
        .skip(offset)
        .take(take)
        .cloned()
        .collect();

    Ok(QueryPage {
        pagination: Pagination {
            count: data.len(),
            total,
            page: params.page,
            limit: params.limit,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        },
        data,
    })
}
