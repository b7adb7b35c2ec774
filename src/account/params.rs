//! Parses the path and query string parameters of the account endpoints.
//!
//! Query parameters are extracted as strings and parsed here so that bad
//! input produces the same JSON validation error as every other failure.

use serde::Deserialize;

use crate::{
    Error,
    account::{
        AccountId,
        query::{Column, Direction},
    },
};

const DEFAULT_LIMIT: u64 = 10;
const DEFAULT_OFFSET: u64 = 0;
const DEFAULT_MIN_ID: AccountId = 0;
const DEFAULT_MAX_ID: AccountId = 100;
const DEFAULT_THRESHOLD_ID: AccountId = 0;

/// Parse an account ID taken from the request path or query string.
///
/// # Errors
/// Returns [Error::Validation] naming `parameter` if `value` is not an integer.
pub fn parse_account_id(parameter: &str, value: &str) -> Result<AccountId, Error> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Validation(format!("{parameter} must be an integer, got \"{value}\"")))
}

fn parse_optional_id(
    parameter: &str,
    value: Option<&str>,
    default: AccountId,
) -> Result<AccountId, Error> {
    match value {
        Some(value) => parse_account_id(parameter, value),
        None => Ok(default),
    }
}

fn parse_count(parameter: &str, value: Option<&str>, default: u64) -> Result<u64, Error> {
    match value {
        Some(value) => value.trim().parse().map_err(|_| {
            Error::Validation(format!(
                "{parameter} must be a non-negative integer, got \"{value}\""
            ))
        }),
        None => Ok(default),
    }
}

/// The query string for a page of accounts.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    limit: Option<String>,
    offset: Option<String>,
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

impl TryFrom<PageQuery> for Page {
    type Error = Error;

    fn try_from(query: PageQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            limit: parse_count("limit", query.limit.as_deref(), DEFAULT_LIMIT)?,
            offset: parse_count("offset", query.offset.as_deref(), DEFAULT_OFFSET)?,
        })
    }
}

/// The query string for filtering accounts by ID or name.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    id: Option<String>,
    name: Option<String>,
}

/// A validated ID-or-name filter. At least one of the fields is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyFilter {
    pub id: Option<AccountId>,
    pub name: Option<String>,
}

impl TryFrom<FilterQuery> for AnyFilter {
    type Error = Error;

    fn try_from(query: FilterQuery) -> Result<Self, Self::Error> {
        let id = query
            .id
            .as_deref()
            .map(|id| parse_account_id("id", id))
            .transpose()?;

        if id.is_none() && query.name.is_none() {
            return Err(Error::Validation(
                "at least one of the query parameters id or name is required".to_owned(),
            ));
        }

        Ok(Self {
            id,
            name: query.name,
        })
    }
}

/// The fields that accounts may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Id,
    #[default]
    Name,
}

impl SortField {
    fn parse(value: &str) -> Result<Self, Error> {
        match value {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            other => Err(Error::Validation(format!(
                "field must be one of \"id\" or \"name\", got \"{other}\""
            ))),
        }
    }

    pub fn column(self) -> Column {
        match self {
            SortField::Id => Column::Id,
            SortField::Name => Column::Name,
        }
    }
}

fn parse_direction(value: &str) -> Result<Direction, Error> {
    match value {
        "asc" => Ok(Direction::Ascending),
        "desc" => Ok(Direction::Descending),
        other => Err(Error::Validation(format!(
            "order must be one of \"asc\" or \"desc\", got \"{other}\""
        ))),
    }
}

/// The query string for sorting accounts.
#[derive(Debug, Default, Deserialize)]
pub struct SortQuery {
    field: Option<String>,
    order: Option<String>,
}

/// A validated sort request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: Direction,
}

impl TryFrom<SortQuery> for Sort {
    type Error = Error;

    fn try_from(query: SortQuery) -> Result<Self, Self::Error> {
        let field = match query.field.as_deref() {
            Some(field) => SortField::parse(field)?,
            None => SortField::default(),
        };
        let direction = match query.order.as_deref() {
            Some(order) => parse_direction(order)?,
            None => Direction::default(),
        };

        Ok(Self { field, direction })
    }
}

/// The query string for an exclusive range of account IDs.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    #[serde(rename = "minId")]
    min_id: Option<String>,
    #[serde(rename = "maxId")]
    max_id: Option<String>,
}

/// A validated ID range, both ends are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub min_id: AccountId,
    pub max_id: AccountId,
}

impl TryFrom<RangeQuery> for IdRange {
    type Error = Error;

    fn try_from(query: RangeQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            min_id: parse_optional_id("minId", query.min_id.as_deref(), DEFAULT_MIN_ID)?,
            max_id: parse_optional_id("maxId", query.max_id.as_deref(), DEFAULT_MAX_ID)?,
        })
    }
}

/// The query string for searching accounts by partial name above an ID.
#[derive(Debug, Default, Deserialize)]
pub struct ComplexFilterQuery {
    name: Option<String>,
    id: Option<String>,
}

/// A validated partial-name and minimum-ID search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexFilter {
    pub name: String,
    pub id: AccountId,
}

impl TryFrom<ComplexFilterQuery> for ComplexFilter {
    type Error = Error;

    fn try_from(query: ComplexFilterQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            name: query.name.unwrap_or_default(),
            id: parse_optional_id("id", query.id.as_deref(), DEFAULT_THRESHOLD_ID)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, account::query::Direction};

    use super::{
        AnyFilter, ComplexFilter, ComplexFilterQuery, FilterQuery, IdRange, Page, PageQuery,
        RangeQuery, Sort, SortField, SortQuery, parse_account_id,
    };

    #[test]
    fn page_defaults() {
        let page = Page::try_from(PageQuery::default()).unwrap();

        assert_eq!(
            page,
            Page {
                limit: 10,
                offset: 0
            }
        );
    }

    #[test]
    fn page_rejects_negative_limit() {
        let result = Page::try_from(PageQuery {
            limit: Some("-1".to_owned()),
            offset: None,
        });

        assert!(matches!(result, Err(Error::Validation(_))), "got {result:?}");
    }

    #[test]
    fn page_rejects_non_numeric_offset() {
        let result = Page::try_from(PageQuery {
            limit: None,
            offset: Some("ten".to_owned()),
        });

        assert!(matches!(result, Err(Error::Validation(_))), "got {result:?}");
    }

    #[test]
    fn account_id_must_be_integer() {
        assert_eq!(parse_account_id("id", "42"), Ok(42));
        assert!(matches!(
            parse_account_id("id", "abc"),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn filter_requires_id_or_name() {
        let result = AnyFilter::try_from(FilterQuery::default());

        assert!(matches!(result, Err(Error::Validation(_))), "got {result:?}");
    }

    #[test]
    fn filter_keeps_only_given_fields() {
        let filter = AnyFilter::try_from(FilterQuery {
            id: None,
            name: Some("Cash".to_owned()),
        })
        .unwrap();

        assert_eq!(
            filter,
            AnyFilter {
                id: None,
                name: Some("Cash".to_owned())
            }
        );
    }

    #[test]
    fn sort_defaults_to_name_ascending() {
        let sort = Sort::try_from(SortQuery::default()).unwrap();

        assert_eq!(
            sort,
            Sort {
                field: SortField::Name,
                direction: Direction::Ascending
            }
        );
    }

    #[test]
    fn sort_rejects_unknown_field() {
        let result = Sort::try_from(SortQuery {
            field: Some("balance".to_owned()),
            order: None,
        });

        assert!(matches!(result, Err(Error::Validation(_))), "got {result:?}");
    }

    #[test]
    fn sort_rejects_unknown_order() {
        let result = Sort::try_from(SortQuery {
            field: Some("id".to_owned()),
            order: Some("sideways".to_owned()),
        });

        assert!(matches!(result, Err(Error::Validation(_))), "got {result:?}");
    }

    #[test]
    fn range_defaults() {
        let range = IdRange::try_from(RangeQuery::default()).unwrap();

        assert_eq!(
            range,
            IdRange {
                min_id: 0,
                max_id: 100
            }
        );
    }

    #[test]
    fn complex_filter_defaults() {
        let filter = ComplexFilter::try_from(ComplexFilterQuery::default()).unwrap();

        assert_eq!(
            filter,
            ComplexFilter {
                name: String::new(),
                id: 0
            }
        );
    }
}
