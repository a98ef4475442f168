//! Query parameter types for the franchise endpoints.
//!
//! Every field is optional at the deserialization step; bounds and
//! defaults are applied by the `into_*` conversions via
//! [`kfranchise_core::franchise`], so violations surface as
//! `VALIDATION_ERROR` before any connection is acquired.

use kfranchise_core::error::CoreError;
use kfranchise_core::franchise::{validate_limit, validate_search_query, validate_skip};
use kfranchise_core::types::DbId;
use kfranchise_db::models::franchise::{FranchiseListFilter, FranchiseSearch};
use serde::Deserialize;

/// Offset pagination (`?skip=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    /// Validate bounds and fix the category filter.
    pub fn into_filter(self, category_id: Option<DbId>) -> Result<FranchiseListFilter, CoreError> {
        Ok(FranchiseListFilter {
            skip: validate_skip(self.skip)?,
            limit: validate_limit(self.limit)?,
            category_id,
        })
    }
}

/// Parameters for `GET /api/franchises`.
#[derive(Debug, Default, Deserialize)]
pub struct FranchiseListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub category_id: Option<DbId>,
}

impl FranchiseListParams {
    pub fn into_filter(self) -> Result<FranchiseListFilter, CoreError> {
        PaginationParams {
            skip: self.skip,
            limit: self.limit,
        }
        .into_filter(self.category_id)
    }
}

/// Parameters for `GET /api/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category_id: Option<DbId>,
    pub limit: Option<i64>,
}

impl SearchParams {
    pub fn into_search(self) -> Result<FranchiseSearch, CoreError> {
        let query = validate_search_query(self.q.as_deref())?.to_string();
        Ok(FranchiseSearch {
            query,
            category_id: self.category_id,
            limit: validate_limit(self.limit)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_defaults_to_first_hundred_rows() {
        let filter = FranchiseListParams::default().into_filter().unwrap();
        assert_eq!(
            filter,
            FranchiseListFilter {
                skip: 0,
                limit: 100,
                category_id: None,
            }
        );
    }

    #[test]
    fn pagination_keeps_the_fixed_category() {
        let params = PaginationParams {
            skip: Some(20),
            limit: Some(10),
        };
        let filter = params.into_filter(Some(4)).unwrap();
        assert_eq!(filter.category_id, Some(4));
        assert_eq!(filter.skip, 20);
        assert_eq!(filter.limit, 10);
    }

    #[test]
    fn out_of_range_limit_is_rejected_not_clamped() {
        let params = FranchiseListParams {
            limit: Some(1001),
            ..Default::default()
        };
        assert!(matches!(
            params.into_filter(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn search_trims_query_and_validates_limit() {
        let search = SearchParams {
            q: Some("  brew  ".to_string()),
            category_id: Some(1),
            limit: None,
        }
        .into_search()
        .unwrap();
        assert_eq!(search.query, "brew");
        assert_eq!(search.limit, 100);

        let blank = SearchParams {
            q: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(blank.into_search().is_err());
    }
}
