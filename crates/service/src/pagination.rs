//! Optional page windows for the list endpoints.
//!
//! Without `page`/`per_page` a list returns every row; with either one the
//! window is clamped to `1..=MAX_PER_PAGE` rows.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QuerySelect, Select};

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based; 0 is read as 1.
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    /// `None` when the caller asked for neither bound.
    pub fn from_query(page: Option<u32>, per_page: Option<u32>) -> Option<Self> {
        if page.is_none() && per_page.is_none() {
            return None;
        }
        Some(Self { page: page.unwrap_or(1), per_page: per_page.unwrap_or(DEFAULT_PER_PAGE) })
    }

    pub fn limit(self) -> u64 { u64::from(self.per_page.clamp(1, MAX_PER_PAGE)) }

    pub fn offset(self) -> u64 { u64::from(self.page.max(1) - 1) * self.limit() }
}

/// Run `select` over the requested window, or over everything.
pub async fn fetch<E, C>(db: &C, select: Select<E>, page: Option<Pagination>) -> Result<Vec<E::Model>, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    match page {
        Some(p) => select.offset(p.offset()).limit(p.limit()).all(db).await,
        None => select.all(db).await,
    }
}

#[cfg(test)]
mod tests {
    use super::{Pagination, DEFAULT_PER_PAGE, MAX_PER_PAGE};

    #[test]
    fn absent_query_means_everything() {
        assert_eq!(Pagination::from_query(None, None), None);
        let p = Pagination::from_query(Some(3), None).unwrap();
        assert_eq!(p.per_page, DEFAULT_PER_PAGE);
        assert_eq!(p.offset(), 2 * u64::from(DEFAULT_PER_PAGE));
    }

    #[test]
    fn zero_page_and_size_are_clamped() {
        let p = Pagination { page: 0, per_page: 0 };
        assert_eq!((p.offset(), p.limit()), (0, 1));
    }

    #[test]
    fn oversized_pages_are_capped() {
        let p = Pagination { page: 5, per_page: 1000 };
        assert_eq!(p.limit(), u64::from(MAX_PER_PAGE));
        assert_eq!(p.offset(), 4 * u64::from(MAX_PER_PAGE));
    }
}
