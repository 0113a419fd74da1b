//! Client-side search over a fetched product list: filter, sort, paginate,
//! and facet extraction for the filter bar.

use crate::Product;

/// Default page size of the catalog grid.
pub const DEFAULT_PAGE_LIMIT: usize = 9;

/// Composable product filters. `None` means "don't filter on this".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Free-text query, matched case-insensitively against name and
    /// description.
    pub query: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    /// Inclusive lower price bound (smallest currency unit).
    pub min_price: Option<u64>,
    /// Inclusive upper price bound (smallest currency unit).
    pub max_price: Option<u64>,
}

impl ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        if let Some(q) = &self.query {
            let q = q.trim().to_lowercase();
            if !q.is_empty()
                && !product.name.to_lowercase().contains(&q)
                && !product.description.to_lowercase().contains(&q)
            {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        if let Some(brand) = &self.brand {
            if &product.brand != brand {
                return false;
            }
        }
        if let Some(color) = &self.color {
            if &product.color != color {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        true
    }
}

/// Sort orders offered by the catalog grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Best rated first.
    #[default]
    Popular,
    LowestPrice,
    HighestPrice,
    /// Most recently added first.
    Newest,
}

/// 1-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// One page of search results plus the pagination facts the UI needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub items: Vec<Product>,
    /// Total matches across all pages.
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

/// Filter, sort, and paginate a fetched product list.
///
/// Inactive products never appear in results. A page past the end yields an
/// empty item list (the total counts are still reported).
pub fn search(
    products: &[Product],
    filter: &ProductFilter,
    sort: SortOrder,
    page: PageRequest,
) -> ProductPage {
    let mut matches: Vec<&Product> = products
        .iter()
        .filter(|p| p.active && filter.matches(p))
        .collect();

    match sort {
        SortOrder::Popular => {
            matches.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }
        SortOrder::LowestPrice => matches.sort_by_key(|p| p.price),
        SortOrder::HighestPrice => {
            matches.sort_by_key(|p| std::cmp::Reverse(p.price));
        }
        SortOrder::Newest => {
            matches.sort_by_key(|p| std::cmp::Reverse(p.created_at));
        }
    }

    let total = matches.len();
    let limit = page.limit.max(1);
    let page_no = page.page.max(1);
    let total_pages = total.div_ceil(limit);

    let items = matches
        .into_iter()
        .skip((page_no - 1) * limit)
        .take(limit)
        .cloned()
        .collect();

    ProductPage {
        items,
        total,
        page: page_no,
        total_pages,
    }
}

/// Distinct categories in first-seen order (filter bar facet).
pub fn categories(products: &[Product]) -> Vec<String> {
    distinct(products, |p| p.category.as_str())
}

/// Distinct brands in first-seen order (filter bar facet).
pub fn brands(products: &[Product]) -> Vec<String> {
    distinct(products, |p| p.brand.as_str())
}

/// Highest price in the list; ceiling for the price-range slider.
pub fn max_price(products: &[Product]) -> u64 {
    products.iter().map(|p| p.price).max().unwrap_or(0)
}

fn distinct<'a>(products: &'a [Product], field: impl Fn(&'a Product) -> &'a str) -> Vec<String> {
    let mut seen = Vec::new();
    for product in products {
        let value = field(product);
        if !value.is_empty() && !seen.iter().any(|s: &String| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
