//! Query-string parsing for `GET /products`.
//!
//! Every parameter is read as raw text and parsed leniently: a value that is missing,
//! blank, unparseable or zero falls back to the default (for `page`/`limit`) or adds no
//! clause (for the filters). A listing request never fails on its query string.

use serde::Deserialize;

use crate::model::{PageParams, ProductFilter, DEFAULT_LIMIT, DEFAULT_PAGE};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub name: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl ListParams {
    pub fn page_params(&self) -> PageParams {
        PageParams::new(
            positive_int(self.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            positive_int(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT),
        )
    }

    pub fn filter(&self) -> ProductFilter {
        let mut builder = ProductFilter::builder();
        if let Some(name) = &self.name {
            builder = builder.name_contains(name.as_str());
        }
        if let Some(min) = price_bound(self.min_price.as_deref()) {
            builder = builder.min_price(min);
        }
        if let Some(max) = price_bound(self.max_price.as_deref()) {
            builder = builder.max_price(max);
        }
        builder.build()
    }
}

fn positive_int(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

// Zero is skipped: it bounds nothing on non-negative prices.
fn price_bound(raw: Option<&str>) -> Option<f64> {
    raw?.trim()
        .parse::<f64>()
        .ok()
        .filter(|bound| bound.is_finite() && *bound != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        let mut params = ListParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "page" => params.page = value,
                "limit" => params.limit = value,
                "name" => params.name = value,
                "minPrice" => params.min_price = value,
                "maxPrice" => params.max_price = value,
                other => panic!("unknown key {other}"),
            }
        }
        params
    }

    #[test]
    fn test_defaults_when_absent() {
        let parsed = params(&[]).page_params();
        assert_eq!(parsed, PageParams::new(1, 10));
        assert!(params(&[]).filter().is_empty());
    }

    #[test]
    fn test_numbers_are_parsed() {
        let parsed = params(&[("page", "3"), ("limit", "6")]).page_params();
        assert_eq!(parsed, PageParams::new(3, 6));
    }

    #[test]
    fn test_invalid_or_zero_paging_falls_back_to_defaults() {
        for bad in ["", "abc", "0", "-2", "1.5"] {
            let parsed = params(&[("page", bad), ("limit", bad)]).page_params();
            assert_eq!(parsed, PageParams::default(), "input {bad:?}");
        }
    }

    #[test]
    fn test_price_bounds() {
        let filter = params(&[("minPrice", "20"), ("maxPrice", " 25.5 ")]).filter();
        assert_eq!(filter.min_price(), Some(20.0));
        assert_eq!(filter.max_price(), Some(25.5));
    }

    #[test]
    fn test_blank_zero_or_garbage_price_adds_no_bound() {
        for bad in ["", "0", "cheap", "NaN", "inf"] {
            let filter = params(&[("minPrice", bad), ("maxPrice", bad)]).filter();
            assert!(filter.is_empty(), "input {bad:?}");
        }
    }

    #[test]
    fn test_name_filter_is_lowercased() {
        let filter = params(&[("name", "Chocolate")]).filter();
        assert_eq!(filter.name(), Some("chocolate"));
    }

    #[test]
    fn test_query_string_deserializes_camel_case() {
        let parsed: ListParams =
            serde_json::from_value(serde_json::json!({ "minPrice": "1", "maxPrice": "2" }))
                .unwrap();
        assert_eq!(parsed.min_price.as_deref(), Some("1"));
        assert_eq!(parsed.max_price.as_deref(), Some("2"));
    }
}
