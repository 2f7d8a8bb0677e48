use super::query::{Query, fold};
use crate::catalog::{Catalog, CatalogEntry};

/// Entries whose folded label contains the query, in catalog order.
/// An empty query matches nothing.
pub fn filter<'a>(catalog: &'a Catalog, query: &Query) -> Vec<&'a CatalogEntry> {
    filter_indices(catalog, query)
        .into_iter()
        .filter_map(|idx| catalog.get(idx))
        .collect()
}

pub fn filter_indices(catalog: &Catalog, query: &Query) -> Vec<usize> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.as_str();
    catalog
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| fold(&entry.label).contains(needle))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter, filter_indices};
    use crate::catalog::Catalog;
    use crate::search::query::Query;

    fn labels<'a>(entries: &[&'a crate::catalog::CatalogEntry]) -> Vec<&'a str> {
        entries.iter().map(|entry| entry.label.as_str()).collect()
    }

    #[test]
    fn blender_scenario_keeps_catalog_order() {
        let catalog = Catalog::default_products();
        let matches = filter(&catalog, &Query::parse("blender"));
        assert_eq!(
            labels(&matches),
            vec!["Nutribullet Blender NBR1212R", "Moulinex Blender LM422"]
        );
    }

    #[test]
    fn matches_anywhere_ignoring_case() {
        let catalog = Catalog::default_products();
        let matches = filter(&catalog, &Query::parse("MILK"));
        assert_eq!(labels(&matches), vec!["Milk", "Brookside Milk"]);
    }

    #[test]
    fn empty_query_matches_nothing() {
        let catalog = Catalog::default_products();
        assert!(filter(&catalog, &Query::parse("  ")).is_empty());
    }

    #[test]
    fn no_match_is_empty() {
        let catalog = Catalog::default_products();
        assert!(filter(&catalog, &Query::parse("xyz")).is_empty());
    }

    #[test]
    fn metacharacters_are_literal() {
        let catalog = Catalog::from_labels(["a.b", "axb", "a*"]);
        assert_eq!(filter_indices(&catalog, &Query::parse(".")), vec![0]);
        assert_eq!(filter_indices(&catalog, &Query::parse("*")), vec![2]);
    }

    #[test]
    fn result_is_exact_subsequence_for_every_query() {
        let catalog = Catalog::default_products();
        for raw in ["m", "e", "lm", "bread", " s ", "nbr", "naivas fresh"] {
            let query = Query::parse(raw);
            let expected: Vec<usize> = catalog
                .entries()
                .iter()
                .enumerate()
                .filter(|(_, e)| e.label.to_lowercase().contains(query.as_str()))
                .map(|(idx, _)| idx)
                .collect();
            assert_eq!(filter_indices(&catalog, &query), expected, "query {raw:?}");
        }
    }
}
