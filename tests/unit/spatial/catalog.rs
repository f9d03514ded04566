//! Tests for shape block parsing and catalog construction

#[cfg(test)]
mod tests {
    use polypack::spatial::ShapeCatalog;
    use polypack::spatial::catalog::{pattern_from_rows, shape_from_pattern};
    use polypack::spatial::shape::{Cell, normalize};
    use std::collections::BTreeMap;

    fn blocks(entries: Vec<(usize, Vec<&str>)>) -> BTreeMap<usize, Vec<String>> {
        entries
            .into_iter()
            .map(|(index, rows)| (index, rows.into_iter().map(str::to_string).collect()))
            .collect()
    }

    // Tests pattern dimensions follow the longest row and pad short rows
    #[test]
    fn test_pattern_pads_short_rows() {
        let pattern = pattern_from_rows(&["###", "#"]);

        assert_eq!(pattern.dim(), (2, 3));
        assert_eq!(pattern.get((1, 0)), Some(&true));
        assert_eq!(pattern.get((1, 2)), Some(&false));
    }

    // Tests any character other than '#' is empty
    #[test]
    fn test_pattern_only_hash_is_filled() {
        let pattern = pattern_from_rows(&["#.x", " O#"]);
        let filled: Vec<_> = pattern.iter().copied().collect();
        assert_eq!(filled, vec![true, false, false, false, false, true]);
    }

    // Tests shapes are translated to the origin after parsing
    #[test]
    fn test_shape_from_pattern_normalizes() {
        let pattern = pattern_from_rows(&["...", ".##", "..#"]);
        let parsed = shape_from_pattern(&pattern);

        let expected = normalize([Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)]);
        assert_eq!(parsed, expected);
    }

    // Tests catalog order follows ascending header index, not insertion
    #[test]
    fn test_catalog_orders_by_index() {
        let raw = blocks(vec![(5, vec!["#"]), (2, vec!["##", "##"])]);
        let catalog = ShapeCatalog::from_blocks(&raw);

        assert_eq!(catalog.len(), 2);
        let labels: Vec<_> = catalog.entries().iter().map(|entry| entry.label()).collect();
        assert_eq!(labels, vec![2, 5]);
        assert_eq!(catalog.get(0).map(|entry| entry.area()), Some(4));
        assert_eq!(catalog.get(1).map(|entry| entry.area()), Some(1));
        assert!(catalog.get(2).is_none());
    }

    // Tests variants are precomputed and share the base area
    #[test]
    fn test_catalog_variants() {
        let raw = blocks(vec![
            (0, vec!["##", "##"]),
            (1, vec!["#.", "#.", "##"]),
            (2, vec!["#.", ".#"]),
        ]);
        let catalog = ShapeCatalog::from_blocks(&raw);

        let counts: Vec<_> = catalog
            .entries()
            .iter()
            .map(|entry| entry.variants().len())
            .collect();
        assert_eq!(counts, vec![1, 8, 2]);

        for entry in catalog.entries() {
            assert!(
                entry
                    .variants()
                    .iter()
                    .all(|variant| variant.area() == entry.area())
            );
        }
    }

    // Tests a block with no filled cells becomes the empty shape
    #[test]
    fn test_catalog_empty_block() {
        let raw = blocks(vec![(0, vec!["...", "..."])]);
        let catalog = ShapeCatalog::from_blocks(&raw);

        let entry = catalog.get(0).expect("shape 0 should exist");
        assert_eq!(entry.area(), 0);
        assert!(entry.shape().is_empty());
        assert_eq!(entry.variants().len(), 1);
    }

    // Tests building from parsed shapes labels them by position
    #[test]
    fn test_catalog_from_shapes() {
        let catalog = ShapeCatalog::from_shapes([
            normalize([Cell::new(0, 0)]),
            normalize([Cell::new(0, 0), Cell::new(0, 1)]),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).map(|entry| entry.label()), Some(1));
        assert!(!catalog.is_empty());
        assert!(ShapeCatalog::default().is_empty());
    }
}
