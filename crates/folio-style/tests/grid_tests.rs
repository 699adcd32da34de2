use folio_style::*;

#[test]
fn test_grid_defaults() {
    let expected = [
        (GridVariant::Single, 1, 0.0),
        (GridVariant::Two, 2, 1.5),
        (GridVariant::Three, 3, 1.0),
        (GridVariant::Six, 6, 0.75),
        (GridVariant::Twelve, 12, 0.5),
    ];
    for (variant, columns, gutter) in expected {
        let grid = GridSystem::new(variant);
        assert_eq!(grid.columns, columns);
        assert_eq!(grid.gutter_width_em, gutter);
        assert_eq!(grid.gutter_height_em, None);
        assert_eq!(grid.baseline_em, 1.5);
    }
}

#[test]
fn test_multi_column_css() {
    for variant in GridVariant::all().iter().copied().filter(|v| v.columns() > 1) {
        let grid = GridSystem::new(variant);
        let css = grid.to_css();
        let template = vec!["1fr"; variant.columns() as usize].join(" ");

        assert!(css.contains("display: grid;"), "{}", variant);
        assert!(
            css.contains(&format!("grid-template-columns: {};", template)),
            "{}",
            variant
        );
        assert!(
            css.contains(&format!("gap: {:.2}em;", grid.gutter_width_em)),
            "{}",
            variant
        );
        for span in [2, 3, 4, 6, 12] {
            assert!(css.contains(&format!(".grid-span-{} {{", span)));
            assert!(css.contains(&format!("grid-column: span {};", span)));
        }
    }
}

#[test]
fn test_three_column_css_exact_values() {
    let css = GridSystem::new(GridVariant::Three).to_css();
    assert!(css.contains("grid-template-columns: 1fr 1fr 1fr;"));
    assert!(css.contains("gap: 1.00em;"));
    assert!(css.contains("line-height: 1.50em;"));
}

#[test]
fn test_single_column_css_only_baseline() {
    let css = GridSystem::new(GridVariant::Single).to_css();
    assert!(css.contains("line-height: 1.50em;"));
    assert!(!css.contains("display: grid"));
    assert!(!css.contains("grid-template-columns"));
    assert!(!css.contains("gap:"));
    assert!(!css.contains("grid-span"));
}

#[test]
fn test_row_gap_when_configured() {
    let mut grid = GridSystem::new(GridVariant::Two);
    grid.gutter_height_em = Some(0.75);
    let css = grid.to_css();
    assert!(css.contains("gap: 1.50em;"));
    assert!(css.contains("row-gap: 0.75em;"));
}

#[test]
fn test_unknown_variant_falls_back_to_single() {
    assert_eq!(GridVariant::parse_or_single("seven"), GridVariant::Single);
    assert_eq!(GridVariant::parse_or_single("twelve"), GridVariant::Twelve);
    assert_eq!(GridVariant::parse_or_single("6"), GridVariant::Six);
    assert_eq!(GridSystem::for_columns(5), GridSystem::new(GridVariant::Single));
    assert_eq!(GridSystem::for_columns(3).columns, 3);
    assert!("5".parse::<GridVariant>().is_err());
}

#[test]
fn test_select_grid_decision_table() {
    let signals = |has_images, has_code, has_tables, complexity| ContentSignals {
        has_images,
        has_code,
        has_tables,
        complexity,
    };

    use Complexity::*;
    assert_eq!(select_grid(&signals(false, false, false, High)), GridVariant::Single);
    assert_eq!(select_grid(&signals(false, true, false, High)), GridVariant::Two);
    // Code rule wins over images+tables
    assert_eq!(select_grid(&signals(true, true, true, High)), GridVariant::Two);
    assert_eq!(select_grid(&signals(true, false, true, Low)), GridVariant::Six);
    assert_eq!(select_grid(&signals(true, true, true, Low)), GridVariant::Six);
    assert_eq!(select_grid(&signals(true, false, false, Low)), GridVariant::Three);
    assert_eq!(select_grid(&signals(true, true, false, Low)), GridVariant::Three);
    assert_eq!(select_grid(&signals(false, true, false, Low)), GridVariant::Two);
    assert_eq!(select_grid(&signals(false, false, true, Low)), GridVariant::Two);
}
