// tests/compare_views.rs
//
// CompareEngine contracts: best-value direction, display formatting,
// normalization (incl. the one-sided clamp pin), ComparisonSet no-op
// policy, and the table/radar view-models.
//
use scout_pro::compare::{self, ComparisonSet, MAX_COMPARISONS};
use scout_pro::record::{field, Record};
use scout_pro::specs::metrics::{MetricDef, MetricKind};

fn metric(kind: MetricKind) -> MetricDef {
    MetricDef { key: "Goals", label: "Goals", kind, max: 100.0, multiplier: 100.0 }
}

fn with_goals(name: &str, goals: &str) -> Record {
    Record::new()
        .with(field::FULL_NAME, name)
        .with("Goals", goals)
}

#[test]
fn best_value_follows_metric_direction() {
    let a = with_goals("A", "3");
    let b = with_goals("B", "1");
    let c = with_goals("C", "2");
    let row = [&a, &b, &c];

    assert_eq!(compare::best_value(&metric(MetricKind::HigherIsBetter), &row), Some(3.0));
    assert_eq!(compare::best_value(&metric(MetricKind::LowerIsBetter), &row), Some(1.0));
    assert_eq!(compare::best_value(&metric(MetricKind::Contextual), &row), None);
    assert_eq!(compare::best_value(&metric(MetricKind::HigherIsBetter), &[]), None);
}

#[test]
fn normalize_clamps_above_only() {
    let m = metric(MetricKind::HigherIsBetter); // max 100, multiplier 100
    assert_eq!(compare::normalize(50.0, &m), 50.0);
    assert_eq!(compare::normalize(200.0, &m), 100.0);
    // Regression pin: negative inputs are NOT clamped to 0.
    assert_eq!(compare::normalize(-10.0, &m), -10.0);
}

#[test]
fn format_value_display_contract() {
    let market = MetricDef {
        key: field::MARKET_VALUE,
        label: "Market value",
        kind: MetricKind::HigherIsBetter,
        max: 100_000_000.0,
        multiplier: 100.0,
    };
    let pct = MetricDef {
        key: "Accurate passes, %",
        label: "Accurate passes %",
        kind: MetricKind::HigherIsBetter,
        max: 100.0,
        multiplier: 100.0,
    };
    let plain = metric(MetricKind::HigherIsBetter);

    assert_eq!(compare::format_value(2_500_000.0, &market), "€2,500,000");
    assert_eq!(compare::format_value(45.678, &pct), "45.7%");
    assert_eq!(compare::format_value(1.2345, &plain), "1.23");
    assert_eq!(compare::format_value(0.0, &plain), "0.00");
}

#[test]
fn comparison_set_caps_at_four_and_rejects_duplicates() {
    let mut set = ComparisonSet::new();
    set.set_base(with_goals("Base", "5"));

    for i in 0..MAX_COMPARISONS {
        set.add(with_goals(&format!("Rival {i}"), "1"));
    }
    assert_eq!(set.rivals().len(), 4);

    // 5th add: silent no-op.
    set.add(with_goals("Fifth Wheel", "9"));
    assert_eq!(set.rivals().len(), 4);
    assert!(set.rivals().iter().all(|r| r.full_name() != "Fifth Wheel"));

    // Duplicate of an existing rival: no-op (even with room).
    set.remove("Rival 3");
    assert_eq!(set.rivals().len(), 3);
    set.add(with_goals("Rival 0", "7"));
    assert_eq!(set.rivals().len(), 3);

    // Duplicate of the base: no-op.
    set.add(with_goals("Base", "5"));
    assert_eq!(set.rivals().len(), 3);

    // Identity-less record: no-op.
    set.add(Record::new().with("Goals", "4"));
    assert_eq!(set.rivals().len(), 3);
}

#[test]
fn base_never_duplicates_a_rival() {
    let mut set = ComparisonSet::new();
    set.add(with_goals("Carlos Mena", "2"));

    set.set_base(with_goals("Carlos Mena", "2"));
    assert!(set.base().is_none());

    set.set_base(with_goals("Aaron Vidal", "1"));
    assert_eq!(set.base().map(|r| r.full_name()), Some("Aaron Vidal"));

    // Replacing the base wholesale is allowed.
    set.set_base(with_goals("Bruno Costa", "3"));
    assert_eq!(set.base().map(|r| r.full_name()), Some("Bruno Costa"));
}

#[test]
fn remove_and_clear_cover_base_and_rivals() {
    let mut set = ComparisonSet::new();
    set.set_base(with_goals("Base", "5"));
    set.add(with_goals("Rival", "1"));
    assert!(set.is_ready());

    set.remove("Base");
    assert!(set.base().is_none());
    assert!(!set.is_ready());

    set.set_base(with_goals("Base", "5"));
    set.clear();
    assert!(set.base().is_none());
    assert!(set.rivals().is_empty());
}

#[test]
fn identities_feed_suggestion_exclusion() {
    let mut set = ComparisonSet::new();
    set.set_base(with_goals("Base", "5"));
    set.add(with_goals("Rival", "1"));

    let ids = set.identities();
    assert!(ids.contains("Base"));
    assert!(ids.contains("Rival"));
    assert_eq!(ids.len(), 2);
}

#[test]
fn table_view_flags_best_cells_base_first() {
    let mut set = ComparisonSet::new();
    set.set_base(
        Record::new()
            .with(field::FULL_NAME, "Base Man")
            .with("Goals", "12")
            .with("Fouls per 90", "2.1"),
    );
    set.add(
        Record::new()
            .with(field::FULL_NAME, "Rival One")
            .with("Goals", "20")
            .with("Fouls per 90", "1.4"),
    );

    let table = compare::table_view(&set, "attacking");
    assert_eq!(table.columns, ["Base Man", "Rival One"]);

    let goals = table.rows.iter().find(|r| r.label == "Goals").unwrap();
    assert_eq!(goals.cells[0].display, "12.00");
    assert!(!goals.cells[0].best);
    assert!(goals.cells[1].best);

    // Lower-is-better row flags the minimum.
    let table = compare::table_view(&set, "defensive");
    let fouls = table.rows.iter().find(|r| r.label == "Fouls per 90").unwrap();
    assert!(!fouls.cells[0].best);
    assert!(fouls.cells[1].best);
}

#[test]
fn contextual_rows_never_flag_best() {
    let mut set = ComparisonSet::new();
    set.set_base(
        Record::new()
            .with(field::FULL_NAME, "Base Man")
            .with("Preferred foot", "left"),
    );
    set.add(
        Record::new()
            .with(field::FULL_NAME, "Rival One")
            .with("Preferred foot", "right"),
    );

    let table = compare::table_view(&set, "technical");
    let foot = table.rows.iter().find(|r| r.label == "Preferred foot").unwrap();
    assert!(foot.cells.iter().all(|c| !c.best));
}

#[test]
fn unknown_category_yields_empty_rows_not_an_error() {
    let mut set = ComparisonSet::new();
    set.set_base(with_goals("Base", "5"));
    set.add(with_goals("Rival", "1"));

    assert!(compare::metrics_for_category("nonsense").is_empty());
    let table = compare::table_view(&set, "nonsense");
    assert_eq!(table.columns.len(), 2);
    assert!(table.rows.is_empty());
}

#[test]
fn unready_set_yields_empty_views() {
    let mut set = ComparisonSet::new();
    set.set_base(with_goals("Base", "5"));

    assert_eq!(compare::table_view(&set, "attacking"), Default::default());
    assert_eq!(compare::radar_view(&set), Default::default());
}

#[test]
fn radar_series_align_with_labels() {
    let mut set = ComparisonSet::new();
    set.set_base(
        Record::new()
            .with(field::FULL_NAME, "Base Man")
            .with("Goals", "15")
            .with("Assists", "30")
            .with("Accurate passes, %", "84.5"),
    );
    set.add(Record::new().with(field::FULL_NAME, "Rival One"));

    let radar = compare::radar_view(&set);
    assert_eq!(radar.labels[0], "Goals");
    assert_eq!(radar.series.len(), 2);

    let base = &radar.series[0];
    assert_eq!(base.name, "Base Man");
    assert_eq!(base.scores.len(), radar.labels.len());
    assert_eq!(base.scores[0], 50.0);  // 15 of max 30
    assert_eq!(base.scores[1], 100.0); // 30 assists saturate at max 15
    assert!((base.scores[2] - 84.5).abs() < 1e-9); // percent maps 1:1

    // Absent fields coerce to 0 and stay 0 on the radar.
    assert!(radar.series[1].scores.iter().all(|&v| v == 0.0));
}

#[test]
fn records_round_trip_from_json_rows() {
    // The ingesting collaborator hands over parsed rows; transparent serde
    // keeps them column-keyed.
    let r: Record = serde_json::from_str(
        r#"{"Full name":"Carlos Mena","Age":"24","Market value":"12000000"}"#,
    )
    .unwrap();
    assert_eq!(r.full_name(), "Carlos Mena");
    assert_eq!(r.age(), 24);
    assert_eq!(r.market_value(), 12_000_000.0);
}
