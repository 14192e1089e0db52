//! End-to-end assembly tests: configure a builder tree, flatten it, and
//! compare the resulting specification tree against the output contract.

use ggbuild::{plot, DataSource, Extractor, GgbuildError, Position, Scale, Stat};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn reference_scenario_produces_expected_tree() {
    let data = DataSource::new(vec![(1, 2), (2, 3)]);
    let first = Extractor::new(|r: &(i32, i32)| json!(r.0));
    let letter = Extractor::new(|_: &(i32, i32)| json!("a"));

    let spec = plot(data, |p| {
        p.x(&first);
        p.scale_x(Scale::datetime().with_name("date"));
        p.line(|l| {
            l.x(&first);
            l.y(&letter);
        });
        p.bar(|l| {
            l.stat(Stat::density());
        });
        p.size(100, 10);
    })
    .unwrap();

    assert_eq!(
        spec.to_value(),
        json!({
            "kind": "plot",
            "mapping": {"x": "list0"},
            "data": {
                "list0": [1, 2],
                "list1": ["a", "a"]
            },
            "layers": [
                {
                    "geom": "line",
                    "stat": "identity",
                    "position": "identity",
                    "mapping": {"x": "list0", "y": "list1"}
                },
                {
                    "geom": "bar",
                    "stat": "density",
                    "position": "stack",
                    "mapping": {}
                }
            ],
            "scales": [
                {"aesthetic": "x", "name": "date", "datetime": true}
            ],
            "ggsize": {"width": 100, "height": 10}
        })
    );
}

#[test]
fn reference_lines_over_own_source() {
    let readings = DataSource::new(vec![(0.0, 1.0), (1.0, 4.0)]);
    let thresholds: DataSource<f64> = DataSource::new(vec![2.5]);
    let x = Extractor::new(|r: &(f64, f64)| json!(r.0));
    let y = Extractor::new(|r: &(f64, f64)| json!(r.1));
    let level = Extractor::new(|v: &f64| json!(*v));

    let spec = plot(readings, |p| {
        p.points(|l| {
            l.x(&x);
            l.y(&y);
            l.size(2.0);
        });
        p.hline_over(&thresholds, |l| {
            l.aes("yintercept", &level);
            l.linetype("dashed");
        });
    })
    .unwrap();

    assert_eq!(
        spec.to_value(),
        json!({
            "kind": "plot",
            "mapping": {},
            "data": {
                "list0": [0.0, 1.0],
                "list1": [1.0, 4.0]
            },
            "layers": [
                {
                    "geom": "point",
                    "stat": "identity",
                    "position": "identity",
                    "mapping": {"x": "list0", "y": "list1"},
                    "size": 2.0
                },
                {
                    "geom": "hline",
                    "stat": "identity",
                    "position": "identity",
                    "mapping": {"yintercept": "list0"},
                    "linetype": "dashed",
                    "data": {"list0": [2.5]}
                }
            ],
            "scales": []
        })
    );
}

#[test]
fn histogram_with_stat_parameters_and_position_override() {
    let values = DataSource::new(vec![1.0f64, 1.5, 9.0]);
    let value = Extractor::new(|v: &f64| json!(*v));

    let spec = plot(values, |p| {
        p.histogram(|l| {
            l.x(&value);
            l.stat(Stat::bin().bins(5).boundary(0.0));
            l.position(Position::Dodge);
            l.fill("gray");
        });
    })
    .unwrap();

    let layers = spec.get("layers").unwrap().as_array().unwrap();
    assert_eq!(
        layers[0],
        json!({
            "geom": "histogram",
            "stat": "bin",
            "position": "dodge",
            "mapping": {"x": "list0"},
            "bins": 5,
            "boundary": 0.0,
            "fill": "gray"
        })
    );
}

#[test]
fn defaults_per_geometry_kind() {
    let data = DataSource::new(vec![1]);
    let spec = plot(data, |p| {
        p.line(|_| {});
        p.points(|_| {});
        p.vline(|l| {
            l.xintercept(3.0);
        });
        p.bar(|_| {});
        p.area(|_| {});
        p.density(|_| {});
        p.histogram(|_| {});
    })
    .unwrap();

    let layers = spec.get("layers").unwrap().as_array().unwrap();
    let kinds: Vec<(&str, &str, &str)> = layers
        .iter()
        .map(|l| {
            (
                l.get("geom").unwrap().as_str().unwrap(),
                l.get("stat").unwrap().as_str().unwrap(),
                l.get("position").unwrap().as_str().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("line", "identity", "identity"),
            ("point", "identity", "identity"),
            ("vline", "identity", "identity"),
            ("bar", "count", "stack"),
            ("area", "identity", "stack"),
            ("density", "density", "identity"),
            ("histogram", "bin", "stack"),
        ]
    );
    assert_eq!(layers[2].get("xintercept"), Some(&json!(3.0)));
}

#[test]
fn property_redeclaration_keeps_last_value() {
    let data = DataSource::new(vec![(1, 2)]);
    let first = Extractor::new(|r: &(i32, i32)| json!(r.0));
    let second = Extractor::new(|r: &(i32, i32)| json!(r.1));

    let spec = plot(data, |p| {
        p.x(&first);
        p.x(&second);
        p.line(|l| {
            l.linetype("dotted");
            l.linetype("solid");
        });
    })
    .unwrap();

    // Only the final extractor ever reaches the registry.
    assert_eq!(spec.get("mapping"), Some(&json!({"x": "list0"})));
    assert_eq!(spec.get("data"), Some(&json!({"list0": [2]})));
    let layers = spec.get("layers").unwrap().as_array().unwrap();
    assert_eq!(layers[0].get("linetype"), Some(&json!("solid")));
}

#[test]
fn construction_order_bug_fails_loudly() {
    let shared: DataSource<i32> = DataSource::new(vec![1, 2, 3]);
    let value = Extractor::new(|v: &i32| json!(*v));
    let squared = Extractor::new(|v: &i32| json!(v * v));

    // The first layer's fragment materializes the shared registry; the
    // second then declares a brand-new column against it.
    let result = plot(vec![0], |p| {
        p.area_over(&shared, |l| {
            l.x(&value);
        });
        p.density_over(&shared, |l| {
            l.x(&squared);
        });
    });

    assert_eq!(result.unwrap_err(), GgbuildError::FinalizedBindings);
}

#[test]
fn plot_spec_serializes_transparently() {
    let data = DataSource::new(vec![1]);
    let spec = plot(data, |p| {
        p.size(10, 20);
    })
    .unwrap();

    let round_tripped: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&spec).unwrap()).unwrap();
    assert_eq!(round_tripped, spec.to_value());
}
