//! Integration tests for the choros classification and color pipeline.
//!
//! These tests exercise the public API end-to-end, the way a map renderer
//! would: raw samples in, breaks/bins/colors/labels out.

mod common;

use common::assertions::{assert_approx_eq, assert_classification_invariants};
use common::skewed_samples;

use choros::{
    build_style, classify, class_colors, color_at_position, get_colormap, hex_to_rgb,
    Classification, ClassificationScheme, ColorStop, StyleConfig,
};

const ALL_SCHEMES: [ClassificationScheme; 5] = [
    ClassificationScheme::Quantile,
    ClassificationScheme::EqualInterval,
    ClassificationScheme::NaturalBreaks,
    ClassificationScheme::StdDeviation,
    ClassificationScheme::HeadTail,
];

#[test]
fn equal_interval_produces_exact_quarter_breaks() {
    let values: Vec<f64> = (0..=100).map(f64::from).collect();
    let result = classify(&values, ClassificationScheme::EqualInterval, 4);

    assert_eq!(result.breaks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    assert_classification_invariants(&result, &values);
}

#[test]
fn quantile_splits_uniform_data_evenly() {
    let values: Vec<f64> = (1..=100).map(f64::from).collect();
    let result = classify(&values, ClassificationScheme::Quantile, 5);

    assert_eq!(result.breaks, vec![1.0, 21.0, 41.0, 61.0, 81.0, 100.0]);
    assert_classification_invariants(&result, &values);

    // Each class holds roughly a fifth of the samples
    let mut counts = vec![0usize; result.class_count()];
    for &bin in &result.bins {
        counts[bin] += 1;
    }
    for &count in &counts {
        assert!((19..=21).contains(&count), "class sizes {:?}", counts);
    }
}

#[test]
fn natural_breaks_separates_literal_clusters() {
    let values = [1.0, 1.0, 1.0, 10.0, 10.0, 10.0, 100.0, 100.0, 100.0];
    let result = classify(&values, ClassificationScheme::NaturalBreaks, 3);

    assert_eq!(result.class_count(), 3);
    assert_eq!(result.bins, vec![0, 0, 0, 1, 1, 1, 2, 2, 2]);
    assert_classification_invariants(&result, &values);

    // Perfect partition: zero within-class deviation in every class
    for class in 0..3 {
        let members: Vec<f64> = values
            .iter()
            .zip(&result.bins)
            .filter(|(_, &b)| b == class)
            .map(|(&v, _)| v)
            .collect();
        let mean = members.iter().sum::<f64>() / members.len() as f64;
        let ssd: f64 = members.iter().map(|v| (v - mean).powi(2)).sum();
        assert_approx_eq(ssd, 0.0, None);
    }
}

#[test]
fn all_schemes_respect_invariants_on_messy_data() {
    let values = skewed_samples(200);
    for scheme in ALL_SCHEMES {
        for k in 2..=20 {
            let result = classify(&values, scheme, k);
            assert_classification_invariants(&result, &values);
            if scheme != ClassificationScheme::StdDeviation {
                assert!(
                    result.class_count() <= k,
                    "{:?} returned {} classes for k={}",
                    scheme,
                    result.class_count(),
                    k
                );
            }
        }
    }
}

#[test]
fn classification_is_idempotent() {
    let values = skewed_samples(150);
    for scheme in ALL_SCHEMES {
        let first = classify(&values, scheme, 7);
        let second = classify(&values, scheme, 7);
        assert_eq!(first, second, "{:?} must be deterministic", scheme);
    }
}

#[test]
fn nan_samples_keep_their_positions() {
    let values = [f64::NAN, 1.0, f64::NAN, 50.0, 100.0];
    let result = classify(&values, ClassificationScheme::EqualInterval, 2);

    assert_eq!(result.bins.len(), 5);
    assert_eq!(result.bins[0], 0);
    assert_eq!(result.bins[2], 0);
    assert_eq!(result.breaks, vec![1.0, 50.5, 100.0]);
}

#[test]
fn degenerate_inputs_never_panic() {
    for scheme in ALL_SCHEMES {
        for values in [
            vec![],
            vec![f64::NAN],
            vec![42.0],
            vec![42.0; 50],
            vec![f64::NAN, 42.0],
        ] {
            let result = classify(&values, scheme, 5);
            assert!(result.breaks.len() >= 2);
            assert_eq!(result.bins.len(), values.len());
        }
    }
}

#[test]
fn single_class_color_is_the_gradient_midpoint() {
    for name in ["viridis", "plasma", "coolwarm", "seismic"] {
        let cm = get_colormap(name).unwrap();
        assert_eq!(class_colors(cm, 1), vec![cm.sample(0.5)]);
    }
}

#[test]
fn gray_ramp_midpoint_is_pinned() {
    let stops = [
        ColorStop::new(0.0, 0x00, 0x00, 0x00),
        ColorStop::new(1.0, 0xff, 0xff, 0xff),
    ];
    // Round-half-away-from-zero: 127.5 rounds up
    assert_eq!(color_at_position(&stops, 0.5).to_hex(), "#808080");
}

#[test]
fn full_pipeline_styles_a_layer() {
    let values = skewed_samples(300);
    let config = StyleConfig {
        scheme: "natural-breaks".to_string(),
        colormap: "plasma".to_string(),
        classes: 6,
    };
    let style = build_style(&values, &config).unwrap();

    assert!(style.class_count() >= 2 && style.class_count() <= 6);
    assert_eq!(style.colors.len(), style.class_count());
    assert_eq!(style.labels.len(), style.class_count());
    assert_eq!(style.bins.len(), values.len());

    // Colors are renderable hex strings drawn from the requested gradient
    for color in &style.colors {
        assert!(hex_to_rgb(color).is_some(), "bad hex {}", color);
    }
    // Labels pair consecutive breaks
    assert!(style.labels[0].contains(" – "));

    let Classification { breaks, bins } = classify(
        &values,
        ClassificationScheme::NaturalBreaks,
        6,
    );
    assert_eq!(style.breaks, breaks);
    assert_eq!(style.bins, bins);
}

#[test]
fn style_requests_arrive_as_json() {
    let values: Vec<f64> = (0..50).map(f64::from).collect();
    let config =
        StyleConfig::from_json(r#"{"scheme": "quantile", "colormap": "RdBu", "classes": 4}"#)
            .unwrap();
    let style = build_style(&values, &config).unwrap();

    assert_eq!(style.colormap, "rdbu");
    assert_eq!(style.class_count(), 4);

    let json = serde_json::to_string(&style).unwrap();
    assert!(json.contains("\"scheme\":\"quantile\""));
}
