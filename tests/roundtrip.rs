use std::collections::BTreeMap;

use featurehash::{
    Color, Feature, FeatureHash, Fill, Geometry, PointSymbol, StyleDescriptor, Stroke, TextStyle,
    Value,
};

fn roundtrip(feature: &Feature) -> Feature {
    let hash = FeatureHash::new();
    hash.read_feature(&hash.write_feature(feature)).unwrap()
}

#[test]
fn every_geometry_kind_roundtrips_at_accuracy_one() {
    let geometries = vec![
        Geometry::Point {
            coords: vec![5.0, 5.0],
        },
        Geometry::LineString {
            coords: vec![0.0, 0.0, 100.0, -50.0, 98.0, -49.0],
        },
        Geometry::Polygon {
            coords: vec![0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0, 0.0, 0.0],
            ends: vec![10],
        },
        Geometry::MultiPoint {
            coords: vec![1.0, 2.0, 3.0, 4.0, -5.0, -6.0],
        },
        Geometry::MultiLineString {
            coords: vec![0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 20.0, 20.0],
            ends: vec![4, 8],
        },
        Geometry::MultiPolygon {
            coords: vec![
                0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 0.0, //
                20.0, 20.0, 24.0, 20.0, 24.0, 24.0, 20.0, 20.0,
            ],
            endss: vec![vec![8], vec![16]],
        },
    ];
    for geometry in geometries {
        let feature = Feature::new(geometry.clone());
        assert_eq!(roundtrip(&feature).geometry, geometry);
    }
}

#[test]
fn accuracy_above_one_is_floor_quantized() {
    let hash = FeatureHash {
        accuracy: 10.0,
        ..FeatureHash::new()
    };
    let feature = Feature::new(Geometry::LineString {
        coords: vec![103.0, 7.0, 218.0, -15.0],
    });
    let decoded = hash.read_feature(&hash.write_feature(&feature)).unwrap();
    assert_eq!(
        decoded.geometry,
        Geometry::LineString {
            coords: vec![100.0, 0.0, 210.0, -20.0]
        }
    );
}

#[test]
fn quantized_text_is_a_fixed_point_of_the_codec() {
    let hash = FeatureHash {
        accuracy: 10.0,
        ..FeatureHash::new()
    };
    let feature = Feature::new(Geometry::LineString {
        coords: vec![103.0, 7.0, 218.0, -15.0],
    });
    let text = hash.write_feature(&feature);
    let decoded = hash.read_feature(&text).unwrap();
    // Re-encoding the quantized coordinates reproduces the same text.
    assert_eq!(hash.write_feature(&decoded), text);
}

#[test]
fn attributes_roundtrip_as_strings() {
    let mut feature = Feature::new(Geometry::Point {
        coords: vec![5.0, 5.0],
    });
    feature
        .properties
        .insert("name".into(), Value::from("Mont Blanc"));
    feature
        .properties
        .insert("elevation".into(), Value::from("4808"));

    let decoded = roundtrip(&feature);
    assert_eq!(
        decoded.properties.get("name"),
        Some(&Value::String("Mont Blanc".into()))
    );
    assert_eq!(
        decoded.properties.get("elevation"),
        Some(&Value::String("4808".into()))
    );
}

#[test]
fn reserved_characters_are_sanitized_not_preserved() {
    // Lossy on purpose: separators become underscores.
    let mut feature = Feature::new(Geometry::Point {
        coords: vec![0.0, 0.0],
    });
    feature
        .properties
        .insert("note".into(), Value::from("it's (probably) ~fine"));

    let decoded = roundtrip(&feature);
    assert_eq!(
        decoded.properties.get("note"),
        Some(&Value::String("it_s _probably_ _fine".into()))
    );
}

#[test]
fn styled_line_decodes_to_style_properties() {
    let mut feature = Feature::new(Geometry::LineString {
        coords: vec![0.0, 0.0, 10.0, 10.0],
    });
    feature.styles.push(StyleDescriptor {
        stroke: Some(Stroke {
            color: Color::rgb(0xff, 0x00, 0x00),
            width: 3.0,
        }),
        ..Default::default()
    });

    let decoded = roundtrip(&feature);
    assert_eq!(
        decoded.properties.get("strokeColor"),
        Some(&Value::String("#ff0000".into()))
    );
    assert_eq!(
        decoded.properties.get("strokeWidth"),
        Some(&Value::Number(3.0))
    );
}

#[test]
fn styled_labelled_point_keeps_font_properties() {
    let mut feature = Feature::new(Geometry::Point {
        coords: vec![7.0, 7.0],
    });
    feature
        .properties
        .insert("isText".into(), Value::from(true));
    feature.styles.push(StyleDescriptor {
        point: Some(PointSymbol {
            radius: 5.0,
            fill: Some(Fill {
                color: Color::rgb(0, 0, 0),
            }),
            stroke: None,
        }),
        text: Some(TextStyle {
            font: "normal 16px sans-serif".to_string(),
            color: Some(Color::rgb(0x12, 0x34, 0x56)),
        }),
        ..Default::default()
    });

    let decoded = roundtrip(&feature);
    // The isText attribute travels in the attribute section; the label
    // pruning rules then keep the font keys and drop paint keys.
    assert_eq!(
        decoded.properties.get("isText"),
        Some(&Value::String("true".into()))
    );
    assert_eq!(
        decoded.properties.get("fontSize"),
        Some(&Value::Number(12.0))
    );
    assert_eq!(
        decoded.properties.get("fontColor"),
        Some(&Value::String("#123456".into()))
    );
    assert!(!decoded.properties.contains_key("fillColor"));
}

#[test]
fn legacy_remap_is_idempotent_across_two_decodes() {
    let hash = FeatureHash {
        legacy_keys: true,
        ..FeatureHash::new()
    };
    // Legacy-spelled attribute keys, as found in old permalinks.
    let legacy_text = "p(FF~strokecolor*%23112233'islabel*x)";
    let first = hash.read_feature(legacy_text).unwrap();
    assert!(first.properties.contains_key("strokeColor"));
    assert!(first.properties.contains_key("isText"));

    let second = hash
        .read_feature(&hash.write_feature(&first))
        .unwrap();
    assert_eq!(second.properties, first.properties);
}

#[test]
fn collection_of_mixed_kinds_roundtrips() {
    let hash = FeatureHash::new();
    let mut features = vec![
        Feature::new(Geometry::Point {
            coords: vec![5.0, 5.0],
        }),
        Feature::new(Geometry::Polygon {
            coords: vec![0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0, 0.0, 0.0],
            ends: vec![10],
        }),
        Feature::new(Geometry::MultiPolygon {
            coords: vec![
                0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 0.0, //
                9.0, 9.0, 13.0, 9.0, 13.0, 13.0, 9.0, 9.0,
            ],
            endss: vec![vec![8], vec![16]],
        }),
    ];
    let mut props = BTreeMap::new();
    props.insert("name".into(), Value::from("first"));
    features[0].properties = props;

    let text = hash.write_features(&features);
    assert_eq!(hash.read_features(&text).unwrap(), features);
}
