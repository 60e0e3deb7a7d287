//! Round-trip tests: geometry → transport record → geometry.

use meshport_core::mesh::generators::{generate_quad, generate_sphere};
use meshport_core::mesh::{AttributeSemantic, Geometry, IndexFormat, compute_vertex_normals};
use meshport_core::transport::{
    DecodeOptions, SerializableMesh, Validation, ValidationError, decode, decode_with, encode,
};
use rstest::rstest;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tetrahedron() -> Geometry {
    Geometry::new()
        .with_positions(vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ])
        .with_indices_u16(&[0, 2, 1, 0, 1, 3, 0, 3, 2, 1, 2, 3])
}

#[rstest]
#[case::non_indexed(Geometry::new().with_positions(vec![
    [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.5],
]))]
#[case::indexed(tetrahedron())]
fn test_positions_only_roundtrip(#[case] original: Geometry) {
    init_logger();

    let decoded = decode(&encode(&original)).expect("decode failed");

    assert_eq!(decoded.positions(), original.positions());
    let expected = compute_vertex_normals(
        original.positions().unwrap(),
        original.indices(),
    );
    assert_eq!(decoded.normals(), Some(expected.as_slice()));
}

#[test]
fn test_absence_preservation() {
    init_logger();

    let original = tetrahedron();
    let record = encode(&original);
    assert!(record.uvs.is_none());
    assert!(record.normals.is_none());

    let decoded = decode(&record).unwrap();
    assert!(!decoded.has_attribute(AttributeSemantic::TexCoord0));
}

#[rstest]
#[case::small(vec![0, 1, 2], IndexFormat::Uint16)]
#[case::at_limit(vec![0, 1, 65535], IndexFormat::Uint16)]
#[case::above_limit(vec![0, 1, 70000], IndexFormat::Uint32)]
fn test_index_width_selection(#[case] indices: Vec<u32>, #[case] expected: IndexFormat) {
    init_logger();

    let record = SerializableMesh {
        indices: Some(indices.clone()),
        ..SerializableMesh::from_positions(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0])
    };
    let decoded = decode(&record).unwrap();

    assert_eq!(decoded.index_format(), Some(expected));
    assert_eq!(decoded.indices().unwrap().to_vec_u32(), indices);
}

#[test]
fn test_empty_mesh() {
    init_logger();

    let record = encode(&Geometry::new());
    assert_eq!(record, SerializableMesh::from_positions(Vec::new()));

    let decoded = decode(&record).unwrap();
    assert!(decoded.positions().is_none());
    assert!(decoded.normals().is_none());
    assert!(decoded.uvs().is_none());
    assert!(decoded.indices().is_none());
    assert!(decoded.bounding_box().is_none());
    assert!(decoded.bounding_sphere().is_none());
}

#[test]
fn test_flattening_fidelity() {
    let original = Geometry::new().with_positions(vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);

    let record = encode(&original);
    assert_eq!(record.positions, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let decoded = decode(&record).unwrap();
    assert_eq!(
        decoded.positions(),
        Some(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]][..])
    );
}

#[test]
fn test_derived_normals_are_deterministic() {
    let record = encode(&generate_sphere(2.5, 24, 12).with_normals(Vec::new()));

    let first = decode(&record).unwrap();
    let second = decode(&record).unwrap();

    let bits = |g: &Geometry| -> Vec<u32> {
        g.normals()
            .unwrap()
            .iter()
            .flatten()
            .map(|v| v.to_bits())
            .collect()
    };
    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn test_full_attribute_roundtrip() {
    init_logger();

    let original = generate_sphere(1.0, 16, 8);
    let decoded = decode(&encode(&original)).unwrap();

    assert_eq!(decoded.positions(), original.positions());
    assert_eq!(decoded.normals(), original.normals());
    assert_eq!(decoded.uvs(), original.uvs());
    assert_eq!(decoded.indices(), original.indices());
    assert_eq!(encode(&decoded), encode(&original));
}

#[test]
fn test_quad_gets_derived_normals_and_bounds() {
    let decoded = decode(&encode(&generate_quad(2.0, 1.0))).unwrap();

    for n in decoded.normals().unwrap() {
        assert_eq!(*n, [0.0, 0.0, 1.0]);
    }
    let aabb = decoded.bounding_box().unwrap();
    assert_eq!(aabb.size().x, 4.0);
    assert_eq!(aabb.size().y, 2.0);
    let sphere = decoded.bounding_sphere().unwrap();
    assert!((sphere.radius - 5.0f32.sqrt()).abs() < 1e-6);
}

#[test]
fn test_decoded_geometry_is_independent_of_record() {
    let mut record = encode(&tetrahedron());
    let decoded = decode(&record).unwrap();

    record.positions.clear();
    record.indices = None;

    assert_eq!(decoded.vertex_count(), 4);
    assert_eq!(decoded.index_count(), 12);
}

#[rstest]
#[case::positions(
    SerializableMesh::from_positions(vec![0.0; 4]),
    ValidationError::LengthNotMultiple { attribute: "positions", len: 4, group_size: 3 }
)]
#[case::normals(
    SerializableMesh { normals: Some(vec![0.0; 8]), ..SerializableMesh::from_positions(vec![0.0; 9]) },
    ValidationError::LengthNotMultiple { attribute: "normals", len: 8, group_size: 3 }
)]
#[case::uvs(
    SerializableMesh { uvs: Some(vec![0.0; 3]), ..SerializableMesh::from_positions(vec![0.0; 9]) },
    ValidationError::LengthNotMultiple { attribute: "uvs", len: 3, group_size: 2 }
)]
#[case::normals_mismatch(
    SerializableMesh { normals: Some(vec![0.0; 6]), ..SerializableMesh::from_positions(vec![0.0; 9]) },
    ValidationError::NormalsLengthMismatch { positions: 9, normals: 6 }
)]
fn test_strict_validation(#[case] record: SerializableMesh, #[case] expected: ValidationError) {
    assert_eq!(decode(&record), Err(expected));
}

#[test]
fn test_lenient_validation_repairs() {
    init_logger();

    let record = SerializableMesh {
        normals: Some(vec![0.0; 8]),
        ..SerializableMesh::from_positions(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 5.0])
    };
    let options = DecodeOptions::new().with_validation(Validation::Lenient);
    let decoded = decode_with(&record, &options).unwrap();

    assert_eq!(decoded.vertex_count(), 3);
    // Normals truncated to 2 vectors no longer match 3 vertices and are derived.
    assert_eq!(decoded.normals(), Some(&[[0.0, 0.0, 1.0]; 3][..]));
}

#[test]
fn test_out_of_range_indices_do_not_panic() {
    let record = SerializableMesh {
        indices: Some(vec![0, 1, 2, 3, 4, 5]),
        ..SerializableMesh::from_positions(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0])
    };
    let decoded = decode(&record).unwrap();
    assert_eq!(decoded.normals(), Some(&[[0.0, 0.0, 1.0]; 3][..]));
}

#[cfg(feature = "serialize-json")]
#[test]
fn test_json_transport_roundtrip() {
    use meshport_core::transport::format::{Format, from_bytes, to_bytes};

    let original = generate_quad(1.0, 1.0);
    let bytes = to_bytes(&encode(&original), Format::Json).unwrap();
    let decoded = decode(&from_bytes(&bytes, Format::Json).unwrap()).unwrap();

    assert_eq!(decoded.positions(), original.positions());
    assert_eq!(decoded.uvs(), original.uvs());
    assert_eq!(decoded.indices(), original.indices());
}
