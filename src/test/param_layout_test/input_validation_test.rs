use super::*;

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_validate_descriptor_accepts_consistent_layers() {
    assert!(validate_descriptor(&example_params()).is_ok());
    assert!(validate_descriptor(&DenseParams::new(4, 3)).is_ok());
    assert!(validate_descriptor(&SimpleRnnParams::new(4, 3)).is_ok());
    assert!(validate_descriptor(&Conv2DParams::new(8, 3, (3, 3))).is_ok());
    assert!(validate_descriptor(&LayerParams::new()).is_ok());
}

#[test]
fn test_missing_shape() {
    let shapes: ParamShapes = vec![("W", vec![2, 2])].into_iter().collect();
    let params = LayerParams::from_parts(keys(&["W", "b"]), keys(&["W"]), keys(&["b"]), shapes);

    assert_eq!(
        validate_descriptor(&params),
        Err(LayoutError::MissingShape {
            name: "b".to_string()
        })
    );
}

#[test]
fn test_unknown_shape() {
    let shapes: ParamShapes = vec![("W", vec![2, 2]), ("b", vec![2]), ("c", vec![2])]
        .into_iter()
        .collect();
    let params = LayerParams::from_parts(keys(&["W", "b"]), keys(&["W"]), keys(&["b"]), shapes);

    assert_eq!(
        validate_descriptor(&params),
        Err(LayoutError::UnknownShape {
            name: "c".to_string()
        })
    );
}

#[test]
fn test_duplicate_key() {
    let params = LayerParams::new()
        .with_weight("W", vec![2, 2])
        .with_weight("W", vec![2, 2]);

    assert_eq!(
        validate_descriptor(&params),
        Err(LayoutError::DuplicateKey {
            name: "W".to_string()
        })
    );
}

#[test]
fn test_role_conflict() {
    let shapes: ParamShapes = vec![("W", vec![2, 2])].into_iter().collect();
    let params = LayerParams::from_parts(keys(&["W"]), keys(&["W"]), keys(&["W"]), shapes);

    assert_eq!(
        validate_roles(&params),
        Err(LayoutError::RoleConflict {
            name: "W".to_string()
        })
    );
    assert_eq!(
        validate_descriptor(&params),
        Err(LayoutError::RoleConflict {
            name: "W".to_string()
        })
    );
}

#[test]
fn test_layout_rejects_inconsistent_descriptor_before_splitting() {
    let shapes: ParamShapes = vec![("W", vec![2, 2]), ("extra", vec![3])]
        .into_iter()
        .collect();
    let params = LayerParams::from_parts(keys(&["W"]), keys(&["W"]), vec![], shapes);
    let mut buffer = iota(16);

    let result = layout(&params, buffer.view_mut(), BufferKind::Parameters);
    assert!(matches!(
        result,
        Err(LayoutError::UnknownShape { ref name }) if name == "extra"
    ));
}
