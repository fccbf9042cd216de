use super::*;

#[test]
fn test_insert_keeps_declaration_order() {
    let mut shapes = ParamShapes::new();
    assert!(shapes.is_empty());

    assert_eq!(shapes.insert("W", vec![3, 4]), None);
    assert_eq!(shapes.insert("b", vec![4]), None);
    assert_eq!(shapes.insert("W", vec![4, 3]), Some(vec![3, 4]));

    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes.keys().collect::<Vec<_>>(), vec!["W", "b"]);
    assert_eq!(shapes.get("W"), Some(&[4, 3][..]));
    assert_eq!(shapes.get("missing"), None);
    assert!(shapes.contains("b"));
}

#[test]
fn test_collect_and_compare() {
    let a: ParamShapes = vec![("W", vec![2]), ("b", vec![1])].into_iter().collect();
    let b: ParamShapes = vec![("W", vec![2]), ("b", vec![1])].into_iter().collect();
    let c: ParamShapes = vec![("b", vec![1]), ("W", vec![2])].into_iter().collect();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(
        a.iter().collect::<Vec<_>>(),
        vec![("W", &[2usize][..]), ("b", &[1usize][..])]
    );
}

#[test]
fn test_shape_len() {
    assert_eq!(shape_len("W", &[3, 4]), Ok(12));
    assert_eq!(shape_len("b", &[4]), Ok(4));
    assert_eq!(shape_len("scalar", &[]), Ok(1));
    assert_eq!(
        shape_len("W", &[3, 0, 2]),
        Err(LayoutError::InvalidShape {
            name: "W".to_string(),
            shape: vec![3, 0, 2],
        })
    );
    assert!(matches!(
        shape_len("huge", &[usize::MAX, 2]),
        Err(LayoutError::InvalidShape { .. })
    ));
}

#[test]
fn test_num_params_overflow_is_invalid_shape() {
    let params = LayerParams::new()
        .with_weight("W", vec![usize::MAX])
        .with_bias("b", vec![1]);

    assert!(matches!(
        num_params(&params),
        Err(LayoutError::InvalidShape { ref name, .. }) if name == "b"
    ));
}
