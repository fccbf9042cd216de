use super::*;

#[test]
fn test_lookup_by_name() {
    let params = example_params();
    let buffer = iota(16);

    let views = layout(&params, buffer.view(), BufferKind::Parameters).unwrap();
    assert!(!views.is_empty());
    assert!(views.contains("W"));
    assert!(!views.contains("gamma"));
    assert!(views.get("gamma").is_none());
}

#[test]
fn test_remove_keeps_remaining_order() {
    let params = LayerParams::new()
        .with_weight("a", vec![1])
        .with_weight("b", vec![1])
        .with_bias("c", vec![1])
        .with_bias("d", vec![1]);
    let buffer = iota(4);

    let mut views = layout(&params, buffer.view(), BufferKind::Parameters).unwrap();
    let b = views.remove("b").unwrap();
    assert_eq!(b[[0]], 1.0);
    assert!(views.remove("b").is_none());

    assert_eq!(views.len(), 3);
    assert_eq!(views.keys().collect::<Vec<_>>(), vec!["a", "c", "d"]);
    assert_eq!(views.get("c").unwrap()[[0]], 2.0);
    assert_eq!(views.get("d").unwrap()[[0]], 3.0);
}

#[test]
fn test_iter_mut_and_into_iter() {
    let params = example_params();
    let mut buffer = Array1::<f32>::zeros(16);

    {
        let mut views = layout(&params, buffer.view_mut(), BufferKind::Parameters).unwrap();
        for (name, view) in views.iter_mut() {
            let value = if name == "W" { 1.0 } else { 2.0 };
            view.fill(value);
        }

        let names: Vec<String> = views.into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["W".to_string(), "b".to_string()]);
    }

    assert!(buffer.slice(s![..12]).iter().all(|&v| v == 1.0));
    assert!(buffer.slice(s![12..]).iter().all(|&v| v == 2.0));
}
