use super::*;
use crate::traits::WeightInit;
use crate::weight_init::{ConstantInit, NoInit};

/// Strategy that rejects every parameter, to check error propagation
struct RejectingInit;

impl WeightInit for RejectingInit {
    fn populate(
        &mut self,
        name: &str,
        _role: Option<ParamRole>,
        _shape: &[usize],
        _view: &mut ArrayViewMutD<'_, f32>,
    ) -> Result<(), LayoutError> {
        Err(LayoutError::InvalidInitializer(format!(
            "cannot initialize {}",
            name
        )))
    }
}

/// Strategy that records the calls it receives
#[derive(Default)]
struct RecordingInit {
    calls: Vec<(String, Option<ParamRole>, Vec<usize>)>,
}

impl WeightInit for RecordingInit {
    fn populate(
        &mut self,
        name: &str,
        role: Option<ParamRole>,
        shape: &[usize],
        _view: &mut ArrayViewMutD<'_, f32>,
    ) -> Result<(), LayoutError> {
        self.calls.push((name.to_string(), role, shape.to_vec()));
        Ok(())
    }
}

#[test]
fn test_default_initializer_is_zero_sized() {
    assert_eq!(std::mem::size_of::<ParamInitializer>(), 0);
    assert!(ParamInitializer::new().weight_init().is_noop());
}

#[test]
fn test_accessors_delegate_to_descriptor() {
    let initializer = ParamInitializer::new();
    let params = example_params();

    assert_eq!(initializer.num_params(&params).unwrap(), 16);
    assert_eq!(initializer.param_keys(&params), &["W".to_string(), "b".to_string()]);
    assert_eq!(initializer.weight_keys(&params), &["W".to_string()]);
    assert_eq!(initializer.bias_keys(&params), &["b".to_string()]);
    assert!(initializer.is_weight_param(&params, "W"));
    assert!(initializer.is_bias_param(&params, "b"));
    assert!(!initializer.is_bias_param(&params, "W"));
}

#[test]
fn test_init_without_initialize_leaves_values() {
    let mut initializer = ParamInitializer::with_weight_init(ConstantInit::new(9.0));
    let params = example_params();
    let mut buffer = iota(16);

    {
        let views = initializer.init(&params, buffer.view_mut(), false).unwrap();
        assert_eq!(views.get("W").unwrap()[[0, 1]], 3.0);
    }

    assert_eq!(buffer, iota(16));
}

#[test]
fn test_init_with_no_init_leaves_values() {
    let mut initializer = ParamInitializer::with_weight_init(NoInit);
    let params = example_params();
    let mut buffer = iota(16);

    let count = initializer
        .init(&params, buffer.view_mut(), true)
        .unwrap()
        .len();

    assert_eq!(count, 2);
    assert_eq!(buffer, iota(16));
}

#[test]
fn test_init_fills_only_layer_range() {
    let mut initializer = ParamInitializer::with_weight_init(ConstantInit::new(0.5));
    let params = example_params();
    let mut buffer = Array1::<f32>::from_elem(18, -1.0);

    initializer.init(&params, buffer.view_mut(), true).unwrap();

    assert!(buffer.slice(s![..16]).iter().all(|&v| v == 0.5));
    assert_eq!(buffer.slice(s![16..]).to_vec(), vec![-1.0, -1.0]);
}

#[test]
fn test_init_calls_strategy_in_layout_order() {
    let mut initializer = ParamInitializer::with_weight_init(RecordingInit::default());
    let params = LayerParams::new()
        .with_weight("W", vec![2, 3])
        .with_param("gamma", vec![3])
        .with_bias("b", vec![1, 3]);
    let mut buffer = Array1::<f32>::zeros(12);

    initializer.init(&params, buffer.view_mut(), true).unwrap();

    assert_eq!(
        initializer.weight_init().calls,
        vec![
            ("W".to_string(), Some(ParamRole::Weight), vec![2, 3]),
            ("gamma".to_string(), None, vec![3]),
            ("b".to_string(), Some(ParamRole::Bias), vec![1, 3]),
        ]
    );
}

#[test]
fn test_init_propagates_strategy_error() {
    let mut initializer = ParamInitializer::with_weight_init(RejectingInit);
    let params = example_params();
    let mut buffer = Array1::<f32>::zeros(16);

    let result = initializer.init(&params, buffer.view_mut(), true);
    assert!(matches!(result, Err(LayoutError::InvalidInitializer(_))));
}

#[test]
fn test_init_small_buffer_never_calls_strategy() {
    let mut initializer = ParamInitializer::with_weight_init(RecordingInit::default());
    let params = example_params();
    let mut buffer = Array1::<f32>::zeros(15);

    let result = initializer.init(&params, buffer.view_mut(), true);
    assert!(matches!(result, Err(LayoutError::BufferTooSmall { .. })));
    assert!(initializer.weight_init().calls.is_empty());
}

#[test]
fn test_gradients_share_parameter_offsets() {
    let initializer = ParamInitializer::new();
    let params = example_params();
    let gradients = iota(16);

    let views = initializer
        .gradients_from_flattened(&params, gradients.view())
        .unwrap();

    let dw = views.get("W").unwrap();
    assert_eq!(dw.shape(), &[3, 4]);
    assert_eq!(dw[[1, 2]], (1 + 3 * 2) as f32);
    assert_eq!(views.get("b").unwrap()[[3]], 15.0);
}

/// Strategy that fills weights and rejects biases
struct WeightsOnlyInit;

impl WeightInit for WeightsOnlyInit {
    fn populate(
        &mut self,
        name: &str,
        role: Option<ParamRole>,
        _shape: &[usize],
        view: &mut ArrayViewMutD<'_, f32>,
    ) -> Result<(), LayoutError> {
        match role {
            Some(ParamRole::Bias) => Err(LayoutError::InvalidInitializer(format!(
                "cannot initialize bias {}",
                name
            ))),
            _ => {
                view.fill(9.0);
                Ok(())
            }
        }
    }
}

#[test]
fn test_init_strategy_error_keeps_earlier_writes() {
    let mut initializer = ParamInitializer::with_weight_init(WeightsOnlyInit);
    let params = example_params();
    let mut buffer = iota(16);

    let result = initializer.init(&params, buffer.view_mut(), true);
    assert_eq!(
        result.err(),
        Some(LayoutError::InvalidInitializer(
            "cannot initialize bias b".to_string()
        ))
    );

    assert!(buffer.slice(s![..12]).iter().all(|&v| v == 9.0));
    assert_eq!(buffer.slice(s![12..]).to_vec(), vec![12.0, 13.0, 14.0, 15.0]);
}
