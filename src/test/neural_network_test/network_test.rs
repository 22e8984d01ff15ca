use super::*;

fn weight_sum(network: &Network) -> usize {
    network
        .layers()
        .map(|layer| layer.get_neuron_count() * layer.get_input_width())
        .sum()
}

fn assert_wiring(network: &Network) {
    let last = network.get_layer_count() - 1;
    assert_eq!(
        network.get_layer(0).unwrap().get_input_width(),
        network.get_input_width()
    );
    assert_eq!(
        network.get_layer(last).unwrap().get_neuron_count(),
        network.get_output_width()
    );
    for i in 1..network.get_layer_count() {
        assert_eq!(
            network.get_layer(i).unwrap().get_input_width(),
            network.get_layer(i - 1).unwrap().get_neuron_count()
        );
    }
}

#[test]
fn network_construction_invariant_test() {
    init_logger();
    for (input, output, hidden) in [(1, 1, 0), (4, 2, 1), (3, 7, 3), (10, 1, 5)] {
        let network = Network::new(input, output, hidden).unwrap();

        assert_eq!(network.get_layer_count(), hidden + 1);
        assert_eq!(network.get_hidden_layer_count(), hidden);
        assert_wiring(&network);
        assert_eq!(network.get_total_weight_count(), weight_sum(&network));
    }
}

#[test]
fn network_default_hidden_width_test() {
    let network = Network::new(3, 5, 2).unwrap();

    for i in 0..2 {
        assert_eq!(network.get_layer(i).unwrap().get_neuron_count(), 5);
    }
    // 3*5 + 5*5 + 5*5
    assert_eq!(network.get_total_weight_count(), 65);
    assert_eq!(network.get_param_count(), 65 + 15);
}

#[test]
fn network_from_config_test() {
    let config = NetworkConfig::new(4, 2, vec![8, 6]);
    let network = Network::from_config(&config).unwrap();

    assert_eq!(network.get_config(), &config);
    assert_eq!(network.get_layer_count(), 3);
    assert_eq!(network.get_layer(0).unwrap().get_neuron_count(), 8);
    assert_eq!(network.get_layer(1).unwrap().get_input_width(), 8);
    assert_eq!(network.get_layer(1).unwrap().get_neuron_count(), 6);
    assert_eq!(network.get_layer(2).unwrap().get_input_width(), 6);
    assert_wiring(&network);
    assert_eq!(network.get_total_weight_count(), 4 * 8 + 8 * 6 + 6 * 2);
}

#[test]
fn network_invalid_config_test() {
    assert!(matches!(
        Network::new(0, 2, 1),
        Err(NetworkError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        Network::new(2, 0, 1),
        Err(NetworkError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        Network::from_config(&NetworkConfig::new(2, 2, vec![3, 0])),
        Err(NetworkError::InvalidConfiguration(_))
    ));
}

#[test]
fn network_get_layer_out_of_range_test() {
    let mut network = Network::new(2, 2, 1).unwrap();
    assert_eq!(
        network.get_layer(2).unwrap_err(),
        NetworkError::IndexOutOfRange { index: 2, len: 2 }
    );
    assert!(network.get_layer_mut(3).is_err());
}

#[test]
fn network_forward_test() {
    init_logger();
    let mut network = Network::from_config(&NetworkConfig::new(2, 1, vec![2])).unwrap();
    set_network_activation(&mut network, &ActivationFunction::identity());

    // hidden: h0 = x0 + x1, h1 = x0 - x1 + 1
    {
        let mut hidden = network.get_layer_mut(0).unwrap();
        hidden.get_neuron_mut(0).unwrap().set_weights_to_ones();
        let mut h1 = hidden.get_neuron_mut(1).unwrap();
        h1.set_weight(0, 1.0).unwrap();
        h1.set_weight(1, -1.0).unwrap();
        h1.set_bias(1.0);
    }
    // output: y = 2 * h0 + 3 * h1
    {
        let mut out = network.get_neuron_mut(1, 0).unwrap();
        out.set_weight(0, 2.0).unwrap();
        out.set_weight(1, 3.0).unwrap();
    }

    let output = network.forward(&array![3.0, 1.0]).unwrap();
    // h0 = 4, h1 = 3, y = 8 + 9
    assert_eq!(output, array![17.0]);
    assert_eq!(network.get_layer(0).unwrap().get_outputs(), array![4.0, 3.0]);
}

#[test]
fn network_forward_sigmoid_test() {
    let mut network = Network::new(4, 1, 0).unwrap();
    set_network_activation(&mut network, &ActivationFunction::sigmoid());
    {
        let mut neuron = network.get_neuron_mut(0, 0).unwrap();
        for i in 0..4 {
            neuron.set_weight(i, (i + 1) as f64).unwrap();
        }
        neuron.set_bias(0.2);
    }

    let output = network.forward(&array![0.1, 0.2, 0.3, 0.4]).unwrap();
    assert_eq!(output[0], sigmoid(3.2));
}

#[test]
fn network_forward_is_deterministic_test() {
    let mut network = Network::new(3, 2, 2).unwrap();
    set_network_activation(&mut network, &ActivationFunction::tanh());
    network.set_weights_random();

    let x = array![0.3, -0.1, 0.8];
    let first = network.forward(&x).unwrap();
    let second = network.forward(&x).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn network_forward_errors_test() {
    let mut network = Network::new(3, 2, 1).unwrap();
    assert_eq!(
        network.forward(&array![1.0, 2.0]),
        Err(NetworkError::DimensionMismatch {
            expected: 3,
            found: 2
        })
    );
    assert_eq!(
        network.forward(&array![1.0, 2.0, 3.0]),
        Err(NetworkError::UnconfiguredFunction)
    );

    // only the first layer configured, the second one still fails
    network
        .get_layer_mut(0)
        .unwrap()
        .set_activation(&ActivationFunction::relu());
    network.get_neuron_mut(0, 0).unwrap().set_weights_to_ones();
    assert_eq!(
        network.forward(&array![1.0, 2.0, 3.0]),
        Err(NetworkError::UnconfiguredFunction)
    );
    // and the first layer was not run
    assert!(network.get_layer(0).unwrap().get_outputs().iter().all(|&v| v == 0.0));
    assert!(network.get_neuron_mut(1, 2).is_err());
    assert!(network.get_neuron_mut(2, 0).is_err());
}

#[test]
fn network_mutation_keeps_shape_test() {
    let mut network = Network::from_config(&NetworkConfig::new(3, 2, vec![5, 4])).unwrap();
    let expected = weight_sum(&network);
    assert_eq!(network.get_total_weight_count(), 3 * 5 + 5 * 4 + 4 * 2);

    network.set_weights_random();
    for mut layer in network.layers_mut() {
        layer.set_activation(&ActivationFunction::tanh());
        for mut neuron in layer.neurons_mut() {
            neuron.set_weights_to_ones();
            neuron.set_weight_gradients_to_zero();
            neuron.set_bias(0.25);
        }
    }
    network
        .get_layer_mut(1)
        .unwrap()
        .set_activation_functions(relu, relu_derivative, 3, "relu")
        .unwrap();
    network.get_layer_mut(2).unwrap().set_weights_random();

    assert_wiring(&network);
    for layer in network.layers() {
        assert!(layer.neurons().all(|n| n.get_input_width() == layer.get_input_width()));
    }
    assert_eq!(weight_sum(&network), expected);
    assert_eq!(network.get_total_weight_count(), expected);
    assert_eq!(network.clone().get_total_weight_count(), expected);

    // the handles read through to the layer and neuron
    let layer = network.get_layer_mut(1).unwrap();
    assert_eq!(layer.get_input_width(), 5);
    assert_eq!(layer.get_neuron(3).unwrap().get_activation().unwrap().get_name(), "relu");
    let neuron = layer.into_neuron_mut(0).unwrap();
    assert_eq!(neuron.get_bias(), 0.25);
    assert_eq!(neuron.get_input_width(), 5);

    assert_eq!(network.forward(&array![0.1, 0.2, 0.3]).unwrap().len(), 2);
}

#[test]
fn network_clone_is_deep_test() {
    let mut a = Network::new(3, 2, 2).unwrap();
    a.set_weights_random();
    let mut b = a.clone();

    assert_eq!(a, b);
    assert_eq!(b.get_total_weight_count(), a.get_total_weight_count());
    assert_eq!(b.get_total_weight_count(), weight_sum(&b));
    for i in 0..a.get_layer_count() {
        let (la, lb) = (a.get_layer(i).unwrap(), b.get_layer(i).unwrap());
        assert_eq!(la.get_input_width(), lb.get_input_width());
        assert_eq!(la.get_neuron_count(), lb.get_neuron_count());
        for j in 0..la.get_neuron_count() {
            assert_eq!(
                la.get_neuron(j).unwrap().get_input_width(),
                lb.get_neuron(j).unwrap().get_input_width()
            );
        }
    }

    let before = a.get_layer(1).unwrap().get_neuron(0).unwrap().clone();
    {
        let mut neuron = b.get_layer_mut(1).unwrap().into_neuron_mut(0).unwrap();
        neuron.set_weight(0, 123.0).unwrap();
        neuron.set_bias(-7.0);
        neuron.set_weight_gradient(1, 0.5).unwrap();
        neuron.set_bias_gradient(2.0);
    }
    assert_eq!(a.get_layer(1).unwrap().get_neuron(0).unwrap(), &before);

    // and the other way around
    a.get_layer_mut(0)
        .unwrap()
        .get_neuron_mut(0)
        .unwrap()
        .set_weight(2, 55.0)
        .unwrap();
    assert_ne!(
        b.get_layer(0).unwrap().get_neuron(0).unwrap().get_weight(2).unwrap(),
        55.0
    );
}

#[test]
fn network_assign_is_deep_test() {
    let source = Network::new(2, 2, 1).unwrap();
    let mut target = Network::new(5, 1, 3).unwrap();

    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.get_layer_count(), 2);
    assert_eq!(target.get_total_weight_count(), source.get_total_weight_count());

    target
        .get_layer_mut(0)
        .unwrap()
        .get_neuron_mut(1)
        .unwrap()
        .set_weight(0, 1.0)
        .unwrap();
    assert_eq!(
        source.get_layer(0).unwrap().get_neuron(1).unwrap().get_weight(0).unwrap(),
        0.0
    );
}

#[test]
fn network_summary_test() {
    let network = Network::from_config(&NetworkConfig::new(4, 2, vec![3])).unwrap();
    let summary = network.to_string();

    assert!(summary.contains("Layer_0 (Hidden)"));
    assert!(summary.contains("Layer_1 (Output)"));
    assert!(summary.contains("Total weights: 18"));
    assert!(summary.contains("Total params: 23"));
}
