use ferrite_clf::{decode, encode, Error, Network, NetworkSpec, TrainConfig, train_loop};

/// Class 0 scattered around (0, 0), class 1 around (10, 10), alternating.
fn separable_blobs(n: usize) -> (Vec<Vec<f64>>, Vec<usize>) {
    let mut inputs = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);
    for i in 0..n {
        let class = i % 2;
        let jx = 0.5 * (i as f64 * 1.7).sin();
        let jy = 0.5 * (i as f64 * 2.3).cos();
        let (bx, by) = if class == 0 { (0.0, 0.0) } else { (10.0, 10.0) };
        inputs.push(vec![bx + jx, by + jy]);
        labels.push(class);
    }
    (inputs, labels)
}

fn all_weights(network: &Network) -> Vec<Vec<f64>> {
    network
        .layers()
        .iter()
        .flat_map(|layer| layer.neurons.iter().map(|n| n.weights.clone()))
        .collect()
}

#[test]
fn forward_shapes_match_configuration() {
    let configs: [(usize, usize, Vec<usize>); 4] = [
        (4, 3, vec![5]),
        (7, 3, vec![]),
        (2, 5, vec![8, 4, 2]),
        (1, 1, vec![1]),
    ];
    for (input_dim, output_dim, hidden) in configs {
        let mut net = Network::new(&NetworkSpec::new(input_dim, output_dim, hidden.clone(), 9)).unwrap();
        let sample = vec![0.25; input_dim];
        let out = net.forward(&sample).unwrap();
        assert_eq!(out.len(), output_dim);

        let expected_sizes: Vec<usize> = hidden.iter().copied().chain([output_dim]).collect();
        let sizes: Vec<usize> = net.layers().iter().map(|l| l.outputs().len()).collect();
        assert_eq!(sizes, expected_sizes);
    }
}

#[test]
fn one_hot_round_trip_through_decode() {
    for n_classes in 1..10 {
        for label in 0..n_classes {
            assert_eq!(decode(&encode(label, n_classes).unwrap()).unwrap(), label);
        }
    }
}

#[test]
fn identical_seeds_give_identical_networks() {
    let spec = NetworkSpec::new(4, 3, vec![5], 1);
    let mut a = Network::new(&spec).unwrap();
    let mut b = Network::new(&spec).unwrap();
    assert_eq!(all_weights(&a), all_weights(&b));

    let other = Network::new(&NetworkSpec { seed: 2, ..spec.clone() }).unwrap();
    assert_ne!(all_weights(&a), all_weights(&other));

    let (inputs, labels) = separable_blobs(20);
    let inputs: Vec<Vec<f64>> = inputs.into_iter().map(|r| vec![r[0], r[1], r[0] * 0.1, r[1] * 0.1]).collect();
    let labels: Vec<usize> = labels.into_iter().map(|l| l * 2).collect();
    let config = TrainConfig::new(0.1, 30);
    let history_a = train_loop(&mut a, &inputs, &labels, &config).unwrap();
    let history_b = train_loop(&mut b, &inputs, &labels, &config).unwrap();

    assert_eq!(all_weights(&a), all_weights(&b));
    let losses_a: Vec<f64> = history_a.iter().map(|s| s.train_loss).collect();
    let losses_b: Vec<f64> = history_b.iter().map(|s| s.train_loss).collect();
    assert_eq!(losses_a, losses_b);
}

#[test]
fn separable_blobs_reach_high_training_accuracy() {
    let (inputs, labels) = separable_blobs(40);
    let mut net = Network::new(&NetworkSpec::new(2, 2, vec![3], 1)).unwrap();
    net.train(&inputs, &labels, 1.0, 400).unwrap();

    let predicted = net.predict(&inputs).unwrap();
    let correct = predicted.iter().zip(&labels).filter(|(p, y)| p == y).count();
    let accuracy = correct as f64 / labels.len() as f64;
    assert!(accuracy >= 0.95, "training accuracy {accuracy}");
}

#[test]
fn errors_surface_at_the_api_boundary() {
    assert!(matches!(
        Network::new(&NetworkSpec::new(4, 3, vec![0], 1)),
        Err(Error::InvalidConfiguration(_))
    ));

    let mut net = Network::new(&NetworkSpec::new(2, 2, vec![3], 1)).unwrap();
    let rows = vec![vec![0.0, 1.0], vec![1.0, 0.0]];

    assert!(matches!(net.train(&rows, &[0, 1], -0.1, 10), Err(Error::InvalidConfiguration(_))));
    assert!(matches!(net.train(&rows, &[0, 1], 0.1, 0), Err(Error::InvalidConfiguration(_))));
    assert!(matches!(net.train(&rows, &[0, 5], 0.1, 10), Err(Error::InvalidLabel { label: 5, n_classes: 2 })));
    assert!(matches!(
        net.train(&[vec![0.0, 1.0, 2.0]], &[0], 0.1, 10),
        Err(Error::DimensionMismatch { expected: 2, actual: 3, .. })
    ));
    assert!(matches!(
        net.predict(&[vec![0.0]]),
        Err(Error::DimensionMismatch { expected: 2, actual: 1, .. })
    ));
}
