use ferrite_clf::{Network, NetworkSpec, TrainConfig, train_loop};

fn main() {
    // Three 2-D clusters, one per class.
    let centers = [(0.2, 0.2), (0.8, 0.3), (0.5, 0.9)];
    let mut inputs = Vec::new();
    let mut labels = Vec::new();
    for i in 0..90 {
        let class = i % 3;
        let (cx, cy) = centers[class];
        let angle = i as f64 * 2.399;
        let r = 0.08 * (i as f64 * 0.37).sin().abs();
        inputs.push(vec![cx + r * angle.cos(), cy + r * angle.sin()]);
        labels.push(class);
    }

    let mut network = Network::new(&NetworkSpec::new(2, 3, vec![6], 1))
        .expect("valid network spec");

    let history = train_loop(&mut network, &inputs, &labels, &TrainConfig::new(0.5, 500))
        .expect("training data matches the network");

    for stats in history.iter().step_by(100) {
        println!("Epoch {}: loss = {:.6}", stats.epoch, stats.train_loss);
    }

    let predicted = network.predict(&inputs).expect("same width as training rows");
    let correct = predicted.iter().zip(&labels).filter(|(p, y)| p == y).count();
    println!("Training accuracy: {}/{}", correct, labels.len());

    for center in &centers {
        let sample = vec![center.0, center.1];
        let out = network.forward(&sample).expect("two features");
        println!("Input: {:?} -> Output: {:.4?}", sample, out);
    }
}
