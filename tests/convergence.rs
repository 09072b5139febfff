use perceptron::{Dataset, Perceptron, Sampler, TargetLine, NUM_INPUTS};
use rand::{rngs::StdRng, SeedableRng};

const MAX_EPOCHS: usize = 10_000;

fn gate(outputs: [bool; 4]) -> Dataset {
    let data = vec![
        0., 0., 1., //
        0., 1., 1., //
        1., 0., 1., //
        1., 1., 1., //
    ];

    Dataset::new(data, outputs.to_vec(), NUM_INPUTS).unwrap()
}

/// Trains until an epoch makes no correction, returning how many epochs it took.
fn epochs_to_converge(dataset: &Dataset, perceptron: &mut Perceptron) -> Option<usize> {
    (1..=MAX_EPOCHS).find(|_| dataset.train_epoch(perceptron).unwrap() == 0)
}

#[test]
fn converges_on_linearly_separable_gates() {
    let gates = [
        ("and", [false, false, false, true]),
        ("or", [false, true, true, true]),
        ("nand", [true, true, true, false]),
        ("x", [false, false, true, true]),
    ];

    for seed in 0..5 {
        for (name, outputs) in gates {
            let dataset = gate(outputs);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut p = Perceptron::new(NUM_INPUTS, &mut rng).unwrap();

            let epochs = epochs_to_converge(&dataset, &mut p);

            assert!(epochs.is_some(), "{name} did not converge (seed {seed})");
            assert_eq!(dataset.accuracy(&p).unwrap(), Some(1.), "{name}, seed {seed}");
        }
    }
}

#[test]
fn never_converges_on_xor() {
    let dataset = gate([false, true, true, false]);
    let mut rng = StdRng::seed_from_u64(0);
    let mut p = Perceptron::new(NUM_INPUTS, &mut rng).unwrap();

    for _ in 0..1000 {
        assert!(dataset.train_epoch(&mut p).unwrap() > 0);
    }

    assert!(dataset.accuracy(&p).unwrap().unwrap() < 1.);
}

#[test]
fn learns_the_target_line_online() {
    let target = TargetLine::new(0.5, 10.);
    let sampler = Sampler::new(400., 400., target).unwrap();

    for seed in [1, 2, 3] {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut p = Perceptron::new(NUM_INPUTS, &mut rng).unwrap();

        for _ in 0..5000 {
            let sample = sampler.sample(&mut rng);
            p.train(&sample.inputs(), sample.desired).unwrap();
        }

        let fresh = Dataset::generate(&sampler, &mut rng, 1000);
        let accuracy = dataset_accuracy(&fresh, &p);

        assert!(accuracy > 0.95, "accuracy {accuracy} with seed {seed}");
    }
}

fn dataset_accuracy(dataset: &Dataset, p: &Perceptron) -> f32 {
    dataset.accuracy(p).unwrap().unwrap()
}
