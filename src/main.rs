use rand::{rngs::StdRng, SeedableRng};
use tracing::Level;
use unitfit::{Activation, Network, SampleTable, TrainingConfig, UnitSeeding, WeightRange};

fn main() -> unitfit::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();
    let mut rng = StdRng::seed_from_u64(12345);
    {
        let config = TrainingConfig {
            learning_rate: 0.01,
            max_iterations: 1000,
            output_weight_range: WeightRange::new(0.0, 1.0),
            input_weight_range: WeightRange::new(0.0, 1.0),
            bias_range: WeightRange::new(0.0, 1.0),
            log_interval: 100,
            ..TrainingConfig::default()
        };
        let data = SampleTable::linspace(|x| x, 0.0, 1.0, 5);
        fit(config, Activation::IDENTITY, &data, &mut rng)?;
    }
    {
        let config = TrainingConfig {
            learning_rate: 0.002,
            unit_count: 6,
            max_iterations: 20_000,
            max_error: 1e-3,
            seeding: UnitSeeding::PerUnit,
            log_interval: 2000,
            ..TrainingConfig::default()
        };
        let data = SampleTable::sample_function(&mut rng, f64::sin, -3.0..=3.0, 40)?;
        fit(config, Activation::TANH, &data, &mut rng)?;
    }
    {
        let config = TrainingConfig {
            learning_rate: 0.05,
            unit_count: 1,
            max_iterations: 5000,
            input_weight_range: WeightRange::new(1.0, 5.0),
            log_interval: 500,
            ..TrainingConfig::default()
        };
        let data = SampleTable::linspace(|x| if x < 0.0 { 0.0 } else { 1.0 }, -2.0, 2.0, 9);
        fit(config, Activation::SIGMOID, &data, &mut rng)?;
    }
    Ok(())
}

fn fit(
    config: TrainingConfig,
    activation: Activation,
    data: &SampleTable,
    rng: &mut StdRng,
) -> unitfit::Result<()> {
    let mut network = Network::from_config(config)?;
    network.set_network_functions(activation);
    network.set_data(data);
    network.initialize(rng);
    let summary = network.run()?;
    println!(
        "iterations: {}, error: {}, converged: {}",
        summary.iterations, summary.last_error, summary.converged
    );
    for sample in network.data() {
        println!("Input: {:.3}", sample.input);
        println!("Real: {:.3}", sample.expected_output);
        println!("Pred: {:.3}", network.predict(sample.input)?);
        println!("====================");
    }
    Ok(())
}
