use sigmoid_mlp::NetworkSpec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/xor.json");
    let mut network = NetworkSpec::load_json(path)?.build()?;

    print!("{network}");

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];

    for input in &inputs {
        let output = network.run(input)?;
        println!("Input: {:?} -> Output: {:.10}", input, output[0]);
    }
    Ok(())
}
