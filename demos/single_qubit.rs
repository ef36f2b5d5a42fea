//! Steps a single qubit through a few gates and prints the table as browser
//! markup after each reported step.

use qplay::{DisplayMode, PlayError, SingleQubit};

fn main() -> Result<(), PlayError> {
    env_logger::init();

    let mut qubit = SingleQubit::new(DisplayMode::Rich)?;
    let steps: [(&str, Option<f64>); 4] = [("h", None), ("rz", Some(45.0)), ("ry", Some(30.0)), ("z", None)];

    for (gate, angle) in steps {
        qubit.apply_gate(gate, angle, true)?;
        println!("Step {} ({}):{}", qubit.last_step(), gate, qubit.get_state()?);
    }

    // Mismatched angle usage is rejected before anything is applied
    if let Err(e) = qubit.apply_gate("x", Some(90.0), true) {
        println!("Rejected: {}", e);
    }

    println!("{}", qubit.run(256, Some(7))?);
    Ok(())
}
