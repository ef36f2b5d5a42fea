//! Builds a Bell pair through the gate resolver and prints its state table
//! after each step, in terminal colours.

use qplay::{CircuitBuilder, DisplayMode, Gate, GateRequest, PlayError, TableOptions};

fn main() -> Result<(), PlayError> {
    env_logger::init();

    let mut circuit = CircuitBuilder::new(2).build()?;
    let options = TableOptions::default().with_mode(DisplayMode::Plain);

    println!("Initial state:{}", options.render_state(circuit.state())?);

    // 1. Superpose the first qubit
    circuit.add_gate(&GateRequest::new(Gate::H, 0))?;
    circuit.report("after H");

    // 2. Entangle: one control resolves to `cx`
    circuit.add_gate(&GateRequest::new(Gate::X, 1).controlled_by([0]))?;
    circuit.report("after CX");

    // 3. Tilt the phase of |11> with a controlled phase gate
    circuit.add_gate(&GateRequest::new(Gate::P, 1).controlled_by([0]).with_angle(std::f64::consts::FRAC_PI_2))?;
    circuit.report("after CP");

    println!("Circuit:\n{}", circuit);
    for snapshot in circuit.reports() {
        println!("Snapshot '{}':{}", snapshot.label(), options.render_state(snapshot.state())?);
    }

    println!("{}", circuit.run(1000, None)?);
    Ok(())
}
