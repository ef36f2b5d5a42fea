// tests/session_tests.rs

use qplay::{CircuitBuilder, DisplayMode, Gate, GateRequest, PlayError, SingleQubit, TableOptions};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_fresh_session_shows_ground_state() -> Result<(), PlayError> {
    let q = SingleQubit::new(DisplayMode::Rich)?;
    let table = q.get_state()?;
    let rows: Vec<&str> = table.lines().skip(3).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("0        0        1.0000 + i0.0000   1.0000        0.00\u{00b0}"));
    assert!(rows[0].ends_with("</font>  1.0000"));
    assert!(rows[1].contains("0.0000 + i0.0000   0.0000              "));
    Ok(())
}

#[test]
fn test_session_angles_are_degrees() -> Result<(), PlayError> {
    init_logging();
    let mut q = SingleQubit::new(DisplayMode::Plain)?;
    q.apply_gate("H", None, true)?;
    q.apply_gate("P", Some(-90.0), true)?;
    assert_eq!(q.last_step(), 2);

    let table = q.get_state()?;
    let rows: Vec<&str> = table.lines().skip(3).collect();
    assert!(rows[1].contains(" 0.0000 - i0.7071"));
    assert!(rows[1].contains(" -90.00\u{00b0}"));
    assert!(rows[1].contains("\x1b[38;2;90;0;180m"));
    Ok(())
}

#[test]
fn test_session_renders_latest_reported_step() -> Result<(), PlayError> {
    let mut q = SingleQubit::new(DisplayMode::Rich)?;
    q.apply_gate("x", None, true)?;
    // Not reported: the table still reflects Step 1
    q.apply_gate("x", None, false)?;
    let table = q.get_state()?;
    let rows: Vec<&str> = table.lines().skip(3).collect();
    assert!(rows[1].starts_with("1        1        1.0000 + i0.0000"));
    Ok(())
}

#[test]
fn test_session_rejects_unknown_gate() -> Result<(), PlayError> {
    let mut q = SingleQubit::new(DisplayMode::Rich)?;
    let err = q.apply_gate("toffoli", None, true).unwrap_err();
    assert_eq!(err, PlayError::UnsupportedGate { operation: "toffoli".to_string() });
    Ok(())
}

#[test]
fn test_session_run_is_certain_for_basis_state() -> Result<(), PlayError> {
    let mut q = SingleQubit::new(DisplayMode::Rich)?;
    q.apply_gate("x", None, true)?;
    let result = q.run(100, Some(42))?;
    assert_eq!(result.count("1"), 100);
    assert_eq!(result.most_frequent(), Some("1"));
    Ok(())
}

#[test]
fn test_snapshot_tables_are_independent_of_later_gates() -> Result<(), PlayError> {
    let mut circuit = CircuitBuilder::new(2).add(GateRequest::new(Gate::H, 0)).build()?;
    circuit.report("superposed");
    circuit.add_gate(&GateRequest::new(Gate::X, 1).controlled_by([0]))?;
    circuit.report("bell");

    let options = TableOptions::default().with_mode(DisplayMode::Plain);
    let before = options.render_state(circuit.snapshot("superposed")?.state())?;
    let after = options.render_state(circuit.snapshot("bell")?.state())?;
    assert_ne!(before, after);

    // H on qubit 0 populates |00> and |10>
    let rows: Vec<&str> = before.lines().skip(3).collect();
    assert!(rows[2].starts_with("2        10       0.7071"));
    assert!(rows[3].starts_with("3        11       0.0000"));

    let rows: Vec<&str> = after.lines().skip(3).collect();
    assert!(rows[3].starts_with("3        11       0.7071"));
    Ok(())
}

#[test]
fn test_bell_sampling_only_hits_correlated_outcomes() -> Result<(), PlayError> {
    let circuit = CircuitBuilder::new(2)
        .add(GateRequest::new(Gate::H, 0))
        .add(GateRequest::new(Gate::X, 1).controlled_by([0]))
        .build()?;
    let result = circuit.run(500, Some(1))?;
    assert_eq!(result.count("00") + result.count("11"), 500);
    assert!(result.count("00") > 150);
    assert!(result.count("11") > 150);
    Ok(())
}
