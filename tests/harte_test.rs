//! Tom Harte per-opcode conformance harness.
//!
//! Each JSON file under `tests/harte/` holds an array of single-instruction
//! cases named after the opcode byte (e.g. `a9.json`). Per case the harness:
//! reset, seed RAM, seed registers, execute one step, then compare registers,
//! every listed RAM byte, and the cycle count against the length of the
//! case's bus-cycle list.
//!
//! The fixture directory is not checked in; the harness skips cleanly when it
//! is absent so the suite stays self-contained. Drop the JSON files from
//! <https://github.com/TomHarte/ProcessorTests> (nes6502 set) into
//! `tests/harte/` to run them.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use rp2a03::{FlatMemory, CPU};

#[derive(Debug, Deserialize)]
struct TestCase {
    name: String,
    initial: MachineState,
    #[serde(rename = "final")]
    final_state: MachineState,
    /// One entry per bus cycle; only the length is compared.
    cycles: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct MachineState {
    pc: u16,
    s: u8,
    a: u8,
    x: u8,
    y: u8,
    p: u8,
    ram: Vec<(u16, u8)>,
}

fn run_case(case: &TestCase) {
    let mut cpu = CPU::new(FlatMemory::new());

    // Harness protocol: reset zeroes the cycle counter before seeding
    cpu.reset();

    for &(addr, value) in &case.initial.ram {
        cpu.write(addr, value);
    }

    cpu.set_pc(case.initial.pc);
    cpu.set_sp(case.initial.s);
    cpu.set_a(case.initial.a);
    cpu.set_x(case.initial.x);
    cpu.set_y(case.initial.y);
    cpu.set_p(case.initial.p);

    cpu.step()
        .unwrap_or_else(|e| panic!("case '{}': {}", case.name, e));

    assert_eq!(cpu.pc(), case.final_state.pc, "case '{}': PC", case.name);
    assert_eq!(cpu.sp(), case.final_state.s, "case '{}': S", case.name);
    assert_eq!(cpu.a(), case.final_state.a, "case '{}': A", case.name);
    assert_eq!(cpu.x(), case.final_state.x, "case '{}': X", case.name);
    assert_eq!(cpu.y(), case.final_state.y, "case '{}': Y", case.name);
    assert_eq!(cpu.p(), case.final_state.p, "case '{}': P", case.name);
    assert_eq!(
        cpu.cycles(),
        case.cycles.len() as u64,
        "case '{}': cycle count",
        case.name
    );

    for &(addr, expected) in &case.final_state.ram {
        assert_eq!(
            cpu.read(addr),
            expected,
            "case '{}': RAM at {:04X}",
            case.name,
            addr
        );
    }
}

#[test]
fn harte_conformance() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/harte");
    if !dir.is_dir() {
        eprintln!("tests/harte not present; skipping conformance fixtures");
        return;
    }

    let mut files: Vec<_> = fs::read_dir(&dir)
        .expect("readable fixture directory")
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    assert!(
        !files.is_empty(),
        "tests/harte exists but holds no JSON fixtures"
    );

    for path in files {
        let data = fs::read_to_string(&path).expect("readable fixture file");
        let cases: Vec<TestCase> =
            serde_json::from_str(&data).unwrap_or_else(|e| panic!("{}: {}", path.display(), e));

        for case in &cases {
            run_case(case);
        }
    }
}
