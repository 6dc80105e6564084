//! End-to-end scenarios: a handful of literal initial-state -> final-state
//! runs through the real opcode tables, plus a small integration smoke test
//! that chains LD/ADD/INC/JR together the way a ROM would.

use sm83_core::{Cpu, FlatMemoryBus, INSTRUCTIONS, MemoryBus, Register16};

fn step(cpu: &mut Cpu, bus: &mut FlatMemoryBus) -> u8 {
    let opcode = cpu.fetch(bus);
    let inst = &INSTRUCTIONS[opcode as usize];
    (inst.execute)(cpu, bus)
}

#[test]
fn add_a_b_overflow_sets_zero_half_carry_and_carry() {
    let mut cpu = Cpu::new();
    let mut bus = FlatMemoryBus::default();
    cpu.reg.a = 0x3A;
    cpu.reg.b = 0xC6;
    bus.write(0x0100, 0x80); // ADD A,B

    let cycles = step(&mut cpu, &mut bus);

    assert_eq!(cpu.reg.a, 0x00);
    assert!(cpu.reg.get_flag(sm83_core::Flag::Z));
    assert!(!cpu.reg.get_flag(sm83_core::Flag::N));
    assert!(cpu.reg.get_flag(sm83_core::Flag::H));
    assert!(cpu.reg.get_flag(sm83_core::Flag::C));
    assert_eq!(cycles, 1);
}

#[test]
fn sbc_a_b_with_incoming_carry() {
    let mut cpu = Cpu::new();
    let mut bus = FlatMemoryBus::default();
    cpu.reg.a = 0x3B;
    cpu.reg.b = 0x2A;
    cpu.reg.set_flag(sm83_core::Flag::C, true);
    bus.write(0x0100, 0x98); // SBC A,B

    let cycles = step(&mut cpu, &mut bus);

    assert_eq!(cpu.reg.a, 0x10);
    assert!(!cpu.reg.get_flag(sm83_core::Flag::Z));
    assert!(cpu.reg.get_flag(sm83_core::Flag::N));
    assert!(!cpu.reg.get_flag(sm83_core::Flag::H));
    assert!(!cpu.reg.get_flag(sm83_core::Flag::C));
    assert_eq!(cycles, 1);
}

#[test]
fn inc_dec_hlp_sequence_walks_through_the_boundary() {
    let mut cpu = Cpu::new();
    let mut bus = FlatMemoryBus::default();
    cpu.reg.set16(Register16::HL, 0x4000);
    bus.write(0x4000, 0xFE);
    bus.write(0x0100, 0x34); // INC (HL)
    bus.write(0x0101, 0x34); // INC (HL)
    bus.write(0x0102, 0x35); // DEC (HL)
    bus.write(0x0103, 0x35); // DEC (HL)

    step(&mut cpu, &mut bus);
    assert_eq!(bus.read(0x4000), 0xFF);

    step(&mut cpu, &mut bus);
    assert_eq!(bus.read(0x4000), 0x00);
    assert!(cpu.reg.get_flag(sm83_core::Flag::Z));
    assert!(cpu.reg.get_flag(sm83_core::Flag::H));

    step(&mut cpu, &mut bus);
    assert_eq!(bus.read(0x4000), 0xFF);
    assert!(cpu.reg.get_flag(sm83_core::Flag::N));
    assert!(cpu.reg.get_flag(sm83_core::Flag::H));

    step(&mut cpu, &mut bus);
    assert_eq!(bus.read(0x4000), 0xFE);
    assert!(cpu.reg.get_flag(sm83_core::Flag::N));
    assert!(!cpu.reg.get_flag(sm83_core::Flag::H));
}

#[test]
fn ld_hl_sp_plus_r8_computes_carry_from_the_low_byte() {
    let mut cpu = Cpu::new();
    let mut bus = FlatMemoryBus::default();
    cpu.reg.set16(Register16::SP, 0xFFF8);
    cpu.reg.pc = 0x0000;
    bus.write(0x0000, 0xF8); // LD HL,SP+r8
    bus.write(0x0001, 0x08); // r8 = +8

    let cycles = step(&mut cpu, &mut bus);

    assert_eq!(cpu.reg.get16(Register16::HL), 0x0000);
    assert!(!cpu.reg.get_flag(sm83_core::Flag::Z));
    assert!(!cpu.reg.get_flag(sm83_core::Flag::N));
    assert!(cpu.reg.get_flag(sm83_core::Flag::H));
    assert!(cpu.reg.get_flag(sm83_core::Flag::C));
    assert_eq!(cycles, 3);
}

#[test]
fn jr_nz_branches_or_falls_through_depending_on_zero_flag() {
    let mut cpu = Cpu::new();
    let mut bus = FlatMemoryBus::default();
    cpu.reg.pc = 0x1000;
    bus.write(0x1000, 0x20); // JR NZ,r8
    bus.write(0x1001, 0x05);
    cpu.reg.set_flag(sm83_core::Flag::Z, false);

    let cycles = step(&mut cpu, &mut bus);
    assert_eq!(cpu.reg.pc, 0x1007);
    assert_eq!(cycles, 3);

    cpu.reg.pc = 0x1000;
    cpu.reg.set_flag(sm83_core::Flag::Z, true);
    let cycles = step(&mut cpu, &mut bus);
    assert_eq!(cpu.reg.pc, 0x1002);
    assert_eq!(cycles, 2);
}

/// A nine-term Fibonacci generator, assembled by hand, run through the real
/// stepper the way a cartridge ROM would be: it loops storing each sum to
/// `(HL)` until a counter hits zero, then falls into a `0x76` sentinel byte
/// the test treats as a stop marker rather than letting the CPU execute it
/// as HALT.
#[test]
fn fibonacci_program_writes_nine_terms_through_the_stepper() {
    let program: &[(u16, u8)] = &[
        (0x0100, 0x21), (0x0101, 0x02), (0x0102, 0xB0), // LD HL,0xB002
        (0x0103, 0x3E), (0x0104, 0x01),                 // LD A,1
        (0x0105, 0x06), (0x0106, 0x01),                 // LD B,1
        (0x0107, 0x16), (0x0108, 0x09),                 // LD D,9
        (0x0109, 0x80),                                 // loop: ADD A,B
        (0x010A, 0x77),                                 // LD (HL),A
        (0x010B, 0x23),                                 // INC HL
        (0x010C, 0x4F),                                 // LD C,A
        (0x010D, 0x78),                                 // LD A,B
        (0x010E, 0x41),                                 // LD B,C
        (0x010F, 0x15),                                 // DEC D
        (0x0110, 0x20), (0x0111, 0xF7),                 // JR NZ,loop
        (0x0112, 0x76),                                 // sentinel stop byte
    ];

    let mut cpu = Cpu::new();
    let mut bus = FlatMemoryBus::default();
    for &(addr, value) in program {
        bus.write(addr, value);
    }

    let mut steps = 0;
    while bus.read(cpu.reg.pc) != 0x76 && steps < 10_000 {
        step(&mut cpu, &mut bus);
        steps += 1;
    }

    assert!(steps < 10_000, "program did not reach the stop sentinel");
    let terms: Vec<u8> = (0xB002u16..0xB00B).map(|a| bus.read(a)).collect();
    assert_eq!(terms, vec![2, 3, 5, 8, 13, 21, 34, 55, 89]);
}
