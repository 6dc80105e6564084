//! NOP, the branch families (JR/JP/CALL/RET/RST), PUSH/POP, the flag/IME
//! toggles (DI/EI/SCF/CCF/CPL/HALT/STOP/RETI), the DAA wrapper, and the
//! fallback for opcodes the table has no real handler for.

use super::Cpu;
use crate::memory::MemoryBus;
use crate::registers::{Flag, Register16};

impl Cpu {
    pub fn op_nop(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        1
    }

    // --- JP ---
    fn conditional_jp(&mut self, bus: &mut dyn MemoryBus, condition: bool) -> u8 {
        let addr = self.fetch16(bus);
        if condition {
            self.reg.pc = addr;
            4
        } else {
            3
        }
    }
    pub fn op_jp_a16(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        self.conditional_jp(bus, true)
    }
    pub fn op_jp_hl(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.pc = self.reg.get16(Register16::HL);
        1
    }
    pub fn op_jp_nz_a16(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let taken = !self.get_flag(Flag::Z);
        self.conditional_jp(bus, taken)
    }
    pub fn op_jp_z_a16(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let taken = self.get_flag(Flag::Z);
        self.conditional_jp(bus, taken)
    }
    pub fn op_jp_nc_a16(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let taken = !self.get_flag(Flag::C);
        self.conditional_jp(bus, taken)
    }
    pub fn op_jp_c_a16(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let taken = self.get_flag(Flag::C);
        self.conditional_jp(bus, taken)
    }

    // --- JR ---
    fn conditional_jr(&mut self, bus: &mut dyn MemoryBus, condition: bool) -> u8 {
        let offset = self.fetch(bus) as i8;
        if condition {
            self.reg.pc = self.reg.pc.wrapping_add(offset as i16 as u16);
            3
        } else {
            2
        }
    }
    pub fn op_jr_r8(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        self.conditional_jr(bus, true)
    }
    pub fn op_jr_nz_r8(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let taken = !self.get_flag(Flag::Z);
        self.conditional_jr(bus, taken)
    }
    pub fn op_jr_z_r8(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let taken = self.get_flag(Flag::Z);
        self.conditional_jr(bus, taken)
    }
    pub fn op_jr_nc_r8(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let taken = !self.get_flag(Flag::C);
        self.conditional_jr(bus, taken)
    }
    pub fn op_jr_c_r8(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let taken = self.get_flag(Flag::C);
        self.conditional_jr(bus, taken)
    }

    // --- CALL ---
    fn conditional_call(&mut self, bus: &mut dyn MemoryBus, condition: bool) -> u8 {
        let addr = self.fetch16(bus);
        if condition {
            let return_pc = self.reg.pc;
            self.push(bus, return_pc);
            self.reg.pc = addr;
            6
        } else {
            3
        }
    }
    pub fn op_call_a16(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        self.conditional_call(bus, true)
    }
    pub fn op_call_nz_a16(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let taken = !self.get_flag(Flag::Z);
        self.conditional_call(bus, taken)
    }
    pub fn op_call_z_a16(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let taken = self.get_flag(Flag::Z);
        self.conditional_call(bus, taken)
    }
    pub fn op_call_nc_a16(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let taken = !self.get_flag(Flag::C);
        self.conditional_call(bus, taken)
    }
    pub fn op_call_c_a16(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let taken = self.get_flag(Flag::C);
        self.conditional_call(bus, taken)
    }

    // --- RET / RETI ---
    fn conditional_ret(&mut self, bus: &mut dyn MemoryBus, condition: bool) -> u8 {
        if condition {
            self.reg.pc = self.pop(bus);
            5
        } else {
            2
        }
    }
    pub fn op_ret(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        self.reg.pc = self.pop(bus);
        4
    }
    pub fn op_ret_nz(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let taken = !self.get_flag(Flag::Z);
        self.conditional_ret(bus, taken)
    }
    pub fn op_ret_z(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let taken = self.get_flag(Flag::Z);
        self.conditional_ret(bus, taken)
    }
    pub fn op_ret_nc(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let taken = !self.get_flag(Flag::C);
        self.conditional_ret(bus, taken)
    }
    pub fn op_ret_c(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let taken = self.get_flag(Flag::C);
        self.conditional_ret(bus, taken)
    }
    pub fn op_reti(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        self.reg.pc = self.pop(bus);
        self.irq_enabled = true;
        4
    }

    // --- RST ---
    fn rst(&mut self, bus: &mut dyn MemoryBus, vector: u16) -> u8 {
        let return_pc = self.reg.pc;
        self.push(bus, return_pc);
        self.reg.pc = vector;
        4
    }
    pub fn op_rst_00h(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        self.rst(bus, 0x0000)
    }
    pub fn op_rst_08h(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        self.rst(bus, 0x0008)
    }
    pub fn op_rst_10h(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        self.rst(bus, 0x0010)
    }
    pub fn op_rst_18h(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        self.rst(bus, 0x0018)
    }
    pub fn op_rst_20h(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        self.rst(bus, 0x0020)
    }
    pub fn op_rst_28h(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        self.rst(bus, 0x0028)
    }
    pub fn op_rst_30h(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        self.rst(bus, 0x0030)
    }
    pub fn op_rst_38h(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        self.rst(bus, 0x0038)
    }

    // --- PUSH / POP ---
    pub fn op_push_bc(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = self.reg.get16(Register16::BC);
        self.push(bus, value);
        4
    }
    pub fn op_push_de(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = self.reg.get16(Register16::DE);
        self.push(bus, value);
        4
    }
    pub fn op_push_hl(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = self.reg.get16(Register16::HL);
        self.push(bus, value);
        4
    }
    pub fn op_push_af(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = self.reg.get16(Register16::AF);
        self.push(bus, value);
        4
    }
    pub fn op_pop_bc(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = self.pop(bus);
        self.reg.set16(Register16::BC, value);
        3
    }
    pub fn op_pop_de(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = self.pop(bus);
        self.reg.set16(Register16::DE, value);
        3
    }
    pub fn op_pop_hl(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = self.pop(bus);
        self.reg.set16(Register16::HL, value);
        3
    }
    pub fn op_pop_af(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = self.pop(bus);
        self.reg.set16(Register16::AF, value);
        3
    }

    // --- IME / power state ---
    pub fn op_di(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.irq_enabled = false;
        1
    }
    pub fn op_ei(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.irq_enabled = true;
        1
    }
    pub fn op_halt(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.halted = true;
        1
    }
    pub fn op_stop(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        // STOP is encoded as a two-byte opcode; the second byte is conventionally
        // 0x00 and is simply discarded here.
        self.fetch(bus);
        self.stopped = true;
        1
    }

    // --- Flags ---
    pub fn op_scf(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
        1
    }
    pub fn op_ccf(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
        1
    }
    pub fn op_cpl(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.a = !self.reg.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        1
    }
    pub fn op_daa(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.daa();
        1
    }

    /// The table slot for 0xCB. `Cpu::step` special-cases this opcode before
    /// ever reaching the table, so this function body never runs; it exists
    /// only so `INSTRUCTIONS[0xCB]` has something to point at.
    pub fn op_prefix_cb(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        1
    }

    /// Falls back for opcode slots with no real encoding (0xD3, 0xDB, 0xDD,
    /// 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD). Leaves CPU state
    /// otherwise unchanged and returns 0 cycles, as if the byte were a
    /// zero-cycle NOP, so a core driven off untrusted ROM bytes degrades
    /// instead of aborting.
    pub fn op_invalid(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let pc = self.reg.pc.wrapping_sub(1);
        let opcode = bus.read(pc);
        log::warn!("invalid opcode {opcode:#04X} encountered at PC={pc:#06X}");
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemoryBus;

    #[test]
    fn jr_nz_not_taken_consumes_fewer_cycles_than_taken() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemoryBus::new();
        bus.write(cpu.reg.pc, 0x02);
        cpu.set_flag(Flag::Z, true);
        let cycles = cpu.op_jr_nz_r8(&mut bus);
        assert_eq!(cycles, 2);
    }

    #[test]
    fn call_and_ret_round_trip_pc() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemoryBus::new();
        let start_pc = cpu.reg.pc;
        bus.write16(cpu.reg.pc, 0x2000);
        cpu.op_call_a16(&mut bus);
        assert_eq!(cpu.reg.pc, 0x2000);
        cpu.op_ret(&mut bus);
        assert_eq!(cpu.reg.pc, start_pc.wrapping_add(2));
    }

    #[test]
    fn push_pop_af_round_trips_through_stack() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemoryBus::new();
        cpu.reg.set16(Register16::AF, 0x12B0);
        cpu.op_push_af(&mut bus);
        cpu.reg.set16(Register16::AF, 0x0000);
        cpu.op_pop_af(&mut bus);
        assert_eq!(cpu.reg.get16(Register16::AF), 0x12B0);
    }

    #[test]
    fn ei_then_di_toggles_irq_enabled() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemoryBus::new();
        cpu.op_ei(&mut bus);
        assert!(cpu.irq_enabled);
        cpu.op_di(&mut bus);
        assert!(!cpu.irq_enabled);
    }

    #[test]
    fn rst_38h_jumps_to_vector_and_pushes_return_address() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemoryBus::new();
        let return_pc = cpu.reg.pc;
        cpu.op_rst_38h(&mut bus);
        assert_eq!(cpu.reg.pc, 0x0038);
        assert_eq!(cpu.pop(&mut bus), return_pc);
    }
}
