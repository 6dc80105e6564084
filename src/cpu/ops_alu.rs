//! INC/DEC, ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,* and the 16-bit INC/DEC/ADD HL
//! family (0x03-0x3D minus loads, 0x80-0xBF, 0xC6-0xFE immediates).

use super::Cpu;
use crate::memory::MemoryBus;
use crate::registers::Register16;

impl Cpu {
    // --- ADD A, r / (HL) / d8 ---
    alu_a_r!(op_add_a_b, add_a, b, 1);
    alu_a_r!(op_add_a_c, add_a, c, 1);
    alu_a_r!(op_add_a_d, add_a, d, 1);
    alu_a_r!(op_add_a_e, add_a, e, 1);
    alu_a_r!(op_add_a_h, add_a, h, 1);
    alu_a_r!(op_add_a_l, add_a, l, 1);
    alu_a_hlp!(op_add_a_hlp, add_a, 2);
    alu_a_r!(op_add_a_a, add_a, a, 1);
    pub fn op_add_a_d8(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = self.fetch(bus);
        self.add_a(value, false);
        2
    }

    // --- ADC A, r / (HL) / d8 ---
    alu_a_r!(op_adc_a_b, add_a, b, carry, 1);
    alu_a_r!(op_adc_a_c, add_a, c, carry, 1);
    alu_a_r!(op_adc_a_d, add_a, d, carry, 1);
    alu_a_r!(op_adc_a_e, add_a, e, carry, 1);
    alu_a_r!(op_adc_a_h, add_a, h, carry, 1);
    alu_a_r!(op_adc_a_l, add_a, l, carry, 1);
    alu_a_hlp!(op_adc_a_hlp, add_a, carry, 2);
    alu_a_r!(op_adc_a_a, add_a, a, carry, 1);
    pub fn op_adc_a_d8(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = self.fetch(bus);
        self.add_a(value, true);
        2
    }

    // --- SUB A, r / (HL) / d8 ---
    alu_a_r!(op_sub_a_b, sub_a, b, 1);
    alu_a_r!(op_sub_a_c, sub_a, c, 1);
    alu_a_r!(op_sub_a_d, sub_a, d, 1);
    alu_a_r!(op_sub_a_e, sub_a, e, 1);
    alu_a_r!(op_sub_a_h, sub_a, h, 1);
    alu_a_r!(op_sub_a_l, sub_a, l, 1);
    alu_a_hlp!(op_sub_a_hlp, sub_a, 2);
    alu_a_r!(op_sub_a_a, sub_a, a, 1);
    pub fn op_sub_a_d8(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = self.fetch(bus);
        self.sub_a(value, false);
        2
    }

    // --- SBC A, r / (HL) / d8 ---
    alu_a_r!(op_sbc_a_b, sub_a, b, carry, 1);
    alu_a_r!(op_sbc_a_c, sub_a, c, carry, 1);
    alu_a_r!(op_sbc_a_d, sub_a, d, carry, 1);
    alu_a_r!(op_sbc_a_e, sub_a, e, carry, 1);
    alu_a_r!(op_sbc_a_h, sub_a, h, carry, 1);
    alu_a_r!(op_sbc_a_l, sub_a, l, carry, 1);
    alu_a_hlp!(op_sbc_a_hlp, sub_a, carry, 2);
    alu_a_r!(op_sbc_a_a, sub_a, a, carry, 1);
    pub fn op_sbc_a_d8(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = self.fetch(bus);
        self.sub_a(value, true);
        2
    }

    // --- AND A, r / (HL) / d8 ---
    pub fn op_and_a_b(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.and_a(self.reg.b);
        1
    }
    pub fn op_and_a_c(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.and_a(self.reg.c);
        1
    }
    pub fn op_and_a_d(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.and_a(self.reg.d);
        1
    }
    pub fn op_and_a_e(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.and_a(self.reg.e);
        1
    }
    pub fn op_and_a_h(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.and_a(self.reg.h);
        1
    }
    pub fn op_and_a_l(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.and_a(self.reg.l);
        1
    }
    pub fn op_and_a_hlp(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = bus.read(self.reg.get16(Register16::HL));
        self.and_a(value);
        2
    }
    pub fn op_and_a_a(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.and_a(self.reg.a);
        1
    }
    pub fn op_and_a_d8(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = self.fetch(bus);
        self.and_a(value);
        2
    }

    // --- XOR A, r / (HL) / d8 ---
    pub fn op_xor_a_b(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.xor_a(self.reg.b);
        1
    }
    pub fn op_xor_a_c(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.xor_a(self.reg.c);
        1
    }
    pub fn op_xor_a_d(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.xor_a(self.reg.d);
        1
    }
    pub fn op_xor_a_e(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.xor_a(self.reg.e);
        1
    }
    pub fn op_xor_a_h(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.xor_a(self.reg.h);
        1
    }
    pub fn op_xor_a_l(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.xor_a(self.reg.l);
        1
    }
    pub fn op_xor_a_hlp(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = bus.read(self.reg.get16(Register16::HL));
        self.xor_a(value);
        2
    }
    pub fn op_xor_a_a(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.xor_a(self.reg.a);
        1
    }
    pub fn op_xor_a_d8(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = self.fetch(bus);
        self.xor_a(value);
        2
    }

    // --- OR A, r / (HL) / d8 ---
    pub fn op_or_a_b(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.or_a(self.reg.b);
        1
    }
    pub fn op_or_a_c(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.or_a(self.reg.c);
        1
    }
    pub fn op_or_a_d(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.or_a(self.reg.d);
        1
    }
    pub fn op_or_a_e(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.or_a(self.reg.e);
        1
    }
    pub fn op_or_a_h(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.or_a(self.reg.h);
        1
    }
    pub fn op_or_a_l(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.or_a(self.reg.l);
        1
    }
    pub fn op_or_a_hlp(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = bus.read(self.reg.get16(Register16::HL));
        self.or_a(value);
        2
    }
    pub fn op_or_a_a(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.or_a(self.reg.a);
        1
    }
    pub fn op_or_a_d8(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = self.fetch(bus);
        self.or_a(value);
        2
    }

    // --- CP A, r / (HL) / d8 ---
    pub fn op_cp_a_b(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.cp_a(self.reg.b);
        1
    }
    pub fn op_cp_a_c(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.cp_a(self.reg.c);
        1
    }
    pub fn op_cp_a_d(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.cp_a(self.reg.d);
        1
    }
    pub fn op_cp_a_e(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.cp_a(self.reg.e);
        1
    }
    pub fn op_cp_a_h(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.cp_a(self.reg.h);
        1
    }
    pub fn op_cp_a_l(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.cp_a(self.reg.l);
        1
    }
    pub fn op_cp_a_hlp(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = bus.read(self.reg.get16(Register16::HL));
        self.cp_a(value);
        2
    }
    pub fn op_cp_a_a(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.cp_a(self.reg.a);
        1
    }
    pub fn op_cp_a_d8(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let value = self.fetch(bus);
        self.cp_a(value);
        2
    }

    // --- INC r / INC (HL) ---
    pub fn op_inc_b(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.b = self.inc_u8(self.reg.b);
        1
    }
    pub fn op_inc_c(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.c = self.inc_u8(self.reg.c);
        1
    }
    pub fn op_inc_d(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.d = self.inc_u8(self.reg.d);
        1
    }
    pub fn op_inc_e(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.e = self.inc_u8(self.reg.e);
        1
    }
    pub fn op_inc_h(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.h = self.inc_u8(self.reg.h);
        1
    }
    pub fn op_inc_l(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.l = self.inc_u8(self.reg.l);
        1
    }
    pub fn op_inc_a(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.a = self.inc_u8(self.reg.a);
        1
    }
    pub fn op_inc_hlp(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let addr = self.reg.get16(Register16::HL);
        let value = bus.read(addr);
        let result = self.inc_u8(value);
        bus.write(addr, result);
        3
    }

    // --- DEC r / DEC (HL) ---
    pub fn op_dec_b(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.b = self.dec_u8(self.reg.b);
        1
    }
    pub fn op_dec_c(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.c = self.dec_u8(self.reg.c);
        1
    }
    pub fn op_dec_d(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.d = self.dec_u8(self.reg.d);
        1
    }
    pub fn op_dec_e(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.e = self.dec_u8(self.reg.e);
        1
    }
    pub fn op_dec_h(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.h = self.dec_u8(self.reg.h);
        1
    }
    pub fn op_dec_l(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.l = self.dec_u8(self.reg.l);
        1
    }
    pub fn op_dec_a(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.a = self.dec_u8(self.reg.a);
        1
    }
    pub fn op_dec_hlp(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let addr = self.reg.get16(Register16::HL);
        let value = bus.read(addr);
        let result = self.dec_u8(value);
        bus.write(addr, result);
        3
    }

    // --- ADD HL, rr / SP ---
    pub fn op_add_hl_bc(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.add_hl(self.reg.get16(Register16::BC));
        2
    }
    pub fn op_add_hl_de(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.add_hl(self.reg.get16(Register16::DE));
        2
    }
    pub fn op_add_hl_hl(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.add_hl(self.reg.get16(Register16::HL));
        2
    }
    pub fn op_add_hl_sp(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.add_hl(self.reg.sp);
        2
    }

    // --- ADD SP, r8 ---
    pub fn op_add_sp_r8(&mut self, bus: &mut dyn MemoryBus) -> u8 {
        let displacement = self.fetch(bus);
        self.reg.sp = self.add_signed_displacement(self.reg.sp, displacement);
        4
    }

    // --- INC rr / SP ---
    pub fn op_inc_bc(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.set16(Register16::BC, self.reg.get16(Register16::BC).wrapping_add(1));
        2
    }
    pub fn op_inc_de(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.set16(Register16::DE, self.reg.get16(Register16::DE).wrapping_add(1));
        2
    }
    pub fn op_inc_hl(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.set16(Register16::HL, self.reg.get16(Register16::HL).wrapping_add(1));
        2
    }
    pub fn op_inc_sp(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.sp = self.reg.sp.wrapping_add(1);
        2
    }

    // --- DEC rr / SP ---
    pub fn op_dec_bc(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.set16(Register16::BC, self.reg.get16(Register16::BC).wrapping_sub(1));
        2
    }
    pub fn op_dec_de(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.set16(Register16::DE, self.reg.get16(Register16::DE).wrapping_sub(1));
        2
    }
    pub fn op_dec_hl(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.set16(Register16::HL, self.reg.get16(Register16::HL).wrapping_sub(1));
        2
    }
    pub fn op_dec_sp(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.sp = self.reg.sp.wrapping_sub(1);
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemoryBus;
    use crate::registers::Flag;

    #[test]
    fn inc_b_sets_half_carry_at_nibble_boundary() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemoryBus::new();
        cpu.reg.b = 0x0F;
        cpu.op_inc_b(&mut bus);
        assert_eq!(cpu.reg.b, 0x10);
        assert!(cpu.get_flag(Flag::H));
    }

    #[test]
    fn dec_b_to_zero_sets_zero_flag() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemoryBus::new();
        cpu.reg.b = 0x01;
        cpu.op_dec_b(&mut bus);
        assert_eq!(cpu.reg.b, 0x00);
        assert!(cpu.get_flag(Flag::Z));
        assert!(cpu.get_flag(Flag::N));
    }

    #[test]
    fn add_hl_bc_sets_carry_on_overflow() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemoryBus::new();
        cpu.reg.set16(Register16::HL, 0xFFFF);
        cpu.reg.set16(Register16::BC, 0x0001);
        cpu.op_add_hl_bc(&mut bus);
        assert_eq!(cpu.reg.get16(Register16::HL), 0x0000);
        assert!(cpu.get_flag(Flag::C));
    }

    #[test]
    fn sub_a_underflow_sets_carry_and_n() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemoryBus::new();
        cpu.reg.a = 0x00;
        cpu.reg.b = 0x01;
        cpu.op_sub_a_b(&mut bus);
        assert_eq!(cpu.reg.a, 0xFF);
        assert!(cpu.get_flag(Flag::C));
        assert!(cpu.get_flag(Flag::N));
    }

    #[test]
    fn cp_a_does_not_modify_accumulator() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemoryBus::new();
        cpu.reg.a = 0x10;
        cpu.reg.b = 0x10;
        cpu.op_cp_a_b(&mut bus);
        assert_eq!(cpu.reg.a, 0x10);
        assert!(cpu.get_flag(Flag::Z));
    }
}
