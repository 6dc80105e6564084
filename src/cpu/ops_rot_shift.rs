//! Non-extended accumulator rotates (RLCA/RLA/RRCA/RRA) and the full
//! CB-prefixed rotate/shift/BIT/RES/SET table (0x00-0xFF), built from the
//! shared primitives in `mod.rs` via the `cb_reg_op!`/`cb_hlp_op!` macros.

use super::Cpu;
use crate::memory::MemoryBus;
use crate::registers::Flag;

impl Cpu {
    // --- Non-extended accumulator rotates. Unlike their CB-table cousins,
    // these always clear Z regardless of the result. ---
    pub fn op_rlca(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.a = self.rlc(self.reg.a);
        self.set_flag(Flag::Z, false);
        1
    }
    pub fn op_rla(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.a = self.rl(self.reg.a);
        self.set_flag(Flag::Z, false);
        1
    }
    pub fn op_rrca(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.a = self.rrc(self.reg.a);
        self.set_flag(Flag::Z, false);
        1
    }
    pub fn op_rra(&mut self, _bus: &mut dyn MemoryBus) -> u8 {
        self.reg.a = self.rr(self.reg.a);
        self.set_flag(Flag::Z, false);
        1
    }

    // --- CB RLC ---
    cb_reg_op!(op_cb_rlc_b, rlc, b, 2);
    cb_reg_op!(op_cb_rlc_c, rlc, c, 2);
    cb_reg_op!(op_cb_rlc_d, rlc, d, 2);
    cb_reg_op!(op_cb_rlc_e, rlc, e, 2);
    cb_reg_op!(op_cb_rlc_h, rlc, h, 2);
    cb_reg_op!(op_cb_rlc_l, rlc, l, 2);
    cb_hlp_op!(op_cb_rlc_hlp, rlc, 4);
    cb_reg_op!(op_cb_rlc_a, rlc, a, 2);

    // --- CB RRC ---
    cb_reg_op!(op_cb_rrc_b, rrc, b, 2);
    cb_reg_op!(op_cb_rrc_c, rrc, c, 2);
    cb_reg_op!(op_cb_rrc_d, rrc, d, 2);
    cb_reg_op!(op_cb_rrc_e, rrc, e, 2);
    cb_reg_op!(op_cb_rrc_h, rrc, h, 2);
    cb_reg_op!(op_cb_rrc_l, rrc, l, 2);
    cb_hlp_op!(op_cb_rrc_hlp, rrc, 4);
    cb_reg_op!(op_cb_rrc_a, rrc, a, 2);

    // --- CB RL ---
    cb_reg_op!(op_cb_rl_b, rl, b, 2);
    cb_reg_op!(op_cb_rl_c, rl, c, 2);
    cb_reg_op!(op_cb_rl_d, rl, d, 2);
    cb_reg_op!(op_cb_rl_e, rl, e, 2);
    cb_reg_op!(op_cb_rl_h, rl, h, 2);
    cb_reg_op!(op_cb_rl_l, rl, l, 2);
    cb_hlp_op!(op_cb_rl_hlp, rl, 4);
    cb_reg_op!(op_cb_rl_a, rl, a, 2);

    // --- CB RR ---
    cb_reg_op!(op_cb_rr_b, rr, b, 2);
    cb_reg_op!(op_cb_rr_c, rr, c, 2);
    cb_reg_op!(op_cb_rr_d, rr, d, 2);
    cb_reg_op!(op_cb_rr_e, rr, e, 2);
    cb_reg_op!(op_cb_rr_h, rr, h, 2);
    cb_reg_op!(op_cb_rr_l, rr, l, 2);
    cb_hlp_op!(op_cb_rr_hlp, rr, 4);
    cb_reg_op!(op_cb_rr_a, rr, a, 2);

    // --- CB SLA ---
    cb_reg_op!(op_cb_sla_b, sla, b, 2);
    cb_reg_op!(op_cb_sla_c, sla, c, 2);
    cb_reg_op!(op_cb_sla_d, sla, d, 2);
    cb_reg_op!(op_cb_sla_e, sla, e, 2);
    cb_reg_op!(op_cb_sla_h, sla, h, 2);
    cb_reg_op!(op_cb_sla_l, sla, l, 2);
    cb_hlp_op!(op_cb_sla_hlp, sla, 4);
    cb_reg_op!(op_cb_sla_a, sla, a, 2);

    // --- CB SRA ---
    cb_reg_op!(op_cb_sra_b, sra, b, 2);
    cb_reg_op!(op_cb_sra_c, sra, c, 2);
    cb_reg_op!(op_cb_sra_d, sra, d, 2);
    cb_reg_op!(op_cb_sra_e, sra, e, 2);
    cb_reg_op!(op_cb_sra_h, sra, h, 2);
    cb_reg_op!(op_cb_sra_l, sra, l, 2);
    cb_hlp_op!(op_cb_sra_hlp, sra, 4);
    cb_reg_op!(op_cb_sra_a, sra, a, 2);

    // --- CB SWAP ---
    cb_reg_op!(op_cb_swap_b, swap, b, 2);
    cb_reg_op!(op_cb_swap_c, swap, c, 2);
    cb_reg_op!(op_cb_swap_d, swap, d, 2);
    cb_reg_op!(op_cb_swap_e, swap, e, 2);
    cb_reg_op!(op_cb_swap_h, swap, h, 2);
    cb_reg_op!(op_cb_swap_l, swap, l, 2);
    cb_hlp_op!(op_cb_swap_hlp, swap, 4);
    cb_reg_op!(op_cb_swap_a, swap, a, 2);

    // --- CB SRL ---
    cb_reg_op!(op_cb_srl_b, srl, b, 2);
    cb_reg_op!(op_cb_srl_c, srl, c, 2);
    cb_reg_op!(op_cb_srl_d, srl, d, 2);
    cb_reg_op!(op_cb_srl_e, srl, e, 2);
    cb_reg_op!(op_cb_srl_h, srl, h, 2);
    cb_reg_op!(op_cb_srl_l, srl, l, 2);
    cb_hlp_op!(op_cb_srl_hlp, srl, 4);
    cb_reg_op!(op_cb_srl_a, srl, a, 2);

    // --- CB BIT 0-7 ---
    cb_reg_op!(op_cb_bit_0_b, bit, 0, b, 2);
    cb_reg_op!(op_cb_bit_0_c, bit, 0, c, 2);
    cb_reg_op!(op_cb_bit_0_d, bit, 0, d, 2);
    cb_reg_op!(op_cb_bit_0_e, bit, 0, e, 2);
    cb_reg_op!(op_cb_bit_0_h, bit, 0, h, 2);
    cb_reg_op!(op_cb_bit_0_l, bit, 0, l, 2);
    cb_hlp_op!(op_cb_bit_0_hlp, bit, 0, 3);
    cb_reg_op!(op_cb_bit_0_a, bit, 0, a, 2);

    cb_reg_op!(op_cb_bit_1_b, bit, 1, b, 2);
    cb_reg_op!(op_cb_bit_1_c, bit, 1, c, 2);
    cb_reg_op!(op_cb_bit_1_d, bit, 1, d, 2);
    cb_reg_op!(op_cb_bit_1_e, bit, 1, e, 2);
    cb_reg_op!(op_cb_bit_1_h, bit, 1, h, 2);
    cb_reg_op!(op_cb_bit_1_l, bit, 1, l, 2);
    cb_hlp_op!(op_cb_bit_1_hlp, bit, 1, 3);
    cb_reg_op!(op_cb_bit_1_a, bit, 1, a, 2);

    cb_reg_op!(op_cb_bit_2_b, bit, 2, b, 2);
    cb_reg_op!(op_cb_bit_2_c, bit, 2, c, 2);
    cb_reg_op!(op_cb_bit_2_d, bit, 2, d, 2);
    cb_reg_op!(op_cb_bit_2_e, bit, 2, e, 2);
    cb_reg_op!(op_cb_bit_2_h, bit, 2, h, 2);
    cb_reg_op!(op_cb_bit_2_l, bit, 2, l, 2);
    cb_hlp_op!(op_cb_bit_2_hlp, bit, 2, 3);
    cb_reg_op!(op_cb_bit_2_a, bit, 2, a, 2);

    cb_reg_op!(op_cb_bit_3_b, bit, 3, b, 2);
    cb_reg_op!(op_cb_bit_3_c, bit, 3, c, 2);
    cb_reg_op!(op_cb_bit_3_d, bit, 3, d, 2);
    cb_reg_op!(op_cb_bit_3_e, bit, 3, e, 2);
    cb_reg_op!(op_cb_bit_3_h, bit, 3, h, 2);
    cb_reg_op!(op_cb_bit_3_l, bit, 3, l, 2);
    cb_hlp_op!(op_cb_bit_3_hlp, bit, 3, 3);
    cb_reg_op!(op_cb_bit_3_a, bit, 3, a, 2);

    cb_reg_op!(op_cb_bit_4_b, bit, 4, b, 2);
    cb_reg_op!(op_cb_bit_4_c, bit, 4, c, 2);
    cb_reg_op!(op_cb_bit_4_d, bit, 4, d, 2);
    cb_reg_op!(op_cb_bit_4_e, bit, 4, e, 2);
    cb_reg_op!(op_cb_bit_4_h, bit, 4, h, 2);
    cb_reg_op!(op_cb_bit_4_l, bit, 4, l, 2);
    cb_hlp_op!(op_cb_bit_4_hlp, bit, 4, 3);
    cb_reg_op!(op_cb_bit_4_a, bit, 4, a, 2);

    cb_reg_op!(op_cb_bit_5_b, bit, 5, b, 2);
    cb_reg_op!(op_cb_bit_5_c, bit, 5, c, 2);
    cb_reg_op!(op_cb_bit_5_d, bit, 5, d, 2);
    cb_reg_op!(op_cb_bit_5_e, bit, 5, e, 2);
    cb_reg_op!(op_cb_bit_5_h, bit, 5, h, 2);
    cb_reg_op!(op_cb_bit_5_l, bit, 5, l, 2);
    cb_hlp_op!(op_cb_bit_5_hlp, bit, 5, 3);
    cb_reg_op!(op_cb_bit_5_a, bit, 5, a, 2);

    cb_reg_op!(op_cb_bit_6_b, bit, 6, b, 2);
    cb_reg_op!(op_cb_bit_6_c, bit, 6, c, 2);
    cb_reg_op!(op_cb_bit_6_d, bit, 6, d, 2);
    cb_reg_op!(op_cb_bit_6_e, bit, 6, e, 2);
    cb_reg_op!(op_cb_bit_6_h, bit, 6, h, 2);
    cb_reg_op!(op_cb_bit_6_l, bit, 6, l, 2);
    cb_hlp_op!(op_cb_bit_6_hlp, bit, 6, 3);
    cb_reg_op!(op_cb_bit_6_a, bit, 6, a, 2);

    cb_reg_op!(op_cb_bit_7_b, bit, 7, b, 2);
    cb_reg_op!(op_cb_bit_7_c, bit, 7, c, 2);
    cb_reg_op!(op_cb_bit_7_d, bit, 7, d, 2);
    cb_reg_op!(op_cb_bit_7_e, bit, 7, e, 2);
    cb_reg_op!(op_cb_bit_7_h, bit, 7, h, 2);
    cb_reg_op!(op_cb_bit_7_l, bit, 7, l, 2);
    cb_hlp_op!(op_cb_bit_7_hlp, bit, 7, 3);
    cb_reg_op!(op_cb_bit_7_a, bit, 7, a, 2);

    // --- CB RES 0-7 ---
    cb_reg_op!(op_cb_res_0_b, res, 0, b, 2);
    cb_reg_op!(op_cb_res_0_c, res, 0, c, 2);
    cb_reg_op!(op_cb_res_0_d, res, 0, d, 2);
    cb_reg_op!(op_cb_res_0_e, res, 0, e, 2);
    cb_reg_op!(op_cb_res_0_h, res, 0, h, 2);
    cb_reg_op!(op_cb_res_0_l, res, 0, l, 2);
    cb_hlp_op!(op_cb_res_0_hlp, res, 0, 4);
    cb_reg_op!(op_cb_res_0_a, res, 0, a, 2);

    cb_reg_op!(op_cb_res_1_b, res, 1, b, 2);
    cb_reg_op!(op_cb_res_1_c, res, 1, c, 2);
    cb_reg_op!(op_cb_res_1_d, res, 1, d, 2);
    cb_reg_op!(op_cb_res_1_e, res, 1, e, 2);
    cb_reg_op!(op_cb_res_1_h, res, 1, h, 2);
    cb_reg_op!(op_cb_res_1_l, res, 1, l, 2);
    cb_hlp_op!(op_cb_res_1_hlp, res, 1, 4);
    cb_reg_op!(op_cb_res_1_a, res, 1, a, 2);

    cb_reg_op!(op_cb_res_2_b, res, 2, b, 2);
    cb_reg_op!(op_cb_res_2_c, res, 2, c, 2);
    cb_reg_op!(op_cb_res_2_d, res, 2, d, 2);
    cb_reg_op!(op_cb_res_2_e, res, 2, e, 2);
    cb_reg_op!(op_cb_res_2_h, res, 2, h, 2);
    cb_reg_op!(op_cb_res_2_l, res, 2, l, 2);
    cb_hlp_op!(op_cb_res_2_hlp, res, 2, 4);
    cb_reg_op!(op_cb_res_2_a, res, 2, a, 2);

    cb_reg_op!(op_cb_res_3_b, res, 3, b, 2);
    cb_reg_op!(op_cb_res_3_c, res, 3, c, 2);
    cb_reg_op!(op_cb_res_3_d, res, 3, d, 2);
    cb_reg_op!(op_cb_res_3_e, res, 3, e, 2);
    cb_reg_op!(op_cb_res_3_h, res, 3, h, 2);
    cb_reg_op!(op_cb_res_3_l, res, 3, l, 2);
    cb_hlp_op!(op_cb_res_3_hlp, res, 3, 4);
    cb_reg_op!(op_cb_res_3_a, res, 3, a, 2);

    cb_reg_op!(op_cb_res_4_b, res, 4, b, 2);
    cb_reg_op!(op_cb_res_4_c, res, 4, c, 2);
    cb_reg_op!(op_cb_res_4_d, res, 4, d, 2);
    cb_reg_op!(op_cb_res_4_e, res, 4, e, 2);
    cb_reg_op!(op_cb_res_4_h, res, 4, h, 2);
    cb_reg_op!(op_cb_res_4_l, res, 4, l, 2);
    cb_hlp_op!(op_cb_res_4_hlp, res, 4, 4);
    cb_reg_op!(op_cb_res_4_a, res, 4, a, 2);

    cb_reg_op!(op_cb_res_5_b, res, 5, b, 2);
    cb_reg_op!(op_cb_res_5_c, res, 5, c, 2);
    cb_reg_op!(op_cb_res_5_d, res, 5, d, 2);
    cb_reg_op!(op_cb_res_5_e, res, 5, e, 2);
    cb_reg_op!(op_cb_res_5_h, res, 5, h, 2);
    cb_reg_op!(op_cb_res_5_l, res, 5, l, 2);
    cb_hlp_op!(op_cb_res_5_hlp, res, 5, 4);
    cb_reg_op!(op_cb_res_5_a, res, 5, a, 2);

    cb_reg_op!(op_cb_res_6_b, res, 6, b, 2);
    cb_reg_op!(op_cb_res_6_c, res, 6, c, 2);
    cb_reg_op!(op_cb_res_6_d, res, 6, d, 2);
    cb_reg_op!(op_cb_res_6_e, res, 6, e, 2);
    cb_reg_op!(op_cb_res_6_h, res, 6, h, 2);
    cb_reg_op!(op_cb_res_6_l, res, 6, l, 2);
    cb_hlp_op!(op_cb_res_6_hlp, res, 6, 4);
    cb_reg_op!(op_cb_res_6_a, res, 6, a, 2);

    cb_reg_op!(op_cb_res_7_b, res, 7, b, 2);
    cb_reg_op!(op_cb_res_7_c, res, 7, c, 2);
    cb_reg_op!(op_cb_res_7_d, res, 7, d, 2);
    cb_reg_op!(op_cb_res_7_e, res, 7, e, 2);
    cb_reg_op!(op_cb_res_7_h, res, 7, h, 2);
    cb_reg_op!(op_cb_res_7_l, res, 7, l, 2);
    cb_hlp_op!(op_cb_res_7_hlp, res, 7, 4);
    cb_reg_op!(op_cb_res_7_a, res, 7, a, 2);

    // --- CB SET 0-7 ---
    cb_reg_op!(op_cb_set_0_b, set, 0, b, 2);
    cb_reg_op!(op_cb_set_0_c, set, 0, c, 2);
    cb_reg_op!(op_cb_set_0_d, set, 0, d, 2);
    cb_reg_op!(op_cb_set_0_e, set, 0, e, 2);
    cb_reg_op!(op_cb_set_0_h, set, 0, h, 2);
    cb_reg_op!(op_cb_set_0_l, set, 0, l, 2);
    cb_hlp_op!(op_cb_set_0_hlp, set, 0, 4);
    cb_reg_op!(op_cb_set_0_a, set, 0, a, 2);

    cb_reg_op!(op_cb_set_1_b, set, 1, b, 2);
    cb_reg_op!(op_cb_set_1_c, set, 1, c, 2);
    cb_reg_op!(op_cb_set_1_d, set, 1, d, 2);
    cb_reg_op!(op_cb_set_1_e, set, 1, e, 2);
    cb_reg_op!(op_cb_set_1_h, set, 1, h, 2);
    cb_reg_op!(op_cb_set_1_l, set, 1, l, 2);
    cb_hlp_op!(op_cb_set_1_hlp, set, 1, 4);
    cb_reg_op!(op_cb_set_1_a, set, 1, a, 2);

    cb_reg_op!(op_cb_set_2_b, set, 2, b, 2);
    cb_reg_op!(op_cb_set_2_c, set, 2, c, 2);
    cb_reg_op!(op_cb_set_2_d, set, 2, d, 2);
    cb_reg_op!(op_cb_set_2_e, set, 2, e, 2);
    cb_reg_op!(op_cb_set_2_h, set, 2, h, 2);
    cb_reg_op!(op_cb_set_2_l, set, 2, l, 2);
    cb_hlp_op!(op_cb_set_2_hlp, set, 2, 4);
    cb_reg_op!(op_cb_set_2_a, set, 2, a, 2);

    cb_reg_op!(op_cb_set_3_b, set, 3, b, 2);
    cb_reg_op!(op_cb_set_3_c, set, 3, c, 2);
    cb_reg_op!(op_cb_set_3_d, set, 3, d, 2);
    cb_reg_op!(op_cb_set_3_e, set, 3, e, 2);
    cb_reg_op!(op_cb_set_3_h, set, 3, h, 2);
    cb_reg_op!(op_cb_set_3_l, set, 3, l, 2);
    cb_hlp_op!(op_cb_set_3_hlp, set, 3, 4);
    cb_reg_op!(op_cb_set_3_a, set, 3, a, 2);

    cb_reg_op!(op_cb_set_4_b, set, 4, b, 2);
    cb_reg_op!(op_cb_set_4_c, set, 4, c, 2);
    cb_reg_op!(op_cb_set_4_d, set, 4, d, 2);
    cb_reg_op!(op_cb_set_4_e, set, 4, e, 2);
    cb_reg_op!(op_cb_set_4_h, set, 4, h, 2);
    cb_reg_op!(op_cb_set_4_l, set, 4, l, 2);
    cb_hlp_op!(op_cb_set_4_hlp, set, 4, 4);
    cb_reg_op!(op_cb_set_4_a, set, 4, a, 2);

    cb_reg_op!(op_cb_set_5_b, set, 5, b, 2);
    cb_reg_op!(op_cb_set_5_c, set, 5, c, 2);
    cb_reg_op!(op_cb_set_5_d, set, 5, d, 2);
    cb_reg_op!(op_cb_set_5_e, set, 5, e, 2);
    cb_reg_op!(op_cb_set_5_h, set, 5, h, 2);
    cb_reg_op!(op_cb_set_5_l, set, 5, l, 2);
    cb_hlp_op!(op_cb_set_5_hlp, set, 5, 4);
    cb_reg_op!(op_cb_set_5_a, set, 5, a, 2);

    cb_reg_op!(op_cb_set_6_b, set, 6, b, 2);
    cb_reg_op!(op_cb_set_6_c, set, 6, c, 2);
    cb_reg_op!(op_cb_set_6_d, set, 6, d, 2);
    cb_reg_op!(op_cb_set_6_e, set, 6, e, 2);
    cb_reg_op!(op_cb_set_6_h, set, 6, h, 2);
    cb_reg_op!(op_cb_set_6_l, set, 6, l, 2);
    cb_hlp_op!(op_cb_set_6_hlp, set, 6, 4);
    cb_reg_op!(op_cb_set_6_a, set, 6, a, 2);

    cb_reg_op!(op_cb_set_7_b, set, 7, b, 2);
    cb_reg_op!(op_cb_set_7_c, set, 7, c, 2);
    cb_reg_op!(op_cb_set_7_d, set, 7, d, 2);
    cb_reg_op!(op_cb_set_7_e, set, 7, e, 2);
    cb_reg_op!(op_cb_set_7_h, set, 7, h, 2);
    cb_reg_op!(op_cb_set_7_l, set, 7, l, 2);
    cb_hlp_op!(op_cb_set_7_hlp, set, 7, 4);
    cb_reg_op!(op_cb_set_7_a, set, 7, a, 2);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FlatMemoryBus;
    use crate::registers::Register16;

    #[test]
    fn rlca_clears_zero_flag_even_on_zero_result() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemoryBus::new();
        cpu.reg.a = 0x00;
        cpu.op_rlca(&mut bus);
        assert_eq!(cpu.reg.a, 0x00);
        assert!(!cpu.get_flag(Flag::Z));
    }

    #[test]
    fn cb_rlc_b_sets_carry_from_bit_7() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemoryBus::new();
        cpu.reg.b = 0x80;
        cpu.op_cb_rlc_b(&mut bus);
        assert_eq!(cpu.reg.b, 0x01);
        assert!(cpu.get_flag(Flag::C));
    }

    #[test]
    fn cb_bit_7_a_sets_zero_when_bit_clear() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemoryBus::new();
        cpu.reg.a = 0x7F;
        cpu.op_cb_bit_7_a(&mut bus);
        assert!(cpu.get_flag(Flag::Z));
    }

    #[test]
    fn cb_res_0_hlp_clears_bit_in_memory() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemoryBus::new();
        cpu.reg.set16(Register16::HL, 0xC000);
        bus.write(0xC000, 0xFF);
        cpu.op_cb_res_0_hlp(&mut bus);
        assert_eq!(bus.read(0xC000), 0xFE);
    }

    #[test]
    fn cb_set_7_c_sets_bit_without_touching_others() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemoryBus::new();
        cpu.reg.c = 0x00;
        cpu.op_cb_set_7_c(&mut bus);
        assert_eq!(cpu.reg.c, 0x80);
    }

    #[test]
    fn cb_swap_a_exchanges_nibbles() {
        let mut cpu = Cpu::new();
        let mut bus = FlatMemoryBus::new();
        cpu.reg.a = 0x12;
        cpu.op_cb_swap_a(&mut bus);
        assert_eq!(cpu.reg.a, 0x21);
    }
}
