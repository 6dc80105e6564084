//! The two 256-entry opcode dispatch tables. Each slot names a mnemonic (for
//! disassembly) and an `execute` function pointer; the function returns the
//! number of machine cycles the instruction actually consumed.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use lazy_static::lazy_static;

pub struct Instruction {
    pub name: &'static str,
    pub execute: fn(&mut Cpu, &mut dyn MemoryBus) -> u8,
}

macro_rules! instr {
    ($name:expr, $execute:path) => {
        Instruction { name: $name, execute: $execute }
    };
}

lazy_static! {
    pub static ref INSTRUCTIONS: [Instruction; 256] = [
        /* 0x00 */ instr!("NOP", Cpu::op_nop),
        /* 0x01 */ instr!("LD BC,d16", Cpu::op_ld_bc_d16),
        /* 0x02 */ instr!("LD (BC),A", Cpu::op_ld_bc_a),
        /* 0x03 */ instr!("INC BC", Cpu::op_inc_bc),
        /* 0x04 */ instr!("INC B", Cpu::op_inc_b),
        /* 0x05 */ instr!("DEC B", Cpu::op_dec_b),
        /* 0x06 */ instr!("LD B,d8", Cpu::op_ld_b_d8),
        /* 0x07 */ instr!("RLCA", Cpu::op_rlca),
        /* 0x08 */ instr!("LD (a16),SP", Cpu::op_ld_a16_sp),
        /* 0x09 */ instr!("ADD HL,BC", Cpu::op_add_hl_bc),
        /* 0x0A */ instr!("LD A,(BC)", Cpu::op_ld_a_bc),
        /* 0x0B */ instr!("DEC BC", Cpu::op_dec_bc),
        /* 0x0C */ instr!("INC C", Cpu::op_inc_c),
        /* 0x0D */ instr!("DEC C", Cpu::op_dec_c),
        /* 0x0E */ instr!("LD C,d8", Cpu::op_ld_c_d8),
        /* 0x0F */ instr!("RRCA", Cpu::op_rrca),
        /* 0x10 */ instr!("STOP", Cpu::op_stop),
        /* 0x11 */ instr!("LD DE,d16", Cpu::op_ld_de_d16),
        /* 0x12 */ instr!("LD (DE),A", Cpu::op_ld_de_a),
        /* 0x13 */ instr!("INC DE", Cpu::op_inc_de),
        /* 0x14 */ instr!("INC D", Cpu::op_inc_d),
        /* 0x15 */ instr!("DEC D", Cpu::op_dec_d),
        /* 0x16 */ instr!("LD D,d8", Cpu::op_ld_d_d8),
        /* 0x17 */ instr!("RLA", Cpu::op_rla),
        /* 0x18 */ instr!("JR r8", Cpu::op_jr_r8),
        /* 0x19 */ instr!("ADD HL,DE", Cpu::op_add_hl_de),
        /* 0x1A */ instr!("LD A,(DE)", Cpu::op_ld_a_de),
        /* 0x1B */ instr!("DEC DE", Cpu::op_dec_de),
        /* 0x1C */ instr!("INC E", Cpu::op_inc_e),
        /* 0x1D */ instr!("DEC E", Cpu::op_dec_e),
        /* 0x1E */ instr!("LD E,d8", Cpu::op_ld_e_d8),
        /* 0x1F */ instr!("RRA", Cpu::op_rra),
        /* 0x20 */ instr!("JR NZ,r8", Cpu::op_jr_nz_r8),
        /* 0x21 */ instr!("LD HL,d16", Cpu::op_ld_hl_d16),
        /* 0x22 */ instr!("LD (HL+),A", Cpu::op_ld_hli_a),
        /* 0x23 */ instr!("INC HL", Cpu::op_inc_hl),
        /* 0x24 */ instr!("INC H", Cpu::op_inc_h),
        /* 0x25 */ instr!("DEC H", Cpu::op_dec_h),
        /* 0x26 */ instr!("LD H,d8", Cpu::op_ld_h_d8),
        /* 0x27 */ instr!("DAA", Cpu::op_daa),
        /* 0x28 */ instr!("JR Z,r8", Cpu::op_jr_z_r8),
        /* 0x29 */ instr!("ADD HL,HL", Cpu::op_add_hl_hl),
        /* 0x2A */ instr!("LD A,(HL+)", Cpu::op_ld_a_hli),
        /* 0x2B */ instr!("DEC HL", Cpu::op_dec_hl),
        /* 0x2C */ instr!("INC L", Cpu::op_inc_l),
        /* 0x2D */ instr!("DEC L", Cpu::op_dec_l),
        /* 0x2E */ instr!("LD L,d8", Cpu::op_ld_l_d8),
        /* 0x2F */ instr!("CPL", Cpu::op_cpl),
        /* 0x30 */ instr!("JR NC,r8", Cpu::op_jr_nc_r8),
        /* 0x31 */ instr!("LD SP,d16", Cpu::op_ld_sp_d16),
        /* 0x32 */ instr!("LD (HL-),A", Cpu::op_ld_hld_a),
        /* 0x33 */ instr!("INC SP", Cpu::op_inc_sp),
        /* 0x34 */ instr!("INC (HL)", Cpu::op_inc_hlp),
        /* 0x35 */ instr!("DEC (HL)", Cpu::op_dec_hlp),
        /* 0x36 */ instr!("LD (HL),d8", Cpu::op_ld_hlp_d8),
        /* 0x37 */ instr!("SCF", Cpu::op_scf),
        /* 0x38 */ instr!("JR C,r8", Cpu::op_jr_c_r8),
        /* 0x39 */ instr!("ADD HL,SP", Cpu::op_add_hl_sp),
        /* 0x3A */ instr!("LD A,(HL-)", Cpu::op_ld_a_hld),
        /* 0x3B */ instr!("DEC SP", Cpu::op_dec_sp),
        /* 0x3C */ instr!("INC A", Cpu::op_inc_a),
        /* 0x3D */ instr!("DEC A", Cpu::op_dec_a),
        /* 0x3E */ instr!("LD A,d8", Cpu::op_ld_a_d8),
        /* 0x3F */ instr!("CCF", Cpu::op_ccf),
        /* 0x40 */ instr!("LD B,B", Cpu::op_ld_b_b),
        /* 0x41 */ instr!("LD B,C", Cpu::op_ld_b_c),
        /* 0x42 */ instr!("LD B,D", Cpu::op_ld_b_d),
        /* 0x43 */ instr!("LD B,E", Cpu::op_ld_b_e),
        /* 0x44 */ instr!("LD B,H", Cpu::op_ld_b_h),
        /* 0x45 */ instr!("LD B,L", Cpu::op_ld_b_l),
        /* 0x46 */ instr!("LD B,(HL)", Cpu::op_ld_b_hlp),
        /* 0x47 */ instr!("LD B,A", Cpu::op_ld_b_a),
        /* 0x48 */ instr!("LD C,B", Cpu::op_ld_c_b),
        /* 0x49 */ instr!("LD C,C", Cpu::op_ld_c_c),
        /* 0x4A */ instr!("LD C,D", Cpu::op_ld_c_d),
        /* 0x4B */ instr!("LD C,E", Cpu::op_ld_c_e),
        /* 0x4C */ instr!("LD C,H", Cpu::op_ld_c_h),
        /* 0x4D */ instr!("LD C,L", Cpu::op_ld_c_l),
        /* 0x4E */ instr!("LD C,(HL)", Cpu::op_ld_c_hlp),
        /* 0x4F */ instr!("LD C,A", Cpu::op_ld_c_a),
        /* 0x50 */ instr!("LD D,B", Cpu::op_ld_d_b),
        /* 0x51 */ instr!("LD D,C", Cpu::op_ld_d_c),
        /* 0x52 */ instr!("LD D,D", Cpu::op_ld_d_d),
        /* 0x53 */ instr!("LD D,E", Cpu::op_ld_d_e),
        /* 0x54 */ instr!("LD D,H", Cpu::op_ld_d_h),
        /* 0x55 */ instr!("LD D,L", Cpu::op_ld_d_l),
        /* 0x56 */ instr!("LD D,(HL)", Cpu::op_ld_d_hlp),
        /* 0x57 */ instr!("LD D,A", Cpu::op_ld_d_a),
        /* 0x58 */ instr!("LD E,B", Cpu::op_ld_e_b),
        /* 0x59 */ instr!("LD E,C", Cpu::op_ld_e_c),
        /* 0x5A */ instr!("LD E,D", Cpu::op_ld_e_d),
        /* 0x5B */ instr!("LD E,E", Cpu::op_ld_e_e),
        /* 0x5C */ instr!("LD E,H", Cpu::op_ld_e_h),
        /* 0x5D */ instr!("LD E,L", Cpu::op_ld_e_l),
        /* 0x5E */ instr!("LD E,(HL)", Cpu::op_ld_e_hlp),
        /* 0x5F */ instr!("LD E,A", Cpu::op_ld_e_a),
        /* 0x60 */ instr!("LD H,B", Cpu::op_ld_h_b),
        /* 0x61 */ instr!("LD H,C", Cpu::op_ld_h_c),
        /* 0x62 */ instr!("LD H,D", Cpu::op_ld_h_d),
        /* 0x63 */ instr!("LD H,E", Cpu::op_ld_h_e),
        /* 0x64 */ instr!("LD H,H", Cpu::op_ld_h_h),
        /* 0x65 */ instr!("LD H,L", Cpu::op_ld_h_l),
        /* 0x66 */ instr!("LD H,(HL)", Cpu::op_ld_h_hlp),
        /* 0x67 */ instr!("LD H,A", Cpu::op_ld_h_a),
        /* 0x68 */ instr!("LD L,B", Cpu::op_ld_l_b),
        /* 0x69 */ instr!("LD L,C", Cpu::op_ld_l_c),
        /* 0x6A */ instr!("LD L,D", Cpu::op_ld_l_d),
        /* 0x6B */ instr!("LD L,E", Cpu::op_ld_l_e),
        /* 0x6C */ instr!("LD L,H", Cpu::op_ld_l_h),
        /* 0x6D */ instr!("LD L,L", Cpu::op_ld_l_l),
        /* 0x6E */ instr!("LD L,(HL)", Cpu::op_ld_l_hlp),
        /* 0x6F */ instr!("LD L,A", Cpu::op_ld_l_a),
        /* 0x70 */ instr!("LD (HL),B", Cpu::op_ld_hlp_b),
        /* 0x71 */ instr!("LD (HL),C", Cpu::op_ld_hlp_c),
        /* 0x72 */ instr!("LD (HL),D", Cpu::op_ld_hlp_d),
        /* 0x73 */ instr!("LD (HL),E", Cpu::op_ld_hlp_e),
        /* 0x74 */ instr!("LD (HL),H", Cpu::op_ld_hlp_h),
        /* 0x75 */ instr!("LD (HL),L", Cpu::op_ld_hlp_l),
        /* 0x76 */ instr!("HALT", Cpu::op_halt),
        /* 0x77 */ instr!("LD (HL),A", Cpu::op_ld_hlp_a),
        /* 0x78 */ instr!("LD A,B", Cpu::op_ld_a_b),
        /* 0x79 */ instr!("LD A,C", Cpu::op_ld_a_c),
        /* 0x7A */ instr!("LD A,D", Cpu::op_ld_a_d),
        /* 0x7B */ instr!("LD A,E", Cpu::op_ld_a_e),
        /* 0x7C */ instr!("LD A,H", Cpu::op_ld_a_h),
        /* 0x7D */ instr!("LD A,L", Cpu::op_ld_a_l),
        /* 0x7E */ instr!("LD A,(HL)", Cpu::op_ld_a_hlp),
        /* 0x7F */ instr!("LD A,A", Cpu::op_ld_a_a),
        /* 0x80 */ instr!("ADD A,B", Cpu::op_add_a_b),
        /* 0x81 */ instr!("ADD A,C", Cpu::op_add_a_c),
        /* 0x82 */ instr!("ADD A,D", Cpu::op_add_a_d),
        /* 0x83 */ instr!("ADD A,E", Cpu::op_add_a_e),
        /* 0x84 */ instr!("ADD A,H", Cpu::op_add_a_h),
        /* 0x85 */ instr!("ADD A,L", Cpu::op_add_a_l),
        /* 0x86 */ instr!("ADD A,(HL)", Cpu::op_add_a_hlp),
        /* 0x87 */ instr!("ADD A,A", Cpu::op_add_a_a),
        /* 0x88 */ instr!("ADC A,B", Cpu::op_adc_a_b),
        /* 0x89 */ instr!("ADC A,C", Cpu::op_adc_a_c),
        /* 0x8A */ instr!("ADC A,D", Cpu::op_adc_a_d),
        /* 0x8B */ instr!("ADC A,E", Cpu::op_adc_a_e),
        /* 0x8C */ instr!("ADC A,H", Cpu::op_adc_a_h),
        /* 0x8D */ instr!("ADC A,L", Cpu::op_adc_a_l),
        /* 0x8E */ instr!("ADC A,(HL)", Cpu::op_adc_a_hlp),
        /* 0x8F */ instr!("ADC A,A", Cpu::op_adc_a_a),
        /* 0x90 */ instr!("SUB A,B", Cpu::op_sub_a_b),
        /* 0x91 */ instr!("SUB A,C", Cpu::op_sub_a_c),
        /* 0x92 */ instr!("SUB A,D", Cpu::op_sub_a_d),
        /* 0x93 */ instr!("SUB A,E", Cpu::op_sub_a_e),
        /* 0x94 */ instr!("SUB A,H", Cpu::op_sub_a_h),
        /* 0x95 */ instr!("SUB A,L", Cpu::op_sub_a_l),
        /* 0x96 */ instr!("SUB A,(HL)", Cpu::op_sub_a_hlp),
        /* 0x97 */ instr!("SUB A,A", Cpu::op_sub_a_a),
        /* 0x98 */ instr!("SBC A,B", Cpu::op_sbc_a_b),
        /* 0x99 */ instr!("SBC A,C", Cpu::op_sbc_a_c),
        /* 0x9A */ instr!("SBC A,D", Cpu::op_sbc_a_d),
        /* 0x9B */ instr!("SBC A,E", Cpu::op_sbc_a_e),
        /* 0x9C */ instr!("SBC A,H", Cpu::op_sbc_a_h),
        /* 0x9D */ instr!("SBC A,L", Cpu::op_sbc_a_l),
        /* 0x9E */ instr!("SBC A,(HL)", Cpu::op_sbc_a_hlp),
        /* 0x9F */ instr!("SBC A,A", Cpu::op_sbc_a_a),
        /* 0xA0 */ instr!("AND A,B", Cpu::op_and_a_b),
        /* 0xA1 */ instr!("AND A,C", Cpu::op_and_a_c),
        /* 0xA2 */ instr!("AND A,D", Cpu::op_and_a_d),
        /* 0xA3 */ instr!("AND A,E", Cpu::op_and_a_e),
        /* 0xA4 */ instr!("AND A,H", Cpu::op_and_a_h),
        /* 0xA5 */ instr!("AND A,L", Cpu::op_and_a_l),
        /* 0xA6 */ instr!("AND A,(HL)", Cpu::op_and_a_hlp),
        /* 0xA7 */ instr!("AND A,A", Cpu::op_and_a_a),
        /* 0xA8 */ instr!("XOR A,B", Cpu::op_xor_a_b),
        /* 0xA9 */ instr!("XOR A,C", Cpu::op_xor_a_c),
        /* 0xAA */ instr!("XOR A,D", Cpu::op_xor_a_d),
        /* 0xAB */ instr!("XOR A,E", Cpu::op_xor_a_e),
        /* 0xAC */ instr!("XOR A,H", Cpu::op_xor_a_h),
        /* 0xAD */ instr!("XOR A,L", Cpu::op_xor_a_l),
        /* 0xAE */ instr!("XOR A,(HL)", Cpu::op_xor_a_hlp),
        /* 0xAF */ instr!("XOR A,A", Cpu::op_xor_a_a),
        /* 0xB0 */ instr!("OR A,B", Cpu::op_or_a_b),
        /* 0xB1 */ instr!("OR A,C", Cpu::op_or_a_c),
        /* 0xB2 */ instr!("OR A,D", Cpu::op_or_a_d),
        /* 0xB3 */ instr!("OR A,E", Cpu::op_or_a_e),
        /* 0xB4 */ instr!("OR A,H", Cpu::op_or_a_h),
        /* 0xB5 */ instr!("OR A,L", Cpu::op_or_a_l),
        /* 0xB6 */ instr!("OR A,(HL)", Cpu::op_or_a_hlp),
        /* 0xB7 */ instr!("OR A,A", Cpu::op_or_a_a),
        /* 0xB8 */ instr!("CP A,B", Cpu::op_cp_a_b),
        /* 0xB9 */ instr!("CP A,C", Cpu::op_cp_a_c),
        /* 0xBA */ instr!("CP A,D", Cpu::op_cp_a_d),
        /* 0xBB */ instr!("CP A,E", Cpu::op_cp_a_e),
        /* 0xBC */ instr!("CP A,H", Cpu::op_cp_a_h),
        /* 0xBD */ instr!("CP A,L", Cpu::op_cp_a_l),
        /* 0xBE */ instr!("CP A,(HL)", Cpu::op_cp_a_hlp),
        /* 0xBF */ instr!("CP A,A", Cpu::op_cp_a_a),
        /* 0xC0 */ instr!("RET NZ", Cpu::op_ret_nz),
        /* 0xC1 */ instr!("POP BC", Cpu::op_pop_bc),
        /* 0xC2 */ instr!("JP NZ,a16", Cpu::op_jp_nz_a16),
        /* 0xC3 */ instr!("JP a16", Cpu::op_jp_a16),
        /* 0xC4 */ instr!("CALL NZ,a16", Cpu::op_call_nz_a16),
        /* 0xC5 */ instr!("PUSH BC", Cpu::op_push_bc),
        /* 0xC6 */ instr!("ADD A,d8", Cpu::op_add_a_d8),
        /* 0xC7 */ instr!("RST 00H", Cpu::op_rst_00h),
        /* 0xC8 */ instr!("RET Z", Cpu::op_ret_z),
        /* 0xC9 */ instr!("RET", Cpu::op_ret),
        /* 0xCA */ instr!("JP Z,a16", Cpu::op_jp_z_a16),
        /* 0xCB */ instr!("PREFIX CB", Cpu::op_prefix_cb),
        /* 0xCC */ instr!("CALL Z,a16", Cpu::op_call_z_a16),
        /* 0xCD */ instr!("CALL a16", Cpu::op_call_a16),
        /* 0xCE */ instr!("ADC A,d8", Cpu::op_adc_a_d8),
        /* 0xCF */ instr!("RST 08H", Cpu::op_rst_08h),
        /* 0xD0 */ instr!("RET NC", Cpu::op_ret_nc),
        /* 0xD1 */ instr!("POP DE", Cpu::op_pop_de),
        /* 0xD2 */ instr!("JP NC,a16", Cpu::op_jp_nc_a16),
        /* 0xD3 */ instr!("UNIMPLEMENTED(0xD3)", Cpu::op_invalid),
        /* 0xD4 */ instr!("CALL NC,a16", Cpu::op_call_nc_a16),
        /* 0xD5 */ instr!("PUSH DE", Cpu::op_push_de),
        /* 0xD6 */ instr!("SUB A,d8", Cpu::op_sub_a_d8),
        /* 0xD7 */ instr!("RST 10H", Cpu::op_rst_10h),
        /* 0xD8 */ instr!("RET C", Cpu::op_ret_c),
        /* 0xD9 */ instr!("RETI", Cpu::op_reti),
        /* 0xDA */ instr!("JP C,a16", Cpu::op_jp_c_a16),
        /* 0xDB */ instr!("UNIMPLEMENTED(0xDB)", Cpu::op_invalid),
        /* 0xDC */ instr!("CALL C,a16", Cpu::op_call_c_a16),
        /* 0xDD */ instr!("UNIMPLEMENTED(0xDD)", Cpu::op_invalid),
        /* 0xDE */ instr!("SBC A,d8", Cpu::op_sbc_a_d8),
        /* 0xDF */ instr!("RST 18H", Cpu::op_rst_18h),
        /* 0xE0 */ instr!("LDH (a8),A", Cpu::op_ldh_a8_a),
        /* 0xE1 */ instr!("POP HL", Cpu::op_pop_hl),
        /* 0xE2 */ instr!("LD (C),A", Cpu::op_ld_cp_a),
        /* 0xE3 */ instr!("UNIMPLEMENTED(0xE3)", Cpu::op_invalid),
        /* 0xE4 */ instr!("UNIMPLEMENTED(0xE4)", Cpu::op_invalid),
        /* 0xE5 */ instr!("PUSH HL", Cpu::op_push_hl),
        /* 0xE6 */ instr!("AND A,d8", Cpu::op_and_a_d8),
        /* 0xE7 */ instr!("RST 20H", Cpu::op_rst_20h),
        /* 0xE8 */ instr!("ADD SP,r8", Cpu::op_add_sp_r8),
        /* 0xE9 */ instr!("JP HL", Cpu::op_jp_hl),
        /* 0xEA */ instr!("LD (a16),A", Cpu::op_ld_a16_a),
        /* 0xEB */ instr!("UNIMPLEMENTED(0xEB)", Cpu::op_invalid),
        /* 0xEC */ instr!("UNIMPLEMENTED(0xEC)", Cpu::op_invalid),
        /* 0xED */ instr!("UNIMPLEMENTED(0xED)", Cpu::op_invalid),
        /* 0xEE */ instr!("XOR A,d8", Cpu::op_xor_a_d8),
        /* 0xEF */ instr!("RST 28H", Cpu::op_rst_28h),
        /* 0xF0 */ instr!("LDH A,(a8)", Cpu::op_ldh_a_a8),
        /* 0xF1 */ instr!("POP AF", Cpu::op_pop_af),
        /* 0xF2 */ instr!("LD A,(C)", Cpu::op_ld_a_cp),
        /* 0xF3 */ instr!("DI", Cpu::op_di),
        /* 0xF4 */ instr!("UNIMPLEMENTED(0xF4)", Cpu::op_invalid),
        /* 0xF5 */ instr!("PUSH AF", Cpu::op_push_af),
        /* 0xF6 */ instr!("OR A,d8", Cpu::op_or_a_d8),
        /* 0xF7 */ instr!("RST 30H", Cpu::op_rst_30h),
        /* 0xF8 */ instr!("LD HL,SP+r8", Cpu::op_ld_hl_sp_r8),
        /* 0xF9 */ instr!("LD SP,HL", Cpu::op_ld_sp_hl),
        /* 0xFA */ instr!("LD A,(a16)", Cpu::op_ld_a_a16),
        /* 0xFB */ instr!("EI", Cpu::op_ei),
        /* 0xFC */ instr!("UNIMPLEMENTED(0xFC)", Cpu::op_invalid),
        /* 0xFD */ instr!("UNIMPLEMENTED(0xFD)", Cpu::op_invalid),
        /* 0xFE */ instr!("CP A,d8", Cpu::op_cp_a_d8),
        /* 0xFF */ instr!("RST 38H", Cpu::op_rst_38h),
    ];

    pub static ref CB_INSTRUCTIONS: [Instruction; 256] = [
        /* 0x00 */ instr!("RLC B", Cpu::op_cb_rlc_b),
        /* 0x01 */ instr!("RLC C", Cpu::op_cb_rlc_c),
        /* 0x02 */ instr!("RLC D", Cpu::op_cb_rlc_d),
        /* 0x03 */ instr!("RLC E", Cpu::op_cb_rlc_e),
        /* 0x04 */ instr!("RLC H", Cpu::op_cb_rlc_h),
        /* 0x05 */ instr!("RLC L", Cpu::op_cb_rlc_l),
        /* 0x06 */ instr!("RLC (HL)", Cpu::op_cb_rlc_hlp),
        /* 0x07 */ instr!("RLC A", Cpu::op_cb_rlc_a),
        /* 0x08 */ instr!("RRC B", Cpu::op_cb_rrc_b),
        /* 0x09 */ instr!("RRC C", Cpu::op_cb_rrc_c),
        /* 0x0A */ instr!("RRC D", Cpu::op_cb_rrc_d),
        /* 0x0B */ instr!("RRC E", Cpu::op_cb_rrc_e),
        /* 0x0C */ instr!("RRC H", Cpu::op_cb_rrc_h),
        /* 0x0D */ instr!("RRC L", Cpu::op_cb_rrc_l),
        /* 0x0E */ instr!("RRC (HL)", Cpu::op_cb_rrc_hlp),
        /* 0x0F */ instr!("RRC A", Cpu::op_cb_rrc_a),
        /* 0x10 */ instr!("RL B", Cpu::op_cb_rl_b),
        /* 0x11 */ instr!("RL C", Cpu::op_cb_rl_c),
        /* 0x12 */ instr!("RL D", Cpu::op_cb_rl_d),
        /* 0x13 */ instr!("RL E", Cpu::op_cb_rl_e),
        /* 0x14 */ instr!("RL H", Cpu::op_cb_rl_h),
        /* 0x15 */ instr!("RL L", Cpu::op_cb_rl_l),
        /* 0x16 */ instr!("RL (HL)", Cpu::op_cb_rl_hlp),
        /* 0x17 */ instr!("RL A", Cpu::op_cb_rl_a),
        /* 0x18 */ instr!("RR B", Cpu::op_cb_rr_b),
        /* 0x19 */ instr!("RR C", Cpu::op_cb_rr_c),
        /* 0x1A */ instr!("RR D", Cpu::op_cb_rr_d),
        /* 0x1B */ instr!("RR E", Cpu::op_cb_rr_e),
        /* 0x1C */ instr!("RR H", Cpu::op_cb_rr_h),
        /* 0x1D */ instr!("RR L", Cpu::op_cb_rr_l),
        /* 0x1E */ instr!("RR (HL)", Cpu::op_cb_rr_hlp),
        /* 0x1F */ instr!("RR A", Cpu::op_cb_rr_a),
        /* 0x20 */ instr!("SLA B", Cpu::op_cb_sla_b),
        /* 0x21 */ instr!("SLA C", Cpu::op_cb_sla_c),
        /* 0x22 */ instr!("SLA D", Cpu::op_cb_sla_d),
        /* 0x23 */ instr!("SLA E", Cpu::op_cb_sla_e),
        /* 0x24 */ instr!("SLA H", Cpu::op_cb_sla_h),
        /* 0x25 */ instr!("SLA L", Cpu::op_cb_sla_l),
        /* 0x26 */ instr!("SLA (HL)", Cpu::op_cb_sla_hlp),
        /* 0x27 */ instr!("SLA A", Cpu::op_cb_sla_a),
        /* 0x28 */ instr!("SRA B", Cpu::op_cb_sra_b),
        /* 0x29 */ instr!("SRA C", Cpu::op_cb_sra_c),
        /* 0x2A */ instr!("SRA D", Cpu::op_cb_sra_d),
        /* 0x2B */ instr!("SRA E", Cpu::op_cb_sra_e),
        /* 0x2C */ instr!("SRA H", Cpu::op_cb_sra_h),
        /* 0x2D */ instr!("SRA L", Cpu::op_cb_sra_l),
        /* 0x2E */ instr!("SRA (HL)", Cpu::op_cb_sra_hlp),
        /* 0x2F */ instr!("SRA A", Cpu::op_cb_sra_a),
        /* 0x30 */ instr!("SWAP B", Cpu::op_cb_swap_b),
        /* 0x31 */ instr!("SWAP C", Cpu::op_cb_swap_c),
        /* 0x32 */ instr!("SWAP D", Cpu::op_cb_swap_d),
        /* 0x33 */ instr!("SWAP E", Cpu::op_cb_swap_e),
        /* 0x34 */ instr!("SWAP H", Cpu::op_cb_swap_h),
        /* 0x35 */ instr!("SWAP L", Cpu::op_cb_swap_l),
        /* 0x36 */ instr!("SWAP (HL)", Cpu::op_cb_swap_hlp),
        /* 0x37 */ instr!("SWAP A", Cpu::op_cb_swap_a),
        /* 0x38 */ instr!("SRL B", Cpu::op_cb_srl_b),
        /* 0x39 */ instr!("SRL C", Cpu::op_cb_srl_c),
        /* 0x3A */ instr!("SRL D", Cpu::op_cb_srl_d),
        /* 0x3B */ instr!("SRL E", Cpu::op_cb_srl_e),
        /* 0x3C */ instr!("SRL H", Cpu::op_cb_srl_h),
        /* 0x3D */ instr!("SRL L", Cpu::op_cb_srl_l),
        /* 0x3E */ instr!("SRL (HL)", Cpu::op_cb_srl_hlp),
        /* 0x3F */ instr!("SRL A", Cpu::op_cb_srl_a),
        /* 0x40 */ instr!("BIT 0,B", Cpu::op_cb_bit_0_b),
        /* 0x41 */ instr!("BIT 0,C", Cpu::op_cb_bit_0_c),
        /* 0x42 */ instr!("BIT 0,D", Cpu::op_cb_bit_0_d),
        /* 0x43 */ instr!("BIT 0,E", Cpu::op_cb_bit_0_e),
        /* 0x44 */ instr!("BIT 0,H", Cpu::op_cb_bit_0_h),
        /* 0x45 */ instr!("BIT 0,L", Cpu::op_cb_bit_0_l),
        /* 0x46 */ instr!("BIT 0,(HL)", Cpu::op_cb_bit_0_hlp),
        /* 0x47 */ instr!("BIT 0,A", Cpu::op_cb_bit_0_a),
        /* 0x48 */ instr!("BIT 1,B", Cpu::op_cb_bit_1_b),
        /* 0x49 */ instr!("BIT 1,C", Cpu::op_cb_bit_1_c),
        /* 0x4A */ instr!("BIT 1,D", Cpu::op_cb_bit_1_d),
        /* 0x4B */ instr!("BIT 1,E", Cpu::op_cb_bit_1_e),
        /* 0x4C */ instr!("BIT 1,H", Cpu::op_cb_bit_1_h),
        /* 0x4D */ instr!("BIT 1,L", Cpu::op_cb_bit_1_l),
        /* 0x4E */ instr!("BIT 1,(HL)", Cpu::op_cb_bit_1_hlp),
        /* 0x4F */ instr!("BIT 1,A", Cpu::op_cb_bit_1_a),
        /* 0x50 */ instr!("BIT 2,B", Cpu::op_cb_bit_2_b),
        /* 0x51 */ instr!("BIT 2,C", Cpu::op_cb_bit_2_c),
        /* 0x52 */ instr!("BIT 2,D", Cpu::op_cb_bit_2_d),
        /* 0x53 */ instr!("BIT 2,E", Cpu::op_cb_bit_2_e),
        /* 0x54 */ instr!("BIT 2,H", Cpu::op_cb_bit_2_h),
        /* 0x55 */ instr!("BIT 2,L", Cpu::op_cb_bit_2_l),
        /* 0x56 */ instr!("BIT 2,(HL)", Cpu::op_cb_bit_2_hlp),
        /* 0x57 */ instr!("BIT 2,A", Cpu::op_cb_bit_2_a),
        /* 0x58 */ instr!("BIT 3,B", Cpu::op_cb_bit_3_b),
        /* 0x59 */ instr!("BIT 3,C", Cpu::op_cb_bit_3_c),
        /* 0x5A */ instr!("BIT 3,D", Cpu::op_cb_bit_3_d),
        /* 0x5B */ instr!("BIT 3,E", Cpu::op_cb_bit_3_e),
        /* 0x5C */ instr!("BIT 3,H", Cpu::op_cb_bit_3_h),
        /* 0x5D */ instr!("BIT 3,L", Cpu::op_cb_bit_3_l),
        /* 0x5E */ instr!("BIT 3,(HL)", Cpu::op_cb_bit_3_hlp),
        /* 0x5F */ instr!("BIT 3,A", Cpu::op_cb_bit_3_a),
        /* 0x60 */ instr!("BIT 4,B", Cpu::op_cb_bit_4_b),
        /* 0x61 */ instr!("BIT 4,C", Cpu::op_cb_bit_4_c),
        /* 0x62 */ instr!("BIT 4,D", Cpu::op_cb_bit_4_d),
        /* 0x63 */ instr!("BIT 4,E", Cpu::op_cb_bit_4_e),
        /* 0x64 */ instr!("BIT 4,H", Cpu::op_cb_bit_4_h),
        /* 0x65 */ instr!("BIT 4,L", Cpu::op_cb_bit_4_l),
        /* 0x66 */ instr!("BIT 4,(HL)", Cpu::op_cb_bit_4_hlp),
        /* 0x67 */ instr!("BIT 4,A", Cpu::op_cb_bit_4_a),
        /* 0x68 */ instr!("BIT 5,B", Cpu::op_cb_bit_5_b),
        /* 0x69 */ instr!("BIT 5,C", Cpu::op_cb_bit_5_c),
        /* 0x6A */ instr!("BIT 5,D", Cpu::op_cb_bit_5_d),
        /* 0x6B */ instr!("BIT 5,E", Cpu::op_cb_bit_5_e),
        /* 0x6C */ instr!("BIT 5,H", Cpu::op_cb_bit_5_h),
        /* 0x6D */ instr!("BIT 5,L", Cpu::op_cb_bit_5_l),
        /* 0x6E */ instr!("BIT 5,(HL)", Cpu::op_cb_bit_5_hlp),
        /* 0x6F */ instr!("BIT 5,A", Cpu::op_cb_bit_5_a),
        /* 0x70 */ instr!("BIT 6,B", Cpu::op_cb_bit_6_b),
        /* 0x71 */ instr!("BIT 6,C", Cpu::op_cb_bit_6_c),
        /* 0x72 */ instr!("BIT 6,D", Cpu::op_cb_bit_6_d),
        /* 0x73 */ instr!("BIT 6,E", Cpu::op_cb_bit_6_e),
        /* 0x74 */ instr!("BIT 6,H", Cpu::op_cb_bit_6_h),
        /* 0x75 */ instr!("BIT 6,L", Cpu::op_cb_bit_6_l),
        /* 0x76 */ instr!("BIT 6,(HL)", Cpu::op_cb_bit_6_hlp),
        /* 0x77 */ instr!("BIT 6,A", Cpu::op_cb_bit_6_a),
        /* 0x78 */ instr!("BIT 7,B", Cpu::op_cb_bit_7_b),
        /* 0x79 */ instr!("BIT 7,C", Cpu::op_cb_bit_7_c),
        /* 0x7A */ instr!("BIT 7,D", Cpu::op_cb_bit_7_d),
        /* 0x7B */ instr!("BIT 7,E", Cpu::op_cb_bit_7_e),
        /* 0x7C */ instr!("BIT 7,H", Cpu::op_cb_bit_7_h),
        /* 0x7D */ instr!("BIT 7,L", Cpu::op_cb_bit_7_l),
        /* 0x7E */ instr!("BIT 7,(HL)", Cpu::op_cb_bit_7_hlp),
        /* 0x7F */ instr!("BIT 7,A", Cpu::op_cb_bit_7_a),
        /* 0x80 */ instr!("RES 0,B", Cpu::op_cb_res_0_b),
        /* 0x81 */ instr!("RES 0,C", Cpu::op_cb_res_0_c),
        /* 0x82 */ instr!("RES 0,D", Cpu::op_cb_res_0_d),
        /* 0x83 */ instr!("RES 0,E", Cpu::op_cb_res_0_e),
        /* 0x84 */ instr!("RES 0,H", Cpu::op_cb_res_0_h),
        /* 0x85 */ instr!("RES 0,L", Cpu::op_cb_res_0_l),
        /* 0x86 */ instr!("RES 0,(HL)", Cpu::op_cb_res_0_hlp),
        /* 0x87 */ instr!("RES 0,A", Cpu::op_cb_res_0_a),
        /* 0x88 */ instr!("RES 1,B", Cpu::op_cb_res_1_b),
        /* 0x89 */ instr!("RES 1,C", Cpu::op_cb_res_1_c),
        /* 0x8A */ instr!("RES 1,D", Cpu::op_cb_res_1_d),
        /* 0x8B */ instr!("RES 1,E", Cpu::op_cb_res_1_e),
        /* 0x8C */ instr!("RES 1,H", Cpu::op_cb_res_1_h),
        /* 0x8D */ instr!("RES 1,L", Cpu::op_cb_res_1_l),
        /* 0x8E */ instr!("RES 1,(HL)", Cpu::op_cb_res_1_hlp),
        /* 0x8F */ instr!("RES 1,A", Cpu::op_cb_res_1_a),
        /* 0x90 */ instr!("RES 2,B", Cpu::op_cb_res_2_b),
        /* 0x91 */ instr!("RES 2,C", Cpu::op_cb_res_2_c),
        /* 0x92 */ instr!("RES 2,D", Cpu::op_cb_res_2_d),
        /* 0x93 */ instr!("RES 2,E", Cpu::op_cb_res_2_e),
        /* 0x94 */ instr!("RES 2,H", Cpu::op_cb_res_2_h),
        /* 0x95 */ instr!("RES 2,L", Cpu::op_cb_res_2_l),
        /* 0x96 */ instr!("RES 2,(HL)", Cpu::op_cb_res_2_hlp),
        /* 0x97 */ instr!("RES 2,A", Cpu::op_cb_res_2_a),
        /* 0x98 */ instr!("RES 3,B", Cpu::op_cb_res_3_b),
        /* 0x99 */ instr!("RES 3,C", Cpu::op_cb_res_3_c),
        /* 0x9A */ instr!("RES 3,D", Cpu::op_cb_res_3_d),
        /* 0x9B */ instr!("RES 3,E", Cpu::op_cb_res_3_e),
        /* 0x9C */ instr!("RES 3,H", Cpu::op_cb_res_3_h),
        /* 0x9D */ instr!("RES 3,L", Cpu::op_cb_res_3_l),
        /* 0x9E */ instr!("RES 3,(HL)", Cpu::op_cb_res_3_hlp),
        /* 0x9F */ instr!("RES 3,A", Cpu::op_cb_res_3_a),
        /* 0xA0 */ instr!("RES 4,B", Cpu::op_cb_res_4_b),
        /* 0xA1 */ instr!("RES 4,C", Cpu::op_cb_res_4_c),
        /* 0xA2 */ instr!("RES 4,D", Cpu::op_cb_res_4_d),
        /* 0xA3 */ instr!("RES 4,E", Cpu::op_cb_res_4_e),
        /* 0xA4 */ instr!("RES 4,H", Cpu::op_cb_res_4_h),
        /* 0xA5 */ instr!("RES 4,L", Cpu::op_cb_res_4_l),
        /* 0xA6 */ instr!("RES 4,(HL)", Cpu::op_cb_res_4_hlp),
        /* 0xA7 */ instr!("RES 4,A", Cpu::op_cb_res_4_a),
        /* 0xA8 */ instr!("RES 5,B", Cpu::op_cb_res_5_b),
        /* 0xA9 */ instr!("RES 5,C", Cpu::op_cb_res_5_c),
        /* 0xAA */ instr!("RES 5,D", Cpu::op_cb_res_5_d),
        /* 0xAB */ instr!("RES 5,E", Cpu::op_cb_res_5_e),
        /* 0xAC */ instr!("RES 5,H", Cpu::op_cb_res_5_h),
        /* 0xAD */ instr!("RES 5,L", Cpu::op_cb_res_5_l),
        /* 0xAE */ instr!("RES 5,(HL)", Cpu::op_cb_res_5_hlp),
        /* 0xAF */ instr!("RES 5,A", Cpu::op_cb_res_5_a),
        /* 0xB0 */ instr!("RES 6,B", Cpu::op_cb_res_6_b),
        /* 0xB1 */ instr!("RES 6,C", Cpu::op_cb_res_6_c),
        /* 0xB2 */ instr!("RES 6,D", Cpu::op_cb_res_6_d),
        /* 0xB3 */ instr!("RES 6,E", Cpu::op_cb_res_6_e),
        /* 0xB4 */ instr!("RES 6,H", Cpu::op_cb_res_6_h),
        /* 0xB5 */ instr!("RES 6,L", Cpu::op_cb_res_6_l),
        /* 0xB6 */ instr!("RES 6,(HL)", Cpu::op_cb_res_6_hlp),
        /* 0xB7 */ instr!("RES 6,A", Cpu::op_cb_res_6_a),
        /* 0xB8 */ instr!("RES 7,B", Cpu::op_cb_res_7_b),
        /* 0xB9 */ instr!("RES 7,C", Cpu::op_cb_res_7_c),
        /* 0xBA */ instr!("RES 7,D", Cpu::op_cb_res_7_d),
        /* 0xBB */ instr!("RES 7,E", Cpu::op_cb_res_7_e),
        /* 0xBC */ instr!("RES 7,H", Cpu::op_cb_res_7_h),
        /* 0xBD */ instr!("RES 7,L", Cpu::op_cb_res_7_l),
        /* 0xBE */ instr!("RES 7,(HL)", Cpu::op_cb_res_7_hlp),
        /* 0xBF */ instr!("RES 7,A", Cpu::op_cb_res_7_a),
        /* 0xC0 */ instr!("SET 0,B", Cpu::op_cb_set_0_b),
        /* 0xC1 */ instr!("SET 0,C", Cpu::op_cb_set_0_c),
        /* 0xC2 */ instr!("SET 0,D", Cpu::op_cb_set_0_d),
        /* 0xC3 */ instr!("SET 0,E", Cpu::op_cb_set_0_e),
        /* 0xC4 */ instr!("SET 0,H", Cpu::op_cb_set_0_h),
        /* 0xC5 */ instr!("SET 0,L", Cpu::op_cb_set_0_l),
        /* 0xC6 */ instr!("SET 0,(HL)", Cpu::op_cb_set_0_hlp),
        /* 0xC7 */ instr!("SET 0,A", Cpu::op_cb_set_0_a),
        /* 0xC8 */ instr!("SET 1,B", Cpu::op_cb_set_1_b),
        /* 0xC9 */ instr!("SET 1,C", Cpu::op_cb_set_1_c),
        /* 0xCA */ instr!("SET 1,D", Cpu::op_cb_set_1_d),
        /* 0xCB */ instr!("SET 1,E", Cpu::op_cb_set_1_e),
        /* 0xCC */ instr!("SET 1,H", Cpu::op_cb_set_1_h),
        /* 0xCD */ instr!("SET 1,L", Cpu::op_cb_set_1_l),
        /* 0xCE */ instr!("SET 1,(HL)", Cpu::op_cb_set_1_hlp),
        /* 0xCF */ instr!("SET 1,A", Cpu::op_cb_set_1_a),
        /* 0xD0 */ instr!("SET 2,B", Cpu::op_cb_set_2_b),
        /* 0xD1 */ instr!("SET 2,C", Cpu::op_cb_set_2_c),
        /* 0xD2 */ instr!("SET 2,D", Cpu::op_cb_set_2_d),
        /* 0xD3 */ instr!("SET 2,E", Cpu::op_cb_set_2_e),
        /* 0xD4 */ instr!("SET 2,H", Cpu::op_cb_set_2_h),
        /* 0xD5 */ instr!("SET 2,L", Cpu::op_cb_set_2_l),
        /* 0xD6 */ instr!("SET 2,(HL)", Cpu::op_cb_set_2_hlp),
        /* 0xD7 */ instr!("SET 2,A", Cpu::op_cb_set_2_a),
        /* 0xD8 */ instr!("SET 3,B", Cpu::op_cb_set_3_b),
        /* 0xD9 */ instr!("SET 3,C", Cpu::op_cb_set_3_c),
        /* 0xDA */ instr!("SET 3,D", Cpu::op_cb_set_3_d),
        /* 0xDB */ instr!("SET 3,E", Cpu::op_cb_set_3_e),
        /* 0xDC */ instr!("SET 3,H", Cpu::op_cb_set_3_h),
        /* 0xDD */ instr!("SET 3,L", Cpu::op_cb_set_3_l),
        /* 0xDE */ instr!("SET 3,(HL)", Cpu::op_cb_set_3_hlp),
        /* 0xDF */ instr!("SET 3,A", Cpu::op_cb_set_3_a),
        /* 0xE0 */ instr!("SET 4,B", Cpu::op_cb_set_4_b),
        /* 0xE1 */ instr!("SET 4,C", Cpu::op_cb_set_4_c),
        /* 0xE2 */ instr!("SET 4,D", Cpu::op_cb_set_4_d),
        /* 0xE3 */ instr!("SET 4,E", Cpu::op_cb_set_4_e),
        /* 0xE4 */ instr!("SET 4,H", Cpu::op_cb_set_4_h),
        /* 0xE5 */ instr!("SET 4,L", Cpu::op_cb_set_4_l),
        /* 0xE6 */ instr!("SET 4,(HL)", Cpu::op_cb_set_4_hlp),
        /* 0xE7 */ instr!("SET 4,A", Cpu::op_cb_set_4_a),
        /* 0xE8 */ instr!("SET 5,B", Cpu::op_cb_set_5_b),
        /* 0xE9 */ instr!("SET 5,C", Cpu::op_cb_set_5_c),
        /* 0xEA */ instr!("SET 5,D", Cpu::op_cb_set_5_d),
        /* 0xEB */ instr!("SET 5,E", Cpu::op_cb_set_5_e),
        /* 0xEC */ instr!("SET 5,H", Cpu::op_cb_set_5_h),
        /* 0xED */ instr!("SET 5,L", Cpu::op_cb_set_5_l),
        /* 0xEE */ instr!("SET 5,(HL)", Cpu::op_cb_set_5_hlp),
        /* 0xEF */ instr!("SET 5,A", Cpu::op_cb_set_5_a),
        /* 0xF0 */ instr!("SET 6,B", Cpu::op_cb_set_6_b),
        /* 0xF1 */ instr!("SET 6,C", Cpu::op_cb_set_6_c),
        /* 0xF2 */ instr!("SET 6,D", Cpu::op_cb_set_6_d),
        /* 0xF3 */ instr!("SET 6,E", Cpu::op_cb_set_6_e),
        /* 0xF4 */ instr!("SET 6,H", Cpu::op_cb_set_6_h),
        /* 0xF5 */ instr!("SET 6,L", Cpu::op_cb_set_6_l),
        /* 0xF6 */ instr!("SET 6,(HL)", Cpu::op_cb_set_6_hlp),
        /* 0xF7 */ instr!("SET 6,A", Cpu::op_cb_set_6_a),
        /* 0xF8 */ instr!("SET 7,B", Cpu::op_cb_set_7_b),
        /* 0xF9 */ instr!("SET 7,C", Cpu::op_cb_set_7_c),
        /* 0xFA */ instr!("SET 7,D", Cpu::op_cb_set_7_d),
        /* 0xFB */ instr!("SET 7,E", Cpu::op_cb_set_7_e),
        /* 0xFC */ instr!("SET 7,H", Cpu::op_cb_set_7_h),
        /* 0xFD */ instr!("SET 7,L", Cpu::op_cb_set_7_l),
        /* 0xFE */ instr!("SET 7,(HL)", Cpu::op_cb_set_7_hlp),
        /* 0xFF */ instr!("SET 7,A", Cpu::op_cb_set_7_a),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_table_has_256_entries_and_known_mnemonics() {
        assert_eq!(INSTRUCTIONS.len(), 256);
        assert_eq!(INSTRUCTIONS[0x00].name, "NOP");
        assert_eq!(INSTRUCTIONS[0xCB].name, "PREFIX CB");
        assert_eq!(INSTRUCTIONS[0xFF].name, "RST 38H");
    }

    #[test]
    fn cb_table_has_256_entries_and_known_mnemonics() {
        assert_eq!(CB_INSTRUCTIONS.len(), 256);
        assert_eq!(CB_INSTRUCTIONS[0x00].name, "RLC B");
        assert_eq!(CB_INSTRUCTIONS[0x47].name, "BIT 0,A");
        assert_eq!(CB_INSTRUCTIONS[0xFF].name, "SET 7,A");
    }

    #[test]
    fn invalid_opcode_slots_all_point_at_the_fallback_handler() {
        for opcode in [
            0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
        ] {
            assert_eq!(
                INSTRUCTIONS[opcode].name,
                format!("UNIMPLEMENTED({opcode:#04X})")
            );
        }
    }
}
