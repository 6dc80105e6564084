//! Macros that stamp out the many near-identical opcode wrapper functions
//! (one per operand register) from a handful of shared primitives. Static
//! function-pointer tables can't be generic, so this is the idiomatic stand-in
//! for what would otherwise be compile-time generated operand dispatch.

macro_rules! ld_r_r {
    ($name:ident, $dst:ident, $src:ident, $cycles:expr) => {
        #[allow(clippy::self_assignment)]
        pub fn $name(&mut self, _bus: &mut dyn crate::memory::MemoryBus) -> u8 {
            self.reg.$dst = self.reg.$src;
            $cycles
        }
    };
}

macro_rules! ld_r_hlp {
    ($name:ident, $dst:ident, $cycles:expr) => {
        pub fn $name(&mut self, bus: &mut dyn crate::memory::MemoryBus) -> u8 {
            self.reg.$dst = bus.read(self.reg.get16(crate::registers::Register16::HL));
            $cycles
        }
    };
}

macro_rules! ld_hlp_r {
    ($name:ident, $src:ident, $cycles:expr) => {
        pub fn $name(&mut self, bus: &mut dyn crate::memory::MemoryBus) -> u8 {
            bus.write(self.reg.get16(crate::registers::Register16::HL), self.reg.$src);
            $cycles
        }
    };
}

macro_rules! alu_a_r {
    ($name:ident, $op:ident, $r:ident, $cycles:expr) => {
        pub fn $name(&mut self, _bus: &mut dyn crate::memory::MemoryBus) -> u8 {
            self.$op(self.reg.$r, false);
            $cycles
        }
    };
    ($name:ident, $op:ident, $r:ident, carry, $cycles:expr) => {
        pub fn $name(&mut self, _bus: &mut dyn crate::memory::MemoryBus) -> u8 {
            self.$op(self.reg.$r, true);
            $cycles
        }
    };
}

macro_rules! alu_a_hlp {
    ($name:ident, $op:ident, $cycles:expr) => {
        pub fn $name(&mut self, bus: &mut dyn crate::memory::MemoryBus) -> u8 {
            let value = bus.read(self.reg.get16(crate::registers::Register16::HL));
            self.$op(value, false);
            $cycles
        }
    };
    ($name:ident, $op:ident, carry, $cycles:expr) => {
        pub fn $name(&mut self, bus: &mut dyn crate::memory::MemoryBus) -> u8 {
            let value = bus.read(self.reg.get16(crate::registers::Register16::HL));
            self.$op(value, true);
            $cycles
        }
    };
}

macro_rules! cb_reg_op {
    ($name:ident, $op:ident, $r:ident, $cycles:expr) => {
        pub fn $name(&mut self, _bus: &mut dyn crate::memory::MemoryBus) -> u8 {
            self.reg.$r = self.$op(self.reg.$r);
            $cycles
        }
    };
    ($name:ident, bit, $bit:expr, $r:ident, $cycles:expr) => {
        pub fn $name(&mut self, _bus: &mut dyn crate::memory::MemoryBus) -> u8 {
            self.op_bit($bit, self.reg.$r);
            $cycles
        }
    };
    ($name:ident, res, $bit:expr, $r:ident, $cycles:expr) => {
        pub fn $name(&mut self, _bus: &mut dyn crate::memory::MemoryBus) -> u8 {
            self.reg.$r &= !(1 << $bit);
            $cycles
        }
    };
    ($name:ident, set, $bit:expr, $r:ident, $cycles:expr) => {
        pub fn $name(&mut self, _bus: &mut dyn crate::memory::MemoryBus) -> u8 {
            self.reg.$r |= 1 << $bit;
            $cycles
        }
    };
}

macro_rules! cb_hlp_op {
    ($name:ident, $op:ident, $cycles:expr) => {
        pub fn $name(&mut self, bus: &mut dyn crate::memory::MemoryBus) -> u8 {
            let addr = self.reg.get16(crate::registers::Register16::HL);
            let value = bus.read(addr);
            let result = self.$op(value);
            bus.write(addr, result);
            $cycles
        }
    };
    ($name:ident, bit, $bit:expr, $cycles:expr) => {
        pub fn $name(&mut self, bus: &mut dyn crate::memory::MemoryBus) -> u8 {
            let addr = self.reg.get16(crate::registers::Register16::HL);
            let value = bus.read(addr);
            self.op_bit($bit, value);
            $cycles
        }
    };
    ($name:ident, res, $bit:expr, $cycles:expr) => {
        pub fn $name(&mut self, bus: &mut dyn crate::memory::MemoryBus) -> u8 {
            let addr = self.reg.get16(crate::registers::Register16::HL);
            let value = bus.read(addr);
            bus.write(addr, value & !(1 << $bit));
            $cycles
        }
    };
    ($name:ident, set, $bit:expr, $cycles:expr) => {
        pub fn $name(&mut self, bus: &mut dyn crate::memory::MemoryBus) -> u8 {
            let addr = self.reg.get16(crate::registers::Register16::HL);
            let value = bus.read(addr);
            bus.write(addr, value | (1 << $bit));
            $cycles
        }
    };
}
