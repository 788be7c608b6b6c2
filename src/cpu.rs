//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//! - **Illegal-opcode latch**: set by unassigned opcodes, halts the run loop
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: Execute one instruction
//! - `run()`: Execute until a cycle or instruction budget is exhausted
//!
//! Interrupts are explicit: the host calls `irq()` or `nmi()` between `run()`
//! invocations. The core does not poll an interrupt line.

use crate::addressing;
use crate::instructions::{alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer};
use crate::opcodes::{Mnemonic, OPCODE_TABLE};
use crate::{ExecutionError, MemoryBus};

/// NMI vector: PC is loaded from this address pair on `nmi()`.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector: PC is loaded from this address pair on `reset()`.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector: PC is loaded from this address pair on `irq()` and BRK.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Budget interpretation for [`CPU::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleMethod {
    /// The budget counts CPU cycles; each instruction subtracts its base
    /// cycle cost.
    CycleCount,
    /// The budget counts instructions; each instruction subtracts 1.
    InstructionCount,
}

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags,
/// program counter, stack pointer, and cycle counter. It is generic over the
/// memory implementation via the [`MemoryBus`] trait; the host owns memory
/// and may map any device behavior behind the bus.
///
/// A CPU is constructed with a bus and then initialised with [`CPU::reset`],
/// which loads PC from the reset vector. The instance is not safe for
/// concurrent access; a host requiring multiple CPUs instantiates multiple
/// independent cores.
///
/// # Examples
///
/// ```
/// use mos6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.reset(0x0300);
///
/// assert_eq!(cpu.pc(), 0x0300);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.a(), 0x00);
/// assert!(!cpu.illegal_opcode());
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Break flag (bit 4 of the pushed status during BRK/PHP)
    pub(crate) flag_b: bool,

    /// Decimal mode flag (enables BCD arithmetic in ADC/SBC)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag (blocks IRQ when set)
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag (set on unsigned overflow/no-borrow)
    pub(crate) flag_c: bool,

    /// Latched when an unassigned opcode is fetched; `run()` exits before the
    /// next fetch once set. Cleared by `reset()`.
    pub(crate) illegal_opcode: bool,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus.
    ///
    /// The CPU starts in an uninitialised power-on state with PC at 0x0000;
    /// call [`CPU::reset`] to load PC from the reset vector before running.
    pub fn new(memory: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFD,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: false,
            flag_z: false,
            flag_c: false,
            illegal_opcode: false,
            cycles: 0,
            memory,
        }
    }

    /// Resets the CPU and transfers control to `start`.
    ///
    /// As a debugging convenience the reset vector is first overwritten with
    /// `start` (low byte at 0xFFFC, high byte at 0xFFFD), so after reset the
    /// vector in memory and PC agree. Then:
    ///
    /// - A, X, Y are cleared
    /// - PC is loaded from the reset vector
    /// - SP is set to 0xFD
    /// - the illegal-opcode latch is cleared
    ///
    /// The status flags are left as they were; bit 5 of P (constant-one) has
    /// no storage in this representation and always reads back as 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.reset(0x8000);
    ///
    /// assert_eq!(cpu.pc(), 0x8000);
    /// assert_eq!(cpu.memory().read(0xFFFC), 0x00);
    /// assert_eq!(cpu.memory().read(0xFFFD), 0x80);
    /// ```
    pub fn reset(&mut self, start: u16) {
        self.memory.write(RESET_VECTOR, start as u8);
        self.memory.write(RESET_VECTOR + 1, (start >> 8) as u8);

        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;

        self.pc = self.read_word(RESET_VECTOR);
        self.sp = 0xFD;

        self.illegal_opcode = false;
    }

    /// Signals a maskable interrupt request.
    ///
    /// Ignored while the interrupt-disable flag is set. Otherwise the break
    /// flag is cleared, PC (high then low) and P are pushed, interrupts are
    /// disabled, and PC is loaded from the IRQ vector at 0xFFFE/0xFFFF.
    ///
    /// Interrupts are never injected mid-instruction; call this between
    /// [`CPU::run`] invocations.
    pub fn irq(&mut self) {
        if !self.flag_i {
            self.flag_b = false;
            self.stack_push((self.pc >> 8) as u8);
            self.stack_push(self.pc as u8);
            let status = self.status();
            self.stack_push(status);
            self.flag_i = true;
            self.pc = self.read_word(IRQ_VECTOR);
        }
    }

    /// Signals a non-maskable interrupt.
    ///
    /// Same sequence as [`CPU::irq`] but unconditional, and PC is loaded from
    /// the NMI vector at 0xFFFA/0xFFFB.
    pub fn nmi(&mut self) {
        self.flag_b = false;
        self.stack_push((self.pc >> 8) as u8);
        self.stack_push(self.pc as u8);
        let status = self.status();
        self.stack_push(status);
        self.flag_i = true;
        self.pc = self.read_word(NMI_VECTOR);
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch the opcode byte at PC and advance PC
    /// 2. Look up the dispatch entry for that byte
    /// 3. Resolve the addressing mode (advances PC past operand bytes)
    /// 4. Execute the instruction semantic
    /// 5. Add the entry's base cycle count to the cycle counter
    ///
    /// An unassigned opcode latches the illegal-opcode flag, costs zero
    /// cycles, and returns an error; all other instructions return `Ok`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.write(0x0300, 0xEA); // NOP
    ///
    /// let mut cpu = CPU::new(memory);
    /// cpu.reset(0x0300);
    /// cpu.step().unwrap();
    ///
    /// assert_eq!(cpu.pc(), 0x0301);
    /// assert_eq!(cpu.cycles(), 2);
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        // Fetch.
        let opcode = self.fetch();

        // Decode.
        let metadata = OPCODE_TABLE[opcode as usize];

        // Resolve the operand address; advances PC past the operand bytes.
        let addr = addressing::resolve(self, metadata.addressing_mode);

        self.cycles += metadata.base_cycles as u64;

        // Execute.
        match metadata.mnemonic {
            Mnemonic::Adc => alu::execute_adc(self, addr),
            Mnemonic::And => alu::execute_and(self, addr),
            Mnemonic::Asl => shifts::execute_asl(self, addr),
            Mnemonic::AslA => shifts::execute_asl_acc(self),
            Mnemonic::Bcc => branches::execute_bcc(self, addr),
            Mnemonic::Bcs => branches::execute_bcs(self, addr),
            Mnemonic::Beq => branches::execute_beq(self, addr),
            Mnemonic::Bit => alu::execute_bit(self, addr),
            Mnemonic::Bmi => branches::execute_bmi(self, addr),
            Mnemonic::Bne => branches::execute_bne(self, addr),
            Mnemonic::Bpl => branches::execute_bpl(self, addr),
            Mnemonic::Brk => control::execute_brk(self),
            Mnemonic::Bvc => branches::execute_bvc(self, addr),
            Mnemonic::Bvs => branches::execute_bvs(self, addr),
            Mnemonic::Clc => flags::execute_clc(self),
            Mnemonic::Cld => flags::execute_cld(self),
            Mnemonic::Cli => flags::execute_cli(self),
            Mnemonic::Clv => flags::execute_clv(self),
            Mnemonic::Cmp => alu::execute_cmp(self, addr),
            Mnemonic::Cpx => alu::execute_cpx(self, addr),
            Mnemonic::Cpy => alu::execute_cpy(self, addr),
            Mnemonic::Dec => inc_dec::execute_dec(self, addr),
            Mnemonic::Dex => inc_dec::execute_dex(self),
            Mnemonic::Dey => inc_dec::execute_dey(self),
            Mnemonic::Eor => alu::execute_eor(self, addr),
            Mnemonic::Inc => inc_dec::execute_inc(self, addr),
            Mnemonic::Inx => inc_dec::execute_inx(self),
            Mnemonic::Iny => inc_dec::execute_iny(self),
            Mnemonic::Jmp => control::execute_jmp(self, addr),
            Mnemonic::Jsr => control::execute_jsr(self, addr),
            Mnemonic::Lda => load_store::execute_lda(self, addr),
            Mnemonic::Ldx => load_store::execute_ldx(self, addr),
            Mnemonic::Ldy => load_store::execute_ldy(self, addr),
            Mnemonic::Lsr => shifts::execute_lsr(self, addr),
            Mnemonic::LsrA => shifts::execute_lsr_acc(self),
            Mnemonic::Nop => control::execute_nop(self),
            Mnemonic::Ora => alu::execute_ora(self, addr),
            Mnemonic::Pha => stack::execute_pha(self),
            Mnemonic::Php => stack::execute_php(self),
            Mnemonic::Pla => stack::execute_pla(self),
            Mnemonic::Plp => stack::execute_plp(self),
            Mnemonic::Rol => shifts::execute_rol(self, addr),
            Mnemonic::RolA => shifts::execute_rol_acc(self),
            Mnemonic::Ror => shifts::execute_ror(self, addr),
            Mnemonic::RorA => shifts::execute_ror_acc(self),
            Mnemonic::Rti => control::execute_rti(self),
            Mnemonic::Rts => control::execute_rts(self),
            Mnemonic::Sbc => alu::execute_sbc(self, addr),
            Mnemonic::Sec => flags::execute_sec(self),
            Mnemonic::Sed => flags::execute_sed(self),
            Mnemonic::Sei => flags::execute_sei(self),
            Mnemonic::Sta => load_store::execute_sta(self, addr),
            Mnemonic::Stx => load_store::execute_stx(self, addr),
            Mnemonic::Sty => load_store::execute_sty(self, addr),
            Mnemonic::Tax => transfer::execute_tax(self),
            Mnemonic::Tay => transfer::execute_tay(self),
            Mnemonic::Tsx => transfer::execute_tsx(self),
            Mnemonic::Txa => transfer::execute_txa(self),
            Mnemonic::Txs => transfer::execute_txs(self),
            Mnemonic::Tya => transfer::execute_tya(self),
            Mnemonic::Illegal => {
                self.illegal_opcode = true;
                return Err(ExecutionError::IllegalOpcode(opcode));
            }
        }

        Ok(())
    }

    /// Runs the CPU until `budget` is exhausted or the illegal-opcode flag
    /// is set.
    ///
    /// `method` selects whether the budget counts cycles or instructions.
    /// Returns the number of cycles consumed by this call; the host inspects
    /// [`CPU::illegal_opcode`] afterwards to distinguish budget exhaustion
    /// from a halt.
    ///
    /// Execution may overshoot a cycle budget by the tail of the final
    /// instruction: the budget is a trigger for stopping, not a hard ceiling.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{CycleMethod, CPU, FlatMemory, MemoryBus};
    ///
    /// let mut memory = FlatMemory::new();
    /// for addr in 0x0300..0x0310 {
    ///     memory.write(addr, 0xEA); // NOP sled
    /// }
    ///
    /// let mut cpu = CPU::new(memory);
    /// cpu.reset(0x0300);
    ///
    /// let cycles = cpu.run(3, CycleMethod::InstructionCount);
    /// assert_eq!(cycles, 6); // three 2-cycle NOPs
    /// assert_eq!(cpu.pc(), 0x0303);
    /// ```
    pub fn run(&mut self, budget: i32, method: CycleMethod) -> u64 {
        let start_cycles = self.cycles;
        let mut remaining = budget;

        while remaining > 0 && !self.illegal_opcode {
            let before = self.cycles;
            let _ = self.step();
            let spent = (self.cycles - before) as i32;

            remaining -= match method {
                CycleMethod::CycleCount => spent,
                CycleMethod::InstructionCount => 1,
            };
        }

        self.cycles - start_cycles
    }

    /// Runs the CPU for `budget` cycles. Shorthand for
    /// `run(budget, CycleMethod::CycleCount)`.
    pub fn run_for_cycles(&mut self, budget: i32) -> u64 {
        self.run(budget, CycleMethod::CycleCount)
    }

    // ========== Fetch and stack helpers ==========

    /// Fetches the byte at PC and advances PC.
    pub(crate) fn fetch(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Fetches a 16-bit little-endian word at PC and advances PC by 2.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch() as u16;
        let hi = self.fetch() as u16;
        (hi << 8) | lo
    }

    /// Reads a 16-bit little-endian word at `addr`.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Pushes a byte onto the page-1 stack.
    ///
    /// Writes to 0x0100 + SP, then decrements SP with wraparound. Overflow is
    /// silent and circular.
    pub(crate) fn stack_push(&mut self, value: u8) {
        self.memory.write(0x0100 + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pops a byte from the page-1 stack.
    ///
    /// Increments SP with wraparound, then reads from 0x0100 + SP. Underflow
    /// is silent and circular.
    pub(crate) fn stack_pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(0x0100 + self.sp as u16)
    }

    /// Sets the N and Z flags from a result byte.
    pub(crate) fn set_nz(&mut self, value: u8) {
        self.flag_n = (value & 0x80) != 0;
        self.flag_z = value == 0;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward
    /// from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: constant-one (no storage; always reads 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000; // Bit 5 always 1

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Loads the status register from a packed byte.
    ///
    /// Bit 5 of `value` is ignored; it has no storage and composes back as 1.
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = value & 0b1000_0000 != 0;
        self.flag_v = value & 0b0100_0000 != 0;
        self.flag_b = value & 0b0001_0000 != 0;
        self.flag_d = value & 0b0000_1000 != 0;
        self.flag_i = value & 0b0000_0100 != 0;
        self.flag_z = value & 0b0000_0010 != 0;
        self.flag_c = value & 0b0000_0001 != 0;
    }

    /// Returns the total number of CPU cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns true if an unassigned opcode has halted the CPU.
    ///
    /// Cleared by [`CPU::reset`].
    pub fn illegal_opcode(&self) -> bool {
        self.illegal_opcode
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Register Setters (for hosts and tests) ==========

    /// Sets the accumulator register value.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register value.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register value.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter value.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer value.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    ///
    /// This allows tests and external code to write to memory.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}
