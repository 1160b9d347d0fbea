use log::error;

/// Packs variable length codes into bytes, most significant bit first.
pub struct BitPacker {
    pub output: Vec<u8>,
    /// Meaningful bits in the final byte after flush(); 0 when the stream ended byte-aligned.
    pub last_bits: u8,
    queue: u64,
    q_bits: u8,
    /// Total bits pushed so far, padding excluded.
    bits_in: u64,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of size specified. Call flush() to
    /// flush the bit queue to the buffer before reading the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            last_bits: 0,
            queue: 0,
            q_bits: 0,
            bits_in: 0,
        }
    }

    /// Internal bitstream write function common to all out functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Puts up to 32 bits on the queue. The queue never holds more than 7 bits
    /// between calls, so 32 more always fit.
    fn push(&mut self, data: u32, depth: u8) {
        if depth == 0 {
            return;
        }
        self.queue <<= depth; //shift queue by bit length
        self.queue |= (data as u64) & (u64::MAX >> (64 - depth)); //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.write_stream();
    }

    /// Writes the low `len` bits of `code` (0-64), most significant first.
    pub fn out_code(&mut self, code: u64, len: u8) {
        debug_assert!(len <= 64);
        if len > 32 {
            self.push((code >> 32) as u32, len - 32);
            self.push(code as u32, 32);
        } else {
            self.push(code as u32, len);
        }
        self.bits_in += len as u64;
    }

    /// Puts an 8 bit word of pre-packed binary encoded data on the stream.
    pub fn out8(&mut self, data: u8) {
        self.out_code(data as u64, 8);
    }

    /// Total number of code bits written, padding excluded.
    pub fn bits_written(&self) -> u64 {
        self.bits_in
    }

    /// Flushes the remaining bits (1-7) from the buffer, padding with 0s in the least
    /// signficant bits
    pub fn flush(&mut self) {
        self.last_bits = self.q_bits % 8;
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format! {"[{}.{}]",((self.output.len() * 8) + self.q_bits as usize)/8, ((self.output.len() * 8) + self.q_bits as usize)%8}
    }
}

#[cfg(test)]
mod test {
    use super::BitPacker;

    #[test]
    fn out8_test() {
        let mut bw = BitPacker::new(100);
        bw.out8(b'!');
        bw.out8(b' ');
        bw.flush();
        assert_eq!(bw.output, "! ".as_bytes());
        assert_eq!(bw.last_bits, 0);
    }

    #[test]
    fn partial_byte_test() {
        let mut bw = BitPacker::new(100);
        bw.out_code(0b101, 3);
        assert_eq!("[0.3]", &bw.loc());
        bw.out_code(0b1, 1);
        bw.out_code(0b01, 2);
        bw.flush();
        assert_eq!(bw.output, [0b1011_0100]);
        assert_eq!(bw.last_bits, 6);
        assert_eq!(bw.bits_written(), 6);
    }

    #[test]
    fn straddle_test() {
        let mut bw = BitPacker::new(100);
        bw.out_code(0b11111, 5);
        bw.out_code(0b000000, 6);
        bw.out_code(0b11111, 5);
        bw.flush();
        assert_eq!(bw.output, [0b1111_1000, 0b0001_1111]);
        assert_eq!(bw.last_bits, 0);
        assert_eq!("[2.0]", &bw.loc());
    }

    #[test]
    fn long_code_test() {
        let mut bw = BitPacker::new(100);
        bw.out_code(1, 1);
        bw.out_code(0x8000_0000_0000_0001, 64);
        bw.flush();
        assert_eq!(
            bw.output,
            [0b1100_0000, 0, 0, 0, 0, 0, 0, 0, 0b1000_0000]
        );
        assert_eq!(bw.last_bits, 1);
        assert_eq!(bw.bits_written(), 65);
    }
}
