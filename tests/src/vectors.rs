//! Known-answer vectors from FIPS 197 and NIST SP 800-38A

use aesvault_algorithms::Mode;

/// Single-block cipher vector
pub struct BlockVector {
    /// Source of the vector
    pub name: &'static str,
    /// Key, hex
    pub key: &'static str,
    /// Plaintext block, hex
    pub plaintext: &'static str,
    /// Ciphertext block, hex
    pub ciphertext: &'static str,
}

/// Mode vector over two aligned blocks
pub struct ModeVector {
    /// Mode under test
    pub mode: Mode,
    /// Key, hex
    pub key: &'static str,
    /// IV or initial counter block, hex
    pub iv: &'static str,
    /// Plaintext, hex
    pub plaintext: &'static str,
    /// Ciphertext prefix covering the plaintext, hex
    pub ciphertext: &'static str,
}

/// FIPS 197 Appendices B and C
pub const FIPS197: &[BlockVector] = &[
    BlockVector {
        name: "FIPS 197 B",
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "3243f6a8885a308d313198a2e0370734",
        ciphertext: "3925841d02dc09fbdc118597196a0b32",
    },
    BlockVector {
        name: "FIPS 197 C.1",
        key: "000102030405060708090a0b0c0d0e0f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    BlockVector {
        name: "FIPS 197 C.2",
        key: "000102030405060708090a0b0c0d0e0f1011121314151617",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "dda97ca4864cdfe06eaf70a0ec0d7191",
    },
    BlockVector {
        name: "FIPS 197 C.3",
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "8ea2b7ca516745bfeafc49904b496089",
    },
];

const SP800_38A_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const SP800_38A_IV: &str = "000102030405060708090a0b0c0d0e0f";
const SP800_38A_PLAINTEXT: &str =
    "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51";

/// SP 800-38A F.2.1, F.3.13, F.4.1 and F.5.1, first two blocks
pub const SP800_38A: &[ModeVector] = &[
    ModeVector {
        mode: Mode::Cbc,
        key: SP800_38A_KEY,
        iv: SP800_38A_IV,
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: "7649abac8119b246cee98e9b12e9197d5086cb9b507219ee95db113a917678b2",
    },
    ModeVector {
        mode: Mode::Cfb,
        key: SP800_38A_KEY,
        iv: SP800_38A_IV,
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: "3b3fd92eb72dad20333449f8e83cfb4ac8a64537a0b3a93fcde3cdad9f1ce58b",
    },
    ModeVector {
        mode: Mode::Ofb,
        key: SP800_38A_KEY,
        iv: SP800_38A_IV,
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: "3b3fd92eb72dad20333449f8e83cfb4a7789508d16918f03f53c52dac54ed825",
    },
    ModeVector {
        mode: Mode::Ctr,
        key: SP800_38A_KEY,
        iv: "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff",
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: "874d6191b620e3261bef6864990db6ce9806f66b7970fdff8617187bb9fffdff",
    },
];
