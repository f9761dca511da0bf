//! Classification of `/proc/cpuinfo` flags.

/// Static description of a known flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownFlag {
    /// Flag as spelled in `/proc/cpuinfo`.
    pub flag: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Vendor that introduced it.
    pub vendor: &'static str,
    /// Display category.
    pub category: &'static str,
}

const fn known(
    flag: &'static str,
    description: &'static str,
    vendor: &'static str,
    category: &'static str,
) -> KnownFlag {
    KnownFlag {
        flag,
        description,
        vendor,
        category,
    }
}

const COMMON: &str = "Common";
const INTEL: &str = "Intel";
const AMD: &str = "AMD";

static KNOWN: &[KnownFlag] = &[
    // Core
    known("fpu", "x87 floating point unit", COMMON, "Core"),
    known("tsc", "Time stamp counter", COMMON, "Core"),
    known("msr", "Model-specific registers", COMMON, "Core"),
    known("cx8", "CMPXCHG8B instruction", COMMON, "Core"),
    known("cx16", "CMPXCHG16B instruction", COMMON, "Core"),
    known("cmov", "Conditional move instructions", COMMON, "Core"),
    known("popcnt", "Population count instruction", COMMON, "Core"),
    known("movbe", "Byte-swapping move", COMMON, "Core"),
    known("lm", "64-bit long mode", COMMON, "Core"),
    known("nx", "No-execute page protection", COMMON, "Core"),
    known("rdrand", "Hardware random number generator", COMMON, "Core"),
    known("rdseed", "Hardware random seed", COMMON, "Core"),
    known("adx", "Multi-precision add-carry", COMMON, "Core"),
    // SIMD
    known("mmx", "MultiMedia eXtensions", COMMON, "SIMD"),
    known("sse", "Streaming SIMD Extensions", COMMON, "SIMD"),
    known("sse2", "Streaming SIMD Extensions 2", COMMON, "SIMD"),
    known("pni", "Streaming SIMD Extensions 3", COMMON, "SIMD"),
    known("ssse3", "Supplemental SSE3", COMMON, "SIMD"),
    known("sse4_1", "SSE4.1", COMMON, "SIMD"),
    known("sse4_2", "SSE4.2", COMMON, "SIMD"),
    known("sse4a", "SSE4a", AMD, "SIMD"),
    known("avx", "Advanced Vector Extensions", COMMON, "SIMD"),
    known("avx2", "Advanced Vector Extensions 2", COMMON, "SIMD"),
    known("fma", "Fused multiply-add", COMMON, "SIMD"),
    known("f16c", "Half-precision conversion", COMMON, "SIMD"),
    known("avx512f", "AVX-512 Foundation", INTEL, "SIMD"),
    known("avx512dq", "AVX-512 Doubleword and Quadword", INTEL, "SIMD"),
    known("avx512cd", "AVX-512 Conflict Detection", INTEL, "SIMD"),
    known("avx512bw", "AVX-512 Byte and Word", INTEL, "SIMD"),
    known("avx512vl", "AVX-512 Vector Length", INTEL, "SIMD"),
    known("avx512_vnni", "AVX-512 Vector Neural Network", INTEL, "SIMD"),
    known("avx_vnni", "AVX Vector Neural Network", INTEL, "SIMD"),
    // Bit manipulation
    known("abm", "Advanced bit manipulation", AMD, "Bit Manipulation"),
    known("bmi1", "Bit manipulation set 1", COMMON, "Bit Manipulation"),
    known("bmi2", "Bit manipulation set 2", COMMON, "Bit Manipulation"),
    // Cryptography
    known("aes", "AES instructions", COMMON, "Cryptography"),
    known("pclmulqdq", "Carry-less multiplication", COMMON, "Cryptography"),
    known("sha_ni", "SHA extensions", COMMON, "Cryptography"),
    known("vaes", "Vector AES", COMMON, "Cryptography"),
    known("vpclmulqdq", "Vector carry-less multiplication", COMMON, "Cryptography"),
    known("gfni", "Galois field instructions", COMMON, "Cryptography"),
    // Security
    known("smep", "Supervisor mode execution prevention", COMMON, "Security"),
    known("smap", "Supervisor mode access prevention", COMMON, "Security"),
    known("umip", "User mode instruction prevention", COMMON, "Security"),
    known("ibt", "Indirect branch tracking", INTEL, "Security"),
    known("user_shstk", "User-mode shadow stack", COMMON, "Security"),
    known("sgx", "Software Guard Extensions", INTEL, "Security"),
    known("sme", "Secure memory encryption", AMD, "Security"),
    known("sev", "Secure encrypted virtualization", AMD, "Security"),
    known("md_clear", "Microarchitectural buffer clearing", INTEL, "Security"),
    known("ibrs", "Indirect branch restricted speculation", COMMON, "Security"),
    known("ibpb", "Indirect branch prediction barrier", COMMON, "Security"),
    known("stibp", "Single thread indirect branch predictors", COMMON, "Security"),
    known("ssbd", "Speculative store bypass disable", COMMON, "Security"),
    // Virtualization
    known("vmx", "Intel VT-x", INTEL, "Virtualization"),
    known("svm", "AMD-V secure virtual machine", AMD, "Virtualization"),
    known("hypervisor", "Running under a hypervisor", COMMON, "Virtualization"),
    known("ept", "Extended page tables", INTEL, "Virtualization"),
    known("vpid", "Virtual processor ids", INTEL, "Virtualization"),
    known("npt", "Nested page tables", AMD, "Virtualization"),
    // Memory
    known("pae", "Physical address extension", COMMON, "Memory"),
    known("pse", "Page size extension", COMMON, "Memory"),
    known("pge", "Page global enable", COMMON, "Memory"),
    known("pat", "Page attribute table", COMMON, "Memory"),
    known("pdpe1gb", "1 GB pages", COMMON, "Memory"),
    known("clflush", "Cache line flush", COMMON, "Memory"),
    known("clflushopt", "Optimized cache line flush", COMMON, "Memory"),
    known("clwb", "Cache line write back", COMMON, "Memory"),
    known("erms", "Enhanced REP MOVSB/STOSB", INTEL, "Memory"),
    known("fsrm", "Fast short REP MOV", INTEL, "Memory"),
    known("invpcid", "Invalidate process-context identifier", COMMON, "Memory"),
    known("pcid", "Process-context identifiers", COMMON, "Memory"),
    // Power management
    known("est", "Enhanced SpeedStep", INTEL, "Power Management"),
    known("constant_tsc", "TSC ticks at a constant rate", COMMON, "Power Management"),
    known("nonstop_tsc", "TSC does not stop in C states", COMMON, "Power Management"),
    known("arat", "Always running APIC timer", COMMON, "Power Management"),
    known("hwp", "Hardware P-states", INTEL, "Power Management"),
    known("cpb", "Core performance boost", AMD, "Power Management"),
    // Monitoring
    known("pdcm", "Performance capabilities MSR", INTEL, "Monitoring"),
    known("arch_perfmon", "Architectural performance monitoring", INTEL, "Monitoring"),
    known("pebs", "Precise event based sampling", INTEL, "Monitoring"),
    known("perfctr_core", "Core performance counter extensions", AMD, "Monitoring"),
    known("intel_pt", "Intel Processor Trace", INTEL, "Monitoring"),
    known("ds_cpl", "CPL qualified debug store", INTEL, "Monitoring"),
];

/// Look up a flag in the classification table.
pub fn lookup(flag: &str) -> Option<&'static KnownFlag> {
    KNOWN.iter().find(|known| known.flag == flag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_known_and_unknown() {
        let avx = lookup("avx2").unwrap();
        assert_eq!(avx.category, "SIMD");
        assert!(lookup("definitely_not_a_flag").is_none());
    }

    #[test]
    fn test_flags_unique() {
        let mut seen = HashSet::new();
        for entry in KNOWN {
            assert!(seen.insert(entry.flag), "duplicate {}", entry.flag);
        }
    }
}
