//! The immutable hardware record shown by the UI.

use std::collections::HashMap;

/// Everything collected about the machine, gathered once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardwareSnapshot {
    /// Processor facts.
    pub cpu: CpuInfo,
}

/// Processor identification, topology, features, caches and TLBs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuInfo {
    /// Human-readable vendor name.
    pub vendor: String,
    /// Marketing brand string.
    pub brand: String,
    /// `Family F, Model M, Stepping S`.
    pub model: String,
    /// Display family.
    pub family: u32,
    /// Display model number.
    pub model_number: u32,
    /// Stepping.
    pub stepping: u32,
    /// Physical cores per package.
    pub cores: u32,
    /// Logical processors per package.
    pub threads: u32,
    /// Highest standard CPUID leaf.
    pub max_func: u32,
    /// Highest extended CPUID leaf.
    pub max_ext_func: u32,
    /// Physical address width in bits.
    pub physical_addr_bits: u32,
    /// Linear (virtual) address width in bits.
    pub linear_addr_bits: u32,
    /// Every supported feature flag, in discovery order.
    pub features: Vec<String>,
    /// Classified features keyed by category name.
    pub feature_categories: HashMap<String, Vec<FeatureDetail>>,
    /// Cache hierarchy.
    pub caches: Vec<CacheDetail>,
    /// Translation lookaside buffers.
    pub tlb: TlbInfo,
    /// Hybrid core descriptor.
    pub hybrid: HybridInfo,
    /// Topology details.
    pub processor: ProcessorInfo,
    /// Raw signature fields.
    pub model_data: ModelData,
}

impl CpuInfo {
    /// Category names in lexicographic order.
    pub fn sorted_categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.feature_categories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// A classified feature flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureDetail {
    /// Flag name.
    pub name: String,
    /// What the flag means.
    pub description: String,
    /// Vendor that introduced it.
    pub vendor: String,
    /// Category it is grouped under.
    pub category: String,
}

/// One cache level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheDetail {
    /// Cache level (1, 2, 3...).
    pub level: u32,
    /// `Data`, `Instruction` or `Unified`.
    pub cache_type: String,
    /// Size in KiB.
    pub size_kb: u32,
    /// Associativity.
    pub ways: u32,
    /// Line size in bytes.
    pub line_size: u32,
    /// Number of sets.
    pub sets: u32,
    /// Cores sharing this cache.
    pub max_cores_sharing: u32,
    /// Logical processor ids sharing this cache.
    pub max_processor_ids: u32,
    /// Whether the cache initializes itself.
    pub self_initializing: bool,
    /// Whether any line can hold any address.
    pub fully_associative: bool,
    /// Write policy description.
    pub write_policy: String,
}

/// TLB entries grouped the way they are displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlbInfo {
    /// L1 data TLB.
    pub l1_data: Vec<TlbEntry>,
    /// L1 instruction TLB.
    pub l1_inst: Vec<TlbEntry>,
    /// L2 (and any higher level) unified TLB.
    pub l2_unified: Vec<TlbEntry>,
}

impl TlbInfo {
    /// True when no group has entries.
    pub fn is_empty(&self) -> bool {
        self.l1_data.is_empty() && self.l1_inst.is_empty() && self.l2_unified.is_empty()
    }
}

/// One TLB description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlbEntry {
    /// Page size label, e.g. `4K`.
    pub page_size: String,
    /// Number of entries.
    pub entries: u32,
    /// Associativity label.
    pub associativity: String,
}

/// Hybrid (performance/efficiency) core information.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HybridInfo {
    /// Whether the package mixes core types.
    pub is_hybrid: bool,
    /// Type of the core the snapshot was taken on.
    pub core_type: String,
}

/// Logical processor topology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessorInfo {
    /// Logical processors per package.
    pub max_logical_processors: u32,
    /// APIC id of the processor that was probed.
    pub initial_apic_id: u32,
    /// Hardware threads per core.
    pub threads_per_core: u32,
    /// Cores per package.
    pub core_count: u32,
}

/// Processor signature split into its encoded fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelData {
    /// Stepping id.
    pub stepping_id: u32,
    /// Base model id.
    pub model_id: u32,
    /// Base family id.
    pub family_id: u32,
    /// Processor type.
    pub processor_type: u32,
    /// Extended model id.
    pub extended_model: u32,
    /// Extended family id.
    pub extended_family: u32,
}
