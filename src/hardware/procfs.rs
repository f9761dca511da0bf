//! Linux provider: reads `/proc/cpuinfo` and the sysfs CPU topology.
//!
//! Only the first processor block is used. Fields the kernel does not
//! expose are left at their zero value; nothing optional is an error.

use super::features;
use super::snapshot::{
    CacheDetail, CpuInfo, FeatureDetail, HardwareSnapshot, HybridInfo, ModelData, ProcessorInfo,
    TlbEntry, TlbInfo,
};
use super::{CollectError, SnapshotSource};
use crate::config::ProbeConfig;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const P_CORE: &str = "P-core (Performance)";
const E_CORE: &str = "E-core (Efficient)";

/// Snapshot source backed by procfs and sysfs.
#[derive(Debug, Clone, Default)]
pub struct ProcfsSource {
    config: ProbeConfig,
}

impl ProcfsSource {
    /// Create a source reading from the given roots.
    pub const fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    fn cpuinfo_path(&self) -> PathBuf {
        self.config.proc_root.join("cpuinfo")
    }

    fn cache_dir(&self) -> PathBuf {
        self.config.sys_root.join("devices/system/cpu/cpu0/cache")
    }
}

impl SnapshotSource for ProcfsSource {
    fn collect(&self) -> Result<HardwareSnapshot, CollectError> {
        let path = self.cpuinfo_path();
        let text = fs::read_to_string(&path).map_err(|source| CollectError::Io {
            path: path.clone(),
            source,
        })?;
        let block = first_processor_block(&text).ok_or(CollectError::NoProcessor(path))?;

        let mut cpu = parse_cpuinfo(&block);
        cpu.caches = read_caches(&self.cache_dir());
        cpu.hybrid = detect_hybrid(&self.config.sys_root);
        debug!(
            features = cpu.features.len(),
            caches = cpu.caches.len(),
            hybrid = cpu.hybrid.is_hybrid,
            "collected cpu snapshot"
        );
        Ok(HardwareSnapshot { cpu })
    }
}

/// Key/value pairs of the first block that names a processor.
fn first_processor_block(text: &str) -> Option<HashMap<String, String>> {
    text.split("\n\n")
        .map(|block| {
            block
                .lines()
                .filter_map(|line| line.split_once(':'))
                .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
                .collect::<HashMap<_, _>>()
        })
        .find(|fields| fields.contains_key("processor"))
}

fn number(fields: &HashMap<String, String>, key: &str) -> u32 {
    let Some(raw) = fields.get(key) else {
        return 0;
    };
    raw.parse().unwrap_or_else(|_| {
        warn!(key, value = %raw, "unparseable cpuinfo field");
        0
    })
}

fn text(fields: &HashMap<String, String>, key: &str) -> String {
    fields.get(key).cloned().unwrap_or_default()
}

/// Marketing vendor name for a CPUID vendor string.
fn vendor_name(vendor_id: &str) -> String {
    match vendor_id {
        "GenuineIntel" => "Intel",
        "AuthenticAMD" => "AMD",
        "HygonGenuine" => "Hygon",
        "CentaurHauls" => "Centaur",
        "  Shanghai  " | "Shanghai" => "Zhaoxin",
        "" => "Unknown",
        other => other,
    }
    .to_string()
}

fn parse_cpuinfo(fields: &HashMap<String, String>) -> CpuInfo {
    let family = number(fields, "cpu family");
    let model_number = number(fields, "model");
    let stepping = number(fields, "stepping");
    let cores = number(fields, "cpu cores").max(1);
    let siblings = number(fields, "siblings").max(cores);
    let threads_per_core = (siblings / cores).max(1);
    let (physical_addr_bits, linear_addr_bits) = fields
        .get("address sizes")
        .map_or((0, 0), |sizes| parse_address_sizes(sizes));

    let features: Vec<String> = fields
        .get("flags")
        .or_else(|| fields.get("Features"))
        .map(|flags| flags.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();

    CpuInfo {
        vendor: vendor_name(fields.get("vendor_id").map_or("", String::as_str)),
        brand: text(fields, "model name"),
        model: format!("Family {family}, Model {model_number}, Stepping {stepping}"),
        family,
        model_number,
        stepping,
        cores,
        threads: threads_per_core * cores,
        max_func: number(fields, "cpuid level"),
        max_ext_func: 0,
        physical_addr_bits,
        linear_addr_bits,
        feature_categories: categorize(&features),
        features,
        caches: Vec::new(),
        tlb: parse_tlb(fields.get("TLB size").map(String::as_str)),
        hybrid: HybridInfo::default(),
        processor: ProcessorInfo {
            max_logical_processors: siblings,
            initial_apic_id: number(fields, "apicid"),
            threads_per_core,
            core_count: cores,
        },
        model_data: model_data(family, model_number, stepping),
    }
}

/// Split display family/model back into their CPUID-encoded fields.
fn model_data(family: u32, model: u32, stepping: u32) -> ModelData {
    ModelData {
        stepping_id: stepping,
        model_id: model & 0xF,
        family_id: family.min(0xF),
        processor_type: 0,
        extended_model: model >> 4,
        extended_family: family.saturating_sub(0xF),
    }
}

/// `39 bits physical, 48 bits virtual`.
fn parse_address_sizes(sizes: &str) -> (u32, u32) {
    let mut physical = 0;
    let mut virtual_bits = 0;
    for part in sizes.split(',') {
        let mut words = part.split_whitespace();
        let bits = words.next().and_then(|n| n.parse().ok()).unwrap_or(0);
        match words.nth(1) {
            Some("physical") => physical = bits,
            Some("virtual") => virtual_bits = bits,
            _ => {}
        }
    }
    (physical, virtual_bits)
}

/// `TLB size : 2560 4K pages` as reported on AMD parts.
fn parse_tlb(raw: Option<&str>) -> TlbInfo {
    let mut tlb = TlbInfo::default();
    let Some(raw) = raw else {
        return tlb;
    };
    let mut words = raw.split_whitespace();
    let entries = words.next().and_then(|n| n.parse().ok());
    let page_size = words.next();
    if let (Some(entries), Some(page_size)) = (entries, page_size) {
        tlb.l2_unified.push(TlbEntry {
            page_size: page_size.to_string(),
            entries,
            associativity: "unknown".to_string(),
        });
    }
    tlb
}

fn categorize(flags: &[String]) -> HashMap<String, Vec<FeatureDetail>> {
    let mut categories: HashMap<String, Vec<FeatureDetail>> = HashMap::new();
    for known in flags.iter().filter_map(|flag| features::lookup(flag)) {
        categories
            .entry(known.category.to_string())
            .or_default()
            .push(FeatureDetail {
                name: known.flag.to_string(),
                description: known.description.to_string(),
                vendor: known.vendor.to_string(),
                category: known.category.to_string(),
            });
    }
    categories
}

/// Read every `index*` directory under cpu0's cache directory.
///
/// A missing directory yields no caches.
fn read_caches(dir: &Path) -> Vec<CacheDetail> {
    let Ok(entries) = fs::read_dir(dir) else {
        debug!(dir = %dir.display(), "no cache topology");
        return Vec::new();
    };

    let mut indexed: Vec<(u32, PathBuf)> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name();
            let index = name.to_str()?.strip_prefix("index")?.parse().ok()?;
            Some((index, entry.path()))
        })
        .collect();
    indexed.sort_unstable_by_key(|(index, _)| *index);

    indexed
        .into_iter()
        .filter_map(|(_, path)| read_cache(&path))
        .collect()
}

fn read_cache(dir: &Path) -> Option<CacheDetail> {
    let read = |name: &str| {
        fs::read_to_string(dir.join(name))
            .ok()
            .map(|s| s.trim().to_string())
    };
    let read_number = |name: &str| read(name).and_then(|s| s.parse::<u32>().ok()).unwrap_or(0);

    let level = read("level")?.parse().ok()?;
    let sets = read_number("number_of_sets");
    let sharing = read("shared_cpu_list").map_or(1, |list| cpu_list_len(&list));

    Some(CacheDetail {
        level,
        cache_type: read("type").unwrap_or_else(|| "Unknown".to_string()),
        size_kb: read("size").map_or(0, |size| parse_size_kb(&size)),
        ways: read_number("ways_of_associativity"),
        line_size: read_number("coherency_line_size"),
        sets,
        max_cores_sharing: sharing,
        max_processor_ids: sharing,
        self_initializing: false,
        fully_associative: sets == 1,
        write_policy: read("write_policy").unwrap_or_else(|| "Unknown".to_string()),
    })
}

/// `32K`, `12288K`, `1M` in KiB.
fn parse_size_kb(size: &str) -> u32 {
    let size = size.trim();
    let (digits, scale) = match size.as_bytes().last() {
        Some(b'K' | b'k') => (&size[..size.len() - 1], 1),
        Some(b'M' | b'm') => (&size[..size.len() - 1], 1024),
        Some(b'G' | b'g') => (&size[..size.len() - 1], 1024 * 1024),
        _ => return size.parse::<u32>().map_or(0, |bytes| bytes / 1024),
    };
    digits.parse::<u32>().map_or(0, |n| n.saturating_mul(scale))
}

/// Number of CPUs in a list like `0-3,8,10-11`.
fn cpu_list_len(list: &str) -> u32 {
    cpu_list(list).fold(0, |acc, _| acc + 1)
}

fn cpu_list(list: &str) -> impl Iterator<Item = u32> + '_ {
    list.trim()
        .split(',')
        .filter(|part| !part.is_empty())
        .flat_map(|part| {
            let (lo, hi) = part.split_once('-').unwrap_or((part, part));
            match (lo.trim().parse::<u32>(), hi.trim().parse::<u32>()) {
                (Ok(lo), Ok(hi)) if lo <= hi => lo..=hi,
                #[allow(clippy::reversed_empty_ranges)]
                _ => 1..=0,
            }
        })
}

/// Hybrid parts expose separate `cpu_core` and `cpu_atom` PMUs.
fn detect_hybrid(sys_root: &Path) -> HybridInfo {
    let devices = sys_root.join("devices");
    let core = devices.join("cpu_core");
    if !core.is_dir() || !devices.join("cpu_atom").is_dir() {
        return HybridInfo::default();
    }

    let on_p_core = fs::read_to_string(core.join("cpus"))
        .map(|list| cpu_list(&list).any(|cpu| cpu == 0))
        .unwrap_or(false);
    HybridInfo {
        is_hybrid: true,
        core_type: if on_p_core { P_CORE } else { E_CORE }.to_string(),
    }
}
