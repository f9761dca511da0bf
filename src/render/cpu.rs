//! CPU page: every collected processor detail.

use super::section::{
    always, Field, FieldTable, Fit, Line, PageBuilder, Tone, FIELD_INDENT, NESTED_INDENT,
};
use crate::hardware::{CpuInfo, TlbEntry};
use crate::layout::Viewport;

static BASIC: FieldTable<CpuInfo> = FieldTable {
    label_width: 15,
    fields: &[
        Field {
            label: "Vendor:",
            value: |cpu| cpu.vendor.clone(),
            visible: always,
            fit: Fit::Full,
        },
        Field {
            label: "Brand:",
            value: |cpu| cpu.brand.clone(),
            visible: always,
            fit: Fit::Reserve(25),
        },
        Field {
            label: "Model:",
            value: |cpu| cpu.model.clone(),
            visible: always,
            fit: Fit::Full,
        },
        Field {
            label: "Family:",
            value: |cpu| cpu.family.to_string(),
            visible: always,
            fit: Fit::Full,
        },
        Field {
            label: "Model Number:",
            value: |cpu| cpu.model_number.to_string(),
            visible: always,
            fit: Fit::Full,
        },
        Field {
            label: "Stepping:",
            value: |cpu| cpu.stepping.to_string(),
            visible: always,
            fit: Fit::Full,
        },
        Field {
            label: "Cores:",
            value: |cpu| cpu.cores.to_string(),
            visible: always,
            fit: Fit::Full,
        },
        Field {
            label: "Threads:",
            value: |cpu| cpu.threads.to_string(),
            visible: always,
            fit: Fit::Full,
        },
        Field {
            label: "Max Func:",
            value: |cpu| cpu.max_func.to_string(),
            visible: always,
            fit: Fit::Full,
        },
        Field {
            label: "Max Ext Func:",
            value: |cpu| cpu.max_ext_func.to_string(),
            visible: always,
            fit: Fit::Full,
        },
        Field {
            label: "Phys Addr Bits:",
            value: |cpu| cpu.physical_addr_bits.to_string(),
            visible: always,
            fit: Fit::Full,
        },
        Field {
            label: "Linear Addr Bits:",
            value: |cpu| cpu.linear_addr_bits.to_string(),
            visible: always,
            fit: Fit::Full,
        },
    ],
};

static PROCESSOR: FieldTable<CpuInfo> = FieldTable {
    label_width: 0,
    fields: &[
        Field {
            label: "Max Logical Processors:",
            value: |cpu| cpu.processor.max_logical_processors.to_string(),
            visible: always,
            fit: Fit::Full,
        },
        Field {
            label: "Initial APIC ID:",
            value: |cpu| cpu.processor.initial_apic_id.to_string(),
            visible: always,
            fit: Fit::Full,
        },
        Field {
            label: "Threads Per Core:",
            value: |cpu| cpu.processor.threads_per_core.to_string(),
            visible: always,
            fit: Fit::Full,
        },
    ],
};

static MODEL_DATA: FieldTable<CpuInfo> = FieldTable {
    label_width: 0,
    fields: &[
        Field {
            label: "",
            value: |cpu| {
                let m = &cpu.model_data;
                format!(
                    "Stepping ID: {} | Model ID: {} | Family ID: {}",
                    m.stepping_id, m.model_id, m.family_id
                )
            },
            visible: always,
            fit: Fit::Full,
        },
        Field {
            label: "",
            value: |cpu| {
                let m = &cpu.model_data;
                format!(
                    "Extended Model: {} | Extended Family: {}",
                    m.extended_model, m.extended_family
                )
            },
            visible: always,
            fit: Fit::Full,
        },
        Field {
            label: "Processor Type:",
            value: |cpu| cpu.model_data.processor_type.to_string(),
            visible: always,
            fit: Fit::Full,
        },
    ],
};

static HYBRID: FieldTable<CpuInfo> = FieldTable {
    label_width: 0,
    fields: &[Field {
        label: "Core Type:",
        value: |cpu| cpu.hybrid.core_type.clone(),
        visible: |cpu| cpu.hybrid.is_hybrid,
        fit: Fit::Full,
    }],
};

/// Logical lines of the CPU page.
pub fn lines(cpu: &CpuInfo, view: Viewport) -> Vec<Line> {
    let mut page = PageBuilder::new(view);

    page.title("Basic Information").fields(&BASIC, cpu).blank(1);
    page.title("Processor Details").fields(&PROCESSOR, cpu).blank(1);
    page.title("Model Data").fields(&MODEL_DATA, cpu).blank(1);

    if cpu.hybrid.is_hybrid {
        page.title("Hybrid CPU Information").fields(&HYBRID, cpu).blank(1);
    }

    caches(&mut page, cpu);
    tlbs(&mut page, cpu);
    categories(&mut page, cpu);

    if !cpu.features.is_empty() {
        page.title(format!("All Supported Features ({} total)", cpu.features.len()))
            .grid(FIELD_INDENT, cpu.features.as_slice());
    }

    page.finish()
}

fn caches(page: &mut PageBuilder, cpu: &CpuInfo) {
    if cpu.caches.is_empty() {
        return;
    }
    page.title("Detailed Cache Information");
    for c in &cpu.caches {
        page.text(
            FIELD_INDENT,
            format!(
                "L{} {}: {} KB, {}-way, {} bytes/line, {} sets",
                c.level, c.cache_type, c.size_kb, c.ways, c.line_size, c.sets
            ),
            Tone::Normal,
        )
        .text(
            NESTED_INDENT,
            format!(
                "Max Cores Sharing: {} | Max Processor IDs: {}",
                c.max_cores_sharing, c.max_processor_ids
            ),
            Tone::Normal,
        )
        .text(
            NESTED_INDENT,
            format!(
                "Write Policy: {} | Self-Init: {} | Fully Assoc: {}",
                c.write_policy, c.self_initializing, c.fully_associative
            ),
            Tone::Normal,
        );
    }
    page.blank(2);
}

fn tlbs(page: &mut PageBuilder, cpu: &CpuInfo) {
    let tlb = &cpu.tlb;
    if tlb.is_empty() {
        return;
    }
    page.title("TLB (Translation Lookaside Buffer)");
    let groups: [(&str, &[TlbEntry]); 3] = [
        ("L1 Data TLB:", tlb.l1_data.as_slice()),
        ("L1 Instruction TLB:", tlb.l1_inst.as_slice()),
        ("L2 Unified TLB:", tlb.l2_unified.as_slice()),
    ];
    for (label, entries) in groups.into_iter().filter(|(_, entries)| !entries.is_empty()) {
        page.text(FIELD_INDENT, label, Tone::Section);
        for entry in entries {
            page.text(
                NESTED_INDENT,
                format!(
                    "{}: {} entries, {} associativity",
                    entry.page_size, entry.entries, entry.associativity
                ),
                Tone::Normal,
            );
        }
    }
    page.blank(2);
}

fn categories(page: &mut PageBuilder, cpu: &CpuInfo) {
    if cpu.feature_categories.is_empty() {
        return;
    }
    page.title("Supported Features by Category");
    for name in cpu.sorted_categories() {
        let features = &cpu.feature_categories[name];
        let names: Vec<&str> = features.iter().map(|f| f.name.as_str()).collect();
        page.text(
            FIELD_INDENT,
            format!("▸ {name} ({} features)", features.len()),
            Tone::Section,
        )
        .grid(NESTED_INDENT, names.as_slice())
        .blank(1);
    }
    page.blank(2);
}
