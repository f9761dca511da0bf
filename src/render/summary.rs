//! Summary page: processor identity, feature counts and cache sizes.

use super::section::{always, Field, FieldTable, Fit, Line, PageBuilder, Tone, FIELD_INDENT};
use crate::hardware::CpuInfo;
use crate::layout::Viewport;

static CPU: FieldTable<CpuInfo> = FieldTable {
    label_width: 12,
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
            fit: Fit::Reserve(20),
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
    ],
};

static FEATURES: FieldTable<CpuInfo> = FieldTable {
    label_width: 16,
    fields: &[
        Field {
            label: "Total Features:",
            value: |cpu| cpu.features.len().to_string(),
            visible: always,
            fit: Fit::Full,
        },
        Field {
            label: "Categories:",
            value: |cpu| cpu.feature_categories.len().to_string(),
            visible: always,
            fit: Fit::Full,
        },
    ],
};

/// Logical lines of the summary page.
pub fn lines(cpu: &CpuInfo, view: Viewport) -> Vec<Line> {
    let mut page = PageBuilder::new(view);

    page.title("CPU").fields(&CPU, cpu).blank(1);
    page.title("Features").fields(&FEATURES, cpu).blank(1);

    if !cpu.caches.is_empty() {
        page.title("Cache");
        for cache in &cpu.caches {
            page.text(
                FIELD_INDENT,
                format!("L{} {}: {} KB", cache.level, cache.cache_type, cache.size_kb),
                Tone::Normal,
            );
        }
    }

    page.finish()
}
