//! Settings snapshot rendering
//!
//! Turns a resolved [`EmulationSettings`] record into the plain-text block
//! that gets copied into bug reports. The layout is stable: three sections
//! in fixed order, some lines pairing two related fields.

use std::fmt;

use crate::config::EmulationSettings;
use crate::constants::snapshot::{GPU, HACKS, LINE_PREFIX, SYSTEM};

/// Snapshot section, declared in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    System,
    Gpu,
    Hacks,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::System, Section::Gpu, Section::Hacks];

    pub fn title(self) -> &'static str {
        match self {
            Section::System => SYSTEM,
            Section::Gpu => GPU,
            Section::Hacks => HACKS,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One rendered field line and the section it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotLine {
    pub section: Section,
    pub text: String,
}

impl SnapshotLine {
    fn new(section: Section, text: String) -> Self {
        Self { section, text }
    }
}

/// Ordered field lines for `settings`
///
/// Executor values are always listed next to the driver, even for drivers
/// that ignore them.
pub fn snapshot_lines(settings: &EmulationSettings) -> Vec<SnapshotLine> {
    let s = settings;
    vec![
        SnapshotLine::new(Section::System, format!("Docked: {}", s.is_docked)),
        SnapshotLine::new(
            Section::Gpu,
            format!(
                "Driver: {} (executors: {} slots, threshold of {})",
                s.gpu_driver, s.executor_slot_count_scale, s.executor_flush_threshold
            ),
        ),
        SnapshotLine::new(
            Section::Gpu,
            format!(
                "Triple buffering: {}, DMI: {}",
                s.force_triple_buffering, s.use_direct_memory_import
            ),
        ),
        SnapshotLine::new(
            Section::Gpu,
            format!(
                "Max clocks: {}, free guest texture memory: {}",
                s.force_max_gpu_clocks, s.free_guest_texture_memory
            ),
        ),
        SnapshotLine::new(
            Section::Gpu,
            format!("Disable shader cache: {}", s.disable_shader_cache),
        ),
        SnapshotLine::new(
            Section::Hacks,
            format!(
                "Fast GPU readback: {}, fast readback writes {}",
                s.enable_fast_gpu_readback_hack, s.enable_fast_readback_writes
            ),
        ),
        SnapshotLine::new(
            Section::Hacks,
            format!("Disable GPU subgroup shuffle: {}", s.disable_subgroup_shuffle),
        ),
    ]
}

/// Render lines grouped by section
///
/// A header is emitted whenever the section changes, sections are separated
/// by a blank line. No leading indentation and no trailing newline.
pub fn render(lines: &[SnapshotLine]) -> String {
    let mut out = String::new();
    let mut current: Option<Section> = None;

    for line in lines {
        if current != Some(line.section) {
            if current.is_some() {
                out.push_str("\n\n");
            }
            out.push_str(line.section.title());
            current = Some(line.section);
        }
        out.push('\n');
        out.push_str(LINE_PREFIX);
        out.push_str(line.text.trim());
    }

    out
}

/// Render the snapshot text for `settings`
pub fn format(settings: &EmulationSettings) -> String {
    render(&snapshot_lines(settings))
}
