use std::path::PathBuf;

use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, RefreshKind, System, UpdateKind};

use crate::error::Result;

/// Raw per-process data captured once per tick.
///
/// Records are ephemeral: each capture rebuilds the full list and nothing
/// is carried across ticks beyond the CPU-accounting baseline kept inside
/// the sysinfo `System`.
#[derive(Debug, Clone)]
pub struct ProcessRecord {
    pub pid: u32,
    pub parent_pid: Option<u32>,
    /// OS-reported process name, used to resolve parent display names.
    pub name: String,
    /// Argument vector. Empty when the command line could not be read;
    /// such records can never be classified but stay in the snapshot so
    /// parent lookups span every listed process.
    pub cmd: Vec<String>,
    /// Seconds since the Unix epoch at process start.
    pub start_time_secs: u64,
    /// Working directory, `None` when inaccessible.
    pub cwd: Option<PathBuf>,
    /// Sampled for baseline consistency; not rendered.
    pub cpu_usage_percent: f32,
}

/// Enumerates OS processes via sysinfo.
pub struct SnapshotSource {
    system: System,
    refresh_kind: ProcessRefreshKind,
}

impl SnapshotSource {
    pub fn new() -> Self {
        let refresh_kind = ProcessRefreshKind::nothing()
            .with_cpu()
            .with_cmd(UpdateKind::Always)
            .with_cwd(UpdateKind::Always);

        let system =
            System::new_with_specifics(RefreshKind::nothing().with_processes(refresh_kind));

        Self {
            system,
            refresh_kind,
        }
    }

    /// Take a throwaway scan so per-process CPU accounting has a baseline.
    ///
    /// The first CPU sample for a given process always reads 0; after this
    /// call the next capture yields meaningful numbers.
    pub fn warm_up(&mut self) {
        self.refresh();
    }

    /// Capture every process visible to the current user.
    ///
    /// A process that vanishes between being listed and being inspected is
    /// pruned by the refresh. Fields that cannot be read degrade
    /// individually: the command line to an empty vector, the working
    /// directory to `None`.
    pub fn capture(&mut self) -> Result<Vec<ProcessRecord>> {
        self.refresh();

        let records = self
            .system
            .processes()
            .values()
            .map(|proc| ProcessRecord {
                pid: proc.pid().as_u32(),
                parent_pid: proc.parent().map(|pid| pid.as_u32()),
                name: proc.name().to_string_lossy().to_string(),
                cmd: proc
                    .cmd()
                    .iter()
                    .map(|arg| arg.to_string_lossy().to_string())
                    .collect(),
                start_time_secs: proc.start_time(),
                cwd: proc.cwd().map(|path| path.to_path_buf()),
                cpu_usage_percent: proc.cpu_usage(),
            })
            .collect();

        Ok(records)
    }

    fn refresh(&mut self) {
        self.system
            .refresh_processes_specifics(ProcessesToUpdate::All, true, self.refresh_kind);
    }
}

impl Default for SnapshotSource {
    fn default() -> Self {
        Self::new()
    }
}
