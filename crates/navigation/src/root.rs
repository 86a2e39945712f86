use shared::{Blade, BladeId, BladeProps, Process};

/// Root blade shown when `process` becomes active. Total over `Process`.
pub fn root_blade_for(process: Process) -> Blade {
    let (title, props) = match process {
        Process::Staging => ("Changes", BladeProps::StagingChanges),
        Process::Topology => ("Topology", BladeProps::TopologyGraph),
    };

    Blade {
        id: BladeId::root(),
        title: title.to_string(),
        props,
    }
}
