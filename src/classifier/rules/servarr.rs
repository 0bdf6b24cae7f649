// Sonarr and Radarr share one image layout and differ only in their default port.

use super::prelude::*;

pub(crate) const SONARR: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::Sonarr,
    needles: &["sonarr"],
    extract: extract_sonarr,
    secrets: &[],
};

pub(crate) const RADARR: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::Radarr,
    needles: &["radarr"],
    extract: extract_radarr,
    secrets: &[],
};

fn extract_sonarr(facts: &Facts<'_>) -> DetailFields {
    details(facts, "8989/tcp")
}

fn extract_radarr(facts: &Facts<'_>) -> DetailFields {
    details(facts, "7878/tcp")
}

fn details(facts: &Facts<'_>, port_key: &str) -> DetailFields {
    DetailsBuilder::new()
        .text("Version", facts.env("VERSION"))
        .number("Port", facts.host_port(port_key))
        .build()
}
