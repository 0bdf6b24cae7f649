use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::Immich,
    needles: &["immich"],
    extract,
    secrets: &[],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Version", facts.env("IMMICH_VERSION"))
        .number("Port", facts.host_port("2283/tcp"))
        .text("DB Host", facts.env_any(&["DB_HOST", "DB_HOSTNAME"]))
        .text("DB Port", facts.env("DB_PORT"))
        .text("Redis Host", facts.env_any(&["REDIS_HOST", "REDIS_HOSTNAME"]))
        .text("Redis Port", facts.env("REDIS_PORT"))
        .build()
}
