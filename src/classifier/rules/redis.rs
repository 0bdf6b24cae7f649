use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::Redis,
    needles: &["redis"],
    extract,
    secrets: &["Password"],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .number("Port", facts.host_port("6379/tcp"))
        .text("Password", facts.env("REDIS_PASSWORD"))
        .build()
}
