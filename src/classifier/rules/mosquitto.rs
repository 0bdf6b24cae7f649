use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::Mosquitto,
    needles: &["mosquitto"],
    extract,
    secrets: &[],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .number("Port", facts.host_port("1883/tcp"))
        .number("WebSocket Port", facts.host_port("9001/tcp"))
        .build()
}
