use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::Jellyfin,
    needles: &["jellyfin"],
    extract,
    secrets: &[],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Published URL", facts.env("JELLYFIN_PublishedServerUrl"))
        .number("Port", facts.host_port("8096/tcp"))
        .build()
}
