use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::Elasticsearch,
    needles: &["elasticsearch"],
    extract,
    secrets: &[],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Version", facts.env("ELASTIC_VERSION"))
        .text("Cluster", facts.env("cluster.name"))
        .text("Discovery", facts.env("discovery.type"))
        .number("Port", facts.host_port("9200/tcp"))
        .build()
}
