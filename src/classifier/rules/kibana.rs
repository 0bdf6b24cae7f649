use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::Kibana,
    needles: &["kibana"],
    extract,
    secrets: &[],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Version", facts.env("KIBANA_VERSION"))
        .text("Elasticsearch", facts.env("ELASTICSEARCH_HOSTS"))
        .number("Port", facts.host_port("5601/tcp"))
        .build()
}
