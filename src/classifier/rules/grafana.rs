use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::Grafana,
    needles: &["grafana"],
    extract,
    secrets: &[],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Version", facts.env("GF_VERSION"))
        .text("Admin User", facts.env("GF_SECURITY_ADMIN_USER"))
        .number("Port", facts.host_port("3000/tcp"))
        .build()
}
